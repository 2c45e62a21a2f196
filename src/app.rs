//! Application state management for Skycast
//!
//! This module contains the main application state, handling keyboard input,
//! fetch sequencing, and day selection within the five-day window.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cli::StartupConfig;
use crate::data::WeatherReport;
use crate::fetch::{FetchOutcome, FetchRequest};
use crate::forecast;

/// What the content area is currently showing
///
/// One value, replaced wholesale on every transition, so the view can never
/// mix loading indicators, error text, and stale weather data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch failed; holds the status-line message
    Error(String),
    /// A forecast is loaded
    Loaded(WeatherReport),
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive navigation
    Browse,
    /// Keys edit the search field
    Editing,
}

/// Main application struct managing state and input
pub struct App {
    /// Current view content
    pub view: ViewState,
    /// Whether keys navigate or edit the search field
    pub input_mode: InputMode,
    /// Contents of the search field
    pub search_input: String,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Sequence number of the most recently issued request
    request_seq: u64,
    /// Request issued but not yet handed to a background task
    pending_fetch: Option<(u64, FetchRequest)>,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self {
            view: ViewState::Idle,
            input_mode: InputMode::Browse,
            search_input: String::new(),
            should_quit: false,
            show_help: false,
            request_seq: 0,
            pending_fetch: None,
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// A city named on the command line is searched immediately; otherwise
    /// the app starts with a position lookup, the same forecast a fresh
    /// launch would show in a browser.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();

        match config.initial_query {
            Some(query) => app.search(&query),
            None => app.use_my_location(),
        }

        app
    }

    /// Issues a search for a city name
    ///
    /// Empty or all-whitespace queries are ignored.
    pub fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.request_fetch(FetchRequest::Search(query.to_string()));
    }

    /// Issues a position lookup for the machine's own location
    pub fn use_my_location(&mut self) {
        self.request_fetch(FetchRequest::Locate);
    }

    /// Records a request under a fresh sequence number and shows the
    /// loading state
    fn request_fetch(&mut self, request: FetchRequest) {
        self.request_seq += 1;
        self.pending_fetch = Some((self.request_seq, request));
        self.view = ViewState::Loading;
    }

    /// Hands the most recent unspawned request to the caller
    ///
    /// A request issued while an older one was still pending replaces it;
    /// only the newest is ever spawned.
    pub fn take_pending_fetch(&mut self) -> Option<(u64, FetchRequest)> {
        self.pending_fetch.take()
    }

    /// Applies a finished fetch to the view
    ///
    /// Outcomes from superseded requests are discarded: only the sequence
    /// number of the latest issued request may change what is shown.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.request_seq {
            return;
        }

        self.view = match outcome.result {
            Ok(report) => ViewState::Loaded(report),
            Err(err) => ViewState::Error(err.to_string()),
        };
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// Browse mode:
    /// - `q` or `Esc`: Quit the application
    /// - `/`: Edit the search field
    /// - `m`: Fetch the forecast for the machine's own location
    /// - `Left`/`h` and `Right`/`l`: Step the selected day through the window
    /// - `1`-`5`: Jump to a window slot
    /// - `?`: Toggle the help overlay
    ///
    /// Editing mode:
    /// - `Enter`: Submit the search field
    /// - `Esc`: Back to browse mode, keeping the field
    /// - `Backspace`: Delete the last character
    ///
    /// `Ctrl+C` quits from anywhere.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {} // Ignore other keys when help is shown
            }
            return;
        }

        match self.input_mode {
            InputMode::Editing => match key_event.code {
                KeyCode::Enter => {
                    self.submit_search();
                }
                KeyCode::Esc => {
                    self.input_mode = InputMode::Browse;
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                }
                KeyCode::Char(c) => {
                    if !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    {
                        self.search_input.push(c);
                    }
                }
                _ => {}
            },
            InputMode::Browse => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Editing;
                }
                KeyCode::Char('m') => {
                    self.use_my_location();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.select_prev_day();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.select_next_day();
                }
                KeyCode::Char(c @ '1'..='5') => {
                    self.select_day_slot((c as u8 - b'1') as usize);
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Submits the search field as a query
    ///
    /// Empty input stays in editing mode and issues nothing.
    fn submit_search(&mut self) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.input_mode = InputMode::Browse;
        self.search(&query);
    }

    /// Selects the next day in the window, wrapping at the end
    pub fn select_next_day(&mut self) {
        self.step_selected_day(1, Local::now().date_naive());
    }

    /// Selects the previous day in the window, wrapping at the start
    pub fn select_prev_day(&mut self) {
        self.step_selected_day(-1, Local::now().date_naive());
    }

    /// Selects the window slot with the given index, if it exists
    pub fn select_day_slot(&mut self, slot: usize) {
        self.select_day_slot_on(slot, Local::now().date_naive());
    }

    /// Moves the selected day `step` slots through the five-day window,
    /// wrapping at both ends
    fn step_selected_day(&mut self, step: isize, today: NaiveDate) {
        let ViewState::Loaded(report) = &mut self.view else {
            return;
        };

        let window = forecast::five_day_window(&report.daily, today);
        if window.is_empty() {
            return;
        }

        let len = window.len() as isize;
        let current = report
            .selected_day
            .and_then(|day| window.iter().position(|entry| entry.date == day))
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let date = window[next].date;

        report.selected_day = Some(date);
    }

    /// Selects the window slot with the given index, on the given day
    fn select_day_slot_on(&mut self, slot: usize, today: NaiveDate) {
        let ViewState::Loaded(report) = &mut self.view else {
            return;
        };

        let window = forecast::five_day_window(&report.daily, today);
        if slot >= window.len() {
            return;
        }
        let date = window[slot].date;

        report.selected_day = Some(date);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CurrentConditions, DailyEntry};
    use crate::fetch::FetchError;
    use chrono::{Duration, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// A loaded report with `len` consecutive days starting at `start`
    fn report_with_days(start: NaiveDate, len: usize, selected: Option<NaiveDate>) -> WeatherReport {
        WeatherReport {
            place: "Testville".to_string(),
            current: CurrentConditions {
                temperature: 20.0,
                wind_speed: 8.0,
                weather_code: 1,
            },
            daily: (0..len)
                .map(|i| DailyEntry {
                    date: start + Duration::days(i as i64),
                    temp_min: 10.0,
                    temp_max: 20.0,
                    weather_code: 1,
                })
                .collect(),
            hourly: Vec::new(),
            selected_day: selected,
            fetched_at: Utc::now(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========================================================================
    // Initial State Tests
    // ========================================================================

    #[test]
    fn test_initial_state_is_idle() {
        let app = App::new();
        assert_eq!(app.view, ViewState::Idle);
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.search_input.is_empty());
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert!(app.pending_fetch.is_none());
    }

    #[test]
    fn test_default_creates_same_as_new() {
        let app1 = App::new();
        let app2 = App::default();

        assert_eq!(app1.view, app2.view);
        assert_eq!(app1.input_mode, app2.input_mode);
        assert_eq!(app1.should_quit, app2.should_quit);
    }

    #[test]
    fn test_startup_config_with_city_issues_search() {
        let config = StartupConfig {
            initial_query: Some("new york".to_string()),
        };
        let mut app = App::with_startup_config(config);

        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(
            app.take_pending_fetch(),
            Some((1, FetchRequest::Search("new york".to_string())))
        );
    }

    #[test]
    fn test_startup_config_without_city_issues_position_lookup() {
        let config = StartupConfig {
            initial_query: None,
        };
        let mut app = App::with_startup_config(config);

        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(app.take_pending_fetch(), Some((1, FetchRequest::Locate)));
    }

    // ========================================================================
    // Search Request Tests
    // ========================================================================

    #[test]
    fn test_search_issues_request_and_shows_loading() {
        let mut app = App::new();

        app.search("Paris");

        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(
            app.take_pending_fetch(),
            Some((1, FetchRequest::Search("Paris".to_string())))
        );
    }

    #[test]
    fn test_search_trims_surrounding_whitespace() {
        let mut app = App::new();

        app.search("  Paris  ");

        assert_eq!(
            app.take_pending_fetch(),
            Some((1, FetchRequest::Search("Paris".to_string())))
        );
    }

    #[test]
    fn test_empty_search_is_a_noop() {
        let mut app = App::new();

        app.search("");
        app.search("   ");

        assert_eq!(app.view, ViewState::Idle);
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn test_newer_request_replaces_pending_one() {
        let mut app = App::new();

        app.search("Paris");
        app.search("Tokyo");

        // Only the newest request is ever handed out
        assert_eq!(
            app.take_pending_fetch(),
            Some((2, FetchRequest::Search("Tokyo".to_string())))
        );
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn test_take_pending_fetch_consumes_the_request() {
        let mut app = App::new();
        app.use_my_location();

        assert!(app.take_pending_fetch().is_some());
        assert!(app.take_pending_fetch().is_none());
    }

    // ========================================================================
    // Fetch Outcome Tests
    // ========================================================================

    #[test]
    fn test_successful_outcome_loads_report() {
        let mut app = App::new();
        app.search("Paris");

        let report = report_with_days(day(2024, 7, 15), 5, Some(day(2024, 7, 15)));
        app.apply_fetch(FetchOutcome {
            seq: 1,
            result: Ok(report.clone()),
        });

        assert_eq!(app.view, ViewState::Loaded(report));
    }

    #[test]
    fn test_failed_outcome_shows_message_and_nothing_else() {
        let mut app = App::new();
        app.search("Atlantis");

        app.apply_fetch(FetchOutcome {
            seq: 1,
            result: Err(FetchError::CityNotFound),
        });

        // The whole view is the message: no report, no loading flag
        assert_eq!(
            app.view,
            ViewState::Error("City not found. Please try another search.".to_string())
        );
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut app = App::new();

        app.search("Paris");
        app.search("Tokyo");

        // The Paris fetch finishing late must not overwrite anything
        let stale = report_with_days(day(2024, 7, 15), 5, None);
        app.apply_fetch(FetchOutcome {
            seq: 1,
            result: Ok(stale),
        });
        assert_eq!(app.view, ViewState::Loading);

        let fresh = report_with_days(day(2024, 7, 16), 5, Some(day(2024, 7, 16)));
        app.apply_fetch(FetchOutcome {
            seq: 2,
            result: Ok(fresh.clone()),
        });
        assert_eq!(app.view, ViewState::Loaded(fresh));
    }

    #[test]
    fn test_stale_error_is_discarded_too() {
        let mut app = App::new();

        app.search("Paris");
        app.search("Tokyo");

        app.apply_fetch(FetchOutcome {
            seq: 1,
            result: Err(FetchError::CityNotFound),
        });

        assert_eq!(app.view, ViewState::Loading);
    }

    #[test]
    fn test_outcome_without_matching_request_is_ignored() {
        let mut app = App::new();

        app.apply_fetch(FetchOutcome {
            seq: 3,
            result: Err(FetchError::CityNotFound),
        });

        assert_eq!(app.view, ViewState::Idle);
    }

    #[test]
    fn test_failure_after_loaded_replaces_the_report() {
        let mut app = App::new();
        app.search("Paris");
        app.apply_fetch(FetchOutcome {
            seq: 1,
            result: Ok(report_with_days(day(2024, 7, 15), 5, None)),
        });
        assert!(matches!(app.view, ViewState::Loaded(_)));

        app.search("Atlantis");
        app.apply_fetch(FetchOutcome {
            seq: 2,
            result: Err(FetchError::CityNotFound),
        });

        // No stale forecast may survive next to the error
        assert_eq!(
            app.view,
            ViewState::Error("City not found. Please try another search.".to_string())
        );
    }

    // ========================================================================
    // Browse Mode Key Tests
    // ========================================================================

    #[test]
    fn test_q_quits_in_browse_mode() {
        let mut app = App::new();
        assert!(!app.should_quit);

        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_quits_in_browse_mode() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
        // And the character never reaches the search field
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn test_slash_enters_editing_mode() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_m_requests_position_lookup() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Char('m')));

        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(app.take_pending_fetch(), Some((1, FetchRequest::Locate)));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new();

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key(release);

        assert!(!app.should_quit);
    }

    // ========================================================================
    // Help Overlay Tests
    // ========================================================================

    #[test]
    fn test_question_mark_toggles_help() {
        let mut app = App::new();
        assert!(!app.show_help);

        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(!app.show_help);
    }

    #[test]
    fn test_help_intercepts_other_keys() {
        let mut app = App::new();
        app.show_help = true;

        app.handle_key(key_event(KeyCode::Char('/')));

        // The key was swallowed by the overlay
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.show_help);
    }

    #[test]
    fn test_q_closes_help_without_quitting() {
        let mut app = App::new();
        app.show_help = true;

        app.handle_key(key_event(KeyCode::Char('q')));

        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_esc_closes_help_without_quitting() {
        let mut app = App::new();
        app.show_help = true;

        app.handle_key(key_event(KeyCode::Esc));

        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    // ========================================================================
    // Editing Mode Key Tests
    // ========================================================================

    #[test]
    fn test_typed_characters_reach_the_search_field() {
        let mut app = App::new();
        app.handle_key(key_event(KeyCode::Char('/')));

        for c in "Oslo".chars() {
            app.handle_key(key_event(KeyCode::Char(c)));
        }

        assert_eq!(app.search_input, "Oslo");
    }

    #[test]
    fn test_q_is_just_a_character_while_editing() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;

        app.handle_key(key_event(KeyCode::Char('q')));

        assert!(!app.should_quit);
        assert_eq!(app.search_input, "q");
    }

    #[test]
    fn test_m_is_just_a_character_while_editing() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;

        app.handle_key(key_event(KeyCode::Char('m')));

        assert!(app.take_pending_fetch().is_none());
        assert_eq!(app.search_input, "m");
    }

    #[test]
    fn test_backspace_deletes_the_last_character() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;
        app.search_input = "Pariss".to_string();

        app.handle_key(key_event(KeyCode::Backspace));

        assert_eq!(app.search_input, "Paris");
    }

    #[test]
    fn test_esc_leaves_editing_and_keeps_the_field() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;
        app.search_input = "Par".to_string();

        app.handle_key(key_event(KeyCode::Esc));

        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.search_input, "Par");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_enter_submits_the_search_field() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;
        app.search_input = "Paris".to_string();

        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(
            app.take_pending_fetch(),
            Some((1, FetchRequest::Search("Paris".to_string())))
        );
        // The field keeps its text for the next edit
        assert_eq!(app.search_input, "Paris");
    }

    #[test]
    fn test_enter_with_empty_field_does_nothing() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;

        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.view, ViewState::Idle);
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn test_enter_with_whitespace_field_does_nothing() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;
        app.search_input = "   ".to_string();

        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.take_pending_fetch().is_none());
    }

    // ========================================================================
    // Day Selection Tests
    // ========================================================================

    #[test]
    fn test_next_day_steps_through_the_window() {
        let today = day(2024, 7, 15);
        let mut app = App::new();
        // 7 days starting 2 before today; the window is days 2..7
        app.view = ViewState::Loaded(report_with_days(day(2024, 7, 13), 7, Some(today)));

        app.step_selected_day(1, today);

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(day(2024, 7, 16)));
    }

    #[test]
    fn test_prev_day_wraps_to_window_end() {
        let today = day(2024, 7, 15);
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(day(2024, 7, 13), 7, Some(today)));

        app.step_selected_day(-1, today);

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        // Window covers Jul 15..=19; wrapping back from its start lands on its end
        assert_eq!(report.selected_day, Some(day(2024, 7, 19)));
    }

    #[test]
    fn test_next_day_wraps_to_window_start() {
        let today = day(2024, 7, 15);
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(day(2024, 7, 13), 7, Some(day(2024, 7, 19))));

        app.step_selected_day(1, today);

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(today));
    }

    #[test]
    fn test_slot_selection_jumps_directly() {
        let today = day(2024, 7, 15);
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(day(2024, 7, 13), 7, Some(today)));

        app.select_day_slot_on(3, today);

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(day(2024, 7, 18)));
    }

    #[test]
    fn test_slot_selection_out_of_range_is_a_noop() {
        let today = day(2024, 7, 15);
        let mut app = App::new();
        // Only 3 days in the series, so the window has 3 slots
        app.view = ViewState::Loaded(report_with_days(today, 3, Some(today)));

        app.select_day_slot_on(4, today);

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(today));
    }

    #[test]
    fn test_day_selection_ignored_without_a_report() {
        let mut app = App::new();

        app.step_selected_day(1, day(2024, 7, 15));
        assert_eq!(app.view, ViewState::Idle);

        app.view = ViewState::Loading;
        app.select_day_slot_on(0, day(2024, 7, 15));
        assert_eq!(app.view, ViewState::Loading);

        app.view = ViewState::Error("nope".to_string());
        app.step_selected_day(-1, day(2024, 7, 15));
        assert_eq!(app.view, ViewState::Error("nope".to_string()));
    }

    #[test]
    fn test_day_selection_ignored_with_empty_series() {
        let today = day(2024, 7, 15);
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(today, 0, None));

        app.step_selected_day(1, today);

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, None);
    }

    #[test]
    fn test_arrow_keys_drive_day_selection() {
        // Keys use the real clock, so build the series around it
        let today = Local::now().date_naive();
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(today, 5, Some(today)));

        app.handle_key(key_event(KeyCode::Right));

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(today + Duration::days(1)));
    }

    #[test]
    fn test_vim_keys_drive_day_selection() {
        let today = Local::now().date_naive();
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(today, 5, Some(today)));

        app.handle_key(key_event(KeyCode::Char('l')));
        app.handle_key(key_event(KeyCode::Char('h')));

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(today));
    }

    #[test]
    fn test_number_keys_jump_to_window_slots() {
        let today = Local::now().date_naive();
        let mut app = App::new();
        app.view = ViewState::Loaded(report_with_days(today, 5, Some(today)));

        app.handle_key(key_event(KeyCode::Char('3')));

        let ViewState::Loaded(report) = &app.view else {
            panic!("Expected a loaded view");
        };
        assert_eq!(report.selected_day, Some(today + Duration::days(2)));
    }
}
