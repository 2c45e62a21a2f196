//! Weather dashboard rendering
//!
//! Renders the main screen: the search bar, one content pane per view state
//! (welcome, loading, error, or a loaded forecast with current conditions,
//! five-day cards, and the hourly breakdown), and the key-hint footer.

use chrono::{Local, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, ViewState};
use crate::data::{DailyEntry, WeatherKind, WeatherReport};
use crate::forecast;

/// Weather kind to icon mapping
fn weather_icon(kind: WeatherKind) -> &'static str {
    match kind {
        WeatherKind::Clear => "\u{2600}",        // ☀
        WeatherKind::MainlyClear => "\u{1F324}", // 🌤
        WeatherKind::PartlyCloudy => "\u{26C5}", // ⛅
        WeatherKind::Overcast => "\u{2601}",     // ☁
        WeatherKind::Fog => "\u{1F32B}",         // 🌫
        WeatherKind::Drizzle => "\u{1F326}",     // 🌦
        WeatherKind::Rain => "\u{1F327}",        // 🌧
        WeatherKind::Snow => "\u{2744}",         // ❄
        WeatherKind::Thunderstorm => "\u{26C8}", // ⛈
        WeatherKind::Unknown => "?",
    }
}

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(temp: f64) -> Color {
    if temp >= 30.0 {
        Color::Red
    } else if temp >= 25.0 {
        Color::LightRed
    } else if temp >= 20.0 {
        Color::Yellow
    } else if temp >= 15.0 {
        Color::Green
    } else if temp >= 10.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Renders the dashboard screen
///
/// The layout is a search bar on top, the content pane for the current
/// view state in the middle, and a one-line key-hint footer at the bottom.
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Content pane
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_search_bar(frame, app, chunks[0]);

    match &app.view {
        ViewState::Idle => render_welcome(frame, chunks[1]),
        ViewState::Loading => render_loading(frame, chunks[1]),
        ViewState::Error(message) => render_error(frame, message, chunks[1]),
        ViewState::Loaded(report) => render_report(frame, report, chunks[1]),
    }

    render_footer(frame, chunks[2], app);
}

/// Renders the search bar, highlighted while it has focus
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;

    let (text, text_style) = if editing {
        // A trailing block stands in for the cursor
        (
            format!("{}\u{2588}", app.search_input),
            Style::default().fg(Color::White),
        )
    } else if app.search_input.is_empty() {
        (
            "Press / to search for a city".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.search_input.clone(), Style::default().fg(Color::Gray))
    };

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(Span::styled(text, text_style)).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the welcome message shown before anything is requested
fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(
            "Search for a city or use your current location to get the weather forecast.",
        ),
    ];

    let block = Block::default()
        .title(" Weather Forecast ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Renders the loading indicator
fn render_loading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Weather Forecast ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Renders a failed fetch as its status-line message
fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
    ];

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Renders a loaded forecast: current conditions, the five-day window,
/// and the hourly breakdown for the selected day
fn render_report(frame: &mut Frame, report: &WeatherReport, area: Rect) {
    let today = Local::now().date_naive();
    let window = forecast::five_day_window(&report.daily, today);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Current conditions
            Constraint::Length(6), // Five-day cards
            Constraint::Min(0),    // Hourly breakdown
        ])
        .split(area);

    render_current(frame, report, chunks[0]);
    render_daily_cards(frame, report, window, chunks[1]);
    render_hourly(frame, report, chunks[2]);
}

/// Renders the current conditions panel
fn render_current(frame: &mut Frame, report: &WeatherReport, area: Rect) {
    let kind = WeatherKind::from_code(report.current.weather_code);

    let lines = vec![
        Line::from(vec![
            Span::raw(weather_icon(kind)),
            Span::raw(" "),
            Span::styled(
                kind.label(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Temperature: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}\u{00B0}C", report.current.temperature),
                Style::default()
                    .fg(temperature_color(report.current.temperature))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Wind: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1} km/h", report.current.wind_speed),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let block = Block::default()
        .title(format!(" Current Weather in {} ", report.place))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders one card per day of the five-day window
///
/// Card titles carry the jump-key digit; the selected day's card is
/// highlighted.
fn render_daily_cards(
    frame: &mut Frame,
    report: &WeatherReport,
    window: &[DailyEntry],
    area: Rect,
) {
    if window.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = window
        .iter()
        .map(|_| Constraint::Ratio(1, window.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, entry) in window.iter().enumerate() {
        let selected = report.selected_day == Some(entry.date);
        let kind = WeatherKind::from_code(entry.weather_code);

        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let lines = vec![
            Line::from(Span::styled(
                forecast::day_label(entry.date, index),
                label_style,
            )),
            Line::from(weather_icon(kind)),
            Line::from(vec![
                Span::styled(
                    format!("{}\u{00B0}", entry.temp_max.round() as i32),
                    Style::default().fg(Color::LightRed),
                ),
                Span::raw(" / "),
                Span::styled(
                    format!("{}\u{00B0}", entry.temp_min.round() as i32),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(Span::styled(kind.label(), Style::default().fg(Color::Gray))),
        ];

        let block = Block::default()
            .title(format!(" {} ", index + 1))
            .borders(Borders::ALL)
            .border_style(border_style);
        let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, slots[index]);
    }
}

/// Renders the hourly breakdown for the selected day, six entries per row
fn render_hourly(frame: &mut Frame, report: &WeatherReport, area: Rect) {
    let Some(day) = report.selected_day else {
        return;
    };

    let entries = forecast::hourly_for_day(&report.hourly, day);
    if entries.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for chunk in entries.chunks(6) {
        let mut spans: Vec<Span> = Vec::new();
        for entry in chunk {
            let kind = WeatherKind::from_code(entry.weather_code);
            spans.push(Span::styled(
                entry.time.format("%H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(weather_icon(kind)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{:>3}\u{00B0}C", entry.temperature.round() as i32),
                Style::default().fg(temperature_color(entry.temperature)),
            ));
            spans.push(Span::raw("   "));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(format!(" Hourly for {} ", day.format("%A, %b %-d")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the key hints at the bottom of the screen with data freshness
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = if app.input_mode == InputMode::Editing {
        vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" Search  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" Done"),
        ]
    } else {
        vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(" Search  "),
            Span::styled("m", Style::default().fg(Color::Yellow)),
            Span::raw(" My Location  "),
            Span::styled("\u{2190}/\u{2192}", Style::default().fg(Color::Yellow)),
            Span::raw(" Day  "),
            Span::styled("1-5", Style::default().fg(Color::Yellow)),
            Span::raw(" Jump  "),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::raw(" Help  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ]
    };

    // Add data freshness indicator
    if let ViewState::Loaded(report) = &app.view {
        let elapsed = Utc::now() - report.fetched_at;
        let mins_ago = elapsed.num_minutes();
        let freshness_text = if mins_ago < 1 {
            " \u{2502} Data: just now".to_string()
        } else if mins_ago < 60 {
            format!(" \u{2502} Data: {}m ago", mins_ago)
        } else {
            format!(" \u{2502} Data: {}h ago", elapsed.num_hours())
        };
        spans.push(Span::styled(
            freshness_text,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
