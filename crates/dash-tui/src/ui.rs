// crates/dash-tui/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::components::{
    dashboard::draw_dashboard, help::draw_help, history::draw_history, orders::draw_orders,
    statistics::draw_statistics, status_bar::draw_status_bar,
};
use crate::routes::{self, View, ROUTES};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // View content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    match app.view {
        View::Dashboard => draw_dashboard(f, chunks[1], app),
        View::Orders => draw_orders(f, chunks[1], app),
        View::History => draw_history(f, chunks[1], app),
        View::Statistics => draw_statistics(f, chunks[1], app),
    }

    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 60, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    // Left: the route tabs
    let titles: Vec<&str> = ROUTES.iter().map(|r| r.name).collect();
    let tabs = Tabs::new(titles)
        .select(routes::index_of(app.view))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, header_chunks[0]);

    // Right: connection status
    let (symbol, color) = if app.connected {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };
    let right_text = Line::from(vec![
        Span::raw("Server "),
        Span::styled(symbol, Style::default().fg(color)),
        Span::raw("  [F1]Help"),
    ]);
    let right = Paragraph::new(right_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right, header_chunks[1]);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
