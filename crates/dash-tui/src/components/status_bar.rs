// crates/dash-tui/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = if let Some(message) = &app.status_message {
        vec![Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )]
    } else {
        vec![
            Span::styled("[1-4]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" View "),
            Span::styled("[Tab]", Style::default().fg(Color::Blue)),
            Span::raw(" Next "),
            Span::styled("[R]", Style::default().fg(Color::Green)),
            Span::raw("efresh "),
            Span::styled("[C]", Style::default().fg(Color::Magenta)),
            Span::raw("lose Order "),
            Span::styled("[Q]", Style::default().fg(Color::Gray)),
            Span::raw("uit"),
        ]
    };

    if app.serving_fallback() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "fixture data - server unreachable",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(at) = app.last_update {
        spans.push(Span::styled(
            format!("  updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
