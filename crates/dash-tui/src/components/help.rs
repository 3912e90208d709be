// crates/dash-tui/src/components/help.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD));

    let help_items = vec![
        ListItem::new(Line::from(vec![key("1", Color::Cyan), Span::raw(" - Dashboard view")])),
        ListItem::new(Line::from(vec![key("2", Color::Cyan), Span::raw(" - Orders view")])),
        ListItem::new(Line::from(vec![key("3", Color::Cyan), Span::raw(" - History view")])),
        ListItem::new(Line::from(vec![key("4", Color::Cyan), Span::raw(" - Statistics view")])),
        ListItem::new(Line::from(vec![key("Tab / Shift+Tab", Color::Blue), Span::raw(" - Cycle views")])),
        ListItem::new(Line::from(vec![key("R/r", Color::Green), Span::raw(" - Refresh current view")])),
        ListItem::new(Line::from(vec![key("↑/k  ↓/j", Color::White), Span::raw(" - Move order selection")])),
        ListItem::new(Line::from(vec![key("C/c", Color::Magenta), Span::raw(" - Close selected order")])),
        ListItem::new(Line::from(vec![key("F1 / ?", Color::Gray), Span::raw(" - Toggle this help")])),
        ListItem::new(Line::from(vec![key("Q/q", Color::Red), Span::raw(" - Quit")])),
    ];

    let help_list = List::new(help_items).block(
        Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(help_list, area);
}
