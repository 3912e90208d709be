// crates/dash-tui/src/components/mod.rs

pub mod dashboard;
pub mod help;
pub mod history;
pub mod orders;
pub mod statistics;
pub mod status_bar;

use ratatui::style::{Color, Style};

/// Green for profit, red for loss, default for flat.
pub(crate) fn pnl_style(pnl: f64) -> Style {
    if pnl > 0.0 {
        Style::default().fg(Color::Green)
    } else if pnl < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

/// Block title with a marker when the slot holds fixture data.
pub(crate) fn slot_title(base: &str, live: bool) -> String {
    if live {
        format!(" {base} ")
    } else {
        format!(" {base} (fixture data) ")
    }
}
