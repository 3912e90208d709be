// crates/dash-tui/src/components/history.rs

use dash_core::order::OrderSide;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::components::{pnl_style, slot_title};

pub fn draw_history(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        "Closed", "ID", "Ch", "Symbol", "Type", "Vol", "Entry", "Exit", "P&L", "Held",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let (rows, title) = match &app.history {
        Some(fetched) => {
            let rows: Vec<Row> = fetched
                .value
                .iter()
                .map(|entry| {
                    let side_style = match entry.side {
                        OrderSide::Buy => Style::default().fg(Color::Green),
                        OrderSide::Sell => Style::default().fg(Color::Red),
                    };

                    Row::new(vec![
                        Cell::from(entry.close_time.format("%m-%d %H:%M").to_string()),
                        Cell::from(entry.id.clone()),
                        Cell::from(entry.channel_id.to_string()),
                        Cell::from(entry.symbol.clone()),
                        Cell::from(entry.side.as_str()).style(side_style),
                        Cell::from(format!("{:.2}", entry.volume)),
                        Cell::from(format!("{:.4}", entry.entry_price)),
                        Cell::from(format!("{:.4}", entry.exit_price)),
                        Cell::from(format!("{:+.2}", entry.pnl)).style(pnl_style(entry.pnl)),
                        Cell::from(format_duration(entry.duration_min)),
                    ])
                })
                .collect();
            (rows, slot_title("Trade History", fetched.is_live()))
        }
        None => (Vec::new(), " Trade History ".to_string()),
    };

    let widths = [
        Constraint::Length(12), // Close time
        Constraint::Length(8),  // ID
        Constraint::Length(3),  // Channel
        Constraint::Length(8),  // Symbol
        Constraint::Length(5),  // Side
        Constraint::Length(6),  // Volume
        Constraint::Length(10), // Entry
        Constraint::Length(10), // Exit
        Constraint::Length(9),  // P&L
        Constraint::Min(6),     // Time in market
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(table, area);
}

fn format_duration(minutes: i64) -> String {
    if minutes >= 60 {
        format!("{}h{:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}
