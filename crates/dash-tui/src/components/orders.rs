// crates/dash-tui/src/components/orders.rs

use dash_core::order::{OrderSide, OrderStatus};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::components::{pnl_style, slot_title};

pub fn draw_orders(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        "Time", "ID", "Ch", "Symbol", "Type", "Vol", "Entry", "SL", "TP", "P&L", "Status",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let (rows, title) = match &app.orders {
        Some(fetched) => {
            let rows: Vec<Row> = fetched
                .value
                .iter()
                .enumerate()
                .map(|(i, order)| {
                    let style = if i == app.selected_order {
                        Style::default().bg(Color::DarkGray)
                    } else {
                        Style::default()
                    };

                    let side_style = match order.side {
                        OrderSide::Buy => style.fg(Color::Green),
                        OrderSide::Sell => style.fg(Color::Red),
                    };

                    let status_style = match order.status {
                        OrderStatus::Open => style.fg(Color::Blue),
                        OrderStatus::Pending => style.fg(Color::Yellow),
                        OrderStatus::Closed => style.fg(Color::DarkGray),
                    };

                    Row::new(vec![
                        Cell::from(order.timestamp.format("%H:%M").to_string()).style(style),
                        Cell::from(order.id.clone()).style(style),
                        Cell::from(order.channel_id.to_string()).style(style),
                        Cell::from(order.symbol.clone()).style(style),
                        Cell::from(order.side.as_str()).style(side_style),
                        Cell::from(format!("{:.2}", order.volume)).style(style),
                        Cell::from(format!("{:.2}", order.entry_price)).style(style),
                        Cell::from(format!("{:.2}", order.stop_loss)).style(style),
                        Cell::from(format!("{:.2}", order.take_profit)).style(style),
                        Cell::from(format!("{:+.2}", order.pnl)).style(pnl_style(order.pnl)),
                        Cell::from(order.status.as_str()).style(status_style),
                    ])
                })
                .collect();
            (rows, slot_title("Open Orders", fetched.is_live()))
        }
        None => (Vec::new(), " Open Orders ".to_string()),
    };

    let widths = [
        Constraint::Length(6),  // Time
        Constraint::Length(8),  // ID
        Constraint::Length(3),  // Channel
        Constraint::Length(8),  // Symbol
        Constraint::Length(5),  // Side
        Constraint::Length(6),  // Volume
        Constraint::Length(9),  // Entry
        Constraint::Length(9),  // SL
        Constraint::Length(9),  // TP
        Constraint::Length(9),  // P&L
        Constraint::Min(7),     // Status
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(table, area);
}
