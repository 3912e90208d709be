// crates/dash-tui/src/components/dashboard.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::components::{pnl_style, slot_title};

pub fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Account summary
            Constraint::Min(5),    // Open orders digest
        ])
        .split(area);

    draw_account(f, chunks[0], app);
    draw_orders_digest(f, chunks[1], app);
}

fn draw_account(f: &mut Frame, area: Rect, app: &App) {
    let (lines, title) = match &app.account {
        Some(fetched) => {
            let account = &fetched.value;
            let floating = account.floating_pnl();
            let lines = vec![
                Line::from(vec![
                    Span::raw("Balance:      "),
                    Span::styled(
                        format!("{:>12.2}", account.balance),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Equity:       "),
                    Span::raw(format!("{:>12.2}", account.equity)),
                ]),
                Line::from(vec![
                    Span::raw("Free Margin:  "),
                    Span::raw(format!("{:>12.2}", account.free_margin)),
                ]),
                Line::from(vec![
                    Span::raw("Floating P&L: "),
                    Span::styled(format!("{:>+12.2}", floating), pnl_style(floating)),
                ]),
            ];
            (lines, slot_title("Account", fetched.is_live()))
        }
        None => (
            vec![Line::from("loading account...")],
            " Account ".to_string(),
        ),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn draw_orders_digest(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["ID", "Sym", "Type", "Vol", "P&L", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let (rows, title) = match &app.orders {
        Some(fetched) => {
            let rows: Vec<Row> = fetched
                .value
                .iter()
                .map(|order| {
                    Row::new(vec![
                        Cell::from(order.id.clone()),
                        Cell::from(order.symbol.clone()),
                        Cell::from(order.side.as_str()),
                        Cell::from(format!("{:.2}", order.volume)),
                        Cell::from(format!("{:+.2}", order.pnl)).style(pnl_style(order.pnl)),
                        Cell::from(order.status.as_str()),
                    ])
                })
                .collect();
            (rows, slot_title("Open Orders", fetched.is_live()))
        }
        None => (Vec::new(), " Open Orders ".to_string()),
    };

    let widths = [
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Min(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(table, area);
}
