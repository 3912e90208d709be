// crates/dash-tui/src/components/statistics.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::components::{pnl_style, slot_title};

pub fn draw_statistics(f: &mut Frame, area: Rect, app: &App) {
    let Some(fetched) = &app.statistics else {
        let placeholder = Paragraph::new("loading statistics...")
            .block(Block::default().title(" Statistics ").borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    };
    let stats = &fetched.value;
    let live = fetched.is_live();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Global aggregates
            Constraint::Min(6),    // Channels | Symbols
        ])
        .split(area);

    let global = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Win Rate: "),
            Span::styled(
                format!("{:.0}%", stats.global.win_rate),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Avg R/R: "),
            Span::styled(
                format!("{:.1}", stats.global.avg_rr),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("    Signals: "),
            Span::raw(stats.global.total_signals.to_string()),
        ]),
    ])
    .block(
        Block::default()
            .title(slot_title("Global", live))
            .borders(Borders::ALL),
    );
    f.render_widget(global, chunks[0]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_channels(f, lower[0], app, live);
    draw_symbols(f, lower[1], app, live);
}

fn draw_channels(f: &mut Frame, area: Rect, app: &App, live: bool) {
    let header = Row::new(vec!["Channel", "Signals", "Win %", "R/R", "P&L", "Best", "Worst"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .statistics
        .as_ref()
        .map(|fetched| {
            fetched
                .value
                .channels
                .iter()
                .map(|(name, ch)| {
                    Row::new(vec![
                        Cell::from(name.clone()),
                        Cell::from(ch.total_signals.to_string()),
                        Cell::from(format!("{:.0}", ch.win_rate)),
                        Cell::from(format!("{:.1}", ch.avg_rr)),
                        Cell::from(format!("{:+.2}", ch.total_pnl)).style(pnl_style(ch.total_pnl)),
                        Cell::from(format!("{:+.2}", ch.best_trade)),
                        Cell::from(format!("{:+.2}", ch.worst_trade)),
                    ])
                })
                .collect()
        })
        .unwrap_or_default();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(slot_title("Channels", live))
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}

fn draw_symbols(f: &mut Frame, area: Rect, app: &App, live: bool) {
    let header = Row::new(vec!["Symbol", "Trades", "Win %", "R/R", "P&L"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .statistics
        .as_ref()
        .map(|fetched| {
            fetched
                .value
                .symbols
                .iter()
                .map(|s| {
                    Row::new(vec![
                        Cell::from(s.symbol.clone()),
                        Cell::from(s.total_trades.to_string()),
                        Cell::from(format!("{:.0}", s.win_rate)),
                        Cell::from(format!("{:.1}", s.avg_rr)),
                        Cell::from(format!("{:+.2}", s.total_pnl)).style(pnl_style(s.total_pnl)),
                    ])
                })
                .collect()
        })
        .unwrap_or_default();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Min(9),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(slot_title("Symbols", live))
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}
