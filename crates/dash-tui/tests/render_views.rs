// crates/dash-tui/tests/render_views.rs
//
// Navigation smoke tests: every registered path must resolve and its
// view must render into a test backend without errors.

use dash_client::Fetched;
use dash_core::fixtures;
use dash_tui::app::App;
use dash_tui::data::DataEvent;
use dash_tui::routes::{resolve, View, ROUTES};
use dash_tui::ui;
use ratatui::{backend::TestBackend, Terminal};

fn loaded_app(view: View) -> App {
    let mut app = App::new(view);
    app.handle_data_event(DataEvent::Account(Fetched::live(fixtures::account_info())));
    app.handle_data_event(DataEvent::Orders(Fetched::live(fixtures::open_orders())));
    app.handle_data_event(DataEvent::History(Fetched::live(fixtures::history())));
    app.handle_data_event(DataEvent::Statistics(Fetched::live(fixtures::statistics())));
    app.handle_data_event(DataEvent::Health(true));
    app
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(110, 32);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw succeeds");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn every_registered_path_renders_its_view() {
    for route in ROUTES {
        let view = resolve(route.path).expect("registered path resolves");
        let app = loaded_app(view);
        let screen = render(&app);
        assert!(
            screen.contains(route.name),
            "view for {} should show its tab title",
            route.path
        );
    }
}

#[test]
fn orders_view_shows_the_fixture_book() {
    let app = loaded_app(View::Orders);
    let screen = render(&app);
    assert!(screen.contains("ORD001"));
    assert!(screen.contains("ORD003"));
    assert!(screen.contains("PENDING"));
}

#[test]
fn history_view_shows_closed_trades() {
    let app = loaded_app(View::History);
    let screen = render(&app);
    assert!(screen.contains("HIS003"));
    assert!(screen.contains("GBPUSD"));
}

#[test]
fn statistics_view_shows_all_three_panels() {
    let app = loaded_app(View::Statistics);
    let screen = render(&app);
    assert!(screen.contains("Global"));
    assert!(screen.contains("channel1"));
    assert!(screen.contains("XAUUSD"));
}

#[test]
fn views_render_before_any_data_arrives() {
    for route in ROUTES {
        let app = App::new(resolve(route.path).unwrap());
        let screen = render(&app);
        assert!(screen.contains(route.name));
    }
}

#[test]
fn fallback_data_is_flagged_on_screen() {
    let mut app = App::new(View::Dashboard);
    app.handle_data_event(DataEvent::Account(Fetched::fallback(
        fixtures::account_info(),
    )));
    app.handle_data_event(DataEvent::Orders(Fetched::fallback(fixtures::open_orders())));
    let screen = render(&app);
    assert!(screen.contains("fixture data"));
}

#[test]
fn help_overlay_renders_on_top_of_a_view() {
    let mut app = loaded_app(View::Dashboard);
    app.toggle_help();
    let screen = render(&app);
    assert!(screen.contains("Keyboard Shortcuts"));
}
