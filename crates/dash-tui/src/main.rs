// crates/dash-tui/src/main.rs

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dash_client::{ApiClient, ApiConfig};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;

use dash_tui::app::App;
use dash_tui::config::ClientConfig;
use dash_tui::data::DataFeed;
use dash_tui::routes::{self, ROUTES};
use dash_tui::ui;

#[derive(Parser)]
#[clap(name = "dash-tui")]
#[clap(about = "Terminal dashboard for the trading account")]
struct Cli {
    /// API base URL (overrides the config file)
    #[clap(short, long)]
    server: Option<String>,

    /// Route to open at startup: "/", "/orders", "/history" or "/statistics"
    #[clap(short, long)]
    route: Option<String>,

    /// Optional TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt::init();
    }

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    let path = cli.route.unwrap_or_else(|| config.default_route.clone());
    let Some(view) = routes::resolve(&path) else {
        let registered: Vec<&str> = ROUTES.iter().map(|r| r.path).collect();
        bail!(
            "unknown route {path:?}; registered routes: {}",
            registered.join(", ")
        );
    };

    let client = ApiClient::new(ApiConfig::with_base_url(config.server_url.clone()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let app = App::new(view);
    let res = run_app(&mut terminal, app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: ApiClient,
) -> Result<()> {
    // Channels between the UI loop and the data feed
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    app.set_request_sender(request_tx);

    let feed = DataFeed::new(client, event_tx);
    let feed_handle = tokio::spawn(feed.run(request_rx));

    // Populate the starting view
    app.refresh();

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key.code);
            }
        }

        // Apply whatever the data feed delivered meanwhile
        while let Ok(ev) = event_rx.try_recv() {
            app.handle_data_event(ev);
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    feed_handle.abort();
    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    if app.show_help {
        match code {
            KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.show_help = false;
            }
            _ => {}
        }
        return;
    }

    match code {
        // Global hotkeys
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.goto(ROUTES[idx].view);
        }
        KeyCode::Tab => {
            app.next_view();
        }
        KeyCode::BackTab => {
            app.prev_view();
        }

        // Data actions
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh();
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.close_selected_order();
        }

        // Selection
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
        }

        KeyCode::F(1) | KeyCode::Char('?') => {
            app.toggle_help();
        }

        _ => {}
    }
}
