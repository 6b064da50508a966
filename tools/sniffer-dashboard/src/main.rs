//! WiFi Sniffer Dashboard
//!
//! Terminal front end for the simulated scan service.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;
use tracing::{debug, info};

use sniffer_dashboard::api::{ScanApi, ScanApiClient};
use sniffer_dashboard::domain::{Action, App};
use sniffer_dashboard::ui;
use sniffer_telemetry::{init_logging, TelemetryConfig};

/// WiFi Sniffer Dashboard
#[derive(Parser, Debug)]
#[command(name = "sniffer-dashboard")]
#[command(about = "Terminal dashboard for simulated WiFi scan results")]
struct Args {
    /// Scan service base URL
    #[arg(short, long, default_value = "http://localhost:3001/api")]
    endpoint: String,

    /// Directory that CSV and JSON exports are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Write logs to this file. Logging is off otherwise, since stdout
    /// belongs to the terminal UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(&TelemetryConfig::from_env("sniffer-dashboard").with_file(path))?;
    }

    let api: Arc<dyn ScanApi> = Arc::new(ScanApiClient::new(&args.endpoint)?);
    info!(endpoint = %args.endpoint, "Starting dashboard");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(args.export_dir, args.endpoint)));

    // Scan once on startup
    let initial = app.lock().await.request_scan();
    dispatch(initial, &api, &app);

    let result = run_app(&mut terminal, app, api).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    api: Arc<dyn ScanApi>,
) -> anyhow::Result<()> {
    loop {
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let action = app.lock().await.handle_key(key);
                    dispatch(action, &api, &app);
                }
            }
        }

        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}

/// Run the request behind an [`Action`] in the background so the UI keeps
/// drawing while it is in flight.
fn dispatch(action: Action, api: &Arc<dyn ScanApi>, app: &Arc<Mutex<App>>) {
    let api = Arc::clone(api);
    let app = Arc::clone(app);
    match action {
        Action::None => {}
        Action::Scan => {
            tokio::spawn(async move {
                let result = api.scan().await;
                let mut app = app.lock().await;
                app.scanner.complete_scan(result);
                app.on_scan_applied();
            });
        }
        Action::FetchDetails(ssid) => {
            debug!(%ssid, "Fetching details");
            tokio::spawn(async move {
                let result = api.details(&ssid).await;
                let mut app = app.lock().await;
                if let Some(network) = app.scanner.complete_details(result) {
                    app.show_details(network);
                }
            });
        }
    }
}
