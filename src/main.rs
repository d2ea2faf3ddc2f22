use ayah_card::app::{App, AppMessage};
use ayah_card::config::Config;
use ayah_card::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle flags before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("ayah-card {}", VERSION);
        std::process::exit(0);
    }
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        std::process::exit(0);
    }

    color_eyre::install()?;

    // Log to a file; stdout belongs to the TUI
    let _ = ayah_card::logging::init();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let mut config = Config::load();
    if let Some(dir) = output_dir_arg() {
        config.output_dir = Some(dir);
    }

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::with_config(&config);

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;

    result
}

fn print_help() {
    println!("ayah-card {}", VERSION);
    println!();
    println!("Compose Quran verse cards in the terminal and export them as PNGs.");
    println!();
    println!("USAGE:");
    println!("    ayah-card [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --output-dir <DIR>   Directory exported cards are written to");
    println!("    --version            Print version and exit");
    println!("    -h, --help           Print this help and exit");
}

/// Value of `--output-dir <dir>`, if present.
fn output_dir_arg() -> Option<PathBuf> {
    let mut args = std::env::args();
    while let Some(arg) = args.next() {
        if arg == "--output-dir" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // Load a random verse on startup, like the web app did on mount
    app.randomize_and_fetch();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the spinner moving and expires notices
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        _ => {}
                    }
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.apply_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state before printing the panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
