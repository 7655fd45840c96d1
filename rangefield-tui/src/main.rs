//! Range field demo: a form of dual-thumb sliders in the terminal.
//!
//! Keyboard: Tab/j/k focus, h/l step (H/L x10), Space switches thumb,
//! v cycles the value labels, s saves, r resets, e/d toggle enabled.
//! Mouse: press on a track grabs the nearest thumb, drag moves it.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::text::Span;
use ratatui::Terminal;

use rangefield_core::FormConfig;
use rangefield_tui::ui::widgets::{FieldPresentation, ValueWidgets};
use rangefield_tui::{input, persistence, theme, ui, AppState};

#[derive(Parser, Debug)]
#[command(name = "rangefield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML form description; the built-in sample form when omitted
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where saved values are kept between runs
    #[arg(short, long, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Debug verbosity level (0=warn, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "1")]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let state_path = cli.state.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rangefield")
            .join("state.json")
    });

    let mut config = match &cli.config {
        Some(path) => FormConfig::load(path)
            .with_context(|| format!("loading form from {}", path.display()))?,
        None => FormConfig::sample(),
    };
    persistence::apply(&mut config, &persistence::load(&state_path));

    let mut app = AppState::from_config(&config)?
        .with_state_path(state_path)
        .with_presentation("price", dollar_presentation());
    log::info!("loaded form with {} field(s)", app.form.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    app.persist_on_exit();

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

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }
    log::info!("exiting");
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("rangefield.log"));
    let file = File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Price bounds shown as currency.
fn dollar_presentation() -> FieldPresentation {
    let dollars = |s: &str| Span::styled(format!("${s}"), theme::positive());
    FieldPresentation {
        styles: None,
        widgets: ValueWidgets {
            min: Some(Box::new(dollars)),
            value: None,
            max: Some(Box::new(dollars)),
        },
    }
}
