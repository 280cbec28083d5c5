//! Datavis - a terminal dashboard for plotting CSV files.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datavis::app::App;
use datavis::data::default_data_dir;
use datavis::ui;
use datavis::util::LayoutConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "datavis")]
#[command(about = "A terminal dashboard for plotting CSV files", long_about = None)]
struct Args {
    /// Folder holding the CSV files (defaults to `data` next to the executable)
    data_dir: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Number of rows shown in the head preview
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..=500))]
    preview_rows: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Datavis");
    }

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let mut layout = LayoutConfig::default();
    layout.preview.rows = usize::from(args.preview_rows);

    // The file list is built once, before the terminal is taken over
    let app = match App::new(data_dir, layout) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Datavis exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Picker list open - handle separately
        if app.dropdown_open() {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                    app.option_up();
                },
                (KeyModifiers::NONE, KeyCode::Down)
                | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                    app.option_down();
                },
                (KeyModifiers::NONE, KeyCode::Enter) => {
                    app.confirm_dropdown();
                },
                (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                    app.cancel_dropdown();
                },
                _ => {},
            }
            continue;
        }

        // Normal mode
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Focus
            (KeyModifiers::NONE, KeyCode::Tab)
            | (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.focus_next();
            },
            (KeyModifiers::SHIFT, KeyCode::BackTab)
            | (KeyModifiers::NONE, KeyCode::BackTab)
            | (KeyModifiers::NONE, KeyCode::Up)
            | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.focus_prev();
            },

            // Open picker or press button
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                app.activate();
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                app.generate_plot();
            },
            (KeyModifiers::NONE, KeyCode::Char('c')) => {
                app.cycle_palette();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                app.cycle_theme();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                app.status =
                    "Help: Tab=focus, Enter=open/press, g=generate, c=palette, T=theme, q=quit"
                        .to_string();
            },

            _ => {},
        }
    }
}
