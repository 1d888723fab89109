use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use foliotui::app::App;
use foliotui::storage::{FileStore, KvStore};
use foliotui::{config, handlers, logic, ui, utils};

/// Portfolio page TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to a file in the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Jump instead of animating anchor scrolls
    #[arg(long)]
    reduce_motion: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    utils::init_logging(args.debug);

    // Load configuration; CLI flags override file values
    let mut config = config::load(args.config)?;
    if args.vim {
        config.vim_mode = true;
    }
    if args.reduce_motion {
        config.reduce_motion = true;
    }

    // One-time startup environment checks
    let store = FileStore::new()?;
    let system_prefers_dark = logic::theme::system_prefers_dark();
    let mut app = App::new(config, store, system_prefers_dark);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend, S: KvStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_quit {
            break;
        }

        // Advance the smooth-scroll animation one frame
        let animating = app.model.scroll.tick();

        // Short poll timeout while animating keeps the motion smooth; a
        // longer one when idle reduces CPU usage
        let timeout = if animating {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
