mod app;
pub mod input;
mod message;
mod ui;

use crate::config::{self, Config};
use crate::data::ViewState;
use crate::integrations::preferences::FilePreferenceStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use app::{App, DraftField, DraftForm, FetchResult, ModalState};
pub use message::Message;

/// Load the persisted view state for this config.
pub fn load_view_state(config: &Config) -> Result<ViewState> {
    let path = config::preferences_path(config)?;
    Ok(ViewState::load(Box::new(FilePreferenceStore::open(&path))))
}

pub async fn run(config: Config) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("ticketboard requires an interactive terminal (try `ticketboard print`)");
    }

    let view = load_view_state(&config)?;
    let mut app = App::new(config, view);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // UI shows immediately with loading state
    app.start_fetch();

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let msg = input::dispatch(app, key);
                    if app.update(msg) {
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick_spinner();

            // Pick up the fetch result once it lands (non-blocking)
            app.poll_fetch();

            last_tick = std::time::Instant::now();
        }
    }
}
