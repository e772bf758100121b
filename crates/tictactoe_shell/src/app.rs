//! Terminal event loop.

use crate::config::ShellConfig;
use crate::input::{Command, command};
use crate::session::{Session, Touch};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Input collected between two ticks.
#[derive(Debug, Default)]
struct Pending {
    held: Option<Touch>,
    pulse: Option<Touch>,
    quit: bool,
}

impl Pending {
    /// Touch for this tick. A pulse is seen for exactly one tick, even if
    /// the button was already let go.
    fn take_touch(&mut self) -> Touch {
        self.pulse.take().or(self.held).unwrap_or(Touch::Released)
    }
}

/// Raw mode and alternate screen. Restored on drop and on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = restore(&mut io::stdout());
            previous(info);
        }));
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = restore(&mut io::stdout()) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

fn restore(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs the game in the terminal until the player quits.
#[instrument(skip_all)]
pub fn run(config: &ShellConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = run_loop(&mut terminal, config);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(terminal: &mut Term, config: &ShellConfig) -> Result<()> {
    let size = terminal.size()?;
    let mut session = Session::new(config.countdown(), size.width, size.height);
    let mut pending = Pending::default();
    let tick = config.tick();
    let mut last = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        if event::poll(tick)? {
            handle(&mut session, &mut pending, &event::read()?);
            while event::poll(Duration::ZERO)? {
                handle(&mut session, &mut pending, &event::read()?);
            }
        }
        if pending.quit {
            info!("Player quit");
            return Ok(());
        }

        let now = Instant::now();
        session.update(now - last, pending.take_touch());
        last = now;
    }
}

fn handle(session: &mut Session, pending: &mut Pending, event: &event::Event) {
    let Some(cmd) = command(event) else {
        return;
    };
    debug!(?cmd, "Command");
    match cmd {
        Command::Quit => pending.quit = true,
        Command::Restart => session.restart(),
        Command::Cursor(direction) => session.move_cursor(direction),
        Command::Select => pending.pulse = Some(Touch::Cell(session.cursor())),
        Command::SelectCell(cell) => {
            session.set_cursor(cell);
            pending.pulse = Some(Touch::Cell(cell));
        }
        Command::Press { column, row } => {
            let touch = Touch::Screen { column, row };
            pending.held = Some(touch);
            pending.pulse = Some(touch);
        }
        Command::Drag { column, row } => pending.held = Some(Touch::Screen { column, row }),
        Command::Release => pending.held = None,
        Command::Resize { width, height } => session.resize(width, height),
    }
}
