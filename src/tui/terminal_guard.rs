//! Raw-mode lifecycle for the converter screen.
//!
//! Entering the alternate screen without a matching teardown leaves the
//! user's shell in raw mode, so every exit path funnels through a single
//! idempotent [`TerminalRestorer`]: normal return, panic unwind via
//! [`TerminalGuard`]'s `Drop`, and SIGINT/SIGTERM via the signal thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What entering and leaving the screen actually does. Swapped out in
/// tests so the restore-once invariant can be checked without a tty.
pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::EnableMouseCapture;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::event::DisableMouseCapture;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Run every teardown step; surface the first failure afterwards.
        let raw = disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        raw.and(screen)
    }
}

/// Cloneable handle that tears the screen down at most once, no matter
/// how many exit paths race to call it.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    screen: Arc<dyn ScreenOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.screen.leave()
    }
}

/// Enters the screen on construction and leaves it on drop.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_screen(Arc::new(CrosstermScreen))
    }

    pub fn with_screen(screen: Arc<dyn ScreenOps>) -> io::Result<Self> {
        screen.enter()?;
        Ok(Self {
            restorer: TerminalRestorer {
                done: Arc::new(AtomicBool::new(false)),
                screen,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

/// Signals that end the session once the screen has been put back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Conventional 128+signo exit status.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 128 + 2,
            TerminationSignal::Terminate => 128 + 15,
        }
    }
}

/// Restores the terminal from the signal thread before forwarding the
/// signal to the main loop. The raw terminal must be gone before the
/// process exits, even when the main loop never wakes again.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::Interrupt,
                SIGTERM => TerminationSignal::Terminate,
                _ => continue,
            };
            let _ = restorer.restore();
            let _ = tx.send(signal);
        }
    }))
}
