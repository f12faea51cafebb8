use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::prelude::*;

use bhumi::app::Workbench;
use bhumi::core::{EventResult, InputEvent};
use bhumi::kernel::services::adapters::FsRatioStore;
use bhumi::tui::TerminalGuard;

mod logging;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let guard = TerminalGuard::new()?;

    #[cfg(unix)]
    let signal_rx = {
        let (tx, rx) = std::sync::mpsc::channel();
        let _ = bhumi::tui::terminal_guard::install_termination_signals(guard.restorer(), tx);
        rx
    };

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut workbench = Workbench::new(Box::new(FsRatioStore::new()));
    let mut needs_redraw = true;

    loop {
        #[cfg(unix)]
        if let Ok(signal) = signal_rx.try_recv() {
            // The signal thread already restored the terminal.
            std::process::exit(signal.exit_code());
        }

        if needs_redraw {
            terminal.draw(|frame| workbench.render(frame))?;
            needs_redraw = false;
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            continue;
        }

        let input = InputEvent::from(event::read()?);
        match workbench.handle_input(&input) {
            EventResult::Quit => break,
            EventResult::Consumed => needs_redraw = true,
            EventResult::Ignored => {}
        }
    }

    guard.restorer().restore()?;
    Ok(())
}
