//! TUI integration layer (crossterm + ratatui).
//!
//! Kept separate from `kernel` so the core stays testable without
//! terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{ScreenOps, TerminalGuard, TerminationSignal};
