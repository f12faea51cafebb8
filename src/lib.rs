//! bhumi - terminal land-area converter.
//!
//! Module structure:
//! - kernel: headless core (state, actions, effects, store, persistence)
//! - core: shared UI framework types (events, results)
//! - app: workbench (input routing, effect execution, rendering)
//! - tui: terminal setup/teardown

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
