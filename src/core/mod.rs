//! Small shared UI framework types (events, results).

pub mod event;

pub use event::{EventResult, InputEvent, Key};
