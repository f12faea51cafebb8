//! Headless application core (state/action/effect).

pub mod action;
pub mod convert;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use state::{
    AppState, ConverterState, FocusTarget, QuantityField, RatioField, SettingsState, TextField,
    UiState,
};
pub use store::{DispatchResult, Store};
