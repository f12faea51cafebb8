use crate::kernel::state::{QuantityField, RatioField};

/// Everything the UI can ask the kernel to do. Editing actions
/// (`Append`, `Backspace`, cursor moves) are routed to whichever field
/// currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Append(char),
    Backspace,
    CursorLeft,
    CursorRight,
    FocusNext,
    FocusPrev,
    FocusQuantity(QuantityField),
    FocusRatio(RatioField),
    SettingsToggle,
    SettingsDismiss,
    SettingsSave,
    SettingsReset,
    Quit,
}
