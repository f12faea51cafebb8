use crate::kernel::state::FocusTarget;
use crate::kernel::{Action, AppState, Effect};

mod converter;
mod settings;

#[cfg(test)]
#[path = "../../tests/unit/store.rs"]
mod tests;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Append(_) | Action::Backspace | Action::CursorLeft | Action::CursorRight => {
                match self.state.ui.focus {
                    FocusTarget::Quantity(field) => self.reduce_quantity_edit(field, action),
                    FocusTarget::Settings(field) => self.reduce_ratio_edit(field, action),
                }
            }
            Action::FocusNext
            | Action::FocusPrev
            | Action::FocusQuantity(_)
            | Action::FocusRatio(_) => self.reduce_focus_action(action),
            Action::SettingsToggle
            | Action::SettingsDismiss
            | Action::SettingsSave
            | Action::SettingsReset => self.reduce_settings_action(action),
            Action::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
        }
    }

    fn reduce_focus_action(&mut self, action: Action) -> DispatchResult {
        let ui = &mut self.state.ui;
        let next = match action {
            Action::FocusNext => match ui.focus {
                FocusTarget::Quantity(field) => FocusTarget::Quantity(field.next()),
                FocusTarget::Settings(field) => FocusTarget::Settings(field.other()),
            },
            Action::FocusPrev => match ui.focus {
                FocusTarget::Quantity(field) => FocusTarget::Quantity(field.prev()),
                FocusTarget::Settings(field) => FocusTarget::Settings(field.other()),
            },
            Action::FocusQuantity(field) => {
                // Quantity fields are not clickable under the overlay.
                if ui.settings.visible {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                FocusTarget::Quantity(field)
            }
            Action::FocusRatio(field) => {
                if !ui.settings.visible {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                FocusTarget::Settings(field)
            }
            _ => unreachable!("non-focus action passed to reduce_focus_action"),
        };

        let state_changed = next != ui.focus;
        ui.focus = next;
        if let FocusTarget::Quantity(field) = next {
            ui.last_quantity = field;
        }
        DispatchResult {
            effects: Vec::new(),
            state_changed,
        }
    }
}
