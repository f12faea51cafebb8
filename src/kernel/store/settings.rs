use crate::kernel::convert::{display_number, parse_number};
use crate::kernel::services::ports::RatioConfig;
use crate::kernel::state::{FocusTarget, RatioField};
use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_ratio_edit(
        &mut self,
        field: RatioField,
        action: Action,
    ) -> super::DispatchResult {
        if !self.state.ui.settings.visible {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        let text_field = self.state.ui.settings.field_mut(field);
        let edited = match action {
            Action::Append(ch) => {
                text_field.insert(ch);
                true
            }
            Action::Backspace => text_field.backspace(),
            Action::CursorLeft => {
                let moved = text_field.cursor_left();
                return super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: moved,
                };
            }
            Action::CursorRight => {
                let moved = text_field.cursor_right();
                return super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: moved,
                };
            }
            _ => unreachable!("non-edit action passed to reduce_ratio_edit"),
        };

        if !edited {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        // Edits apply immediately to the shared ratio state; there is no
        // transactional buffering behind Save.
        let effects = self.apply_ratio_field(field);
        super::DispatchResult {
            effects,
            state_changed: true,
        }
    }

    /// Re-derives a ratio from its field text and schedules persistence.
    ///
    /// Unparseable text is silently coerced to 0. Later divisions by the
    /// zero ratio are not guarded.
    fn apply_ratio_field(&mut self, field: RatioField) -> Vec<Effect> {
        let parsed = parse_number(&self.state.ui.settings.field(field).value);
        let value = if parsed.is_nan() { 0.0 } else { parsed };
        match field {
            RatioField::HectareToBigha => self.state.ratios.hectare_to_bigha = value,
            RatioField::BighaToBiswa => self.state.ratios.bigha_to_biswa = value,
        }
        vec![Effect::SaveRatios(self.state.ratios)]
    }

    pub(super) fn reduce_settings_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SettingsToggle => {
                if self.state.ui.settings.visible {
                    self.close_settings();
                } else {
                    self.open_settings();
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SettingsDismiss | Action::SettingsSave => {
                // Save dismisses only: ratio edits already took effect live.
                if !self.state.ui.settings.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.close_settings();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SettingsReset => {
                self.state.ratios = RatioConfig::default();
                self.state.converter.clear_all();
                self.close_settings();
                super::DispatchResult {
                    effects: vec![Effect::SaveRatios(self.state.ratios)],
                    state_changed: true,
                }
            }
            _ => unreachable!("non-settings action passed to reduce_settings_action"),
        }
    }

    /// Opens the overlay, seeding its fields from the live ratios.
    fn open_settings(&mut self) {
        let ratios = self.state.ratios;
        let settings = &mut self.state.ui.settings;
        settings.visible = true;
        settings
            .hectare_to_bigha
            .set_text(display_number(ratios.hectare_to_bigha));
        settings
            .bigha_to_biswa
            .set_text(display_number(ratios.bigha_to_biswa));
        self.state.ui.focus = FocusTarget::Settings(RatioField::HectareToBigha);
    }

    fn close_settings(&mut self) {
        self.state.ui.settings.visible = false;
        self.state.ui.focus = FocusTarget::Quantity(self.state.ui.last_quantity);
    }
}
