use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::Workbench;
use crate::core::EventResult;
use crate::kernel::state::{QuantityField, RatioField};
use crate::kernel::Action;

fn hit(area: Option<Rect>, x: u16, y: u16) -> bool {
    match area {
        Some(area) => {
            x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
        }
        None => false,
    }
}

impl Workbench {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }
        let (x, y) = (event.column, event.row);

        // The overlay is modal while visible: inside hits route to its
        // widgets, anything else dismisses. The cached rects exist only
        // while the overlay is rendered, so this routing cannot outlive
        // it.
        if self.store.state().ui.settings.visible {
            if !hit(self.last_settings_area, x, y) {
                return self.dispatch(Action::SettingsDismiss);
            }
            if hit(self.last_ratio_areas[0], x, y) {
                return self.dispatch(Action::FocusRatio(RatioField::HectareToBigha));
            }
            if hit(self.last_ratio_areas[1], x, y) {
                return self.dispatch(Action::FocusRatio(RatioField::BighaToBiswa));
            }
            if hit(self.last_save_button_area, x, y) {
                return self.dispatch(Action::SettingsSave);
            }
            if hit(self.last_reset_button_area, x, y) {
                return self.dispatch(Action::SettingsReset);
            }
            // Dead space inside the panel.
            return EventResult::Consumed;
        }

        if hit(self.last_gear_area, x, y) {
            return self.dispatch(Action::SettingsToggle);
        }

        for (i, field) in QuantityField::ALL.iter().enumerate() {
            if hit(self.last_quantity_areas[i], x, y) {
                return self.dispatch(Action::FocusQuantity(*field));
            }
        }

        EventResult::Ignored
    }
}
