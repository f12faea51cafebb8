use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Workbench;
use crate::core::{EventResult, Key};
use crate::kernel::Action;

impl Workbench {
    pub(super) fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let key = Key::from(*event);
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => return self.dispatch(Action::Quit),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                return self.dispatch(Action::SettingsToggle)
            }
            _ => {}
        }

        let settings_visible = self.store.state().ui.settings.visible;
        if settings_visible {
            match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => return self.dispatch(Action::SettingsDismiss),
                (KeyCode::Enter, _) => return self.dispatch(Action::SettingsSave),
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                    return self.dispatch(Action::SettingsReset)
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.dispatch(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.dispatch(Action::FocusPrev),
            KeyCode::Left => self.dispatch(Action::CursorLeft),
            KeyCode::Right => self.dispatch(Action::CursorRight),
            KeyCode::Backspace => self.dispatch(Action::Backspace),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                };
                self.dispatch(Action::Append(ch))
            }
            _ => EventResult::Ignored,
        }
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        let mut result = EventResult::Ignored;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            if self.dispatch(Action::Append(ch)) == EventResult::Consumed {
                result = EventResult::Consumed;
            }
        }
        result
    }
}
