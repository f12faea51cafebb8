//! Workbench: owns the store and the ratio storage, routes input, runs
//! effects, renders.

use ratatui::layout::Rect;

use super::theme::UiTheme;
use crate::core::{EventResult, InputEvent};
use crate::kernel::services::ports::RatioStore;
use crate::kernel::{Action, AppState, Effect, Store};

mod input;
mod mouse;
mod render;

pub struct Workbench {
    store: Store,
    ratio_store: Box<dyn RatioStore>,
    theme: UiTheme,
    // Rects cached from the last render, used for mouse hit-testing.
    // The overlay rects are cleared whenever the overlay is not drawn,
    // so outside-click routing only exists while it is visible.
    last_gear_area: Option<Rect>,
    last_quantity_areas: [Option<Rect>; 3],
    last_settings_area: Option<Rect>,
    last_ratio_areas: [Option<Rect>; 2],
    last_save_button_area: Option<Rect>,
    last_reset_button_area: Option<Rect>,
}

impl Workbench {
    pub fn new(ratio_store: Box<dyn RatioStore>) -> Self {
        let ratios = ratio_store.load();
        tracing::info!(
            hectare_to_bigha = ratios.hectare_to_bigha,
            bigha_to_biswa = ratios.bigha_to_biswa,
            "ratios loaded"
        );

        Self {
            store: Store::new(AppState::new(ratios)),
            ratio_store,
            theme: UiTheme::default(),
            last_gear_area: None,
            last_quantity_areas: [None; 3],
            last_settings_area: None,
            last_ratio_areas: [None; 2],
            last_save_button_area: None,
            last_reset_button_area: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key_event) => self.handle_key(key_event),
            InputEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            InputEvent::Resize(_, _) => EventResult::Consumed,
            InputEvent::Paste(text) => self.handle_paste(text),
            _ => EventResult::Ignored,
        }
    }

    fn dispatch(&mut self, action: Action) -> EventResult {
        let result = self.store.dispatch(action);
        self.run_effects(result.effects);

        if self.store.state().ui.should_quit {
            EventResult::Quit
        } else if result.state_changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SaveRatios(config) => {
                    tracing::debug!(
                        hectare_to_bigha = config.hectare_to_bigha,
                        bigha_to_biswa = config.bigha_to_biswa,
                        "persisting ratios"
                    );
                    self.ratio_store.save(&config);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/workbench.rs"]
mod tests;
