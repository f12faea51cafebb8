use super::*;
use crate::core::{EventResult, InputEvent};
use crate::kernel::services::adapters::MemoryRatioStore;
use crate::kernel::services::ports::{RatioConfig, RatioStore, HECTARE_TO_BIGHA_KEY};
use crate::kernel::FocusTarget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::{Arc, Mutex};

struct SharedStore(Arc<Mutex<MemoryRatioStore>>);

impl RatioStore for SharedStore {
    fn load(&self) -> RatioConfig {
        self.0.lock().unwrap().load()
    }

    fn save(&mut self, config: &RatioConfig) {
        self.0.lock().unwrap().save(config);
    }
}

fn new_workbench() -> Workbench {
    Workbench::new(Box::new(MemoryRatioStore::new()))
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> InputEvent {
    InputEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn click(x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(workbench: &mut Workbench, text: &str) {
    for ch in text.chars() {
        workbench.handle_input(&key(KeyCode::Char(ch)));
    }
}

#[test]
fn loads_stored_ratios_at_startup() {
    let mut seed = MemoryRatioStore::new();
    seed.insert_raw(HECTARE_TO_BIGHA_KEY, "5");

    let workbench = Workbench::new(Box::new(seed));
    assert_eq!(workbench.store().state().ratios.hectare_to_bigha, 5.0);
    assert_eq!(workbench.store().state().ratios.bigha_to_biswa, 20.0);
}

#[test]
fn typing_derives_the_other_quantities() {
    let mut workbench = new_workbench();
    type_text(&mut workbench, "2");

    let converter = &workbench.store().state().converter;
    assert_eq!(converter.bigha.value, "7.9074");
    assert_eq!(converter.biswa.value, "158.1480");
}

#[test]
fn ctrl_q_quits() {
    let mut workbench = new_workbench();
    assert_eq!(workbench.handle_input(&ctrl('q')), EventResult::Quit);
}

#[test]
fn ctrl_s_toggles_the_overlay() {
    let mut workbench = new_workbench();
    workbench.handle_input(&ctrl('s'));
    assert!(workbench.store().state().ui.settings.visible);

    workbench.handle_input(&ctrl('s'));
    assert!(!workbench.store().state().ui.settings.visible);
}

#[test]
fn esc_dismisses_the_overlay() {
    let mut workbench = new_workbench();
    workbench.handle_input(&ctrl('s'));
    workbench.handle_input(&key(KeyCode::Esc));
    assert!(!workbench.store().state().ui.settings.visible);
}

#[test]
fn ratio_edits_persist_through_the_store() {
    let shared = Arc::new(Mutex::new(MemoryRatioStore::new()));
    let mut workbench = Workbench::new(Box::new(SharedStore(shared.clone())));

    workbench.handle_input(&ctrl('s'));
    for _ in 0..6 {
        workbench.handle_input(&key(KeyCode::Backspace));
    }
    type_text(&mut workbench, "4.5");
    workbench.handle_input(&key(KeyCode::Enter));

    let loaded = shared.lock().unwrap().load();
    assert_eq!(loaded.hectare_to_bigha, 4.5);
}

#[test]
fn reset_persists_the_defaults() {
    let shared = Arc::new(Mutex::new(MemoryRatioStore::new()));
    let mut workbench = Workbench::new(Box::new(SharedStore(shared.clone())));

    workbench.handle_input(&ctrl('s'));
    for _ in 0..6 {
        workbench.handle_input(&key(KeyCode::Backspace));
    }
    type_text(&mut workbench, "9");
    workbench.handle_input(&ctrl('r'));

    assert!(!workbench.store().state().ui.settings.visible);
    assert_eq!(shared.lock().unwrap().load(), RatioConfig::default());
}

#[test]
fn click_outside_the_overlay_dismisses_it() {
    let mut workbench = new_workbench();
    workbench.handle_input(&ctrl('s'));

    // Nothing rendered yet, so no cached overlay rect: every click is
    // an outside click.
    workbench.handle_input(&click(0, 0));
    assert!(!workbench.store().state().ui.settings.visible);
}

#[test]
fn tab_moves_quantity_focus() {
    let mut workbench = new_workbench();
    workbench.handle_input(&key(KeyCode::Tab));

    assert_eq!(
        workbench.store().state().ui.focus,
        FocusTarget::Quantity(crate::kernel::QuantityField::Bigha)
    );
}

#[test]
fn paste_appends_digits() {
    let mut workbench = new_workbench();
    workbench.handle_input(&InputEvent::Paste("10".to_string()));

    let converter = &workbench.store().state().converter;
    assert_eq!(converter.hectare.value, "10");
    assert_eq!(converter.bigha.value, "39.5370");
}
