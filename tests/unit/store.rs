use super::*;
use crate::kernel::services::ports::RatioConfig;
use crate::kernel::state::{FocusTarget, QuantityField, RatioField};
use crate::kernel::{Action, AppState, Effect};

fn new_store() -> Store {
    Store::new(AppState::new(RatioConfig::default()))
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::Append(ch));
    }
}

fn focus_quantity(store: &mut Store, field: QuantityField) {
    store.dispatch(Action::FocusQuantity(field));
}

#[test]
fn hectare_edit_derives_bigha_and_biswa() {
    let mut store = new_store();
    type_text(&mut store, "2");

    assert_eq!(store.state().converter.hectare.value, "2");
    assert_eq!(store.state().converter.bigha.value, "7.9074");
    assert_eq!(store.state().converter.biswa.value, "158.1480");
}

#[test]
fn bigha_edit_derives_hectare_and_biswa() {
    let mut store = new_store();
    focus_quantity(&mut store, QuantityField::Bigha);
    type_text(&mut store, "10");

    assert_eq!(store.state().converter.hectare.value, "2.5293");
    assert_eq!(store.state().converter.bigha.value, "10");
    assert_eq!(store.state().converter.biswa.value, "200.0000");
}

#[test]
fn biswa_edit_derives_hectare_and_bigha() {
    let mut store = new_store();
    focus_quantity(&mut store, QuantityField::Biswa);
    type_text(&mut store, "100");

    assert_eq!(store.state().converter.bigha.value, "5.0000");
    assert_eq!(store.state().converter.hectare.value, "1.2646");
}

#[test]
fn hectare_round_trips_through_bigha() {
    let mut store = new_store();
    type_text(&mut store, "2.7183");
    let bigha = store.state().converter.bigha.value.clone();

    let mut second = new_store();
    focus_quantity(&mut second, QuantityField::Bigha);
    type_text(&mut second, &bigha);

    let recovered: f64 = second.state().converter.hectare.value.parse().unwrap();
    assert!((recovered - 2.7183).abs() <= 1e-4);
}

#[test]
fn non_numeric_text_clears_derived_fields() {
    let mut store = new_store();
    type_text(&mut store, "2");
    assert!(!store.state().converter.bigha.value.is_empty());

    store.dispatch(Action::CursorLeft);
    store.dispatch(Action::Append('x'));

    assert_eq!(store.state().converter.hectare.value, "x2");
    assert_eq!(store.state().converter.bigha.value, "");
    assert_eq!(store.state().converter.biswa.value, "");
}

#[test]
fn trailing_garbage_keeps_the_numeric_prefix() {
    let mut store = new_store();
    type_text(&mut store, "2x");

    assert_eq!(store.state().converter.hectare.value, "2x");
    assert_eq!(store.state().converter.bigha.value, "7.9074");
}

#[test]
fn backspacing_to_empty_clears_derived_fields() {
    let mut store = new_store();
    type_text(&mut store, "2");
    store.dispatch(Action::Backspace);

    assert_eq!(store.state().converter.hectare.value, "");
    assert_eq!(store.state().converter.bigha.value, "");
    assert_eq!(store.state().converter.biswa.value, "");
}

#[test]
fn backspace_on_empty_field_changes_nothing() {
    let mut store = new_store();
    let result = store.dispatch(Action::Backspace);

    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn editing_rederives_with_cursor_in_the_middle() {
    let mut store = new_store();
    type_text(&mut store, "13");
    store.dispatch(Action::CursorLeft);
    store.dispatch(Action::Append('2'));

    assert_eq!(store.state().converter.hectare.value, "123");
    assert_eq!(store.state().converter.bigha.value, "486.3051");
}

#[test]
fn focus_cycles_through_quantity_fields() {
    let mut store = new_store();
    assert_eq!(
        store.state().ui.focus,
        FocusTarget::Quantity(QuantityField::Hectare)
    );

    store.dispatch(Action::FocusNext);
    assert_eq!(
        store.state().ui.focus,
        FocusTarget::Quantity(QuantityField::Bigha)
    );

    store.dispatch(Action::FocusPrev);
    store.dispatch(Action::FocusPrev);
    assert_eq!(
        store.state().ui.focus,
        FocusTarget::Quantity(QuantityField::Biswa)
    );
}

#[test]
fn settings_toggle_seeds_fields_and_moves_focus() {
    let mut store = new_store();
    store.dispatch(Action::SettingsToggle);

    let settings = &store.state().ui.settings;
    assert!(settings.visible);
    assert_eq!(settings.hectare_to_bigha.value, "3.9537");
    assert_eq!(settings.bigha_to_biswa.value, "20");
    assert_eq!(
        store.state().ui.focus,
        FocusTarget::Settings(RatioField::HectareToBigha)
    );
}

#[test]
fn settings_dismiss_restores_quantity_focus() {
    let mut store = new_store();
    focus_quantity(&mut store, QuantityField::Biswa);
    store.dispatch(Action::SettingsToggle);
    store.dispatch(Action::SettingsDismiss);

    assert!(!store.state().ui.settings.visible);
    assert_eq!(
        store.state().ui.focus,
        FocusTarget::Quantity(QuantityField::Biswa)
    );
}

#[test]
fn dismiss_when_hidden_is_a_no_op() {
    let mut store = new_store();
    let result = store.dispatch(Action::SettingsDismiss);

    assert!(!result.state_changed);
}

#[test]
fn ratio_edit_applies_live_and_requests_save() {
    let mut store = new_store();
    store.dispatch(Action::SettingsToggle);

    // Clear the seeded "3.9537" and type a new ratio.
    for _ in 0..6 {
        store.dispatch(Action::Backspace);
    }
    let result = store.dispatch(Action::Append('4'));

    assert_eq!(store.state().ratios.hectare_to_bigha, 4.0);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SaveRatios(config)] if config.hectare_to_bigha == 4.0
    ));
}

#[test]
fn ratio_edits_affect_later_conversions() {
    let mut store = new_store();
    store.dispatch(Action::SettingsToggle);
    for _ in 0..6 {
        store.dispatch(Action::Backspace);
    }
    type_text(&mut store, "4");
    store.dispatch(Action::SettingsSave);

    type_text(&mut store, "2");
    assert_eq!(store.state().converter.bigha.value, "8.0000");
}

#[test]
fn unparseable_ratio_coerces_to_zero() {
    let mut store = new_store();
    store.dispatch(Action::SettingsToggle);
    store.dispatch(Action::FocusRatio(RatioField::BighaToBiswa));
    for _ in 0..2 {
        store.dispatch(Action::Backspace);
    }
    type_text(&mut store, "abc");

    assert_eq!(store.state().ratios.bigha_to_biswa, 0.0);
    store.dispatch(Action::SettingsSave);

    // bigha * 0 renders as a plain zero...
    focus_quantity(&mut store, QuantityField::Bigha);
    type_text(&mut store, "5");
    assert_eq!(store.state().converter.biswa.value, "0.0000");

    // ...while dividing by the zero ratio goes infinite, unguarded.
    focus_quantity(&mut store, QuantityField::Biswa);
    type_text(&mut store, "7");
    assert_eq!(store.state().converter.hectare.value, "inf");
    assert_eq!(store.state().converter.bigha.value, "inf");
}

#[test]
fn reset_restores_defaults_and_clears_quantities() {
    let mut store = Store::new(AppState::new(RatioConfig {
        hectare_to_bigha: 9.9,
        bigha_to_biswa: 0.0,
    }));
    type_text(&mut store, "3");
    store.dispatch(Action::SettingsToggle);

    let result = store.dispatch(Action::SettingsReset);

    assert_eq!(store.state().ratios, RatioConfig::default());
    assert_eq!(store.state().converter.hectare.value, "");
    assert_eq!(store.state().converter.bigha.value, "");
    assert_eq!(store.state().converter.biswa.value, "");
    assert!(!store.state().ui.settings.visible);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SaveRatios(config)] if *config == RatioConfig::default()
    ));
}

#[test]
fn settings_save_emits_no_extra_effects() {
    let mut store = new_store();
    store.dispatch(Action::SettingsToggle);
    let result = store.dispatch(Action::SettingsSave);

    assert!(result.effects.is_empty());
    assert!(!store.state().ui.settings.visible);
}

#[test]
fn quantity_focus_is_blocked_under_the_overlay() {
    let mut store = new_store();
    store.dispatch(Action::SettingsToggle);
    let result = store.dispatch(Action::FocusQuantity(QuantityField::Bigha));

    assert!(!result.state_changed);
    assert_eq!(
        store.state().ui.focus,
        FocusTarget::Settings(RatioField::HectareToBigha)
    );
}

#[test]
fn nan_ratio_from_corrupt_storage_flows_into_derivations() {
    let mut store = Store::new(AppState::new(RatioConfig {
        hectare_to_bigha: f64::NAN,
        bigha_to_biswa: 20.0,
    }));
    type_text(&mut store, "2");

    assert_eq!(store.state().converter.bigha.value, "NaN");
    assert_eq!(store.state().converter.biswa.value, "NaN");
}

#[test]
fn quit_sets_should_quit() {
    let mut store = new_store();
    store.dispatch(Action::Quit);
    assert!(store.state().ui.should_quit);
}
