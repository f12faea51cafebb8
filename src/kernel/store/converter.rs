use crate::kernel::convert::{fixed4, parse_number};
use crate::kernel::state::QuantityField;
use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_quantity_edit(
        &mut self,
        field: QuantityField,
        action: Action,
    ) -> super::DispatchResult {
        let text_field = self.state.converter.field_mut(field);
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
            _ => unreachable!("non-edit action passed to reduce_quantity_edit"),
        };

        if !edited {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        self.rederive_from(field);
        super::DispatchResult {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    /// Recomputes the two non-edited quantities from the edited one.
    ///
    /// Unparseable text clears the derived fields instead of erroring;
    /// the raw text stays visible in the edited field. Zero or NaN
    /// ratios flow through unguarded and render as "inf"/"NaN".
    fn rederive_from(&mut self, field: QuantityField) {
        let ratios = self.state.ratios;
        let parsed = parse_number(&self.state.converter.field(field).value);
        let converter = &mut self.state.converter;

        match field {
            QuantityField::Hectare => {
                if parsed.is_nan() {
                    converter.bigha.clear();
                    converter.biswa.clear();
                } else {
                    let bigha = parsed * ratios.hectare_to_bigha;
                    converter.bigha.set_text(fixed4(bigha));
                    converter.biswa.set_text(fixed4(bigha * ratios.bigha_to_biswa));
                }
            }
            QuantityField::Bigha => {
                if parsed.is_nan() {
                    converter.hectare.clear();
                    converter.biswa.clear();
                } else {
                    converter
                        .hectare
                        .set_text(fixed4(parsed / ratios.hectare_to_bigha));
                    converter
                        .biswa
                        .set_text(fixed4(parsed * ratios.bigha_to_biswa));
                }
            }
            QuantityField::Biswa => {
                if parsed.is_nan() {
                    converter.bigha.clear();
                    converter.hectare.clear();
                } else {
                    converter
                        .bigha
                        .set_text(fixed4(parsed / ratios.bigha_to_biswa));
                    converter.hectare.set_text(fixed4(
                        parsed / (ratios.hectare_to_bigha * ratios.bigha_to_biswa),
                    ));
                }
            }
        }
    }
}
