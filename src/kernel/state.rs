use crate::kernel::services::ports::RatioConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityField {
    Hectare,
    Bigha,
    Biswa,
}

impl QuantityField {
    pub const ALL: [QuantityField; 3] = [
        QuantityField::Hectare,
        QuantityField::Bigha,
        QuantityField::Biswa,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hectare => "Hectare",
            Self::Bigha => "Bigha",
            Self::Biswa => "Biswa",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Hectare => Self::Bigha,
            Self::Bigha => Self::Biswa,
            Self::Biswa => Self::Hectare,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Hectare => Self::Biswa,
            Self::Bigha => Self::Hectare,
            Self::Biswa => Self::Bigha,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioField {
    HectareToBigha,
    BighaToBiswa,
}

impl RatioField {
    pub fn label(self) -> &'static str {
        match self {
            Self::HectareToBigha => "1 Hectare = ? Bigha",
            Self::BighaToBiswa => "1 Bigha = ? Biswa",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::HectareToBigha => Self::BighaToBiswa,
            Self::BighaToBiswa => Self::HectareToBigha,
        }
    }
}

/// A single-line text input: raw text plus a byte-offset cursor.
///
/// The raw text is kept verbatim so intermediate/invalid states stay
/// visible while the user types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn with_text(text: impl Into<String>) -> Self {
        let value = text.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Replaces the content and parks the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        if self.cursor > self.value.len() {
            self.cursor = self.value.len();
        }
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.cursor = self.value[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
            .unwrap_or(self.value.len());
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Quantity(QuantityField),
    Settings(RatioField),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    pub hectare: TextField,
    pub bigha: TextField,
    pub biswa: TextField,
}

impl ConverterState {
    pub fn field(&self, field: QuantityField) -> &TextField {
        match field {
            QuantityField::Hectare => &self.hectare,
            QuantityField::Bigha => &self.bigha,
            QuantityField::Biswa => &self.biswa,
        }
    }

    pub fn field_mut(&mut self, field: QuantityField) -> &mut TextField {
        match field {
            QuantityField::Hectare => &mut self.hectare,
            QuantityField::Bigha => &mut self.bigha,
            QuantityField::Biswa => &mut self.biswa,
        }
    }

    pub fn clear_all(&mut self) {
        self.hectare.clear();
        self.bigha.clear();
        self.biswa.clear();
    }
}

/// Settings overlay: visibility plus the two ratio text fields.
///
/// The fields hold raw text; the numeric ratios on `AppState` are derived
/// live from them on every edit (no transactional buffering).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub visible: bool,
    pub hectare_to_bigha: TextField,
    pub bigha_to_biswa: TextField,
}

impl SettingsState {
    pub fn field(&self, field: RatioField) -> &TextField {
        match field {
            RatioField::HectareToBigha => &self.hectare_to_bigha,
            RatioField::BighaToBiswa => &self.bigha_to_biswa,
        }
    }

    pub fn field_mut(&mut self, field: RatioField) -> &mut TextField {
        match field {
            RatioField::HectareToBigha => &mut self.hectare_to_bigha,
            RatioField::BighaToBiswa => &mut self.bigha_to_biswa,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub focus: FocusTarget,
    /// Last focused quantity field; focus returns here when the settings
    /// overlay closes.
    pub last_quantity: QuantityField,
    pub settings: SettingsState,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Quantity(QuantityField::Hectare),
            last_quantity: QuantityField::Hectare,
            settings: SettingsState::default(),
            should_quit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub ratios: RatioConfig,
    pub converter: ConverterState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(ratios: RatioConfig) -> Self {
        Self {
            ratios,
            converter: ConverterState::default(),
            ui: UiState::default(),
        }
    }
}
