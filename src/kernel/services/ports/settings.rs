/// Storage key for the hectare→bigha ratio.
pub const HECTARE_TO_BIGHA_KEY: &str = "hectareToBigha";
/// Storage key for the bigha→biswa ratio.
pub const BIGHA_TO_BISWA_KEY: &str = "bighaToBiswa";

pub const DEFAULT_HECTARE_TO_BIGHA: f64 = 3.9537;
pub const DEFAULT_BIGHA_TO_BISWA: f64 = 20.0;

/// The pair of conversion ratios currently in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioConfig {
    pub hectare_to_bigha: f64,
    pub bigha_to_biswa: f64,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            hectare_to_bigha: DEFAULT_HECTARE_TO_BIGHA,
            bigha_to_biswa: DEFAULT_BIGHA_TO_BISWA,
        }
    }
}

/// Durable key-value storage for the two ratios.
///
/// Reads fall back to defaults for absent keys; writes are best-effort
/// (no retry, no user-visible error). A stored value that is present but
/// unparseable still suppresses the default on load; see
/// `adapters::settings` for the exact read semantics.
pub trait RatioStore {
    fn load(&self) -> RatioConfig;
    fn save(&mut self, config: &RatioConfig);
}
