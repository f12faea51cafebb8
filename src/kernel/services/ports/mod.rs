//! Service ports: traits + data contracts.

pub mod settings;

pub use settings::{
    RatioConfig, RatioStore, BIGHA_TO_BISWA_KEY, DEFAULT_BIGHA_TO_BISWA, DEFAULT_HECTARE_TO_BIGHA,
    HECTARE_TO_BIGHA_KEY,
};
