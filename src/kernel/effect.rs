use crate::kernel::services::ports::RatioConfig;

/// Side effects requested by the store; executed by the app layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Persist both ratios. Fire-and-forget: failures are logged and
    /// swallowed by the executor.
    SaveRatios(RatioConfig),
}
