//! Service adapters: OS-specific implementations of the ports.

pub mod settings;

pub use settings::{get_ratios_path, FsRatioStore, MemoryRatioStore};
