//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the kernel.
//! - `adapters`: filesystem/in-memory implementations.

pub mod adapters;
pub mod ports;
