//! Chip-level driver components for the XWAY GPHY.
//!
//! - [`config`] - Init configuration and builder
//! - [`interrupt`] - `IMASK` / `ISTAT` protocol
//! - [`registry`] - Supported revisions and their quirks
//!
//! # Example
//!
//! ```ignore
//! use ph_xway_gphy::driver::{DriverRegistry, GphyConfig, LedWritePolicy};
//!
//! let config = GphyConfig::new().with_led_write_policy(LedWritePolicy::Strict);
//! let device = DriverRegistry::xway().lookup(phy_id);
//! ```

// Submodules
pub mod config;
pub mod interrupt;
pub mod registry;

// Re-exports for convenience
pub use config::{GphyConfig, LedWritePolicy};
pub use interrupt::{InterruptController, InterruptFlags, InterruptStatus};
pub use registry::{DeviceInfo, DriverRegistry, Quirks, XWAY_DEVICES};
