//! Hardware Abstraction Layer
//!
//! The driver never touches a bus controller directly. Everything goes through
//! the [`MdioBus`] trait, which applications implement on top of their SoC's
//! SMI/MDIO peripheral.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait with Clause 45 indirect (MMD) access
//!
//! # Delay Integration
//!
//! Types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod mdio;

// Re-export commonly used types
pub use mdio::{MdioBus, validate_address};
