//! Centralized Constants
//!
//! Single source of truth for the magic numbers used throughout the driver.
//!
//! # Note
//!
//! Register bit definitions remain in [`phy_regs`](super::phy_regs) as they
//! are specific to those register blocks.

// =============================================================================
// MDIO Addressing
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid Clause 22 register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Mask selecting every bit of a PHY identifier (exact match)
pub const PHY_ID_EXACT_MASK: u32 = 0xFFFF_FFFF;

// =============================================================================
// LED Pins
// =============================================================================

/// Number of LED output pins on the largest package
pub const LED_PIN_COUNT: u8 = 4;

/// Pins that receive the default configuration at init (LED0..=LED2)
///
/// LED3 is only bonded out on some packages and keeps its reset configuration.
pub const DEFAULT_LED_PINS: u8 = 3;

// =============================================================================
// Timing Constants
// =============================================================================

/// Hardware reset pulse duration in microseconds
pub const RESET_PULSE_US: u32 = 10_000;

/// Time to wait after releasing reset before the first MDIO access
pub const RESET_RECOVERY_US: u32 = 50_000;
