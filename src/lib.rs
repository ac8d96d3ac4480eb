//! XWAY GPHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver core for the Lantiq/Intel XWAY family of
//! Ethernet PHYs: the discrete PHY11G (PEF 7071/7072, 10/100/1000) and PHY22F
//! (PEF 7061, 10/100), and the same cores integrated in the xRX200 SoCs.
//!
//! The crate covers what is specific to these chips:
//!
//! - **LED triggers** ([`phy::led`]): turn per-pin trigger sets from a board
//!   description into the four LED source fields the chip understands
//! - **Link interrupts** ([`driver::interrupt`]): mask, acknowledge and poll the
//!   vendor interrupt registers
//! - **Initialization** ([`XwayGphy::config_init`]): quiesce interrupts and
//!   bring the LED block to a known state
//!
//! Everything else (link state, speed and duplex resolution, advertisement) is
//! standard IEEE 802.3 Clause 22 and handled by [`phy::generic`].
//!
//! # Architecture
//!
//! 1. **HAL Layer** ([`hal`]): the [`MdioBus`] trait, implemented by the
//!    application on top of its MDIO controller, including Clause 45 MMD access
//! 2. **PHY Layer** ([`phy`]): [`PhyDriver`], the XWAY driver and the LED encoder
//! 3. **Driver Layer** ([`driver`]): interrupt protocol, init configuration and
//!    the table of supported revisions
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and debug logging
//!
//! # Example
//!
//! ```ignore
//! use ph_xway_gphy::{
//!     DriverRegistry, GphyConfig, LedOverride, PhyDriver, TriggerSet, XwayGphy,
//! };
//!
//! static LEDS: [LedOverride; 2] = [
//!     LedOverride::new(0)
//!         .with_constant_on(TriggerSet::LINK1000)
//!         .with_pulse(TriggerSet::ACTIVITY),
//!     LedOverride::new(1)
//!         .with_constant_on(TriggerSet::LINK10.union(TriggerSet::LINK100)),
//! ];
//!
//! let mut phy = XwayGphy::probe(&mut mdio, 0, &DriverRegistry::xway())?;
//! phy.config_init(
//!     &mut mdio,
//!     &GphyConfig::new().with_led_overrides(&LEDS).with_interrupts(true),
//! )?;
//! phy.config_aneg(&mut mdio)?;
//!
//! // In the PHY interrupt handler
//! if phy.did_interrupt(&mut mdio)? {
//!     let up = phy.is_link_up(&mut mdio)?;
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; the same table is mirrored in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{GphyConfig, LedWritePolicy};
pub use driver::interrupt::{InterruptController, InterruptFlags, InterruptStatus};
pub use driver::registry::{DeviceInfo, DriverRegistry, Quirks};
pub use error::{ConfigError, Error, IoError, Result};
pub use hal::MdioBus;

// Re-export PHY types
pub use phy::{
    BlinkSource, ConstantOnSource, GlobalLedConfig, LedOverride, LedPin, LedPinConfig,
    PhyCapabilities, PhyDriver, PulseFlags, TriggerSet, XwayGphy, XwayGphyWithReset, encode_pin,
};

/// Register maps for advanced use.
///
/// Addresses and bit fields of the standard Clause 22 registers and of the
/// XWAY vendor registers, for applications that need to inspect the chip
/// beyond what the driver exposes.
pub mod registers {
    pub use crate::internal::phy_regs::standard::{bmcr, bmsr, ctrl1000, mmd, mmd_ctrl, phy_reg};
    pub use crate::internal::phy_regs::xway::{int, ledch, ledcl, ledxh, ledxl, mmd_reg, reg};
}

/// Shared driver constants.
pub mod constants {
    pub use crate::internal::constants::{
        // LED pins
        DEFAULT_LED_PINS,
        LED_PIN_COUNT,
        // MDIO addressing
        MAX_PHY_ADDR,
        MAX_REG_ADDR,
        PHY_ID_EXACT_MASK,
        // Timing
        RESET_PULSE_US,
        RESET_RECOVERY_US,
    };
}
