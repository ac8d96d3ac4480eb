//! Ethernet PHY Drivers
//!
//! This module provides a generic PHY driver trait, the XWAY GPHY driver and
//! the LED trigger encoder it programs the chip with.
//!
//! # Architecture
//!
//! The PHY layer communicates only through the [`MdioBus`](crate::hal::MdioBus)
//! interface, so it can be driven by any MAC's management controller and
//! tested with a mock bus.
//!
//! - [`generic`]: [`PhyDriver`] trait and IEEE 802.3 helpers
//! - [`trigger`]: [`TriggerSet`], the LED conditions named by board descriptions
//! - [`led`]: trigger sets to LED register words, and the register writers
//! - [`xway`]: [`XwayGphy`] and [`XwayGphyWithReset`]
//!
//! # Example
//!
//! ```ignore
//! use ph_xway_gphy::phy::{LedOverride, TriggerSet, XwayGphy};
//!
//! let phy = XwayGphy::probe(&mut mdio, 0, &DriverRegistry::xway())?;
//!
//! // Reprogram LED2 at runtime: fast blink during cable diagnostics
//! let led = LedOverride::new(2).with_blink_fast(TriggerSet::CDIAG);
//! phy.apply_led_override(&mut mdio, &led)?;
//! ```

pub mod generic;
pub mod led;
pub mod trigger;
pub mod xway;

pub use generic::{PhyCapabilities, PhyDriver, ieee802_3};
pub use led::{
    BlinkFrequency, BlinkSource, ConstantOnSource, GlobalLedConfig, LedClass, LedOverride, LedPin,
    LedPinConfig, LedSource, PulseFlags, apply_led_override, encode_pin, write_global_config,
    write_pin_config,
};
pub use trigger::TriggerSet;
pub use xway::{XwayGphy, XwayGphyWithReset};
