//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Internal constants and magic numbers
//! - [`phy_regs`]: IEEE 802.3 and XWAY vendor register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. The public facade re-exports
//! the register maps under [`crate::registers`].

pub(crate) mod constants;
pub(crate) mod phy_regs;
