//! PHY Register Definitions
//!
//! This module contains register definitions for PHY devices accessed via MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers and MMD indirection
//! - [`xway`] - XWAY GPHY vendor registers (Clause 22 and VEND2 MMD)
//!
//! # Access Method
//!
//! Clause 22 registers are accessed directly over MDIO. The LED registers live
//! in the VEND2 MMD and are reached indirectly through `MMD_CTRL`/`MMD_DATA`.

pub mod standard;
pub mod xway;
