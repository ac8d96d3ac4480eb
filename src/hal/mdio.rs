//! MDIO (Management Data Input/Output) HAL
//!
//! This module defines the bus abstraction the PHY drivers talk through. The
//! transport itself (SMI controller, bit-banged GPIO, a host bridge, ...) is
//! supplied by the application by implementing [`MdioBus`].
//!
//! # Clause 45 over Clause 22
//!
//! The XWAY LED registers live in the vendor-specific MMD (device 31). Clause 22
//! PHYs reach MMD registers indirectly through `MMD_CTRL` (13) and `MMD_DATA`
//! (14), as described in IEEE 802.3 Annex 22D:
//!
//! 1. `MMD_CTRL` ← function "address" | device
//! 2. `MMD_DATA` ← register address
//! 3. `MMD_CTRL` ← function "data, no post increment" | device
//! 4. `MMD_DATA` ↔ value
//!
//! [`MdioBus::read_mmd`] and [`MdioBus::write_mmd`] provide this sequence on
//! top of the two required single-register primitives. Implementations that
//! have native Clause 45 frames may override them.

use crate::error::{ConfigError, Result};
use crate::internal::constants::{MAX_PHY_ADDR, MAX_REG_ADDR};
use crate::internal::phy_regs::standard::{mmd_ctrl, phy_reg};

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations.
///
/// Every call is one blocking, ordered bus transaction. The driver performs no
/// locking of its own; if several PHYs share one physical bus the implementor
/// is responsible for serialising access. An MMD access is four transactions,
/// so a shared bus must hold its lock across [`read_mmd`](Self::read_mmd) and
/// [`write_mmd`](Self::write_mmd) as a whole.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Read a register in an MMD through the Clause 22 indirection registers
    fn read_mmd(&mut self, phy_addr: u8, devad: u8, reg_addr: u16) -> Result<u16> {
        select_mmd_register(self, phy_addr, devad, reg_addr)?;
        self.read(phy_addr, phy_reg::MMD_DATA)
    }

    /// Write a register in an MMD through the Clause 22 indirection registers
    fn write_mmd(&mut self, phy_addr: u8, devad: u8, reg_addr: u16, value: u16) -> Result<()> {
        select_mmd_register(self, phy_addr, devad, reg_addr)?;
        self.write(phy_addr, phy_reg::MMD_DATA, value)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    fn read_mmd(&mut self, phy_addr: u8, devad: u8, reg_addr: u16) -> Result<u16> {
        (**self).read_mmd(phy_addr, devad, reg_addr)
    }

    fn write_mmd(&mut self, phy_addr: u8, devad: u8, reg_addr: u16, value: u16) -> Result<()> {
        (**self).write_mmd(phy_addr, devad, reg_addr, value)
    }
}

/// Run steps 1-3 of the indirect access: latch `reg_addr` and switch
/// `MMD_DATA` to data mode for `devad`.
fn select_mmd_register<M: MdioBus + ?Sized>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg_addr: u16,
) -> Result<()> {
    let devad = mmd_device_field(devad)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDRESS | devad)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg_addr)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
}

fn mmd_device_field(devad: u8) -> Result<u16> {
    let field = devad as u16;
    if field & !mmd_ctrl::DEVAD_MASK != 0 {
        return Err(ConfigError::InvalidRegister.into());
    }
    Ok(field)
}

// =============================================================================
// Address Validation
// =============================================================================

/// Check PHY and Clause 22 register addresses against their 5-bit fields
///
/// Bus implementations call this before starting a frame.
pub fn validate_address(phy_addr: u8, reg_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress.into());
    }
    if reg_addr > MAX_REG_ADDR {
        return Err(ConfigError::InvalidRegister.into());
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
