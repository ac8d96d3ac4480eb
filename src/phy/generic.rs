//! Generic PHY Driver Trait
//!
//! This module defines the common interface for Ethernet PHY drivers, based on
//! the IEEE 802.3 Clause 22 standard registers, together with helpers that
//! implement the standard behaviour on top of any [`MdioBus`].

use crate::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY hardware capabilities
///
/// Indicates what link modes and features the PHY chip supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 1000BASE-T Full Duplex
    pub speed_1000_fd: bool,
    /// Supports 1000BASE-T Half Duplex
    pub speed_1000_hd: bool,
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
    /// Supports PAUSE flow control
    pub pause: bool,
    /// Supports asymmetric PAUSE
    pub pause_asymmetric: bool,
}

impl PhyCapabilities {
    /// 10/100 Mbps PHY with symmetric and asymmetric pause
    pub const fn basic() -> Self {
        Self {
            speed_1000_fd: false,
            speed_1000_hd: false,
            speed_100_fd: true,
            speed_100_hd: true,
            speed_10_fd: true,
            speed_10_hd: true,
            auto_negotiation: true,
            pause: true,
            pause_asymmetric: true,
        }
    }

    /// 10/100/1000 Mbps PHY with symmetric and asymmetric pause
    pub const fn gigabit() -> Self {
        Self {
            speed_1000_fd: true,
            speed_1000_hd: true,
            ..Self::basic()
        }
    }

    /// Whether any 1000BASE-T mode is supported
    pub const fn is_gigabit(&self) -> bool {
        self.speed_1000_fd || self.speed_1000_hd
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// The hooks a MAC driver or network stack calls on a PHY. Implementations
/// handle chip-specific register access and initialization sequences; the
/// [`ieee802_3`] helpers cover the standard parts.
///
/// # Example Implementation
///
/// ```ignore
/// struct MyPhy {
///     addr: u8,
/// }
///
/// impl PhyDriver for MyPhy {
///     fn address(&self) -> u8 { self.addr }
///
///     fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
///         self.config_intr(mdio, false)
///     }
///
///     fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
///         ieee802_3::restart_auto_negotiation(mdio, self.addr)
///     }
///
///     // ... other methods
/// }
/// ```
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Initialize the PHY with its default configuration
    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Configure and restart auto-negotiation
    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Enable or disable the PHY's interrupt output
    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, enabled: bool) -> Result<()>;

    /// Clear pending interrupt events
    fn ack_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Check whether this PHY raised the interrupt
    ///
    /// Consumes the pending events.
    fn did_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool>;

    /// Check if the link is up
    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.address())
    }

    /// Read the PHY identifier (OUI + model + revision)
    ///
    /// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.address())
    }

    /// Enter low power mode
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::set_power_down(mdio, self.address(), true)
    }

    /// Leave low power mode
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::set_power_down(mdio, self.address(), false)
    }
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::internal::phy_regs::standard::{bmcr, bmsr, phy_reg};

    /// Read BMSR and check link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Enable auto-negotiation and restart it
    pub fn restart_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
        )
    }

    /// Set or clear BMCR power down
    pub fn set_power_down<M: MdioBus>(mdio: &mut M, phy_addr: u8, power_down: bool) -> Result<()> {
        let mut bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        if power_down {
            bmcr_val |= bmcr::POWER_DOWN;
        } else {
            bmcr_val &= !bmcr::POWER_DOWN;
        }
        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
