//! Interrupt handling for the XWAY GPHY.
//!
//! The PHY exposes two Clause 22 vendor registers:
//!
//! - `IMASK` (0x19): one enable bit per event
//! - `ISTAT` (0x1A): pending events, cleared by reading
//!
//! The driver only ever unmasks link state change and link auto-downspeed
//! ([`InterruptFlags::TRACKED`]). Because `ISTAT` clears on read, every read
//! consumes the pending events: two back-to-back polls never report the same
//! event twice.

use bitflags::bitflags;

use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::xway::{int, reg};

// =============================================================================
// Interrupt Flags
// =============================================================================

bitflags! {
    /// Interrupt events, in the shared `IMASK` / `ISTAT` bit layout
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InterruptFlags: u16 {
        /// Wake-on-LAN event
        const WAKE_ON_LAN = int::WOL;
        /// Master/slave resolution error
        const MASTER_SLAVE_ERROR = int::MSRE;
        /// Next page received
        const NEXT_PAGE_RX = int::NPRX;
        /// Next page transmitted
        const NEXT_PAGE_TX = int::NPTX;
        /// Auto-negotiation error
        const AN_ERROR = int::ANE;
        /// Auto-negotiation complete
        const AN_COMPLETE = int::ANC;
        /// Link auto-downspeed detected
        const AUTO_DOWNSPEED = int::ADSC;
        /// MDI polarity inversion changed
        const MDI_POLARITY = int::MPIPC;
        /// MDI/MDIX crossover changed
        const MDIX = int::MDIXC;
        /// Duplex mode changed
        const DUPLEX = int::DXMC;
        /// Link speed changed
        const LINK_SPEED = int::LSPC;
        /// Link state changed
        const LINK_STATE = int::LSTC;

        /// Events the driver enables and reports
        const TRACKED = int::TRACKED;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterruptFlags {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "InterruptFlags({=u16:#06x})", self.bits());
    }
}

// =============================================================================
// Interrupt Status
// =============================================================================

/// Decoded `ISTAT` snapshot.
///
/// Convenience view over [`InterruptFlags`] for callers that prefer named
/// fields to bit tests. Every event bit has a field.
///
/// # Example
///
/// ```ignore
/// let status = controller.read_status(&mut mdio)?;
/// if status.link_state_changed {
///     // re-read BMSR and update the link
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// Link went up or down
    pub link_state_changed: bool,
    /// Link speed changed
    pub link_speed_changed: bool,
    /// Duplex mode changed
    pub duplex_changed: bool,
    /// Link was established at a lower speed than advertised
    pub auto_downspeed: bool,
    /// Auto-negotiation completed
    pub an_complete: bool,
    /// Auto-negotiation failed
    pub an_error: bool,
    /// MDI/MDIX crossover changed
    pub mdix_changed: bool,
    /// MDI polarity inversion changed
    pub polarity_changed: bool,
    /// Master/slave resolution failed
    pub master_slave_error: bool,
    /// Next page received
    pub next_page_received: bool,
    /// Next page transmitted
    pub next_page_transmitted: bool,
    /// Wake-on-LAN frame detected
    pub wake_on_lan: bool,
}

impl InterruptStatus {
    /// Create from a raw `ISTAT` value
    #[inline]
    pub fn from_raw(status: u16) -> Self {
        Self {
            link_state_changed: (status & int::LSTC) != 0,
            link_speed_changed: (status & int::LSPC) != 0,
            duplex_changed: (status & int::DXMC) != 0,
            auto_downspeed: (status & int::ADSC) != 0,
            an_complete: (status & int::ANC) != 0,
            an_error: (status & int::ANE) != 0,
            mdix_changed: (status & int::MDIXC) != 0,
            polarity_changed: (status & int::MPIPC) != 0,
            master_slave_error: (status & int::MSRE) != 0,
            next_page_received: (status & int::NPRX) != 0,
            next_page_transmitted: (status & int::NPTX) != 0,
            wake_on_lan: (status & int::WOL) != 0,
        }
    }

    /// Check if a tracked event is pending
    #[inline]
    pub fn any_tracked(&self) -> bool {
        self.link_state_changed || self.auto_downspeed
    }
}

impl From<InterruptFlags> for InterruptStatus {
    fn from(flags: InterruptFlags) -> Self {
        Self::from_raw(flags.bits())
    }
}

// =============================================================================
// Interrupt Controller
// =============================================================================

/// Mask / acknowledge / poll protocol for one PHY.
///
/// Holds no state beyond the PHY address; the event state lives in the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptController {
    phy_addr: u8,
}

impl InterruptController {
    /// Create a controller for the PHY at `phy_addr`
    #[must_use]
    pub const fn new(phy_addr: u8) -> Self {
        Self { phy_addr }
    }

    /// PHY address this controller talks to
    #[must_use]
    pub const fn phy_addr(&self) -> u8 {
        self.phy_addr
    }

    /// Value written to `IMASK` for the given enable state
    #[must_use]
    pub const fn mask_value(enabled: bool) -> u16 {
        if enabled { int::TRACKED } else { 0 }
    }

    /// Enable the tracked events, or mask everything
    pub fn configure_mask<M: MdioBus>(&self, mdio: &mut M, enabled: bool) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: IMASK <- {=u16:#06x}", self.phy_addr, Self::mask_value(enabled));

        mdio.write(self.phy_addr, reg::IMASK, Self::mask_value(enabled))
    }

    /// Clear all pending events by reading `ISTAT`
    ///
    /// The value read is discarded.
    pub fn acknowledge<M: MdioBus>(&self, mdio: &mut M) -> Result<()> {
        mdio.read(self.phy_addr, reg::ISTAT).map(|_| ())
    }

    /// Read and clear `ISTAT`, returning the tracked events that were pending
    ///
    /// Untracked events pending at the same time are consumed too.
    pub fn poll_pending<M: MdioBus>(&self, mdio: &mut M) -> Result<InterruptFlags> {
        let raw = mdio.read(self.phy_addr, reg::ISTAT)?;
        Ok(InterruptFlags::from_bits_truncate(raw) & InterruptFlags::TRACKED)
    }

    /// Read and clear `ISTAT`, returning every pending event
    pub fn read_status<M: MdioBus>(&self, mdio: &mut M) -> Result<InterruptFlags> {
        let raw = mdio.read(self.phy_addr, reg::ISTAT)?;
        Ok(InterruptFlags::from_bits_truncate(raw))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
