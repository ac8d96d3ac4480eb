//! IEEE 802.3 PHY Register Definitions
//!
//! This module contains the standard PHY register addresses and bit definitions
//! as specified in IEEE 802.3 Clause 22, plus the Clause 45 MMD indirection
//! registers (Annex 22D). These are internal implementation details used by
//! the MDIO layer and the PHY drivers.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 9 | CTRL1000 | 1000BASE-T Control |
//! | 10 | STAT1000 | 1000BASE-T Status |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |

// Allow unused constants - these are complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// 1000BASE-T Control Register
    pub const CTRL1000: u8 = 9;
    /// 1000BASE-T Status Register
    pub const STAT1000: u8 = 10;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select LSB (100 Mbps if set and SPEED_1000 clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MAC interface
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
    /// Speed select MSB (1000 Mbps if set and SPEED_100 clear)
    pub const SPEED_1000: u16 = 1 << 6;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register present
    pub const ESTATUS: u16 = 1 << 8;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (1 = link up, 0 = link down)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// CTRL1000 - 1000BASE-T Control Register (Register 9)
// =============================================================================

/// CTRL1000 (1000BASE-T Control Register) bits
pub mod ctrl1000 {
    /// Port type: advertise as a multi-port device (IEEE 802.3 40.5.1.1)
    pub const MULTI_PORT_DEVICE: u16 = 1 << 10;
    /// 1000BASE-T full duplex advertised
    pub const ADV_1000_FD: u16 = 1 << 9;
    /// 1000BASE-T half duplex advertised
    pub const ADV_1000_HD: u16 = 1 << 8;
}

// =============================================================================
// MMD_CTRL - MMD Access Control Register (Register 13)
// =============================================================================

/// MMD_CTRL (MMD Access Control Register) fields
///
/// Bits 15:14 select the function of the following MMD_DATA access,
/// bits 4:0 carry the MMD device address.
pub mod mmd_ctrl {
    /// Function: MMD_DATA holds the register address
    pub const FUNC_ADDRESS: u16 = 0x0000;
    /// Function: MMD_DATA holds data, no post-increment
    pub const FUNC_DATA: u16 = 0x4000;
    /// Function: MMD_DATA holds data, post-increment on read and write
    pub const FUNC_DATA_POST_INC_RW: u16 = 0x8000;
    /// Function: MMD_DATA holds data, post-increment on write only
    pub const FUNC_DATA_POST_INC_W: u16 = 0xC000;
    /// Function field mask
    pub const FUNC_MASK: u16 = 0xC000;
    /// Device address field mask
    pub const DEVAD_MASK: u16 = 0x001F;
}

/// MMD device addresses (IEEE 802.3 Clause 45)
pub mod mmd {
    /// Physical Medium Attachment / Physical Medium Dependent
    pub const PMAPMD: u8 = 1;
    /// Physical Coding Sublayer
    pub const PCS: u8 = 3;
    /// Auto-Negotiation
    pub const AN: u8 = 7;
    /// Vendor specific 1
    pub const VEND1: u8 = 30;
    /// Vendor specific 2
    pub const VEND2: u8 = 31;
}
