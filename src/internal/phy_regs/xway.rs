//! XWAY GPHY Vendor-Specific Register Definitions
//!
//! Internal register definitions for the Lantiq/Intel XWAY PHY11G and
//! PHY22F Ethernet PHYs.
//!
//! # Module Organization
//!
//! - `reg`: Clause 22 vendor register addresses
//! - `int`: Interrupt mask / status bits (shared layout)
//! - `mmd_reg`: LED registers in the VEND2 MMD
//! - `ledch` / `ledcl`: Global LED control fields
//! - `ledxh` / `ledxl`: Per-pin LED configuration fields

#![allow(dead_code)]

// =============================================================================
// Clause 22 Vendor Registers
// =============================================================================

/// Clause 22 vendor register addresses
pub mod reg {
    /// Interrupt Mask Register
    pub const IMASK: u8 = 0x19;
    /// Interrupt Status Register (read-to-clear)
    pub const ISTAT: u8 = 0x1A;
}

/// IMASK / ISTAT bits
pub mod int {
    /// Wake-on-LAN event
    pub const WOL: u16 = 1 << 15;
    /// Master/slave resolution error
    pub const MSRE: u16 = 1 << 14;
    /// Next page received
    pub const NPRX: u16 = 1 << 13;
    /// Next page transmitted
    pub const NPTX: u16 = 1 << 12;
    /// Auto-negotiation error
    pub const ANE: u16 = 1 << 11;
    /// Auto-negotiation complete
    pub const ANC: u16 = 1 << 10;
    /// Link auto-downspeed detect
    pub const ADSC: u16 = 1 << 5;
    /// MDI polarity inversion change
    pub const MPIPC: u16 = 1 << 4;
    /// MDI/MDIX crossover change
    pub const MDIXC: u16 = 1 << 3;
    /// Duplex mode change
    pub const DXMC: u16 = 1 << 2;
    /// Link speed change
    pub const LSPC: u16 = 1 << 1;
    /// Link state change
    pub const LSTC: u16 = 1 << 0;
    /// Events the driver unmasks
    pub const TRACKED: u16 = LSTC | ADSC;
}

// =============================================================================
// LED Registers (MMD VEND2)
// =============================================================================

/// LED register addresses in the VEND2 MMD
pub mod mmd_reg {
    /// LED control high: scan inhibit class and blink frequencies
    pub const LEDCH: u16 = 0x01E0;
    /// LED control low: complex blink and complex scan classes
    pub const LEDCL: u16 = 0x01E1;
    /// LED0 high: fast blink and constant-on sources
    pub const LED0H: u16 = 0x01E2;
    /// LED0 low: pulse and slow blink sources
    pub const LED0L: u16 = 0x01E3;
    /// Distance between consecutive pins' register pairs
    pub const LED_STRIDE: u16 = 2;
}

/// LEDCH fields
pub mod ledch {
    /// Inverse-of-scan (NACS) class mask
    pub const NACS_MASK: u16 = 0x000F;
    /// Slow blink frequency shift
    pub const SBF_SHIFT: u16 = 4;
    /// Slow blink frequency mask
    pub const SBF_MASK: u16 = 0x0030;
    /// Fast blink frequency shift
    pub const FBF_SHIFT: u16 = 6;
    /// Fast blink frequency mask
    pub const FBF_MASK: u16 = 0x00C0;
}

/// LEDCL fields
pub mod ledcl {
    /// Complex blink class mask
    pub const CBLINK_MASK: u16 = 0x000F;
    /// Complex scan class shift
    pub const SCAN_SHIFT: u16 = 4;
    /// Complex scan class mask
    pub const SCAN_MASK: u16 = 0x00F0;
}

/// LEDxH fields
pub mod ledxh {
    /// Fast blink source mask
    pub const BLINKF_MASK: u16 = 0x000F;
    /// Constant-on source shift
    pub const CON_SHIFT: u16 = 4;
    /// Constant-on source mask
    pub const CON_MASK: u16 = 0x00F0;
}

/// LEDxL fields
pub mod ledxl {
    /// Pulse source mask
    pub const PULSE_MASK: u16 = 0x000F;
    /// Slow blink source shift
    pub const BLINKS_SHIFT: u16 = 4;
    /// Slow blink source mask
    pub const BLINKS_MASK: u16 = 0x00F0;
}
