//! Supported device table.
//!
//! Every XWAY GPHY revision is described by a static [`DeviceInfo`]: its
//! identifier, a display name, the link modes it supports and the quirks the
//! driver has to work around. Probing reads the PHY identifier and looks it up
//! in a [`DriverRegistry`].

use bitflags::bitflags;

use crate::internal::constants::PHY_ID_EXACT_MASK;
use crate::phy::generic::PhyCapabilities;

// =============================================================================
// Quirks
// =============================================================================

bitflags! {
    /// Per-revision workarounds
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Quirks: u8 {
        /// Advertise multi-port device (CTRL1000 bit 10) before restarting
        /// auto-negotiation; without it link-up with some partners takes
        /// several seconds.
        const MULTI_PORT_ADVERTISEMENT = 1 << 0;
        /// Interrupt output is unusable (errata); keep interrupts masked
        const NO_INTERRUPT_LINE = 1 << 1;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Quirks {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Quirks({=u8:#x})", self.bits());
    }
}

// =============================================================================
// Device Description
// =============================================================================

/// Static description of one supported PHY revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    /// PHY identifier, `(PHYIDR1 << 16) | PHYIDR2`
    pub phy_id: u32,
    /// Bits of the identifier that must match
    pub phy_id_mask: u32,
    /// Human-readable name
    pub name: &'static str,
    /// Supported link modes
    pub capabilities: PhyCapabilities,
    /// Workarounds needed by this revision
    pub quirks: Quirks,
}

impl DeviceInfo {
    /// Describe a device matched on its exact identifier
    pub const fn new(
        phy_id: u32,
        name: &'static str,
        capabilities: PhyCapabilities,
        quirks: Quirks,
    ) -> Self {
        Self {
            phy_id,
            phy_id_mask: PHY_ID_EXACT_MASK,
            name,
            capabilities,
            quirks,
        }
    }

    /// Whether `phy_id` identifies this device
    pub const fn matches(&self, phy_id: u32) -> bool {
        (phy_id & self.phy_id_mask) == (self.phy_id & self.phy_id_mask)
    }

    /// Whether the interrupt output may be enabled
    pub const fn has_interrupt_line(&self) -> bool {
        !self.quirks.contains(Quirks::NO_INTERRUPT_LINE)
    }

    /// Whether auto-negotiation needs the multi-port advertisement
    pub const fn needs_multi_port_advertisement(&self) -> bool {
        self.quirks.contains(Quirks::MULTI_PORT_ADVERTISEMENT)
    }
}

// =============================================================================
// XWAY Device Table
// =============================================================================

/// PHY11G v1.3
pub const PHY_ID_PHY11G_1_3: u32 = 0x0302_60D1;
/// PHY22F v1.3
pub const PHY_ID_PHY22F_1_3: u32 = 0x0302_60E1;
/// PHY11G v1.4
pub const PHY_ID_PHY11G_1_4: u32 = 0xD565_A400;
/// PHY22F v1.4
pub const PHY_ID_PHY22F_1_4: u32 = 0xD565_A410;
/// PHY11G v1.5 / v1.6
pub const PHY_ID_PHY11G_1_5: u32 = 0xD565_A401;
/// PHY22F v1.5 / v1.6
pub const PHY_ID_PHY22F_1_5: u32 = 0xD565_A411;
/// PHY11G in the xRX200 SoC
pub const PHY_ID_PHY11G_VR9: u32 = 0xD565_A409;
/// PHY22F in the xRX200 SoC
pub const PHY_ID_PHY22F_VR9: u32 = 0xD565_A419;

const V1_3: Quirks = Quirks::MULTI_PORT_ADVERTISEMENT.union(Quirks::NO_INTERRUPT_LINE);
const V1_4: Quirks = Quirks::MULTI_PORT_ADVERTISEMENT;
const LATER: Quirks = Quirks::empty();

const fn phy11g(phy_id: u32, name: &'static str, quirks: Quirks) -> DeviceInfo {
    DeviceInfo::new(phy_id, name, PhyCapabilities::gigabit(), quirks)
}

const fn phy22f(phy_id: u32, name: &'static str, quirks: Quirks) -> DeviceInfo {
    DeviceInfo::new(phy_id, name, PhyCapabilities::basic(), quirks)
}

/// Every supported XWAY GPHY revision
pub static XWAY_DEVICES: [DeviceInfo; 8] = [
    phy11g(PHY_ID_PHY11G_1_3, "Intel XWAY PHY11G (PEF 7071/PEF 7072) v1.3", V1_3),
    phy22f(PHY_ID_PHY22F_1_3, "Intel XWAY PHY22F (PEF 7061) v1.3", V1_3),
    phy11g(PHY_ID_PHY11G_1_4, "Intel XWAY PHY11G (PEF 7071/PEF 7072) v1.4", V1_4),
    phy22f(PHY_ID_PHY22F_1_4, "Intel XWAY PHY22F (PEF 7061) v1.4", V1_4),
    phy11g(PHY_ID_PHY11G_1_5, "Intel XWAY PHY11G (PEF 7071/PEF 7072) v1.5 / v1.6", LATER),
    phy22f(PHY_ID_PHY22F_1_5, "Intel XWAY PHY22F (PEF 7061) v1.5 / v1.6", LATER),
    phy11g(PHY_ID_PHY11G_VR9, "Intel XWAY PHY11G (xRX integrated)", LATER),
    phy22f(PHY_ID_PHY22F_VR9, "Intel XWAY PHY22F (xRX integrated)", LATER),
];

// =============================================================================
// Registry
// =============================================================================

/// Table of devices a probe may bind to
///
/// A plain value handed to probing; several registries may coexist.
#[derive(Debug, Clone, Copy)]
pub struct DriverRegistry {
    devices: &'static [DeviceInfo],
}

impl DriverRegistry {
    /// Registry over a custom device table
    pub const fn new(devices: &'static [DeviceInfo]) -> Self {
        Self { devices }
    }

    /// Registry of all supported XWAY GPHY revisions
    pub const fn xway() -> Self {
        Self::new(&XWAY_DEVICES)
    }

    /// Find the device matching `phy_id`; the first match wins
    pub fn lookup(&self, phy_id: u32) -> Option<&'static DeviceInfo> {
        self.devices.iter().find(|info| info.matches(phy_id))
    }

    /// Registered devices in table order
    pub fn devices(&self) -> &'static [DeviceInfo] {
        self.devices
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::xway()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
