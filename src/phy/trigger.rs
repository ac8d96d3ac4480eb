//! LED trigger flags
//!
//! A trigger is a condition the PHY can drive an LED from: a link speed, a
//! power state, a diagnostic mode, a medium or a kind of traffic. Board
//! descriptions name the triggers they want per LED function ("blink-fast",
//! "constant-on", "pulse", "blink-slow") as a [`TriggerSet`].

use bitflags::bitflags;

bitflags! {
    /// Set of LED triggers.
    ///
    /// Bit positions follow declaration order, so a raw `u32` configuration
    /// property converts with [`TriggerSet::from_bits_truncate`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TriggerSet: u32 {
        /// Link up at 10 Mbit/s
        const LINK10 = 1 << 0;
        /// Link up at 100 Mbit/s
        const LINK100 = 1 << 1;
        /// Link up at 1000 Mbit/s
        const LINK1000 = 1 << 2;
        /// PHY powered down
        const POWER_DOWN = 1 << 3;
        /// Energy Efficient Ethernet (low power idle) active
        const EEE = 1 << 4;
        /// Auto-negotiation in progress
        const AUTONEG = 1 << 5;
        /// Analog built-in self test (cable test A)
        const ABIST = 1 << 6;
        /// Cable diagnostics running
        const CDIAG = 1 << 7;
        /// Test mode
        const TEST = 1 << 8;
        /// Transmit activity
        const TX_ACTIVITY = 1 << 9;
        /// Receive activity
        const RX_ACTIVITY = 1 << 10;
        /// Collision
        const COLLISION = 1 << 11;
        /// Copper medium selected
        const COPPER_MEDIUM = 1 << 12;
        /// Fiber medium selected
        const FIBER_MEDIUM = 1 << 13;

        /// Link up at any speed
        const LINK_ANY = Self::LINK10.bits() | Self::LINK100.bits() | Self::LINK1000.bits();
        /// Any traffic
        const ACTIVITY = Self::TX_ACTIVITY.bits() | Self::RX_ACTIVITY.bits();
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TriggerSet {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "TriggerSet({=u32:#06x})", self.bits());
    }
}
