//! LED Configuration
//!
//! The XWAY GPHY drives up to four LED pins. Each pin has four independent
//! sources, packed into two registers of the vendor MMD:
//!
//! | Register | Bits 7:4 | Bits 3:0 |
//! |----------|----------|----------|
//! | `LEDxH` (0x1E2 + 2x) | constant-on source | fast-blink source |
//! | `LEDxL` (0x1E3 + 2x) | slow-blink source | pulse sources |
//!
//! Constant-on, fast-blink and slow-blink each hold a single source code. A
//! [`TriggerSet`] usually names several triggers, so it is reduced to one code
//! by walking an ordered rule table and taking the first rule whose triggers
//! are all present (see [`BLINK_RULES`] and [`CONSTANT_ON_RULES`]). Pulse is a
//! plain bitmask: transmit, receive and collision activity combine freely.
//!
//! Two further registers, `LEDCH`/`LEDCL`, hold chip-wide settings
//! ([`GlobalLedConfig`]).
//!
//! # Absent vs. empty trigger sets
//!
//! A source that is not described, or described with an empty set, keeps the
//! driver default ([`LedPinConfig::DEFAULT`]). A source described with
//! triggers that match no rule is switched off explicitly.

use bitflags::bitflags;

use crate::driver::config::LedWritePolicy;
use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::constants::LED_PIN_COUNT;
use crate::internal::phy_regs::standard::mmd;
use crate::internal::phy_regs::xway::{ledch, ledcl, ledxh, ledxl, mmd_reg};

use super::trigger::TriggerSet;

// =============================================================================
// Source Codes
// =============================================================================

/// Blink source code, shared by the fast-blink and slow-blink fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BlinkSource {
    /// Never blink
    #[default]
    None = 0x0,
    /// Link at 10 Mbit/s
    Link10 = 0x1,
    /// Link at 100 Mbit/s
    Link100 = 0x2,
    /// Link at 10 or 100 Mbit/s
    Link10Or100 = 0x3,
    /// Link at 1000 Mbit/s
    Link1000 = 0x4,
    /// Link at 10 or 1000 Mbit/s
    Link10Or1000 = 0x5,
    /// Link at 100 or 1000 Mbit/s
    Link100Or1000 = 0x6,
    /// Link at any speed
    LinkAny = 0x7,
    /// PHY in power down
    PowerDown = 0x8,
    /// EEE low power idle
    Eee = 0x9,
    /// Auto-negotiation in progress
    AutoNeg = 0xA,
    /// Cable test A (ABIST) running
    CableTestA = 0xB,
    /// Cable diagnostics running
    CableDiag = 0xC,
}

/// Constant-on source code
///
/// Same encoding as [`BlinkSource`] plus the two medium indications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ConstantOnSource {
    /// Never on
    #[default]
    None = 0x0,
    /// Link at 10 Mbit/s
    Link10 = 0x1,
    /// Link at 100 Mbit/s
    Link100 = 0x2,
    /// Link at 10 or 100 Mbit/s
    Link10Or100 = 0x3,
    /// Link at 1000 Mbit/s
    Link1000 = 0x4,
    /// Link at 10 or 1000 Mbit/s
    Link10Or1000 = 0x5,
    /// Link at 100 or 1000 Mbit/s
    Link100Or1000 = 0x6,
    /// Link at any speed
    LinkAny = 0x7,
    /// PHY in power down
    PowerDown = 0x8,
    /// EEE low power idle
    Eee = 0x9,
    /// Auto-negotiation in progress
    AutoNeg = 0xA,
    /// Cable test A (ABIST) running
    CableTestA = 0xB,
    /// Cable diagnostics running
    CableDiag = 0xC,
    /// Copper medium selected
    Copper = 0xD,
    /// Fiber medium selected
    Fiber = 0xE,
}

bitflags! {
    /// Pulse sources; any combination may be set
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PulseFlags: u8 {
        /// Pulse on transmit activity
        const TX_ACTIVITY = 0x1;
        /// Pulse on receive activity
        const RX_ACTIVITY = 0x2;
        /// Pulse on collision
        const COLLISION = 0x4;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PulseFlags {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "PulseFlags({=u8:#x})", self.bits());
    }
}

impl PulseFlags {
    /// Collect the pulse sources named in a trigger set
    ///
    /// Every other trigger is ignored.
    pub const fn from_triggers(triggers: TriggerSet) -> Self {
        let mut flags = Self::empty();
        if triggers.contains(TriggerSet::TX_ACTIVITY) {
            flags = flags.union(Self::TX_ACTIVITY);
        }
        if triggers.contains(TriggerSet::RX_ACTIVITY) {
            flags = flags.union(Self::RX_ACTIVITY);
        }
        if triggers.contains(TriggerSet::COLLISION) {
            flags = flags.union(Self::COLLISION);
        }
        flags
    }
}

// =============================================================================
// Priority Rules
// =============================================================================

/// One step of a priority ladder: `code` applies when all of `requires` is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<C> {
    /// Triggers that must all be present
    pub requires: TriggerSet,
    /// Code selected by this rule
    pub code: C,
}

impl<C> Rule<C> {
    const fn new(requires: TriggerSet, code: C) -> Self {
        Self { requires, code }
    }

    /// Whether this rule fires for `triggers`
    pub fn matches(&self, triggers: TriggerSet) -> bool {
        !self.requires.is_empty() && triggers.contains(self.requires)
    }
}

/// Return the code of the first matching rule, or `none`
pub fn first_match<C: Copy>(rules: &[Rule<C>], triggers: TriggerSet, none: C) -> C {
    rules
        .iter()
        .find(|rule| rule.matches(triggers))
        .map_or(none, |rule| rule.code)
}

const L10: TriggerSet = TriggerSet::LINK10;
const L100: TriggerSet = TriggerSet::LINK100;
const L1000: TriggerSet = TriggerSet::LINK1000;

/// Priority ladder for the fast-blink and slow-blink sources
///
/// Richer link combinations come first so that, for example, all three link
/// speeds select [`BlinkSource::LinkAny`] even when other triggers are set.
pub const BLINK_RULES: [Rule<BlinkSource>; 12] = [
    Rule::new(TriggerSet::LINK_ANY, BlinkSource::LinkAny),
    Rule::new(L10.union(L1000), BlinkSource::Link10Or1000),
    Rule::new(L10.union(L100), BlinkSource::Link10Or100),
    Rule::new(L100.union(L1000), BlinkSource::Link100Or1000),
    Rule::new(L10, BlinkSource::Link10),
    Rule::new(L100, BlinkSource::Link100),
    Rule::new(L1000, BlinkSource::Link1000),
    Rule::new(TriggerSet::POWER_DOWN, BlinkSource::PowerDown),
    Rule::new(TriggerSet::EEE, BlinkSource::Eee),
    Rule::new(TriggerSet::AUTONEG, BlinkSource::AutoNeg),
    Rule::new(TriggerSet::ABIST, BlinkSource::CableTestA),
    Rule::new(TriggerSet::CDIAG, BlinkSource::CableDiag),
];

/// Priority ladder for the constant-on source
///
/// The blink ladder followed by the medium indications, copper first.
pub const CONSTANT_ON_RULES: [Rule<ConstantOnSource>; 14] = [
    Rule::new(TriggerSet::LINK_ANY, ConstantOnSource::LinkAny),
    Rule::new(L10.union(L1000), ConstantOnSource::Link10Or1000),
    Rule::new(L10.union(L100), ConstantOnSource::Link10Or100),
    Rule::new(L100.union(L1000), ConstantOnSource::Link100Or1000),
    Rule::new(L10, ConstantOnSource::Link10),
    Rule::new(L100, ConstantOnSource::Link100),
    Rule::new(L1000, ConstantOnSource::Link1000),
    Rule::new(TriggerSet::POWER_DOWN, ConstantOnSource::PowerDown),
    Rule::new(TriggerSet::EEE, ConstantOnSource::Eee),
    Rule::new(TriggerSet::AUTONEG, ConstantOnSource::AutoNeg),
    Rule::new(TriggerSet::ABIST, ConstantOnSource::CableTestA),
    Rule::new(TriggerSet::CDIAG, ConstantOnSource::CableDiag),
    Rule::new(TriggerSet::COPPER_MEDIUM, ConstantOnSource::Copper),
    Rule::new(TriggerSet::FIBER_MEDIUM, ConstantOnSource::Fiber),
];

/// A single-code LED source resolved through a priority ladder
pub trait LedSource: Copy + Sized + 'static {
    /// Code written when no rule matches
    const NONE: Self;
    /// Ordered rules, first match wins
    const RULES: &'static [Rule<Self>];

    /// Reduce a trigger set to one source code
    fn resolve(triggers: TriggerSet) -> Self {
        first_match(Self::RULES, triggers, Self::NONE)
    }

    /// Raw 4-bit field value
    fn bits(self) -> u16;
}

impl LedSource for BlinkSource {
    const NONE: Self = BlinkSource::None;
    const RULES: &'static [Rule<Self>] = &BLINK_RULES;

    fn bits(self) -> u16 {
        self as u16
    }
}

impl LedSource for ConstantOnSource {
    const NONE: Self = ConstantOnSource::None;
    const RULES: &'static [Rule<Self>] = &CONSTANT_ON_RULES;

    fn bits(self) -> u16 {
        self as u16
    }
}

// =============================================================================
// LED Pins
// =============================================================================

/// Physical LED output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedPin {
    /// LED0
    Led0 = 0,
    /// LED1
    Led1 = 1,
    /// LED2
    Led2 = 2,
    /// LED3 (only bonded out on some packages)
    Led3 = 3,
}

impl LedPin {
    /// All pins in register order
    pub const ALL: [LedPin; LED_PIN_COUNT as usize] =
        [LedPin::Led0, LedPin::Led1, LedPin::Led2, LedPin::Led3];

    /// Map a configuration index to a pin, `None` if the chip has no such pin
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(LedPin::Led0),
            1 => Some(LedPin::Led1),
            2 => Some(LedPin::Led2),
            3 => Some(LedPin::Led3),
            _ => None,
        }
    }

    /// Pin number
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// MMD address of this pin's `LEDxH` register
    pub const fn high_register(self) -> u16 {
        mmd_reg::LED0H + mmd_reg::LED_STRIDE * self as u16
    }

    /// MMD address of this pin's `LEDxL` register
    pub const fn low_register(self) -> u16 {
        mmd_reg::LED0L + mmd_reg::LED_STRIDE * self as u16
    }
}

impl TryFrom<u32> for LedPin {
    type Error = ();

    fn try_from(index: u32) -> core::result::Result<Self, Self::Error> {
        Self::from_index(index).ok_or(())
    }
}

// =============================================================================
// Pin Configuration
// =============================================================================

/// Hardware-ready configuration of one LED pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPinConfig {
    /// Fast blink source
    pub fast_blink: BlinkSource,
    /// Constant-on source
    pub constant_on: ConstantOnSource,
    /// Pulse sources
    pub pulse: PulseFlags,
    /// Slow blink source
    pub slow_blink: BlinkSource,
}

impl LedPinConfig {
    /// Driver default: on while a link is up, pulsing on traffic, no blinking
    pub const DEFAULT: Self = Self {
        fast_blink: BlinkSource::None,
        constant_on: ConstantOnSource::LinkAny,
        pulse: PulseFlags::TX_ACTIVITY.union(PulseFlags::RX_ACTIVITY),
        slow_blink: BlinkSource::None,
    };

    /// `LEDxH` value: fast blink in bits 3:0, constant-on in bits 7:4
    pub fn high_word(&self) -> u16 {
        (self.fast_blink.bits() & ledxh::BLINKF_MASK)
            | ((self.constant_on.bits() << ledxh::CON_SHIFT) & ledxh::CON_MASK)
    }

    /// `LEDxL` value: pulse in bits 3:0, slow blink in bits 7:4
    pub fn low_word(&self) -> u16 {
        (self.pulse.bits() as u16 & ledxl::PULSE_MASK)
            | ((self.slow_blink.bits() << ledxl::BLINKS_SHIFT) & ledxl::BLINKS_MASK)
    }
}

impl Default for LedPinConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Derive the configuration of one LED pin from its trigger sets
///
/// Returns `None` when `pin_index` does not name one of the four pins; callers
/// skip such descriptions without touching the hardware.
///
/// A `None` or empty trigger set keeps that source's default from
/// [`LedPinConfig::DEFAULT`]; any other set goes through the source's ladder.
pub fn encode_pin(
    pin_index: u32,
    blink_fast: Option<TriggerSet>,
    constant_on: Option<TriggerSet>,
    pulse: Option<TriggerSet>,
    blink_slow: Option<TriggerSet>,
) -> Option<LedPinConfig> {
    LedPin::from_index(pin_index)?;
    Some(resolve_sources(blink_fast, constant_on, pulse, blink_slow))
}

fn resolve_sources(
    blink_fast: Option<TriggerSet>,
    constant_on: Option<TriggerSet>,
    pulse: Option<TriggerSet>,
    blink_slow: Option<TriggerSet>,
) -> LedPinConfig {
    let described = |triggers: Option<TriggerSet>| triggers.filter(|t| !t.is_empty());
    let defaults = LedPinConfig::DEFAULT;
    LedPinConfig {
        fast_blink: described(blink_fast).map_or(defaults.fast_blink, BlinkSource::resolve),
        constant_on: described(constant_on)
            .map_or(defaults.constant_on, ConstantOnSource::resolve),
        pulse: described(pulse).map_or(defaults.pulse, PulseFlags::from_triggers),
        slow_blink: described(blink_slow).map_or(defaults.slow_blink, BlinkSource::resolve),
    }
}

// =============================================================================
// Per-pin Override Description
// =============================================================================

/// Board-supplied description of one LED pin
///
/// Mirrors the external configuration node: a mandatory pin index plus an
/// optional trigger set per LED function.
///
/// # Example
///
/// ```ignore
/// const WAN_LED: LedOverride = LedOverride::new(1)
///     .with_constant_on(TriggerSet::LINK10.union(TriggerSet::LINK100))
///     .with_pulse(TriggerSet::ACTIVITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOverride {
    /// Pin index as found in the configuration (valid: 0-3)
    pub pin: u32,
    /// "blink-fast" triggers
    pub blink_fast: Option<TriggerSet>,
    /// "constant-on" triggers
    pub constant_on: Option<TriggerSet>,
    /// "pulse" triggers
    pub pulse: Option<TriggerSet>,
    /// "blink-slow" triggers
    pub blink_slow: Option<TriggerSet>,
}

impl LedOverride {
    /// Description of `pin` with every function left at its default
    pub const fn new(pin: u32) -> Self {
        Self {
            pin,
            blink_fast: None,
            constant_on: None,
            pulse: None,
            blink_slow: None,
        }
    }

    /// Set the fast blink triggers
    #[must_use]
    pub const fn with_blink_fast(mut self, triggers: TriggerSet) -> Self {
        self.blink_fast = Some(triggers);
        self
    }

    /// Set the constant-on triggers
    #[must_use]
    pub const fn with_constant_on(mut self, triggers: TriggerSet) -> Self {
        self.constant_on = Some(triggers);
        self
    }

    /// Set the pulse triggers
    #[must_use]
    pub const fn with_pulse(mut self, triggers: TriggerSet) -> Self {
        self.pulse = Some(triggers);
        self
    }

    /// Set the slow blink triggers
    #[must_use]
    pub const fn with_blink_slow(mut self, triggers: TriggerSet) -> Self {
        self.blink_slow = Some(triggers);
        self
    }

    /// Resolve to a pin and its configuration, `None` for an invalid pin
    pub fn encode(&self) -> Option<(LedPin, LedPinConfig)> {
        let pin = LedPin::from_index(self.pin)?;
        let config =
            resolve_sources(self.blink_fast, self.constant_on, self.pulse, self.blink_slow);
        Some((pin, config))
    }
}

// =============================================================================
// Global LED Configuration
// =============================================================================

/// Event class used by the chip-wide scan and complex-blink functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedClass {
    /// Function disabled
    #[default]
    None = 0,
    /// Link
    Link = 1,
    /// Power down
    PowerDown = 2,
    /// EEE
    Eee = 3,
    /// Auto-negotiation
    AutoNeg = 4,
    /// Cable test A
    CableTestA = 5,
    /// Cable diagnostics
    CableDiag = 6,
    /// Test mode
    Test = 7,
}

/// Blink frequency selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BlinkFrequency {
    /// 2 Hz
    Hz2 = 0,
    /// 4 Hz
    Hz4 = 1,
    /// 8 Hz
    Hz8 = 2,
    /// 16 Hz
    Hz16 = 3,
}

/// Chip-wide LED settings held in `LEDCH` and `LEDCL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlobalLedConfig {
    /// Class that inhibits the normal LED scan (NACS)
    pub scan_inhibit: LedClass,
    /// Slow blink frequency
    pub slow_blink: BlinkFrequency,
    /// Fast blink frequency
    pub fast_blink: BlinkFrequency,
    /// Complex blink class
    pub complex_blink: LedClass,
    /// Complex scan class
    pub complex_scan: LedClass,
}

impl GlobalLedConfig {
    /// Settings written at init: scan disabled, 2 Hz slow, 16 Hz fast,
    /// no complex functions
    pub const DEFAULT: Self = Self {
        scan_inhibit: LedClass::None,
        slow_blink: BlinkFrequency::Hz2,
        fast_blink: BlinkFrequency::Hz16,
        complex_blink: LedClass::None,
        complex_scan: LedClass::None,
    };

    /// `LEDCH` value
    pub const fn ledch(&self) -> u16 {
        (self.scan_inhibit as u16 & ledch::NACS_MASK)
            | ((self.slow_blink as u16) << ledch::SBF_SHIFT) & ledch::SBF_MASK
            | ((self.fast_blink as u16) << ledch::FBF_SHIFT) & ledch::FBF_MASK
    }

    /// `LEDCL` value
    pub const fn ledcl(&self) -> u16 {
        (self.complex_blink as u16 & ledcl::CBLINK_MASK)
            | ((self.complex_scan as u16) << ledcl::SCAN_SHIFT) & ledcl::SCAN_MASK
    }
}

impl Default for GlobalLedConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Register Programming
// =============================================================================

/// Write one VEND2 register, swallowing the error under the best-effort policy
fn write_led_register<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    reg_addr: u16,
    value: u16,
    policy: LedWritePolicy,
) -> Result<()> {
    match mdio.write_mmd(phy_addr, mmd::VEND2, reg_addr, value) {
        #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
        Err(e) if policy == LedWritePolicy::BestEffort => {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "PHY {}: LED register {:#06x} write failed ({}), continuing",
                phy_addr,
                reg_addr,
                e
            );
            Ok(())
        }
        result => result,
    }
}

pub(crate) fn program_global(
    mdio: &mut impl MdioBus,
    phy_addr: u8,
    config: &GlobalLedConfig,
    policy: LedWritePolicy,
) -> Result<()> {
    write_led_register(mdio, phy_addr, mmd_reg::LEDCH, config.ledch(), policy)?;
    write_led_register(mdio, phy_addr, mmd_reg::LEDCL, config.ledcl(), policy)
}

pub(crate) fn program_pin(
    mdio: &mut impl MdioBus,
    phy_addr: u8,
    pin: LedPin,
    config: &LedPinConfig,
    policy: LedWritePolicy,
) -> Result<()> {
    #[cfg(feature = "defmt")]
    defmt::debug!("PHY {}: {} <- {}", phy_addr, pin, config);

    write_led_register(mdio, phy_addr, pin.high_register(), config.high_word(), policy)?;
    write_led_register(mdio, phy_addr, pin.low_register(), config.low_word(), policy)
}

pub(crate) fn program_override(
    mdio: &mut impl MdioBus,
    phy_addr: u8,
    led: &LedOverride,
    policy: LedWritePolicy,
) -> Result<()> {
    match led.encode() {
        Some((pin, config)) => program_pin(mdio, phy_addr, pin, &config, policy),
        None => {
            #[cfg(feature = "defmt")]
            defmt::debug!("PHY {}: ignoring LED description for pin {}", phy_addr, led.pin);
            Ok(())
        }
    }
}

/// Write the chip-wide LED registers
pub fn write_global_config<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    config: &GlobalLedConfig,
) -> Result<()> {
    program_global(mdio, phy_addr, config, LedWritePolicy::Strict)
}

/// Write one pin's `LEDxH` then `LEDxL` register
pub fn write_pin_config<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    pin: LedPin,
    config: &LedPinConfig,
) -> Result<()> {
    program_pin(mdio, phy_addr, pin, config, LedWritePolicy::Strict)
}

/// Encode and write one board-supplied LED description
///
/// A description naming a pin outside 0-3 is skipped: no register is touched
/// and `Ok(())` is returned.
pub fn apply_led_override<M: MdioBus>(mdio: &mut M, phy_addr: u8, led: &LedOverride) -> Result<()> {
    program_override(mdio, phy_addr, led, LedWritePolicy::Strict)
}

// =============================================================================
// Unit Tests
// =============================================================================
