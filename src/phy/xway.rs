//! XWAY GPHY Driver
//!
//! Driver for the Lantiq/Intel XWAY PHY11G (10/100/1000) and PHY22F (10/100)
//! Ethernet PHYs, both discrete and integrated in the xRX200 SoCs.
//!
//! # Initialization
//!
//! [`XwayGphy::config_init`] brings the chip to a known state:
//!
//! 1. Mask all interrupts (`IMASK` ← 0)
//! 2. Drain pending events (read `ISTAT`)
//! 3. Program the global LED registers: no scan inhibit, slow blink 2 Hz,
//!    fast blink 16 Hz, no complex functions
//! 4. Give LED0, LED1 and LED2 the default behaviour: on while a link is
//!    up at any speed, pulse on transmit and receive
//! 5. Apply the board's [`LedOverride`] list in order
//!
//! Steps 1 and 2 abort init on failure. Failures in the LED steps follow
//! [`LedWritePolicy`]. A failed init is not rolled back.
//!
//! LED3 is only bonded out on some packages and keeps its reset configuration
//! unless an override names it.
//!
//! # Revision Quirks
//!
//! | Revision | Interrupt line | Multi-port advertisement |
//! |----------|----------------|--------------------------|
//! | v1.3     | unusable       | required                 |
//! | v1.4     | yes            | required                 |
//! | v1.5+    | yes            | no                       |
//!
//! # Example
//!
//! ```ignore
//! use ph_xway_gphy::{DriverRegistry, GphyConfig, LedOverride, TriggerSet, XwayGphy};
//!
//! static LEDS: [LedOverride; 1] = [
//!     LedOverride::new(0).with_constant_on(TriggerSet::LINK1000),
//! ];
//!
//! let mut phy = XwayGphy::probe(&mut mdio, 0, &DriverRegistry::xway())?;
//! phy.config_init(&mut mdio, &GphyConfig::new().with_led_overrides(&LEDS))?;
//! phy.config_aneg(&mut mdio)?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::driver::config::{GphyConfig, LedWritePolicy};
use crate::driver::interrupt::{InterruptController, InterruptFlags};
use crate::driver::registry::{DeviceInfo, DriverRegistry};
use crate::error::{ConfigError, Result};
use crate::hal::mdio::{MdioBus, validate_address};
use crate::internal::constants::{DEFAULT_LED_PINS, RESET_PULSE_US, RESET_RECOVERY_US};
use crate::internal::phy_regs::standard::{ctrl1000, phy_reg};

use super::generic::{PhyCapabilities, PhyDriver, ieee802_3};
use super::led::{self, GlobalLedConfig, LedOverride, LedPin, LedPinConfig};

// =============================================================================
// XWAY GPHY Driver (without reset pin)
// =============================================================================

/// XWAY GPHY driver
///
/// Holds the PHY address and the matched [`DeviceInfo`]; all other state lives
/// in the chip. Use [`XwayGphyWithReset`] if the board wires the reset pin.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XwayGphy {
    /// PHY address (0-31)
    addr: u8,
    /// Matched device description
    device: &'static DeviceInfo,
}

impl XwayGphy {
    /// Create a driver for a known device without touching the bus
    pub const fn new(addr: u8, device: &'static DeviceInfo) -> Self {
        Self { addr, device }
    }

    /// Identify the PHY at `addr` and bind to the matching registry entry
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPhyAddress`] if `addr` is above 31
    /// - [`ConfigError::UnsupportedDevice`] if the identifier is not registered
    /// - the bus error if the identifier registers cannot be read
    pub fn probe<M: MdioBus>(mdio: &mut M, addr: u8, registry: &DriverRegistry) -> Result<Self> {
        validate_address(addr, phy_reg::PHYIDR1)?;

        let phy_id = ieee802_3::read_phy_id(mdio, addr)?;
        match registry.lookup(phy_id) {
            Some(device) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("PHY {}: {=u32:#010x} is {}", addr, phy_id, device.name);
                Ok(Self::new(addr, device))
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("PHY {}: unsupported identifier {=u32:#010x}", addr, phy_id);
                Err(ConfigError::UnsupportedDevice.into())
            }
        }
    }

    /// Matched device description
    pub const fn device(&self) -> &'static DeviceInfo {
        self.device
    }

    /// Link modes supported by this revision
    pub const fn capabilities(&self) -> PhyCapabilities {
        self.device.capabilities
    }

    /// Interrupt protocol for this PHY
    pub const fn interrupt_controller(&self) -> InterruptController {
        InterruptController::new(self.addr)
    }

    /// Run the init sequence
    ///
    /// See the [module documentation](self) for the steps.
    pub fn config_init<M: MdioBus>(&mut self, mdio: &mut M, config: &GphyConfig<'_>) -> Result<()> {
        let interrupts = self.interrupt_controller();
        let policy = config.led_write_policy;

        interrupts.configure_mask(mdio, false)?;
        interrupts.acknowledge(mdio)?;

        led::program_global(mdio, self.addr, &GlobalLedConfig::DEFAULT, policy)?;

        for pin in LedPin::ALL.into_iter().take(DEFAULT_LED_PINS as usize) {
            led::program_pin(mdio, self.addr, pin, &LedPinConfig::DEFAULT, policy)?;
        }

        for description in config.led_overrides {
            led::program_override(mdio, self.addr, description, policy)?;
        }

        if config.interrupts {
            self.config_intr(mdio, true)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "PHY {}: init done, {} LED override(s)",
            self.addr,
            config.led_overrides.len()
        );

        Ok(())
    }

    /// Encode and write one LED description outside of init
    ///
    /// Stops at the first failed register write. A description naming a pin
    /// outside 0-3 is skipped.
    pub fn apply_led_override<M: MdioBus>(
        &self,
        mdio: &mut M,
        description: &LedOverride,
    ) -> Result<()> {
        led::program_override(mdio, self.addr, description, LedWritePolicy::Strict)
    }

    /// Read and clear `ISTAT`, returning the tracked events that were pending
    pub fn poll_interrupts<M: MdioBus>(&self, mdio: &mut M) -> Result<InterruptFlags> {
        self.interrupt_controller().poll_pending(mdio)
    }
}

impl PhyDriver for XwayGphy {
    fn address(&self) -> u8 {
        self.addr
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.config_init(mdio, &GphyConfig::new())
    }

    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if self.device.needs_multi_port_advertisement() {
            let ctrl = mdio.read(self.addr, phy_reg::CTRL1000)?;
            mdio.write(self.addr, phy_reg::CTRL1000, ctrl | ctrl1000::MULTI_PORT_DEVICE)?;
        }
        ieee802_3::restart_auto_negotiation(mdio, self.addr)
    }

    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, enabled: bool) -> Result<()> {
        let enabled = enabled && self.device.has_interrupt_line();
        self.interrupt_controller().configure_mask(mdio, enabled)
    }

    fn ack_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.interrupt_controller().acknowledge(mdio)
    }

    fn did_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool> {
        Ok(!self.poll_interrupts(mdio)?.is_empty())
    }
}

// =============================================================================
// XWAY GPHY Driver with Reset Pin
// =============================================================================

/// XWAY GPHY driver with hardware reset pin
///
/// The reset pin is active-low.
///
/// # Example
///
/// ```ignore
/// let device = DriverRegistry::xway().lookup(PHY_ID_PHY11G_1_5).unwrap();
/// let mut phy = XwayGphyWithReset::new(0, device, reset_pin);
///
/// phy.hardware_reset(&mut delay)?;
/// phy.config_init(&mut mdio, &GphyConfig::new())?;
/// ```
#[derive(Debug)]
pub struct XwayGphyWithReset<RST: OutputPin> {
    /// Inner PHY driver
    inner: XwayGphy,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin> XwayGphyWithReset<RST> {
    /// Create a driver with reset pin
    ///
    /// The pin is driven high (inactive) immediately.
    pub fn new(addr: u8, device: &'static DeviceInfo, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self {
            inner: XwayGphy::new(addr, device),
            reset_pin,
        }
    }

    /// Pulse the reset pin low, then wait for the PHY to recover
    ///
    /// # Timing
    /// - Reset pulse: 10 ms
    /// - Recovery time: 50 ms
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.assert_reset()?;
        delay.delay_us(RESET_PULSE_US);

        self.deassert_reset()?;
        delay.delay_us(RESET_RECOVERY_US);

        Ok(())
    }

    /// Hold the PHY in reset
    pub fn assert_reset(&mut self) -> Result<()> {
        self.reset_pin
            .set_low()
            .map_err(|_| ConfigError::GpioError)?;
        Ok(())
    }

    /// Release the PHY from reset
    pub fn deassert_reset(&mut self) -> Result<()> {
        self.reset_pin
            .set_high()
            .map_err(|_| ConfigError::GpioError)?;
        Ok(())
    }

    /// Driver without the reset pin
    pub fn inner(&self) -> &XwayGphy {
        &self.inner
    }

    /// Consume the driver and return the reset pin
    pub fn into_reset_pin(self) -> RST {
        self.reset_pin
    }

    /// Run the init sequence
    pub fn config_init<M: MdioBus>(&mut self, mdio: &mut M, config: &GphyConfig<'_>) -> Result<()> {
        self.inner.config_init(mdio, config)
    }

    /// Encode and write one LED description outside of init
    pub fn apply_led_override<M: MdioBus>(
        &self,
        mdio: &mut M,
        description: &LedOverride,
    ) -> Result<()> {
        self.inner.apply_led_override(mdio, description)
    }
}

impl<RST: OutputPin> PhyDriver for XwayGphyWithReset<RST> {
    fn address(&self) -> u8 {
        self.inner.address()
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.init(mdio)
    }

    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.config_aneg(mdio)
    }

    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, enabled: bool) -> Result<()> {
        self.inner.config_intr(mdio, enabled)
    }

    fn ack_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.ack_interrupt(mdio)
    }

    fn did_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool> {
        self.inner.did_interrupt(mdio)
    }
}

#[cfg(test)]
#[allow(clippy::std_instead_of_alloc)]
mod tests {
    extern crate std;

    use super::*;
    use crate::driver::registry::{
        PHY_ID_PHY11G_1_3, PHY_ID_PHY11G_1_4, PHY_ID_PHY11G_1_5, PHY_ID_PHY22F_VR9,
    };
    use crate::error::{Error, IoError};
    use crate::internal::phy_regs::standard::bmcr;
    use crate::internal::phy_regs::xway::{int, reg};
    use crate::phy::trigger::TriggerSet;
    use crate::test_utils::{BusOp, MockDelay, MockMdioBus, MockPin, VEND2};
    use std::vec;
    use std::vec::Vec;

    const PHY: u8 = 0;

    fn device(id: u32) -> &'static DeviceInfo {
        DriverRegistry::xway().lookup(id).unwrap()
    }

    fn setup(id: u32) -> (MockMdioBus, XwayGphy) {
        let mdio = MockMdioBus::new();
        mdio.setup_xway(PHY, id);
        (mdio, XwayGphy::new(PHY, device(id)))
    }

    fn default_led_writes() -> Vec<(u8, u16, u16)> {
        vec![
            (VEND2, 0x01E0, 0x00C0),
            (VEND2, 0x01E1, 0x0000),
            (VEND2, 0x01E2, 0x0070),
            (VEND2, 0x01E3, 0x0003),
            (VEND2, 0x01E4, 0x0070),
            (VEND2, 0x01E5, 0x0003),
            (VEND2, 0x01E6, 0x0070),
            (VEND2, 0x01E7, 0x0003),
        ]
    }

    // =========================================================================
    // Probe Tests
    // =========================================================================

    #[test]
    fn probe_binds_registered_device() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_xway(7, PHY_ID_PHY22F_VR9);

        let phy = XwayGphy::probe(&mut mdio, 7, &DriverRegistry::xway()).unwrap();
        assert_eq!(phy.address(), 7);
        assert_eq!(phy.device().phy_id, PHY_ID_PHY22F_VR9);
        assert!(!phy.capabilities().is_gigabit());
    }

    #[test]
    fn probe_rejects_unknown_identifier() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_xway(0, 0x0007_C0F1);

        let err = XwayGphy::probe(&mut mdio, 0, &DriverRegistry::xway()).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::UnsupportedDevice));
    }

    #[test]
    fn probe_rejects_invalid_address_without_bus_access() {
        let mut mdio = MockMdioBus::new();

        let err = XwayGphy::probe(&mut mdio, 32, &DriverRegistry::xway()).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::InvalidPhyAddress));
        assert!(mdio.ops().is_empty());
    }

    #[test]
    fn probe_propagates_bus_error() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads_of(0, phy_reg::PHYIDR2);

        let err = XwayGphy::probe(&mut mdio, 0, &DriverRegistry::xway()).unwrap_err();
        assert_eq!(err, Error::Io(IoError::BusError));
    }

    // =========================================================================
    // Init Sequence Tests
    // =========================================================================

    #[test]
    fn init_masks_drains_then_programs_leds() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.set_register(PHY, reg::IMASK, 0xFFFF);
        mdio.set_register(PHY, reg::ISTAT, int::LSTC | int::ANC);

        phy.config_init(&mut mdio, &GphyConfig::new()).unwrap();

        let ops = mdio.ops();
        assert_eq!(ops[0], BusOp::Write(PHY, reg::IMASK, 0));
        assert_eq!(ops[1], BusOp::Read(PHY, reg::ISTAT));
        // 8 MMD writes of 4 bus transactions each
        assert_eq!(ops.len(), 2 + 8 * 4);

        assert_eq!(mdio.mmd_writes(PHY), default_led_writes());
        assert_eq!(mdio.get_register(PHY, reg::ISTAT), Some(0));
        assert_eq!(mdio.read_count(PHY, reg::ISTAT), 1);
    }

    #[test]
    fn init_never_defaults_led3() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        phy.init(&mut mdio).unwrap();

        assert!(
            mdio.mmd_writes(PHY)
                .iter()
                .all(|&(_, reg, _)| reg != 0x01E8 && reg != 0x01E9)
        );
    }

    #[test]
    fn init_mask_failure_aborts_everything() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.fail_writes_to(PHY, reg::IMASK);

        let err = phy.config_init(&mut mdio, &GphyConfig::new()).unwrap_err();
        assert_eq!(err, Error::Io(IoError::BusError));
        assert_eq!(mdio.ops(), vec![BusOp::Write(PHY, reg::IMASK, 0)]);
    }

    #[test]
    fn init_status_drain_failure_is_fatal() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.fail_reads_of(PHY, reg::ISTAT);

        let err = phy.config_init(&mut mdio, &GphyConfig::new()).unwrap_err();
        assert_eq!(err, Error::Io(IoError::BusError));
        assert_eq!(mdio.ops().len(), 2);
        assert!(mdio.mmd_writes(PHY).is_empty());
    }

    #[test]
    fn init_best_effort_continues_past_led_failures() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.fail_writes_to(PHY, phy_reg::MMD_CTRL);

        let leds = [LedOverride::new(3).with_pulse(TriggerSet::COLLISION)];
        let config = GphyConfig::new().with_led_overrides(&leds);

        phy.config_init(&mut mdio, &config).unwrap();
        // mask + drain, then one failed attempt per LED register: 2 global,
        // 6 defaults, 2 override
        assert_eq!(mdio.ops().len(), 2 + 10);
        assert!(mdio.mmd_writes(PHY).is_empty());
    }

    #[test]
    fn init_strict_stops_at_first_led_failure() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.fail_writes_to(PHY, phy_reg::MMD_CTRL);

        let config = GphyConfig::new().with_led_write_policy(LedWritePolicy::Strict);
        let err = phy.config_init(&mut mdio, &config).unwrap_err();

        assert_eq!(err, Error::Io(IoError::BusError));
        assert_eq!(mdio.ops().len(), 3);
    }

    #[test]
    fn init_applies_overrides_after_defaults() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        let leds = [
            LedOverride::new(1).with_constant_on(TriggerSet::LINK10 | TriggerSet::LINK100),
            LedOverride::new(9).with_blink_fast(TriggerSet::LINK_ANY),
            LedOverride::new(3)
                .with_blink_slow(TriggerSet::AUTONEG)
                .with_pulse(TriggerSet::empty()),
        ];

        phy.config_init(&mut mdio, &GphyConfig::new().with_led_overrides(&leds))
            .unwrap();

        let writes = mdio.mmd_writes(PHY);
        assert_eq!(writes[..8], default_led_writes()[..]);
        assert_eq!(
            writes[8..],
            [
                (VEND2, 0x01E4, 0x0030),
                (VEND2, 0x01E5, 0x0003),
                (VEND2, 0x01E8, 0x0070),
                (VEND2, 0x01E9, 0x00A3),
            ]
        );
        assert_eq!(mdio.get_mmd_register(PHY, VEND2, 0x01E4), Some(0x0030));
    }

    #[test]
    fn init_leaves_interrupts_masked_by_default() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        phy.init(&mut mdio).unwrap();

        assert_eq!(mdio.get_register(PHY, reg::IMASK), Some(0));
    }

    #[test]
    fn init_can_enable_interrupts() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        phy.config_init(&mut mdio, &GphyConfig::new().with_interrupts(true))
            .unwrap();

        assert_eq!(mdio.get_register(PHY, reg::IMASK), Some(int::TRACKED));
        assert_eq!(
            mdio.get_writes().last(),
            Some(&(PHY, reg::IMASK, int::TRACKED))
        );
    }

    // =========================================================================
    // Interrupt Tests
    // =========================================================================

    #[test]
    fn config_intr_respects_missing_interrupt_line() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_3);

        phy.config_intr(&mut mdio, true).unwrap();
        assert_eq!(mdio.get_register(PHY, reg::IMASK), Some(0));
    }

    #[test]
    fn config_intr_toggles_mask() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_4);

        phy.config_intr(&mut mdio, true).unwrap();
        assert_eq!(mdio.get_register(PHY, reg::IMASK), Some(0x0021));

        phy.config_intr(&mut mdio, false).unwrap();
        assert_eq!(mdio.get_register(PHY, reg::IMASK), Some(0));
    }

    #[test]
    fn did_interrupt_consumes_tracked_events() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.set_register(PHY, reg::ISTAT, int::ADSC);

        assert!(phy.did_interrupt(&mut mdio).unwrap());
        assert!(!phy.did_interrupt(&mut mdio).unwrap());
    }

    #[test]
    fn did_interrupt_ignores_untracked_events() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.set_register(PHY, reg::ISTAT, int::WOL | int::DXMC);

        assert!(!phy.did_interrupt(&mut mdio).unwrap());
    }

    #[test]
    fn ack_interrupt_reads_status_once() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        mdio.set_register(PHY, reg::ISTAT, int::LSTC);

        phy.ack_interrupt(&mut mdio).unwrap();
        assert_eq!(mdio.ops(), vec![BusOp::Read(PHY, reg::ISTAT)]);
        assert!(phy.poll_interrupts(&mut mdio).unwrap().is_empty());
    }

    // =========================================================================
    // Auto-negotiation Tests
    // =========================================================================

    #[test]
    fn config_aneg_sets_multi_port_on_affected_revisions() {
        for id in [PHY_ID_PHY11G_1_3, PHY_ID_PHY11G_1_4] {
            let (mut mdio, mut phy) = setup(id);
            phy.config_aneg(&mut mdio).unwrap();

            assert_eq!(
                mdio.get_register(PHY, phy_reg::CTRL1000),
                Some(0x0300 | ctrl1000::MULTI_PORT_DEVICE)
            );
            let bmcr_val = mdio.get_register(PHY, phy_reg::BMCR).unwrap();
            assert_ne!(bmcr_val & bmcr::AN_RESTART, 0);
        }
    }

    #[test]
    fn config_aneg_leaves_ctrl1000_alone_on_later_revisions() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);
        phy.config_aneg(&mut mdio).unwrap();

        assert_eq!(mdio.read_count(PHY, phy_reg::CTRL1000), 0);
        assert_eq!(mdio.get_register(PHY, phy_reg::CTRL1000), Some(0x0300));
        let bmcr_val = mdio.get_register(PHY, phy_reg::BMCR).unwrap();
        let restart = bmcr::AN_ENABLE | bmcr::AN_RESTART;
        assert_eq!(bmcr_val & restart, restart);
    }

    #[test]
    fn config_aneg_multi_port_write_failure_is_fatal() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_4);
        mdio.fail_writes_to(PHY, phy_reg::CTRL1000);

        let err = phy.config_aneg(&mut mdio).unwrap_err();
        assert_eq!(err, Error::Io(IoError::BusError));
        assert_eq!(mdio.read_count(PHY, phy_reg::BMCR), 0);
    }

    // =========================================================================
    // Power Management Tests
    // =========================================================================

    #[test]
    fn suspend_and_resume_toggle_power_down() {
        let (mut mdio, mut phy) = setup(PHY_ID_PHY11G_1_5);

        phy.suspend(&mut mdio).unwrap();
        assert_ne!(mdio.get_register(PHY, phy_reg::BMCR).unwrap() & bmcr::POWER_DOWN, 0);

        phy.resume(&mut mdio).unwrap();
        assert_eq!(mdio.get_register(PHY, phy_reg::BMCR).unwrap() & bmcr::POWER_DOWN, 0);
    }

    #[test]
    fn phy_id_reads_identifier() {
        let (mut mdio, phy) = setup(PHY_ID_PHY11G_1_4);
        assert_eq!(phy.phy_id(&mut mdio).unwrap(), PHY_ID_PHY11G_1_4);
    }

    #[test]
    fn apply_led_override_outside_init() {
        let (mut mdio, phy) = setup(PHY_ID_PHY11G_1_5);
        let led = LedOverride::new(2).with_blink_fast(TriggerSet::CDIAG);

        phy.apply_led_override(&mut mdio, &led).unwrap();
        assert_eq!(
            mdio.mmd_writes(PHY),
            vec![(VEND2, 0x01E6, 0x007C), (VEND2, 0x01E7, 0x0003)]
        );
    }

    // =========================================================================
    // Hardware Reset Tests
    // =========================================================================

    #[test]
    fn new_with_reset_releases_pin() {
        let phy = XwayGphyWithReset::new(0, device(PHY_ID_PHY11G_1_5), MockPin::default());
        assert_eq!(phy.into_reset_pin().levels, vec![true]);
    }

    #[test]
    fn hardware_reset_pulses_low_then_waits() {
        let mut phy = XwayGphyWithReset::new(0, device(PHY_ID_PHY11G_1_5), MockPin::default());
        let mut delay = MockDelay::new();

        phy.hardware_reset(&mut delay).unwrap();

        assert_eq!(delay.total_us(), (RESET_PULSE_US + RESET_RECOVERY_US) as u64);
        assert_eq!(phy.into_reset_pin().levels, vec![true, false, true]);
    }

    #[test]
    fn hardware_reset_reports_pin_failure() {
        let pin = MockPin {
            broken: true,
            ..MockPin::default()
        };
        let mut phy = XwayGphyWithReset::new(0, device(PHY_ID_PHY11G_1_5), pin);
        let mut delay = MockDelay::new();

        let err = phy.hardware_reset(&mut delay).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::GpioError));
        assert_eq!(delay.total_ns(), 0);
    }

    #[test]
    fn reset_variant_forwards_driver_hooks() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_xway(4, PHY_ID_PHY11G_1_3);
        let mut phy = XwayGphyWithReset::new(4, device(PHY_ID_PHY11G_1_3), MockPin::default());

        phy.init(&mut mdio).unwrap();
        phy.config_intr(&mut mdio, true).unwrap();

        assert_eq!(phy.address(), 4);
        assert_eq!(phy.inner().device().phy_id, PHY_ID_PHY11G_1_3);
        assert_eq!(mdio.get_register(4, reg::IMASK), Some(0));
        assert_eq!(mdio.mmd_writes(4).len(), 8);
    }
}
