//! Configuration types for the XWAY GPHY init sequence

use crate::phy::led::LedOverride;

/// How LED register write failures are handled during init
///
/// Interrupt masking and status draining always abort init on failure; this
/// only governs the LED programming steps that follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedWritePolicy {
    /// Log the failure and continue with the next register
    #[default]
    BestEffort,
    /// Return the first failure
    Strict,
}

/// Complete init configuration
///
/// Borrows the LED override list so that board descriptions can live in
/// `static` or stack storage without allocation.
///
/// # Example
///
/// ```ignore
/// static LEDS: [LedOverride; 2] = [
///     LedOverride::new(0).with_constant_on(TriggerSet::LINK1000),
///     LedOverride::new(1).with_pulse(TriggerSet::ACTIVITY),
/// ];
///
/// let config = GphyConfig::new().with_led_overrides(&LEDS);
/// phy.config_init(&mut mdio, &config)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GphyConfig<'a> {
    /// Per-pin LED descriptions, applied in order after the defaults
    pub led_overrides: &'a [LedOverride],
    /// LED write error handling
    pub led_write_policy: LedWritePolicy,
    /// Enable the tracked interrupts once init completes
    pub interrupts: bool,
}

impl Default for GphyConfig<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GphyConfig<'a> {
    /// Create a new configuration with defaults
    ///
    /// No overrides, best-effort LED writes, interrupts left masked.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            led_overrides: &[],
            led_write_policy: LedWritePolicy::BestEffort,
            interrupts: false,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the LED override list
    #[must_use]
    pub const fn with_led_overrides(mut self, overrides: &'a [LedOverride]) -> Self {
        self.led_overrides = overrides;
        self
    }

    /// Set the LED write policy
    #[must_use]
    pub const fn with_led_write_policy(mut self, policy: LedWritePolicy) -> Self {
        self.led_write_policy = policy;
        self
    }

    /// Enable or disable interrupts at the end of init
    #[must_use]
    pub const fn with_interrupts(mut self, enabled: bool) -> Self {
        self.interrupts = enabled;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
