//! Error types for the XWAY GPHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Probe, addressing and reset-pin failures
//! - [`IoError`]: Register transport failures on the MDIO bus
//!
//! The unified [`Error`] enum wraps both domains and is returned
//! by most driver methods.
//!
//! An out-of-range LED pin index is deliberately *not* an error: LED override
//! descriptions that name a pin the chip does not have are skipped silently.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and probe errors
///
/// These errors occur while addressing or identifying the PHY, before any
/// register programming takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid Clause 22 register address (must be 0-31)
    InvalidRegister,
    /// PHY identifier is not in the driver registry
    UnsupportedDevice,
    /// Reset pin could not be driven
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegister => "invalid register address",
            ConfigError::UnsupportedDevice => "unsupported PHY identifier",
            ConfigError::GpioError => "reset pin error",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Register transport errors
///
/// Returned by [`MdioBus`](crate::hal::mdio::MdioBus) implementations. The
/// driver never retries; the error is handed to the immediate caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Register read or write failed on the bus
    BusError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::BusError => "MDIO bus error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedDevice)) => { /* ... */ }
///     Err(Error::Io(IoError::BusError)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl Error {
    /// Returns `true` if this is a transport failure
    #[must_use]
    pub const fn is_bus_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl core::error::Error for Error {}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Unit Tests
// =============================================================================
