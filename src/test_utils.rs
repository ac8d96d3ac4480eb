//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::standard::{bmsr, mmd, mmd_ctrl, phy_reg};
use crate::internal::phy_regs::xway::reg;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// One attempted bus transaction, in issue order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// (phy_addr, reg_addr)
    Read(u8, u8),
    /// (phy_addr, reg_addr, value)
    Write(u8, u8, u16),
}

/// Latched state of a PHY's MMD indirection registers
#[derive(Debug, Clone, Copy, Default)]
struct MmdLatch {
    devad: u8,
    address: u16,
    data_mode: bool,
}

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Besides a plain register map it emulates:
/// - Clause 45 MMD access behind `MMD_CTRL`/`MMD_DATA`
/// - read-to-clear registers
/// - per-register read/write failures
///
/// Every attempted transaction is logged, including failed ones.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.setup_xway(0, 0xD565_A401);
/// mdio.set_register(0, reg::ISTAT, int::LSTC);
///
/// let ctrl = InterruptController::new(0);
/// assert!(ctrl.poll_pending(&mut mdio).unwrap().contains(InterruptFlags::LINK_STATE));
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// MMD values: (phy_addr, devad, reg_addr) -> value
    mmd_registers: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// MMD indirection latch per PHY
    mmd_latch: RefCell<HashMap<u8, MmdLatch>>,
    /// Registers cleared as a side effect of reading them
    read_to_clear: RefCell<HashSet<(u8, u8)>>,
    /// Registers whose reads fail
    failing_reads: RefCell<HashSet<(u8, u8)>>,
    /// Registers whose writes fail
    failing_writes: RefCell<HashSet<(u8, u8)>>,
    /// Ordered log of attempted operations
    op_log: RefCell<Vec<BusOp>>,
    /// Completed MMD writes: (phy_addr, devad, reg_addr, value)
    mmd_write_log: RefCell<Vec<(u8, u8, u16, u16)>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Set an MMD register value
    pub fn set_mmd_register(&self, phy_addr: u8, devad: u8, reg_addr: u16, value: u16) {
        self.mmd_registers
            .borrow_mut()
            .insert((phy_addr, devad, reg_addr), value);
    }

    /// Get the current value of an MMD register
    pub fn get_mmd_register(&self, phy_addr: u8, devad: u8, reg_addr: u16) -> Option<u16> {
        self.mmd_registers
            .borrow()
            .get(&(phy_addr, devad, reg_addr))
            .copied()
    }

    /// Make a register clear itself when read
    pub fn set_read_to_clear(&self, phy_addr: u8, reg_addr: u8) {
        self.read_to_clear.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Make reads of a register fail with a bus error
    pub fn fail_reads_of(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_reads.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Make writes to a register fail with a bus error
    pub fn fail_writes_to(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_writes.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Ordered log of every attempted operation
    pub fn ops(&self) -> Vec<BusOp> {
        self.op_log.borrow().clone()
    }

    /// Get all writes that have been attempted
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.op_log
            .borrow()
            .iter()
            .filter_map(|op| match *op {
                BusOp::Write(phy, reg, val) => Some((phy, reg, val)),
                BusOp::Read(..) => None,
            })
            .collect()
    }

    /// Number of reads of one register
    pub fn read_count(&self, phy_addr: u8, reg_addr: u8) -> usize {
        self.op_log
            .borrow()
            .iter()
            .filter(|op| **op == BusOp::Read(phy_addr, reg_addr))
            .count()
    }

    /// Completed MMD writes in order: (devad, reg_addr, value)
    pub fn mmd_writes(&self, phy_addr: u8) -> Vec<(u8, u16, u16)> {
        self.mmd_write_log
            .borrow()
            .iter()
            .filter(|(phy, ..)| *phy == phy_addr)
            .map(|&(_, devad, reg, val)| (devad, reg, val))
            .collect()
    }

    /// Setup for an XWAY GPHY with the given identifier
    pub fn setup_xway(&self, phy_addr: u8, phy_id: u32) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, (phy_id >> 16) as u16);
        self.set_register(phy_addr, phy_reg::PHYIDR2, phy_id as u16);

        let bmsr_value = bmsr::TX_FD_CAPABLE
            | bmsr::TX_HD_CAPABLE
            | bmsr::T10_FD_CAPABLE
            | bmsr::T10_HD_CAPABLE
            | bmsr::AN_ABILITY
            | bmsr::ESTATUS
            | bmsr::EXT_CAPABLE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_value);

        // BMCR: auto-neg enabled
        self.set_register(phy_addr, phy_reg::BMCR, 0x1000);
        self.set_register(phy_addr, phy_reg::CTRL1000, 0x0300);

        self.set_register(phy_addr, reg::IMASK, 0x0000);
        self.set_register(phy_addr, reg::ISTAT, 0x0000);
        self.set_read_to_clear(phy_addr, reg::ISTAT);
    }

    fn latch(&self, phy_addr: u8) -> MmdLatch {
        self.mmd_latch
            .borrow()
            .get(&phy_addr)
            .copied()
            .unwrap_or_default()
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.op_log.borrow_mut().push(BusOp::Read(phy_addr, reg_addr));

        if self.failing_reads.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(IoError::BusError.into());
        }

        if reg_addr == phy_reg::MMD_DATA {
            let latch = self.latch(phy_addr);
            if latch.data_mode {
                return Ok(self
                    .get_mmd_register(phy_addr, latch.devad, latch.address)
                    .unwrap_or(0));
            }
        }

        let value = self.get_register(phy_addr, reg_addr).unwrap_or(0);
        if self.read_to_clear.borrow().contains(&(phy_addr, reg_addr)) {
            self.set_register(phy_addr, reg_addr, 0);
        }
        Ok(value)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.op_log
            .borrow_mut()
            .push(BusOp::Write(phy_addr, reg_addr, value));

        if self.failing_writes.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(IoError::BusError.into());
        }

        match reg_addr {
            phy_reg::MMD_CTRL => {
                let mut latches = self.mmd_latch.borrow_mut();
                let latch = latches.entry(phy_addr).or_default();
                latch.devad = (value & mmd_ctrl::DEVAD_MASK) as u8;
                latch.data_mode = (value & mmd_ctrl::FUNC_MASK) != mmd_ctrl::FUNC_ADDRESS;
            }
            phy_reg::MMD_DATA => {
                let latch = self.latch(phy_addr);
                if latch.data_mode {
                    self.set_mmd_register(phy_addr, latch.devad, latch.address, value);
                    self.mmd_write_log.borrow_mut().push((
                        phy_addr,
                        latch.devad,
                        latch.address,
                        value,
                    ));
                    return Ok(());
                }
                self.mmd_latch
                    .borrow_mut()
                    .entry(phy_addr)
                    .or_default()
                    .address = value;
            }
            _ => {}
        }

        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }
}

/// Shorthand for the vendor MMD used by every LED register
pub const VEND2: u8 = mmd::VEND2;

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Mock Reset Pin
// =============================================================================

/// Mock output pin recording its level history
#[derive(Debug, Default)]
pub struct MockPin {
    /// Levels driven so far (`true` = high)
    pub levels: Vec<bool>,
    /// Make every set call fail
    pub broken: bool,
}

/// Error type of [`MockPin`]
#[derive(Debug, Clone, Copy)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if self.broken {
            return Err(MockPinError);
        }
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if self.broken {
            return Err(MockPinError);
        }
        self.levels.push(true);
        Ok(())
    }
}
