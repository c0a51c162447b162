//! DFE core exception snapshot.
//!
//! When a DFE core takes a fatal exception the firmware saves its AArch64
//! EL1 system registers into the SDK data block before halting.  The
//! snapshot is laid out as:
//!
//! ```text
//! | flag core 0 | ... | flag core 3 | regs core 0 | ... | regs core 3 |
//! ```
//!
//! with a 32-bit flag per core, then [`EXCEPTION_REGISTER_COUNT`] 64-bit
//! registers per core in the order of [`EXCEPTION_REGISTERS`].

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::device::DfeDevice;
use crate::hal::Hal;
use crate::wire::Wire;
use crate::{Error, Result};

/// Number of DFE cores
pub const DFE_NUM_CORES: usize = 4;

/// Registers saved per core
pub const EXCEPTION_REGISTER_COUNT: usize = 33;

const FLAG_SIZE: u32 = 4;
const REG_SIZE: u32 = 8;
const CORE_REGS_SIZE: u32 = EXCEPTION_REGISTER_COUNT as u32 * REG_SIZE;
const REGS_OFFSET: u32 = DFE_NUM_CORES as u32 * FLAG_SIZE;

/// A saved register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionRegister {
    /// Architectural name
    pub name: &'static str,
    /// What the register holds
    pub description: &'static str,
    /// Offset within a core's register block
    pub offset: u32,
    /// Size in bytes
    pub width: u32,
}

const fn reg(idx: u32, name: &'static str, description: &'static str) -> ExceptionRegister {
    ExceptionRegister {
        name,
        description,
        offset: idx * REG_SIZE,
        width: REG_SIZE,
    }
}

/// Registers saved for each core, in snapshot order.
pub static EXCEPTION_REGISTERS: [ExceptionRegister; EXCEPTION_REGISTER_COUNT] = [
    reg(0, "sp_el1", "Stack Pointer"),
    reg(1, "spsr_el1", "Saved Program Status Register"),
    reg(2, "elr_el1", "Exception Link Register"),
    reg(3, "sctlr_el1", "System Control Register"),
    reg(4, "actlr_el1", "Auxiliary Control Register"),
    reg(5, "cpacr_el1", "Architectural Feature Access Control Register"),
    reg(6, "csselr_el1", "Cache Size Selection Register"),
    reg(7, "esr_el1", "Exception Syndrome Register"),
    reg(8, "ttbr0_el1", "Translation Table Base Register 0"),
    reg(9, "ttbr1_el1", "Translation Table Base Register 1"),
    reg(10, "mair_el1", "Memory Attribute Indirection Register"),
    reg(11, "amair_el1", "Auxiliary Memory Attribute Indirection Register"),
    reg(12, "tcr_el1", "Translation Control Register"),
    reg(13, "tpidr_el1", "Software Thread ID Register"),
    reg(14, "par_el1", "Physical Address Register"),
    reg(15, "mpidr_el1", "Multiprocessor Affinity Register"),
    reg(16, "afsr0_el1", "Auxiliary Fault Status Register 0"),
    reg(17, "afsr1_el1", "Auxiliary Fault Status Register 1"),
    reg(18, "contextidr_el1", "Context ID Register"),
    reg(19, "vbar_el1", "Vector Base Address Register"),
    reg(20, "cntkctl_el1", "Counter-timer Kernel Control Register"),
    reg(21, "isr_el1", "Interrupt Status Register"),
    reg(22, "far_el1", "Fault Address Register"),
    reg(23, "icc_sre_el1", "ICC System Register Enable Register"),
    reg(24, "icc_igrpen0_el1", "ICC Interrupt Group 0 Enable Register"),
    reg(25, "icc_igrpen1_el1", "ICC Interrupt Group 1 Enable Register"),
    reg(26, "icc_ctlr_el1", "ICC Control Register"),
    reg(27, "icc_iar0_el1", "ICC Interrupt Acknowledge Register 0"),
    reg(28, "icc_iar1_el1", "ICC Interrupt Acknowledge Register 1"),
    reg(29, "icc_pmr_el1", "ICC Interrupt Priority Mask Register"),
    reg(30, "icc_bpr0_el1", "ICC Binary Point Register 0"),
    reg(31, "icc_bpr1_el1", "ICC Binary Point Register 1"),
    reg(32, "icc_rpr_el1", "ICC Running Priority Register"),
];

/// Per-core exception flag, as saved by the firmware.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionFlag(pub u32);

impl ExceptionFlag {
    pub const NONE: ExceptionFlag = ExceptionFlag(0);

    pub fn is_exception(self) -> bool {
        self != Self::NONE
    }
}

/// Saved state of one core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreException {
    pub flag: ExceptionFlag,
    pub regs: [u64; EXCEPTION_REGISTER_COUNT],
}

impl Default for CoreException {
    fn default() -> Self {
        Self {
            flag: ExceptionFlag::NONE,
            regs: [0; EXCEPTION_REGISTER_COUNT],
        }
    }
}

impl CoreException {
    /// Saved value of a register, by name.
    pub fn register(&self, name: &str) -> Option<u64> {
        EXCEPTION_REGISTERS
            .iter()
            .position(|r| r.name == name)
            .map(|idx| self.regs[idx])
    }
}

/// Saved state of every DFE core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionSnapshot {
    pub cores: [CoreException; DFE_NUM_CORES],
}

impl ExceptionSnapshot {
    /// Bitmask of cores which took an exception.
    pub fn exception_mask(&self) -> u32 {
        self.cores
            .iter()
            .enumerate()
            .filter(|(_, c)| c.flag.is_exception())
            .fold(0, |mask, (idx, _)| mask | (1u32 << idx))
    }
}

/// Address of core `core`'s exception flag, relative to the snapshot.
pub const fn flag_offset(core: usize) -> u32 {
    core as u32 * FLAG_SIZE
}

/// Address of a saved register of core `core`, relative to the snapshot.
pub const fn register_offset(core: usize, reg: &ExceptionRegister) -> u32 {
    REGS_OFFSET + core as u32 * CORE_REGS_SIZE + reg.offset
}

impl<H: Hal> DfeDevice<H> {
    /// Check the DFE cores for exceptions.
    ///
    /// Reads just the flag array, so is much cheaper than
    /// [`Self::exception_snapshot()`].
    ///
    /// Returns a bitmask with bit `n` set if core `n` took an exception.
    pub fn check_exception(&mut self) -> Result<u32> {
        let base = self.sdk_data_addr()?.wrapping_add(self.layout().exception_offset);

        let mut flags = [0u8; DFE_NUM_CORES * FLAG_SIZE as usize];
        self.read_bytes(base, &mut flags, "exception flags")?;

        let mask = flags
            .chunks_exact(FLAG_SIZE as usize)
            .enumerate()
            .filter(|(_, flag)| ExceptionFlag(u32::get(flag)).is_exception())
            .fold(0, |mask, (core, _)| mask | (1u32 << core));

        if mask != 0 {
            debug!("DFE exception flags {flags:02X?}, cores {mask:#X}");
        }
        Ok(mask)
    }

    /// Read the full exception snapshot of every DFE core.
    ///
    /// The DFE CPU image must have been loaded.  Reading stops at the first
    /// failed register read.
    pub fn exception_snapshot(&mut self) -> Result<ExceptionSnapshot> {
        if !self.is_dfe_loaded() {
            warn!("DFE CPU image must be loaded before reading exception data");
            return Err(Error::NotLoaded);
        }

        let base = self.sdk_data_addr()?.wrapping_add(self.layout().exception_offset);
        let mut snapshot = ExceptionSnapshot::default();

        for (core, state) in snapshot.cores.iter_mut().enumerate() {
            let addr = base.wrapping_add(flag_offset(core));
            let mut flag = [0u8; FLAG_SIZE as usize];
            self.hal_mut().read_bytes(addr, &mut flag).map_err(|e| {
                warn!("Failed to read exception flag of core {core}: {e:?}");
                Error::ExceptionRead {
                    core,
                    register: "exception flag",
                    addr,
                }
            })?;
            state.flag = ExceptionFlag(u32::get(&flag));

            for (value, reg) in state.regs.iter_mut().zip(EXCEPTION_REGISTERS.iter()) {
                let addr = base.wrapping_add(register_offset(core, reg));
                let mut raw = [0u8; REG_SIZE as usize];
                self.hal_mut().read_bytes(addr, &mut raw).map_err(|e| {
                    warn!(
                        "Failed to read {} ({}) of core {core}: {e:?}",
                        reg.name, reg.description
                    );
                    Error::ExceptionRead {
                        core,
                        register: reg.name,
                        addr,
                    }
                })?;
                *value = u64::get(&raw);
            }
        }

        debug!(
            "Read exception snapshot, cores in exception {:#X}",
            snapshot.exception_mask()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_table_is_contiguous() {
        for (idx, reg) in EXCEPTION_REGISTERS.iter().enumerate() {
            assert_eq!(reg.offset, idx as u32 * 8, "{}", reg.name);
            assert_eq!(reg.width, 8);
        }
        assert_eq!(EXCEPTION_REGISTERS[0].name, "sp_el1");
        assert_eq!(EXCEPTION_REGISTERS[32].name, "icc_rpr_el1");
    }

    #[test]
    fn snapshot_offsets() {
        assert_eq!(flag_offset(3), 12);
        assert_eq!(register_offset(0, &EXCEPTION_REGISTERS[0]), 16);
        assert_eq!(register_offset(1, &EXCEPTION_REGISTERS[0]), 16 + 264);
        assert_eq!(register_offset(3, &EXCEPTION_REGISTERS[32]), 16 + 3 * 264 + 256);
    }

    #[test]
    fn mask_and_lookup() {
        let mut snapshot = ExceptionSnapshot::default();
        assert_eq!(snapshot.exception_mask(), 0);

        snapshot.cores[2].flag = ExceptionFlag(1);
        snapshot.cores[2].regs[7] = 0x9600_0045;
        assert_eq!(snapshot.exception_mask(), 0b100);
        assert_eq!(snapshot.cores[2].register("esr_el1"), Some(0x9600_0045));
        assert_eq!(snapshot.cores[2].register("x0"), None);
    }
}
