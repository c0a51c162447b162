//! DFE device context.
//!
//! [`DfeDevice`] owns the application's [`Hal`] implementation plus the small
//! amount of state the command channel and diagnostics need: device state
//! flags, the memory layout of the running firmware, and the diagnostic
//! recursion guard.
//!
//! Every operation takes `&mut self`, so one device handle can only have one
//! mailbox command outstanding at a time.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use bitflags::bitflags;

use crate::diag::DiagnosticOutcome;
use crate::hal::Hal;
use crate::{Error, Result};

bitflags! {
    /// Transceiver bring-up state.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct DeviceState: u32 {
        const POWER_ON_RESET = 0x001;
        const INITIALIZED = 0x002;
        const STREAM_LOADED = 0x004;
        const CPU_DEBUG_LOADED = 0x008;
        const CPU0_LOADED = 0x010;
        const CPU1_LOADED = 0x020;
        const ALL_CPUS_LOADED = 0x040;
        const INIT_CALS_RUN = 0x080;
        const RADIO_ON = 0x100;
        /// DFE CPU image loaded and checked.  Gates exception readback.
        const DFE_CPU_LOADED = 0x200;
        const RS_LOADED = 0x400;
        const STANDBY = 0x800;
    }
}

/// Where the running DFE firmware keeps the data this crate reads and
/// writes.
///
/// The defaults match the reference firmware build.  Other builds publish
/// their own values alongside the firmware image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfeLayout {
    /// Scratch registers holding the SDK data block address, least
    /// significant byte first
    pub sdk_data_scratch: [u16; 4],

    /// Offset of the last-error ring within the SDK data block
    pub error_log_offset: u32,

    /// Offset of the exception snapshot within the SDK data block
    pub exception_offset: u32,

    /// Address the firmware archive checksum is written to
    pub image_crc_addr: u32,

    /// Address the DFE CPU image is loaded to
    pub code_region_start: u32,
}

impl Default for DfeLayout {
    fn default() -> Self {
        Self {
            sdk_data_scratch: [257, 258, 259, 260],
            error_log_offset: 0x0000_0040,
            exception_offset: 0x0000_0100,
            image_crc_addr: 0xB05F_FFF0,
            code_region_start: 0xB000_0000,
        }
    }
}

/// Diagnostic escalation counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticStats {
    /// Escalations which ran to completion
    pub escalations: u32,

    /// Escalations skipped because one was already running
    pub suppressed: u32,

    /// Escalations which found a DFE core in exception
    pub exceptions_seen: u32,
}

/// Host-side handle on one transceiver's DFE.
pub struct DfeDevice<H: Hal> {
    hal: H,
    layout: DfeLayout,
    state: DeviceState,
    pub(crate) diag_depth: u32,
    pub(crate) stats: DiagnosticStats,
    pub(crate) last_outcome: Option<DiagnosticOutcome>,
}

impl<H: Hal> DfeDevice<H> {
    /// Create a device with the default [`DfeLayout`].
    ///
    /// Arguments:
    /// - `hal` - Object implementing [`Hal`] to access the transceiver
    pub fn new(hal: H) -> Self {
        Self::with_layout(hal, DfeLayout::default())
    }

    /// Create a device with a specific firmware layout.
    ///
    /// Arguments:
    /// - `hal` - Object implementing [`Hal`] to access the transceiver
    /// - `layout` - Addresses and offsets used by the running firmware
    pub fn with_layout(hal: H, layout: DfeLayout) -> Self {
        debug!("Created DFE device, layout {layout:x?}");
        Self {
            hal,
            layout,
            state: DeviceState::empty(),
            diag_depth: 0,
            stats: DiagnosticStats::default(),
            last_outcome: None,
        }
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Release the device, returning the HAL.
    pub fn into_hal(self) -> H {
        self.hal
    }

    pub fn layout(&self) -> &DfeLayout {
        &self.layout
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Replace the device state.  Used by the application's bring-up code,
    /// which owns the transitions this crate does not make itself.
    pub fn set_state(&mut self, state: DeviceState) {
        debug!("Device state {:?} -> {state:?}", self.state);
        self.state = state;
    }

    pub(crate) fn insert_state(&mut self, flags: DeviceState) {
        self.set_state(self.state | flags);
    }

    pub fn is_dfe_loaded(&self) -> bool {
        self.state.contains(DeviceState::DFE_CPU_LOADED)
    }

    pub fn diagnostic_stats(&self) -> DiagnosticStats {
        self.stats
    }

    /// Outcome of the most recent diagnostic pass.
    pub fn last_diagnostic(&self) -> Option<&DiagnosticOutcome> {
        self.last_outcome.as_ref()
    }

    /// Address of the firmware's SDK data block, assembled from the four
    /// scratch registers in [`DfeLayout::sdk_data_scratch`].
    ///
    /// The value comes straight from the device, so addresses derived from
    /// it wrap rather than overflow.
    pub fn sdk_data_addr(&mut self) -> Result<u32> {
        let ids = self.layout.sdk_data_scratch;
        let mut addr = 0u32;
        for (byte, id) in ids.into_iter().enumerate() {
            let value = self.hal.read_scratch(id).map_err(|e| {
                warn!("Failed to read scratch register {id}: {e:?}");
                Error::Register {
                    addr: id as u32,
                    context: "SDK data address scratch register",
                }
            })?;
            addr |= (value as u32) << (byte * 8);
        }
        trace!("SDK data block at {addr:#010X}");
        Ok(addr)
    }

    // Helpers mapping HAL errors to Error::Register

    pub(crate) fn read_u32(&mut self, addr: u32, context: &'static str) -> Result<u32> {
        self.hal.read_u32(addr, u32::MAX).map_err(|e| {
            warn!("Register read at {addr:#010X} failed: {e:?}");
            Error::Register { addr, context }
        })
    }

    pub(crate) fn read_bytes(
        &mut self,
        addr: u32,
        buf: &mut [u8],
        context: &'static str,
    ) -> Result<()> {
        self.hal.read_bytes(addr, buf).map_err(|e| {
            warn!("Read of {} bytes at {addr:#010X} failed: {e:?}", buf.len());
            Error::Register { addr, context }
        })
    }

    pub(crate) fn write_u32s(
        &mut self,
        addr: u32,
        values: &[u32],
        context: &'static str,
    ) -> Result<()> {
        self.hal.write_u32s(addr, values).map_err(|e| {
            warn!("Register write at {addr:#010X} failed: {e:?}");
            Error::Register { addr, context }
        })
    }

    pub(crate) fn write_bytes(
        &mut self,
        addr: u32,
        data: &[u8],
        context: &'static str,
    ) -> Result<()> {
        self.hal.write_bytes(addr, data).map_err(|e| {
            warn!("Write of {} bytes at {addr:#010X} failed: {e:?}", data.len());
            Error::Register { addr, context }
        })
    }
}
