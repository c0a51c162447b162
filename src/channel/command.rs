//! Mailbox command operations on [`DfeDevice`].

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::channel::{CMD_HEADER_SIZE, FrameFormat, MAILBOX_CAPACITY, RESP_HEADER_SIZE};
use crate::channel::{RawFrame, WrappedFrame, svc};
use crate::channel::{check_cmd_len, check_cmd_payload, check_link, check_resp_buffer, check_resp_len};
use crate::device::DfeDevice;
use crate::diag::error_log::LogLevel;
use crate::hal::{CpuType, Hal, LinkId, ResponseStatus};
use crate::wire::Wire;
use crate::{Error, ParamError, Result};

/// Application framework opcode for ping
pub const APP_PING_OPCODE: u16 = 0x0000;

/// Highest ECC memory region bitmap accepted by the DFE
pub const MAX_ECC_SECTIONS: u32 = 0x3FF;

impl<H: Hal> DfeDevice<H> {
    /// Send a DFE SDK service command and wait for its response.
    ///
    /// Blocks until the transport returns.  An empty payload or response
    /// must be passed as `None` - `Some` of an empty slice is rejected.
    ///
    /// If the DFE reports the command failed, the response payload is still
    /// copied into `resp` before [`Error::CommandFailed`] is returned.  Any
    /// failure other than a parameter error triggers a diagnostic pass first.
    ///
    /// Arguments:
    /// - `link` - Mailbox link to send on
    /// - `cmd_id` - Service command ID
    /// - `cmd` - Command payload, in device byte order
    /// - `resp` - Buffer for the response payload
    pub fn send_service_command(
        &mut self,
        link: LinkId,
        cmd_id: u8,
        cmd: Option<&[u8]>,
        resp: Option<&mut [u8]>,
    ) -> Result<()> {
        self.exchange(link, &RawFrame { cmd_id }, cmd, resp)
    }

    /// Send a DFE application command and wait for its response.
    ///
    /// Identical to [`Self::send_service_command()`], except that the opcode
    /// is wrapped inside the application command ID, and the application
    /// status at the start of the response payload is also checked.  A
    /// non-zero status returns [`Error::AppCommandFailed`], again after
    /// copying out the response.
    ///
    /// `resp`, if supplied, receives the application status as its first 4
    /// bytes.
    pub fn send_app_command(
        &mut self,
        link: LinkId,
        opcode: u16,
        cmd: Option<&[u8]>,
        resp: Option<&mut [u8]>,
    ) -> Result<()> {
        self.exchange(link, &WrappedFrame { opcode }, cmd, resp)
    }

    /// Check the DFE application framework is alive by having it echo a
    /// value back.
    ///
    /// Only [`CpuType::Dfe`] answers this ping.
    ///
    /// Returns the echoed value, which matches `value`.
    pub fn ping(&mut self, cpu: CpuType, value: u32) -> Result<u32> {
        if cpu != CpuType::Dfe {
            warn!("Ping not supported by {cpu:?}");
            return Err(Error::UnsupportedCpu(cpu));
        }

        let mut cmd = [0u8; 4];
        value.put(&mut cmd);
        let mut resp = [0u8; 8];
        self.send_app_command(
            LinkId::LINK_0,
            APP_PING_OPCODE,
            Some(&cmd),
            Some(&mut resp),
        )?;

        let received = u32::get(&resp[4..]);
        if received != value {
            warn!("Ping mismatch: sent {value:#010X} received {received:#010X}");
            Err(Error::PingMismatch {
                sent: value,
                received,
            })
        } else {
            debug!("Ping {value:#010X} OK");
            Ok(received)
        }
    }

    /// Enable ECC on the given DFE memory regions.
    ///
    /// Arguments:
    /// - `regions` - Bitmap of regions, 1 to [`MAX_ECC_SECTIONS`]
    pub fn ecc_enable_set(&mut self, regions: u32) -> Result<()> {
        if regions == 0 || regions > MAX_ECC_SECTIONS {
            warn!("Invalid ECC region bitmap {regions:#X}");
            return Err(ParamError::OutOfRange {
                name: "ECC regions",
                value: regions,
            }
            .into());
        }

        let mut cmd = [0u8; 4];
        regions.put(&mut cmd);
        let mut resp = [0u8; 4];
        self.send_service_command(
            LinkId::LINK_0,
            svc::ECC_ENABLE_SET,
            Some(&cmd),
            Some(&mut resp),
        )
    }

    /// Get the bitmap of DFE memory regions with ECC enabled.
    pub fn ecc_enable_get(&mut self) -> Result<u32> {
        let mut resp = [0u8; 8];
        self.send_service_command(LinkId::LINK_0, svc::ECC_ENABLE_GET, None, Some(&mut resp))?;
        Ok(u32::get(&resp[4..]))
    }

    /// Set which DFE firmware log levels are recorded.
    pub fn log_mask_set(&mut self, mask: LogLevel) -> Result<()> {
        if mask.is_empty() || !LogLevel::all().contains(mask) {
            warn!("Invalid log mask {:#X}", mask.bits());
            return Err(ParamError::OutOfRange {
                name: "log mask",
                value: mask.bits(),
            }
            .into());
        }

        let mut cmd = [0u8; 4];
        mask.bits().put(&mut cmd);
        let mut resp = [0u8; 8];
        self.send_service_command(
            LinkId::LINK_0,
            svc::LOG_MASK_SET,
            Some(&cmd),
            Some(&mut resp),
        )
    }

    /// Get which DFE firmware log levels are recorded.
    pub fn log_mask_get(&mut self) -> Result<LogLevel> {
        // Response is the mask followed by the status
        let mut resp = [0u8; 8];
        self.send_service_command(LinkId::LINK_0, svc::LOG_MASK_GET, None, Some(&mut resp))?;
        Ok(LogLevel::from_bits_retain(u32::get(&resp)))
    }

    // Validates, then runs the exchange, escalating any non-parameter failure
    fn exchange<F: FrameFormat>(
        &mut self,
        link: LinkId,
        format: &F,
        cmd: Option<&[u8]>,
        resp: Option<&mut [u8]>,
    ) -> Result<()> {
        let cmd = check_cmd_payload(cmd)?;
        let resp = check_resp_buffer(resp)?;
        check_link(link)?;
        check_cmd_len::<F>(cmd.len())?;
        check_resp_len::<F>(resp.len())?;

        let result = self.transact(link, format, cmd, resp);
        if let Err(e) = &result {
            self.escalate(e);
        }
        result
    }

    fn transact<F: FrameFormat>(
        &mut self,
        link: LinkId,
        format: &F,
        cmd: &[u8],
        resp: &mut [u8],
    ) -> Result<()> {
        let cmd_id = format.cmd_id();
        let mut frame = [0u8; MAILBOX_CAPACITY];

        let payload_start = CMD_HEADER_SIZE + F::CMD_PREFIX_SIZE;
        let cmd_end = payload_start + cmd.len();
        format.write_prefix(&mut frame[CMD_HEADER_SIZE..payload_start]);
        frame[payload_start..cmd_end].copy_from_slice(cmd);

        debug!(
            "[DFEMBOX] {} cmd {cmd_id:#04X} link {} {} bytes",
            F::KIND,
            link.raw(),
            cmd_end - CMD_HEADER_SIZE
        );
        trace!("[DFEMBOX] tx {:02X?}", &frame[CMD_HEADER_SIZE..cmd_end]);

        self.hal_mut()
            .send_command(CpuType::Dfe, link, cmd_id, &mut frame[..cmd_end])
            .map_err(|source| {
                warn!("[DFEMBOX] Failed to send command {cmd_id:#04X}: {source}");
                Error::NoResponse { cmd_id, source }
            })?;

        // The zeroed frame is reused for the response
        frame.fill(0);
        let rsp_len = RESP_HEADER_SIZE + resp.len().max(F::RESP_MIN_SIZE);
        let header = self
            .hal_mut()
            .receive_response(CpuType::Dfe, link, &mut frame[..rsp_len])
            .map_err(|source| {
                warn!("[DFEMBOX] No response to command {cmd_id:#04X}: {source}");
                Error::NoResponse { cmd_id, source }
            })?;

        let payload = &frame[RESP_HEADER_SIZE..rsp_len];
        debug!(
            "[DFEMBOX] {} rsp {:#04X} status {:?}",
            F::KIND,
            header.cmd_id,
            header.status
        );
        trace!("[DFEMBOX] rx {payload:02X?}");
        if header.cmd_id != cmd_id {
            warn!(
                "[DFEMBOX] Response ID {:#04X} does not match command {cmd_id:#04X}",
                header.cmd_id
            );
        }

        // Failed commands still carry a payload the caller wants to see
        let status = match header.status {
            ResponseStatus::Success => format.check_response(payload),
            ResponseStatus::CommandFailed(code) => {
                warn!("[DFEMBOX] Command {cmd_id:#04X} failed, error code {code:#06X}");
                Err(Error::CommandFailed { cmd_id, code })
            }
        };
        resp.copy_from_slice(&payload[..resp.len()]);

        status
    }
}
