//! Command channel between the Host and the DFE CPU over the transceiver
//! mailbox.
//!
//! See [`crate`] for a description of how to use these objects.
//!
//! A command frame is laid out as:
//!
//! ```text
//! | cmd header (4) | [app opcode (2)] | payload ... |
//! ```
//!
//! and a response frame as:
//!
//! ```text
//! | rsp header (6) | [app status (4)] payload ... |
//! ```
//!
//! The headers belong to the [`Hal`](crate::hal::Hal) transport.  The
//! optional parts are added by [`WrappedFrame`], for application commands;
//! service commands use [`RawFrame`].  Note that the application status is
//! part of the response payload handed back to the caller.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

mod command;

pub use command::{APP_PING_OPCODE, MAX_ECC_SECTIONS};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::hal::LinkId;
use crate::wire::Wire;
use crate::{Error, ParamError, Result};

/// Size of the shared mailbox buffer, headers included
pub const MAILBOX_CAPACITY: usize = 512;

/// Transport command header: 16-bit command ID, 16-bit transaction ID
pub const CMD_HEADER_SIZE: usize = 4;

/// Transport response header: command ID, transaction ID, status
pub const RESP_HEADER_SIZE: usize = 6;

/// Application opcode prefixed to application command payloads
pub const APP_CMD_HEADER_SIZE: usize = 2;

/// Application status at the head of application response payloads
pub const APP_RESP_HEADER_SIZE: usize = 4;

/// Outer command ID carrying every application command
pub const DFE_APPLICATION_CMD_ID: u8 = 0xFF;

/// Service command IDs used by this crate
pub mod svc {
    pub const PING: u8 = 0x00;
    pub const LOG_MASK_SET: u8 = 0x43;
    pub const LOG_MASK_GET: u8 = 0x44;
    pub const ECC_ENABLE_SET: u8 = 0x4C;
    pub const ECC_ENABLE_GET: u8 = 0x4D;
}

/// Framing convention used for a command.
pub trait FrameFormat {
    /// Label used in log output
    const KIND: &'static str;

    /// Bytes this format inserts between the command header and the caller's
    /// payload
    const CMD_PREFIX_SIZE: usize;

    /// Response payload bytes this format needs to see, whatever the size of
    /// the caller's buffer
    const RESP_MIN_SIZE: usize;

    /// Command ID sent to the transport
    fn cmd_id(&self) -> u8;

    /// Fill in the command prefix.  `buf` is exactly
    /// [`Self::CMD_PREFIX_SIZE`] bytes.
    fn write_prefix(&self, buf: &mut [u8]);

    /// Check a response payload the transport reported as successful.
    fn check_response(&self, payload: &[u8]) -> Result<()>;

    /// Largest command payload which fits the mailbox in this format.
    fn max_cmd_payload() -> usize {
        MAILBOX_CAPACITY - CMD_HEADER_SIZE - Self::CMD_PREFIX_SIZE
    }

    /// Largest response payload which fits the mailbox.
    fn max_resp_payload() -> usize {
        MAILBOX_CAPACITY - RESP_HEADER_SIZE
    }
}

/// DFE SDK service command, sent as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame {
    pub cmd_id: u8,
}

impl FrameFormat for RawFrame {
    const KIND: &'static str = "svc";
    const CMD_PREFIX_SIZE: usize = 0;
    const RESP_MIN_SIZE: usize = 0;

    fn cmd_id(&self) -> u8 {
        self.cmd_id
    }

    fn write_prefix(&self, _buf: &mut [u8]) {}

    fn check_response(&self, _payload: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// DFE application command, wrapped in the application framework's opcode
/// and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappedFrame {
    pub opcode: u16,
}

impl FrameFormat for WrappedFrame {
    const KIND: &'static str = "app";
    const CMD_PREFIX_SIZE: usize = APP_CMD_HEADER_SIZE;
    const RESP_MIN_SIZE: usize = APP_RESP_HEADER_SIZE;

    fn cmd_id(&self) -> u8 {
        DFE_APPLICATION_CMD_ID
    }

    fn write_prefix(&self, buf: &mut [u8]) {
        self.opcode.put(buf);
    }

    fn check_response(&self, payload: &[u8]) -> Result<()> {
        let status = u32::get(payload);
        if status != 0 {
            Err(Error::AppCommandFailed {
                opcode: self.opcode,
                status,
            })
        } else {
            Ok(())
        }
    }
}

// Helper functions

// None is the only way to pass an empty payload
fn check_cmd_payload(cmd: Option<&[u8]>) -> Result<&[u8]> {
    match cmd {
        Some([]) => Err(ParamError::EmptyCommandPayload.into()),
        Some(cmd) => Ok(cmd),
        None => Ok(&[]),
    }
}

fn check_resp_buffer(resp: Option<&mut [u8]>) -> Result<&mut [u8]> {
    match resp {
        Some([]) => Err(ParamError::EmptyResponseBuffer.into()),
        Some(resp) => Ok(resp),
        None => Ok(&mut []),
    }
}

fn check_link(link: LinkId) -> Result<()> {
    if !link.is_valid() {
        Err(ParamError::InvalidLink(link.raw()).into())
    } else {
        Ok(())
    }
}

fn check_cmd_len<F: FrameFormat>(len: usize) -> Result<()> {
    let max = F::max_cmd_payload();
    if len > max {
        Err(ParamError::CommandTooLarge { len, max }.into())
    } else {
        Ok(())
    }
}

fn check_resp_len<F: FrameFormat>(len: usize) -> Result<()> {
    let max = F::max_resp_payload();
    if len > max {
        Err(ParamError::ResponseTooLarge { len, max }.into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_limits() {
        assert_eq!(RawFrame::max_cmd_payload(), 508);
        assert_eq!(WrappedFrame::max_cmd_payload(), 506);
        assert_eq!(RawFrame::max_resp_payload(), 506);
        // App responses are not reduced by the app status
        assert_eq!(WrappedFrame::max_resp_payload(), 506);
    }

    #[test]
    fn empty_slices_rejected() {
        assert_eq!(
            check_cmd_payload(Some(&[])),
            Err(Error::Param(ParamError::EmptyCommandPayload))
        );
        assert_eq!(check_cmd_payload(None), Ok(&[][..]));
        assert!(matches!(
            check_resp_buffer(Some(&mut [])),
            Err(Error::Param(ParamError::EmptyResponseBuffer))
        ));
        assert!(check_resp_buffer(None).is_ok_and(|b| b.is_empty()));
    }

    #[test]
    fn wrapped_prefix_and_status() {
        let format = WrappedFrame { opcode: 0x1234 };
        let mut prefix = [0u8; APP_CMD_HEADER_SIZE];
        format.write_prefix(&mut prefix);
        assert_eq!(prefix, [0x34, 0x12]);

        assert_eq!(format.check_response(&[0, 0, 0, 0, 9]), Ok(()));
        assert_eq!(
            format.check_response(&[0x05, 0xE0, 0, 0]),
            Err(Error::AppCommandFailed {
                opcode: 0x1234,
                status: 0xE005
            })
        );
    }

    #[test]
    fn length_checks_use_format() {
        assert!(check_cmd_len::<RawFrame>(508).is_ok());
        assert!(check_cmd_len::<WrappedFrame>(507).is_err());
        assert_eq!(
            check_resp_len::<RawFrame>(507),
            Err(Error::Param(ParamError::ResponseTooLarge { len: 507, max: 506 }))
        );
        assert_eq!(
            check_link(LinkId::MAX),
            Err(Error::Param(ParamError::InvalidLink(2)))
        );
    }
}
