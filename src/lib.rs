//! Mailbox RPC, firmware archive validation and fault telemetry for the DFE
//! (digital front end) coprocessor inside an RF transceiver SoC.
//!
//! The host talks to the DFE CPU through a fixed-size shared mailbox: one
//! command frame goes out, one response frame comes back, and the call blocks
//! in between.  This crate builds the frames, validates everything before any
//! bytes are written, interprets the response, and - when something goes
//! wrong - digs the DFE's own account of the failure out of its memory.
//!
//! `no_std`, with no `alloc` requirement.  The `std` feature (on by default)
//! adds firmware archive handling, which needs file access.
//!
//! ## Architecture
//!
//! Assumes a Host (the transceiver's controller) and a Target (the DFE CPU).
//! The Host accesses the transceiver through an implementation of
//! [`hal::Hal`], which supplies register reads/writes and a blocking mailbox
//! transport.  Everything else is built on top of those primitives.
//!
//! Two framing conventions share the mailbox:
//! - **Service commands** - raw DFE SDK commands, an 8-bit command ID plus
//!   payload
//! - **Application commands** - sent with the fixed
//!   [`channel::DFE_APPLICATION_CMD_ID`], with a 16-bit application opcode at
//!   the head of the payload and an application status at the head of the
//!   response
//!
//! Failures come in two tiers: the transport failing to produce a response
//! at all ([`Error::NoResponse`]), and the DFE executing the command and
//! reporting a failure ([`Error::CommandFailed`],
//! [`Error::AppCommandFailed`]).  In the second case the response payload is
//! still copied to the caller, as the firmware puts diagnostic detail there.
//!
//! Either way the crate then runs a diagnostic pass (see [`diag`]) which
//! checks the DFE cores for exceptions, reads the DFE's last-error ring and
//! logs the most severe unreported error, once.
//!
//! ## Modules
//!
//! - [`crc`] - Reflected CRC-32 used for firmware images
//! - [`wire`] - Host/device byte order conversion
//! - [`hal`] - Traits the application implements to access the transceiver
//! - [`device`] - The [`device::DfeDevice`] context all operations run on
//! - [`channel`] - Service and application commands, ping
//! - [`diag`] - Diagnostic escalation, error log and exception snapshots
//! - [`archive`] - Firmware archive validation and image loading (`std`)
//!
//! ## Getting Started
//!
//! 1. Implement [`hal::Hal`] for your transceiver access layer
//! 2. Create a [`device::DfeDevice`], with a custom [`device::DfeLayout`] if
//!    your firmware build places its SDK data differently
//! 3. Validate the firmware archive with
//!    [`device::DfeDevice::validate_and_send_checksum()`], or load it in full
//!    with [`device::DfeDevice::load_image()`]
//! 4. Once the DFE is running, [`device::DfeDevice::ping()`] it and send
//!    commands with [`device::DfeDevice::send_service_command()`] and
//!    [`device::DfeDevice::send_app_command()`]
//!
//! ```rust,ignore
//! use dfe_mailbox::device::DfeDevice;
//! use dfe_mailbox::hal::{CpuType, LinkId};
//!
//! let mut dfe = DfeDevice::new(my_hal);
//! dfe.load_image("dfe_firmware.bin")?;
//! let echoed = dfe.ping(CpuType::Dfe, 0x1234_5678)?;
//!
//! let mut resp = [0u8; 8];
//! dfe.send_service_command(LinkId::LINK_0, 0x4D, None, Some(&mut resp))?;
//! ```
//!
//! A [`device::DfeDevice`] must be mutably borrowed for every call, so only
//! one command can be outstanding per device.  Wrap it in a mutex to share it
//! between threads.
//!
//! ## Features
//!
//! Default features:
//! - `std` - Firmware archive validation and image loading from files.
//!
//! Compile with `--no-default-features` for a `no_std` build.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod archive;
pub mod channel;
pub mod crc;
pub mod device;
pub mod diag;
pub mod hal;
pub mod wire;

use hal::{CpuType, MailboxError};

/// DFE errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid call arguments, detected before any I/O
    #[error("invalid parameter: {0}")]
    Param(#[from] ParamError),

    /// The mailbox transport produced no usable response
    #[error("no response to command {cmd_id:#04x}: {source}")]
    NoResponse {
        cmd_id: u8,
        #[source]
        source: MailboxError,
    },

    /// The DFE executed the command and reported a failure
    #[error("command {cmd_id:#04x} failed with error code {code:#06x}")]
    CommandFailed { cmd_id: u8, code: u32 },

    /// The application layer reported a failure inside a successful response
    #[error("application command {opcode:#06x} failed with status {status:#06x}")]
    AppCommandFailed { opcode: u16, status: u32 },

    /// Ping round trip succeeded, but echoed the wrong value
    #[error("ping echoed {received:#010x}, expected {sent:#010x}")]
    PingMismatch { sent: u32, received: u32 },

    /// Operation not supported by this CPU
    #[error("operation not supported by {0:?}")]
    UnsupportedCpu(CpuType),

    /// The DFE CPU image must be loaded first
    #[error("DFE CPU image not loaded")]
    NotLoaded,

    /// Register access failed
    #[error("register access failed at {addr:#010x}: {context}")]
    Register { addr: u32, context: &'static str },

    /// Register access failed while reading an exception snapshot
    #[error("failed to read {register} of core {core} at {addr:#010x}")]
    ExceptionRead {
        core: usize,
        register: &'static str,
        addr: u32,
    },

    /// Firmware archive failed validation
    #[error("firmware archive: {0}")]
    Archive(#[from] ArchiveError),
}

/// Parameter errors.  Always detected before any transport activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    /// An empty command payload must be passed as `None`
    #[error("empty command payload must be None")]
    EmptyCommandPayload,
    /// An empty response buffer must be passed as `None`
    #[error("empty response buffer must be None")]
    EmptyResponseBuffer,
    /// Link ID outside the valid range
    #[error("invalid link id {0}")]
    InvalidLink(i8),
    /// Command payload too large for the mailbox
    #[error("command payload of {len} bytes exceeds {max}")]
    CommandTooLarge { len: usize, max: usize },
    /// Response buffer too large for the mailbox
    #[error("response buffer of {len} bytes exceeds {max}")]
    ResponseTooLarge { len: usize, max: usize },
    /// Argument value out of range
    #[error("{name} value {value:#x} out of range")]
    OutOfRange { name: &'static str, value: u32 },
}

/// Firmware archive failures.  These precede any DFE RPC activity so never
/// trigger diagnostic escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArchiveError {
    /// Archive file could not be opened
    #[error("cannot open archive")]
    Open,
    /// Seek within the archive failed
    #[error("cannot seek to offset {0}")]
    Seek(u64),
    /// File ended before a complete header
    #[error("short header read ({read} bytes)")]
    ShortHeader { read: usize },
    /// Wrong file type
    #[error("invalid magic number {found:#010x}, expected {expected:#010x}")]
    BadMagic { found: u32, expected: u32 },
    /// Unsupported archive format revision
    #[error("unsupported format revision {found}, expected {expected}")]
    BadRevision { found: u32, expected: u32 },
    /// Read of image data failed
    #[error("image read failed at offset {0}")]
    Read(u64),
    /// Archive is empty
    #[error("zero length image")]
    Empty,
    /// Image size is not a whole number of 32-bit words
    #[error("image size {0} is not a multiple of 4")]
    BadSize(u64),
    /// Image contents do not match the archive checksum
    #[error("image CRC {computed:#010x} does not match archive CRC {expected:#010x}")]
    CrcMismatch { expected: u32, computed: u32 },
    /// Closing the archive failed
    #[error("cannot close archive")]
    Close,
}

/// Tri-state outcome of a mailbox command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Command completed successfully
    Ok,
    /// The command failed on the DFE, with this embedded error code
    CommandFailed(u32),
    /// No usable response was received
    NoResponse,
}

/// Suggested recovery for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Nothing required
    None,
    /// Fix the call arguments
    CheckParam,
    /// Check the feature's configuration and state
    CheckFeature,
    /// Check the SPI/HAL interface
    CheckInterface,
    /// Reset the feature
    ResetFeature,
    /// Reset the device
    ResetDevice,
}

impl Error {
    /// Status of the mailbox exchange which produced this error, if one took
    /// place.
    pub fn command_status(&self) -> Option<CommandStatus> {
        match self {
            Error::NoResponse { .. } => Some(CommandStatus::NoResponse),
            Error::CommandFailed { code, .. } => Some(CommandStatus::CommandFailed(*code)),
            Error::AppCommandFailed { status, .. } => Some(CommandStatus::CommandFailed(*status)),
            Error::PingMismatch { .. } => Some(CommandStatus::Ok),
            _ => None,
        }
    }

    /// Suggested recovery action.
    pub fn recovery_action(&self) -> RecoveryAction {
        match self {
            Error::Param(_) | Error::UnsupportedCpu(_) | Error::NotLoaded => {
                RecoveryAction::CheckParam
            }
            Error::NoResponse {
                source: MailboxError::Io,
                ..
            } => RecoveryAction::CheckInterface,
            Error::NoResponse { .. } => RecoveryAction::CheckFeature,
            Error::CommandFailed { .. }
            | Error::AppCommandFailed { .. }
            | Error::PingMismatch { .. } => RecoveryAction::ResetFeature,
            Error::Register { .. } | Error::ExceptionRead { .. } => RecoveryAction::CheckInterface,
            Error::Archive(_) => RecoveryAction::CheckParam,
        }
    }
}

/// Type to represent the result of a DFE operation
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_failure_tier() {
        let no_rsp = Error::NoResponse {
            cmd_id: 1,
            source: MailboxError::Timeout,
        };
        assert_eq!(no_rsp.command_status(), Some(CommandStatus::NoResponse));

        let failed = Error::CommandFailed { cmd_id: 5, code: 7 };
        assert_eq!(failed.command_status(), Some(CommandStatus::CommandFailed(7)));

        let param = Error::from(ParamError::EmptyCommandPayload);
        assert_eq!(param.command_status(), None);
    }

    #[test]
    fn recovery_actions() {
        assert_eq!(
            Error::from(ParamError::InvalidLink(3)).recovery_action(),
            RecoveryAction::CheckParam
        );
        assert_eq!(
            Error::NoResponse {
                cmd_id: 0,
                source: MailboxError::Io
            }
            .recovery_action(),
            RecoveryAction::CheckInterface
        );
        assert_eq!(
            Error::AppCommandFailed {
                opcode: 1,
                status: 2
            }
            .recovery_action(),
            RecoveryAction::ResetFeature
        );
        assert_eq!(
            Error::from(ArchiveError::Open).recovery_action(),
            RecoveryAction::CheckParam
        );
    }
}
