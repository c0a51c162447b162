//! Hardware access traits for the transceiver's register and mailbox
//! interfaces.
//!
//! This crate does not drive SPI, or decode register bit fields, itself.  The
//! application provides a [`Hal`] implementation which does, typically on top
//! of the transceiver's SPI driver, and this crate builds the DFE command
//! channel, firmware validation and fault telemetry on top of it.
//!
//! # Possible implementations
//!
//! - SPI/AHB bridge access to a real transceiver
//! - A simulator, or a recording mock for testing
//!
//! # Address Space
//!
//! Addresses are absolute addresses in the transceiver's memory map, as seen
//! through the AHB/SPI bridge.
//!
//! # Mailbox
//!
//! The mailbox methods are a thin transport: they own the command and
//! response frame headers (command ID, transaction ID, status) and move the
//! frame across to the target CPU.  They block until the frame has been sent,
//! or a response has arrived (or the implementation gives up).  Timeouts and
//! retries are the implementation's business.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

/// Transceiver CPUs which can be addressed over the mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuType {
    /// Main CPU 0
    Cpu0,
    /// Main CPU 1
    Cpu1,
    /// Digital front end CPU
    Dfe,
}

/// Logical mailbox link to a CPU.
///
/// Valid links lie strictly between [`LinkId::UNKNOWN`] and [`LinkId::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LinkId(i8);

impl LinkId {
    /// Sentinel below the first valid link
    pub const UNKNOWN: LinkId = LinkId(-1);
    /// Primary command link
    pub const LINK_0: LinkId = LinkId(0);
    /// Secondary command link
    pub const LINK_1: LinkId = LinkId(1);
    /// Sentinel above the last valid link
    pub const MAX: LinkId = LinkId(2);

    pub const fn new(raw: i8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i8 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 > Self::UNKNOWN.0 && self.0 < Self::MAX.0
    }
}

/// Outcome reported by the target CPU in a response frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    /// Command executed successfully
    Success,
    /// Command executed, but failed.  The payload may carry more detail.
    CommandFailed(u32),
}

/// Parsed response frame header, returned by [`Hal::receive_response()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Command ID the target is responding to
    pub cmd_id: u8,
    /// Command status
    pub status: ResponseStatus,
}

/// Mailbox transport failures.  None of these leave a usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MailboxError {
    /// No response within the transport's timeout
    #[error("timed out waiting for response")]
    Timeout,
    /// Lower level link error
    #[error("mailbox link error")]
    Link,
    /// Response carried an unexpected transaction ID
    #[error("unexpected transaction id")]
    UnexpectedTransactionId,
    /// Target did not recognise the command ID
    #[error("invalid command id")]
    InvalidCommandId,
    /// Target reported an unspecified error
    #[error("generic command error")]
    Generic,
    /// Register access failed underneath the mailbox
    #[error("register access failed")]
    Io,
}

/// Transceiver access trait.
pub trait Hal {
    /// The error type returned by register operations.
    ///
    /// This allows implementations to use their own error types (e.g. SPI
    /// driver errors).
    type Error: core::fmt::Debug;

    /// Read `buf.len()` bytes starting at the absolute address `addr`.
    fn read_bytes(&mut self, addr: u32, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Read a 32-bit register, returning the bits selected by `mask`.
    fn read_u32(&mut self, addr: u32, mask: u32) -> Result<u32, Self::Error>;

    /// Write consecutive 32-bit registers starting at `addr`.
    fn write_u32s(&mut self, addr: u32, values: &[u32]) -> Result<(), Self::Error>;

    /// Write bytes starting at the absolute address `addr`.
    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Self::Error>;

    /// Read a core scratch register, by scratch register ID.
    fn read_scratch(&mut self, id: u16) -> Result<u8, Self::Error>;

    /// Send a command frame.
    ///
    /// `frame` starts with room for the command header, which the
    /// implementation fills in, followed by the payload.
    fn send_command(
        &mut self,
        cpu: CpuType,
        link: LinkId,
        cmd_id: u8,
        frame: &mut [u8],
    ) -> Result<(), MailboxError>;

    /// Block until the response to the last command on `link` arrives.
    ///
    /// On success `frame` holds the response header followed by as much of
    /// the response payload as fits.  A command-specific failure is still a
    /// successful receive - it is reported in the returned header.
    fn receive_response(
        &mut self,
        cpu: CpuType,
        link: LinkId,
        frame: &mut [u8],
    ) -> Result<ResponseHeader, MailboxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_range_is_exclusive() {
        assert!(!LinkId::UNKNOWN.is_valid());
        assert!(LinkId::LINK_0.is_valid());
        assert!(LinkId::LINK_1.is_valid());
        assert!(!LinkId::MAX.is_valid());
        assert!(!LinkId::new(-7).is_valid());
        assert!(!LinkId::new(100).is_valid());
    }
}
