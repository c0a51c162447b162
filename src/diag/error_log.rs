//! DFE last-error ring.
//!
//! The DFE firmware keeps the last error raised by each of its major
//! objects in a small fixed array inside the SDK data block.  Each slot is
//! four 32-bit words:
//!
//! ```text
//! | code | level | timestamp low | timestamp high |
//! ```
//!
//! A code of 0 marks an empty slot.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use bitflags::bitflags;

use crate::Result;
use crate::device::DfeDevice;
use crate::hal::Hal;
use crate::wire::u64_from_words;

/// Number of slots in the ring
pub const ERROR_LOG_ENTRIES: usize = 6;

/// Size of one slot, in bytes
pub const ERROR_LOG_ENTRY_SIZE: u32 = 16;

/// Firmware object owning each slot, in ring order
pub const ERROR_LOG_SLOTS: [&str; ERROR_LOG_ENTRIES] = [
    "common object",
    "service layer",
    "driver",
    "configuration",
    "calibration",
    "SDK application",
];

bitflags! {
    /// DFE firmware log levels.  Higher bits are more severe, so levels can
    /// be compared by value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct LogLevel: u32 {
        const DEBUG = 0x01;
        const INFO = 0x02;
        const WARNING = 0x04;
        const CRITICAL = 0x08;
        const FATAL = 0x10;
    }
}

/// One slot of the last-error ring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLogEntry {
    pub code: u32,
    pub level: u32,
    pub timestamp: u64,
}

impl ErrorLogEntry {
    pub fn is_empty(&self) -> bool {
        self.code == 0
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_bits_retain(self.level)
    }

    // Lexicographic severity: level first, then recency
    fn outranks(&self, other: &ErrorLogEntry) -> bool {
        (self.level, self.timestamp) > (other.level, other.timestamp)
    }
}

/// Snapshot of the whole ring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLog {
    pub entries: [ErrorLogEntry; ERROR_LOG_ENTRIES],
}

impl ErrorLog {
    /// The most severe entry in the ring.  See [`select_most_severe()`].
    pub fn most_severe(&self) -> Option<(usize, ErrorLogEntry)> {
        select_most_severe(&self.entries)
    }
}

/// Pick the most severe non-empty entry.
///
/// Entries are compared on `(level, timestamp)`: the highest level wins, and
/// of entries with the same level the most recent wins.  Ties on both keep
/// the earliest slot.
///
/// Returns the entry's slot index alongside the entry.
pub fn select_most_severe(entries: &[ErrorLogEntry]) -> Option<(usize, ErrorLogEntry)> {
    entries
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, e)| !e.is_empty())
        .fold(None, |best: Option<(usize, ErrorLogEntry)>, (idx, entry)| match best {
            Some((_, b)) if !entry.outranks(&b) => best,
            _ => Some((idx, entry)),
        })
}

impl<H: Hal> DfeDevice<H> {
    /// Read the DFE's last-error ring.
    ///
    /// The whole ring is re-read on every call.
    pub fn last_error_log(&mut self) -> Result<ErrorLog> {
        let base = self.sdk_data_addr()?.wrapping_add(self.layout().error_log_offset);

        let mut log = ErrorLog::default();
        let mut addr = base;
        for entry in log.entries.iter_mut() {
            let code = self.read_u32(addr, "error log code")?;
            let level = self.read_u32(addr.wrapping_add(4), "error log level")?;
            let ts_low = self.read_u32(addr.wrapping_add(8), "error log timestamp")?;
            let ts_high = self.read_u32(addr.wrapping_add(12), "error log timestamp")?;
            *entry = ErrorLogEntry {
                code,
                level,
                timestamp: u64_from_words(ts_low, ts_high),
            };
            addr = addr.wrapping_add(ERROR_LOG_ENTRY_SIZE);
        }

        trace!("Error log at {base:#010X}: {log:x?}");
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: u32, level: LogLevel, timestamp: u64) -> ErrorLogEntry {
        ErrorLogEntry {
            code,
            level: level.bits(),
            timestamp,
        }
    }

    #[test]
    fn empty_ring_selects_nothing() {
        assert_eq!(select_most_severe(&[ErrorLogEntry::default(); 6]), None);
        assert_eq!(select_most_severe(&[]), None);
    }

    #[test]
    fn same_level_prefers_later_timestamp() {
        let entries = [
            entry(0x0101, LogLevel::CRITICAL, 100),
            entry(0x0102, LogLevel::CRITICAL, 200),
        ];
        assert_eq!(select_most_severe(&entries), Some((1, entries[1])));
    }

    #[test]
    fn same_timestamp_prefers_higher_level() {
        let entries = [
            entry(0x0101, LogLevel::FATAL, 100),
            entry(0x0102, LogLevel::WARNING, 100),
        ];
        assert_eq!(select_most_severe(&entries), Some((0, entries[0])));
    }

    #[test]
    fn higher_level_beats_later_timestamp() {
        let entries = [
            entry(0x0101, LogLevel::WARNING, 900),
            entry(0x0102, LogLevel::CRITICAL, 10),
        ];
        assert_eq!(select_most_severe(&entries), Some((1, entries[1])));
    }

    #[test]
    fn code_zero_is_skipped() {
        // Treated as an empty slot, whatever its level
        let entries = [
            entry(0, LogLevel::FATAL, 1000),
            entry(0x0C01, LogLevel::INFO, 1),
        ];
        assert_eq!(select_most_severe(&entries), Some((1, entries[1])));
    }

    #[test]
    fn exact_tie_keeps_first() {
        let entries = [
            entry(0x0101, LogLevel::CRITICAL, 5),
            entry(0x0202, LogLevel::CRITICAL, 5),
        ];
        assert_eq!(select_most_severe(&entries), Some((0, entries[0])));
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::FATAL > LogLevel::CRITICAL);
        assert!(LogLevel::WARNING > LogLevel::INFO);
        assert_eq!(LogLevel::all().bits(), 0x1F);
    }
}
