//! Diagnostic escalation, run when a DFE command fails.
//!
//! A failed command on its own says little - often just that no response
//! arrived.  The DFE usually knows more: it records the last error raised by
//! each of its firmware objects, and a core which crashes saves its state
//! before halting.  When a command fails (for any reason other than bad call
//! arguments), the command channel runs a best-effort diagnostic pass:
//!
//! 1. If the DFE CPU image is loaded, check each core's exception flag.
//! 2. Read the DFE's last-error ring.
//! 3. Pick the most severe entry (see
//!    [`error_log::select_most_severe()`]).
//! 4. Classify it, look it up in the [`codes`] table, and emit a single
//!    consolidated `error!` report.
//!
//! Any failure inside this pass is logged and otherwise ignored - the caller
//! always gets the error which triggered it.
//!
//! The pass never runs inside another one.  Commands sent through a
//! [`DiagnosticSession`], which is how diagnostic code of your own should
//! talk to the DFE, do not escalate.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

pub mod codes;
pub mod error_log;
pub mod exception;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use core::ops::{Deref, DerefMut};

use crate::device::DfeDevice;
use crate::hal::Hal;
use crate::{Error, RecoveryAction};
use codes::ErrorCodeInfo;
use error_log::{ERROR_LOG_SLOTS, ErrorLogEntry};

/// Error codes above this come from the DFE application layer
pub const APP_ERROR_CODE_BOUNDARY: u32 = 0xE000;

/// Which DFE firmware layer raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    /// SDK services and drivers
    SvcRuntime,
    /// Application layer
    AppRuntime,
}

impl ErrorSource {
    pub fn classify(code: u32) -> Self {
        if code > APP_ERROR_CODE_BOUNDARY {
            ErrorSource::AppRuntime
        } else {
            ErrorSource::SvcRuntime
        }
    }
}

/// The error log entry chosen for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportedError {
    /// Ring slot the entry came from
    pub slot: usize,
    pub entry: ErrorLogEntry,
    pub source: ErrorSource,
    /// `None` if the code is not in the firmware error table
    pub info: Option<&'static ErrorCodeInfo>,
}

/// Result of a diagnostic pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticOutcome {
    /// The error which triggered the pass
    pub trigger: Error,
    /// Bitmask of DFE cores found in exception
    pub exception_mask: u32,
    /// Most severe entry in the DFE's error log, if any
    pub reported: Option<ReportedError>,
    /// Suggested recovery
    pub action: RecoveryAction,
}

/// Guard marking a diagnostic pass in progress on a device.
///
/// Dereferences to the device.  Failed commands sent through the session do
/// not trigger further escalation.  The device returns to normal once the
/// session is dropped.
pub struct DiagnosticSession<'a, H: Hal> {
    device: &'a mut DfeDevice<H>,
}

impl<H: Hal> Drop for DiagnosticSession<'_, H> {
    fn drop(&mut self) {
        self.device.diag_depth -= 1;
    }
}

impl<H: Hal> Deref for DiagnosticSession<'_, H> {
    type Target = DfeDevice<H>;

    fn deref(&self) -> &Self::Target {
        self.device
    }
}

impl<H: Hal> DerefMut for DiagnosticSession<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.device
    }
}

impl<H: Hal> DfeDevice<H> {
    /// Start a diagnostic session.  See [`DiagnosticSession`].
    pub fn diagnostic_session(&mut self) -> DiagnosticSession<'_, H> {
        self.diag_depth += 1;
        DiagnosticSession { device: self }
    }

    /// Whether a diagnostic pass is in progress.
    pub fn in_diagnostics(&self) -> bool {
        self.diag_depth > 0
    }

    // Runs the diagnostic pass for a failed command, unless one is already
    // running
    pub(crate) fn escalate(&mut self, trigger: &Error) {
        if matches!(trigger, Error::Param(_)) {
            return;
        }

        if self.in_diagnostics() {
            debug!("Diagnostics already running, not escalating {trigger}");
            self.stats.suppressed += 1;
            return;
        }

        let mut session = self.diagnostic_session();
        let outcome = session.diagnose(*trigger);
        report(&outcome);

        session.stats.escalations += 1;
        if outcome.exception_mask != 0 {
            session.stats.exceptions_seen += 1;
        }
        session.last_outcome = Some(outcome);
    }

    fn diagnose(&mut self, trigger: Error) -> DiagnosticOutcome {
        debug!("Running DFE diagnostics after: {trigger}");

        let mut exception_mask = 0;
        if self.is_dfe_loaded() {
            match self.check_exception() {
                Ok(mask) => exception_mask = mask,
                // Keep going, the error log may still be readable
                Err(e) => warn!("DFE exception check failed: {e}"),
            }
        }

        let reported = match self.last_error_log() {
            Ok(log) => log.most_severe().map(|(slot, entry)| ReportedError {
                slot,
                entry,
                source: ErrorSource::classify(entry.code),
                info: codes::lookup(entry.code),
            }),
            Err(e) => {
                warn!("Failed to read DFE error log: {e}");
                None
            }
        };

        let action = if exception_mask != 0 {
            RecoveryAction::ResetDevice
        } else {
            reported
                .and_then(|r| r.info)
                .map(|info| info.action)
                .unwrap_or_else(|| trigger.recovery_action())
        };

        DiagnosticOutcome {
            trigger,
            exception_mask,
            reported,
            action,
        }
    }
}

// One consolidated report per pass
fn report(outcome: &DiagnosticOutcome) {
    let trigger = &outcome.trigger;
    let action = outcome.action;
    let cores = outcome.exception_mask;

    match outcome.reported {
        Some(r) => {
            let (description, cause) = r
                .info
                .map(|info| (info.description, info.cause))
                .unwrap_or(("Unknown error code", "-"));
            error!(
                "DFE {:?} error {:#06X} ({}) from {} {} [{}: {}], level {:?}, timestamp {}, cores in exception {cores:#X}, after: {trigger}, recovery: {action:?}",
                r.source,
                r.entry.code,
                codes::object_name(r.entry.code),
                ERROR_LOG_SLOTS[r.slot],
                r.slot,
                description,
                cause,
                r.entry.level(),
                r.entry.timestamp,
            );
        }
        None if cores != 0 => {
            error!(
                "DFE cores in exception {cores:#X}, no error logged, after: {trigger}, recovery: {action:?}"
            );
        }
        None => debug!("DFE reported no errors after: {trigger}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundary() {
        assert_eq!(ErrorSource::classify(0x0007), ErrorSource::SvcRuntime);
        assert_eq!(ErrorSource::classify(0xE000), ErrorSource::SvcRuntime);
        assert_eq!(ErrorSource::classify(0xE001), ErrorSource::AppRuntime);
    }
}
