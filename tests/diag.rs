// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

mod common;

use common::{Call, SDK_DATA_ADDR, device};
use dfe_mailbox::device::DeviceState;
use dfe_mailbox::diag::ErrorSource;
use dfe_mailbox::diag::error_log::{ErrorLogEntry, LogLevel};
use dfe_mailbox::diag::exception::{EXCEPTION_REGISTERS, flag_offset, register_offset};
use dfe_mailbox::hal::{LinkId, MailboxError, ResponseStatus};
use dfe_mailbox::{Error, RecoveryAction};

const ERROR_LOG_BASE: u32 = SDK_DATA_ADDR + 0x40;
const EXCEPTION_BASE: u32 = SDK_DATA_ADDR + 0x100;

const FATAL: u32 = LogLevel::FATAL.bits();
const WARNING: u32 = LogLevel::WARNING.bits();

fn fail_command(dfe: &mut dfe_mailbox::device::DfeDevice<common::MockHal>) -> Error {
    dfe.hal_mut().no_reply(MailboxError::Timeout);
    dfe.send_service_command(LinkId::LINK_0, 0x10, None, None)
        .unwrap_err()
}

#[test]
fn sdk_data_address_from_scratch() {
    let mut dfe = device();
    assert_eq!(dfe.sdk_data_addr(), Ok(SDK_DATA_ADDR));
}

#[test]
fn error_log_skips_empty_slots() {
    let mut dfe = device();
    dfe.hal_mut()
        .put_error_log(&[(0, FATAL, 900), (0x3405, WARNING, 1), (0, FATAL, 901)]);

    let log = dfe.last_error_log().expect("error log");
    assert!(log.entries[0].is_empty());
    assert_eq!(
        log.most_severe(),
        Some((
            1,
            ErrorLogEntry {
                code: 0x3405,
                level: WARNING,
                timestamp: 1
            }
        ))
    );
}

#[test]
fn error_log_timestamp_spans_two_words() {
    let mut dfe = device();
    dfe.hal_mut()
        .put_error_log(&[(0x0001, WARNING, 0x0000_0002_0000_0001)]);

    let log = dfe.last_error_log().expect("error log");
    assert_eq!(log.entries[0].timestamp, 0x0000_0002_0000_0001);
}

#[test]
fn escalation_reports_most_severe() {
    let mut dfe = device();
    dfe.hal_mut().put_error_log(&[
        (0x3405, WARNING, 500),
        (0x0007, FATAL, 90),
        (0xE010, FATAL, 80),
        (0x0001, FATAL, 90),
    ]);

    let trigger = fail_command(&mut dfe);

    let outcome = dfe.last_diagnostic().expect("diagnostics ran");
    assert_eq!(outcome.trigger, trigger);
    assert_eq!(outcome.exception_mask, 0);

    // Equal level and timestamp: the earlier slot wins
    let reported = outcome.reported.expect("reported error");
    assert_eq!(reported.slot, 1);
    assert_eq!(reported.entry.code, 0x0007);
    assert_eq!(reported.source, ErrorSource::SvcRuntime);
    assert_eq!(
        reported.info.map(|i| i.action),
        Some(RecoveryAction::ResetDevice)
    );
    assert_eq!(outcome.action, RecoveryAction::ResetDevice);
    assert_eq!(dfe.diagnostic_stats().escalations, 1);
}

#[test]
fn escalation_with_empty_log_uses_trigger_action() {
    let mut dfe = device();
    let trigger = fail_command(&mut dfe);

    let outcome = dfe.last_diagnostic().expect("diagnostics ran");
    assert_eq!(outcome.reported, None);
    assert_eq!(outcome.action, trigger.recovery_action());
}

#[test]
fn exception_check_needs_loaded_image() {
    let mut dfe = device();
    dfe.hal_mut().put_u32(EXCEPTION_BASE + flag_offset(1), 1);

    fail_command(&mut dfe);
    assert_eq!(dfe.hal().reads_at(EXCEPTION_BASE), 0);
    assert_eq!(dfe.last_diagnostic().map(|o| o.exception_mask), Some(0));

    dfe.set_state(DeviceState::DFE_CPU_LOADED);
    fail_command(&mut dfe);
    assert_eq!(dfe.hal().reads_at(EXCEPTION_BASE), 1);

    let outcome = dfe.last_diagnostic().expect("diagnostics ran");
    assert_eq!(outcome.exception_mask, 0b10);
    assert_eq!(outcome.action, RecoveryAction::ResetDevice);

    let stats = dfe.diagnostic_stats();
    assert_eq!(stats.escalations, 2);
    assert_eq!(stats.exceptions_seen, 1);
}

#[test]
fn escalation_failure_keeps_trigger() {
    let mut dfe = device();
    dfe.set_state(DeviceState::DFE_CPU_LOADED);
    dfe.hal_mut().failing_reads.insert(EXCEPTION_BASE);
    dfe.hal_mut().failing_reads.insert(ERROR_LOG_BASE);

    let err = fail_command(&mut dfe);
    assert_eq!(
        err,
        Error::NoResponse {
            cmd_id: 0x10,
            source: MailboxError::Timeout
        }
    );

    let outcome = dfe.last_diagnostic().expect("diagnostics ran");
    assert_eq!(outcome.trigger, err);
    assert_eq!(outcome.reported, None);
    assert_eq!(outcome.exception_mask, 0);
}

#[test]
fn session_suppresses_escalation() {
    let mut dfe = device();
    {
        let mut session = dfe.diagnostic_session();
        assert!(session.in_diagnostics());
        session
            .hal_mut()
            .reply(ResponseStatus::CommandFailed(1), &[]);
        let err = session
            .send_service_command(LinkId::LINK_0, 0x10, None, None)
            .unwrap_err();
        assert_eq!(err, Error::CommandFailed { cmd_id: 0x10, code: 1 });
    }
    assert!(!dfe.in_diagnostics());

    let stats = dfe.diagnostic_stats();
    assert_eq!(stats.suppressed, 1);
    assert_eq!(stats.escalations, 0);
    assert_eq!(dfe.hal().reads_at(ERROR_LOG_BASE), 0);

    fail_command(&mut dfe);
    assert_eq!(dfe.diagnostic_stats().escalations, 1);
}

#[test]
fn snapshot_needs_loaded_image() {
    let mut dfe = device();
    assert_eq!(dfe.exception_snapshot(), Err(Error::NotLoaded));
    assert!(dfe.hal().calls.is_empty());
}

#[test]
fn snapshot_reads_every_core() {
    let mut dfe = device();
    dfe.set_state(DeviceState::DFE_CPU_LOADED);

    let esr = &EXCEPTION_REGISTERS[7];
    assert_eq!(esr.name, "esr_el1");
    dfe.hal_mut().put_u32(EXCEPTION_BASE + flag_offset(2), 1);
    dfe.hal_mut()
        .put_u64(EXCEPTION_BASE + register_offset(2, esr), 0x9600_0045);
    dfe.hal_mut().put_u64(
        EXCEPTION_BASE + register_offset(3, &EXCEPTION_REGISTERS[32]),
        0xF0,
    );

    let snapshot = dfe.exception_snapshot().expect("snapshot");
    assert_eq!(snapshot.exception_mask(), 0b100);
    assert_eq!(snapshot.cores[2].register("esr_el1"), Some(0x9600_0045));
    assert_eq!(snapshot.cores[3].register("icc_rpr_el1"), Some(0xF0));

    let reads = dfe
        .hal()
        .calls
        .iter()
        .filter(|c| matches!(c, Call::ReadBytes { .. }))
        .count();
    assert_eq!(reads, 4 * (1 + 33));
}

#[test]
fn snapshot_stops_at_first_failed_read() {
    let mut dfe = device();
    dfe.set_state(DeviceState::DFE_CPU_LOADED);

    let elr = &EXCEPTION_REGISTERS[2];
    let addr = EXCEPTION_BASE + register_offset(1, elr);
    dfe.hal_mut().failing_reads.insert(addr);

    assert_eq!(
        dfe.exception_snapshot(),
        Err(Error::ExceptionRead {
            core: 1,
            register: "elr_el1",
            addr
        })
    );
    assert_eq!(
        dfe.hal().calls.last(),
        Some(&Call::ReadBytes { addr, len: 8 })
    );
}

#[test]
fn unbooted_scratch_addresses_wrap() {
    let mut dfe = device();
    dfe.set_state(DeviceState::DFE_CPU_LOADED);
    dfe.hal_mut().set_sdk_data_addr(u32::MAX);

    // Ring and flags land just past zero
    let ring = u32::MAX.wrapping_add(0x40);
    let flags = u32::MAX.wrapping_add(0x100);
    assert_eq!(ring, 0x3F);
    dfe.hal_mut().put_u32(ring, 0x0007);
    dfe.hal_mut().put_u32(ring + 4, FATAL);

    let err = fail_command(&mut dfe);
    assert_eq!(
        err,
        Error::NoResponse {
            cmd_id: 0x10,
            source: MailboxError::Timeout
        }
    );

    assert_eq!(dfe.hal().reads_at(flags), 1);
    let outcome = dfe.last_diagnostic().expect("diagnostics ran");
    assert_eq!(outcome.trigger, err);
    assert_eq!(outcome.reported.map(|r| r.entry.code), Some(0x0007));
    assert_eq!(dfe.diagnostic_stats().escalations, 1);
}

#[test]
fn unbooted_scratch_snapshot_wraps() {
    let mut dfe = device();
    dfe.set_state(DeviceState::DFE_CPU_LOADED);
    dfe.hal_mut().set_sdk_data_addr(u32::MAX);

    let base = u32::MAX.wrapping_add(0x100);
    let last = base.wrapping_add(register_offset(3, &EXCEPTION_REGISTERS[32]));
    dfe.hal_mut().put_u64(last, 0xAB);

    let snapshot = dfe.exception_snapshot().expect("snapshot");
    assert_eq!(snapshot.exception_mask(), 0);
    assert_eq!(snapshot.cores[3].register("icc_rpr_el1"), Some(0xAB));
    assert_eq!(
        dfe.hal().calls.last(),
        Some(&Call::ReadBytes {
            addr: last,
            len: 8
        })
    );
}
