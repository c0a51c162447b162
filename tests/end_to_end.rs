// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

mod common;

use common::{SDK_DATA_ADDR, device};
use dfe_mailbox::device::DeviceState;
use dfe_mailbox::diag::ErrorSource;
use dfe_mailbox::diag::error_log::LogLevel;
use dfe_mailbox::hal::{LinkId, ResponseStatus};
use dfe_mailbox::{CommandStatus, Error, RecoveryAction};

#[test]
fn failed_command_escalates_once() {
    let mut dfe = device();
    dfe.set_state(DeviceState::DFE_CPU_LOADED);
    dfe.hal_mut()
        .put_error_log(&[(0x0007, LogLevel::FATAL.bits(), 1234)]);
    dfe.hal_mut()
        .reply(ResponseStatus::CommandFailed(0x07), &[0xAA, 0xBB]);

    let mut resp = [0u8; 2];
    let err = dfe
        .send_service_command(LinkId::LINK_0, 5, None, Some(&mut resp))
        .unwrap_err();

    assert_eq!(err, Error::CommandFailed { cmd_id: 5, code: 7 });
    assert_eq!(err.command_status(), Some(CommandStatus::CommandFailed(7)));
    assert_eq!(resp, [0xAA, 0xBB]);

    let stats = dfe.diagnostic_stats();
    assert_eq!(stats.escalations, 1);
    assert_eq!(stats.suppressed, 0);
    assert_eq!(stats.exceptions_seen, 0);

    let outcome = dfe.last_diagnostic().expect("diagnostics ran");
    assert_eq!(outcome.trigger, err);
    let reported = outcome.reported.expect("reported error");
    assert_eq!(reported.slot, 0);
    assert_eq!(reported.entry.code, 0x0007);
    assert_eq!(reported.entry.timestamp, 1234);
    assert_eq!(reported.source, ErrorSource::SvcRuntime);
    assert_eq!(
        reported.info.map(|i| i.description),
        Some("Common Error: Fatal Exception")
    );
    assert_eq!(outcome.action, RecoveryAction::ResetDevice);

    // One exception check, one pass over the error ring
    assert_eq!(dfe.hal().reads_at(SDK_DATA_ADDR + 0x100), 1);
    assert_eq!(dfe.hal().reads_at(SDK_DATA_ADDR + 0x40), 1);
    assert_eq!(dfe.hal().sends().len(), 1);
}

#[test]
fn successful_command_does_not_escalate() {
    let mut dfe = device();
    dfe.hal_mut()
        .reply(ResponseStatus::Success, &[0, 0, 0, 0, 0x03, 0, 0, 0]);

    assert_eq!(dfe.ecc_enable_get(), Ok(3));
    assert_eq!(dfe.diagnostic_stats().escalations, 0);
    assert_eq!(dfe.last_diagnostic(), None);
    assert_eq!(dfe.hal().register_calls(), 0);
}
