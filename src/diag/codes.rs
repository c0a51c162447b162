//! DFE firmware error code table.
//!
//! Error codes reported by the DFE (in command responses, and in its
//! last-error ring) are 16-bit values.  The high byte identifies the firmware
//! object which raised the error, and codes above
//! [`APP_ERROR_CODE_BOUNDARY`](super::APP_ERROR_CODE_BOUNDARY) come from the
//! application layer rather than the SDK services.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

use crate::RecoveryAction;
use crate::RecoveryAction as Act;

/// Description of a DFE firmware error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    pub code: u32,
    pub description: &'static str,
    pub cause: &'static str,
    pub action: RecoveryAction,
}

impl ErrorCodeInfo {
    const fn new(
        code: u32,
        description: &'static str,
        cause: &'static str,
        action: RecoveryAction,
    ) -> Self {
        Self {
            code,
            description,
            cause,
            action,
        }
    }
}

/// Look up a DFE firmware error code.
///
/// Returns `None` for unknown codes, and for 0 (no error).
pub fn lookup(code: u32) -> Option<&'static ErrorCodeInfo> {
    ERROR_CODES
        .binary_search_by_key(&code, |info| info.code)
        .ok()
        .map(|idx| &ERROR_CODES[idx])
}

/// Name of the firmware object which raised `code`.
pub fn object_name(code: u32) -> &'static str {
    match code >> 8 {
        0x00 => "Common",
        0x01 => "Command Handler",
        0x02 => "OSAL",
        0x03 => "Logging",
        0x04 => "DFE Service",
        0x05 => "Timer",
        0x06 => "Radio Control",
        0x07 => "Event",
        0x08 => "CLI",
        0x09 => "Malloc",
        0x0A => "BBIC Bridge",
        0x0B => "Buffer Management",
        0x0C => "Configuration",
        0x0F => "ECC",
        0x10 => "Watchdog",
        0x11 => "Radio Command",
        0x20 => "Debug",
        0x30 => "GPIO Driver",
        0x31 => "GPT Driver",
        0x32 => "Interrupt Driver",
        0x33 => "UART Driver",
        0x34 => "Mailbox Driver",
        0x36 => "System Clock Driver",
        0x37 => "Stream Driver",
        0x38 => "Power Meter Driver",
        0x39 => "DMA Driver",
        0x3A => "Capture Driver",
        0x3B => "HW Interface Driver",
        0x3C => "DFE Driver",
        0x80 => "Device Profile",
        0x81 => "Radio Sequencer",
        0xE0..=0xEF => "Application",
        _ => "Unknown",
    }
}

// Sorted by code
#[rustfmt::skip]
static ERROR_CODES: &[ErrorCodeInfo] = &[
    ErrorCodeInfo::new(0x0001, "Common Error: Parameter(s)", "Invalid Parameter(s) Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0002, "Common Error: Pointer(s)", "Invalid Pointer(s) Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0003, "Common Error: Feature Implementation", "Requested Feature has not been Implemented", Act::CheckFeature),
    ErrorCodeInfo::new(0x0004, "Common Error: CRC Check", "Computed CRC does not Match Provided CRC", Act::ResetDevice),
    ErrorCodeInfo::new(0x0005, "Common Error: Insufficient Memory", "Unable to Allocate requested Memory (i.e. Heap)", Act::ResetDevice),
    ErrorCodeInfo::new(0x0006, "Common Error: Stack Overflow", "Allocated Stack Size has been Exhausted", Act::ResetDevice),
    ErrorCodeInfo::new(0x0007, "Common Error: Fatal Exception", "Fatal Exception has been Triggered by CPU", Act::ResetDevice),
    ErrorCodeInfo::new(0x0101, "Command Error: Transaction ID", "Invalid Transaction ID Received", Act::ResetDevice),
    ErrorCodeInfo::new(0x0102, "Command Error: Link Busy", "Link is Currently Processing a Command", Act::CheckInterface),
    ErrorCodeInfo::new(0x0103, "Command Error: Link Number", "Invalid Link Number Provided in Command", Act::CheckParam),
    ErrorCodeInfo::new(0x0104, "Command Error: Mailbox Number", "Invalid Mailbox Number Received", Act::CheckParam),
    ErrorCodeInfo::new(0x0105, "Command Error: Command Payload Size", "Payload Size Exceeds Link Buffer Size", Act::CheckParam),
    ErrorCodeInfo::new(0x0106, "Command Error: Command ID", "Invalid Command ID Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0107, "Command Error: Event Type", "Invalid Event Type Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0108, "Command Error: Parameter(s)", "Invalid Parameter(s) Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0109, "Command Error: link buffer is NULL", "Invalid Parameter(s) Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x010A, "Command Error: Mailbox command timed out", "Potential timing issue with calibration threads", Act::ResetDevice),
    ErrorCodeInfo::new(0x0201, "OSAL Service Error: Memory Pool", "Memory Pool was Deleted while Thread Suspended", Act::CheckFeature),
    ErrorCodeInfo::new(0x0202, "OSAL Service Error: Memory Pool Pointer", "Invalid Memory Pool Pointer Provided by Thread", Act::ResetDevice),
    ErrorCodeInfo::new(0x0203, "OSAL Service Error: Invalid Pointer", "NULL Pointer Detected", Act::CheckParam),
    ErrorCodeInfo::new(0x0204, "OSAL Service Error: Semaphore Wait", "OSAL Semaphore Wait Timeout", Act::CheckFeature),
    ErrorCodeInfo::new(0x0205, "OSAL Service Error: Memory Pool Size", "Invalid Memory Pool Size", Act::CheckParam),
    ErrorCodeInfo::new(0x0206, "OSAL Service Error: Event Group Pointer", "Event Group Pointer is either NULL or Points to a Group already Created", Act::CheckParam),
    ErrorCodeInfo::new(0x0207, "OSAL Service Error: No Event", "Service was unable to get the Specified Events", Act::CheckFeature),
    ErrorCodeInfo::new(0x0208, "OSAL Service Error: Option", "Invalid Get Option Specified", Act::CheckParam),
    ErrorCodeInfo::new(0x0209, "OSAL Service Error: Queue Pointer", "Queue Pointer was either NULL or Pointing to a Queue that was already Created", Act::CheckParam),
    ErrorCodeInfo::new(0x020A, "OSAL Service Error: Queue Empty", "Message Queue is Empty", Act::CheckFeature),
    ErrorCodeInfo::new(0x020B, "OSAL Service Error: Queue Full", "Message Queue is Full", Act::CheckFeature),
    ErrorCodeInfo::new(0x020C, "OSAL Service Error: Semaphore Pointer", "Semaphore Pointer was either NULL or Pointing to a Semaphore that was already Created", Act::CheckParam),
    ErrorCodeInfo::new(0x020D, "OSAL Service Error: No Semaphore", "Semaphore Count is Zero", Act::CheckFeature),
    ErrorCodeInfo::new(0x020E, "OSAL Service Error: Thread Pointer", "Thread Pointer was either NULL or Points to a Thread that was already Created", Act::CheckParam),
    ErrorCodeInfo::new(0x020F, "OSAL Service Error: Thread Priority", "Invalid Thread Priority was Specified", Act::CheckParam),
    ErrorCodeInfo::new(0x0210, "OSAL Service Error: Memory Allocation", "Service was unable to Allocate a Block of Memory", Act::CheckFeature),
    ErrorCodeInfo::new(0x0211, "OSAL Service Error: Thread Delete State", "Invalid Thread State for Deletion", Act::CheckFeature),
    ErrorCodeInfo::new(0x0212, "OSAL Service Error: Thread Resume State", "Thread cannot be Resumed because it is not Suspended", Act::CheckFeature),
    ErrorCodeInfo::new(0x0213, "OSAL Service Error: Non-Thread Calibrationl", "API function was Calibrationibrationled from a non-thread", Act::CheckFeature),
    ErrorCodeInfo::new(0x0214, "OSAL Service Error: Thread Suspend State", "Threads to be suspended must be in Terminated or Completed State", Act::CheckFeature),
    ErrorCodeInfo::new(0x0215, "OSAL Service Error: Timer Pointer", "Invalid Timer Pointer", Act::CheckParam),
    ErrorCodeInfo::new(0x0216, "OSAL Service Error: Timer Tick", "Initial Timer Tick Value Cannot be Zero", Act::CheckParam),
    ErrorCodeInfo::new(0x0217, "OSAL Service Error: Activation", "Invalid Activation was Specified", Act::CheckParam),
    ErrorCodeInfo::new(0x0218, "OSAL Service Error: Preemption Threshold", "Invalid Preemption Threshold was Specified", Act::CheckParam),
    ErrorCodeInfo::new(0x0219, "OSAL Service Error: Delayed Suspension", "Previously-set Delayed Suspension was Lifted", Act::CheckFeature),
    ErrorCodeInfo::new(0x021A, "OSAL Service Error: Wait Abort", "Wait was lifted by another thread, timer or ISR", Act::CheckFeature),
    ErrorCodeInfo::new(0x021B, "OSAL Service Error: Wait Abort Error", "Specified Thread is not in the Wait state", Act::CheckFeature),
    ErrorCodeInfo::new(0x021C, "OSAL Service Error: Mutex Pointer", "Invalid Mutex pointer", Act::CheckParam),
    ErrorCodeInfo::new(0x021D, "OSAL Service Error: Mutex UnAvailable", "Unable to obtain the Specified Mutex", Act::CheckFeature),
    ErrorCodeInfo::new(0x021E, "OSAL Service Error: Mutex Ownership", "Specified Mutex is not Owned by the Calibrationler", Act::CheckFeature),
    ErrorCodeInfo::new(0x021F, "OSAL Service Error: Priority Inheritance", "Invalid Priority Inheritance Parameter Specified", Act::CheckParam),
    ErrorCodeInfo::new(0x0220, "OSAL Service Error: Operation Failed", "Specified Operation was not Completed", Act::CheckFeature),
    ErrorCodeInfo::new(0x0221, "OSAL Service Error: Semaphore Limit", "Semaphore upper limit has been exceeded", Act::CheckFeature),
    ErrorCodeInfo::new(0x0222, "OSAL Service Error: Invalid Semaphore Limit", "Specified Semaphore Ceiling is Invalid", Act::CheckParam),
    ErrorCodeInfo::new(0x0223, "OSAL Service Error: Log Link Search Failed", "No Valid Node found in the OSAL Log Link", Act::CheckParam),
    ErrorCodeInfo::new(0x0224, "OSAL Service Error: Invalid Log Link Node", "OSAL Dynamic Link List Functions were Passed an Invalid Node Index as an Input Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x0225, "OSAL Service Error: Invalid Log Item", "Invalid Input Log Item", Act::CheckParam),
    ErrorCodeInfo::new(0x0226, "OSAL Service Error: Invalid Log Pointer", "Log Function was Passed an Invalid Pointer as a Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x0227, "the maximum number of init threads (64) is exceeded", "too many threads are being used for initialization", Act::CheckParam),
    ErrorCodeInfo::new(0x02F0, "OSAL Service Error: Osal Platform Start", "Osal Platform Start", Act::CheckParam),
    ErrorCodeInfo::new(0x02FE, "OSAL Service Error: Osal Platform End", "Osal Platform End", Act::CheckParam),
    ErrorCodeInfo::new(0x02FF, "OSAL Service Error: Disabled Feature", "Requested Feature is not Enabled", Act::CheckParam),
    ErrorCodeInfo::new(0x0301, "Log Trace Error: Parameter Out of Range", "Invalid Log Argument Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0302, "Log Trace Error: Core ID", "Invalid Core ID Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0303, "Log Trace Error: UART Transmit", "UART Failed to Transmit", Act::CheckInterface),
    ErrorCodeInfo::new(0x0401, "DFE Event Service Error: Capture Queue Full", "Capture Queue is Full", Act::CheckFeature),
    ErrorCodeInfo::new(0x0402, "DFE Event Service Error: Memory Allocation", "Capture Buffer could not be Allocated", Act::CheckFeature),
    ErrorCodeInfo::new(0x0403, "DFE Event Service Error: Capture Type", "Invalid Capture Type Provided to Function", Act::CheckParam),
    ErrorCodeInfo::new(0x0404, "DFE Event Service Error: Capture Type Request", "Capture Type requested was not configured", Act::CheckParam),
    ErrorCodeInfo::new(0x0405, "DFE Event Service Error: Capture Buffer Busy", "Capture in Progress", Act::CheckFeature),
    ErrorCodeInfo::new(0x0406, "DFE Event Service Error: Event Type", "Invalid Event Type Requested", Act::CheckParam),
    ErrorCodeInfo::new(0x0407, "DFE Event Service Error: Adaptation Busy", "Adaptation Currently in Progress", Act::CheckFeature),
    ErrorCodeInfo::new(0x0408, "DFE Event Service Error: Unexpected Capture Event", "Unknown Cause to Error Event", Act::ResetDevice),
    ErrorCodeInfo::new(0x0409, "DFE Event Service Error: Capture Channel", "Invalid Capture Channel Requested", Act::ResetDevice),
    ErrorCodeInfo::new(0x040A, "DFE Event Service Error: VSWR Direction", "Invalid VSWR Direction Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x040B, "DFE Event Service Error: Invalid capture requested", "Check if the capture request is supported for Radio mode (RS or RCI)", Act::CheckParam),
    ErrorCodeInfo::new(0x040C, "DFE Capture Service Error: Power measurement abort has failed (RCI mode)", "Unexpected error", Act::ResetDevice),
    ErrorCodeInfo::new(0x040D, "DFE Event Service Error: Invalid capture period requested", "Check if the capture period request is supported(for RS/RCI or DFE mapping mode)", Act::CheckParam),
    ErrorCodeInfo::new(0x040E, "DFE Event Service Error: Invalid CTC decimation rate configuration", "CTC decimation rate does meet the min/max rate requirement", Act::CheckParam),
    ErrorCodeInfo::new(0x040F, "DFE Event Service Error: Invalid CTC envelop power configuration", "Invalid CTC envelop power is configured", Act::CheckParam),
    ErrorCodeInfo::new(0x0410, "DFE Event Service Error: Invalid CTC row configuration", "Number of CTC rows exceed the maximum allowable rows in the HW", Act::CheckParam),
    ErrorCodeInfo::new(0x0411, "DFE Event Service Error: Invalid CTC column configuration", "Number of CTC columns exceed the maximum allowable columns in the HW", Act::CheckParam),
    ErrorCodeInfo::new(0x0412, "DFE Event Service Error: Duplicate CTC envelop power configuration", "Duplicate CTC envelop power is configured for the same time constant", Act::CheckParam),
    ErrorCodeInfo::new(0x0413, "DFE Event Service Error: CTC path balance failed", "Main datapath delay is less than CT datapath delay. Path balance can't be achieved.", Act::CheckParam),
    ErrorCodeInfo::new(0x0414, "DFE Event Service Error: CTC path fractional sample balance required", "There is a fractional delay difference between main datapath and CT datapath", Act::CheckParam),
    ErrorCodeInfo::new(0x0415, "DFE Event Service Error: CTC path exhibits uncorrectable fractional delay", "Could be caused by bad configurator settings", Act::CheckParam),
    ErrorCodeInfo::new(0x0416, "DFE Event Service Error: Alignment of CTC pre-DPD capture and CTC envelop capture failed", "Alignment of CTC pre-DPD capture and CTC envelop capture can not be achieved", Act::CheckParam),
    ErrorCodeInfo::new(0x0417, "DFE Event Service Error: Invalid decimator selected for a row", "Invalid decimator selected for a row", Act::CheckParam),
    ErrorCodeInfo::new(0x0418, "DFE Event Service Error: Invalid fbox scaler selected", "Fbox scaler value cannot be smaller than minimum scaler value detected based on max num of columns", Act::CheckParam),
    ErrorCodeInfo::new(0x0601, "Radio Control Service Error: Radio Sequencer Pattern Table", "Invalid Radio Sequencer Pattern Table Pointer", Act::CheckFeature),
    ErrorCodeInfo::new(0x0602, "Radio Control Service Errors: Radio Sequencer LUT CRC", "Computed LUT CRC does not Match the Provided CRC", Act::ResetDevice),
    ErrorCodeInfo::new(0x0603, "Radio Control Service Errors: Radio Sequencer Initialization", "CPU Profile doesn't Enable the Radio Sequencer", Act::ResetDevice),
    ErrorCodeInfo::new(0x0604, "Radio Control Service Errors: Tx attenuation step size is invalid", "Tx attenuation step size is invalid", Act::ResetDevice),
    ErrorCodeInfo::new(0x0605, "Radio Control Service Errors: Orx attenuation value invalid", "Orx attenuation value is invalid", Act::ResetDevice),
    ErrorCodeInfo::new(0x0606, "Radio Control Service Errors: Tx-Orx mapping invalid", "Tx to Orx mapping is not valid because the Orx is not a valid channel number, or the Orx is not connected to any Tx.", Act::CheckParam),
    ErrorCodeInfo::new(0x0701, "Event Service Error: Event Type", "Invalid Event Type Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x0702, "Event Service Error: Event Register Limit", "Thread Register Limit for same Event Type Reached", Act::CheckFeature),
    ErrorCodeInfo::new(0x0703, "Event Service Error: Duplicate Thread Registration", "Thread already Registered for Event Type", Act::CheckParam),
    ErrorCodeInfo::new(0x0704, "Event Service Error: Event Not Registered", "Thread not Registered to Receive Event Type", Act::CheckFeature),
    ErrorCodeInfo::new(0x0705, "Event Service Error: Queue Full", "Event could not be Notified because Receiving Thread's Queue was full", Act::CheckFeature),
    ErrorCodeInfo::new(0x0706, "Event Service Error: Event Timeout", "Event Timed Out", Act::CheckFeature),
    ErrorCodeInfo::new(0x0901, "Malloc Service Error: Service Initialization Failed", "Mutex / Byte Pool Create Failure, or Non-Contiguous Memory", Act::ResetDevice),
    ErrorCodeInfo::new(0x0902, "Malloc Service Error: Memory Pool Allocation Failed", "Memory Pool too small or not enough Space Available", Act::CheckFeature),
    ErrorCodeInfo::new(0x0903, "Malloc Service Error: Non-Contiguous Memory Region", "Memory Block is not Contiguous", Act::ResetDevice),
    ErrorCodeInfo::new(0x0904, "Malloc Service Error: Memory Pool Create Failed", "Could not Create Dynamic Memory Pools", Act::CheckFeature),
    ErrorCodeInfo::new(0x0905, "Malloc Service Error: Memory Alignment Failure", "Memory Region not aligned on unsigned long boundary", Act::ResetDevice),
    ErrorCodeInfo::new(0x0906, "Malloc Service Error: L4 Boundary Limit", "Requested Memory Region is outside of L4 Memory space", Act::ResetDevice),
    ErrorCodeInfo::new(0x0907, "Malloc Service Error: Invalid Memory Pool", "Number of Memory Pool bytes Available exceeds Memory Pool size", Act::CheckFeature),
    ErrorCodeInfo::new(0x0908, "Malloc Service Error: Invalid Heap Memory Pool", "Initial Heap Memory Pool is Invalid or Returns Invalid Bytes Available", Act::CheckFeature),
    ErrorCodeInfo::new(0x0909, "Malloc Service Error: Free Space Information Get Failed", "Free Space Memory Pool is Invalid or Returns Invalid Bytes Available", Act::CheckFeature),
    ErrorCodeInfo::new(0x090A, "Malloc Service Error: Dynamic Memory Information Get Failed", "Initial Heap / Free Space Memory Pool Invalid or returns Invalid bytes Available", Act::CheckFeature),
    ErrorCodeInfo::new(0x0A01, "BBIC Bridge Service Error: Firmware Image Initialization Region Size Limit", "Firmware Image exceeds Initialization Region Limit", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B01, "Memory Buffer Management Service Error: Initialization Failed", "Memory Allocation Failed", Act::CheckFeature),
    ErrorCodeInfo::new(0x0B02, "Memory Buffer Management Service Error: Capture Buffer Acquirement Failed", "Lack of Memory Buffer Available for Required Capture", Act::CheckFeature),
    ErrorCodeInfo::new(0x0B03, "Memory Buffer Management Service Error: Capture Mutex Release Failure", "External DPD Capture Data Handle in Process", Act::CheckFeature),
    ErrorCodeInfo::new(0x0B04, "Memory Buffer Management Service Error: Invalid Buffer Release", "Attempt made to release an Invalid Memory Buffer", Act::CheckFeature),
    ErrorCodeInfo::new(0x0B05, "Memory Buffer Management Service Error: No Buffer Instance", "Attempt made to acquire more buffers than Available", Act::CheckFeature),
    ErrorCodeInfo::new(0x0B06, "Memory Buffer Management Service Error: Buffer Allocation Failed", "Unable to Allocate Memory for Buffer Management", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B07, "Memory Buffer Management Service Error: No Available Buffer", "Buffer semaphore count is non-Zero, but no buffers marked Available", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B08, "Memory Buffer Management Service Error: UnAllocated Buffer", "Buffer Type has Zero Allocated Instances", Act::CheckFeature),
    ErrorCodeInfo::new(0x0B09, "Memory Buffer Management Service Error: Number of Samples", "Invalid Number of Samples Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B0A, "Memory Buffer Management Service Error: Number of DPD Features", "Invalid Number of DPD Features Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B0B, "Memory Buffer Management Service Error: Number of Filter Coefficients", "Invalid Number of Filter Coefficients Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B0C, "Memory Buffer Management Service Error: Number of 2-Way Samples", "Invalid Number of 2-Way Samples Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B0D, "Memory Buffer Management Service Error: Number of 3-Way Samples", "Invalid Number of 3-Way Samples Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B0E, "Memory Buffer Management Service Error: Number of Adaptation Buffers", "Invalid Number of Adaptation Buffers Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B0F, "Memory Buffer Management Service Error: Number of Capture Ways", "Invalid Number of Capture Ways Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B10, "Memory Buffer Management Service Error: Number of Capture Buffers", "Invalid Number of Capture Buffers Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B11, "Memory Buffer Management Service Error: Number of Captures per Adaptation", "Invalid Number of Captures per Adaptation Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B12, "Memory Buffer Management Service Error: Number of VSWR Samples", "Invalid Number of VSWR Samples Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B13, "Memory Buffer Management Service Error: Number of VSWR Buffers", "Invalid Number of VSWR Buffers Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B14, "Memory Buffer Management Service Error: Number of LUT Buffers", "Invalid Number of LUT Buffers Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B15, "Memory Buffer Management Service Error: Number of DPD Processing Buffers", "Invalid Number of DPD Processing Buffers Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0B16, "Memory Buffer Management Service Error: Number of CTC FLUT Buffers", "Invalid Number of CTC FLUT Buffers Parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0x0C01, "Configuration Adjustment Service Error: Configuration Key MisMatch", "Invalid Configuration Key Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x0C02, "Configuration Adjustment Service Error: Configuration Service is Locked", "Configuration Service has not been Unlocked", Act::CheckFeature),
    ErrorCodeInfo::new(0x0C03, "Configuration Adjustment Service Error: Get Configuration Command", "Get Configuration Command is not Supported for the Provided Object ID", Act::CheckParam),
    ErrorCodeInfo::new(0x0C04, "Configuration Adjustment Service Error: Set Configuration Command", "Set Configuration Command is not Supported for the Provided ObjID", Act::CheckParam),
    ErrorCodeInfo::new(0x0C05, "Configuration Adjustment Service Error: Configuration Object ID", "Invalid Configuration Object ID was received with the last Configuration Command", Act::CheckParam),
    ErrorCodeInfo::new(0x0C06, "Configuration Adjustment Service Error: Configuration Limit", "Configuration Buffer Limit Reached", Act::CheckFeature),
    ErrorCodeInfo::new(0x0C07, "Configuration Adjustment Service Error: Configuration Data Size", "Invalid Configuration Data Size Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x0C08, "Configuration Adjustment Service Error: Configuration Offset", "Invalid Configuration Offset Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x0F01, "ECC-Parity Error: Unrecoverable ECC Error", "Memory Hardware Fault", Act::ResetDevice),
    ErrorCodeInfo::new(0x0F02, "ECC-Parity Error: ECC configuration", "Incorrect Parameter Provided for ECC configuration", Act::CheckParam),
    ErrorCodeInfo::new(0x1001, "Watchdog Error: Watchdog configuration", "Incorrect Parameter Provided for Watchdog configuration", Act::CheckParam),
    ErrorCodeInfo::new(0x1002, "Watchdog Error: Watchdog timer 0 expired", "Possible system lockup detected", Act::ResetDevice),
    ErrorCodeInfo::new(0x1003, "Watchdog Error: Watchdog timer 1 expired", "Possible system lockup detected", Act::ResetDevice),
    ErrorCodeInfo::new(0x1004, "Watchdog Error: Watchdog timer 2 expired", "Possible system lockup detected", Act::ResetDevice),
    ErrorCodeInfo::new(0x1005, "Watchdog Error: Watchdog timer 3 expired", "Possible system lockup detected", Act::ResetDevice),
    ErrorCodeInfo::new(0x1101, "Radio Command Error: Transaction ID", "Invalid Transaction ID Received", Act::CheckParam),
    ErrorCodeInfo::new(0x1102, "Radio Command Error: Link Busy", "Link is Currently Processing a Command", Act::CheckInterface),
    ErrorCodeInfo::new(0x1103, "Radio Command Error: Link Number", "Invalid Link Number Provided in Command", Act::CheckParam),
    ErrorCodeInfo::new(0x1104, "Radio Command Error: Mailbox Number", "Invalid Mailbox Number Received", Act::CheckParam),
    ErrorCodeInfo::new(0x1105, "Radio Command Error: Message size", "Invalid Command or Response Size Received", Act::CheckParam),
    ErrorCodeInfo::new(0x1106, "Radio Command Error: Message response content is bad", "Response message contains unexpected data", Act::CheckParam),
    ErrorCodeInfo::new(0x1107, "Radio Command Error: Message parameter is invalid", "Message contains an invalid parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x2001, "Debug Service Error: Debug Key MisMatch", "Invalid Debug Key Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x2002, "Debug Service Error: Command Length", "Invalid Command Length Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x2003, "Debug Service Error: Debug Command", "Invalid Debug Command Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3001, "GPIO Driver Error: Signal ID", "Invalid Signal ID Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3002, "GPIO Driver Error: Pin ID", "Invalid GPIO Pin ID Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3003, "GPIO Driver Error: Alarm Assignment", "Requested Alarm has no GPIO Input Assigned", Act::CheckParam),
    ErrorCodeInfo::new(0x3101, "GPT Driver Error: GPT Instance Allocated", "Attempt to Allocate previously Allocated GPT instance", Act::CheckParam),
    ErrorCodeInfo::new(0x3102, "GPT Driver Error: GPT Instance Not Allocated", "Invalid GPT Instance Allocation State", Act::CheckFeature),
    ErrorCodeInfo::new(0x3103, "GPT Driver Error: Processor Core", "Invalid Processor Core Parameter", Act::CheckParam),
    ErrorCodeInfo::new(0x3104, "GPT Driver Error: Interrupt Configuration", "Invalid processor core / failed to register IRQ", Act::CheckParam),
    ErrorCodeInfo::new(0x3105, "GPT Driver Error: Timeout Limit", "Invalid Timeout Limit Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3106, "GPT Driver Error: System Clock Get", "Invalid System Clock Get", Act::CheckFeature),
    ErrorCodeInfo::new(0x3107, "GPT Driver Error: Mutex", "OSAL Mutex Error", Act::CheckFeature),
    ErrorCodeInfo::new(0x3201, "Interrupt Driver Error: Interrupt ID", "Invalid Interrupt ID Parameter Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3202, "Interrupt Driver Error: CPU Core ID", "Invalid CPU Core ID Parameter Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3203, "Interrupt Driver Error: Interrupt Priority", "Invalid Interrupt Priority Parameter Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x3204, "Interrupt Driver Error: Invalid Interrupt Service Pointer", "Invalid Interrupt Service Pointer Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x3205, "Interrupt Driver Error: Unexpected Interrupt", "No handler installed for Interrupt", Act::ResetDevice),
    ErrorCodeInfo::new(0x3206, "Interrupt Driver Error: Unexpected Fast Interrupt", "No handler installed for Fast Interrupt", Act::ResetDevice),
    ErrorCodeInfo::new(0x3207, "Interrupt Driver Error: Unconfigured Interrupt", "No handler installed for Interrupt", Act::CheckFeature),
    ErrorCodeInfo::new(0x3208, "Interrupt Driver Error: Active Interrupt", "Interrupt not Disabled before subsequent Calibrationibrationl to Configure", Act::ResetDevice),
    ErrorCodeInfo::new(0x32F0, "Interrupt Driver Error: Platform Interrupt Start", "Platform Interrupt Start", Act::CheckFeature),
    ErrorCodeInfo::new(0x32FF, "Interrupt Driver Error: Platform Interrupt End", "Platform Interrupt End", Act::CheckFeature),
    ErrorCodeInfo::new(0x3301, "UART Driver Error: UART Driver ID", "Invalid UART Driver ID Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3302, "UART Driver Error: System Clock Get", "System Clock Data not Available for Calibrationculation", Act::CheckFeature),
    ErrorCodeInfo::new(0x3303, "UART Driver Error: Semaphore Create", "OSAL unable to create Semaphore", Act::CheckFeature),
    ErrorCodeInfo::new(0x3304, "UART Driver Error: Mutex", "OSAL unable to Process Mutex", Act::CheckFeature),
    ErrorCodeInfo::new(0x3305, "UART Driver Error: Interrupt Initialization", "Interrupt Driver did not Register Interrupt Handler", Act::CheckFeature),
    ErrorCodeInfo::new(0x3306, "UART Driver Error: Uninitialized", "UART Driver Requested is not Initialized", Act::CheckFeature),
    ErrorCodeInfo::new(0x3307, "UART Driver Error: Tx FIFO Full", "Request made to Transmit with Tx FIFO Full", Act::CheckFeature),
    ErrorCodeInfo::new(0x3308, "UART Driver Error: Semaphore Wait", "Unexpected Semaphore Error during UART Transmit", Act::CheckFeature),
    ErrorCodeInfo::new(0x3401, "Mailbox Driver Error: Busy", "Mailbox is not Available to process new commands", Act::CheckFeature),
    ErrorCodeInfo::new(0x3402, "Mailbox Driver Error: Initialization", "Unable to create OSAL Mutex", Act::CheckFeature),
    ErrorCodeInfo::new(0x3403, "Mailbox Driver Error: Clear/Pending Update", "OSAL Mutex Failed during Status Update", Act::CheckFeature),
    ErrorCodeInfo::new(0x3404, "Mailbox Driver Error: Configuration Update", "OSAL Mutex Failed during Configuration Update", Act::CheckFeature),
    ErrorCodeInfo::new(0x3405, "Mailbox Driver Error: Send Command", "OSAL Mutex Failed during Send Command", Act::CheckFeature),
    ErrorCodeInfo::new(0x3406, "Mailbox Driver Error: Forced Exception", "Forced Exception Command Received", Act::ResetDevice),
    ErrorCodeInfo::new(0x3601, "SYSCLK Driver Error: Initialization", "Driver not Initialized", Act::CheckFeature),
    ErrorCodeInfo::new(0x3602, "SYSCLK Driver Error: Invalid Frequency", "System HS Digital Clock and/or Clock Dividers NOK", Act::CheckFeature),
    ErrorCodeInfo::new(0x3701, "STREAM Driver Error: Generic Parameter", "One or more Input parameters are not Valid", Act::ResetDevice),
    ErrorCodeInfo::new(0x3702, "STREAM Driver Error: Timeout", "Timeout can occur due to stream processor waiting for other streams to Complete", Act::ResetDevice),
    ErrorCodeInfo::new(0x3703, "STREAM Driver Error: Incomplete Task", "Previous stream started did not finish", Act::ResetDevice),
    ErrorCodeInfo::new(0x3704, "STREAM Driver Error: Stream Error", "Stream resulted in an error", Act::ResetDevice),
    ErrorCodeInfo::new(0x3705, "STREAM Driver Error: Previous Stream Error", "Previous stream resulted in an error", Act::ResetDevice),
    ErrorCodeInfo::new(0x3801, "Power Meter Driver Error: Parameter", "Invalid Channel or Carrier Mask", Act::ResetDevice),
    ErrorCodeInfo::new(0x3802, "Power Meter Driver Error: Not Disabled", "Power Meter is not Disabled", Act::ResetDevice),
    ErrorCodeInfo::new(0x3803, "Channel number inValid", "Channel number is inValid for the meter type", Act::ResetDevice),
    ErrorCodeInfo::new(0x3804, "Sample rate invalid", "Selected carrier for TSSI or RSSI may not be initialized", Act::ResetDevice),
    ErrorCodeInfo::new(0x3901, "DMA Driver Error: DMA Channel Data", "Invalid DMA Channel Data Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x3902, "DMA Driver Error: DMA Stream Busy", "Supplied DMA Channel/stream ID is already open and in use", Act::ResetDevice),
    ErrorCodeInfo::new(0x3903, "DMA Driver Error: Closed Stream", "DMA Stream must be opened before it is used", Act::ResetDevice),
    ErrorCodeInfo::new(0x3904, "DMA Driver Error: DMA Busy", "Function not permitted since DMA transfer is in progress", Act::ResetDevice),
    ErrorCodeInfo::new(0x3905, "DMA Driver Error: Stream ID", "Invalid Stream ID Parameter Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3906, "DMA Driver Error: Transfer Size", "Invalid Transfer Size Parameter Provided (i.e. only 4 or 8 bytes allowed)", Act::ResetDevice),
    ErrorCodeInfo::new(0x3907, "DMA Driver Error: xCount", "Invalid xCount Parameter Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x3908, "DMA Driver Error: yCount", "Invalid yCount Parameter Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x3909, "DMA Driver Error: Start Address", "Invalid Start Address Parameter Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x390A, "DMA Driver Error: Address Alignment", "MSize Calibrationculation doesnt work with Start Address", Act::ResetDevice),
    ErrorCodeInfo::new(0x390B, "DMA Driver Error: Handle Validation", "DMA Stream Handle was outside Valid Range", Act::CheckParam),
    ErrorCodeInfo::new(0x390C, "DMA Driver Error: NULL Pointer", "Invalid Pointer Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0x390D, "DMA Driver Error: Buffer(s)", "Invalid Data buffer(s) Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3A01, "Capture Driver Error: VSWR Playback Generator Enabled", "VSWR Playback Generator is running when trying to access RAM", Act::CheckFeature),
    ErrorCodeInfo::new(0x3A02, "Capture Driver Error: VSWR Playback RAM Sample Count", "Invalid Sample Count Parameter Provided", Act::CheckParam),
    ErrorCodeInfo::new(0x3A03, "Capture Driver Error: Fractional delay needed to align capture sets", "Check CFR delay and CT DPD input selection. Fractional delay isn't allowed for capture buffer.", Act::CheckParam),
    ErrorCodeInfo::new(0x3BF0, "Hw If Driver Error: Hw If Platform Start", "Hw If Platform Start", Act::CheckParam),
    ErrorCodeInfo::new(0x3BFF, "Hw If Driver Error: Hw If Platform End", "Hw If Platform End", Act::CheckParam),
    ErrorCodeInfo::new(0x3C01, "DFE Driver Error: Invalid decimation ratio for selected decimator", "Check if CTC model is configured and decimators in use has non-zero decimation ratios", Act::CheckParam),
    ErrorCodeInfo::new(0x3C02, "DFE Driver Error: Invalid first stage interpolation ratio", "Check if CTC model is configured and decimators in use has non-zero first stage interpolator", Act::CheckParam),
    ErrorCodeInfo::new(0x3C03, "DFE Driver Error: Invalid second stage interpolation ratio", "Check if second stage interpolation ratio is non-zero", Act::CheckParam),
    ErrorCodeInfo::new(0xE001, "APP Error: DPD Decomposition Calculation", "Invalid Parameters Provided from XCORR", Act::CheckParam),
    ErrorCodeInfo::new(0xE002, "APP Error: DPD Model Descriptor", "Invalid Parameters Provided in Model Descriptor (i.e. cannot find LUT ID's or Number of LUT's)", Act::CheckFeature),
    ErrorCodeInfo::new(0xE003, "APP Error: DPD DDR I and/or J", "Invalid DDR I and/or J Parameter Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE004, "APP Error: DPD DDR Mode Polynomial", "Invalid Polynomial Parameter Provided for DDR Mode", Act::CheckParam),
    ErrorCodeInfo::new(0xE005, "APP Error: Duplicate DPD LUT", "Same LUT is assigned multiple times", Act::CheckParam),
    ErrorCodeInfo::new(0xE006, "APP Error: DPD Queue Limit", "Number of Compute Requests are exceeding the queue of pending request", Act::CheckFeature),
    ErrorCodeInfo::new(0xE007, "APP Error: DPD Fractional Delay Estimation Count", "Fractional Delay can't be Estimated with Bad Captures", Act::CheckFeature),
    ErrorCodeInfo::new(0xE008, "APP Error: DPD LUT Saturation", "Underlying Datatype of LUT parameter is int16", Act::CheckParam),
    ErrorCodeInfo::new(0xE009, "APP Error: DPD Channel Mask", "Invalid Channel Mask Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0xE00A, "APP Error: Unsupported DPD Status Get", "Status Get function not Supported for Provided Tracking Calibration Status Type", Act::CheckParam),
    ErrorCodeInfo::new(0xE00B, "APP Error: DPD Status Buffer Size", "Invalid Status Buffer Size for the Calibration Status Type Requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE00C, "APP Error: Configuration Structure Size", "Invalid Configuration Size Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE00D, "APP Error: Configuration Structure Offset", "Invalid Configuration Offset Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE00E, "APP Error: DPD Control Command Buffer Size", "Invalid Control Data Size Provided for Control Command Requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE00F, "APP Error: DPD Control Command", "Invalid Control Command Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE010, "APP Error: DPD Control Command Parameter", "Invalid Parameter Provided in Model Descriptor", Act::ResetDevice),
    ErrorCodeInfo::new(0xE011, "APP Error: Calibration Framework Command Not Executed", "Command sent to a Channel that is not Enabled", Act::CheckParam),
    ErrorCodeInfo::new(0xE012, "APP Error: Calibration Framework Status Get", "Status Get Command sent to Calibration which does not support it", Act::CheckParam),
    ErrorCodeInfo::new(0xE013, "APP Error: Calibration Type", "Invalid Calibration Type Provided", Act::ResetDevice),
    ErrorCodeInfo::new(0xE014, "APP Error: Calibration Framework Configuration Set", "Configuration Set Command is sent to Calibration which does not support it", Act::CheckParam),
    ErrorCodeInfo::new(0xE015, "APP Error: Calibration Framework Configuration Get", "Configuration Get Command is sent to Calibration which does not support it", Act::CheckParam),
    ErrorCodeInfo::new(0xE016, "APP Error: Calibration Framework HAL Channel", "Invalid HAL Channel Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE017, "APP Error: Calibration Framework Configuration Offset", "Invalid Calibration Framework Configuration Offset", Act::CheckParam),
    ErrorCodeInfo::new(0xE018, "APP Error: Calibration Framework Task Thread Pointer", "Invalid Thread Pointer Provided for Task by OSAL", Act::ResetFeature),
    ErrorCodeInfo::new(0xE019, "APP Error: Calibration Framework Task Event Pointer", "Invalid Event Pointer Provided for Task by OSAL", Act::ResetFeature),
    ErrorCodeInfo::new(0xE01A, "APP Error: Calibration Framework Task Timer Pointer", "Invalid Timer Pointer Provided for Task by OSAL", Act::ResetFeature),
    ErrorCodeInfo::new(0xE01B, "APP Error: Calibration Framework Suspend Timeout", "Tracking Calibration failed to Suspend within the expected time", Act::ResetFeature),
    ErrorCodeInfo::new(0xE01C, "APP Error: Calibration Framework Event Timeout", "Tracking Calibration failed to Suspend", Act::CheckParam),
    ErrorCodeInfo::new(0xE01D, "APP Error: DPD Power Meter Rate Overflow", "Invalid DPD Power Meter Rate", Act::CheckParam),
    ErrorCodeInfo::new(0xE01E, "APP Error: DPD Power Meter Configuration", "Invalid DPD Power Meter Configuration Parameter(s)", Act::CheckParam),
    ErrorCodeInfo::new(0xE01F, "APP Error: LUT Copy", "Invalid LUT Update Parameter(s)", Act::CheckParam),
    ErrorCodeInfo::new(0xE020, "APP Error: Capture Sequencer Mutex", "Mutex Acquire/Release Failed for Capture Sequencer", Act::ResetDevice),
    ErrorCodeInfo::new(0xE021, "APP Error: Capture Sequencer Period", "Invalid Channel or Capture Period Type Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE022, "APP Error: Capture Sequence Done Event", "Invalid Manual Capture Done Event", Act::ResetDevice),
    ErrorCodeInfo::new(0xE023, "APP Error: Capture Sequence Incomplete", "Incomplete Capture Detected", Act::CheckParam),
    ErrorCodeInfo::new(0xE024, "APP Error: DPD Model Configuration", "Invalid Model Configuration Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE025, "APP Error: Event Receive Handle Initialization", "OSAL Failed to Initialize Event Receive Handle", Act::ResetFeature),
    ErrorCodeInfo::new(0xE026, "APP Error: Event Thread Create", "OSAL Failed to Create Event Thread", Act::ResetDevice),
    ErrorCodeInfo::new(0xE027, "APP Error: DPD Capture Request", "Invalid DPD Capture Request", Act::CheckParam),
    ErrorCodeInfo::new(0xE028, "APP Error: Event Handle Get", "OSAL failed to Get Event Handle", Act::ResetFeature),
    ErrorCodeInfo::new(0xE029, "APP Error: Unity Model", "Small Tx Signal Detected", Act::CheckParam),
    ErrorCodeInfo::new(0xE02A, "APP Error: DPD Adaptation Configuration", "Invalid DPD Adaptation Configuration Parameters", Act::ResetDevice),
    ErrorCodeInfo::new(0xE02B, "APP Error: DPD Actuator Passthrough Mode", "Enabling/Disabling DPD actuator Passthrough mode Failed", Act::ResetDevice),
    ErrorCodeInfo::new(0xE02C, "APP Error: Linear Term Configuration", "Linear Term Setting plus DDR j Delay exceeds J Delay Buffer Size", Act::CheckParam),
    ErrorCodeInfo::new(0xE02D, "APP Error: Aborted Capture", "Capture was Aborted", Act::CheckParam),
    ErrorCodeInfo::new(0xE02E, "APP Error: DPD pathdelay lag range", "Integer delay was drifted by more than 1 sample", Act::CheckParam),
    ErrorCodeInfo::new(0xE02F, "APP Error: DPD Actuator Enable Mode", "Enabling/Disabling DPD Actuator Failed", Act::ResetDevice),
    ErrorCodeInfo::new(0xE030, "APP Error: Power meter Sequencer Mutex req failed", "Mutex Acquire/Release Failed for DPD power meter", Act::ResetFeature),
    ErrorCodeInfo::new(0xE031, "APP Error: Power meter function is called with invalid parameter", "Power meter function is called with invalid parameter", Act::ResetFeature),
    ErrorCodeInfo::new(0xE032, "APP Error: DPD Model Vbank not populated", "Selected Vbank to write LUTs isn't populated yet", Act::ResetDevice),
    ErrorCodeInfo::new(0xE033, "APP Error: DPD stability check error", "Selected performance metric(s) exceed the programmed threshold(s)", Act::ResetDevice),
    ErrorCodeInfo::new(0xE034, "APP Error: DPD supported model error", "Configured model can not be supported with selected actuator depth", Act::CheckParam),
    ErrorCodeInfo::new(0xE035, "APP Error: Capture abort failure", "Capture abort failure", Act::ResetFeature),
    ErrorCodeInfo::new(0xE036, "APP Error: ORx power is below the low power threshold", "ORx signal power is too low and below the threshold", Act::CheckParam),
    ErrorCodeInfo::new(0xE037, "APP Error: Tx power is below the low power threshold", "Tx signal power is too low and below the threshold", Act::CheckParam),
    ErrorCodeInfo::new(0xE038, "APP Error: Post-DPD Tx power is below the low power threshold", "Post-DPD Tx signal power is too low and below the threshold", Act::CheckParam),
    ErrorCodeInfo::new(0xE039, "APP Error: ORx power is above the high power threshold", "ORx signal power is too high", Act::CheckParam),
    ErrorCodeInfo::new(0xE03A, "APP Error: Tx power is above the high power threshold", "Tx signal power is too high", Act::CheckParam),
    ErrorCodeInfo::new(0xE03B, "APP Error: Post-DPD Tx power is above the high power threshold", "Post-DPD Tx signal power is too high", Act::CheckParam),
    ErrorCodeInfo::new(0xE03C, "APP Error: ORx peak power is below the peak power threshold", "ORx signal peak power is too low", Act::CheckParam),
    ErrorCodeInfo::new(0xE03D, "APP Error: Tx peak power is below the peak power threshold", "Tx signal peak power is too low", Act::CheckParam),
    ErrorCodeInfo::new(0xE03E, "APP Error: Post-DPD Tx peak power is below the peak power threshold", "Post-DPD Tx signal peak power is too low", Act::CheckParam),
    ErrorCodeInfo::new(0xE03F, "APP Error: ORx peak power is above the peak power threshold", "ORx signal peak power is too high", Act::CheckParam),
    ErrorCodeInfo::new(0xE040, "APP Error: Tx peak power is above the peak power threshold", "Tx signal peak power is too high", Act::CheckParam),
    ErrorCodeInfo::new(0xE041, "APP Error: Post-DPD Tx peak power is above the peak power threshold", "Post-DPD Tx signal peak power is too high", Act::CheckParam),
    ErrorCodeInfo::new(0xE042, "APP Error: Exceed maximum number of feature indexes per feature segment", "DPD model might not be right", Act::CheckParam),
    ErrorCodeInfo::new(0xE043, "APP Error: Exceed maximum number of feature segments", "DPD model might not be right", Act::CheckParam),
    ErrorCodeInfo::new(0xE044, "APP Error: Difference between estiamted and seeded pathdelays exceeded the programmed range", "This is for informational purposes only. There is insufficient information in the signal to estimate path delay", Act::CheckParam),
    ErrorCodeInfo::new(0xE045, "APP Error: SW_TO_R_TABLE recovery action used when no R table coefficients are configured", "Model 2 (R table) coefficients not configured", Act::ResetFeature),
    ErrorCodeInfo::new(0xE046, "APP Error: VSWR Capture Retry after abort", "Only happens in RCI mode. Mapping has changed when capture is in progress", Act::None),
    ErrorCodeInfo::new(0xE047, "APP Error: VSWR unable to read back current Tx attenuation", "Unexpected error returned when reading Tx attenuation from HW", Act::ResetFeature),
    ErrorCodeInfo::new(0xE048, "APP Error: Tx attenuation is changed while VSWR is capturing", "User initiated change", Act::CheckFeature),
    ErrorCodeInfo::new(0xE049, "APP Error: Failure to find forward gain or reflection using cross-correlation", "Invalid playback signal that doesn't correlate with accumulated capture", Act::CheckFeature),
    ErrorCodeInfo::new(0xE04A, "APP Error: Forward path delay found by VSWR has changed by unexpected amount", "Forward path delay determined by cross correlation of accumulated capture has changed too much", Act::CheckFeature),
    ErrorCodeInfo::new(0xE04B, "APP Error: VSWR return loss values triggered minor alarm", "Return loss values have passed thresholds configured for VSWR minor alarm", Act::CheckFeature),
    ErrorCodeInfo::new(0xE04C, "APP Error: VSWR return loss values triggered major alarm", "Return loss values have passed thresholds configured for VSWR major alarm", Act::CheckFeature),
    ErrorCodeInfo::new(0xE100, "APP Error: Command Opcode", "Invalid Application Command Opcode Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE101, "APP Error: Application Command", "Invalid Application Command Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE102, "APP Error: Capture Buffer Storage", "Capture Buffer Count Limit Reached", Act::ResetDevice),
    ErrorCodeInfo::new(0xE103, "APP Error: FDD LUT Copy", "Invalid LUT Copy Parameters", Act::CheckParam),
    ErrorCodeInfo::new(0xE104, "APP Error: TDD LUT Copy", "Invalid LUT Copy Parameters", Act::CheckParam),
    ErrorCodeInfo::new(0xE105, "APP Error: vBank Buffers", "Invalid vBank Buffers Pointer(s)", Act::CheckParam),
    ErrorCodeInfo::new(0xE106, "APP Error: DPD Power Meter Read", "Invalid Tx Channel Parameter Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE107, "APP Error: Capture Buffer Pointer", "Invalid Capture Buffer Pointer", Act::CheckParam),
    ErrorCodeInfo::new(0xE108, "APP Error: DPD Adaptation Buffer", "Failed to Acquire Adaptation Buffer", Act::CheckFeature),
    ErrorCodeInfo::new(0xE109, "APP Error: VSWR command not supported", "VSWR received unsupported command", Act::CheckParam),
    ErrorCodeInfo::new(0xE10A, "APP Error: VSWR Capture Incomplete", "VSWR Capture Reporting Incomplete", Act::CheckFeature),
    ErrorCodeInfo::new(0xE10B, "APP Error: VSWR Capture Request", "Invalid VSWR Capture Request Parameters", Act::CheckParam),
    ErrorCodeInfo::new(0xE10C, "APP Error: Capture Buffer Busy", "Capture Buffer is in use and cannot Respond to new Data Capture Request", Act::CheckFeature),
    ErrorCodeInfo::new(0xE10D, "APP Error: VSWR Capture Abort", "VSWR Capture Aborted", Act::ResetFeature),
    ErrorCodeInfo::new(0xE10E, "APP Error: vBank Buffer(s) Acquire", "VBank Buffer(s) not Available", Act::CheckFeature),
    ErrorCodeInfo::new(0xE10F, "FDD Lut Copy Start Failed", "Unexpected LUT copy start failure", Act::ResetFeature),
    ErrorCodeInfo::new(0xE110, "FDD Lut Copy Timed Out", "Timed out waiting for LUT copy to complete", Act::ResetFeature),
    ErrorCodeInfo::new(0xE111, "FDD LUT Copy error while waiting for completion. Not timeout related.", "Unknown error encountered while waiting for any LUT done or error event", Act::ResetDevice),
    ErrorCodeInfo::new(0xE112, "FDD LUT Copy error encountered during DMA transfer.", "Unknown error encountered in DMA transfer.", Act::ResetFeature),
    ErrorCodeInfo::new(0xE113, "TDD Lut Copy Start Failed", "Unexpected LUT copy start failure", Act::ResetFeature),
    ErrorCodeInfo::new(0xE114, "TDD Lut Copy Timed Out", "Timed out waiting for LUT copy to complete", Act::ResetFeature),
    ErrorCodeInfo::new(0xE115, "TDD LUT Copy error while waiting for completion. Not timeout related.", "Unknown error encountered while waiting for any LUT done or error event", Act::ResetFeature),
    ErrorCodeInfo::new(0xE116, "TDD LUT Copy error encountered during DMA transfer.", "Unknown error encountered in DMA transfer.", Act::ResetFeature),
    ErrorCodeInfo::new(0xE117, "TDD LUT Copy was In Progress for a Tx channel during TX_ON.", "TDD LUT Copy started too late after TX_OFF falling edge to be finished before TX_ON rising edge.", Act::ResetFeature),
    ErrorCodeInfo::new(0xE118, "APP Error: Tx Power measurement Request", "Invalid Tx Power measurement Request Parameters", Act::CheckParam),
    ErrorCodeInfo::new(0xE119, "APP Error: Unexpected capture type received in capture done event", "Unexpected capture type received in capture done event", Act::ResetFeature),
    ErrorCodeInfo::new(0xE11A, "APP Error: Tx power measurement is aborted", "Power measurement didn't complete within RS pattern", Act::CheckParam),
    ErrorCodeInfo::new(0xE11B, "APP Error: Application consumed Capture Done Event Payload too late", "SDK Cap Service overwrote Capture Done Event Payload before it was received and consumed by App", Act::ResetDevice),
    ErrorCodeInfo::new(0xE11C, "APP Error: LUT linear term of all tables must equal LUT linear term of Table 0", "LUT linear term of table not equal to  LUT linear term of Table 0", Act::CheckParam),
    ErrorCodeInfo::new(0xE11D, "APP Error: Sempahore wait request failed", "The call to sempahore wait API failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE11E, "APP Error: Sempahore post request failed", "The call to sempahore post API failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE11F, "APP Error: The post calibration cleanup failed", "The call to perform post calibration cleanup failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE122, "APP Error: CLGC Capture Request", "Invalid CLGC Capture Request", Act::CheckParam),
    ErrorCodeInfo::new(0xE123, "APP Error: CLGC Capture Result Get", "Service error when reading back power meter result", Act::ResetFeature),
    ErrorCodeInfo::new(0xE124, "APP Error: Tx or ORx power is below threshold set", "Power measurement cannot find healthy signal after max retries", Act::CheckParam),
    ErrorCodeInfo::new(0xE125, "APP Error: Unsupported CLGC Status Get", "Status Get function not Supported for Provided Tracking Calibration Status Type", Act::CheckParam),
    ErrorCodeInfo::new(0xE126, "APP Error: CLGC Status Buffer Size", "Invalid Status Buffer Size for the Calibration Status Type Requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE127, "APP Error: CLGC Control Command", "Invalid Control Command Provided", Act::CheckParam),
    ErrorCodeInfo::new(0xE128, "APP Error: CLGC CTRL command Buffer Size", "Invalid CTRL command Buffer Size for the Calibration CTRL Type Requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE129, "APP Error: CLGC detects PA protection assertion", "PA protection error asserted or Tx attenuation ramp-up/down in progress", Act::CheckFeature),
    ErrorCodeInfo::new(0xE12A, "APP Error: CLGC Tx Attenuation Above Maximum Limit", "CLGC failed to ajust Tx attenuation because it is above maximum limit", Act::CheckParam),
    ErrorCodeInfo::new(0xE12B, "APP Error: CLGC Tx Attenuation Below Minimum Limit", "CLGC failed to ajust Tx attenuation because it is below minimum limit", Act::CheckParam),
    ErrorCodeInfo::new(0xE12C, "APP Error: Unexpected capture event received in capture state machine", "Unexpected capture type received in capture state machine", Act::ResetFeature),
    ErrorCodeInfo::new(0xE12D, "APP Error: CLGC unable to set Tx attenuation", "Unexpected error returned when writing Tx attenuation to HW", Act::ResetFeature),
    ErrorCodeInfo::new(0xE12E, "APP Error: CLGC unable to read back current Tx attenuation", "Unexpected error returned when reading Tx attenuation from HW", Act::ResetFeature),
    ErrorCodeInfo::new(0xE12F, "APP Error: CLGC unable to read back current ORx attenuation", "Unexpected error returned when reading ORx attenuation from HW", Act::ResetFeature),
    ErrorCodeInfo::new(0xE130, "APP Error: CLGC Capture Abort", "Service error when aborting a CLGC capture", Act::ResetFeature),
    ErrorCodeInfo::new(0xE131, "APP Error: CLGC Capture Discard", "Service error when discarding a CLGC capture", Act::ResetDevice),
    ErrorCodeInfo::new(0xE132, "APP Error: Capture Event Registration", "OSAL failed to Register a Capture Event", Act::ResetFeature),
    ErrorCodeInfo::new(0xE133, "APP Error: Capture Start Event", "Capture start error occured", Act::ResetFeature),
    ErrorCodeInfo::new(0xE134, "APP Error: Capture Aborted", "capture aborted due to EXIT request", Act::ResetFeature),
    ErrorCodeInfo::new(0xE135, "APP Error: Incomplete Capture", "DPD capture incomplete in CLGC peak detection mode", Act::ResetFeature),
    ErrorCodeInfo::new(0xE136, "APP Error: A Tx Channel Not Mapped to an ORx Channel", "Tx-ORx map not set", Act::CheckParam),
    ErrorCodeInfo::new(0xE137, "APP Error: Unexpected capture period end signal", "Unexpected capture period end signal", Act::ResetDevice),
    ErrorCodeInfo::new(0xE138, "APP Error: Rx Capture Request failed", "Invalid Rx Capture Request Parameters", Act::CheckParam),
    ErrorCodeInfo::new(0xE139, "APP Error: bad data captured", "Bad waveform or incompleted capture", Act::CheckParam),
    ErrorCodeInfo::new(0xE13A, "APP Error: Tx attenuation is changed while CLGC is tracking", "User initiated change", Act::CheckFeature),
    ErrorCodeInfo::new(0xE13B, "APP Error: VSWR Accumulating capture overflow", "I or Q values in accumulated capture overflowed", Act::CheckFeature),
    ErrorCodeInfo::new(0xE13C, "APP Error: DPD Capture Discard", "Service error when discarding a DPD capture", Act::ResetFeature),
    ErrorCodeInfo::new(0xE13D, "APP Error: DPD Capture Retry after abort", "Only happens in RCI mode. Mapping has changed when capture is in progress", Act::None),
    ErrorCodeInfo::new(0xE13E, "APP Error: CLGC Capture Retry after abort", "Only happens in RCI mode. Mapping has changed when capture is in progress", Act::None),
    ErrorCodeInfo::new(0xE13F, "APP Error: fail to disable actuator passthru", "invalid param or fail to get dpd act driver mutex", Act::CheckParam),
    ErrorCodeInfo::new(0xE140, "APP Error: App Configuration is Locked", "Configuration has not been Unlocked", Act::CheckFeature),
    ErrorCodeInfo::new(0xE141, "APP Error: Model switch mutex req failed", "Mutex Acquire/Release Failed for DPD model switching", Act::ResetFeature),
    ErrorCodeInfo::new(0xE142, "APP Error: DPD model switch function is called with invalid parameter", "DPD model switch function is called with invalid parameter", Act::ResetDevice),
    ErrorCodeInfo::new(0xE143, "APP Error: DPD model switch failed to switch model", "DPD model has not been switching as requested", Act::ResetFeature),
    ErrorCodeInfo::new(0xE144, "APP Error: DPD model switch power meter thread has failed", "DPD models are not switching based on power meter measurements", Act::ResetDevice),
    ErrorCodeInfo::new(0xE145, "APP Error: CLGC update is skipped because DPD actuator gain monitor has asserted", "DPD actuator gain outside set limits", Act::CheckFeature),
    ErrorCodeInfo::new(0xE146, "APP Error: CLGC update is skipped because DPD actuator gain monitor status could not be determined", "DPD gain monitor status check has failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE147, "APP Error: There is already a pending capture period request", "Cal thread is making a new capture period request before previous one has been processed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE148, "APP Error: DPD integer Path Delay estimation is out of lag range (-255, 0)", "DPD Path Delay Estimation Failure", Act::ResetFeature),
    ErrorCodeInfo::new(0xE149, "APP Error: DPD update aborted because DPD actuator gain monitor has asserted", "DPD actuator gain outside set limits", Act::CheckFeature),
    ErrorCodeInfo::new(0xE14A, "APP Error: CLGC TSSI ORx meter failed to update", "The call to perform TSSI ORx measurements failed", Act::CheckFeature),
    ErrorCodeInfo::new(0xE14B, "APP Error: CLGC TSSI1 meter failed to update", "The call to perform TSSI1 measurements failed", Act::CheckFeature),
    ErrorCodeInfo::new(0xE14C, "APP Error: CLGC TSSI2 meter failed to update", "The call to perform TSSI2 measurements failed", Act::CheckFeature),
    ErrorCodeInfo::new(0xE14D, "APP Error: Unexpected event when performing captures", "Unexpected event when performing captures", Act::CheckFeature),
    ErrorCodeInfo::new(0xE14E, "APP Error: Unexpected capture id when performing captures", "Unexpected capture id when performing captures", Act::CheckFeature),
    ErrorCodeInfo::new(0xE14F, "APP Error: Cal thread couldn't acquire capture buffer for multiple times", "Capture buffers are in use by some other calibration threads", Act::ResetFeature),
    ErrorCodeInfo::new(0xE150, "APP Error: Capture was incomplete", "HW couldn't capture all samples or there were 0 samples in dataset", Act::CheckParam),
    ErrorCodeInfo::new(0xE151, "APP Error: Capture was aborted", "Capture is aborted due to mapping change or user abort request", Act::CheckParam),
    ErrorCodeInfo::new(0xE152, "APP Error: Unexpected capture count in capture flow", "Unexpected capture count in capture flow", Act::ResetFeature),
    ErrorCodeInfo::new(0xE153, "APP Error: Unexpected capture period end event in capture flow", "Unexpected capture period end event in capture flow", Act::ResetFeature),
    ErrorCodeInfo::new(0xE154, "APP Error: Capture period ended before all captures complete", "Capture period might be too short or captures taking longer than expected", Act::CheckParam),
    ErrorCodeInfo::new(0xE155, "APP Error: Application layer requested requested more than maximum number of captures", "Application layer requested requested more than maximum number of captures", Act::ResetFeature),
    ErrorCodeInfo::new(0xE156, "APP Error: Capture result reports an unexpected error", "Capture result reports an unexpected error", Act::ResetFeature),
    ErrorCodeInfo::new(0xE157, "APP Error: Invalid capture type selected by application thread", "Invalid capture type is selected by application thread", Act::CheckFeature),
    ErrorCodeInfo::new(0xE158, "APP Error: Capture trigger in SW mode has failed", "Capture trigger in SW mode has failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE159, "APP Error: Null pointer", "Invalid Pointer", Act::ResetFeature),
    ErrorCodeInfo::new(0xE15A, "APP Error: DPD not supported with LUT depth 64 in FDD mode", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE15B, "APP Error: DPD update mode 2 or 3 not supported with LUT depth 64", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE15C, "APP Error: Only unity gain (Model 4) can be used as low-power/gain-mon recovery model with LUT depth 64", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE15D, "APP Error: TDD LUT switching is only supported at LUT depth 16", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE15E, "APP Error: DPD Update mode 2/3 not supported in FDD mode with LUT depth 32", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE15F, "APP Error: Only unity gain (Model 4) can be used as low-power/gain-mon recovery model with LUT depth 32 in FDD mode", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE160, "APP Error: Model 2 cannot be used for low-power/gain-mon recovery with LUT depth 32", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE161, "APP Error: Model 1 cannot be used for low-power/gain-mon recovery with DPD update mode 2", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE162, "APP Error: TDD LUT switching is not supported in FDD mode", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE163, "APP Error: Cap sequencer config out of range", "Invalid configuration", Act::CheckParam),
    ErrorCodeInfo::new(0xE164, "APP Error: Cap sequencer command not supported in this mode", "Invalid configuration", Act::CheckParam),
    ErrorCodeInfo::new(0xE165, "APP Error: Not enough memory to respond to VSWR command", "Invalid buffer size passed to VSWR command handler", Act::CheckParam),
    ErrorCodeInfo::new(0xE166, "APP Error: VSWR Waveform get failed", "Vswr generator might be enabled or waveform length is invalid", Act::CheckParam),
    ErrorCodeInfo::new(0xE167, "APP Error: VSWR Waveform length is 0", "Waveform is not loaded", Act::CheckParam),
    ErrorCodeInfo::new(0xE168, "APP Error: Stop Criteria not met", "Stop Criteria in Pass On Stop not met", Act::CheckParam),
    ErrorCodeInfo::new(0xE169, "APP Error: Signal Stats Generation Error", "Capture Configuration", Act::CheckParam),
    ErrorCodeInfo::new(0xE16A, "APP Error: Target values were not populated", "Capture configuration", Act::CheckParam),
    ErrorCodeInfo::new(0xE16B, "APP Error: Capture weights in ctc1 mode are not valid", "Capture configuration", Act::CheckParam),
    ErrorCodeInfo::new(0xE16C, "APP Error: CT FLUT buffer acquire failed", "CT FLUT Buffer not Available", Act::CheckFeature),
    ErrorCodeInfo::new(0xE16D, "APP Error: CTC FLUT Copy", "LUT copy timedout or DMA error reported", Act::ResetFeature),
    ErrorCodeInfo::new(0xE16E, "APP Error: CTC Model config failed", "Invalid configuration or out of range parameter", Act::CheckParam),
    ErrorCodeInfo::new(0xE16F, "APP Error: CTC Act delay get failed", "CTC driver mutex lock might have failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE170, "APP Error: CTC Act Fbox scaler get failed", "CTC driver mutex lock might have failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE171, "APP Error: CTC Actuator enable failed", "CTC driver mutex lock might have failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE172, "APP Error: CTC Actuator reset failed", "CTC driver mutex lock might have failed", Act::ResetFeature),
    ErrorCodeInfo::new(0xE173, "APP Error: CTC Act Fbox scaler set failed", "Fbox scaler is smaller than model config requires", Act::CheckParam),
    ErrorCodeInfo::new(0xE174, "APP Error: Lut update DMA request cannot be implemented", "Lack of TX falling edge", Act::CheckParam),
    ErrorCodeInfo::new(0xE175, "APP Error: calType to request feature compute", "Invalid Calibration Type Provided to Function", Act::CheckParam),
    ErrorCodeInfo::new(0xE176, "APP Error: Unexpected Feature Compute Event", "Unexpected Error", Act::CheckParam),
    ErrorCodeInfo::new(0xE177, "APP Error: Invalid Feature Compute Entries", "Unexpected Error", Act::CheckParam),
    ErrorCodeInfo::new(0xE178, "APP Error: DPD Update mode 3 only supported with LUT depth 16, when model 2 is not being used for recovery", "Invalid DPD configuration requested", Act::CheckParam),
    ErrorCodeInfo::new(0xE179, "APP Error: DPD partial update failed because the partial times over maximum times", "Too many DPD coefficients to handle", Act::CheckFeature),
    ErrorCodeInfo::new(0xE180, "APP Error: Out of range block id during decomposition", "Unexpected Error", Act::CheckParam),
    ErrorCodeInfo::new(0xE181, "APP Error: DPD couldn't find an available iteration type(GMP or CTC2) to run", "No GMP and/or CTC2 models configured", Act::CheckParam),
    ErrorCodeInfo::new(0xE182, "APP Error: indirect learning is set for partial update", "customer configured indirect learning", Act::CheckParam),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(ERROR_CODES.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn lookup_known_codes() {
        let info = lookup(0x0007).expect("fatal exception code");
        assert_eq!(info.description, "Common Error: Fatal Exception");
        assert_eq!(info.action, RecoveryAction::ResetDevice);

        let info = lookup(0x0001).expect("parameter code");
        assert_eq!(info.action, RecoveryAction::CheckParam);
    }

    #[test]
    fn lookup_unknown_codes() {
        assert_eq!(lookup(0), None);
        assert_eq!(lookup(0xDEAD), None);
    }

    #[test]
    fn object_names() {
        assert_eq!(object_name(0x0007), "Common");
        assert_eq!(object_name(0x3405), "Mailbox Driver");
        assert_eq!(object_name(0xE001), "Application");
        assert_eq!(object_name(0x7F00), "Unknown");
    }
}
