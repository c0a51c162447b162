// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

//! Recording mock of the transceiver, shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use dfe_mailbox::channel::RESP_HEADER_SIZE;
use dfe_mailbox::device::{DfeDevice, DfeLayout};
use dfe_mailbox::hal::{CpuType, Hal, LinkId, MailboxError, ResponseHeader, ResponseStatus};

/// SDK data block address published through the scratch registers
pub const SDK_DATA_ADDR: u32 = 0x2000_1000;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ReadBytes { addr: u32, len: usize },
    ReadU32 { addr: u32 },
    WriteU32s { addr: u32, values: Vec<u32> },
    WriteBytes { addr: u32, data: Vec<u8> },
    ReadScratch { id: u16 },
    Send { cpu: CpuType, link: LinkId, cmd_id: u8, frame: Vec<u8> },
    Receive { cpu: CpuType, link: LinkId, len: usize },
}

#[derive(Debug)]
pub struct MockError;

/// Canned response to a command
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(ResponseStatus, Vec<u8>),
    NoResponse(MailboxError),
}

#[derive(Default)]
pub struct MockHal {
    pub calls: Vec<Call>,
    pub memory: HashMap<u32, u8>,
    pub scratch: HashMap<u16, u8>,
    pub replies: VecDeque<Reply>,
    pub send_error: Option<MailboxError>,
    pub failing_reads: HashSet<u32>,
    pub fail_writes: bool,
    last_cmd_id: u8,
}

impl MockHal {
    pub fn new() -> Self {
        let mut hal = Self::default();
        hal.set_sdk_data_addr(SDK_DATA_ADDR);
        hal
    }

    /// Publish `addr` through the SDK data scratch registers
    pub fn set_sdk_data_addr(&mut self, addr: u32) {
        for (byte, id) in DfeLayout::default().sdk_data_scratch.iter().enumerate() {
            self.scratch.insert(*id, (addr >> (byte * 8)) as u8);
        }
    }

    pub fn reply(&mut self, status: ResponseStatus, payload: &[u8]) {
        self.replies
            .push_back(Reply::Respond(status, payload.to_vec()));
    }

    pub fn no_reply(&mut self, error: MailboxError) {
        self.replies.push_back(Reply::NoResponse(error));
    }

    pub fn put_bytes(&mut self, addr: u32, data: &[u8]) {
        for (i, b) in data.iter().enumerate() {
            self.memory.insert(addr.wrapping_add(i as u32), *b);
        }
    }

    pub fn put_u32(&mut self, addr: u32, value: u32) {
        self.put_bytes(addr, &value.to_le_bytes());
    }

    pub fn put_u64(&mut self, addr: u32, value: u64) {
        self.put_bytes(addr, &value.to_le_bytes());
    }

    pub fn get_bytes(&self, addr: u32, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| *self.memory.get(&addr.wrapping_add(i as u32)).unwrap_or(&0))
            .collect()
    }

    /// Fill the DFE error ring with `(code, level, timestamp)` entries
    pub fn put_error_log(&mut self, entries: &[(u32, u32, u64)]) {
        let base = SDK_DATA_ADDR + DfeLayout::default().error_log_offset;
        for (idx, (code, level, ts)) in entries.iter().enumerate() {
            let addr = base + idx as u32 * 16;
            self.put_u32(addr, *code);
            self.put_u32(addr + 4, *level);
            self.put_u64(addr + 8, *ts);
        }
    }

    pub fn sends(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Send { .. }))
            .collect()
    }

    pub fn transport_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Send { .. } | Call::Receive { .. }))
            .count()
    }

    pub fn register_calls(&self) -> usize {
        self.calls.len() - self.transport_calls()
    }

    pub fn reads_at(&self, addr: u32) -> usize {
        self.calls
            .iter()
            .filter(|c| match c {
                Call::ReadBytes { addr: a, .. } | Call::ReadU32 { addr: a } => *a == addr,
                _ => false,
            })
            .count()
    }

    pub fn writes(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::WriteU32s { .. } | Call::WriteBytes { .. }))
            .collect()
    }

    fn check_read(&self, addr: u32) -> Result<(), MockError> {
        if self.failing_reads.contains(&addr) {
            Err(MockError)
        } else {
            Ok(())
        }
    }
}

impl Hal for MockHal {
    type Error = MockError;

    fn read_bytes(&mut self, addr: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.calls.push(Call::ReadBytes {
            addr,
            len: buf.len(),
        });
        self.check_read(addr)?;
        buf.copy_from_slice(&self.get_bytes(addr, buf.len()));
        Ok(())
    }

    fn read_u32(&mut self, addr: u32, mask: u32) -> Result<u32, Self::Error> {
        self.calls.push(Call::ReadU32 { addr });
        self.check_read(addr)?;
        let bytes = self.get_bytes(addr, 4);
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) & mask)
    }

    fn write_u32s(&mut self, addr: u32, values: &[u32]) -> Result<(), Self::Error> {
        self.calls.push(Call::WriteU32s {
            addr,
            values: values.to_vec(),
        });
        if self.fail_writes {
            return Err(MockError);
        }
        for (i, v) in values.iter().enumerate() {
            self.put_u32(addr.wrapping_add(i as u32 * 4), *v);
        }
        Ok(())
    }

    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Self::Error> {
        self.calls.push(Call::WriteBytes {
            addr,
            data: data.to_vec(),
        });
        if self.fail_writes {
            return Err(MockError);
        }
        self.put_bytes(addr, data);
        Ok(())
    }

    fn read_scratch(&mut self, id: u16) -> Result<u8, Self::Error> {
        self.calls.push(Call::ReadScratch { id });
        Ok(*self.scratch.get(&id).unwrap_or(&0))
    }

    fn send_command(
        &mut self,
        cpu: CpuType,
        link: LinkId,
        cmd_id: u8,
        frame: &mut [u8],
    ) -> Result<(), MailboxError> {
        self.calls.push(Call::Send {
            cpu,
            link,
            cmd_id,
            frame: frame.to_vec(),
        });
        self.last_cmd_id = cmd_id;
        match self.send_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn receive_response(
        &mut self,
        cpu: CpuType,
        link: LinkId,
        frame: &mut [u8],
    ) -> Result<ResponseHeader, MailboxError> {
        self.calls.push(Call::Receive {
            cpu,
            link,
            len: frame.len(),
        });
        let reply = self
            .replies
            .pop_front()
            .unwrap_or(Reply::Respond(ResponseStatus::Success, Vec::new()));
        match reply {
            Reply::Respond(status, payload) => {
                let room = &mut frame[RESP_HEADER_SIZE..];
                let len = payload.len().min(room.len());
                room[..len].copy_from_slice(&payload[..len]);
                Ok(ResponseHeader {
                    cmd_id: self.last_cmd_id,
                    status,
                })
            }
            Reply::NoResponse(e) => Err(e),
        }
    }
}

pub fn device() -> DfeDevice<MockHal> {
    init_logging();
    DfeDevice::new(MockHal::new())
}
