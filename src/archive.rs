//! DFE firmware archive validation and image loading.
//!
//! A DFE firmware archive is laid out as:
//!
//! ```text
//! | file CRC (4) | magic (4) | format rev (4) | checksum (4) | image ... |
//! ```
//!
//! All fields are in device (little-endian) byte order.  The file CRC covers
//! everything after itself, and is computed with [`crate::crc`] seeded with
//! [`CRC_SEED`].  The header checksum is handed to the DFE, which checks its
//! image against it at boot.
//!
//! Requires the `std` feature.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::crc::{CRC_SEED, Crc32};
use crate::device::{DeviceState, DfeDevice};
use crate::hal::Hal;
use crate::wire::Wire;
use crate::{ArchiveError, Error, Result};

/// Offset of the [`ArchiveHeader`] in the file, after the file CRC
pub const ARCHIVE_HEADER_OFFSET: u64 = 4;

/// Size of the [`ArchiveHeader`]
pub const ARCHIVE_HEADER_SIZE: usize = 12;

/// File CRC plus header, preceding the image body
pub const IMAGE_LOAD_HEADER_SIZE: u64 = ARCHIVE_HEADER_OFFSET + ARCHIVE_HEADER_SIZE as u64;

/// Size of the chunks an image is written to the DFE in
pub const LOAD_CHUNK_SIZE: usize = 4096;

/// Supported archive format revision
pub const ARCHIVE_REV_1: u32 = 1;

/// Kind of firmware archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// Main CPU firmware
    Cpu,
    /// DFE CPU firmware
    Dfe,
}

impl ArchiveKind {
    pub const fn magic(self) -> u32 {
        match self {
            ArchiveKind::Cpu => 0x4350_5541,
            ArchiveKind::Dfe => 0x4446_4541,
        }
    }

    pub const fn revision(self) -> u32 {
        ARCHIVE_REV_1
    }
}

/// Firmware archive header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    pub magic: u32,
    pub format_rev: u32,
    pub checksum: u32,
}

impl ArchiveHeader {
    /// Decode a header from its device byte order representation.
    pub fn parse(buf: &[u8; ARCHIVE_HEADER_SIZE]) -> Self {
        Self {
            magic: u32::get(&buf[0..]),
            format_rev: u32::get(&buf[4..]),
            checksum: u32::get(&buf[8..]),
        }
    }

    /// Encode the header in device byte order.
    pub fn to_bytes(&self) -> [u8; ARCHIVE_HEADER_SIZE] {
        let mut buf = [0u8; ARCHIVE_HEADER_SIZE];
        self.magic.put(&mut buf[0..]);
        self.format_rev.put(&mut buf[4..]);
        self.checksum.put(&mut buf[8..]);
        buf
    }

    /// Check the header describes a supported archive of the given kind.
    pub fn check(&self, kind: ArchiveKind) -> core::result::Result<(), ArchiveError> {
        if self.magic != kind.magic() {
            return Err(ArchiveError::BadMagic {
                found: self.magic,
                expected: kind.magic(),
            });
        }
        if self.format_rev != kind.revision() {
            return Err(ArchiveError::BadRevision {
                found: self.format_rev,
                expected: kind.revision(),
            });
        }
        Ok(())
    }
}

/// An open firmware archive.
///
/// Implemented for [`File`] and in-memory [`Cursor`]s.  Closing is explicit
/// so that a failure to close can be reported.
pub trait ArchiveFile: Read + Seek {
    /// Close the archive.
    fn close(self) -> io::Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

impl ArchiveFile for File {}

impl<T: AsRef<[u8]>> ArchiveFile for Cursor<T> {}

// Read until `buf` is full or the file ends, returning the bytes read
fn read_up_to<F: Read>(file: &mut F, buf: &mut [u8]) -> io::Result<usize> {
    let mut read = 0;
    while read < buf.len() {
        match file.read(&mut buf[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(read)
}

fn seek_to<F: Seek>(file: &mut F, offset: u64) -> core::result::Result<(), ArchiveError> {
    file.seek(SeekFrom::Start(offset)).map(|_| ()).map_err(|e| {
        warn!("Archive seek to {offset} failed: {e}");
        ArchiveError::Seek(offset)
    })
}

fn read_exact_at<F: Read>(
    file: &mut F,
    buf: &mut [u8],
    offset: u64,
) -> core::result::Result<(), ArchiveError> {
    match read_up_to(file, buf) {
        Ok(n) if n == buf.len() => Ok(()),
        Ok(n) => {
            warn!("Archive ended at offset {}", offset + n as u64);
            Err(ArchiveError::Read(offset + n as u64))
        }
        Err(e) => {
            warn!("Archive read at offset {offset} failed: {e}");
            Err(ArchiveError::Read(offset))
        }
    }
}

/// Read and check the header of a DFE firmware archive.
pub fn read_archive_header<F: ArchiveFile>(
    file: &mut F,
) -> core::result::Result<ArchiveHeader, ArchiveError> {
    seek_to(file, ARCHIVE_HEADER_OFFSET)?;

    let mut buf = [0u8; ARCHIVE_HEADER_SIZE];
    let read = read_up_to(file, &mut buf).map_err(|e| {
        warn!("Archive header read failed: {e}");
        ArchiveError::Read(ARCHIVE_HEADER_OFFSET)
    })?;
    if read != ARCHIVE_HEADER_SIZE {
        warn!("Archive header truncated, {read} bytes");
        return Err(ArchiveError::ShortHeader { read });
    }

    let header = ArchiveHeader::parse(&buf);
    header.check(ArchiveKind::Dfe).inspect_err(|e| warn!("{e}"))?;
    Ok(header)
}

// Closes the archive, keeping the first error
fn close_archive<F: ArchiveFile, T>(file: F, result: Result<T>) -> Result<T> {
    match (file.close(), result) {
        (Ok(()), result) => result,
        (Err(e), Ok(_)) => {
            warn!("Cannot close archive: {e}");
            Err(ArchiveError::Close.into())
        }
        (Err(e), Err(first)) => {
            warn!("Cannot close archive after earlier failure ({first}): {e}");
            Err(first)
        }
    }
}

fn open_archive(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        warn!("Cannot open archive {}: {e}", path.display());
        ArchiveError::Open.into()
    })
}

impl<H: Hal> DfeDevice<H> {
    /// Validate a DFE firmware archive and send its checksum to the DFE.
    ///
    /// Checks the archive's magic number and format revision, then writes the
    /// header checksum to [`DfeLayout::image_crc_addr`](crate::device::DfeLayout).
    /// Nothing is written if validation fails.
    ///
    /// Arguments:
    /// - `path` - Path to the archive
    pub fn validate_and_send_checksum<P: AsRef<Path>>(&mut self, path: P) -> Result<ArchiveHeader> {
        let file = open_archive(path.as_ref())?;
        self.validate_archive(file)
    }

    /// As [`Self::validate_and_send_checksum()`], for an already open
    /// archive.  The archive is closed on return.
    pub fn validate_archive<F: ArchiveFile>(&mut self, mut file: F) -> Result<ArchiveHeader> {
        let result = self.check_and_send_checksum(&mut file);
        close_archive(file, result)
    }

    /// Load a DFE firmware archive into the DFE's code memory.
    ///
    /// Validates the archive (see [`Self::validate_and_send_checksum()`]),
    /// then writes the image to
    /// [`DfeLayout::code_region_start`](crate::device::DfeLayout), checking
    /// it against the archive's file CRC as it goes.  On success the device
    /// is marked [`DeviceState::DFE_CPU_LOADED`].
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = open_archive(path.as_ref())?;
        self.load_archive(file)
    }

    /// As [`Self::load_image()`], for an already open archive.  The archive
    /// is closed on return.
    pub fn load_archive<F: ArchiveFile>(&mut self, mut file: F) -> Result<()> {
        let result = self
            .check_and_send_checksum(&mut file)
            .and_then(|_| self.write_image(&mut file));
        let result = close_archive(file, result);

        if result.is_ok() {
            self.insert_state(DeviceState::DFE_CPU_LOADED);
            info!("DFE CPU image loaded");
        }
        result
    }

    fn check_and_send_checksum<F: ArchiveFile>(&mut self, file: &mut F) -> Result<ArchiveHeader> {
        let header = read_archive_header(file)?;
        debug!(
            "DFE archive rev {} checksum {:#010X}",
            header.format_rev, header.checksum
        );

        let addr = self.layout().image_crc_addr;
        self.write_u32s(addr, &[header.checksum], "archive checksum")?;
        Ok(header)
    }

    fn write_image<F: ArchiveFile>(&mut self, file: &mut F) -> Result<()> {
        let size = file.seek(SeekFrom::End(0)).map_err(|e| {
            warn!("Cannot size archive: {e}");
            Error::from(ArchiveError::Seek(0))
        })?;
        if size == 0 {
            return Err(ArchiveError::Empty.into());
        }
        if size % 4 != 0 {
            warn!("Archive size {size} is not a whole number of words");
            return Err(ArchiveError::BadSize(size).into());
        }

        seek_to(file, 0)?;
        let mut word = [0u8; 4];
        read_exact_at(file, &mut word, 0)?;
        let file_crc = u32::get(&word);

        let mut header = [0u8; ARCHIVE_HEADER_SIZE];
        read_exact_at(file, &mut header, ARCHIVE_HEADER_OFFSET)?;
        let mut crc = Crc32::new(CRC_SEED);
        crc.update(&header);

        let mut chunk = [0u8; LOAD_CHUNK_SIZE];
        let mut remaining = size.saturating_sub(IMAGE_LOAD_HEADER_SIZE);
        let mut offset = IMAGE_LOAD_HEADER_SIZE;
        let mut addr = self.layout().code_region_start;
        debug!("Loading {remaining} byte DFE image to {addr:#010X}");

        while remaining > LOAD_CHUNK_SIZE as u64 {
            read_exact_at(file, &mut chunk, offset)?;
            self.write_bytes(addr, &chunk, "DFE image")?;
            crc.update(&chunk);
            addr = addr.wrapping_add(LOAD_CHUNK_SIZE as u32);
            offset += LOAD_CHUNK_SIZE as u64;
            remaining -= LOAD_CHUNK_SIZE as u64;
        }

        let last = &mut chunk[..remaining as usize];
        if !last.is_empty() {
            read_exact_at(file, last, offset)?;
            self.write_bytes(addr, last, "DFE image")?;
        }
        let computed = crc.finish(last);

        if computed != file_crc {
            warn!("DFE image CRC {computed:#010X} does not match file CRC {file_crc:#010X}");
            return Err(ArchiveError::CrcMismatch {
                expected: file_crc,
                computed,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    fn header_bytes(magic: u32, rev: u32, checksum: u32) -> Vec<u8> {
        let mut file = vec![0u8; 4];
        file.extend_from_slice(
            &ArchiveHeader {
                magic,
                format_rev: rev,
                checksum,
            }
            .to_bytes(),
        );
        file
    }

    #[test]
    fn header_layout() {
        let header = ArchiveHeader {
            magic: 0x4446_4541,
            format_rev: 1,
            checksum: 0xAABB_CCDD,
        };
        let bytes = header.to_bytes();
        assert_eq!(&bytes[..4], &[0x41, 0x45, 0x46, 0x44]);
        assert_eq!(&bytes[8..], &[0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(ArchiveHeader::parse(&bytes), header);
    }

    #[test]
    fn reads_valid_header() {
        let mut file = Cursor::new(header_bytes(ArchiveKind::Dfe.magic(), 1, 0x1234));
        let header = read_archive_header(&mut file).expect("valid header");
        assert_eq!(header.checksum, 0x1234);
    }

    #[test]
    fn rejects_cpu_archive() {
        let mut file = Cursor::new(header_bytes(ArchiveKind::Cpu.magic(), 1, 0));
        assert_eq!(
            read_archive_header(&mut file),
            Err(ArchiveError::BadMagic {
                found: ArchiveKind::Cpu.magic(),
                expected: ArchiveKind::Dfe.magic()
            })
        );
    }

    #[test]
    fn rejects_short_header() {
        let mut bytes = header_bytes(ArchiveKind::Dfe.magic(), 1, 0);
        bytes.truncate(10);
        let mut file = Cursor::new(bytes);
        assert_eq!(
            read_archive_header(&mut file),
            Err(ArchiveError::ShortHeader { read: 6 })
        );
    }
}
