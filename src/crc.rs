//! Reflected CRC-32 used to check DFE firmware archives.
//!
//! The DFE firmware computes its image checksum with an MSB-first CRC-32
//! table, feeding each byte in bit-reflected and reflecting (and inverting)
//! the accumulator once at the very end.  The result matches the IEEE CRC-32
//! when seeded with [`CRC_SEED`].
//!
//! The calculation can be streamed.  Pass `finalize = false` for every chunk
//! except the last, feeding the previous return value back in as the seed:
//!
//! ```rust
//! use dfe_mailbox::crc::{crc32_chunk, CRC_SEED};
//!
//! let data = b"123456789";
//! let partial = crc32_chunk(&data[..4], CRC_SEED, false);
//! let crc = crc32_chunk(&data[4..], partial, true);
//! assert_eq!(crc, crc32_chunk(data, CRC_SEED, true));
//! ```
//!
//! A non-finalized value is only meaningful as the seed for the next chunk.

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

/// Seed used by the DFE image loader for whole-image checksums.
pub const CRC_SEED: u32 = 0xFFFF_FFFF;

/// CRC-32 generator polynomial (normal, MSB-first form).
pub const CRC32_POLY: u32 = 0x04C1_1DB7;

static CRC_TABLE: [u32; 256] = crc32_table();
static REFLECT8: [u8; 256] = reflect8_table();

const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut acc = (n as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            acc = if acc & 0x8000_0000 != 0 {
                (acc << 1) ^ CRC32_POLY
            } else {
                acc << 1
            };
            bit += 1;
        }
        table[n] = acc;
        n += 1;
    }
    table
}

const fn reflect8_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut n = 0;
    while n < 256 {
        table[n] = (n as u8).reverse_bits();
        n += 1;
    }
    table
}

/// Process one chunk of a (possibly streamed) CRC calculation.
///
/// Arguments:
/// - `buf` - Bytes to fold into the CRC
/// - `seed` - [`CRC_SEED`] (or `0`) for the first chunk, otherwise the
///   non-finalized result of the previous chunk
/// - `finalize` - Invert and bit-reverse the accumulator, closing the stream
pub fn crc32_chunk(buf: &[u8], seed: u32, finalize: bool) -> u32 {
    let crc = buf.iter().fold(seed, |crc, &byte| {
        let idx = ((crc >> 24) ^ REFLECT8[byte as usize] as u32) & 0xFF;
        (crc << 8) ^ CRC_TABLE[idx as usize]
    });

    if finalize { (!crc).reverse_bits() } else { crc }
}

/// Streaming wrapper around [`crc32_chunk()`].
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    acc: u32,
}

impl Crc32 {
    /// Start a new calculation from `seed`.
    pub const fn new(seed: u32) -> Self {
        Self { acc: seed }
    }

    /// Fold a chunk into the running (non-finalized) value.
    pub fn update(&mut self, buf: &[u8]) {
        self.acc = crc32_chunk(buf, self.acc, false);
    }

    /// Fold the final chunk and return the finished CRC.
    pub fn finish(self, last: &[u8]) -> u32 {
        crc32_chunk(last, self.acc, true)
    }

    /// Running value, only valid as a seed for [`crc32_chunk()`].
    pub fn partial(&self) -> u32 {
        self.acc
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new(CRC_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ieee_check_value() {
        assert_eq!(crc32_chunk(b"123456789", CRC_SEED, true), 0xCBF4_3926);
    }

    #[test]
    fn empty_buffer_with_zero_seed() {
        assert_eq!(crc32_chunk(&[], 0, true), 0xFFFF_FFFF);
        assert_eq!(crc32_chunk(&[], 0, false), 0);
    }

    #[test]
    fn tables_are_consistent() {
        assert_eq!(CRC_TABLE[0], 0);
        assert_eq!(CRC_TABLE[1], CRC32_POLY);
        assert_eq!(CRC_TABLE[255], 0xB1F7_40B4);
        assert_eq!(REFLECT8[0x01], 0x80);
        assert_eq!(REFLECT8[0xF0], 0x0F);
    }

    #[test]
    fn streaming_matches_single_pass_at_every_split() {
        let data: [u8; 37] = core::array::from_fn(|i| (i as u8).wrapping_mul(31) ^ 0x5A);
        for seed in [0, CRC_SEED] {
            let whole = crc32_chunk(&data, seed, true);
            for k in 0..=data.len() {
                let head = crc32_chunk(&data[..k], seed, false);
                assert_eq!(crc32_chunk(&data[k..], head, true), whole, "split {k}");
            }
        }
    }

    #[test]
    fn streaming_helper_matches_function() {
        let data = b"dfe firmware archive";
        let mut crc = Crc32::default();
        crc.update(&data[..7]);
        crc.update(&data[7..12]);
        assert_eq!(crc.finish(&data[12..]), crc32_chunk(data, CRC_SEED, true));
    }

    #[test]
    fn intermediate_value_is_not_final() {
        let data = b"abc";
        assert_ne!(
            crc32_chunk(data, CRC_SEED, false),
            crc32_chunk(data, CRC_SEED, true)
        );
    }
}
