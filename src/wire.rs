//! Host/device byte order conversion.
//!
//! Every multi-byte field crossing the mailbox, or read out of DFE memory,
//! is stored in the DFE CPU's native (little-endian) order.  [`Wire`] offers
//! both value-level conversion (`to_wire()`/`to_host()`, for fields held in
//! integers) and buffer-level access (`put()`/`get()`, for fields packed into
//! a frame).

// Copyright (C) 2025 Piers Finlayson <piers@piers.rocks>
//
// MIT License

use byteorder::{ByteOrder, LittleEndian};

/// Byte order of the DFE CPU.
pub type DeviceOrder = LittleEndian;

/// Integer types which can cross the mailbox boundary.
pub trait Wire: Sized + Copy {
    /// Size of the field on the wire, in bytes.
    const SIZE: usize;

    /// Convert a host value to device order.
    fn to_wire(self) -> Self;

    /// Convert a device-order value to host order.
    fn to_host(self) -> Self;

    /// Write the value in device order to the start of `buf`.
    ///
    /// Panics if `buf` is shorter than [`Self::SIZE`].
    fn put(self, buf: &mut [u8]);

    /// Read a device-order value from the start of `buf`.
    ///
    /// Panics if `buf` is shorter than [`Self::SIZE`].
    fn get(buf: &[u8]) -> Self;
}

macro_rules! impl_wire {
    ($ty:ty, $read:ident, $write:ident) => {
        impl Wire for $ty {
            const SIZE: usize = core::mem::size_of::<$ty>();

            fn to_wire(self) -> Self {
                <$ty>::to_le(self)
            }

            fn to_host(self) -> Self {
                <$ty>::from_le(self)
            }

            fn put(self, buf: &mut [u8]) {
                DeviceOrder::$write(buf, self);
            }

            fn get(buf: &[u8]) -> Self {
                DeviceOrder::$read(buf)
            }
        }
    };
}

impl_wire!(u16, read_u16, write_u16);
impl_wire!(u32, read_u32, write_u32);
impl_wire!(u64, read_u64, write_u64);

/// Assemble a 64-bit value from its low and high 32-bit device words.
pub fn u64_from_words(low: u32, high: u32) -> u64 {
    (low.to_host() as u64) | ((high.to_host() as u64) << 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trip() {
        for x in [0u16, 1, 0x1234, 0x8000, u16::MAX] {
            assert_eq!(x.to_wire().to_host(), x);
        }
        for x in [0u32, 1, 0xDEAD_BEEF, 0x8000_0000, u32::MAX] {
            assert_eq!(x.to_wire().to_host(), x);
        }
        for x in [0u64, 1, 0x0123_4567_89AB_CDEF, u64::MAX] {
            assert_eq!(x.to_wire().to_host(), x);
        }
    }

    #[test]
    fn buffer_layout_is_little_endian() {
        let mut buf = [0u8; 8];
        0x1122_3344u32.put(&mut buf);
        assert_eq!(&buf[..4], &[0x44, 0x33, 0x22, 0x11]);
        assert_eq!(u32::get(&buf), 0x1122_3344);

        0xA1B2u16.put(&mut buf[4..]);
        assert_eq!(&buf[4..6], &[0xB2, 0xA1]);

        0x0807_0605_0403_0201u64.put(&mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(u64::get(&buf), 0x0807_0605_0403_0201);
    }

    #[test]
    fn sizes() {
        assert_eq!(<u16 as Wire>::SIZE, 2);
        assert_eq!(<u32 as Wire>::SIZE, 4);
        assert_eq!(<u64 as Wire>::SIZE, 8);
    }

    #[test]
    fn words_combine_low_first() {
        assert_eq!(u64_from_words(0x89AB_CDEF, 0x0123_4567), 0x0123_4567_89AB_CDEF);
    }
}
