//! Little-endian field primitives over unaligned byte buffers.
//!
//! Reads past the end of `buf` fail with [`CodecError::TooShort`]; writes
//! past the end fail with [`CodecError::BufferTooSmall`]. Nothing here
//! panics or allocates.

use crate::error::{CodecError, CodecResult};

fn span(offset: usize, len: usize) -> Option<core::ops::Range<usize>> {
    offset.checked_add(len).map(|end| offset..end)
}

fn load<const N: usize>(buf: &[u8], offset: usize) -> CodecResult<[u8; N]> {
    span(offset, N)
        .and_then(|range| buf.get(range))
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or(CodecError::TooShort {
            needed: offset.saturating_add(N),
            available: buf.len(),
        })
}

fn store<const N: usize>(buf: &mut [u8], offset: usize, bytes: [u8; N]) -> CodecResult<()> {
    let available = buf.len();
    let dst = span(offset, N)
        .and_then(|range| buf.get_mut(range))
        .ok_or(CodecError::BufferTooSmall {
            needed: offset.saturating_add(N),
            available,
        })?;
    dst.copy_from_slice(&bytes);
    Ok(())
}

// ── Reads ────────────────────────────────────────────────────────────────────

pub fn read_u8(buf: &[u8], offset: usize) -> CodecResult<u8> {
    load::<1>(buf, offset).map(u8::from_le_bytes)
}

pub fn read_i8(buf: &[u8], offset: usize) -> CodecResult<i8> {
    load::<1>(buf, offset).map(i8::from_le_bytes)
}

pub fn read_u16(buf: &[u8], offset: usize) -> CodecResult<u16> {
    load::<2>(buf, offset).map(u16::from_le_bytes)
}

pub fn read_i16(buf: &[u8], offset: usize) -> CodecResult<i16> {
    load::<2>(buf, offset).map(i16::from_le_bytes)
}

pub fn read_u32(buf: &[u8], offset: usize) -> CodecResult<u32> {
    load::<4>(buf, offset).map(u32::from_le_bytes)
}

pub fn read_i32(buf: &[u8], offset: usize) -> CodecResult<i32> {
    load::<4>(buf, offset).map(i32::from_le_bytes)
}

/// Extract `width` bits starting at bit `shift` of the byte at `offset`.
pub fn read_bits(buf: &[u8], offset: usize, shift: u8, width: u8) -> CodecResult<u8> {
    let byte = read_u8(buf, offset)?;
    Ok(byte.checked_shr(u32::from(shift)).unwrap_or(0) & bit_mask(width))
}

// ── Writes ───────────────────────────────────────────────────────────────────

pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> CodecResult<()> {
    store(buf, offset, value.to_le_bytes())
}

pub fn write_i8(buf: &mut [u8], offset: usize, value: i8) -> CodecResult<()> {
    store(buf, offset, value.to_le_bytes())
}

pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) -> CodecResult<()> {
    store(buf, offset, value.to_le_bytes())
}

pub fn write_i16(buf: &mut [u8], offset: usize, value: i16) -> CodecResult<()> {
    store(buf, offset, value.to_le_bytes())
}

pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) -> CodecResult<()> {
    store(buf, offset, value.to_le_bytes())
}

pub fn write_i32(buf: &mut [u8], offset: usize, value: i32) -> CodecResult<()> {
    store(buf, offset, value.to_le_bytes())
}

/// Replace `width` bits starting at bit `shift` of the byte at `offset`,
/// leaving the other bits of that byte untouched. `value` is masked to
/// `width` bits; range checking is the caller's job.
pub fn write_bits(buf: &mut [u8], offset: usize, shift: u8, width: u8, value: u8) -> CodecResult<()> {
    let current = read_u8(buf, offset).map_err(|_too_short| CodecError::BufferTooSmall {
        needed: offset.saturating_add(1),
        available: buf.len(),
    })?;
    let mask = bit_mask(width).checked_shl(u32::from(shift)).unwrap_or(0);
    let placed = (value & bit_mask(width)).checked_shl(u32::from(shift)).unwrap_or(0);
    write_u8(buf, offset, (current & !mask) | placed)
}

/// Mask with the low `width` bits set.
pub const fn bit_mask(width: u8) -> u8 {
    if width >= 8 { u8::MAX } else { (1u8 << width) - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() -> Result<(), Box<dyn std::error::Error>> {
        let buf = [0x34, 0x12, 0xFF, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(read_u16(&buf, 0)?, 0x1234);
        assert_eq!(read_i8(&buf, 2)?, -1);
        assert_eq!(read_u32(&buf, 3)?, 0x1234_5678);
        assert_eq!(read_i16(&[0xFE, 0xFF], 0)?, -2);
        assert_eq!(read_i32(&[0xFF, 0xFF, 0xFF, 0xFF], 0)?, -1);
        Ok(())
    }

    #[test]
    fn test_unaligned_write_then_read() -> Result<(), Box<dyn std::error::Error>> {
        let mut buf = [0u8; 7];
        write_u32(&mut buf, 3, 0xDEAD_BEEF)?;
        write_i16(&mut buf, 1, -300)?;
        assert_eq!(buf, [0x00, 0xD4, 0xFE, 0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(read_u32(&buf, 3)?, 0xDEAD_BEEF);
        assert_eq!(read_i16(&buf, 1)?, -300);
        Ok(())
    }

    #[test]
    fn test_read_past_end_is_too_short() {
        let buf = [0u8; 3];
        assert_eq!(
            read_u32(&buf, 0),
            Err(CodecError::TooShort { needed: 4, available: 3 })
        );
        assert_eq!(
            read_u8(&buf, 3),
            Err(CodecError::TooShort { needed: 4, available: 3 })
        );
        assert!(read_u16(&buf, usize::MAX).is_err());
    }

    #[test]
    fn test_write_past_end_is_buffer_too_small() {
        let mut buf = [0u8; 2];
        assert_eq!(
            write_u16(&mut buf, 1, 7),
            Err(CodecError::BufferTooSmall { needed: 3, available: 2 })
        );
        assert_eq!(buf, [0, 0]);
        assert!(write_bits(&mut buf, 2, 0, 1, 1).is_err());
    }

    #[test]
    fn test_bit_fields_preserve_neighbours() -> Result<(), Box<dyn std::error::Error>> {
        let mut buf = [0b1000_0001u8];
        write_bits(&mut buf, 0, 4, 3, 0b101)?;
        assert_eq!(buf[0], 0b1101_0001);
        assert_eq!(read_bits(&buf, 0, 4, 3)?, 0b101);
        assert_eq!(read_bits(&buf, 0, 0, 1)?, 1);
        assert_eq!(read_bits(&buf, 0, 7, 1)?, 1);
        write_bits(&mut buf, 0, 0, 4, 0xFF)?;
        assert_eq!(buf[0], 0b1101_1111);
        Ok(())
    }

    #[test]
    fn test_bit_mask() {
        assert_eq!(bit_mask(1), 0x01);
        assert_eq!(bit_mask(4), 0x0F);
        assert_eq!(bit_mask(7), 0x7F);
        assert_eq!(bit_mask(8), 0xFF);
    }
}
