//! Data-driven message layouts.
//!
//! Each message declares, per protocol version, where its report lives
//! (a [`MessageLayout`]) and where each payload field sits inside the
//! payload (a [`Slot`]). The generic [`FieldValue`] routines below do all
//! the byte work, so the per-message code is nothing but tables.

use crate::error::{CodecError, CodecResult};
use crate::field;
use crate::messages::MessageType;
use crate::version::ProtocolVersion;

/// Position of one field inside a message payload.
///
/// Offsets are relative to the first payload byte, after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The field's natural width (from its Rust type) starting at `offset`.
    At(usize),
    /// `width` bits starting at bit `shift` of the byte at `offset`.
    Bits { offset: usize, shift: u8, width: u8 },
}

/// Field stored at its natural width.
pub const fn at(offset: usize) -> Option<Slot> {
    Some(Slot::At(offset))
}

/// Single-bit flag.
pub const fn bit(offset: usize, shift: u8) -> Option<Slot> {
    bits(offset, shift, 1)
}

/// Multi-bit field packed into one byte.
pub const fn bits(offset: usize, shift: u8, width: u8) -> Option<Slot> {
    Some(Slot::Bits {
        offset,
        shift,
        width,
    })
}

/// V1 placement of a message: which HID report carries it and how long
/// its payload is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyReport {
    pub report_id: u8,
    /// Present only for the generic reports (`7` and `8`).
    pub sub_id: Option<u8>,
    /// Payload bytes after the report ID (and sub ID), reserved padding included.
    pub payload_len: usize,
}

impl LegacyReport {
    pub const fn header_len(&self) -> usize {
        if self.sub_id.is_some() { 2 } else { 1 }
    }
}

/// V1 message multiplexed on a generic report by sub-message ID.
pub const fn legacy(report_id: u8, sub_id: u8, payload_len: usize) -> Option<LegacyReport> {
    Some(LegacyReport {
        report_id,
        sub_id: Some(sub_id),
        payload_len,
    })
}

/// V1 message owning a dedicated report ID.
pub const fn dedicated(report_id: u8, payload_len: usize) -> Option<LegacyReport> {
    Some(LegacyReport {
        report_id,
        sub_id: None,
        payload_len,
    })
}

/// V2 message with `payload_len` bytes after the five header bytes.
pub const fn extended(payload_len: usize) -> Option<usize> {
    Some(payload_len)
}

/// Bytes of V2 header before the payload: version, length, destination,
/// source, message type.
pub const V2_HEADER_LEN: usize = 5;

/// Per-version framing of one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageLayout {
    pub v1: Option<LegacyReport>,
    /// V2 payload length; the header is always [`V2_HEADER_LEN`] bytes.
    pub v2: Option<usize>,
}

impl MessageLayout {
    pub const fn supports(&self, version: ProtocolVersion) -> bool {
        match version {
            ProtocolVersion::V1 => self.v1.is_some(),
            ProtocolVersion::V2 => self.v2.is_some(),
        }
    }

    /// Bytes before the payload.
    pub const fn header_len(&self, version: ProtocolVersion) -> Option<usize> {
        match (version, self.v1, self.v2) {
            (ProtocolVersion::V1, Some(report), _) => Some(report.header_len()),
            (ProtocolVersion::V2, _, Some(_)) => Some(V2_HEADER_LEN),
            _ => None,
        }
    }

    /// Exact encoded size, header included.
    pub const fn wire_size(&self, version: ProtocolVersion) -> Option<usize> {
        match (version, self.v1, self.v2) {
            (ProtocolVersion::V1, Some(report), _) => {
                Some(report.header_len() + report.payload_len)
            }
            (ProtocolVersion::V2, _, Some(payload_len)) => Some(V2_HEADER_LEN + payload_len),
            _ => None,
        }
    }
}

// ── Field values ─────────────────────────────────────────────────────────────

/// A payload field type the layout engine knows how to move in and out of
/// a [`Slot`].
pub trait FieldValue: Copy + Default + PartialEq {
    fn read(payload: &[u8], slot: Slot) -> CodecResult<Self>;

    /// Fails with [`CodecError::ValueOutOfRange`] rather than clipping a
    /// value that does not fit a bit slot.
    fn write(self, payload: &mut [u8], slot: Slot) -> CodecResult<()>;

    /// `Err(ValueOutOfRange)` when the value is wider than `slot`.
    fn check(&self, _slot: Slot, _field: &'static str) -> CodecResult<()> {
        Ok(())
    }
}

macro_rules! integer_field {
    ($($ty:ty => $read:path, $write:path;)*) => {$(
        impl FieldValue for $ty {
            fn read(payload: &[u8], slot: Slot) -> CodecResult<Self> {
                match slot {
                    Slot::At(offset) => $read(payload, offset),
                    Slot::Bits { offset, shift, width } => {
                        field::read_bits(payload, offset, shift, width).map(|raw| raw as $ty)
                    }
                }
            }

            fn write(self, payload: &mut [u8], slot: Slot) -> CodecResult<()> {
                match slot {
                    Slot::At(offset) => $write(payload, offset, self),
                    Slot::Bits { offset, shift, width } => {
                        self.check(slot, stringify!($ty))?;
                        field::write_bits(payload, offset, shift, width, self as u8)
                    }
                }
            }

            fn check(&self, slot: Slot, field: &'static str) -> CodecResult<()> {
                match slot {
                    Slot::At(_) => Ok(()),
                    Slot::Bits { width, .. } => {
                        let value = i64::from(*self);
                        if (0..=i64::from(field::bit_mask(width))).contains(&value) {
                            Ok(())
                        } else {
                            Err(CodecError::ValueOutOfRange { field, value, bits: width })
                        }
                    }
                }
            }
        }
    )*};
}

integer_field! {
    u8 => field::read_u8, field::write_u8;
    i8 => field::read_i8, field::write_i8;
    u16 => field::read_u16, field::write_u16;
    i16 => field::read_i16, field::write_i16;
    u32 => field::read_u32, field::write_u32;
}

/// Flags occupy a whole byte (any non-zero value reads as `true`) or a
/// single bit of a packed flags byte.
impl FieldValue for bool {
    fn read(payload: &[u8], slot: Slot) -> CodecResult<Self> {
        match slot {
            Slot::At(offset) => field::read_u8(payload, offset).map(|raw| raw != 0),
            Slot::Bits { offset, shift, width } => {
                field::read_bits(payload, offset, shift, width).map(|raw| raw != 0)
            }
        }
    }

    fn write(self, payload: &mut [u8], slot: Slot) -> CodecResult<()> {
        match slot {
            Slot::At(offset) => field::write_u8(payload, offset, u8::from(self)),
            Slot::Bits { offset, shift, width } => {
                field::write_bits(payload, offset, shift, width, u8::from(self))
            }
        }
    }
}

fn array_offset(slot: Slot) -> usize {
    match slot {
        Slot::At(offset) | Slot::Bits { offset, .. } => offset,
    }
}

impl<const N: usize> FieldValue for [u8; N]
where
    [u8; N]: Default,
{
    fn read(payload: &[u8], slot: Slot) -> CodecResult<Self> {
        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = field::read_u8(payload, array_offset(slot).saturating_add(i))?;
        }
        Ok(out)
    }

    fn write(self, payload: &mut [u8], slot: Slot) -> CodecResult<()> {
        for (i, byte) in self.into_iter().enumerate() {
            field::write_u8(payload, array_offset(slot).saturating_add(i), byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> FieldValue for [u32; N]
where
    [u32; N]: Default,
{
    fn read(payload: &[u8], slot: Slot) -> CodecResult<Self> {
        let mut out = [0u32; N];
        for (i, word) in out.iter_mut().enumerate() {
            *word = field::read_u32(payload, word_offset(slot, i))?;
        }
        Ok(out)
    }

    fn write(self, payload: &mut [u8], slot: Slot) -> CodecResult<()> {
        for (i, word) in self.into_iter().enumerate() {
            field::write_u32(payload, word_offset(slot, i), word)?;
        }
        Ok(())
    }
}

fn word_offset(slot: Slot, index: usize) -> usize {
    array_offset(slot).saturating_add(index.saturating_mul(4))
}

// ── Table helpers used by the generated message code ─────────────────────────

/// Read a field, or its default when the version does not carry it.
pub(crate) fn read_field<T: FieldValue>(payload: &[u8], slot: Option<Slot>) -> CodecResult<T> {
    match slot {
        Some(slot) => T::read(payload, slot),
        None => Ok(T::default()),
    }
}

/// Check that `value` can be represented in `slot` without losing anything.
pub(crate) fn check_field<T: FieldValue>(
    value: &T,
    slot: Option<Slot>,
    field: &'static str,
    message: MessageType,
    version: ProtocolVersion,
) -> CodecResult<()> {
    match slot {
        Some(slot) => value.check(slot, field),
        None if *value == T::default() => Ok(()),
        None => Err(CodecError::UnsupportedInVersion { message, version }),
    }
}

pub(crate) fn write_field<T: FieldValue>(
    value: T,
    payload: &mut [u8],
    slot: Option<Slot>,
) -> CodecResult<()> {
    match slot {
        Some(slot) => value.write(payload, slot),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_size_counts_header() {
        let layout = MessageLayout {
            v1: legacy(7, 34, 6),
            v2: extended(2),
        };
        assert_eq!(layout.wire_size(ProtocolVersion::V1), Some(8));
        assert_eq!(layout.wire_size(ProtocolVersion::V2), Some(7));
        assert_eq!(layout.header_len(ProtocolVersion::V1), Some(2));

        let dedicated_only = MessageLayout {
            v1: dedicated(10, 3),
            v2: None,
        };
        assert_eq!(dedicated_only.wire_size(ProtocolVersion::V1), Some(4));
        assert_eq!(dedicated_only.header_len(ProtocolVersion::V1), Some(1));
        assert_eq!(dedicated_only.wire_size(ProtocolVersion::V2), None);
        assert!(!dedicated_only.supports(ProtocolVersion::V2));
    }

    #[test]
    fn test_bit_slot_rejects_wide_values() {
        let slot = Slot::Bits {
            offset: 0,
            shift: 0,
            width: 4,
        };
        assert!(15u8.check(slot, "status").is_ok());
        assert_eq!(
            16u8.check(slot, "status"),
            Err(CodecError::ValueOutOfRange {
                field: "status",
                value: 16,
                bits: 4
            })
        );
        assert!((-1i8).check(slot, "delta").is_err());
        assert!(200u8.check(Slot::At(0), "any").is_ok());
    }

    #[test]
    fn test_bit_slot_write_refuses_to_clip() {
        let slot = Slot::Bits {
            offset: 0,
            shift: 4,
            width: 4,
        };
        let mut payload = [0x0Au8];
        assert_eq!(
            0x0110u16.write(&mut payload, slot),
            Err(CodecError::ValueOutOfRange {
                field: "u16",
                value: 0x0110,
                bits: 4
            })
        );
        assert!(0x1_0000u32.write(&mut payload, slot).is_err());
        assert_eq!(payload, [0x0A]);
        assert_eq!(0x000Cu16.write(&mut payload, slot), Ok(()));
        assert_eq!(payload, [0xCA]);
    }

    #[test]
    fn test_word_array_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let mut payload = [0u8; 14];
        let words = [0x0403_0201u32, 0x0807_0605, 0x0C0B_0A09];
        words.write(&mut payload, Slot::At(2))?;
        assert_eq!(payload[2..6], [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(<[u32; 3]>::read(&payload, Slot::At(2))?, words);
        Ok(())
    }

    #[test]
    fn test_absent_field_reads_default_and_rejects_non_default() {
        let payload = [0xFFu8; 4];
        assert_eq!(read_field::<u16>(&payload, None), Ok(0));
        assert!(
            check_field(&0u8, None, "device", MessageType::SoftwareResetMessage, ProtocolVersion::V2)
                .is_ok()
        );
        assert_eq!(
            check_field(&1u8, None, "device", MessageType::SoftwareResetMessage, ProtocolVersion::V2),
            Err(CodecError::UnsupportedInVersion {
                message: MessageType::SoftwareResetMessage,
                version: ProtocolVersion::V2,
            })
        );
    }
}
