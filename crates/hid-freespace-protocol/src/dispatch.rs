//! Generic decode/encode over the whole message set.

use crate::error::{CodecError, CodecResult};
use crate::framing::{self, Discriminant, Header};
use crate::messages::{Message, MessageType};
use crate::version::ProtocolVersion;

/// A decoded report: the header it arrived with and the typed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    pub header: Header,
    pub message: Message,
}

/// Find the message carried by a V1 report from its report ID and, for
/// the generic reports, its sub-message ID.
pub fn resolve_legacy(report_id: u8, sub_id: Option<u8>) -> Option<MessageType> {
    MessageType::ALL.iter().copied().find(|ty| {
        ty.layout()
            .v1
            .is_some_and(|report| report.report_id == report_id && report.sub_id == sub_id)
    })
}

/// Decode whichever message `buf` carries.
///
/// V2 reports name themselves by their type byte. V1 reports are resolved
/// through their report ID (and sub-message ID), which is the same
/// routing a HID transport performs.
///
/// # Errors
///
/// [`CodecError::MalformedHeader`] for a bad header,
/// [`CodecError::UnknownMessageType`] when the identifier names nothing,
/// otherwise whatever the message's own decoder reports. A V2 type byte
/// that names a V1-only message (`0x00` is `CoprocessorOutReport`) is a
/// known type in the wrong version and fails with
/// [`CodecError::UnsupportedInVersion`], not `UnknownMessageType`.
pub fn decode_message(buf: &[u8], version: ProtocolVersion) -> CodecResult<Frame> {
    let info = framing::decode_header(buf, version)?;
    let message_type = match info.discriminant {
        Discriminant::Extended(raw) => MessageType::try_from(raw)?,
        Discriminant::Legacy { report_id, sub_id } => resolve_legacy(report_id, sub_id)
            .ok_or(CodecError::UnknownMessageType(info.discriminant.identifier()))?,
    };
    let message = message_type.decode(buf, version)?;
    Ok(Frame {
        header: info.header,
        message,
    })
}

/// Decode `buf` as `expected`, the only option for V1 reports whose
/// message type is known out of band.
///
/// # Errors
///
/// As the per-message decoders, in particular
/// [`CodecError::TypeMismatch`] when `buf` carries another message.
pub fn decode_message_as(
    buf: &[u8],
    version: ProtocolVersion,
    expected: MessageType,
) -> CodecResult<Frame> {
    let message = expected.decode(buf, version)?;
    let info = framing::decode_header(buf, version)?;
    Ok(Frame {
        header: info.header,
        message,
    })
}

/// Encode any message; returns the number of bytes written.
///
/// # Errors
///
/// As [`Message::encode`].
pub fn encode_message(
    message: &Message,
    out: &mut [u8],
    destination: u8,
    version: ProtocolVersion,
) -> CodecResult<usize> {
    message.encode(out, destination, version)
}
