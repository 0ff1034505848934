//! V1 and V2 report headers.
//!
//! ```text
//! V1:  [report_id] [sub_id]? [payload ...]
//! V2:  [0x02] [length] [destination] [source] [message_type] [payload ...]
//! ```
//!
//! The V2 `length` byte counts the whole report, header included.

use crate::error::{CodecError, CodecResult};
use crate::ids::{V2_VERSION_BYTE, address, report_ids};
use crate::layout::{MessageLayout, V2_HEADER_LEN};
use crate::messages::MessageType;
use crate::version::ProtocolVersion;

/// V2 routing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    /// Total report length as declared by the sender.
    pub length: u8,
    pub destination: u8,
    pub source: u8,
}

/// Decoded header of either version. `route` is `None` for V1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub version: ProtocolVersion,
    pub route: Option<Route>,
}

/// What identifies the message inside a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    /// V1 report ID and, for the generic reports, the sub-message ID.
    Legacy { report_id: u8, sub_id: Option<u8> },
    /// V2 message-type byte.
    Extended(u8),
}

impl Discriminant {
    /// The byte that names the message: sub ID for generic V1 reports,
    /// report ID for dedicated ones, type byte for V2.
    pub const fn identifier(&self) -> u8 {
        match *self {
            Self::Legacy {
                sub_id: Some(sub_id),
                ..
            } => sub_id,
            Self::Legacy { report_id, .. } => report_id,
            Self::Extended(message_type) => message_type,
        }
    }
}

/// Result of [`decode_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderInfo {
    pub header: Header,
    pub discriminant: Discriminant,
    /// Index of the first payload byte.
    pub payload_offset: usize,
}

fn malformed(version: ProtocolVersion, reason: &'static str) -> CodecError {
    CodecError::MalformedHeader { version, reason }
}

/// Parse the header at the start of `buf`.
///
/// # Errors
///
/// [`CodecError::MalformedHeader`] when `buf` is shorter than the minimum
/// header, the V2 version byte is not `2`, or the V2 length byte is below
/// the header size or beyond the end of `buf`.
pub fn decode_header(buf: &[u8], version: ProtocolVersion) -> CodecResult<HeaderInfo> {
    match version {
        ProtocolVersion::V1 => {
            let (&report_id, rest) = buf
                .split_first()
                .ok_or(malformed(version, "empty report"))?;
            let sub_id = if report_ids::has_sub_id(report_id) {
                Some(
                    *rest
                        .first()
                        .ok_or(malformed(version, "generic report without sub-message id"))?,
                )
            } else {
                None
            };
            Ok(HeaderInfo {
                header: Header {
                    version,
                    route: None,
                },
                discriminant: Discriminant::Legacy { report_id, sub_id },
                payload_offset: if sub_id.is_some() { 2 } else { 1 },
            })
        }
        ProtocolVersion::V2 => {
            let Some(&[version_byte, length, destination, source, message_type]) =
                buf.first_chunk::<V2_HEADER_LEN>()
            else {
                return Err(malformed(version, "shorter than the v2 header"));
            };
            if version_byte != V2_VERSION_BYTE {
                return Err(malformed(version, "version byte is not 2"));
            }
            if usize::from(length) < V2_HEADER_LEN {
                return Err(malformed(version, "length byte smaller than the header"));
            }
            if usize::from(length) > buf.len() {
                return Err(malformed(version, "length byte exceeds the report"));
            }
            Ok(HeaderInfo {
                header: Header {
                    version,
                    route: Some(Route {
                        length,
                        destination,
                        source,
                    }),
                },
                discriminant: Discriminant::Extended(message_type),
                payload_offset: V2_HEADER_LEN,
            })
        }
    }
}

/// Write the header for `message_type` into the start of `out` and return
/// the payload offset. The V2 length byte is the message's full wire size
/// and the source is always [`address::HOST`].
///
/// # Errors
///
/// [`CodecError::UnsupportedInVersion`] when the type has no layout for
/// `version`, [`CodecError::BufferTooSmall`] when the header does not fit.
pub fn encode_header(
    message_type: MessageType,
    destination: u8,
    version: ProtocolVersion,
    out: &mut [u8],
) -> CodecResult<usize> {
    let layout = message_type.layout();
    let unsupported = CodecError::UnsupportedInVersion {
        message: message_type,
        version,
    };
    match version {
        ProtocolVersion::V1 => {
            let report = layout.v1.ok_or(unsupported)?;
            let header_len = report.header_len();
            let available = out.len();
            let dst = out.get_mut(..header_len).ok_or(CodecError::BufferTooSmall {
                needed: header_len,
                available,
            })?;
            match (report.sub_id, dst) {
                (Some(sub_id), [id, sub]) => {
                    *id = report.report_id;
                    *sub = sub_id;
                }
                (None, [id]) => *id = report.report_id,
                _ => return Err(unsupported),
            }
            Ok(header_len)
        }
        ProtocolVersion::V2 => {
            let size = layout.wire_size(version).ok_or(unsupported)?;
            let length = u8::try_from(size).map_err(|_overflow| unsupported)?;
            let available = out.len();
            let dst = out
                .first_chunk_mut::<V2_HEADER_LEN>()
                .ok_or(CodecError::BufferTooSmall {
                    needed: V2_HEADER_LEN,
                    available,
                })?;
            *dst = [
                V2_VERSION_BYTE,
                length,
                destination,
                address::HOST,
                message_type.as_u8(),
            ];
            Ok(V2_HEADER_LEN)
        }
    }
}

/// Validate `buf` as a `message_type` report and return its payload,
/// trimmed to the layout's payload length.
pub(crate) fn open<'a>(
    buf: &'a [u8],
    version: ProtocolVersion,
    message_type: MessageType,
    layout: &MessageLayout,
) -> CodecResult<&'a [u8]> {
    let size = layout
        .wire_size(version)
        .ok_or(CodecError::UnsupportedInVersion {
            message: message_type,
            version,
        })?;
    if buf.len() < size {
        return Err(CodecError::TooShort {
            needed: size,
            available: buf.len(),
        });
    }

    let info = decode_header(buf, version)?;
    if let Some(route) = info.header.route
        && usize::from(route.length) < size
    {
        return Err(CodecError::TooShort {
            needed: size,
            available: usize::from(route.length),
        });
    }

    let mismatch = |found| CodecError::TypeMismatch {
        expected: message_type,
        found,
    };
    match (info.discriminant, layout.v1) {
        (Discriminant::Extended(found), _) => {
            if found != message_type.as_u8() {
                return Err(mismatch(found));
            }
        }
        (Discriminant::Legacy { report_id, sub_id }, Some(report)) => {
            if report_id != report.report_id {
                return Err(mismatch(report_id));
            }
            if sub_id != report.sub_id {
                return Err(mismatch(sub_id.unwrap_or(report_id)));
            }
        }
        (Discriminant::Legacy { report_id, .. }, None) => return Err(mismatch(report_id)),
    }

    buf.get(info.payload_offset..size).ok_or(CodecError::TooShort {
        needed: size,
        available: buf.len(),
    })
}

/// Zero the first `wire_size` bytes of `out`, write the header and hand back
/// the payload region together with the total size.
pub(crate) fn seal<'a>(
    out: &'a mut [u8],
    destination: u8,
    version: ProtocolVersion,
    message_type: MessageType,
    layout: &MessageLayout,
) -> CodecResult<(&'a mut [u8], usize)> {
    let size = layout
        .wire_size(version)
        .ok_or(CodecError::UnsupportedInVersion {
            message: message_type,
            version,
        })?;
    let available = out.len();
    let frame = out.get_mut(..size).ok_or(CodecError::BufferTooSmall {
        needed: size,
        available,
    })?;
    frame.fill(0);
    let payload_offset = encode_header(message_type, destination, version, frame)?;
    let payload = frame.get_mut(payload_offset..).ok_or(CodecError::BufferTooSmall {
        needed: size,
        available,
    })?;
    Ok((payload, size))
}
