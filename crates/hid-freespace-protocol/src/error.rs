//! Codec error type.

use crate::messages::MessageType;
use crate::version::ProtocolVersion;

/// Result alias used throughout the codec.
pub type CodecResult<T> = Result<T, CodecError>;

/// Everything that can go wrong while framing, decoding or encoding a report.
///
/// Every codec entry point returns one of these instead of panicking; on
/// an encode error the caller must not transmit the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The version byte, length byte, or minimum header is invalid.
    #[error("malformed {version} header: {reason}")]
    MalformedHeader {
        version: ProtocolVersion,
        reason: &'static str,
    },

    /// Input buffer is shorter than the message requires.
    #[error("report too short: need {needed} bytes, got {available}")]
    TooShort { needed: usize, available: usize },

    /// Output buffer cannot hold the encoded message.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// The type byte (V2) or report/sub-message ID (V1) names no known message.
    #[error("unknown message type {0:#04x}")]
    UnknownMessageType(u8),

    /// The message has no layout in the requested version, or a field it
    /// holds cannot be represented there.
    #[error("{message} is not supported in {version}")]
    UnsupportedInVersion {
        message: MessageType,
        version: ProtocolVersion,
    },

    /// A version number other than 1 or 2.
    #[error("invalid protocol version {0}")]
    InvalidVersion(u8),

    /// The buffer carries a different message than the one requested.
    #[error("expected {expected}, found identifier {found:#04x}")]
    TypeMismatch { expected: MessageType, found: u8 },

    /// A bit-packed field holds a value wider than its slot.
    #[error("field `{field}` value {value} does not fit in {bits} bits")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        bits: u8,
    },
}

impl CodecError {
    /// True for errors caused by the shape of the input bytes rather than
    /// by the caller's choice of message or version.
    pub fn is_wire_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::TooShort { .. }
                | Self::UnknownMessageType(_)
                | Self::TypeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_message() {
        let err = CodecError::UnsupportedInVersion {
            message: MessageType::AlwaysOnRequest,
            version: ProtocolVersion::V2,
        };
        assert_eq!(err.to_string(), "AlwaysOnRequest is not supported in v2");
    }

    #[test]
    fn test_wire_error_classification() {
        assert!(CodecError::TooShort { needed: 4, available: 1 }.is_wire_error());
        assert!(CodecError::UnknownMessageType(0xFF).is_wire_error());
        assert!(!CodecError::BufferTooSmall { needed: 7, available: 2 }.is_wire_error());
        assert!(!CodecError::InvalidVersion(3).is_wire_error());
    }
}
