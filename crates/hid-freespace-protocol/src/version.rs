//! Wire protocol versions.

use core::fmt;

use crate::error::CodecError;

/// The two framing schemes spoken by Freespace devices.
///
/// V1 is the legacy report-ID scheme; V2 adds a routing header with an
/// explicit message-type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ProtocolVersion {
    V1 = 1,
    V2 = 2,
}

impl ProtocolVersion {
    /// Both versions, oldest first.
    pub const ALL: [Self; 2] = [Self::V1, Self::V2];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Pick the entry for this version out of a `[v1, v2]` pair.
    pub fn select<T: Copy>(self, per_version: [T; 2]) -> T {
        let [v1, v2] = per_version;
        match self {
            Self::V1 => v1,
            Self::V2 => v2,
        }
    }
}

impl TryFrom<u8> for ProtocolVersion {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(CodecError::InvalidVersion(other)),
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::V2 => f.write_str("v2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_u8() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(ProtocolVersion::try_from(1)?, ProtocolVersion::V1);
        assert_eq!(ProtocolVersion::try_from(2)?, ProtocolVersion::V2);
        assert_eq!(ProtocolVersion::try_from(0), Err(CodecError::InvalidVersion(0)));
        assert_eq!(ProtocolVersion::try_from(3), Err(CodecError::InvalidVersion(3)));
        Ok(())
    }

    #[test]
    fn test_select_picks_version_entry() {
        assert_eq!(ProtocolVersion::V1.select(["a", "b"]), "a");
        assert_eq!(ProtocolVersion::V2.select(["a", "b"]), "b");
    }
}
