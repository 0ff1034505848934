//! Transfer configuration.

use freespace_hid_protocol::{FrsStore, Message, ProtocolVersion, address};

use crate::error::{FrsError, FrsResult};

/// Words requested per read block unless configured otherwise.
pub const DEFAULT_BLOCK_SIZE: u16 = 32;

/// Where and how an FRS transfer talks to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrsTransferConfig {
    /// Wire version used for every request.
    pub version: ProtocolVersion,
    /// V2 destination address; ignored by V1 framing.
    pub destination: u8,
    pub store: FrsStore,
    /// Words per read request. The device reports `BlockCompleted` after
    /// each block and the reader asks for the next one.
    pub block_size: u16,
}

impl Default for FrsTransferConfig {
    fn default() -> Self {
        Self {
            version: ProtocolVersion::V2,
            destination: address::DONGLE,
            store: FrsStore::Unified,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl FrsTransferConfig {
    /// V1 configuration for one of the per-store record sets.
    pub fn legacy(store: FrsStore) -> Self {
        Self {
            version: ProtocolVersion::V1,
            store,
            ..Self::default()
        }
    }

    /// Reject combinations the wire cannot express.
    pub fn validate(&self) -> FrsResult<()> {
        if self.store.version() == self.version {
            Ok(())
        } else {
            Err(FrsError::StoreVersionMismatch {
                store: self.store,
                version: self.version,
            })
        }
    }

    /// Encode a request produced by a driver using this configuration's
    /// version and destination.
    pub fn encode(&self, message: &Message, out: &mut [u8]) -> FrsResult<usize> {
        Ok(message.encode(out, self.destination, self.version)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_unified_v2() -> Result<(), Box<dyn std::error::Error>> {
        let config = FrsTransferConfig::default();
        config.validate()?;
        assert_eq!(config.store, FrsStore::Unified);
        assert_eq!(config.destination, address::DONGLE);
        Ok(())
    }

    #[test]
    fn test_store_version_mismatch() {
        let config = FrsTransferConfig {
            store: FrsStore::Loop,
            ..FrsTransferConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(FrsError::StoreVersionMismatch {
                store: FrsStore::Loop,
                version: ProtocolVersion::V2
            })
        );
        assert!(FrsTransferConfig::legacy(FrsStore::Loop).validate().is_ok());
    }

    #[test]
    fn test_encode_uses_destination() -> Result<(), Box<dyn std::error::Error>> {
        let config = FrsTransferConfig {
            destination: address::LOOP,
            ..FrsTransferConfig::default()
        };
        let mut out = [0u8; 16];
        let n = config.encode(&config.store.write_request(0x0101, 0), &mut out)?;
        assert_eq!(out[..n], [0x02, 0x0A, 0x02, 0x00, 43, 0x00, 0x00, 0x00, 0x01, 0x01]);
        Ok(())
    }
}
