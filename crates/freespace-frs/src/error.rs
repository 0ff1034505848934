//! FRS transfer errors.

use freespace_hid_protocol::{CodecError, FrsReadStatus, FrsStore, FrsWriteStatus, ProtocolVersion};

pub type FrsResult<T> = Result<T, FrsError>;

/// Why an FRS transfer could not continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrsError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The configured store is addressed by the other protocol version.
    #[error("{store:?} store cannot be reached with {version} messages")]
    StoreVersionMismatch {
        store: FrsStore,
        version: ProtocolVersion,
    },

    /// The device refused a read.
    #[error("device rejected read of record {frs_type:#06x}: {status:?}")]
    ReadRejected { frs_type: u16, status: FrsReadStatus },

    /// The device refused a write.
    #[error("device rejected write of record {frs_type:#06x}: {status:?}")]
    WriteRejected { frs_type: u16, status: FrsWriteStatus },

    /// A status code outside the FRS vocabulary.
    #[error("unknown FRS status code {0}")]
    UnknownStatus(u8),

    /// More words than a 16-bit length or offset can address.
    #[error("record of {0} words exceeds the 16-bit word range")]
    RecordTooLarge(usize),
}
