//! Flash Record System (FRS) vocabulary.
//!
//! FRS records are arrays of 32-bit words addressed by a record type. V1
//! talks to each store (loop, dongle, eFlash) through its own trio of
//! request messages; V2 has one unified set. Responses carry a raw status
//! code whose meaning depends on direction, so the messages keep the raw
//! `u8` and [`FrsReadStatus`] / [`FrsWriteStatus`] interpret it.

use crate::messages::{
    FrsDongleReadRequest, FrsDongleReadResponse, FrsDongleWriteData, FrsDongleWriteRequest,
    FrsDongleWriteResponse, FrsEflashReadRequest, FrsEflashReadResponse, FrsEflashWriteData,
    FrsEflashWriteRequest, FrsEflashWriteResponse, FrsLoopReadRequest, FrsLoopReadResponse,
    FrsLoopWriteData, FrsLoopWriteRequest, FrsLoopWriteResponse, FrsReadRequest,
    FrsReadResponse, FrsWriteData, FrsWriteRequest, FrsWriteResponse, Message,
};
use crate::version::ProtocolVersion;

/// Which flash store a transfer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrsStore {
    /// Loop (handheld) flash, V1.
    Loop,
    /// Dongle flash, V1.
    Dongle,
    /// Dongle eFlash, V1.
    EFlash,
    /// Single V2 store addressed by header destination.
    Unified,
}

impl FrsStore {
    /// The protocol version whose messages address this store.
    pub const fn version(self) -> ProtocolVersion {
        match self {
            Self::Unified => ProtocolVersion::V2,
            Self::Loop | Self::Dongle | Self::EFlash => ProtocolVersion::V1,
        }
    }

    /// Words carried by one read response.
    pub const fn chunk_capacity(self) -> usize {
        match self {
            Self::Unified => 3,
            Self::Loop | Self::Dongle | Self::EFlash => 5,
        }
    }

    pub fn read_request(self, frs_type: u16, word_offset: u16, block_size: u16) -> Message {
        match self {
            Self::Loop => FrsLoopReadRequest {
                word_offset,
                frs_type,
                block_size,
            }
            .into(),
            Self::Dongle => FrsDongleReadRequest {
                word_offset,
                frs_type,
                block_size,
            }
            .into(),
            Self::EFlash => FrsEflashReadRequest {
                word_offset,
                frs_type,
                block_size,
            }
            .into(),
            Self::Unified => FrsReadRequest {
                read_offset: word_offset,
                frs_type,
                block_size,
            }
            .into(),
        }
    }

    /// Start a write of `length` words; a length of 0 invalidates the record.
    pub fn write_request(self, frs_type: u16, length: u16) -> Message {
        match self {
            Self::Loop => FrsLoopWriteRequest { length, frs_type }.into(),
            Self::Dongle => FrsDongleWriteRequest { length, frs_type }.into(),
            Self::EFlash => FrsEflashWriteRequest { length, frs_type }.into(),
            Self::Unified => FrsWriteRequest { length, frs_type }.into(),
        }
    }

    pub fn write_data(self, word_offset: u16, data: u32) -> Message {
        match self {
            Self::Loop => FrsLoopWriteData { word_offset, data }.into(),
            Self::Dongle => FrsDongleWriteData { word_offset, data }.into(),
            Self::EFlash => FrsEflashWriteData { word_offset, data }.into(),
            Self::Unified => FrsWriteData { word_offset, data }.into(),
        }
    }
}

/// Meaning of a read-response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrsReadStatus {
    NoError = 0,
    UnrecognizedType = 1,
    Busy = 2,
    Completed = 3,
    OffsetOutOfRange = 4,
    RecordEmpty = 5,
    BlockCompleted = 6,
    BlockAndRecordCompleted = 7,
}

impl FrsReadStatus {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::NoError,
            1 => Self::UnrecognizedType,
            2 => Self::Busy,
            3 => Self::Completed,
            4 => Self::OffsetOutOfRange,
            5 => Self::RecordEmpty,
            6 => Self::BlockCompleted,
            7 => Self::BlockAndRecordCompleted,
            _ => return None,
        })
    }

    /// The whole record has been delivered.
    pub const fn is_record_complete(self) -> bool {
        matches!(self, Self::Completed | Self::BlockAndRecordCompleted)
    }

    /// The device refused the read; no more chunks will follow.
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::UnrecognizedType | Self::OffsetOutOfRange | Self::RecordEmpty
        )
    }
}

/// Meaning of a write-response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrsWriteStatus {
    /// Word received; send the next one.
    NoError = 0,
    UnrecognizedType = 1,
    Busy = 2,
    Completed = 3,
    AlreadyWriting = 4,
    WriteFailed = 5,
    DataWhileNotWriting = 6,
    InvalidLength = 7,
    RecordValid = 8,
    RecordInvalid = 9,
}

impl FrsWriteStatus {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::NoError,
            1 => Self::UnrecognizedType,
            2 => Self::Busy,
            3 => Self::Completed,
            4 => Self::AlreadyWriting,
            5 => Self::WriteFailed,
            6 => Self::DataWhileNotWriting,
            7 => Self::InvalidLength,
            8 => Self::RecordValid,
            9 => Self::RecordInvalid,
            _ => return None,
        })
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Completed | Self::RecordValid)
    }

    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::UnrecognizedType
                | Self::AlreadyWriting
                | Self::WriteFailed
                | Self::DataWhileNotWriting
                | Self::InvalidLength
                | Self::RecordInvalid
        )
    }
}

/// Common view of the four read-response messages.
pub trait FrsReadChunk {
    fn store(&self) -> FrsStore;
    fn status(&self) -> u8;
    fn word_offset(&self) -> u16;
    /// Number of valid words in [`FrsReadChunk::data`].
    fn data_length(&self) -> u8;
    fn frs_type(&self) -> u16;
    fn data(&self) -> &[u32];

    fn read_status(&self) -> Option<FrsReadStatus> {
        FrsReadStatus::from_raw(self.status())
    }

    /// The valid prefix of the data words, clamped to the chunk capacity.
    fn words(&self) -> &[u32] {
        let data = self.data();
        data.get(..usize::from(self.data_length())).unwrap_or(data)
    }
}

/// Common view of the four write-response messages.
pub trait FrsWriteAck {
    fn store(&self) -> FrsStore;
    fn status(&self) -> u8;
    fn word_offset(&self) -> u16;

    fn write_status(&self) -> Option<FrsWriteStatus> {
        FrsWriteStatus::from_raw(self.status())
    }
}

macro_rules! impl_frs_responses {
    (read: $($read:ident => $rstore:ident),*; write: $($write:ident => $wstore:ident),*;) => {
        $(
            impl FrsReadChunk for $read {
                fn store(&self) -> FrsStore {
                    FrsStore::$rstore
                }
                fn status(&self) -> u8 {
                    self.status
                }
                fn word_offset(&self) -> u16 {
                    self.word_offset
                }
                fn data_length(&self) -> u8 {
                    self.data_length
                }
                fn frs_type(&self) -> u16 {
                    self.frs_type
                }
                fn data(&self) -> &[u32] {
                    &self.data
                }
            }
        )*
        $(
            impl FrsWriteAck for $write {
                fn store(&self) -> FrsStore {
                    FrsStore::$wstore
                }
                fn status(&self) -> u8 {
                    self.status
                }
                fn word_offset(&self) -> u16 {
                    self.word_offset
                }
            }
        )*

        impl Message {
            /// View this message as an FRS read chunk, if it is one.
            pub fn as_frs_read_chunk(&self) -> Option<&dyn FrsReadChunk> {
                match self {
                    $( Self::$read(chunk) => Some(chunk as &dyn FrsReadChunk), )*
                    _ => None,
                }
            }

            /// View this message as an FRS write acknowledgement, if it is one.
            pub fn as_frs_write_ack(&self) -> Option<&dyn FrsWriteAck> {
                match self {
                    $( Self::$write(ack) => Some(ack as &dyn FrsWriteAck), )*
                    _ => None,
                }
            }
        }
    };
}

impl_frs_responses! {
    read:
        FrsLoopReadResponse => Loop,
        FrsDongleReadResponse => Dongle,
        FrsEflashReadResponse => EFlash,
        FrsReadResponse => Unified;
    write:
        FrsLoopWriteResponse => Loop,
        FrsDongleWriteResponse => Dongle,
        FrsEflashWriteResponse => EFlash,
        FrsWriteResponse => Unified;
}
