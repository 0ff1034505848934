//! Sans-I/O drivers for Freespace Flash Record System (FRS) transfers.
//!
//! [`FrsReader`] and [`FrsWriter`] sequence the request messages of one
//! record transfer and interpret the device's responses. They never touch
//! a transport: the caller encodes what they return (see
//! [`FrsTransferConfig::encode`]), sends it, and feeds decoded replies to
//! `handle`. Timeouts and retries after [`FrsEvent::Busy`] are the
//! caller's policy.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod event;
pub mod reader;
pub mod writer;

pub use config::{DEFAULT_BLOCK_SIZE, FrsTransferConfig};
pub use error::{FrsError, FrsResult};
pub use event::{FrsEvent, TransferState};
pub use reader::FrsReader;
pub use writer::FrsWriter;
