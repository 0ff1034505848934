//! Freespace motion-controller HID protocol: framing, typed messages and
//! FRS record vocabulary.
//!
//! This crate is I/O-free and allocation-free. It turns raw HID report
//! bytes into strongly typed [`Message`]s and back, under both wire
//! versions:
//!
//! - **V1** routes by HID report ID, with a sub-message ID for the two
//!   generic reports. Reports keep their full fixed size.
//! - **V2** prefixes every report with `[2, length, destination, source,
//!   message_type]`.
//!
//! Each message is declared once in a layout table (see [`messages`]);
//! decoders and encoders for every message and version are generated from
//! it, so the two directions cannot drift apart.
//!
//! ```
//! use freespace_hid_protocol::{LedSetRequest, ProtocolVersion, address};
//!
//! let mut out = [0u8; 16];
//! let led = LedSetRequest { on_off: 1, select_led: 2 };
//! let n = led.encode(&mut out, address::DONGLE, ProtocolVersion::V2)?;
//! assert_eq!(&out[..n], &[0x02, 0x07, 0x01, 0x00, 0x04, 0x01, 0x02]);
//! # Ok::<(), freespace_hid_protocol::CodecError>(())
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod dispatch;
pub mod error;
pub mod field;
pub mod framing;
pub mod frs;
pub mod ids;
pub mod layout;
pub mod messages;
pub mod version;

pub use dispatch::{Frame, decode_message, decode_message_as, encode_message, resolve_legacy};
pub use error::{CodecError, CodecResult};
pub use framing::{Discriminant, Header, HeaderInfo, Route, decode_header, encode_header};
pub use frs::{FrsReadChunk, FrsReadStatus, FrsStore, FrsWriteAck, FrsWriteStatus};
pub use ids::{address, report_ids};
pub use layout::{MessageLayout, Slot};
pub use messages::*;
pub use version::ProtocolVersion;

/// Largest encoded size of any message in any version.
pub const MAX_REPORT_LEN: usize = 43;
