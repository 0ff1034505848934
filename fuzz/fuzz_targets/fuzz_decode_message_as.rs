//! Fuzzes per-type decoding: the first byte picks the expected message type.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_decode_message_as
#![no_main]
use freespace_hid_protocol::{MessageType, ProtocolVersion, decode_message_as};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, report)) = data.split_first() else {
        return;
    };
    let Some(&expected) = MessageType::ALL.get(usize::from(selector) % MessageType::ALL.len()) else {
        return;
    };
    let version = if selector & 0x80 == 0 { ProtocolVersion::V1 } else { ProtocolVersion::V2 };
    if let Ok(frame) = decode_message_as(report, version, expected) {
        assert_eq!(frame.message.message_type(), expected);
    }
});
