//! Fuzzes generic Freespace report decoding in both wire versions.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_decode_message
#![no_main]
use freespace_hid_protocol::{MAX_REPORT_LEN, ProtocolVersion, address, decode_message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for version in ProtocolVersion::ALL {
        // Must never panic; whatever decodes must encode again.
        if let Ok(frame) = decode_message(data, version) {
            let mut out = [0u8; MAX_REPORT_LEN];
            assert!(frame.message.encode(&mut out, address::DONGLE, version).is_ok());
        }
    }
});
