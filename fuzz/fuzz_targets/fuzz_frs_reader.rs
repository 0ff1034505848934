//! Feeds arbitrary V2 reports to an FRS reader mid-transfer.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_frs_reader
#![no_main]
use freespace_frs::{FrsReader, FrsTransferConfig};
use freespace_hid_protocol::{ProtocolVersion, decode_message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut reader) = FrsReader::new(FrsTransferConfig::default(), 0x0001) else {
        return;
    };
    reader.start();
    for report in data.chunks(22) {
        if let Ok(frame) = decode_message(report, ProtocolVersion::V2) {
            if reader.handle(&frame.message).is_err() {
                break;
            }
        }
    }
    assert!(reader.record().len() <= usize::from(u16::MAX) + 3);
});
