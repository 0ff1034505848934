//! Routing addresses and HID report IDs used by Freespace devices.
//!
//! V1 routes messages by HID report ID; the two generic reports (`7` out,
//! `8` in) additionally carry a sub-message ID in byte 1. V2 routes with a
//! destination/source address pair in the header.

/// V2 header addresses.
pub mod address {
    /// The host computer. Every encoder writes this as the source.
    pub const HOST: u8 = 0x00;
    /// The USB RF dongle.
    pub const DONGLE: u8 = 0x01;
    /// The handheld loop (remote) reached through the dongle.
    pub const LOOP: u8 = 0x02;
}

/// V1 HID report IDs.
pub mod report_ids {
    pub const COPROCESSOR_OUT: u8 = 0x05;
    pub const COPROCESSOR_IN: u8 = 0x06;
    /// Host-to-device report multiplexed by sub-message ID.
    pub const GENERIC_OUT: u8 = 0x07;
    /// Device-to-host report multiplexed by sub-message ID.
    pub const GENERIC_IN: u8 = 0x08;
    pub const BATTERY_LEVEL_REQUEST: u8 = 0x09;
    pub const BATTERY_LEVEL: u8 = 0x0A;
    pub const BODY_FRAME: u8 = 0x20;
    pub const USER_FRAME: u8 = 0x21;
    pub const DATA_MOTION_CONTROL: u8 = 0x22;

    /// True when `report_id` is followed by a sub-message ID byte.
    pub const fn has_sub_id(report_id: u8) -> bool {
        matches!(report_id, GENERIC_OUT | GENERIC_IN)
    }
}

/// First byte of every V2 report.
pub const V2_VERSION_BYTE: u8 = 0x02;
