//! The closed set of Freespace messages.
//!
//! Every message is declared exactly once in the [`messages!`] table below:
//! its discriminant, its V1 report placement, its V2 payload length, and
//! for each field the slot it occupies in each version (`None` where a
//! version does not carry the field). From that single table the macro
//! generates the per-message structs with their `decode`/`encode`, the
//! [`MessageType`] enum and the [`Message`] enum with its dispatch arms, so
//! a message cannot exist in one direction only.

use core::fmt;

use crate::error::{CodecError, CodecResult};
use crate::framing;
use crate::ids::report_ids::{
    BATTERY_LEVEL, BATTERY_LEVEL_REQUEST, BODY_FRAME, COPROCESSOR_IN, COPROCESSOR_OUT,
    DATA_MOTION_CONTROL, GENERIC_IN, GENERIC_OUT, USER_FRAME,
};
use crate::layout::{self, MessageLayout, at, bit, bits, dedicated, extended, legacy};
use crate::version::ProtocolVersion;

macro_rules! messages {
    ($(
        $(#[$meta:meta])*
        $name:ident = $disc:literal {
            v1: $v1:expr,
            v2: $v2:expr,
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $field:ident: $ty:ty => [$s1:expr, $s2:expr]
                ),* $(,)?
            } $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name {
                $( $(#[$fmeta])* pub $field: $ty, )*
            }

            impl $name {
                pub const MESSAGE_TYPE: MessageType = MessageType::$name;

                pub const LAYOUT: MessageLayout = MessageLayout { v1: $v1, v2: $v2 };

                /// Exact encoded size in `version`, or `None` if unsupported there.
                pub const fn wire_size(version: ProtocolVersion) -> Option<usize> {
                    Self::LAYOUT.wire_size(version)
                }

                /// Decode from a report in `version`. Trailing bytes past the
                /// message's size are ignored.
                ///
                /// # Errors
                ///
                /// `UnsupportedInVersion`, `TooShort`, `MalformedHeader` or
                /// `TypeMismatch`, checked in that order.
                #[allow(unused_variables, reason = "payload-less messages read no fields")]
                pub fn decode(buf: &[u8], version: ProtocolVersion) -> CodecResult<Self> {
                    let payload = framing::open(buf, version, Self::MESSAGE_TYPE, &Self::LAYOUT)?;
                    Ok(Self {
                        $( $field: layout::read_field(payload, version.select([$s1, $s2]))?, )*
                    })
                }

                /// Encode into `out` addressed to `destination` and return the
                /// number of bytes written. Nothing is written on error.
                ///
                /// # Errors
                ///
                /// `UnsupportedInVersion` when the message (or a non-zero field)
                /// has no place in `version`, `ValueOutOfRange` when a packed
                /// field is too wide, `BufferTooSmall` when `out` is too short.
                #[allow(unused_variables, reason = "payload-less messages write no fields")]
                pub fn encode(
                    &self,
                    out: &mut [u8],
                    destination: u8,
                    version: ProtocolVersion,
                ) -> CodecResult<usize> {
                    if !Self::LAYOUT.supports(version) {
                        return Err(CodecError::UnsupportedInVersion {
                            message: Self::MESSAGE_TYPE,
                            version,
                        });
                    }
                    $(
                        layout::check_field(
                            &self.$field,
                            version.select([$s1, $s2]),
                            stringify!($field),
                            Self::MESSAGE_TYPE,
                            version,
                        )?;
                    )*
                    let (payload, size) =
                        framing::seal(out, destination, version, Self::MESSAGE_TYPE, &Self::LAYOUT)?;
                    $( layout::write_field(self.$field, payload, version.select([$s1, $s2]))?; )*
                    Ok(size)
                }
            }

            impl From<$name> for Message {
                fn from(message: $name) -> Self {
                    Self::$name(message)
                }
            }
        )*

        /// Discriminant of every message, stable across versions.
        ///
        /// The V2 type byte on the wire is this value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum MessageType {
            $( $name = $disc, )*
        }

        impl MessageType {
            /// All message types in discriminant order.
            pub const ALL: &'static [MessageType] = &[$( MessageType::$name, )*];

            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )*
                }
            }

            pub const fn layout(self) -> MessageLayout {
                match self {
                    $( Self::$name => $name::LAYOUT, )*
                }
            }

            pub const fn supports(self, version: ProtocolVersion) -> bool {
                self.layout().supports(version)
            }

            pub const fn wire_size(self, version: ProtocolVersion) -> Option<usize> {
                self.layout().wire_size(version)
            }

            /// Decode `buf` as this message type.
            ///
            /// # Errors
            ///
            /// As the per-message `decode`.
            pub fn decode(self, buf: &[u8], version: ProtocolVersion) -> CodecResult<Message> {
                match self {
                    $( Self::$name => $name::decode(buf, version).map(Message::$name), )*
                }
            }
        }

        impl TryFrom<u8> for MessageType {
            type Error = CodecError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $disc => Ok(Self::$name), )*
                    other => Err(CodecError::UnknownMessageType(other)),
                }
            }
        }

        /// Any Freespace message.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Message {
            $( $name($name), )*
        }

        impl Message {
            pub const fn message_type(&self) -> MessageType {
                match self {
                    $( Self::$name(_) => MessageType::$name, )*
                }
            }

            /// Encode the wrapped message. See the per-message `encode`.
            ///
            /// # Errors
            ///
            /// As the per-message `encode`.
            pub fn encode(
                &self,
                out: &mut [u8],
                destination: u8,
                version: ProtocolVersion,
            ) -> CodecResult<usize> {
                match self {
                    $( Self::$name(message) => message.encode(out, destination, version), )*
                }
            }
        }
    };
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

messages! {
    // ── Coprocessor pass-through ─────────────────────────────────────────────

    /// Raw bytes for the coprocessor behind the dongle.
    CoprocessorOutReport = 0 {
        v1: dedicated(COPROCESSOR_OUT, 15),
        v2: None,
        fields: {
            payload_length: u8 => [at(0), None],
            payload: [u8; 14] => [at(1), None],
        }
    }

    /// Raw bytes from the coprocessor.
    CoprocessorInReport = 1 {
        v1: dedicated(COPROCESSOR_IN, 15),
        v2: None,
        fields: {
            payload_length: u8 => [at(0), None],
            payload: [u8; 14] => [at(1), None],
        }
    }

    // ── Link and dongle control ──────────────────────────────────────────────

    /// Put the dongle into pairing mode.
    PairingMessage = 2 {
        v1: legacy(GENERIC_OUT, 13, 6),
        v2: extended(0),
        fields: {}
    }

    /// Ask for the device's firmware and serial identity.
    ProductIdRequest = 3 {
        v1: legacy(GENERIC_OUT, 32, 6),
        v2: extended(1),
        fields: {
            format: u8 => [None, at(0)],
        }
    }

    LedSetRequest = 4 {
        v1: legacy(GENERIC_OUT, 34, 6),
        v2: extended(2),
        fields: {
            /// 0 off, 1 on, 2 released to firmware control.
            on_off: u8 => [at(0), at(0)],
            select_led: u8 => [at(1), at(1)],
        }
    }

    LinkQualityRequest = 5 {
        v1: legacy(GENERIC_OUT, 48, 6),
        v2: extended(1),
        fields: {
            enable: u8 => [at(0), at(0)],
        }
    }

    /// Keep the loop awake regardless of motion.
    AlwaysOnRequest = 6 {
        v1: legacy(GENERIC_OUT, 49, 6),
        v2: None,
        fields: {}
    }

    /// Pin the RF link to fixed channels (test use).
    FrequencyFixRequest = 7 {
        v1: legacy(GENERIC_OUT, 50, 6),
        v2: extended(5),
        fields: {
            channel0: u8 => [at(0), at(0)],
            channel1: u8 => [at(1), at(1)],
            channel2: u8 => [at(2), at(2)],
            channel3: u8 => [at(3), at(3)],
            channel4: u8 => [at(4), at(4)],
            /// V1 only: 1 dongle, 2 loop.
            device: u8 => [at(5), None],
        }
    }

    SoftwareResetMessage = 8 {
        v1: legacy(GENERIC_OUT, 51, 6),
        v2: None,
        fields: {
            device: u8 => [at(0), None],
        }
    }

    DongleRfDisableMessage = 9 {
        v1: legacy(GENERIC_OUT, 52, 6),
        v2: extended(0),
        fields: {}
    }

    TxDisableMessage = 10 {
        v1: legacy(GENERIC_OUT, 80, 0),
        v2: extended(0),
        fields: {}
    }

    /// Keep the dongle off a band of home frequencies.
    DongleRfSuppressHomeFrequencyMessage = 11 {
        v1: legacy(GENERIC_OUT, 53, 6),
        v2: extended(2),
        fields: {
            low: u8 => [at(0), at(0)],
            high: u8 => [at(1), at(1)],
        }
    }

    // ── FRS requests, V1 per-store ───────────────────────────────────────────

    FrsLoopReadRequest = 12 {
        v1: legacy(GENERIC_OUT, 58, 6),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            frs_type: u16 => [at(2), None],
            block_size: u16 => [at(4), None],
        }
    }

    FrsLoopWriteRequest = 13 {
        v1: legacy(GENERIC_OUT, 61, 6),
        v2: None,
        fields: {
            /// Record length in words; 0 invalidates the record.
            length: u16 => [at(0), None],
            frs_type: u16 => [at(2), None],
        }
    }

    FrsLoopWriteData = 14 {
        v1: legacy(GENERIC_OUT, 63, 6),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            data: u32 => [at(2), None],
        }
    }

    FrsDongleReadRequest = 15 {
        v1: legacy(GENERIC_OUT, 59, 6),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            frs_type: u16 => [at(2), None],
            block_size: u16 => [at(4), None],
        }
    }

    FrsDongleWriteRequest = 16 {
        v1: legacy(GENERIC_OUT, 62, 6),
        v2: None,
        fields: {
            length: u16 => [at(0), None],
            frs_type: u16 => [at(2), None],
        }
    }

    FrsDongleWriteData = 17 {
        v1: legacy(GENERIC_OUT, 64, 6),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            data: u32 => [at(2), None],
        }
    }

    FrsEflashReadRequest = 18 {
        v1: legacy(GENERIC_OUT, 65, 6),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            frs_type: u16 => [at(2), None],
            block_size: u16 => [at(4), None],
        }
    }

    FrsEflashWriteRequest = 19 {
        v1: legacy(GENERIC_OUT, 66, 6),
        v2: None,
        fields: {
            length: u16 => [at(0), None],
            frs_type: u16 => [at(2), None],
        }
    }

    FrsEflashWriteData = 20 {
        v1: legacy(GENERIC_OUT, 67, 6),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            data: u32 => [at(2), None],
        }
    }

    DongleRfEnableMessage = 21 {
        v1: legacy(GENERIC_OUT, 71, 6),
        v2: extended(0),
        fields: {}
    }

    /// Select which reports the device streams.
    DataModeRequest = 22 {
        v1: legacy(GENERIC_OUT, 73, 1),
        v2: extended(1),
        fields: {
            enable_body_motion: bool => [bit(0, 0), bit(0, 0)],
            enable_user_position: bool => [bit(0, 1), bit(0, 1)],
            inhibit_power_manager: bool => [bit(0, 2), bit(0, 2)],
            enable_mouse_movement: bool => [bit(0, 3), bit(0, 3)],
            disable_freespace: bool => [bit(0, 4), bit(0, 4)],
            /// Suspend-dongle-activity flag.
            sda: bool => [bit(0, 5), bit(0, 5)],
            /// Combine body and user frames into `BodyUserFrame` (V2 only).
            aggregate: bool => [None, bit(0, 6)],
            /// Only report the current mode, change nothing.
            status: bool => [bit(0, 7), bit(0, 7)],
        }
    }

    // ── Link and dongle responses ────────────────────────────────────────────

    PairingResponse = 23 {
        v1: legacy(GENERIC_IN, 13, 25),
        v2: extended(1),
        fields: {
            pairing: bool => [bit(0, 0), bit(0, 0)],
            auto_pairing: bool => [bit(0, 1), bit(0, 1)],
            success: bool => [bit(0, 2), bit(0, 2)],
        }
    }

    /// Firmware identity. The two versions order the fields differently and
    /// V1 alone carries `swicn`, V2 alone the `startup` flag.
    ProductIdResponse = 24 {
        v1: legacy(GENERIC_IN, 32, 25),
        v2: extended(17),
        fields: {
            sw_part_number: u32 => [at(0), at(3)],
            sw_build_number: u32 => [at(4), at(7)],
            swicn: u32 => [at(8), None],
            sw_version_patch: u16 => [at(12), at(15)],
            sw_version_minor: u8 => [at(14), at(2)],
            sw_version_major: u8 => [at(15), at(1)],
            serial_number: u32 => [at(18), at(11)],
            device_class: u8 => [bits(22, 0, 7), bits(0, 0, 6)],
            startup: bool => [None, bit(0, 6)],
            /// Serial number is not valid.
            invalid_ns: bool => [bit(22, 7), bit(0, 7)],
        }
    }

    LinkStatus = 25 {
        v1: legacy(GENERIC_IN, 48, 25),
        v2: extended(4),
        fields: {
            status: u8 => [at(0), at(0)],
            mode: u8 => [at(1), at(1)],
            reset_status: u8 => [at(2), at(2)],
            tx_disabled: u8 => [None, at(3)],
        }
    }

    AlwaysOnResponse = 26 {
        v1: legacy(GENERIC_IN, 49, 25),
        v2: None,
        fields: {}
    }

    // ── FRS responses, V1 per-store ──────────────────────────────────────────

    /// Up to five words of a loop record. `status` and `data_length`
    /// share one byte (low and high nibble).
    FrsLoopReadResponse = 27 {
        v1: legacy(GENERIC_IN, 58, 25),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            data: [u32; 5] => [at(2), None],
            status: u8 => [bits(22, 0, 4), None],
            data_length: u8 => [bits(22, 4, 4), None],
            frs_type: u16 => [at(23), None],
        }
    }

    FrsLoopWriteResponse = 28 {
        v1: legacy(GENERIC_IN, 61, 25),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            status: u8 => [at(2), None],
        }
    }

    FrsDongleReadResponse = 29 {
        v1: legacy(GENERIC_IN, 59, 25),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            data: [u32; 5] => [at(2), None],
            status: u8 => [bits(22, 0, 4), None],
            data_length: u8 => [bits(22, 4, 4), None],
            frs_type: u16 => [at(23), None],
        }
    }

    FrsDongleWriteResponse = 30 {
        v1: legacy(GENERIC_IN, 62, 25),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            status: u8 => [at(2), None],
        }
    }

    FrsEflashReadResponse = 31 {
        v1: legacy(GENERIC_IN, 65, 25),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            data: [u32; 5] => [at(2), None],
            status: u8 => [bits(22, 0, 4), None],
            data_length: u8 => [bits(22, 4, 4), None],
            frs_type: u16 => [at(23), None],
        }
    }

    FrsEflashWriteResponse = 32 {
        v1: legacy(GENERIC_IN, 66, 25),
        v2: None,
        fields: {
            word_offset: u16 => [at(0), None],
            status: u8 => [at(2), None],
        }
    }

    DataModeResponse = 33 {
        v1: legacy(GENERIC_IN, 73, 1),
        v2: extended(1),
        fields: {
            enable_body_motion: bool => [bit(0, 0), bit(0, 0)],
            enable_user_position: bool => [bit(0, 1), bit(0, 1)],
            inhibit_power_manager: bool => [bit(0, 2), bit(0, 2)],
            enable_mouse_movement: bool => [bit(0, 3), bit(0, 3)],
            disable_freespace: bool => [bit(0, 4), bit(0, 4)],
            sda: bool => [bit(0, 5), bit(0, 5)],
            aggregate: bool => [None, bit(0, 6)],
        }
    }

    // ── Battery ──────────────────────────────────────────────────────────────

    BatteryLevelRequest = 34 {
        v1: dedicated(BATTERY_LEVEL_REQUEST, 1),
        v2: extended(0),
        fields: {}
    }

    BatteryLevel = 35 {
        v1: dedicated(BATTERY_LEVEL, 3),
        v2: extended(1),
        fields: {
            /// Percent, 0-100.
            battery_strength: u8 => [at(0), at(0)],
        }
    }

    // ── Motion reports ───────────────────────────────────────────────────────

    /// Raw body-frame motion: pointer deltas plus accelerometer and
    /// gyroscope samples. V1 pads two reserved bytes before the sensors.
    BodyFrame = 36 {
        v1: dedicated(BODY_FRAME, 20),
        v2: extended(18),
        fields: {
            buttons: u8 => [at(0), at(0)],
            delta_x: i8 => [at(1), at(1)],
            delta_y: i8 => [at(2), at(2)],
            delta_wheel: i8 => [at(3), at(3)],
            sequence_number: u16 => [at(4), at(4)],
            linear_accel_x: i16 => [at(8), at(6)],
            linear_accel_y: i16 => [at(10), at(8)],
            linear_accel_z: i16 => [at(12), at(10)],
            angular_vel_x: i16 => [at(14), at(12)],
            angular_vel_y: i16 => [at(16), at(14)],
            angular_vel_z: i16 => [at(18), at(16)],
        }
    }

    /// User-frame position and orientation quaternion (`a` real part,
    /// `b`, `c`, `d` imaginary).
    UserFrame = 37 {
        v1: dedicated(USER_FRAME, 22),
        v2: extended(18),
        fields: {
            buttons: u8 => [at(0), at(0)],
            delta_x: i8 => [at(1), at(1)],
            delta_y: i8 => [at(2), at(2)],
            delta_wheel: i8 => [at(3), at(3)],
            sequence_number: u16 => [at(4), at(4)],
            linear_pos_x: i16 => [at(8), at(6)],
            linear_pos_y: i16 => [at(10), at(8)],
            linear_pos_z: i16 => [at(12), at(10)],
            /// Real part of the quaternion. V2 does not carry it, so it
            /// decodes as 0 there; the application reconstructs it from `b`,
            /// `c` and `d` of the unit quaternion. A V2 zero is not a reading.
            angular_pos_a: i16 => [at(14), None],
            angular_pos_b: i16 => [at(16), at(12)],
            angular_pos_c: i16 => [at(18), at(14)],
            angular_pos_d: i16 => [at(20), at(16)],
        }
    }

    DataMotionControl = 38 {
        v1: dedicated(DATA_MOTION_CONTROL, 1),
        v2: None,
        fields: {
            enable_body_motion: bool => [bit(0, 0), None],
            enable_user_position: bool => [bit(0, 1), None],
            inhibit_power_manager: bool => [bit(0, 2), None],
            enable_mouse_movement: bool => [bit(0, 3), None],
            disable_freespace: bool => [bit(0, 4), None],
        }
    }

    // ── V2-only messages ─────────────────────────────────────────────────────

    /// Acknowledgement of one unified FRS write step.
    FrsWriteResponse = 39 {
        v1: None,
        v2: extended(3),
        fields: {
            status: u8 => [None, at(0)],
            word_offset: u16 => [None, at(1)],
        }
    }

    /// Up to three words of a unified FRS record.
    FrsReadResponse = 40 {
        v1: None,
        v2: extended(17),
        fields: {
            status: u8 => [None, bits(0, 0, 4)],
            data_length: u8 => [None, bits(0, 4, 4)],
            word_offset: u16 => [None, at(1)],
            data: [u32; 3] => [None, at(3)],
            frs_type: u16 => [None, at(15)],
        }
    }

    /// Packet-error-rate test counters.
    PerResponse = 41 {
        v1: None,
        v2: extended(17),
        fields: {
            count: u32 => [None, at(1)],
            ms_error: u32 => [None, at(5)],
            sm_error: u32 => [None, at(9)],
            fr_error: u32 => [None, at(13)],
        }
    }

    BatteryLevelRequestV2 = 42 {
        v1: None,
        v2: extended(0),
        fields: {}
    }

    FrsWriteRequest = 43 {
        v1: None,
        v2: extended(5),
        fields: {
            length: u16 => [None, at(1)],
            frs_type: u16 => [None, at(3)],
        }
    }

    FrsWriteData = 44 {
        v1: None,
        v2: extended(7),
        fields: {
            word_offset: u16 => [None, at(1)],
            data: u32 => [None, at(3)],
        }
    }

    FrsReadRequest = 45 {
        v1: None,
        v2: extended(7),
        fields: {
            read_offset: u16 => [None, at(1)],
            frs_type: u16 => [None, at(3)],
            block_size: u16 => [None, at(5)],
        }
    }

    PerRequest = 46 {
        v1: None,
        v2: extended(6),
        fields: {
            op: u8 => [None, at(0)],
            payload: [u8; 5] => [None, at(1)],
        }
    }

    /// Body and user frame in one report, sent when `aggregate` is set.
    BodyUserFrame = 47 {
        v1: None,
        v2: extended(32),
        fields: {
            buttons: u8 => [None, at(0)],
            delta_x: i8 => [None, at(1)],
            delta_y: i8 => [None, at(2)],
            delta_wheel: i8 => [None, at(3)],
            sequence_number: u16 => [None, at(4)],
            linear_accel_x: i16 => [None, at(6)],
            linear_accel_y: i16 => [None, at(8)],
            linear_accel_z: i16 => [None, at(10)],
            angular_vel_x: i16 => [None, at(12)],
            angular_vel_y: i16 => [None, at(14)],
            angular_vel_z: i16 => [None, at(16)],
            linear_pos_x: i16 => [None, at(18)],
            linear_pos_y: i16 => [None, at(20)],
            linear_pos_z: i16 => [None, at(22)],
            angular_pos_b: i16 => [None, at(24)],
            angular_pos_c: i16 => [None, at(26)],
            angular_pos_d: i16 => [None, at(28)],
            angular_pos_a: i16 => [None, at(30)],
        }
    }

    // ── Later firmware additions ─────────────────────────────────────────────

    ButtonTestModeRequest = 48 {
        v1: legacy(GENERIC_OUT, 81, 1),
        v2: extended(1),
        fields: {
            enable: u8 => [at(0), at(0)],
        }
    }

    ButtonTestModeResponse = 49 {
        v1: legacy(GENERIC_IN, 81, 3),
        v2: extended(3),
        fields: {
            status: u8 => [at(0), at(0)],
            button: u8 => [at(1), at(1)],
            press: u8 => [at(2), at(2)],
        }
    }

    ActivityClassificationNotification = 50 {
        v1: None,
        v2: extended(1),
        fields: {
            classification: u8 => [None, at(0)],
        }
    }

    DataModeControlV2Request = 51 {
        v1: None,
        v2: extended(4),
        fields: {
            mode_and_status: u8 => [None, at(0)],
            packet_select: u8 => [None, at(1)],
            format_select: u8 => [None, at(2)],
            format_flags: u8 => [None, at(3)],
        }
    }

    DataModeControlV2Response = 52 {
        v1: None,
        v2: extended(4),
        fields: {
            mode_and_status: u8 => [None, at(0)],
            packet_select: u8 => [None, at(1)],
            format_select: u8 => [None, at(2)],
            format_flags: u8 => [None, at(3)],
        }
    }

    /// Motion-engine output packet; `me_data` is format-specific and left raw.
    MotionEngineOutput = 53 {
        v1: None,
        v2: extended(38),
        fields: {
            format_select: u8 => [None, at(0)],
            format_flags: u8 => [None, at(1)],
            sequence_number: u32 => [None, at(2)],
            me_data: [u8; 32] => [None, at(6)],
        }
    }

    /// Direct calibration-engine sensor dump.
    DceOutV2 = 54 {
        v1: None,
        v2: extended(27),
        fields: {
            sample_base: u32 => [None, at(0)],
            ax: i16 => [None, at(4)],
            ay: i16 => [None, at(6)],
            az: i16 => [None, at(8)],
            rx: i16 => [None, at(10)],
            ry: i16 => [None, at(12)],
            rz: i16 => [None, at(14)],
            mx: i16 => [None, at(16)],
            my: i16 => [None, at(18)],
            mz: i16 => [None, at(20)],
            temperature: i16 => [None, at(22)],
            flags: i8 => [None, at(24)],
            buttons: u8 => [None, at(25)],
            delta_wheel: i8 => [None, at(26)],
        }
    }
}
