use criterion::{Criterion, criterion_group, criterion_main};
use freespace_hid_protocol::{
    BodyFrame, MAX_REPORT_LEN, Message, MessageType, ProtocolVersion, UserFrame, address,
    decode_message, decode_message_as,
};

fn sample_body_frame() -> Message {
    Message::from(BodyFrame {
        buttons: 0x01,
        delta_x: 3,
        delta_y: -4,
        sequence_number: 0x1234,
        linear_accel_x: 120,
        linear_accel_y: -80,
        linear_accel_z: 16384,
        angular_vel_x: -5,
        angular_vel_y: 7,
        angular_vel_z: 1,
        ..BodyFrame::default()
    })
}

fn benchmark_encode(c: &mut Criterion) {
    let frame = sample_body_frame();

    c.bench_function("encode BodyFrame v2", |b| {
        let mut out = [0u8; MAX_REPORT_LEN];
        b.iter(|| {
            std::hint::black_box(
                frame
                    .encode(&mut out, address::HOST, ProtocolVersion::V2)
                    .ok(),
            );
        });
    });

    c.bench_function("encode BodyFrame v1", |b| {
        let mut out = [0u8; MAX_REPORT_LEN];
        b.iter(|| {
            std::hint::black_box(
                frame
                    .encode(&mut out, address::HOST, ProtocolVersion::V1)
                    .ok(),
            );
        });
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let mut v2 = [0u8; MAX_REPORT_LEN];
    let v2_len = sample_body_frame()
        .encode(&mut v2, address::HOST, ProtocolVersion::V2)
        .unwrap_or(0);
    let mut v1 = [0u8; MAX_REPORT_LEN];
    let v1_len = Message::from(UserFrame::default())
        .encode(&mut v1, address::HOST, ProtocolVersion::V1)
        .unwrap_or(0);

    c.bench_function("decode_message v2 BodyFrame", |b| {
        b.iter(|| {
            std::hint::black_box(
                decode_message(std::hint::black_box(&v2[..v2_len]), ProtocolVersion::V2).ok(),
            );
        });
    });

    c.bench_function("decode_message v1 UserFrame (report-id lookup)", |b| {
        b.iter(|| {
            std::hint::black_box(
                decode_message(std::hint::black_box(&v1[..v1_len]), ProtocolVersion::V1).ok(),
            );
        });
    });

    c.bench_function("decode_message_as v1 UserFrame", |b| {
        b.iter(|| {
            std::hint::black_box(
                decode_message_as(
                    std::hint::black_box(&v1[..v1_len]),
                    ProtocolVersion::V1,
                    MessageType::UserFrame,
                )
                .ok(),
            );
        });
    });
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);
