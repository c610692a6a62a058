//! Benchmarks for avatar header probing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use canvas_image::{detect_format, probe, validate_avatar, AvatarPolicy};

fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data
}

fn jpeg_header(width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[1, 1, 0, 0, 1, 0, 1, 0, 0]);
    data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.push(3);
    data
}

fn bench_format_detection(c: &mut Criterion) {
    let png = png_header(1080, 1080);
    let jpeg = jpeg_header(4032, 3024);

    c.bench_function("detect_png", |b| b.iter(|| detect_format(black_box(&png))));
    c.bench_function("detect_jpeg", |b| b.iter(|| detect_format(black_box(&jpeg))));
}

fn bench_probe(c: &mut Criterion) {
    let png = png_header(1080, 1080);
    let jpeg = jpeg_header(4032, 3024);
    let policy = AvatarPolicy::default();

    c.bench_function("probe_png", |b| b.iter(|| probe(black_box(&png))));
    c.bench_function("probe_jpeg", |b| b.iter(|| probe(black_box(&jpeg))));
    c.bench_function("validate_avatar", |b| {
        b.iter(|| validate_avatar(black_box(&jpeg), black_box(&policy)))
    });
}

criterion_group!(benches, bench_format_detection, bench_probe);
criterion_main!(benches);
