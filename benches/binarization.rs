use criterion::{Criterion, black_box, criterion_group, criterion_main};
use starfield::Polarity;
use starfield::utils::binarization::{otsu_binarize, threshold_binarize};

fn gradient(width: usize, height: usize) -> Vec<u8> {
    (0..width * height).map(|i| (i % 256) as u8).collect()
}

fn bench_threshold_binarize_small(c: &mut Criterion) {
    let gray = gradient(100, 100);
    c.bench_function("threshold_binarize_100x100", |b| {
        b.iter(|| {
            threshold_binarize(
                black_box(&gray),
                black_box(100),
                black_box(100),
                black_box(128),
                Polarity::Inverse,
            )
        })
    });
}

fn bench_threshold_binarize_large(c: &mut Criterion) {
    let gray = gradient(1920, 1080);
    c.bench_function("threshold_binarize_1920x1080", |b| {
        b.iter(|| {
            threshold_binarize(
                black_box(&gray),
                black_box(1920),
                black_box(1080),
                black_box(128),
                Polarity::Inverse,
            )
        })
    });
}

fn bench_otsu_binarize_medium(c: &mut Criterion) {
    let gray = gradient(640, 480);
    c.bench_function("otsu_binarize_640x480", |b| {
        b.iter(|| {
            otsu_binarize(
                black_box(&gray),
                black_box(640),
                black_box(480),
                Polarity::Inverse,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_threshold_binarize_small,
    bench_threshold_binarize_large,
    bench_otsu_binarize_medium
);
criterion_main!(benches);
