use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigcard::rendering::{bounding_box, encode, trim};
use sigcard::{DrawingSurface, PadConfig, Point, RasterSurface, Stroke};

// A default-sized canvas with a wide looping stroke, roughly what a signature looks like.
fn signature_raster() -> sigcard::Raster {
    let points = (0..120)
        .map(|i| {
            let t = i as f32 / 119.0;
            Point::new(40.0 + t * 500.0, 100.0 + (t * 18.0).sin() * 45.0)
        })
        .collect();
    let surface = RasterSurface::from_strokes(PadConfig::default(), &[Stroke::new(points)])
        .expect("failed to replay strokes");
    surface.export_raster().expect("failed to export")
}

fn bench_trim(c: &mut Criterion) {
    let raster = signature_raster();
    let blank = sigcard::Raster::new(600, 200);

    c.bench_function("bounding_box_600x200", |b| {
        b.iter(|| bounding_box(black_box(&raster)))
    });
    c.bench_function("trim_600x200", |b| b.iter(|| trim(black_box(&raster))));
    c.bench_function("trim_blank_600x200", |b| b.iter(|| trim(black_box(&blank))));
}

fn bench_encode(c: &mut Criterion) {
    let trimmed = trim(&signature_raster());
    c.bench_function("encode_trimmed_signature", |b| {
        b.iter(|| encode(black_box(&trimmed)).unwrap())
    });
}

criterion_group!(benches, bench_trim, bench_encode);
criterion_main!(benches);
