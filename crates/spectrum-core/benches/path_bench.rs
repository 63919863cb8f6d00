use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectrum_core::{CoordinateMapper, SpectrumPath};

fn bench_path_data_30_bins(c: &mut Criterion) {
    let mapper = CoordinateMapper::default();
    let mut path = SpectrumPath::new();
    path.move_to(0.0, 26.0);
    for i in 0..30 {
        let amp = (i % 8) as f64;
        path.line_to(mapper.bin_to_x(i as f64), mapper.amp_to_y(amp));
    }
    c.bench_function("path_data_30_bins", |b| {
        b.iter(|| black_box(path.to_data()));
    });
}

fn bench_map_pointer_1000(c: &mut Criterion) {
    let mapper = CoordinateMapper::default();
    c.bench_function("map_pointer_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = i as f64 / 1000.0;
                black_box(mapper.to_domain(mapper.denormalize(glam::DVec2::new(t, 1.0 - t))));
            }
        });
    });
}

criterion_group!(benches, bench_path_data_30_bins, bench_map_pointer_1000);
criterion_main!(benches);
