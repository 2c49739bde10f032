use criterion::{criterion_group, criterion_main, Criterion};
use pixel_compression::prelude::*;

fn bench_load_image(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let image = random_pixel_image((256, 256), 3, &mut rng);

    c.bench_function("decompose 256x256 rgb image", |b| {
        b.iter(|| CompressionEngine::load_image(&image).unwrap())
    });
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let image = random_pixel_image((256, 256), 3, &mut rng);
    let engine = CompressionEngine::load_image(&image).unwrap();

    c.bench_function("reconstruct 256x256 rgb image at rank 20", |b| {
        b.iter(|| engine.reconstruct(20).unwrap())
    });
}

criterion_group!(benches, bench_load_image, bench_reconstruct);
criterion_main!(benches);
