use pixel_compression::prelude::*;

pub fn main() {
    tracing_subscriber::fmt::init();

    let mut rng = rand::thread_rng();
    let image = random_low_rank_image((512, 384), 3, 40, &mut rng);

    let engine = CompressionEngine::load_image(&image).unwrap();

    println!(
        "Loaded a {}x{} image with {} channel(s), max rank {}.",
        engine.nrows(),
        engine.ncols(),
        engine.nchannels(),
        engine.max_rank()
    );

    for &k in [1, 2, 5, 10, 20, 40, 80, engine.max_rank()].iter() {
        let ratio = engine.compression_ratio(k).unwrap();
        let energy = engine.energy_retained(k).unwrap();
        println!("k = {:4}   ratio = {:7.2}   energy = {:6.2}%", k, ratio, energy);
    }
}
