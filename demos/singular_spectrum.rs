// Plot the per channel singular value spectrum of a random image.

use pixel_compression::prelude::*;
use plotters::prelude::*;

pub fn main() {
    let mut rng = rand::thread_rng();
    let image = random_low_rank_image((256, 256), 3, 30, &mut rng);

    let engine = CompressionEngine::load_image(&image).unwrap();
    let spectra = engine.singular_values();

    let largest = spectra
        .iter()
        .map(|spectrum| spectrum[0])
        .fold(f64::NEG_INFINITY, f64::max);

    let root = BitMapBackend::new("spectrum.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(20)
        .y_label_area_size(50)
        .build_cartesian_2d(
            1..engine.max_rank(),
            (1E-12 * largest..10.0 * largest).log_scale(),
        )
        .unwrap();

    chart
        .configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|item| format!("{:.1E}", item))
        .y_desc("Singular value")
        .draw()
        .unwrap();

    let colors = [&RED, &GREEN, &BLUE];
    for (index, spectrum) in spectra.iter().enumerate() {
        let color = colors[index % colors.len()];
        chart
            .draw_series(LineSeries::new(
                spectrum
                    .iter()
                    .enumerate()
                    .map(|(component, &sigma)| (1 + component, sigma.max(1E-12 * largest))),
                color,
            ))
            .unwrap()
            .label(format!("channel {}", index))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart.configure_series_labels().draw().unwrap();

    println!("Spectrum saved to spectrum.png");
}
