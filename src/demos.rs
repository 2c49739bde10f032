//! # Demo programs
//!
//! Small demo executables live in the `demos` subdirectory and are wired
//! up as example targets. To run them use
//! `cargo run --example <demo_filename>`.
//!
//! ### Sweeping the truncation rank of a random image.
//!
//! This demo generates a random approximately low rank image, loads it
//! into the engine and prints compression ratio and retained energy for
//! a range of truncation ranks. The corresponding code is in the file
//! `compress_random.rs`.
//!
//! ### Plotting the singular value spectrum.
//!
//! This demo decomposes a random image and renders the per channel
//! singular value spectra on a logarithmic scale. The plot is saved in
//! the file `spectrum.png`. The corresponding code is in the file
//! `singular_spectrum.rs`.
