//! smart-tremolo - offline tremolo over a WAV file
//!
//! Run with: cargo run -- --in input.wav --out output.wav

mod analyze;
mod app;
mod cli;
mod demo;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    app::run(cli::Args::parse())
}
