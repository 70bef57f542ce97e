use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rusty_resample::data::writer;
use rusty_resample::{Dataset, Row};

/// Write an irregularly sampled multichannel time series for trying out the resampler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output .csv file
    #[arg(short, long, default_value = "sample_data.csv")]
    output: PathBuf,

    /// Length of the series in seconds
    #[arg(short, long, default_value_t = 10.0)]
    duration: f64,

    /// Nominal sample rate in Hz
    #[arg(short, long, default_value_t = 100.0)]
    rate: f64,

    /// Timestamp jitter as a fraction of the nominal step, in [0, 1)
    #[arg(short, long, default_value_t = 0.4)]
    jitter: f64,

    /// Number of channels after the time column
    #[arg(short, long, default_value_t = 3)]
    channels: usize,

    /// Standard deviation of the additive noise
    #[arg(short, long, default_value_t = 0.01)]
    noise: f64,

    /// Random seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.random::<f64>().max(1e-15);
    let u2 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Channel `c` is a sine of amplitude `c + 1` at `0.5 * (c + 1)` Hz.
fn signal(channel: usize, time: f64) -> f64 {
    let n = (channel + 1) as f64;
    n * (2.0 * std::f64::consts::PI * 0.5 * n * time).sin()
}

fn generate(args: &Args, rng: &mut impl Rng) -> Dataset {
    let step = 1.0 / args.rate;
    let count = (args.duration * args.rate).floor() as usize + 1;

    let rows = (0..count)
        .map(|k| {
            // |offset| < step / 2 keeps the timestamps strictly increasing.
            let offset = if k == 0 {
                0.0
            } else {
                rng.random_range(-0.5..0.5) * args.jitter * step
            };
            let time = k as f64 * step + offset;

            let mut values = Vec::with_capacity(args.channels + 1);
            values.push(time);
            for c in 0..args.channels {
                values.push(signal(c, time) + gauss(rng, 0.0, args.noise));
            }
            Row::new(values)
        })
        .collect();

    Dataset::from_rows(rows)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    ensure!(args.rate > 0.0, "rate must be positive, got {}", args.rate);
    ensure!(args.duration >= 0.0, "duration must not be negative, got {}", args.duration);
    ensure!(
        (0.0..1.0).contains(&args.jitter),
        "jitter must be in [0, 1), got {}",
        args.jitter
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let dataset = generate(&args, &mut rng);
    writer::write_file(&args.output, &dataset)?;

    println!(
        "Wrote {} rows ({} channels each) to {}",
        dataset.len(),
        args.channels,
        args.output.display()
    );
    Ok(())
}
