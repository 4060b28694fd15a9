use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use strider::resample::{resample_f32, Interpolation, ResampleConfig};
use strider::{float_step, generator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "strider", about = "Fractional-step resampling and generated sequences")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resample a file of numbers (one per line) at a new rate.
    Resample {
        /// Input samples; blank lines and lines starting with '#' are skipped.
        input: PathBuf,
        /// Input positions consumed per output sample.
        #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["from_rate", "to_rate"])]
        step: Option<f32>,
        /// Rate the input was recorded at.
        #[arg(long, requires = "to_rate")]
        from_rate: Option<f32>,
        /// Rate to produce.
        #[arg(long, requires = "from_rate")]
        to_rate: Option<f32>,
        /// Index of the first input sample.
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Blend neighbouring samples instead of picking the nearest lower one.
        #[arg(long)]
        linear: bool,
        /// Stop after this many output samples.
        #[arg(long)]
        max_output: Option<usize>,
    },
    /// Print the position and error of a fractional step over a counter.
    Trace {
        /// Step size.
        #[arg(long, allow_hyphen_values = true)]
        step: f32,
        /// Starting position.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        start: isize,
        /// Number of positions to print.
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Print an arithmetic ramp produced by a generating iterator.
    Ramp {
        /// First value.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
        /// Difference between consecutive values.
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        increment: f64,
        /// Number of values.
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resample {
            input,
            step,
            from_rate,
            to_rate,
            start,
            linear,
            max_output,
        } => {
            let mut config = match (step, from_rate, to_rate) {
                (Some(step), _, _) => ResampleConfig::with_step(step)?,
                (None, Some(from), Some(to)) => ResampleConfig::from_rates(from, to)?,
                _ => bail!("either --step or --from-rate with --to-rate is required"),
            };
            config = config.with_start(start);
            if linear {
                config = config.with_interpolation(Interpolation::Linear);
            }
            if let Some(cap) = max_output {
                config = config.with_max_output(cap);
            }
            run_resample(input, &config)?
        }
        Commands::Trace { step, start, count } => run_trace(step, start, count)?,
        Commands::Ramp {
            start,
            increment,
            count,
        } => run_ramp(start, increment, count)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_resample(input_path: PathBuf, config: &ResampleConfig) -> Result<()> {
    let samples = read_samples(&input_path)
        .with_context(|| format!("failed to read samples from {}", input_path.display()))?;
    let output = resample_f32(&samples, config).context("resampling failed")?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for value in output {
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_trace(step: f32, start: isize, count: usize) -> Result<()> {
    let mut it = float_step(start, Some(step)).context("invalid step")?;
    let mut out = BufWriter::new(std::io::stdout().lock());
    for _ in 0..count {
        writeln!(out, "{}\t{}", it.cursor(), it.error())?;
        it.increment();
    }
    out.flush()?;
    Ok(())
}

fn run_ramp(start: f64, increment: f64, count: usize) -> Result<()> {
    let mut next = start;
    let ramp = generator(move || {
        let value = next;
        next += increment;
        value
    });

    let mut out = BufWriter::new(std::io::stdout().lock());
    for value in ramp.take(count) {
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}

fn read_samples(path: &PathBuf) -> Result<Vec<f32>> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let value: f32 = trimmed.parse().with_context(|| {
            format!("invalid sample '{}' on line {}", trimmed, line_no + 1)
        })?;
        samples.push(value);
    }

    Ok(samples)
}
