//! Resampling sequential data at arbitrary rate ratios
//!
//! Reads an input slice through a [`FloatStepIter`], one output sample per
//! logical step. A step of `source_rate / target_rate` converts material
//! recorded at one rate for playback at another.
//!
//! ```rust
//! use strider::resample::{resample, ResampleConfig};
//!
//! let input: Vec<u32> = (0..10).collect();
//! let config = ResampleConfig::with_step(2.5).unwrap();
//! assert_eq!(resample(&input, &config).unwrap(), vec![0, 2, 5, 7]);
//! ```
//!
//! [`FloatStepIter`]: crate::float_step::FloatStepIter

mod config;

pub use config::{Interpolation, ResampleConfig, MAX_OUTPUT_LEN};

use thiserror::Error;

use crate::cursor::SliceCursor;
use crate::float_step::{float_step, FloatStepIter, StepError};

/// Errors that can occur while resampling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResampleError {
    /// Step rejected by the fractional-step iterator.
    #[error("invalid step: {0}")]
    Step(#[from] StepError),

    /// Sample rates must be finite and positive.
    #[error("invalid sample rates: {source_hz} Hz -> {target_hz} Hz")]
    InvalidRate {
        /// Rate the input was recorded at.
        source_hz: f32,
        /// Rate requested for the output.
        target_hz: f32,
    },

    /// Start index outside the input.
    #[error("start index {start} out of range for {len} samples")]
    StartOutOfRange {
        /// Requested start index.
        start: usize,
        /// Number of input samples.
        len: usize,
    },

    /// Nothing to resample.
    #[error("input is empty")]
    Empty,

    /// The planned output exceeds the per-run limit.
    #[error("planned {planned} output samples, limit is {limit}; raise the step or set max_output")]
    OutputTooLarge {
        /// Output length implied by the input length, start and step.
        planned: f64,
        /// Largest output a single run may produce.
        limit: usize,
    },

    /// The element type cannot be blended.
    #[error("linear interpolation requires numeric samples; use resample_f32")]
    InterpolationUnsupported,
}

/// Resample `input` by picking the sample at each integer position.
///
/// Fails with [`ResampleError::InterpolationUnsupported`] when the config asks
/// for linear interpolation; use [`resample_f32`] for that.
pub fn resample<T: Clone>(input: &[T], config: &ResampleConfig) -> Result<Vec<T>, ResampleError> {
    if config.interpolation == Interpolation::Linear {
        return Err(ResampleError::InterpolationUnsupported);
    }
    let output = run(input, config, |it| it.cursor().try_get().cloned())?;
    Ok(output)
}

/// Resample `f32` samples, honouring the configured interpolation.
pub fn resample_f32(input: &[f32], config: &ResampleConfig) -> Result<Vec<f32>, ResampleError> {
    match config.interpolation {
        Interpolation::Nearest => run(input, config, |it| it.cursor().try_get().copied()),
        Interpolation::Linear => run(input, config, |it| {
            let cursor = it.cursor();
            let here = *cursor.try_get()?;
            let next = cursor
                .index()
                .checked_add(1)
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| cursor.slice().get(i))
                .copied()
                .unwrap_or(here);
            let weight = it.error();
            Some(here + (next - here) * weight)
        }),
    }
}

/// Output reserved up front per input sample; larger runs grow on demand.
const RESERVE_FACTOR: usize = 4;

fn run<'a, T, U>(
    input: &'a [T],
    config: &ResampleConfig,
    mut read: impl FnMut(&FloatStepIter<SliceCursor<'a, T>>) -> Option<U>,
) -> Result<Vec<U>, ResampleError> {
    let count = config.expected_len(input.len())?;
    let start = SliceCursor::at(input, config.start as isize);
    let mut it = float_step(start, Some(config.step))?;

    tracing::debug!(
        input_len = input.len(),
        step = config.step,
        start = config.start,
        count,
        "resampling"
    );

    let mut output = Vec::with_capacity(count.min(input.len().saturating_mul(RESERVE_FACTOR)));
    for _ in 0..count {
        // Float drift can push the last planned read just outside the input.
        let Some(value) = read(&it) else { break };
        output.push(value);
        it.increment();
    }
    Ok(output)
}
