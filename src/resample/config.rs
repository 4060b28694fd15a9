use crate::float_step::validate_step;

use super::ResampleError;

/// Upper bound on the output samples a single run may plan.
pub const MAX_OUTPUT_LEN: usize = 1 << 28;

/// How a sample is read between two input positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Sample at the integer position (floor of the real position).
    #[default]
    Nearest,
    /// Blend the integer position with its successor by the error.
    Linear,
}

/// Settings for one resampling run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleConfig {
    /// Input positions consumed per output sample.
    ///
    /// Below one upsamples, above one downsamples, negative plays backwards.
    pub step: f32,
    /// Index of the first input sample read.
    pub start: usize,
    /// Read mode between input positions.
    pub interpolation: Interpolation,
    /// Cap on the number of output samples.
    pub max_output: Option<usize>,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            start: 0,
            interpolation: Interpolation::Nearest,
            max_output: None,
        }
    }
}

impl ResampleConfig {
    /// Configuration with an explicit step.
    pub fn with_step(step: f32) -> Result<Self, ResampleError> {
        let step = validate_step(step)?;
        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// Configuration converting `source_hz` material to `target_hz`.
    pub fn from_rates(source_hz: f32, target_hz: f32) -> Result<Self, ResampleError> {
        let valid = |rate: f32| rate.is_finite() && rate > 0.0;
        if !valid(source_hz) || !valid(target_hz) {
            return Err(ResampleError::InvalidRate {
                source_hz,
                target_hz,
            });
        }
        Self::with_step(source_hz / target_hz)
    }

    /// Set the first input index.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Set the read mode.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Cap the number of output samples.
    pub fn with_max_output(mut self, max_output: usize) -> Self {
        self.max_output = Some(max_output);
        self
    }

    /// Check the configuration against an input of `input_len` samples.
    pub fn validate(&self, input_len: usize) -> Result<(), ResampleError> {
        validate_step(self.step)?;
        if input_len == 0 {
            return Err(ResampleError::Empty);
        }
        if self.start >= input_len {
            return Err(ResampleError::StartOutOfRange {
                start: self.start,
                len: input_len,
            });
        }
        Ok(())
    }

    /// Number of samples a run over `input_len` samples produces.
    ///
    /// Fails with [`ResampleError::OutputTooLarge`] when the uncapped plan
    /// exceeds [`MAX_OUTPUT_LEN`] and no smaller `max_output` is set.
    pub fn expected_len(&self, input_len: usize) -> Result<usize, ResampleError> {
        self.validate(input_len)?;
        let start = self.start as f64;
        let step = f64::from(self.step);
        let planned = if step > 0.0 {
            ((input_len as f64 - start) / step).ceil()
        } else {
            (start / -step).floor() + 1.0
        };
        let capped = match self.max_output {
            Some(cap) => planned.min(cap as f64),
            None => planned,
        };
        if !capped.is_finite() || capped > MAX_OUTPUT_LEN as f64 {
            tracing::warn!(planned, limit = MAX_OUTPUT_LEN, "resample output too large");
            return Err(ResampleError::OutputTooLarge {
                planned,
                limit: MAX_OUTPUT_LEN,
            });
        }
        Ok(capped as usize)
    }
}
