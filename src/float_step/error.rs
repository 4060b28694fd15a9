use thiserror::Error;

/// Errors raised when configuring a fractional step.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StepError {
    /// Step is zero, NaN or infinite; distances would not be defined.
    #[error("step must be finite and non-zero, got {0}")]
    InvalidStep(f32),
}

/// Reject steps that would break `difference`.
pub(crate) fn validate_step(step: f32) -> Result<f32, StepError> {
    if step == 0.0 || !step.is_finite() {
        tracing::warn!(step, "rejected fractional step");
        return Err(StepError::InvalidStep(step));
    }
    Ok(step)
}
