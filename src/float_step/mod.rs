//! Fractional-step iteration
//!
//! Walks a random-access cursor by a non-integer stride while tracking the
//! sub-unit remainder, the building block for reading sampled data at an
//! arbitrary rate ratio.
//!
//! ## Usage
//!
//! ```rust
//! use strider::{float_step, SliceCursor};
//!
//! let samples = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let first = float_step(SliceCursor::new(&samples), Some(2.5)).unwrap();
//! let last = &first + 4;
//! let picked: Vec<i32> = first.walk_until(last).collect();
//! assert_eq!(picked, vec![0, 2, 5, 7]);
//! ```

mod error;
mod step;

pub use error::StepError;
pub(crate) use error::validate_step;
pub use step::{FloatStep, DIFFERENCE_EPSILON};

use crate::adaptor::IteratorAdaptor;
use crate::cursor::RandomAccessCursor;

/// Iterator advancing a cursor by a fractional step.
pub type FloatStepIter<C> = IteratorAdaptor<FloatStep<C>>;

/// Build a fractional-step iterator at `cursor`.
///
/// A `step` of `None` means one position per step.
pub fn float_step<C: RandomAccessCursor>(
    cursor: C,
    step: Option<f32>,
) -> Result<FloatStepIter<C>, StepError> {
    let primitive = match step {
        Some(step) => FloatStep::new(cursor, step)?,
        None => FloatStep::unit(cursor),
    };
    Ok(IteratorAdaptor::new(primitive))
}

impl<C: RandomAccessCursor> IteratorAdaptor<FloatStep<C>> {
    /// Iterator at `cursor` with a step of one.
    pub fn unit(cursor: C) -> Self {
        IteratorAdaptor::new(FloatStep::unit(cursor))
    }

    /// Copy of the wrapped cursor.
    pub fn data(&self) -> C
    where
        C: Clone,
    {
        self.primitive().data()
    }

    /// Borrow the wrapped cursor.
    pub fn cursor(&self) -> &C {
        self.primitive().cursor()
    }

    /// Fractional part of the real position, in `[0, 1)`.
    pub fn error(&self) -> f32 {
        self.primitive().error()
    }

    /// Positions moved per logical step.
    pub fn step(&self) -> f32 {
        self.primitive().step()
    }

    /// Change the step size.
    ///
    /// Ends computed with `+` before the change may no longer be reachable
    /// by `increment`; compare with `<` instead of `!=`.
    pub fn set_step(&mut self, step: f32) -> Result<(), StepError> {
        self.primitive_mut().set_step(step)
    }

    /// Real-valued distance from `origin`, including the error.
    pub fn logical_offset_from(&self, origin: &C) -> f64 {
        self.primitive().logical_offset_from(origin)
    }
}
