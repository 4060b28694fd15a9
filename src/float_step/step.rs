use crate::adaptor::{Primitive, PrimitiveMut, RandomAccessPrimitive, RandomAccessTag};
use crate::cursor::{CursorMut, RandomAccessCursor};

use super::error::{validate_step, StepError};

/// Smallest tolerance, in steps, within which a quotient snaps to the nearest
/// integer in [`FloatStep::difference`](RandomAccessPrimitive::difference).
///
/// The effective tolerance is the larger of this and a few f32 ulps of the
/// quotient; rounding in `step * n` grows with `n`.
pub const DIFFERENCE_EPSILON: f64 = 1e-3;

/// f32 ulps of the quotient tolerated on top of [`DIFFERENCE_EPSILON`].
const DIFFERENCE_ULPS: f64 = 4.0;

fn snap_tolerance(steps: f64) -> f64 {
    DIFFERENCE_EPSILON.max(steps.abs() * f64::from(f32::EPSILON) * DIFFERENCE_ULPS)
}

/// Primitive advancing a cursor by a non-integer amount per step.
///
/// The real-valued position is `cursor + error`, where `error` stays in
/// `[0, 1)`. Advancing by `n` lands on the same `(cursor, error)` as `n` single
/// steps, up to float rounding.
///
/// `step` can change between advances. An end position derived with
/// `advance(n)` is only guaranteed reachable by single steps while the step is
/// unchanged, so loops that mutate the step should compare with `<`.
#[derive(Debug, Clone, Copy)]
pub struct FloatStep<C> {
    cursor: C,
    step: f32,
    error: f32,
}

impl<C: RandomAccessCursor> FloatStep<C> {
    /// Wrap `cursor`, moving `step` positions per logical step.
    pub fn new(cursor: C, step: f32) -> Result<Self, StepError> {
        let step = validate_step(step)?;
        tracing::debug!(step, "created fractional-step primitive");
        Ok(Self {
            cursor,
            step,
            error: 0.0,
        })
    }

    /// Wrap `cursor` with a step of one.
    pub fn unit(cursor: C) -> Self {
        Self {
            cursor,
            step: 1.0,
            error: 0.0,
        }
    }

    /// Copy of the wrapped cursor.
    pub fn data(&self) -> C
    where
        C: Clone,
    {
        self.cursor.clone()
    }

    /// Borrow the wrapped cursor.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Fractional part of the real position, in `[0, 1)`.
    ///
    /// Constant while `step` is an integer.
    pub fn error(&self) -> f32 {
        self.error
    }

    /// Positions moved per logical step.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Change the step size; the current position is kept.
    pub fn set_step(&mut self, step: f32) -> Result<(), StepError> {
        self.step = validate_step(step)?;
        tracing::trace!(step, "changed fractional step");
        Ok(())
    }

    /// Real-valued distance from `origin`, including the error.
    pub fn logical_offset_from(&self, origin: &C) -> f64 {
        self.cursor.distance_from(origin) as f64 + f64::from(self.error)
    }
}

impl<C: RandomAccessCursor> Primitive for FloatStep<C> {
    type Value = C::Value;
    type Category = RandomAccessTag;

    fn advance(&mut self, n: isize) {
        let raw = self.error + self.step * n as f32;
        let mut whole = raw.trunc();
        let mut frac = raw - whole;
        if frac < 0.0 {
            whole -= 1.0;
            frac += 1.0;
            // -tiny + 1 rounds up to exactly one in f32
            if frac >= 1.0 {
                whole += 1.0;
                frac = 0.0;
            }
        }
        self.error = frac;
        self.cursor.offset(whole as isize);
    }

    #[inline]
    fn dereference(&self) -> &C::Value {
        self.cursor.get()
    }

    /// Ignores `step`; it does not affect the current value.
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.cursor == other.cursor && self.error == other.error
    }
}

impl<C: CursorMut> PrimitiveMut for FloatStep<C> {
    #[inline]
    fn dereference_mut(&mut self) -> &mut C::Value {
        self.cursor.get_mut()
    }
}

impl<C: RandomAccessCursor> RandomAccessPrimitive for FloatStep<C> {
    fn difference(&self, other: &Self) -> isize {
        let span = self.cursor.distance_from(&other.cursor) as f64
            + (f64::from(self.error) - f64::from(other.error));
        let steps = span / f64::from(self.step);
        let nearest = steps.round();
        if (steps - nearest).abs() <= snap_tolerance(steps) {
            nearest as isize
        } else {
            steps.trunc() as isize
        }
    }
}
