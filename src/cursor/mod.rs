//! Random-access positions wrapped by the fractional-step iterator
//!
//! A cursor is the integer-indexed thing a [`FloatStep`] moves around:
//! a slice index, a bare counter, or another random-access adaptor.
//!
//! [`FloatStep`]: crate::float_step::FloatStep

mod slice;

pub use slice::{SliceCursor, SliceCursorMut};

use crate::adaptor::{
    AtLeastRandomAccess, IteratorAdaptor, PrimitiveMut, RandomAccessPrimitive,
};

/// Integer position supporting constant-time jumps and distance.
pub trait RandomAccessCursor: PartialEq {
    /// Type read at the position.
    type Value;

    /// Jump by `n` positions (negative moves backward).
    fn offset(&mut self, n: isize);

    /// Signed distance from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;

    /// Value at the position.
    fn get(&self) -> &Self::Value;
}

/// Cursor that allows writing through the position.
pub trait CursorMut: RandomAccessCursor {
    /// Mutable value at the position.
    fn get_mut(&mut self) -> &mut Self::Value;
}

/// A bare counter: the position is its own value.
impl RandomAccessCursor for isize {
    type Value = isize;

    #[inline]
    fn offset(&mut self, n: isize) {
        *self += n;
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        self - origin
    }

    #[inline]
    fn get(&self) -> &isize {
        self
    }
}

impl<P> RandomAccessCursor for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    type Value = P::Value;

    #[inline]
    fn offset(&mut self, n: isize) {
        *self += n;
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        self.distance(origin)
    }

    #[inline]
    fn get(&self) -> &P::Value {
        IteratorAdaptor::get(self)
    }
}

impl<P> CursorMut for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive + PrimitiveMut,
    P::Category: AtLeastRandomAccess,
{
    #[inline]
    fn get_mut(&mut self) -> &mut P::Value {
        IteratorAdaptor::get_mut(self)
    }
}
