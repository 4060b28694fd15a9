//! The contract a type implements to be wrapped by [`IteratorAdaptor`].
//!
//! [`IteratorAdaptor`]: super::IteratorAdaptor

use super::CategoryTag;

/// Minimal stepping interface wrapped by the adaptor.
///
/// Implementations must make `advance(n)` behave exactly like `n` calls to
/// `advance(1)` (or `-n` calls to `advance(-1)` for negative `n`).
pub trait Primitive {
    /// Type produced by dereferencing.
    type Value;

    /// Declared category; selects the adaptor's operator surface.
    type Category: CategoryTag;

    /// Move the logical position by `n` steps.
    fn advance(&mut self, n: isize);

    /// Value at the current logical position.
    fn dereference(&self) -> &Self::Value;

    /// Whether both primitives denote the same logical position.
    fn equal(&self, other: &Self) -> bool;
}

/// Primitives that can hand out a unique reference to the current value.
pub trait PrimitiveMut: Primitive {
    /// Mutable access to the value at the current logical position.
    fn dereference_mut(&mut self) -> &mut Self::Value;
}

/// Primitives that can measure the distance to another instance.
pub trait RandomAccessPrimitive: Primitive {
    /// Signed number of logical steps from `other` to `self`.
    fn difference(&self, other: &Self) -> isize;
}
