//! Generating iteration
//!
//! Values come from a zero-argument producer instead of storage. Each
//! logical step calls the producer once, so producers with side effects (a
//! counter, a random source, a reader) see exactly one call per step.
//!
//! ```rust
//! use strider::generator;
//!
//! let mut next = 0;
//! let mut it = generator(move || {
//!     next += 1;
//!     next
//! });
//! it.increment();
//! assert_eq!(*it.get(), 1);
//! assert_eq!(it.take(3).collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

use std::fmt;

use crate::adaptor::{InputTag, IteratorAdaptor, Primitive, PrimitiveMut};

/// Primitive holding a producer and the value it returned last.
#[derive(Clone)]
pub struct Generate<F, T> {
    producer: F,
    value: T,
}

impl<F, T> Generate<F, T>
where
    F: FnMut() -> T,
{
    /// Primitive whose value is `T::default()` until the first advance.
    pub fn new(producer: F) -> Self
    where
        T: Default,
    {
        Self::with_initial(producer, T::default())
    }

    /// Primitive whose value is `initial` until the first advance.
    pub fn with_initial(producer: F, initial: T) -> Self {
        Self {
            producer,
            value: initial,
        }
    }

    /// Most recently produced value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the current value, dropping the producer.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<F, T> Primitive for Generate<F, T>
where
    F: FnMut() -> T,
{
    type Value = T;
    type Category = InputTag;

    /// Call the producer `n` times and keep the last result.
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`; a producer cannot be rewound.
    fn advance(&mut self, n: isize) {
        assert!(n > 0, "generating iterators only advance forward, got {n}");
        for _ in 0..n {
            self.value = (self.producer)();
        }
    }

    #[inline]
    fn dereference(&self) -> &T {
        &self.value
    }

    /// Identity: a generating iterator only equals itself.
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<F, T> PrimitiveMut for Generate<F, T>
where
    F: FnMut() -> T,
{
    #[inline]
    fn dereference_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<F, T: fmt::Debug> fmt::Debug for Generate<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generate")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Iterator producing values on demand.
pub type GeneratingIter<F, T> = IteratorAdaptor<Generate<F, T>>;

/// Build a generating iterator from `producer`.
///
/// The producer is not called until the first advance; until then the
/// iterator reads `T::default()`.
pub fn generator<F, T>(producer: F) -> GeneratingIter<F, T>
where
    F: FnMut() -> T,
    T: Default,
{
    IteratorAdaptor::new(Generate::new(producer))
}

/// Never ends: each call advances once and yields a copy of the new value.
impl<F, T> Iterator for IteratorAdaptor<Generate<F, T>>
where
    F: FnMut() -> T,
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.increment();
        Some(self.get().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
