use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{
    AtLeastBidirectional, AtLeastRandomAccess, Category, Primitive, PrimitiveMut,
    RandomAccessPrimitive,
};

/// Iterator synthesized from a [`Primitive`].
///
/// Every operator forwards to the wrapped primitive; the primitive's declared
/// category decides which operators exist. Copying the adaptor copies the
/// primitive and nothing else.
///
/// # Examples
///
/// ```rust
/// use strider::float_step;
///
/// let samples = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let mut it = float_step(strider::SliceCursor::new(&samples), Some(2.5)).unwrap();
/// assert_eq!(*it.get(), 0);
/// it.increment();
/// assert_eq!(*it.get(), 2);
/// assert_eq!(it.error(), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IteratorAdaptor<P> {
    inner: P,
}

impl<P: Primitive> IteratorAdaptor<P> {
    /// Wrap a primitive.
    #[inline]
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Category resolved from the wrapped primitive.
    #[inline]
    pub fn category(&self) -> Category {
        Category::of::<P>()
    }

    /// Shared access to the wrapped primitive.
    #[inline]
    pub fn primitive(&self) -> &P {
        &self.inner
    }

    /// Mutable access to the wrapped primitive.
    #[inline]
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.inner
    }

    /// Unwrap the primitive.
    #[inline]
    pub fn into_primitive(self) -> P {
        self.inner
    }

    /// Step forward once (pre-increment).
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.inner.advance(1);
        self
    }

    /// Step forward once, returning a copy taken before the step.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        P: Clone,
    {
        let old = self.clone();
        self.inner.advance(1);
        old
    }

    /// Value at the current position.
    #[inline]
    pub fn get(&self) -> &P::Value {
        self.inner.dereference()
    }

    /// Mutable value at the current position.
    #[inline]
    pub fn get_mut(&mut self) -> &mut P::Value
    where
        P: PrimitiveMut,
    {
        self.inner.dereference_mut()
    }

    /// Yield values until this iterator compares equal to `end`.
    ///
    /// `end` must be reachable by single increments, otherwise the walk never
    /// stops.
    pub fn walk_to(self, end: Self) -> WalkTo<P> {
        WalkTo { current: self, end }
    }
}

impl<P> IteratorAdaptor<P>
where
    P: Primitive,
    P::Category: AtLeastBidirectional,
{
    /// Step backward once (pre-decrement).
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.inner.advance(-1);
        self
    }

    /// Step backward once, returning a copy taken before the step.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        P: Clone,
    {
        let old = self.clone();
        self.inner.advance(-1);
        old
    }
}

impl<P> IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    /// Signed step distance from `origin` to `self`; same as `self - origin`.
    #[inline]
    pub fn distance(&self, origin: &Self) -> isize {
        self.inner.difference(&origin.inner)
    }

    /// Value `n` steps away, leaving `self` untouched.
    #[inline]
    pub fn at(&self, n: isize) -> P::Value
    where
        P: Clone,
        P::Value: Clone,
    {
        self.with_at(n, |value| value.clone())
    }

    /// Borrow the value `n` steps away for the duration of `f`.
    #[inline]
    pub fn with_at<R>(&self, n: isize, f: impl FnOnce(&P::Value) -> R) -> R
    where
        P: Clone,
    {
        let shifted = self + n;
        f(shifted.get())
    }

    /// Yield values while this iterator orders before `end`.
    ///
    /// Unlike [`walk_to`](Self::walk_to) this terminates even when `end` is
    /// not exactly reachable, e.g. after the step size of a fractional-step
    /// iterator changed.
    pub fn walk_until(self, end: Self) -> WalkUntil<P> {
        WalkUntil { current: self, end }
    }
}

impl<P: Primitive> PartialEq for IteratorAdaptor<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.equal(&other.inner)
    }
}

/// The strict and non-strict comparisons follow the sign of `difference`
/// alone. `partial_cmp` only reports `Equal` for iterators that also compare
/// equal, so positions that differ by less than one step are unordered.
impl<P> PartialOrd for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance(other).cmp(&0) {
            Ordering::Equal if !self.inner.equal(&other.inner) => None,
            ord => Some(ord),
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.distance(other) < 0
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.distance(other) <= 0
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.distance(other) > 0
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.distance(other) >= 0
    }
}

impl<P> Add<isize> for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self.inner.advance(n);
        self
    }
}

impl<P> Add<isize> for &IteratorAdaptor<P>
where
    P: RandomAccessPrimitive + Clone,
    P::Category: AtLeastRandomAccess,
{
    type Output = IteratorAdaptor<P>;

    #[inline]
    fn add(self, n: isize) -> IteratorAdaptor<P> {
        self.clone() + n
    }
}

impl<P> Sub<isize> for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self.inner.advance(-n);
        self
    }
}

impl<P> Sub<isize> for &IteratorAdaptor<P>
where
    P: RandomAccessPrimitive + Clone,
    P::Category: AtLeastRandomAccess,
{
    type Output = IteratorAdaptor<P>;

    #[inline]
    fn sub(self, n: isize) -> IteratorAdaptor<P> {
        self.clone() - n
    }
}

impl<P> Sub for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

impl<'a, P> Sub<&'a IteratorAdaptor<P>> for &'a IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    type Output = isize;

    #[inline]
    fn sub(self, origin: &'a IteratorAdaptor<P>) -> isize {
        self.distance(origin)
    }
}

impl<P> AddAssign<isize> for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.inner.advance(n);
    }
}

impl<P> SubAssign<isize> for IteratorAdaptor<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
{
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.inner.advance(-n);
    }
}

/// Iterator returned by [`IteratorAdaptor::walk_to`].
#[derive(Debug, Clone)]
pub struct WalkTo<P> {
    current: IteratorAdaptor<P>,
    end: IteratorAdaptor<P>,
}

impl<P> Iterator for WalkTo<P>
where
    P: Primitive,
    P::Value: Clone,
{
    type Item = P::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.end {
            return None;
        }
        let value = self.current.get().clone();
        self.current.increment();
        Some(value)
    }
}

impl<P> std::iter::FusedIterator for WalkTo<P>
where
    P: Primitive,
    P::Value: Clone,
{
}

/// Iterator returned by [`IteratorAdaptor::walk_until`].
#[derive(Debug, Clone)]
pub struct WalkUntil<P> {
    current: IteratorAdaptor<P>,
    end: IteratorAdaptor<P>,
}

impl<P> WalkUntil<P> {
    /// Position the walk will read next.
    pub fn position(&self) -> &IteratorAdaptor<P> {
        &self.current
    }
}

impl<P> Iterator for WalkUntil<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
    P::Value: Clone,
{
    type Item = P::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.distance(&self.end) >= 0 {
            return None;
        }
        let value = self.current.get().clone();
        self.current.increment();
        Some(value)
    }
}

impl<P> std::iter::FusedIterator for WalkUntil<P>
where
    P: RandomAccessPrimitive,
    P::Category: AtLeastRandomAccess,
    P::Value: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptor::{BidirectionalTag, ForwardTag, RandomAccessTag};
    use std::cell::Cell;

    /// Counts how often each primitive method is reached.
    #[derive(Debug, Clone, Default)]
    struct Probe {
        pos: isize,
        advances: Vec<isize>,
        equal_calls: Cell<usize>,
    }

    impl Primitive for Probe {
        type Value = isize;
        type Category = RandomAccessTag;

        fn advance(&mut self, n: isize) {
            self.advances.push(n);
            self.pos += n;
        }

        fn dereference(&self) -> &isize {
            &self.pos
        }

        fn equal(&self, other: &Self) -> bool {
            self.equal_calls.set(self.equal_calls.get() + 1);
            self.pos == other.pos
        }
    }

    impl PrimitiveMut for Probe {
        fn dereference_mut(&mut self) -> &mut isize {
            &mut self.pos
        }
    }

    impl RandomAccessPrimitive for Probe {
        fn difference(&self, other: &Self) -> isize {
            self.pos - other.pos
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Countdown(u32);

    impl Primitive for Countdown {
        type Value = u32;
        type Category = ForwardTag;

        fn advance(&mut self, n: isize) {
            self.0 -= n as u32;
        }

        fn dereference(&self) -> &u32 {
            &self.0
        }

        fn equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Pendulum(i32);

    impl Primitive for Pendulum {
        type Value = i32;
        type Category = BidirectionalTag;

        fn advance(&mut self, n: isize) {
            self.0 += n as i32;
        }

        fn dereference(&self) -> &i32 {
            &self.0
        }

        fn equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    fn test_increment_forwards_single_advance() {
        let mut it = IteratorAdaptor::new(Probe::default());
        it.increment().increment();
        assert_eq!(it.primitive().advances, vec![1, 1]);
        assert_eq!(*it.get(), 2);
    }

    #[test]
    fn test_post_increment_returns_old_copy() {
        let mut it = IteratorAdaptor::new(Probe::default());
        let old = it.post_increment();
        assert_eq!(*old.get(), 0);
        assert_eq!(*it.get(), 1);
        assert!(old.primitive().advances.is_empty());
    }

    #[test]
    fn test_decrement_forwards_negative_advance() {
        let mut it = IteratorAdaptor::new(Pendulum(3));
        let old = it.post_decrement();
        it.decrement();
        assert_eq!(*old.get(), 3);
        assert_eq!(*it.get(), 1);
        assert_eq!(it.category(), Category::Bidirectional);
    }

    #[test]
    fn test_equality_forwards_to_primitive() {
        let a = IteratorAdaptor::new(Probe::default());
        let b = IteratorAdaptor::new(Probe::default());
        assert!(a == b);
        assert!(!(a != b));
        assert_eq!(a.primitive().equal_calls.get(), 2);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut it = IteratorAdaptor::new(Probe::default());
        *it.get_mut() = 7;
        assert_eq!(*it.get(), 7);
    }

    #[test]
    fn test_offset_arithmetic() {
        let a = IteratorAdaptor::new(Probe::default());
        let b = &a + 5;
        let c = &b - 2;
        assert_eq!(*b.get(), 5);
        assert_eq!(*c.get(), 3);
        assert_eq!(&b - &a, 5);
        assert_eq!(a.clone() - b.clone(), -5);
        assert_eq!(b.primitive().advances, vec![5]);
        assert_eq!(c.primitive().advances, vec![5, -2]);
    }

    #[test]
    fn test_compound_assignment() {
        let mut it = IteratorAdaptor::new(Probe::default());
        it += 4;
        it -= 1;
        assert_eq!(*it.get(), 3);
        assert_eq!(it.primitive().advances, vec![4, -1]);
    }

    #[test]
    fn test_ordering_follows_difference_sign() {
        let a = IteratorAdaptor::new(Probe::default());
        let b = &a + 1;
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
        assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn test_offset_dereference_leaves_self_untouched() {
        let it = IteratorAdaptor::new(Probe::default());
        assert_eq!(it.at(3), 3);
        assert_eq!(it.with_at(-2, |v| *v * 10), -20);
        assert_eq!(*it.get(), 0);
    }

    #[test]
    fn test_walk_to_stops_at_end() {
        let start = IteratorAdaptor::new(Countdown(3));
        let end = IteratorAdaptor::new(Countdown(0));
        assert_eq!(start.walk_to(end).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_walk_until_stops_before_end() {
        let start = IteratorAdaptor::new(Probe::default());
        let end = &start + 4;
        assert_eq!(start.walk_until(end).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
