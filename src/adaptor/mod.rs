//! Generic iterator construction from minimal stepping primitives.
//!
//! A type implementing [`Primitive`] (and optionally [`PrimitiveMut`] and
//! [`RandomAccessPrimitive`]) is turned into a full iterator by wrapping it in
//! [`IteratorAdaptor`]. The primitive's category tag gates the operators:
//! bidirectional primitives gain `decrement`, random-access primitives gain
//! `+`, `-`, `+=`, `-=`, ordering and offset reads. Dispatch is fully static.

mod category;
mod iterator;
mod primitive;

pub use category::{
    AtLeastBidirectional, AtLeastForward, AtLeastRandomAccess, BidirectionalTag, Category,
    CategoryTag, ForwardTag, InputTag, RandomAccessTag,
};
pub use iterator::{IteratorAdaptor, WalkTo, WalkUntil};
pub use primitive::{Primitive, PrimitiveMut, RandomAccessPrimitive};
