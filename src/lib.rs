//! # Zero-overhead iterator construction
//!
//! This library synthesizes complete iterators from minimal stepping
//! primitives and ships two primitives built on that facility.
//!
//! ## Core Pieces
//!
//! 1. **Primitive contract**: `advance`, `dereference`, `equal`, and
//!    `difference` for random access ([`adaptor::Primitive`])
//! 2. **Category tags**: input, forward, bidirectional, random access; chosen
//!    per primitive type at compile time ([`adaptor::Category`])
//! 3. **Adaptor**: [`IteratorAdaptor`] exposes exactly the operators the
//!    category allows and forwards every call to the primitive
//! 4. **Fractional steps**: [`float_step`] walks a cursor by a non-integer
//!    stride while tracking the sub-unit error
//! 5. **Generation**: [`generator`] reads values from a producer closure
//!
//! ## Usage Example
//!
//! ```rust
//! use strider::{float_step, generator, SliceCursor};
//!
//! let recorded = [10, 11, 12, 13, 14, 15];
//! let mut it = float_step(SliceCursor::new(&recorded), Some(1.5)).unwrap();
//! it += 2;
//! assert_eq!(*it.get(), 13);
//! assert_eq!(it.error(), 0.0);
//!
//! let mut tick = 0u64;
//! let ticks: Vec<u64> = generator(move || { tick += 1; tick }).take(3).collect();
//! assert_eq!(ticks, vec![1, 2, 3]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod adaptor;     // Primitive contract, categories, operator surface
pub mod cursor;      // Random-access positions
pub mod float_step;  // Fractional-step primitive
pub mod generate;    // Generating primitive
pub mod resample;    // Rate conversion over slices

// Re-exports for convenience
pub use adaptor::{Category, IteratorAdaptor, Primitive, PrimitiveMut, RandomAccessPrimitive};
pub use cursor::{CursorMut, RandomAccessCursor, SliceCursor, SliceCursorMut};
pub use float_step::{float_step, FloatStep, FloatStepIter, StepError};
pub use generate::{generator, Generate, GeneratingIter};
pub use resample::{Interpolation, ResampleConfig, ResampleError};
