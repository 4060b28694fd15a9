#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use strider::{FloatStepIter, RandomAccessCursor};

/// Real-valued position of a counter-backed fractional-step iterator.
pub fn logical(it: &FloatStepIter<isize>) -> f64 {
    *it.cursor() as f64 + f64::from(it.error())
}

/// Wrapped index (relative to `origin`) and error of a fractional-step iterator.
pub fn state<C: RandomAccessCursor>(it: &FloatStepIter<C>, origin: &C) -> (isize, f32) {
    (it.cursor().distance_from(origin), it.error())
}

/// Producer returning 0, 1, 2, ... together with its call counter.
pub fn counting_producer() -> (impl FnMut() -> u64 + Clone, Rc<Cell<u64>>) {
    let calls = Rc::new(Cell::new(0u64));
    let shared = Rc::clone(&calls);
    let producer = move || {
        let value = shared.get();
        shared.set(value + 1);
        value
    };
    (producer, calls)
}
