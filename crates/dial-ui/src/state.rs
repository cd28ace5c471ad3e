//! Observable state cells.
//!
//! A [`State`] holds a value shared between the code that updates it (usually
//! an effect) and the widgets that read it while painting. Every write that
//! actually changes a value bumps a per-thread generation counter; the
//! application repaints when the counter differs from the one it last painted.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

thread_local! {
    static GENERATION: Cell<u64> = const { Cell::new(0) };
}

/// Current state generation on this thread.
pub fn generation() -> u64 {
    GENERATION.with(|g| g.get())
}

fn bump_generation() {
    GENERATION.with(|g| g.set(g.get().wrapping_add(1)));
}

/// Shared, observable value. Cloning yields another handle to the same cell.
pub struct State<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Rc::new(RefCell::new(value)) }
    }

    /// Runs `f` with a shared borrow of the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T: PartialEq> State<T> {
    /// Stores `value`. Returns `true` (and marks the UI dirty) if it differs
    /// from the current value.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.inner.borrow_mut();
        if *slot == value {
            return false;
        }
        *slot = value;
        bump_generation();
        true
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.inner.borrow()).finish()
    }
}
