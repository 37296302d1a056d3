//! Refresh notification
//!
//! After every successful mutation the store calls its refresh hook with no
//! arguments. The presentation layer then re-queries counts and snapshots.

use std::cell::Cell;
use std::rc::Rc;

/// Callback fired after the store's contents change
pub trait RefreshHook {
    fn refresh(&mut self);
}

impl<F: FnMut()> RefreshHook for F {
    fn refresh(&mut self) {
        self()
    }
}

/// A dirty flag raised by the refresh hook and cleared by the renderer
///
/// The hook runs while the store is still mutably borrowed, so a host that
/// needs to read the store re-renders after the call returns instead.
#[derive(Debug, Clone, Default)]
pub struct RefreshFlag(Rc<Cell<bool>>);

impl RefreshFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hook that raises this flag
    pub fn hook(&self) -> impl RefreshHook + 'static {
        let flag = Rc::clone(&self.0);
        move || flag.set(true)
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    /// Lower the flag, returning whether it was raised
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}
