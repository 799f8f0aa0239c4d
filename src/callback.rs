//! Optional hooks fired by the binder
//!
//! Instead of widgets manually writing `Option<Box<dyn Fn(..)>>`, the hook
//! type encapsulates the pattern: construct with [`SyncHook::new`], leave
//! unset with [`SyncHook::none`], fire with [`SyncHook::emit`].

use std::fmt;

use crate::units::Percent;

/// A hook invoked with the applied percentage after each display update.
///
/// Hosts use this to observe value changes without owning the element
/// handles themselves (persisting the value, driving other UI, etc.).
pub struct SyncHook {
    f: Option<Box<dyn Fn(Percent)>>,
}

impl SyncHook {
    /// Create a hook from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Percent) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty hook (no observer).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Fire the hook with the applied percentage, if set.
    pub fn emit(&self, percent: Percent) {
        if let Some(ref f) = self.f {
            f(percent);
        }
    }

    /// Check if the hook is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the hook is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl Default for SyncHook {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for SyncHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHook")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_fires_when_set() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let hook = SyncHook::new(move |p| sink.borrow_mut().push(p.value()));

        hook.emit(Percent::new(42.0));
        assert_eq!(*seen.borrow(), vec![42.0]);
    }

    #[test]
    fn emit_is_noop_when_unset() {
        let hook = SyncHook::none();
        assert!(hook.is_none());
        hook.emit(Percent::FULL); // must not panic
    }
}
