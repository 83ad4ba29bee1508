//! Debug-only reentrancy check for probing code.
//!
//! Lookups in `KeyedTable` and `LabeledGraph` call user `Eq`/`Hash`
//! implementations while walking their storage. A key whose `eq` reaches
//! back into the same structure would observe it mid-probe. In debug builds
//! the second entry panics; in release builds the check compiles away.

#[cfg(debug_assertions)]
use core::cell::Cell;
#[cfg(not(debug_assertions))]
use core::marker::PhantomData;

/// Per-instance busy flag. Public entry points start with
/// `let _busy = self.reentrancy.enter();`.
#[derive(Debug)]
pub(crate) struct ProbeCheck {
    // Cell keeps owners !Sync in debug builds; release builds carry no state.
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
}

impl ProbeCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
        }
    }

    /// Marks the owner busy until the returned guard drops.
    #[inline]
    pub(crate) fn enter(&self) -> ProbeGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "reentrancy detected: structure entered while probing"
            );
            return ProbeGuard { owner: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return ProbeGuard { _owner: PhantomData };
        }
    }
}

impl Default for ProbeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ProbeCheck {
    // A clone is a fresh, idle structure.
    fn clone(&self) -> Self {
        Self::new()
    }
}

pub(crate) struct ProbeGuard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ProbeCheck,
    #[cfg(not(debug_assertions))]
    _owner: PhantomData<&'a ()>,
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            let was_busy = self.owner.busy.replace(false);
            debug_assert!(was_busy);
        }
    }
}
