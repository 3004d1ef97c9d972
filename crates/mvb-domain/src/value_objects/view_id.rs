//! View identity
//!
//! Views are identified by reference, not by value. A `ViewId` is the address
//! of the shared allocation behind a [`ViewRef`]; two clones of the same `Arc`
//! share an id, two distinct views never do while both are alive.

use std::fmt;
use std::sync::Arc;

use crate::ports::view::ViewRef;

/// Reference identity of a live view
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

impl ViewId {
    /// Identity of the given view
    pub fn of(view: &ViewRef) -> Self {
        Self(Arc::as_ptr(view).cast::<()>() as usize)
    }

    /// Raw address value, for diagnostics only
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({:#x})", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
