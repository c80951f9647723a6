//! `Identity` — reference equality for run detection.
//!
//! Two appended values belong to the same run only when they are the *same*
//! value, not merely equal ones. Pointer-like types compare addresses;
//! `Id<T>` marks keys whose value already is their identity (object ids,
//! handles, interned symbols).
//!
//! Types with a null form report it through [`Identity::is_absent`]; such a
//! value is never stored by the buffer.

use core::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison used to decide whether a value continues a run.
pub trait Identity {
    /// Returns `true` if `self` and `other` are the same instance.
    fn is_same(&self, other: &Self) -> bool;

    /// Returns `true` if this value is the absent marker of its type.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for NonNull<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        core::ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T: ?Sized> Identity for *const T {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Identity for *mut T {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: Identity> Identity for Option<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_same(b),
            _ => false,
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Identity::is_absent)
    }
}

/// An explicit identity token.
///
/// Wraps a `Copy + Eq` key whose value is the identity of the thing it
/// names, so value equality of the key is identity equality of the referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Id<T>(pub T);

impl<T> Id<T> {
    /// Returns the wrapped key.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Copy + Eq> Identity for Id<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> From<T> for Id<T> {
    #[inline]
    fn from(key: T) -> Self {
        Id(key)
    }
}
