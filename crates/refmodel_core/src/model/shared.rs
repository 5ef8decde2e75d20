//! Identity primitive for reference-semantic entities.
//!
//! # Responsibility
//! - Separate "same storage" from "same field values".
//! - Provide group membership by identity.
//!
//! # Invariants
//! - `Clone` on a reference entity produces another handle, never a copy.
//! - `identity(a, b)` is true iff both handles point at one allocation.
//! - `PartialEq` on reference entities is field-wise and never implies identity.

use std::cell::RefCell;
use std::rc::Rc;

/// Reference-semantic entity backed by shared, mutable storage.
pub trait Shared: Clone {
    type State;

    /// Returns the underlying storage cell.
    fn cell(&self) -> &Rc<RefCell<Self::State>>;

    /// Returns true iff `self` and `other` are handles to the same storage.
    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self.cell(), other.cell())
    }

    /// Number of live handles to this entity.
    fn handle_count(&self) -> usize {
        Rc::strong_count(self.cell())
    }
}

/// Identity comparison, the counterpart of `===`-style reference checks.
pub fn identity<T: Shared>(a: &T, b: &T) -> bool {
    a.ptr_eq(b)
}

/// Returns true iff `member` is identity-equal to some element of `group`.
///
/// Scans the whole group; a field-wise equal but distinct instance is not a
/// member.
pub fn member_of<T: Shared>(member: &T, group: &[T]) -> bool {
    let found = group.iter().any(|candidate| candidate.ptr_eq(member));
    log::trace!(
        "event=member_of module=shared group_size={} found={}",
        group.len(),
        found
    );
    found
}
