#![forbid(unsafe_code)]

//! The single active drag.
//!
//! At most one item may be dragged at any instant across every surface. The
//! [`DragSlot`] holding it is owned by the caller that dispatches frames and
//! is threaded through every event call, so the "currently dragged item" is
//! explicit state rather than a global.
//!
//! # Invariants
//!
//! 1. [`DragSlot::try_begin`] refuses while a drag is active.
//! 2. Only the owning surface clears the slot on release; the coordinator
//!    may also clear it on cancel.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Second press while dragging | Multi-button input | Start refused, first drag continues |
//! | Release with owner off-screen | Owner row not laid out | Coordinator cancels the drag |

use worktab_core::{CategoryKey, SubjectId};

/// Handle of the dragged item: its owning surface and its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveDrag {
    pub owner: SubjectId,
    pub key: CategoryKey,
}

/// Holder of the (at most one) active drag.
#[derive(Debug, Clone, Default)]
pub struct DragSlot {
    active: Option<ActiveDrag>,
}

impl DragSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Is the active drag owned by `owner`?
    #[must_use]
    pub fn is_held_by(&self, owner: SubjectId) -> bool {
        self.active.as_ref().is_some_and(|d| d.owner == owner)
    }

    /// Start a drag. Returns `false` (and changes nothing) if one is active.
    pub fn try_begin(&mut self, drag: ActiveDrag) -> bool {
        if let Some(current) = &self.active {
            tracing::debug!(
                target: "worktab.drag",
                current_owner = current.owner.0,
                current_key = %current.key,
                refused_key = %drag.key,
                "drag start refused, another item is being dragged"
            );
            return false;
        }
        tracing::debug!(
            target: "worktab.drag",
            owner = drag.owner.0,
            key = %drag.key,
            "drag started"
        );
        self.active = Some(drag);
        true
    }

    /// Clear the slot if `owner` holds it.
    pub fn take_if_held_by(&mut self, owner: SubjectId) -> Option<ActiveDrag> {
        if self.is_held_by(owner) {
            self.active.take()
        } else {
            None
        }
    }

    /// Clear the slot unconditionally.
    pub fn take(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }
}
