#![forbid(unsafe_code)]

//! Event translation: button + modifier state to interaction intents.
//!
//! Widgets never inspect modifiers themselves. A press event is mapped here
//! to a tagged intent, and the widgets dispatch on the intent.
//!
//! | Target | Press | Intent |
//! |--------|-------|--------|
//! | header | primary + shift | [`HeaderIntent::ShiftForward`] (one slot toward rank 1) |
//! | header | secondary + shift | [`HeaderIntent::ShiftBackward`] (one slot away from rank 1) |
//! | header | any button + ctrl | [`HeaderIntent::ToggleAll`] |
//! | item | primary | [`ItemIntent::BeginDrag`] |
//! | item | primary + shift | [`ItemIntent::ToggleEnabled`] |

use crate::event::{PointerButton, PointerEvent, PointerEventKind};

/// Bulk operation requested on a category header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderIntent {
    /// Move the category one slot earlier on every surface.
    ShiftForward,
    /// Move the category one slot later on every surface.
    ShiftBackward,
    /// Flip the shared apply-all flag and force the category on or off.
    ToggleAll,
}

impl HeaderIntent {
    /// Translate a press event. Returns `None` for anything that is not a
    /// recognised header gesture.
    #[must_use]
    pub fn from_event(event: &PointerEvent) -> Option<Self> {
        let PointerEventKind::Down(button) = event.kind else {
            return None;
        };
        if event.shift() {
            return match button {
                PointerButton::Primary => Some(Self::ShiftForward),
                PointerButton::Secondary => Some(Self::ShiftBackward),
                PointerButton::Middle => None,
            };
        }
        if event.ctrl() {
            return Some(Self::ToggleAll);
        }
        None
    }

    /// Index delta applied by a shift intent.
    #[must_use]
    pub const fn shift_delta(self) -> Option<isize> {
        match self {
            Self::ShiftForward => Some(-1),
            Self::ShiftBackward => Some(1),
            Self::ToggleAll => None,
        }
    }
}

/// Interaction requested on a single draggable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemIntent {
    BeginDrag,
    ToggleEnabled,
}

impl ItemIntent {
    #[must_use]
    pub fn from_event(event: &PointerEvent) -> Option<Self> {
        match event.kind {
            PointerEventKind::Down(PointerButton::Primary) if event.shift() => {
                Some(Self::ToggleEnabled)
            }
            PointerEventKind::Down(PointerButton::Primary) if !event.ctrl() => {
                Some(Self::BeginDrag)
            }
            _ => None,
        }
    }
}
