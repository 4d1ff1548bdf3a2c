#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The host translates its own input stream into [`PointerEvent`] values once
//! per frame. Every event carries the pointer position, so widgets never have
//! to query ambient input state.
//!
//! # Design Notes
//!
//! - `Repaint` is a pointer event too: the host sends one per frame so
//!   hover feedback can be drawn at the current pointer position.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

use crate::geometry::Point;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button (or primary touch).
    Primary,

    /// Right mouse button.
    Secondary,

    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Button released.
    Up(PointerButton),

    /// Pointer moved while a button is held.
    Drag(PointerButton),

    /// Pointer moved with no button held.
    Moved,

    /// Per-frame repaint pass at the current pointer position.
    Repaint,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Pointer position in screen space.
    pub position: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Shorthand for a press of `button` at `(x, y)`.
    #[must_use]
    pub const fn press(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down(button), x, y)
    }

    /// Shorthand for a release of `button` at `(x, y)`.
    #[must_use]
    pub const fn release(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up(button), x, y)
    }

    /// Shorthand for a repaint pass with the pointer at `(x, y)`.
    #[must_use]
    pub const fn repaint(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Repaint, x, y)
    }

    /// Button press phase.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down(_))
    }

    /// Button release phase.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up(_))
    }

    #[must_use]
    pub const fn is_repaint(&self) -> bool {
        matches!(self.kind, PointerEventKind::Repaint)
    }

    /// Pointer motion, with or without a held button.
    #[must_use]
    pub const fn is_motion(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Drag(_) | PointerEventKind::Moved
        )
    }

    /// The button involved, if any.
    #[must_use]
    pub const fn button(&self) -> Option<PointerButton> {
        match self.kind {
            PointerEventKind::Down(b) | PointerEventKind::Up(b) | PointerEventKind::Drag(b) => {
                Some(b)
            }
            PointerEventKind::Moved | PointerEventKind::Repaint => None,
        }
    }

    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}
