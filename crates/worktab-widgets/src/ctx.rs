#![forbid(unsafe_code)]

//! Per-frame collaborators handed to every event call.

use worktab_core::Painter;

use crate::drag::DragSlot;
use crate::notify::Notifier;

/// Everything an event handler may touch besides its own widget.
pub struct EventCtx<'a> {
    /// The single active drag, shared by all surfaces.
    pub drag: &'a mut DragSlot,
    /// Hover feedback is drawn during repaint events.
    pub painter: &'a mut dyn Painter,
    pub notifier: Notifier<'a>,
}

impl<'a> EventCtx<'a> {
    pub fn new(
        drag: &'a mut DragSlot,
        painter: &'a mut dyn Painter,
        notifier: Notifier<'a>,
    ) -> Self {
        Self {
            drag,
            painter,
            notifier,
        }
    }
}
