#![forbid(unsafe_code)]

//! Session: the work tab's coordinator.
//!
//! Owns one [`Surface`] per subject, one [`CategoryHeader`] per catalog
//! category, the [`DragSlot`] and the configuration. The host calls
//! [`Session::process_event`] and [`Session::draw`] once per frame with a
//! [`SessionLayout`] describing where the header strip and each row sit.
//!
//! # Dispatch order
//!
//! 1. Headers, unless a drag is active (hover on repaint, click on press).
//! 2. Every surface with a row in the layout. While dragging, only the
//!    owner reacts.
//! 3. A release that left the drag active means the owner had no row; the
//!    drag is cancelled so the slot never stays held.
//!
//! Drawing goes headers, surfaces, then the dragged item so it renders on
//! top of every row.

use std::sync::Arc;

use worktab_core::{
    Catalog, CategoryKey, Feedback, FeedbackConfig, HeaderIntent, Painter, Point, PointerEvent,
    Rect, Subject, SubjectId, WorktabConfig,
};

use crate::ctx::EventCtx;
use crate::drag::{ActiveDrag, DragSlot};
use crate::header::{CategoryHeader, HeaderOutcome};
use crate::notify::Notifier;
use crate::surface::{Surface, SurfaceOutcome};

/// Screen placement of the header strip and the surface rows for a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionLayout {
    pub header_strip: Rect,
    pub rows: Vec<(SubjectId, Rect)>,
}

impl SessionLayout {
    #[must_use]
    pub fn new(header_strip: Rect) -> Self {
        Self {
            header_strip,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_row(mut self, subject: SubjectId, area: Rect) -> Self {
        self.rows.push((subject, area));
        self
    }

    /// Header strip at `origin`, then one row per subject stacked below it,
    /// all `width` wide and `row_height` tall.
    #[must_use]
    pub fn stacked(
        origin: Point,
        width: f32,
        row_height: f32,
        subjects: impl IntoIterator<Item = SubjectId>,
    ) -> Self {
        let mut layout = Self::new(Rect::new(origin.x, origin.y, width, row_height));
        let mut y = origin.y + row_height;
        for subject in subjects {
            layout.rows.push((subject, Rect::new(origin.x, y, width, row_height)));
            y += row_height;
        }
        layout
    }

    /// Row area of `subject`, if it is on screen.
    #[must_use]
    pub fn row(&self, subject: SubjectId) -> Option<Rect> {
        self.rows
            .iter()
            .find(|(id, _)| *id == subject)
            .map(|(_, area)| *area)
    }
}

/// Something that happened while dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    HeaderHovered(CategoryKey),
    HeaderClicked {
        key: CategoryKey,
        outcome: HeaderOutcome,
    },
    Surface {
        subject: SubjectId,
        outcome: SurfaceOutcome,
    },
    /// A drag was dropped without landing on its surface's row.
    DragCancelled(ActiveDrag),
}

/// Coordinator for every surface and header of the tab.
#[derive(Debug)]
pub struct Session<S> {
    catalog: Arc<Catalog>,
    config: WorktabConfig,
    headers: Vec<CategoryHeader>,
    surfaces: Vec<Surface<S>>,
    drag: DragSlot,
}

impl<S: Subject> Session<S> {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: WorktabConfig) -> Self {
        let headers = catalog.iter().map(CategoryHeader::new).collect();
        Self {
            catalog,
            config,
            headers,
            surfaces: Vec::new(),
            drag: DragSlot::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> WorktabConfig {
        self.config
    }

    /// Change the sound/message toggles. Takes effect on the next event.
    pub fn set_feedback(&mut self, feedback: FeedbackConfig) {
        self.config.feedback = feedback;
    }

    #[must_use]
    pub fn headers(&self) -> &[CategoryHeader] {
        &self.headers
    }

    #[must_use]
    pub fn surfaces(&self) -> &[Surface<S>] {
        &self.surfaces
    }

    #[must_use]
    pub fn drag(&self) -> &DragSlot {
        &self.drag
    }

    // -----------------------------------------------------------------------
    // Surfaces
    // -----------------------------------------------------------------------

    /// Surface of `subject`, created on first use.
    ///
    /// An existing surface keeps its own subject; the one passed in is
    /// dropped.
    pub fn surface_for(&mut self, subject: S) -> &mut Surface<S> {
        let id = subject.id();
        let index = match self.surfaces.iter().position(|s| s.id() == id) {
            Some(index) => index,
            None => {
                tracing::debug!(target: "worktab.session", subject = id.0, "surface added");
                self.surfaces
                    .push(Surface::new(subject, Arc::clone(&self.catalog), self.config.layout));
                self.surfaces.len() - 1
            }
        };
        &mut self.surfaces[index]
    }

    /// Attach an already built surface, replacing any with the same subject.
    pub(crate) fn insert_surface(&mut self, surface: Surface<S>) {
        match self.surfaces.iter().position(|s| s.id() == surface.id()) {
            Some(index) => self.surfaces[index] = surface,
            None => self.surfaces.push(surface),
        }
    }

    #[must_use]
    pub fn surface(&self, id: SubjectId) -> Option<&Surface<S>> {
        self.surfaces.iter().find(|s| s.id() == id)
    }

    pub fn surface_mut(&mut self, id: SubjectId) -> Option<&mut Surface<S>> {
        self.surfaces.iter_mut().find(|s| s.id() == id)
    }

    /// Remove a subject that left the session. A drag it owned is
    /// cancelled.
    pub fn remove_surface(&mut self, id: SubjectId) -> Option<Surface<S>> {
        if self.drag.is_held_by(id) {
            self.cancel_drag();
        }
        let index = self.surfaces.iter().position(|s| s.id() == id)?;
        tracing::debug!(target: "worktab.session", subject = id.0, "surface removed");
        Some(self.surfaces.remove(index))
    }

    // -----------------------------------------------------------------------
    // Frame
    // -----------------------------------------------------------------------

    /// Slot rect of header `index` inside `strip`, aligned with the surface
    /// slots below it.
    #[must_use]
    pub fn header_rect(&self, strip: Rect, index: usize) -> Rect {
        let layout = self.config.layout;
        let center = Point::new(
            strip.x + layout.leading_offset() + index as f32 * layout.slot_stride(),
            strip.center().y,
        );
        Rect::centered_square(center, layout.icon_diameter)
    }

    /// Dispatch one pointer event to headers and surfaces.
    ///
    /// Only events that did something are returned.
    pub fn process_event(
        &mut self,
        event: &PointerEvent,
        layout: &SessionLayout,
        painter: &mut dyn Painter,
        feedback: &mut dyn Feedback,
    ) -> Vec<SessionEvent> {
        let _span = tracing::trace_span!(
            target: "worktab.session",
            "session.dispatch",
            kind = ?event.kind,
            dragging = self.drag.is_active()
        )
        .entered();

        let mut events = Vec::new();
        let mut notifier = Notifier::new(self.config.feedback, feedback);

        if !self.drag.is_active() {
            let hit = (0..self.headers.len())
                .map(|index| self.header_rect(layout.header_strip, index))
                .position(|rect| rect.contains(event.position));
            if let Some(index) = hit {
                let rect = self.header_rect(layout.header_strip, index);
                let header = &mut self.headers[index];
                if event.is_repaint() {
                    header.on_hover(&mut *painter, rect);
                    events.push(SessionEvent::HeaderHovered(header.key().clone()));
                } else if let Some(intent) = HeaderIntent::from_event(event) {
                    let outcome = header.on_clicked(intent, &mut self.surfaces, &mut notifier);
                    events.push(SessionEvent::HeaderClicked {
                        key: header.key().clone(),
                        outcome,
                    });
                }
            }
        }

        let mut ctx = EventCtx::new(&mut self.drag, painter, notifier);
        for surface in &mut self.surfaces {
            let Some(area) = layout.row(surface.id()) else {
                continue;
            };
            let outcome = surface.process_event(area, event, &mut ctx);
            if outcome != SurfaceOutcome::Ignored {
                events.push(SessionEvent::Surface {
                    subject: surface.id(),
                    outcome,
                });
            }
        }

        if event.is_release()
            && let Some(drag) = self.cancel_drag()
        {
            events.push(SessionEvent::DragCancelled(drag));
        }
        events
    }

    /// Draw headers, surfaces, then the dragged item.
    pub fn draw(&mut self, layout: &SessionLayout, painter: &mut dyn Painter) {
        for (index, header) in self.headers.iter().enumerate() {
            header.draw(&mut *painter, self.header_rect(layout.header_strip, index));
        }
        for surface in &mut self.surfaces {
            if let Some(area) = layout.row(surface.id()) {
                surface.draw(area, &mut *painter);
            }
        }
        if let Some(drag) = self.drag.active()
            && let Some(surface) = self.surfaces.iter_mut().find(|s| s.id() == drag.owner)
        {
            surface.draw_dragged(painter);
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Apply a header action without a pointer event.
    pub fn click_header(
        &mut self,
        key: &CategoryKey,
        intent: HeaderIntent,
        feedback: &mut dyn Feedback,
    ) -> Option<HeaderOutcome> {
        let header = self.headers.iter_mut().find(|h| h.key() == key)?;
        let mut notifier = Notifier::new(self.config.feedback, feedback);
        Some(header.on_clicked(intent, &mut self.surfaces, &mut notifier))
    }

    /// End the active drag without dropping, leaving order untouched.
    pub fn cancel_drag(&mut self) -> Option<ActiveDrag> {
        let drag = self.drag.take()?;
        if let Some(surface) = self.surfaces.iter_mut().find(|s| s.id() == drag.owner) {
            surface.abandon_drag(&drag.key);
        }
        tracing::debug!(
            target: "worktab.session",
            owner = drag.owner.0,
            key = %drag.key,
            "drag cancelled"
        );
        Some(drag)
    }

    /// Cancel any drag, then reset every surface.
    pub fn reset_all_to_default(&mut self) {
        self.cancel_drag();
        for surface in &mut self.surfaces {
            surface.reset_to_default();
        }
        tracing::debug!(
            target: "worktab.session",
            surfaces = self.surfaces.len(),
            "all surfaces reset"
        );
    }

    /// Cancel any drag, then disable every item on every surface.
    pub fn disable_all(&mut self) {
        self.cancel_drag();
        for surface in &mut self.surfaces {
            surface.disable_all();
        }
        tracing::debug!(
            target: "worktab.session",
            surfaces = self.surfaces.len(),
            "all work disabled on all surfaces"
        );
    }

    pub fn recache_outlines(&mut self) {
        for surface in &mut self.surfaces {
            surface.recache_outlines();
        }
    }
}
