#![forbid(unsafe_code)]

//! Draggable item: one orderable, togglable category on a surface.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──press inside rect, slot free──▶ Dragging
//!     ▲                                       │
//!     └──────────── release (anywhere) ───────┘
//! ```
//!
//! While dragging, the item's position follows the pointer and the surface
//! stops laying it out. When idle, the surface snaps it to its slot every
//! draw.
//!
//! The item refers to its surface only by the owner's [`SubjectId`]. Requests
//! that change the subject (enable/disable) are returned to the surface as
//! an [`ItemAction`] instead of being called back.

use worktab_core::{
    CategoryKey, IconTone, ItemIntent, Painter, PointerEvent, Point, Rect, Rgba, SubjectId,
    Tooltip,
};

use crate::drag::{ActiveDrag, DragSlot};

/// Margin between an item's outline and its icon.
const ICON_INSET: f32 = 2.0;

/// What a press on an item asks its surface to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    /// The press was not an item gesture.
    None,
    DragStarted,
    /// Another item is already being dragged.
    DragRefused,
    /// Flip enabled/disabled through the surface.
    ToggleRequested,
}

/// One category instance on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableItem {
    key: CategoryKey,
    owner: SubjectId,
    position: Point,
    rect: Rect,
    enabled: bool,
    incapable: bool,
    dragging: bool,
    outline: Option<Rgba>,
}

impl DraggableItem {
    pub(crate) fn new(key: CategoryKey, owner: SubjectId, incapable: bool, enabled: bool) -> Self {
        Self {
            key,
            owner,
            position: Point::default(),
            rect: Rect::default(),
            enabled: enabled && !incapable,
            incapable,
            dragging: false,
            outline: None,
        }
    }

    #[must_use]
    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    /// Surface this item belongs to.
    #[must_use]
    pub fn owner(&self) -> SubjectId {
        self.owner
    }

    /// Current center: the slot center when idle, the pointer when dragging.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Hit box from the last layout pass.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switched off, by the user or by incapability.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }

    /// Permanently unavailable to the owning subject ("completely disabled").
    #[must_use]
    pub fn is_incapable(&self) -> bool {
        self.incapable
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn tone(&self) -> IconTone {
        if self.incapable {
            IconTone::Incapable
        } else if self.enabled {
            IconTone::Enabled
        } else {
            IconTone::Disabled
        }
    }

    /// Set the enabled flag. Incapable items stay disabled whatever is asked.
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled && !self.incapable;
    }

    /// Snap to a layout slot.
    pub(crate) fn seat(&mut self, center: Point, diameter: f32) {
        self.position = center;
        self.rect = Rect::centered_square(center, diameter);
    }

    /// Handle a press that landed on this item.
    pub fn on_clicked(&mut self, event: &PointerEvent, drag: &mut DragSlot) -> ItemAction {
        match ItemIntent::from_event(event) {
            Some(ItemIntent::BeginDrag) => {
                let started = drag.try_begin(ActiveDrag {
                    owner: self.owner,
                    key: self.key.clone(),
                });
                if started {
                    self.dragging = true;
                    self.position = event.position;
                    ItemAction::DragStarted
                } else {
                    ItemAction::DragRefused
                }
            }
            Some(ItemIntent::ToggleEnabled) => ItemAction::ToggleRequested,
            None => ItemAction::None,
        }
    }

    /// Follow the pointer while dragging.
    pub fn track_pointer(&mut self, pointer: Point) {
        if self.dragging {
            self.position = pointer;
        }
    }

    /// End the drag. The position stays where the pointer released it.
    pub fn on_drop(&mut self) {
        self.dragging = false;
        self.rect = Rect::centered_square(self.position, self.rect.width);
    }

    /// Highlight and register the tooltip.
    pub fn on_hover(&self, painter: &mut dyn Painter, tooltip: Tooltip) {
        painter.draw_highlight(self.rect);
        painter.tooltip(self.rect, tooltip);
    }

    /// Draw outline and icon into `rect`. `outline` computes the outline
    /// colour when the cache is empty.
    pub fn draw(
        &mut self,
        painter: &mut dyn Painter,
        rect: Rect,
        outline: impl FnOnce(&CategoryKey) -> Rgba,
    ) {
        let color = if self.incapable {
            Rgba::INCAPABLE
        } else if let Some(cached) = self.outline {
            cached
        } else {
            let computed = outline(&self.key);
            self.outline = Some(computed);
            computed
        };
        painter.draw_outline(rect, color);
        painter.draw_icon(rect.contracted_by(ICON_INSET), &self.key, self.tone());
    }

    /// Drop the cached outline so the next draw recomputes it.
    pub fn recache_outline(&mut self) {
        self.outline = None;
    }

    #[must_use]
    pub fn has_cached_outline(&self) -> bool {
        self.outline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worktab_core::testing::{DrawOp, RecordingPainter};
    use worktab_core::{Modifiers, PointerButton};

    fn item(incapable: bool, enabled: bool) -> DraggableItem {
        let mut item = DraggableItem::new("Cook".into(), SubjectId(1), incapable, enabled);
        item.seat(Point::new(50.0, 20.0), 30.0);
        item
    }

    #[test]
    fn incapable_is_never_enabled() {
        let mut item = item(true, true);
        assert!(item.is_disabled());
        item.set_enabled(true);
        assert!(item.is_disabled());
        assert_eq!(item.tone(), IconTone::Incapable);
    }

    #[test]
    fn press_starts_drag_and_follows_pointer() {
        let mut item = item(false, true);
        let mut slot = DragSlot::new();
        let press = PointerEvent::press(PointerButton::Primary, 52.0, 21.0);

        assert_eq!(item.on_clicked(&press, &mut slot), ItemAction::DragStarted);
        assert!(item.is_dragging());
        assert!(slot.is_held_by(SubjectId(1)));

        item.track_pointer(Point::new(10.0, 5.0));
        assert_eq!(item.position(), Point::new(10.0, 5.0));

        item.on_drop();
        assert!(!item.is_dragging());
        assert_eq!(item.position(), Point::new(10.0, 5.0));
        assert_eq!(item.rect(), Rect::centered_square(Point::new(10.0, 5.0), 30.0));
    }

    #[test]
    fn press_refused_while_other_drag_active() {
        let mut item = item(false, true);
        let mut slot = DragSlot::new();
        slot.try_begin(ActiveDrag {
            owner: SubjectId(9),
            key: "Haul".into(),
        });
        let press = PointerEvent::press(PointerButton::Primary, 50.0, 20.0);
        assert_eq!(item.on_clicked(&press, &mut slot), ItemAction::DragRefused);
        assert!(!item.is_dragging());
    }

    #[test]
    fn idle_item_ignores_pointer() {
        let mut item = item(false, true);
        item.track_pointer(Point::new(0.0, 0.0));
        assert_eq!(item.position(), Point::new(50.0, 20.0));
    }

    #[test]
    fn shift_press_requests_toggle() {
        let mut item = item(false, true);
        let mut slot = DragSlot::new();
        let press = PointerEvent::press(PointerButton::Primary, 50.0, 20.0)
            .with_modifiers(Modifiers::SHIFT);
        assert_eq!(item.on_clicked(&press, &mut slot), ItemAction::ToggleRequested);
        assert!(!slot.is_active());
    }

    #[test]
    fn outline_is_cached_until_recache() {
        let mut item = item(false, true);
        let mut painter = RecordingPainter::new();
        let rect = item.rect();

        item.draw(&mut painter, rect, |_| Rgba::HIGH_SKILL);
        item.draw(&mut painter, rect, |_| Rgba::LOW_SKILL);
        assert!(item.has_cached_outline());
        let outlines: Vec<Rgba> = painter
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Outline { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(outlines, [Rgba::HIGH_SKILL, Rgba::HIGH_SKILL]);

        item.recache_outline();
        assert!(!item.has_cached_outline());
        painter.clear();
        item.draw(&mut painter, rect, |_| Rgba::LOW_SKILL);
        assert!(painter.ops.contains(&DrawOp::Outline {
            rect,
            color: Rgba::LOW_SKILL
        }));
    }

    #[test]
    fn hover_draws_highlight_and_tooltip() {
        let item = item(false, false);
        let mut painter = RecordingPainter::new();
        let tooltip = Tooltip::Item {
            key: "Cook".into(),
            label: "Cooking".into(),
            subject: "Ada".into(),
            priority: worktab_core::Priority::DISABLED,
            tone: item.tone(),
        };
        item.on_hover(&mut painter, tooltip.clone());
        assert_eq!(painter.highlight_count(), 1);
        assert_eq!(painter.tooltips().collect::<Vec<_>>(), [&tooltip]);
    }
}
