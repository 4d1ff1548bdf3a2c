#![forbid(unsafe_code)]

//! Surface: one subject's ranked row of draggable work categories.
//!
//! A surface owns one [`DraggableItem`] per catalog category, routes pointer
//! events to the item under the pointer, and turns on-screen order into
//! stored priorities.
//!
//! # Reorder, then recompute
//!
//! Every change of order or enabled state ends in two passes:
//!
//! 1. Stable-sort the items by horizontal position (ties keep their previous
//!    relative order).
//! 2. Walk the sorted items, writing rank `index + 1` for enabled items and
//!    the disabled sentinel for the rest.
//!
//! Drag feedback only ever moves positions; priorities are derived from them
//! afterwards.
//!
//! # Invariants
//!
//! 1. Exactly one item per catalog category, unique by key.
//! 2. The key lookup holds the same keys as `items`, each mapped to that
//!    item's index, after every public call returns.
//! 3. An incapable item is never enabled.
//!
//! # Failure Modes
//!
//! | Request | Outcome |
//! |---------|---------|
//! | Shift past either end | Silent no-op |
//! | Enable an incapable item | Flag forced back, no write, no feedback |
//! | Drop outside the area | Item keeps its release position, no reorder |

use std::sync::Arc;

use ahash::AHashMap;
use worktab_core::{
    Catalog, CategoryKey, LayoutConfig, Notice, NoticeKind, Painter, PointerEvent, Point,
    Priority, Rect, Rgba, Sound, Subject, SubjectId, Tooltip,
};

use crate::ctx::EventCtx;
use crate::item::{DraggableItem, ItemAction};
use crate::notify::Notifier;

/// Width of the insertion marker drawn while dragging.
const MARKER_WIDTH: f32 = 2.0;

/// What a surface did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOutcome {
    Ignored,
    Hovered(CategoryKey),
    DragStarted(CategoryKey),
    DragRefused(CategoryKey),
    Toggled { key: CategoryKey, enabled: bool },
    /// The dragged item followed the pointer.
    Tracked,
    /// The drag ended. `inside` is true when it landed in the area and the
    /// order was recomputed.
    Dropped { key: CategoryKey, inside: bool },
}

/// Ordered, togglable work categories of one subject.
#[derive(Debug)]
pub struct Surface<S> {
    subject: S,
    catalog: Arc<Catalog>,
    layout: LayoutConfig,
    items: Vec<DraggableItem>,
    by_key: AHashMap<CategoryKey, usize>,
    /// Left edge of the area from the last draw.
    origin_x: f32,
}

impl<S: Subject> Surface<S> {
    /// Build one item per catalog category, seeded from the subject.
    ///
    /// Incapability comes from the subject's fixed capabilities; a stored
    /// priority of zero starts the item disabled. The items keep catalog
    /// order and one recompute pass normalizes the stored priorities.
    pub fn new(subject: S, catalog: Arc<Catalog>, layout: LayoutConfig) -> Self {
        let owner = subject.id();
        let items = catalog
            .iter()
            .map(|def| {
                let incapable = subject.is_incapable(&def.key);
                let enabled = !subject.priority(&def.key).is_disabled();
                DraggableItem::new(def.key.clone(), owner, incapable, enabled)
            })
            .collect();

        let mut surface = Self::from_items(subject, catalog, layout, items);
        surface.update_priorities();
        tracing::debug!(
            target: "worktab.surface",
            subject = owner.0,
            items = surface.items.len(),
            "surface created"
        );
        surface
    }

    /// Assemble a surface from prepared items without touching the subject.
    pub(crate) fn from_items(
        subject: S,
        catalog: Arc<Catalog>,
        layout: LayoutConfig,
        items: Vec<DraggableItem>,
    ) -> Self {
        let mut surface = Self {
            subject,
            catalog,
            layout,
            items,
            by_key: AHashMap::new(),
            origin_x: 0.0,
        };
        surface.seat_items();
        surface.refresh_lookup();
        surface
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.subject.id()
    }

    #[must_use]
    pub fn subject(&self) -> &S {
        &self.subject
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn layout(&self) -> LayoutConfig {
        self.layout
    }

    /// Items in rank order.
    #[must_use]
    pub fn items(&self) -> &[DraggableItem] {
        &self.items
    }

    /// Keys in rank order.
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.items.iter().map(DraggableItem::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, key: &CategoryKey) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    #[must_use]
    pub fn item(&self, key: &CategoryKey) -> Option<&DraggableItem> {
        self.index_of(key).map(|i| &self.items[i])
    }

    /// The item currently being dragged, if it belongs to this surface.
    #[must_use]
    pub fn dragged_item(&self) -> Option<&DraggableItem> {
        self.items.iter().find(|i| i.is_dragging())
    }

    /// Does the key lookup match `items` exactly?
    #[must_use]
    pub fn lookup_is_consistent(&self) -> bool {
        self.by_key.len() == self.items.len()
            && self
                .items
                .iter()
                .enumerate()
                .all(|(index, item)| self.by_key.get(item.key()) == Some(&index))
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Route one pointer event.
    ///
    /// With a drag active, only the owning surface reacts: a release ends the
    /// drag (recomputing order when the item lands inside `area`), and motion
    /// moves the item. Without a drag, events inside `area` go to the first
    /// item under the pointer: repaint shows hover, press clicks.
    pub fn process_event(
        &mut self,
        area: Rect,
        event: &PointerEvent,
        ctx: &mut EventCtx<'_>,
    ) -> SurfaceOutcome {
        if let Some(active) = ctx.drag.active().cloned() {
            if active.owner != self.id() {
                return SurfaceOutcome::Ignored;
            }
            if event.is_release() {
                return self.finish_drop(area, event.position, ctx);
            }
            if (event.is_motion() || event.is_repaint())
                && let Some(index) = self.index_of(&active.key)
            {
                self.items[index].track_pointer(event.position);
                return SurfaceOutcome::Tracked;
            }
            return SurfaceOutcome::Ignored;
        }

        if !area.contains(event.position) {
            return SurfaceOutcome::Ignored;
        }
        if event.is_repaint() {
            self.on_hover(event.position, &mut *ctx.painter)
        } else if event.is_press() {
            self.on_clicked(event, ctx)
        } else {
            SurfaceOutcome::Ignored
        }
    }

    fn on_hover(&self, pointer: Point, painter: &mut dyn Painter) -> SurfaceOutcome {
        let Some(item) = self.items.iter().find(|i| i.rect().contains(pointer)) else {
            return SurfaceOutcome::Ignored;
        };
        item.on_hover(painter, self.tooltip_for(item));
        SurfaceOutcome::Hovered(item.key().clone())
    }

    fn on_clicked(&mut self, event: &PointerEvent, ctx: &mut EventCtx<'_>) -> SurfaceOutcome {
        let Some(index) = self
            .items
            .iter()
            .position(|i| i.rect().contains(event.position))
        else {
            return SurfaceOutcome::Ignored;
        };
        let key = self.items[index].key().clone();
        match self.items[index].on_clicked(event, ctx.drag) {
            ItemAction::None => SurfaceOutcome::Ignored,
            ItemAction::DragStarted => SurfaceOutcome::DragStarted(key),
            ItemAction::DragRefused => SurfaceOutcome::DragRefused(key),
            ItemAction::ToggleRequested => {
                let enabled = self.toggle_item(&key, &mut ctx.notifier);
                SurfaceOutcome::Toggled { key, enabled }
            }
        }
    }

    /// End the drag at `release`. The item lands where the pointer let go,
    /// whatever the last motion event reported.
    fn finish_drop(
        &mut self,
        area: Rect,
        release: Point,
        ctx: &mut EventCtx<'_>,
    ) -> SurfaceOutcome {
        let Some(drag) = ctx.drag.take_if_held_by(self.id()) else {
            return SurfaceOutcome::Ignored;
        };
        let Some(index) = self.index_of(&drag.key) else {
            tracing::warn!(
                target: "worktab.surface",
                subject = self.id().0,
                key = %drag.key,
                "dropped item not on its surface"
            );
            return SurfaceOutcome::Ignored;
        };

        let item = &mut self.items[index];
        item.track_pointer(release);
        item.on_drop();
        let incapable = item.is_incapable();
        let inside = area.contains(release);

        if inside {
            self.on_drop();
            if incapable {
                ctx.notifier.play(Sound::TaskFailed);
                ctx.notifier.message(self.notice(NoticeKind::DraggedIncapableWork, &drag.key));
            } else {
                ctx.notifier.play(Sound::TaskCompleted);
            }
        }

        tracing::debug!(
            target: "worktab.surface",
            subject = self.id().0,
            key = %drag.key,
            x = release.x,
            inside,
            rank = self.index_of(&drag.key).map(|i| i + 1),
            "surface.drop"
        );
        SurfaceOutcome::Dropped {
            key: drag.key,
            inside,
        }
    }

    /// Cancel the drag of `key` without reordering.
    pub(crate) fn abandon_drag(&mut self, key: &CategoryKey) {
        if let Some(index) = self.index_of(key) {
            self.items[index].on_drop();
            self.seat_items();
        }
    }

    fn on_drop(&mut self) {
        self.order_by_position();
        self.seat_items();
        self.update_priorities();
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Lay out and draw the idle items left to right, plus the insertion
    /// marker when this surface's dragged item is over `area`.
    ///
    /// The dragged item itself is drawn by [`Surface::draw_dragged`] so the
    /// caller can put it above every surface.
    pub fn draw(&mut self, area: Rect, painter: &mut dyn Painter) {
        self.origin_x = area.x;
        let diameter = self.layout.icon_diameter;
        let stride = self.layout.slot_stride();
        let mut center = Point::new(area.x + self.layout.leading_offset(), area.center().y);

        let subject = &self.subject;
        for item in &mut self.items {
            if !item.is_dragging() {
                item.seat(center, diameter);
                let rect = item.rect();
                item.draw(&mut *painter, rect, |key| subject.aptitude(key).outline());
            }
            center.x += stride;
        }

        if let Some((rect, color)) = self.insertion_marker(area) {
            painter.fill_rect(rect, color);
        }
    }

    /// Draw the dragged item at the pointer.
    pub fn draw_dragged(&mut self, painter: &mut dyn Painter) {
        let diameter = self.layout.icon_diameter;
        let subject = &self.subject;
        if let Some(item) = self.items.iter_mut().find(|i| i.is_dragging()) {
            let rect = Rect::centered_square(item.position(), diameter);
            item.draw(painter, rect, |key| subject.aptitude(key).outline());
        }
    }

    /// Marker showing where the dragged item would land, if it is over
    /// `area`.
    ///
    /// The marker sits just right of the last idle item positioned left of
    /// the dragged one, or at the leading margin when there is none. It is
    /// red when the subject is incapable of the dragged category.
    #[must_use]
    pub fn insertion_marker(&self, area: Rect) -> Option<(Rect, Rgba)> {
        let (dragged_index, dragged) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, i)| i.is_dragging())?;
        if !area.contains(dragged.position()) {
            return None;
        }

        let diameter = self.layout.icon_diameter;
        let spacing = self.layout.short_spacing;
        let x = self
            .items
            .iter()
            .enumerate()
            .rev()
            .find(|(index, item)| {
                *index != dragged_index && item.position().x < dragged.position().x
            })
            .map_or(area.x + spacing / 2.0 - 1.0, |(_, item)| {
                item.position().x + diameter / 2.0 + spacing / 2.0 - 1.0
            });

        let color = if self.subject.is_incapable(dragged.key()) {
            Rgba::RED
        } else {
            Rgba::WHITE
        };
        let rect = Rect::new(x, area.y + spacing / 2.0, MARKER_WIDTH, diameter + spacing);
        Some((rect, color))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Move `key` by `delta` slots and recompute priorities.
    ///
    /// Returns `false` without changing anything when the target slot is out
    /// of bounds or the key is unknown.
    pub fn on_primary_shift_click(&mut self, delta: isize, key: &CategoryKey) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        let Some(target) = index
            .checked_add_signed(delta)
            .filter(|t| *t < self.items.len())
        else {
            tracing::trace!(
                target: "worktab.surface",
                subject = self.id().0,
                key = %key,
                index,
                delta,
                "shift out of bounds ignored"
            );
            return false;
        };

        let item = self.items.remove(index);
        self.items.insert(target, item);
        self.seat_items();
        self.refresh_lookup();
        self.update_priorities();
        tracing::debug!(
            target: "worktab.surface",
            subject = self.id().0,
            key = %key,
            from = index,
            to = target,
            "category shifted"
        );
        true
    }

    /// Enable `key` and store its rank.
    ///
    /// Incapable items refuse: the flag is forced back, nothing is written
    /// and no feedback is emitted. Returns the post-call enabled state.
    pub fn enable_item(&mut self, key: &CategoryKey, notifier: &mut Notifier<'_>) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        self.items[index].set_enabled(true);
        if self.items[index].is_disabled() {
            tracing::debug!(
                target: "worktab.surface",
                subject = self.id().0,
                key = %key,
                "enable refused, subject is incapable"
            );
            return false;
        }

        let priority = Priority::from_rank(index);
        self.subject.set_priority(key, priority);
        notifier.chain(Sound::WorkEnabled, self.notice(NoticeKind::WorkEnabled, key));
        tracing::debug!(
            target: "worktab.surface",
            subject = self.id().0,
            key = %key,
            priority = priority.get(),
            "work enabled"
        );
        true
    }

    /// Disable `key` in the subject's store. Returns `false` for unknown keys.
    pub fn disable_item(&mut self, key: &CategoryKey, notifier: &mut Notifier<'_>) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        self.subject.disable(key);
        self.items[index].set_enabled(false);
        notifier.chain(Sound::WorkDisabled, self.notice(NoticeKind::WorkDisabled, key));
        tracing::debug!(
            target: "worktab.surface",
            subject = self.id().0,
            key = %key,
            "work disabled"
        );
        true
    }

    /// Flip `key` between enabled and disabled. Returns the new state.
    pub fn toggle_item(&mut self, key: &CategoryKey, notifier: &mut Notifier<'_>) -> bool {
        match self.item(key) {
            Some(item) if item.is_enabled() => {
                self.disable_item(key, notifier);
                false
            }
            Some(_) => self.enable_item(key, notifier),
            None => false,
        }
    }

    /// Force `key` on or off without feedback, then recompute priorities.
    ///
    /// Returns whether the item ended in the requested state (an incapable
    /// item cannot be forced on).
    pub fn apply_category_state(&mut self, key: &CategoryKey, enabled: bool) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        self.items[index].set_enabled(enabled);
        self.update_priorities();
        self.items[index].is_enabled() == enabled
    }

    /// Disable every item. Order is kept.
    pub fn disable_all(&mut self) {
        for item in &mut self.items {
            item.set_enabled(false);
        }
        self.update_priorities();
        tracing::debug!(
            target: "worktab.surface",
            subject = self.id().0,
            "all work disabled"
        );
    }

    /// Re-enable every capable item and restore catalog order.
    pub fn reset_to_default(&mut self) {
        for item in &mut self.items {
            if !item.is_incapable() {
                item.set_enabled(true);
            }
        }
        let catalog = Arc::clone(&self.catalog);
        self.items
            .sort_by_key(|item| catalog.index_of(item.key()).unwrap_or(usize::MAX));
        self.seat_items();
        self.refresh_lookup();
        self.update_priorities();
        tracing::debug!(
            target: "worktab.surface",
            subject = self.id().0,
            "reset to default"
        );
    }

    /// Invalidate every item's cached outline.
    pub fn recache_outlines(&mut self) {
        for item in &mut self.items {
            item.recache_outline();
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Stable sort by horizontal position.
    fn order_by_position(&mut self) {
        self.items
            .sort_by(|a, b| a.position().x.total_cmp(&b.position().x));
        self.refresh_lookup();
    }

    /// Write rank or disabled for every item, in order.
    fn update_priorities(&mut self) {
        for (index, item) in self.items.iter().enumerate() {
            if item.is_enabled() {
                self.subject
                    .set_priority(item.key(), Priority::from_rank(index));
            } else {
                self.subject.disable(item.key());
            }
        }
        tracing::trace!(
            target: "worktab.surface",
            subject = self.id().0,
            enabled = self.items.iter().filter(|i| i.is_enabled()).count(),
            "priorities recomputed"
        );
    }

    /// Rebuild the key lookup from `items`.
    fn refresh_lookup(&mut self) {
        self.by_key.clear();
        self.by_key.extend(
            self.items
                .iter()
                .enumerate()
                .map(|(index, item)| (item.key().clone(), index)),
        );
    }

    /// Put idle items on their slot so positions and hit boxes agree with
    /// order between draws.
    fn seat_items(&mut self) {
        let first = self.origin_x + self.layout.leading_offset();
        let stride = self.layout.slot_stride();
        let diameter = self.layout.icon_diameter;
        for (slot, item) in self.items.iter_mut().enumerate() {
            if !item.is_dragging() {
                let center = Point::new(first + slot as f32 * stride, item.position().y);
                item.seat(center, diameter);
            }
        }
    }

    fn tooltip_for(&self, item: &DraggableItem) -> Tooltip {
        Tooltip::Item {
            key: item.key().clone(),
            label: self.catalog.label(item.key()).to_owned(),
            subject: self.subject.display_name().to_owned(),
            priority: self.subject.priority(item.key()),
            tone: item.tone(),
        }
    }

    fn notice(&self, kind: NoticeKind, key: &CategoryKey) -> Notice {
        Notice::new(kind, self.catalog.label(key)).for_subject(self.subject.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragSlot;
    use worktab_core::testing::{MemorySubject, PriorityWrite, RecordingFeedback, RecordingPainter};
    use worktab_core::{FeedbackConfig, PointerButton, PointerEventKind};

    const AREA: Rect = Rect::new(0.0, 0.0, 400.0, 40.0);

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_keys(["A", "B", "C"]))
    }

    fn surface(subject: MemorySubject) -> Surface<MemorySubject> {
        let mut surface = Surface::new(subject, catalog(), LayoutConfig::default());
        surface.draw(AREA, &mut RecordingPainter::new());
        surface
    }

    fn keys(surface: &Surface<MemorySubject>) -> Vec<&str> {
        surface.keys().map(CategoryKey::as_str).collect()
    }

    #[test]
    fn construction_seeds_from_subject() {
        let subject = MemorySubject::new(1, "Ada")
            .with_priorities(["A", "C"], 3)
            .incapable_of("B");
        let surface = surface(subject);

        assert_eq!(keys(&surface), ["A", "B", "C"]);
        assert!(surface.item(&"A".into()).unwrap().is_enabled());
        assert!(surface.item(&"B".into()).unwrap().is_incapable());
        assert!(surface.item(&"B".into()).unwrap().is_disabled());
        assert!(surface.lookup_is_consistent());

        let subject = surface.subject();
        assert_eq!(subject.stored("A"), Priority::new(1));
        assert!(subject.stored("B").is_disabled());
        assert_eq!(subject.stored("C"), Priority::new(3));
    }

    #[test]
    fn draw_lays_out_slots_left_to_right() {
        let surface = surface(MemorySubject::new(1, "Ada"));
        let xs: Vec<f32> = surface.items().iter().map(|i| i.position().x).collect();
        assert_eq!(xs, [25.0, 60.0, 95.0]);
        assert!(surface.items().iter().all(|i| i.position().y == 20.0));
    }

    #[test]
    fn shift_click_moves_one_slot() {
        let subject = MemorySubject::new(1, "Ada").with_priorities(["A", "B", "C"], 1);
        let mut surface = surface(subject);

        assert!(surface.on_primary_shift_click(-1, &"C".into()));
        assert_eq!(keys(&surface), ["A", "C", "B"]);
        assert!(surface.lookup_is_consistent());
        assert_eq!(surface.subject().stored("C"), Priority::new(2));
        assert_eq!(surface.subject().stored("B"), Priority::new(3));
    }

    #[test]
    fn shift_click_out_of_bounds_is_noop() {
        let subject = MemorySubject::new(1, "Ada").with_priorities(["A", "B", "C"], 1);
        let mut surface = surface(subject);
        surface.on_primary_shift_click(-1, &"B".into());
        assert_eq!(keys(&surface), ["B", "A", "C"]);
        surface.subject.clear_writes();

        assert!(!surface.on_primary_shift_click(-1, &"B".into()));
        assert!(!surface.on_primary_shift_click(1, &"C".into()));
        assert_eq!(keys(&surface), ["B", "A", "C"]);
        assert!(surface.subject().writes().is_empty());
    }

    #[test]
    fn enable_incapable_is_refused_silently() {
        let subject = MemorySubject::new(1, "Ada").incapable_of("A");
        let mut surface = surface(subject);
        surface.subject.clear_writes();
        let mut sink = RecordingFeedback::new();
        let mut notifier = Notifier::new(FeedbackConfig::VERBOSE, &mut sink);

        assert!(!surface.enable_item(&"A".into(), &mut notifier));
        assert!(surface.item(&"A".into()).unwrap().is_disabled());
        assert!(surface.subject().writes().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn enable_writes_rank_and_notifies() {
        let mut surface = surface(MemorySubject::new(1, "Ada"));
        let mut sink = RecordingFeedback::new();
        let mut notifier = Notifier::new(FeedbackConfig::VERBOSE, &mut sink);

        assert!(surface.enable_item(&"B".into(), &mut notifier));
        assert_eq!(surface.subject().stored("B"), Priority::new(2));
        assert_eq!(sink.sounds, [Sound::WorkEnabled]);
        assert_eq!(sink.notices[0].kind, NoticeKind::WorkEnabled);
        assert_eq!(sink.notices[0].subject.as_deref(), Some("Ada"));
    }

    #[test]
    fn disable_writes_sentinel_and_notifies() {
        let subject = MemorySubject::new(1, "Ada").with_priority("C", 2);
        let mut surface = surface(subject);
        surface.subject.clear_writes();
        let mut sink = RecordingFeedback::new();
        let mut notifier = Notifier::new(FeedbackConfig::default(), &mut sink);

        assert!(surface.disable_item(&"C".into(), &mut notifier));
        assert!(surface.item(&"C".into()).unwrap().is_disabled());
        assert_eq!(
            surface.subject().writes(),
            [PriorityWrite::Disable("C".into())]
        );
        assert_eq!(sink.sounds, [Sound::WorkDisabled]);
        assert!(sink.notices.is_empty());
    }

    #[test]
    fn toggle_flips_state() {
        let mut surface = surface(MemorySubject::new(1, "Ada"));
        let mut sink = RecordingFeedback::new();
        let mut notifier = Notifier::new(FeedbackConfig::QUIET, &mut sink);
        assert!(surface.toggle_item(&"A".into(), &mut notifier));
        assert!(!surface.toggle_item(&"A".into(), &mut notifier));
        assert!(!surface.toggle_item(&"Z".into(), &mut notifier));
    }

    #[test]
    fn disable_all_keeps_order() {
        let subject = MemorySubject::new(1, "Ada").with_priorities(["A", "B", "C"], 1);
        let mut surface = surface(subject);
        surface.on_primary_shift_click(1, &"A".into());
        surface.disable_all();

        assert_eq!(keys(&surface), ["B", "A", "C"]);
        for key in ["A", "B", "C"] {
            assert!(surface.subject().stored(key).is_disabled());
        }
    }

    #[test]
    fn reset_restores_catalog_order_and_capable_items() {
        let subject = MemorySubject::new(1, "Ada").incapable_of("B");
        let mut surface = surface(subject);
        surface.on_primary_shift_click(-1, &"C".into());
        surface.on_primary_shift_click(-1, &"C".into());
        assert_eq!(keys(&surface), ["C", "A", "B"]);

        surface.reset_to_default();
        assert_eq!(keys(&surface), ["A", "B", "C"]);
        assert_eq!(surface.subject().stored("A"), Priority::new(1));
        assert!(surface.subject().stored("B").is_disabled());
        assert_eq!(surface.subject().stored("C"), Priority::new(3));
    }

    #[test]
    fn apply_category_state_forces_without_feedback() {
        let subject = MemorySubject::new(1, "Ada").incapable_of("C");
        let mut surface = surface(subject);
        assert!(surface.apply_category_state(&"A".into(), true));
        assert_eq!(surface.subject().stored("A"), Priority::new(1));
        assert!(!surface.apply_category_state(&"C".into(), true));
        assert!(surface.apply_category_state(&"A".into(), false));
        assert!(surface.subject().stored("A").is_disabled());
    }

    #[test]
    fn hover_hits_first_item_under_pointer() {
        let mut surface = surface(MemorySubject::new(1, "Ada"));
        let mut drag = DragSlot::new();
        let mut painter = RecordingPainter::new();
        let mut sink = RecordingFeedback::new();
        let mut ctx = EventCtx::new(
            &mut drag,
            &mut painter,
            Notifier::new(FeedbackConfig::default(), &mut sink),
        );

        let outcome = surface.process_event(AREA, &PointerEvent::repaint(60.0, 20.0), &mut ctx);
        assert_eq!(outcome, SurfaceOutcome::Hovered("B".into()));

        let outcome = surface.process_event(AREA, &PointerEvent::repaint(300.0, 20.0), &mut ctx);
        assert_eq!(outcome, SurfaceOutcome::Ignored);
        drop(ctx);
        assert_eq!(painter.highlight_count(), 1);
    }

    #[test]
    fn insertion_marker_scans_left_only() {
        let mut surface = surface(MemorySubject::new(1, "Ada"));
        let mut drag = DragSlot::new();
        let mut painter = RecordingPainter::new();
        let mut sink = RecordingFeedback::new();
        let mut ctx = EventCtx::new(
            &mut drag,
            &mut painter,
            Notifier::new(FeedbackConfig::default(), &mut sink),
        );

        // Pick up C (slot x=95) and hover between A (25) and B (60).
        surface.process_event(
            AREA,
            &PointerEvent::press(PointerButton::Primary, 95.0, 20.0),
            &mut ctx,
        );
        surface.process_event(AREA, &PointerEvent::repaint(50.0, 20.0), &mut ctx);
        drop(ctx);

        let (rect, color) = surface.insertion_marker(AREA).unwrap();
        // Right of A: 25 + 15 + 2.5 - 1.
        assert_eq!(rect.x, 41.5);
        assert_eq!(rect.y, 2.5);
        assert_eq!(rect.height, 35.0);
        assert_eq!(color, Rgba::WHITE);

        // Left of everything falls back to the leading margin.
        let dragged = surface.items.iter_mut().find(|i| i.is_dragging()).unwrap();
        dragged.track_pointer(Point::new(5.0, 20.0));
        let (rect, _) = surface.insertion_marker(AREA).unwrap();
        assert_eq!(rect.x, 1.5);

        // Outside the area there is no marker.
        let dragged = surface.items.iter_mut().find(|i| i.is_dragging()).unwrap();
        dragged.track_pointer(Point::new(5.0, 90.0));
        assert!(surface.insertion_marker(AREA).is_none());
    }

    #[test]
    fn marker_is_red_for_incapable_category() {
        let mut surface = surface(MemorySubject::new(1, "Ada").incapable_of("A"));
        let mut drag = DragSlot::new();
        let mut painter = RecordingPainter::new();
        let mut sink = RecordingFeedback::new();
        let mut ctx = EventCtx::new(
            &mut drag,
            &mut painter,
            Notifier::new(FeedbackConfig::default(), &mut sink),
        );
        surface.process_event(
            AREA,
            &PointerEvent::press(PointerButton::Primary, 25.0, 20.0),
            &mut ctx,
        );
        surface.process_event(AREA, &PointerEvent::repaint(80.0, 20.0), &mut ctx);
        drop(ctx);

        let mut painter = RecordingPainter::new();
        surface.draw(AREA, &mut painter);
        let fills: Vec<_> = painter.fills().collect();
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].1, Rgba::RED);
        // Dragged item is not drawn by the layout pass.
        assert_eq!(painter.icons().count(), 2);
    }

    #[test]
    fn release_point_decides_the_drop() {
        let subject = MemorySubject::new(1, "Ada").with_priorities(["A", "B", "C"], 1);
        let mut surface = surface(subject);
        let mut drag = DragSlot::new();
        let mut painter = RecordingPainter::new();
        let mut sink = RecordingFeedback::new();
        let mut ctx = EventCtx::new(
            &mut drag,
            &mut painter,
            Notifier::new(FeedbackConfig::default(), &mut sink),
        );

        // Last motion is over the front slot, but the release is below the row.
        surface.process_event(
            AREA,
            &PointerEvent::press(PointerButton::Primary, 95.0, 20.0),
            &mut ctx,
        );
        surface.process_event(
            AREA,
            &PointerEvent::new(PointerEventKind::Drag(PointerButton::Primary), 10.0, 20.0),
            &mut ctx,
        );
        let outcome = surface.process_event(
            AREA,
            &PointerEvent::release(PointerButton::Primary, 10.0, 90.0),
            &mut ctx,
        );
        assert_eq!(
            outcome,
            SurfaceOutcome::Dropped {
                key: "C".into(),
                inside: false
            }
        );
        assert_eq!(keys(&surface), ["A", "B", "C"]);
        assert_eq!(
            surface.item(&"C".into()).unwrap().position(),
            Point::new(10.0, 90.0)
        );
        assert_eq!(surface.subject().stored("C"), Priority::new(3));
        surface.draw(AREA, &mut RecordingPainter::new());

        // No motion at all: the release alone places the item.
        surface.process_event(
            AREA,
            &PointerEvent::press(PointerButton::Primary, 95.0, 20.0),
            &mut ctx,
        );
        let outcome = surface.process_event(
            AREA,
            &PointerEvent::release(PointerButton::Primary, 10.0, 20.0),
            &mut ctx,
        );
        assert_eq!(
            outcome,
            SurfaceOutcome::Dropped {
                key: "C".into(),
                inside: true
            }
        );
        assert_eq!(keys(&surface), ["C", "A", "B"]);
        assert_eq!(surface.subject().stored("C"), Priority::new(1));
    }
}
