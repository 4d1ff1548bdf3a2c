#![forbid(unsafe_code)]

//! In-memory host doubles for tests.
//!
//! Enabled with the `test-helpers` feature. Nothing here is meant for
//! production hosts.

use ahash::{AHashMap, AHashSet};

use crate::catalog::CategoryKey;
use crate::feedback::{Feedback, Notice, Sound};
use crate::geometry::Rect;
use crate::paint::{Aptitude, IconTone, Painter, Rgba, Tooltip};
use crate::priority::Priority;
use crate::subject::{Subject, SubjectId};

/// One write made through the [`Subject`] priority store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityWrite {
    Set(CategoryKey, Priority),
    Disable(CategoryKey),
}

/// A subject backed by hash maps, recording every store write.
#[derive(Debug, Clone, Default)]
pub struct MemorySubject {
    id: SubjectId,
    name: String,
    priorities: AHashMap<CategoryKey, Priority>,
    incapable: AHashSet<CategoryKey>,
    aptitudes: AHashMap<CategoryKey, Aptitude>,
    writes: Vec<PriorityWrite>,
}

impl MemorySubject {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: SubjectId(id),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seed a stored priority without recording a write.
    #[must_use]
    pub fn with_priority(mut self, key: &str, priority: u32) -> Self {
        self.priorities
            .insert(CategoryKey::new(key), Priority::new(priority));
        self
    }

    /// Seed the same priority for several categories.
    #[must_use]
    pub fn with_priorities<'a>(
        mut self,
        keys: impl IntoIterator<Item = &'a str>,
        priority: u32,
    ) -> Self {
        for key in keys {
            self = self.with_priority(key, priority);
        }
        self
    }

    #[must_use]
    pub fn incapable_of(mut self, key: &str) -> Self {
        self.incapable.insert(CategoryKey::new(key));
        self
    }

    #[must_use]
    pub fn with_aptitude(mut self, key: &str, aptitude: Aptitude) -> Self {
        self.aptitudes.insert(CategoryKey::new(key), aptitude);
        self
    }

    /// Stored priority by key string.
    #[must_use]
    pub fn stored(&self, key: &str) -> Priority {
        self.priority(&CategoryKey::new(key))
    }

    #[must_use]
    pub fn writes(&self) -> &[PriorityWrite] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl Subject for MemorySubject {
    fn id(&self) -> SubjectId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_incapable(&self, key: &CategoryKey) -> bool {
        self.incapable.contains(key)
    }

    fn priority(&self, key: &CategoryKey) -> Priority {
        self.priorities.get(key).copied().unwrap_or_default()
    }

    fn set_priority(&mut self, key: &CategoryKey, priority: Priority) {
        self.priorities.insert(key.clone(), priority);
        self.writes.push(PriorityWrite::Set(key.clone(), priority));
    }

    fn disable(&mut self, key: &CategoryKey) {
        self.priorities.insert(key.clone(), Priority::DISABLED);
        self.writes.push(PriorityWrite::Disable(key.clone()));
    }

    fn aptitude(&self, key: &CategoryKey) -> Aptitude {
        self.aptitudes.get(key).copied().unwrap_or_default()
    }
}

/// One recorded painter call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Icon {
        rect: Rect,
        key: CategoryKey,
        tone: IconTone,
    },
    Outline {
        rect: Rect,
        color: Rgba,
    },
    Highlight(Rect),
    Tooltip {
        rect: Rect,
        tooltip: Tooltip,
    },
    Fill {
        rect: Rect,
        color: Rgba,
    },
}

/// A painter that records calls in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    pub ops: Vec<DrawOp>,
}

impl RecordingPainter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solid rectangles drawn (insertion markers).
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Icons drawn, in draw order.
    pub fn icons(&self) -> impl Iterator<Item = (Rect, &CategoryKey, IconTone)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Icon { rect, key, tone } => Some((*rect, key, *tone)),
            _ => None,
        })
    }

    pub fn tooltips(&self) -> impl Iterator<Item = &Tooltip> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Tooltip { tooltip, .. } => Some(tooltip),
            _ => None,
        })
    }

    #[must_use]
    pub fn highlight_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Highlight(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn draw_icon(&mut self, rect: Rect, key: &CategoryKey, tone: IconTone) {
        self.ops.push(DrawOp::Icon {
            rect,
            key: key.clone(),
            tone,
        });
    }

    fn draw_outline(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::Outline { rect, color });
    }

    fn draw_highlight(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Highlight(rect));
    }

    fn tooltip(&mut self, rect: Rect, tooltip: Tooltip) {
        self.ops.push(DrawOp::Tooltip { rect, tooltip });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::Fill { rect, color });
    }
}

/// A feedback sink that records sounds and messages.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    pub sounds: Vec<Sound>,
    pub notices: Vec<Notice>,
}

impl RecordingFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty() && self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
        self.notices.clear();
    }
}

impl Feedback for RecordingFeedback {
    fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    fn message(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
