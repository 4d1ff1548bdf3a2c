#![forbid(unsafe_code)]

//! Category header: a column header that applies one action to the same
//! category on every surface.
//!
//! Broadcasts reach every surface passed in, and the user hears and sees one
//! confirmation per click, not one per surface.

use worktab_core::{
    CategoryDef, CategoryKey, HeaderIntent, IconTone, Notice, NoticeKind, Painter, Rect, Rgba,
    Sound, Subject, Tooltip,
};

use crate::notify::Notifier;
use crate::surface::Surface;

/// Margin between the header outline and its icon.
const ICON_INSET: f32 = 2.0;

/// Result of a header click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// The category moved by `delta` on `moved` surfaces.
    Shifted { delta: isize, moved: usize },
    /// Toggle-all applied `enabled` and `applied` surfaces ended in that
    /// state.
    Toggled { enabled: bool, applied: usize },
}

/// Header for one catalog category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHeader {
    key: CategoryKey,
    label: String,
    /// Last toggle-all state; the next toggle applies the opposite.
    apply_all: bool,
}

impl CategoryHeader {
    #[must_use]
    pub fn new(def: &CategoryDef) -> Self {
        Self {
            key: def.key.clone(),
            label: def.label.clone(),
            apply_all: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_apply_all(&self) -> bool {
        self.apply_all
    }

    pub fn draw(&self, painter: &mut dyn Painter, rect: Rect) {
        painter.draw_outline(rect, Rgba::MEDIUM_SKILL);
        painter.draw_icon(rect.contracted_by(ICON_INSET), &self.key, IconTone::Enabled);
    }

    pub fn on_hover(&self, painter: &mut dyn Painter, rect: Rect) {
        painter.draw_highlight(rect);
        painter.tooltip(
            rect,
            Tooltip::Header {
                key: self.key.clone(),
                label: self.label.clone(),
                apply_all: self.apply_all,
            },
        );
    }

    /// Apply `intent` to this category on every surface.
    pub fn on_clicked<S: Subject>(
        &mut self,
        intent: HeaderIntent,
        surfaces: &mut [Surface<S>],
        notifier: &mut Notifier<'_>,
    ) -> HeaderOutcome {
        match intent.shift_delta() {
            Some(delta) => self.shift_all(delta, surfaces, notifier),
            None => self.toggle_all(surfaces, notifier),
        }
    }

    fn shift_all<S: Subject>(
        &self,
        delta: isize,
        surfaces: &mut [Surface<S>],
        notifier: &mut Notifier<'_>,
    ) -> HeaderOutcome {
        let moved = surfaces
            .iter_mut()
            .map(|s| s.on_primary_shift_click(delta, &self.key))
            .filter(|moved| *moved)
            .count();
        notifier.chain(
            Sound::TaskCompleted,
            Notice::new(NoticeKind::CategoryShifted, self.label.clone()),
        );
        tracing::debug!(
            target: "worktab.header",
            key = %self.key,
            delta,
            moved,
            surfaces = surfaces.len(),
            "category shifted on all surfaces"
        );
        HeaderOutcome::Shifted { delta, moved }
    }

    fn toggle_all<S: Subject>(
        &mut self,
        surfaces: &mut [Surface<S>],
        notifier: &mut Notifier<'_>,
    ) -> HeaderOutcome {
        self.apply_all = !self.apply_all;
        let enabled = self.apply_all;
        let applied = surfaces
            .iter_mut()
            .map(|s| s.apply_category_state(&self.key, enabled))
            .filter(|applied| *applied)
            .count();
        let (sound, kind) = if enabled {
            (Sound::WorkEnabled, NoticeKind::CategoryEnabledForAll)
        } else {
            (Sound::WorkDisabled, NoticeKind::CategoryDisabledForAll)
        };
        notifier.chain(sound, Notice::new(kind, self.label.clone()));
        tracing::debug!(
            target: "worktab.header",
            key = %self.key,
            enabled,
            applied,
            surfaces = surfaces.len(),
            "category toggled on all surfaces"
        );
        HeaderOutcome::Toggled { enabled, applied }
    }
}
