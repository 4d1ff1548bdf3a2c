#![forbid(unsafe_code)]

//! User feedback contract: named sounds and localized messages.

/// Named one-shot sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    TaskCompleted,
    TaskFailed,
    WorkEnabled,
    WorkDisabled,
}

/// Message templates. The host looks up the translation by
/// [`NoticeKind::translation_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    WorkEnabled,
    WorkDisabled,
    /// An incapable category was dropped onto a surface.
    DraggedIncapableWork,
    /// A header moved its category on every surface.
    CategoryShifted,
    CategoryEnabledForAll,
    CategoryDisabledForAll,
}

impl NoticeKind {
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::WorkEnabled => "worktab.message.work_enabled",
            Self::WorkDisabled => "worktab.message.work_disabled",
            Self::DraggedIncapableWork => "worktab.message.dragged_incapable_work",
            Self::CategoryShifted => "worktab.message.category_shifted",
            Self::CategoryEnabledForAll => "worktab.message.category_enabled_for_all",
            Self::CategoryDisabledForAll => "worktab.message.category_disabled_for_all",
        }
    }
}

/// A message ready for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Category label inserted into the template.
    pub category: String,
    /// Subject the message is adjusted for, if any.
    pub subject: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn new(kind: NoticeKind, category: impl Into<String>) -> Self {
        Self {
            kind,
            category: category.into(),
            subject: None,
        }
    }

    #[must_use]
    pub fn for_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Sink for sounds and messages.
///
/// Implementations perform the effect unconditionally; gating by
/// configuration happens before the call.
pub trait Feedback {
    fn play(&mut self, sound: Sound);
    fn message(&mut self, notice: &Notice);
}

/// A sink that drops everything. Useful for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn play(&mut self, _sound: Sound) {}
    fn message(&mut self, _notice: &Notice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_keys_are_distinct() {
        let kinds = [
            NoticeKind::WorkEnabled,
            NoticeKind::WorkDisabled,
            NoticeKind::DraggedIncapableWork,
            NoticeKind::CategoryShifted,
            NoticeKind::CategoryEnabledForAll,
            NoticeKind::CategoryDisabledForAll,
        ];
        let mut keys: Vec<&str> = kinds.iter().map(|k| k.translation_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), kinds.len());
    }

    #[test]
    fn notice_for_subject() {
        let notice = Notice::new(NoticeKind::WorkEnabled, "Cooking").for_subject("Ada");
        assert_eq!(notice.category, "Cooking");
        assert_eq!(notice.subject.as_deref(), Some("Ada"));
    }
}
