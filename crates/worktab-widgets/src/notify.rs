#![forbid(unsafe_code)]

//! Config-gated user feedback.

use worktab_core::{Feedback, FeedbackConfig, Notice, Sound};

/// Wraps a [`Feedback`] sink and applies the sound/message toggles.
///
/// The two toggles are independent: a muted session still gets verbose
/// messages, and a quiet one still gets sounds.
pub struct Notifier<'a> {
    config: FeedbackConfig,
    sink: &'a mut dyn Feedback,
}

impl std::fmt::Debug for Notifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> Notifier<'a> {
    pub fn new(config: FeedbackConfig, sink: &'a mut dyn Feedback) -> Self {
        Self { config, sink }
    }

    #[must_use]
    pub fn config(&self) -> FeedbackConfig {
        self.config
    }

    /// Play `sound` if sounds are on.
    pub fn play(&mut self, sound: Sound) {
        if self.config.use_sounds {
            self.sink.play(sound);
        } else {
            tracing::trace!(target: "worktab.notify", ?sound, "sound muted");
        }
    }

    /// Emit `notice` if verbose messages are on.
    pub fn message(&mut self, notice: Notice) {
        if self.config.verbose_messages {
            self.sink.message(&notice);
        } else {
            tracing::trace!(
                target: "worktab.notify",
                kind = ?notice.kind,
                category = %notice.category,
                "message suppressed"
            );
        }
    }

    /// Sound followed by message, each gated on its own toggle.
    pub fn chain(&mut self, sound: Sound, notice: Notice) {
        self.play(sound);
        self.message(notice);
    }
}
