#![forbid(unsafe_code)]

//! The subject contract: a character whose work priorities a surface edits.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryKey;
use crate::paint::Aptitude;
use crate::priority::Priority;

/// Stable identity of a subject across frames and save/load cycles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

/// Host-side view of one subject.
///
/// Capability answers must be stable for the lifetime of the subject. The
/// priority store is the persisted source of truth the widgets write into.
pub trait Subject {
    fn id(&self) -> SubjectId;

    /// Name used when adjusting user messages for this subject.
    fn display_name(&self) -> &str;

    /// Is the category permanently unavailable to this subject?
    fn is_incapable(&self, key: &CategoryKey) -> bool;

    /// Stored priority; [`Priority::DISABLED`] when the work is off.
    fn priority(&self, key: &CategoryKey) -> Priority;

    fn set_priority(&mut self, key: &CategoryKey, priority: Priority);

    /// Explicitly switch the category off.
    fn disable(&mut self, key: &CategoryKey);

    /// Hint for the item outline colour. Hosts without skill data keep the
    /// default.
    fn aptitude(&self, _key: &CategoryKey) -> Aptitude {
        Aptitude::Medium
    }
}
