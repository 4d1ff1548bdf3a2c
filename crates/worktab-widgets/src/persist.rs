#![forbid(unsafe_code)]

//! Save and restore of surface order and enabled flags.
//!
//! Snapshots hold only what the subject's own store does not: the on-screen
//! order and which items are switched on. Incapability is re-read from the
//! live subject on restore, and slot positions come back from the next
//! layout pass.
//!
//! # Repairs
//!
//! | Snapshot problem | Restore behaviour |
//! |------------------|-------------------|
//! | Category missing (catalog grew) | Appended, disabled, at the end |
//! | Enabled item now incapable | Forced disabled |
//! | Category not in catalog | [`RestoreError::UnknownCategory`] |
//! | Category listed twice | [`RestoreError::DuplicateCategory`] |
//! | Subject id differs from live subject | [`RestoreError::SubjectMismatch`] |
//! | Session subject no longer resolvable | Skipped with a warning |

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use worktab_core::{Catalog, CategoryKey, LayoutConfig, Subject, SubjectId, WorktabConfig};

use crate::item::DraggableItem;
use crate::session::Session;
use crate::surface::Surface;

/// One item's saved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub key: CategoryKey,
    pub enabled: bool,
}

/// A surface's items in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub subject: SubjectId,
    pub items: Vec<ItemSnapshot>,
}

/// Every surface of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub surfaces: Vec<SurfaceSnapshot>,
}

/// Errors from restoring a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    SubjectMismatch {
        expected: SubjectId,
        found: SubjectId,
    },
    UnknownCategory {
        subject: SubjectId,
        key: CategoryKey,
    },
    DuplicateCategory {
        subject: SubjectId,
        key: CategoryKey,
    },
    /// The session snapshot lists the same subject twice.
    DuplicateSubject(SubjectId),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubjectMismatch { expected, found } => write!(
                f,
                "snapshot belongs to subject {} but subject {} was supplied",
                expected.0, found.0
            ),
            Self::UnknownCategory { subject, key } => {
                write!(f, "subject {}: category '{key}' is not in the catalog", subject.0)
            }
            Self::DuplicateCategory { subject, key } => {
                write!(f, "subject {}: category '{key}' appears more than once", subject.0)
            }
            Self::DuplicateSubject(subject) => {
                write!(f, "subject {} appears more than once", subject.0)
            }
        }
    }
}

impl std::error::Error for RestoreError {}

impl<S: Subject> Surface<S> {
    #[must_use]
    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            subject: self.id(),
            items: self
                .items()
                .iter()
                .map(|item| ItemSnapshot {
                    key: item.key().clone(),
                    enabled: item.is_enabled(),
                })
                .collect(),
        }
    }

    /// Rebuild a surface from `snapshot` around the live `subject`.
    ///
    /// Nothing is written to the subject's priority store.
    pub fn restore(
        snapshot: &SurfaceSnapshot,
        subject: S,
        catalog: Arc<Catalog>,
        layout: LayoutConfig,
    ) -> Result<Self, RestoreError> {
        let owner = subject.id();
        if owner != snapshot.subject {
            return Err(RestoreError::SubjectMismatch {
                expected: snapshot.subject,
                found: owner,
            });
        }

        let mut seen = AHashSet::with_capacity(snapshot.items.len());
        let mut items = Vec::with_capacity(catalog.len());
        let mut forced_off = 0usize;
        for saved in &snapshot.items {
            if !catalog.contains(&saved.key) {
                return Err(RestoreError::UnknownCategory {
                    subject: owner,
                    key: saved.key.clone(),
                });
            }
            if !seen.insert(&saved.key) {
                return Err(RestoreError::DuplicateCategory {
                    subject: owner,
                    key: saved.key.clone(),
                });
            }
            let incapable = subject.is_incapable(&saved.key);
            if incapable && saved.enabled {
                forced_off += 1;
            }
            items.push(DraggableItem::new(
                saved.key.clone(),
                owner,
                incapable,
                saved.enabled,
            ));
        }

        let mut appended = 0usize;
        for key in catalog.keys() {
            if !seen.contains(key) {
                items.push(DraggableItem::new(
                    key.clone(),
                    owner,
                    subject.is_incapable(key),
                    false,
                ));
                appended += 1;
            }
        }

        if appended > 0 || forced_off > 0 {
            tracing::debug!(
                target: "worktab.session",
                subject = owner.0,
                appended,
                forced_off,
                "restore repaired snapshot"
            );
        }
        Ok(Self::from_items(subject, catalog, layout, items))
    }
}

impl<S: Subject> Session<S> {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            surfaces: self.surfaces().iter().map(Surface::snapshot).collect(),
        }
    }

    /// Rebuild a session, asking `resolve` for each saved subject.
    ///
    /// Subjects `resolve` cannot find (they left while saved) are skipped.
    pub fn restore(
        snapshot: &SessionSnapshot,
        catalog: Arc<Catalog>,
        config: WorktabConfig,
        mut resolve: impl FnMut(SubjectId) -> Option<S>,
    ) -> Result<Self, RestoreError> {
        let mut session = Self::new(Arc::clone(&catalog), config);
        let mut seen = AHashSet::with_capacity(snapshot.surfaces.len());
        for saved in &snapshot.surfaces {
            if !seen.insert(saved.subject) {
                return Err(RestoreError::DuplicateSubject(saved.subject));
            }
            let Some(subject) = resolve(saved.subject) else {
                tracing::warn!(
                    target: "worktab.session",
                    subject = saved.subject.0,
                    "saved subject not found, surface skipped"
                );
                continue;
            };
            let surface = Surface::restore(saved, subject, Arc::clone(&catalog), config.layout)?;
            session.insert_surface(surface);
        }
        tracing::debug!(
            target: "worktab.session",
            surfaces = session.surfaces().len(),
            "session restored"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worktab_core::testing::MemorySubject;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_keys(["A", "B", "C"]))
    }

    fn saved(subject: u64, items: &[(&str, bool)]) -> SurfaceSnapshot {
        SurfaceSnapshot {
            subject: SubjectId(subject),
            items: items
                .iter()
                .map(|(key, enabled)| ItemSnapshot {
                    key: (*key).into(),
                    enabled: *enabled,
                })
                .collect(),
        }
    }

    #[test]
    fn snapshot_keeps_order_and_flags() {
        let mut surface = Surface::new(
            MemorySubject::new(1, "Ada").with_priority("B", 1),
            catalog(),
            LayoutConfig::default(),
        );
        surface.on_primary_shift_click(1, &"A".into());
        assert_eq!(
            surface.snapshot(),
            saved(1, &[("B", true), ("A", false), ("C", false)])
        );
    }

    #[test]
    fn restore_appends_missing_and_rebuilds_lookup() {
        let snapshot = saved(1, &[("C", true), ("A", false)]);
        let surface = Surface::restore(
            &snapshot,
            MemorySubject::new(1, "Ada"),
            catalog(),
            LayoutConfig::default(),
        )
        .unwrap();

        let keys: Vec<&str> = surface.keys().map(CategoryKey::as_str).collect();
        assert_eq!(keys, ["C", "A", "B"]);
        assert!(surface.item(&"B".into()).unwrap().is_disabled());
        assert!(surface.lookup_is_consistent());
        assert!(surface.subject().writes().is_empty());
    }

    #[test]
    fn restore_forces_incapable_off() {
        let snapshot = saved(1, &[("A", true), ("B", true), ("C", true)]);
        let surface = Surface::restore(
            &snapshot,
            MemorySubject::new(1, "Ada").incapable_of("B"),
            catalog(),
            LayoutConfig::default(),
        )
        .unwrap();
        let item = surface.item(&"B".into()).unwrap();
        assert!(item.is_incapable());
        assert!(item.is_disabled());
    }

    #[test]
    fn restore_rejects_bad_snapshots() {
        let restore = |snapshot: &SurfaceSnapshot, id| {
            Surface::restore(
                snapshot,
                MemorySubject::new(id, "Ada"),
                catalog(),
                LayoutConfig::default(),
            )
            .map(|_| ())
        };
        assert_eq!(
            restore(&saved(1, &[("A", true)]), 2),
            Err(RestoreError::SubjectMismatch {
                expected: SubjectId(1),
                found: SubjectId(2)
            })
        );
        assert_eq!(
            restore(&saved(1, &[("Z", true)]), 1),
            Err(RestoreError::UnknownCategory {
                subject: SubjectId(1),
                key: "Z".into()
            })
        );
        assert_eq!(
            restore(&saved(1, &[("A", true), ("A", false)]), 1),
            Err(RestoreError::DuplicateCategory {
                subject: SubjectId(1),
                key: "A".into()
            })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = RestoreError::UnknownCategory {
            subject: SubjectId(7),
            key: "Smith".into(),
        };
        assert_eq!(
            err.to_string(),
            "subject 7: category 'Smith' is not in the catalog"
        );
    }

    #[test]
    fn snapshot_serializes_as_plain_json() {
        let json = serde_json::to_string(&saved(3, &[("A", true)])).unwrap();
        assert_eq!(json, r#"{"subject":3,"items":[{"key":"A","enabled":true}]}"#);
    }
}
