// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: pointer events, geometry, and host contracts for the work tab.
//!
//! # Role in the work tab
//! `worktab-core` is the input and environment layer. It owns the normalized
//! pointer event types, the event-translation layer that turns button and
//! modifier state into intents, the category catalog, and the traits the
//! widgets call into for anything outside the interaction model.
//!
//! # Primary responsibilities
//! - **PointerEvent**: canonical per-frame pointer input (press, release,
//!   drag, move, repaint).
//! - **Intents**: `HeaderIntent` / `ItemIntent` derived from modifiers.
//! - **Catalog**: the fixed, ordered set of work categories.
//! - **Host contracts**: `Subject` (capabilities + priority store),
//!   `Painter` (drawing), `Feedback` (sounds + messages).
//! - **Config**: feedback toggles and layout metrics, loadable from TOML/JSON.
//!
//! # How it fits in the system
//! `worktab-widgets` consumes these types and never talks to the host
//! directly; every side effect goes through one of the traits defined here.

pub mod catalog;
pub mod config;
pub mod event;
pub mod feedback;
pub mod geometry;
pub mod intent;
pub mod paint;
pub mod priority;
pub mod subject;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use catalog::{Catalog, CategoryDef, CategoryKey};
pub use config::{ConfigError, FeedbackConfig, LayoutConfig, WorktabConfig};
pub use event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
pub use feedback::{Feedback, Notice, NoticeKind, Silent, Sound};
pub use geometry::{Point, Rect};
pub use intent::{HeaderIntent, ItemIntent};
pub use paint::{Aptitude, IconTone, Painter, Rgba, Tooltip};
pub use priority::Priority;
pub use subject::{Subject, SubjectId};
