// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Widgets for ranking and toggling per-subject work priorities.
//!
//! # Role in the work tab
//! A [`Session`] shows one [`Surface`] row per subject under a strip of
//! [`CategoryHeader`]s. Users drag items within a row to rank categories,
//! shift-click to toggle them, and use the headers to move or toggle one
//! category on every row at once.
//!
//! # Data flow
//! ```text
//! host pointer event ─▶ Session::process_event ─▶ headers ─▶ surfaces
//!                                                   │           │
//!                                                   ▼           ▼
//!                                             Notifier     Subject store
//! ```
//!
//! At most one item is dragged at a time; the [`DragSlot`] threaded through
//! dispatch enforces it. Priorities are always derived from on-screen order
//! after a reorder, never edited directly.

mod ctx;
pub mod drag;
pub mod header;
pub mod item;
pub mod notify;
pub mod persist;
pub mod session;
pub mod surface;

pub use ctx::EventCtx;
pub use drag::{ActiveDrag, DragSlot};
pub use header::{CategoryHeader, HeaderOutcome};
pub use item::{DraggableItem, ItemAction};
pub use notify::Notifier;
pub use persist::{ItemSnapshot, RestoreError, SessionSnapshot, SurfaceSnapshot};
pub use session::{Session, SessionEvent, SessionLayout};
pub use surface::{Surface, SurfaceOutcome};
