#![forbid(unsafe_code)]

//! Drawing contract.
//!
//! The widgets describe what to draw through [`Painter`]; the host maps each
//! call onto its own rendering primitives (textures, highlight overlays,
//! tooltip regions, solid rectangles).

use crate::catalog::CategoryKey;
use crate::geometry::Rect;
use crate::priority::Priority;

/// A straight RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Outline for low aptitude.
    pub const LOW_SKILL: Self = Self::rgb(163, 111, 71);
    /// Outline for ordinary aptitude, also used by category headers.
    pub const MEDIUM_SKILL: Self = Self::rgb(196, 196, 196);
    /// Outline for high aptitude.
    pub const HIGH_SKILL: Self = Self::rgb(238, 198, 68);
    /// Outline for permanently unavailable work.
    pub const INCAPABLE: Self = Self::rgb(140, 38, 38);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// How well a subject performs a category. Drives the item outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aptitude {
    Low,
    #[default]
    Medium,
    High,
}

impl Aptitude {
    #[must_use]
    pub const fn outline(self) -> Rgba {
        match self {
            Self::Low => Rgba::LOW_SKILL,
            Self::Medium => Rgba::MEDIUM_SKILL,
            Self::High => Rgba::HIGH_SKILL,
        }
    }
}

/// Presentation state of a category icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTone {
    Enabled,
    /// Switched off by the user.
    Disabled,
    /// Permanently unavailable to the subject.
    Incapable,
}

/// Tooltip content. The host formats and localizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tooltip {
    Item {
        key: CategoryKey,
        label: String,
        subject: String,
        priority: Priority,
        tone: IconTone,
    },
    Header {
        key: CategoryKey,
        label: String,
        /// Whether the next toggle-all click disables the category.
        apply_all: bool,
    },
}

/// Rendering primitives used by the widgets.
pub trait Painter {
    /// Draw the icon texture of `key` inside `rect`.
    fn draw_icon(&mut self, rect: Rect, key: &CategoryKey, tone: IconTone);

    /// Draw a square outline around `rect`.
    fn draw_outline(&mut self, rect: Rect, color: Rgba);

    /// Draw the hover highlight over `rect`.
    fn draw_highlight(&mut self, rect: Rect);

    /// Register a tooltip region.
    fn tooltip(&mut self, rect: Rect, tooltip: Tooltip);

    /// Fill `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
}
