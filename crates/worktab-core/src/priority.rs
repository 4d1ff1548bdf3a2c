#![forbid(unsafe_code)]

//! Work priority values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A work priority: a positive rank (1 = highest) or the disabled sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    /// The "disabled" sentinel.
    pub const DISABLED: Self = Self(0);

    /// Highest rank.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw stored value. Zero means disabled.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Rank for the item at zero-based `index` in a surface.
    #[must_use]
    pub fn from_rank(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1)))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_disabled(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_disabled() {
            f.write_str("disabled")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_one_based() {
        assert_eq!(Priority::from_rank(0), Priority::FIRST);
        assert_eq!(Priority::from_rank(4).get(), 5);
    }

    #[test]
    fn zero_is_disabled() {
        assert!(Priority::new(0).is_disabled());
        assert!(Priority::default().is_disabled());
        assert!(!Priority::FIRST.is_disabled());
        assert_eq!(Priority::DISABLED.to_string(), "disabled");
        assert_eq!(Priority::new(3).to_string(), "3");
    }
}
