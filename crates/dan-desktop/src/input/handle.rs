//! Resize handles on a window frame

use serde::{Deserialize, Serialize};

/// Edge or corner a resize drag started from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// Parse a compass direction such as `"se"` or `"W"`
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction.to_ascii_lowercase().as_str() {
            "n" => Some(Self::N),
            "s" => Some(Self::S),
            "e" => Some(Self::E),
            "w" => Some(Self::W),
            "ne" => Some(Self::NE),
            "nw" => Some(Self::NW),
            "se" => Some(Self::SE),
            "sw" => Some(Self::SW),
            _ => None,
        }
    }

    /// Handle moves the left edge
    #[inline]
    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// Handle moves the right edge
    #[inline]
    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Handle moves the top edge
    #[inline]
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// Handle moves the bottom edge
    #[inline]
    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }
}
