use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PlacementConfig;
use crate::geometry::{Rect, Size};

/// Side of the trigger a caller asks the popover to open on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown popover side `{0}` (expected top, right, bottom or left)")]
pub struct ParseSideError(pub String);

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Placements to try for this side, most preferred first.
    pub fn priority(self) -> &'static [Placement; 10] {
        PRIORITY_MAPPING.get(self)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Side::Top),
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            _ => Err(ParseSideError(value.to_string())),
        }
    }
}

/// Where the body ends up relative to the trigger.
///
/// The first half names the trigger side the body sits on; the second half names the
/// direction the body extends along that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopCenter,
    TopRight,
    TopLeft,
    BottomCenter,
    BottomRight,
    BottomLeft,
    RightTop,
    RightBottom,
    LeftTop,
    LeftBottom,
}

impl Placement {
    pub fn side(self) -> Side {
        match self {
            Placement::TopCenter | Placement::TopRight | Placement::TopLeft => Side::Top,
            Placement::BottomCenter | Placement::BottomRight | Placement::BottomLeft => {
                Side::Bottom
            }
            Placement::RightTop | Placement::RightBottom => Side::Right,
            Placement::LeftTop | Placement::LeftBottom => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::TopCenter => "top-center",
            Placement::TopRight => "top-right",
            Placement::TopLeft => "top-left",
            Placement::BottomCenter => "bottom-center",
            Placement::BottomRight => "bottom-right",
            Placement::BottomLeft => "bottom-left",
            Placement::RightTop => "right-top",
            Placement::RightBottom => "right-bottom",
            Placement::LeftTop => "left-top",
            Placement::LeftBottom => "left-bottom",
        }
    }

    /// Rectangle the body occupies for this placement, before any fitting or clamping.
    pub fn candidate_rect(
        self,
        trigger: &Rect,
        arrow: &Size,
        body: &Size,
        config: &PlacementConfig,
    ) -> Rect {
        let offset = config.arrow_offset;
        let trigger_mid_x = trigger.left + trigger.width / 2.0;
        let trigger_mid_y = trigger.top + trigger.height / 2.0;

        let above = trigger.top - body.height - arrow.height;
        let below = trigger.bottom() + arrow.height;
        let centered_x = trigger_mid_x - body.width / 2.0;
        let extends_right = trigger_mid_x - offset - arrow.width / 2.0;
        let extends_left = trigger_mid_x + offset + arrow.width / 2.0 - body.width;

        // The arrow points sideways on left/right placements, so its height is the gap.
        let right_of = trigger.right() + arrow.height;
        let left_of = trigger.left - body.width - arrow.height;
        let extends_down = trigger_mid_y - offset - arrow.height;
        let extends_up = trigger_mid_y - body.height + offset + arrow.height;

        let (top, left) = match self {
            Placement::TopCenter => (above, centered_x),
            Placement::TopRight => (above, extends_right),
            Placement::TopLeft => (above, extends_left),
            Placement::BottomCenter => (below, centered_x),
            Placement::BottomRight => (below, extends_right),
            Placement::BottomLeft => (below, extends_left),
            Placement::RightTop => (extends_down, right_of),
            Placement::RightBottom => (extends_up, right_of),
            Placement::LeftTop => (extends_down, left_of),
            Placement::LeftBottom => (extends_up, left_of),
        };

        Rect {
            top,
            left,
            width: body.width,
            height: body.height,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered candidate placements for every preferred side.
#[derive(Debug)]
pub struct PriorityMapping {
    pub top: [Placement; 10],
    pub right: [Placement; 10],
    pub bottom: [Placement; 10],
    pub left: [Placement; 10],
}

impl PriorityMapping {
    pub const fn get(&self, side: Side) -> &[Placement; 10] {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

use Placement::{
    BottomCenter, BottomLeft, BottomRight, LeftBottom, LeftTop, RightBottom, RightTop,
    TopCenter, TopLeft, TopRight,
};

// Stay on the requested axis first (centered, then flipped), then try the perpendicular
// sides, and only then the corner alignments.
pub static PRIORITY_MAPPING: PriorityMapping = PriorityMapping {
    top: [
        TopCenter,
        BottomCenter,
        RightTop,
        LeftTop,
        TopRight,
        TopLeft,
        BottomRight,
        BottomLeft,
        RightBottom,
        LeftBottom,
    ],
    bottom: [
        BottomCenter,
        TopCenter,
        RightTop,
        LeftTop,
        BottomRight,
        BottomLeft,
        TopRight,
        TopLeft,
        RightBottom,
        LeftBottom,
    ],
    left: [
        LeftTop,
        LeftBottom,
        RightTop,
        RightBottom,
        BottomCenter,
        TopCenter,
        BottomLeft,
        TopLeft,
        BottomRight,
        TopRight,
    ],
    right: [
        RightTop,
        RightBottom,
        LeftTop,
        LeftBottom,
        BottomCenter,
        TopCenter,
        BottomRight,
        TopRight,
        BottomLeft,
        TopLeft,
    ],
};
