use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text element relative to its `x` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Text offset expressed either relative to the font size or in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LabelOffset {
    Em(f64),
    Px(f64),
}

impl LabelOffset {
    pub const ZERO: Self = Self::Px(0.0);

    #[must_use]
    pub fn to_px(self, font_size_px: f64) -> f64 {
        match self {
            Self::Em(em) => em * font_size_px,
            Self::Px(px) => px,
        }
    }
}

impl fmt::Display for LabelOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Em(em) => write!(f, "{em}em"),
            Self::Px(px) => write!(f, "{px}"),
        }
    }
}

/// Resolved placement of an axis title element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelLayout {
    pub text: Option<String>,
    pub x: f64,
    pub dx: LabelOffset,
    pub dy: LabelOffset,
    pub text_anchor: TextAnchor,
}

/// Axis group creation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGroupSpec {
    pub visible: bool,
    /// Clip the group to the axis clip path.
    pub clip_path: bool,
    /// Title element drawn rotated by -90 degrees.
    pub label_rotated: bool,
    pub label_anchor: TextAnchor,
}
