//! Axis title placement.
//!
//! Position keywords such as `"inner-top"` or `"outer-center"` are parsed into
//! flags; flags plus the chart geometry give the title's anchor point, fine
//! offsets and text anchor.

use serde::{Deserialize, Serialize};

use crate::core::AxisId;
use crate::render::{LabelOffset, TextAnchor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelPositionFlags {
    pub is_inner: bool,
    pub is_outer: bool,
    pub is_left: bool,
    pub is_center: bool,
    pub is_right: bool,
    pub is_top: bool,
    pub is_middle: bool,
    pub is_bottom: bool,
}

impl LabelPositionFlags {
    /// Membership test per token: `"inner-top"` sets both `is_inner` and
    /// `is_top`. Unknown keywords leave every flag unset.
    #[must_use]
    pub fn parse(keyword: &str) -> Self {
        let has = |token: &str| keyword.contains(token);
        Self {
            is_inner: has("inner"),
            is_outer: has("outer"),
            is_left: has("left"),
            is_center: has("center"),
            is_right: has("right"),
            is_top: has("top"),
            is_middle: has("middle"),
            is_bottom: has("bottom"),
        }
    }
}

/// Keyword used when the axis label has no explicit position.
#[must_use]
pub fn default_label_position(id: AxisId, rotated: bool) -> &'static str {
    match (id.config_id() == AxisId::X, rotated) {
        (true, false) | (false, true) => "inner-top",
        (true, true) | (false, false) => "inner-right",
    }
}

#[must_use]
pub fn resolve_label_position(keyword: Option<&str>, id: AxisId, rotated: bool) -> LabelPositionFlags {
    LabelPositionFlags::parse(keyword.unwrap_or_else(|| default_label_position(id, rotated)))
}

/// Whether the title of `id` runs along a horizontal axis line.
#[must_use]
pub fn is_horizontal_label(id: AxisId, rotated: bool) -> bool {
    (id.config_id() == AxisId::X) != rotated
}

#[must_use]
pub fn label_x(flags: LabelPositionFlags, horizontal: bool, width: f64, height: f64) -> f64 {
    if horizontal {
        if flags.is_left {
            0.0
        } else if flags.is_center {
            width / 2.0
        } else {
            width
        }
    } else if flags.is_bottom {
        -height
    } else if flags.is_middle {
        -height / 2.0
    } else {
        0.0
    }
}

#[must_use]
pub fn label_dx(flags: LabelPositionFlags, horizontal: bool) -> LabelOffset {
    if horizontal {
        if flags.is_left {
            LabelOffset::Em(0.5)
        } else if flags.is_right {
            LabelOffset::Em(-0.5)
        } else {
            LabelOffset::ZERO
        }
    } else if flags.is_top {
        LabelOffset::Em(-0.5)
    } else if flags.is_bottom {
        LabelOffset::Em(0.5)
    } else {
        LabelOffset::ZERO
    }
}

#[must_use]
pub fn label_text_anchor(flags: LabelPositionFlags, horizontal: bool) -> TextAnchor {
    if horizontal {
        if flags.is_left {
            TextAnchor::Start
        } else if flags.is_center {
            TextAnchor::Middle
        } else {
            TextAnchor::End
        }
    } else if flags.is_bottom {
        TextAnchor::Start
    } else if flags.is_middle {
        TextAnchor::Middle
    } else {
        TextAnchor::End
    }
}

/// Slots of the value-axis `dy` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DyTableSlot {
    RotatedInner = 0,
    RotatedTickRotate = 1,
    RotatedOuter = 2,
    Inner = 3,
    Outer = 4,
}

// Tuned so titles line up with tick text in every orientation. The
// tick-rotate and outer slots hold pixel offsets.
const Y_LABEL_DY: [LabelOffset; 5] = [
    LabelOffset::Em(-0.5),
    LabelOffset::Px(10.0),
    LabelOffset::Em(3.0),
    LabelOffset::Em(1.2),
    LabelOffset::Px(10.0),
];
const Y2_LABEL_DY: [LabelOffset; 5] = [
    LabelOffset::Em(1.2),
    LabelOffset::Px(-20.0),
    LabelOffset::Em(-2.2),
    LabelOffset::Em(-0.5),
    LabelOffset::Px(15.0),
];

/// Inputs of the title `dy` computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelDyInput {
    pub id: AxisId,
    pub rotated: bool,
    pub flags: LabelPositionFlags,
    /// Configured x axis height.
    pub axis_height: Option<f64>,
    /// Axis height reserved for rotated tick text; `0` when ticks are not rotated.
    pub tick_rotate_height: f64,
    pub max_tick_width: f64,
    /// The value axis itself is drawn inside the plot.
    pub axis_inner: bool,
}

#[must_use]
pub fn label_dy(input: LabelDyInput) -> LabelOffset {
    let LabelDyInput {
        id,
        rotated,
        flags,
        axis_height,
        tick_rotate_height,
        max_tick_width,
        axis_inner,
    } = input;

    let (table, sign) = match id.config_id() {
        AxisId::Y2 => (&Y2_LABEL_DY, -1.0),
        AxisId::Y => (&Y_LABEL_DY, 1.0),
        _ => {
            return if rotated {
                if flags.is_inner {
                    LabelOffset::Em(1.2)
                } else {
                    LabelOffset::Px(-25.0 - max_tick_width)
                }
            } else if flags.is_inner {
                LabelOffset::Em(-0.5)
            } else if let Some(height) = axis_height.filter(|height| *height != 0.0) {
                LabelOffset::Px(height - 10.0)
            } else if tick_rotate_height != 0.0 {
                LabelOffset::Px(tick_rotate_height - 10.0)
            } else {
                LabelOffset::Em(3.0)
            };
        }
    };

    let entry = |slot: DyTableSlot| table[slot as usize];
    let slot_px = |slot: DyTableSlot| match table[slot as usize] {
        LabelOffset::Px(px) => px,
        LabelOffset::Em(_) => 0.0,
    };

    if rotated {
        if flags.is_inner {
            entry(DyTableSlot::RotatedInner)
        } else if tick_rotate_height != 0.0 {
            LabelOffset::Px(tick_rotate_height * sign - slot_px(DyTableSlot::RotatedTickRotate))
        } else {
            entry(DyTableSlot::RotatedOuter)
        }
    } else if flags.is_inner {
        entry(DyTableSlot::Inner)
    } else {
        let outer = slot_px(DyTableSlot::Outer);
        let extent = if axis_inner {
            0.0
        } else {
            max_tick_width + outer
        };
        LabelOffset::Px((outer + extent) * -sign)
    }
}
