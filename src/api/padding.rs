use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Domain};

use super::config::{AxisPaddingConfig, PaddingUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingSide {
    Left,
    Right,
}

/// Resolved x padding; on time-series axes both sides are tick-width fractions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XAxisPadding {
    pub left: f64,
    pub right: f64,
}

/// Resolves the x padding used by overflow estimation.
///
/// `x_extent` is the x extent of all loaded series.
#[must_use]
pub fn x_axis_padding(
    padding: &AxisPaddingConfig,
    is_time_series: bool,
    x_extent: Option<Domain>,
    tick_count: usize,
) -> XAxisPadding {
    let left = padding.left.unwrap_or(0.0);
    let right = padding.right.unwrap_or(0.0);
    if !is_time_series {
        return XAxisPadding { left, right };
    }

    let time_diff = x_extent.map_or(0.0, Domain::span);
    let range = time_diff + left + right;
    let relative_tick_width = (time_diff / tick_count as f64) / range;
    let fraction = |side: f64| {
        let value = side / range / relative_tick_width;
        if value.is_finite() { value } else { 0.0 }
    };

    XAxisPadding {
        left: fraction(left),
        right: fraction(right),
    }
}

/// Converts a pixel padding into domain units along an axis `axis_length` pixels long.
#[must_use]
pub fn convert_pixels_to_axis_padding(pixels: f64, domain_length: f64, axis_length: f64) -> f64 {
    if axis_length <= 0.0 {
        return 0.0;
    }
    domain_length * (pixels / axis_length)
}

/// Padding of one domain side in domain units, or `default` when unset.
#[must_use]
pub fn axis_padding(
    id: AxisId,
    padding: &AxisPaddingConfig,
    side: PaddingSide,
    default: f64,
    domain_length: f64,
    axis_length: f64,
) -> f64 {
    let value = match side {
        PaddingSide::Left => padding.left,
        PaddingSide::Right => padding.right,
    };
    match (value, padding.unit_for(id)) {
        (None, _) => default,
        (Some(value), PaddingUnit::Domain) => value,
        (Some(pixels), PaddingUnit::Pixel) => {
            convert_pixels_to_axis_padding(pixels, domain_length, axis_length)
        }
    }
}
