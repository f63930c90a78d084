//! Prediction of how far rotated x tick labels run past the plot's trailing
//! edge, so the caller can reserve right padding before layout.

use crate::core::{Domain, LinearScale, Scale};

use super::padding::XAxisPadding;

/// Geometry of the x tick labels measured by the last measurement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowInput<'a> {
    /// Per-tick label widths in render order.
    pub tick_widths: &'a [f64],
    /// Effective tick rotation, in degrees.
    pub rotate: f64,
    pub padding: XAxisPadding,
    pub is_categorized: bool,
    pub is_time_series: bool,
    pub fit: bool,
    pub culling: bool,
    pub multiline: bool,
    /// Largest x of the loaded data.
    pub x_domain_max: f64,
}

impl OverflowInput<'_> {
    /// Only rotated, fitted, unculled single-line category or time labels can overflow.
    #[must_use]
    pub fn applies(&self) -> bool {
        (self.is_categorized || self.is_time_series)
            && self.fit
            && !self.culling
            && !self.multiline
            && self.rotate > 0.0
            && self.rotate < 90.0
    }
}

/// Worst-case protrusion of a rotated tick label, plus the half-tick
/// correction on non time-series axes.
#[must_use]
pub fn max_tick_overflow(input: &OverflowInput<'_>, available_width: f64) -> f64 {
    let max_overflow = max_label_overflow(input, available_width);
    if input.is_time_series {
        return max_overflow;
    }

    // TODO: the auxiliary domain mixes padding fractions with domain units;
    // audit against rendered output before changing it.
    let half_tick = LinearScale::new(
        Domain::new(
            -input.padding.left,
            input.x_domain_max + 1.0 + input.padding.right,
        ),
        (0.0, available_width - max_overflow),
    )
    .map_or(0.0, |scale| ((scale.map(1.0) - scale.map(0.0)) / 2.0).ceil());

    max_overflow + half_tick
}

/// Largest per-label overflow, never below zero.
#[must_use]
pub fn max_label_overflow(input: &OverflowInput<'_>, available_width: f64) -> f64 {
    let tick_count = input.tick_widths.len() as f64;
    let remaining = tick_count
        - if input.is_time_series && input.fit {
            0.5
        } else {
            0.0
        };
    let before_offset = if input.is_time_series { 1.0 } else { 0.5 };
    let cos = (input.rotate.to_radians()).cos();

    input
        .tick_widths
        .iter()
        .enumerate()
        .filter_map(|(index, width)| {
            let tick_pos = (index + 1) as f64;
            let rotated_width = cos * width;
            let ticks_before = tick_pos - before_offset + input.padding.left;
            if ticks_before <= 0.0 {
                return None;
            }

            let tick_length = (available_width - rotated_width) / ticks_before;
            let remaining_width =
                (remaining - tick_pos) * tick_length + input.padding.right * tick_length;
            Some(rotated_width - tick_length / 2.0 - remaining_width)
        })
        .fold(0.0, f64::max)
}

/// Extra right padding reserved for rotated x labels.
///
/// `default_padding` is always added on top of the estimate; the result never
/// exceeds half of `width_without_padding_left`.
#[must_use]
pub fn tick_text_y2_overflow(
    input: &OverflowInput<'_>,
    width_without_padding_left: f64,
    default_padding: f64,
) -> f64 {
    if !input.applies() {
        return 0.0;
    }

    let max_overflow = max_tick_overflow(input, width_without_padding_left - default_padding);
    (max_overflow.max(0.0) + default_padding).min(width_without_padding_left / 2.0)
}
