use crate::core::TickValue;

/// Smallest stride `i` with `tick_count / i < max_visible`.
///
/// A stride of `tick_count + 1` always satisfies it for `max_visible >= 1`, so
/// `None` only comes back for no ticks or a zero cap; every label then stays
/// visible.
#[must_use]
pub fn culling_interval(tick_count: usize, max_visible: usize) -> Option<usize> {
    if tick_count == 0 {
        return None;
    }
    (1..=tick_count + 1)
        .find(|interval| (tick_count as f64) / (*interval as f64) < max_visible as f64)
}

/// Visibility of each rendered label, in render order.
///
/// Labels are ranked by the natural ordering of their values; a label is kept
/// when its rank is a multiple of the culling stride. Equal values share the
/// rank of their first occurrence.
#[must_use]
pub fn cull_visibility(values: &[TickValue], max_visible: usize) -> Vec<bool> {
    let mut sorted: Vec<&TickValue> = values.iter().collect();
    sorted.sort_by(|lhs, rhs| lhs.natural_cmp(rhs));

    let Some(interval) = culling_interval(sorted.len(), max_visible) else {
        return vec![true; values.len()];
    };

    values
        .iter()
        .map(|value| {
            sorted
                .iter()
                .position(|candidate| *candidate == value)
                .is_some_and(|rank| rank % interval == 0)
        })
        .collect()
}
