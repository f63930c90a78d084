use std::fmt;
use std::sync::Arc;

use crate::core::{Domain, DomainType, TickSet, TickValue};
use crate::error::{AxisError, AxisResult};

pub type TickCountFn = Arc<dyn Fn() -> usize + Send + Sync + 'static>;

/// Requested tick count; `Dynamic` is evaluated on every reduction so hosts
/// can derive it from the current width.
#[derive(Clone)]
pub enum TickCount {
    Fixed(usize),
    Dynamic(TickCountFn),
}

impl TickCount {
    #[must_use]
    pub fn resolve(&self) -> usize {
        match self {
            Self::Fixed(count) => *count,
            Self::Dynamic(count) => count(),
        }
    }
}

impl From<usize> for TickCount {
    fn from(count: usize) -> Self {
        Self::Fixed(count)
    }
}

impl fmt::Debug for TickCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => f.debug_tuple("Fixed").field(count).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Reduces `values` to an evenly spaced set of `count` ticks.
///
/// The first and last input values are kept as-is; interior ticks are
/// interpolated and coerced to instants (time series) or rounded to the
/// nearest category index (categorical). Non time-series output is sorted.
pub fn reduce_tick_values(
    values: &[TickValue],
    count: Option<&TickCount>,
    is_time_series: bool,
    is_categorical: bool,
) -> AxisResult<TickSet> {
    let target = count.map_or(0, TickCount::resolve);
    if target == 0 || values.is_empty() {
        return Ok(values.to_vec());
    }

    let first = &values[0];
    let last = &values[values.len() - 1];
    let mut ticks = match target {
        1 => vec![first.clone()],
        2 => vec![first.clone(), last.clone()],
        _ => {
            let domain_type = if is_time_series {
                DomainType::TimeSeries
            } else if is_categorical {
                DomainType::Categorical
            } else {
                DomainType::Linear
            };
            let start = numeric_endpoint(first, domain_type)?;
            let end = numeric_endpoint(last, domain_type)?;
            let interior = target - 2;
            let interval = (end - start) / (interior + 1) as f64;

            let mut ticks = Vec::with_capacity(target);
            ticks.push(first.clone());
            for index in 0..interior {
                let value = start + interval * (index + 1) as f64;
                ticks.push(if is_time_series {
                    TickValue::time_from_millis(value)?
                } else if is_categorical {
                    TickValue::Number(round_half_up(value))
                } else {
                    TickValue::Number(value)
                });
            }
            ticks.push(last.clone());
            ticks
        }
    };

    if !is_time_series {
        ticks.sort_by(TickValue::natural_cmp);
    }
    Ok(ticks)
}

/// Reduces a scale domain to `count` ticks.
///
/// A degenerate domain always yields a single tick.
pub fn reduce_domain_ticks(
    domain: Domain,
    count: &TickCount,
    is_time_series: bool,
) -> AxisResult<TickSet> {
    let bounds = if is_time_series {
        vec![
            TickValue::time_from_millis(domain.lo())?,
            TickValue::time_from_millis(domain.hi())?,
        ]
    } else {
        vec![TickValue::Number(domain.lo()), TickValue::Number(domain.hi())]
    };
    let count = if domain.is_degenerate() {
        TickCount::Fixed(1)
    } else {
        count.clone()
    };
    reduce_tick_values(&bounds, Some(&count), is_time_series, false)
}

fn numeric_endpoint(value: &TickValue, domain_type: DomainType) -> AxisResult<f64> {
    value.as_f64().ok_or_else(|| AxisError::DomainTypeMismatch {
        value: value.to_string(),
        domain_type,
    })
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{TickCount, reduce_domain_ticks, reduce_tick_values};
    use crate::core::{Domain, TickValue};
    use crate::error::AxisError;

    fn numbers(values: &[f64]) -> Vec<TickValue> {
        values.iter().copied().map(TickValue::Number).collect()
    }

    #[test]
    fn absent_or_zero_count_returns_input_unchanged() {
        let values = numbers(&[3.0, 1.0, 2.0]);
        assert_eq!(
            reduce_tick_values(&values, None, false, false).expect("reduce"),
            values
        );
        assert_eq!(
            reduce_tick_values(&values, Some(&TickCount::Fixed(0)), false, false).expect("reduce"),
            values
        );
    }

    #[test]
    fn interior_ticks_are_interpolated_between_first_and_last() {
        let values = numbers(&[0.0, 9.0]);
        let reduced =
            reduce_tick_values(&values, Some(&TickCount::Fixed(5)), false, false).expect("reduce");
        assert_eq!(reduced, numbers(&[0.0, 2.25, 4.5, 6.75, 9.0]));
    }

    #[test]
    fn categorical_interior_ticks_round_half_up() {
        let values = numbers(&[0.0, 9.0]);
        let reduced =
            reduce_tick_values(&values, Some(&TickCount::Fixed(5)), false, true).expect("reduce");
        assert_eq!(reduced, numbers(&[0.0, 2.0, 5.0, 7.0, 9.0]));
    }

    #[test]
    fn dynamic_count_is_evaluated_per_call() {
        let count = TickCount::Dynamic(std::sync::Arc::new(|| 3));
        let reduced = reduce_tick_values(&numbers(&[0.0, 1.0, 2.0, 10.0]), Some(&count), false, false)
            .expect("reduce");
        assert_eq!(reduced, numbers(&[0.0, 5.0, 10.0]));
    }

    #[test]
    fn time_series_interior_ticks_become_instants() {
        let start = TickValue::time_from_millis(0.0).expect("start");
        let end = TickValue::time_from_millis(3_000.0).expect("end");
        let reduced = reduce_tick_values(
            &[start.clone(), end.clone()],
            Some(&TickCount::Fixed(4)),
            true,
            false,
        )
        .expect("reduce");
        assert_eq!(
            reduced,
            vec![
                start,
                TickValue::time_from_millis(1_000.0).expect("t1"),
                TickValue::time_from_millis(2_000.0).expect("t2"),
                end,
            ]
        );
    }

    #[test]
    fn interpolating_string_keys_fails_loudly() {
        let values = vec![
            TickValue::Key("alpha".to_owned()),
            TickValue::Key("omega".to_owned()),
        ];
        let err = reduce_tick_values(&values, Some(&TickCount::Fixed(4)), true, false)
            .expect_err("keys cannot be interpolated");
        assert!(matches!(err, AxisError::DomainTypeMismatch { .. }));
    }

    #[test]
    fn degenerate_domain_forces_single_tick() {
        let reduced =
            reduce_domain_ticks(Domain::new(5.0, 5.0), &TickCount::Fixed(7), false).expect("reduce");
        assert_eq!(reduced, numbers(&[5.0]));
    }
}
