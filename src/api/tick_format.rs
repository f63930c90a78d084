use std::fmt::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::{DomainType, TickValue};
use crate::render::TickFormatFn;

use super::config::TickConfig;

/// Pattern used by time-series x axes without an explicit format.
pub const DEFAULT_AXIS_TIME_FORMAT: &str = "%Y-%m-%d";

/// Resolves the x tick label formatter.
///
/// Precedence: host closure, then a chrono pattern (time-series only), then
/// the domain-type default. `None` leaves formatting to the renderer.
#[must_use]
pub fn x_tick_format(
    tick: &TickConfig,
    domain_type: DomainType,
    category_names: Vec<String>,
) -> Option<TickFormatFn> {
    if let Some(format) = &tick.format_fn {
        return Some(format.to_format_fn());
    }

    match (domain_type, tick.format.as_deref()) {
        (DomainType::TimeSeries, Some(pattern)) => Some(time_format(pattern.to_owned())),
        (_, Some(_)) => None,
        (DomainType::TimeSeries, None) => Some(time_format(DEFAULT_AXIS_TIME_FORMAT.to_owned())),
        (DomainType::Categorical, None) => {
            Some(Arc::new(move |value: &TickValue| category_label(value, &category_names)))
        }
        (DomainType::Linear, None) => Some(Arc::new(default_number_label)),
    }
}

/// Resolves a y/y2 tick label formatter.
#[must_use]
pub fn y_tick_format(tick: &TickConfig, stack_normalized: bool) -> Option<TickFormatFn> {
    if let Some(format) = &tick.format_fn {
        return Some(format.to_format_fn());
    }
    stack_normalized.then(|| Arc::new(|value: &TickValue| format!("{value}%")) as TickFormatFn)
}

fn time_format(pattern: String) -> TickFormatFn {
    Arc::new(move |value: &TickValue| match value {
        TickValue::Time(time) => format_time(time, &pattern),
        TickValue::Number(millis) => DateTime::<Utc>::from_timestamp_millis(*millis as i64)
            .map(|time| format_time(&time, &pattern))
            .unwrap_or_default(),
        TickValue::Key(key) => key.clone(),
    })
}

fn format_time(time: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    // Invalid patterns surface as fmt errors instead of panicking.
    if write!(out, "{}", time.format(pattern)).is_err() {
        return time.to_rfc3339();
    }
    out
}

fn category_label(value: &TickValue, category_names: &[String]) -> String {
    match value {
        TickValue::Number(index) if *index >= 0.0 => category_names
            .get(index.round() as usize)
            .cloned()
            .unwrap_or_else(|| value.to_string()),
        _ => value.to_string(),
    }
}

fn default_number_label(value: &TickValue) -> String {
    match value {
        TickValue::Number(number) if *number < 0.0 => format!("{number:.0}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{x_tick_format, y_tick_format};
    use crate::api::config::{HostFn, TickConfig};
    use crate::core::{DomainType, TickValue};

    #[test]
    fn categorical_labels_fall_back_to_index() {
        let format = x_tick_format(
            &TickConfig::default(),
            DomainType::Categorical,
            vec!["a".to_owned(), "b".to_owned()],
        )
        .expect("default category format");
        assert_eq!(format(&TickValue::Number(1.0)), "b");
        assert_eq!(format(&TickValue::Number(4.0)), "4");
    }

    #[test]
    fn negative_numbers_drop_fraction() {
        let format = x_tick_format(&TickConfig::default(), DomainType::Linear, Vec::new())
            .expect("default number format");
        assert_eq!(format(&TickValue::Number(-2.6)), "-3");
        assert_eq!(format(&TickValue::Number(2.25)), "2.25");
    }

    #[test]
    fn time_pattern_applies_to_instants_and_millis() {
        let tick = TickConfig {
            format: Some("%d/%m".to_owned()),
            ..TickConfig::default()
        };
        let format = x_tick_format(&tick, DomainType::TimeSeries, Vec::new()).expect("time format");
        assert_eq!(format(&TickValue::Number(1_709_251_200_000.0)), "01/03");

        // a pattern on a linear axis leaves formatting to the renderer
        assert!(x_tick_format(&tick, DomainType::Linear, Vec::new()).is_none());
    }

    #[test]
    fn host_closure_wins_and_stack_normalized_adds_percent() {
        let tick = TickConfig {
            format_fn: Some(HostFn::new(Arc::new(|_: &TickValue| "custom".to_owned()))),
            ..TickConfig::default()
        };
        let format = y_tick_format(&tick, true).expect("custom");
        assert_eq!(format(&TickValue::Number(1.0)), "custom");

        let percent = y_tick_format(&TickConfig::default(), true).expect("percent");
        assert_eq!(percent(&TickValue::Number(40.0)), "40%");
        assert!(y_tick_format(&TickConfig::default(), false).is_none());
    }
}
