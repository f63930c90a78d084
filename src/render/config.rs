use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{AxisId, Domain, Orientation, TickSet, TickValue};

pub type TickFormatFn = Arc<dyn Fn(&TickValue) -> String + Send + Sync + 'static>;

/// Default outer tick length, in pixels.
pub const DEFAULT_OUTER_TICK_SIZE: f64 = 6.0;

/// Everything a renderer needs to paint (or measure) one axis.
#[derive(Clone)]
pub struct AxisRenderConfig {
    pub id: AxisId,
    pub orientation: Orientation,
    pub domain: Domain,
    pub range: (f64, f64),
    /// Explicit ticks; `None` lets the renderer pick `tick_count` ticks.
    pub tick_values: Option<TickSet>,
    pub tick_count: Option<usize>,
    pub tick_format: Option<TickFormatFn>,
    /// Tick label rotation in degrees.
    pub rotation_angle: f64,
    pub outer_tick_size: f64,
    pub transition_duration: Option<Duration>,
    pub without_transition: bool,
    pub is_category: bool,
    pub tick_centered: bool,
    pub multiline: bool,
    pub tick_width: Option<f64>,
    pub tick_step_size: Option<f64>,
    /// Interval count for time-series y axes.
    pub tick_time_interval: Option<usize>,
}

impl AxisRenderConfig {
    #[must_use]
    pub fn new(id: AxisId, orientation: Orientation, domain: Domain, range: (f64, f64)) -> Self {
        Self {
            id,
            orientation,
            domain,
            range,
            tick_values: None,
            tick_count: None,
            tick_format: None,
            rotation_angle: 0.0,
            outer_tick_size: DEFAULT_OUTER_TICK_SIZE,
            transition_duration: None,
            without_transition: false,
            is_category: false,
            tick_centered: false,
            multiline: false,
            tick_width: None,
            tick_step_size: None,
            tick_time_interval: None,
        }
    }

    #[must_use]
    pub fn format_tick(&self, value: &TickValue) -> String {
        match &self.tick_format {
            Some(format) => format(value),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for AxisRenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisRenderConfig")
            .field("id", &self.id)
            .field("orientation", &self.orientation)
            .field("domain", &self.domain)
            .field("range", &self.range)
            .field("tick_values", &self.tick_values)
            .field("tick_count", &self.tick_count)
            .field("tick_format", &self.tick_format.is_some())
            .field("rotation_angle", &self.rotation_angle)
            .field("outer_tick_size", &self.outer_tick_size)
            .field("transition_duration", &self.transition_duration)
            .field("without_transition", &self.without_transition)
            .field("is_category", &self.is_category)
            .field("tick_centered", &self.tick_centered)
            .field("multiline", &self.multiline)
            .field("tick_width", &self.tick_width)
            .field("tick_step_size", &self.tick_step_size)
            .field("tick_time_interval", &self.tick_time_interval)
            .finish()
    }
}

/// One decorative sub-axis paint request.
#[derive(Debug, Clone, Copy)]
pub struct SubAxisPaint<'a> {
    pub id: AxisId,
    pub index: usize,
    pub config: &'a AxisRenderConfig,
    /// Distance from the base axis along the orientation's outward normal.
    pub offset: f64,
    pub visible: bool,
    pub transition: Option<Duration>,
}
