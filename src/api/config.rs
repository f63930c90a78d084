use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Domain, DomainType, TickSet, TickValue};
use crate::error::{AxisError, AxisResult};
use crate::render::TickFormatFn;

use super::tick_values::TickCount;

const DEFAULT_X_CULLING_MAX: usize = 10;
const DEFAULT_Y_CULLING_MAX: usize = 5;

/// Host-provided closure kept out of the serialized form.
pub struct HostFn<F: ?Sized>(pub Arc<F>);

impl<F: ?Sized> HostFn<F> {
    pub fn new(f: Arc<F>) -> Self {
        Self(f)
    }
}

impl<F: ?Sized> Clone for HostFn<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> Deref for HostFn<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> fmt::Debug for HostFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostFn(..)")
    }
}

pub type TickValuesFn = HostFn<dyn Fn() -> TickSet + Send + Sync + 'static>;
pub type TickCountCallback = HostFn<dyn Fn() -> usize + Send + Sync + 'static>;
pub type TickFormatCallback = HostFn<dyn Fn(&TickValue) -> String + Send + Sync + 'static>;

impl TickFormatCallback {
    #[must_use]
    pub fn to_format_fn(&self) -> TickFormatFn {
        Arc::clone(&self.0)
    }
}

/// Axis title: either the bare text or text plus a position keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisLabelConfig {
    Text(String),
    Detailed {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        position: Option<String>,
    },
}

impl AxisLabelConfig {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Detailed { text, .. } => text.as_deref(),
        }
    }

    /// Only the object form carries a position keyword.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Detailed { position, .. } => position.as_deref(),
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        match self {
            Self::Text(text) => *text = value.into(),
            Self::Detailed { text, .. } => *text = Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingUnit {
    /// Values are in axis domain units.
    Domain,
    #[serde(alias = "px")]
    Pixel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisPaddingConfig {
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    /// Defaults to domain units on x and pixels on y/y2.
    #[serde(default)]
    pub unit: Option<PaddingUnit>,
}

impl AxisPaddingConfig {
    #[must_use]
    pub fn unit_for(&self, id: AxisId) -> PaddingUnit {
        self.unit.unwrap_or(if id.is_x() {
            PaddingUnit::Domain
        } else {
            PaddingUnit::Pixel
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickConfig {
    #[serde(default)]
    pub values: Option<TickSet>,
    /// Takes precedence over `values`.
    #[serde(skip)]
    pub values_fn: Option<TickValuesFn>,
    #[serde(default)]
    pub count: Option<usize>,
    /// Takes precedence over `count`.
    #[serde(skip)]
    pub count_fn: Option<TickCountCallback>,
    /// chrono pattern for time-series axes.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(skip)]
    pub format_fn: Option<TickFormatCallback>,
    /// Tick label rotation in degrees.
    #[serde(default)]
    pub rotate: f64,
    #[serde(default)]
    pub autorotate: bool,
    /// `None` selects the per-axis default.
    #[serde(default)]
    pub culling: Option<bool>,
    #[serde(default)]
    pub culling_max: Option<usize>,
    #[serde(default = "default_true")]
    pub fit: bool,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default)]
    pub centered: bool,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default = "default_true")]
    pub outer: bool,
    #[serde(default)]
    pub step_size: Option<f64>,
    /// Interval count used by time-series y axes.
    #[serde(default)]
    pub time_interval: Option<usize>,
    /// chrono pattern used to parse string tick values on time-series axes.
    #[serde(default)]
    pub input_format: Option<String>,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            values: None,
            values_fn: None,
            count: None,
            count_fn: None,
            format: None,
            format_fn: None,
            rotate: 0.0,
            autorotate: false,
            culling: None,
            culling_max: None,
            fit: true,
            multiline: false,
            centered: false,
            width: None,
            outer: true,
            step_size: None,
            time_interval: None,
            input_format: None,
        }
    }
}

impl TickConfig {
    #[must_use]
    pub fn tick_count(&self) -> Option<TickCount> {
        match (&self.count_fn, self.count) {
            (Some(count), _) => Some(TickCount::Dynamic(Arc::clone(&count.0))),
            (None, Some(count)) if count > 0 => Some(TickCount::Fixed(count)),
            _ => None,
        }
    }

    /// Explicit tick values, evaluating the closure form when present.
    #[must_use]
    pub fn explicit_values(&self) -> Option<TickSet> {
        match &self.values_fn {
            Some(values) => Some(values()),
            None => self.values.clone(),
        }
    }

    #[must_use]
    pub fn has_explicit_values(&self) -> bool {
        self.values_fn.is_some() || self.values.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubAxisTickConfig {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub values: Option<TickSet>,
    #[serde(skip)]
    pub format_fn: Option<TickFormatCallback>,
    #[serde(default = "default_true")]
    pub outer: bool,
}

impl Default for SubAxisTickConfig {
    fn default() -> Self {
        Self {
            count: None,
            values: None,
            format_fn: None,
            outer: true,
        }
    }
}

/// One decorative axis drawn next to its base axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubAxisConfig {
    /// Overrides the base scale's domain.
    #[serde(default)]
    pub domain: Option<Domain>,
    #[serde(default)]
    pub tick: SubAxisTickConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisConfig {
    /// `None` selects the per-axis default (x/y shown, y2 hidden).
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default, rename = "type")]
    pub domain_type: DomainType,
    #[serde(default)]
    pub inner: bool,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub label: Option<AxisLabelConfig>,
    #[serde(default)]
    pub padding: AxisPaddingConfig,
    #[serde(default)]
    pub tick: TickConfig,
    #[serde(default)]
    pub axes: Vec<SubAxisConfig>,
}

impl AxisConfig {
    #[must_use]
    pub fn with_domain_type(mut self, domain_type: DomainType) -> Self {
        self.domain_type = domain_type;
        self
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: AxisLabelConfig) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: TickConfig) -> Self {
        self.tick = tick;
        self
    }

    #[must_use]
    pub fn with_sub_axes(mut self, axes: Vec<SubAxisConfig>) -> Self {
        self.axes = axes;
        self
    }

    fn validate(&self, id: AxisId) -> AxisResult<()> {
        let tick = &self.tick;
        if !tick.rotate.is_finite() {
            return Err(invalid(id, "tick rotation must be finite"));
        }
        if tick.culling_max == Some(0) {
            return Err(invalid(id, "tick culling max must be > 0"));
        }
        if tick.width.is_some_and(|width| !width.is_finite() || width <= 0.0) {
            return Err(invalid(id, "tick width must be finite and > 0"));
        }
        if tick
            .step_size
            .is_some_and(|step| !step.is_finite() || step <= 0.0)
        {
            return Err(invalid(id, "tick step size must be finite and > 0"));
        }
        if self
            .height
            .is_some_and(|height| !height.is_finite() || height < 0.0)
        {
            return Err(invalid(id, "axis height must be finite and >= 0"));
        }
        for side in [self.padding.left, self.padding.right].into_iter().flatten() {
            if !side.is_finite() || side < 0.0 {
                return Err(invalid(id, "axis padding must be finite and >= 0"));
            }
        }
        for (index, sub_axis) in self.axes.iter().enumerate() {
            let finite = sub_axis
                .domain
                .is_none_or(|domain| domain.lo().is_finite() && domain.hi().is_finite());
            if !finite {
                return Err(invalid(
                    id,
                    &format!("sub-axis {index} domain must be finite"),
                ));
            }
        }
        Ok(())
    }
}

/// Typed axis configuration snapshot.
///
/// Resolved once at load time; per-axis options are reached through
/// [`AxesConfig::axis`] with an [`AxisId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesConfig {
    #[serde(default)]
    pub rotated: bool,
    #[serde(default)]
    pub subchart: bool,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    #[serde(default)]
    pub zoom_rescale: bool,
    #[serde(default)]
    pub stack_normalized: bool,
    /// Series id to the axis it is plotted against.
    #[serde(default)]
    pub data_axes: IndexMap<String, AxisId>,
    #[serde(default)]
    pub x: AxisConfig,
    #[serde(default)]
    pub y: AxisConfig,
    #[serde(default)]
    pub y2: AxisConfig,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            rotated: false,
            subchart: false,
            transition_duration_ms: default_transition_duration_ms(),
            zoom_rescale: false,
            stack_normalized: false,
            data_axes: IndexMap::new(),
            x: AxisConfig::default(),
            y: AxisConfig::default(),
            y2: AxisConfig::default(),
        }
    }
}

impl AxesConfig {
    #[must_use]
    pub fn with_rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    #[must_use]
    pub fn with_subchart(mut self, subchart: bool) -> Self {
        self.subchart = subchart;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, id: AxisId, config: AxisConfig) -> Self {
        *self.axis_mut(id) = config;
        self
    }

    #[must_use]
    pub fn with_data_axis(mut self, series: impl Into<String>, axis: AxisId) -> Self {
        self.data_axes.insert(series.into(), axis);
        self
    }

    /// Configuration of `id`; `subX` reads the x options.
    #[must_use]
    pub fn axis(&self, id: AxisId) -> &AxisConfig {
        match id {
            AxisId::X | AxisId::SubX => &self.x,
            AxisId::Y => &self.y,
            AxisId::Y2 => &self.y2,
        }
    }

    pub fn axis_mut(&mut self, id: AxisId) -> &mut AxisConfig {
        match id {
            AxisId::X | AxisId::SubX => &mut self.x,
            AxisId::Y => &mut self.y,
            AxisId::Y2 => &mut self.y2,
        }
    }

    #[must_use]
    pub fn is_shown(&self, id: AxisId) -> bool {
        match id {
            AxisId::SubX => self.subchart,
            AxisId::X | AxisId::Y => self.axis(id).show.unwrap_or(true),
            AxisId::Y2 => self.y2.show.unwrap_or(false),
        }
    }

    #[must_use]
    pub fn is_categorized(&self) -> bool {
        self.x.domain_type == DomainType::Categorical
    }

    #[must_use]
    pub fn is_time_series(&self, id: AxisId) -> bool {
        self.axis(id).domain_type == DomainType::TimeSeries
    }

    /// Culling defaults to on for non-categorical x and off elsewhere.
    #[must_use]
    pub fn culling_enabled(&self, id: AxisId) -> bool {
        let config = self.axis(id);
        config.tick.culling.unwrap_or_else(|| {
            id.is_x() && config.domain_type != DomainType::Categorical
        })
    }

    #[must_use]
    pub fn culling_max(&self, id: AxisId) -> usize {
        self.axis(id).tick.culling_max.unwrap_or(if id.is_x() {
            DEFAULT_X_CULLING_MAX
        } else {
            DEFAULT_Y_CULLING_MAX
        })
    }

    /// `None` when transitions are disabled.
    #[must_use]
    pub fn transition_duration(&self) -> Option<Duration> {
        (self.transition_duration_ms > 0).then(|| Duration::from_millis(self.transition_duration_ms))
    }

    pub fn validate(&self) -> AxisResult<()> {
        for id in AxisId::CONFIGURED {
            self.axis(id).validate(id)?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(id: AxisId, message: &str) -> AxisError {
    AxisError::InvalidConfig(format!("axis `{id}`: {message}"))
}

fn default_true() -> bool {
    true
}

fn default_transition_duration_ms() -> u64 {
    350
}
