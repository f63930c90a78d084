use std::collections::HashMap;
use std::time::Duration;

use ordered_float::OrderedFloat;

use crate::core::{AxisId, AxisMap, Domain, TickValue};
use crate::error::{AxisError, AxisResult};
use crate::render::{
    AxisGroupSpec, AxisLabelLayout, AxisRenderConfig, AxisRenderer, DetachedTargetId,
    HeuristicTextMeasurer, SubAxisPaint, TextMeasurer,
};

const DEFAULT_RENDERER_TICK_COUNT: usize = 10;

/// Recorded state of one axis group painted by [`NullRenderer`].
#[derive(Debug, Clone)]
pub struct NullAxisGroup {
    pub spec: AxisGroupSpec,
    pub opacity: f64,
    pub tick_values: Vec<TickValue>,
    pub visibility: Vec<bool>,
    pub clip_path: bool,
    pub label: Option<AxisLabelLayout>,
    pub render_count: usize,
    pub last_transition: Option<Duration>,
    pub last_config: Option<AxisRenderConfig>,
}

/// Recorded state of one decorative sub-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct NullSubAxis {
    pub offset: f64,
    pub domain: Domain,
    pub range: (f64, f64),
    pub visible: bool,
    pub render_count: usize,
    pub last_transition: Option<Duration>,
}

/// Headless renderer used by tests and measurement-only hosts.
///
/// It keeps the painted state in memory and measures labels with
/// [`HeuristicTextMeasurer`].
#[derive(Debug)]
pub struct NullRenderer {
    pub font_size_px: f64,
    /// Forces every measured label to this width.
    pub fixed_label_width: Option<f64>,
    /// Makes the next detached render fail once.
    pub fail_next_measure: bool,
    pub measure_passes: usize,
    groups: AxisMap<Option<NullAxisGroup>>,
    sub_axes: AxisMap<Vec<NullSubAxis>>,
    detached: HashMap<DetachedTargetId, Vec<f64>>,
    next_detached_id: u64,
    measurer: HeuristicTextMeasurer,
    width_cache: HashMap<(String, OrderedFloat<f64>), f64>,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self {
            font_size_px: 10.0,
            fixed_label_width: None,
            fail_next_measure: false,
            measure_passes: 0,
            groups: AxisMap::default(),
            sub_axes: AxisMap::default(),
            detached: HashMap::new(),
            next_detached_id: 1,
            measurer: HeuristicTextMeasurer,
            width_cache: HashMap::new(),
        }
    }
}

impl NullRenderer {
    #[must_use]
    pub fn group(&self, id: AxisId) -> Option<&NullAxisGroup> {
        self.groups[id].as_ref()
    }

    #[must_use]
    pub fn sub_axes(&self, id: AxisId) -> &[NullSubAxis] {
        &self.sub_axes[id]
    }

    #[must_use]
    pub fn live_detached_targets(&self) -> usize {
        self.detached.len()
    }

    /// Tick label values currently displayed for `id`.
    #[must_use]
    pub fn visible_tick_labels(&self, id: AxisId) -> Vec<TickValue> {
        let Some(group) = self.group(id) else {
            return Vec::new();
        };
        group
            .tick_values
            .iter()
            .zip(group.visibility.iter())
            .filter(|(_, visible)| **visible)
            .map(|(value, _)| value.clone())
            .collect()
    }

    fn label_width(&mut self, label: &str, multiline: bool) -> f64 {
        if let Some(width) = self.fixed_label_width {
            return width;
        }
        let font_size = self.font_size_px;
        let measurer = self.measurer;
        let lines: Vec<&str> = if multiline {
            label.split('\n').collect()
        } else {
            vec![label]
        };
        lines
            .into_iter()
            .map(|line| {
                *self
                    .width_cache
                    .entry((line.to_owned(), OrderedFloat(font_size)))
                    .or_insert_with(|| measurer.measure_width(line, font_size))
            })
            .fold(0.0, f64::max)
    }
}

fn rendered_ticks(config: &AxisRenderConfig) -> Vec<TickValue> {
    if let Some(values) = &config.tick_values {
        return values.clone();
    }

    let domain = config.domain;
    if config.is_category {
        let first = domain.lo().ceil() as i64;
        let last = domain.hi().floor() as i64;
        return (first..=last)
            .map(|index| TickValue::Number(index as f64))
            .collect();
    }
    if domain.is_degenerate() {
        return vec![TickValue::Number(domain.lo())];
    }

    let count = config
        .tick_time_interval
        .or(config.tick_count)
        .unwrap_or(DEFAULT_RENDERER_TICK_COUNT)
        .max(2);
    let denominator = (count - 1) as f64;
    (0..count)
        .map(|index| TickValue::Number(domain.lo() + domain.span() * (index as f64) / denominator))
        .collect()
}

impl AxisRenderer for NullRenderer {
    fn create_axis_group(&mut self, id: AxisId, spec: &AxisGroupSpec) -> AxisResult<()> {
        self.groups[id] = Some(NullAxisGroup {
            spec: *spec,
            opacity: 1.0,
            tick_values: Vec::new(),
            visibility: Vec::new(),
            clip_path: false,
            label: None,
            render_count: 0,
            last_transition: None,
            last_config: None,
        });
        Ok(())
    }

    fn has_axis_group(&self, id: AxisId) -> bool {
        self.groups[id].is_some()
    }

    fn render_axis(
        &mut self,
        config: &AxisRenderConfig,
        opacity: f64,
        transition: Option<Duration>,
    ) -> AxisResult<()> {
        let Some(group) = self.groups[config.id].as_mut() else {
            return Err(AxisError::Renderer(format!(
                "axis group `{}` was never created",
                config.id
            )));
        };
        let ticks = rendered_ticks(config);
        group.visibility = vec![true; ticks.len()];
        group.tick_values = ticks;
        group.opacity = opacity;
        group.render_count += 1;
        group.last_transition = if config.without_transition {
            None
        } else {
            transition
        };
        group.last_config = Some(config.clone());
        Ok(())
    }

    fn render_sub_axis(&mut self, paint: &SubAxisPaint<'_>) -> AxisResult<()> {
        let axes = &mut self.sub_axes[paint.id];
        let record = NullSubAxis {
            offset: paint.offset,
            domain: paint.config.domain,
            range: paint.config.range,
            visible: paint.visible,
            render_count: 1,
            last_transition: paint.transition,
        };
        if let Some(existing) = axes.get_mut(paint.index) {
            let render_count = existing.render_count + 1;
            *existing = NullSubAxis {
                render_count,
                ..record
            };
        } else if paint.index == axes.len() {
            axes.push(record);
        } else {
            return Err(AxisError::Renderer(format!(
                "sub-axis {} of `{}` appended out of order",
                paint.index, paint.id
            )));
        }
        Ok(())
    }

    fn has_sub_axis(&self, id: AxisId, index: usize) -> bool {
        index < self.sub_axes[id].len()
    }

    fn create_detached_target(&mut self) -> AxisResult<DetachedTargetId> {
        let id = DetachedTargetId(self.next_detached_id);
        self.next_detached_id += 1;
        self.detached.insert(id, Vec::new());
        Ok(id)
    }

    fn render_detached(
        &mut self,
        target: DetachedTargetId,
        config: &AxisRenderConfig,
    ) -> AxisResult<()> {
        self.measure_passes += 1;
        if self.fail_next_measure {
            self.fail_next_measure = false;
            return Err(AxisError::Renderer("detached render failed".to_owned()));
        }
        if !self.detached.contains_key(&target) {
            return Err(AxisError::Renderer(format!(
                "unknown detached target {}",
                target.0
            )));
        }

        let widths: Vec<f64> = rendered_ticks(config)
            .iter()
            .map(|value| {
                let label = config.format_tick(value);
                self.label_width(&label, config.multiline)
            })
            .collect();
        self.detached.insert(target, widths);
        Ok(())
    }

    fn detached_label_widths(&self, target: DetachedTargetId) -> AxisResult<Vec<f64>> {
        self.detached
            .get(&target)
            .cloned()
            .ok_or_else(|| AxisError::Renderer(format!("unknown detached target {}", target.0)))
    }

    fn remove_detached_target(&mut self, target: DetachedTargetId) {
        self.detached.remove(&target);
    }

    fn tick_label_values(&self, id: AxisId) -> Vec<TickValue> {
        self.group(id)
            .map(|group| group.tick_values.clone())
            .unwrap_or_default()
    }

    fn set_tick_label_visibility(&mut self, id: AxisId, visible: &[bool]) {
        if let Some(group) = self.groups[id].as_mut() {
            group.visibility = visible.to_vec();
        }
    }

    fn set_tick_label_clip_path(&mut self, id: AxisId, enabled: bool) {
        if let Some(group) = self.groups[id].as_mut() {
            group.clip_path = enabled;
        }
    }

    fn update_axis_label(
        &mut self,
        id: AxisId,
        layout: &AxisLabelLayout,
        _with_transition: bool,
    ) -> AxisResult<()> {
        if let Some(group) = self.groups[id].as_mut() {
            group.label = Some(layout.clone());
        }
        Ok(())
    }
}
