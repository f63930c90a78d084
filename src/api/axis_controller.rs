use tracing::{debug, trace};

use crate::core::{AxisId, DEFAULT_TIME_INPUT_FORMAT, Scale, SeriesTarget, TickSet, parse_date};
use crate::error::AxisResult;
use crate::render::{AxisRenderConfig, AxisRenderer, DEFAULT_OUTER_TICK_SIZE};

use super::data_source::{AxisDataSource, unique_xs};
use super::facade::AxisFacade;
use super::tick_format::{x_tick_format, y_tick_format};
use super::tick_values::reduce_tick_values;

/// Per-build switches of [`AxisFacade::get_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisParams {
    pub outer_tick: bool,
    pub without_transition: bool,
    /// Build with unrotated tick labels (measurement passes).
    pub without_tick_rotate: bool,
}

impl Default for AxisParams {
    fn default() -> Self {
        Self {
            outer_tick: true,
            without_transition: false,
            without_tick_rotate: false,
        }
    }
}

impl<R: AxisRenderer> AxisFacade<R> {
    /// Rebuilds the tick values and render configuration of `id`.
    pub fn set_axis(
        &mut self,
        id: AxisId,
        scale: &dyn Scale,
        zoom: Option<&dyn Scale>,
        params: AxisParams,
        data: &dyn AxisDataSource,
    ) -> AxisResult<()> {
        if id != AxisId::SubX {
            self.ticks[id] = self.tick_values(id);
        }
        let axis = self.get_axis(id, scale, zoom, params, data)?;
        trace!(axis = %id, ticks = ?axis.tick_values.as_ref().map(Vec::len), "set axis");
        self.axes[id] = Some(axis);
        Ok(())
    }

    /// Builds the render configuration of `id` without storing it.
    ///
    /// x axes render through `zoom` when the chart is zoomed. Explicit
    /// time-series x ticks are coerced to instants and fail with
    /// [`crate::AxisError::DomainTypeMismatch`] when they cannot be.
    pub fn get_axis(
        &self,
        id: AxisId,
        scale: &dyn Scale,
        zoom: Option<&dyn Scale>,
        params: AxisParams,
        data: &dyn AxisDataSource,
    ) -> AxisResult<AxisRenderConfig> {
        let config_id = id.config_id();
        let axis_config = self.config.axis(config_id);
        let tick = &axis_config.tick;
        let is_x = id.is_x();
        let is_category = is_x && self.config.is_categorized();

        let scale = if is_x { zoom.unwrap_or(scale) } else { scale };
        let mut axis = AxisRenderConfig::new(
            id,
            self.orientations[id],
            scale.domain(),
            scale.range(),
        );
        axis.rotation_angle = if params.without_tick_rotate {
            0.0
        } else {
            self.axis_tick_rotate(config_id)
        };
        axis.outer_tick_size = if params.outer_tick && tick.outer {
            DEFAULT_OUTER_TICK_SIZE
        } else {
            0.0
        };
        axis.without_transition = params.without_transition;
        axis.transition_duration = self.config.transition_duration();

        if is_x {
            axis.tick_format = x_tick_format(tick, axis_config.domain_type, data.categories());
            axis.multiline = tick.multiline;
            axis.tick_width = tick.width;
        } else {
            axis.tick_format = y_tick_format(tick, self.config.stack_normalized);
            axis.tick_step_size = tick.step_size;
        }

        let mut tick_values = self.ticks[config_id].clone();
        if is_x && self.config.is_time_series(config_id) {
            let input_format = tick.input_format.as_deref().unwrap_or(DEFAULT_TIME_INPUT_FORMAT);
            tick_values = tick_values
                .map(|values| {
                    values
                        .iter()
                        .map(|value| parse_date(value, input_format))
                        .collect::<AxisResult<TickSet>>()
                })
                .transpose()?;
        } else if !is_x && self.config.is_time_series(config_id) {
            axis.tick_time_interval = tick.time_interval;
            tick_values = None;
        }
        axis.tick_values = tick_values;

        if is_category {
            axis.is_category = true;
            axis.tick_centered = tick.centered;
        }
        axis.tick_count = tick
            .tick_count()
            .map(|count| count.resolve())
            .filter(|count| *count > 0);

        Ok(axis)
    }

    /// Configured tick values (closure first), else the values of the
    /// current render configuration.
    #[must_use]
    pub fn tick_values(&self, id: AxisId) -> Option<TickSet> {
        self.config
            .axis(id)
            .tick
            .explicit_values()
            .or_else(|| self.axes[id].as_ref().and_then(|axis| axis.tick_values.clone()))
    }

    /// Recomputes the fitted x tick values from the unique x values of
    /// `targets` and applies them to `axis`, or to x and subX when `None`.
    pub fn update_tick_values(
        &mut self,
        targets: &[&SeriesTarget],
        axis: Option<&mut AxisRenderConfig>,
    ) -> AxisResult<Option<TickSet>> {
        let tick = &self.config.x.tick;
        let is_time_series = self.config.is_time_series(AxisId::X);
        let values = if tick.fit {
            let count = tick.tick_count();
            Some(reduce_tick_values(
                &unique_xs(targets, is_time_series)?,
                count.as_ref(),
                is_time_series,
                self.config.is_categorized(),
            )?)
        } else {
            None
        };
        debug!(
            targets = targets.len(),
            ticks = ?values.as_ref().map(Vec::len),
            "update x tick values"
        );

        match axis {
            Some(axis) => axis.tick_values = values.clone(),
            None => {
                for id in [AxisId::X, AxisId::SubX] {
                    if let Some(axis) = self.axes[id].as_mut() {
                        axis.tick_values = values.clone();
                    }
                }
            }
        }
        Ok(values)
    }

    /// Effective tick label rotation of `id`, in degrees.
    ///
    /// With `autorotate` the configured x angle only applies once the widest
    /// cached label no longer fits its tick slot.
    #[must_use]
    pub fn axis_tick_rotate(&self, id: AxisId) -> f64 {
        let id = id.config_id();
        let tick = &self.config.axis(id).tick;
        if id != AxisId::X || !tick.autorotate {
            return tick.rotate;
        }

        let eligible = tick.fit
            && !self.config.culling_enabled(AxisId::X)
            && !tick.multiline
            && (self.config.is_categorized() || self.config.is_time_series(AxisId::X));
        if !eligible {
            return tick.rotate;
        }

        let entry = self.state.tick_widths.entry(AxisId::X);
        let tick_count = self.axes.x.as_ref().and_then(|axis| axis.tick_values.as_ref()).map_or(
            entry.per_tick_widths.len(),
            Vec::len,
        );
        if tick_count == 0 {
            return 0.0;
        }
        let tick_slot = self.state.dimensions.width / tick_count as f64;
        if entry.pixel_size > tick_slot {
            tick.rotate
        } else {
            0.0
        }
    }
}
