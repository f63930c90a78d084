use tracing::{debug, trace, warn};

use crate::core::{AxisId, ScaleSet};
use crate::error::AxisResult;
use crate::render::{AxisRenderer, DetachedTarget};

use super::axis_controller::AxisParams;
use super::data_source::AxisDataSource;
use super::facade::AxisFacade;
use super::overflow::{OverflowInput, tick_text_y2_overflow};
use super::padding::{XAxisPadding, x_axis_padding};
use super::tick_values::reduce_domain_ticks;

impl<R: AxisRenderer> AxisFacade<R> {
    /// Widest tick label of `id`, in pixels.
    ///
    /// Labels are re-measured in a detached render target only when the live
    /// domain changed since the last measurement. Hidden axes, empty data,
    /// degenerate domains and renderer failures all return the cached width.
    pub fn get_max_label_width(
        &mut self,
        id: AxisId,
        skip_recompute: bool,
        scales: &ScaleSet,
        data: &dyn AxisDataSource,
    ) -> AxisResult<f64> {
        let cached = self.state.tick_widths.size(id);
        let visible = data.visible_targets();
        if skip_recompute || !self.config.is_shown(id) || visible.is_empty() {
            return Ok(cached);
        }
        let Some(base) = scales.get(id) else {
            return Ok(cached);
        };

        let domain = if id.is_y() {
            data.y_domain(&visible, id, None)
        } else {
            data.x_domain(&visible)
        };
        let Some(domain) = domain else {
            return Ok(cached);
        };
        if self.state.tick_widths.entry(id).is_fresh_for(domain) {
            self.state.tick_widths.record_hit();
            trace!(axis = %id, width = cached, "tick width cache hit");
            return Ok(cached);
        }
        self.state.tick_widths.record_miss();

        let mut scale = base.copy();
        scale.set_domain(domain);
        let params = AxisParams {
            outer_tick: false,
            without_transition: false,
            without_tick_rotate: true,
        };
        let mut axis = self.get_axis(id, scale.as_ref(), None, params, data)?;

        let config_id = id.config_id();
        let tick = &self.config.axis(config_id).tick;
        let count = if tick.has_explicit_values() {
            None
        } else {
            tick.tick_count()
        };
        if let Some(count) = count {
            axis.tick_values = Some(reduce_domain_ticks(
                domain,
                &count,
                self.config.is_time_series(config_id),
            )?);
        }
        if !id.is_y() {
            self.update_tick_values(&visible, Some(&mut axis))?;
        }

        let widths = match DetachedTarget::acquire(&mut self.renderer)
            .and_then(|mut target| target.measure_labels(&axis))
        {
            Ok(widths) => widths,
            Err(err) => {
                warn!(axis = %id, error = %err, "skipping tick label measurement");
                return Ok(cached);
            }
        };

        let is_x = id == AxisId::X;
        if !self
            .state
            .tick_widths
            .entry_mut(id)
            .store(domain, &widths, is_x)
        {
            debug!(axis = %id, "tick label measurement returned no width");
            return Ok(self.state.tick_widths.size(id));
        }

        // autorotate reads the width just stored
        if is_x {
            let rotate = self.axis_tick_rotate(id);
            let tick_slot = self.state.dimensions.width / widths.len() as f64;
            let entry = self.state.tick_widths.entry_mut(id);
            entry.needs_clip_path = rotate == 0.0 && entry.pixel_size > tick_slot;
        }
        let width = self.state.tick_widths.size(id);
        debug!(
            axis = %id,
            width,
            ticks = widths.len(),
            "measured tick labels"
        );
        Ok(width)
    }

    /// Resolves and stores the x padding used by overflow estimation.
    pub fn update_x_axis_padding(
        &mut self,
        tick_count: usize,
        data: &dyn AxisDataSource,
    ) -> XAxisPadding {
        let all: Vec<_> = data.targets().iter().collect();
        let padding = x_axis_padding(
            &self.config.x.padding,
            self.config.is_time_series(AxisId::X),
            data.x_domain(&all),
            tick_count,
        );
        self.state.x_padding = padding;
        padding
    }

    /// Right padding to reserve for rotated x tick labels.
    ///
    /// Reads the per-tick widths of the last x measurement pass.
    #[must_use]
    pub fn x_axis_tick_text_y2_overflow(
        &self,
        default_padding: f64,
        data: &dyn AxisDataSource,
    ) -> f64 {
        let dimensions = self.state.dimensions;
        let entry = self.state.tick_widths.entry(AxisId::X);
        let input = OverflowInput {
            tick_widths: &entry.per_tick_widths,
            rotate: self.axis_tick_rotate(AxisId::X),
            padding: self.state.x_padding,
            is_categorized: self.config.is_categorized(),
            is_time_series: self.config.is_time_series(AxisId::X),
            fit: self.config.x.tick.fit,
            culling: self.config.culling_enabled(AxisId::X),
            multiline: self.config.x.tick.multiline,
            x_domain_max: data.x_domain_max().unwrap_or(0.0),
        };
        tick_text_y2_overflow(
            &input,
            dimensions.current_width - dimensions.padding_left,
            default_padding,
        )
    }
}
