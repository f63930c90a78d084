use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisId, AxisMap, Domain, ScaleSet};
use crate::error::AxisResult;
use crate::render::{AxisLabelLayout, AxisRenderer};

use super::culling::{cull_visibility, culling_interval};
use super::data_source::AxisDataSource;
use super::facade::{AxisFacade, AxisTransitions};
use super::label_position::{
    LabelDyInput, is_horizontal_label, label_dx, label_dy, label_text_anchor, label_x,
    resolve_label_position,
};
use super::multi_axis::SubAxisUpdate;
use super::tick_values::reduce_domain_ticks;

/// Height of a horizontal axis with unrotated tick labels.
const DEFAULT_AXIS_HEIGHT: f64 = 30.0;

/// What changed in the cycle that triggers [`AxisFacade::redraw_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedrawOptions {
    pub update_x_domain: bool,
    pub update_x_axis: bool,
    /// Value axes changed; also refreshes the sub-chart y scales.
    pub y: bool,
    /// Animate the axis title update.
    pub transition: bool,
}

/// Streaming ("flow") update in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowInfo {
    /// Number of points shifted in.
    pub length: usize,
    pub duration: Option<Duration>,
}

impl<R: AxisRenderer> AxisFacade<R> {
    /// Paints every built axis, then the sub-axes.
    ///
    /// Hidden axes are painted with opacity 0. After the initial pass,
    /// transitions follow the configured duration.
    pub fn redraw(
        &mut self,
        transitions: &AxisTransitions,
        hidden: bool,
        is_initial: bool,
        scales: &ScaleSet,
    ) -> AxisResult<()> {
        let opacity = if hidden { 0.0 } else { 1.0 };
        let without_transition = self.config.transition_duration_ms == 0;

        for id in [AxisId::X, AxisId::Y, AxisId::Y2, AxisId::SubX] {
            let Some(axis) = self.axes[id].as_mut() else {
                continue;
            };
            if !self.renderer.has_axis_group(id) {
                continue;
            }
            if !is_initial {
                axis.without_transition = without_transition;
            }
            self.renderer.render_axis(axis, opacity, transitions[id])?;
        }

        let visible = AxisMap::from_fn(|id| self.config.is_shown(id));
        self.multi_axis.update_axes(
            &mut self.renderer,
            scales,
            &visible,
            SubAxisUpdate {
                spacing: self.state.dimensions.sub_axis_spacing,
                transition: self.config.transition_duration(),
            },
        )
    }

    /// Full per-cycle orchestration: domains, ticks, paint, titles, culling.
    pub fn redraw_axis(
        &mut self,
        scales: &mut ScaleSet,
        data: &dyn AxisDataSource,
        options: RedrawOptions,
        transitions: &AxisTransitions,
        flow: Option<FlowInfo>,
        is_initial: bool,
    ) -> AxisResult<()> {
        let visible = data.visible_targets();
        let has_zoom = scales.zoom.is_some();

        if !has_zoom && self.config.is_categorized() && visible.is_empty() {
            let rendered = self.renderer.tick_label_values(AxisId::X).len();
            if let Some(x) = scales.x.as_mut() {
                x.set_domain(Domain::new(0.0, rendered as f64));
            }
        }

        if scales.x.is_some() && !visible.is_empty() {
            if !has_zoom && options.update_x_domain {
                if let (Some(x), Some(domain)) = (scales.x.as_mut(), data.x_domain(&visible)) {
                    debug!(lo = domain.lo(), hi = domain.hi(), "update x domain");
                    x.set_domain(domain);
                }
            }
            if !self.config.x.tick.has_explicit_values() {
                self.update_tick_values(&visible, None)?;
            }
        } else {
            for id in [AxisId::X, AxisId::SubX] {
                if let Some(axis) = self.axes[id].as_mut() {
                    axis.tick_values = Some(Vec::new());
                }
            }
        }

        let x_window = if self.config.zoom_rescale && flow.is_none() {
            scales.x.as_ref().and_then(|x| x.org_domain())
        } else {
            None
        };

        for id in [AxisId::Y, AxisId::Y2] {
            let Some(scale) = scales.get_mut(id) else {
                continue;
            };
            if let Some(domain) = data.y_domain(&visible, id, x_window) {
                scale.set_domain(domain);
            }

            let tick = &self.config.axis(id).tick;
            if tick.has_explicit_values() {
                continue;
            }
            let (Some(count), Some(axis)) = (tick.tick_count(), self.axes[id].as_mut()) else {
                continue;
            };
            let domain = scale.domain();
            axis.tick_values = Some(reduce_domain_ticks(
                domain,
                &count,
                self.config.is_time_series(id),
            )?);
            debug!(axis = %id, lo = domain.lo(), hi = domain.hi(), "recompute value ticks");
        }

        self.redraw(transitions, data.has_arc_type(), is_initial, scales)?;
        self.update_label_text(options.transition)?;

        if (options.update_x_domain || options.update_x_axis || options.y) && !visible.is_empty() {
            self.set_culling();
        }

        if options.y {
            let sub_y = data.y_domain(&visible, AxisId::Y, None);
            let sub_y2 = data.y_domain(&visible, AxisId::Y2, None);
            if let (Some(scale), Some(domain)) = (scales.sub_y.as_mut(), sub_y) {
                scale.set_domain(domain);
            }
            if let (Some(scale), Some(domain)) = (scales.sub_y2.as_mut(), sub_y2) {
                scale.set_domain(domain);
            }
        }
        Ok(())
    }

    /// Repositions and re-texts the x, y and y2 titles.
    ///
    /// Offsets use the cached tick widths; no measurement pass runs here.
    pub fn update_label_text(&mut self, with_transition: bool) -> AxisResult<()> {
        let rotated = self.config.rotated;
        let Self {
            renderer,
            config,
            state,
            ..
        } = self;
        let dimensions = state.dimensions;

        for id in [AxisId::X, AxisId::Y, AxisId::Y2] {
            if !renderer.has_axis_group(id) {
                continue;
            }
            let axis_config = config.axis(id);
            let label = axis_config.label.as_ref();
            let flags = resolve_label_position(label.and_then(|label| label.position()), id, rotated);
            let horizontal = is_horizontal_label(id, rotated);
            let max_tick_width = state.tick_widths.size(id);
            let rotate = axis_config.tick.rotate;
            let tick_rotate_height = if rotate == 0.0 {
                0.0
            } else {
                axis_config.height.unwrap_or(DEFAULT_AXIS_HEIGHT)
                    + max_tick_width * rotate.to_radians().sin().abs()
            };

            let layout = AxisLabelLayout {
                text: label.and_then(|label| label.text()).map(str::to_owned),
                x: label_x(flags, horizontal, dimensions.width, dimensions.height),
                dx: label_dx(flags, horizontal),
                dy: label_dy(LabelDyInput {
                    id,
                    rotated,
                    flags,
                    axis_height: axis_config.height,
                    tick_rotate_height,
                    max_tick_width,
                    axis_inner: axis_config.inner,
                }),
                text_anchor: label_text_anchor(flags, horizontal),
            };
            renderer.update_axis_label(id, &layout, with_transition)?;
        }
        Ok(())
    }

    /// Hides tick labels so at most the configured maximum stay visible.
    ///
    /// subX follows the x culling options; the x label clip-path follows the
    /// last measurement pass.
    pub fn set_culling(&mut self) {
        for id in [AxisId::SubX, AxisId::X, AxisId::Y, AxisId::Y2] {
            if !self.renderer.has_axis_group(id) || !self.config.culling_enabled(id) {
                continue;
            }

            let values = self.renderer.tick_label_values(id);
            let max_visible = self.config.culling_max(id);
            let visibility = cull_visibility(&values, max_visible);
            debug!(
                axis = %id,
                ticks = values.len(),
                interval = ?culling_interval(values.len(), max_visible),
                "cull tick labels"
            );
            self.renderer.set_tick_label_visibility(id, &visibility);

            if id == AxisId::X {
                let clip = self.state.tick_widths.entry(AxisId::X).needs_clip_path;
                self.renderer.set_tick_label_clip_path(AxisId::X, clip);
            }
        }
    }
}
