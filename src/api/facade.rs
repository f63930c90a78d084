use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisId, AxisMap, Orientation, ScaleSet, TickSet};
use crate::error::AxisResult;
use crate::render::{AxisGroupSpec, AxisRenderConfig, AxisRenderer};

use super::config::AxesConfig;
use super::label_position::{is_horizontal_label, label_text_anchor, resolve_label_position};
use super::multi_axis::MultiAxisManager;
use super::orientation::{
    AxisOrientations, OrientationInput, resolve_orientation, sub_axis_orientation,
};
use super::padding::XAxisPadding;
use super::tick_width_cache::TickWidthCache;

/// Optional transition duration per axis for one redraw.
pub type AxisTransitions = AxisMap<Option<Duration>>;

/// Chart geometry the axis core reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Plot area width.
    pub width: f64,
    /// Plot area height.
    pub height: f64,
    /// Full chart width.
    pub current_width: f64,
    /// Left padding currently applied to the plot.
    pub padding_left: f64,
    /// Distance between consecutive decorative sub-axes.
    #[serde(default = "default_sub_axis_spacing")]
    pub sub_axis_spacing: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            current_width: 640.0,
            padding_left: 0.0,
            sub_axis_spacing: default_sub_axis_spacing(),
        }
    }
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            current_width: width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding_left(mut self, padding_left: f64) -> Self {
        self.padding_left = padding_left;
        self.current_width = self.width + padding_left;
        self
    }
}

fn default_sub_axis_spacing() -> f64 {
    40.0
}

/// Long-lived mutable state owned by the facade.
#[derive(Debug, Default)]
pub struct AxisState {
    pub dimensions: Dimensions,
    pub tick_widths: TickWidthCache,
    pub x_padding: XAxisPadding,
}

/// Orchestrates tick selection, measurement, culling and title placement
/// for the x, subX, y and y2 axes.
///
/// The owning chart keeps its scales and data; they are lent per call
/// ([`ScaleSet`], [`super::AxisDataSource`]).
pub struct AxisFacade<R: AxisRenderer> {
    pub(super) renderer: R,
    pub(super) config: AxesConfig,
    pub(super) state: AxisState,
    pub(super) orientations: AxisOrientations,
    pub(super) axes: AxisMap<Option<AxisRenderConfig>>,
    /// Tick values captured by the last `set_axis` of each configured axis.
    pub(super) ticks: AxisMap<Option<TickSet>>,
    pub(super) multi_axis: MultiAxisManager,
}

impl<R: AxisRenderer> AxisFacade<R> {
    pub fn new(renderer: R, config: AxesConfig) -> AxisResult<Self> {
        config.validate()?;
        let mut facade = Self {
            renderer,
            config,
            state: AxisState::default(),
            orientations: AxisMap::from_fn(|_| Orientation::Bottom),
            axes: AxisMap::default(),
            ticks: AxisMap::default(),
            multi_axis: MultiAxisManager::default(),
        };
        facade.set_orientation();
        Ok(facade)
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.state.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AxesConfig {
        &self.config
    }

    /// Replaces the configuration and re-derives orientations.
    pub fn set_config(&mut self, config: AxesConfig) -> AxisResult<()> {
        config.validate()?;
        let labels_changed = AxisId::CONFIGURED.into_iter().any(|id| {
            let (current, next) = (self.config.axis(id), config.axis(id));
            current.domain_type != next.domain_type || current.tick.format != next.tick.format
        });
        if labels_changed {
            debug!("tick label text changed; dropping cached label widths");
            self.state.tick_widths.clear();
        }
        self.config = config;
        self.set_orientation();
        Ok(())
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.state.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.state.dimensions = dimensions;
    }

    #[must_use]
    pub fn state(&self) -> &AxisState {
        &self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn set_orientation(&mut self) {
        self.orientations = resolve_orientation(OrientationInput {
            rotated: self.config.rotated,
            y_inner: self.config.y.inner,
            y2_inner: self.config.y2.inner,
        });
        debug!(
            rotated = self.config.rotated,
            x = ?self.orientations.x,
            y = ?self.orientations.y,
            y2 = ?self.orientations.y2,
            "resolve axis orientation"
        );
    }

    #[must_use]
    pub fn orientation(&self, id: AxisId) -> Orientation {
        self.orientations[id]
    }

    /// Last render configuration built for `id`.
    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&AxisRenderConfig> {
        self.axes[id].as_ref()
    }

    #[must_use]
    pub fn sub_axes(&self) -> &MultiAxisManager {
        &self.multi_axis
    }

    /// Creates the axis groups and title elements, then the sub-axes.
    pub fn init(&mut self, scales: &ScaleSet) -> AxisResult<()> {
        let rotated = self.config.rotated;
        let mut targets = vec![AxisId::X, AxisId::Y];
        if self.config.is_shown(AxisId::Y2) {
            targets.push(AxisId::Y2);
        }
        if self.config.subchart {
            targets.push(AxisId::SubX);
        }

        for id in targets {
            let horizontal = is_horizontal_label(id, rotated);
            let flags = resolve_label_position(self.label_position(id), id, rotated);
            let spec = AxisGroupSpec {
                visible: self.config.is_shown(id),
                clip_path: match id {
                    AxisId::X => true,
                    AxisId::Y => self.config.y.inner,
                    AxisId::SubX | AxisId::Y2 => false,
                },
                label_rotated: !horizontal,
                label_anchor: label_text_anchor(flags, horizontal),
            };
            self.renderer.create_axis_group(id, &spec)?;
            debug!(axis = %id, visible = spec.visible, "create axis group");

            if id != AxisId::SubX {
                self.generate_axes(id, scales);
            }
        }
        Ok(())
    }

    /// Builds the decorative sub-axes configured for `id`.
    pub fn generate_axes(&mut self, id: AxisId, scales: &ScaleSet) {
        let Some(base) = scales.get(id) else {
            return;
        };
        let orientation = sub_axis_orientation(id, self.config.rotated);
        self.multi_axis
            .generate_axes(id, &self.config.axis(id).axes, base, orientation);
    }

    /// Axis a series is plotted against; series mapped to an axis without a
    /// scale fall back to `y`.
    #[must_use]
    pub fn resolve_axis_id(&self, series: &str, scales: &ScaleSet) -> AxisId {
        self.config
            .data_axes
            .get(series)
            .copied()
            .filter(|id| scales.has(*id))
            .unwrap_or(AxisId::Y)
    }

    #[must_use]
    pub fn label_text(&self, id: AxisId) -> Option<&str> {
        self.config.axis(id).label.as_ref().and_then(|label| label.text())
    }

    /// Updates the title text; axes without a configured label are left alone.
    pub fn set_label_text(&mut self, id: AxisId, text: impl Into<String>) {
        if let Some(label) = self.config.axis_mut(id).label.as_mut() {
            label.set_text(text);
        }
    }

    pub(super) fn label_position(&self, id: AxisId) -> Option<&str> {
        self.config
            .axis(id)
            .label
            .as_ref()
            .and_then(|label| label.position())
    }

    /// Transition durations for the axes that exist; `None` disables them.
    #[must_use]
    pub fn generate_transitions(&self, duration: Option<Duration>) -> AxisTransitions {
        AxisMap::from_fn(|id| {
            duration.filter(|duration| !duration.is_zero() && self.renderer.has_axis_group(id))
        })
    }
}
