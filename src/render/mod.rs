mod config;
mod detached;
mod null_renderer;
mod primitives;
mod text_measure;

use std::time::Duration;

pub use config::{AxisRenderConfig, DEFAULT_OUTER_TICK_SIZE, SubAxisPaint, TickFormatFn};
pub use detached::{DetachedTarget, DetachedTargetId};
pub use null_renderer::{NullAxisGroup, NullRenderer, NullSubAxis};
pub use primitives::{AxisGroupSpec, AxisLabelLayout, LabelOffset, TextAnchor};
pub use text_measure::{HeuristicTextMeasurer, TextMeasurer};

use crate::core::{AxisId, TickValue};
use crate::error::AxisResult;

/// Contract implemented by the scene backend that paints axes.
///
/// The axis core hands over fully resolved configurations; tick placement on
/// screen, tick marks and text drawing stay in the backend. Transition timing
/// is delegated here as well: the core only passes optional durations.
pub trait AxisRenderer {
    /// Creates the group (and title element) for `id`.
    fn create_axis_group(&mut self, id: AxisId, spec: &AxisGroupSpec) -> AxisResult<()>;

    fn has_axis_group(&self, id: AxisId) -> bool;

    fn render_axis(
        &mut self,
        config: &AxisRenderConfig,
        opacity: f64,
        transition: Option<Duration>,
    ) -> AxisResult<()>;

    /// Appends the sub-axis when missing, otherwise updates it in place.
    fn render_sub_axis(&mut self, paint: &SubAxisPaint<'_>) -> AxisResult<()>;

    fn has_sub_axis(&self, id: AxisId, index: usize) -> bool;

    /// Acquires a detached, invisible render target.
    fn create_detached_target(&mut self) -> AxisResult<DetachedTargetId>;

    fn render_detached(
        &mut self,
        target: DetachedTargetId,
        config: &AxisRenderConfig,
    ) -> AxisResult<()>;

    /// Bounding-box widths of the tick labels rendered into `target`.
    fn detached_label_widths(&self, target: DetachedTargetId) -> AxisResult<Vec<f64>>;

    fn remove_detached_target(&mut self, target: DetachedTargetId);

    /// Values bound to the currently rendered tick labels, in render order.
    fn tick_label_values(&self, id: AxisId) -> Vec<TickValue>;

    /// Shows or hides rendered tick labels; `visible` follows render order.
    fn set_tick_label_visibility(&mut self, id: AxisId, visible: &[bool]);

    fn set_tick_label_clip_path(&mut self, id: AxisId, enabled: bool);

    fn update_axis_label(
        &mut self,
        id: AxisId,
        layout: &AxisLabelLayout,
        with_transition: bool,
    ) -> AxisResult<()>;
}
