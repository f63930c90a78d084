mod axis_controller;
mod config;
mod culling;
mod data_source;
mod facade;
mod label_position;
mod measurement_controller;
mod multi_axis;
mod orientation;
mod overflow;
mod padding;
mod redraw_controller;
mod tick_format;
mod tick_values;
mod tick_width_cache;

pub use axis_controller::AxisParams;
pub use config::{
    AxesConfig, AxisConfig, AxisLabelConfig, AxisPaddingConfig, HostFn, PaddingUnit,
    SubAxisConfig, SubAxisTickConfig, TickConfig, TickCountCallback, TickFormatCallback,
    TickValuesFn,
};
pub use culling::{cull_visibility, culling_interval};
pub use data_source::{AxisDataSource, SeriesData, unique_xs};
pub use facade::{AxisFacade, AxisState, AxisTransitions, Dimensions};
pub use label_position::{
    LabelDyInput, LabelPositionFlags, default_label_position, is_horizontal_label, label_dx,
    label_dy, label_text_anchor, label_x, resolve_label_position,
};
pub use multi_axis::{MultiAxisManager, SubAxis, SubAxisUpdate};
pub use orientation::{AxisOrientations, OrientationInput, resolve_orientation, sub_axis_orientation};
pub use overflow::{OverflowInput, max_label_overflow, max_tick_overflow, tick_text_y2_overflow};
pub use padding::{
    PaddingSide, XAxisPadding, axis_padding, convert_pixels_to_axis_padding, x_axis_padding,
};
pub use redraw_controller::{FlowInfo, RedrawOptions};
pub use tick_format::{DEFAULT_AXIS_TIME_FORMAT, x_tick_format, y_tick_format};
pub use tick_values::{TickCount, TickCountFn, reduce_domain_ticks, reduce_tick_values};
pub use tick_width_cache::{TickWidthCache, TickWidthCacheEntry, TickWidthCacheStats, TickWidths};
