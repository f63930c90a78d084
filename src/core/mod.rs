pub mod axis_id;
pub mod domain;
pub mod scale;
pub mod tick_value;
pub mod types;

pub use axis_id::{AxisId, AxisMap};
pub use domain::{Domain, DomainType, Orientation};
pub use scale::{LinearScale, Scale, ScaleSet};
pub use tick_value::{DEFAULT_TIME_INPUT_FORMAT, TickSet, TickValue, parse_date};
pub use types::{DataPoint, SeriesTarget};
