use serde::{Deserialize, Serialize};

/// One sample of a series; time-series `x` values are epoch milliseconds and
/// categorical `x` values are category indexes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named data series as seen by the axis core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTarget {
    pub id: String,
    pub values: Vec<DataPoint>,
    #[serde(default)]
    pub hidden: bool,
}

impl SeriesTarget {
    #[must_use]
    pub fn new(id: impl Into<String>, values: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            values,
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}
