use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Value model of an axis; drives rounding, sorting and tick coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DomainType {
    #[default]
    #[serde(rename = "linear", alias = "indexed")]
    Linear,
    #[serde(rename = "category", alias = "categorical")]
    Categorical,
    #[serde(rename = "timeseries")]
    TimeSeries,
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Categorical => "category",
            Self::TimeSeries => "timeseries",
        })
    }
}

/// Side of the plot an axis' ticks and labels face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl Orientation {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Sign of the direction pointing away from the plot area.
    #[must_use]
    pub const fn outward_sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }
}

/// Closed numeric interval an axis maps from; instants are epoch milliseconds.
///
/// Bounds are kept ordered (`lo <= hi`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Domain {
    lo: f64,
    hi: f64,
}

impl Domain {
    /// Builds a domain from two bounds in any order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Like [`Domain::new`] but rejects non-finite bounds.
    pub fn try_new(a: f64, b: f64) -> AxisResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(AxisError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        Ok(Self::new(a, b))
    }

    #[must_use]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    #[must_use]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.hi - self.lo
    }

    /// Both bounds are the same value; widths cannot be recomputed and tick
    /// reduction is forced to a single tick.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lo == self.hi
    }

    #[must_use]
    pub fn bounds(self) -> [f64; 2] {
        [self.lo, self.hi]
    }
}

impl From<(f64, f64)> for Domain {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl From<Domain> for (f64, f64) {
    fn from(domain: Domain) -> Self {
        (domain.lo, domain.hi)
    }
}
