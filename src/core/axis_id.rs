use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Logical axis slot of a cartesian chart.
///
/// `SubX` mirrors the domain and tick values of `X` but renders inside the
/// overview (subchart) viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisId {
    #[serde(rename = "x")]
    X,
    #[serde(rename = "subX")]
    SubX,
    #[serde(rename = "y")]
    Y,
    #[serde(rename = "y2")]
    Y2,
}

impl AxisId {
    pub const ALL: [Self; 4] = [Self::X, Self::SubX, Self::Y, Self::Y2];

    /// Axes carrying their own configuration block (`SubX` reads `X`'s).
    pub const CONFIGURED: [Self; 3] = [Self::X, Self::Y, Self::Y2];

    #[must_use]
    pub const fn is_x(self) -> bool {
        matches!(self, Self::X | Self::SubX)
    }

    #[must_use]
    pub const fn is_y(self) -> bool {
        matches!(self, Self::Y | Self::Y2)
    }

    /// Axis whose configuration and culling decision this axis follows.
    #[must_use]
    pub const fn config_id(self) -> Self {
        match self {
            Self::SubX => Self::X,
            other => other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::SubX => "subX",
            Self::Y => "y",
            Self::Y2 => "y2",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-shape storage with one slot per [`AxisId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisMap<T> {
    pub x: T,
    #[serde(rename = "subX")]
    pub sub_x: T,
    pub y: T,
    pub y2: T,
}

impl<T> AxisMap<T> {
    pub fn from_fn(mut f: impl FnMut(AxisId) -> T) -> Self {
        Self {
            x: f(AxisId::X),
            sub_x: f(AxisId::SubX),
            y: f(AxisId::Y),
            y2: f(AxisId::Y2),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisId, &T)> {
        AxisId::ALL.into_iter().map(move |id| (id, &self[id]))
    }
}

impl<T> Index<AxisId> for AxisMap<T> {
    type Output = T;

    fn index(&self, id: AxisId) -> &T {
        match id {
            AxisId::X => &self.x,
            AxisId::SubX => &self.sub_x,
            AxisId::Y => &self.y,
            AxisId::Y2 => &self.y2,
        }
    }
}

impl<T> IndexMut<AxisId> for AxisMap<T> {
    fn index_mut(&mut self, id: AxisId) -> &mut T {
        match id {
            AxisId::X => &mut self.x,
            AxisId::SubX => &mut self.sub_x,
            AxisId::Y => &mut self.y,
            AxisId::Y2 => &mut self.y2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisId, AxisMap};

    #[test]
    fn sub_x_follows_x_configuration() {
        assert_eq!(AxisId::SubX.config_id(), AxisId::X);
        assert_eq!(AxisId::Y2.config_id(), AxisId::Y2);
    }

    #[test]
    fn axis_map_indexes_every_slot() {
        let mut map = AxisMap::from_fn(|id| id.as_str().len());
        map[AxisId::Y2] = 9;
        let collected: Vec<(AxisId, usize)> = map.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (AxisId::X, 1),
                (AxisId::SubX, 4),
                (AxisId::Y, 1),
                (AxisId::Y2, 9)
            ]
        );
    }

    #[test]
    fn axis_id_uses_chart_config_names_in_json() {
        let json = serde_json::to_string(&[AxisId::SubX, AxisId::Y2]).expect("serialize");
        assert_eq!(json, r#"["subX","y2"]"#);
    }
}
