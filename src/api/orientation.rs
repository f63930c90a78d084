use serde::{Deserialize, Serialize};

use crate::core::{AxisId, AxisMap, Orientation};

/// Chart flags the axis orientations derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrientationInput {
    pub rotated: bool,
    pub y_inner: bool,
    pub y2_inner: bool,
}

pub type AxisOrientations = AxisMap<Orientation>;

/// Resolves which side of the plot each axis faces.
#[must_use]
pub fn resolve_orientation(input: OrientationInput) -> AxisOrientations {
    let OrientationInput {
        rotated,
        y_inner,
        y2_inner,
    } = input;
    let x = if rotated {
        Orientation::Left
    } else {
        Orientation::Bottom
    };

    AxisMap {
        x,
        sub_x: x,
        y: match (rotated, y_inner) {
            (false, false) => Orientation::Left,
            (false, true) => Orientation::Right,
            (true, false) => Orientation::Bottom,
            (true, true) => Orientation::Top,
        },
        y2: match (rotated, y2_inner) {
            (false, false) => Orientation::Right,
            (false, true) => Orientation::Left,
            (true, false) => Orientation::Top,
            (true, true) => Orientation::Bottom,
        },
    }
}

/// Orientation of decorative sub-axes; inner placement does not apply to them.
#[must_use]
pub fn sub_axis_orientation(id: AxisId, rotated: bool) -> Orientation {
    match (id.config_id(), rotated) {
        (AxisId::Y, false) => Orientation::Left,
        (AxisId::Y, true) => Orientation::Bottom,
        (AxisId::Y2, false) => Orientation::Right,
        (AxisId::Y2, true) => Orientation::Top,
        (_, false) => Orientation::Bottom,
        (_, true) => Orientation::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::{OrientationInput, resolve_orientation, sub_axis_orientation};
    use crate::core::{AxisId, Orientation};

    #[test]
    fn inner_flags_only_move_vertical_value_axes() {
        let resolved = resolve_orientation(OrientationInput {
            rotated: false,
            y_inner: true,
            y2_inner: false,
        });
        assert_eq!(resolved.x, Orientation::Bottom);
        assert_eq!(resolved.y, Orientation::Right);
        assert_eq!(resolved.y2, Orientation::Right);
    }

    #[test]
    fn sub_axes_ignore_inner_placement() {
        assert_eq!(sub_axis_orientation(AxisId::Y, false), Orientation::Left);
        assert_eq!(sub_axis_orientation(AxisId::Y2, true), Orientation::Top);
        assert_eq!(sub_axis_orientation(AxisId::SubX, true), Orientation::Left);
    }
}
