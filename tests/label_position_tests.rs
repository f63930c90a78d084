use chart_axes::api::{
    LabelDyInput, LabelPositionFlags, label_dy, label_text_anchor, label_x,
    resolve_label_position,
};
use chart_axes::core::AxisId;
use chart_axes::render::{LabelOffset, TextAnchor};
use proptest::prelude::*;

#[test]
fn unset_keyword_on_x_follows_rotation() {
    let upright = resolve_label_position(None, AxisId::X, false);
    assert!(upright.is_inner && upright.is_top);
    assert!(!upright.is_right);

    let rotated = resolve_label_position(None, AxisId::X, true);
    assert!(rotated.is_inner && rotated.is_right);
    assert!(!rotated.is_top);
}

#[test]
fn sub_x_shares_x_defaults() {
    assert_eq!(
        resolve_label_position(None, AxisId::SubX, false),
        resolve_label_position(None, AxisId::X, false)
    );
}

#[test]
fn explicit_keyword_wins_over_default() {
    let flags = resolve_label_position(Some("outer-middle"), AxisId::Y, false);
    assert!(flags.is_outer && flags.is_middle);
    assert!(!flags.is_inner);
    assert_eq!(label_x(flags, false, 800.0, 400.0), -200.0);
    assert_eq!(label_text_anchor(flags, false), TextAnchor::Middle);
}

#[test]
fn y_and_y2_dy_tables_mirror_in_sign() {
    let input = |id| LabelDyInput {
        id,
        rotated: false,
        flags: LabelPositionFlags::parse("outer-middle"),
        axis_height: None,
        tick_rotate_height: 0.0,
        max_tick_width: 0.0,
        axis_inner: true,
    };
    assert_eq!(label_dy(input(AxisId::Y)), LabelOffset::Px(-10.0));
    assert_eq!(label_dy(input(AxisId::Y2)), LabelOffset::Px(15.0));
}

proptest! {
    #[test]
    fn parsed_flags_match_token_membership_property(
        tokens in prop::collection::vec(
            prop::sample::select(vec![
                "inner", "outer", "left", "center", "right", "top", "middle", "bottom", "noise",
            ]),
            0..4
        ),
        separator in prop::sample::select(vec!["-", " "])
    ) {
        let keyword = tokens.join(separator);
        let flags = LabelPositionFlags::parse(&keyword);
        let has = |token: &str| tokens.iter().any(|candidate| *candidate == token);

        prop_assert_eq!(flags.is_inner, has("inner"));
        prop_assert_eq!(flags.is_outer, has("outer"));
        prop_assert_eq!(flags.is_left, has("left"));
        prop_assert_eq!(flags.is_center, has("center"));
        prop_assert_eq!(flags.is_right, has("right"));
        prop_assert_eq!(flags.is_top, has("top"));
        prop_assert_eq!(flags.is_middle, has("middle"));
        prop_assert_eq!(flags.is_bottom, has("bottom"));
    }
}
