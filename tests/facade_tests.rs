use std::time::Duration;

use chart_axes::api::{
    AxesConfig, AxisConfig, AxisFacade, AxisLabelConfig, AxisParams, RedrawOptions, SeriesData,
    TickConfig,
};
use chart_axes::core::{
    AxisId, DEFAULT_TIME_INPUT_FORMAT, DataPoint, Domain, DomainType, LinearScale,
    ScaleSet, SeriesTarget, TickValue, parse_date,
};
use chart_axes::render::{LabelOffset, NullRenderer, TextAnchor};
use chart_axes::AxisError;

const ALL_CHANGED: RedrawOptions = RedrawOptions {
    update_x_domain: true,
    update_x_axis: true,
    y: true,
    transition: false,
};

fn series() -> SeriesData {
    SeriesData::new(vec![SeriesTarget::new(
        "a",
        (0..10)
            .map(|index| DataPoint::new(index as f64, 10.0 * index as f64))
            .collect(),
    )])
}

fn scales() -> ScaleSet {
    ScaleSet {
        x: Some(Box::new(
            LinearScale::new(Domain::new(0.0, 1.0), (0.0, 640.0)).expect("x scale"),
        )),
        y: Some(Box::new(
            LinearScale::new(Domain::new(0.0, 1.0), (480.0, 0.0)).expect("y scale"),
        )),
        ..ScaleSet::default()
    }
}

fn numbers(values: &[f64]) -> Vec<TickValue> {
    values.iter().copied().map(TickValue::Number).collect()
}

fn build(config: AxesConfig, scales: &ScaleSet, data: &SeriesData) -> AxisFacade<NullRenderer> {
    let mut facade = AxisFacade::new(NullRenderer::default(), config).expect("facade");
    facade.init(scales).expect("init");
    for id in [AxisId::X, AxisId::Y] {
        let scale = scales.get(id).expect("scale");
        facade
            .set_axis(id, scale, None, AxisParams::default(), data)
            .expect("set axis");
    }
    facade
}

#[test]
fn initial_redraw_fits_ticks_culls_and_places_titles() {
    let config = AxesConfig::default().with_axis(
        AxisId::Y,
        AxisConfig::default()
            .with_label(AxisLabelConfig::Text("Value".to_owned()))
            .with_tick(TickConfig {
                count: Some(5),
                ..TickConfig::default()
            }),
    );
    let mut scales = scales();
    let data = series();
    let mut facade = build(config, &scales, &data);
    let transitions = facade.generate_transitions(facade.config().transition_duration());

    facade
        .redraw_axis(&mut scales, &data, ALL_CHANGED, &transitions, None, true)
        .expect("redraw");

    let renderer = facade.renderer();
    let y = renderer.group(AxisId::Y).expect("y group");
    assert_eq!(y.tick_values, numbers(&[0.0, 22.5, 45.0, 67.5, 90.0]));
    assert!(y.visibility.iter().all(|visible| *visible));

    let x = renderer.group(AxisId::X).expect("x group");
    assert_eq!(x.tick_values.len(), 10);
    assert_eq!(
        renderer.visible_tick_labels(AxisId::X),
        numbers(&[0.0, 2.0, 4.0, 6.0, 8.0])
    );
    assert_eq!(x.last_transition, Some(Duration::from_millis(350)));
    assert!(renderer.group(AxisId::Y2).is_none());

    let y_label = y.label.as_ref().expect("y label");
    assert_eq!(y_label.text.as_deref(), Some("Value"));
    assert_eq!(y_label.x, 0.0);
    assert_eq!(y_label.dy, LabelOffset::Em(1.2));
    assert_eq!(y_label.text_anchor, TextAnchor::End);

    let x_label = x.label.as_ref().expect("x label");
    assert_eq!(x_label.text, None);
    assert_eq!(x_label.x, 640.0);
    assert_eq!(x_label.dy, LabelOffset::Em(-0.5));

    assert_eq!(
        scales.get(AxisId::Y).expect("y").domain(),
        Domain::new(0.0, 90.0)
    );
}

#[test]
fn categorical_x_reduces_to_rounded_indexes() {
    let config = AxesConfig::default().with_axis(
        AxisId::X,
        AxisConfig::default()
            .with_domain_type(DomainType::Categorical)
            .with_tick(TickConfig {
                count: Some(5),
                ..TickConfig::default()
            }),
    );
    let mut scales = scales();
    let names = (0..10).map(|index| format!("c{index}")).collect();
    let mut data = series().with_categories(names);
    let mut facade = build(config, &scales, &data);
    let transitions = facade.generate_transitions(None);

    facade
        .redraw_axis(&mut scales, &data, ALL_CHANGED, &transitions, None, true)
        .expect("redraw");

    let x = facade.renderer().group(AxisId::X).expect("x group");
    let expected = numbers(&[0.0, 2.0, 5.0, 7.0, 9.0]);
    assert_eq!(x.tick_values, expected);
    // categorical x is not culled by default
    assert_eq!(facade.renderer().visible_tick_labels(AxisId::X), expected);
    let rendered = x.last_config.as_ref().expect("config");
    assert!(rendered.is_category);
    assert_eq!(rendered.format_tick(&TickValue::Number(2.0)), "c2");

    data.targets_mut()[0].hidden = true;
    facade
        .redraw_axis(&mut scales, &data, ALL_CHANGED, &transitions, None, false)
        .expect("redraw without visible series");

    assert_eq!(
        scales.get(AxisId::X).expect("x").domain(),
        Domain::new(0.0, 5.0)
    );
    let x = facade.renderer().group(AxisId::X).expect("x group");
    assert!(x.tick_values.is_empty());
}

#[test]
fn arc_charts_paint_axes_transparent() {
    let mut scales = scales();
    let data = series().with_arc_type(true);
    let mut facade = build(AxesConfig::default(), &scales, &data);
    let transitions = facade.generate_transitions(None);

    facade
        .redraw_axis(&mut scales, &data, ALL_CHANGED, &transitions, None, true)
        .expect("redraw");

    for id in [AxisId::X, AxisId::Y] {
        assert_eq!(facade.renderer().group(id).expect("group").opacity, 0.0);
    }
}

#[test]
fn zero_duration_disables_transitions_after_initial_pass() {
    let scales = scales();
    let data = series();
    let mut facade = build(
        AxesConfig::default().with_transition_duration_ms(0),
        &scales,
        &data,
    );
    let mut transitions = facade.generate_transitions(None);
    transitions.x = Some(Duration::from_millis(100));

    facade
        .redraw(&transitions, false, true, &scales)
        .expect("initial");
    assert_eq!(
        facade.renderer().group(AxisId::X).expect("x").last_transition,
        Some(Duration::from_millis(100))
    );

    facade
        .redraw(&transitions, false, false, &scales)
        .expect("update");
    assert_eq!(
        facade.renderer().group(AxisId::X).expect("x").last_transition,
        None
    );
}

#[test]
fn transitions_only_cover_existing_axes() {
    let scales = scales();
    let facade = build(AxesConfig::default(), &scales, &series());
    let duration = Some(Duration::from_millis(200));

    let transitions = facade.generate_transitions(duration);
    assert_eq!(transitions.x, duration);
    assert_eq!(transitions.y, duration);
    assert_eq!(transitions.y2, None);
    assert_eq!(transitions.sub_x, None);
    assert_eq!(facade.generate_transitions(Some(Duration::ZERO)).x, None);
}

#[test]
fn series_on_missing_axis_fall_back_to_y() {
    let mut scales = scales();
    let config = AxesConfig::default().with_data_axis("load", AxisId::Y2);
    let facade = AxisFacade::new(NullRenderer::default(), config).expect("facade");

    assert_eq!(facade.resolve_axis_id("load", &scales), AxisId::Y);
    assert_eq!(facade.resolve_axis_id("unknown", &scales), AxisId::Y);

    scales.y2 = Some(Box::new(
        LinearScale::new(Domain::new(0.0, 1.0), (480.0, 0.0)).expect("y2 scale"),
    ));
    assert_eq!(facade.resolve_axis_id("load", &scales), AxisId::Y2);
}

#[test]
fn label_text_updates_only_configured_titles() {
    let config = AxesConfig::default().with_axis(
        AxisId::Y,
        AxisConfig::default().with_label(AxisLabelConfig::Detailed {
            text: Some("Old".to_owned()),
            position: Some("outer-middle".to_owned()),
        }),
    );
    let mut facade = AxisFacade::new(NullRenderer::default(), config).expect("facade");

    facade.set_label_text(AxisId::Y, "Revenue");
    facade.set_label_text(AxisId::X, "Ignored");

    assert_eq!(facade.label_text(AxisId::Y), Some("Revenue"));
    assert_eq!(facade.label_text(AxisId::X), None);
}

#[test]
fn explicit_time_series_ticks_are_coerced_to_instants() {
    let ticks = vec![
        TickValue::Key("2024-03-01".to_owned()),
        TickValue::Number(1_709_337_600_000.0),
    ];
    let config = AxesConfig::default().with_axis(
        AxisId::X,
        AxisConfig::default()
            .with_domain_type(DomainType::TimeSeries)
            .with_tick(TickConfig {
                values: Some(ticks.clone()),
                ..TickConfig::default()
            }),
    );
    let scales = scales();
    let data = series();
    let mut facade = AxisFacade::new(NullRenderer::default(), config).expect("facade");
    facade.init(&scales).expect("init");

    facade
        .set_axis(
            AxisId::X,
            scales.get(AxisId::X).expect("x"),
            None,
            AxisParams::default(),
            &data,
        )
        .expect("coerced ticks");

    let expected = ticks
        .iter()
        .map(|value| parse_date(value, DEFAULT_TIME_INPUT_FORMAT).expect("date"))
        .collect::<Vec<_>>();
    let axis = facade.axis(AxisId::X).expect("x axis");
    assert_eq!(axis.tick_values.as_ref(), Some(&expected));
    assert!(matches!(expected[0], TickValue::Time(_)));
}

#[test]
fn unparseable_time_series_tick_is_a_domain_type_mismatch() {
    let config = AxesConfig::default().with_axis(
        AxisId::X,
        AxisConfig::default()
            .with_domain_type(DomainType::TimeSeries)
            .with_tick(TickConfig {
                values: Some(vec![TickValue::Key("not a date".to_owned())]),
                ..TickConfig::default()
            }),
    );
    let scales = scales();
    let mut facade = AxisFacade::new(NullRenderer::default(), config).expect("facade");

    let err = facade
        .set_axis(
            AxisId::X,
            scales.get(AxisId::X).expect("x"),
            None,
            AxisParams::default(),
            &series(),
        )
        .expect_err("invalid date");
    assert!(matches!(
        err,
        AxisError::DomainTypeMismatch {
            domain_type: DomainType::TimeSeries,
            ..
        }
    ));
}

#[test]
fn autorotate_applies_configured_angle_once_labels_crowd() {
    let config = AxesConfig::default().with_axis(
        AxisId::X,
        AxisConfig::default()
            .with_domain_type(DomainType::Categorical)
            .with_tick(TickConfig {
                rotate: 60.0,
                autorotate: true,
                ..TickConfig::default()
            }),
    );
    let scales = scales();
    let data = series();
    let mut facade = AxisFacade::new(NullRenderer::default(), config).expect("facade");
    facade.init(&scales).expect("init");

    facade
        .get_max_label_width(AxisId::X, false, &scales, &data)
        .expect("narrow labels");
    assert_eq!(facade.axis_tick_rotate(AxisId::X), 0.0);

    // 11 ticks of 100px no longer fit 640px
    facade.renderer_mut().fixed_label_width = Some(100.0);
    let wider = SeriesData::new(vec![SeriesTarget::new(
        "a",
        (0..11)
            .map(|index| DataPoint::new(index as f64, 1.0))
            .collect(),
    )]);
    facade
        .get_max_label_width(AxisId::X, false, &scales, &wider)
        .expect("wide labels");
    assert_eq!(facade.axis_tick_rotate(AxisId::X), 60.0);
    // rotated labels need no clip
    assert!(!facade.state().tick_widths.entry(AxisId::X).needs_clip_path);

    facade.update_x_axis_padding(11, &wider);
    let reserved = facade.x_axis_tick_text_y2_overflow(10.0, &wider);
    assert!(reserved > 10.0);
    assert!(reserved <= 320.0);
}

#[test]
fn value_updates_refresh_subchart_y_scales() {
    let mut scales = scales();
    scales.sub_y = Some(Box::new(
        LinearScale::new(Domain::new(0.0, 1.0), (60.0, 0.0)).expect("sub y scale"),
    ));
    let data = series();
    let mut facade = build(AxesConfig::default(), &scales, &data);
    let transitions = facade.generate_transitions(None);

    let x_only = RedrawOptions {
        y: false,
        ..ALL_CHANGED
    };
    facade
        .redraw_axis(&mut scales, &data, x_only, &transitions, None, true)
        .expect("x redraw");
    assert_eq!(
        scales.sub_y.as_ref().expect("sub y").domain(),
        Domain::new(0.0, 1.0)
    );

    facade
        .redraw_axis(&mut scales, &data, ALL_CHANGED, &transitions, None, false)
        .expect("full redraw");
    assert_eq!(
        scales.sub_y.as_ref().expect("sub y").domain(),
        Domain::new(0.0, 90.0)
    );
}
