//! Integration tests for composite values: images, backgrounds, transforms,
//! filters, shadows, grid, animation, transitions, borders and spacing.

use tessera_css::{
    Angle, Animation, Background, BackgroundRepeat, BackgroundShorthand, BackgroundSize, Border,
    BorderRadius, BorderStyle, BorderWidth, BoxEdges, BoxShadow, ClipPath, ClipPoint, Color,
    Direction, FillMode, Filter, Global, GradientStop, GridArea, GridAuto, GridAutoFlow, GridLine,
    GridPlacement, GridTemplate, GridTemplateAreas, GridTrack, HorizontalKeyword, Image,
    IterationCount, Length, NamedColor, ObjectPosition, ObjectStyle, Outline, PlayState, Position,
    RadialShape, RadialSize, Render, RepeatCount, Shadow, SizeFit, TextShadow, TextShadows, Time,
    TimingFunction, Transform, Transition, Transitions, VerticalKeyword,
};

fn red() -> Color {
    Color::Named(NamedColor::Red)
}

fn blue() -> Color {
    Color::Named(NamedColor::Blue)
}

// Images

#[test]
fn test_linear_gradient() {
    let gradient = Image::linear_gradient(
        Angle::deg(45.0),
        vec![
            GradientStop::new(red()),
            GradientStop::new(blue()).at(Length::percent(50.0)),
        ],
    );
    assert_eq!(gradient.render(), "linear-gradient(45.0deg, red, blue 50.0%)");
}

#[test]
fn test_radial_and_conic_gradients() {
    let radial = Image::radial_gradient(
        RadialShape::Circle,
        RadialSize::ClosestSide,
        Position::CENTER,
        vec![red().into(), blue().into()],
    );
    assert_eq!(
        radial.render(),
        "radial-gradient(circle closest-side at center center, red, blue)"
    );

    let conic = Image::conic_gradient(
        Angle::turn(0.25),
        Position::lengths(Length::percent(25.0), Length::px(10.0)),
        vec![
            GradientStop::new(red())
                .at(Length::ZERO)
                .at(Length::percent(30.0)),
        ],
    );
    assert_eq!(
        conic.render(),
        "conic-gradient(from 0.25turn at 25.0% 10.0px, red 0.0px 30.0%)"
    );
}

#[test]
fn test_url_and_none() {
    assert_eq!(Image::url("hero.png").render(), "url('hero.png')");
    assert_eq!(Image::None.render(), "none");
}

// Positions

#[test]
fn test_positions() {
    assert_eq!(
        Position::keyword_x(HorizontalKeyword::Left, Length::px(20.0)).render(),
        "left 20.0px"
    );
    assert_eq!(
        Position::keyword_y(Length::percent(10.0), VerticalKeyword::Bottom).render(),
        "10.0% bottom"
    );
    assert_eq!(ObjectPosition::BOTTOM_RIGHT.render(), "right bottom");
    assert_eq!(ObjectPosition::x(Length::px(5.0)).render(), "5.0px center");
    assert_eq!(ObjectPosition::percentages(25.0, 75.0).render(), "25.0% 75.0%");
    assert_eq!(ObjectPosition::symmetric(Length::em(1.0)).render(), "1.0em 1.0em");
}

#[test]
fn test_object_style_defaults_to_inherit() {
    assert_eq!(ObjectStyle::default().position, ObjectPosition::INHERIT);
    let configured = ObjectStyle::new(ObjectPosition::CENTER);
    assert_eq!(configured.position.render(), "center");
}

// Backgrounds

#[test]
fn test_background_shorthand_omits_absent_parts() {
    let shorthand = BackgroundShorthand {
        color: Some(Color::hex("fff")),
        image: Some(Image::url("bg.png")),
        position: Some(Position::CENTER),
        size: Some(BackgroundSize::Keyword(SizeFit::Cover)),
        repeat: Some(BackgroundRepeat::NoRepeat),
        ..BackgroundShorthand::default()
    };
    assert_eq!(
        Background::from(shorthand).render(),
        "#fff url('bg.png') center center / cover no-repeat"
    );
}

#[test]
fn test_background_size_without_position_uses_initial_position() {
    let shorthand = BackgroundShorthand {
        size: Some(BackgroundSize::Explicit(Length::px(10.0), Length::AUTO)),
        ..BackgroundShorthand::default()
    };
    assert_eq!(shorthand.render(), "0.0% 0.0% / 10.0px auto");
    assert_eq!(BackgroundShorthand::default().render(), "none");
}

#[test]
fn test_background_longhands_render_values_only() {
    assert_eq!(Background::Color(red()).render(), "red");
    assert_eq!(Background::Repeat(BackgroundRepeat::RepeatX).render(), "repeat-x");
}

// Transforms

#[test]
fn test_transform_chain_is_flat_and_ordered() {
    let chain = Transform::translate_x(Length::px(10.0)) + Transform::rotate(Angle::deg(45.0));
    let chain = chain + Transform::scale(2.0, None);
    assert_eq!(chain.render(), "translateX(10.0px) rotate(45.0deg) scale(2.0)");
    match chain {
        Transform::Compound(members) => assert_eq!(members.len(), 3),
        other => panic!("expected a compound transform, got {other:?}"),
    }
}

#[test]
fn test_transform_chains_concatenate() {
    let left = Transform::ScaleX(1.0) + Transform::ScaleY(2.0);
    let right = Transform::SkewX(Angle::deg(5.0)) + Transform::SkewY(Angle::deg(6.0));
    assert_eq!(
        (left + right).render(),
        "scaleX(1.0) scaleY(2.0) skewX(5.0deg) skewY(6.0deg)"
    );
    assert_eq!(
        (Transform::None + Transform::rotate(Angle::rad(1.0))).render(),
        "rotate(1.0rad)"
    );
    assert_eq!((Transform::None + Transform::None).render(), "none");
}

#[test]
fn test_hand_built_compound_renders_one_flat_chain() {
    let compound = Transform::Compound(vec![
        Transform::None,
        Transform::Compound(vec![Transform::ScaleX(2.0)]),
        Transform::Compound(vec![]),
    ]);
    assert_eq!(compound.render(), "scaleX(2.0)");

    let nested = Transform::Compound(vec![
        Transform::rotate(Angle::deg(10.0)),
        Transform::Compound(vec![Transform::None, Transform::SkewY(Angle::deg(5.0))]),
        Transform::ScaleY(0.5),
    ]);
    assert_eq!(nested.render(), "rotate(10.0deg) skewY(5.0deg) scaleY(0.5)");

    let empty = Transform::Compound(vec![Transform::None, Transform::Compound(vec![])]);
    assert_eq!(empty.render(), "none");
}

#[test]
fn test_transform_optional_arguments() {
    assert_eq!(Transform::translate(Length::px(1.0), None).render(), "translate(1.0px)");
    assert_eq!(
        Transform::translate(Length::px(1.0), Some(Length::percent(50.0))).render(),
        "translate(1.0px, 50.0%)"
    );
    assert_eq!(Transform::scale(1.5, Some(0.5)).render(), "scale(1.5, 0.5)");
    assert_eq!(Transform::skew(Angle::deg(10.0), None).render(), "skew(10.0deg)");
    assert_eq!(
        Transform::matrix(1.0, 0.0, 0.0, 1.0, 5.0, 6.0).render(),
        "matrix(1.0, 0.0, 0.0, 1.0, 5.0, 6.0)"
    );
    assert_eq!(
        Transform::Rotate3d {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            angle: Angle::grad(100.0),
        }
        .render(),
        "rotate3d(0.0, 0.0, 1.0, 100.0grad)"
    );
}

// Clip paths

#[test]
fn test_clip_path_shapes() {
    assert_eq!(ClipPath::circle(Length::percent(50.0)).render(), "circle(50.0%)");
    assert_eq!(
        ClipPath::circle(Length::px(40.0))
            .at(ClipPoint::new(Length::px(10.0), Length::px(20.0)))
            .render(),
        "circle(40.0px at 10.0px 20.0px)"
    );
    assert_eq!(
        ClipPath::ellipse(Length::percent(30.0), Length::percent(20.0)).render(),
        "ellipse(30.0% 20.0%)"
    );
    assert_eq!(
        ClipPath::ellipse(Length::px(4.0), Length::px(2.0))
            .at(ClipPoint::new(Length::percent(50.0), Length::ZERO))
            .render(),
        "ellipse(4.0px 2.0px at 50.0% 0.0px)"
    );
}

#[test]
fn test_clip_path_inset_rounds_inside_the_function() {
    let inset = ClipPath::inset(Length::px(1.0), Length::px(2.0), Length::px(3.0), Length::px(4.0));
    assert_eq!(inset.render(), "inset(1.0px 2.0px 3.0px 4.0px)");
    assert_eq!(
        inset.round(Length::px(5.0)).render(),
        "inset(1.0px 2.0px 3.0px 4.0px round 5.0px)"
    );
    // Only insets take a corner radius.
    assert_eq!(
        ClipPath::circle(Length::px(1.0)).round(Length::px(5.0)),
        ClipPath::circle(Length::px(1.0))
    );
}

#[test]
fn test_clip_path_polygon_and_keywords() {
    let triangle = ClipPath::polygon([
        ClipPoint::new(Length::percent(50.0), Length::percent(0.0)),
        ClipPoint::new(Length::percent(100.0), Length::percent(100.0)),
        ClipPoint::new(Length::percent(0.0), Length::percent(100.0)),
    ]);
    assert_eq!(
        triangle.render(),
        "polygon(50.0% 0.0%, 100.0% 100.0%, 0.0% 100.0%)"
    );
    assert_eq!(ClipPath::Polygon(Vec::new()).render(), "none");
    assert_eq!(ClipPath::Custom("url(#mask)".to_string()).render(), "url(#mask)");
    assert_eq!(ClipPath::Custom(String::new()).render(), "none");
    assert_eq!(ClipPath::None.render(), "none");
    assert_eq!(ClipPath::from(Global::Unset).render(), "unset");
}

// Filters

#[test]
fn test_filter_amounts_render_as_percentages() {
    assert_eq!(Filter::brightness(0.5).render(), "brightness(50.00%)");
    assert_eq!(Filter::sepia(1.0).render(), "sepia(100.00%)");
    assert_eq!(Filter::hue_rotate(Angle::deg(90.0)).render(), "hue-rotate(90.0deg)");
}

#[test]
fn test_filter_chain() {
    let chain = Filter::blur(Length::px(2.0))
        + Filter::grayscale(0.25)
        + Filter::drop_shadow(Length::px(1.0), Length::px(2.0), Length::px(3.0), red());
    assert_eq!(
        chain.render(),
        "blur(2.0px) grayscale(25.00%) drop-shadow(1.0px 2.0px 3.0px red)"
    );
    assert_eq!(Filter::default().render(), "none");
}

// Shadows

#[test]
fn test_shadow_always_renders_four_lengths() {
    let shadow = Shadow::new(blue()).offset(Length::px(1.0), Length::px(2.0));
    assert_eq!(shadow.render(), "1.0px 2.0px 0.0px 0.0px blue");
    assert_eq!(shadow.clone().inset().render(), "inset 1.0px 2.0px 0.0px 0.0px blue");
}

#[test]
fn test_single_shadow_and_one_element_list_render_alike() {
    let shadow = Shadow::new(red()).blur(Length::px(4.0));
    assert_eq!(BoxShadow::from(shadow.clone()).render(), shadow.render());
}

#[test]
fn test_box_shadow_presets() {
    assert_eq!(BoxShadow::simple(red()).render(), "0.0px 4.0px 6.0px 0.0px red");
    assert_eq!(
        BoxShadow::inset(red()).render(),
        "inset 0.0px 2.0px 4.0px -1.0px red"
    );
    assert_eq!(
        BoxShadow::layered(red(), blue(), red()).render(),
        "0.0px 2.0px 4.0px 0.0px red, 0.0px 4.0px 8.0px 0.0px blue, 0.0px 8.0px 16.0px 0.0px red"
    );
    assert_eq!(BoxShadow::default().render(), "none");
}

#[test]
fn test_text_shadows() {
    let glow = TextShadow::new(Length::ZERO, Length::ZERO, Length::px(8.0), blue());
    assert_eq!(glow.render(), "0.0px 0.0px 8.0px blue");
    let list = TextShadows(vec![glow.clone(), glow]);
    assert_eq!(list.render(), "0.0px 0.0px 8.0px blue, 0.0px 0.0px 8.0px blue");
}

// Grid

#[test]
fn test_grid_templates() {
    assert_eq!(
        GridTemplate::repeat(RepeatCount::Count(3), vec![GridTrack::Fr(1.0)]).render(),
        "repeat(3, 1.0fr)"
    );
    assert_eq!(
        GridTemplate::repeat(
            RepeatCount::AutoFill,
            vec![GridTrack::Minmax(Length::px(100.0), Length::fr(1.0))]
        )
        .render(),
        "repeat(auto-fill, minmax(100.0px, 1.0fr))"
    );
    assert_eq!(
        GridTemplate::lengths([Length::px(100.0), Length::AUTO]).render(),
        "100.0px auto"
    );
    assert_eq!(
        GridTemplate::Tracks(vec![GridTrack::Auto, GridTrack::FitContent(Length::px(40.0))])
            .render(),
        "auto fit-content(40.0px)"
    );
    assert_eq!(GridTemplate::None.render(), "none");
}

#[test]
fn test_fr_track_matches_fr_length() {
    assert_eq!(
        GridTrack::Fr(2.0).render(),
        GridTrack::Length(Length::fr(2.0)).render()
    );
}

#[test]
fn test_grid_placement() {
    assert_eq!(
        GridPlacement::new(GridLine::Line(1), GridLine::Span(2)).render(),
        "1 / span 2"
    );
    assert_eq!(
        GridArea::Lines {
            row_start: 1,
            column_start: 2,
            row_end: 3,
            column_end: 4,
        }
        .render(),
        "1 / 2 / 3 / 4"
    );
    assert_eq!(GridArea::Named("main".to_string()).render(), "main");
    assert_eq!(GridAutoFlow::ColumnDense.render(), "column dense");
    assert_eq!(
        GridAuto::Minmax(Length::px(50.0), Length::MAX_CONTENT).render(),
        "minmax(50.0px, max-content)"
    );
}

#[test]
fn test_blank_grid_text_falls_back_to_keyword() {
    assert_eq!(GridTemplate::Custom(String::new()).render(), "none");
    assert_eq!(GridTemplate::Custom("subgrid".to_string()).render(), "subgrid");
    assert_eq!(GridTemplateAreas::Custom("  ".to_string()).render(), "none");
    assert_eq!(GridLine::Name(String::new()).render(), "auto");
    assert_eq!(GridArea::Named(String::new()).render(), "auto");
    assert_eq!(
        GridPlacement::new(GridLine::Name(String::new()), GridLine::Name("end".to_string()))
            .render(),
        "auto / end"
    );
}

// Animation and transitions

#[test]
fn test_animation_renders_every_field() {
    let animation = Animation::new("slide", Time::ms(300.0))
        .with_timing_function(TimingFunction::EASE_IN_OUT_SINE)
        .with_delay(Time::s(1.0))
        .with_iteration_count(IterationCount::Finite(2.0))
        .with_direction(Direction::AlternateReverse)
        .with_fill_mode(FillMode::Both)
        .with_play_state(PlayState::Paused);
    assert_eq!(
        animation.render(),
        "slide 300.0ms cubic-bezier(0.37, 0.0, 0.63, 1.0) 1.0s 2.0 alternate-reverse both paused"
    );
}

#[test]
fn test_animation_defaults() {
    assert_eq!(
        Animation::new("pulse", Time::s(1.0)).render(),
        "pulse 1.0s ease 0.0s 1.0 normal none running"
    );
}

#[test]
fn test_timing_functions() {
    assert_eq!(TimingFunction::StepEnd.render(), "step-end");
    assert_eq!(
        TimingFunction::Steps(4, tessera_css::StepPosition::Start).render(),
        "steps(4, start)"
    );
    assert_eq!(
        TimingFunction::EASE_IN_SINE.render(),
        "cubic-bezier(0.12, 0.0, 0.39, 0.0)"
    );
}

#[test]
fn test_transitions() {
    assert_eq!(Transition::all(Time::s(0.3)).render(), "all 0.3s ease");
    assert_eq!(Transition::none().render(), "none 0.0s ease");
    let opacity = Transition::custom("opacity", Time::ms(200.0))
        .with_timing_function(TimingFunction::Linear)
        .with_delay(Time::ms(50.0));
    assert_eq!(opacity.render(), "opacity 200.0ms linear 50.0ms");

    let list = Transitions(vec![opacity, Transition::all(Time::s(1.0))]);
    assert_eq!(list.render(), "opacity 200.0ms linear 50.0ms, all 1.0s ease");
    assert_eq!(Transitions::default().render(), "none");
    assert_eq!(Transition::custom("", Time::s(1.0)).render(), "none 1.0s ease");
}

// Borders and spacing

#[test]
fn test_borders() {
    assert_eq!(
        Border::new(Length::px(2.0), BorderStyle::Dashed, Some(red())).render(),
        "2.0px dashed red"
    );
    assert_eq!(Border::NONE.render(), "none");
    assert_eq!(Border::Width(BorderWidth::Thick).render(), "thick");
    assert_eq!(Border::radius(Length::px(6.0)).render(), "6.0px");
    assert_eq!(
        BorderRadius::corners(Length::px(1.0), Length::px(2.0), Length::px(3.0), Length::px(4.0))
            .render(),
        "1.0px 2.0px 3.0px 4.0px"
    );
    assert_eq!(Border::REVERT_LAYER.render(), "revert-layer");
}

#[test]
fn test_outline() {
    assert_eq!(Outline::NONE.render(), "none medium");
    assert_eq!(Outline::default(), Outline::NONE);
    assert_eq!(
        Outline::solid(BorderWidth::Length(Length::px(3.0)), Some(blue())).render(),
        "solid 3.0px blue"
    );
}

#[test]
fn test_box_edges() {
    assert_eq!(BoxEdges::All(Length::rem(1.0)).render(), "1.0rem");
    assert_eq!(
        BoxEdges::trbl(Some(Length::px(1.0)), None, Some(Length::px(3.0)), None).render(),
        "1.0px 0 3.0px 0"
    );
    assert_eq!(BoxEdges::right(Length::px(4.0)).render(), "0 4.0px 0 0");
    assert_eq!(BoxEdges::INHERIT.render(), "inherit");
}
