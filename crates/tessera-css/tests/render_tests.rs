//! Integration tests for the rendering contract: every keyword renders to a
//! non-empty token, distinct keywords render distinctly, and values serialize.

use std::collections::HashSet;
use std::fmt::Display;

use strum::IntoEnumIterator;
use tessera_css::{
    BackgroundAttachment, BackgroundClip, BackgroundOrigin, BackgroundRepeat, BorderStyle, Color,
    CompositeOperator, Direction, FillMode, Global, GridAutoFlow, HorizontalKeyword, Length,
    NamedColor, ObjectPosition, PlayState, PositionKeyword, RadialShape, Render, SizeFit,
    SizeKeyword, StepPosition, SystemColor, Transform, Unit, VerticalKeyword,
};

/// Render every variant and check the tokens are non-empty and unique.
fn assert_total_and_distinct<T: IntoEnumIterator + Display>() {
    let tokens: Vec<String> = T::iter().map(|value| value.to_string()).collect();
    assert!(!tokens.is_empty());
    for token in &tokens {
        assert!(!token.is_empty());
        assert_eq!(token.trim(), token);
    }
    let unique: HashSet<&String> = tokens.iter().collect();
    assert_eq!(unique.len(), tokens.len(), "duplicate token in {tokens:?}");
}

#[test]
fn test_keyword_tables_are_total_and_distinct() {
    assert_total_and_distinct::<Global>();
    assert_total_and_distinct::<Unit>();
    assert_total_and_distinct::<SizeKeyword>();
    assert_total_and_distinct::<NamedColor>();
    assert_total_and_distinct::<SystemColor>();
    assert_total_and_distinct::<HorizontalKeyword>();
    assert_total_and_distinct::<VerticalKeyword>();
    assert_total_and_distinct::<PositionKeyword>();
    assert_total_and_distinct::<RadialShape>();
    assert_total_and_distinct::<SizeFit>();
    assert_total_and_distinct::<BackgroundRepeat>();
    assert_total_and_distinct::<BackgroundAttachment>();
    assert_total_and_distinct::<BackgroundOrigin>();
    assert_total_and_distinct::<BackgroundClip>();
    assert_total_and_distinct::<CompositeOperator>();
    assert_total_and_distinct::<BorderStyle>();
    assert_total_and_distinct::<GridAutoFlow>();
    assert_total_and_distinct::<StepPosition>();
    assert_total_and_distinct::<Direction>();
    assert_total_and_distinct::<FillMode>();
    assert_total_and_distinct::<PlayState>();
}

#[test]
fn test_every_unit_renders_after_the_number() {
    for unit in Unit::iter() {
        let rendered = Length::new(3.0, unit).render();
        assert_eq!(rendered, format!("3.0{unit}"));
    }
}

#[test]
fn test_every_length_keyword_and_global_renders_bare() {
    for keyword in SizeKeyword::iter() {
        assert_eq!(Length::from(keyword).render(), keyword.to_string());
    }
    for global in Global::iter() {
        assert_eq!(Length::from(global).render(), global.to_string());
        assert_eq!(Color::from(global).render(), global.to_string());
        assert_eq!(ObjectPosition::Global(global).render(), global.to_string());
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let value = Transform::rotate(tessera_css::Angle::deg(30.0))
        + Transform::translate(Length::px(1.0) + Length::em(1.0), None);
    assert_eq!(value.render(), value.clone().render());
    assert_eq!(value.render(), value.to_string());
}

#[test]
fn test_values_serialize() {
    let json = serde_json::to_value(Length::px(12.0)).unwrap_or_default();
    assert_eq!(json, serde_json::json!({ "Dimension": [12.0, "Px"] }));

    let json = serde_json::to_value(Color::rgb(1, 2, 3)).unwrap_or_default();
    assert_eq!(json, serde_json::json!({ "Rgb": { "red": 1, "green": 2, "blue": 3 } }));
}

#[test]
fn test_object_position_round_trips_through_json() {
    let position = ObjectPosition::TOP_LEFT;
    let json = serde_json::to_string(&position).unwrap_or_default();
    let back: ObjectPosition = serde_json::from_str(&json).unwrap_or(ObjectPosition::INITIAL);
    assert_eq!(back, position);
}
