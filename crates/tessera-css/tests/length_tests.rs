//! Integration tests for length arithmetic and rendering.

use tessera_common::warning::has_warned;
use tessera_css::{Angle, Length, Render, Time, Unit, ValueError};

#[test]
fn test_same_unit_addition_is_numeric() {
    assert_eq!((Length::px(10.0) + Length::px(5.0)).render(), "15.0px");
    assert_eq!((Length::em(1.5) + Length::em(0.25)).render(), "1.75em");
    assert_eq!((Length::percent(40.0) + Length::percent(2.5)).render(), "42.5%");
}

#[test]
fn test_mismatched_addition_falls_back_to_calc() {
    assert_eq!(
        (Length::px(10.0) + Length::em(2.0)).render(),
        "calc(10.0px + 2.0em)"
    );
    assert_eq!(
        (Length::percent(50.0) - Length::px(12.0)).render(),
        "calc(50.0% - 12.0px)"
    );
    assert_eq!((Length::AUTO + Length::px(1.0)).render(), "calc(auto + 1.0px)");
}

#[test]
fn test_calc_results_nest() {
    let sum = Length::px(10.0) + Length::em(2.0) + Length::rem(1.0);
    assert_eq!(sum.render(), "calc(calc(10.0px + 2.0em) + 1.0rem)");
}

#[test]
fn test_subtraction_same_unit() {
    assert_eq!((Length::vw(100.0) - Length::vw(20.0)).render(), "80.0vw");
}

#[test]
fn test_assign_operators() {
    let mut width = Length::px(10.0);
    width += Length::px(2.0);
    width -= Length::px(4.0);
    width *= 3.0;
    width /= 2.0;
    assert_eq!(width, Length::px(12.0));
}

#[test]
fn test_scalar_multiplication() {
    assert_eq!((Length::px(4.0) * 2.5).render(), "10.0px");
    assert_eq!((Length::percent(10.0) * 3.0).render(), "30.0%");
    assert_eq!((Length::calc("100% - 2rem") * 2.0).render(), "calc(calc(100% - 2rem) * 2.0)");
}

#[test]
fn test_length_multiplication() {
    // Percentages multiply numerically; lengths do not.
    assert_eq!(Length::percent(10.0) * Length::percent(50.0), Length::percent(500.0));
    assert_eq!(
        (Length::px(2.0) * Length::px(3.0)).render(),
        "calc(2.0px * 3.0px)"
    );
}

#[test]
fn test_division() {
    assert_eq!(Length::px(10.0) / 4.0, Length::px(2.5));
    assert_eq!(Length::percent(50.0) / 2.0, Length::percent(25.0));
}

#[test]
fn test_division_of_keyword_is_noop() {
    assert_eq!(Length::AUTO / 2.0, Length::AUTO);
    assert_eq!(Length::INHERIT / 2.0, Length::INHERIT);
    assert_eq!(Length::calc("1px + 1em") / 2.0, Length::calc("1px + 1em"));
    assert!(has_warned(
        "CSS",
        "cannot divide a keyword or calc() length; value left unchanged"
    ));
}

#[test]
#[should_panic(expected = "division of a length by zero")]
fn test_division_by_zero_panics() {
    let _ = Length::px(10.0) / 0.0;
}

#[test]
#[should_panic(expected = "division of a length by zero")]
fn test_division_of_keyword_by_zero_panics() {
    let _ = Length::AUTO / 0.0;
}

#[test]
fn test_checked_division() {
    assert_eq!(Length::px(9.0).checked_div(3.0), Ok(Length::px(3.0)));
    assert_eq!(Length::px(9.0).checked_div(0.0), Err(ValueError::DivisionByZero));
    assert_eq!(Length::px(9.0).checked_div(f64::NAN), Err(ValueError::NotANumber));
}

#[test]
fn test_magnitude() {
    assert!((Length::px(-3.0).magnitude() - 3.0).abs() < f64::EPSILON);
    assert!((Length::percent(25.0).magnitude() - 25.0).abs() < f64::EPSILON);
    assert!(Length::AUTO.magnitude().abs() < f64::EPSILON);
    assert!(Length::px(1.0).is_numeric());
    assert!(!Length::MAX_CONTENT.is_numeric());
}

#[test]
fn test_rendering_of_every_shape() {
    assert_eq!(Length::new(2.0, Unit::In).render(), "2.0in");
    assert_eq!(Length::inches(1.0).render(), "1.0in");
    assert_eq!(Length::q(4.0).render(), "4.0q");
    assert_eq!(Length::fr(1.0).render(), "1.0fr");
    assert_eq!(Length::ZERO.render(), "0.0px");
    assert_eq!(Length::FIT_CONTENT.render(), "fit-content");
    assert_eq!(Length::REVERT_LAYER.render(), "revert-layer");
    assert_eq!(Length::calc("100vh - 4rem").render(), "calc(100vh - 4rem)");
}

#[test]
fn test_angle_and_time() {
    assert_eq!(Angle::deg(45.0).render(), "45.0deg");
    assert_eq!(Angle::turn(0.5).render(), "0.5turn");
    assert_eq!((Time::s(1.0) + Time::s(0.5)).render(), "1.5s");
    assert_eq!((Time::ms(100.0) + Time::ms(50.0)).render(), "150.0ms");
    assert_eq!((Time::s(1.0) + Time::ms(250.0)).render(), "1.25s");
    assert_eq!((Time::ms(500.0) + Time::s(1.0)).render(), "1.5s");
}
