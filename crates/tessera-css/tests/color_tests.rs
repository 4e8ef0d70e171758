//! Integration tests for the color model and brightness adjustment.

use tessera_common::warning::has_warned;
use tessera_css::{Color, Global, HexChannels, NamedColor, Render, SystemColor, ValueError};

#[test]
fn test_rendering_templates() {
    assert_eq!(Color::Named(NamedColor::Fuchsia).render(), "fuchsia");
    assert_eq!(Color::rgb(10, 20, 30).render(), "rgb(10, 20, 30)");
    assert_eq!(Color::rgba(10, 20, 30, 0.5).render(), "rgba(10, 20, 30, 0.5)");
    assert_eq!(Color::hsl(120, 50.0, 25.0).render(), "hsl(120, 50.0%, 25.0%)");
    assert_eq!(
        Color::hsla(120, 50.0, 25.0, 0.8).render(),
        "hsla(120, 50.0%, 25.0%, 0.8)"
    );
    assert_eq!(Color::hwb(200, 10.0, 20.0).render(), "hwb(200 10.0% 20.0%)");
    assert_eq!(Color::lab(50.0, 20.0, -30.0).render(), "lab(50.0% 20.0 -30.0)");
    assert_eq!(Color::lch(70.0, 45.0, 120.0).render(), "lch(70.0% 45.0 120.0)");
    assert_eq!(Color::System(SystemColor::ButtonFace).render(), "ButtonFace");
    assert_eq!(Color::CURRENT_COLOR.render(), "currentColor");
    assert_eq!(Color::TRANSPARENT.render(), "transparent");
    assert_eq!(Color::from(Global::RevertLayer).render(), "revert-layer");
}

#[test]
fn test_hex_rendering_normalizes_hash() {
    assert_eq!(Color::hex("ff0000").render(), "#ff0000");
    assert_eq!(Color::hex("#ff0000").render(), "#ff0000");
    assert_eq!(Color::hex("##abc").render(), "#abc");
}

#[test]
fn test_channels_are_not_range_checked() {
    assert_eq!(Color::rgb(300, -5, 0).render(), "rgb(300, -5, 0)");
    assert_eq!(Color::hsl(720, 150.0, 50.0).render(), "hsl(720, 150.0%, 50.0%)");
}

#[test]
fn test_lighter_clamps_rgb_channels() {
    let lighter = Color::rgb(250, 250, 250).lighter(0.5);
    assert_eq!(lighter.render(), "rgb(252, 252, 252)");

    assert_eq!(Color::rgb(0, 100, 255).lighter(1.0), Color::rgb(255, 255, 255));
    assert_eq!(Color::rgb(200, 100, 50).darker(0.5), Color::rgb(100, 50, 25));
    assert_eq!(Color::rgb(200, 100, 50).darker(1.0), Color::rgb(0, 0, 0));
}

#[test]
fn test_rgba_keeps_alpha() {
    assert_eq!(
        Color::rgba(100, 100, 100, 0.25).darker(0.5),
        Color::rgba(50, 50, 50, 0.25)
    );
}

#[test]
fn test_hsl_adjusts_only_lightness() {
    assert_eq!(Color::hsl(30, 40.0, 50.0).lighter(0.5), Color::hsl(30, 40.0, 75.0));
    assert_eq!(
        Color::hsla(30, 40.0, 50.0, 0.5).darker(0.5),
        Color::hsla(30, 40.0, 25.0, 0.5)
    );
}

#[test]
fn test_hex_shorthand_expands_and_uppercases() {
    assert_eq!(Color::hex("abc").lighter(0.0).render(), "#AABBCC");
    assert_eq!(Color::hex("#abc").lighter(0.0), Color::hex("#AABBCC"));
}

#[test]
fn test_hex_brightness() {
    assert_eq!(Color::hex("#000000").lighter(0.5).render(), "#7F7F7F");
    assert_eq!(Color::hex("ffffff").darker(0.5).render(), "#7F7F7F");
    // Eight digit colors keep their alpha pair.
    assert_eq!(Color::hex("#00000080").lighter(1.0).render(), "#FFFFFF80");
}

#[test]
fn test_invalid_hex_is_left_unchanged() {
    let broken = Color::hex("#12345");
    assert_eq!(broken.lighter(0.3), broken);
    assert!(has_warned("CSS", "invalid hex color; color left unchanged"));
}

#[test]
fn test_hex_channels() {
    assert_eq!(
        HexChannels::decode("#0a0B0c"),
        Ok(HexChannels {
            red: 10,
            green: 11,
            blue: 12,
            alpha: None,
        })
    );
    assert_eq!(HexChannels::decode("f00").map(|c| c.encode()), Ok("#FF0000".to_string()));
    assert_eq!(
        HexChannels::decode("zzz"),
        Err(ValueError::InvalidHex {
            value: "zzz".to_string()
        })
    );
}

#[test]
fn test_keyword_colors_are_unchanged() {
    assert_eq!(
        Color::Named(NamedColor::Red).lighter(0.3),
        Color::Named(NamedColor::Red)
    );
    for color in [
        Color::hwb(10, 20.0, 30.0),
        Color::lab(50.0, 1.0, 2.0),
        Color::lch(50.0, 1.0, 2.0),
        Color::System(SystemColor::Mark),
        Color::CURRENT_COLOR,
        Color::TRANSPARENT,
        Color::INHERIT,
    ] {
        assert_eq!(color.darker(0.4), color);
    }
}

#[test]
fn test_fraction_outside_range_is_noop() {
    let color = Color::rgb(10, 20, 30);
    assert_eq!(color.lighter(1.5), color);
    assert_eq!(color.darker(2.0), color);
    assert_eq!(color.adjust_brightness(f64::NAN), color);
    assert!(has_warned(
        "CSS",
        "brightness fraction outside [-1, 1]; color left unchanged"
    ));
}

#[test]
fn test_repeated_bad_fractions_share_one_warning() {
    let color = Color::rgb(1, 2, 3);
    for step in 0..500 {
        assert_eq!(color.lighter(2.0 + f64::from(step)), color);
    }
    assert!(has_warned(
        "CSS",
        "brightness fraction outside [-1, 1]; color left unchanged"
    ));
    assert!(!has_warned(
        "CSS",
        "brightness fraction 2 outside [-1, 1]; color left unchanged"
    ));
}

#[test]
fn test_default_step() {
    assert_eq!(Color::rgb(0, 0, 0).lighten(), Color::rgb(51, 51, 51));
    assert_eq!(Color::rgb(101, 101, 101).darken(), Color::rgb(80, 80, 80));
}
