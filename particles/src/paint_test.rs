use super::*;

#[test]
fn css_formats_white_with_alpha() {
    let c = Rgba::from_rgb((255, 255, 255), 0.75);
    assert_eq!(c.css(), "rgba(255, 255, 255, 0.75)");
}

#[test]
fn css_formats_whole_alpha_without_fraction() {
    let c = Rgba::from_rgb((10, 20, 30), 1.0);
    assert_eq!(c.css(), "rgba(10, 20, 30, 1)");
}

#[test]
fn from_rgb_keeps_channels() {
    let c = Rgba::from_rgb((1, 2, 3), 0.5);
    assert_eq!(c, Rgba { r: 1, g: 2, b: 3, a: 0.5 });
}
