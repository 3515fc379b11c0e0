use super::ScreenPoint;

#[test]
fn to_pixel_rejects_negative_and_far_edge() {
    assert_eq!(ScreenPoint::new(0, 0).to_pixel(), Some((0, 0)));
    assert_eq!(ScreenPoint::new(479, 319).to_pixel(), Some((479, 319)));
    assert_eq!(ScreenPoint::new(-1, 10).to_pixel(), None);
    assert_eq!(ScreenPoint::new(10, 320).to_pixel(), None);
}

#[cfg(feature = "graphics")]
#[test]
fn converts_into_graphics_point_unchanged() {
    use embedded_graphics::prelude::Point;

    assert_eq!(Point::from(ScreenPoint::new(12, 34)), Point::new(12, 34));
    // Off-panel values survive as signed coordinates.
    assert_eq!(Point::from(ScreenPoint::new(-7, 400)), Point::new(-7, 400));
}
