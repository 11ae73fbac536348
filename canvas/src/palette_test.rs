use super::*;
use crate::color::Color;
use crate::surface::Surface;

fn red() -> Color {
    Color::rgb(255, 0, 0)
}

#[test]
fn thumbnail_matches_shape_size() {
    let item = PaletteItem::new(Shape::rectangle(0.0, 0.0, 20.0, 10.0, red()));
    let thumb = item.thumbnail().unwrap();
    assert_eq!((thumb.width(), thumb.height()), (20, 10));
    assert_eq!(thumb.covered_pixels(), 200);
}

#[test]
fn thumbnail_rounds_fractional_size_up() {
    let item = PaletteItem::new(Shape::circle(0.0, 0.0, 5.5, red()));
    let thumb = item.thumbnail().unwrap();
    assert_eq!((thumb.width(), thumb.height()), (11, 11));
}

#[test]
fn thumbnail_ignores_prototype_position() {
    let item = PaletteItem::new(Shape::circle(300.0, 300.0, 10.0, red()));
    let thumb = item.thumbnail().unwrap();
    assert_eq!(thumb.read_pixel(10.0, 10.0), Some(red()));
    assert_eq!(thumb.read_pixel(0.0, 0.0).map(|c| c.a), Some(0));
    assert_eq!(item.prototype().origin(), Point::new(300.0, 300.0));
}

#[test]
fn thumbnail_of_degenerate_shape_is_error() {
    let item = PaletteItem::new(Shape::rectangle(0.0, 0.0, 0.0, 10.0, red()));
    assert!(matches!(item.thumbnail(), Err(CanvasError::InvalidSurface(_))));
}

#[test]
fn grab_captures_offset_and_prototype() {
    let proto = Shape::rectangle(0.0, 0.0, 20.0, 10.0, red());
    let item = PaletteItem::new(proto.clone());
    let held = item.grab(Point::new(5.0, 5.0));
    assert_eq!(held.offset, Point::new(5.0, 5.0));
    assert_eq!(held.prototype, proto);
}
