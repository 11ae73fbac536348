#![allow(clippy::float_cmp)]

use super::*;
use crate::pixmap::PixmapSurface;
use crate::test_support::{Op, RecordingSurface};

fn red() -> Color {
    Color::rgb(255, 0, 0)
}

fn alpha_at(s: &PixmapSurface, x: f64, y: f64) -> u8 {
    s.read_pixel(x, y).map_or(0, |c| c.a)
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn rectangle_size_is_width_height() {
    let r = Shape::rectangle(0.0, 0.0, 20.0, 10.0, red());
    assert_eq!(r.size(), (20.0, 10.0));
}

#[test]
fn circle_size_is_diameter() {
    let c = Shape::circle(5.0, 5.0, 7.0, red());
    assert_eq!(c.size(), (14.0, 14.0));
}

#[test]
fn circle_origin_is_bounding_box_corner() {
    let c = Shape::circle(10.0, 20.0, 5.0, red());
    assert_eq!(c.origin(), Point::new(10.0, 20.0));
    assert_eq!(c.center(), Point::new(15.0, 25.0));
}

#[test]
fn set_position_moves_origin() {
    let mut r = Shape::rectangle(0.0, 0.0, 1.0, 1.0, red());
    r.set_position(42.0, -3.0);
    assert_eq!(r.origin(), Point::new(42.0, -3.0));
}

// =============================================================
// Duplicate
// =============================================================

#[test]
fn duplicate_copies_geometry_and_fill() {
    let c = Shape::circle(1.0, 2.0, 3.0, red());
    let d = c.duplicate();
    assert_eq!(d.geometry, c.geometry);
    assert_eq!(d.fill, c.fill);
    assert_eq!(d.origin(), c.origin());
}

#[test]
fn duplicate_has_fresh_identity() {
    let r = Shape::rectangle(0.0, 0.0, 20.0, 10.0, red());
    assert_ne!(r.duplicate().id, r.id);
}

#[test]
fn duplicate_is_independent_of_original() {
    let shapes = [Shape::rectangle(3.0, 4.0, 20.0, 10.0, red()), Shape::circle(3.0, 4.0, 6.0, red())];
    for s in shapes {
        let mut copy = s.duplicate();
        copy.set_position(99.0, 99.0);
        assert_eq!(s.origin(), Point::new(3.0, 4.0));
        assert_eq!(copy.origin(), Point::new(99.0, 99.0));
    }
}

// =============================================================
// Paint
// =============================================================

#[test]
fn rectangle_paints_fill_rect_at_origin() {
    let r = Shape::rectangle(10.0, 20.0, 30.0, 40.0, red());
    let mut s = RecordingSurface::new(100, 100);
    r.paint(&mut s);
    assert_eq!(s.ops, vec![Op::Save, Op::FillStyle(red()), Op::FillRect(10.0, 20.0, 30.0, 40.0), Op::Restore]);
}

#[test]
fn circle_paints_arc_around_derived_center() {
    let c = Shape::circle(10.0, 20.0, 5.0, red());
    let mut s = RecordingSurface::new(100, 100);
    c.paint(&mut s);
    assert!(s.ops.contains(&Op::Arc { cx: 15.0, cy: 25.0, radius: 5.0 }));
    assert!(s.ops.contains(&Op::Fill));
    assert!(!s.ops.contains(&Op::Stroke));
}

#[test]
fn paint_rasterizes_silhouette() {
    let mut s = PixmapSurface::new(100, 100).unwrap();
    Shape::circle(10.0, 10.0, 20.0, red()).paint(&mut s);
    assert_eq!(s.read_pixel(30.0, 30.0), Some(red()));
    assert_eq!(alpha_at(&s, 10.0, 10.0), 0);
}

#[test]
fn paint_restores_style_state() {
    let mut s = PixmapSurface::new(50, 50).unwrap();
    Shape::rectangle(0.0, 0.0, 10.0, 10.0, red()).paint(&mut s);
    s.fill_rect(20.0, 20.0, 10.0, 10.0);
    assert_eq!(s.read_pixel(25.0, 25.0), Some(Color::BLACK));
}

#[test]
fn degenerate_shapes_paint_nothing() {
    let mut s = PixmapSurface::new(50, 50).unwrap();
    Shape::rectangle(5.0, 5.0, 0.0, 10.0, red()).paint(&mut s);
    Shape::rectangle(5.0, 5.0, 10.0, -1.0, red()).paint(&mut s);
    Shape::circle(5.0, 5.0, 0.0, red()).paint(&mut s);
    Shape::circle(5.0, 5.0, -3.0, red()).paint(&mut s);
    assert_eq!(s.covered_pixels(), 0);
}

// =============================================================
// Selection outline
// =============================================================

#[test]
fn rectangle_outline_is_stroke_rect() {
    let r = Shape::rectangle(1.0, 2.0, 3.0, 4.0, red());
    let blue = Color::rgb(0, 0, 255);
    let mut s = RecordingSurface::new(10, 10);
    r.draw_selection_outline(&mut s, blue, 3.0);
    assert_eq!(
        s.ops,
        vec![Op::Save, Op::StrokeStyle(blue), Op::LineWidth(3.0), Op::StrokeRect(1.0, 2.0, 3.0, 4.0), Op::Restore]
    );
}

#[test]
fn circle_outline_strokes_without_filling() {
    let mut s = PixmapSurface::new(100, 100).unwrap();
    Shape::circle(10.0, 10.0, 30.0, red()).draw_selection_outline(&mut s, Color::rgb(0, 0, 255), 3.0);
    assert_eq!(alpha_at(&s, 40.0, 40.0), 0);
    assert!(alpha_at(&s, 70.0, 40.0) > 0);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn shape_json_uses_kind_tag() {
    let r = Shape::rectangle(0.0, 0.0, 20.0, 10.0, red());
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["geometry"]["kind"], "rectangle");
    assert_eq!(json["fill"], "#ff0000");
}

#[test]
fn shape_json_without_id_gets_one() {
    let json = r#"{"x":1,"y":2,"fill":"blue","geometry":{"kind":"circle","radius":4}}"#;
    let c: Shape = serde_json::from_str(json).unwrap();
    assert_eq!(c.geometry, Geometry::Circle { radius: 4.0 });
    assert!(!c.id.is_nil());
}
