#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_offset_and_delta_are_inverse() {
    let a = Point::new(10.0, -4.0);
    let d = Point::new(2.5, 7.0);
    let b = a.offset(d);
    assert_eq!(b, Point::new(12.5, 3.0));
    assert_eq!(b.delta_from(a), d);
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(0.0, 1.0).is_finite());
    assert!(!Point::new(f64::NAN, 1.0).is_finite());
    assert!(!Point::new(0.0, f64::INFINITY).is_finite());
}

// --- Triangle ---

#[test]
fn triangle_height_of_unit_side() {
    assert!(approx_eq(triangle_height(1.0), 3.0_f64.sqrt() / 2.0));
}

#[test]
fn triangle_vertices_for_size_100() {
    let [apex, left, right] = triangle_vertices(100.0);
    assert!(approx_eq(apex.x, 0.0));
    assert!((apex.y - -43.30).abs() < 0.01);
    assert!(approx_eq(left.x, -50.0));
    assert!((left.y - 43.30).abs() < 0.01);
    assert!(approx_eq(right.x, 50.0));
    assert!((right.y - 43.30).abs() < 0.01);
}

#[test]
fn triangle_vertices_are_equilateral() {
    let [a, b, c] = triangle_vertices(60.0);
    let side = |p: Point, q: Point| p.delta_from(q).x.hypot(p.delta_from(q).y);
    assert!(approx_eq(side(a, b), 60.0));
    assert!(approx_eq(side(b, c), 60.0));
    assert!(approx_eq(side(c, a), 60.0));
}

#[test]
fn point_in_triangle_contains_anchor() {
    assert!(point_in_triangle(Point::new(0.0, 0.0), triangle_vertices(100.0)));
}

#[test]
fn point_in_triangle_rejects_outside_corner() {
    assert!(!point_in_triangle(Point::new(-45.0, -40.0), triangle_vertices(100.0)));
}

#[test]
fn point_in_triangle_accepts_vertex() {
    let tri = triangle_vertices(100.0);
    assert!(point_in_triangle(tri[1], tri));
}

// --- Segment distance ---

#[test]
fn distance_to_segment_perpendicular() {
    let d = distance_to_segment(Point::new(5.0, 3.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx_eq(d, 3.0));
}

#[test]
fn distance_to_segment_past_endpoint() {
    let d = distance_to_segment(Point::new(13.0, 4.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx_eq(d, 5.0));
}

#[test]
fn distance_to_degenerate_segment() {
    let a = Point::new(1.0, 1.0);
    let d = distance_to_segment(Point::new(4.0, 5.0), a, a);
    assert!(approx_eq(d, 5.0));
}
