use moldraw_core::line::{find_unit_normals, shorten_line};
use moldraw_core::math::{BoundingBox2, Point2, Vector2};
use moldraw_core::point::move_point_towards_another;
use moldraw_core::polygon::calc_winding_number;
use moldraw_core::rect::{
    distance_point_rectangle, get_relative_position_point_rectangle, rotate_rectangle_around_point,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn point() -> impl Strategy<Value = Point2> {
    (coord(), coord()).prop_map(|(x, y)| Point2::new(x, y))
}

fn segment() -> impl Strategy<Value = (Point2, Point2)> {
    (point(), point()).prop_filter("non-degenerate segment", |(a, b)| (b - a).norm() > 1e-3)
}

proptest! {
    #[test]
    fn unit_normals_are_opposite_and_perpendicular((a, b) in segment()) {
        let [n0, n1] = find_unit_normals(&a, &b).unwrap();
        let dir = (b - a).normalize();
        prop_assert!((n0.norm() - 1.0).abs() < 1e-9);
        prop_assert!((n1.norm() - 1.0).abs() < 1e-9);
        prop_assert!((n0 + n1).norm() < 1e-9);
        prop_assert!(n0.dot(&dir).abs() < 1e-9);
    }

    #[test]
    fn shorten_then_extend_restores_endpoints((a, b) in segment(), fraction in 0.0..0.45f64) {
        let d = (b - a).norm() * fraction;
        let (p, q) = shorten_line(&a, &b, d, d, false).unwrap();
        let restored_a = move_point_towards_another(&p, &q, -d);
        let restored_b = move_point_towards_another(&q, &p, -d);
        prop_assert!((restored_a - a).norm() < 1e-6);
        prop_assert!((restored_b - b).norm() < 1e-6);
    }

    #[test]
    fn shorten_with_excess_clearance_fails((a, b) in segment(), extra in 0.01..10.0f64) {
        let len = (b - a).norm();
        prop_assert!(shorten_line(&a, &b, len / 2.0, len / 2.0 + extra, true).is_none());
    }

    #[test]
    fn winding_number_on_axis_aligned_box(
        min in point(),
        size in (1.0..100.0f64, 1.0..100.0f64),
        t in (0.01..0.99f64, 0.01..0.99f64),
        outside in (100.5..500.0f64, 100.5..500.0f64),
    ) {
        let max = min + Vector2::new(size.0, size.1);
        let square = [min, Point2::new(max.x, min.y), max, Point2::new(min.x, max.y)];
        let inside = Point2::new(min.x + size.0 * t.0, min.y + size.1 * t.1);
        prop_assert_ne!(calc_winding_number(&inside, &square), 0);
        let far = Point2::new(min.x + outside.0, min.y - outside.1);
        prop_assert_eq!(calc_winding_number(&far, &square), 0);
    }

    #[test]
    fn rotated_rectangle_keeps_outer_clearance(
        angle in 0.0..360.0f64,
        half in (0.5..20.0f64, 0.5..20.0f64),
        target in 0.5..30.0f64,
    ) {
        let origin = Point2::new(3.0, -7.0);
        let half = Vector2::new(half.0, half.1);
        let mid = Point2::new(origin.x + 50.0, origin.y);
        let center =
            rotate_rectangle_around_point(&mid, &half, &origin, angle, target, false, false);
        let rect = BoundingBox2::from_center(center, half);
        prop_assert!(!get_relative_position_point_rectangle(&origin, &rect).is_inside());
        prop_assert!((distance_point_rectangle(&origin, &rect) - target).abs() < 1e-6);
    }

    #[test]
    fn rotated_rectangle_keeps_inner_clearance(
        angle in 0.0..360.0f64,
        half in (0.5..20.0f64, 0.5..20.0f64),
        fraction in 0.05..0.95f64,
    ) {
        let origin = Point2::new(3.0, -7.0);
        let half = Vector2::new(half.0, half.1);
        let target = half.x.min(half.y) * fraction;
        let mid = Point2::new(origin.x + 50.0, origin.y);
        let center =
            rotate_rectangle_around_point(&mid, &half, &origin, angle, target, true, false);
        let rect = BoundingBox2::from_center(center, half);
        prop_assert!(get_relative_position_point_rectangle(&origin, &rect).is_inside());
        prop_assert!((distance_point_rectangle(&origin, &rect) - target).abs() < 1e-6);
    }
}
