use eframe_cad::geometry::{Circle, Ellipse, Line, Point, Rect, Size};

#[test]
fn line_distance_perpendicular_case() {
    let line = Line::new(Point::new(0, 0), Point::new(10, 0));
    assert_eq!(line.distance(Point::new(5, 5)), 5);
}

#[test]
fn line_distance_before_start_uses_start_endpoint() {
    let line = Line::new(Point::new(0, 0), Point::new(10, 0));
    assert_eq!(line.distance(Point::new(-5, 0)), 5);
}

#[test]
fn line_distance_past_end_uses_end_endpoint() {
    let line = Line::new(Point::new(0, 0), Point::new(10, 0));
    assert_eq!(line.distance(Point::new(15, 0)), 5);
}

#[test]
fn line_distance_on_the_segment_is_zero() {
    let line = Line::new(Point::new(0, 0), Point::new(10, 10));
    assert_eq!(line.distance(Point::new(5, 5)), 0);
}

#[test]
fn zero_length_line_is_treated_as_its_single_point() {
    let line = Line::new(Point::new(3, 4), Point::new(3, 4));
    assert_eq!(line.distance(Point::new(0, 0)), 5);
}

#[test]
fn rect_from_points_normalizes_corners() {
    let rect = Rect::from_points(Point::new(10, -2), Point::new(-4, 8));
    assert_eq!(rect.left, -4);
    assert_eq!(rect.top, -2);
    assert_eq!(rect.right, 10);
    assert_eq!(rect.bottom, 8);
}

#[test]
fn rect_distance_to_nearest_edge() {
    let rect = Rect::from_points(Point::new(0, 0), Point::new(10, 10));
    // Directly above the top edge.
    assert_eq!(rect.distance(Point::new(5, -3)), 3);
    // Inside, closest to the left edge.
    assert_eq!(rect.distance(Point::new(2, 5)), 2);
    // Diagonal from a corner.
    assert_eq!(rect.distance(Point::new(13, 14)), 5);
}

#[test]
fn rect_enlarge_moves_each_edge_about_the_base() {
    let rect = Rect::from_points(Point::new(0, 0), Point::new(100, 100));
    let enlarged = rect.enlarge(Point::new(0, 0), 0.5);
    assert_eq!(enlarged, Rect::from_points(Point::new(0, 0), Point::new(50, 50)));

    let about_center = rect.enlarge(Point::new(50, 50), 2.0);
    assert_eq!(
        about_center,
        Rect::from_points(Point::new(-50, -50), Point::new(150, 150))
    );
}

#[test]
fn rect_intersect_clips_and_reports_disjoint() {
    let a = Rect::from_points(Point::new(0, 0), Point::new(10, 10));
    let b = Rect::from_points(Point::new(5, 5), Point::new(20, 20));
    assert_eq!(
        a.intersect(b),
        Some(Rect::from_points(Point::new(5, 5), Point::new(10, 10)))
    );

    let far = Rect::from_points(Point::new(100, 100), Point::new(200, 200));
    assert_eq!(a.intersect(far), None);
}

#[test]
fn circle_distance_is_measured_to_the_outline() {
    let circle = Circle::new(Point::new(0, 0), 10);
    assert_eq!(circle.distance(Point::new(0, 0)), 10);
    assert_eq!(circle.distance(Point::new(10, 0)), 0);
    assert_eq!(circle.distance(Point::new(14, 0)), 4);
}

#[test]
fn ellipse_distance_at_the_top_of_the_outline_is_zero() {
    let ellipse = Ellipse::new(Rect::from_points(Point::new(0, 0), Point::new(20, 10)));
    assert_eq!(ellipse.distance(Point::new(10, 0)), 0);
}

#[test]
fn ellipse_distance_at_the_side_of_the_outline_is_zero() {
    let ellipse = Ellipse::new(Rect::from_points(Point::new(0, 0), Point::new(20, 10)));
    assert_eq!(ellipse.distance(Point::new(0, 5)), 0);
}

#[test]
fn degenerate_ellipse_collapses_to_a_segment() {
    // Zero height: behaves like the top edge.
    let flat = Ellipse::new(Rect::from_points(Point::new(0, 0), Point::new(20, 0)));
    assert_eq!(flat.distance(Point::new(10, 4)), 4);

    // Zero width: behaves like the left edge.
    let thin = Ellipse::new(Rect::from_points(Point::new(0, 0), Point::new(0, 20)));
    assert_eq!(thin.distance(Point::new(3, 10)), 3);
}

#[test]
fn size_length_rounds_to_nearest_unit() {
    assert_eq!(Size::new(3, 4).length(), 5);
    assert_eq!(Size::new(1, 1).length(), 1); // sqrt(2) rounds down
    assert_eq!(Size::new(0, 0).length(), 0);
}

#[test]
fn point_midpoint_truncates_toward_the_first_point() {
    assert_eq!(
        Point::midpoint(Point::new(0, 0), Point::new(10, 4)),
        Point::new(5, 2)
    );
}
