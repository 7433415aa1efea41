use std::ops::{Add, Div, Sub};

/// Distance value for something that cannot be hit.
pub const UNREACHABLE: i64 = i64::MAX;

/// Round to the nearest integer, halves up.
pub fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Displacement between two points in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub dx: i32,
    pub dy: i32,
}

impl Size {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length, rounded to the nearest logical unit.
    pub fn length(self) -> i64 {
        let (dx, dy) = (f64::from(self.dx), f64::from(self.dy));
        round((dx * dx + dy * dy).sqrt())
    }

    pub fn dot(self, other: Size) -> i64 {
        i64::from(self.dx) * i64::from(other.dx) + i64::from(self.dy) * i64::from(other.dy)
    }

    pub fn cross(self, other: Size) -> i64 {
        i64::from(self.dx) * i64::from(other.dy) - i64::from(self.dy) * i64::from(other.dx)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, other: Size) -> Size {
        Size::new(self.dx + other.dx, self.dy + other.dy)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, other: Size) -> Size {
        Size::new(self.dx - other.dx, self.dy - other.dy)
    }
}

impl Div<i32> for Size {
    type Output = Size;

    fn div(self, divisor: i32) -> Size {
        Size::new(self.dx / divisor, self.dy / divisor)
    }
}

/// A point on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> i64 {
        (self - other).length()
    }

    pub fn midpoint(a: Point, b: Point) -> Point {
        a + (b - a) / 2
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, size: Size) -> Point {
        Point::new(self.x + size.dx, self.y + size.dy)
    }
}

impl Sub<Size> for Point {
    type Output = Point;

    fn sub(self, size: Size) -> Point {
        Point::new(self.x - size.dx, self.y - size.dy)
    }
}

impl Sub for Point {
    type Output = Size;

    fn sub(self, other: Point) -> Size {
        Size::new(self.x - other.x, self.y - other.y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Minimum distance from `point` to this segment.
    ///
    /// Uses projection clamping: if the projection of `point` falls before the
    /// start or past the end, the distance to the nearest endpoint is used,
    /// otherwise the perpendicular distance. A zero-length segment is treated
    /// as its single point.
    pub fn distance(self, point: Point) -> i64 {
        let d = self.end - self.start;
        let d1 = self.start - point;
        let d2 = self.end - point;

        if d == Size::default() {
            return d1.length();
        }
        if d.dot(d1) > 0 {
            d1.length()
        } else if d.dot(d2) < 0 {
            d2.length()
        } else {
            d.cross(d1).abs() / d.length()
        }
    }
}

/// An axis-aligned rectangle, normalized so left ≤ right and top ≤ bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Build the normalized rectangle spanning two opposite corners.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::from_points(origin, origin + size)
    }

    pub fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn bottom_right(self) -> Point {
        Point::new(self.right, self.bottom)
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.left + self.right) / 2,
            (self.top + self.bottom) / 2,
        )
    }

    pub fn size(self) -> Size {
        Size::new(self.right - self.left, self.bottom - self.top)
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(self) -> Vec<Point> {
        vec![
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Grow (or shrink, for negative amounts) by `dx`/`dy` on every side.
    pub fn inflate(self, dx: i32, dy: i32) -> Rect {
        Rect {
            left: self.left - dx,
            top: self.top - dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Overlapping region of two rectangles, or `None` if they are disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let result = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (result.left <= result.right && result.top <= result.bottom).then_some(result)
    }

    /// Scale every edge independently about `base`, so zooming keeps the base
    /// point fixed.
    pub fn enlarge(self, base: Point, rate: f64) -> Rect {
        let scale = |value: i32, base: i32| -> i32 {
            round(f64::from(base) + f64::from(value - base) * rate) as i32
        };
        Rect {
            left: scale(self.left, base.x),
            top: scale(self.top, base.y),
            right: scale(self.right, base.x),
            bottom: scale(self.bottom, base.y),
        }
    }

    /// Minimum distance from `point` to the rectangle outline.
    pub fn distance(self, point: Point) -> i64 {
        let mut minimum = UNREACHABLE;
        if point.x >= self.left && point.x <= self.right {
            minimum = minimum.min(axis_distance(point.y, self.top, self.bottom));
        }
        if point.y >= self.top && point.y <= self.bottom {
            minimum = minimum.min(axis_distance(point.x, self.left, self.right));
        }
        for corner in self.corners() {
            minimum = minimum.min(point.distance_to(corner));
        }
        minimum
    }
}

fn axis_distance(value: i32, edge1: i32, edge2: i32) -> i64 {
    i64::from((value - edge1).abs()).min(i64::from((value - edge2).abs()))
}

/// A circle, kept for ellipse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i64,
}

impl Circle {
    pub fn new(center: Point, radius: i64) -> Self {
        Self { center, radius }
    }

    pub fn bound_rect(self) -> Rect {
        let radius = self.radius as i32;
        Rect::from_points(
            Point::new(self.center.x - radius, self.center.y - radius),
            Point::new(self.center.x + radius, self.center.y + radius),
        )
    }

    /// Distance from `point` to the circle outline.
    pub fn distance(self, point: Point) -> i64 {
        (point.distance_to(self.center) - self.radius).abs()
    }
}

/// An axis-aligned ellipse inscribed in its bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub bounds: Rect,
}

impl Ellipse {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Minimum distance from `point` to the ellipse outline.
    ///
    /// The ellipse is scaled along x about its center until it becomes a
    /// circle, the circular distance is taken, and the result is unscaled.
    /// A zero-width or zero-height ellipse degenerates to a line segment.
    pub fn distance(self, point: Point) -> i64 {
        let bounds = self.bounds;
        let size = bounds.size();
        if size.dx == 0 {
            return Line::new(bounds.top_left(), bounds.bottom_left()).distance(point);
        }
        if size.dy == 0 {
            return Line::new(bounds.top_left(), bounds.top_right()).distance(point);
        }

        let center = bounds.center();
        let rate = f64::from(size.dy) / f64::from(size.dx);
        let transformed = Point::new(
            center.x + round(f64::from(point.x - center.x) * rate) as i32,
            point.y,
        );
        let circle = Circle::new(center, i64::from(size.dy) / 2);
        round(circle.distance(transformed) as f64 / rate)
    }
}
