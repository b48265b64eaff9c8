//! Circle membership queries over a slice of cities.
//!
//! Every higher level operation goes through [`Circle::contains`]: a point is
//! covered when its squared distance to the center is at most the squared
//! radius. The boundary is inclusive and no epsilon is applied.

use log::warn;

use crate::point_store::{Point, find_by_name};

/// A circular shield: center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center x coordinate
    pub center_x: f64,
    /// Center y coordinate
    pub center_y: f64,
    /// Radius, expected to be non-negative
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Circle { center_x, center_y, radius }
    }

    /// The `{0, 0, 0}` circle returned when nothing can be covered
    pub fn zero() -> Self {
        Circle::new(0.0, 0.0, 0.0)
    }

    /// Circle centered on `point` with the given radius
    pub fn around(point: &Point, radius: f64) -> Self {
        Circle::new(point.x, point.y, radius)
    }

    /// Smallest circle with both points on its boundary
    ///
    /// # Examples
    /// ```
    /// use shield::prelude::*;
    ///
    /// let circle = Circle::enclosing_pair(&Point::new("A", 0.0, 0.0), &Point::new("B", 10.0, 0.0));
    /// assert_eq!(circle, Circle::new(5.0, 0.0, 5.0));
    /// ```
    pub fn enclosing_pair(a: &Point, b: &Point) -> Self {
        let center_x = (a.x + b.x) / 2.0;
        let center_y = (a.y + b.y) / 2.0;
        let radius = a.distance_squared_to(b.x, b.y).sqrt() / 2.0;
        Circle::new(center_x, center_y, radius)
    }

    /// Returns whether `(x, y)` lies inside or on the circle.
    ///
    /// A negative or NaN radius contains nothing.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.radius < 0.0 || self.radius.is_nan() {
            return false;
        }
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Returns whether `point` lies inside or on the circle
    #[inline]
    pub fn covers(&self, point: &Point) -> bool {
        self.contains(point.x, point.y)
    }
}

/// Points inside `circle`, in input order
///
/// # Examples
/// ```
/// use shield::prelude::*;
///
/// let cities = vec![Point::new("A", 0.0, 0.0), Point::new("B", 3.0, 4.0), Point::new("C", 9.0, 9.0)];
/// let covered = covered_by(&cities, &Circle::new(0.0, 0.0, 5.0));
/// assert_eq!(covered.len(), 2); // B sits exactly on the boundary
/// ```
pub fn covered_by<'a>(points: &'a [Point], circle: &Circle) -> Vec<&'a Point> {
    points.iter().filter(|point| circle.covers(point)).collect()
}

/// Points outside `circle`, in input order
pub fn not_covered<'a>(points: &'a [Point], circle: &Circle) -> Vec<&'a Point> {
    points.iter().filter(|point| !circle.covers(point)).collect()
}

/// Number of points inside `circle`
pub fn count_covered(points: &[Point], circle: &Circle) -> usize {
    points.iter().filter(|point| circle.covers(point)).count()
}

/// Whether the city named `name` lies inside `circle`.
///
/// The name is matched case-insensitively and the first match wins. An
/// unknown name is reported as not covered.
pub fn is_covered(points: &[Point], name: &str, circle: &Circle) -> bool {
    match find_by_name(points, name) {
        Some(point) => circle.covers(point),
        None => {
            warn!("no city named '{}', treating it as not defended", name);
            false
        }
    }
}
