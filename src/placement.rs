//! Exhaustive search for the shield placement covering the most cities.
//!
//! Two candidate families are tried, in this order:
//!
//! 1. **Pair circles** - for every pair `(i, j)` with `i < j`, the smallest
//!    circle with both cities on its boundary, skipped when its radius is
//!    above the limit.
//! 2. **Ceiling circles** - a circle of exactly the maximum radius centered
//!    on each city.
//!
//! A candidate replaces the current best only when it covers strictly more
//! cities, so the first candidate found wins a tie. Circles through three
//! or more cities and arbitrary interior centers are never considered: the
//! result is the best of these two families, not the true optimum.
//!
//! Cost is O(n²) candidates times an O(n) coverage count.

use log::debug;

use crate::coverage::{Circle, count_covered, covered_by};
use crate::point_store::Point;

/// Best shield found by [`find_optimal`]
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Chosen shield
    pub circle: Circle,
    /// Names of the covered cities, in store order
    pub covered: Vec<String>,
}

impl PlacementResult {
    /// Zero circle covering nothing
    pub fn empty() -> Self {
        PlacementResult { circle: Circle::zero(), covered: Vec::new() }
    }

    fn from_circle(points: &[Point], circle: Circle) -> Self {
        let covered = covered_by(points, &circle)
            .into_iter()
            .map(|point| point.name.clone())
            .collect();
        PlacementResult { circle, covered }
    }

    /// Number of covered cities
    pub fn len(&self) -> usize {
        self.covered.len()
    }

    /// Whether no city is covered
    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }
}

impl Default for PlacementResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Tracks the leading candidate while the search runs
#[derive(Debug)]
struct Best {
    circle: Circle,
    count: usize,
}

impl Best {
    /// Adopts `circle` if it covers strictly more than the current best
    fn offer(&mut self, points: &[Point], circle: Circle) {
        let count = count_covered(points, &circle);
        if count > self.count {
            debug!(
                "new best shield at ({}, {}) r={} covering {} cities",
                circle.center_x, circle.center_y, circle.radius, count
            );
            self.circle = circle;
            self.count = count;
        }
    }
}

/// Finds the shield with radius at most `max_radius` covering the most cities.
///
/// Returns [`PlacementResult::empty`] for an empty slice or when no
/// candidate covers anything (e.g. a negative `max_radius`).
///
/// # Examples
/// ```
/// use shield::prelude::*;
///
/// let cities = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 10.0, 0.0),
///     Point::new("C", 5.0, 0.0),
/// ];
/// let best = find_optimal(&cities, 10.0);
/// assert_eq!(best.circle, Circle::new(5.0, 0.0, 5.0));
/// assert_eq!(best.covered, vec!["A", "B", "C"]);
/// ```
pub fn find_optimal(points: &[Point], max_radius: f64) -> PlacementResult {
    let mut best = Best { circle: Circle::zero(), count: 0 };

    for (i, first) in points.iter().enumerate() {
        for second in &points[i + 1..] {
            let circle = Circle::enclosing_pair(first, second);
            // NaN limits reject every pair
            if circle.radius > max_radius || max_radius.is_nan() {
                continue;
            }
            best.offer(points, circle);
        }
    }

    for point in points {
        best.offer(points, Circle::around(point, max_radius));
    }

    if best.count == 0 {
        debug!("no shield placement covers any of {} cities", points.len());
        return PlacementResult::empty();
    }

    let result = PlacementResult::from_circle(points, best.circle);
    debug!(
        "optimal shield at ({}, {}) r={} covers {} of {} cities",
        result.circle.center_x,
        result.circle.center_y,
        result.circle.radius,
        result.len(),
        points.len()
    );
    result
}
