//! Randomized checks of the coverage and placement properties
//! Fixed seeds keep every run reproducible

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SEED: u64 = 95756739;

    fn random_cities<R: Rng>(rng: &mut R, count: usize, extent: f64) -> Vec<Point> {
        (0..count)
            .map(|i| {
                Point::new(
                    format!("city{i}"),
                    rng.random_range(-extent..extent),
                    rng.random_range(-extent..extent),
                )
            })
            .collect()
    }

    /// Integer coordinates make exact boundary hits and ties common
    fn grid_cities<R: Rng>(rng: &mut R, count: usize, extent: i32) -> Vec<Point> {
        (0..count)
            .map(|i| {
                Point::new(
                    format!("grid{i}"),
                    f64::from(rng.random_range(-extent..=extent)),
                    f64::from(rng.random_range(-extent..=extent)),
                )
            })
            .collect()
    }

    fn random_circle<R: Rng>(rng: &mut R, extent: f64) -> Circle {
        Circle::new(
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
            rng.random_range(0.0..extent),
        )
    }

    /// Straightforward restatement of the search: list every candidate in
    /// visiting order and keep the first one with the highest count
    fn reference_optimal(points: &[Point], max_radius: f64) -> (Circle, usize) {
        let mut candidates = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let circle = Circle::enclosing_pair(&points[i], &points[j]);
                if circle.radius <= max_radius {
                    candidates.push(circle);
                }
            }
        }
        for point in points {
            candidates.push(Circle::around(point, max_radius));
        }

        let mut best = (Circle::zero(), 0);
        for circle in candidates {
            let count = count_covered(points, &circle);
            if count > best.1 {
                best = (circle, count);
            }
        }
        best
    }

    #[test]
    fn test_membership_matches_predicate() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let cities = random_cities(&mut rng, 200, 100.0);

        for _ in 0..100 {
            let circle = random_circle(&mut rng, 100.0);
            let covered = covered_by(&cities, &circle);
            for city in &cities {
                let dx = city.x - circle.center_x;
                let dy = city.y - circle.center_y;
                let inside = dx * dx + dy * dy <= circle.radius * circle.radius;
                let listed = covered.iter().any(|c| std::ptr::eq(*c, city));
                assert_eq!(inside, listed, "Mismatch for {} against {:?}", city.name, circle);
            }
        }
    }

    #[test]
    fn test_covered_and_not_covered_partition() {
        let mut rng = StdRng::seed_from_u64(SEED + 1);
        let cities = grid_cities(&mut rng, 150, 20);

        for _ in 0..100 {
            let circle = random_circle(&mut rng, 20.0);
            let inside = covered_by(&cities, &circle);
            let outside = not_covered(&cities, &circle);

            assert_eq!(inside.len() + outside.len(), cities.len(), "Partition must cover every city");
            for city in &inside {
                assert!(
                    !outside.iter().any(|other| std::ptr::eq(*other, *city)),
                    "{} appears on both sides",
                    city.name
                );
            }
        }
    }

    #[test]
    fn test_coverage_monotone_in_radius() {
        let mut rng = StdRng::seed_from_u64(SEED + 2);
        let cities = random_cities(&mut rng, 100, 50.0);

        for _ in 0..100 {
            let small = random_circle(&mut rng, 50.0);
            let large = Circle { radius: small.radius + rng.random_range(0.0..10.0), ..small };
            let small_set = covered_by(&cities, &small);
            let large_set = covered_by(&cities, &large);
            for city in small_set {
                assert!(
                    large_set.iter().any(|c| std::ptr::eq(*c, city)),
                    "{} lost when growing the radius",
                    city.name
                );
            }
        }
    }

    #[test]
    fn test_optimal_radius_within_limit() {
        let mut rng = StdRng::seed_from_u64(SEED + 3);
        for _ in 0..30 {
            let cities = random_cities(&mut rng, 25, 100.0);
            let max_radius = rng.random_range(0.0..60.0);
            let result = find_optimal(&cities, max_radius);
            assert!(
                result.circle.radius <= max_radius,
                "Radius {} above limit {}",
                result.circle.radius,
                max_radius
            );
        }
    }

    #[test]
    fn test_optimal_matches_reference_search() {
        let mut rng = StdRng::seed_from_u64(SEED + 4);
        for _ in 0..30 {
            let cities = grid_cities(&mut rng, 20, 10);
            let max_radius = f64::from(rng.random_range(0..8_i32));
            let result = find_optimal(&cities, max_radius);
            let (circle, count) = reference_optimal(&cities, max_radius);

            assert_eq!(result.len(), count, "Covered count differs from reference");
            if count > 0 {
                assert_eq!(result.circle, circle, "Tie broken differently from reference");
            } else {
                assert_eq!(result, PlacementResult::empty());
            }
        }
    }

    #[test]
    fn test_optimal_names_match_circle() {
        let mut rng = StdRng::seed_from_u64(SEED + 5);
        for _ in 0..20 {
            let cities = random_cities(&mut rng, 30, 40.0);
            let result = find_optimal(&cities, 15.0);
            let expected: Vec<String> = covered_by(&cities, &result.circle)
                .into_iter()
                .map(|city| city.name.clone())
                .collect();
            assert_eq!(result.covered, expected);
        }
    }

    #[test]
    fn test_optimal_never_worse_than_any_candidate() {
        let mut rng = StdRng::seed_from_u64(SEED + 6);
        let cities = random_cities(&mut rng, 30, 30.0);
        let max_radius = 12.0;
        let result = find_optimal(&cities, max_radius);

        for city in &cities {
            let ceiling = count_covered(&cities, &Circle::around(city, max_radius));
            assert!(result.len() >= ceiling, "Ceiling circle at {} beats the result", city.name);
        }
        for (i, first) in cities.iter().enumerate() {
            for second in &cities[i + 1..] {
                let circle = Circle::enclosing_pair(first, second);
                if circle.radius <= max_radius {
                    assert!(result.len() >= count_covered(&cities, &circle));
                }
            }
        }
    }

    #[test]
    fn test_unknown_name_never_covered() {
        let mut rng = StdRng::seed_from_u64(SEED + 7);
        let cities = random_cities(&mut rng, 50, 10.0);
        for _ in 0..20 {
            let circle = random_circle(&mut rng, 1000.0);
            assert!(!is_covered(&cities, "NonExistent", &circle));
        }
    }
}
