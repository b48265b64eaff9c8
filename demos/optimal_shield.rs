//! Find the best shield placement for a small set of cities.
//!
//! Run with `cargo run --example optimal_shield`.

use shield::prelude::*;

fn main() -> Result<(), ShieldError> {
    let store = PointStore::from_json_str(include_str!("../data/cities.json"))?;
    println!("=== Optimal Shield Example ===\n");
    println!("{} cities loaded\n", store.len());

    // Shield over the central cluster
    let shield = Circle::new(55.0, 60.0, 10.0);
    let inside = covered_by(store.points(), &shield);
    println!("Shield at (55, 60) with radius 10 protects:");
    for city in &inside {
        println!("  {} ({}, {})", city.name, city.x, city.y);
    }
    println!("Left outside: {}\n", not_covered(store.points(), &shield).len());

    // Growing the radius limit never lowers the best coverage
    for max_radius in [5.0, 10.0, 25.0, 100.0] {
        let best = find_optimal(store.points(), max_radius);
        println!(
            "max radius {:>5}: center ({}, {}) r={} covers {} -> {}",
            max_radius,
            best.circle.center_x,
            best.circle.center_y,
            best.circle.radius,
            best.len(),
            best.covered.join(", ")
        );
    }

    Ok(())
}
