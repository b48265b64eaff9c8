//! # Shield - City Coverage and Optimal Shield Placement
//!
//! A small library for answering questions about a circular "shield" placed
//! over a set of named cities on a plane.
//!
//! ## Features
//!
//! - **Coverage Queries**: Which cities a circle protects, which it leaves out,
//!   and whether a named city is inside
//! - **Optimal Placement**: Exhaustive search for the shield, bounded by a
//!   maximum radius, that covers the most cities
//! - **Command Layer**: Parsing and executing console commands over a loaded
//!   city list
//!
//! ## Quick Start
//!
//! ```rust
//! use shield::prelude::*;
//!
//! let store = PointStore::from_json_str(r#"[
//!     { "city": "Alpha", "x": 0.0,  "y": 0.0 },
//!     { "city": "Beta",  "x": 10.0, "y": 0.0 },
//!     { "city": "Gamma", "x": 5.0,  "y": 0.0 },
//!     { "city": "Delta", "x": 50.0, "y": 50.0 }
//! ]"#).unwrap();
//!
//! // Cities protected by a shield at (0, 0) with radius 6
//! let shield = Circle::new(0.0, 0.0, 6.0);
//! let names: Vec<&str> = covered_by(store.points(), &shield)
//!     .iter()
//!     .map(|city| city.name.as_str())
//!     .collect();
//! assert_eq!(names, ["Alpha", "Gamma"]);
//!
//! // Best shield with radius at most 10
//! let best = find_optimal(store.points(), 10.0);
//! assert_eq!(best.circle, Circle::new(5.0, 0.0, 5.0));
//! assert_eq!(best.covered, ["Alpha", "Beta", "Gamma"]);
//! ```
//!
//! ## How It Works
//!
//! A city is covered when its squared distance to the shield center is at
//! most the squared radius, boundary included. The placement search tries
//! the smallest circle through every pair of cities and a maximum-radius
//! circle centered on every city, and keeps the first one covering the most
//! cities. See [`placement`] for the exact candidate rules.

pub mod coverage;
pub mod error;
pub mod facade;
pub mod placement;
pub mod point_store;
pub mod prelude;

mod property_tests;

pub use coverage::Circle;
pub use error::{InputError, Result, ShieldError};
pub use facade::{Command, QueryFacade, Response};
pub use placement::{PlacementResult, find_optimal};
pub use point_store::{Point, PointStore};
