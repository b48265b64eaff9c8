//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use shield::prelude::*;
//! ```

pub use crate::coverage::{Circle, count_covered, covered_by, is_covered, not_covered};
pub use crate::error::{InputError, ShieldError};
pub use crate::facade::{Command, FacadeConfig, QueryFacade, Response};
pub use crate::placement::{PlacementResult, find_optimal};
pub use crate::point_store::{Point, PointStore};
