//! journey-planner core
//!
//! Orders a set of stops into a short travel route and walks a single user
//! through that route one stop at a time.

pub mod error;
pub mod traits;
pub mod haversine;
pub mod matrix;
pub mod solver;
pub mod planner;
pub mod journey;
pub mod stats;

pub use error::{Error, Result};
