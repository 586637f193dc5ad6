//! Adaptive one-dimensional quadrature.
//!
//! Three composite rules share a successive-doubling refinement loop that stops once
//! two consecutive estimates agree within a tolerance.

pub mod config;
pub mod engine;
pub mod rules;
pub mod types;

pub use config::QuadratureConfig;
pub use engine::{refine, refine_with_config};
pub use types::{Integration, QuadratureRule};
