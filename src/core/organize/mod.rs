//! # Organize Module
//!
//! Files photos into year-month subdirectories of their base directory.
//! The planner decides where every file should go; the executor applies
//! the plan with a never-overwrite collision policy.

mod executor;
mod planner;

pub use executor::{MoveExecutor, MoveReport};
pub use planner::{MovePlan, MovePlanner, PlannedMove};
