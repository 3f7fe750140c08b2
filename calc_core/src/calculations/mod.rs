//! # Cost Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Breakdown` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Breakdown, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`fdm_cost`] - Production cost of a single FDM printed part

pub mod fdm_cost;

// Re-export commonly used types
pub use fdm_cost::{calculate, CostBreakdown, CostInput};
