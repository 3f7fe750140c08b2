//! # calc_core - FDM Print Cost Engine
//!
//! `calc_core` is the computational heart of FDMCalc. It estimates what one
//! FDM 3D-printed part costs to produce: material, energy, machine wear, labor,
//! then margin, shipping and tax on top. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from input to breakdown
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{calculate, CostInput};
//!
//! let mut input = CostInput::template();
//! input.material_used_grams = 250.0;
//! input.material_cost_per_kg = 24.0;
//!
//! let result = calculate(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("material_cost"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The cost model
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Validated loads and atomic saves

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CostBreakdown, CostInput};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, save_json, write_template};
