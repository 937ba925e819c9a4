//! # trade_core - UK Trade Calculator Engine
//!
//! `trade_core` is the computational core behind a suite of estimation
//! calculators for UK tradespeople: boiler sizing, radiator BTU, conduit
//! fill, voltage drop, cable sizing, and friends. All inputs and outputs
//! are JSON-serializable so the engine can sit behind any form UI.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Table-driven**: Enumerated inputs resolve to fixed coefficients;
//!   formulas are closed-form sums, products, and threshold checks
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! Every result is a pure function of its input and the baked-in tables:
//! no I/O, no clock, no shared mutable state. Evaluating the same input
//! twice yields the identical result.
//!
//! ## Quick Start
//!
//! ```rust
//! use trade_core::calculators::voltage_drop::{VoltageDropInput, calculate};
//! use trade_core::bs7671::{CableSize, CircuitUse};
//!
//! let input = VoltageDropInput {
//!     label: "Garage submain".to_string(),
//!     cable: CableSize::C6_0,
//!     design_current_a: 32.0,
//!     run_length_m: 18.0,
//!     circuit_use: CircuitUse::Power,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.compliant);
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - All calculator types and the dispatch wrapper
//! - [`bs7671`] - Electrical reference tables (BS 7671 / On-Site Guide)
//! - [`heating`] - Heating and hot-water reference tables
//! - [`sizing`] - Standard-size bucket selection and rounding
//! - [`validate`] - Shared field validation helpers
//! - [`errors`] - Structured error types

pub mod bs7671;
pub mod calculators;
pub mod errors;
pub mod heating;
pub mod sizing;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use calculators::{CalculationItem, CalculationOutcome, CalculatorInfo};
pub use errors::{CalcError, CalcResult};
