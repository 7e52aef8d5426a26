//! # forecast_core - Material Forecast Engine
//!
//! `forecast_core` is the computational heart of Gridcast. It turns a
//! transmission project's budget and categorical attributes into estimated
//! material quantities. All inputs and outputs are JSON-serializable so the
//! HTTP layer can pass them straight through.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Never Rejects Categories**: Unknown categorical values fall back to defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_core::estimate::estimate;
//!
//! let result = estimate(12.0, "Maharashtra", "400kV", "GIS", "Plain", 18.0);
//! assert!(result.steel_tons() >= 120.0 && result.steel_tons() <= 125.0);
//!
//! let json = serde_json::to_string(&result).unwrap();
//! assert!(json.contains("\"Steel (tons)\""));
//! ```
//!
//! ## Modules
//!
//! - [`categories`] - Location, tower, substation and terrain tables
//! - [`estimate`] - Request/response types and the estimator
//! - [`errors`] - Structured error types

pub mod categories;
pub mod errors;
pub mod estimate;

// Re-export commonly used types at crate root for convenience
pub use categories::{Location, SubstationType, Terrain, TowerType};
pub use errors::{ForecastError, ForecastResult};
pub use estimate::{estimate, MaterialEstimate, PredictionResponse, ProjectRequest, ResolvedProject};
