//! # Material Estimate
//!
//! Estimates steel, cement and insulator quantities for a transmission
//! project from its budget.
//!
//! ## Formula
//!
//! Each quantity is linear in the budget plus a uniform jitter drawn fresh
//! on every call:
//!
//! | Material   | Per unit budget | Jitter   |
//! |------------|-----------------|----------|
//! | Steel      | 10              | [0, 5)   |
//! | Cement     | 7               | [0, 5)   |
//! | Insulators | 20              | [0, 10)  |
//!
//! Results are rounded to two decimal places. Location, tower type,
//! substation type, terrain and tax are resolved against their tables but do
//! not enter the arithmetic.
//!
//! ## Failure Policy
//!
//! A budget that is NaN or infinite, or one large enough to overflow a
//! quantity, does not fail the request. [`estimate`] logs the error and
//! returns [`MaterialEstimate::zero`]. Only [`ForecastError`] values take
//! this branch.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::estimate::{estimate_with_rng, MaterialEstimate};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = estimate_with_rng(&mut rng, 0.0, "Delhi", "132kV", "AIS", "Plain", 0.0);
//! assert!(result.steel_tons() <= 5.0);
//! assert!(result.insulator_units() <= 10.0);
//!
//! let zero = estimate_with_rng(&mut rng, f64::NAN, "Delhi", "132kV", "AIS", "Plain", 0.0);
//! assert_eq!(zero, MaterialEstimate::zero());
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::categories::{Location, SubstationType, Terrain, TowerType};
use crate::errors::{ForecastError, ForecastResult};

// ============================================================================
// Coefficients
// ============================================================================

/// Linear coefficient and jitter width for one material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Quantity added per unit of budget
    pub per_budget: f64,
    /// Width of the uniform jitter, drawn from [0, jitter)
    pub jitter: f64,
}

impl Coefficients {
    fn apply<R: Rng + ?Sized>(&self, rng: &mut R, budget: f64) -> f64 {
        budget * self.per_budget + rng.random::<f64>() * self.jitter
    }
}

/// Steel, in tons
pub const STEEL: Coefficients = Coefficients { per_budget: 10.0, jitter: 5.0 };

/// Cement, in tons
pub const CEMENT: Coefficients = Coefficients { per_budget: 7.0, jitter: 5.0 };

/// Insulators, in units
pub const INSULATORS: Coefficients = Coefficients { per_budget: 20.0, jitter: 10.0 };

// ============================================================================
// Request
// ============================================================================

/// Project attributes as received from a client.
///
/// Categorical fields are free-form; see [`ProjectRequest::resolve`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "budget": 12.0,
///   "location": "Maharashtra",
///   "tower_type": "400kV",
///   "substation_type": "GIS",
///   "terrain": "Plain",
///   "tax": 18.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequest {
    /// Project budget (crores)
    pub budget: f64,
    pub location: String,
    pub tower_type: String,
    pub substation_type: String,
    pub terrain: String,
    /// Tax rate (percent). Not used by the formula.
    pub tax: f64,
}

impl ProjectRequest {
    /// Resolve categorical fields against their tables, substituting defaults
    pub fn resolve(&self) -> ResolvedProject {
        ResolvedProject::new(
            self.budget,
            &self.location,
            &self.tower_type,
            &self.substation_type,
            &self.terrain,
            self.tax,
        )
    }

    /// Estimate materials for this request with the thread-local RNG
    pub fn estimate(&self) -> MaterialEstimate {
        estimate_project(&mut rand::rng(), &self.resolve())
    }
}

/// A request after defaulting, with typed categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProject {
    pub budget: f64,
    pub location: Location,
    pub tower_type: TowerType,
    pub substation_type: SubstationType,
    pub terrain: Terrain,
    pub tax: f64,
}

impl ResolvedProject {
    /// Resolve raw categorical strings. Unknown values become the table default.
    pub fn new(
        budget: f64,
        location: &str,
        tower_type: &str,
        substation_type: &str,
        terrain: &str,
        tax: f64,
    ) -> Self {
        ResolvedProject {
            budget,
            location: resolve_field("location", location, Location::from_code),
            tower_type: resolve_field("tower_type", tower_type, TowerType::from_code),
            substation_type: resolve_field("substation_type", substation_type, SubstationType::from_code),
            terrain: resolve_field("terrain", terrain, Terrain::from_code),
            tax,
        }
    }
}

fn resolve_field<T>(field: &str, raw: &str, lookup: fn(&str) -> Option<T>) -> T
where
    T: Default + std::fmt::Debug,
{
    lookup(raw).unwrap_or_else(|| {
        let fallback = T::default();
        debug!(field, input = raw, default = ?fallback, "unrecognized category, using default");
        fallback
    })
}

// ============================================================================
// Result
// ============================================================================

/// Estimated material quantities, each rounded to two decimals.
///
/// Fields are only reachable through [`MaterialEstimate::new`], which rounds,
/// and [`MaterialEstimate::zero`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "Steel (tons)": 122.41,
///   "Cement (tons)": 86.03,
///   "Insulators (units)": 247.9
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialEstimate {
    #[serde(rename = "Steel (tons)")]
    steel_tons: f64,
    #[serde(rename = "Cement (tons)")]
    cement_tons: f64,
    #[serde(rename = "Insulators (units)")]
    insulator_units: f64,
}

impl MaterialEstimate {
    /// Build an estimate, rounding each quantity to two decimals
    pub fn new(steel_tons: f64, cement_tons: f64, insulator_units: f64) -> Self {
        MaterialEstimate {
            steel_tons: round2(steel_tons),
            cement_tons: round2(cement_tons),
            insulator_units: round2(insulator_units),
        }
    }

    /// The fallback returned when estimation fails
    pub const fn zero() -> Self {
        MaterialEstimate {
            steel_tons: 0.0,
            cement_tons: 0.0,
            insulator_units: 0.0,
        }
    }

    pub fn steel_tons(&self) -> f64 {
        self.steel_tons
    }

    pub fn cement_tons(&self) -> f64 {
        self.cement_tons
    }

    pub fn insulator_units(&self) -> f64 {
        self.insulator_units
    }

    /// True if every quantity is exactly zero
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Response body for `POST /predict`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub predictions: MaterialEstimate,
}

impl From<MaterialEstimate> for PredictionResponse {
    fn from(predictions: MaterialEstimate) -> Self {
        PredictionResponse { predictions }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimate materials using the thread-local RNG.
///
/// Never fails: see the module-level failure policy.
///
/// ```rust
/// use forecast_core::estimate::estimate;
///
/// let result = estimate(12.0, "Maharashtra", "400kV", "GIS", "Plain", 18.0);
/// assert!((84.0..=89.0).contains(&result.cement_tons()));
/// ```
pub fn estimate(
    budget: f64,
    location: &str,
    tower_type: &str,
    substation_type: &str,
    terrain: &str,
    tax: f64,
) -> MaterialEstimate {
    estimate_with_rng(&mut rand::rng(), budget, location, tower_type, substation_type, terrain, tax)
}

/// Estimate materials drawing jitter from `rng`
pub fn estimate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    budget: f64,
    location: &str,
    tower_type: &str,
    substation_type: &str,
    terrain: &str,
    tax: f64,
) -> MaterialEstimate {
    let project = ResolvedProject::new(budget, location, tower_type, substation_type, terrain, tax);
    estimate_project(rng, &project)
}

/// Estimate materials for an already-resolved project, falling back to zero on error
pub fn estimate_project<R: Rng + ?Sized>(rng: &mut R, project: &ResolvedProject) -> MaterialEstimate {
    match try_estimate_with_rng(rng, project) {
        Ok(result) => result,
        Err(err) => {
            warn!(code = err.error_code(), error = %err, "estimation failed, returning zero estimate");
            MaterialEstimate::zero()
        }
    }
}

/// Estimate materials, surfacing failures instead of falling back
pub fn try_estimate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    project: &ResolvedProject,
) -> ForecastResult<MaterialEstimate> {
    let budget = project.budget;
    if !budget.is_finite() {
        return Err(ForecastError::invalid_input(
            "budget",
            budget.to_string(),
            "Budget must be a finite number",
        ));
    }

    debug!(
        budget,
        location = %project.location,
        tower_type = %project.tower_type,
        substation_type = %project.substation_type,
        terrain = %project.terrain,
        tax = project.tax,
        "estimating materials"
    );

    let steel = checked("Steel (tons)", STEEL.apply(rng, budget), budget)?;
    let cement = checked("Cement (tons)", CEMENT.apply(rng, budget), budget)?;
    let insulators = checked("Insulators (units)", INSULATORS.apply(rng, budget), budget)?;

    Ok(MaterialEstimate::new(steel, cement, insulators))
}

fn checked(material: &str, value: f64, budget: f64) -> ForecastResult<f64> {
    // round2 multiplies by 100, so the rounded value must stay finite too
    if value.is_finite() && (value * 100.0).is_finite() {
        Ok(value)
    } else {
        Err(ForecastError::non_finite_result(material, budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn sample_request() -> ProjectRequest {
        ProjectRequest {
            budget: 12.0,
            location: "Maharashtra".to_string(),
            tower_type: "400kV".to_string(),
            substation_type: "GIS".to_string(),
            terrain: "Plain".to_string(),
            tax: 18.0,
        }
    }

    #[test]
    fn test_sample_project_ranges() {
        let result = sample_request().estimate();
        assert!((120.0..=125.0).contains(&result.steel_tons()), "steel {}", result.steel_tons());
        assert!((84.0..=89.0).contains(&result.cement_tons()), "cement {}", result.cement_tons());
        assert!((240.0..=250.0).contains(&result.insulator_units()), "insulators {}", result.insulator_units());
    }

    #[test]
    fn test_zero_budget_is_pure_jitter() {
        let mut rng = seeded();
        for _ in 0..200 {
            let result = estimate_with_rng(&mut rng, 0.0, "Delhi", "132kV", "AIS", "Plain", 0.0);
            assert!((0.0..=5.0).contains(&result.steel_tons()));
            assert!((0.0..=5.0).contains(&result.cement_tons()));
            assert!((0.0..=10.0).contains(&result.insulator_units()));
        }
    }

    #[test]
    fn test_unknown_location_matches_delhi() {
        let unknown = estimate_with_rng(&mut seeded(), 12.0, "Atlantis", "400kV", "GIS", "Plain", 18.0);
        let delhi = estimate_with_rng(&mut seeded(), 12.0, "Delhi", "400kV", "GIS", "Plain", 18.0);
        assert_eq!(unknown, delhi);
    }

    #[test]
    fn test_categories_do_not_change_result() {
        let a = estimate_with_rng(&mut seeded(), 3.5, "Kerala", "220kV", "GIS", "Hilly", 5.0);
        let b = estimate_with_rng(&mut seeded(), 3.5, "Odisha", "nonsense", "", "Coastal", 40.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_substitutes_defaults() {
        let request = ProjectRequest {
            budget: 1.0,
            location: "Atlantis".to_string(),
            tower_type: "765kV".to_string(),
            substation_type: "hybrid".to_string(),
            terrain: "Desert".to_string(),
            tax: 0.0,
        };
        let resolved = request.resolve();
        assert_eq!(resolved.location, Location::Delhi);
        assert_eq!(resolved.tower_type, TowerType::Kv132);
        assert_eq!(resolved.substation_type, SubstationType::Ais);
        assert_eq!(resolved.terrain, Terrain::Plain);
    }

    #[test]
    fn test_resolve_keeps_known_values() {
        let resolved = sample_request().resolve();
        assert_eq!(resolved.location, Location::Maharashtra);
        assert_eq!(resolved.tower_type, TowerType::Kv400);
        assert_eq!(resolved.substation_type, SubstationType::Gis);
        assert_eq!(resolved.terrain, Terrain::Plain);
        assert_eq!(resolved.tax, 18.0);
    }

    #[test]
    fn test_results_are_rounded() {
        let mut rng = seeded();
        for _ in 0..100 {
            let result = estimate_with_rng(&mut rng, 1.234, "Delhi", "132kV", "AIS", "Plain", 0.0);
            for value in [result.steel_tons(), result.cement_tons(), result.insulator_units()] {
                let cents = value * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6, "{} not rounded", value);
            }
        }
    }

    #[test]
    fn test_non_finite_budget_falls_back_to_zero() {
        let mut rng = seeded();
        for budget in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = estimate_with_rng(&mut rng, budget, "Delhi", "132kV", "AIS", "Plain", 0.0);
            assert!(result.is_zero());
        }
    }

    #[test]
    fn test_overflowing_budget_falls_back_to_zero() {
        let result = estimate_with_rng(&mut seeded(), 1e308, "Delhi", "132kV", "AIS", "Plain", 0.0);
        assert!(result.is_zero());
    }

    #[test]
    fn test_try_estimate_reports_errors() {
        let project = ResolvedProject::new(f64::NAN, "Delhi", "132kV", "AIS", "Plain", 0.0);
        let err = try_estimate_with_rng(&mut seeded(), &project).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let project = ResolvedProject::new(1e308, "Delhi", "132kV", "AIS", "Plain", 0.0);
        let err = try_estimate_with_rng(&mut seeded(), &project).unwrap_err();
        assert_eq!(err, ForecastError::non_finite_result("Steel (tons)", 1e308));
    }

    #[test]
    fn test_negative_budget_passes_through_formula() {
        let result = estimate_with_rng(&mut seeded(), -1.0, "Delhi", "132kV", "AIS", "Plain", 0.0);
        assert!((-10.0..=-5.0).contains(&result.steel_tons()));
        assert!(!result.is_zero());
    }

    #[test]
    fn test_estimate_serialization_keys() {
        let result = MaterialEstimate::new(122.414, 86.031, 247.9);
        let json = serde_json::to_value(PredictionResponse::from(result)).unwrap();
        let predictions = json["predictions"].as_object().unwrap();
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions["Steel (tons)"], 122.41);
        assert_eq!(predictions["Cement (tons)"], 86.03);
        assert_eq!(predictions["Insulators (units)"], 247.9);
    }

    #[test]
    fn test_new_rounds_every_quantity() {
        let result = MaterialEstimate::new(1.23456, 7.891, -0.004);
        assert_eq!(result.steel_tons(), 1.23);
        assert_eq!(result.cement_tons(), 7.89);
        assert_eq!(result.insulator_units(), 0.0);
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "budget": 12,
            "location": "Maharashtra",
            "tower_type": "400kV",
            "substation_type": "GIS",
            "terrain": "Plain",
            "tax": 18
        }"#;
        let request: ProjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, sample_request());
    }

    #[test]
    fn test_request_rejects_string_budget() {
        let json = r#"{
            "budget": "twelve",
            "location": "Delhi",
            "tower_type": "132kV",
            "substation_type": "AIS",
            "terrain": "Plain",
            "tax": 18
        }"#;
        assert!(serde_json::from_str::<ProjectRequest>(json).is_err());
    }
}
