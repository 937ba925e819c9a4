//! # Maximum Demand with Diversity
//!
//! Assesses the maximum demand of a single household installation using
//! On-Site Guide style diversity allowances, then recommends a service
//! fuse from the standard ladder.
//!
//! ## Allowances applied
//!
//! - Lighting: 66% of connected load
//! - Ring finals: 100% of the first 32 A circuit + 40% of each further one
//! - Cooker: first 10 A in full + 30% of the remainder, +5 A when the
//!   control unit has a socket
//! - Instantaneous showers: the two largest in full, 25% of the rest
//! - Immersion heater: 3 kW in full, no diversity

use serde::{Deserialize, Serialize};

use crate::bs7671::{MAIN_FUSE_RATINGS_A, NOMINAL_VOLTAGE};
use crate::errors::{CalcError, CalcResult};
use crate::sizing::{round_to, smallest_rating_at_least};
use crate::validate;

/// Rated current of a ring final circuit (A)
const RING_RATING_A: f64 = 32.0;

/// Rated load of a standard immersion heater (W)
const IMMERSION_WATTS: f64 = 3000.0;

/// Input parameters for a maximum demand assessment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "3-bed semi rewire",
///   "lighting_watts": 2300.0,
///   "ring_circuits": 2,
///   "cooker_watts": 6900.0,
///   "cooker_socket": true,
///   "shower_watts": [9200.0],
///   "immersion_heater": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversityInput {
    /// User label for this installation
    pub label: String,

    /// Total connected lighting load in watts
    pub lighting_watts: f64,

    /// Number of 32 A ring final circuits
    pub ring_circuits: u32,

    /// Cooker rating in watts (0 when there is no cooker circuit)
    pub cooker_watts: f64,

    /// Whether the cooker control unit includes a socket outlet
    pub cooker_socket: bool,

    /// Rating of each instantaneous shower in watts
    pub shower_watts: Vec<f64>,

    /// Whether an immersion heater circuit is present
    pub immersion_heater: bool,
}

impl DiversityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::non_negative("lighting_watts", self.lighting_watts)?;
        validate::count_in_range("ring_circuits", self.ring_circuits, 0, 10)?;
        validate::non_negative("cooker_watts", self.cooker_watts)?;
        validate::in_range("cooker_watts", self.cooker_watts, 0.0, 15_000.0)?;
        if self.cooker_socket && self.cooker_watts == 0.0 {
            return Err(CalcError::invalid_input(
                "cooker_socket",
                "true",
                "A cooker socket allowance needs a cooker circuit",
            ));
        }
        for (index, watts) in self.shower_watts.iter().enumerate() {
            let field = format!("shower_watts[{}]", index);
            validate::positive(&field, *watts)?;
            validate::in_range(&field, *watts, 1.0, 12_000.0)?;
        }
        if self.lighting_watts == 0.0
            && self.ring_circuits == 0
            && self.cooker_watts == 0.0
            && self.shower_watts.is_empty()
            && !self.immersion_heater
        {
            return Err(CalcError::missing_field("loads"));
        }
        Ok(())
    }
}

/// Results from a maximum demand assessment.
///
/// Every term is the post-diversity current, rounded to one decimal for
/// display; the assessed total and fuse selection use the unrounded sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversityResult {
    /// Lighting demand after diversity (A)
    pub lighting_demand_a: f64,

    /// Ring final demand after diversity (A)
    pub socket_demand_a: f64,

    /// Cooker demand after diversity (A)
    pub cooker_demand_a: f64,

    /// Shower demand after diversity (A)
    pub shower_demand_a: f64,

    /// Immersion heater demand (A)
    pub immersion_demand_a: f64,

    /// Assessed maximum demand (A), one decimal
    pub assessed_demand_a: f64,

    /// Recommended service fuse rating (A)
    pub recommended_fuse_a: u32,

    /// The assessed demand exceeds the largest single-phase service fuse
    pub supply_exceeded: bool,
}

impl DiversityResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Maximum Demand\n\
             ------------------------------------------------\n\
             Lighting (66%)     = {:.1} A\n\
             Ring finals        = {:.1} A\n\
             Cooker             = {:.1} A\n\
             Showers            = {:.1} A\n\
             Immersion          = {:.1} A\n\
             ------------------------------------------------\n\
             Assessed demand    = {:.1} A\n\
             Recommended fuse   = {} A{}",
            self.lighting_demand_a,
            self.socket_demand_a,
            self.cooker_demand_a,
            self.shower_demand_a,
            self.immersion_demand_a,
            self.assessed_demand_a,
            self.recommended_fuse_a,
            if self.supply_exceeded {
                "\n             WARNING: demand exceeds a 100 A single-phase supply"
            } else {
                ""
            },
        )
    }
}

fn cooker_demand(cooker_watts: f64, cooker_socket: bool) -> f64 {
    if cooker_watts == 0.0 {
        return 0.0;
    }
    let full = cooker_watts / NOMINAL_VOLTAGE;
    let assessed = if full > 10.0 {
        10.0 + 0.3 * (full - 10.0)
    } else {
        full
    };
    assessed + if cooker_socket { 5.0 } else { 0.0 }
}

fn shower_demand(shower_watts: &[f64]) -> f64 {
    let mut amps: Vec<f64> = shower_watts
        .iter()
        .map(|watts| watts / NOMINAL_VOLTAGE)
        .collect();
    // Largest first; the two largest carry no diversity
    amps.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    amps.iter()
        .enumerate()
        .map(|(index, a)| if index < 2 { *a } else { 0.25 * a })
        .sum()
}

/// Assess maximum demand and recommend a service fuse.
///
/// # Returns
///
/// * `Ok(DiversityResult)` - Per-term breakdown, total, and fuse rating
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &DiversityInput) -> CalcResult<DiversityResult> {
    input.validate()?;

    let lighting = input.lighting_watts / NOMINAL_VOLTAGE * 0.66;
    let sockets = if input.ring_circuits > 0 {
        RING_RATING_A + 0.4 * RING_RATING_A * f64::from(input.ring_circuits - 1)
    } else {
        0.0
    };
    let cooker = cooker_demand(input.cooker_watts, input.cooker_socket);
    let showers = shower_demand(&input.shower_watts);
    let immersion = if input.immersion_heater {
        IMMERSION_WATTS / NOMINAL_VOLTAGE
    } else {
        0.0
    };

    let total = lighting + sockets + cooker + showers + immersion;
    let largest_fuse = f64::from(MAIN_FUSE_RATINGS_A[MAIN_FUSE_RATINGS_A.len() - 1]);

    Ok(DiversityResult {
        lighting_demand_a: round_to(lighting, 1),
        socket_demand_a: round_to(sockets, 1),
        cooker_demand_a: round_to(cooker, 1),
        shower_demand_a: round_to(showers, 1),
        immersion_demand_a: round_to(immersion, 1),
        assessed_demand_a: round_to(total, 1),
        recommended_fuse_a: smallest_rating_at_least(&MAIN_FUSE_RATINGS_A, total),
        supply_exceeded: total > largest_fuse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bed_semi() -> DiversityInput {
        DiversityInput {
            label: "3-bed semi rewire".to_string(),
            lighting_watts: 2300.0,
            ring_circuits: 2,
            cooker_watts: 6900.0,
            cooker_socket: true,
            shower_watts: vec![9200.0],
            immersion_heater: false,
        }
    }

    #[test]
    fn test_assessed_demand_breakdown() {
        // lighting: 2300/230 x 0.66 = 6.6 A
        // rings: 32 + 0.4 x 32 = 44.8 A
        // cooker: 6900/230 = 30 A -> 10 + 0.3 x 20 + 5 = 21 A
        // shower: 9200/230 = 40 A in full
        // total = 112.4 A
        let result = calculate(&three_bed_semi()).unwrap();
        assert_eq!(result.lighting_demand_a, 6.6);
        assert_eq!(result.socket_demand_a, 44.8);
        assert_eq!(result.cooker_demand_a, 21.0);
        assert_eq!(result.shower_demand_a, 40.0);
        assert_eq!(result.assessed_demand_a, 112.4);
        assert_eq!(result.recommended_fuse_a, 100);
        assert!(result.supply_exceeded);
    }

    #[test]
    fn test_small_installation_fits_60a() {
        let input = DiversityInput {
            label: "1-bed flat".to_string(),
            lighting_watts: 1150.0,
            ring_circuits: 1,
            cooker_watts: 0.0,
            cooker_socket: false,
            shower_watts: vec![],
            immersion_heater: false,
        };
        // lighting: 5 x 0.66 = 3.3 A, ring: 32 A -> 35.3 A
        let result = calculate(&input).unwrap();
        assert_eq!(result.assessed_demand_a, 35.3);
        assert_eq!(result.recommended_fuse_a, 60);
        assert!(!result.supply_exceeded);
    }

    #[test]
    fn test_third_shower_carries_diversity() {
        let mut input = three_bed_semi();
        input.shower_watts = vec![9200.0, 9200.0, 9200.0];
        // 40 + 40 + 0.25 x 40 = 90 A
        let result = calculate(&input).unwrap();
        assert_eq!(result.shower_demand_a, 90.0);
    }

    #[test]
    fn test_small_cooker_taken_in_full() {
        let mut input = three_bed_semi();
        input.cooker_watts = 2000.0;
        input.cooker_socket = false;
        // 2000/230 = 8.7 A, below the 10 A knee
        let result = calculate(&input).unwrap();
        assert_eq!(result.cooker_demand_a, 8.7);
    }

    #[test]
    fn test_immersion_no_diversity() {
        let mut input = three_bed_semi();
        input.immersion_heater = true;
        let result = calculate(&input).unwrap();
        assert_eq!(result.immersion_demand_a, 13.0);
    }

    #[test]
    fn test_empty_installation_is_missing_loads() {
        let input = DiversityInput {
            label: "Nothing connected".to_string(),
            lighting_watts: 0.0,
            ring_circuits: 0,
            cooker_watts: 0.0,
            cooker_socket: false,
            shower_watts: vec![],
            immersion_heater: false,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_cooker_socket_without_cooker_rejected() {
        let mut input = three_bed_semi();
        input.cooker_watts = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("cooker_socket"));
    }

    #[test]
    fn test_rejects_nan_shower() {
        let mut input = three_bed_semi();
        input.shower_watts = vec![f64::NAN];
        let err = calculate(&input).unwrap_err();
        assert!(err.to_string().contains("shower_watts[0]"));
    }

    #[test]
    fn test_demand_monotonic_in_lighting_load() {
        let base = calculate(&three_bed_semi()).unwrap();
        let mut brighter = three_bed_semi();
        brighter.lighting_watts = 4600.0;
        let more = calculate(&brighter).unwrap();
        assert!(more.assessed_demand_a > base.assessed_demand_a);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = three_bed_semi();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: DiversityInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.shower_watts, roundtrip.shower_watts);
    }
}
