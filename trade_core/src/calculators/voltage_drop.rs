//! # Voltage Drop Calculation
//!
//! Checks the voltage drop over a cable run against the BS 7671 limits.
//!
//! ## Method
//!
//! ```text
//! drop (V) = mV/A/m x design current x run length / 1000
//! ```
//!
//! The mV/A/m value comes from the cable size table. The drop is compared,
//! unrounded, against 3% of nominal for lighting or 5% for other circuits.

use serde::{Deserialize, Serialize};

use crate::bs7671::{CableSize, CircuitUse, NOMINAL_VOLTAGE};
use crate::errors::CalcResult;
use crate::sizing::round_to;
use crate::validate;

/// Input parameters for a voltage drop check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Garage submain",
///   "cable": "C6_0",
///   "design_current_a": 32.0,
///   "run_length_m": 18.0,
///   "circuit_use": "Power"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropInput {
    /// User label for this circuit (e.g., "Garage submain")
    pub label: String,

    /// Cable conductor size
    pub cable: CableSize,

    /// Design current Ib in amps
    pub design_current_a: f64,

    /// One-way run length in metres
    pub run_length_m: f64,

    /// Circuit use, sets the permitted drop
    pub circuit_use: CircuitUse,
}

impl VoltageDropInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::positive("design_current_a", self.design_current_a)?;
        validate::in_range("design_current_a", self.design_current_a, 0.1, 200.0)?;
        validate::positive("run_length_m", self.run_length_m)?;
        validate::in_range("run_length_m", self.run_length_m, 0.5, 200.0)?;
        Ok(())
    }
}

/// Results from a voltage drop check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Millivolt per amp per metre value used
    pub mv_per_a_m: f64,

    /// Voltage drop over the run (V), two decimals
    pub drop_volts: f64,

    /// Drop as a percentage of the 230 V nominal, one decimal
    pub drop_percent: f64,

    /// Permitted drop for this circuit use (V)
    pub limit_volts: f64,

    /// Permitted drop as a percentage of nominal
    pub limit_percent: f64,

    /// Whether the run is within the permitted drop
    pub compliant: bool,
}

impl VoltageDropResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Voltage Drop\n\
             ------------------------------------------------\n\
             Cable drop         = {:.1} mV/A/m\n\
             Drop over run      = {:.2} V ({:.1}%)\n\
             Permitted          = {:.1} V ({:.0}%)\n\
             Result             = {}",
            self.mv_per_a_m,
            self.drop_volts,
            self.drop_percent,
            self.limit_volts,
            self.limit_percent,
            if self.compliant { "PASS" } else { "FAIL" },
        )
    }
}

/// Check the voltage drop over a cable run.
///
/// # Returns
///
/// * `Ok(VoltageDropResult)` - Drop in volts and percent with compliance
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &VoltageDropInput) -> CalcResult<VoltageDropResult> {
    input.validate()?;

    let mv = input.cable.mv_per_a_m();
    let drop_raw = mv * input.design_current_a * input.run_length_m / 1000.0;
    let limit_volts = input.circuit_use.max_drop_volts();

    Ok(VoltageDropResult {
        mv_per_a_m: mv,
        drop_volts: round_to(drop_raw, 2),
        drop_percent: round_to(drop_raw / NOMINAL_VOLTAGE * 100.0, 1),
        limit_volts,
        limit_percent: input.circuit_use.max_drop_percent(),
        compliant: drop_raw <= limit_volts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_spur() -> VoltageDropInput {
        VoltageDropInput {
            label: "Kitchen ring".to_string(),
            cable: CableSize::C2_5,
            design_current_a: 20.0,
            run_length_m: 25.0,
            circuit_use: CircuitUse::Power,
        }
    }

    #[test]
    fn test_drop_calculation() {
        // 18 mV/A/m x 20 A x 25 m / 1000 = 9.0 V = 3.9% of 230 V
        let result = calculate(&ring_spur()).unwrap();
        assert_eq!(result.drop_volts, 9.0);
        assert_eq!(result.drop_percent, 3.9);
        assert!(result.compliant); // 9.0 V <= 11.5 V power limit
    }

    #[test]
    fn test_same_run_fails_as_lighting() {
        let mut input = ring_spur();
        input.circuit_use = CircuitUse::Lighting;
        let result = calculate(&input).unwrap();
        assert_eq!(result.limit_volts, 6.9);
        assert!(!result.compliant); // 9.0 V > 6.9 V lighting limit
    }

    #[test]
    fn test_drop_monotonic_in_length() {
        let short = calculate(&ring_spur()).unwrap();
        let mut long_run = ring_spur();
        long_run.run_length_m = 40.0;
        let long = calculate(&long_run).unwrap();
        assert!(long.drop_volts > short.drop_volts);
    }

    #[test]
    fn test_larger_cable_reduces_drop() {
        let small = calculate(&ring_spur()).unwrap();
        let mut upsized = ring_spur();
        upsized.cable = CableSize::C4_0;
        let large = calculate(&upsized).unwrap();
        assert!(large.drop_volts < small.drop_volts);
    }

    #[test]
    fn test_rejects_non_finite_current() {
        let mut bad = ring_spur();
        bad.design_current_a = f64::INFINITY;
        let err = calculate(&bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_negative_length() {
        let mut bad = ring_spur();
        bad.run_length_m = -3.0;
        assert!(calculate(&bad).is_err());
    }

    #[test]
    fn test_determinism() {
        let input = ring_spur();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first.drop_volts, second.drop_volts);
        assert_eq!(first.compliant, second.compliant);
    }
}
