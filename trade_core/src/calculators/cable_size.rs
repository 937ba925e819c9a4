//! # Cable Sizing Calculation
//!
//! Selects the smallest twin-and-earth conductor whose tabulated capacity
//! covers the design current after installation derating.
//!
//! ## Method
//!
//! The design current is divided by the product of the correction factors
//! (ambient temperature Ca, grouping Cg, thermal insulation Ci) to give the
//! minimum tabulated capacity, then the cable table is scanned ascending
//! for the first size whose clipped-direct capacity qualifies. When even
//! the largest size falls short, the largest is returned and flagged.

use serde::{Deserialize, Serialize};

use crate::bs7671::{grouping_factor, AmbientTemp, CableSize, ThermalInsulation};
use crate::errors::CalcResult;
use crate::sizing::round_to;
use crate::validate;

/// Input parameters for cable sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CableSizeInput {
    /// User label for this circuit (e.g., "Shower circuit")
    pub label: String,

    /// Design current Ib in amps
    pub design_current_a: f64,

    /// Ambient temperature band
    pub ambient: AmbientTemp,

    /// Number of touching circuits grouped together, including this one
    pub grouped_circuits: u32,

    /// Thermal insulation contact along the run
    pub insulation_contact: ThermalInsulation,
}

impl CableSizeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::positive("design_current_a", self.design_current_a)?;
        validate::in_range("design_current_a", self.design_current_a, 0.1, 120.0)?;
        validate::count_in_range("grouped_circuits", self.grouped_circuits, 1, 12)?;
        Ok(())
    }
}

/// Results from cable sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CableSizeResult {
    /// Combined correction factor Ca x Cg x Ci, three decimals
    pub correction_factor: f64,

    /// Minimum tabulated capacity after derating (A), one decimal
    pub required_capacity_a: f64,

    /// Selected conductor size
    pub cable: CableSize,

    /// Tabulated capacity of the selected size (A)
    pub cable_capacity_a: f64,

    /// The demand exceeds the largest tabulated size; the selection is the
    /// largest entry and a larger cable family is needed
    pub capacity_exceeded: bool,
}

impl CableSizeResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Cable Sizing\n\
             ------------------------------------------------\n\
             Correction factor  = {:.3}\n\
             Required capacity  = {:.1} A\n\
             Selected cable     = {} ({:.0} A clipped direct){}",
            self.correction_factor,
            self.required_capacity_a,
            self.cable.display_name(),
            self.cable_capacity_a,
            if self.capacity_exceeded {
                "\n             WARNING: demand exceeds the twin-and-earth range"
            } else {
                ""
            },
        )
    }
}

/// Select a cable size for the design current and installation conditions.
///
/// # Returns
///
/// * `Ok(CableSizeResult)` - Selected size with the derating breakdown
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &CableSizeInput) -> CalcResult<CableSizeResult> {
    input.validate()?;

    let correction = input.ambient.factor()
        * grouping_factor(input.grouped_circuits)
        * input.insulation_contact.factor();
    let required = input.design_current_a / correction;

    // Forward scan over the ascending size table; the largest size is the
    // fallback when nothing qualifies.
    let cable = CableSize::ALL
        .iter()
        .copied()
        .find(|size| size.capacity_clipped_a() >= required)
        .unwrap_or(CableSize::C16);
    let capacity = cable.capacity_clipped_a();

    Ok(CableSizeResult {
        correction_factor: round_to(correction, 3),
        required_capacity_a: round_to(required, 1),
        cable,
        cable_capacity_a: capacity,
        capacity_exceeded: required > CableSize::C16.capacity_clipped_a(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_conditions(current: f64) -> CableSizeInput {
        CableSizeInput {
            label: "Circuit".to_string(),
            design_current_a: current,
            ambient: AmbientTemp::T30,
            grouped_circuits: 1,
            insulation_contact: ThermalInsulation::None,
        }
    }

    #[test]
    fn test_no_derating_selects_smallest_qualifying() {
        // 30 A at reference conditions: 2.5 mm² (27 A) fails, 4.0 mm² (37 A) qualifies
        let result = calculate(&reference_conditions(30.0)).unwrap();
        assert_eq!(result.correction_factor, 1.0);
        assert_eq!(result.cable, CableSize::C4_0);
        assert!(!result.capacity_exceeded);
    }

    #[test]
    fn test_grouping_pushes_size_up() {
        let mut input = reference_conditions(30.0);
        input.grouped_circuits = 3;
        // 30 / 0.7 = 42.9 A -> 6.0 mm² (47 A)
        let result = calculate(&input).unwrap();
        assert_eq!(result.required_capacity_a, 42.9);
        assert_eq!(result.cable, CableSize::C6_0);
    }

    #[test]
    fn test_enclosed_insulation_halves_capacity() {
        let mut input = reference_conditions(20.0);
        input.insulation_contact = ThermalInsulation::Enclosed;
        // 20 / 0.5 = 40 A -> 6.0 mm²
        let result = calculate(&input).unwrap();
        assert_eq!(result.cable, CableSize::C6_0);
    }

    #[test]
    fn test_fallback_to_largest_size() {
        let result = calculate(&reference_conditions(95.0)).unwrap();
        assert_eq!(result.cable, CableSize::C16);
        assert!(result.capacity_exceeded);
    }

    #[test]
    fn test_exact_capacity_match_qualifies() {
        // 27 A at reference conditions sits exactly on the 2.5 mm² entry
        let result = calculate(&reference_conditions(27.0)).unwrap();
        assert_eq!(result.cable, CableSize::C2_5);
    }

    #[test]
    fn test_required_capacity_monotonic_in_current() {
        let low = calculate(&reference_conditions(10.0)).unwrap();
        let high = calculate(&reference_conditions(40.0)).unwrap();
        assert!(high.required_capacity_a > low.required_capacity_a);
        assert!(high.cable.csa_mm2() >= low.cable.csa_mm2());
    }

    #[test]
    fn test_rejects_nan_current() {
        let mut bad = reference_conditions(20.0);
        bad.design_current_a = f64::NAN;
        assert!(calculate(&bad).is_err());
    }

    #[test]
    fn test_rejects_zero_group_count() {
        let mut bad = reference_conditions(20.0);
        bad.grouped_circuits = 0;
        let err = calculate(&bad).unwrap_err();
        assert!(err.to_string().contains("grouped_circuits"));
    }
}
