//! # Floor Screed Calculation
//!
//! Estimates material quantities for a sand-cement or flowing screed and
//! checks the laid depth against the minimum for the construction.
//!
//! ## Method
//!
//! Wet volume is area times depth. Dry material weight is volume times the
//! mix density; bag count is the weight divided into 25 kg bags, rounded
//! up. Depth compliance is checked, unrounded, against the minimum for the
//! screed construction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::sizing::round_to;
use crate::validate;

/// Bag weight for dry screed material (kg)
const BAG_KG: f64 = 25.0;

/// Screed construction, which sets minimum depth and mix density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScreedType {
    /// Bonded to the slab: 25 mm minimum
    #[default]
    Bonded,
    /// On a separating membrane: 50 mm minimum
    Unbonded,
    /// Over insulation: 65 mm minimum
    Floating,
    /// Pumped anhydrite: 30 mm minimum
    Flowing,
}

impl ScreedType {
    /// All screed constructions for UI selection
    pub const ALL: [ScreedType; 4] = [
        ScreedType::Bonded,
        ScreedType::Unbonded,
        ScreedType::Floating,
        ScreedType::Flowing,
    ];

    /// Minimum laid depth (mm)
    pub fn min_depth_mm(&self) -> f64 {
        match self {
            ScreedType::Bonded => 25.0,
            ScreedType::Unbonded => 50.0,
            ScreedType::Floating => 65.0,
            ScreedType::Flowing => 30.0,
        }
    }

    /// Dry mix density (kg/m³)
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            ScreedType::Bonded | ScreedType::Unbonded | ScreedType::Floating => 2100.0,
            ScreedType::Flowing => 2200.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ScreedType::Bonded => "Bonded (25 mm min)",
            ScreedType::Unbonded => "Unbonded (50 mm min)",
            ScreedType::Floating => "Floating (65 mm min)",
            ScreedType::Flowing => "Flowing (30 mm min)",
        }
    }

    const KEYS: [&'static str; 4] = ["bonded", "unbonded", "floating", "flowing"];
}

impl std::fmt::Display for ScreedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ScreedType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bonded" => Ok(ScreedType::Bonded),
            "unbonded" => Ok(ScreedType::Unbonded),
            "floating" => Ok(ScreedType::Floating),
            "flowing" => Ok(ScreedType::Flowing),
            other => Err(CalcError::unknown_category("screed_type", other, &Self::KEYS)),
        }
    }
}

/// Input parameters for a screed estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreedInput {
    /// User label for this floor
    pub label: String,

    /// Floor length in metres
    pub length_m: f64,

    /// Floor width in metres
    pub width_m: f64,

    /// Laid depth in millimetres
    pub depth_mm: f64,

    /// Screed construction
    pub screed: ScreedType,
}

impl ScreedInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("length_m", self.length_m, 0.5, 50.0)?;
        validate::in_range("width_m", self.width_m, 0.5, 50.0)?;
        validate::in_range("depth_mm", self.depth_mm, 10.0, 150.0)?;
        Ok(())
    }
}

/// Results from a screed estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreedResult {
    /// Floor area (m²)
    pub area_m2: f64,

    /// Wet volume (m³), two decimals
    pub volume_m3: f64,

    /// Dry material weight (tonnes), two decimals
    pub dry_weight_t: f64,

    /// Number of 25 kg bags, rounded up
    pub bags_25kg: u32,

    /// Minimum depth for the chosen construction (mm)
    pub min_depth_mm: f64,

    /// Laid depth meets the minimum for the construction
    pub depth_compliant: bool,
}

impl ScreedResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Screed Estimate\n\
             ------------------------------------------------\n\
             Area               = {:.1} m²\n\
             Wet volume         = {:.2} m³\n\
             Dry material       = {:.2} t ({} x 25 kg bags)\n\
             Minimum depth      = {:.0} mm {}",
            self.area_m2,
            self.volume_m3,
            self.dry_weight_t,
            self.bags_25kg,
            self.min_depth_mm,
            if self.depth_compliant { "PASS" } else { "FAIL" },
        )
    }
}

/// Estimate screed quantities and check the laid depth.
///
/// # Returns
///
/// * `Ok(ScreedResult)` - Quantities and depth compliance
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &ScreedInput) -> CalcResult<ScreedResult> {
    input.validate()?;

    let area = input.length_m * input.width_m;
    let volume = area * input.depth_mm / 1000.0;
    let dry_kg = volume * input.screed.density_kg_m3();
    let min_depth = input.screed.min_depth_mm();

    Ok(ScreedResult {
        area_m2: round_to(area, 1),
        volume_m3: round_to(volume, 2),
        dry_weight_t: round_to(dry_kg / 1000.0, 2),
        bags_25kg: (dry_kg / BAG_KG).ceil() as u32,
        min_depth_mm: min_depth,
        depth_compliant: input.depth_mm >= min_depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen_floor() -> ScreedInput {
        ScreedInput {
            label: "Kitchen floor".to_string(),
            length_m: 5.0,
            width_m: 4.0,
            depth_mm: 50.0,
            screed: ScreedType::Unbonded,
        }
    }

    #[test]
    fn test_quantities() {
        // 20 m² x 50 mm = 1.0 m³ x 2100 kg/m³ = 2.1 t = 84 bags
        let result = calculate(&kitchen_floor()).unwrap();
        assert_eq!(result.area_m2, 20.0);
        assert_eq!(result.volume_m3, 1.0);
        assert_eq!(result.dry_weight_t, 2.1);
        assert_eq!(result.bags_25kg, 84);
    }

    #[test]
    fn test_depth_at_minimum_is_compliant() {
        // 50 mm is exactly the unbonded minimum
        let result = calculate(&kitchen_floor()).unwrap();
        assert!(result.depth_compliant);
    }

    #[test]
    fn test_shallow_unbonded_fails() {
        let mut input = kitchen_floor();
        input.depth_mm = 40.0;
        let result = calculate(&input).unwrap();
        assert!(!result.depth_compliant);
        // The same depth bonded to the slab would pass
        input.screed = ScreedType::Bonded;
        let bonded = calculate(&input).unwrap();
        assert!(bonded.depth_compliant);
    }

    #[test]
    fn test_partial_bag_rounds_up() {
        let input = ScreedInput {
            label: "Hallway".to_string(),
            length_m: 2.0,
            width_m: 1.1,
            depth_mm: 30.0,
            screed: ScreedType::Bonded,
        };
        // 2.2 m² x 30 mm = 0.066 m³ x 2100 = 138.6 kg = 5.544 bags -> 6
        let result = calculate(&input).unwrap();
        assert_eq!(result.bags_25kg, 6);
    }

    #[test]
    fn test_flowing_screed_density() {
        let mut input = kitchen_floor();
        input.screed = ScreedType::Flowing;
        let result = calculate(&input).unwrap();
        // 1.0 m³ x 2200 kg/m³
        assert_eq!(result.dry_weight_t, 2.2);
    }

    #[test]
    fn test_volume_monotonic_in_depth() {
        let thin = calculate(&kitchen_floor()).unwrap();
        let mut deeper = kitchen_floor();
        deeper.depth_mm = 75.0;
        let thick = calculate(&deeper).unwrap();
        assert!(thick.volume_m3 > thin.volume_m3);
        assert!(thick.bags_25kg > thin.bags_25kg);
    }

    #[test]
    fn test_rejects_out_of_range_depth() {
        let mut bad = kitchen_floor();
        bad.depth_mm = 5.0;
        assert!(calculate(&bad).is_err());
    }

    #[test]
    fn test_screed_type_parsing() {
        assert_eq!("floating".parse::<ScreedType>().unwrap(), ScreedType::Floating);
        let err = "carpet".parse::<ScreedType>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
    }
}
