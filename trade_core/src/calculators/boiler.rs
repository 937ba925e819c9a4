//! # Boiler Sizing Calculation
//!
//! Recommends a boiler type and output for a whole dwelling.
//!
//! ## Method
//!
//! Space heating demand starts from a per-bedroom base figure and is scaled
//! by the property form and insulation multipliers. Hot water demand for a
//! combi is driven by bathroom count. The recommended output is the
//! smallest standard boiler at or above the governing demand, with the
//! largest output as the fallback.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::heating::{InsulationLevel, PropertyType, BOILER_OUTPUTS_KW};
use crate::sizing::{round_to, smallest_at_least};
use crate::validate;

/// Cylinder reheat margin added for stored hot water systems (kW)
const CYLINDER_MARGIN_KW: f64 = 3.0;

/// Combi hot water base output for one bathroom (kW)
const COMBI_DHW_BASE_KW: f64 = 24.0;

/// Combi hot water uplift per additional bathroom (kW)
const COMBI_DHW_PER_BATHROOM_KW: f64 = 6.0;

/// Boiler system configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoilerType {
    /// Instantaneous hot water, no cylinder
    Combi,
    /// Sealed system with a stored hot water cylinder
    System,
    /// Open-vented with cylinder and header tanks
    Regular,
}

impl BoilerType {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BoilerType::Combi => "Combi",
            BoilerType::System => "System",
            BoilerType::Regular => "Regular (heat-only)",
        }
    }
}

impl std::fmt::Display for BoilerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BoilerType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "combi" => Ok(BoilerType::Combi),
            "system" => Ok(BoilerType::System),
            "regular" => Ok(BoilerType::Regular),
            other => Err(CalcError::unknown_category(
                "boiler_type",
                other,
                &["combi", "system", "regular"],
            )),
        }
    }
}

/// Input parameters for boiler sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "14 Elm Road",
///   "bedrooms": 3,
///   "bathrooms": 1,
///   "property": "SemiDetached",
///   "insulation": "Average"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoilerInput {
    /// User label for this property
    pub label: String,

    /// Number of bedrooms (1-6)
    pub bedrooms: u32,

    /// Number of bathrooms with a bath or shower (1-4)
    pub bathrooms: u32,

    /// Dwelling form
    pub property: PropertyType,

    /// Fabric insulation standard
    pub insulation: InsulationLevel,
}

impl BoilerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::count_in_range("bedrooms", self.bedrooms, 1, 6)?;
        validate::count_in_range("bathrooms", self.bathrooms, 1, 4)?;
        Ok(())
    }
}

/// Base space heating figure by bedroom count (kW).
///
/// Callers validate the range first; the top entry covers the largest
/// accepted count.
fn bedroom_base_kw(bedrooms: u32) -> f64 {
    match bedrooms {
        1 => 10.0,
        2 => 12.0,
        3 => 15.0,
        4 => 18.0,
        5 => 22.0,
        _ => 26.0,
    }
}

/// Results from boiler sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoilerResult {
    /// Space heating demand (kW), one decimal
    pub space_heating_kw: f64,

    /// Hot water demand for the recommended configuration (kW), one decimal
    pub hot_water_kw: f64,

    /// Governing demand used for selection (kW), one decimal
    pub demand_kw: f64,

    /// Smallest standard output at or above the demand (kW)
    pub recommended_output_kw: f64,

    /// Recommended boiler configuration
    pub boiler_type: BoilerType,
}

impl BoilerResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Boiler Sizing\n\
             ------------------------------------------------\n\
             Space heating      = {:.1} kW\n\
             Hot water          = {:.1} kW\n\
             Governing demand   = {:.1} kW\n\
             Recommended        = {} kW {}",
            self.space_heating_kw,
            self.hot_water_kw,
            self.demand_kw,
            self.recommended_output_kw,
            self.boiler_type,
        )
    }
}

/// Recommend a boiler type and output for a dwelling.
///
/// # Returns
///
/// * `Ok(BoilerResult)` - Demand breakdown, type, and standard output
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &BoilerInput) -> CalcResult<BoilerResult> {
    input.validate()?;

    let space_heating = bedroom_base_kw(input.bedrooms)
        * input.property.heat_loss_factor()
        * input.insulation.factor();

    // One bathroom in a smaller house suits a combi; stored hot water takes
    // over as bathrooms multiply or the house grows.
    let boiler_type = if input.bathrooms >= 3 || input.bedrooms >= 5 {
        BoilerType::Regular
    } else if input.bathrooms == 2 {
        BoilerType::System
    } else {
        BoilerType::Combi
    };

    let (hot_water, demand) = match boiler_type {
        BoilerType::Combi => {
            let dhw = COMBI_DHW_BASE_KW + COMBI_DHW_PER_BATHROOM_KW * f64::from(input.bathrooms - 1);
            (dhw, space_heating.max(dhw))
        }
        BoilerType::System | BoilerType::Regular => {
            (CYLINDER_MARGIN_KW, space_heating + CYLINDER_MARGIN_KW)
        }
    };

    Ok(BoilerResult {
        space_heating_kw: round_to(space_heating, 1),
        hot_water_kw: round_to(hot_water, 1),
        demand_kw: round_to(demand, 1),
        recommended_output_kw: smallest_at_least(&BOILER_OUTPUTS_KW, demand),
        boiler_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bed_semi() -> BoilerInput {
        BoilerInput {
            label: "14 Elm Road".to_string(),
            bedrooms: 3,
            bathrooms: 1,
            property: PropertyType::SemiDetached,
            insulation: InsulationLevel::Average,
        }
    }

    #[test]
    fn test_three_bed_semi_gets_combi() {
        // Space heating 15 kW, combi hot water 24 kW governs -> 24 kW boiler
        let result = calculate(&three_bed_semi()).unwrap();
        assert_eq!(result.boiler_type, BoilerType::Combi);
        assert_eq!(result.space_heating_kw, 15.0);
        assert_eq!(result.hot_water_kw, 24.0);
        assert_eq!(result.demand_kw, 24.0);
        assert_eq!(result.recommended_output_kw, 24.0);
    }

    #[test]
    fn test_two_bathrooms_moves_to_system() {
        let mut input = three_bed_semi();
        input.bathrooms = 2;
        let result = calculate(&input).unwrap();
        assert_eq!(result.boiler_type, BoilerType::System);
        // 15 + 3 kW cylinder margin = 18 kW -> smallest standard is 24 kW
        assert_eq!(result.demand_kw, 18.0);
        assert_eq!(result.recommended_output_kw, 24.0);
    }

    #[test]
    fn test_large_house_gets_regular() {
        let input = BoilerInput {
            label: "Farmhouse".to_string(),
            bedrooms: 6,
            bathrooms: 3,
            property: PropertyType::Detached,
            insulation: InsulationLevel::Poor,
        };
        // 26 x 1.15 x 1.2 = 35.88 + 3 = 38.9 kW -> 40 kW
        let result = calculate(&input).unwrap();
        assert_eq!(result.boiler_type, BoilerType::Regular);
        assert_eq!(result.demand_kw, 38.9);
        assert_eq!(result.recommended_output_kw, 40.0);
    }

    #[test]
    fn test_demand_beyond_ladder_selects_largest() {
        // The selection policy itself: nothing in the ladder covers 46 kW,
        // so the largest standard output is returned
        assert_eq!(smallest_at_least(&BOILER_OUTPUTS_KW, 46.0), 45.0);
    }

    #[test]
    fn test_demand_monotonic_in_bedrooms() {
        let mut previous = 0.0;
        for bedrooms in 1..=6 {
            let input = BoilerInput {
                label: "House".to_string(),
                bedrooms,
                bathrooms: 1,
                property: PropertyType::Detached,
                insulation: InsulationLevel::Poor,
            };
            let result = calculate(&input).unwrap();
            assert!(result.space_heating_kw >= previous);
            previous = result.space_heating_kw;
        }
    }

    #[test]
    fn test_flat_needs_less_than_detached() {
        let mut flat = three_bed_semi();
        flat.property = PropertyType::Flat;
        let mut detached = three_bed_semi();
        detached.property = PropertyType::Detached;
        let flat_result = calculate(&flat).unwrap();
        let detached_result = calculate(&detached).unwrap();
        assert!(flat_result.space_heating_kw < detached_result.space_heating_kw);
    }

    #[test]
    fn test_rejects_zero_bedrooms() {
        let mut bad = three_bed_semi();
        bad.bedrooms = 0;
        let err = calculate(&bad).unwrap_err();
        assert!(err.to_string().contains("bedrooms"));
    }

    #[test]
    fn test_rejects_seven_bedrooms() {
        let mut bad = three_bed_semi();
        bad.bedrooms = 7;
        assert!(calculate(&bad).is_err());
    }

    #[test]
    fn test_determinism() {
        let input = three_bed_semi();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first.demand_kw, second.demand_kw);
        assert_eq!(first.recommended_output_kw, second.recommended_output_kw);
        assert_eq!(first.boiler_type, second.boiler_type);
    }
}
