//! # Hot Water Cylinder Sizing
//!
//! Sizes a stored hot water cylinder from occupancy.
//!
//! ## Method
//!
//! Storage demand is 45 litres per occupant plus 25 litres for each
//! bathroom beyond the first, matched to the smallest standard cylinder at
//! or above the demand (largest size as the fallback).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::heating::CYLINDER_SIZES_L;
use crate::sizing::{round_to, smallest_at_least};
use crate::validate;

/// Storage allowance per occupant (litres)
const PER_OCCUPANT_L: f64 = 45.0;

/// Storage allowance per bathroom beyond the first (litres)
const PER_EXTRA_BATHROOM_L: f64 = 25.0;

/// Cylinder pressurisation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CylinderKind {
    /// Gravity fed from a header tank
    #[default]
    Vented,
    /// Mains pressure, expansion vessel required
    Unvented,
}

impl CylinderKind {
    /// All cylinder kinds for UI selection
    pub const ALL: [CylinderKind; 2] = [CylinderKind::Vented, CylinderKind::Unvented];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CylinderKind::Vented => "Vented",
            CylinderKind::Unvented => "Unvented",
        }
    }
}

impl std::fmt::Display for CylinderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CylinderKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "vented" => Ok(CylinderKind::Vented),
            "unvented" => Ok(CylinderKind::Unvented),
            other => Err(CalcError::unknown_category(
                "cylinder_kind",
                other,
                &["vented", "unvented"],
            )),
        }
    }
}

/// Input parameters for cylinder sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylinderInput {
    /// User label for this property
    pub label: String,

    /// Number of occupants (1-10)
    pub occupants: u32,

    /// Number of bathrooms (1-4)
    pub bathrooms: u32,

    /// Pressurisation type
    pub kind: CylinderKind,
}

impl CylinderInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::count_in_range("occupants", self.occupants, 1, 10)?;
        validate::count_in_range("bathrooms", self.bathrooms, 1, 4)?;
        Ok(())
    }
}

/// Results from cylinder sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylinderResult {
    /// Storage demand (litres)
    pub demand_litres: f64,

    /// Smallest standard cylinder at or above the demand (litres)
    pub recommended_litres: f64,

    /// The demand exceeds the largest standard cylinder
    pub storage_exceeded: bool,

    /// Pressurisation type carried through for the report
    pub kind: CylinderKind,
}

impl CylinderResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Cylinder Sizing\n\
             ------------------------------------------------\n\
             Storage demand     = {:.0} L\n\
             Recommended        = {:.0} L {}{}",
            self.demand_litres,
            self.recommended_litres,
            self.kind,
            if self.storage_exceeded {
                "\n             WARNING: demand exceeds the largest standard cylinder"
            } else {
                ""
            },
        )
    }
}

/// Size a hot water cylinder from occupancy.
///
/// # Returns
///
/// * `Ok(CylinderResult)` - Demand and standard cylinder size
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &CylinderInput) -> CalcResult<CylinderResult> {
    input.validate()?;

    let demand = PER_OCCUPANT_L * f64::from(input.occupants)
        + PER_EXTRA_BATHROOM_L * f64::from(input.bathrooms - 1);
    let largest = CYLINDER_SIZES_L[CYLINDER_SIZES_L.len() - 1];

    Ok(CylinderResult {
        demand_litres: round_to(demand, 0),
        recommended_litres: smallest_at_least(&CYLINDER_SIZES_L, demand),
        storage_exceeded: demand > largest,
        kind: input.kind,
    })
}
