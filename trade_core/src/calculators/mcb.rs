//! # Protective Device Selection
//!
//! Picks the standard MCB rating and trip curve for a single-phase load.
//!
//! ## Method
//!
//! Design current is load watts over the 230 V nominal. The rating is the
//! smallest BS EN 60898 rating at or above the design current (largest
//! rating as the fallback). Resistive loads get a type B curve; loads with
//! switch-on inrush get type C.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::bs7671::{MCB_RATINGS_A, NOMINAL_VOLTAGE};
use crate::errors::{CalcError, CalcResult};
use crate::sizing::{round_to, smallest_rating_at_least};
use crate::validate;

/// Trip curve class per BS EN 60898.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum McbCurve {
    /// Trips at 3-5x rated current
    B,
    /// Trips at 5-10x rated current
    C,
}

impl std::fmt::Display for McbCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            McbCurve::B => write!(f, "Type B"),
            McbCurve::C => write!(f, "Type C"),
        }
    }
}

/// Load character, which decides the trip curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadCharacter {
    /// Heaters, lighting, general socket loads: type B
    #[default]
    Resistive,
    /// Motors, transformers, loads with inrush: type C
    HighInrush,
}

impl LoadCharacter {
    /// All load character variants for UI selection
    pub const ALL: [LoadCharacter; 2] = [LoadCharacter::Resistive, LoadCharacter::HighInrush];

    /// Trip curve for this load character
    pub fn curve(&self) -> McbCurve {
        match self {
            LoadCharacter::Resistive => McbCurve::B,
            LoadCharacter::HighInrush => McbCurve::C,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCharacter::Resistive => "Resistive (Type B)",
            LoadCharacter::HighInrush => "High inrush (Type C)",
        }
    }

    const KEYS: [&'static str; 2] = ["resistive", "high-inrush"];
}

impl std::fmt::Display for LoadCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LoadCharacter {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resistive" => Ok(LoadCharacter::Resistive),
            "high-inrush" => Ok(LoadCharacter::HighInrush),
            other => Err(CalcError::unknown_category("load_character", other, &Self::KEYS)),
        }
    }
}

/// Input parameters for protective device selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McbInput {
    /// User label for this circuit (e.g., "Shower")
    pub label: String,

    /// Connected load in watts
    pub load_watts: f64,

    /// Load character, decides the trip curve
    pub load: LoadCharacter,
}

impl McbInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::positive("load_watts", self.load_watts)?;
        validate::in_range("load_watts", self.load_watts, 1.0, 23_000.0)?;
        Ok(())
    }
}

/// Results from protective device selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McbResult {
    /// Design current Ib (A), one decimal
    pub design_current_a: f64,

    /// Selected MCB rating (A)
    pub rating_a: u32,

    /// Selected trip curve
    pub curve: McbCurve,

    /// The design current exceeds the largest standard rating; the
    /// selection is the largest rating and the load needs splitting
    pub rating_exceeded: bool,
}

impl McbResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Protective Device\n\
             ------------------------------------------------\n\
             Design current     = {:.1} A\n\
             Selected device    = {} A {}{}",
            self.design_current_a,
            self.rating_a,
            self.curve,
            if self.rating_exceeded {
                "\n             WARNING: load exceeds the largest single MCB"
            } else {
                ""
            },
        )
    }
}

/// Select an MCB rating and curve for a single-phase load.
///
/// # Returns
///
/// * `Ok(McbResult)` - Selected rating and curve
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &McbInput) -> CalcResult<McbResult> {
    input.validate()?;

    let ib = input.load_watts / NOMINAL_VOLTAGE;
    let rating = smallest_rating_at_least(&MCB_RATINGS_A, ib);

    Ok(McbResult {
        design_current_a: round_to(ib, 1),
        rating_a: rating,
        curve: input.load.curve(),
        rating_exceeded: ib > f64::from(MCB_RATINGS_A[MCB_RATINGS_A.len() - 1]),
    })
}
