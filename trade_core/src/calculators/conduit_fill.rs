//! # Conduit Fill Calculation
//!
//! Checks how much of a conduit's internal cross-section a bundle of single
//! insulated conductors occupies.
//!
//! ## Method
//!
//! Fill is the ratio of total cable cross-section to the conduit's usable
//! internal cross-section, as a percentage. Two limits apply: 40% for runs
//! with bends and 45% for short straight runs. Compliance is judged on the
//! unrounded ratio; the reported percentage is rounded to one decimal.

use serde::{Deserialize, Serialize};

use crate::bs7671::{CableSize, ConduitSize};
use crate::errors::CalcResult;
use crate::sizing::round_to;
use crate::validate;

/// Fill limit for runs with bends (%)
const FILL_LIMIT_BENDS: f64 = 40.0;

/// Fill limit for short straight runs (%)
const FILL_LIMIT_STRAIGHT: f64 = 45.0;

/// Input parameters for a conduit fill check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConduitFillInput {
    /// User label for this run (e.g., "DB to kitchen")
    pub label: String,

    /// Conduit size
    pub conduit: ConduitSize,

    /// Conductor size of the singles drawn in
    pub cable: CableSize,

    /// Number of conductors in the conduit
    pub cable_count: u32,
}

impl ConduitFillInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::count_in_range("cable_count", self.cable_count, 1, 30)?;
        Ok(())
    }
}

/// Results from a conduit fill check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConduitFillResult {
    /// Conduit internal cross-section (mm²)
    pub conduit_csa_mm2: f64,

    /// Overall cross-section of one conductor (mm²)
    pub cable_csa_mm2: f64,

    /// Total cross-section of all conductors (mm²)
    pub total_cable_csa_mm2: f64,

    /// Fill as a percentage of the conduit cross-section, one decimal
    pub fill_percent: f64,

    /// Within the 40% limit for runs with bends
    pub compliant_40: bool,

    /// Within the 45% limit for straight runs
    pub compliant_45: bool,

    /// Over the 45% limit - the conduit is overfilled for any run
    pub over_filled: bool,
}

impl ConduitFillResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Conduit Fill\n\
             ------------------------------------------------\n\
             Conduit area       = {:.0} mm²\n\
             Cable area         = {:.1} mm² x cables = {:.1} mm²\n\
             Fill               = {:.1}%\n\
             Runs with bends    (40% limit) {}\n\
             Straight runs      (45% limit) {}",
            self.conduit_csa_mm2,
            self.cable_csa_mm2,
            self.total_cable_csa_mm2,
            self.fill_percent,
            if self.compliant_40 { "PASS" } else { "FAIL" },
            if self.compliant_45 { "PASS" } else { "FAIL" },
        )
    }
}

/// Classify an unrounded fill percentage against both limits.
fn classify(fill_raw: f64) -> (bool, bool, bool) {
    (
        fill_raw <= FILL_LIMIT_BENDS,
        fill_raw <= FILL_LIMIT_STRAIGHT,
        fill_raw > FILL_LIMIT_STRAIGHT,
    )
}

/// Check conduit fill for a bundle of singles.
///
/// # Returns
///
/// * `Ok(ConduitFillResult)` - Fill percentage and compliance flags
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &ConduitFillInput) -> CalcResult<ConduitFillResult> {
    input.validate()?;

    let conduit_csa = input.conduit.internal_csa_mm2();
    let cable_csa = input.cable.single_overall_csa_mm2();
    let total_csa = cable_csa * f64::from(input.cable_count);

    let fill_raw = total_csa / conduit_csa * 100.0;
    let (compliant_40, compliant_45, over_filled) = classify(fill_raw);

    Ok(ConduitFillResult {
        conduit_csa_mm2: conduit_csa,
        cable_csa_mm2: cable_csa,
        total_cable_csa_mm2: round_to(total_csa, 1),
        fill_percent: round_to(fill_raw, 1),
        compliant_40,
        compliant_45,
        over_filled,
    })
}
