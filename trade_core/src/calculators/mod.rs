//! # Trade Calculators
//!
//! This module contains all calculator types. Each calculator follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure function
//!
//! Calculators are independent leaves: none depends on another, and every
//! result is a pure function of its input and the fixed tables.
//!
//! ## Available Calculators
//!
//! - [`boiler`] - Whole-dwelling boiler type and output
//! - [`radiator`] - Per-room radiator output in W and BTU/h
//! - [`cylinder`] - Stored hot water cylinder size
//! - [`conduit_fill`] - Conduit fill percentage check
//! - [`voltage_drop`] - Cable run voltage drop check
//! - [`cable_size`] - Twin-and-earth conductor selection
//! - [`mcb`] - Protective device rating and curve
//! - [`diversity`] - Household maximum demand assessment
//! - [`ventilation`] - Extractor fan sizing
//! - [`screed`] - Floor screed quantities and depth check

pub mod boiler;
pub mod cable_size;
pub mod conduit_fill;
pub mod cylinder;
pub mod diversity;
pub mod mcb;
pub mod radiator;
pub mod screed;
pub mod ventilation;
pub mod voltage_drop;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use boiler::{BoilerInput, BoilerResult};
pub use cable_size::{CableSizeInput, CableSizeResult};
pub use conduit_fill::{ConduitFillInput, ConduitFillResult};
pub use cylinder::{CylinderInput, CylinderResult};
pub use diversity::{DiversityInput, DiversityResult};
pub use mcb::{McbInput, McbResult};
pub use radiator::{RadiatorInput, RadiatorResult};
pub use screed::{ScreedInput, ScreedResult};
pub use ventilation::{VentilationInput, VentilationResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};

/// Enum wrapper for all calculator inputs.
///
/// This allows the presentation layer to hold any pending calculation in
/// one place while keeping type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Whole-dwelling boiler sizing
    Boiler(BoilerInput),
    /// Per-room radiator sizing
    Radiator(RadiatorInput),
    /// Hot water cylinder sizing
    Cylinder(CylinderInput),
    /// Conduit fill check
    ConduitFill(ConduitFillInput),
    /// Voltage drop check
    VoltageDrop(VoltageDropInput),
    /// Cable size selection
    CableSize(CableSizeInput),
    /// Protective device selection
    Mcb(McbInput),
    /// Maximum demand assessment
    Diversity(DiversityInput),
    /// Extractor fan sizing
    Ventilation(VentilationInput),
    /// Screed quantity estimate
    Screed(ScreedInput),
}

/// Enum wrapper for all calculator results, mirroring [`CalculationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    /// Boiler sizing result
    Boiler(BoilerResult),
    /// Radiator sizing result
    Radiator(RadiatorResult),
    /// Cylinder sizing result
    Cylinder(CylinderResult),
    /// Conduit fill result
    ConduitFill(ConduitFillResult),
    /// Voltage drop result
    VoltageDrop(VoltageDropResult),
    /// Cable size result
    CableSize(CableSizeResult),
    /// Protective device result
    Mcb(McbResult),
    /// Maximum demand result
    Diversity(DiversityResult),
    /// Extractor sizing result
    Ventilation(VentilationResult),
    /// Screed estimate result
    Screed(ScreedResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Boiler(input) => &input.label,
            CalculationItem::Radiator(input) => &input.label,
            CalculationItem::Cylinder(input) => &input.label,
            CalculationItem::ConduitFill(input) => &input.label,
            CalculationItem::VoltageDrop(input) => &input.label,
            CalculationItem::CableSize(input) => &input.label,
            CalculationItem::Mcb(input) => &input.label,
            CalculationItem::Diversity(input) => &input.label,
            CalculationItem::Ventilation(input) => &input.label,
            CalculationItem::Screed(input) => &input.label,
        }
    }

    /// Get the calculator type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Boiler(_) => "Boiler",
            CalculationItem::Radiator(_) => "Radiator",
            CalculationItem::Cylinder(_) => "Cylinder",
            CalculationItem::ConduitFill(_) => "ConduitFill",
            CalculationItem::VoltageDrop(_) => "VoltageDrop",
            CalculationItem::CableSize(_) => "CableSize",
            CalculationItem::Mcb(_) => "Mcb",
            CalculationItem::Diversity(_) => "Diversity",
            CalculationItem::Ventilation(_) => "Ventilation",
            CalculationItem::Screed(_) => "Screed",
        }
    }

    /// Run the wrapped calculator.
    pub fn evaluate(&self) -> CalcResult<CalculationOutcome> {
        Ok(match self {
            CalculationItem::Boiler(input) => {
                CalculationOutcome::Boiler(boiler::calculate(input)?)
            }
            CalculationItem::Radiator(input) => {
                CalculationOutcome::Radiator(radiator::calculate(input)?)
            }
            CalculationItem::Cylinder(input) => {
                CalculationOutcome::Cylinder(cylinder::calculate(input)?)
            }
            CalculationItem::ConduitFill(input) => {
                CalculationOutcome::ConduitFill(conduit_fill::calculate(input)?)
            }
            CalculationItem::VoltageDrop(input) => {
                CalculationOutcome::VoltageDrop(voltage_drop::calculate(input)?)
            }
            CalculationItem::CableSize(input) => {
                CalculationOutcome::CableSize(cable_size::calculate(input)?)
            }
            CalculationItem::Mcb(input) => CalculationOutcome::Mcb(mcb::calculate(input)?),
            CalculationItem::Diversity(input) => {
                CalculationOutcome::Diversity(diversity::calculate(input)?)
            }
            CalculationItem::Ventilation(input) => {
                CalculationOutcome::Ventilation(ventilation::calculate(input)?)
            }
            CalculationItem::Screed(input) => {
                CalculationOutcome::Screed(screed::calculate(input)?)
            }
        })
    }
}

impl CalculationOutcome {
    /// Format the wrapped result as a multi-line report
    pub fn format_report(&self) -> String {
        match self {
            CalculationOutcome::Boiler(result) => result.format_report(),
            CalculationOutcome::Radiator(result) => result.format_report(),
            CalculationOutcome::Cylinder(result) => result.format_report(),
            CalculationOutcome::ConduitFill(result) => result.format_report(),
            CalculationOutcome::VoltageDrop(result) => result.format_report(),
            CalculationOutcome::CableSize(result) => result.format_report(),
            CalculationOutcome::Mcb(result) => result.format_report(),
            CalculationOutcome::Diversity(result) => result.format_report(),
            CalculationOutcome::Ventilation(result) => result.format_report(),
            CalculationOutcome::Screed(result) => result.format_report(),
        }
    }
}

/// Descriptor for one calculator, used by presentation menus.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalculatorInfo {
    /// Stable identifier (e.g., "radiator")
    pub id: &'static str,
    /// Short display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
}

static REGISTRY: Lazy<Vec<CalculatorInfo>> = Lazy::new(|| {
    vec![
        CalculatorInfo {
            id: "boiler",
            name: "Boiler sizing",
            description: "Boiler type and kW output for a dwelling",
        },
        CalculatorInfo {
            id: "radiator",
            name: "Radiator BTU",
            description: "Radiator output in W and BTU/h for a room",
        },
        CalculatorInfo {
            id: "cylinder",
            name: "Cylinder sizing",
            description: "Hot water cylinder capacity in litres",
        },
        CalculatorInfo {
            id: "conduit-fill",
            name: "Conduit fill",
            description: "Fill percentage against the 40%/45% limits",
        },
        CalculatorInfo {
            id: "voltage-drop",
            name: "Voltage drop",
            description: "Drop over a run against the BS 7671 limits",
        },
        CalculatorInfo {
            id: "cable-size",
            name: "Cable sizing",
            description: "Twin-and-earth size after derating factors",
        },
        CalculatorInfo {
            id: "mcb",
            name: "MCB selection",
            description: "Protective device rating and trip curve",
        },
        CalculatorInfo {
            id: "diversity",
            name: "Maximum demand",
            description: "Household demand after diversity allowances",
        },
        CalculatorInfo {
            id: "ventilation",
            name: "Extractor sizing",
            description: "Fan rating from the air-change method",
        },
        CalculatorInfo {
            id: "screed",
            name: "Screed estimate",
            description: "Screed volume, tonnage, and depth check",
        },
    ]
});

/// All registered calculators, in menu order.
pub fn registry() -> &'static [CalculatorInfo] {
    &REGISTRY
}
