//! # BS 7671 Reference Data
//!
//! Lookup tables for the electrical calculators, taken from BS 7671:2018
//! and the IET On-Site Guide. Values are industry reference constants and
//! are reproduced as published, not derived.
//!
//! ## Overview
//!
//! Corrected current-carrying capacity follows the usual chain of
//! correction factors:
//!
//! ```text
//! It >= In / (Ca x Cg x Ci)
//! ```
//!
//! | Factor | Description              | Typical Values |
//! |--------|--------------------------|----------------|
//! | Ca     | Ambient temperature      | 0.71 - 1.03    |
//! | Cg     | Grouping                 | 0.54 - 1.0     |
//! | Ci     | Thermal insulation       | 0.5 - 1.0      |
//!
//! ## Reference
//!
//! BS 7671:2018 Appendix 4; IET On-Site Guide Appendices B and F

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;

// ============================================================================
// Regulation References
// ============================================================================

/// Citation strings for the tables used by the electrical calculators.
pub mod regs {
    /// Voltage drop limits (3% lighting, 5% other)
    pub const VOLT_DROP_LIMITS: &str = "BS 7671 Appendix 4, Table 4Ab";
    /// Millivolt per amp per metre values for 70C thermoplastic copper
    pub const MV_PER_A_M: &str = "BS 7671 Table 4D2B";
    /// Current-carrying capacity, flat twin and earth
    pub const CURRENT_CAPACITY: &str = "BS 7671 Table 4D5";
    /// Ambient temperature correction factor Ca
    pub const AMBIENT: &str = "BS 7671 Table 4B1";
    /// Grouping correction factor Cg
    pub const GROUPING: &str = "BS 7671 Table 4C1";
    /// Thermal insulation derating Ci
    pub const THERMAL_INSULATION: &str = "BS 7671 Regulation 523.9";
    /// Conduit capacity guidance
    pub const CONDUIT_FILL: &str = "On-Site Guide Appendix E";
    /// Diversity allowances for a single household
    pub const DIVERSITY: &str = "On-Site Guide Table A2";
}

/// UK single-phase nominal supply voltage (volts)
pub const NOMINAL_VOLTAGE: f64 = 230.0;

/// Standard BS EN 60898 MCB ratings (amps), sorted ascending
pub const MCB_RATINGS_A: [u32; 9] = [6, 10, 16, 20, 25, 32, 40, 50, 63];

/// Standard BS 1361 service fuse ratings (amps), sorted ascending
pub const MAIN_FUSE_RATINGS_A: [u32; 3] = [60, 80, 100];

// ============================================================================
// Cable Sizes
// ============================================================================

/// Flat twin-and-earth copper conductor size.
///
/// Carries the per-size reference data used by the voltage drop, cable
/// sizing, and conduit fill calculators: conductor CSA, millivolt drop,
/// clipped-direct current capacity, and the overall cross-section of the
/// equivalent single insulated conductor when drawn into conduit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CableSize {
    /// 1.0 mm² conductor
    C1_0,
    /// 1.5 mm² conductor (lighting circuits)
    C1_5,
    /// 2.5 mm² conductor (ring finals)
    #[default]
    C2_5,
    /// 4.0 mm² conductor
    C4_0,
    /// 6.0 mm² conductor (cookers, showers)
    C6_0,
    /// 10 mm² conductor
    C10,
    /// 16 mm² conductor (submains)
    C16,
}

impl CableSize {
    /// All cable sizes, sorted ascending by conductor CSA
    pub const ALL: [CableSize; 7] = [
        CableSize::C1_0,
        CableSize::C1_5,
        CableSize::C2_5,
        CableSize::C4_0,
        CableSize::C6_0,
        CableSize::C10,
        CableSize::C16,
    ];

    /// Conductor cross-sectional area (mm²)
    pub fn csa_mm2(&self) -> f64 {
        match self {
            CableSize::C1_0 => 1.0,
            CableSize::C1_5 => 1.5,
            CableSize::C2_5 => 2.5,
            CableSize::C4_0 => 4.0,
            CableSize::C6_0 => 6.0,
            CableSize::C10 => 10.0,
            CableSize::C16 => 16.0,
        }
    }

    /// Voltage drop (mV per amp per metre) per BS 7671 Table 4D2B
    pub fn mv_per_a_m(&self) -> f64 {
        match self {
            CableSize::C1_0 => 44.0,
            CableSize::C1_5 => 29.0,
            CableSize::C2_5 => 18.0,
            CableSize::C4_0 => 11.0,
            CableSize::C6_0 => 7.3,
            CableSize::C10 => 4.4,
            CableSize::C16 => 2.8,
        }
    }

    /// Current-carrying capacity, clipped direct (amps) per Table 4D5
    pub fn capacity_clipped_a(&self) -> f64 {
        match self {
            CableSize::C1_0 => 16.0,
            CableSize::C1_5 => 20.0,
            CableSize::C2_5 => 27.0,
            CableSize::C4_0 => 37.0,
            CableSize::C6_0 => 47.0,
            CableSize::C10 => 64.0,
            CableSize::C16 => 85.0,
        }
    }

    /// Overall cross-section of a single insulated conductor of this size
    /// (mm², insulation included), used for conduit fill ratios
    pub fn single_overall_csa_mm2(&self) -> f64 {
        match self {
            CableSize::C1_0 => 6.6,
            CableSize::C1_5 => 7.5,
            CableSize::C2_5 => 11.9,
            CableSize::C4_0 => 15.2,
            CableSize::C6_0 => 19.6,
            CableSize::C10 => 30.2,
            CableSize::C16 => 39.6,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CableSize::C1_0 => "1.0 mm²",
            CableSize::C1_5 => "1.5 mm²",
            CableSize::C2_5 => "2.5 mm²",
            CableSize::C4_0 => "4.0 mm²",
            CableSize::C6_0 => "6.0 mm²",
            CableSize::C10 => "10 mm²",
            CableSize::C16 => "16 mm²",
        }
    }

    const KEYS: [&'static str; 7] = ["1.0", "1.5", "2.5", "4.0", "6.0", "10", "16"];
}

impl std::fmt::Display for CableSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CableSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "1.0" => Ok(CableSize::C1_0),
            "1.5" => Ok(CableSize::C1_5),
            "2.5" => Ok(CableSize::C2_5),
            "4" | "4.0" => Ok(CableSize::C4_0),
            "6" | "6.0" => Ok(CableSize::C6_0),
            "10" => Ok(CableSize::C10),
            "16" => Ok(CableSize::C16),
            other => Err(CalcError::unknown_category("cable_size", other, &Self::KEYS)),
        }
    }
}

// ============================================================================
// Conduit Sizes
// ============================================================================

/// Standard round PVC conduit size with usable internal cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConduitSize {
    /// 16 mm nominal
    S16,
    /// 20 mm nominal
    #[default]
    S20,
    /// 25 mm nominal
    S25,
    /// 32 mm nominal
    S32,
}

impl ConduitSize {
    /// All conduit sizes, sorted ascending
    pub const ALL: [ConduitSize; 4] = [
        ConduitSize::S16,
        ConduitSize::S20,
        ConduitSize::S25,
        ConduitSize::S32,
    ];

    /// Usable internal cross-sectional area (mm²)
    pub fn internal_csa_mm2(&self) -> f64 {
        match self {
            ConduitSize::S16 => 137.0,
            ConduitSize::S20 => 257.0,
            ConduitSize::S25 => 415.0,
            ConduitSize::S32 => 722.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ConduitSize::S16 => "16 mm",
            ConduitSize::S20 => "20 mm",
            ConduitSize::S25 => "25 mm",
            ConduitSize::S32 => "32 mm",
        }
    }

    const KEYS: [&'static str; 4] = ["16", "20", "25", "32"];
}

impl std::fmt::Display for ConduitSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ConduitSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16" => Ok(ConduitSize::S16),
            "20" => Ok(ConduitSize::S20),
            "25" => Ok(ConduitSize::S25),
            "32" => Ok(ConduitSize::S32),
            other => Err(CalcError::unknown_category("conduit_size", other, &Self::KEYS)),
        }
    }
}

// ============================================================================
// Correction Factors
// ============================================================================

/// Ambient temperature band for the Ca correction factor.
///
/// Per BS 7671 Table 4B1 for 70C thermoplastic insulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AmbientTemp {
    /// 25C or below: Ca = 1.03
    T25,
    /// 30C (tabulated reference): Ca = 1.0
    #[default]
    T30,
    /// 35C: Ca = 0.94
    T35,
    /// 40C: Ca = 0.87
    T40,
    /// 45C: Ca = 0.79
    T45,
    /// 50C: Ca = 0.71
    T50,
}

impl AmbientTemp {
    /// All ambient temperature bands for UI selection
    pub const ALL: [AmbientTemp; 6] = [
        AmbientTemp::T25,
        AmbientTemp::T30,
        AmbientTemp::T35,
        AmbientTemp::T40,
        AmbientTemp::T45,
        AmbientTemp::T50,
    ];

    /// Get the Ca factor value
    pub fn factor(&self) -> f64 {
        match self {
            AmbientTemp::T25 => 1.03,
            AmbientTemp::T30 => 1.0,
            AmbientTemp::T35 => 0.94,
            AmbientTemp::T40 => 0.87,
            AmbientTemp::T45 => 0.79,
            AmbientTemp::T50 => 0.71,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AmbientTemp::T25 => "25C (1.03)",
            AmbientTemp::T30 => "30C (1.00)",
            AmbientTemp::T35 => "35C (0.94)",
            AmbientTemp::T40 => "40C (0.87)",
            AmbientTemp::T45 => "45C (0.79)",
            AmbientTemp::T50 => "50C (0.71)",
        }
    }

    const KEYS: [&'static str; 6] = ["25", "30", "35", "40", "45", "50"];
}

impl std::fmt::Display for AmbientTemp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AmbientTemp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "25" => Ok(AmbientTemp::T25),
            "30" => Ok(AmbientTemp::T30),
            "35" => Ok(AmbientTemp::T35),
            "40" => Ok(AmbientTemp::T40),
            "45" => Ok(AmbientTemp::T45),
            "50" => Ok(AmbientTemp::T50),
            other => Err(CalcError::unknown_category("ambient_temp", other, &Self::KEYS)),
        }
    }
}

/// Grouping correction factor Cg per BS 7671 Table 4C1.
///
/// `circuits` counts the touching circuits bunched together, including the
/// one being sized. Seven or more share the 0.54 entry.
pub fn grouping_factor(circuits: u32) -> f64 {
    match circuits {
        0 | 1 => 1.0,
        2 => 0.80,
        3 => 0.70,
        4 => 0.65,
        5 => 0.60,
        6 => 0.57,
        _ => 0.54,
    }
}

/// Thermal insulation contact for the Ci derating factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ThermalInsulation {
    /// Clear of insulation: Ci = 1.0
    #[default]
    None,
    /// Touching insulation on one side: Ci = 0.75
    OneSide,
    /// Totally surrounded for more than 0.5 m: Ci = 0.5
    Enclosed,
}

impl ThermalInsulation {
    /// All insulation contact variants for UI selection
    pub const ALL: [ThermalInsulation; 3] = [
        ThermalInsulation::None,
        ThermalInsulation::OneSide,
        ThermalInsulation::Enclosed,
    ];

    /// Get the Ci factor value
    pub fn factor(&self) -> f64 {
        match self {
            ThermalInsulation::None => 1.0,
            ThermalInsulation::OneSide => 0.75,
            ThermalInsulation::Enclosed => 0.5,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ThermalInsulation::None => "Clear of insulation",
            ThermalInsulation::OneSide => "Touching one side",
            ThermalInsulation::Enclosed => "Enclosed in insulation",
        }
    }

    const KEYS: [&'static str; 3] = ["none", "one-side", "enclosed"];
}

impl std::fmt::Display for ThermalInsulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ThermalInsulation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(ThermalInsulation::None),
            "one-side" => Ok(ThermalInsulation::OneSide),
            "enclosed" => Ok(ThermalInsulation::Enclosed),
            other => Err(CalcError::unknown_category(
                "thermal_insulation",
                other,
                &Self::KEYS,
            )),
        }
    }
}

// ============================================================================
// Circuit Use
// ============================================================================

/// Circuit use class, which sets the permitted voltage drop.
///
/// BS 7671 Table 4Ab allows 3% for lighting and 5% for other uses on a
/// public LV supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CircuitUse {
    /// Lighting circuits: 3% of nominal (6.9 V at 230 V)
    Lighting,
    /// Power and other uses: 5% of nominal (11.5 V at 230 V)
    #[default]
    Power,
}

impl CircuitUse {
    /// All circuit use variants for UI selection
    pub const ALL: [CircuitUse; 2] = [CircuitUse::Lighting, CircuitUse::Power];

    /// Permitted drop as a percentage of nominal voltage
    pub fn max_drop_percent(&self) -> f64 {
        match self {
            CircuitUse::Lighting => 3.0,
            CircuitUse::Power => 5.0,
        }
    }

    /// Permitted drop in volts at the 230 V nominal supply
    pub fn max_drop_volts(&self) -> f64 {
        NOMINAL_VOLTAGE * self.max_drop_percent() / 100.0
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CircuitUse::Lighting => "Lighting (3%)",
            CircuitUse::Power => "Power (5%)",
        }
    }

    const KEYS: [&'static str; 2] = ["lighting", "power"];
}

impl std::fmt::Display for CircuitUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CircuitUse {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lighting" => Ok(CircuitUse::Lighting),
            "power" => Ok(CircuitUse::Power),
            other => Err(CalcError::unknown_category("circuit_use", other, &Self::KEYS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mv_per_a_m_values() {
        assert_eq!(CableSize::C1_0.mv_per_a_m(), 44.0);
        assert_eq!(CableSize::C2_5.mv_per_a_m(), 18.0);
        assert_eq!(CableSize::C16.mv_per_a_m(), 2.8);
    }

    #[test]
    fn test_cable_sizes_sorted_ascending() {
        let capacities: Vec<f64> = CableSize::ALL.iter().map(|c| c.capacity_clipped_a()).collect();
        assert!(capacities.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_single_conductor_overall_csa() {
        // 2.5 mm² singles present 11.9 mm² to the conduit
        assert_eq!(CableSize::C2_5.single_overall_csa_mm2(), 11.9);
    }

    #[test]
    fn test_conduit_internal_area() {
        assert_eq!(ConduitSize::S20.internal_csa_mm2(), 257.0);
        assert_eq!(ConduitSize::S32.internal_csa_mm2(), 722.0);
    }

    #[test]
    fn test_ambient_factors() {
        assert_eq!(AmbientTemp::T30.factor(), 1.0);
        assert_eq!(AmbientTemp::T45.factor(), 0.79);
    }

    #[test]
    fn test_grouping_factor() {
        assert_eq!(grouping_factor(1), 1.0);
        assert_eq!(grouping_factor(3), 0.70);
        assert_eq!(grouping_factor(7), 0.54);
        assert_eq!(grouping_factor(12), 0.54);
    }

    #[test]
    fn test_circuit_use_limits() {
        assert_eq!(CircuitUse::Lighting.max_drop_volts(), 6.9);
        assert_eq!(CircuitUse::Power.max_drop_volts(), 11.5);
    }

    #[test]
    fn test_cable_size_parsing() {
        assert_eq!("2.5".parse::<CableSize>().unwrap(), CableSize::C2_5);
        assert_eq!("4".parse::<CableSize>().unwrap(), CableSize::C4_0);
        let err = "95".parse::<CableSize>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CableSize::C6_0).unwrap();
        let parsed: CableSize = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CableSize::C6_0);
    }
}
