//! # Heating Reference Data
//!
//! Lookup tables shared by the heating and hot-water calculators: heat-loss
//! allowances per room type, insulation and property multipliers, glazing
//! losses, and the standard boiler and cylinder size ladders. The
//! allowances are conventional UK sizing constants of the kind published in
//! installer sizing guides.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;

/// Watts-to-BTU/h conversion constant
pub const WATTS_TO_BTU: f64 = 3.412;

/// Standard combi/system boiler outputs (kW), sorted ascending
pub const BOILER_OUTPUTS_KW: [f64; 10] = [
    24.0, 25.0, 27.0, 28.0, 30.0, 32.0, 35.0, 38.0, 40.0, 45.0,
];

/// Standard hot water cylinder capacities (litres), sorted ascending
pub const CYLINDER_SIZES_L: [f64; 7] = [90.0, 120.0, 150.0, 180.0, 210.0, 250.0, 300.0];

// ============================================================================
// Property Type
// ============================================================================

/// Dwelling form, which scales whole-house heat loss.
///
/// A mid-floor flat shares most surfaces with heated neighbours; a detached
/// house exposes every wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PropertyType {
    /// Flat or maisonette: x0.8
    Flat,
    /// Mid-terrace: x0.85
    MidTerrace,
    /// End-terrace: x0.95
    EndTerrace,
    /// Semi-detached: x1.0
    #[default]
    SemiDetached,
    /// Detached: x1.15
    Detached,
}

impl PropertyType {
    /// All property types for UI selection
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Flat,
        PropertyType::MidTerrace,
        PropertyType::EndTerrace,
        PropertyType::SemiDetached,
        PropertyType::Detached,
    ];

    /// Get the heat loss multiplier
    pub fn heat_loss_factor(&self) -> f64 {
        match self {
            PropertyType::Flat => 0.8,
            PropertyType::MidTerrace => 0.85,
            PropertyType::EndTerrace => 0.95,
            PropertyType::SemiDetached => 1.0,
            PropertyType::Detached => 1.15,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyType::Flat => "Flat (x0.80)",
            PropertyType::MidTerrace => "Mid-terrace (x0.85)",
            PropertyType::EndTerrace => "End-terrace (x0.95)",
            PropertyType::SemiDetached => "Semi-detached (x1.00)",
            PropertyType::Detached => "Detached (x1.15)",
        }
    }

    const KEYS: [&'static str; 5] = ["flat", "mid-terrace", "end-terrace", "semi", "detached"];
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PropertyType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "flat" => Ok(PropertyType::Flat),
            "mid-terrace" => Ok(PropertyType::MidTerrace),
            "end-terrace" => Ok(PropertyType::EndTerrace),
            "semi" => Ok(PropertyType::SemiDetached),
            "detached" => Ok(PropertyType::Detached),
            other => Err(CalcError::unknown_category("property_type", other, &Self::KEYS)),
        }
    }
}

// ============================================================================
// Insulation
// ============================================================================

/// Overall insulation standard of the building fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InsulationLevel {
    /// Pre-1980s, uninsulated: x1.2
    Poor,
    /// Typical existing stock: x1.0
    #[default]
    Average,
    /// Modern or retrofitted: x0.9
    Good,
}

impl InsulationLevel {
    /// All insulation levels for UI selection
    pub const ALL: [InsulationLevel; 3] = [
        InsulationLevel::Poor,
        InsulationLevel::Average,
        InsulationLevel::Good,
    ];

    /// Get the heat loss multiplier
    pub fn factor(&self) -> f64 {
        match self {
            InsulationLevel::Poor => 1.2,
            InsulationLevel::Average => 1.0,
            InsulationLevel::Good => 0.9,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationLevel::Poor => "Poor (x1.20)",
            InsulationLevel::Average => "Average (x1.00)",
            InsulationLevel::Good => "Good (x0.90)",
        }
    }

    const KEYS: [&'static str; 3] = ["poor", "average", "good"];
}

impl std::fmt::Display for InsulationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for InsulationLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "poor" => Ok(InsulationLevel::Poor),
            "average" => Ok(InsulationLevel::Average),
            "good" => Ok(InsulationLevel::Good),
            other => Err(CalcError::unknown_category("insulation", other, &Self::KEYS)),
        }
    }
}

// ============================================================================
// Room Type
// ============================================================================

/// Room use, which sets the watts-per-cubic-metre heat allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomType {
    /// Living room: 44 W/m³
    #[default]
    Living,
    /// Bedroom: 38 W/m³
    Bedroom,
    /// Kitchen: 42 W/m³
    Kitchen,
    /// Dining room: 44 W/m³
    Dining,
    /// Bathroom: 50 W/m³
    Bathroom,
    /// Hallway or landing: 40 W/m³
    Hallway,
}

impl RoomType {
    /// All room types for UI selection
    pub const ALL: [RoomType; 6] = [
        RoomType::Living,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Dining,
        RoomType::Bathroom,
        RoomType::Hallway,
    ];

    /// Heat allowance (W per m³ of room volume)
    pub fn watts_per_m3(&self) -> f64 {
        match self {
            RoomType::Living => 44.0,
            RoomType::Bedroom => 38.0,
            RoomType::Kitchen => 42.0,
            RoomType::Dining => 44.0,
            RoomType::Bathroom => 50.0,
            RoomType::Hallway => 40.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Living => "Living room (44 W/m³)",
            RoomType::Bedroom => "Bedroom (38 W/m³)",
            RoomType::Kitchen => "Kitchen (42 W/m³)",
            RoomType::Dining => "Dining room (44 W/m³)",
            RoomType::Bathroom => "Bathroom (50 W/m³)",
            RoomType::Hallway => "Hallway (40 W/m³)",
        }
    }

    const KEYS: [&'static str; 6] = ["living", "bedroom", "kitchen", "dining", "bathroom", "hallway"];
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for RoomType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "living" => Ok(RoomType::Living),
            "bedroom" => Ok(RoomType::Bedroom),
            "kitchen" => Ok(RoomType::Kitchen),
            "dining" => Ok(RoomType::Dining),
            "bathroom" => Ok(RoomType::Bathroom),
            "hallway" => Ok(RoomType::Hallway),
            other => Err(CalcError::unknown_category("room_type", other, &Self::KEYS)),
        }
    }
}

// ============================================================================
// Glazing
// ============================================================================

/// Window glazing standard, which sets the per-window heat loss allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Glazing {
    /// Single glazed: +100 W per window
    Single,
    /// Double glazed: +50 W per window
    #[default]
    Double,
    /// Triple glazed: +25 W per window
    Triple,
}

impl Glazing {
    /// All glazing variants for UI selection
    pub const ALL: [Glazing; 3] = [Glazing::Single, Glazing::Double, Glazing::Triple];

    /// Heat loss allowance per window (W)
    pub fn window_loss_watts(&self) -> f64 {
        match self {
            Glazing::Single => 100.0,
            Glazing::Double => 50.0,
            Glazing::Triple => 25.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Glazing::Single => "Single glazed (+100 W/window)",
            Glazing::Double => "Double glazed (+50 W/window)",
            Glazing::Triple => "Triple glazed (+25 W/window)",
        }
    }

    const KEYS: [&'static str; 3] = ["single", "double", "triple"];
}

impl std::fmt::Display for Glazing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Glazing {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single" => Ok(Glazing::Single),
            "double" => Ok(Glazing::Double),
            "triple" => Ok(Glazing::Triple),
            other => Err(CalcError::unknown_category("glazing", other, &Self::KEYS)),
        }
    }
}

// ============================================================================
// Floor Level
// ============================================================================

/// Vertical position of the room within the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FloorLevel {
    /// Ground floor, losses into the floor slab: x1.1
    Ground,
    /// Intermediate floor: x1.0
    #[default]
    Mid,
    /// Top floor under the roof: x1.15
    Top,
}

impl FloorLevel {
    /// All floor levels for UI selection
    pub const ALL: [FloorLevel; 3] = [FloorLevel::Ground, FloorLevel::Mid, FloorLevel::Top];

    /// Get the heat loss multiplier
    pub fn factor(&self) -> f64 {
        match self {
            FloorLevel::Ground => 1.1,
            FloorLevel::Mid => 1.0,
            FloorLevel::Top => 1.15,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FloorLevel::Ground => "Ground floor (x1.10)",
            FloorLevel::Mid => "Mid floor (x1.00)",
            FloorLevel::Top => "Top floor (x1.15)",
        }
    }

    const KEYS: [&'static str; 3] = ["ground", "mid", "top"];
}

impl std::fmt::Display for FloorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FloorLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ground" => Ok(FloorLevel::Ground),
            "mid" => Ok(FloorLevel::Mid),
            "top" => Ok(FloorLevel::Top),
            other => Err(CalcError::unknown_category("floor_level", other, &Self::KEYS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_living_room_allowance() {
        assert_eq!(RoomType::Living.watts_per_m3(), 44.0);
    }

    #[test]
    fn test_insulation_factors() {
        assert_eq!(InsulationLevel::Average.factor(), 1.0);
        assert_eq!(InsulationLevel::Poor.factor(), 1.2);
        assert_eq!(InsulationLevel::Good.factor(), 0.9);
    }

    #[test]
    fn test_glazing_losses() {
        assert_eq!(Glazing::Double.window_loss_watts(), 50.0);
        assert!(Glazing::Single.window_loss_watts() > Glazing::Triple.window_loss_watts());
    }

    #[test]
    fn test_boiler_ladder_sorted() {
        assert!(BOILER_OUTPUTS_KW.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(BOILER_OUTPUTS_KW[0], 24.0);
        assert_eq!(BOILER_OUTPUTS_KW[9], 45.0);
    }

    #[test]
    fn test_property_type_parsing() {
        assert_eq!("semi".parse::<PropertyType>().unwrap(), PropertyType::SemiDetached);
        assert_eq!(
            "mid-terrace".parse::<PropertyType>().unwrap(),
            PropertyType::MidTerrace
        );
        let err = "bungalow".parse::<PropertyType>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
        assert!(err.to_string().contains("detached"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&RoomType::Bathroom).unwrap();
        let parsed: RoomType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RoomType::Bathroom);
    }
}
