//! # Extractor Ventilation Sizing
//!
//! Sizes an extractor fan for a wet or cooking room from the air-change
//! method.
//!
//! ## Method
//!
//! Required extraction is room volume times the air changes per hour for
//! the room use, rounded to the nearest whole m³/h. The recommended fan is
//! the smallest standard rating at or above the requirement (largest rating
//! as the fallback).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::sizing::{round_to, smallest_at_least};
use crate::validate;

/// Standard extractor fan ratings (m³/h), sorted ascending
pub const FAN_RATINGS_M3H: [f64; 6] = [85.0, 110.0, 185.0, 220.0, 280.0, 440.0];

/// Room use with its air-changes-per-hour requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VentedRoom {
    /// Kitchen: 12 ACH
    Kitchen,
    /// Bathroom or shower room: 8 ACH
    #[default]
    Bathroom,
    /// Utility room: 6 ACH
    Utility,
    /// WC: 6 ACH
    Toilet,
}

impl VentedRoom {
    /// All vented room types for UI selection
    pub const ALL: [VentedRoom; 4] = [
        VentedRoom::Kitchen,
        VentedRoom::Bathroom,
        VentedRoom::Utility,
        VentedRoom::Toilet,
    ];

    /// Air changes per hour for this room use
    pub fn air_changes_per_hour(&self) -> f64 {
        match self {
            VentedRoom::Kitchen => 12.0,
            VentedRoom::Bathroom => 8.0,
            VentedRoom::Utility => 6.0,
            VentedRoom::Toilet => 6.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            VentedRoom::Kitchen => "Kitchen (12 ACH)",
            VentedRoom::Bathroom => "Bathroom (8 ACH)",
            VentedRoom::Utility => "Utility (6 ACH)",
            VentedRoom::Toilet => "WC (6 ACH)",
        }
    }

    const KEYS: [&'static str; 4] = ["kitchen", "bathroom", "utility", "toilet"];
}

impl std::fmt::Display for VentedRoom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for VentedRoom {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kitchen" => Ok(VentedRoom::Kitchen),
            "bathroom" => Ok(VentedRoom::Bathroom),
            "utility" => Ok(VentedRoom::Utility),
            "toilet" => Ok(VentedRoom::Toilet),
            other => Err(CalcError::unknown_category("vented_room", other, &Self::KEYS)),
        }
    }
}

/// Input parameters for extractor sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VentilationInput {
    /// User label for this room
    pub label: String,

    /// Room length in metres
    pub length_m: f64,

    /// Room width in metres
    pub width_m: f64,

    /// Ceiling height in metres
    pub height_m: f64,

    /// Room use, sets the air change rate
    pub room: VentedRoom,
}

impl VentilationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("length_m", self.length_m, 0.5, 20.0)?;
        validate::in_range("width_m", self.width_m, 0.5, 20.0)?;
        validate::in_range("height_m", self.height_m, 1.8, 6.0)?;
        Ok(())
    }

    /// Room volume in cubic metres
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }
}

/// Results from extractor sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VentilationResult {
    /// Room volume (m³)
    pub volume_m3: f64,

    /// Air changes per hour applied
    pub air_changes_per_hour: f64,

    /// Required extraction rate (m³/h), nearest whole unit
    pub required_m3h: f64,

    /// Smallest standard fan at or above the requirement (m³/h)
    pub recommended_fan_m3h: f64,

    /// The requirement exceeds the largest standard fan
    pub rating_exceeded: bool,
}

impl VentilationResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Extractor Sizing\n\
             ------------------------------------------------\n\
             Room volume        = {:.1} m³\n\
             Air changes        = {:.0} per hour\n\
             Required           = {:.0} m³/h\n\
             Recommended fan    = {:.0} m³/h{}",
            self.volume_m3,
            self.air_changes_per_hour,
            self.required_m3h,
            self.recommended_fan_m3h,
            if self.rating_exceeded {
                "\n             WARNING: requirement exceeds a single standard fan"
            } else {
                ""
            },
        )
    }
}

/// Size an extractor fan for one room.
///
/// # Returns
///
/// * `Ok(VentilationResult)` - Required rate and standard fan rating
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &VentilationInput) -> CalcResult<VentilationResult> {
    input.validate()?;

    let volume = input.volume_m3();
    let ach = input.room.air_changes_per_hour();
    let required_raw = volume * ach;
    let largest = FAN_RATINGS_M3H[FAN_RATINGS_M3H.len() - 1];

    Ok(VentilationResult {
        volume_m3: round_to(volume, 1),
        air_changes_per_hour: ach,
        required_m3h: round_to(required_raw, 0),
        recommended_fan_m3h: smallest_at_least(&FAN_RATINGS_M3H, required_raw),
        rating_exceeded: required_raw > largest,
    })
}
