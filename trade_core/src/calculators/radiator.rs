//! # Radiator BTU Calculation
//!
//! Sizes a radiator for a single room from its volume and fabric details.
//!
//! ## Method
//!
//! - Base output: room volume x the room-type allowance (W/m³)
//! - Fabric multipliers: insulation standard, external walls beyond the
//!   first (+10% each), floor level, north aspect (+10%)
//! - Window losses: a fixed allowance per window by glazing standard
//! - The watt total is rounded to the nearest 10 W; BTU/h is the watt
//!   figure converted at 3.412 and rounded up to the next whole BTU
//!
//! ## Example
//!
//! ```rust
//! use trade_core::calculators::radiator::{RadiatorInput, calculate};
//! use trade_core::heating::{RoomType, InsulationLevel, Glazing, FloorLevel};
//!
//! let input = RadiatorInput {
//!     label: "Lounge".to_string(),
//!     length_m: 5.0,
//!     width_m: 4.0,
//!     height_m: 2.4,
//!     room: RoomType::Living,
//!     insulation: InsulationLevel::Average,
//!     external_walls: 1,
//!     windows: 1,
//!     glazing: Glazing::Double,
//!     floor: FloorLevel::Mid,
//!     north_facing: false,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.watts, 2160.0);
//! assert_eq!(result.btu, 7370);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::heating::{FloorLevel, Glazing, InsulationLevel, RoomType, WATTS_TO_BTU};
use crate::sizing::{round_to, round_to_nearest};
use crate::validate;

/// Uplift per external wall beyond the first
const EXTRA_WALL_UPLIFT: f64 = 0.10;

/// Uplift for a room whose main aspect faces north
const NORTH_ASPECT_UPLIFT: f64 = 0.10;

/// Input parameters for radiator sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Lounge",
///   "length_m": 5.0,
///   "width_m": 4.0,
///   "height_m": 2.4,
///   "room": "Living",
///   "insulation": "Average",
///   "external_walls": 1,
///   "windows": 1,
///   "glazing": "Double",
///   "floor": "Mid",
///   "north_facing": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiatorInput {
    /// User label for this room (e.g., "Lounge", "Bedroom 2")
    pub label: String,

    /// Room length in metres
    pub length_m: f64,

    /// Room width in metres
    pub width_m: f64,

    /// Ceiling height in metres
    pub height_m: f64,

    /// Room use, sets the W/m³ allowance
    pub room: RoomType,

    /// Fabric insulation standard
    pub insulation: InsulationLevel,

    /// Number of external walls (0-4)
    pub external_walls: u32,

    /// Number of windows (0-8)
    pub windows: u32,

    /// Glazing standard of the windows
    pub glazing: Glazing,

    /// Vertical position of the room
    pub floor: FloorLevel,

    /// Whether the room's main aspect faces north
    pub north_facing: bool,
}

impl RadiatorInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("length_m", self.length_m, 0.5, 30.0)?;
        validate::in_range("width_m", self.width_m, 0.5, 30.0)?;
        validate::in_range("height_m", self.height_m, 1.8, 6.0)?;
        validate::count_in_range("external_walls", self.external_walls, 0, 4)?;
        validate::count_in_range("windows", self.windows, 0, 8)?;
        Ok(())
    }

    /// Room volume in cubic metres
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }
}

/// Results from radiator sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiatorResult {
    /// Room volume (m³)
    pub volume_m3: f64,

    /// Base output before fabric adjustments: volume x W/m³ allowance
    pub base_watts: f64,

    /// Total window loss allowance (W)
    pub window_loss_watts: f64,

    /// Required output in watts, rounded to the nearest 10 W
    pub watts: f64,

    /// Required output in BTU/h, rounded up to the next whole BTU
    pub btu: u32,
}

impl RadiatorResult {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Radiator Sizing\n\
             ------------------------------------------------\n\
             Room volume        = {:.1} m³\n\
             Base output        = {:.0} W\n\
             Window allowance   = {:.0} W\n\
             Required output    = {:.0} W\n\
             Required output    = {} BTU/h",
            self.volume_m3, self.base_watts, self.window_loss_watts, self.watts, self.btu,
        )
    }
}

/// Size a radiator for one room.
///
/// # Returns
///
/// * `Ok(RadiatorResult)` - Required output in W and BTU/h with breakdown
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &RadiatorInput) -> CalcResult<RadiatorResult> {
    input.validate()?;

    let volume = input.volume_m3();
    let base_watts = volume * input.room.watts_per_m3();

    // The first external wall is part of the base allowance; each further
    // exposed wall adds 10%.
    let wall_factor = 1.0 + EXTRA_WALL_UPLIFT * f64::from(input.external_walls.saturating_sub(1));
    let aspect_factor = if input.north_facing {
        1.0 + NORTH_ASPECT_UPLIFT
    } else {
        1.0
    };

    let fabric_watts = base_watts
        * input.insulation.factor()
        * wall_factor
        * input.floor.factor()
        * aspect_factor;

    let window_loss_watts = f64::from(input.windows) * input.glazing.window_loss_watts();

    let watts = round_to_nearest(fabric_watts + window_loss_watts, 10.0);
    let btu = (watts * WATTS_TO_BTU).ceil() as u32;

    Ok(RadiatorResult {
        volume_m3: round_to(volume, 1),
        base_watts: round_to(base_watts, 0),
        window_loss_watts,
        watts,
        btu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lounge() -> RadiatorInput {
        RadiatorInput {
            label: "Lounge".to_string(),
            length_m: 5.0,
            width_m: 4.0,
            height_m: 2.4,
            room: RoomType::Living,
            insulation: InsulationLevel::Average,
            external_walls: 1,
            windows: 1,
            glazing: Glazing::Double,
            floor: FloorLevel::Mid,
            north_facing: false,
        }
    }

    #[test]
    fn test_worked_example() {
        // 5 x 4 x 2.4 living room, average insulation, one external wall,
        // one double-glazed window, mid floor, not north-facing:
        // volume 48 m³, base 48 x 44 = 2112 W, +50 W window = 2162 W,
        // nearest 10 = 2160 W, BTU = ceil(2160 x 3.412) = 7370
        let result = calculate(&lounge()).unwrap();
        assert_eq!(result.volume_m3, 48.0);
        assert_eq!(result.base_watts, 2112.0);
        assert_eq!(result.window_loss_watts, 50.0);
        assert_eq!(result.watts, 2160.0);
        assert_eq!(result.btu, 7370);
    }

    #[test]
    fn test_determinism() {
        let input = lounge();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first.watts, second.watts);
        assert_eq!(first.btu, second.btu);
        assert_eq!(first.base_watts, second.base_watts);
    }

    #[test]
    fn test_volume_monotonicity() {
        let smaller = calculate(&lounge()).unwrap();
        let mut bigger_room = lounge();
        bigger_room.length_m = 6.0;
        let bigger = calculate(&bigger_room).unwrap();
        assert!(bigger.watts >= smaller.watts);
        assert!(bigger.btu >= smaller.btu);
    }

    #[test]
    fn test_extra_walls_increase_output() {
        let one_wall = calculate(&lounge()).unwrap();
        let mut corner_room = lounge();
        corner_room.external_walls = 2;
        let two_walls = calculate(&corner_room).unwrap();
        // Second wall adds 10% of the fabric term
        assert!(two_walls.watts > one_wall.watts);
    }

    #[test]
    fn test_north_aspect_uplift() {
        let mut north = lounge();
        north.north_facing = true;
        let result = calculate(&north).unwrap();
        // 2112 x 1.1 + 50 = 2373.2, nearest 10 = 2370
        assert_eq!(result.watts, 2370.0);
    }

    #[test]
    fn test_single_glazing_allowance() {
        let mut drafty = lounge();
        drafty.glazing = Glazing::Single;
        drafty.windows = 2;
        let result = calculate(&drafty).unwrap();
        assert_eq!(result.window_loss_watts, 200.0);
        // 2112 + 200 = 2312, nearest 10 = 2310
        assert_eq!(result.watts, 2310.0);
    }

    #[test]
    fn test_rejects_non_finite_dimension() {
        let mut bad = lounge();
        bad.length_m = f64::NAN;
        let err = calculate(&bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("length_m"));
    }

    #[test]
    fn test_rejects_out_of_range_height() {
        let mut bad = lounge();
        bad.height_m = 0.0;
        assert!(calculate(&bad).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = lounge();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: RadiatorInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.length_m, roundtrip.length_m);
        assert_eq!(input.room, roundtrip.room);
    }
}
