//! # Tradecalc CLI Application
//!
//! Prompt-driven front end for the trade_core calculators. Collects field
//! values on stdin, runs the selected calculator, and prints the report.
//! Pass `--json` to print the result as JSON instead.

use std::env;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use trade_core::bs7671::{AmbientTemp, CableSize, CircuitUse, ConduitSize, ThermalInsulation};
use trade_core::calculators::mcb::LoadCharacter;
use trade_core::calculators::screed::ScreedType;
use trade_core::calculators::ventilation::VentedRoom;
use trade_core::calculators::{
    registry, BoilerInput, CableSizeInput, CalculationItem, ConduitFillInput, CylinderInput,
    DiversityInput, McbInput, RadiatorInput, ScreedInput, VentilationInput, VoltageDropInput,
};
use trade_core::calculators::cylinder::CylinderKind;
use trade_core::errors::CalcError;
use trade_core::heating::{FloorLevel, Glazing, InsulationLevel, PropertyType, RoomType};

fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }
    let input = read_line();
    if input.is_empty() {
        return default;
    }
    input.parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }
    let input = read_line();
    if input.is_empty() {
        return default;
    }
    input.parse().unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", prompt, hint);
    if io::stdout().flush().is_err() {
        return default;
    }
    match read_line().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Prompt for an enumerated field. An unrecognized key prints the error
/// (which lists the accepted keys) and keeps the default.
fn prompt_choice<T>(prompt: &str, keys: &str, default: T) -> T
where
    T: FromStr<Err = CalcError>,
{
    print!("{} ({}): ", prompt, keys);
    if io::stdout().flush().is_err() {
        return default;
    }
    let input = read_line();
    if input.is_empty() {
        return default;
    }
    match input.parse() {
        Ok(value) => value,
        Err(error) => {
            println!("  {} - using default", error);
            default
        }
    }
}

fn prompt_label(default: &str) -> String {
    print!("Label [{}]: ", default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }
    let input = read_line();
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

fn build_item(id: &str) -> Option<CalculationItem> {
    match id {
        "boiler" => Some(CalculationItem::Boiler(BoilerInput {
            label: prompt_label("Boiler"),
            bedrooms: prompt_u32("Bedrooms", 3),
            bathrooms: prompt_u32("Bathrooms", 1),
            property: prompt_choice(
                "Property type",
                "flat, mid-terrace, end-terrace, semi, detached",
                PropertyType::SemiDetached,
            ),
            insulation: prompt_choice("Insulation", "poor, average, good", InsulationLevel::Average),
        })),
        "radiator" => Some(CalculationItem::Radiator(RadiatorInput {
            label: prompt_label("Room"),
            length_m: prompt_f64("Room length (m)", 5.0),
            width_m: prompt_f64("Room width (m)", 4.0),
            height_m: prompt_f64("Ceiling height (m)", 2.4),
            room: prompt_choice(
                "Room type",
                "living, bedroom, kitchen, dining, bathroom, hallway",
                RoomType::Living,
            ),
            insulation: prompt_choice("Insulation", "poor, average, good", InsulationLevel::Average),
            external_walls: prompt_u32("External walls", 1),
            windows: prompt_u32("Windows", 1),
            glazing: prompt_choice("Glazing", "single, double, triple", Glazing::Double),
            floor: prompt_choice("Floor level", "ground, mid, top", FloorLevel::Mid),
            north_facing: prompt_bool("North facing?", false),
        })),
        "cylinder" => Some(CalculationItem::Cylinder(CylinderInput {
            label: prompt_label("Cylinder"),
            occupants: prompt_u32("Occupants", 4),
            bathrooms: prompt_u32("Bathrooms", 1),
            kind: prompt_choice("Cylinder type", "vented, unvented", CylinderKind::Vented),
        })),
        "conduit-fill" => Some(CalculationItem::ConduitFill(ConduitFillInput {
            label: prompt_label("Run"),
            conduit: prompt_choice("Conduit size (mm)", "16, 20, 25, 32", ConduitSize::S20),
            cable: prompt_choice(
                "Conductor size (mm²)",
                "1.0, 1.5, 2.5, 4.0, 6.0, 10, 16",
                CableSize::C2_5,
            ),
            cable_count: prompt_u32("Number of conductors", 4),
        })),
        "voltage-drop" => Some(CalculationItem::VoltageDrop(VoltageDropInput {
            label: prompt_label("Circuit"),
            cable: prompt_choice(
                "Conductor size (mm²)",
                "1.0, 1.5, 2.5, 4.0, 6.0, 10, 16",
                CableSize::C2_5,
            ),
            design_current_a: prompt_f64("Design current (A)", 20.0),
            run_length_m: prompt_f64("Run length (m)", 25.0),
            circuit_use: prompt_choice("Circuit use", "lighting, power", CircuitUse::Power),
        })),
        "cable-size" => Some(CalculationItem::CableSize(CableSizeInput {
            label: prompt_label("Circuit"),
            design_current_a: prompt_f64("Design current (A)", 30.0),
            ambient: prompt_choice(
                "Ambient temperature (C)",
                "25, 30, 35, 40, 45, 50",
                AmbientTemp::T30,
            ),
            grouped_circuits: prompt_u32("Grouped circuits", 1),
            insulation_contact: prompt_choice(
                "Thermal insulation contact",
                "none, one-side, enclosed",
                ThermalInsulation::None,
            ),
        })),
        "mcb" => Some(CalculationItem::Mcb(McbInput {
            label: prompt_label("Circuit"),
            load_watts: prompt_f64("Load (W)", 7200.0),
            load: prompt_choice(
                "Load character",
                "resistive, high-inrush",
                LoadCharacter::Resistive,
            ),
        })),
        "diversity" => Some(CalculationItem::Diversity(DiversityInput {
            label: prompt_label("Installation"),
            lighting_watts: prompt_f64("Total lighting load (W)", 2300.0),
            ring_circuits: prompt_u32("Ring final circuits", 2),
            cooker_watts: prompt_f64("Cooker rating (W, 0 for none)", 6900.0),
            cooker_socket: prompt_bool("Cooker unit has socket?", true),
            shower_watts: {
                let showers = prompt_u32("Number of showers", 1);
                (0..showers)
                    .map(|index| prompt_f64(&format!("Shower {} rating (W)", index + 1), 9200.0))
                    .collect()
            },
            immersion_heater: prompt_bool("Immersion heater?", false),
        })),
        "ventilation" => Some(CalculationItem::Ventilation(VentilationInput {
            label: prompt_label("Room"),
            length_m: prompt_f64("Room length (m)", 2.5),
            width_m: prompt_f64("Room width (m)", 2.0),
            height_m: prompt_f64("Ceiling height (m)", 2.4),
            room: prompt_choice(
                "Room type",
                "kitchen, bathroom, utility, toilet",
                VentedRoom::Bathroom,
            ),
        })),
        "screed" => Some(CalculationItem::Screed(ScreedInput {
            label: prompt_label("Floor"),
            length_m: prompt_f64("Floor length (m)", 5.0),
            width_m: prompt_f64("Floor width (m)", 4.0),
            depth_mm: prompt_f64("Depth (mm)", 50.0),
            screed: prompt_choice(
                "Screed type",
                "bonded, unbonded, floating, flowing",
                ScreedType::Bonded,
            ),
        })),
        _ => None,
    }
}

fn main() {
    let json_output = env::args().any(|arg| arg == "--json");

    println!("Tradecalc CLI - UK Trade Calculators");
    println!("====================================");
    println!();
    for (index, info) in registry().iter().enumerate() {
        println!("  {:>2}. {:<18} {}", index + 1, info.name, info.description);
    }
    println!();

    print!("Select a calculator (number or id, q to quit): ");
    if io::stdout().flush().is_err() {
        return;
    }
    let selection = read_line();
    if selection.is_empty() || selection == "q" {
        return;
    }

    let id = match selection.parse::<usize>() {
        Ok(number) if number >= 1 && number <= registry().len() => registry()[number - 1].id,
        _ => match registry().iter().find(|info| info.id == selection) {
            Some(info) => info.id,
            None => {
                println!("Unknown calculator: {}", selection);
                return;
            }
        },
    };

    println!();
    let item = match build_item(id) {
        Some(item) => item,
        None => return,
    };

    println!();
    match item.evaluate() {
        Ok(outcome) => {
            if json_output {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(error) => println!("Failed to encode result: {}", error),
                }
            } else {
                println!("{} - {}", item.calc_type(), item.label());
                println!("{}", outcome.format_report());
            }
        }
        Err(error) => {
            println!("Cannot calculate: {}", error);
        }
    }
}
