//! Single-terminal equipment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::extensions::{
    ActivePowerControl, ConnectablePosition, CoordinatedReactiveControl, GeneratorShortCircuit,
    GeneratorStartup, Measurements, ReactiveLimits, StandbyAutomaton,
};
use super::limits::SideLimits;
use super::terminal::Terminal;
use crate::units::{Kilovolts, Megavars, MegavoltAmperes, Megawatts, Ohms, Siemens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadType {
    #[default]
    Undefined,
    Auxiliary,
    Fictitious,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Load {
    pub id: String,
    pub name: Option<String>,
    pub load_type: LoadType,
    pub terminal: Terminal,
    pub p0: Megawatts,
    pub q0: Megavars,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergySource {
    Hydro,
    Nuclear,
    Wind,
    Thermal,
    Solar,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Generator {
    pub id: String,
    pub name: Option<String>,
    pub energy_source: EnergySource,
    pub terminal: Terminal,
    pub min_p: Megawatts,
    pub max_p: Megawatts,
    pub target_p: Megawatts,
    pub target_q: Megavars,
    pub target_v: Kilovolts,
    pub rated_s: MegavoltAmperes,
    pub voltage_regulator_on: bool,
    pub reactive_limits: ReactiveLimits,
    pub active_power_control: Option<ActivePowerControl>,
    pub short_circuit: Option<GeneratorShortCircuit>,
    pub startup: Option<GeneratorStartup>,
    pub coordinated_reactive_control: Option<CoordinatedReactiveControl>,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
    pub properties: BTreeMap<String, String>,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            energy_source: EnergySource::Other,
            terminal: Terminal::default(),
            min_p: Megawatts(0.0),
            max_p: Megawatts(0.0),
            target_p: Megawatts(0.0),
            target_q: Megavars::nan(),
            target_v: Kilovolts::nan(),
            rated_s: MegavoltAmperes::nan(),
            voltage_regulator_on: false,
            reactive_limits: ReactiveLimits::default(),
            active_power_control: None,
            short_circuit: None,
            startup: None,
            coordinated_reactive_control: None,
            position: None,
            measurements: None,
            properties: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Battery {
    pub id: String,
    pub name: Option<String>,
    pub terminal: Terminal,
    pub min_p: Megawatts,
    pub max_p: Megawatts,
    pub target_p: Megawatts,
    pub target_q: Megavars,
    pub reactive_limits: ReactiveLimits,
    pub active_power_control: Option<ActivePowerControl>,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShuntCompensator {
    pub id: String,
    pub name: Option<String>,
    pub terminal: Terminal,
    pub section_count: u32,
    pub maximum_section_count: u32,
    /// Susceptance of one section (linear model)
    pub b_per_section: Siemens,
    pub g_per_section: Siemens,
    pub voltage_regulator_on: bool,
    pub target_v: Kilovolts,
    pub target_deadband: f64,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
}

impl Default for ShuntCompensator {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            terminal: Terminal::default(),
            section_count: 0,
            maximum_section_count: 1,
            b_per_section: Siemens(0.0),
            g_per_section: Siemens(0.0),
            voltage_regulator_on: false,
            target_v: Kilovolts::nan(),
            target_deadband: f64::NAN,
            position: None,
            measurements: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SvcRegulationMode {
    Voltage,
    ReactivePower,
    #[default]
    Off,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticVarCompensator {
    pub id: String,
    pub name: Option<String>,
    pub terminal: Terminal,
    pub b_min: Siemens,
    pub b_max: Siemens,
    pub voltage_setpoint: Kilovolts,
    pub reactive_power_setpoint: Megavars,
    pub regulation_mode: SvcRegulationMode,
    pub standby_automaton: Option<StandbyAutomaton>,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
}

impl Default for StaticVarCompensator {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            terminal: Terminal::default(),
            b_min: Siemens(0.0),
            b_max: Siemens(0.0),
            voltage_setpoint: Kilovolts::nan(),
            reactive_power_setpoint: Megavars::nan(),
            regulation_mode: SvcRegulationMode::Off,
            standby_automaton: None,
            position: None,
            measurements: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LccConverterStation {
    pub id: String,
    pub name: Option<String>,
    pub terminal: Terminal,
    pub loss_factor: f32,
    pub power_factor: f32,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VscConverterStation {
    pub id: String,
    pub name: Option<String>,
    pub terminal: Terminal,
    pub loss_factor: f32,
    pub voltage_regulator_on: bool,
    pub voltage_setpoint: Kilovolts,
    pub reactive_power_setpoint: Megavars,
    pub reactive_limits: ReactiveLimits,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
}

impl Default for VscConverterStation {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            terminal: Terminal::default(),
            loss_factor: 0.0,
            voltage_regulator_on: false,
            voltage_setpoint: Kilovolts::nan(),
            reactive_power_setpoint: Megavars::nan(),
            reactive_limits: ReactiveLimits::default(),
            position: None,
            measurements: None,
        }
    }
}

/// Half line, either open-ended or paired with another one inside a tie line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DanglingLine {
    pub id: String,
    pub name: Option<String>,
    pub terminal: Terminal,
    pub p0: Megawatts,
    pub q0: Megavars,
    pub r: Ohms,
    pub x: Ohms,
    pub g: Siemens,
    pub b: Siemens,
    pub pairing_key: Option<String>,
    pub tie_line_id: Option<String>,
    pub limits: SideLimits,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
}
