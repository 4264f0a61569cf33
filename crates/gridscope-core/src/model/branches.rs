//! Two- and three-terminal equipment, plus HVDC lines.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::extensions::{
    ConnectablePosition, HvdcAngleDroopActivePowerControl, HvdcOperatorActivePowerRange,
    Measurements, OperatingStatus,
};
use super::limits::{PhaseTapChanger, RatioTapChanger, SideLimits};
use super::terminal::Terminal;
use crate::units::{Kilovolts, MegavoltAmperes, Megawatts, Ohms, Siemens};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Line {
    pub id: String,
    pub name: Option<String>,
    pub terminal1: Terminal,
    pub terminal2: Terminal,
    pub r: Ohms,
    pub x: Ohms,
    pub g1: Siemens,
    pub b1: Siemens,
    pub g2: Siemens,
    pub b2: Siemens,
    pub limits1: SideLimits,
    pub limits2: SideLimits,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
    pub operating_status: Option<OperatingStatus>,
    pub properties: BTreeMap<String, String>,
}

/// Line made of two paired dangling lines. Terminals and limits live on the
/// dangling lines; the equivalent series parameters are kept here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TieLine {
    pub id: String,
    pub name: Option<String>,
    pub dangling_line1_id: String,
    pub dangling_line2_id: String,
    pub r: Ohms,
    pub x: Ohms,
    pub g1: Siemens,
    pub b1: Siemens,
    pub g2: Siemens,
    pub b2: Siemens,
    pub operating_status: Option<OperatingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoWindingsTransformer {
    pub id: String,
    pub name: Option<String>,
    pub terminal1: Terminal,
    pub terminal2: Terminal,
    pub r: Ohms,
    pub x: Ohms,
    pub g: Siemens,
    pub b: Siemens,
    pub rated_u1: Kilovolts,
    pub rated_u2: Kilovolts,
    pub rated_s: MegavoltAmperes,
    pub ratio_tap_changer: Option<RatioTapChanger>,
    pub phase_tap_changer: Option<PhaseTapChanger>,
    pub limits1: SideLimits,
    pub limits2: SideLimits,
    pub position: Option<ConnectablePosition>,
    pub measurements: Option<Measurements>,
    pub operating_status: Option<OperatingStatus>,
    pub properties: BTreeMap<String, String>,
}

impl Default for TwoWindingsTransformer {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            terminal1: Terminal::default(),
            terminal2: Terminal::default(),
            r: Ohms(0.0),
            x: Ohms(0.0),
            g: Siemens(0.0),
            b: Siemens(0.0),
            rated_u1: Kilovolts(0.0),
            rated_u2: Kilovolts(0.0),
            rated_s: MegavoltAmperes::nan(),
            ratio_tap_changer: None,
            phase_tap_changer: None,
            limits1: SideLimits::default(),
            limits2: SideLimits::default(),
            position: None,
            measurements: None,
            operating_status: None,
            properties: BTreeMap::new(),
        }
    }
}

/// One winding of a three-winding transformer, star-connected to the
/// fictitious middle point at `rated_u0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreeWindingsTransformerLeg {
    pub terminal: Terminal,
    pub r: Ohms,
    pub x: Ohms,
    pub g: Siemens,
    pub b: Siemens,
    pub rated_u: Kilovolts,
    pub rated_s: MegavoltAmperes,
    pub ratio_tap_changer: Option<RatioTapChanger>,
    pub phase_tap_changer: Option<PhaseTapChanger>,
    pub limits: SideLimits,
}

impl Default for ThreeWindingsTransformerLeg {
    fn default() -> Self {
        Self {
            terminal: Terminal::default(),
            r: Ohms(0.0),
            x: Ohms(0.0),
            g: Siemens(0.0),
            b: Siemens(0.0),
            rated_u: Kilovolts(0.0),
            rated_s: MegavoltAmperes::nan(),
            ratio_tap_changer: None,
            phase_tap_changer: None,
            limits: SideLimits::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreeWindingsTransformer {
    pub id: String,
    pub name: Option<String>,
    pub rated_u0: Kilovolts,
    pub leg1: ThreeWindingsTransformerLeg,
    pub leg2: ThreeWindingsTransformerLeg,
    pub leg3: ThreeWindingsTransformerLeg,
    pub position: Option<ConnectablePosition>,
    pub operating_status: Option<OperatingStatus>,
}

impl ThreeWindingsTransformer {
    pub fn legs(&self) -> [&ThreeWindingsTransformerLeg; 3] {
        [&self.leg1, &self.leg2, &self.leg3]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConvertersMode {
    #[default]
    SideOneRectifierSideTwoInverter,
    SideOneInverterSideTwoRectifier,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HvdcLine {
    pub id: String,
    pub name: Option<String>,
    pub converter_station1_id: String,
    pub converter_station2_id: String,
    pub converters_mode: ConvertersMode,
    pub r: Ohms,
    pub nominal_v: Kilovolts,
    pub active_power_setpoint: Megawatts,
    pub max_p: Megawatts,
    pub angle_droop_active_power_control: Option<HvdcAngleDroopActivePowerControl>,
    pub operator_active_power_range: Option<HvdcOperatorActivePowerRange>,
    pub operating_status: Option<OperatingStatus>,
}
