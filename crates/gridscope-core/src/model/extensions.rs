//! Optional metadata attachable to model entities.
//!
//! An entity carries each extension as an `Option<_>` field; `None` means the
//! extension was never attached. Values inside an attached extension that the
//! model leaves unset are NaN, matching how computed quantities are stored.

use serde::{Deserialize, Serialize};

use crate::units::{Megavars, Megawatts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectableDirection {
    Top,
    Bottom,
    #[default]
    Undefined,
}

/// Position of one feeder bay in a substation diagram.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Feeder {
    pub name: Option<String>,
    pub order: Option<i32>,
    pub direction: ConnectableDirection,
}

/// Feeder positions of a connectable. Injections use `feeder`, branches use
/// `feeder1`/`feeder2`, three-winding transformers also use `feeder3`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectablePosition {
    pub feeder: Option<Feeder>,
    pub feeder1: Option<Feeder>,
    pub feeder2: Option<Feeder>,
    pub feeder3: Option<Feeder>,
}

/// Location of a busbar section in a node/breaker layout, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusbarSectionPosition {
    pub busbar_index: u32,
    pub section_index: u32,
}

impl BusbarSectionPosition {
    pub fn new(busbar_index: u32, section_index: u32) -> Self {
        Self {
            busbar_index,
            section_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivePowerControl {
    pub participate: bool,
    pub droop: f64,
    pub participation_factor: f64,
}

impl Default for ActivePowerControl {
    fn default() -> Self {
        Self {
            participate: false,
            droop: f64::NAN,
            participation_factor: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactiveCapabilityCurvePoint {
    pub p: Megawatts,
    pub min_q: Megavars,
    pub max_q: Megavars,
}

/// Reactive limits of a reactive-capable injection: either a fixed min/max
/// pair or a capability curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactiveLimits {
    #[serde(rename_all = "camelCase")]
    MinMax { min_q: Megavars, max_q: Megavars },
    Curve {
        points: Vec<ReactiveCapabilityCurvePoint>,
    },
}

impl Default for ReactiveLimits {
    fn default() -> Self {
        ReactiveLimits::MinMax {
            min_q: Megavars(-f64::MAX),
            max_q: Megavars(f64::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementType {
    ActivePower,
    ReactivePower,
    Current,
    Voltage,
    Angle,
    Frequency,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementSide {
    One,
    Two,
    Three,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurement {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub measurement_type: MeasurementType,
    pub side: Option<MeasurementSide>,
    pub value: f64,
    pub standard_deviation: f64,
    pub valid: bool,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            id: None,
            measurement_type: MeasurementType::Other,
            side: None,
            value: f64::NAN,
            standard_deviation: f64::NAN,
            valid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    pub measurements: Vec<Measurement>,
}

impl Measurements {
    /// First measurement of the given type on the given side.
    pub fn find(
        &self,
        measurement_type: MeasurementType,
        side: Option<MeasurementSide>,
    ) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.measurement_type == measurement_type && m.side == side)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorShortCircuit {
    pub direct_transient_x: f64,
    pub direct_subtrans_x: f64,
    pub step_up_transformer_x: f64,
}

impl Default for GeneratorShortCircuit {
    fn default() -> Self {
        Self {
            direct_transient_x: f64::NAN,
            direct_subtrans_x: f64::NAN,
            step_up_transformer_x: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorStartup {
    pub planned_active_power_set_point: f64,
    pub startup_cost: f64,
    pub marginal_cost: f64,
    pub planned_outage_rate: f64,
    pub forced_outage_rate: f64,
}

impl Default for GeneratorStartup {
    fn default() -> Self {
        Self {
            planned_active_power_set_point: f64::NAN,
            startup_cost: f64::NAN,
            marginal_cost: f64::NAN,
            planned_outage_rate: f64::NAN,
            forced_outage_rate: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatedReactiveControl {
    pub q_percent: f64,
}

/// Short-circuit current bounds of a voltage level, in amperes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentifiableShortCircuit {
    pub ip_min: f64,
    pub ip_max: f64,
}

impl Default for IdentifiableShortCircuit {
    fn default() -> Self {
        Self {
            ip_min: f64::NAN,
            ip_max: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HvdcAngleDroopActivePowerControl {
    pub p0: f32,
    pub droop: f32,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HvdcOperatorActivePowerRange {
    pub opr_from_cs1_to_cs2: f32,
    pub opr_from_cs2_to_cs1: f32,
}

impl Default for HvdcOperatorActivePowerRange {
    fn default() -> Self {
        Self {
            opr_from_cs1_to_cs2: f32::NAN,
            opr_from_cs2_to_cs1: f32::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandbyAutomaton {
    pub standby: bool,
    pub b0: f64,
    pub low_voltage_setpoint: f64,
    pub high_voltage_setpoint: f64,
    pub low_voltage_threshold: f64,
    pub high_voltage_threshold: f64,
}

impl Default for StandbyAutomaton {
    fn default() -> Self {
        Self {
            standby: false,
            b0: f64::NAN,
            low_voltage_setpoint: f64::NAN,
            high_voltage_setpoint: f64::NAN,
            low_voltage_threshold: f64::NAN,
            high_voltage_threshold: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingStatus {
    InOperation,
    PlannedOutage,
    ForcedOutage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactive_limits_are_tagged_by_kind() {
        let limits: ReactiveLimits =
            serde_json::from_str(r#"{"kind": "MIN_MAX", "minQ": -50.0, "maxQ": 60.0}"#).unwrap();
        assert_eq!(
            limits,
            ReactiveLimits::MinMax {
                min_q: Megavars(-50.0),
                max_q: Megavars(60.0)
            }
        );

        let curve: ReactiveLimits = serde_json::from_str(
            r#"{"kind": "CURVE", "points": [{"p": 0.0, "minQ": -10.0, "maxQ": 10.0}]}"#,
        )
        .unwrap();
        assert!(matches!(curve, ReactiveLimits::Curve { points } if points.len() == 1));
    }

    #[test]
    fn measurement_lookup_matches_type_and_side() {
        let measurements = Measurements {
            measurements: vec![
                Measurement {
                    measurement_type: MeasurementType::ActivePower,
                    side: Some(MeasurementSide::One),
                    value: 10.0,
                    ..Measurement::default()
                },
                Measurement {
                    measurement_type: MeasurementType::ActivePower,
                    side: Some(MeasurementSide::Two),
                    value: -9.5,
                    ..Measurement::default()
                },
            ],
        };

        let side_two = measurements
            .find(MeasurementType::ActivePower, Some(MeasurementSide::Two))
            .unwrap();
        assert_eq!(side_two.value, -9.5);
        assert!(measurements
            .find(MeasurementType::ReactivePower, Some(MeasurementSide::One))
            .is_none());
    }

    #[test]
    fn unset_extension_values_default_to_nan() {
        let startup: GeneratorStartup =
            serde_json::from_str(r#"{"marginalCost": 42.0}"#).unwrap();
        assert_eq!(startup.marginal_cost, 42.0);
        assert!(startup.planned_active_power_set_point.is_nan());
    }
}
