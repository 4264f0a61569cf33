//! View fragments shared by several equipment types.
//!
//! These are built by the helpers in [`crate::extensions`] and embedded in the
//! per-type records, so two views of the same equipment always read an
//! extension the same way.

use gridscope_core::{ConnectableDirection, PhaseRegulationMode};
use serde::Serialize;

use crate::normalize::is_null_or_nan;

/// Identity only; the LIST view of most equipment types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementListInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Feeder bay of a connectable in the substation diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectablePositionInfos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_position: Option<i32>,
    pub connection_direction: ConnectableDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinMaxReactiveLimitsInfos {
    pub min_q: Option<f64>,
    pub max_q: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactiveCapabilityCurvePointInfos {
    pub p: Option<f64>,
    pub min_q: Option<f64>,
    pub max_q: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePowerControlInfos {
    pub participate: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub droop: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub participation_factor: Option<f64>,
}

/// One measured value and whether the measurement is valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInfos {
    pub value: Option<f64>,
    pub validity: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryLimitInfos {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptable_duration: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLimitsInfos {
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub permanent_limit: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub temporary_limits: Vec<TemporaryLimitInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalLimitsGroupInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits: Option<CurrentLimitsInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapChangerStepInfos {
    pub index: i32,
    pub rho: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    pub r: Option<f64>,
    pub x: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
}

/// Ratio or phase tap changer. Ratio-only and phase-only fields are omitted
/// on the other kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapChangerInfos {
    pub low_tap_position: i32,
    pub tap_position: i32,
    pub high_tap_position: i32,
    pub regulating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_tap_changing_capabilities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulation_mode: Option<PhaseRegulationMode>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub regulation_value: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_deadband: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TapChangerStepInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandbyAutomatonInfos {
    pub standby: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_voltage_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_voltage_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_voltage_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_voltage_threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HvdcAngleDroopActivePowerControlInfos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub droop: Option<f64>,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HvdcOperatorActivePowerRangeInfos {
    pub opr_from_cs1_to_cs2: Option<f64>,
    pub opr_from_cs2_to_cs1: Option<f64>,
}
