use gridscope_core::{GridscopeResult, Identifiable, MeasurementType, SvcRegulationMode};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{connectable_position, measurement, resolve_terminal, FeederSide};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{ConnectablePositionInfos, MeasurementInfos, StandbyAutomatonInfos};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticVarCompensatorTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub nominal_voltage: Option<f64>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub q: Option<f64>,
    pub b_min: Option<f64>,
    pub b_max: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub voltage_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub reactive_power_setpoint: Option<f64>,
    pub regulation_mode: SvcRegulationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standby_automaton: Option<StandbyAutomatonInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let svc = downcast!(identifiable, StaticVarCompensator);
    let side = resolve_terminal(ctx.network, &svc.id, &svc.terminal)?;
    let measurements = svc.measurements.as_ref();
    Ok(ElementInfos::StaticVarCompensatorTab(StaticVarCompensatorTabInfos {
        id: svc.id.clone(),
        name: svc.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(svc.terminal.p.value()),
        q: Some(svc.terminal.q.value()),
        b_min: nan_to_none(svc.b_min),
        b_max: nan_to_none(svc.b_max),
        voltage_setpoint: Some(svc.voltage_setpoint.value()),
        reactive_power_setpoint: Some(svc.reactive_power_setpoint.value()),
        regulation_mode: svc.regulation_mode,
        standby_automaton: svc.standby_automaton.as_ref().map(|sa| StandbyAutomatonInfos {
            standby: sa.standby,
            b0: nan_to_none(sa.b0),
            low_voltage_setpoint: nan_to_none(sa.low_voltage_setpoint),
            high_voltage_setpoint: nan_to_none(sa.high_voltage_setpoint),
            low_voltage_threshold: nan_to_none(sa.low_voltage_threshold),
            high_voltage_threshold: nan_to_none(sa.high_voltage_threshold),
        }),
        connectable_position: connectable_position(svc.position.as_ref(), FeederSide::Injection),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    }))
}
