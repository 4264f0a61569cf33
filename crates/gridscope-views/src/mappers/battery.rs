use gridscope_core::{GridscopeResult, Identifiable, MeasurementType};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    active_power_control, connectable_position, measurement, min_max_reactive_limits,
    reactive_capability_curve, resolve_terminal, FeederSide,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{
    ActivePowerControlInfos, ConnectablePositionInfos, MeasurementInfos,
    MinMaxReactiveLimitsInfos, ReactiveCapabilityCurvePointInfos,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    pub nominal_voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id: Option<String>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    pub min_p: Option<f64>,
    pub max_p: Option<f64>,
    pub target_p: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_q: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_reactive_limits: Option<MinMaxReactiveLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reactive_capability_curve_points: Vec<ReactiveCapabilityCurvePointInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_power_control: Option<ActivePowerControlInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryTabInfos {
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
    pub min_p: Option<f64>,
    pub max_p: Option<f64>,
    pub target_p: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_q: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_reactive_limits: Option<MinMaxReactiveLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_power_control: Option<ActivePowerControlInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

pub fn to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let battery = downcast!(identifiable, Battery);
    let side = resolve_terminal(ctx.network, &battery.id, &battery.terminal)?;
    let measurements = battery.measurements.as_ref();
    Ok(ElementInfos::BatteryForm(BatteryFormInfos {
        id: battery.id.clone(),
        name: battery.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        nominal_voltage: side.nominal_v(),
        bus_or_busbar_section_id: side.bus_or_busbar_section_id(),
        terminal_connected: side.connected(),
        p: side.p(),
        q: side.q(),
        min_p: nan_to_none(battery.min_p),
        max_p: nan_to_none(battery.max_p),
        target_p: nan_to_none(battery.target_p),
        target_q: Some(battery.target_q.value()),
        min_max_reactive_limits: min_max_reactive_limits(&battery.reactive_limits),
        reactive_capability_curve_points: reactive_capability_curve(&battery.reactive_limits),
        active_power_control: active_power_control(battery.active_power_control.as_ref()),
        connectable_position: connectable_position(
            battery.position.as_ref(),
            FeederSide::Injection,
        ),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let battery = downcast!(identifiable, Battery);
    let side = resolve_terminal(ctx.network, &battery.id, &battery.terminal)?;
    let measurements = battery.measurements.as_ref();
    Ok(ElementInfos::BatteryTab(BatteryTabInfos {
        id: battery.id.clone(),
        name: battery.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(battery.terminal.p.value()),
        q: Some(battery.terminal.q.value()),
        min_p: nan_to_none(battery.min_p),
        max_p: nan_to_none(battery.max_p),
        target_p: nan_to_none(battery.target_p),
        target_q: Some(battery.target_q.value()),
        min_max_reactive_limits: min_max_reactive_limits(&battery.reactive_limits),
        active_power_control: active_power_control(battery.active_power_control.as_ref()),
        connectable_position: connectable_position(
            battery.position.as_ref(),
            FeederSide::Injection,
        ),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    }))
}
