use gridscope_core::{EnergySource, GridscopeResult, Identifiable, MeasurementType};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    active_power_control, connectable_position, measurement, min_max_reactive_limits,
    reactive_capability_curve, resolve_terminal, FeederSide,
};
use crate::normalize::{extension_value, is_null_or_nan, nan_to_none};
use crate::records::{
    ActivePowerControlInfos, ConnectablePositionInfos, MeasurementInfos,
    MinMaxReactiveLimitsInfos, ReactiveCapabilityCurvePointInfos,
};

/// Generator FORM view.
///
/// Fields read from the short-circuit, startup and coordinated reactive
/// control extensions are tri-state: omitted without the extension, `null`
/// when the extension leaves them unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub energy_source: EnergySource,
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
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub rated_s: Option<f64>,
    pub voltage_regulator_on: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_reactive_limits: Option<MinMaxReactiveLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reactive_capability_curve_points: Vec<ReactiveCapabilityCurvePointInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_power_control: Option<ActivePowerControlInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_transient_x: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_subtrans_x: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_up_transformer_x: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_active_power_set_point: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marginal_cost: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_outage_rate: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced_outage_rate: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_percent: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub energy_source: EnergySource,
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substation_id: Option<String>,
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
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub rated_s: Option<f64>,
    pub voltage_regulator_on: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_reactive_limits: Option<MinMaxReactiveLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_power_control: Option<ActivePowerControlInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_transient_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_up_transformer_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marginal_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

pub fn to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let generator = downcast!(identifiable, Generator);
    let side = resolve_terminal(ctx.network, &generator.id, &generator.terminal)?;
    let short_circuit = generator.short_circuit.as_ref();
    let startup = generator.startup.as_ref();
    let measurements = generator.measurements.as_ref();
    Ok(ElementInfos::GeneratorForm(GeneratorFormInfos {
        id: generator.id.clone(),
        name: generator.name.clone(),
        energy_source: generator.energy_source,
        voltage_level_id: side.voltage_level_id(),
        nominal_voltage: side.nominal_v(),
        bus_or_busbar_section_id: side.bus_or_busbar_section_id(),
        terminal_connected: side.connected(),
        p: side.p(),
        q: side.q(),
        min_p: nan_to_none(generator.min_p),
        max_p: nan_to_none(generator.max_p),
        target_p: nan_to_none(generator.target_p),
        target_q: Some(generator.target_q.value()),
        target_v: Some(generator.target_v.value()),
        rated_s: Some(generator.rated_s.value()),
        voltage_regulator_on: generator.voltage_regulator_on,
        min_max_reactive_limits: min_max_reactive_limits(&generator.reactive_limits),
        reactive_capability_curve_points: reactive_capability_curve(&generator.reactive_limits),
        active_power_control: active_power_control(generator.active_power_control.as_ref()),
        direct_transient_x: extension_value(short_circuit, |sc| sc.direct_transient_x),
        direct_subtrans_x: extension_value(short_circuit, |sc| sc.direct_subtrans_x),
        step_up_transformer_x: extension_value(short_circuit, |sc| sc.step_up_transformer_x),
        planned_active_power_set_point: extension_value(startup, |s| {
            s.planned_active_power_set_point
        }),
        marginal_cost: extension_value(startup, |s| s.marginal_cost),
        planned_outage_rate: extension_value(startup, |s| s.planned_outage_rate),
        forced_outage_rate: extension_value(startup, |s| s.forced_outage_rate),
        q_percent: extension_value(
            generator.coordinated_reactive_control.as_ref(),
            |c| c.q_percent,
        ),
        connectable_position: connectable_position(
            generator.position.as_ref(),
            FeederSide::Injection,
        ),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
        properties: generator.properties.clone(),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let generator = downcast!(identifiable, Generator);
    let side = resolve_terminal(ctx.network, &generator.id, &generator.terminal)?;
    let short_circuit = generator.short_circuit.as_ref();
    let measurements = generator.measurements.as_ref();
    Ok(ElementInfos::GeneratorTab(GeneratorTabInfos {
        id: generator.id.clone(),
        name: generator.name.clone(),
        energy_source: generator.energy_source,
        voltage_level_id: side.voltage_level_id(),
        substation_id: side.substation_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(generator.terminal.p.value()),
        q: Some(generator.terminal.q.value()),
        min_p: nan_to_none(generator.min_p),
        max_p: nan_to_none(generator.max_p),
        target_p: nan_to_none(generator.target_p),
        target_q: Some(generator.target_q.value()),
        target_v: Some(generator.target_v.value()),
        rated_s: Some(generator.rated_s.value()),
        voltage_regulator_on: generator.voltage_regulator_on,
        min_max_reactive_limits: min_max_reactive_limits(&generator.reactive_limits),
        active_power_control: active_power_control(generator.active_power_control.as_ref()),
        direct_transient_x: short_circuit.and_then(|sc| nan_to_none(sc.direct_transient_x)),
        step_up_transformer_x: short_circuit.and_then(|sc| nan_to_none(sc.step_up_transformer_x)),
        marginal_cost: generator
            .startup
            .as_ref()
            .and_then(|s| nan_to_none(s.marginal_cost)),
        q_percent: generator
            .coordinated_reactive_control
            .as_ref()
            .and_then(|c| nan_to_none(c.q_percent)),
        connectable_position: connectable_position(
            generator.position.as_ref(),
            FeederSide::Injection,
        ),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
        properties: generator.properties.clone(),
    }))
}
