use gridscope_core::{GridscopeResult, Identifiable, MeasurementType, ShuntCompensator};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    connectable_position, measurement, resolve_terminal, FeederSide, ResolvedTerminal,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{ConnectablePositionInfos, MeasurementInfos};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuntCompensatorFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    pub nominal_voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id: Option<String>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    pub section_count: u32,
    pub maximum_section_count: u32,
    pub b_per_section: Option<f64>,
    pub g_per_section: Option<f64>,
    pub max_susceptance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_q_at_nominal_v: Option<f64>,
    pub voltage_regulator_on: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_deadband: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuntCompensatorTabInfos {
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
    pub section_count: u32,
    pub maximum_section_count: u32,
    pub b_per_section: Option<f64>,
    pub max_susceptance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_q_at_nominal_v: Option<f64>,
    pub voltage_regulator_on: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub target_deadband: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

/// Susceptance with every section switched in.
fn max_susceptance(shunt: &ShuntCompensator) -> f64 {
    shunt.b_per_section.value() * f64::from(shunt.maximum_section_count)
}

/// Reactive power of the fully switched-in shunt at nominal voltage.
fn max_q_at_nominal_v(shunt: &ShuntCompensator, side: &ResolvedTerminal<'_>) -> Option<f64> {
    nan_to_none(max_susceptance(shunt).abs() * side.voltage_level.nominal_v.squared())
}

pub fn to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let shunt = downcast!(identifiable, ShuntCompensator);
    let side = resolve_terminal(ctx.network, &shunt.id, &shunt.terminal)?;
    Ok(ElementInfos::ShuntCompensatorForm(ShuntCompensatorFormInfos {
        id: shunt.id.clone(),
        name: shunt.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        nominal_voltage: side.nominal_v(),
        bus_or_busbar_section_id: side.bus_or_busbar_section_id(),
        terminal_connected: side.connected(),
        q: side.q(),
        section_count: shunt.section_count,
        maximum_section_count: shunt.maximum_section_count,
        b_per_section: nan_to_none(shunt.b_per_section),
        g_per_section: nan_to_none(shunt.g_per_section),
        max_susceptance: nan_to_none(max_susceptance(shunt)),
        max_q_at_nominal_v: max_q_at_nominal_v(shunt, &side),
        voltage_regulator_on: shunt.voltage_regulator_on,
        target_v: Some(shunt.target_v.value()),
        target_deadband: Some(shunt.target_deadband),
        connectable_position: connectable_position(shunt.position.as_ref(), FeederSide::Injection),
        measurement_q: measurement(
            shunt.measurements.as_ref(),
            MeasurementType::ReactivePower,
            None,
        ),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let shunt = downcast!(identifiable, ShuntCompensator);
    let side = resolve_terminal(ctx.network, &shunt.id, &shunt.terminal)?;
    Ok(ElementInfos::ShuntCompensatorTab(ShuntCompensatorTabInfos {
        id: shunt.id.clone(),
        name: shunt.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(shunt.terminal.p.value()),
        q: Some(shunt.terminal.q.value()),
        section_count: shunt.section_count,
        maximum_section_count: shunt.maximum_section_count,
        b_per_section: nan_to_none(shunt.b_per_section),
        max_susceptance: nan_to_none(max_susceptance(shunt)),
        max_q_at_nominal_v: max_q_at_nominal_v(shunt, &side),
        voltage_regulator_on: shunt.voltage_regulator_on,
        target_v: Some(shunt.target_v.value()),
        target_deadband: Some(shunt.target_deadband),
        connectable_position: connectable_position(shunt.position.as_ref(), FeederSide::Injection),
        measurement_q: measurement(
            shunt.measurements.as_ref(),
            MeasurementType::ReactivePower,
            None,
        ),
    }))
}
