use gridscope_core::{
    GridscopeResult, Identifiable, Line, MeasurementSide, MeasurementType, OperatingStatus,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    connectable_position, measurement, operational_limits_groups, resolve_terminal,
    selected_current_limits, FeederSide, ResolvedTerminal,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{
    ConnectablePositionInfos, CurrentLimitsInfos, MeasurementInfos, OperationalLimitsGroupInfos,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage_level_name1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage_level_name2: Option<String>,
    pub nominal_voltage1: Option<f64>,
    pub nominal_voltage2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id2: Option<String>,
    pub terminal1_connected: bool,
    pub terminal2_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i2: Option<f64>,
    pub r: f64,
    pub x: f64,
    pub g1: f64,
    pub b1: f64,
    pub g2: f64,
    pub b2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_operational_limits_group1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_operational_limits_group2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits1: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits2: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups1: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups2: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position1: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position2: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p1: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q1: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p2: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q2: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country2: Option<String>,
    pub nominal_voltage1: Option<f64>,
    pub nominal_voltage2: Option<f64>,
    pub terminal1_connected: bool,
    pub terminal2_connected: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub p1: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub q1: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub i1: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub p2: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub q2: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub i2: Option<f64>,
    pub r: f64,
    pub x: f64,
    pub g1: f64,
    pub b1: f64,
    pub g2: f64,
    pub b2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits1: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits2: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups1: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups2: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p1: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q1: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p2: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q2: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMapInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substation_id1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substation_id2: Option<String>,
    pub terminal1_connected: bool,
    pub terminal2_connected: bool,
    pub p1: Option<f64>,
    pub p2: Option<f64>,
    pub i1: Option<f64>,
    pub i2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits1: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits2: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTooltipInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    pub terminal1_connected: bool,
    pub terminal2_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i2: Option<f64>,
    pub r: f64,
    pub x: f64,
    pub b1: f64,
    pub b2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits1: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits2: Option<CurrentLimitsInfos>,
}

fn resolve_sides<'a>(
    ctx: &MapperContext<'a>,
    line: &'a Line,
) -> GridscopeResult<(ResolvedTerminal<'a>, ResolvedTerminal<'a>)> {
    let side1 = resolve_terminal(ctx.network, &line.id, &line.terminal1);
    let side2 = resolve_terminal(ctx.network, &line.id, &line.terminal2);
    Ok((side1?, side2?))
}

fn branch_measurement(
    line: &Line,
    measurement_type: MeasurementType,
    side: MeasurementSide,
) -> Option<MeasurementInfos> {
    measurement(line.measurements.as_ref(), measurement_type, Some(side))
}

pub fn to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, Line);
    let (side1, side2) = resolve_sides(ctx, line)?;
    let position = line.position.as_ref();
    Ok(ElementInfos::LineForm(LineFormInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        voltage_level_name1: side1.voltage_level_name(),
        voltage_level_name2: side2.voltage_level_name(),
        nominal_voltage1: side1.nominal_v(),
        nominal_voltage2: side2.nominal_v(),
        bus_or_busbar_section_id1: side1.bus_or_busbar_section_id(),
        bus_or_busbar_section_id2: side2.bus_or_busbar_section_id(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        p1: side1.p(),
        q1: side1.q(),
        i1: side1.i(),
        p2: side2.p(),
        q2: side2.q(),
        i2: side2.i(),
        r: line.r.value(),
        x: line.x.value(),
        g1: line.g1.value(),
        b1: line.b1.value(),
        g2: line.g2.value(),
        b2: line.b2.value(),
        selected_operational_limits_group1: line
            .limits1
            .selected_operational_limits_group_id
            .clone(),
        selected_operational_limits_group2: line
            .limits2
            .selected_operational_limits_group_id
            .clone(),
        current_limits1: selected_current_limits(&line.limits1),
        current_limits2: selected_current_limits(&line.limits2),
        operational_limits_groups1: operational_limits_groups(&line.limits1, ctx.parameters),
        operational_limits_groups2: operational_limits_groups(&line.limits2, ctx.parameters),
        connectable_position1: connectable_position(position, FeederSide::One),
        connectable_position2: connectable_position(position, FeederSide::Two),
        measurement_p1: branch_measurement(
            line,
            MeasurementType::ActivePower,
            MeasurementSide::One,
        ),
        measurement_q1: branch_measurement(
            line,
            MeasurementType::ReactivePower,
            MeasurementSide::One,
        ),
        measurement_p2: branch_measurement(
            line,
            MeasurementType::ActivePower,
            MeasurementSide::Two,
        ),
        measurement_q2: branch_measurement(
            line,
            MeasurementType::ReactivePower,
            MeasurementSide::Two,
        ),
        operating_status: line.operating_status,
        properties: line.properties.clone(),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, Line);
    let (side1, side2) = resolve_sides(ctx, line)?;
    Ok(ElementInfos::LineTab(LineTabInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        country1: side1.country(),
        country2: side2.country(),
        nominal_voltage1: side1.nominal_v(),
        nominal_voltage2: side2.nominal_v(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        p1: Some(line.terminal1.p.value()),
        q1: Some(line.terminal1.q.value()),
        i1: Some(line.terminal1.i.value()),
        p2: Some(line.terminal2.p.value()),
        q2: Some(line.terminal2.q.value()),
        i2: Some(line.terminal2.i.value()),
        r: line.r.value(),
        x: line.x.value(),
        g1: line.g1.value(),
        b1: line.b1.value(),
        g2: line.g2.value(),
        b2: line.b2.value(),
        current_limits1: selected_current_limits(&line.limits1),
        current_limits2: selected_current_limits(&line.limits2),
        operational_limits_groups1: operational_limits_groups(&line.limits1, ctx.parameters),
        operational_limits_groups2: operational_limits_groups(&line.limits2, ctx.parameters),
        measurement_p1: branch_measurement(
            line,
            MeasurementType::ActivePower,
            MeasurementSide::One,
        ),
        measurement_q1: branch_measurement(
            line,
            MeasurementType::ReactivePower,
            MeasurementSide::One,
        ),
        measurement_p2: branch_measurement(
            line,
            MeasurementType::ActivePower,
            MeasurementSide::Two,
        ),
        measurement_q2: branch_measurement(
            line,
            MeasurementType::ReactivePower,
            MeasurementSide::Two,
        ),
        operating_status: line.operating_status,
        properties: line.properties.clone(),
    }))
}

pub fn to_map<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, Line);
    let (side1, side2) = resolve_sides(ctx, line)?;
    Ok(ElementInfos::LineMap(LineMapInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        substation_id1: side1.substation_id(),
        substation_id2: side2.substation_id(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        p1: side1.p(),
        p2: side2.p(),
        i1: side1.i(),
        i2: side2.i(),
        current_limits1: selected_current_limits(&line.limits1),
        current_limits2: selected_current_limits(&line.limits2),
        operating_status: line.operating_status,
    }))
}

pub fn to_tooltip<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, Line);
    let (side1, side2) = resolve_sides(ctx, line)?;
    Ok(ElementInfos::LineTooltip(LineTooltipInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        i1: nan_to_none(line.terminal1.i),
        i2: nan_to_none(line.terminal2.i),
        r: line.r.value(),
        x: line.x.value(),
        b1: line.b1.value(),
        b2: line.b2.value(),
        current_limits1: selected_current_limits(&line.limits1),
        current_limits2: selected_current_limits(&line.limits2),
    }))
}
