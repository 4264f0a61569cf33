use gridscope_core::{
    GridscopeResult, Identifiable, MeasurementSide, MeasurementType, OperatingStatus,
    TwoWindingsTransformer,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    connectable_position, measurement, operational_limits_groups, phase_tap_changer,
    ratio_tap_changer, resolve_terminal, selected_current_limits, FeederSide, ResolvedTerminal,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{
    ConnectablePositionInfos, CurrentLimitsInfos, MeasurementInfos, OperationalLimitsGroupInfos,
    TapChangerInfos,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoWindingsTransformerFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
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
    pub g: f64,
    pub b: f64,
    pub rated_u1: Option<f64>,
    pub rated_u2: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub rated_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_tap_changer: Option<TapChangerInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_tap_changer: Option<TapChangerInfos>,
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
pub struct TwoWindingsTransformerTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
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
    pub g: f64,
    pub b: f64,
    pub rated_u1: Option<f64>,
    pub rated_u2: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub rated_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_tap_changer: Option<TapChangerInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_tap_changer: Option<TapChangerInfos>,
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
pub struct TwoWindingsTransformerTooltipInfos {
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
    pub b: f64,
    pub rated_u1: Option<f64>,
    pub rated_u2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits1: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits2: Option<CurrentLimitsInfos>,
}

fn resolve_sides<'a>(
    ctx: &MapperContext<'a>,
    twt: &'a TwoWindingsTransformer,
) -> GridscopeResult<(ResolvedTerminal<'a>, ResolvedTerminal<'a>)> {
    let side1 = resolve_terminal(ctx.network, &twt.id, &twt.terminal1);
    let side2 = resolve_terminal(ctx.network, &twt.id, &twt.terminal2);
    Ok((side1?, side2?))
}

fn side_measurement(
    twt: &TwoWindingsTransformer,
    measurement_type: MeasurementType,
    side: MeasurementSide,
) -> Option<MeasurementInfos> {
    measurement(twt.measurements.as_ref(), measurement_type, Some(side))
}

pub fn to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let twt = downcast!(identifiable, TwoWindingsTransformer);
    let (side1, side2) = resolve_sides(ctx, twt)?;
    let position = twt.position.as_ref();
    Ok(ElementInfos::TwoWindingsTransformerForm(TwoWindingsTransformerFormInfos {
        id: twt.id.clone(),
        name: twt.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
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
        r: twt.r.value(),
        x: twt.x.value(),
        g: twt.g.value(),
        b: twt.b.value(),
        rated_u1: nan_to_none(twt.rated_u1),
        rated_u2: nan_to_none(twt.rated_u2),
        rated_s: Some(twt.rated_s.value()),
        ratio_tap_changer: ratio_tap_changer(twt.ratio_tap_changer.as_ref(), true),
        phase_tap_changer: phase_tap_changer(twt.phase_tap_changer.as_ref(), true),
        selected_operational_limits_group1: twt
            .limits1
            .selected_operational_limits_group_id
            .clone(),
        selected_operational_limits_group2: twt
            .limits2
            .selected_operational_limits_group_id
            .clone(),
        current_limits1: selected_current_limits(&twt.limits1),
        current_limits2: selected_current_limits(&twt.limits2),
        operational_limits_groups1: operational_limits_groups(&twt.limits1, ctx.parameters),
        operational_limits_groups2: operational_limits_groups(&twt.limits2, ctx.parameters),
        connectable_position1: connectable_position(position, FeederSide::One),
        connectable_position2: connectable_position(position, FeederSide::Two),
        measurement_p1: side_measurement(twt, MeasurementType::ActivePower, MeasurementSide::One),
        measurement_q1: side_measurement(twt, MeasurementType::ReactivePower, MeasurementSide::One),
        measurement_p2: side_measurement(twt, MeasurementType::ActivePower, MeasurementSide::Two),
        measurement_q2: side_measurement(twt, MeasurementType::ReactivePower, MeasurementSide::Two),
        operating_status: twt.operating_status,
        properties: twt.properties.clone(),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let twt = downcast!(identifiable, TwoWindingsTransformer);
    let (side1, side2) = resolve_sides(ctx, twt)?;
    Ok(ElementInfos::TwoWindingsTransformerTab(TwoWindingsTransformerTabInfos {
        id: twt.id.clone(),
        name: twt.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        country: side1.country(),
        nominal_voltage1: side1.nominal_v(),
        nominal_voltage2: side2.nominal_v(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        p1: Some(twt.terminal1.p.value()),
        q1: Some(twt.terminal1.q.value()),
        i1: Some(twt.terminal1.i.value()),
        p2: Some(twt.terminal2.p.value()),
        q2: Some(twt.terminal2.q.value()),
        i2: Some(twt.terminal2.i.value()),
        r: twt.r.value(),
        x: twt.x.value(),
        g: twt.g.value(),
        b: twt.b.value(),
        rated_u1: nan_to_none(twt.rated_u1),
        rated_u2: nan_to_none(twt.rated_u2),
        rated_s: Some(twt.rated_s.value()),
        ratio_tap_changer: ratio_tap_changer(twt.ratio_tap_changer.as_ref(), false),
        phase_tap_changer: phase_tap_changer(twt.phase_tap_changer.as_ref(), false),
        current_limits1: selected_current_limits(&twt.limits1),
        current_limits2: selected_current_limits(&twt.limits2),
        operational_limits_groups1: operational_limits_groups(&twt.limits1, ctx.parameters),
        operational_limits_groups2: operational_limits_groups(&twt.limits2, ctx.parameters),
        measurement_p1: side_measurement(twt, MeasurementType::ActivePower, MeasurementSide::One),
        measurement_q1: side_measurement(twt, MeasurementType::ReactivePower, MeasurementSide::One),
        measurement_p2: side_measurement(twt, MeasurementType::ActivePower, MeasurementSide::Two),
        measurement_q2: side_measurement(twt, MeasurementType::ReactivePower, MeasurementSide::Two),
        operating_status: twt.operating_status,
        properties: twt.properties.clone(),
    }))
}

pub fn to_tooltip<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let twt = downcast!(identifiable, TwoWindingsTransformer);
    let (side1, side2) = resolve_sides(ctx, twt)?;
    Ok(ElementInfos::TwoWindingsTransformerTooltip(TwoWindingsTransformerTooltipInfos {
        id: twt.id.clone(),
        name: twt.name.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        i1: side1.i(),
        i2: side2.i(),
        r: twt.r.value(),
        x: twt.x.value(),
        b: twt.b.value(),
        rated_u1: nan_to_none(twt.rated_u1),
        rated_u2: nan_to_none(twt.rated_u2),
        current_limits1: selected_current_limits(&twt.limits1),
        current_limits2: selected_current_limits(&twt.limits2),
    }))
}
