use gridscope_core::{GridscopeResult, Identifiable, MeasurementType};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    connectable_position, measurement, operational_limits_groups, resolve_terminal,
    selected_current_limits, FeederSide,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{
    ConnectablePositionInfos, CurrentLimitsInfos, MeasurementInfos, OperationalLimitsGroupInfos,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingLineTabInfos {
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
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub i: Option<f64>,
    pub p0: Option<f64>,
    pub q0: Option<f64>,
    pub r: f64,
    pub x: f64,
    pub g: f64,
    pub b: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairing_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_line_id: Option<String>,
    pub paired: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups: Vec<OperationalLimitsGroupInfos>,
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
    let dl = downcast!(identifiable, DanglingLine);
    let side = resolve_terminal(ctx.network, &dl.id, &dl.terminal)?;
    let measurements = dl.measurements.as_ref();
    Ok(ElementInfos::DanglingLineTab(DanglingLineTabInfos {
        id: dl.id.clone(),
        name: dl.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(dl.terminal.p.value()),
        q: Some(dl.terminal.q.value()),
        i: Some(dl.terminal.i.value()),
        p0: nan_to_none(dl.p0),
        q0: nan_to_none(dl.q0),
        r: dl.r.value(),
        x: dl.x.value(),
        g: dl.g.value(),
        b: dl.b.value(),
        pairing_key: dl.pairing_key.clone(),
        tie_line_id: dl.tie_line_id.clone(),
        paired: dl.tie_line_id.is_some(),
        current_limits: selected_current_limits(&dl.limits),
        operational_limits_groups: operational_limits_groups(&dl.limits, ctx.parameters),
        connectable_position: connectable_position(dl.position.as_ref(), FeederSide::Injection),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    }))
}
