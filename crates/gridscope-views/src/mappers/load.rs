use gridscope_core::{GridscopeResult, Identifiable, LoadType, MeasurementType};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{connectable_position, measurement, resolve_terminal, FeederSide};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{ConnectablePositionInfos, MeasurementInfos};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub load_type: LoadType,
    pub voltage_level_id: String,
    pub nominal_voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id: Option<String>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    pub p0: Option<f64>,
    pub q0: Option<f64>,
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
pub struct LoadTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub load_type: LoadType,
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
    pub p0: Option<f64>,
    pub q0: Option<f64>,
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
    let load = downcast!(identifiable, Load);
    let side = resolve_terminal(ctx.network, &load.id, &load.terminal)?;
    let measurements = load.measurements.as_ref();
    Ok(ElementInfos::LoadForm(LoadFormInfos {
        id: load.id.clone(),
        name: load.name.clone(),
        load_type: load.load_type,
        voltage_level_id: side.voltage_level_id(),
        nominal_voltage: side.nominal_v(),
        bus_or_busbar_section_id: side.bus_or_busbar_section_id(),
        terminal_connected: side.connected(),
        p: side.p(),
        q: side.q(),
        p0: nan_to_none(load.p0),
        q0: nan_to_none(load.q0),
        connectable_position: connectable_position(load.position.as_ref(), FeederSide::Injection),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
        properties: load.properties.clone(),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let load = downcast!(identifiable, Load);
    let side = resolve_terminal(ctx.network, &load.id, &load.terminal)?;
    let measurements = load.measurements.as_ref();
    Ok(ElementInfos::LoadTab(LoadTabInfos {
        id: load.id.clone(),
        name: load.name.clone(),
        load_type: load.load_type,
        voltage_level_id: side.voltage_level_id(),
        substation_id: side.substation_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(load.terminal.p.value()),
        q: Some(load.terminal.q.value()),
        p0: nan_to_none(load.p0),
        q0: nan_to_none(load.q0),
        connectable_position: connectable_position(load.position.as_ref(), FeederSide::Injection),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
        properties: load.properties.clone(),
    }))
}
