use gridscope_core::{GridscopeResult, Identifiable, Network, TopologyKind, VoltageLevel};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::normalize::{extension_value, is_null_or_nan, nan_to_none};
use crate::topology::{infer_topology, TopologySnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageLevelListInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub substation_id: String,
    pub nominal_v: Option<f64>,
    pub topology_kind: TopologyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageLevelFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub substation_id: String,
    pub nominal_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub low_voltage_limit: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub high_voltage_limit: Option<f64>,
    pub topology_kind: TopologyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_min: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_max: Option<Option<f64>>,
    /// Busbar layout, node/breaker voltage levels only
    #[serde(flatten)]
    pub topology: Option<TopologySnapshot>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageLevelTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub substation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub nominal_v: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub low_voltage_limit: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub high_voltage_limit: Option<f64>,
    pub topology_kind: TopologyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_max: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageLevelMapInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub substation_id: String,
    pub nominal_v: Option<f64>,
}

pub(crate) fn list_infos(vl: &VoltageLevel) -> VoltageLevelListInfos {
    VoltageLevelListInfos {
        id: vl.id.clone(),
        name: vl.name.clone(),
        substation_id: vl.substation_id.clone(),
        nominal_v: nan_to_none(vl.nominal_v),
        topology_kind: vl.topology_kind,
    }
}

pub(crate) fn map_infos(vl: &VoltageLevel) -> VoltageLevelMapInfos {
    VoltageLevelMapInfos {
        id: vl.id.clone(),
        name: vl.name.clone(),
        substation_id: vl.substation_id.clone(),
        nominal_v: nan_to_none(vl.nominal_v),
    }
}

fn topology_of(network: &Network, vl: &VoltageLevel) -> Option<TopologySnapshot> {
    match vl.topology_kind {
        TopologyKind::NodeBreaker => Some(infer_topology(network.busbar_sections_of(&vl.id))),
        TopologyKind::BusBreaker => None,
    }
}

pub fn to_list(
    _ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let vl = downcast!(identifiable, VoltageLevel);
    Ok(ElementInfos::VoltageLevelList(list_infos(vl)))
}

pub fn to_form(
    ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let vl = downcast!(identifiable, VoltageLevel);
    let short_circuit = vl.identifiable_short_circuit.as_ref();
    Ok(ElementInfos::VoltageLevelForm(VoltageLevelFormInfos {
        id: vl.id.clone(),
        name: vl.name.clone(),
        substation_id: vl.substation_id.clone(),
        nominal_v: nan_to_none(vl.nominal_v),
        low_voltage_limit: Some(vl.low_voltage_limit.value()),
        high_voltage_limit: Some(vl.high_voltage_limit.value()),
        topology_kind: vl.topology_kind,
        ip_min: extension_value(short_circuit, |sc| sc.ip_min),
        ip_max: extension_value(short_circuit, |sc| sc.ip_max),
        topology: topology_of(ctx.network, vl),
        properties: vl.properties.clone(),
    }))
}

pub fn to_tab(
    ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let vl = downcast!(identifiable, VoltageLevel);
    let short_circuit = vl.identifiable_short_circuit.as_ref();
    Ok(ElementInfos::VoltageLevelTab(VoltageLevelTabInfos {
        id: vl.id.clone(),
        name: vl.name.clone(),
        substation_id: vl.substation_id.clone(),
        country: ctx
            .network
            .substation(&vl.substation_id)
            .and_then(|s| s.country.clone()),
        nominal_v: nan_to_none(vl.nominal_v),
        low_voltage_limit: Some(vl.low_voltage_limit.value()),
        high_voltage_limit: Some(vl.high_voltage_limit.value()),
        topology_kind: vl.topology_kind,
        ip_min: short_circuit.and_then(|sc| nan_to_none(sc.ip_min)),
        ip_max: short_circuit.and_then(|sc| nan_to_none(sc.ip_max)),
        properties: vl.properties.clone(),
    }))
}

pub fn to_map(
    _ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let vl = downcast!(identifiable, VoltageLevel);
    Ok(ElementInfos::VoltageLevelMap(map_infos(vl)))
}
