use gridscope_core::{GridscopeResult, Identifiable};
use serde::Serialize;
use std::collections::BTreeMap;

use super::voltage_level::{self, VoltageLevelListInfos, VoltageLevelMapInfos};
use crate::context::MapperContext;
use crate::element_infos::ElementInfos;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstationListInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_levels: Vec<VoltageLevelListInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstationFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tso: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    pub voltage_levels: Vec<VoltageLevelListInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstationTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tso: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstationMapInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub voltage_level_ids: Vec<String>,
    pub voltage_levels: Vec<VoltageLevelMapInfos>,
}

pub fn to_list(
    ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let substation = downcast!(identifiable, Substation);
    Ok(ElementInfos::SubstationList(SubstationListInfos {
        id: substation.id.clone(),
        name: substation.name.clone(),
        voltage_levels: ctx
            .network
            .voltage_levels_of(&substation.id)
            .map(voltage_level::list_infos)
            .collect(),
    }))
}

pub fn to_form(
    ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let substation = downcast!(identifiable, Substation);
    Ok(ElementInfos::SubstationForm(SubstationFormInfos {
        id: substation.id.clone(),
        name: substation.name.clone(),
        country: substation.country.clone(),
        tso: substation.tso.clone(),
        properties: substation.properties.clone(),
        voltage_levels: ctx
            .network
            .voltage_levels_of(&substation.id)
            .map(voltage_level::list_infos)
            .collect(),
    }))
}

pub fn to_tab(
    _ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let substation = downcast!(identifiable, Substation);
    Ok(ElementInfos::SubstationTab(SubstationTabInfos {
        id: substation.id.clone(),
        name: substation.name.clone(),
        country: substation.country.clone(),
        tso: substation.tso.clone(),
        properties: substation.properties.clone(),
    }))
}

pub fn to_map(
    ctx: &MapperContext<'_>,
    identifiable: Identifiable<'_>,
) -> GridscopeResult<ElementInfos> {
    let substation = downcast!(identifiable, Substation);
    let voltage_levels: Vec<VoltageLevelMapInfos> = ctx
        .network
        .voltage_levels_of(&substation.id)
        .map(voltage_level::map_infos)
        .collect();
    Ok(ElementInfos::SubstationMap(SubstationMapInfos {
        id: substation.id.clone(),
        name: substation.name.clone(),
        country: substation.country.clone(),
        voltage_level_ids: voltage_levels.iter().map(|vl| vl.id.clone()).collect(),
        voltage_levels,
    }))
}
