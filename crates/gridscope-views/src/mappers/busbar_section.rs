use gridscope_core::{GridscopeError, GridscopeResult, Identifiable};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::normalize::nan_to_none;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusbarSectionFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busbar_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusbarSectionTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub nominal_voltage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    pub connected: bool,
}

pub fn to_form<'a>(
    _ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let section = downcast!(identifiable, BusbarSection);
    Ok(ElementInfos::BusbarSectionForm(BusbarSectionFormInfos {
        id: section.id.clone(),
        name: section.name.clone(),
        voltage_level_id: section.voltage_level_id.clone(),
        busbar_index: section.position.map(|p| p.busbar_index),
        section_index: section.position.map(|p| p.section_index),
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let section = downcast!(identifiable, BusbarSection);
    let voltage_level = ctx
        .network
        .voltage_level(&section.voltage_level_id)
        .ok_or_else(|| {
            GridscopeError::MissingData(format!(
                "busbar section '{}' references unknown voltage level '{}'",
                section.id, section.voltage_level_id
            ))
        })?;
    Ok(ElementInfos::BusbarSectionTab(BusbarSectionTabInfos {
        id: section.id.clone(),
        name: section.name.clone(),
        voltage_level_id: voltage_level.id.clone(),
        country: ctx
            .network
            .substation(&voltage_level.substation_id)
            .and_then(|s| s.country.clone()),
        nominal_voltage: nan_to_none(voltage_level.nominal_v),
        v: nan_to_none(section.v),
        angle: nan_to_none(section.angle),
        connected: section.connected,
    }))
}
