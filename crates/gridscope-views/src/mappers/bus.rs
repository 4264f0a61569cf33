use gridscope_core::{GridscopeError, GridscopeResult, Identifiable};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::normalize::nan_to_none;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusTabInfos {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_component: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous_component: Option<i32>,
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let bus = downcast!(identifiable, Bus);
    let voltage_level = ctx.network.voltage_level(&bus.voltage_level_id).ok_or_else(|| {
        GridscopeError::MissingData(format!(
            "bus '{}' references unknown voltage level '{}'",
            bus.id, bus.voltage_level_id
        ))
    })?;
    Ok(ElementInfos::BusTab(BusTabInfos {
        id: bus.id.clone(),
        name: bus.name.clone(),
        voltage_level_id: voltage_level.id.clone(),
        country: ctx
            .network
            .substation(&voltage_level.substation_id)
            .and_then(|s| s.country.clone()),
        nominal_voltage: nan_to_none(voltage_level.nominal_v),
        v: nan_to_none(bus.v),
        angle: nan_to_none(bus.angle),
        connected_component: bus.connected_component,
        synchronous_component: bus.synchronous_component,
    }))
}
