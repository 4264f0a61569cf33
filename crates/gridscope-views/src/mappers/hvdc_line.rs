use gridscope_core::{
    ConvertersMode, GridscopeError, GridscopeResult, HvdcLine, Identifiable, OperatingStatus,
};
use serde::Serialize;

use super::converter_station::{station_form_infos, ConverterStationFormInfos};
use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{resolve_terminal, ResolvedTerminal};
use crate::normalize::{extension_value, nan_to_none};
use crate::records::{HvdcAngleDroopActivePowerControlInfos, HvdcOperatorActivePowerRangeInfos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HvdcType {
    Lcc,
    Vsc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HvdcLineFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub converters_mode: ConvertersMode,
    pub r: f64,
    pub nominal_v: Option<f64>,
    pub active_power_setpoint: Option<f64>,
    pub max_p: Option<f64>,
    pub converter_station1: ConverterStationFormInfos,
    pub converter_station2: ConverterStationFormInfos,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p0: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub droop: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opr_from_cs1_to_cs2: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opr_from_cs2_to_cs1: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HvdcLineTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub converters_mode: ConvertersMode,
    pub hvdc_type: HvdcType,
    pub converter_station_id1: String,
    pub converter_station_id2: String,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country2: Option<String>,
    pub r: f64,
    pub nominal_v: Option<f64>,
    pub active_power_setpoint: Option<f64>,
    pub max_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvdc_angle_droop_active_power_control: Option<HvdcAngleDroopActivePowerControlInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvdc_operator_active_power_range: Option<HvdcOperatorActivePowerRangeInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HvdcLineMapInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub hvdc_type: HvdcType,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    pub terminal1_connected: bool,
    pub terminal2_connected: bool,
    pub p1: Option<f64>,
    pub p2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

fn station_side<'a>(
    ctx: &MapperContext<'a>,
    line: &HvdcLine,
    station_id: &str,
) -> GridscopeResult<(ResolvedTerminal<'a>, HvdcType)> {
    match ctx.network.converter_station(station_id) {
        Some(Identifiable::LccConverterStation(station)) => {
            resolve_terminal(ctx.network, &station.id, &station.terminal)
                .map(|t| (t, HvdcType::Lcc))
        }
        Some(Identifiable::VscConverterStation(station)) => {
            resolve_terminal(ctx.network, &station.id, &station.terminal)
                .map(|t| (t, HvdcType::Vsc))
        }
        _ => Err(GridscopeError::MissingData(format!(
            "HVDC line '{}' references unknown converter station '{station_id}'",
            line.id
        ))),
    }
}

fn station_sides<'a>(
    ctx: &MapperContext<'a>,
    line: &HvdcLine,
) -> GridscopeResult<((ResolvedTerminal<'a>, HvdcType), (ResolvedTerminal<'a>, HvdcType))> {
    let side1 = station_side(ctx, line, &line.converter_station1_id);
    let side2 = station_side(ctx, line, &line.converter_station2_id);
    Ok((side1?, side2?))
}

pub fn to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, HvdcLine);
    let station1 = station_form_infos(ctx, &line.id, &line.converter_station1_id);
    let station2 = station_form_infos(ctx, &line.id, &line.converter_station2_id);
    let (station1, station2) = (station1?, station2?);
    let droop = line.angle_droop_active_power_control.as_ref();
    let range = line.operator_active_power_range.as_ref();
    Ok(ElementInfos::HvdcLineForm(HvdcLineFormInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        converters_mode: line.converters_mode,
        r: line.r.value(),
        nominal_v: nan_to_none(line.nominal_v),
        active_power_setpoint: nan_to_none(line.active_power_setpoint),
        max_p: nan_to_none(line.max_p),
        converter_station1: station1,
        converter_station2: station2,
        p0: extension_value(droop, |d| d.p0),
        droop: extension_value(droop, |d| d.droop),
        is_enabled: droop.map(|d| d.enabled),
        opr_from_cs1_to_cs2: extension_value(range, |r| r.opr_from_cs1_to_cs2),
        opr_from_cs2_to_cs1: extension_value(range, |r| r.opr_from_cs2_to_cs1),
        operating_status: line.operating_status,
    }))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, HvdcLine);
    let ((side1, hvdc_type), (side2, _)) = station_sides(ctx, line)?;
    Ok(ElementInfos::HvdcLineTab(HvdcLineTabInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        converters_mode: line.converters_mode,
        hvdc_type,
        converter_station_id1: line.converter_station1_id.clone(),
        converter_station_id2: line.converter_station2_id.clone(),
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        country1: side1.country(),
        country2: side2.country(),
        r: line.r.value(),
        nominal_v: nan_to_none(line.nominal_v),
        active_power_setpoint: nan_to_none(line.active_power_setpoint),
        max_p: nan_to_none(line.max_p),
        hvdc_angle_droop_active_power_control: line.angle_droop_active_power_control.as_ref().map(
            |d| HvdcAngleDroopActivePowerControlInfos {
                p0: nan_to_none(d.p0),
                droop: nan_to_none(d.droop),
                is_enabled: d.enabled,
            },
        ),
        hvdc_operator_active_power_range: line.operator_active_power_range.as_ref().map(|r| {
            HvdcOperatorActivePowerRangeInfos {
                opr_from_cs1_to_cs2: nan_to_none(r.opr_from_cs1_to_cs2),
                opr_from_cs2_to_cs1: nan_to_none(r.opr_from_cs2_to_cs1),
            }
        }),
        operating_status: line.operating_status,
    }))
}

pub fn to_map<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let line = downcast!(identifiable, HvdcLine);
    let ((side1, hvdc_type), (side2, _)) = station_sides(ctx, line)?;
    Ok(ElementInfos::HvdcLineMap(HvdcLineMapInfos {
        id: line.id.clone(),
        name: line.name.clone(),
        hvdc_type,
        voltage_level_id1: side1.voltage_level_id(),
        voltage_level_id2: side2.voltage_level_id(),
        terminal1_connected: side1.connected(),
        terminal2_connected: side2.connected(),
        p1: side1.p(),
        p2: side2.p(),
        operating_status: line.operating_status,
    }))
}
