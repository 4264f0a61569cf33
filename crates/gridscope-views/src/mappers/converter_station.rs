//! LCC and VSC converter stations, the two ends of an HVDC line.

use gridscope_core::{
    GridscopeError, GridscopeResult, Identifiable, LccConverterStation, MeasurementType,
    VscConverterStation,
};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    connectable_position, measurement, min_max_reactive_limits, reactive_capability_curve,
    resolve_terminal, FeederSide,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{
    ConnectablePositionInfos, MeasurementInfos, MinMaxReactiveLimitsInfos,
    ReactiveCapabilityCurvePointInfos,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LccConverterStationFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    pub nominal_v: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id: Option<String>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    pub loss_factor: Option<f64>,
    pub power_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvdc_line_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LccConverterStationTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub nominal_v: Option<f64>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub q: Option<f64>,
    pub loss_factor: Option<f64>,
    pub power_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvdc_line_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VscConverterStationFormInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    pub nominal_v: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_or_busbar_section_id: Option<String>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    pub loss_factor: Option<f64>,
    pub voltage_regulator_on: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub voltage_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub reactive_power_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_reactive_limits: Option<MinMaxReactiveLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reactive_capability_curve_points: Vec<ReactiveCapabilityCurvePointInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvdc_line_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VscConverterStationTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub nominal_v: Option<f64>,
    pub terminal_connected: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub q: Option<f64>,
    pub loss_factor: Option<f64>,
    pub voltage_regulator_on: bool,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub voltage_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub reactive_power_setpoint: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_max_reactive_limits: Option<MinMaxReactiveLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvdc_line_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_p: Option<MeasurementInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_q: Option<MeasurementInfos>,
}

/// FORM view of either kind of station, as embedded in an HVDC line FORM.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConverterStationFormInfos {
    Lcc(LccConverterStationFormInfos),
    Vsc(VscConverterStationFormInfos),
}

pub(crate) fn lcc_form_infos(
    ctx: &MapperContext<'_>,
    station: &LccConverterStation,
) -> GridscopeResult<LccConverterStationFormInfos> {
    let side = resolve_terminal(ctx.network, &station.id, &station.terminal)?;
    let measurements = station.measurements.as_ref();
    Ok(LccConverterStationFormInfos {
        id: station.id.clone(),
        name: station.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        nominal_v: side.nominal_v(),
        bus_or_busbar_section_id: side.bus_or_busbar_section_id(),
        terminal_connected: side.connected(),
        p: side.p(),
        q: side.q(),
        loss_factor: nan_to_none(station.loss_factor),
        power_factor: nan_to_none(station.power_factor),
        hvdc_line_id: ctx.network.hvdc_line_of(&station.id).map(|l| l.id.clone()),
        connectable_position: connectable_position(
            station.position.as_ref(),
            FeederSide::Injection,
        ),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    })
}

pub(crate) fn vsc_form_infos(
    ctx: &MapperContext<'_>,
    station: &VscConverterStation,
) -> GridscopeResult<VscConverterStationFormInfos> {
    let side = resolve_terminal(ctx.network, &station.id, &station.terminal)?;
    let measurements = station.measurements.as_ref();
    Ok(VscConverterStationFormInfos {
        id: station.id.clone(),
        name: station.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        nominal_v: side.nominal_v(),
        bus_or_busbar_section_id: side.bus_or_busbar_section_id(),
        terminal_connected: side.connected(),
        p: side.p(),
        q: side.q(),
        loss_factor: nan_to_none(station.loss_factor),
        voltage_regulator_on: station.voltage_regulator_on,
        voltage_setpoint: Some(station.voltage_setpoint.value()),
        reactive_power_setpoint: Some(station.reactive_power_setpoint.value()),
        min_max_reactive_limits: min_max_reactive_limits(&station.reactive_limits),
        reactive_capability_curve_points: reactive_capability_curve(&station.reactive_limits),
        hvdc_line_id: ctx.network.hvdc_line_of(&station.id).map(|l| l.id.clone()),
        connectable_position: connectable_position(
            station.position.as_ref(),
            FeederSide::Injection,
        ),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    })
}

/// FORM view of the station with this id, whichever its kind.
pub(crate) fn station_form_infos(
    ctx: &MapperContext<'_>,
    hvdc_line_id: &str,
    station_id: &str,
) -> GridscopeResult<ConverterStationFormInfos> {
    match ctx.network.converter_station(station_id) {
        Some(Identifiable::LccConverterStation(station)) => {
            lcc_form_infos(ctx, station).map(ConverterStationFormInfos::Lcc)
        }
        Some(Identifiable::VscConverterStation(station)) => {
            vsc_form_infos(ctx, station).map(ConverterStationFormInfos::Vsc)
        }
        _ => Err(GridscopeError::MissingData(format!(
            "HVDC line '{hvdc_line_id}' references unknown converter station '{station_id}'"
        ))),
    }
}

pub fn lcc_to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let station = downcast!(identifiable, LccConverterStation);
    lcc_form_infos(ctx, station).map(ElementInfos::LccConverterStationForm)
}

pub fn lcc_to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let station = downcast!(identifiable, LccConverterStation);
    let side = resolve_terminal(ctx.network, &station.id, &station.terminal)?;
    let measurements = station.measurements.as_ref();
    Ok(ElementInfos::LccConverterStationTab(LccConverterStationTabInfos {
        id: station.id.clone(),
        name: station.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_v: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(station.terminal.p.value()),
        q: Some(station.terminal.q.value()),
        loss_factor: nan_to_none(station.loss_factor),
        power_factor: nan_to_none(station.power_factor),
        hvdc_line_id: ctx.network.hvdc_line_of(&station.id).map(|l| l.id.clone()),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    }))
}

pub fn vsc_to_form<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let station = downcast!(identifiable, VscConverterStation);
    vsc_form_infos(ctx, station).map(ElementInfos::VscConverterStationForm)
}

pub fn vsc_to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let station = downcast!(identifiable, VscConverterStation);
    let side = resolve_terminal(ctx.network, &station.id, &station.terminal)?;
    let measurements = station.measurements.as_ref();
    Ok(ElementInfos::VscConverterStationTab(VscConverterStationTabInfos {
        id: station.id.clone(),
        name: station.name.clone(),
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_v: side.nominal_v(),
        terminal_connected: side.connected(),
        p: Some(station.terminal.p.value()),
        q: Some(station.terminal.q.value()),
        loss_factor: nan_to_none(station.loss_factor),
        voltage_regulator_on: station.voltage_regulator_on,
        voltage_setpoint: Some(station.voltage_setpoint.value()),
        reactive_power_setpoint: Some(station.reactive_power_setpoint.value()),
        min_max_reactive_limits: min_max_reactive_limits(&station.reactive_limits),
        hvdc_line_id: ctx.network.hvdc_line_of(&station.id).map(|l| l.id.clone()),
        measurement_p: measurement(measurements, MeasurementType::ActivePower, None),
        measurement_q: measurement(measurements, MeasurementType::ReactivePower, None),
    }))
}
