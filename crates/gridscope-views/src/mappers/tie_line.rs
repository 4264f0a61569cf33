use gridscope_core::{
    DanglingLine, GridscopeError, GridscopeResult, Identifiable, OperatingStatus, TieLine,
};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    operational_limits_groups, resolve_terminal, selected_current_limits, ResolvedTerminal,
};
use crate::normalize::is_null_or_nan;
use crate::records::{CurrentLimitsInfos, OperationalLimitsGroupInfos};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieLineTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub dangling_line1_id: String,
    pub dangling_line2_id: String,
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
    pub pairing_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits1: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits2: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups1: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups2: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieLineMapInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voltage_level_id1: String,
    pub voltage_level_id2: String,
    pub terminal1_connected: bool,
    pub terminal2_connected: bool,
    pub p1: Option<f64>,
    pub p2: Option<f64>,
    pub i1: Option<f64>,
    pub i2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

/// One half of a tie line with its resolved terminal.
struct Half<'a> {
    dangling_line: &'a DanglingLine,
    side: ResolvedTerminal<'a>,
}

fn half<'a>(
    ctx: &MapperContext<'a>,
    tie_line: &TieLine,
    dangling_line_id: &str,
) -> GridscopeResult<Half<'a>> {
    let dangling_line = ctx.network.dangling_line(dangling_line_id).ok_or_else(|| {
        GridscopeError::MissingData(format!(
            "tie line '{}' references unknown dangling line '{dangling_line_id}'",
            tie_line.id
        ))
    })?;
    let side = resolve_terminal(ctx.network, &dangling_line.id, &dangling_line.terminal)?;
    Ok(Half {
        dangling_line,
        side,
    })
}

fn halves<'a>(
    ctx: &MapperContext<'a>,
    tie_line: &TieLine,
) -> GridscopeResult<(Half<'a>, Half<'a>)> {
    let half1 = half(ctx, tie_line, &tie_line.dangling_line1_id);
    let half2 = half(ctx, tie_line, &tie_line.dangling_line2_id);
    Ok((half1?, half2?))
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let tie_line = downcast!(identifiable, TieLine);
    let (half1, half2) = halves(ctx, tie_line)?;
    let (dl1, dl2) = (half1.dangling_line, half2.dangling_line);
    Ok(ElementInfos::TieLineTab(TieLineTabInfos {
        id: tie_line.id.clone(),
        name: tie_line.name.clone(),
        dangling_line1_id: dl1.id.clone(),
        dangling_line2_id: dl2.id.clone(),
        voltage_level_id1: half1.side.voltage_level_id(),
        voltage_level_id2: half2.side.voltage_level_id(),
        country1: half1.side.country(),
        country2: half2.side.country(),
        nominal_voltage1: half1.side.nominal_v(),
        nominal_voltage2: half2.side.nominal_v(),
        terminal1_connected: half1.side.connected(),
        terminal2_connected: half2.side.connected(),
        p1: Some(dl1.terminal.p.value()),
        q1: Some(dl1.terminal.q.value()),
        i1: Some(dl1.terminal.i.value()),
        p2: Some(dl2.terminal.p.value()),
        q2: Some(dl2.terminal.q.value()),
        i2: Some(dl2.terminal.i.value()),
        r: tie_line.r.value(),
        x: tie_line.x.value(),
        g1: tie_line.g1.value(),
        b1: tie_line.b1.value(),
        g2: tie_line.g2.value(),
        b2: tie_line.b2.value(),
        pairing_key: dl1.pairing_key.clone().or_else(|| dl2.pairing_key.clone()),
        current_limits1: selected_current_limits(&dl1.limits),
        current_limits2: selected_current_limits(&dl2.limits),
        operational_limits_groups1: operational_limits_groups(&dl1.limits, ctx.parameters),
        operational_limits_groups2: operational_limits_groups(&dl2.limits, ctx.parameters),
        operating_status: tie_line.operating_status,
    }))
}

pub fn to_map<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let tie_line = downcast!(identifiable, TieLine);
    let (half1, half2) = halves(ctx, tie_line)?;
    Ok(ElementInfos::TieLineMap(TieLineMapInfos {
        id: tie_line.id.clone(),
        name: tie_line.name.clone(),
        voltage_level_id1: half1.side.voltage_level_id(),
        voltage_level_id2: half2.side.voltage_level_id(),
        terminal1_connected: half1.side.connected(),
        terminal2_connected: half2.side.connected(),
        p1: half1.side.p(),
        p2: half2.side.p(),
        i1: half1.side.i(),
        i2: half2.side.i(),
        operating_status: tie_line.operating_status,
    }))
}
