use gridscope_core::{
    GridscopeResult, Identifiable, OperatingStatus, ThreeWindingsTransformer,
    ThreeWindingsTransformerLeg,
};
use serde::Serialize;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::extensions::{
    connectable_position, operational_limits_groups, phase_tap_changer, ratio_tap_changer,
    resolve_terminal, selected_current_limits, FeederSide, ResolvedTerminal,
};
use crate::normalize::{is_null_or_nan, nan_to_none};
use crate::records::{
    ConnectablePositionInfos, CurrentLimitsInfos, OperationalLimitsGroupInfos, TapChangerInfos,
};

/// One winding, seen from the star point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeWindingsTransformerLegTabInfos {
    pub voltage_level_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub nominal_voltage: Option<f64>,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<f64>,
    pub r: f64,
    pub x: f64,
    pub g: f64,
    pub b: f64,
    pub rated_u: Option<f64>,
    #[serde(skip_serializing_if = "is_null_or_nan")]
    pub rated_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_tap_changer: Option<TapChangerInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_tap_changer: Option<TapChangerInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_limits: Option<CurrentLimitsInfos>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operational_limits_groups: Vec<OperationalLimitsGroupInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectable_position: Option<ConnectablePositionInfos>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeWindingsTransformerTabInfos {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rated_u0: Option<f64>,
    pub leg1: ThreeWindingsTransformerLegTabInfos,
    pub leg2: ThreeWindingsTransformerLegTabInfos,
    pub leg3: ThreeWindingsTransformerLegTabInfos,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
}

fn leg_infos(
    ctx: &MapperContext<'_>,
    twt: &ThreeWindingsTransformer,
    leg: &ThreeWindingsTransformerLeg,
    side: ResolvedTerminal<'_>,
    feeder: FeederSide,
) -> ThreeWindingsTransformerLegTabInfos {
    ThreeWindingsTransformerLegTabInfos {
        voltage_level_id: side.voltage_level_id(),
        country: side.country(),
        nominal_voltage: side.nominal_v(),
        connected: side.connected(),
        p: side.p(),
        q: side.q(),
        i: side.i(),
        r: leg.r.value(),
        x: leg.x.value(),
        g: leg.g.value(),
        b: leg.b.value(),
        rated_u: nan_to_none(leg.rated_u),
        rated_s: Some(leg.rated_s.value()),
        ratio_tap_changer: ratio_tap_changer(leg.ratio_tap_changer.as_ref(), false),
        phase_tap_changer: phase_tap_changer(leg.phase_tap_changer.as_ref(), false),
        current_limits: selected_current_limits(&leg.limits),
        operational_limits_groups: operational_limits_groups(&leg.limits, ctx.parameters),
        connectable_position: connectable_position(twt.position.as_ref(), feeder),
    }
}

pub fn to_tab<'a>(
    ctx: &MapperContext<'a>,
    identifiable: Identifiable<'a>,
) -> GridscopeResult<ElementInfos> {
    let twt = downcast!(identifiable, ThreeWindingsTransformer);
    let [leg1, leg2, leg3] = twt.legs();
    let side1 = resolve_terminal(ctx.network, &twt.id, &leg1.terminal);
    let side2 = resolve_terminal(ctx.network, &twt.id, &leg2.terminal);
    let side3 = resolve_terminal(ctx.network, &twt.id, &leg3.terminal);
    let (side1, side2, side3) = (side1?, side2?, side3?);
    Ok(ElementInfos::ThreeWindingsTransformerTab(ThreeWindingsTransformerTabInfos {
        id: twt.id.clone(),
        name: twt.name.clone(),
        rated_u0: nan_to_none(twt.rated_u0),
        leg1: leg_infos(ctx, twt, leg1, side1, FeederSide::One),
        leg2: leg_infos(ctx, twt, leg2, side2, FeederSide::Two),
        leg3: leg_infos(ctx, twt, leg3, side3, FeederSide::Three),
        operating_status: twt.operating_status,
    }))
}
