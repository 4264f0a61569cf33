//! Extraction helpers shared by every mapper.
//!
//! Each helper reads one concern of an entity (its terminal, a feeder
//! position, reactive limits, ...) and returns the corresponding view
//! fragment. FORM and TAB mappers of the same equipment call the same helper,
//! so they cannot disagree on how an extension is read.

use gridscope_core::{
    high_tap_position, ActivePowerControl, ConnectablePosition, CurrentLimits, Feeder,
    GridscopeError, GridscopeResult, Identifiable, MeasurementSide, MeasurementType, Measurements,
    Network, PhaseTapChanger, RatioTapChanger, ReactiveLimits, SideLimits, Substation,
    TapChangerStep, Terminal, VoltageLevel,
};

use crate::context::InfoTypeParameters;
use crate::normalize::nan_to_none;
use crate::records::{
    ActivePowerControlInfos, ConnectablePositionInfos, CurrentLimitsInfos, ElementListInfos,
    MeasurementInfos, MinMaxReactiveLimitsInfos, OperationalLimitsGroupInfos,
    ReactiveCapabilityCurvePointInfos, TapChangerInfos, TapChangerStepInfos, TemporaryLimitInfos,
};

/// A terminal together with the containers it was resolved against.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTerminal<'a> {
    pub terminal: &'a Terminal,
    pub voltage_level: &'a VoltageLevel,
    pub substation: Option<&'a Substation>,
}

impl ResolvedTerminal<'_> {
    pub fn voltage_level_id(&self) -> String {
        self.voltage_level.id.clone()
    }

    pub fn voltage_level_name(&self) -> Option<String> {
        self.voltage_level.name.clone()
    }

    pub fn nominal_v(&self) -> Option<f64> {
        nan_to_none(self.voltage_level.nominal_v)
    }

    pub fn substation_id(&self) -> Option<String> {
        self.substation.map(|s| s.id.clone())
    }

    pub fn country(&self) -> Option<String> {
        self.substation.and_then(|s| s.country.clone())
    }

    pub fn bus_or_busbar_section_id(&self) -> Option<String> {
        self.terminal.bus_or_busbar_section_id.clone()
    }

    pub fn connected(&self) -> bool {
        self.terminal.connected
    }

    pub fn p(&self) -> Option<f64> {
        nan_to_none(self.terminal.p)
    }

    pub fn q(&self) -> Option<f64> {
        nan_to_none(self.terminal.q)
    }

    pub fn i(&self) -> Option<f64> {
        nan_to_none(self.terminal.i)
    }
}

/// Resolve the voltage level (and substation, when there is one) a terminal
/// of `owner_id` is connected to.
///
/// A terminal without a known voltage level breaks the model invariants and
/// is reported as [`GridscopeError::MissingData`].
pub fn resolve_terminal<'a>(
    network: &'a Network,
    owner_id: &str,
    terminal: &'a Terminal,
) -> GridscopeResult<ResolvedTerminal<'a>> {
    if terminal.voltage_level_id.is_empty() {
        return Err(GridscopeError::MissingData(format!(
            "terminal of '{owner_id}' has no voltage level"
        )));
    }
    let voltage_level = network
        .voltage_level(&terminal.voltage_level_id)
        .ok_or_else(|| {
            GridscopeError::MissingData(format!(
                "terminal of '{owner_id}' references unknown voltage level '{}'",
                terminal.voltage_level_id
            ))
        })?;
    Ok(ResolvedTerminal {
        terminal,
        voltage_level,
        substation: network.substation(&voltage_level.substation_id),
    })
}

pub fn list_infos(identifiable: Identifiable<'_>) -> ElementListInfos {
    ElementListInfos {
        id: identifiable.id().to_string(),
        name: identifiable.name().map(str::to_string),
    }
}

/// Which feeder of a [`ConnectablePosition`] to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeederSide {
    Injection,
    One,
    Two,
    Three,
}

pub fn connectable_position(
    position: Option<&ConnectablePosition>,
    side: FeederSide,
) -> Option<ConnectablePositionInfos> {
    let position = position?;
    let feeder = match side {
        FeederSide::Injection => position.feeder.as_ref(),
        FeederSide::One => position.feeder1.as_ref(),
        FeederSide::Two => position.feeder2.as_ref(),
        FeederSide::Three => position.feeder3.as_ref(),
    };
    feeder.map(feeder_infos)
}

fn feeder_infos(feeder: &Feeder) -> ConnectablePositionInfos {
    ConnectablePositionInfos {
        connection_name: feeder.name.clone(),
        connection_position: feeder.order,
        connection_direction: feeder.direction,
    }
}

pub fn min_max_reactive_limits(limits: &ReactiveLimits) -> Option<MinMaxReactiveLimitsInfos> {
    match limits {
        ReactiveLimits::MinMax { min_q, max_q } => Some(MinMaxReactiveLimitsInfos {
            min_q: nan_to_none(*min_q),
            max_q: nan_to_none(*max_q),
        }),
        ReactiveLimits::Curve { .. } => None,
    }
}

pub fn reactive_capability_curve(
    limits: &ReactiveLimits,
) -> Vec<ReactiveCapabilityCurvePointInfos> {
    match limits {
        ReactiveLimits::Curve { points } => points
            .iter()
            .map(|point| ReactiveCapabilityCurvePointInfos {
                p: nan_to_none(point.p),
                min_q: nan_to_none(point.min_q),
                max_q: nan_to_none(point.max_q),
            })
            .collect(),
        ReactiveLimits::MinMax { .. } => Vec::new(),
    }
}

/// Droop and participation factor are copied as-is; the record drops them
/// when NaN.
pub fn active_power_control(
    control: Option<&ActivePowerControl>,
) -> Option<ActivePowerControlInfos> {
    control.map(|apc| ActivePowerControlInfos {
        participate: apc.participate,
        droop: Some(apc.droop),
        participation_factor: Some(apc.participation_factor),
    })
}

pub fn measurement(
    measurements: Option<&Measurements>,
    measurement_type: MeasurementType,
    side: Option<MeasurementSide>,
) -> Option<MeasurementInfos> {
    measurements?
        .find(measurement_type, side)
        .map(|m| MeasurementInfos {
            value: nan_to_none(m.value),
            validity: m.valid,
        })
}

pub fn current_limits(limits: &CurrentLimits) -> CurrentLimitsInfos {
    CurrentLimitsInfos {
        permanent_limit: nan_to_none(limits.permanent_limit),
        temporary_limits: limits
            .temporary_limits
            .iter()
            .map(|limit| TemporaryLimitInfos {
                name: limit.name.clone(),
                value: nan_to_none(limit.value),
                acceptable_duration: limit.acceptable_duration,
            })
            .collect(),
    }
}

/// Current limits of the selected operational limits group of one side.
pub fn selected_current_limits(side: &SideLimits) -> Option<CurrentLimitsInfos> {
    side.selected_current_limits().map(current_limits)
}

/// Every operational limits group of one side, or none unless the caller
/// asked for them.
pub fn operational_limits_groups(
    side: &SideLimits,
    parameters: &InfoTypeParameters,
) -> Vec<OperationalLimitsGroupInfos> {
    if !parameters.load_operational_limit_groups {
        return Vec::new();
    }
    side.operational_limits_groups
        .iter()
        .map(|group| OperationalLimitsGroupInfos {
            id: group.id.clone(),
            current_limits: group.current_limits.as_ref().map(current_limits),
        })
        .collect()
}

fn steps_infos(
    low_tap_position: i32,
    steps: &[TapChangerStep],
    with_alpha: bool,
) -> Vec<TapChangerStepInfos> {
    steps
        .iter()
        .zip(low_tap_position..)
        .map(|(step, index)| TapChangerStepInfos {
            index,
            rho: nan_to_none(step.rho),
            alpha: if with_alpha {
                nan_to_none(step.alpha)
            } else {
                None
            },
            r: nan_to_none(step.r),
            x: nan_to_none(step.x),
            g: nan_to_none(step.g),
            b: nan_to_none(step.b),
        })
        .collect()
}

pub fn ratio_tap_changer(
    tap_changer: Option<&RatioTapChanger>,
    with_steps: bool,
) -> Option<TapChangerInfos> {
    let rtc = tap_changer?;
    Some(TapChangerInfos {
        low_tap_position: rtc.low_tap_position,
        tap_position: rtc.tap_position,
        high_tap_position: high_tap_position(rtc.low_tap_position, rtc.steps.len()),
        regulating: rtc.regulating,
        load_tap_changing_capabilities: Some(rtc.load_tap_changing_capabilities),
        regulation_mode: None,
        target_v: Some(rtc.target_v),
        regulation_value: None,
        target_deadband: Some(rtc.target_deadband),
        steps: if with_steps {
            steps_infos(rtc.low_tap_position, &rtc.steps, false)
        } else {
            Vec::new()
        },
    })
}

pub fn phase_tap_changer(
    tap_changer: Option<&PhaseTapChanger>,
    with_steps: bool,
) -> Option<TapChangerInfos> {
    let ptc = tap_changer?;
    Some(TapChangerInfos {
        low_tap_position: ptc.low_tap_position,
        tap_position: ptc.tap_position,
        high_tap_position: high_tap_position(ptc.low_tap_position, ptc.steps.len()),
        regulating: ptc.regulating,
        load_tap_changing_capabilities: None,
        regulation_mode: Some(ptc.regulation_mode),
        target_v: None,
        regulation_value: Some(ptc.regulation_value),
        target_deadband: Some(ptc.target_deadband),
        steps: if with_steps {
            steps_infos(ptc.low_tap_position, &ptc.steps, true)
        } else {
            Vec::new()
        },
    })
}
