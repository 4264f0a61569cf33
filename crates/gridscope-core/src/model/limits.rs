//! Operational limits and tap changers attached to branch sides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemporaryLimit {
    pub name: String,
    pub value: f64,
    /// Seconds the overload may last; `None` means unbounded.
    pub acceptable_duration: Option<i32>,
}

impl Default for TemporaryLimit {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: f64::NAN,
            acceptable_duration: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentLimits {
    pub permanent_limit: f64,
    pub temporary_limits: Vec<TemporaryLimit>,
}

impl Default for CurrentLimits {
    fn default() -> Self {
        Self {
            permanent_limit: f64::NAN,
            temporary_limits: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationalLimitsGroup {
    pub id: String,
    pub current_limits: Option<CurrentLimits>,
}

/// Limits groups of one branch side and the group currently in force.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideLimits {
    pub operational_limits_groups: Vec<OperationalLimitsGroup>,
    pub selected_operational_limits_group_id: Option<String>,
}

impl SideLimits {
    /// Current limits of the selected group, if a group is selected and has any.
    pub fn selected_current_limits(&self) -> Option<&CurrentLimits> {
        let selected = self.selected_operational_limits_group_id.as_deref()?;
        self.operational_limits_groups
            .iter()
            .find(|group| group.id == selected)
            .and_then(|group| group.current_limits.as_ref())
    }

    /// Side with a single selected group holding `limits`.
    pub fn single(group_id: impl Into<String>, limits: CurrentLimits) -> Self {
        let id = group_id.into();
        Self {
            operational_limits_groups: vec![OperationalLimitsGroup {
                id: id.clone(),
                current_limits: Some(limits),
            }],
            selected_operational_limits_group_id: Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TapChangerStep {
    pub rho: f64,
    /// Phase shift in degrees; always 0 on ratio tap changers
    pub alpha: f64,
    pub r: f64,
    pub x: f64,
    pub g: f64,
    pub b: f64,
}

impl Default for TapChangerStep {
    fn default() -> Self {
        Self {
            rho: 1.0,
            alpha: 0.0,
            r: 0.0,
            x: 0.0,
            g: 0.0,
            b: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatioTapChanger {
    pub low_tap_position: i32,
    pub tap_position: i32,
    pub steps: Vec<TapChangerStep>,
    pub regulating: bool,
    pub load_tap_changing_capabilities: bool,
    pub target_v: f64,
    pub target_deadband: f64,
}

impl Default for RatioTapChanger {
    fn default() -> Self {
        Self {
            low_tap_position: 0,
            tap_position: 0,
            steps: Vec::new(),
            regulating: false,
            load_tap_changing_capabilities: false,
            target_v: f64::NAN,
            target_deadband: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseRegulationMode {
    CurrentLimiter,
    ActivePowerControl,
    #[default]
    FixedTap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhaseTapChanger {
    pub low_tap_position: i32,
    pub tap_position: i32,
    pub steps: Vec<TapChangerStep>,
    pub regulating: bool,
    pub regulation_mode: PhaseRegulationMode,
    pub regulation_value: f64,
    pub target_deadband: f64,
}

impl Default for PhaseTapChanger {
    fn default() -> Self {
        Self {
            low_tap_position: 0,
            tap_position: 0,
            steps: Vec::new(),
            regulating: false,
            regulation_mode: PhaseRegulationMode::FixedTap,
            regulation_value: f64::NAN,
            target_deadband: f64::NAN,
        }
    }
}

/// Highest tap position reachable from `low` with `step_count` steps.
pub fn high_tap_position(low: i32, step_count: usize) -> i32 {
    low + step_count.saturating_sub(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_limits_follow_the_selected_group() {
        let side = SideLimits {
            operational_limits_groups: vec![
                OperationalLimitsGroup {
                    id: "WINTER".into(),
                    current_limits: Some(CurrentLimits {
                        permanent_limit: 1000.0,
                        ..CurrentLimits::default()
                    }),
                },
                OperationalLimitsGroup {
                    id: "SUMMER".into(),
                    current_limits: Some(CurrentLimits {
                        permanent_limit: 800.0,
                        ..CurrentLimits::default()
                    }),
                },
            ],
            selected_operational_limits_group_id: Some("SUMMER".into()),
        };
        assert_eq!(
            side.selected_current_limits().unwrap().permanent_limit,
            800.0
        );
    }

    #[test]
    fn no_selection_means_no_limits() {
        let mut side = SideLimits::single("DEFAULT", CurrentLimits::default());
        side.selected_operational_limits_group_id = None;
        assert!(side.selected_current_limits().is_none());
    }

    #[test]
    fn high_tap_position_counts_from_low() {
        assert_eq!(high_tap_position(-16, 33), 16);
        assert_eq!(high_tap_position(0, 0), 0);
    }
}
