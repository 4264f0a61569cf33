use serde::{Deserialize, Serialize};

use crate::units::{Amperes, Megavars, Megawatts};

/// Connection point of an equipment to a voltage level.
///
/// `p`, `q` and `i` are whatever the last computation left on the terminal;
/// they are NaN when nothing has been computed for the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Terminal {
    /// Owning voltage level. Mandatory: a terminal without one is malformed.
    pub voltage_level_id: String,
    /// Bus (bus/breaker view) or busbar section the terminal is attached to
    pub bus_or_busbar_section_id: Option<String>,
    pub connected: bool,
    pub p: Megawatts,
    pub q: Megavars,
    pub i: Amperes,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            voltage_level_id: String::new(),
            bus_or_busbar_section_id: None,
            connected: true,
            p: Megawatts::nan(),
            q: Megavars::nan(),
            i: Amperes::nan(),
        }
    }
}

impl Terminal {
    /// Terminal attached to `voltage_level_id` with nothing computed yet.
    pub fn new(voltage_level_id: impl Into<String>) -> Self {
        Self {
            voltage_level_id: voltage_level_id.into(),
            ..Self::default()
        }
    }

    /// Set the flows computed for the current state.
    pub fn with_flows(mut self, p: f64, q: f64, i: f64) -> Self {
        self.p = Megawatts(p);
        self.q = Megavars(q);
        self.i = Amperes(i);
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flows_deserialize_as_nan() {
        let terminal: Terminal =
            serde_json::from_str(r#"{"voltageLevelId": "VL1", "p": 12.0}"#).unwrap();
        assert_eq!(terminal.voltage_level_id, "VL1");
        assert!(terminal.connected);
        assert_eq!(terminal.p.value(), 12.0);
        assert!(terminal.q.is_nan());
        assert!(terminal.i.is_nan());
    }
}
