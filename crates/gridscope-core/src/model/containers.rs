use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::extensions::{BusbarSectionPosition, IdentifiableShortCircuit};
use crate::units::{Degrees, Kilovolts};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Substation {
    pub id: String,
    pub name: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    pub tso: Option<String>,
    pub properties: BTreeMap<String, String>,
}

/// Internal switching arrangement of a voltage level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopologyKind {
    NodeBreaker,
    #[default]
    BusBreaker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoltageLevel {
    pub id: String,
    pub name: Option<String>,
    pub substation_id: String,
    pub nominal_v: Kilovolts,
    pub low_voltage_limit: Kilovolts,
    pub high_voltage_limit: Kilovolts,
    pub topology_kind: TopologyKind,
    pub identifiable_short_circuit: Option<IdentifiableShortCircuit>,
    pub properties: BTreeMap<String, String>,
}

impl Default for VoltageLevel {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            substation_id: String::new(),
            nominal_v: Kilovolts(0.0),
            low_voltage_limit: Kilovolts::nan(),
            high_voltage_limit: Kilovolts::nan(),
            topology_kind: TopologyKind::BusBreaker,
            identifiable_short_circuit: None,
            properties: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusbarSection {
    pub id: String,
    pub name: Option<String>,
    pub voltage_level_id: String,
    pub v: Kilovolts,
    pub angle: Degrees,
    pub connected: bool,
    pub position: Option<BusbarSectionPosition>,
}

impl Default for BusbarSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            voltage_level_id: String::new(),
            v: Kilovolts::nan(),
            angle: Degrees::nan(),
            connected: true,
            position: None,
        }
    }
}

impl BusbarSection {
    /// Section of `voltage_level_id` at the given (busbar, section) position.
    pub fn positioned(
        id: impl Into<String>,
        voltage_level_id: impl Into<String>,
        busbar_index: u32,
        section_index: u32,
    ) -> Self {
        Self {
            id: id.into(),
            voltage_level_id: voltage_level_id.into(),
            position: Some(BusbarSectionPosition::new(busbar_index, section_index)),
            ..Self::default()
        }
    }
}

/// Electrical bus of the bus view, as computed by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bus {
    pub id: String,
    pub name: Option<String>,
    pub voltage_level_id: String,
    pub v: Kilovolts,
    pub angle: Degrees,
    pub connected_component: Option<i32>,
    pub synchronous_component: Option<i32>,
}

impl Default for Bus {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            voltage_level_id: String::new(),
            v: Kilovolts::nan(),
            angle: Degrees::nan(),
            connected_component: None,
            synchronous_component: None,
        }
    }
}
