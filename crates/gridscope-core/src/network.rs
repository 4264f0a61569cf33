//! Network container and the borrowed equipment handle.
//!
//! A [`Network`] is loaded once from a [`NetworkData`] document and only read
//! afterwards. Lookups go through an id index built at load time; the
//! container never hands out mutable access, so it can be shared freely
//! between threads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{GridscopeError, GridscopeResult};
use crate::kinds::ElementType;
use crate::model::*;

/// Serialized form of a network: flat lists of entities, linked by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkData {
    pub id: String,
    pub substations: Vec<Substation>,
    pub voltage_levels: Vec<VoltageLevel>,
    pub busbar_sections: Vec<BusbarSection>,
    pub buses: Vec<Bus>,
    pub lines: Vec<Line>,
    pub tie_lines: Vec<TieLine>,
    pub hvdc_lines: Vec<HvdcLine>,
    pub two_windings_transformers: Vec<TwoWindingsTransformer>,
    pub three_windings_transformers: Vec<ThreeWindingsTransformer>,
    pub generators: Vec<Generator>,
    pub batteries: Vec<Battery>,
    pub loads: Vec<Load>,
    pub shunt_compensators: Vec<ShuntCompensator>,
    pub static_var_compensators: Vec<StaticVarCompensator>,
    pub lcc_converter_stations: Vec<LccConverterStation>,
    pub vsc_converter_stations: Vec<VscConverterStation>,
    pub dangling_lines: Vec<DanglingLine>,
}

/// Borrowed handle to one entity of a [`Network`].
#[derive(Debug, Clone, Copy)]
pub enum Identifiable<'a> {
    Substation(&'a Substation),
    VoltageLevel(&'a VoltageLevel),
    Line(&'a Line),
    TieLine(&'a TieLine),
    HvdcLine(&'a HvdcLine),
    TwoWindingsTransformer(&'a TwoWindingsTransformer),
    ThreeWindingsTransformer(&'a ThreeWindingsTransformer),
    Generator(&'a Generator),
    Battery(&'a Battery),
    Load(&'a Load),
    ShuntCompensator(&'a ShuntCompensator),
    StaticVarCompensator(&'a StaticVarCompensator),
    LccConverterStation(&'a LccConverterStation),
    VscConverterStation(&'a VscConverterStation),
    DanglingLine(&'a DanglingLine),
    BusbarSection(&'a BusbarSection),
    Bus(&'a Bus),
}

macro_rules! identity_of {
    ($handle:expr, $inner:ident => $body:expr) => {
        match $handle {
            Identifiable::Substation($inner) => $body,
            Identifiable::VoltageLevel($inner) => $body,
            Identifiable::Line($inner) => $body,
            Identifiable::TieLine($inner) => $body,
            Identifiable::HvdcLine($inner) => $body,
            Identifiable::TwoWindingsTransformer($inner) => $body,
            Identifiable::ThreeWindingsTransformer($inner) => $body,
            Identifiable::Generator($inner) => $body,
            Identifiable::Battery($inner) => $body,
            Identifiable::Load($inner) => $body,
            Identifiable::ShuntCompensator($inner) => $body,
            Identifiable::StaticVarCompensator($inner) => $body,
            Identifiable::LccConverterStation($inner) => $body,
            Identifiable::VscConverterStation($inner) => $body,
            Identifiable::DanglingLine($inner) => $body,
            Identifiable::BusbarSection($inner) => $body,
            Identifiable::Bus($inner) => $body,
        }
    };
}

impl<'a> Identifiable<'a> {
    pub fn id(&self) -> &'a str {
        identity_of!(*self, inner => inner.id.as_str())
    }

    pub fn name(&self) -> Option<&'a str> {
        identity_of!(*self, inner => inner.name.as_deref())
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Identifiable::Substation(_) => ElementType::Substation,
            Identifiable::VoltageLevel(_) => ElementType::VoltageLevel,
            Identifiable::Line(_) => ElementType::Line,
            Identifiable::TieLine(_) => ElementType::TieLine,
            Identifiable::HvdcLine(_) => ElementType::HvdcLine,
            Identifiable::TwoWindingsTransformer(_) => ElementType::TwoWindingsTransformer,
            Identifiable::ThreeWindingsTransformer(_) => ElementType::ThreeWindingsTransformer,
            Identifiable::Generator(_) => ElementType::Generator,
            Identifiable::Battery(_) => ElementType::Battery,
            Identifiable::Load(_) => ElementType::Load,
            Identifiable::ShuntCompensator(_) => ElementType::ShuntCompensator,
            Identifiable::StaticVarCompensator(_) => ElementType::StaticVarCompensator,
            Identifiable::LccConverterStation(_) => ElementType::LccConverterStation,
            Identifiable::VscConverterStation(_) => ElementType::VscConverterStation,
            Identifiable::DanglingLine(_) => ElementType::DanglingLine,
            Identifiable::BusbarSection(_) => ElementType::BusbarSection,
            Identifiable::Bus(_) => ElementType::Bus,
        }
    }
}

/// Read-only, id-indexed network model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "NetworkData")]
pub struct Network {
    data: NetworkData,
    index: HashMap<String, (ElementType, usize)>,
}

impl From<NetworkData> for Network {
    fn from(data: NetworkData) -> Self {
        let mut index = HashMap::new();
        macro_rules! register {
            ($element_type:expr, $items:expr) => {
                for (position, item) in $items.iter().enumerate() {
                    index
                        .entry(item.id.clone())
                        .or_insert(($element_type, position));
                }
            };
        }
        register!(ElementType::Substation, data.substations);
        register!(ElementType::VoltageLevel, data.voltage_levels);
        register!(ElementType::BusbarSection, data.busbar_sections);
        register!(ElementType::Bus, data.buses);
        register!(ElementType::Line, data.lines);
        register!(ElementType::TieLine, data.tie_lines);
        register!(ElementType::HvdcLine, data.hvdc_lines);
        register!(
            ElementType::TwoWindingsTransformer,
            data.two_windings_transformers
        );
        register!(
            ElementType::ThreeWindingsTransformer,
            data.three_windings_transformers
        );
        register!(ElementType::Generator, data.generators);
        register!(ElementType::Battery, data.batteries);
        register!(ElementType::Load, data.loads);
        register!(ElementType::ShuntCompensator, data.shunt_compensators);
        register!(
            ElementType::StaticVarCompensator,
            data.static_var_compensators
        );
        register!(
            ElementType::LccConverterStation,
            data.lcc_converter_stations
        );
        register!(
            ElementType::VscConverterStation,
            data.vsc_converter_stations
        );
        register!(ElementType::DanglingLine, data.dangling_lines);
        Self { data, index }
    }
}

impl Network {
    /// Parse a network document.
    pub fn from_json_str(json: &str) -> GridscopeResult<Self> {
        let data: NetworkData = serde_json::from_str(json)?;
        Ok(Self::from(data))
    }

    /// Read and parse a network document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> GridscopeResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents).map_err(|err| match err {
            GridscopeError::Parse(message) => {
                GridscopeError::Parse(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Resolve any equipment by id.
    pub fn identifiable(&self, id: &str) -> Option<Identifiable<'_>> {
        let (element_type, position) = *self.index.get(id)?;
        self.handle(element_type, position)
    }

    fn handle(&self, element_type: ElementType, position: usize) -> Option<Identifiable<'_>> {
        let d = &self.data;
        Some(match element_type {
            ElementType::Substation => Identifiable::Substation(d.substations.get(position)?),
            ElementType::VoltageLevel => {
                Identifiable::VoltageLevel(d.voltage_levels.get(position)?)
            }
            ElementType::Line => Identifiable::Line(d.lines.get(position)?),
            ElementType::TieLine => Identifiable::TieLine(d.tie_lines.get(position)?),
            ElementType::HvdcLine => Identifiable::HvdcLine(d.hvdc_lines.get(position)?),
            ElementType::TwoWindingsTransformer => {
                Identifiable::TwoWindingsTransformer(d.two_windings_transformers.get(position)?)
            }
            ElementType::ThreeWindingsTransformer => {
                Identifiable::ThreeWindingsTransformer(d.three_windings_transformers.get(position)?)
            }
            ElementType::Generator => Identifiable::Generator(d.generators.get(position)?),
            ElementType::Battery => Identifiable::Battery(d.batteries.get(position)?),
            ElementType::Load => Identifiable::Load(d.loads.get(position)?),
            ElementType::ShuntCompensator => {
                Identifiable::ShuntCompensator(d.shunt_compensators.get(position)?)
            }
            ElementType::StaticVarCompensator => {
                Identifiable::StaticVarCompensator(d.static_var_compensators.get(position)?)
            }
            ElementType::LccConverterStation => {
                Identifiable::LccConverterStation(d.lcc_converter_stations.get(position)?)
            }
            ElementType::VscConverterStation => {
                Identifiable::VscConverterStation(d.vsc_converter_stations.get(position)?)
            }
            ElementType::DanglingLine => {
                Identifiable::DanglingLine(d.dangling_lines.get(position)?)
            }
            ElementType::BusbarSection => {
                Identifiable::BusbarSection(d.busbar_sections.get(position)?)
            }
            ElementType::Bus => Identifiable::Bus(d.buses.get(position)?),
        })
    }

    /// Every element of one type, in document order.
    pub fn elements(&self, element_type: ElementType) -> Vec<Identifiable<'_>> {
        let count = match element_type {
            ElementType::Substation => self.data.substations.len(),
            ElementType::VoltageLevel => self.data.voltage_levels.len(),
            ElementType::Line => self.data.lines.len(),
            ElementType::TieLine => self.data.tie_lines.len(),
            ElementType::HvdcLine => self.data.hvdc_lines.len(),
            ElementType::TwoWindingsTransformer => self.data.two_windings_transformers.len(),
            ElementType::ThreeWindingsTransformer => self.data.three_windings_transformers.len(),
            ElementType::Generator => self.data.generators.len(),
            ElementType::Battery => self.data.batteries.len(),
            ElementType::Load => self.data.loads.len(),
            ElementType::ShuntCompensator => self.data.shunt_compensators.len(),
            ElementType::StaticVarCompensator => self.data.static_var_compensators.len(),
            ElementType::LccConverterStation => self.data.lcc_converter_stations.len(),
            ElementType::VscConverterStation => self.data.vsc_converter_stations.len(),
            ElementType::DanglingLine => self.data.dangling_lines.len(),
            ElementType::BusbarSection => self.data.busbar_sections.len(),
            ElementType::Bus => self.data.buses.len(),
        };
        (0..count)
            .filter_map(|position| self.handle(element_type, position))
            .collect()
    }

    pub fn substation(&self, id: &str) -> Option<&Substation> {
        match self.identifiable(id)? {
            Identifiable::Substation(substation) => Some(substation),
            _ => None,
        }
    }

    pub fn voltage_level(&self, id: &str) -> Option<&VoltageLevel> {
        match self.identifiable(id)? {
            Identifiable::VoltageLevel(voltage_level) => Some(voltage_level),
            _ => None,
        }
    }

    pub fn dangling_line(&self, id: &str) -> Option<&DanglingLine> {
        match self.identifiable(id)? {
            Identifiable::DanglingLine(dangling_line) => Some(dangling_line),
            _ => None,
        }
    }

    /// LCC or VSC converter station with this id.
    pub fn converter_station(&self, id: &str) -> Option<Identifiable<'_>> {
        match self.identifiable(id)? {
            station @ (Identifiable::LccConverterStation(_)
            | Identifiable::VscConverterStation(_)) => Some(station),
            _ => None,
        }
    }

    pub fn voltage_levels_of<'a>(
        &'a self,
        substation_id: &'a str,
    ) -> impl Iterator<Item = &'a VoltageLevel> + 'a {
        self.data
            .voltage_levels
            .iter()
            .filter(move |vl| vl.substation_id == substation_id)
    }

    pub fn busbar_sections_of<'a>(
        &'a self,
        voltage_level_id: &'a str,
    ) -> impl Iterator<Item = &'a BusbarSection> + 'a {
        self.data
            .busbar_sections
            .iter()
            .filter(move |section| section.voltage_level_id == voltage_level_id)
    }

    /// HVDC line one of whose ends is the given converter station.
    pub fn hvdc_line_of(&self, converter_station_id: &str) -> Option<&HvdcLine> {
        self.data.hvdc_lines.iter().find(|line| {
            line.converter_station1_id == converter_station_id
                || line.converter_station2_id == converter_station_id
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Kilovolts;

    fn small_network() -> Network {
        Network::from(NetworkData {
            id: "grid".into(),
            substations: vec![Substation {
                id: "S1".into(),
                country: Some("FR".into()),
                ..Substation::default()
            }],
            voltage_levels: vec![
                VoltageLevel {
                    id: "VL1".into(),
                    substation_id: "S1".into(),
                    nominal_v: Kilovolts(400.0),
                    ..VoltageLevel::default()
                },
                VoltageLevel {
                    id: "VL2".into(),
                    substation_id: "S1".into(),
                    nominal_v: Kilovolts(225.0),
                    ..VoltageLevel::default()
                },
            ],
            loads: vec![Load {
                id: "LD1".into(),
                name: Some("Load one".into()),
                terminal: Terminal::new("VL2"),
                ..Load::default()
            }],
            lcc_converter_stations: vec![LccConverterStation {
                id: "LCC1".into(),
                terminal: Terminal::new("VL1"),
                ..LccConverterStation::default()
            }],
            hvdc_lines: vec![HvdcLine {
                id: "HVDC1".into(),
                converter_station1_id: "LCC1".into(),
                converter_station2_id: "LCC2".into(),
                ..HvdcLine::default()
            }],
            ..NetworkData::default()
        })
    }

    #[test]
    fn identifiable_resolves_by_id() {
        let network = small_network();
        let load = network.identifiable("LD1").unwrap();
        assert_eq!(load.element_type(), ElementType::Load);
        assert_eq!(load.id(), "LD1");
        assert_eq!(load.name(), Some("Load one"));
        assert!(network.identifiable("missing").is_none());
    }

    #[test]
    fn typed_lookups_reject_other_types() {
        let network = small_network();
        assert!(network.voltage_level("VL1").is_some());
        assert!(network.voltage_level("LD1").is_none());
        assert!(network.substation("S1").is_some());
        assert!(network.converter_station("LCC1").is_some());
        assert!(network.converter_station("VL1").is_none());
    }

    #[test]
    fn containment_queries() {
        let network = small_network();
        let ids: Vec<&str> = network
            .voltage_levels_of("S1")
            .map(|vl| vl.id.as_str())
            .collect();
        assert_eq!(ids, vec!["VL1", "VL2"]);
        assert_eq!(network.hvdc_line_of("LCC1").unwrap().id, "HVDC1");
        assert!(network.hvdc_line_of("LD1").is_none());
        assert_eq!(network.elements(ElementType::VoltageLevel).len(), 2);
        assert!(network.elements(ElementType::Bus).is_empty());
    }

    #[test]
    fn parses_network_documents() {
        let network = Network::from_json_str(
            r#"{
                "id": "doc",
                "voltageLevels": [{"id": "VL1", "substationId": "S1", "nominalV": 63.0}],
                "loads": [{"id": "L1", "terminal": {"voltageLevelId": "VL1"}, "p0": 5.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(network.id(), "doc");
        match network.identifiable("L1").unwrap() {
            Identifiable::Load(load) => {
                assert_eq!(load.p0.value(), 5.0);
                assert!(load.terminal.p.is_nan());
            }
            other => panic!("expected a load, got {:?}", other.element_type()),
        }
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        let err = Network::from_json_str("{\"loads\": 3}").unwrap_err();
        assert!(matches!(err, GridscopeError::Parse(_)));
    }
}
