//! Busbar/section layout inference for node/breaker voltage levels.
//!
//! The layout is rebuilt from the optional [`BusbarSectionPosition`]
//! extension of each busbar section. Partial or asymmetric information is
//! not guessed at: any gap yields [`TopologySnapshot::default`].
//!
//! [`BusbarSectionPosition`]: gridscope_core::BusbarSectionPosition

use gridscope_core::BusbarSection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwitchKind {
    Breaker,
    Disconnector,
    LoadBreakSwitch,
}

/// Busbar layout of one voltage level, computed fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologySnapshot {
    pub busbar_count: u32,
    pub section_count: u32,
    /// Kinds of the switches between consecutive sections
    pub switch_kinds: Vec<SwitchKind>,
    pub is_retrieved_busbar_sections: bool,
}

impl Default for TopologySnapshot {
    fn default() -> Self {
        Self {
            busbar_count: 1,
            section_count: 1,
            switch_kinds: Vec::new(),
            is_retrieved_busbar_sections: false,
        }
    }
}

/// Infer the busbar layout from the position metadata of `sections`.
///
/// Every section must carry a position and every busbar must reach the same
/// highest section index; otherwise the default single-busbar snapshot is
/// returned. Busbars are assumed to be joined by disconnectors between
/// consecutive sections.
pub fn infer_topology<'a, I>(sections: I) -> TopologySnapshot
where
    I: IntoIterator<Item = &'a BusbarSection>,
{
    let mut busbar_count = 1;
    let mut section_count = 1;
    let mut last_section_by_busbar: BTreeMap<u32, u32> = BTreeMap::new();

    for section in sections {
        let Some(position) = section.position else {
            debug!(
                busbar_section = %section.id,
                "busbar section has no position, using default topology"
            );
            return TopologySnapshot::default();
        };
        busbar_count = busbar_count.max(position.busbar_index);
        section_count = section_count.max(position.section_index);
        let last = last_section_by_busbar
            .entry(position.busbar_index)
            .or_insert(position.section_index);
        *last = (*last).max(position.section_index);
    }

    if last_section_by_busbar.is_empty() {
        return TopologySnapshot::default();
    }

    if let Some((busbar, last)) = last_section_by_busbar
        .iter()
        .find(|(_, last)| **last != section_count)
    {
        debug!(
            busbar,
            last_section = last,
            section_count,
            "non symmetrical busbar layout, using default topology"
        );
        return TopologySnapshot::default();
    }

    TopologySnapshot {
        busbar_count,
        section_count,
        switch_kinds: vec![SwitchKind::Disconnector; (section_count - 1) as usize],
        is_retrieved_busbar_sections: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, busbar: u32, position: u32) -> BusbarSection {
        BusbarSection::positioned(id, "VL", busbar, position)
    }

    #[test]
    fn symmetric_layout_is_retrieved() {
        let sections = vec![
            section("1.1", 1, 1),
            section("1.2", 1, 2),
            section("1.3", 1, 3),
            section("2.1", 2, 1),
            section("2.2", 2, 2),
            section("2.3", 2, 3),
        ];

        let snapshot = infer_topology(&sections);

        assert_eq!(
            snapshot,
            TopologySnapshot {
                busbar_count: 2,
                section_count: 3,
                switch_kinds: vec![SwitchKind::Disconnector, SwitchKind::Disconnector],
                is_retrieved_busbar_sections: true,
            }
        );
    }

    #[test]
    fn one_unpositioned_section_falls_back_to_default() {
        let mut sections = vec![section("1.1", 1, 1), section("1.2", 1, 2)];
        sections.push(BusbarSection {
            id: "loose".into(),
            voltage_level_id: "VL".into(),
            ..BusbarSection::default()
        });

        assert_eq!(infer_topology(&sections), TopologySnapshot::default());
    }

    #[test]
    fn asymmetric_layout_falls_back_to_default() {
        let sections = vec![
            section("A1", 1, 1),
            section("A2", 1, 2),
            section("A3", 1, 3),
            section("B1", 2, 1),
            section("B2", 2, 2),
        ];

        let snapshot = infer_topology(&sections);
        assert_eq!(snapshot, TopologySnapshot::default());
        assert!(!snapshot.is_retrieved_busbar_sections);
    }

    #[test]
    fn no_sections_yields_default() {
        let sections: Vec<BusbarSection> = Vec::new();
        assert_eq!(infer_topology(&sections), TopologySnapshot::default());
    }

    #[test]
    fn single_section_has_no_switches() {
        let sections = vec![section("only", 1, 1)];
        let snapshot = infer_topology(&sections);
        assert!(snapshot.is_retrieved_busbar_sections);
        assert_eq!(snapshot.busbar_count, 1);
        assert_eq!(snapshot.section_count, 1);
        assert!(snapshot.switch_kinds.is_empty());
    }

    #[test]
    fn section_order_does_not_matter() {
        let sections = vec![
            section("2.2", 2, 2),
            section("1.1", 1, 1),
            section("2.1", 2, 1),
            section("1.2", 1, 2),
        ];
        let snapshot = infer_topology(&sections);
        assert_eq!(snapshot.busbar_count, 2);
        assert_eq!(snapshot.section_count, 2);
        assert_eq!(snapshot.switch_kinds, vec![SwitchKind::Disconnector]);
    }

    #[test]
    fn snapshot_serializes_in_camel_case() {
        let json = serde_json::to_value(TopologySnapshot::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "busbarCount": 1,
                "sectionCount": 1,
                "switchKinds": [],
                "isRetrievedBusbarSections": false
            })
        );
    }
}
