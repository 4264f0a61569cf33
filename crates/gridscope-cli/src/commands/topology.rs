use std::path::Path;

use anyhow::{bail, Result};
use gridscope_core::TopologyKind;
use gridscope_views::infer_topology;

use super::util::{load_network, print_json};

pub fn handle(network_path: &Path, voltage_level_id: &str, pretty: bool) -> Result<()> {
    let network = load_network(network_path)?;
    let Some(voltage_level) = network.voltage_level(voltage_level_id) else {
        bail!("voltage level not found: {voltage_level_id}");
    };
    if voltage_level.topology_kind != TopologyKind::NodeBreaker {
        bail!("voltage level {voltage_level_id} is not node/breaker; no busbar layout to infer");
    }
    let snapshot = infer_topology(network.busbar_sections_of(voltage_level_id));
    print_json(&snapshot, pretty)
}
