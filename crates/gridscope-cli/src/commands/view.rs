use std::path::Path;

use anyhow::{Context, Result};
use gridscope_core::{ElementType, InfoType};
use gridscope_views::{project_many, InfoTypeParameters, MapperContext};

use super::util::{load_network, print_json};

pub fn handle(
    network_path: &Path,
    element_type: ElementType,
    info_type: InfoType,
    ids: &[String],
    parameters: &InfoTypeParameters,
    pretty: bool,
) -> Result<()> {
    let network = load_network(network_path)?;
    let ctx = MapperContext::new(&network, parameters);
    let views = project_many(&ctx, element_type, info_type, ids)
        .with_context(|| format!("projecting {element_type} {info_type} views"))?;
    print_json(&views, pretty)
}
