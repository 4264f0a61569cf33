use anyhow::Result;
use gridscope_core::{ElementType, InfoType};

pub fn handle(element_type: ElementType, info_type: InfoType) -> Result<()> {
    let schema = gridscope_schemas::global()?.get(element_type, info_type)?;
    println!("{schema}");
    Ok(())
}
