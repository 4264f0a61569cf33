use std::io::{self, Write};

use anyhow::Result;
use gridscope_core::{ElementType, InfoType};
use gridscope_views::ViewRegistry;
use serde::Serialize;
use tabwriter::TabWriter;

use super::util::print_json;
use gridscope_cli::SupportedFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportedViews {
    element_type: ElementType,
    info_types: Vec<InfoType>,
}

pub fn handle(format: SupportedFormat) -> Result<()> {
    let registry = ViewRegistry::global();
    let rows: Vec<SupportedViews> = ElementType::ALL
        .into_iter()
        .map(|element_type| SupportedViews {
            element_type,
            info_types: registry.info_types_of(element_type),
        })
        .collect();
    match format {
        SupportedFormat::Plain => print_table(&rows),
        SupportedFormat::Json => print_json(&rows, false),
    }
}

fn print_table(rows: &[SupportedViews]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "ELEMENT TYPE\tVIEWS")?;
    for row in rows {
        let views: Vec<&str> = row.info_types.iter().map(InfoType::as_str).collect();
        writeln!(writer, "{}\t{}", row.element_type, views.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}
