use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use gridscope_core::Network;
use serde::Serialize;
use tracing::info;

pub fn load_network(path: &Path) -> Result<Network> {
    let network = Network::from_path(path)
        .with_context(|| format!("loading network {}", path.display()))?;
    info!(network = network.id(), path = %path.display(), "network loaded");
    Ok(network)
}

/// Write `value` as JSON on stdout, followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)
    } else {
        serde_json::to_writer(&mut out, value)
    }
    .context("serializing output to JSON")?;
    writeln!(out)?;
    Ok(())
}
