use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gridscope_cli::{load_config, Cli, Commands, GridscopeConfig};
use gridscope_schemas::SchemaCache;
use tracing::{debug, error};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");
    init_schemas(&config)?;

    match &cli.command {
        Commands::View {
            network,
            element_type,
            info_type,
            ids,
            pretty,
            limit_groups,
        } => {
            let mut parameters = config.views.parameters();
            parameters.load_operational_limit_groups |= *limit_groups;
            commands::view::handle(
                network,
                *element_type,
                *info_type,
                ids,
                &parameters,
                *pretty || config.output.pretty,
            )
        }
        Commands::Schema {
            element_type,
            info_type,
        } => commands::schema::handle(*element_type, *info_type),
        Commands::Supported { format } => commands::supported::handle(*format),
        Commands::Topology {
            network,
            voltage_level,
        } => commands::topology::handle(network, voltage_level, config.output.pretty),
        Commands::Completions { shell, out } => {
            commands::completions::handle(*shell, out.as_deref())
        }
    }
}

fn init_schemas(config: &GridscopeConfig) -> Result<()> {
    let cache = match &config.schemas.dir {
        Some(dir) => SchemaCache::load_from_dir(dir)
            .with_context(|| format!("loading schemas from {}", dir.display()))?,
        None => SchemaCache::load_embedded().context("loading embedded schemas")?,
    };
    gridscope_schemas::init_global(cache)?;
    Ok(())
}
