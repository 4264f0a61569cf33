use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use gridscope_core::{ElementType, InfoType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridscope", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Configuration file (defaults to <config dir>/gridscope/config.toml)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project equipment of a network into JSON views
    View {
        /// Network JSON document
        #[arg(value_hint = ValueHint::FilePath)]
        network: PathBuf,
        /// Equipment type, e.g. line or two-windings-transformer
        #[arg(long)]
        element_type: ElementType,
        /// View kind: list, form, tab, map or tooltip
        #[arg(long)]
        info_type: InfoType,
        /// Equipment ids (repeatable); all equipment of the type when omitted
        #[arg(long = "id")]
        ids: Vec<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Include every operational limits group, not just the selected one
        #[arg(long)]
        limit_groups: bool,
    },
    /// Print the JSON schema of a view
    Schema {
        /// Equipment type
        #[arg(long)]
        element_type: ElementType,
        /// View kind; only tab views carry a schema
        #[arg(long, default_value = "tab")]
        info_type: InfoType,
    },
    /// List the supported (element type, view) pairs
    Supported {
        /// Output format
        #[arg(long, value_enum, default_value_t = SupportedFormat::Plain)]
        format: SupportedFormat,
    },
    /// Print the busbar layout inferred for a voltage level
    Topology {
        /// Network JSON document
        #[arg(value_hint = ValueHint::FilePath)]
        network: PathBuf,
        /// Voltage level id
        #[arg(long)]
        voltage_level: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SupportedFormat {
    Plain,
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn view_arguments_parse() {
        let cli = Cli::try_parse_from([
            "gridscope",
            "view",
            "grid.json",
            "--element-type",
            "two-windings-transformer",
            "--info-type",
            "TAB",
            "--id",
            "T1",
            "--id",
            "T2",
        ])
        .unwrap();
        match cli.command {
            Commands::View {
                element_type,
                info_type,
                ids,
                pretty,
                ..
            } => {
                assert_eq!(element_type, ElementType::TwoWindingsTransformer);
                assert_eq!(info_type, InfoType::Tab);
                assert_eq!(ids, vec!["T1", "T2"]);
                assert!(!pretty);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn schema_info_type_defaults_to_tab() {
        let cli = Cli::try_parse_from(["gridscope", "schema", "--element-type", "load"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Schema {
                element_type: ElementType::Load,
                info_type: InfoType::Tab
            }
        ));
    }

    #[test]
    fn unknown_element_type_is_rejected() {
        let parsed = Cli::try_parse_from(["gridscope", "schema", "--element-type", "transformer"]);
        assert!(parsed.is_err());
    }
}
