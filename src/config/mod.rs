pub mod settings_file;
pub mod solr;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "collection-provisioner")]
#[command(about = "Provision per-tenant Solr collections through the Collections API")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create the tenant's collection if missing and print its endpoint as JSON
    Account {
        #[arg(long)]
        tenant: String,

        /// TOML or JSON file with snake-cased collection settings
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Create a collection that belongs to no account
    Named {
        name: String,

        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Print the collection name and endpoint URL a tenant would get
    Url {
        #[arg(long)]
        tenant: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}
