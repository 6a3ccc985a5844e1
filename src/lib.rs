pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::SolrAdminClient;
pub use config::solr::SolrConfig;
pub use core::provisioner::{CollectionProvisioner, ProvisionOutcome};
pub use domain::model::{Account, CollectionEndpoint, Settings};
pub use utils::error::{ProvisionError, Result};
