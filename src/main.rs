use anyhow::Context;
use clap::Parser;
use collection_provisioner::config::settings_file::load_settings;
use collection_provisioner::config::{Command, LogFormat};
use collection_provisioner::core::naming::parameterize;
use collection_provisioner::utils::error::ErrorSeverity;
use collection_provisioner::utils::logger;
use collection_provisioner::{
    Account, CliConfig, CollectionProvisioner, ProvisionError, Settings, SolrAdminClient,
    SolrConfig,
};
use std::path::Path;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    if let Err(e) = run(config).await {
        match e.downcast_ref::<ProvisionError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Provisioning failed: {} (Severity: {:?}, retryable: {})",
                    e,
                    err.severity(),
                    err.is_retryable()
                );
                tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());

                let exit_code = match err.severity() {
                    ErrorSeverity::Config => 1,
                    ErrorSeverity::Remote => 2,
                    ErrorSeverity::Internal => 3,
                };
                std::process::exit(exit_code);
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(3);
            }
        }
    }
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    let solr = SolrConfig::from_env()?;
    tracing::debug!("Solr base URL: {}", solr.redacted());

    match config.command {
        Command::Account { tenant, settings } => {
            let settings = read_settings(settings.as_deref())?;
            let provisioner = CollectionProvisioner::new(SolrAdminClient::new(&solr)?, &solr);

            let mut account = Account::new(tenant, settings);
            let endpoint = provisioner.provision_for_account(&mut account).await?;

            println!("{}", serde_json::to_string_pretty(&endpoint)?);
        }
        Command::Named { name, settings } => {
            let settings = read_settings(settings.as_deref())?;
            let provisioner = CollectionProvisioner::new(SolrAdminClient::new(&solr)?, &solr);

            let outcome = provisioner.provision_named(&name, &settings).await?;
            tracing::info!("✅ Collection {}: {:?}", name, outcome);
        }
        Command::Url { tenant } => {
            let name = parameterize(&tenant)?;
            let url = solr.collection_url(&name)?;

            println!("{}\t{}", name, url);
        }
    }

    Ok(())
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => load_settings(path)
            .with_context(|| format!("reading collection settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}
