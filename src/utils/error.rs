use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Admin API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Admin API returned {status}: {message}")]
    AdminApi { status: u16, message: String },

    #[error("Malformed admin API response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Tenant '{tenant}' does not produce a usable collection name")]
    InvalidTenant { tenant: String },

    #[error("Account already has an endpoint for collection '{collection}'")]
    EndpointAlreadyAttached { collection: String },

    #[error("Settings parse error: {message}")]
    SettingsParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input or configuration; retrying without changes will not help.
    Config,
    /// Remote state unknown; re-check on retry.
    Remote,
    Internal,
}

impl ProvisionError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration { .. }
            | Self::InvalidConfigValue { .. }
            | Self::InvalidTenant { .. }
            | Self::SettingsParse { .. }
            | Self::EndpointAlreadyAttached { .. } => ErrorSeverity::Config,
            Self::Transport(_) | Self::AdminApi { .. } | Self::MalformedResponse { .. } => {
                ErrorSeverity::Remote
            }
            Self::Io(_) | Self::Serialization(_) => ErrorSeverity::Internal,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::AdminApi { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Solr answers a duplicate CREATE with a 400 whose body names the existing collection.
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::AdminApi { message, .. } => message.to_ascii_lowercase().contains("already exists"),
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Transport(_) => "Check that Solr is reachable at the configured host and port",
            Self::AdminApi { .. } | Self::MalformedResponse { .. } => {
                "The collection state is unknown; re-run provisioning to re-check it"
            }
            Self::Configuration { .. } | Self::InvalidConfigValue { .. } => {
                "Review SOLR_URL or the SOLR_ADMIN_USER/SOLR_ADMIN_PASSWORD/SOLR_HOST/SOLR_PORT variables"
            }
            Self::InvalidTenant { .. } => "Use a tenant name containing at least one letter or digit",
            Self::EndpointAlreadyAttached { .. } => "The account is already provisioned",
            Self::SettingsParse { .. } => "Fix the collection settings file",
            Self::Io(_) | Self::Serialization(_) => "Check file permissions and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the Solr admin API".to_string(),
            Self::AdminApi { status, .. } => {
                format!("The Solr admin API rejected the request (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_create_is_recognized() {
        let err = ProvisionError::AdminApi {
            status: 400,
            message: "collection already exists: acme-corp".to_string(),
        };
        assert!(err.is_already_exists());
        assert!(!err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Remote);
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = ProvisionError::AdminApi {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
        assert!(!err.is_already_exists());
    }

    #[test]
    fn test_configuration_severity() {
        let err = ProvisionError::configuration("missing host");
        assert_eq!(err.severity(), ErrorSeverity::Config);
        assert_eq!(err.to_string(), "Configuration error: missing host");
    }
}
