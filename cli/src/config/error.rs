use std::fmt;
use std::io;

/// Fatal problems found while loading and resolving the configuration.
/// Any of these aborts the whole load; no partial configuration is kept.
#[derive(Debug)]
pub enum ConfigError {
    MissingEndpoints,
    MissingUrl,
    MissingPath(String),
    InvalidAttribute(String),
    EndpointNotFound { request: String, endpoint: String },
    MissingEndpointReference(String),
    DocumentRead { name: String, source: io::Error },
    Syntax { name: String, message: String },
    ImportCycle(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingEndpoints => write!(f, "Missing endpoints"),
            ConfigError::MissingUrl => write!(f, "Missing URL"),
            ConfigError::MissingPath(endpoint) => {
                write!(f, "Endpoint '{endpoint}' missing path")
            }
            ConfigError::InvalidAttribute(key) => write!(f, "Invalid yaml attribute '{key}'"),
            ConfigError::EndpointNotFound { request, endpoint } => write!(
                f,
                "Request '{request}' couldn't find endpoint '{endpoint}'"
            ),
            ConfigError::MissingEndpointReference(request) => {
                write!(f, "Request '{request}' must name an endpoint")
            }
            ConfigError::DocumentRead { name, source } => {
                write!(f, "Failed to read {name}: {source}")
            }
            ConfigError::Syntax { name, message } => {
                write!(f, "Syntax error in {name}: {message}")
            }
            ConfigError::ImportCycle(name) => {
                write!(f, "Import cycle detected: '{name}' imports itself")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::DocumentRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ConfigError {
    pub fn syntax(name: &str, err: serde_yaml::Error) -> Self {
        ConfigError::Syntax {
            name: name.to_string(),
            message: err.to_string(),
        }
    }
}
