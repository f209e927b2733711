use crate::config::ConfigError;
use crate::core::error::HitError;

/// Exit codes for the hit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General/unspecified error
    GeneralError = 1,
    /// Malformed YAML or unknown attribute
    SyntaxError = 2,
    /// Configuration is well-formed but incomplete or inconsistent
    ConfigError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Request or endpoint not found
    NotFoundError = 5,
    /// curl or jq failed
    ExecutionError = 6,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(error: &ConfigError) -> Self {
        match error {
            ConfigError::Syntax { .. } | ConfigError::InvalidAttribute(_) => ExitCode::SyntaxError,
            ConfigError::DocumentRead { .. } => ExitCode::FileError,
            ConfigError::MissingEndpoints
            | ConfigError::MissingUrl
            | ConfigError::MissingPath(_)
            | ConfigError::EndpointNotFound { .. }
            | ConfigError::MissingEndpointReference(_)
            | ConfigError::ImportCycle(_) => ExitCode::ConfigError,
        }
    }
}

impl From<&HitError> for ExitCode {
    fn from(error: &HitError) -> Self {
        match error {
            HitError::Io(_) | HitError::DirectoryNotFound(_) => ExitCode::FileError,
            HitError::Config(err) => ExitCode::from(err),
            HitError::EntityNotFound(_) => ExitCode::NotFoundError,
            HitError::Execution(_) => ExitCode::ExecutionError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(hit_error) = error.downcast_ref::<HitError>() {
            ExitCode::from(hit_error)
        } else if let Some(config_error) = error.downcast_ref::<ConfigError>() {
            ExitCode::from(config_error)
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
