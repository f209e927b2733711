use crate::config::ConfigError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum HitError {
    Io(io::Error),
    Config(ConfigError),
    DirectoryNotFound(String),
    EntityNotFound(String),
    Execution(String),
}

impl fmt::Display for HitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitError::Io(err) => write!(f, "IO error: {err}"),
            HitError::Config(err) => write!(f, "{err}"),
            HitError::DirectoryNotFound(path) => write!(
                f,
                "Directory not found: {}",
                crate::core::paths::display_path(std::path::Path::new(path))
            ),
            HitError::EntityNotFound(name) => {
                write!(f, "Could not find request/endpoint {name}")
            }
            HitError::Execution(msg) => write!(f, "Execution failed: {msg}"),
        }
    }
}

impl std::error::Error for HitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HitError::Io(err) => Some(err),
            HitError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HitError {
    fn from(err: io::Error) -> Self {
        HitError::Io(err)
    }
}

impl From<ConfigError> for HitError {
    fn from(err: ConfigError) -> Self {
        HitError::Config(err)
    }
}
