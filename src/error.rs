use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised by the simulation core.
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value the simulation cannot run with
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Analytics need at least one cycle measurement
    #[error("Performance series is empty; at least one cycle is required for analytics")]
    EmptySeries,

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SimError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_names_field() {
        let err = SimError::invalid("buffer_size", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: buffer_size must be greater than zero"
        );
    }

    #[test]
    fn config_error_includes_path() {
        let err = SimError::ConfigRead {
            path: PathBuf::from("codecsim.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("codecsim.toml"));
        assert!(err.to_string().contains("no such file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
