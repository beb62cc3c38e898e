use std::env::VarError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("{err}: {env_name}")]
    EnvironmentVariable { env_name: String, err: VarError },
    #[error("invalid flag value for {name}: {value:?}")]
    InvalidFlag { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_variable_display() {
        let err = Error::EnvironmentVariable {
            env_name: "NAN_FILTER_VERBOSE".to_string(),
            err: VarError::NotPresent,
        };
        assert_eq!(
            err.to_string(),
            "environment variable not found: NAN_FILTER_VERBOSE"
        );
    }

    #[test]
    fn test_invalid_flag_display() {
        let err = Error::InvalidFlag {
            name: "NAN_FILTER_REMOVE_NAN".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid flag value for NAN_FILTER_REMOVE_NAN: \"maybe\""
        );
    }
}
