use crate::Result;
use crate::errors::Error;
use crate::filter::FilterOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const ENV_REMOVE_NAN: &str = "NAN_FILTER_REMOVE_NAN";
pub const ENV_VERBOSE: &str = "NAN_FILTER_VERBOSE";

// TOML configuration structure
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    filter: FilterConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub remove_nan: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl FilterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.filter)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Overrides fields with `NAN_FILTER_REMOVE_NAN` / `NAN_FILTER_VERBOSE` when they are set.
    pub fn with_env_overrides(self) -> Result<Self> {
        Ok(FilterConfig {
            remove_nan: env_flag(ENV_REMOVE_NAN)?.unwrap_or(self.remove_nan),
            verbose: env_flag(ENV_VERBOSE)?.unwrap_or(self.verbose),
        })
    }
}

impl From<FilterConfig> for FilterOptions {
    fn from(config: FilterConfig) -> Self {
        FilterOptions {
            remove_nan: config.remove_nan,
            verbose: config.verbose,
        }
    }
}

pub fn get(name: &str) -> Result<String> {
    std::env::var(name).map_err(|err| Error::EnvironmentVariable {
        env_name: name.to_string(),
        err,
    })
}

fn env_flag(name: &str) -> Result<Option<bool>> {
    match get(name) {
        Ok(value) => parse_flag(name, &value).map(Some),
        Err(Error::EnvironmentVariable {
            err: std::env::VarError::NotPresent,
            ..
        }) => Ok(None),
        Err(err) => Err(err),
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidFlag {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
