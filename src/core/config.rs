use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for an [`AcmeClient`](crate::runtime::client::AcmeClient)
///
/// # Examples
///
/// ```rust
/// use acmesh_rs::Config;
///
/// let config = Config::builder()
///     .acme_sh_path("/root/.acme.sh/acme.sh")
///     .timeout_secs(300)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the acme.sh executable. A bare name is resolved via `PATH`
    /// at spawn time.
    pub acme_sh_path: PathBuf,

    /// Timeout for a single acme.sh invocation in seconds. `None` means no
    /// timeout; issuance against a slow DNS provider can legitimately take
    /// minutes.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            acme_sh_path: PathBuf::from("acme.sh"),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Create a config builder for fluent configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Locate acme.sh on `PATH`
    ///
    /// Returns a config pointing at the resolved binary, or an error if it
    /// is not installed anywhere on `PATH`.
    pub fn discover() -> Result<Self> {
        let path = which::which("acme.sh")
            .map_err(|_| Error::BinaryNotFound("acme.sh not found on PATH".to_string()))?;
        Ok(Self {
            acme_sh_path: path,
            timeout_secs: None,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.acme_sh_path.as_os_str().is_empty() {
            return Err(Error::configuration("acme.sh path must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::configuration("timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for [`Config`] instances
pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Create a new config builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the path to the acme.sh executable
    pub fn acme_sh_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.acme_sh_path = path.into();
        self
    }

    /// Set the per-invocation timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = Some(timeout_secs);
        self
    }

    /// Build the final configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.acme_sh_path, PathBuf::from("acme.sh"));
        assert_eq!(config.timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .acme_sh_path("/usr/local/bin/acme.sh")
            .timeout_secs(120)
            .build()
            .unwrap();
        assert_eq!(config.acme_sh_path, PathBuf::from("/usr/local/bin/acme.sh"));
        assert_eq!(config.timeout_secs, Some(120));
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = Config::builder().acme_sh_path("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::builder().timeout_secs(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
