//! Configuration for the intake web service

use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream backend configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 5000)
    pub port: u16,
    /// Maximum request size (default: "10MB")
    pub max_request_size: String,
    /// Request timeout in seconds (default: 60)
    pub request_timeout_seconds: u64,
}

/// Upstream inference and storage backends
///
/// Both are optional: with no inference URL the service answers annotation
/// requests from the built-in payload, and with no storage URL accepted
/// intake records are not forwarded anywhere.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Inference backend URL (e.g. "http://localhost:8000/api/search")
    pub inference_url: Option<String>,
    /// Storage backend URL accepting intake records via POST
    pub storage_url: Option<String>,
    /// Timeout for upstream requests in seconds (default: 30)
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

fn default_upstream_timeout() -> u64 {
    30
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            inference_url: None,
            storage_url: None,
            timeout_seconds: default_upstream_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_request_size: "10MB".to_string(),
            request_timeout_seconds: 60,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.upstream.timeout_seconds == 0 {
            return Err("Upstream timeout must be greater than 0".to_string());
        }
        for url in [&self.upstream.inference_url, &self.upstream.storage_url]
            .into_iter()
            .flatten()
        {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("Upstream URL must be http(s): {}", url));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.upstream.inference_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_upstream() {
        let mut config = ServiceConfig::default();
        config.upstream.inference_url = Some("ftp://example".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ServiceConfig::default();
        config.upstream.inference_url = Some("http://localhost:8000/api/search".to_string());
        let toml_text = toml::to_string_pretty(&config).unwrap();
        let back: ServiceConfig = toml::from_str(&toml_text).unwrap();
        assert_eq!(back.upstream.inference_url, config.upstream.inference_url);
        assert_eq!(back.upstream.timeout_seconds, 30);
    }
}
