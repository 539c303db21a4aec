//! payqr runtime configuration handling

use crate::error::{Error, Result};
use crate::qr::EncoderConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayqrConfig {
    /// Quick-link service configuration
    pub service: ServiceOptions,
    /// Local QR encoder configuration
    pub encoder: EncoderOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl PayqrConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No payqr.toml / payqr.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.service.validate()?;
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["payqr.toml", "payqr.yaml", "payqr.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("payqr");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.service.apply_env_overrides();
        self.encoder.apply_env_overrides();
        self.logging.apply_env_overrides();
    }
}

/// Quick-link image service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceOptions {
    /// Base URL of the hosted QR image service
    pub base_url: String,
    /// Template applied when the payment data does not name one
    pub default_template: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            base_url: "https://img.vietqr.io/image".to_string(),
            default_template: crate::payment::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl ServiceOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(base) = env::var("PAYQR_SERVICE_BASE_URL") {
            self.base_url = base;
        }
        if let Ok(template) = env::var("PAYQR_SERVICE_TEMPLATE") {
            self.default_template = template;
        }
    }

    /// Reject base URLs that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::Config(format!(
                "Unsupported base URL scheme '{other}', expected http or https"
            ))),
        }
    }
}

/// User-friendly encoder overrides that are merged on top of `EncoderConfig::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Override for target image width in pixels.
    pub width: Option<u32>,
    /// Override for quiet-zone margin in modules.
    pub margin: Option<u32>,
    /// Override for foreground color as RGB.
    pub dark: Option<[u8; 3]>,
    /// Override for background color as RGB.
    pub light: Option<[u8; 3]>,
}

impl EncoderOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(width) = env::var("PAYQR_QR_WIDTH") {
            self.width = width.parse::<u32>().ok();
        }
        if let Ok(margin) = env::var("PAYQR_QR_MARGIN") {
            self.margin = margin.parse::<u32>().ok();
        }
    }

    /// Merge overrides onto the default encoder configuration.
    pub fn to_encoder_config(&self) -> EncoderConfig {
        let mut config = EncoderConfig::default();

        if let Some(width) = self.width {
            config.width = width.max(1);
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(dark) = self.dark {
            config.dark = dark;
        }
        if let Some(light) = self.light {
            config.light = light;
        }

        config
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `PAYQR_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("PAYQR_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("PAYQR_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("PAYQR_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("PAYQR_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}
