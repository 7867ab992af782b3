use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use actix_web::http::Uri;
use validator::{Validate, ValidationError};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerSettings,
    #[serde(default)]
    #[validate(nested)]
    pub cors: CorsSettings,
    #[serde(default)]
    #[validate(nested)]
    pub model: ModelSettings,
    #[serde(default)]
    #[validate(nested)]
    pub labels: LabelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1, max = 256))]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Browser origins allowed to call the service
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    #[validate(length(min = 1), custom(function = "validate_origins"))]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
    #[serde(default = "default_max_age")]
    pub max_age_secs: usize,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_true(),
            max_age_secs: default_max_age(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://127.0.0.1:8080".to_string(),
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:5500".to_string(),
        "http://localhost:5500".to_string(),
    ]
}

/// Every entry must be `*` or parse as a URI
fn validate_origins(origins: &[String]) -> Result<(), ValidationError> {
    for origin in origins {
        if origin != "*" && origin.parse::<Uri>().is_err() {
            let mut err = ValidationError::new("origin");
            err.message = Some(format!("'{}' is not a valid origin", origin).into());
            return Err(err);
        }
    }
    Ok(())
}

fn default_true() -> bool { true }
fn default_max_age() -> usize { 3600 }

/// Locations of the trained artifacts loaded at startup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModelSettings {
    #[serde(default = "default_classifier_path")]
    #[validate(length(min = 1))]
    pub classifier_path: String,
    #[serde(default = "default_encoder_path")]
    #[validate(length(min = 1))]
    pub encoder_path: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            classifier_path: default_classifier_path(),
            encoder_path: default_encoder_path(),
        }
    }
}

fn default_classifier_path() -> String { "models/mental_health_model.onnx".to_string() }
fn default_encoder_path() -> String { "models/country_encoder.json".to_string() }

/// Messages returned for the two known classifier labels
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LabelSettings {
    /// Message for label 0
    #[serde(default = "default_negative_message")]
    #[validate(length(min = 1))]
    pub negative: String,
    /// Message for label 1
    #[serde(default = "default_positive_message")]
    #[validate(length(min = 1))]
    pub positive: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            negative: default_negative_message(),
            positive: default_positive_message(),
        }
    }
}

pub(crate) fn default_negative_message() -> String {
    "✅ You are mentally fit.".to_string()
}

pub(crate) fn default_positive_message() -> String {
    "⚠️ You might need a mental health check-up. Please consider speaking with a professional."
        .to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PREDICTOR_)
    /// 5. Plain HOST / PORT variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PREDICTOR_SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings = apply_platform_overrides(settings)?;

        finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        finish(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PREDICTOR")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

fn finish(settings: Config) -> Result<Settings, ConfigError> {
    let settings: Settings = settings.try_deserialize()?;
    settings
        .validate()
        .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;
    Ok(settings)
}

/// Container platforms hand out the bind address as plain HOST / PORT
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("HOST") {
        builder = builder.set_override("server.host", host)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
