use crate::error::TrendzError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

const DEFAULT_API_URL: &str = "https://apis.ccbp.in";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub config_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default, Clone)]
struct ConfigDefaults {
    api_url: Option<String>,
    jwt_token: Option<String>,
    timeout_secs: Option<u64>,
}

/// Values from the command line; `None` falls through to the next source.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load(overrides: ConfigOverrides) -> Result<Self, TrendzError> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trendz-cli");

        let file_config = load_config_file(&config_dir);

        let env = EnvDefaults {
            api_url: std::env::var("TRENDZ_API_URL").ok(),
            token: std::env::var("TRENDZ_JWT_TOKEN").ok(),
            timeout_secs: std::env::var("TRENDZ_TIMEOUT_SECS").ok(),
        };

        Self::resolve(overrides, env, file_config.defaults, config_dir)
    }

    // Priority: CLI flags → env vars → config file → defaults
    fn resolve(
        overrides: ConfigOverrides,
        env: EnvDefaults,
        file: ConfigDefaults,
        config_dir: PathBuf,
    ) -> Result<Self, TrendzError> {
        let api_url = overrides
            .api_url
            .or(env.api_url)
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = overrides.token.or(env.token).or(file.jwt_token);

        let env_timeout = match env.timeout_secs {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                TrendzError::Config(format!("TRENDZ_TIMEOUT_SECS must be a number, got '{}'", raw))
            })?),
            None => None,
        };
        let timeout_secs = overrides
            .timeout_secs
            .or(env_timeout)
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        if timeout_secs == 0 {
            return Err(TrendzError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(AppConfig {
            api_base_url: Self::validate_api_url(&api_url)?,
            token,
            timeout_secs,
            config_dir,
        })
    }

    pub fn validate_api_url(raw: &str) -> Result<Url, TrendzError> {
        let url = Url::parse(raw.trim())?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(TrendzError::Config(format!(
                "Unsupported API URL scheme '{}'. Use http or https",
                other
            ))),
        }
    }
}

#[derive(Debug, Default)]
struct EnvDefaults {
    api_url: Option<String>,
    token: Option<String>,
    timeout_secs: Option<String>,
}

fn load_config_file(config_dir: &Path) -> ConfigFile {
    let config_path = config_dir.join("config.toml");
    if !config_path.exists() {
        return ConfigFile::default();
    }
    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", config_path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", config_path.display(), e);
                ConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!("Could not read {}: {}", config_path.display(), e);
            ConfigFile::default()
        }
    }
}
