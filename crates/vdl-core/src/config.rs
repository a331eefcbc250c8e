use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::checksum::DigestAlgorithm;
use crate::retry::RetryPolicy;
use crate::transport::HttpOptions;

/// Backoff between retries (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms; 0 = retry immediately).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        let base = Duration::try_from_secs_f64(self.base_delay_secs).unwrap_or(Duration::ZERO);
        RetryPolicy::exponential(base, Duration::from_secs(self.max_delay_secs))
    }
}

/// Transfer tuning for the curl transport (`[http]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Hard wall-clock limit for one attempt.
    pub timeout_secs: u64,
    /// Abort when throughput stays below this many bytes/sec...
    pub low_speed_limit: u32,
    /// ...for this many seconds.
    pub low_speed_time_secs: u64,
    pub max_redirections: u32,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 3600,
            low_speed_limit: 1024,
            low_speed_time_secs: 60,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    pub fn options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            low_speed_limit: self.low_speed_limit,
            low_speed_time: Duration::from_secs(self.low_speed_time_secs),
            max_redirections: self.max_redirections,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Global configuration loaded from `~/.config/vdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VdlConfig {
    /// Algorithm used when a command or manifest entry does not name one.
    pub default_algorithm: DigestAlgorithm,
    /// Retries per download when a command or manifest entry does not set them.
    pub retries: u32,
    /// Optional backoff; if missing, retries happen immediately.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Optional transfer tuning; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for VdlConfig {
    fn default() -> Self {
        Self {
            default_algorithm: DigestAlgorithm::Sha256,
            retries: 3,
            retry: None,
            http: None,
        }
    }
}

impl VdlConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::policy)
            .unwrap_or_else(RetryPolicy::immediate)
    }

    pub fn http_options(&self) -> HttpOptions {
        self.http.clone().unwrap_or_default().options()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VdlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
