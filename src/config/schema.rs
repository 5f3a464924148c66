use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

// ── Top-level config ──────────────────────────────────────────────

/// Top-level sectoolbox configuration, loaded from `config.toml`.
///
/// Resolution order: `--config-dir` flag → `SECTOOLBOX_CONFIG_DIR` env →
/// `~/.sectoolbox/config.toml`. A missing file is not an error; defaults
/// apply and `save` writes them out on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Tool descriptor catalog backend (`[catalog]`).
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Delegated capability endpoints (`[capability]`).
    #[serde(default)]
    pub capability: CapabilityConfig,

    /// Gateway server configuration (`[gateway]`).
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Simulation settings (`[simulation]`).
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            catalog: CatalogConfig::default(),
            capability: CapabilityConfig::default(),
            gateway: GatewayConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

// ── Catalog ──────────────────────────────────────────────────────

/// Tool catalog configuration (`[catalog]` section).
///
/// Without a `base_url` the built-in demo catalog is served.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Content store base URL (e.g. "https://xyz.supabase.co").
    pub base_url: Option<String>,
    /// Anonymous/service key sent as `apikey` + bearer token.
    pub api_key: Option<String>,
}

// ── Capability ───────────────────────────────────────────────────

/// Delegated capability configuration (`[capability]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityConfig {
    /// Function host base URL. Default: local development stack.
    #[serde(default = "default_capability_base_url")]
    pub base_url: String,
    /// Key sent as `apikey` + bearer token, when the host requires one.
    pub api_key: Option<String>,
    /// Whole-request timeout in seconds. Default: `30`.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds. Default: `10`.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_capability_base_url() -> String {
    "http://127.0.0.1:54321".into()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            base_url: default_capability_base_url(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// ── Gateway ──────────────────────────────────────────────────────

/// Gateway server configuration (`[gateway]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway port (default: 42751)
    #[serde(default = "default_gateway_port")]
    pub port: u16,
    /// Gateway host (default: 127.0.0.1)
    #[serde(default = "default_gateway_host")]
    pub host: String,
}

fn default_gateway_port() -> u16 {
    42751
}

fn default_gateway_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_gateway_port(),
            host: default_gateway_host(),
        }
    }
}

// ── Simulation ───────────────────────────────────────────────────

/// Simulation configuration (`[simulation]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed for reproducible simulated runs. Unset: OS entropy.
    pub seed: Option<u64>,
}

// ── Load / save ──────────────────────────────────────────────────

impl Config {
    /// Resolve the config directory: explicit flag first (with `~` expansion),
    /// then the env override, then `~/.sectoolbox`.
    pub fn resolve_dir(flag: Option<&str>) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(PathBuf::from(shellexpand::tilde(dir).into_owned()));
        }
        if let Ok(dir) = std::env::var("SECTOOLBOX_CONFIG_DIR") {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(shellexpand::tilde(&dir).into_owned()));
            }
        }
        let dirs = UserDirs::new().context("cannot determine home directory")?;
        Ok(dirs.home_dir().join(".sectoolbox"))
    }

    pub async fn load(config_dir: Option<&str>) -> Result<Self> {
        let dir = Self::resolve_dir(config_dir)?;
        Self::load_from_dir(&dir).await
    }

    pub async fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join("config.toml");
        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<Config>(&raw)
                .with_context(|| format!("invalid config at {}", path.display()))?
        } else {
            Config::default()
        };
        config.config_path = path;
        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        let serialized = toml::to_string_pretty(self).context("failed to serialize config")?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut file = fs::File::create(&self.config_path)
            .await
            .with_context(|| format!("failed to write {}", self.config_path.display()))?;
        file.write_all(serialized.as_bytes()).await?;
        Ok(())
    }
}
