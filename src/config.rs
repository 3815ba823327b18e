use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub classify: ClassifyConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Triple store connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Scheme and host of the store, without port (e.g. `http://localhost`).
    #[serde(default = "default_store_root")]
    pub root: String,
    #[serde(default = "default_store_port")]
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_username")]
    pub username: String,
    /// Name of the environment variable holding the store password.
    #[serde(default = "default_password_env")]
    pub password_env: String,
    /// Request timeout; requests block until the store answers when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Graph upload settings
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Directory the glob pattern is evaluated against.
    #[serde(default = "default_graph_root")]
    pub graph_root: PathBuf,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Named graph the Turtle files are loaded into.
    #[serde(default = "default_graph")]
    pub graph: String,
}

/// Data element classification settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_store_root() -> String {
    "http://star.braindog.net".to_string()
}

fn default_store_port() -> u16 {
    5820
}

fn default_database() -> String {
    "nidm-openneuro".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password_env() -> String {
    "STARDOG_PASSWORD".to_string()
}

fn default_graph_root() -> PathBuf {
    PathBuf::from("simple2_NIDM_examples/datasets.datalad.org/openneuro")
}

fn default_pattern() -> String {
    "*/nidm.ttl".to_string()
}

fn default_graph() -> String {
    "urn:graph".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            upload: UploadConfig::default(),
            classify: ClassifyConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: default_store_root(),
            port: default_store_port(),
            database: default_database(),
            username: default_username(),
            password_env: default_password_env(),
            timeout_secs: None,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            graph_root: default_graph_root(),
            pattern: default_pattern(),
            graph: default_graph(),
        }
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. `explicit` path (the `--config` flag)
    /// 2. Path specified in NIDMSTORE_CONFIG environment variable
    /// 3. ./config.toml in current directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => std::env::var("NIDMSTORE_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config.toml")),
        };

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text without validating it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let root = Url::parse(&self.store.root)
            .with_context(|| format!("store.root is not a valid URL: {}", self.store.root))?;
        if !matches!(root.scheme(), "http" | "https") {
            anyhow::bail!("store.root must use http or https, got {}", root.scheme());
        }
        if root.host_str().is_none() {
            anyhow::bail!("store.root has no host: {}", self.store.root);
        }

        if self.store.port == 0 {
            anyhow::bail!("store.port must be greater than 0");
        }

        if self.store.database.trim().is_empty() {
            anyhow::bail!("store.database must not be empty");
        }

        if self.upload.pattern.trim().is_empty() {
            anyhow::bail!("upload.pattern must not be empty");
        }

        if self.upload.graph.trim().is_empty() {
            anyhow::bail!("upload.graph must not be empty");
        }

        std::env::var(&self.store.password_env).with_context(|| {
            format!(
                "Environment variable {} not set. Set it in your .env file or as an environment variable with the store password.",
                self.store.password_env
            )
        })?;

        Ok(())
    }

    /// Get the directory graph files are discovered under
    pub fn graph_root(&self) -> &Path {
        &self.upload.graph_root
    }

    /// Get the directory classified subsets are written to
    pub fn output_dir(&self) -> &Path {
        &self.classify.output_dir
    }
}
