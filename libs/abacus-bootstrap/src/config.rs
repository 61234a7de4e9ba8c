//! Layered application configuration.
//!
//! Precedence, lowest to highest:
//! 1) built-in defaults
//! 2) YAML file (`--config`)
//! 3) environment (`APP__SECTION__KEY`, e.g. `APP__SERVER__PORT=8080`)
//! 4) CLI overrides (`--port`, `-v`, `--mock`)

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// DSN used by `--mock`.
pub const MEMORY_DSN: &str = "sqlite::memory:";

const ENV_PREFIX: &str = "APP__";

/// CLI arguments that flow into the config merge.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    /// Allowed CORS origins; empty disables CORS, `"*"` allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            body_limit_bytes: default_body_limit_bytes(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_dsn")]
    pub dsn: String,
    #[serde(default = "default_max_conns")]
    pub max_conns: u32,
    #[serde(default)]
    pub min_conns: Option<u32>,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            max_conns: default_max_conns(),
            min_conns: None,
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.dsn.starts_with("sqlite::memory:") || self.dsn.contains("mode=memory")
    }

    /// DSN with any password replaced, safe for logs.
    #[must_use]
    pub fn redacted_dsn(&self) -> String {
        redact_credentials_in_dsn(&self.dsn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `info,calculator=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
            ansi: true,
        }
    }
}

/// Top-level application config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-module sections, deserialized by each module on demand.
    #[serde(default)]
    pub modules: BTreeMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` environment.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or any layer fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment
            .extract()
            .context("failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI flags on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        match args.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }

        if args.mock {
            MEMORY_DSN.clone_into(&mut self.database.dsn);
            self.database.max_conns = 1;
            self.database.min_conns = Some(1);
        }
    }

    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must not be empty");
        }
        if self.server.request_timeout_secs == 0 {
            bail!("server.request_timeout_secs must be greater than zero");
        }
        if self.database.dsn.trim().is_empty() {
            bail!("database.dsn must not be empty");
        }
        if self.database.max_conns == 0 {
            bail!("database.max_conns must be greater than zero");
        }
        Ok(())
    }

    /// Deserialize a module section, falling back to `T::default()` when absent.
    ///
    /// # Errors
    /// Returns an error if the section exists but does not match `T`.
    pub fn module_config<T>(&self, module_name: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.modules.get(module_name) {
            None | Some(serde_json::Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("invalid config for module '{module_name}'")),
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        let mut redacted = self.clone();
        redacted.database.dsn = self.database.redacted_dsn();
        serde_saphyr::to_string(&redacted).map_err(|e| anyhow::anyhow!("failed to render config: {e}"))
    }
}

/// Redact credentials from a DSN for logging.
///
/// A DSN with userinfo that does not parse as a URL is hidden entirely.
#[must_use]
pub fn redact_credentials_in_dsn(dsn: &str) -> String {
    if !dsn.contains('@') {
        return dsn.to_owned();
    }
    match url::Url::parse(dsn) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "***".to_owned(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

fn default_dsn() -> String {
    "sqlite://abacus.db?mode=rwc".to_owned()
}

fn default_max_conns() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_true() -> bool {
    true
}
