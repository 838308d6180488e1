//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`PipelineSettings`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `CREATE_RADIX_DAPP__<SECTION>__<KEY>`
//!    (`.env` is loaded into the environment first)
//! 2. Config file: `--config`, else the platform config dir, else
//!    `.create-radix-dapp.toml` in the working directory
//! 3. Built-in defaults (always present)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use radix_create_adapters::package_manager::DEFAULT_INSTALL_ARGS;
use radix_create_core::prelude::{MaterializationFailurePolicy, PipelineSettings};
use radix_create_core::domain::{DEFAULT_BASE_NAMESPACE, StderrPolicy};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "CREATE_RADIX_DAPP";

/// File looked up in the working directory when no other file exists.
pub const LOCAL_CONFIG_FILE: &str = ".create-radix-dapp.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub templates: TemplateConfig,
    pub network: NetworkConfig,
    pub install: InstallConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

/// Where templates come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Prefix joined to every template's remote path.
    pub base_namespace: String,
    /// Serve templates from this directory instead of the network.
    pub local_mirror: Option<PathBuf>,
    /// Write into a non-empty project directory.
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Whole-request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Package manager executable; the platform's npm when unset.
    pub program: Option<String>,
    pub args: Vec<String>,
    pub stderr_policy: StderrPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub on_materialization_failure: MaterializationFailurePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            base_namespace: DEFAULT_BASE_NAMESPACE.to_string(),
            local_mirror: None,
            force: true,
        }
    }
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: DEFAULT_INSTALL_ARGS.iter().map(|a| a.to_string()).collect(),
            stderr_policy: StderrPolicy::default(),
        }
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Load configuration from the process environment and the first config
    /// file found.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (Some(path.clone()), true),
            None => (Self::discover(), false),
        };
        Self::load_from(path.as_deref(), required, None)
    }

    /// Load with an explicit environment map instead of the process
    /// environment.
    pub fn load_from(
        file: Option<&Path>,
        required: bool,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            info!(path = %path.display(), "Loading config file");
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(" ")
                .with_list_parse_key("install.args")
                .try_parsing(true)
                .source(env),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        let app: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        debug!(?app, "Configuration resolved");
        Ok(app)
    }

    /// First existing config file: platform config dir, then the working
    /// directory.
    fn discover() -> Option<PathBuf> {
        [Self::config_path(), PathBuf::from(LOCAL_CONFIG_FILE)]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-radix-dapp.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "radixdlt", "create-radix-dapp")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Settings handed to the pipeline.
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            base_namespace: self.templates.base_namespace.clone(),
            stderr_policy: self.install.stderr_policy,
            on_materialization_failure: self.pipeline.on_materialization_failure,
        }
    }
}
