use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use splash_domain::TransitionConfig;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides (`SPLASH__HOLD_MS=500`).
pub const ENV_PREFIX: &str = "SPLASH";
/// File stem probed when no explicit path is given (`splash.toml`, `splash.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "splash";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: an explicit `path` must exist; without one, an optional `splash.*` file in
///    the current working directory is used when present.
/// 2. **Environment Overrides**: variables prefixed with `SPLASH__`
///    (e.g., `SPLASH__FADE_MS` maps to `fade_ms`).
///
/// Fields missing from every layer keep the `serde` defaults of `T`.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified configuration file cannot be found.
/// * A layer's content does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use splash_kernel::config::load_config;
/// use splash_kernel::domain::TransitionConfig;
///
/// let cfg: TransitionConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.hold_ms > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path.as_ref().map(|p| p.as_ref()), None)
}

/// Same as [`load_config`], reading overrides from `vars` instead of the process environment.
///
/// Keys follow the environment naming (`SPLASH__HOLD_MS`).
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I, K, V>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: Map<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    build(path.as_ref().map(|p| p.as_ref()), Some(vars))
}

/// Loads the [`TransitionConfig`] used by native hosts.
///
/// # Errors
/// See [`load_config`].
pub fn load_transition_config(path: Option<&Path>) -> Result<TransitionConfig, ConfigError> {
    load_config(path)
}

fn build<T>(path: Option<&Path>, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = path.map_or_else(
        || File::from(PathBuf::from(DEFAULT_CONFIG_STEM).as_path()).required(false),
        |p| File::from(p).required(true),
    );

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .convert_case(config::Case::Snake)
            .source(vars),
    );

    match path {
        Some(p) => info!("Loading config from {}", p.display()),
        None => debug!("No config path given, probing '{DEFAULT_CONFIG_STEM}.*' and environment"),
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
