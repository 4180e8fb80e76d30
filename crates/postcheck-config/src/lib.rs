use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "postcheck";
const CONFIG_FILENAME: &str = "config.toml";

pub const ENV_API_BASE_URL: &str = "POSTCHECK_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "POSTCHECK_API_TOKEN";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub fixture: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid api.base_url value: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid api.timeout_secs value: {0}")]
    InvalidTimeout(u64),
    #[error("invalid fixture path: {0}")]
    InvalidFixturePath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api: Option<ApiFile>,
    fixture: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApiFile {
    base_url: Option<String>,
    token: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let config = load_file(config_path)?;
    apply_env_overrides(config, |key| env::var(key).ok())
}

fn load_file(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = merge_config(parsed)?;
    if let Some(fixture) = config.fixture.take() {
        config.fixture = Some(resolve_relative(path, fixture));
    }
    Ok(Some(config))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(api) = parsed.api {
        if let Some(base_url) = api.base_url {
            config.api.base_url = Some(validate_base_url(&base_url)?);
        }
        if let Some(timeout) = api.timeout_secs {
            if timeout == 0 || timeout > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeout(timeout));
            }
            config.api.timeout_secs = timeout;
        }
        config.api.token = non_empty(api.token);
        config.api.user_agent = non_empty(api.user_agent);
    }

    if let Some(fixture) = parsed.fixture {
        if fixture.as_os_str().is_empty() {
            return Err(ConfigError::InvalidFixturePath(fixture));
        }
        config.fixture = Some(fixture);
    }

    Ok(config)
}

fn apply_env_overrides<F>(mut config: AppConfig, var: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = non_empty(var(ENV_API_BASE_URL)) {
        config.api.base_url = Some(validate_base_url(&base_url)?);
    }
    if let Some(token) = non_empty(var(ENV_API_TOKEN)) {
        config.api.token = Some(token);
    }
    Ok(config)
}

fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn resolve_relative(config_path: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match config_path.parent() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
