use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = "Enter a command: ";
pub const DEFAULT_BANNER: &str = "Welcome to the assistant bot!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub banner: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repl: ReplConfig {
                prompt: DEFAULT_PROMPT.to_string(),
                banner: DEFAULT_BANNER.to_string(),
            },
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
    #[error("invalid repl.prompt value: must be a single line")]
    InvalidPrompt,
    #[error("invalid repl.banner value: must be a non-empty single line")]
    InvalidBanner,
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

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    repl: Option<ReplFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplFile {
    prompt: Option<String>,
    banner: Option<String>,
}

/// Loads the config at `config_path`, or the default location when `None`.
///
/// An explicit path must exist. A missing default file (or an unresolvable
/// home directory) yields [`AppConfig::default`].
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
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

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(repl) = parsed.repl {
        if let Some(prompt) = repl.prompt {
            if has_line_break(&prompt) {
                return Err(ConfigError::InvalidPrompt);
            }
            config.repl.prompt = prompt;
        }
        if let Some(banner) = repl.banner {
            if banner.trim().is_empty() || has_line_break(&banner) {
                return Err(ConfigError::InvalidBanner);
            }
            config.repl.banner = banner;
        }
    }

    Ok(config)
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}
