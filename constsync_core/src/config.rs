use crate::error::{ConstsyncError, Result};
use crate::policy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf};
use tracing::{debug, info, trace};

pub const CONFIG_FILE_NAME: &str = "constsync.toml";

/// Path-resolution roots supplied by the host project. `app_root` is where
/// backend source directories live; `base_root` is where output paths are
/// resolved.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    pub app_root: String,
    pub base_root: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_root: "app".to_string(),
            base_root: ".".to_string(),
        }
    }
}

/// Configuration for the enum export command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EnumSectionConfig {
    /// Directory under the app root containing enum sources.
    pub source_dir: String,
    /// Output file path for the JavaScript module, under the base root.
    pub output: String,
    /// Suffix appended to each exported enum name.
    pub suffix: String,
    /// Whether to also emit a TypeScript declaration file.
    pub typescript: bool,
    /// Member names never emitted.
    pub ignore: Vec<String>,
}

impl Default for EnumSectionConfig {
    fn default() -> Self {
        Self {
            source_dir: "Enums".to_string(),
            output: "resources/js/enums.js".to_string(),
            suffix: String::new(),
            typescript: false,
            ignore: policy::DEFAULT_IGNORE_LIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Configuration for the constants export command. The source directory is
/// the conventional `Models` directory and is not configurable.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConstantSectionConfig {
    /// Output file path for the JavaScript module, under the base root.
    pub output: String,
    /// Suffix appended to each exported model name.
    pub suffix: String,
    /// Whether to also emit a TypeScript declaration file.
    pub typescript: bool,
}

impl Default for ConstantSectionConfig {
    fn default() -> Self {
        Self {
            output: "resources/js/constants.js".to_string(),
            suffix: "Model".to_string(),
            typescript: false,
        }
    }
}

/// Unified configuration for Constsync operations. Every key is optional;
/// a missing config file means built-in defaults throughout.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConstsyncConfig {
    pub project: ProjectConfig,
    pub enums: EnumSectionConfig,
    pub constants: ConstantSectionConfig,
}

impl ConstsyncConfig {
    /// Load configuration. An explicit path must exist; otherwise
    /// `constsync.toml` is searched for in the current directory and its
    /// ancestors, falling back to defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConstsyncError::config(format!(
                        "configuration file not found at {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file()?,
        };

        let mut config = match config_path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                let contents = fs::read_to_string(&path)?;
                toml::from_str(&contents)?
            }
            None => {
                debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
                Self::default()
            }
        };

        config.project.app_root = substitute_env_vars(&config.project.app_root)?;
        config.project.base_root = substitute_env_vars(&config.project.base_root)?;
        config.enums.output = substitute_env_vars(&config.enums.output)?;
        config.constants.output = substitute_env_vars(&config.constants.output)?;

        Ok(config)
    }

    /// Searches for `constsync.toml` starting from the current directory and
    /// traversing up to the root.
    fn find_config_file() -> Result<Option<PathBuf>> {
        let current_dir = env::current_dir()?;
        debug!("Starting config file search from {}", current_dir.display());

        for path in current_dir.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at {}", config_path.display());
            if config_path.exists() {
                return Ok(Some(config_path));
            }
        }
        Ok(None)
    }
}

/// Substitute environment variables in config strings.
/// Supports `${VAR_NAME:-default}` syntax.
fn substitute_env_vars(value: &str) -> Result<String> {
    let mut result = value.to_string();

    let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
        .expect("Invalid regex for environment variable substitution");

    for cap in re.captures_iter(value) {
        let var_name = &cap[1];
        let default_value = cap.get(2).map(|m| m.as_str());

        trace!("Looking for environment variable: {}", var_name);

        let replacement = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => match default_value {
                Some(default) => default.to_string(),
                None => return Err(ConstsyncError::EnvVarNotSet(var_name.to_string())),
            },
        };

        result = result.replace(&cap[0], &replacement);
    }

    Ok(result)
}
