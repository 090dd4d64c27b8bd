use crate::error::{Rb209Error, Result};
use crate::logic::index;
use crate::models::Straw;
use crate::output::OutputFormat;
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOCAL_CONFIG: &str = "config/rb209.yaml";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Values used when a command leaves the matching flag out.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub mg_index: i32,
    pub straw: Straw,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ber: Option<f64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mg_index: 2,
            straw: Straw::Removed,
            ber: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl Config {
    /// Load from `config_override`, or the first config found in the
    /// standard locations. No config file at all means defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(Rb209Error::Config(format!(
                    "Config file not found at {:?}. Run `rb209 init` to create one.",
                    p
                )))
            }
            Some(p) => p.to_path_buf(),
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config file found; using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| Rb209Error::Config(format!("Failed to read config: {}", e)))?;
        let config = Self::from_yaml(&config_str)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parse YAML after `${VAR}` substitution and check the values.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| Rb209Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        index::validate_index("defaults.mg_index", self.defaults.mg_index, 0, index::MAX_SOIL_INDEX)
            .map_err(|e| Rb209Error::Config(e.to_string()))?;

        if let Some(ber) = self.defaults.ber {
            if !ber.is_finite() || ber <= 0.0 {
                return Err(Rb209Error::Config(format!(
                    "defaults.ber must be a positive number, got {}",
                    ber
                )));
            }
        }

        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(Rb209Error::Config(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Rb209Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// First existing config in `./config/rb209.yaml` then
    /// `<config dir>/rb209/config.yaml`.
    pub fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("rb209").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/rb209/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Rb209Error::Config("Cannot determine config directory".into()))?
            .join("rb209");
        Ok(config_dir.join("config.yaml"))
    }

    /// Prompt for every setting and write the result to `target` or the
    /// default path.
    pub fn setup_interactive(target: Option<&Path>) -> Result<(Self, PathBuf)> {
        let defaults = Self::default();
        let input_err = |e: dialoguer::Error| Rb209Error::Config(format!("Input error: {}", e));

        println!();
        println!("RB209 configuration");
        println!();

        let formats = [OutputFormat::Table, OutputFormat::Json];
        let format = Select::new()
            .with_prompt("  Output format")
            .items(&formats.iter().map(|f| f.as_str()).collect::<Vec<_>>())
            .default(0)
            .interact()
            .map_err(input_err)?;

        let mg_index: i32 = Input::new()
            .with_prompt("  Default soil Mg index")
            .default(defaults.defaults.mg_index)
            .validate_with(|v: &i32| {
                index::validate_index("Mg index", *v, 0, index::MAX_SOIL_INDEX)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(input_err)?;

        let straw_options = [Straw::Removed, Straw::Incorporated];
        let straw = Select::new()
            .with_prompt("  Cereal straw")
            .items(&straw_options.iter().map(|s| s.as_str()).collect::<Vec<_>>())
            .default(0)
            .interact()
            .map_err(input_err)?;

        let ber: String = Input::new()
            .with_prompt("  Default break-even ratio (blank for none)")
            .allow_empty(true)
            .interact_text()
            .map_err(input_err)?;
        let ber = match ber.trim() {
            "" => None,
            value => Some(value.parse::<f64>().map_err(|_| {
                Rb209Error::Config(format!("Break-even ratio '{}' is not a number", value))
            })?),
        };

        let level = Select::new()
            .with_prompt("  Log level")
            .items(&LOG_LEVELS)
            .default(1)
            .interact()
            .map_err(input_err)?;

        let config = Config {
            output: OutputConfig {
                format: formats[format],
            },
            defaults: DefaultsConfig {
                mg_index,
                straw: straw_options[straw],
                ber,
            },
            logging: LoggingConfig {
                level: LOG_LEVELS[level].to_string(),
            },
        };
        config.validate()?;

        let config_path = match target {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };
        config.write(&config_path)?;

        println!();
        println!("Configuration saved to {}", config_path.display());
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render_file()?)?;
        Ok(())
    }

    fn render_file(&self) -> Result<String> {
        Ok(format!(
            "# RB209 Configuration\n# Generated by `rb209 init` on {}\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M"),
            self.to_yaml()?
        ))
    }

    /// Replace `${VAR}` with the environment value. Unset variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| Rb209Error::Config(format!("Invalid substitution pattern: {}", e)))?;

        Ok(re
            .replace_all(content, |caps: &regex_lite::Captures<'_>| {
                std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
            })
            .into_owned())
    }
}
