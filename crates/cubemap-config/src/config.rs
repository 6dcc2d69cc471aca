//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Cubemap rendering settings.
    pub render: RenderConfig,
    /// Where and how faces are written.
    pub output: OutputConfig,
    /// Procedural sky settings for the demo render step.
    pub sky: SkyConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of each face in pixels.
    pub resolution: u32,
    /// Render the six faces on worker threads.
    pub parallel: bool,
    /// Near clip plane distance for face cameras.
    pub near: f32,
    /// Far clip plane distance for face cameras.
    pub far: f32,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives the face images.
    pub directory: PathBuf,
    /// Prefix prepended to each face file name (e.g. `sky_px.png`).
    pub file_prefix: String,
    /// Also write all six faces side by side in upload order.
    pub write_strip: bool,
}

/// Procedural sky configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
    /// Noise seed.
    pub seed: u32,
    /// Number of fBm octaves.
    pub octaves: usize,
    /// Base noise frequency along the view ray.
    pub frequency: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: 1024,
            parallel: false,
            near: 0.01,
            far: 10.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("cubemap"),
            file_prefix: String::new(),
            write_strip: true,
        }
    }
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            octaves: 5,
            frequency: 2.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for this tool, if one exists.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cubemap-render"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values that would make a render run fail later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.resolution == 0 {
            return Err(ConfigError::Invalid {
                field: "render.resolution",
                reason: "must be a positive integer".to_string(),
            });
        }
        if self.render.near.is_nan() || self.render.near <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "render.near",
                reason: format!("must be positive, got {}", self.render.near),
            });
        }
        if self.render.far.is_nan() || self.render.far <= self.render.near {
            return Err(ConfigError::Invalid {
                field: "render.far",
                reason: format!(
                    "must be greater than near ({}), got {}",
                    self.render.near, self.render.far
                ),
            });
        }
        if self.sky.octaves == 0 {
            return Err(ConfigError::Invalid {
                field: "sky.octaves",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
