use anyhow::Context;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use tile_geometry::{GridSampler, OrientationRule, Point, Polygon, TileFit, TileSize};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "TILE_LAYOUT";

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub layout: LayoutSettings,
}

/// The `[layout]` table: what to sample and how.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    pub tile_size: i32,
    #[serde(default)]
    pub fit: TileFit,
    #[serde(default)]
    pub orientation: OrientationRule,
    pub outline: Vec<[i32; 2]>,
}

impl Settings {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        config
            .try_deserialize()
            .context("Configuration does not match the layout schema")
    }
}

impl LayoutSettings {
    pub fn sampler(&self) -> anyhow::Result<GridSampler> {
        let tile = TileSize::new(self.tile_size).context("layout.tile_size")?;
        Ok(GridSampler::new(tile)
            .with_fit(self.fit)
            .with_orientation_rule(self.orientation))
    }

    pub fn outline(&self) -> anyhow::Result<Polygon> {
        let vertices = self.outline.iter().copied().map(Point::from).collect();
        Polygon::try_new(vertices).context("layout.outline")
    }
}

pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match settings {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    let config = load_config(path).with_context(|| format!("Could not read {}", path))?;
    Settings::from_config(config)
}
