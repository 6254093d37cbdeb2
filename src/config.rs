use std::path::Path as FsPath;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::map::{Path, Playfield};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "balloon_defense.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
    /// Fraction of a tile kept clear on each side of the path
    pub path_margin_factor: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            tile_size: TILE_SIZE,
            path_margin_factor: PATH_MARGIN_FACTOR,
            tick_rate: TICK_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub starting_lives: u32,
    pub starting_money: u32,
    /// Base money granted at the start of every wave
    pub wave_start_money: u32,
    pub tower_cost: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            starting_money: STARTING_MONEY,
            wave_start_money: WAVE_START_MONEY,
            tower_cost: TOWER_COST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub radius: f32,
    pub range: f32,
    /// Ticks between shots
    pub fire_rate: u32,
    pub damage: i32,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            radius: TOWER_RADIUS,
            range: TOWER_RANGE,
            fire_rate: TOWER_FIRE_RATE,
            damage: PROJECTILE_DAMAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalloonConfig {
    pub radius: f32,
    /// World units per tick on wave 1
    pub base_speed: f32,
}

impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            radius: BALLOON_RADIUS,
            base_speed: BASE_BALLOON_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// World units per tick
    pub speed: f32,
    pub radius: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// `[[x, y], ...]` in world units; the built-in route is used when absent
    pub points: Option<Vec<[f32; 2]>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: PlayfieldConfig,
    pub economy: EconomyConfig,
    pub tower: TowerConfig,
    pub balloon: BalloonConfig,
    pub projectile: ProjectileConfig,
    pub path: PathConfig,
}

impl GameConfig {
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like `load`, but a missing file falls back to the defaults.
    pub fn load_or_default(
        path: impl AsRef<FsPath>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }

        let config = Self::load(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), String> {
        let p = &self.playfield;
        if p.width <= 0.0 || p.height <= 0.0 {
            return Err(format!(
                "Playfield must have a positive size, got {}x{}",
                p.width, p.height
            ));
        }
        if p.tile_size <= 0.0 {
            return Err("tile_size must be positive".to_string());
        }
        if p.tick_rate == 0 {
            return Err("tick_rate must be positive".to_string());
        }
        if self.balloon.base_speed <= 0.0 {
            return Err("balloon.base_speed must be positive".to_string());
        }
        if self.projectile.speed <= 0.0 {
            return Err("projectile.speed must be positive".to_string());
        }

        self.resolve_path().map(|_| ())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield.width, self.playfield.height)
    }

    pub fn resolve_path(&self) -> Result<Path, String> {
        match &self.path.points {
            Some(points) => Path::new(points.iter().map(|[x, y]| Vec2::new(*x, *y)).collect()),
            None => Path::default_for(&self.playfield()),
        }
    }
}
