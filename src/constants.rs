// Default tuning values. Every one of these can be overridden from
// `balloon_defense.toml`, see `config.rs`.

// Playfield
pub const PLAYFIELD_WIDTH: f32 = 800.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;
pub const TILE_SIZE: f32 = 40.0;
/// Simulation ticks per second (one tick per animation frame)
pub const TICK_RATE: u32 = 60;

/// Towers may not be placed closer than this to the path centerline
pub const PATH_MARGIN_FACTOR: f32 = 0.6;

// Economy
pub const STARTING_LIVES: u32 = 20;
pub const STARTING_MONEY: u32 = 100;
pub const WAVE_START_MONEY: u32 = 25;
pub const TOWER_COST: u32 = 50;

// Tower
pub const TOWER_RADIUS: f32 = 15.0;
pub const TOWER_RANGE: f32 = 120.0;
/// Ticks between shots
pub const TOWER_FIRE_RATE: u32 = 60;
pub const PROJECTILE_DAMAGE: i32 = 1;

// Balloon
pub const BALLOON_RADIUS: f32 = 15.0;
pub const BASE_BALLOON_SPEED: f32 = 1.0;

// Projectile
pub const PROJECTILE_SPEED: f32 = 6.0;
pub const PROJECTILE_RADIUS: f32 = 3.0;

// Wave scaling
pub const WAVE_BASE_COUNT: u32 = 10;
pub const WAVE_COUNT_PER_WAVE: u32 = 5;
pub const BASE_SPAWN_INTERVAL: u32 = 90;
pub const MIN_SPAWN_INTERVAL: u32 = 15;
pub const SPAWN_INTERVAL_STEP: u32 = 2;
pub const SPEED_STEP_PER_WAVE: f32 = 0.05;
pub const MAX_SPEED_FACTOR: f32 = 2.5;
