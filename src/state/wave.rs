// =============================================================================
// Wave State
// =============================================================================
//
// Tracks the current wave, its roster and the spawn cadence. The scaling
// tables below decide how big and how tough each wave is.
//
// =============================================================================

use crate::constants::{
    BASE_SPAWN_INTERVAL, MAX_SPEED_FACTOR, MIN_SPAWN_INTERVAL, SPAWN_INTERVAL_STEP,
    SPEED_STEP_PER_WAVE, WAVE_BASE_COUNT, WAVE_COUNT_PER_WAVE,
};

/// Stats for one balloon in a wave roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonSpec {
    pub health: i32,
    /// World units per tick
    pub speed: f32,
    pub bounty: u32,
}

// =============================================================================
// Scaling Tables
// =============================================================================

/// Number of balloons in a wave
pub fn roster_size(wave: u32) -> u32 {
    WAVE_COUNT_PER_WAVE * wave + WAVE_BASE_COUNT
}

/// Hit points and bounty both follow this tier
pub fn balloon_tier(wave: u32) -> i32 {
    match wave {
        w if w >= 15 => 4,
        w if w >= 10 => 3,
        w if w >= 5 => 2,
        _ => 1,
    }
}

/// Linear speed-up per wave, capped at `MAX_SPEED_FACTOR` times the base
pub fn balloon_speed(wave: u32, base_speed: f32) -> f32 {
    let scaled = base_speed + wave.saturating_sub(1) as f32 * SPEED_STEP_PER_WAVE;
    scaled.min(base_speed * MAX_SPEED_FACTOR)
}

/// Ticks between spawns
pub fn spawn_interval(wave: u32) -> u32 {
    BASE_SPAWN_INTERVAL
        .saturating_sub(SPAWN_INTERVAL_STEP * wave)
        .max(MIN_SPAWN_INTERVAL)
}

/// Money granted when the wave starts
pub fn wave_bonus(wave_start_money: u32, wave: u32) -> u32 {
    wave_start_money + wave / 2
}

pub fn build_roster(wave: u32, base_speed: f32) -> Vec<BalloonSpec> {
    let tier = balloon_tier(wave);
    let spec = BalloonSpec {
        health: tier,
        speed: balloon_speed(wave, base_speed),
        bounty: tier as u32,
    };
    vec![spec; roster_size(wave) as usize]
}

// =============================================================================
// Wave State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveState {
    /// Last started wave (0 before the first one)
    pub current_wave: u32,

    /// Whether a wave is currently in progress
    pub wave_active: bool,

    /// Balloons to spawn this wave, in order
    pub roster: Vec<BalloonSpec>,

    /// Number of roster entries already spawned
    pub spawned: usize,

    /// Ticks between spawns for this wave
    pub spawn_interval: u32,

    /// Ticks until the next spawn (0 = spawn on the next tick)
    pub spawn_countdown: u32,
}

impl WaveState {
    /// Reset for `wave` and mark it active.
    pub fn begin(&mut self, wave: u32, base_speed: f32) {
        self.current_wave = wave;
        self.wave_active = true;
        self.roster = build_roster(wave, base_speed);
        self.spawned = 0;
        self.spawn_interval = spawn_interval(wave);
        self.spawn_countdown = 0;
    }

    pub fn all_spawned(&self) -> bool {
        self.spawned >= self.roster.len()
    }

    pub fn remaining(&self) -> usize {
        self.roster.len().saturating_sub(self.spawned)
    }

    /// Roster entry due next, without consuming it
    pub fn next_spec(&self) -> Option<BalloonSpec> {
        self.roster.get(self.spawned).copied()
    }
}
