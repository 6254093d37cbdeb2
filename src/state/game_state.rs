// =============================================================================
// Game State
// =============================================================================
//
// Economy (lives, money) and session status, plus a few running totals
// for the HUD.
//
// =============================================================================

use crate::config::EconomyConfig;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Between waves, waiting for the player to start one
    #[default]
    PreWave,
    /// Balloons spawning/active
    WaveActive,
    /// Lives reached 0. Terminal.
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub status: GameStatus,

    /// Remaining lives, never negative
    pub lives: u32,

    /// Spendable money
    pub money: u32,

    pub balloons_popped: u32,
    pub balloons_leaked: u32,
    pub waves_completed: u32,
    pub towers_built: u32,
}

impl GameState {
    pub fn new(economy: &EconomyConfig) -> Self {
        Self {
            status: GameStatus::PreWave,
            lives: economy.starting_lives,
            money: economy.starting_money,
            balloons_popped: 0,
            balloons_leaked: 0,
            waves_completed: 0,
            towers_built: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Charge one life for a leak. Returns true if this leak ended the game.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.balloons_leaked += 1;

        if self.lives == 0 && !self.is_over() {
            self.status = GameStatus::GameOver;
            return true;
        }
        false
    }

    pub fn earn(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Deduct `amount` if affordable; otherwise leave money untouched.
    pub fn spend(&mut self, amount: u32) -> Result<(), String> {
        if self.money < amount {
            return Err(format!(
                "Not enough money. Need {}, have {}",
                amount, self.money
            ));
        }
        self.money -= amount;
        Ok(())
    }
}
