use super::error::RoundError;
use crate::Chips;
use crate::DEFAULT_MIN_BET;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::Position;

/// Table parameters fixed for the lifetime of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Config {
    button: Position,
    min_bet: Chips,
    min_players: usize,
    max_players: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            button: 0,
            min_bet: DEFAULT_MIN_BET,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl Config {
    pub fn with_button(self, button: Position) -> Self {
        Self { button, ..self }
    }
    pub fn with_min_bet(self, min_bet: Chips) -> Self {
        Self { min_bet, ..self }
    }
    pub fn with_bounds(self, min_players: usize, max_players: usize) -> Self {
        Self {
            min_players,
            max_players,
            ..self
        }
    }

    pub fn button(&self) -> Position {
        self.button
    }
    pub fn min_bet(&self) -> Chips {
        self.min_bet
    }
    pub fn big_blind(&self) -> Chips {
        self.min_bet
    }
    pub fn small_blind(&self) -> Chips {
        self.min_bet / 2
    }
    pub fn min_players(&self) -> usize {
        self.min_players
    }
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    pub fn validate(&self) -> Result<(), RoundError> {
        if self.min_bet < 2 {
            return Err(RoundError::InvalidConfig("minimum bet leaves no small blind"));
        }
        if self.min_players < MIN_PLAYERS || self.max_players > MAX_PLAYERS {
            return Err(RoundError::InvalidConfig("player bounds outside the table limits"));
        }
        if self.min_players > self.max_players {
            return Err(RoundError::InvalidConfig("player bounds are inverted"));
        }
        Ok(())
    }
}
