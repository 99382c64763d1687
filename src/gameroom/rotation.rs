use super::config::Config;
use super::error::RoundError;
use crate::Position;
use crate::cards::Street;

/// Seat arithmetic around the button.
///
/// Built once per round from which seats hold an active player.
/// Every lookup scans forward circularly and skips empty seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    occupied: Vec<bool>,
    button: Position,
}

impl Rotation {
    /// Fails when the active count is outside the configured bounds,
    /// or when the button is off the table or on an empty seat.
    pub fn new(occupied: Vec<bool>, config: &Config) -> Result<Self, RoundError> {
        let count = occupied.iter().filter(|o| **o).count();
        let button = config.button();
        if count < config.min_players() || count > config.max_players() {
            return Err(RoundError::InvalidPlayerCount(count));
        }
        if !occupied.get(button).copied().unwrap_or(false) {
            return Err(RoundError::InvalidButton(button));
        }
        Ok(Self { occupied, button })
    }

    pub fn button(&self) -> Position {
        self.button
    }
    pub fn count(&self) -> usize {
        self.occupied.iter().filter(|o| **o).count()
    }
    pub fn is_heads_up(&self) -> bool {
        self.count() == 2
    }

    /// next occupied seat strictly after `seat`
    pub fn after(&self, seat: Position) -> Position {
        self.nth_after(seat, 1)
    }
    /// the `n`-th occupied seat after `seat`, counting laps
    pub fn nth_after(&self, seat: Position, n: usize) -> Position {
        let len = self.occupied.len();
        (1..)
            .map(|i| (seat + i) % len)
            .filter(|i| self.occupied[*i])
            .nth(n - 1)
            .unwrap_or(seat)
    }
    /// one lap of occupied seats, starting at `seat` itself
    pub fn lap(&self, seat: Position) -> impl Iterator<Item = Position> + '_ {
        let len = self.occupied.len();
        (0..len)
            .map(move |i| (seat + i) % len)
            .filter(|i| self.occupied[*i])
    }

    /// (small, big). Heads-up the button posts the small blind.
    pub fn blinds(&self) -> (Position, Position) {
        if self.is_heads_up() {
            (self.button, self.after(self.button))
        } else {
            (self.nth_after(self.button, 1), self.nth_after(self.button, 2))
        }
    }

    /// Pre-flop: third active seat after the button, which heads-up
    /// wraps around to the big blind. Later streets: first active seat
    /// after the button.
    pub fn first_to_act(&self, street: Street) -> Position {
        match street {
            Street::Pref => self.nth_after(self.button, 3),
            _ => self.nth_after(self.button, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(occupied: &[bool], button: Position) -> Result<Rotation, RoundError> {
        Rotation::new(occupied.to_vec(), &Config::default().with_button(button))
    }

    #[test]
    fn heads_up_button_posts_small() {
        let r = rotation(&[true, false, true, false], 0).unwrap();
        assert_eq!(r.blinds(), (0, 2));
        assert_eq!(r.first_to_act(Street::Pref), 2);
        assert_eq!(r.first_to_act(Street::Flop), 2);
    }

    #[test]
    fn heads_up_button_wraps() {
        let r = rotation(&[true, false, true], 2).unwrap();
        assert_eq!(r.blinds(), (2, 0));
        assert_eq!(r.first_to_act(Street::Pref), 0);
        assert_eq!(r.first_to_act(Street::Rive), 0);
    }

    #[test]
    fn three_handed_button_acts_first_preflop() {
        let r = rotation(&[true, true, true], 0).unwrap();
        assert_eq!(r.blinds(), (1, 2));
        assert_eq!(r.first_to_act(Street::Pref), 0);
        assert_eq!(r.first_to_act(Street::Turn), 1);
    }

    #[test]
    fn blinds_skip_empty_seats() {
        let r = rotation(&[true, false, true, false, true, true], 4).unwrap();
        assert_eq!(r.blinds(), (5, 0));
        assert_eq!(r.first_to_act(Street::Pref), 2);
        assert_eq!(r.first_to_act(Street::Flop), 5);
        assert_eq!(r.lap(5).collect::<Vec<_>>(), vec![5, 0, 2, 4]);
    }

    #[test]
    fn invalid_button() {
        assert_eq!(rotation(&[true, false, true], 1), Err(RoundError::InvalidButton(1)));
        assert_eq!(rotation(&[true, false, true], 3), Err(RoundError::InvalidButton(3)));
    }

    #[test]
    fn invalid_player_count() {
        assert_eq!(rotation(&[true, false, false], 0), Err(RoundError::InvalidPlayerCount(1)));
        assert_eq!(rotation(&[true; 23], 0), Err(RoundError::InvalidPlayerCount(23)));
        assert!(rotation(&[true; 22], 21).is_ok());
    }
}
