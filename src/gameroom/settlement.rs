use super::status::Status;
use crate::Chips;
use crate::PlayerId;
use crate::Position;
use crate::cards::Strength;
use colored::Colorize;

/// How one participant came out of the hand.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Settlement {
    pub seat: Position,
    pub player: PlayerId,
    pub risked: Chips,
    pub reward: Chips,
    pub status: Status,
    pub strength: Option<Strength>,
}

impl Settlement {
    pub fn pnl(&self) -> i64 {
        i64::from(self.reward) - i64::from(self.risked)
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pnl = match self.pnl() {
            n if n > 0 => format!("+{}", n).green(),
            n if n < 0 => format!("{}", n).red(),
            _ => "0".to_string().normal(),
        };
        match &self.strength {
            Some(strength) => write!(f, "{:<3}{:<7}{}", self.seat, pnl, strength),
            None => write!(f, "{:<3}{:<7}{}", self.seat, pnl, self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_can_be_negative() {
        let settlement = Settlement {
            seat: 0,
            player: PlayerId::default(),
            risked: 40,
            reward: 0,
            status: Status::Lost,
            strength: None,
        };
        assert_eq!(settlement.pnl(), -40);
        let settlement = Settlement {
            reward: 100,
            ..settlement
        };
        assert_eq!(settlement.pnl(), 60);
    }
}
