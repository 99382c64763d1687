use colored::*;

/// Where a player stands within one hand.
///
/// `Idle` until [`super::Player::ready`], then `Ready` until the first
/// voluntary action. Folded, Won and Lost are final for the hand.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Status {
    #[default]
    Idle,
    Ready,
    Waiting,
    Folded,
    AllIn,
    Won,
    Lost,
}

impl Status {
    /// still owes decisions on this street
    pub fn is_acting(&self) -> bool {
        matches!(self, Self::Ready | Self::Waiting)
    }
    /// still has a claim on the pot
    pub fn is_contending(&self) -> bool {
        matches!(self, Self::Ready | Self::Waiting | Self::AllIn)
    }
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Folded | Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "{}", "idle".dimmed()),
            Self::Ready => write!(f, "{}", "ready".white()),
            Self::Waiting => write!(f, "{}", "waiting".white()),
            Self::Folded => write!(f, "{}", "folded".red()),
            Self::AllIn => write!(f, "{}", "all-in".magenta()),
            Self::Won => write!(f, "{}", "won".green()),
            Self::Lost => write!(f, "{}", "lost".yellow()),
        }
    }
}
