use super::action::Action;
use super::phase::Phase;
use super::status::Status;
use crate::Chips;
use crate::PlayerId;
use crate::Position;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Strength;

/// Something that happened at the table, stamped with wall-clock
/// milliseconds since the unix epoch.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Event {
    time: u64,
    #[serde(flatten)]
    kind: Kind,
}

/// Who caused the event. Each variant has a fixed payload shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Kind {
    Dealer(DealerEvent),
    Player(PlayerEvent),
    Round(RoundEvent),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum DealerEvent {
    Shuffle,
    HoleCards {
        seat: Position,
        player: PlayerId,
        hole: Hole,
    },
    Burn(Card),
    Flop([Card; 3]),
    Turn(Card),
    River(Card),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum PlayerEvent {
    SmallBlind {
        seat: Position,
        player: PlayerId,
        chips: Chips,
    },
    BigBlind {
        seat: Position,
        player: PlayerId,
        chips: Chips,
    },
    /// a resolved decision; `defaulted` when the player timed out
    Act {
        seat: Position,
        player: PlayerId,
        action: Action,
        defaulted: bool,
    },
    Reveal {
        seat: Position,
        player: PlayerId,
        hole: Hole,
        strength: Option<Strength>,
    },
    Award {
        seat: Position,
        player: PlayerId,
        chips: Chips,
    },
}

/// The round entered `phase`. Carries the table as it stood then.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RoundEvent {
    pub phase: Phase,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Snapshot {
    pub players: Vec<PlayerInfo>,
    pub board: Vec<Card>,
    pub pot: Chips,
}

impl Snapshot {
    pub fn stacks(&self) -> Chips {
        self.players.iter().map(|p| p.stack).sum()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerInfo {
    pub seat: Position,
    pub id: PlayerId,
    pub name: String,
    pub stack: Chips,
    pub status: Status,
}

impl Event {
    pub fn now(kind: Kind) -> Self {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self { time, kind }
    }
    pub fn time(&self) -> u64 {
        self.time
    }
    pub fn payload(&self) -> &Kind {
        &self.kind
    }
    /// "dealer", "player" or "round"
    pub fn kind(&self) -> &'static str {
        match self.kind {
            Kind::Dealer(_) => "dealer",
            Kind::Player(_) => "player",
            Kind::Round(_) => "round",
        }
    }
    pub fn action(&self) -> &'static str {
        match &self.kind {
            Kind::Dealer(DealerEvent::Shuffle) => "shuffle",
            Kind::Dealer(DealerEvent::HoleCards { .. }) => "hole_cards",
            Kind::Dealer(DealerEvent::Burn(_)) => "burn",
            Kind::Dealer(DealerEvent::Flop(_)) => "flop",
            Kind::Dealer(DealerEvent::Turn(_)) => "turn",
            Kind::Dealer(DealerEvent::River(_)) => "river",
            Kind::Player(PlayerEvent::SmallBlind { .. }) => "small_blind",
            Kind::Player(PlayerEvent::BigBlind { .. }) => "big_blind",
            Kind::Player(PlayerEvent::Act { action, .. }) => action.name(),
            Kind::Player(PlayerEvent::Reveal { .. }) => "reveal",
            Kind::Player(PlayerEvent::Award { .. }) => "award",
            Kind::Round(RoundEvent { phase, .. }) => phase.name(),
        }
    }
}

impl From<DealerEvent> for Event {
    fn from(event: DealerEvent) -> Self {
        Self::now(Kind::Dealer(event))
    }
}
impl From<PlayerEvent> for Event {
    fn from(event: PlayerEvent) -> Self {
        Self::now(Kind::Player(event))
    }
}
impl From<RoundEvent> for Event {
    fn from(event: RoundEvent) -> Self {
        Self::now(Kind::Round(event))
    }
}
