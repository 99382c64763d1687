use crate::cards::Street;

/// Progress of a round. Strictly linear: a round only ever moves to
/// [`Phase::next`], and is thrown away once it reaches `End`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Phase {
    #[default]
    Ready,
    Started,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    End,
}

impl Phase {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ready,
            Self::Started,
            Self::PreFlop,
            Self::Flop,
            Self::Turn,
            Self::River,
            Self::Showdown,
            Self::End,
        ]
    }
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Ready => Some(Self::Started),
            Self::Started => Some(Self::PreFlop),
            Self::PreFlop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => Some(Self::Showdown),
            Self::Showdown => Some(Self::End),
            Self::End => None,
        }
    }
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Ready => None,
            Self::Started => Some(Self::Ready),
            Self::PreFlop => Some(Self::Started),
            Self::Flop => Some(Self::PreFlop),
            Self::Turn => Some(Self::Flop),
            Self::River => Some(Self::Turn),
            Self::Showdown => Some(Self::River),
            Self::End => Some(Self::Showdown),
        }
    }
    pub fn is_after(&self, other: Self) -> bool {
        *self > other
    }
    pub fn is_before(&self, other: Self) -> bool {
        *self < other
    }
    /// the betting street this phase is played on
    pub const fn street(&self) -> Option<Street> {
        match self {
            Self::PreFlop => Some(Street::Pref),
            Self::Flop => Some(Street::Flop),
            Self::Turn => Some(Street::Turn),
            Self::River => Some(Street::Rive),
            _ => None,
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Started => "start",
            Self::PreFlop => "pre_flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
            Self::Showdown => "showdown",
            Self::End => "end",
        }
    }
}

impl From<Street> for Phase {
    fn from(street: Street) -> Self {
        match street {
            Street::Pref => Self::PreFlop,
            Street::Flop => Self::Flop,
            Street::Turn => Self::Turn,
            Street::Rive => Self::River,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}
