//! A single hand of No-Limit Texas Hold-Em.
//!
//! - [`cards`]: cards, deck, dealer and the five-card evaluator
//! - [`pots`]: per-player contributions and their settlement into side pots
//! - [`gameroom`]: player actors, their decision rendezvous, and the round orchestrator
pub mod cards;
pub mod gameroom;
pub mod pots;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pot amounts.
pub type Chips = u32;
/// Seat index around the table.
pub type Position = usize;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest active players a round can be dealt to.
pub const MIN_PLAYERS: usize = 2;
/// Most active players a round can be dealt to. 2 * 22 + 5 + 3 burns = 52.
pub const MAX_PLAYERS: usize = 22;
/// Big blind. The small blind is half of it.
pub const DEFAULT_MIN_BET: Chips = 2;
/// Buy-in for a freshly created player.
pub const DEFAULT_STACK: Chips = 100;
/// How long a player may think before the passive action is taken for them.
pub const DEFAULT_ACTION_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// IDENTITY
// ============================================================================
/// Machine readable identity of a player, stable across hands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct PlayerId(uuid::Uuid);

impl Default for PlayerId {
    fn default() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl From<uuid::Uuid> for PlayerId {
    fn from(inner: uuid::Uuid) -> Self {
        Self(inner)
    }
}
impl From<PlayerId> for uuid::Uuid {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
