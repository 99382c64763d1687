pub mod action;
pub use action::*;

pub mod actor;
pub use actor::*;

pub mod cancel;
pub use cancel::*;

pub mod config;
pub use config::*;

pub mod decider;
pub use decider::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;

pub mod fish;
pub use fish::*;

pub mod handle;
pub use handle::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod prompt;
pub use prompt::*;

pub mod rotation;
pub use rotation::*;

pub mod round;
pub use round::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod sink;
pub use sink::*;

pub mod status;
pub use status::*;
