pub mod ledger;
pub use ledger::*;

pub mod pot;
pub use pot::*;
