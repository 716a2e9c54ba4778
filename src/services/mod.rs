// Service exports
pub mod roster;

pub use roster::{load_roster, parse_roster, Roster, RosterError};
