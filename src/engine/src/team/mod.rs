pub mod roster;
pub mod team;

pub use roster::{Position, Roster, RosterPlayer};
pub use team::{Confederation, Team, RATING_MAX, RATING_MIN};
