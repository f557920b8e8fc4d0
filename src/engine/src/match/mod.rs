pub mod commentary;
pub mod engine;
pub mod penalties;
pub mod result;

pub use engine::{MatchEngine, MatchSettings, AVG_GOALS_PER_TEAM};
pub use penalties::simulate_penalties;
pub use result::{GoalEvent, MatchResult, MatchStats, Score};
