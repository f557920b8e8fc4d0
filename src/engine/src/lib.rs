pub mod bracket;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod group;
pub mod knockout;
pub mod r#match;
pub mod monte_carlo;
pub mod scenario;
pub mod team;
pub mod tournament;
pub mod utils;

pub use bracket::{
    BracketSlot, BracketTemplate, RoundOf32Tie, ThirdPlaceAssignment, ThirdPlaceSlot,
    assign_third_place_slots,
};
pub use error::TournamentError;
pub use group::{
    GroupStageEngine, GroupStanding, GroupTable, ThirdPlaceEntry, ThirdPlaceRanking,
    QUALIFYING_THIRD_PLACE_TEAMS,
};
pub use knockout::{KnockoutEngine, KnockoutStage};
pub use r#match::{
    GoalEvent, MatchEngine, MatchResult, MatchSettings, MatchStats, Score, simulate_penalties,
};
pub use monte_carlo::{FinalPairing, MonteCarloReport, MonteCarloRunner, TeamOdds};
pub use scenario::{LockedResults, RatingAdjustment, RoundConstraints, Scenario};
pub use team::{Confederation, Position, Roster, RosterPlayer, Team, RATING_MAX, RATING_MIN};
pub use tournament::{Stage, TournamentResult, TournamentSetup, simulate_tournament};
