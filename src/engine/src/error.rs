use thiserror::Error;

/// Failures surfaced by the tournament pipeline.
///
/// Match and group simulation never fail on valid input; everything here is
/// either bad configuration, a pipeline driven out of order, or an aborted
/// Monte Carlo batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("group {group} must contain exactly {expected} teams, found {found}")]
    InvalidGroupSize {
        group: char,
        expected: usize,
        found: usize,
    },

    #[error("unknown team code '{0}'")]
    UnknownTeam(String),

    #[error("bracket template is malformed: {0}")]
    MalformedTemplate(String),

    #[error("no valid third-place slot assignment exists for qualified groups {groups:?}")]
    UnsolvableThirdPlaceDraw { groups: Vec<char> },

    #[error("slot {slot} cannot be resolved yet: its feeder result is missing")]
    UnresolvedSlot { slot: String },

    #[error("simulation batch cancelled before completion")]
    Cancelled,
}
