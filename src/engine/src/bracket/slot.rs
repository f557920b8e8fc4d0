use crate::bracket::resolver::ThirdPlaceAssignment;
use crate::error::TournamentError;
use crate::group::GroupTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A symbolic bracket position, parsed from the template exactly once at
/// load time. Resolution to a concrete team happens only when the feeding
/// stage has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BracketSlot {
    /// Group winner, e.g. `1A`.
    Winner(char),
    /// Group runner-up, e.g. `2B`.
    RunnerUp(char),
    /// One of the best third-placed teams; which group feeds it is decided
    /// by the third-place draw for the tie with this id.
    BestThird { slot_id: u16 },
}

impl BracketSlot {
    /// Concrete team code for this slot, or an explicit `UnresolvedSlot`
    /// error when the feeding stage has not produced one. Never a silent
    /// skip: a missing feeder is a driving-order bug, not a bye.
    pub fn resolve(
        &self,
        tables: &BTreeMap<char, GroupTable>,
        assignment: &ThirdPlaceAssignment,
    ) -> Result<String, TournamentError> {
        let standing = match self {
            BracketSlot::Winner(group) => tables.get(group).and_then(GroupTable::winner),
            BracketSlot::RunnerUp(group) => tables.get(group).and_then(GroupTable::runner_up),
            BracketSlot::BestThird { slot_id } => assignment
                .group_for(*slot_id)
                .and_then(|group| tables.get(&group))
                .and_then(GroupTable::third_place),
        };

        standing
            .map(|s| s.team.clone())
            .ok_or_else(|| TournamentError::UnresolvedSlot {
                slot: self.to_string(),
            })
    }
}

impl fmt::Display for BracketSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketSlot::Winner(group) => write!(f, "1{group}"),
            BracketSlot::RunnerUp(group) => write!(f, "2{group}"),
            BracketSlot::BestThird { slot_id } => write!(f, "3rd@{slot_id}"),
        }
    }
}
