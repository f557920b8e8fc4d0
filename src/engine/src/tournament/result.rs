use crate::bracket::ThirdPlaceAssignment;
use crate::group::{GroupTable, ThirdPlaceRanking};
use crate::knockout::KnockoutStage;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// How far a team got in one tournament. The buckets are mutually exclusive
/// and exhaustive: exactly one applies per team per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    GroupExit,
    RoundOf32,
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    Final,
    Winner,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::GroupExit,
        Stage::RoundOf32,
        Stage::RoundOf16,
        Stage::QuarterFinal,
        Stage::SemiFinal,
        Stage::Final,
        Stage::Winner,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).expect("stage listed")
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::GroupExit => "Group Exit",
            Stage::RoundOf32 => "R32",
            Stage::RoundOf16 => "R16",
            Stage::QuarterFinal => "QF",
            Stage::SemiFinal => "SF",
            Stage::Final => "Final",
            Stage::Winner => "Winner",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full result tree of one simulated tournament. Built fresh per call
/// and handed to the caller; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentResult {
    pub group_tables: BTreeMap<char, GroupTable>,
    pub third_place_ranking: ThirdPlaceRanking,
    pub third_place_assignment: ThirdPlaceAssignment,
    pub knockout: KnockoutStage,
    pub champion: String,
    pub runner_up: String,
    pub third_place: String,
}

impl TournamentResult {
    /// The single furthest stage `code` reached, tested from the top down by
    /// match participation.
    pub fn furthest_stage(&self, code: &str) -> Stage {
        if self.champion == code {
            Stage::Winner
        } else if self.knockout.final_match.involves(code) {
            Stage::Final
        } else if self.knockout.semi_finals.iter().any(|m| m.involves(code)) {
            Stage::SemiFinal
        } else if self.knockout.quarter_finals.iter().any(|m| m.involves(code)) {
            Stage::QuarterFinal
        } else if self.knockout.round_of_16.iter().any(|m| m.involves(code)) {
            Stage::RoundOf16
        } else if self.knockout.round_of_32.iter().any(|m| m.involves(code)) {
            Stage::RoundOf32
        } else {
            Stage::GroupExit
        }
    }

    /// The unordered final pairing, normalized for aggregation.
    pub fn final_pairing(&self) -> (String, String) {
        let home = &self.knockout.final_match.home;
        let away = &self.knockout.final_match.away;
        if home <= away {
            (home.clone(), away.clone())
        } else {
            (away.clone(), home.clone())
        }
    }
}
