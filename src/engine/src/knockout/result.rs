use crate::r#match::MatchResult;
use serde::Serialize;

/// Every decided knockout match, round by round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnockoutStage {
    pub round_of_32: Vec<MatchResult>,
    pub round_of_16: Vec<MatchResult>,
    pub quarter_finals: Vec<MatchResult>,
    pub semi_finals: Vec<MatchResult>,
    pub third_place_match: MatchResult,
    pub final_match: MatchResult,
}

impl KnockoutStage {
    pub fn champion(&self) -> &str {
        self.final_match
            .winner
            .as_deref()
            .expect("the final is played with draws disallowed")
    }

    pub fn runner_up(&self) -> &str {
        self.final_match
            .loser()
            .expect("the final is played with draws disallowed")
    }

    pub fn third_place(&self) -> &str {
        self.third_place_match
            .winner
            .as_deref()
            .expect("the third-place match is played with draws disallowed")
    }

    pub fn rounds(&self) -> [&[MatchResult]; 4] {
        [
            &self.round_of_32,
            &self.round_of_16,
            &self.quarter_finals,
            &self.semi_finals,
        ]
    }
}
