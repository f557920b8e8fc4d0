use crate::r#match::MatchResult;
use serde::Serialize;
use std::cmp::Ordering;

/// One team's accumulated group record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStanding {
    pub team: String,
    /// Copied from the team record; the last ranking tiebreak.
    pub fifa_ranking: u16,
    pub played: u8,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u8,
}

impl GroupStanding {
    pub fn new(team: String, fifa_ranking: u16) -> Self {
        GroupStanding {
            team,
            fifa_ranking,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        i32::from(self.goals_for) - i32::from(self.goals_against)
    }

    /// Fold one match's goals into the record.
    pub fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += u16::from(scored);
        self.goals_against += u16::from(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += 3;
            }
            Ordering::Equal => {
                self.draws += 1;
                self.points += 1;
            }
            Ordering::Less => self.losses += 1,
        }
    }
}

/// The ranking key shared by group tables and the third-place comparison:
/// points, then goal difference, then goals scored, then FIFA ranking
/// (stronger ranking wins). Total except for genuine full-key ties.
pub fn standing_order(a: &GroupStanding, b: &GroupStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_difference().cmp(&a.goal_difference()))
        .then(b.goals_for.cmp(&a.goals_for))
        .then(a.fifa_ranking.cmp(&b.fifa_ranking))
}

/// A finished group: ranked standings plus the six matches that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTable {
    pub group: char,
    pub standings: Vec<GroupStanding>,
    pub matches: Vec<MatchResult>,
}

impl GroupTable {
    pub fn winner(&self) -> Option<&GroupStanding> {
        self.standings.first()
    }

    pub fn runner_up(&self) -> Option<&GroupStanding> {
        self.standings.get(1)
    }

    pub fn third_place(&self) -> Option<&GroupStanding> {
        self.standings.get(2)
    }

    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.standings.iter().position(|s| s.team == code)
    }
}
