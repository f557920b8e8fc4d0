use crate::r#match::Score;
use crate::team::Team;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A "what if" modification to one team's ratings.
///
/// Scales apply before deltas; the result is clamped by `Team::set_ratings`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAdjustment {
    pub attack_scale: f32,
    pub defense_scale: f32,
    pub midfield_scale: f32,
    pub attack_delta: f32,
    pub defense_delta: f32,
    pub midfield_delta: f32,
}

impl Default for RatingAdjustment {
    fn default() -> Self {
        RatingAdjustment {
            attack_scale: 1.0,
            defense_scale: 1.0,
            midfield_scale: 1.0,
            attack_delta: 0.0,
            defense_delta: 0.0,
            midfield_delta: 0.0,
        }
    }
}

impl RatingAdjustment {
    pub fn delta(attack: f32, defense: f32, midfield: f32) -> Self {
        RatingAdjustment {
            attack_delta: attack,
            defense_delta: defense,
            midfield_delta: midfield,
            ..Default::default()
        }
    }

    pub fn scale(attack: f32, defense: f32, midfield: f32) -> Self {
        RatingAdjustment {
            attack_scale: attack,
            defense_scale: defense,
            midfield_scale: midfield,
            ..Default::default()
        }
    }

    pub fn apply(&self, team: &mut Team) {
        team.set_ratings(
            team.attack() * self.attack_scale + self.attack_delta,
            team.defense() * self.defense_scale + self.defense_delta,
            team.midfield() * self.midfield_scale + self.midfield_delta,
        );
    }
}

/// Pinned group-stage scorelines, keyed by unordered team pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockedResults {
    scores: HashMap<(String, String), Score>,
}

impl LockedResults {
    /// Pin the result of `home` vs `away` to the given scoreline.
    pub fn insert(&mut self, home: &str, away: &str, score: Score) {
        let (key, score) = Self::orient(home, away, score);
        self.scores.insert(key, score);
    }

    /// Look up a pinned result, oriented so the first goals belong to `home`.
    pub fn get(&self, home: &str, away: &str) -> Option<Score> {
        let (key, _) = Self::orient(home, away, Score::default());
        let stored = self.scores.get(&key)?;
        if home <= away {
            Some(*stored)
        } else {
            Some(Score::new(stored.away, stored.home))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    fn orient(home: &str, away: &str, score: Score) -> ((String, String), Score) {
        if home <= away {
            ((home.to_string(), away.to_string()), score)
        } else {
            (
                (away.to_string(), home.to_string()),
                Score::new(score.away, score.home),
            )
        }
    }
}

/// Forced group outcomes carried by a scenario.
///
/// A forced winner is lifted to the top of its group table after ranking; a
/// forced exit sinks below every unforced team. Standings statistics are left
/// untouched, only the ordering changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundConstraints {
    forced_winners: HashMap<char, String>,
    forced_exits: HashSet<String>,
}

impl RoundConstraints {
    pub fn force_winner(&mut self, group: char, team: &str) {
        self.forced_winners.insert(group, team.to_string());
    }

    pub fn force_group_exit(&mut self, team: &str) {
        self.forced_exits.insert(team.to_string());
    }

    pub fn forced_winner(&self, group: char) -> Option<&str> {
        self.forced_winners.get(&group).map(String::as_str)
    }

    pub fn is_forced_exit(&self, team: &str) -> bool {
        self.forced_exits.contains(team)
    }

    pub fn is_empty(&self) -> bool {
        self.forced_winners.is_empty() && self.forced_exits.is_empty()
    }
}

/// Everything the scenario-modification collaborator can feed the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pub adjustments: BTreeMap<String, RatingAdjustment>,
    pub locked_results: LockedResults,
    pub constraints: RoundConstraints,
}

impl Scenario {
    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
            && self.locked_results.is_empty()
            && self.constraints.is_empty()
    }

    /// Clone the team snapshot with all rating adjustments applied.
    pub fn adjusted_teams(&self, teams: &BTreeMap<String, Team>) -> BTreeMap<String, Team> {
        let mut adjusted = teams.clone();
        for (code, adjustment) in &self.adjustments {
            if let Some(team) = adjusted.get_mut(code) {
                adjustment.apply(team);
            }
        }
        adjusted
    }
}
