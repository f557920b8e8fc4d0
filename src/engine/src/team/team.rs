use crate::team::Roster;
use serde::{Deserialize, Serialize};

/// Rating multipliers live on a fixed scale around a 1.0 baseline.
pub const RATING_MIN: f32 = 0.5;
pub const RATING_MAX: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confederation {
    Afc,
    Caf,
    Concacaf,
    Conmebol,
    Ofc,
    Uefa,
}

/// A national team snapshot as seen by the simulation.
///
/// Ratings are clamped to [RATING_MIN, RATING_MAX] on every write; callers can
/// push arbitrary scenario deltas through without escaping the model's range.
/// The engine never mutates a team and never retains one across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub confederation: Confederation,
    /// Official FIFA ranking; lower is stronger. Last tiebreak key.
    pub fifa_ranking: u16,
    attack: f32,
    defense: f32,
    midfield: f32,
    form: f32,
    pub roster: Roster,
}

impl Team {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        name: String,
        flag: String,
        confederation: Confederation,
        fifa_ranking: u16,
        attack: f32,
        defense: f32,
        midfield: f32,
        form: f32,
        roster: Roster,
    ) -> Self {
        Team {
            code,
            name,
            flag,
            confederation,
            fifa_ranking,
            attack: clamp_rating(attack),
            defense: clamp_rating(defense),
            midfield: clamp_rating(midfield),
            form: form.clamp(0.0, 1.0),
            roster,
        }
    }

    pub fn attack(&self) -> f32 {
        self.attack
    }

    pub fn defense(&self) -> f32 {
        self.defense
    }

    pub fn midfield(&self) -> f32 {
        self.midfield
    }

    /// Rolling share of recent results, 0 (all losses) to 1 (all wins).
    pub fn form(&self) -> f32 {
        self.form
    }

    pub fn set_ratings(&mut self, attack: f32, defense: f32, midfield: f32) {
        self.attack = clamp_rating(attack);
        self.defense = clamp_rating(defense);
        self.midfield = clamp_rating(midfield);
    }

    pub fn set_form(&mut self, form: f32) {
        self.form = form.clamp(0.0, 1.0);
    }
}

fn clamp_rating(value: f32) -> f32 {
    value.clamp(RATING_MIN, RATING_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_team(code: &str, rating: f32) -> Team {
        Team::new(
            code.to_string(),
            code.to_string(),
            String::new(),
            Confederation::Uefa,
            10,
            rating,
            rating,
            rating,
            0.5,
            Roster::default(),
        )
    }

    #[test]
    fn test_ratings_clamp_on_construction() {
        let team = plain_team("AAA", 9.0);
        assert_eq!(team.attack(), RATING_MAX);

        let weak = plain_team("BBB", -1.0);
        assert_eq!(weak.defense(), RATING_MIN);
    }

    #[test]
    fn test_ratings_clamp_on_write() {
        let mut team = plain_team("AAA", 1.0);
        team.set_ratings(0.1, 3.0, 1.2);

        assert_eq!(team.attack(), RATING_MIN);
        assert_eq!(team.defense(), RATING_MAX);
        assert_eq!(team.midfield(), 1.2);
    }

    #[test]
    fn test_form_stays_in_unit_interval() {
        let mut team = plain_team("AAA", 1.0);
        team.set_form(1.7);
        assert_eq!(team.form(), 1.0);
        team.set_form(-0.2);
        assert_eq!(team.form(), 0.0);
    }
}
