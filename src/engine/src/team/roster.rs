use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    /// Relative likelihood of a player in this position scoring a goal.
    pub fn scoring_weight(&self) -> f32 {
        match self {
            Position::Forward => 3.0,
            Position::Midfielder => 1.5,
            Position::Defender => 0.4,
            Position::Goalkeeper => 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub name: String,
    pub position: Position,
}

/// The squad players eligible to appear in goal events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    players: Vec<RosterPlayer>,
}

impl Roster {
    pub fn new(players: Vec<RosterPlayer>) -> Self {
        Roster { players }
    }

    pub fn players(&self) -> &[RosterPlayer] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Pick a goalscorer, weighted by position.
    pub fn pick_scorer<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.players
            .choose_weighted(rng, |p| p.position.scoring_weight())
            .ok()
            .map(|p| p.name.as_str())
    }

    /// Pick an assist provider other than the scorer, uniformly.
    pub fn pick_assist<R: Rng>(&self, rng: &mut R, scorer: &str) -> Option<&str> {
        self.players
            .iter()
            .filter(|p| p.name != scorer)
            .choose(rng)
            .map(|p| p.name.as_str())
    }
}
