use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalEvent {
    /// 1-90 in regulation, 91-120 in extra time.
    pub minute: u8,
    pub team: String,
    pub scorer: String,
    pub assist: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStats {
    pub expected_goals_home: f32,
    pub expected_goals_away: f32,
    /// Home share of possession in percent; away holds the remainder.
    pub possession_home: f32,
    pub shots_home: u8,
    pub shots_away: u8,
    pub shots_on_target_home: u8,
    pub shots_on_target_away: u8,
}

/// One finished match.
///
/// `winner` is `None` only for drawn group-stage matches; once extra time and
/// penalties have run their course a winner is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub home: String,
    pub away: String,
    /// Score after 90 minutes.
    pub score: Score,
    pub goals: Vec<GoalEvent>,
    /// Goals added during the 30-minute extra period, when one was played.
    pub extra_time: Option<Score>,
    pub penalties: Option<Score>,
    pub winner: Option<String>,
    pub stats: MatchStats,
    pub commentary: Vec<String>,
}

impl MatchResult {
    /// A pinned scoreline standing in for a simulated match. No goal detail
    /// or derived statistics are invented for it.
    pub fn from_locked(home: &str, away: &str, score: Score) -> Self {
        let winner = if score.home > score.away {
            Some(home.to_string())
        } else if score.away > score.home {
            Some(away.to_string())
        } else {
            None
        };

        MatchResult {
            home: home.to_string(),
            away: away.to_string(),
            score,
            goals: Vec::new(),
            extra_time: None,
            penalties: None,
            winner,
            stats: MatchStats::default(),
            commentary: Vec::new(),
        }
    }

    pub fn involves(&self, code: &str) -> bool {
        self.home == code || self.away == code
    }

    /// Regulation plus extra-time goals, the score a scoreboard would show.
    pub fn full_time_score(&self) -> Score {
        match self.extra_time {
            Some(extra) => Score::new(self.score.home + extra.home, self.score.away + extra.away),
            None => self.score,
        }
    }

    pub fn loser(&self) -> Option<&str> {
        let winner = self.winner.as_deref()?;
        if winner == self.home {
            Some(&self.away)
        } else {
            Some(&self.home)
        }
    }

    pub fn went_to_extra_time(&self) -> bool {
        self.extra_time.is_some()
    }

    pub fn went_to_penalties(&self) -> bool {
        self.penalties.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_result_winner_follows_score() {
        let win = MatchResult::from_locked("BRA", "SCO", Score::new(2, 0));
        assert_eq!(win.winner.as_deref(), Some("BRA"));
        assert_eq!(win.loser(), Some("SCO"));

        let draw = MatchResult::from_locked("BRA", "SCO", Score::new(1, 1));
        assert_eq!(draw.winner, None);
        assert_eq!(draw.loser(), None);
    }

    #[test]
    fn test_full_time_score_includes_extra_period() {
        let mut result = MatchResult::from_locked("FRA", "ESP", Score::new(1, 1));
        result.extra_time = Some(Score::new(1, 0));

        assert_eq!(result.full_time_score(), Score::new(2, 1));
    }
}
