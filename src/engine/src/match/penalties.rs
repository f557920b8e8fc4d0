use crate::r#match::result::Score;
use crate::team::Team;
use rand::Rng;

/// Per-kick conversion probability; better attacking sides convert slightly
/// more often, capped so elite teams stay within 0.80.
fn conversion_rate(team: &Team) -> f64 {
    0.70 + 0.05 * f64::from(team.attack().min(2.0))
}

/// Best-of-5 shootout, then sudden-death pairs.
///
/// The best-of-5 phase stops early once one side leads by more than the
/// opponent could still score. Sudden death only ends after a completed pair
/// with differing totals, so the returned score is never level.
pub fn simulate_penalties<R: Rng>(home: &Team, away: &Team, rng: &mut R) -> Score {
    let rate_home = conversion_rate(home);
    let rate_away = conversion_rate(away);

    let mut home_goals: u8 = 0;
    let mut away_goals: u8 = 0;

    for round in 0..5u8 {
        if rng.random_bool(rate_home) {
            home_goals += 1;
        }
        if rng.random_bool(rate_away) {
            away_goals += 1;
        }

        let remaining = 4 - round;
        if home_goals > away_goals + remaining || away_goals > home_goals + remaining {
            break;
        }
    }

    while home_goals == away_goals {
        if rng.random_bool(rate_home) {
            home_goals += 1;
        }
        if rng.random_bool(rate_away) {
            away_goals += 1;
        }
    }

    Score::new(home_goals, away_goals)
}
