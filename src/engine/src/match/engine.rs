use crate::r#match::commentary;
use crate::r#match::penalties::simulate_penalties;
use crate::r#match::result::{GoalEvent, MatchResult, MatchStats, Score};
use crate::team::Team;
use rand::Rng;

/// World Cup historical scoring average per team and match.
pub const AVG_GOALS_PER_TEAM: f32 = 1.35;

/// Centre of the 0.5-2.5 rating scale; attack and defense normalize around it.
const LEAGUE_AVG_RATING: f32 = 1.40;

const LAMBDA_MIN: f32 = 0.3;
const LAMBDA_MAX: f32 = 4.0;

/// A 30-minute extra period runs at a third of regulation intensity.
const EXTRA_TIME_INTENSITY: f32 = 0.33;

const ASSIST_CHANCE: f64 = 0.60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub allow_draw: bool,
    pub commentary: bool,
}

impl MatchSettings {
    pub fn group_stage() -> Self {
        MatchSettings {
            allow_draw: true,
            commentary: false,
        }
    }

    pub fn knockout() -> Self {
        MatchSettings {
            allow_draw: false,
            commentary: false,
        }
    }

    pub fn with_commentary(mut self) -> Self {
        self.commentary = true;
        self
    }
}

pub struct MatchEngine;

impl MatchEngine {
    /// Poisson goal rates for both sides.
    ///
    /// λ = avg · (attack / 1.40) · (1.40 / opponent defense) · form factor,
    /// where the form factor swings scoring by ±15%.
    pub fn expected_goals(home: &Team, away: &Team) -> (f32, f32) {
        let lambda_home = AVG_GOALS_PER_TEAM
            * (home.attack() / LEAGUE_AVG_RATING)
            * (LEAGUE_AVG_RATING / away.defense())
            * form_factor(home.form());
        let lambda_away = AVG_GOALS_PER_TEAM
            * (away.attack() / LEAGUE_AVG_RATING)
            * (LEAGUE_AVG_RATING / home.defense())
            * form_factor(away.form());

        (
            lambda_home.clamp(LAMBDA_MIN, LAMBDA_MAX),
            lambda_away.clamp(LAMBDA_MIN, LAMBDA_MAX),
        )
    }

    pub fn play<R: Rng>(
        home: &Team,
        away: &Team,
        settings: MatchSettings,
        rng: &mut R,
    ) -> MatchResult {
        let (lambda_home, lambda_away) = Self::expected_goals(home, away);

        let goals_home = sample_poisson(rng, lambda_home);
        let goals_away = sample_poisson(rng, lambda_away);

        let mut goals = Vec::with_capacity((goals_home + goals_away) as usize);
        goal_events(home, goals_home, 1..=90, &mut goals, rng);
        goal_events(away, goals_away, 1..=90, &mut goals, rng);
        goals.sort_by_key(|g| g.minute);

        let stats = simulate_stats(home, away, lambda_home, lambda_away, goals_home, goals_away, rng);

        let mut result = MatchResult {
            home: home.code.clone(),
            away: away.code.clone(),
            score: Score::new(goals_home, goals_away),
            goals,
            extra_time: None,
            penalties: None,
            winner: None,
            stats,
            commentary: Vec::new(),
        };

        if !settings.allow_draw && result.score.is_draw() {
            Self::play_extra_time(home, away, lambda_home, lambda_away, &mut result, rng);
        } else if goals_home > goals_away {
            result.winner = Some(home.code.clone());
        } else if goals_away > goals_home {
            result.winner = Some(away.code.clone());
        }

        if settings.commentary {
            result.commentary = commentary::narrate(&result, home, away);
        }

        result
    }

    fn play_extra_time<R: Rng>(
        home: &Team,
        away: &Team,
        lambda_home: f32,
        lambda_away: f32,
        result: &mut MatchResult,
        rng: &mut R,
    ) {
        let extra_home = sample_poisson(rng, lambda_home * EXTRA_TIME_INTENSITY);
        let extra_away = sample_poisson(rng, lambda_away * EXTRA_TIME_INTENSITY);

        goal_events(home, extra_home, 91..=120, &mut result.goals, rng);
        goal_events(away, extra_away, 91..=120, &mut result.goals, rng);
        result.goals.sort_by_key(|g| g.minute);
        result.extra_time = Some(Score::new(extra_home, extra_away));

        let full_time = result.full_time_score();
        if full_time.is_draw() {
            let shootout = simulate_penalties(home, away, rng);
            result.winner = Some(if shootout.home > shootout.away {
                home.code.clone()
            } else {
                away.code.clone()
            });
            result.penalties = Some(shootout);
        } else if full_time.home > full_time.away {
            result.winner = Some(home.code.clone());
        } else {
            result.winner = Some(away.code.clone());
        }
    }
}

fn form_factor(form: f32) -> f32 {
    0.85 + 0.30 * form
}

/// Knuth's product-of-uniforms Poisson sampler. Rates are clamped to at most
/// LAMBDA_MAX upstream, so the loop terminates quickly.
fn sample_poisson<R: Rng>(rng: &mut R, lambda: f32) -> u8 {
    let limit = (-lambda).exp();
    let mut count: u8 = 0;
    let mut product: f32 = 1.0;

    loop {
        product *= rng.random::<f32>();
        if product < limit {
            return count;
        }
        count = count.saturating_add(1);
    }
}

fn goal_events<R: Rng>(
    team: &Team,
    count: u8,
    minutes: std::ops::RangeInclusive<u8>,
    out: &mut Vec<GoalEvent>,
    rng: &mut R,
) {
    let mut scored_at: Vec<u8> = (0..count)
        .map(|_| rng.random_range(minutes.clone()))
        .collect();
    scored_at.sort_unstable();

    for minute in scored_at {
        let scorer = team
            .roster
            .pick_scorer(rng)
            .unwrap_or("Unknown")
            .to_string();
        let assist = if rng.random_bool(ASSIST_CHANCE) {
            team.roster.pick_assist(rng, &scorer).map(str::to_string)
        } else {
            None
        };

        out.push(GoalEvent {
            minute,
            team: team.code.clone(),
            scorer,
            assist,
        });
    }
}

fn simulate_stats<R: Rng>(
    home: &Team,
    away: &Team,
    lambda_home: f32,
    lambda_away: f32,
    goals_home: u8,
    goals_away: u8,
    rng: &mut R,
) -> MatchStats {
    let possession_home =
        (100.0 * home.midfield() / (home.midfield() + away.midfield())).clamp(25.0, 75.0);

    let shots_home = ((lambda_home * rng.random_range(3.5..5.5)) as u8).max(goals_home);
    let shots_away = ((lambda_away * rng.random_range(3.5..5.5)) as u8).max(goals_away);
    let on_target_home = ((shots_home as f32 * rng.random_range(0.3..0.5)) as u8).max(goals_home);
    let on_target_away = ((shots_away as f32 * rng.random_range(0.3..0.5)) as u8).max(goals_away);

    MatchStats {
        expected_goals_home: round2(lambda_home),
        expected_goals_away: round2(lambda_away),
        possession_home: round1(possession_home),
        shots_home,
        shots_away,
        shots_on_target_home: on_target_home,
        shots_on_target_away: on_target_away,
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::team;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_expected_goals_clamped_to_model_range() {
        let giant = team("AAA", 2.5, 2.5, 1.0);
        let minnow = team("BBB", 0.5, 0.5, 0.0);

        let (lambda_giant, lambda_minnow) = MatchEngine::expected_goals(&giant, &minnow);
        assert_eq!(lambda_giant, 4.0);
        assert_eq!(lambda_minnow, 0.3);
    }

    #[test]
    fn test_expected_goals_formula_at_baseline() {
        let a = team("AAA", 1.40, 1.40, 0.5);
        let b = team("BBB", 1.40, 1.40, 0.5);

        let (lambda_a, lambda_b) = MatchEngine::expected_goals(&a, &b);
        assert!((lambda_a - AVG_GOALS_PER_TEAM).abs() < 1e-5);
        assert!((lambda_b - AVG_GOALS_PER_TEAM).abs() < 1e-5);
    }

    #[test]
    fn test_score_matches_goal_events() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = team("AAA", 2.2, 1.0, 0.8);
        let b = team("BBB", 1.0, 1.0, 0.5);

        for _ in 0..100 {
            let result = MatchEngine::play(&a, &b, MatchSettings::group_stage(), &mut rng);

            let home_goals = result.goals.iter().filter(|g| g.team == "AAA").count();
            let away_goals = result.goals.iter().filter(|g| g.team == "BBB").count();
            assert_eq!(home_goals, result.score.home as usize);
            assert_eq!(away_goals, result.score.away as usize);
            assert!(result.goals.windows(2).all(|w| w[0].minute <= w[1].minute));
            assert!(result.goals.iter().all(|g| (1..=90).contains(&g.minute)));
        }
    }

    #[test]
    fn test_knockout_match_always_has_winner() {
        let mut rng = StdRng::seed_from_u64(12);
        let a = team("AAA", 1.4, 1.4, 0.5);
        let b = team("BBB", 1.4, 1.4, 0.5);

        for _ in 0..200 {
            let result = MatchEngine::play(&a, &b, MatchSettings::knockout(), &mut rng);
            assert!(result.winner.is_some());

            if result.went_to_penalties() {
                assert!(result.went_to_extra_time());
                let shootout = result.penalties.unwrap();
                assert_ne!(shootout.home, shootout.away);
            }
            if let Some(extra) = result.extra_time {
                assert!(result.score.is_draw());
                let in_extra = result.goals.iter().filter(|g| g.minute > 90).count();
                assert_eq!(in_extra, (extra.home + extra.away) as usize);
            }
        }
    }

    #[test]
    fn test_shots_never_below_goals() {
        let mut rng = StdRng::seed_from_u64(13);
        let a = team("AAA", 2.5, 0.5, 1.0);
        let b = team("BBB", 0.5, 0.5, 0.0);

        for _ in 0..100 {
            let result = MatchEngine::play(&a, &b, MatchSettings::group_stage(), &mut rng);
            assert!(result.stats.shots_home >= result.score.home);
            assert!(result.stats.shots_on_target_home >= result.score.home);
            assert!(result.stats.shots_home >= result.stats.shots_on_target_home);
            assert!((25.0..=75.0).contains(&result.stats.possession_home));
        }
    }

    #[test]
    fn test_poisson_sampler_degenerate_rate() {
        let mut rng = StdRng::seed_from_u64(14);
        // exp(-0.0001) is effectively 1, so nearly every draw is zero goals.
        let draws: u32 = (0..200).map(|_| sample_poisson(&mut rng, 0.0001) as u32).sum();
        assert!(draws <= 1);
    }
}
