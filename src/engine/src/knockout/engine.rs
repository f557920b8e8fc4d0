use crate::bracket::{BracketTemplate, ThirdPlaceAssignment};
use crate::error::TournamentError;
use crate::group::GroupTable;
use crate::knockout::KnockoutStage;
use crate::r#match::{MatchEngine, MatchResult, MatchSettings};
use crate::team::Team;
use rand::Rng;
use std::collections::BTreeMap;

/// Drives the bracket from the Round of 32 to the final.
///
/// Rounds chain through fixed winner-index feeds; every match runs with
/// draws disallowed, so each one yields the winner the next round needs. A
/// feed pointing at a missing winner means the pipeline was driven out of
/// order and surfaces as `UnresolvedSlot` rather than a quietly shorter
/// round.
pub struct KnockoutEngine;

impl KnockoutEngine {
    pub fn simulate<R: Rng>(
        teams: &BTreeMap<String, Team>,
        tables: &BTreeMap<char, GroupTable>,
        assignment: &ThirdPlaceAssignment,
        template: &BracketTemplate,
        rng: &mut R,
    ) -> Result<KnockoutStage, TournamentError> {
        let mut round_of_32 = Vec::with_capacity(template.round_of_32.len());
        let mut winners = Vec::with_capacity(template.round_of_32.len());

        for tie in &template.round_of_32 {
            let home = tie.home.resolve(tables, assignment)?;
            let away = tie.away.resolve(tables, assignment)?;
            let result = Self::play(teams, &home, &away, MatchSettings::knockout(), rng)?;
            winners.push(winner_of(&result));
            round_of_32.push(result);
        }

        let (round_of_16, winners) =
            Self::play_round(teams, &winners, &template.round_of_16_feeds, "R16", rng)?;
        let (quarter_finals, winners) =
            Self::play_round(teams, &winners, &template.quarter_final_feeds, "QF", rng)?;
        let (semi_finals, finalists) =
            Self::play_round(teams, &winners, &template.semi_final_feeds, "SF", rng)?;

        let losers: Vec<String> = semi_finals
            .iter()
            .map(|m| m.loser().expect("semi-final has a loser").to_string())
            .collect();
        let third_place_match =
            Self::play(teams, &losers[0], &losers[1], MatchSettings::knockout(), rng)?;

        let final_match = Self::play(
            teams,
            &finalists[0],
            &finalists[1],
            MatchSettings::knockout().with_commentary(),
            rng,
        )?;

        Ok(KnockoutStage {
            round_of_32,
            round_of_16,
            quarter_finals,
            semi_finals,
            third_place_match,
            final_match,
        })
    }

    fn play_round<R: Rng>(
        teams: &BTreeMap<String, Team>,
        previous_winners: &[String],
        feeds: &[(usize, usize)],
        round: &str,
        rng: &mut R,
    ) -> Result<(Vec<MatchResult>, Vec<String>), TournamentError> {
        let mut matches = Vec::with_capacity(feeds.len());
        let mut winners = Vec::with_capacity(feeds.len());

        for (index, &(home_feed, away_feed)) in feeds.iter().enumerate() {
            let home = feeder(previous_winners, home_feed, round, index)?;
            let away = feeder(previous_winners, away_feed, round, index)?;

            let result = Self::play(teams, home, away, MatchSettings::knockout(), rng)?;
            winners.push(winner_of(&result));
            matches.push(result);
        }

        Ok((matches, winners))
    }

    fn play<R: Rng>(
        teams: &BTreeMap<String, Team>,
        home: &str,
        away: &str,
        settings: MatchSettings,
        rng: &mut R,
    ) -> Result<MatchResult, TournamentError> {
        let home_team = teams
            .get(home)
            .ok_or_else(|| TournamentError::UnknownTeam(home.to_string()))?;
        let away_team = teams
            .get(away)
            .ok_or_else(|| TournamentError::UnknownTeam(away.to_string()))?;

        Ok(MatchEngine::play(home_team, away_team, settings, rng))
    }
}

fn winner_of(result: &MatchResult) -> String {
    result
        .winner
        .clone()
        .expect("knockout match is played with draws disallowed")
}

fn feeder<'w>(
    winners: &'w [String],
    index: usize,
    round: &str,
    tie: usize,
) -> Result<&'w String, TournamentError> {
    winners
        .get(index)
        .ok_or_else(|| TournamentError::UnresolvedSlot {
            slot: format!("{round} tie {tie} feeder {index}"),
        })
}
