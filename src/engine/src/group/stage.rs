use crate::group::table::{GroupStanding, GroupTable, standing_order};
use crate::r#match::{MatchEngine, MatchResult, MatchSettings};
use crate::scenario::{RoundConstraints, Scenario};
use crate::team::Team;
use itertools::Itertools;
use rand::Rng;
use std::collections::BTreeMap;

/// Round-robin simulation for every group.
pub struct GroupStageEngine;

impl GroupStageEngine {
    /// Play all groups and return their finished tables, keyed by letter.
    ///
    /// Team codes are assumed valid; `TournamentSetup` rejects anything else
    /// before the pipeline starts.
    pub fn simulate<R: Rng>(
        teams: &BTreeMap<String, Team>,
        groups: &BTreeMap<char, Vec<String>>,
        scenario: &Scenario,
        rng: &mut R,
    ) -> BTreeMap<char, GroupTable> {
        groups
            .iter()
            .map(|(&group, members)| {
                (
                    group,
                    Self::simulate_group(teams, group, members, scenario, rng),
                )
            })
            .collect()
    }

    fn simulate_group<R: Rng>(
        teams: &BTreeMap<String, Team>,
        group: char,
        members: &[String],
        scenario: &Scenario,
        rng: &mut R,
    ) -> GroupTable {
        let mut standings: BTreeMap<&str, GroupStanding> = members
            .iter()
            .map(|code| {
                let team = teams.get(code).expect("group member validated by setup");
                (
                    code.as_str(),
                    GroupStanding::new(code.clone(), team.fifa_ranking),
                )
            })
            .collect();

        let mut matches = Vec::with_capacity(members.len() * (members.len() - 1) / 2);

        for (home_code, away_code) in members.iter().tuple_combinations() {
            // Locked results replace simulation for this pairing only.
            let result = match scenario.locked_results.get(home_code, away_code) {
                Some(score) => MatchResult::from_locked(home_code, away_code, score),
                None => {
                    let home = teams.get(home_code).expect("group member validated by setup");
                    let away = teams.get(away_code).expect("group member validated by setup");
                    MatchEngine::play(home, away, MatchSettings::group_stage(), rng)
                }
            };

            standings
                .get_mut(home_code.as_str())
                .expect("standing exists for every member")
                .record(result.score.home, result.score.away);
            standings
                .get_mut(away_code.as_str())
                .expect("standing exists for every member")
                .record(result.score.away, result.score.home);
            matches.push(result);
        }

        let mut ranked: Vec<GroupStanding> = standings.into_values().collect();
        ranked.sort_by(standing_order);
        apply_round_constraints(&mut ranked, group, &scenario.constraints);

        GroupTable {
            group,
            standings: ranked,
            matches,
        }
    }
}

/// Reorder a ranked table to honor forced outcomes. Statistics stay as
/// played; only positions move, and unaffected teams keep their order.
fn apply_round_constraints(
    standings: &mut Vec<GroupStanding>,
    group: char,
    constraints: &RoundConstraints,
) {
    if constraints.is_empty() {
        return;
    }

    standings.sort_by_key(|s| constraints.is_forced_exit(&s.team));

    if let Some(winner) = constraints.forced_winner(group) {
        if let Some(position) = standings.iter().position(|s| s.team == winner) {
            let row = standings.remove(position);
            standings.insert(0, row);
        }
    }
}
