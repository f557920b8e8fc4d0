use crate::bracket::assign_third_place_slots;
use crate::error::TournamentError;
use crate::group::{GroupStageEngine, ThirdPlaceRanking};
use crate::knockout::KnockoutEngine;
use crate::scenario::Scenario;
use crate::team::Team;
use crate::tournament::result::TournamentResult;
use crate::tournament::setup::TournamentSetup;
use log::debug;
use rand::Rng;
use std::collections::BTreeMap;

/// Run one complete tournament: groups, third-place draw, knockout.
///
/// Scenario rating adjustments are applied to a private copy of the team
/// snapshot first; the caller's map is never touched.
pub fn simulate_tournament<R: Rng>(
    teams: &BTreeMap<String, Team>,
    setup: &TournamentSetup,
    scenario: &Scenario,
    rng: &mut R,
) -> Result<TournamentResult, TournamentError> {
    if scenario.adjustments.is_empty() {
        simulate_prepared(teams, setup, scenario, rng)
    } else {
        let adjusted = scenario.adjusted_teams(teams);
        simulate_prepared(&adjusted, setup, scenario, rng)
    }
}

/// The pipeline proper, assuming rating adjustments are already folded into
/// `teams`. The Monte Carlo runner calls this directly so the adjustment
/// clone happens once per batch instead of once per run.
pub(crate) fn simulate_prepared<R: Rng>(
    teams: &BTreeMap<String, Team>,
    setup: &TournamentSetup,
    scenario: &Scenario,
    rng: &mut R,
) -> Result<TournamentResult, TournamentError> {
    debug!("simulating group stage");
    let group_tables = GroupStageEngine::simulate(teams, setup.groups(), scenario, rng);

    let third_place_ranking = ThirdPlaceRanking::from_tables(&group_tables);
    let third_place_assignment = assign_third_place_slots(
        &third_place_ranking.qualified_groups(),
        &setup.template().third_place_slots,
    )?;

    debug!("simulating knockout stage");
    let knockout = KnockoutEngine::simulate(
        teams,
        &group_tables,
        &third_place_assignment,
        setup.template(),
        rng,
    )?;

    let champion = knockout.champion().to_string();
    let runner_up = knockout.runner_up().to_string();
    let third_place = knockout.third_place().to_string();
    debug!("podium: {champion}, {runner_up}, {third_place}");

    Ok(TournamentResult {
        group_tables,
        third_place_ranking,
        third_place_assignment,
        knockout,
        champion,
        runner_up,
        third_place,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{even_field, world_cup_template};
    use crate::scenario::RatingAdjustment;
    use crate::tournament::Stage;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (BTreeMap<String, Team>, TournamentSetup) {
        let (teams, groups) = even_field();
        let setup = TournamentSetup::new(groups, world_cup_template(), &teams).unwrap();
        (teams, setup)
    }

    #[test]
    fn test_full_pipeline_produces_complete_tree() {
        let (teams, setup) = setup();
        let mut rng = StdRng::seed_from_u64(81);

        let result = simulate_tournament(&teams, &setup, &Scenario::default(), &mut rng).unwrap();

        assert_eq!(result.group_tables.len(), 12);
        assert_eq!(result.third_place_ranking.ranked.len(), 12);
        assert_eq!(result.third_place_assignment.len(), 8);
        assert_eq!(result.knockout.round_of_32.len(), 16);
        assert_eq!(result.champion, result.knockout.champion());
        assert_ne!(result.champion, result.runner_up);
        assert_eq!(result.furthest_stage(&result.champion), Stage::Winner);
    }

    #[test]
    fn test_fixed_seed_reproduces_identical_trees() {
        let (teams, setup) = setup();
        let mut scenario = Scenario::default();
        scenario
            .locked_results
            .insert("T01", "T02", crate::r#match::Score::new(2, 1));

        let first = simulate_tournament(
            &teams,
            &setup,
            &scenario,
            &mut StdRng::seed_from_u64(82),
        )
        .unwrap();
        let second = simulate_tournament(
            &teams,
            &setup,
            &scenario,
            &mut StdRng::seed_from_u64(82),
        )
        .unwrap();

        assert_eq!(first, second);

        let different = simulate_tournament(
            &teams,
            &setup,
            &scenario,
            &mut StdRng::seed_from_u64(83),
        )
        .unwrap();
        assert_ne!(first, different);
    }

    #[test]
    fn test_stage_buckets_are_exhaustive_and_exclusive() {
        let (teams, setup) = setup();
        let mut rng = StdRng::seed_from_u64(84);
        let result = simulate_tournament(&teams, &setup, &Scenario::default(), &mut rng).unwrap();

        let mut per_stage = [0usize; Stage::ALL.len()];
        for code in teams.keys() {
            per_stage[result.furthest_stage(code).index()] += 1;
        }

        assert_eq!(per_stage.iter().sum::<usize>(), 48);
        assert_eq!(per_stage[Stage::Winner.index()], 1);
        assert_eq!(per_stage[Stage::Final.index()], 1);
        assert_eq!(per_stage[Stage::SemiFinal.index()], 2);
        assert_eq!(per_stage[Stage::QuarterFinal.index()], 4);
        assert_eq!(per_stage[Stage::RoundOf16.index()], 8);
        assert_eq!(per_stage[Stage::RoundOf32.index()], 16);
        assert_eq!(per_stage[Stage::GroupExit.index()], 16);
    }

    #[test]
    fn test_adjustments_do_not_leak_into_caller_snapshot() {
        let (teams, setup) = setup();
        let mut scenario = Scenario::default();
        scenario
            .adjustments
            .insert("T01".to_string(), RatingAdjustment::delta(1.0, 1.0, 0.0));

        let before = teams["T01"].attack();
        let mut rng = StdRng::seed_from_u64(85);
        simulate_tournament(&teams, &setup, &scenario, &mut rng).unwrap();

        assert_eq!(teams["T01"].attack(), before);
    }
}
