use crate::tournament::{Stage, TournamentResult};
use std::collections::BTreeMap;

/// Raw hit counts across a batch of runs.
///
/// `merge` is associative and commutative, so per-worker partials can be
/// combined in any order without changing the totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Aggregate {
    pub runs: u32,
    pub stage_counts: BTreeMap<String, [u32; Stage::ALL.len()]>,
    pub champion_counts: BTreeMap<String, u32>,
    pub final_pairings: BTreeMap<(String, String), u32>,
}

impl Aggregate {
    /// Fold one finished tournament into the counts. Every listed team lands
    /// in exactly one stage bucket.
    pub fn absorb(mut self, result: &TournamentResult, codes: &[String]) -> Self {
        self.runs += 1;

        for code in codes {
            let stage = result.furthest_stage(code);
            self.stage_counts.entry(code.clone()).or_default()[stage.index()] += 1;
        }

        *self
            .champion_counts
            .entry(result.champion.clone())
            .or_default() += 1;
        *self
            .final_pairings
            .entry(result.final_pairing())
            .or_default() += 1;

        self
    }

    pub fn merge(mut self, other: Aggregate) -> Self {
        self.runs += other.runs;

        for (code, counts) in other.stage_counts {
            let mine = self.stage_counts.entry(code).or_default();
            for (slot, count) in mine.iter_mut().zip(counts) {
                *slot += count;
            }
        }
        for (code, count) in other.champion_counts {
            *self.champion_counts.entry(code).or_default() += count;
        }
        for (pairing, count) in other.final_pairings {
            *self.final_pairings.entry(pairing).or_default() += count;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{even_field, world_cup_template};
    use crate::scenario::Scenario;
    use crate::tournament::{TournamentSetup, simulate_tournament};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_counts_sum_to_run_total() {
        let (teams, groups) = even_field();
        let setup = TournamentSetup::new(groups, world_cup_template(), &teams).unwrap();
        let codes: Vec<String> = teams.keys().cloned().collect();

        let runs = 20;
        let mut aggregate = Aggregate::default();
        for seed in 0..runs {
            let mut rng = StdRng::seed_from_u64(seed);
            let result =
                simulate_tournament(&teams, &setup, &Scenario::default(), &mut rng).unwrap();
            aggregate = aggregate.absorb(&result, &codes);
        }

        assert_eq!(aggregate.runs, runs as u32);
        for counts in aggregate.stage_counts.values() {
            assert_eq!(counts.iter().sum::<u32>(), runs as u32);
        }
        assert_eq!(
            aggregate.champion_counts.values().sum::<u32>(),
            runs as u32
        );
        assert_eq!(aggregate.final_pairings.values().sum::<u32>(), runs as u32);
    }

    #[test]
    fn test_merge_order_does_not_matter() {
        let (teams, groups) = even_field();
        let setup = TournamentSetup::new(groups, world_cup_template(), &teams).unwrap();
        let codes: Vec<String> = teams.keys().cloned().collect();

        let partials: Vec<Aggregate> = (0..4)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let result =
                    simulate_tournament(&teams, &setup, &Scenario::default(), &mut rng).unwrap();
                Aggregate::default().absorb(&result, &codes)
            })
            .collect();

        let forward = partials
            .iter()
            .cloned()
            .fold(Aggregate::default(), Aggregate::merge);
        let backward = partials
            .into_iter()
            .rev()
            .fold(Aggregate::default(), Aggregate::merge);

        assert_eq!(forward, backward);
        assert_eq!(forward.runs, 4);
    }
}
