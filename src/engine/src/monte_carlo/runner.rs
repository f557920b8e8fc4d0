use crate::error::TournamentError;
use crate::monte_carlo::aggregate::Aggregate;
use crate::monte_carlo::report::MonteCarloReport;
use crate::scenario::Scenario;
use crate::team::Team;
use crate::tournament::TournamentSetup;
use crate::tournament::tournament::simulate_prepared;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Repeats the full tournament pipeline across a rayon worker pool and
/// reduces the outcomes into probability tables.
///
/// Run `i` always draws from `StdRng::seed_from_u64(base_seed + i)`, so a
/// batch is reproducible bit for bit no matter how rayon schedules it, and
/// the per-worker partial counts merge associatively.
pub struct MonteCarloRunner {
    runs: u32,
    base_seed: u64,
    cancel: Option<Arc<AtomicBool>>,
}

impl MonteCarloRunner {
    pub fn new(runs: u32, base_seed: u64) -> Self {
        MonteCarloRunner {
            runs,
            base_seed,
            cancel: None,
        }
    }

    /// Install a flag checked between runs. Raising it abandons the batch
    /// with `TournamentError::Cancelled`; partial counts are discarded.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn run(
        &self,
        teams: &BTreeMap<String, Team>,
        setup: &TournamentSetup,
        scenario: &Scenario,
    ) -> Result<MonteCarloReport, TournamentError> {
        // Rating adjustments are folded in once; every run shares the same
        // read-only snapshot.
        let field = scenario.adjusted_teams(teams);
        let codes: Vec<String> = field.keys().cloned().collect();

        info!(
            "🎲 dispatching {} tournament runs (base seed {})",
            self.runs, self.base_seed
        );

        let aggregate = (0..self.runs)
            .into_par_iter()
            .try_fold(Aggregate::default, |acc, run| {
                if self.is_cancelled() {
                    return Err(TournamentError::Cancelled);
                }

                let mut rng = StdRng::seed_from_u64(self.base_seed.wrapping_add(u64::from(run)));
                let result = simulate_prepared(&field, setup, scenario, &mut rng)?;
                Ok(acc.absorb(&result, &codes))
            })
            .try_reduce(Aggregate::default, |left, right| Ok(left.merge(right)))?;

        info!("🎲 aggregated {} runs", aggregate.runs);

        Ok(MonteCarloReport::from_aggregate(aggregate))
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
