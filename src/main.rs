use database::DatabaseLoader;
use engine::utils::TimeEstimation;
use engine::{MonteCarloRunner, Scenario, TournamentSetup};
use env_logger::Env;
use log::info;
use std::collections::BTreeMap;
use std::env;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let runs: u32 = env_or("RUNS", 1000);
    let seed: u64 = env_or("SEED", 2026);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    info!("database loaded: {} ms", estimated);

    let selections = BTreeMap::new();
    let field = database.tournament_field(&selections);
    let groups = database.groups_with_selections(&selections);
    let setup = TournamentSetup::new(groups, database.template.clone(), &field)
        .expect("embedded tournament data is valid");

    let runner = MonteCarloRunner::new(runs, seed);
    let (report, elapsed) =
        TimeEstimation::estimate(|| runner.run(&field, &setup, &Scenario::default()));
    let report = report.expect("simulation batch failed");

    info!("{} tournaments simulated: {} ms", report.runs, elapsed);

    let mut ranked: Vec<_> = report.odds.iter().collect();
    ranked.sort_by(|a, b| b.1.champion.total_cmp(&a.1.champion));

    info!("most likely champions:");
    for (code, odds) in ranked.iter().take(10) {
        info!("  {:<4} {:>5.1}%  ({})", code, odds.champion, field[*code].name);
    }

    if let Some(final_pairing) = &report.most_likely_final {
        info!(
            "most likely final: {} vs {} ({:.1}%)",
            final_pairing.teams.0, final_pairing.teams.1, final_pairing.share
        );
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
