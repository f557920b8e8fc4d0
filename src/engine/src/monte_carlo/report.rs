use crate::monte_carlo::aggregate::Aggregate;
use crate::tournament::Stage;
use serde::Serialize;
use std::collections::BTreeMap;

/// One team's aggregated chances, as percentages rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamOdds {
    /// Share of runs ending in each stage bucket; buckets partition the runs.
    pub stages: BTreeMap<Stage, f64>,
    /// Share of runs won outright.
    pub champion: f64,
}

/// The most frequent unordered finalist pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalPairing {
    pub teams: (String, String),
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloReport {
    pub runs: u32,
    pub odds: BTreeMap<String, TeamOdds>,
    pub most_likely_final: Option<FinalPairing>,
}

impl MonteCarloReport {
    pub(crate) fn from_aggregate(aggregate: Aggregate) -> Self {
        let runs = aggregate.runs;

        let odds = aggregate
            .stage_counts
            .iter()
            .map(|(code, counts)| {
                let stages = Stage::ALL
                    .iter()
                    .map(|&stage| (stage, percentage(counts[stage.index()], runs)))
                    .collect();
                let champion = percentage(
                    aggregate.champion_counts.get(code).copied().unwrap_or(0),
                    runs,
                );

                (code.clone(), TeamOdds { stages, champion })
            })
            .collect();

        let most_likely_final = aggregate
            .final_pairings
            .iter()
            .max_by_key(|&(_, &count)| count)
            .map(|(pairing, &count)| FinalPairing {
                teams: pairing.clone(),
                share: percentage(count, runs),
            });

        MonteCarloReport {
            runs,
            odds,
            most_likely_final,
        }
    }
}

/// Count as a percentage of runs, rounded to one decimal.
fn percentage(count: u32, runs: u32) -> f64 {
    if runs == 0 {
        return 0.0;
    }
    (f64::from(count) * 1000.0 / f64::from(runs)).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(0, 100), 0.0);
        assert_eq!(percentage(100, 100), 100.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_report_from_counts() {
        let mut aggregate = Aggregate::default();
        aggregate.runs = 4;
        aggregate.stage_counts.insert("AAA".into(), [1, 0, 0, 0, 1, 0, 2]);
        aggregate.champion_counts.insert("AAA".into(), 2);
        aggregate
            .final_pairings
            .insert(("AAA".into(), "BBB".into()), 3);
        aggregate
            .final_pairings
            .insert(("AAA".into(), "CCC".into()), 1);

        let report = MonteCarloReport::from_aggregate(aggregate);
        let odds = &report.odds["AAA"];

        assert_eq!(odds.champion, 50.0);
        assert_eq!(odds.stages[&Stage::Winner], 50.0);
        assert_eq!(odds.stages[&Stage::SemiFinal], 25.0);
        assert_eq!(odds.stages[&Stage::RoundOf32], 0.0);

        let final_pairing = report.most_likely_final.unwrap();
        assert_eq!(final_pairing.teams, ("AAA".into(), "BBB".into()));
        assert_eq!(final_pairing.share, 75.0);
    }
}
