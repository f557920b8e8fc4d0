use crate::group::table::{GroupTable, GroupStanding, standing_order};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// 8 of the 12 third-placed teams advance to the knockout stage.
pub const QUALIFYING_THIRD_PLACE_TEAMS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThirdPlaceEntry {
    pub group: char,
    pub standing: GroupStanding,
}

/// All third-place finishers ranked with the in-group ordering; the leading
/// eight qualify.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThirdPlaceRanking {
    pub ranked: Vec<ThirdPlaceEntry>,
}

impl ThirdPlaceRanking {
    pub fn from_tables(tables: &BTreeMap<char, GroupTable>) -> Self {
        let mut ranked: Vec<ThirdPlaceEntry> = tables
            .values()
            .filter_map(|table| {
                table.third_place().map(|standing| ThirdPlaceEntry {
                    group: table.group,
                    standing: standing.clone(),
                })
            })
            .collect();

        // Group letter settles full-key ties so the cut stays deterministic.
        ranked.sort_by(|a, b| {
            standing_order(&a.standing, &b.standing).then(a.group.cmp(&b.group))
        });

        ThirdPlaceRanking { ranked }
    }

    pub fn qualified(&self) -> &[ThirdPlaceEntry] {
        &self.ranked[..QUALIFYING_THIRD_PLACE_TEAMS.min(self.ranked.len())]
    }

    pub fn qualified_groups(&self) -> BTreeSet<char> {
        self.qualified().iter().map(|entry| entry.group).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::even_field;
    use crate::group::GroupStageEngine;
    use crate::scenario::Scenario;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_selects_eight_of_twelve() {
        let (teams, groups) = even_field();
        let mut rng = StdRng::seed_from_u64(51);
        let tables = GroupStageEngine::simulate(&teams, &groups, &Scenario::default(), &mut rng);

        let ranking = ThirdPlaceRanking::from_tables(&tables);
        assert_eq!(ranking.ranked.len(), 12);
        assert_eq!(ranking.qualified().len(), 8);
        assert_eq!(ranking.qualified_groups().len(), 8);

        // Every entry is the rank-3 team of its group.
        for entry in &ranking.ranked {
            let table = &tables[&entry.group];
            assert_eq!(table.third_place().unwrap().team, entry.standing.team);
        }

        // The ranking respects the shared order.
        for pair in ranking.ranked.windows(2) {
            assert_ne!(
                standing_order(&pair[0].standing, &pair[1].standing),
                std::cmp::Ordering::Greater
            );
        }
    }
}
