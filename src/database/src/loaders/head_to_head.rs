use serde::Deserialize;
use std::collections::HashMap;

const STATIC_HEAD_TO_HEAD_JSON: &str = include_str!("../../data/head_to_head.json");

#[derive(Deserialize)]
struct HeadToHeadEntity {
    home: String,
    away: String,
    played: u16,
    home_wins: u16,
    draws: u16,
    away_wins: u16,
}

/// All-time record between two sides, oriented to the lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadToHeadRecord {
    pub played: u16,
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
}

/// Historical records for the marquee matchups. Display material for the
/// surrounding app; the match engine's goal model does not read it.
#[derive(Debug, Clone, Default)]
pub struct HeadToHeadTable {
    records: HashMap<(String, String), HeadToHeadRecord>,
}

impl HeadToHeadTable {
    /// Record for `a` vs `b`, wins counted from `a`'s point of view,
    /// whichever order the pairing was stored in.
    pub fn get(&self, a: &str, b: &str) -> Option<HeadToHeadRecord> {
        if let Some(record) = self.records.get(&(a.to_string(), b.to_string())) {
            return Some(*record);
        }
        self.records
            .get(&(b.to_string(), a.to_string()))
            .map(|record| HeadToHeadRecord {
                played: record.played,
                wins: record.losses,
                draws: record.draws,
                losses: record.wins,
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct HeadToHeadLoader;

impl HeadToHeadLoader {
    pub fn load() -> HeadToHeadTable {
        let entities: Vec<HeadToHeadEntity> = serde_json::from_str(STATIC_HEAD_TO_HEAD_JSON)
            .expect("embedded head-to-head data is well-formed");

        let records = entities
            .into_iter()
            .map(|e| {
                (
                    (e.home, e.away),
                    HeadToHeadRecord {
                        played: e.played,
                        wins: e.home_wins,
                        draws: e.draws,
                        losses: e.away_wins,
                    },
                )
            })
            .collect();

        HeadToHeadTable { records }
    }
}
