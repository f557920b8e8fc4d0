use engine::bracket::{BracketSlot, BracketTemplate, RoundOf32Tie, ThirdPlaceSlot};
use serde::Deserialize;
use std::collections::BTreeSet;

const STATIC_BRACKET_JSON: &str = include_str!("../../data/bracket.json");

#[derive(Deserialize)]
struct BracketEntity {
    round_of_32: Vec<TieEntity>,
    round_of_16_feeds: Vec<(usize, usize)>,
    quarter_final_feeds: Vec<(usize, usize)>,
    semi_final_feeds: Vec<(usize, usize)>,
    third_place_slots: Vec<ThirdPlaceSlotEntity>,
}

#[derive(Deserialize)]
struct TieEntity {
    id: u16,
    /// Slot notation: `1A` group winner, `2A` runner-up, `3_ABCDF` best
    /// third-placed team from one of the listed groups.
    home: String,
    away: String,
}

#[derive(Deserialize)]
struct ThirdPlaceSlotEntity {
    id: u16,
    eligible: String,
}

pub struct BracketLoader;

impl BracketLoader {
    /// The knockout topology, with slot notation parsed into typed slots
    /// here and never re-parsed afterwards.
    pub fn load() -> BracketTemplate {
        let entity: BracketEntity =
            serde_json::from_str(STATIC_BRACKET_JSON).expect("embedded bracket data is well-formed");

        let third_place_slots: Vec<ThirdPlaceSlot> = entity
            .third_place_slots
            .iter()
            .map(|slot| ThirdPlaceSlot {
                id: slot.id,
                eligible: slot.eligible.chars().collect(),
            })
            .collect();

        let round_of_32 = entity
            .round_of_32
            .iter()
            .map(|tie| RoundOf32Tie {
                id: tie.id,
                home: parse_slot(&tie.home, tie.id, &third_place_slots),
                away: parse_slot(&tie.away, tie.id, &third_place_slots),
            })
            .collect();

        let template = BracketTemplate {
            round_of_32,
            round_of_16_feeds: entity.round_of_16_feeds,
            quarter_final_feeds: entity.quarter_final_feeds,
            semi_final_feeds: entity.semi_final_feeds,
            third_place_slots,
        };

        template
            .validate()
            .expect("embedded bracket template is structurally valid");
        template
    }
}

fn parse_slot(raw: &str, tie_id: u16, slots: &[ThirdPlaceSlot]) -> BracketSlot {
    let mut chars = raw.chars();
    let kind = chars.next();
    match kind {
        Some('1') | Some('2') => {
            let group = chars.next().unwrap_or_else(|| {
                panic!("bracket slot '{raw}' is missing its group letter")
            });
            assert!(
                chars.next().is_none() && group.is_ascii_uppercase(),
                "bracket slot '{raw}' is not in 1X/2X notation"
            );
            if kind == Some('1') {
                BracketSlot::Winner(group)
            } else {
                BracketSlot::RunnerUp(group)
            }
        }
        Some('3') => {
            let listed: BTreeSet<char> = raw
                .strip_prefix("3_")
                .unwrap_or_else(|| panic!("bracket slot '{raw}' is not in 3_XYZ notation"))
                .chars()
                .collect();
            let slot = slots
                .iter()
                .find(|s| s.id == tie_id)
                .unwrap_or_else(|| panic!("tie {tie_id} has no third-place eligibility entry"));
            assert_eq!(
                listed, slot.eligible,
                "tie {tie_id} eligibility disagrees with the third-place table"
            );
            BracketSlot::BestThird { slot_id: tie_id }
        }
        _ => panic!("unrecognized bracket slot '{raw}'"),
    }
}
