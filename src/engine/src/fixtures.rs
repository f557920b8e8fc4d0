//! Shared test fixtures: rated teams, a full 48-team field, and the official
//! Round-of-32 bracket topology.

use crate::bracket::{BracketSlot, BracketTemplate, RoundOf32Tie, ThirdPlaceSlot};
use crate::team::{Confederation, Position, Roster, RosterPlayer, Team};
use std::collections::BTreeMap;

pub(crate) fn rated_team(
    code: &str,
    attack: f32,
    defense: f32,
    form: f32,
    fifa_ranking: u16,
) -> Team {
    let roster = Roster::new(vec![
        RosterPlayer {
            name: format!("{code} Forward"),
            position: Position::Forward,
        },
        RosterPlayer {
            name: format!("{code} Midfielder"),
            position: Position::Midfielder,
        },
        RosterPlayer {
            name: format!("{code} Defender"),
            position: Position::Defender,
        },
        RosterPlayer {
            name: format!("{code} Keeper"),
            position: Position::Goalkeeper,
        },
    ]);

    Team::new(
        code.to_string(),
        code.to_string(),
        String::new(),
        Confederation::Uefa,
        fifa_ranking,
        attack,
        defense,
        1.2,
        form,
        roster,
    )
}

pub(crate) fn team(code: &str, attack: f32, defense: f32, form: f32) -> Team {
    rated_team(code, attack, defense, form, 20)
}

pub(crate) type Field = (BTreeMap<String, Team>, BTreeMap<char, Vec<String>>);

/// 48 evenly rated teams T01..T48 drawn into groups A-L, rankings 1..=48.
pub(crate) fn even_field() -> Field {
    field_with_rating(|_| (1.4, 1.4, 0.5))
}

/// Build the 48-team field with per-team ratings chosen by the caller from
/// the team index (0..48).
pub(crate) fn field_with_rating(rating: impl Fn(usize) -> (f32, f32, f32)) -> Field {
    let mut teams = BTreeMap::new();
    let mut groups = BTreeMap::new();

    for (group_index, letter) in ('A'..='L').enumerate() {
        let mut members = Vec::new();
        for seat in 0..4 {
            let index = group_index * 4 + seat;
            let code = format!("T{:02}", index + 1);
            let (attack, defense, form) = rating(index);
            teams.insert(
                code.clone(),
                rated_team(&code, attack, defense, form, index as u16 + 1),
            );
            members.push(code);
        }
        groups.insert(letter, members);
    }

    (teams, groups)
}

/// The official 2026 Round-of-32 topology with its third-place eligibility
/// table, mirroring the embedded database template.
pub(crate) fn world_cup_template() -> BracketTemplate {
    let ties = [
        (73, BracketSlot::RunnerUp('A'), BracketSlot::RunnerUp('B')),
        (74, BracketSlot::Winner('E'), BracketSlot::BestThird { slot_id: 74 }),
        (75, BracketSlot::Winner('F'), BracketSlot::RunnerUp('C')),
        (76, BracketSlot::Winner('C'), BracketSlot::RunnerUp('F')),
        (77, BracketSlot::Winner('I'), BracketSlot::BestThird { slot_id: 77 }),
        (78, BracketSlot::RunnerUp('E'), BracketSlot::RunnerUp('I')),
        (79, BracketSlot::Winner('A'), BracketSlot::BestThird { slot_id: 79 }),
        (80, BracketSlot::Winner('L'), BracketSlot::BestThird { slot_id: 80 }),
        (81, BracketSlot::Winner('D'), BracketSlot::BestThird { slot_id: 81 }),
        (82, BracketSlot::Winner('G'), BracketSlot::BestThird { slot_id: 82 }),
        (83, BracketSlot::RunnerUp('K'), BracketSlot::RunnerUp('L')),
        (84, BracketSlot::Winner('H'), BracketSlot::RunnerUp('J')),
        (85, BracketSlot::Winner('B'), BracketSlot::BestThird { slot_id: 85 }),
        (86, BracketSlot::Winner('J'), BracketSlot::RunnerUp('H')),
        (87, BracketSlot::Winner('K'), BracketSlot::BestThird { slot_id: 87 }),
        (88, BracketSlot::RunnerUp('D'), BracketSlot::RunnerUp('G')),
    ];

    let eligibility: [(u16, &str); 8] = [
        (74, "ABCDF"),
        (77, "CDFGH"),
        (79, "CEFHI"),
        (80, "EHIJK"),
        (81, "BEFIJ"),
        (82, "AEHIJ"),
        (85, "EFGIJ"),
        (87, "DEIJL"),
    ];

    BracketTemplate {
        round_of_32: ties
            .into_iter()
            .map(|(id, home, away)| RoundOf32Tie { id, home, away })
            .collect(),
        round_of_16_feeds: vec![(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        quarter_final_feeds: vec![(0, 1), (2, 3), (4, 5), (6, 7)],
        semi_final_feeds: vec![(0, 1), (2, 3)],
        third_place_slots: eligibility
            .into_iter()
            .map(|(id, groups)| ThirdPlaceSlot {
                id,
                eligible: groups.chars().collect(),
            })
            .collect(),
    }
}
