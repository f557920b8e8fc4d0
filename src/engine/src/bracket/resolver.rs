use crate::bracket::template::ThirdPlaceSlot;
use crate::error::TournamentError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The third-place draw: which qualified group fills each berth.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThirdPlaceAssignment {
    by_slot: BTreeMap<u16, char>,
}

impl ThirdPlaceAssignment {
    pub fn group_for(&self, slot_id: u16) -> Option<char> {
        self.by_slot.get(&slot_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, char)> + '_ {
        self.by_slot.iter().map(|(&slot, &group)| (slot, group))
    }

    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
}

/// Map the qualified groups onto the third-place berths.
///
/// Depth-first backtracking: berths in ascending id order, candidate groups
/// in ascending letter order, with insert/remove restore on the remaining
/// set at every step. The official eligibility table always admits a
/// solution for a full qualifying set; failure therefore means broken
/// configuration and is returned as a fatal error, never patched over with a
/// partial greedy fill.
pub fn assign_third_place_slots(
    qualified: &BTreeSet<char>,
    slots: &[ThirdPlaceSlot],
) -> Result<ThirdPlaceAssignment, TournamentError> {
    let mut ordered: Vec<&ThirdPlaceSlot> = slots.iter().collect();
    ordered.sort_by_key(|slot| slot.id);

    let mut remaining = qualified.clone();
    let mut by_slot = BTreeMap::new();

    if qualified.len() == slots.len() && fill(&ordered, 0, &mut remaining, &mut by_slot) {
        Ok(ThirdPlaceAssignment { by_slot })
    } else {
        Err(TournamentError::UnsolvableThirdPlaceDraw {
            groups: qualified.iter().copied().collect(),
        })
    }
}

fn fill(
    slots: &[&ThirdPlaceSlot],
    index: usize,
    remaining: &mut BTreeSet<char>,
    by_slot: &mut BTreeMap<u16, char>,
) -> bool {
    let Some(slot) = slots.get(index) else {
        return remaining.is_empty();
    };

    let candidates: Vec<char> = slot.eligible.intersection(remaining).copied().collect();
    for group in candidates {
        by_slot.insert(slot.id, group);
        remaining.remove(&group);

        if fill(slots, index + 1, remaining, by_slot) {
            return true;
        }

        remaining.insert(group);
        by_slot.remove(&slot.id);
    }

    false
}
