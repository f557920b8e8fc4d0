use crate::bracket::slot::BracketSlot;
use crate::error::TournamentError;
use serde::Serialize;
use std::collections::BTreeSet;

/// One Round-of-32 pairing from the official schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOf32Tie {
    /// Official match number (73-88).
    pub id: u16,
    pub home: BracketSlot,
    pub away: BracketSlot,
}

/// A third-place berth and the groups allowed to fill it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThirdPlaceSlot {
    /// Round-of-32 tie this berth belongs to.
    pub id: u16,
    pub eligible: BTreeSet<char>,
}

/// The complete knockout topology: 16 Round-of-32 ties, the winner-index
/// feeds for each later round, and the third-place eligibility table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketTemplate {
    pub round_of_32: Vec<RoundOf32Tie>,
    /// Pairs of indices into the Round-of-32 winners, in match order.
    pub round_of_16_feeds: Vec<(usize, usize)>,
    pub quarter_final_feeds: Vec<(usize, usize)>,
    pub semi_final_feeds: Vec<(usize, usize)>,
    pub third_place_slots: Vec<ThirdPlaceSlot>,
}

impl BracketTemplate {
    /// Structural validation; any failure is a fatal configuration error.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.round_of_32.len() != 16 {
            return Err(malformed(format!(
                "expected 16 round-of-32 ties, found {}",
                self.round_of_32.len()
            )));
        }

        Self::validate_feeds("round of 16", &self.round_of_16_feeds, 8, 16)?;
        Self::validate_feeds("quarter-finals", &self.quarter_final_feeds, 4, 8)?;
        Self::validate_feeds("semi-finals", &self.semi_final_feeds, 2, 4)?;

        let berth_ids: BTreeSet<u16> = self.third_place_slots.iter().map(|s| s.id).collect();
        if berth_ids.len() != self.third_place_slots.len() {
            return Err(malformed("duplicate third-place slot ids"));
        }
        if self.third_place_slots.iter().any(|s| s.eligible.is_empty()) {
            return Err(malformed("third-place slot with empty eligible set"));
        }

        // Every BestThird reference must have an eligibility entry, and every
        // entry must be referenced by exactly one tie.
        let mut referenced = BTreeSet::new();
        for tie in &self.round_of_32 {
            for slot in [&tie.home, &tie.away] {
                if let BracketSlot::BestThird { slot_id } = slot {
                    if !berth_ids.contains(slot_id) {
                        return Err(malformed(format!(
                            "tie {} references unknown third-place slot {slot_id}",
                            tie.id
                        )));
                    }
                    if !referenced.insert(*slot_id) {
                        return Err(malformed(format!(
                            "third-place slot {slot_id} referenced twice"
                        )));
                    }
                }
            }
        }
        if referenced != berth_ids {
            return Err(malformed("third-place slots not referenced by any tie"));
        }

        Ok(())
    }

    fn validate_feeds(
        round: &str,
        feeds: &[(usize, usize)],
        expected: usize,
        pool: usize,
    ) -> Result<(), TournamentError> {
        if feeds.len() != expected {
            return Err(malformed(format!(
                "expected {expected} {round} feeds, found {}",
                feeds.len()
            )));
        }

        let mut used = BTreeSet::new();
        for &(a, b) in feeds {
            for index in [a, b] {
                if index >= pool {
                    return Err(malformed(format!(
                        "{round} feed index {index} out of range (pool of {pool})"
                    )));
                }
                if !used.insert(index) {
                    return Err(malformed(format!(
                        "{round} feed index {index} used twice"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn malformed(detail: impl Into<String>) -> TournamentError {
    TournamentError::MalformedTemplate(detail.into())
}
