use serde::Deserialize;

const STATIC_PLAYOFFS_JSON: &str = include_str!("../../data/playoffs.json");

/// A group seat still undecided until the March playoff finals, with the
/// teams that can claim it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayoffSlot {
    pub id: String,
    pub group: char,
    /// Seat index inside the group's draw order.
    pub position: usize,
    pub label: String,
    pub candidates: Vec<String>,
    pub most_likely: String,
}

pub struct PlayoffLoader;

impl PlayoffLoader {
    pub fn load() -> Vec<PlayoffSlot> {
        let slots: Vec<PlayoffSlot> = serde_json::from_str(STATIC_PLAYOFFS_JSON)
            .expect("embedded playoff data is well-formed");

        for slot in &slots {
            assert!(
                slot.candidates.contains(&slot.most_likely),
                "default pick for {} is not among its candidates",
                slot.id
            );
        }

        slots
    }
}
