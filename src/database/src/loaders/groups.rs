use serde::Deserialize;
use std::collections::BTreeMap;

const STATIC_GROUPS_JSON: &str = include_str!("../../data/groups.json");

#[derive(Deserialize)]
struct GroupsEntity(BTreeMap<String, Vec<String>>);

pub struct GroupLoader;

impl GroupLoader {
    /// The official draw: 12 letters, four team codes each. Undecided playoff
    /// berths hold their most likely team; `groups_with_selections` swaps
    /// them for concrete picks.
    pub fn load() -> BTreeMap<char, Vec<String>> {
        let GroupsEntity(raw) =
            serde_json::from_str(STATIC_GROUPS_JSON).expect("embedded group data is well-formed");

        raw.into_iter()
            .map(|(letter, members)| {
                let mut chars = letter.chars();
                let group = chars.next().expect("group letter is non-empty");
                assert!(
                    chars.next().is_none() && group.is_ascii_uppercase(),
                    "group key '{letter}' is not a single letter"
                );
                (group, members)
            })
            .collect()
    }
}
