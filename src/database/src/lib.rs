pub mod loaders;

pub use loaders::{
    BracketLoader, GroupLoader, HeadToHeadLoader, HeadToHeadRecord, HeadToHeadTable,
    PlayoffLoader, PlayoffSlot, TeamLoader,
};

use engine::bracket::BracketTemplate;
use engine::team::Team;
use log::{info, warn};
use std::collections::BTreeMap;

/// Everything static the simulation needs: the team registry, the official
/// draw, the knockout topology, playoff seats and historical records.
pub struct TournamentDatabase {
    pub teams: BTreeMap<String, Team>,
    pub groups: BTreeMap<char, Vec<String>>,
    pub template: BracketTemplate,
    pub playoff_slots: Vec<PlayoffSlot>,
    pub head_to_head: HeadToHeadTable,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> TournamentDatabase {
        let database = TournamentDatabase {
            teams: TeamLoader::load(),
            groups: GroupLoader::load(),
            template: BracketLoader::load(),
            playoff_slots: PlayoffLoader::load(),
            head_to_head: HeadToHeadLoader::load(),
        };

        info!(
            "📚 database loaded: {} teams, {} groups, {} playoff seats",
            database.teams.len(),
            database.groups.len(),
            database.playoff_slots.len()
        );

        database
    }
}

impl TournamentDatabase {
    /// The group draw with undecided playoff seats filled by `selections`
    /// (slot id → team code); seats without a valid pick keep their most
    /// likely team.
    pub fn groups_with_selections(
        &self,
        selections: &BTreeMap<String, String>,
    ) -> BTreeMap<char, Vec<String>> {
        let mut groups = self.groups.clone();

        for slot in &self.playoff_slots {
            let code = self.selected_code(slot, selections);
            let members = groups
                .get_mut(&slot.group)
                .unwrap_or_else(|| panic!("playoff slot {} names unknown group", slot.id));
            members[slot.position] = code.to_string();
        }

        groups
    }

    /// Private snapshot of the 48 participating teams under the given
    /// playoff selections, ready to hand to the engine.
    pub fn tournament_field(
        &self,
        selections: &BTreeMap<String, String>,
    ) -> BTreeMap<String, Team> {
        self.groups_with_selections(selections)
            .values()
            .flatten()
            .map(|code| {
                let team = self
                    .teams
                    .get(code)
                    .unwrap_or_else(|| panic!("draw references unknown team {code}"));
                (code.clone(), team.clone())
            })
            .collect()
    }

    fn selected_code<'a>(
        &self,
        slot: &'a PlayoffSlot,
        selections: &'a BTreeMap<String, String>,
    ) -> &'a str {
        match selections.get(&slot.id) {
            Some(code) if slot.candidates.contains(code) => code,
            Some(code) => {
                warn!(
                    "selection '{code}' is not a candidate for {}; keeping {}",
                    slot.id, slot.most_likely
                );
                &slot.most_likely
            }
            None => &slot.most_likely,
        }
    }
}
