use engine::team::{Confederation, Position, Roster, RosterPlayer, Team};
use serde::Deserialize;
use std::collections::BTreeMap;

const STATIC_TEAMS_JSON: &str = include_str!("../../data/teams.json");

#[derive(Deserialize)]
pub struct TeamEntity {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub confederation: Confederation,
    pub fifa_ranking: u16,
    pub attack: f32,
    pub defense: f32,
    pub midfield: f32,
    pub form: f32,
    /// Players keyed by position tag (FW/MF/DF/GK).
    pub roster: BTreeMap<String, Vec<String>>,
}

pub struct TeamLoader;

impl TeamLoader {
    /// Every team in the registry, qualified or still in the playoffs,
    /// keyed by code.
    pub fn load() -> BTreeMap<String, Team> {
        let entities: Vec<TeamEntity> =
            serde_json::from_str(STATIC_TEAMS_JSON).expect("embedded team data is well-formed");

        entities
            .into_iter()
            .map(|entity| {
                let team = Team::new(
                    entity.code.clone(),
                    entity.name,
                    entity.flag,
                    entity.confederation,
                    entity.fifa_ranking,
                    entity.attack,
                    entity.defense,
                    entity.midfield,
                    entity.form,
                    build_roster(&entity.code, entity.roster),
                );
                (entity.code, team)
            })
            .collect()
    }
}

fn build_roster(code: &str, groups: BTreeMap<String, Vec<String>>) -> Roster {
    let mut players = Vec::new();
    for (tag, names) in groups {
        let position = match tag.as_str() {
            "FW" => Position::Forward,
            "MF" => Position::Midfielder,
            "DF" => Position::Defender,
            "GK" => Position::Goalkeeper,
            other => panic!("unknown position tag '{other}' in roster of {code}"),
        };
        players.extend(names.into_iter().map(|name| RosterPlayer { name, position }));
    }
    Roster::new(players)
}
