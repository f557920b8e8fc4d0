use crate::bracket::BracketTemplate;
use crate::error::TournamentError;
use crate::team::Team;
use std::collections::{BTreeMap, BTreeSet};

pub const GROUP_COUNT: usize = 12;
pub const GROUP_SIZE: usize = 4;

/// Validated tournament configuration: the group draw plus the knockout
/// topology. Construction is the single place configuration errors surface;
/// the pipeline afterwards trusts it.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSetup {
    groups: BTreeMap<char, Vec<String>>,
    template: BracketTemplate,
}

impl TournamentSetup {
    pub fn new(
        groups: BTreeMap<char, Vec<String>>,
        template: BracketTemplate,
        teams: &BTreeMap<String, Team>,
    ) -> Result<Self, TournamentError> {
        if groups.len() != GROUP_COUNT {
            return Err(TournamentError::MalformedTemplate(format!(
                "expected {GROUP_COUNT} groups, found {}",
                groups.len()
            )));
        }

        let mut seen = BTreeSet::new();
        for (&group, members) in &groups {
            if members.len() != GROUP_SIZE {
                return Err(TournamentError::InvalidGroupSize {
                    group,
                    expected: GROUP_SIZE,
                    found: members.len(),
                });
            }
            for code in members {
                if !teams.contains_key(code) {
                    return Err(TournamentError::UnknownTeam(code.clone()));
                }
                if !seen.insert(code.clone()) {
                    return Err(TournamentError::MalformedTemplate(format!(
                        "team {code} drawn into more than one group"
                    )));
                }
            }
        }

        template.validate()?;

        Ok(TournamentSetup { groups, template })
    }

    pub fn groups(&self) -> &BTreeMap<char, Vec<String>> {
        &self.groups
    }

    pub fn template(&self) -> &BracketTemplate {
        &self.template
    }
}
