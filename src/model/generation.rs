//! Generation schema

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A grouping of the games based on the Pokémon they include
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    /// Abilities introduced in this generation
    pub abilities: Vec<NamedResource>,
    /// The name of this generation in different languages
    pub names: Vec<Name>,
    /// The main region traveled in this generation
    pub main_region: NamedResource,
    pub moves: Vec<NamedResource>,
    pub pokemon_species: Vec<NamedResource>,
    pub types: Vec<NamedResource>,
    pub version_groups: Vec<NamedResource>,
}

/// A localized name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Name {
    pub name: String,
    pub language: NamedResource,
}

impl Generation {
    /// Looks up the name of this generation in `language` (e.g. "en").
    pub fn localized_name(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.language.name == language)
            .map(|n| n.name.as_str())
    }
}
