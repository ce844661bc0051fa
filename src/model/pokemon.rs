//! Pokémon and Pokémon form schemas

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Data for a single Pokémon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// The base experience gained for defeating this Pokémon
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Set for exactly one Pokémon used as the default for each species
    pub is_default: bool,
    /// Almost national order, except families are grouped together
    pub order: i32,
    /// Weight in hectograms
    pub weight: u32,
    pub abilities: Vec<Ability>,
    /// Abilities this Pokémon had in previous generations
    pub past_abilities: Vec<AbilityPast>,
    pub forms: Vec<NamedResource>,
    pub game_indices: Vec<GameIndex>,
    pub held_items: Vec<HeldItem>,
    /// Link to the location areas this Pokémon can be encountered in
    pub location_area_encounters: String,
    pub moves: Vec<Move>,
    pub types: Vec<Type>,
    /// Types this Pokémon had in previous generations
    pub past_types: Vec<TypePast>,
    pub sprites: Sprites,
    pub cries: Cries,
    pub species: NamedResource,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    pub is_hidden: bool,
    pub slot: u32,
    pub ability: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityPast {
    pub generation: NamedResource,
    pub abilities: Vec<Ability>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Type {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypePast {
    pub generation: NamedResource,
    pub types: Vec<Type>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameIndex {
    pub game_index: u32,
    pub version: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldItem {
    pub item: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Move {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    pub version_group_details: Vec<MoveVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveVersion {
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
    pub level_learned_at: u32,
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub stat: NamedResource,
    pub effort: u32,
    pub base_stat: u32,
}

/// Sprite URLs; the API sends `null` for sprites that do not exist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny_female: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny_female: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

/// A visual form of a Pokémon. Only a subset of the API fields is modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonForm {
    pub id: u32,
    pub name: String,
    /// Sort order across all forms
    pub order: i32,
    /// Sort order within a species' forms
    pub form_order: i32,
    pub is_default: bool,
    pub is_battle_only: bool,
    pub is_mega: bool,
}
