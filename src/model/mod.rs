//! Catalog resource schemas
//!
//! The resolver treats these as opaque decode targets. Each top-level schema
//! implements [`Resource`], tying it to the [`ResourceKind`] whose path
//! segment it is fetched from.

pub mod generation;
pub mod pokemon;

pub use generation::{Generation, Name};
pub use pokemon::{
    Ability, AbilityPast, Cries, GameIndex, HeldItem, Move, MoveVersion, Pokemon, PokemonForm,
    Sprites, Stat, Type, TypePast,
};

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A name paired with the URL the named resource can be fetched from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// The catalog endpoints this SDK knows how to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pokemon,
    Generation,
    PokemonForm,
}

impl ResourceKind {
    /// Path segment under the base URL, e.g. `pokemon` in `{base}/pokemon/25`
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Pokemon => "pokemon",
            ResourceKind::Generation => "generation",
            ResourceKind::PokemonForm => "pokemon-form",
        }
    }

    /// Parses a path segment back into a kind.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().to_lowercase().as_str() {
            "pokemon" => Some(ResourceKind::Pokemon),
            "generation" => Some(ResourceKind::Generation),
            "pokemon-form" | "pokemon_form" | "form" => Some(ResourceKind::PokemonForm),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A schema that can be fetched by ID or name from a single endpoint
pub trait Resource: DeserializeOwned {
    const KIND: ResourceKind;
}

impl Resource for Pokemon {
    const KIND: ResourceKind = ResourceKind::Pokemon;
}

impl Resource for Generation {
    const KIND: ResourceKind = ResourceKind::Generation;
}

impl Resource for PokemonForm {
    const KIND: ResourceKind = ResourceKind::PokemonForm;
}
