//! Catalog entities returned by the API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the "no filter" selection.
pub const ALL_UNIVERSES_LABEL: &str = "All";

/// A named grouping fighters belong to (a franchise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    #[serde(rename = "objectID")]
    pub id: String,
    pub name: String,
}

/// A fighter as returned by the catalog API.
///
/// Fields the client does not know about are kept in `extra` so the record
/// can be handed to the detail screen unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    #[serde(rename = "objectID")]
    pub id: String,
    pub name: String,
    pub universe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "imageURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Fighter {
    /// Minimal record, mostly useful for tests and fixtures.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        universe: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            universe: universe.into(),
            price: None,
            popular: None,
            rate: None,
            downloads: None,
            description: None,
            image_url: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// The universe selection: either no filter or a single universe by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum UniverseFilter {
    #[default]
    All,
    Named(String),
}

impl UniverseFilter {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Value for the `universe` query parameter; `None` means unfiltered.
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_UNIVERSES_LABEL,
            Self::Named(name) => name,
        }
    }

    pub fn matches(&self, fighter: &Fighter) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => fighter.universe == *name,
        }
    }
}

impl fmt::Display for UniverseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
