use serde::{Deserialize, Serialize};

/// Party affiliation. The harvested vocabulary is two-party by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Republican,
    Democratic,
}

/// A resolved politician. `name` is the deduplication key downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    pub name: String,
    pub party: Party,
}

/// A directed link between two page titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}
