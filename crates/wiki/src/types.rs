use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// One `action=query` response page.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "continue")]
    pub continuation: Option<Continuation>,
    #[serde(default)]
    pub query: QueryBody,
}

/// Continuation tokens for the next page. Each token is opaque and must be
/// echoed back verbatim as the request parameter of the same name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Continuation {
    #[serde(rename = "continue")]
    pub token: Option<String>,
    pub plcontinue: Option<String>,
    pub blcontinue: Option<String>,
    pub gblcontinue: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryBody {
    #[serde(default)]
    pub pages: Vec<QueryPage>,
    #[serde(default)]
    pub backlinks: Vec<QueryPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryPage {
    pub title: String,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageLink {
    pub title: String,
}

/// Links found on one page. The same title may appear in more than one
/// `LinkResult` when its links span several response pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResult {
    pub title: String,
    pub links: Vec<String>,
}

/// One `action=wbgetentities` response.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityResponse {
    #[serde(default)]
    pub entities: BTreeMap<String, Entity>,
}

/// A Wikidata item: labels keyed by language code, claims keyed by property
/// id.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub labels: HashMap<String, Label>,
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
}

impl Entity {
    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(|l| l.value.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub language: String,
    pub value: String,
}

/// One statement on an entity: a main value plus optional qualifiers keyed by
/// property id.
#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
    pub mainsnak: Snak,
    pub qualifiers: Option<HashMap<String, Vec<Snak>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snak {
    pub datavalue: Option<DataValue>,
}

impl Snak {
    /// Entity id for item-valued snaks.
    pub fn value_id(&self) -> Option<&str> {
        self.datavalue.as_ref().and_then(|dv| dv.value.id())
    }

    /// Timestamp for time-valued snaks.
    pub fn value_time(&self) -> Option<&str> {
        self.datavalue.as_ref().and_then(|dv| dv.value.time())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataValue {
    pub value: ClaimValue,
}

/// A snak's value payload. Item values carry an `id` and time values a
/// `time`; every other datatype (strings, quantities, coordinates) decodes
/// into the raw variant and reads as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Structured {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        time: Option<String>,
    },
    Other(serde_json::Value),
}

impl ClaimValue {
    pub fn id(&self) -> Option<&str> {
        match self {
            ClaimValue::Structured { id, .. } => id.as_deref(),
            ClaimValue::Other(_) => None,
        }
    }

    pub fn time(&self) -> Option<&str> {
        match self {
            ClaimValue::Structured { time, .. } => time.as_deref(),
            ClaimValue::Other(_) => None,
        }
    }
}
