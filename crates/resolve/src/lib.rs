pub mod model;

pub use model::{Edge, Party, Politician};

use chrono::{DateTime, FixedOffset};
use wiki::{Claim, Entity};

/// Wikidata property and entity ids the resolver keys on. Passed in at
/// construction so nothing here is tied to one deployment's vocabulary;
/// defaults match the deployed one.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// P106
    pub occupation: String,
    /// Q82955
    pub politician: String,
    /// P39
    pub position_held: String,
    /// P4100
    pub parliamentary_group: String,
    /// Q29468
    pub republican: String,
    /// Q29552
    pub democratic: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            occupation: "P106".to_string(),
            politician: "Q82955".to_string(),
            position_held: "P39".to_string(),
            parliamentary_group: "P4100".to_string(),
            republican: "Q29468".to_string(),
            democratic: "Q29552".to_string(),
        }
    }
}

/// Decides which fetched entities are politicians and which party they
/// currently belong to.
pub struct Resolver {
    vocabulary: Vocabulary,
}

impl Resolver {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// True iff `entity` has at least one claim under `property` whose main
    /// value is the item `expected`.
    pub fn has_claim_value(&self, entity: &Entity, property: &str, expected: &str) -> bool {
        entity.claims.get(property).is_some_and(|claims| {
            claims
                .iter()
                .any(|claim| claim.mainsnak.value_id() == Some(expected))
        })
    }

    pub fn is_politician(&self, entity: &Entity) -> bool {
        self.has_claim_value(entity, &self.vocabulary.occupation, &self.vocabulary.politician)
    }

    /// First qualifier value under `qualifier` on the chronologically latest
    /// claim under `property` that carries that qualifier, or `None` when no
    /// claim does.
    ///
    /// Latest is decided by strict comparison of the claims' own timestamps;
    /// a claim without a parseable timestamp never displaces an earlier pick,
    /// and an exact tie keeps the first claim encountered.
    pub fn latest_qualified_value<'e>(
        &self,
        entity: &'e Entity,
        property: &str,
        qualifier: &str,
    ) -> Option<&'e str> {
        let claims = entity.claims.get(property)?;

        let mut qualified = claims.iter().filter(|claim| {
            claim
                .qualifiers
                .as_ref()
                .is_some_and(|q| q.contains_key(qualifier))
        });

        let mut latest = qualified.next()?;
        for claim in qualified {
            if let (Some(current), Some(best)) = (claim_time(claim), claim_time(latest)) {
                if current > best {
                    latest = claim;
                }
            }
        }

        latest
            .qualifiers
            .as_ref()
            .and_then(|q| q.get(qualifier))
            .and_then(|snaks| snaks.first())
            .and_then(|snak| snak.value_id())
    }

    /// Party of the most recent position carrying a parliamentary-group
    /// qualifier, or `None` when no position does.
    pub fn party(&self, entity: &Entity) -> Option<Party> {
        let group = self.latest_qualified_value(
            entity,
            &self.vocabulary.position_held,
            &self.vocabulary.parliamentary_group,
        )?;
        Some(self.party_from_group(group))
    }

    /// Resolve an entity into a domain record. Entities without an English
    /// label or a resolvable party are dropped.
    pub fn politician(&self, entity: &Entity) -> Option<Politician> {
        let name = entity.label("en")?.to_string();
        let party = self.party(entity)?;
        Some(Politician { name, party })
    }

    // Everything that is not the republican group resolves to democratic,
    // matching the two-party reduction of the deployed vocabulary.
    fn party_from_group(&self, group: &str) -> Party {
        if group == self.vocabulary.republican {
            Party::Republican
        } else {
            if group != self.vocabulary.democratic {
                tracing::debug!(group, "unrecognized parliamentary group, treating as democratic");
            }
            Party::Democratic
        }
    }
}

/// Wikidata times carry a leading sign (`+2021-01-01T00:00:00Z`) that RFC
/// 3339 does not allow.
fn claim_time(claim: &Claim) -> Option<DateTime<FixedOffset>> {
    let raw = claim.mainsnak.value_time()?;
    DateTime::parse_from_rfc3339(raw.strip_prefix('+').unwrap_or(raw)).ok()
}
