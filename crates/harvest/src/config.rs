use std::path::PathBuf;

use resolve::Vocabulary;
use wiki::{MAX_BATCH_SIZE, WIKIDATA_API_URL, WIKIPEDIA_API_URL};

/// Pipeline configuration. Validated once at startup, before any network
/// activity.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub wikidata_api: String,
    pub wikipedia_api: String,
    /// Items per API request; must stay within the server-enforced cap.
    pub batch_size: usize,
    /// Checkpoint files and CSV outputs live here.
    pub output_dir: PathBuf,
    pub vocabulary: Vocabulary,
    pub seeds: Seeds,
}

/// Wikidata ids of the entities whose backlinks seed candidate discovery.
#[derive(Debug, Clone)]
pub struct Seeds {
    /// Q65089999
    pub congress_117: String,
    /// Q4416090
    pub us_senator: String,
    /// Q13218630
    pub us_representative: String,
    /// Q11696
    pub us_president: String,
    /// Q11699
    pub us_vice_president: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            wikidata_api: WIKIDATA_API_URL.to_string(),
            wikipedia_api: WIKIPEDIA_API_URL.to_string(),
            batch_size: 50,
            output_dir: PathBuf::from("output"),
            vocabulary: Vocabulary::default(),
            seeds: Seeds::default(),
        }
    }
}

impl Default for Seeds {
    fn default() -> Self {
        Self {
            congress_117: "Q65089999".to_string(),
            us_senator: "Q4416090".to_string(),
            us_representative: "Q13218630".to_string(),
            us_president: "Q11696".to_string(),
            us_vice_president: "Q11699".to_string(),
        }
    }
}

impl HarvestConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_BATCH_SIZE).contains(&self.batch_size),
            "batch_size ({}) must be between 1 and {MAX_BATCH_SIZE}",
            self.batch_size
        );
        Ok(())
    }
}
