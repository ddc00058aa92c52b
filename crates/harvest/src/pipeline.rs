use std::collections::HashSet;

use resolve::{Edge, Politician, Resolver};
use store::{DatasetStore, load_or_compute};
use wiki::{PageSource, ops, run_batched};

use crate::config::HarvestConfig;

/// The harvesting pipeline: candidate discovery, politician resolution, and
/// edge discovery, checkpointed through the dataset store.
///
/// Everything network-facing returns partial results on upstream failure;
/// a flaky run produces a smaller graph, never an aborted one.
pub struct Pipeline<'a, S, D> {
    source: &'a S,
    pub store: &'a D,
    resolver: Resolver,
    pub config: HarvestConfig,
}

impl<'a, S: PageSource, D: DatasetStore> Pipeline<'a, S, D> {
    pub fn new(source: &'a S, store: &'a D, config: HarvestConfig) -> Self {
        let resolver = Resolver::new(config.vocabulary.clone());
        Self {
            source,
            store,
            resolver,
            config,
        }
    }

    /// Entity ids of every page backlinking one of the `seeds` on Wikidata,
    /// concatenated in seed order and checkpointed under `key`.
    pub async fn candidate_ids(&self, key: &str, seeds: &[String]) -> Vec<String> {
        load_or_compute(self.store, key, || async move {
            let mut ids = Vec::new();
            for seed in seeds {
                let found = ops::backlinks(self.source, &self.config.wikidata_api, seed).await;
                tracing::info!(seed = %seed, count = found.len(), "collected candidates");
                ids.extend(found);
            }
            ids
        })
        .await
    }

    /// Resolve candidate entities into politicians, checkpointed under
    /// `key`. Candidates that are not politicians, have no English label or
    /// no resolvable party are dropped.
    pub async fn politicians(&self, key: &str, candidate_ids: &[String]) -> Vec<Politician> {
        load_or_compute(self.store, key, || async move {
            let entities = run_batched(candidate_ids, self.config.batch_size, |ids| async move {
                ops::entities(self.source, &self.config.wikidata_api, &ids).await
            })
            .await;

            let politicians: Vec<Politician> = entities
                .iter()
                .filter(|entity| self.resolver.is_politician(entity))
                .filter_map(|entity| self.resolver.politician(entity))
                .collect();

            tracing::info!(
                candidates = candidate_ids.len(),
                resolved = politicians.len(),
                "resolved politicians"
            );
            politicians
        })
        .await
    }

    /// Edges from each source page to any known node, discovered through the
    /// Wikipedia links API. The same routine serves the full graph
    /// (`sources == all_nodes`) and designated-subset scenarios.
    pub async fn edges(&self, sources: &[String], all_nodes: &[String]) -> Vec<Edge> {
        let known: HashSet<&str> = all_nodes.iter().map(String::as_str).collect();
        let known = &known;

        run_batched(sources, self.config.batch_size, |titles| async move {
            let results =
                ops::page_links(self.source, &self.config.wikipedia_api, &titles, None).await;

            let mut edges = Vec::new();
            for result in results {
                for link in result.links {
                    if known.contains(link.as_str()) {
                        edges.push(Edge {
                            from: result.title.clone(),
                            to: link,
                        });
                    }
                }
            }
            edges
        })
        .await
    }
}
