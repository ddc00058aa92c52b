//! The harvesting scenarios: each resolves a node list and an edge list,
//! checkpoints the expensive steps, and materializes CSVs for the
//! visualization layer.

use anyhow::{Context, Result};
use resolve::{Party, Politician};
use store::{DatasetStore, load_or_compute, write_csv};
use wiki::PageSource;

use crate::pipeline::Pipeline;

/// The 117th Congress: every resolved member, with edges among all of them.
pub async fn congress117<S: PageSource, D: DatasetStore>(
    pipeline: &Pipeline<'_, S, D>,
) -> Result<()> {
    let seeds = vec![pipeline.config.seeds.congress_117.clone()];
    let candidates = pipeline.candidate_ids("c117-candidates", &seeds).await;
    let politicians = pipeline.politicians("c117-politicians", &candidates).await;

    let names: Vec<String> = politicians.iter().map(|p| p.name.clone()).collect();
    let edges =
        load_or_compute(pipeline.store, "c117-edges", || pipeline.edges(&names, &names)).await;

    let out = &pipeline.config.output_dir;
    write_csv(out.join("c117-politicians.csv"), &politicians)
        .context("writing politicians csv")?;
    write_csv(out.join("c117-edges.csv"), &edges).context("writing edges csv")?;

    tracing::info!(
        nodes = politicians.len(),
        edges = edges.len(),
        "congress117 harvest complete"
    );
    Ok(())
}

/// US politicians from the four federal position seeds. Also used as the
/// node set of the subset scenarios below.
pub async fn us_politicians<S: PageSource, D: DatasetStore>(
    pipeline: &Pipeline<'_, S, D>,
) -> Result<Vec<Politician>> {
    let seeds = &pipeline.config.seeds;
    let seed_ids = vec![
        seeds.us_senator.clone(),
        seeds.us_representative.clone(),
        seeds.us_president.clone(),
        seeds.us_vice_president.clone(),
    ];

    let candidates = pipeline.candidate_ids("us-candidates", &seed_ids).await;
    let politicians = pipeline.politicians("us-politicians", &candidates).await;

    write_csv(
        pipeline.config.output_dir.join("us-politicians.csv"),
        &politicians,
    )
    .context("writing politicians csv")?;

    Ok(politicians)
}

/// A designated set of well-covered US politicians, with edges from those
/// sources into the full US node set.
pub async fn controversial_group<S: PageSource, D: DatasetStore>(
    pipeline: &Pipeline<'_, S, D>,
) -> Result<()> {
    let sources = controversial_seeds();
    let out = &pipeline.config.output_dir;
    write_csv(out.join("contr-politicians.csv"), &sources).context("writing sources csv")?;

    let mut politicians = us_politicians(pipeline).await?;
    politicians.extend(sources.iter().cloned());

    let source_names: Vec<String> = sources.iter().map(|p| p.name.clone()).collect();
    let names: Vec<String> = politicians.iter().map(|p| p.name.clone()).collect();
    let edges = load_or_compute(pipeline.store, "contr-edges", || {
        pipeline.edges(&source_names, &names)
    })
    .await;

    write_csv(out.join("contr-edges.csv"), &edges).context("writing edges csv")?;

    tracing::info!(
        sources = sources.len(),
        edges = edges.len(),
        "controversial-group harvest complete"
    );
    Ok(())
}

/// A uniform random sample of US politicians as sources.
pub async fn random_sample<S: PageSource, D: DatasetStore>(
    pipeline: &Pipeline<'_, S, D>,
) -> Result<()> {
    let politicians = us_politicians(pipeline).await?;
    let sources = graph::sample(&politicians, 20);

    let out = &pipeline.config.output_dir;
    write_csv(out.join("random-politicians.csv"), &sources).context("writing sources csv")?;

    let source_names: Vec<String> = sources.iter().map(|p| p.name.clone()).collect();
    let names: Vec<String> = politicians.iter().map(|p| p.name.clone()).collect();
    let edges = load_or_compute(pipeline.store, "random-edges", || {
        pipeline.edges(&source_names, &names)
    })
    .await;

    write_csv(out.join("random-edges.csv"), &edges).context("writing edges csv")?;

    tracing::info!(
        sources = sources.len(),
        edges = edges.len(),
        "random-sample harvest complete"
    );
    Ok(())
}

// Parties are pinned here so a source stays in the node set even when entity
// resolution skips it (seen upstream with George Santos).
fn controversial_seeds() -> Vec<Politician> {
    let seeds = [
        ("Marjorie Taylor Greene", Party::Republican),
        ("Ron DeSantis", Party::Republican),
        ("Alexandria Ocasio-Cortez", Party::Democratic),
        ("Ilhan Omar", Party::Democratic),
        ("Matt Gaetz", Party::Republican),
        ("Bernie Sanders", Party::Democratic),
        ("George Santos", Party::Republican),
        ("Lauren Boebert", Party::Republican),
        ("Joe Manchin", Party::Democratic),
        ("Donald Trump", Party::Republican),
    ];

    seeds
        .into_iter()
        .map(|(name, party)| Politician {
            name: name.to_string(),
            party,
        })
        .collect()
}
