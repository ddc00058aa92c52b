use anyhow::Result;
use harvest::config::HarvestConfig;
use harvest::pipeline::Pipeline;
use harvest::scenarios;
use store::JsonDirStore;
use wiki::WikiClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = HarvestConfig::default();
    config.validate()?;

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let client = WikiClient::new();
    let store = JsonDirStore::new(&config.output_dir);
    let pipeline = Pipeline::new(&client, &store, config);

    let scenario = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "congress117".to_string());

    match scenario.as_str() {
        "congress117" => scenarios::congress117(&pipeline).await?,
        "us" => {
            scenarios::us_politicians(&pipeline).await?;
        }
        "controversial" => scenarios::controversial_group(&pipeline).await?,
        "random" => scenarios::random_sample(&pipeline).await?,
        other => anyhow::bail!(
            "unknown scenario: {other} (expected congress117, us, controversial or random)"
        ),
    }

    Ok(())
}
