pub mod batch;
pub mod client;
pub mod error;
pub mod ops;
pub mod paginate;
pub mod params;
pub mod testing;
pub mod types;

pub use batch::run_batched;
pub use client::{PageSource, WikiClient};
pub use error::{Result, WikiError};
pub use paginate::collect_paged;
pub use params::Params;
pub use types::{
    Claim, ClaimValue, Continuation, DataValue, Entity, EntityResponse, Label, LinkResult,
    PageLink, QueryBody, QueryPage, QueryResponse, Snak,
};

/// Wikidata API endpoint.
pub const WIKIDATA_API_URL: &str = "https://www.wikidata.org/w/api.php";

/// English Wikipedia API endpoint.
pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Hard limit on items per request, enforced server-side by both APIs.
pub const MAX_BATCH_SIZE: usize = 50;
