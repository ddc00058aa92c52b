use serde::de::DeserializeOwned;

use crate::client::PageSource;
use crate::params::Params;

/// Drive a paged query to completion, accumulating extracted items.
///
/// Each page is decoded as `T`; `extract_items` pulls zero or more results
/// out of it, and `next_params` derives the follow-up request (normally the
/// initial parameters plus a continuation token) or `None` when the API
/// reports no further pages.
///
/// A failed fetch ends the loop early: the error is logged and everything
/// accumulated so far is returned. Partial results are an expected outcome
/// of flaky upstream APIs, not a failure of the caller.
pub async fn collect_paged<S, T, G>(
    source: &S,
    base_url: &str,
    initial: Params,
    mut extract_items: impl FnMut(&T) -> Vec<G>,
    mut next_params: impl FnMut(&T) -> Option<Params>,
) -> Vec<G>
where
    S: PageSource,
    T: DeserializeOwned,
{
    let mut results = Vec::new();
    let mut params = initial;
    let mut page_number = 0u32;

    loop {
        page_number += 1;

        let page: T = match source.fetch(base_url, &params).await {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(page = page_number, %error, "pagination stopped early");
                break;
            }
        };

        results.extend(extract_items(&page));

        match next_params(&page) {
            Some(next) => params = next,
            None => break,
        }
    }

    results
}
