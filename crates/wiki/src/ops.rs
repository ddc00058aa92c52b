//! The API operations the harvesting pipeline needs, built on the paginated
//! fetch loop. All of them return whatever accumulated before any failure.

use crate::client::PageSource;
use crate::paginate::collect_paged;
use crate::params::Params;
use crate::types::{Entity, EntityResponse, LinkResult, QueryResponse};

fn query_params() -> Params {
    Params::from_pairs([
        ("format", "json"),
        ("formatversion", "2"),
        ("action", "query"),
    ])
}

/// Titles of all main-namespace pages linking to `title`.
pub async fn backlinks<S: PageSource>(source: &S, api_url: &str, title: &str) -> Vec<String> {
    let mut initial = query_params();
    initial.set("list", "backlinks");
    initial.set("bllimit", "max");
    // Main namespace only.
    initial.set("blnamespace", "0");
    initial.set("bltitle", title);

    collect_paged(
        source,
        api_url,
        initial.clone(),
        |page: &QueryResponse| page.query.backlinks.iter().map(|p| p.title.clone()).collect(),
        |page| {
            page.continuation
                .as_ref()
                .and_then(|c| c.blcontinue.as_deref())
                .map(|token| initial.with("blcontinue", token))
        },
    )
    .await
}

/// Links found on each of `titles`, optionally restricted server-side to
/// `valid_links`. Callers keep `titles` within [`crate::MAX_BATCH_SIZE`].
pub async fn page_links<S: PageSource>(
    source: &S,
    api_url: &str,
    titles: &[String],
    valid_links: Option<&[String]>,
) -> Vec<LinkResult> {
    let mut initial = query_params();
    initial.set("prop", "links");
    initial.set("pllimit", "max");
    initial.set("titles", titles.join("|"));

    if let Some(valid) = valid_links {
        initial.set("pltitles", valid.join("|"));
    }

    collect_paged(
        source,
        api_url,
        initial.clone(),
        |page: &QueryResponse| {
            page.query
                .pages
                .iter()
                .map(|p| LinkResult {
                    title: p.title.clone(),
                    links: p.links.iter().map(|l| l.title.clone()).collect(),
                })
                .collect()
        },
        |page| {
            page.continuation
                .as_ref()
                .and_then(|c| c.plcontinue.as_deref())
                .map(|token| initial.with("plcontinue", token))
        },
    )
    .await
}

/// Wikidata items for `ids`, with English labels and all claims. A single
/// page; callers keep `ids` within [`crate::MAX_BATCH_SIZE`].
pub async fn entities<S: PageSource>(source: &S, api_url: &str, ids: &[String]) -> Vec<Entity> {
    let mut params = Params::from_pairs([
        ("format", "json"),
        ("formatversion", "2"),
        ("action", "wbgetentities"),
        ("languages", "en"),
        ("props", "labels|claims"),
    ]);
    params.set("ids", ids.join("|"));

    collect_paged(
        source,
        api_url,
        params,
        |page: &EntityResponse| page.entities.values().cloned().collect(),
        |_page| None,
    )
    .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::ScriptedSource;

    #[tokio::test]
    async fn backlinks_follow_blcontinue() {
        let source = ScriptedSource::new(vec![
            Ok(json!({
                "continue": { "blcontinue": "0|Next", "continue": "-||" },
                "query": { "backlinks": [{ "title": "Alice" }, { "title": "Bob" }] }
            })),
            Ok(json!({
                "query": { "backlinks": [{ "title": "Carol" }] }
            })),
        ]);

        let titles = backlinks(&source, "https://wikidata.test/w/api.php", "Q65089999").await;

        assert_eq!(titles, vec!["Alice", "Bob", "Carol"]);

        let requests = source.requests.borrow();
        assert_eq!(requests[0].1.get("bltitle"), Some("Q65089999"));
        assert_eq!(requests[0].1.get("blnamespace"), Some("0"));
        assert_eq!(requests[1].1.get("blcontinue"), Some("0|Next"));
    }

    #[tokio::test]
    async fn page_links_group_links_by_title() {
        let source = ScriptedSource::new(vec![
            Ok(json!({
                "continue": { "plcontinue": "99|0|More", "continue": "||" },
                "query": { "pages": [
                    { "title": "Alice", "links": [{ "title": "Bob" }] },
                    { "title": "Bob", "links": [] }
                ] }
            })),
            Ok(json!({
                "query": { "pages": [
                    { "title": "Alice", "links": [{ "title": "Carol" }] }
                ] }
            })),
        ]);

        let titles = vec!["Alice".to_string(), "Bob".to_string()];
        let results = page_links(&source, "https://wikipedia.test/w/api.php", &titles, None).await;

        assert_eq!(
            results,
            vec![
                LinkResult {
                    title: "Alice".to_string(),
                    links: vec!["Bob".to_string()],
                },
                LinkResult {
                    title: "Bob".to_string(),
                    links: vec![],
                },
                LinkResult {
                    title: "Alice".to_string(),
                    links: vec!["Carol".to_string()],
                },
            ]
        );

        let requests = source.requests.borrow();
        assert_eq!(requests[0].1.get("titles"), Some("Alice|Bob"));
        assert_eq!(requests[1].1.get("plcontinue"), Some("99|0|More"));
    }

    #[tokio::test]
    async fn page_links_pass_valid_links_filter() {
        let source = ScriptedSource::new(vec![Ok(json!({ "query": { "pages": [] } }))]);

        let titles = vec!["Alice".to_string()];
        let valid = vec!["Bob".to_string(), "Carol".to_string()];
        page_links(
            &source,
            "https://wikipedia.test/w/api.php",
            &titles,
            Some(&valid),
        )
        .await;

        let requests = source.requests.borrow();
        assert_eq!(requests[0].1.get("pltitles"), Some("Bob|Carol"));
    }

    #[tokio::test]
    async fn entities_issue_a_single_request() {
        let source = ScriptedSource::new(vec![Ok(json!({
            "entities": {
                "Q1": { "id": "Q1", "labels": {}, "claims": {} },
                "Q2": { "id": "Q2", "labels": {}, "claims": {} }
            }
        }))]);

        let ids = vec!["Q1".to_string(), "Q2".to_string()];
        let items = entities(&source, "https://wikidata.test/w/api.php", &ids).await;

        assert_eq!(items.len(), 2);
        assert_eq!(source.request_count(), 1);

        let requests = source.requests.borrow();
        assert_eq!(requests[0].1.get("ids"), Some("Q1|Q2"));
        assert_eq!(requests[0].1.get("action"), Some("wbgetentities"));
    }
}
