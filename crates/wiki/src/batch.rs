use std::future::Future;

/// Apply `handler` to contiguous chunks of `items`, strictly in order.
///
/// Each chunk's handler call completes (including any pagination it drives)
/// before the next chunk starts; results are concatenated in chunk order with
/// item order preserved. The final chunk may be smaller than `batch_size`.
///
/// Callers validate `batch_size` against the API cap at startup; it is not
/// re-checked here.
pub async fn run_batched<T, G, F, Fut>(items: &[T], batch_size: usize, mut handler: F) -> Vec<G>
where
    T: Clone,
    F: FnMut(Vec<T>) -> Fut,
    Fut: Future<Output = Vec<G>>,
{
    let mut results = Vec::new();

    for (number, batch) in items.chunks(batch_size).enumerate() {
        tracing::debug!(batch = number + 1, size = batch.len(), "running batch");
        results.extend(handler(batch.to_vec()).await);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_handler_preserves_items_and_order() {
        let items: Vec<u32> = (1..=127).collect();
        let mut sizes = Vec::new();

        let results = run_batched(&items, 50, |batch| {
            sizes.push(batch.len());
            async move { batch }
        })
        .await;

        assert_eq!(results, items);
        assert_eq!(sizes, vec![50, 50, 27]);
    }

    #[tokio::test]
    async fn empty_input_invokes_no_batches() {
        let items: Vec<u32> = Vec::new();
        let mut calls = 0;

        let results = run_batched(&items, 50, |batch| {
            calls += 1;
            async move { batch }
        })
        .await;

        assert!(results.is_empty());
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn handler_may_drop_or_expand_items() {
        let items: Vec<u32> = (1..=6).collect();

        let results = run_batched(&items, 2, |batch| async move {
            batch.into_iter().filter(|n| n % 2 == 0).collect()
        })
        .await;

        assert_eq!(results, vec![2, 4, 6]);
    }
}
