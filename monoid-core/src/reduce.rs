//! Reduction of element sequences: strictly sequential, or fanned out
//! over workers and merged at a barrier.
//!
//! The contract is the one associativity buys: for an associative rule,
//! [`fold_parallel`] over any partitioning equals [`fold_sequential`];
//! if the rule is also commutative the merge order of the partial
//! results would not matter either. For a non-associative rule the
//! parallel result is unspecified relative to the sequential one — the
//! demonstration rules use exactly that.
//!
//! Each partition folds into its own accumulator; no state is shared
//! between workers until the final merge, which runs after every
//! partition has produced its partial result.

use crate::element::Element;
use crate::rule::CombineRule;

/// Left-fold `items` with the bound rule, starting from `identity`,
/// strictly in sequence order.
pub fn fold_sequential<R, I>(identity: Element<R>, items: I) -> Element<R>
where
    R: CombineRule + Clone,
    I: IntoIterator<Item = Element<R>>,
{
    items.into_iter().fold(identity, |acc, x| acc.combine(&x))
}

/// Fold `items` by fanning contiguous partitions out over `workers`
/// scoped threads, then combining the partial results in partition
/// order.
///
/// Partitions preserve the input order internally, and the merge walks
/// them left to right, so for an associative rule the result is
/// value-equal to [`fold_sequential`] for any worker count.
pub fn fold_parallel<R>(identity: Element<R>, items: &[Element<R>], workers: usize) -> Element<R>
where
    R: CombineRule + Clone + Send + Sync,
    R::Value: Send + Sync,
{
    let workers = workers.max(1);
    if items.len() <= 1 || workers == 1 {
        return fold_sequential(identity, items.iter().cloned());
    }

    let chunk = items.len().div_ceil(workers);
    let partials: Vec<Element<R>> = std::thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk)
            .map(|partition| {
                let seed = identity.clone();
                scope.spawn(move || fold_sequential(seed, partition.iter().cloned()))
            })
            .collect();

        // The barrier: every partition completes before any merging.
        handles
            .into_iter()
            .map(|h| h.join().expect("reduction worker panicked"))
            .collect()
    });

    tracing::debug!(
        rule = identity.rule().name(),
        items = items.len(),
        partitions = partials.len(),
        "merging partial results"
    );

    fold_sequential(identity, partials)
}

/// [`fold_parallel`] with the worker count taken from the machine's
/// available parallelism.
pub fn fold_parallel_auto<R>(identity: Element<R>, items: &[Element<R>]) -> Element<R>
where
    R: CombineRule + Clone + Send + Sync,
    R::Value: Send + Sync,
{
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    fold_parallel(identity, items, workers)
}

/// Fold `items` by spawning one tokio task per contiguous partition and
/// combining the partial results in partition order (*feature =
/// "async"*).
///
/// Tasks complete in arbitrary order; partials are indexed and merged
/// in partition order, so the associative-rule guarantee matches
/// [`fold_parallel`].
#[cfg(feature = "async")]
pub async fn fold_spawned<R>(
    identity: Element<R>,
    items: Vec<Element<R>>,
    partitions: usize,
) -> Element<R>
where
    R: CombineRule + Clone + Send + 'static,
    R::Value: Send + 'static,
{
    let partitions = partitions.max(1);
    if items.len() <= 1 || partitions == 1 {
        return fold_sequential(identity, items);
    }

    let chunk = items.len().div_ceil(partitions);
    let mut parts: Vec<Vec<Element<R>>> = Vec::with_capacity(partitions);
    let mut current = Vec::with_capacity(chunk);
    for item in items {
        current.push(item);
        if current.len() == chunk {
            parts.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    let mut tasks = tokio::task::JoinSet::new();
    for (index, partition) in parts.into_iter().enumerate() {
        let seed = identity.clone();
        tasks.spawn(async move { (index, fold_sequential(seed, partition)) });
    }

    let mut partials = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        partials.push(joined.expect("reduction task panicked"));
    }
    // Completion order is arbitrary; the merge must follow partition
    // order.
    partials.sort_by_key(|(index, _)| *index);

    fold_sequential(identity, partials.into_iter().map(|(_, partial)| partial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Concat, Diff, Sum};

    fn ints(n: i64) -> Vec<Element<Sum<i64>>> {
        (1..=n).map(|v| Element::new(Sum::default(), v)).collect()
    }

    #[test]
    fn sequential_fold_sums() {
        let total = fold_sequential(Element::identity(Sum::default()), ints(100));
        assert_eq!(*total.value(), 5050);
    }

    #[test]
    fn sequential_fold_of_nothing_is_identity() {
        let total = fold_sequential(Element::identity(Sum::<i64>::default()), Vec::new());
        assert_eq!(*total.value(), 0);
    }

    #[test]
    fn parallel_fold_matches_sequential_over_ten_thousand_ints() {
        let items = ints(10_000);

        let seq = fold_sequential(Element::identity(Sum::default()), items.iter().cloned());
        let par = fold_parallel(Element::identity(Sum::default()), &items, 8);

        assert_eq!(seq, par);
        assert_eq!(*par.value(), 50_005_000);
    }

    #[test]
    fn parallel_fold_is_stable_across_worker_counts() {
        let items = ints(1_000);
        let expected = fold_sequential(Element::identity(Sum::default()), items.iter().cloned());

        for workers in [1, 2, 3, 7, 16, 2_000] {
            let par = fold_parallel(Element::identity(Sum::default()), &items, workers);
            assert_eq!(par, expected, "workers = {workers}");
        }
    }

    #[test]
    fn parallel_fold_preserves_order_for_noncommutative_rules() {
        // String concatenation is associative but not commutative:
        // partitions preserve input order and merge left to right, so
        // the result still matches the sequential fold.
        let items: Vec<Element<Concat>> = ('a'..='z')
            .map(|c| Element::new(Concat, c.to_string()))
            .collect();

        let seq = fold_sequential(Element::identity(Concat), items.iter().cloned());
        let par = fold_parallel(Element::identity(Concat), &items, 4);

        assert_eq!(seq, par);
        assert_eq!(par.value(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn parallel_fold_of_empty_input_is_identity() {
        let par = fold_parallel(Element::identity(Sum::<i64>::default()), &[], 4);
        assert_eq!(*par.value(), 0);
    }

    #[test]
    fn sequential_fold_of_difference_is_left_to_right() {
        let items: Vec<Element<Diff<i64>>> =
            [3, 2, 1].map(|v| Element::new(Diff::default(), v)).to_vec();
        let out = fold_sequential(Element::identity(Diff::default()), items);
        // (((0 - 3) - 2) - 1)
        assert_eq!(*out.value(), -6);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn spawned_fold_matches_sequential() {
        let items = ints(10_000);
        let seq = fold_sequential(Element::identity(Sum::default()), items.iter().cloned());

        let par = fold_spawned(Element::identity(Sum::default()), items, 8).await;
        assert_eq!(seq, par);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn spawned_fold_merges_in_partition_order() {
        let items: Vec<Element<Concat>> = ('a'..='p')
            .map(|c| Element::new(Concat, c.to_string()))
            .collect();

        let par = fold_spawned(Element::identity(Concat), items, 5).await;
        assert_eq!(par.value(), "abcdefghijklmnop");
    }
}
