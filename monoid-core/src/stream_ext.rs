//! Stream extensions for element folding (feature = `"async"`).
//!
//! Adds `.combine_all()` and `.combine_all_nonempty()` to any
//! `futures::Stream` of elements, folding the stream with the bound
//! rule's `combine`.
//!
//! For an unbounded source, fold windows of the stream instead —
//! reduction here runs to stream exhaustion.

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use crate::element::Element;
use crate::rule::CombineRule;

/// Extension trait folding `Stream`s of elements.
///
/// Implemented for every `Stream<Item = Element<R>>`:
///
/// - [`combine_all`](CombineStreamExt::combine_all): fold from an
///   explicit identity element; works for empty streams.
/// - [`combine_all_nonempty`](CombineStreamExt::combine_all_nonempty):
///   fold from the first item, returning `None` for empty streams.
///
/// # Example
///
/// ```rust,ignore
/// use futures::stream;
/// use monoid_core::rules::Sum;
/// use monoid_core::stream_ext::CombineStreamExt;
/// use monoid_core::Element;
///
/// let s = stream::iter((1..=4i64).map(|v| Element::new(Sum::default(), v)));
/// let total = s.combine_all(Element::identity(Sum::default())).await;
/// assert_eq!(*total.value(), 10);
/// ```
#[async_trait]
pub trait CombineStreamExt<R>: Stream<Item = Element<R>> + Sized + Unpin + Send
where
    R: CombineRule + Clone + Send + 'static,
    R::Value: Send,
{
    /// Fold the whole stream from `identity`, strictly in stream
    /// order.
    async fn combine_all(self, identity: Element<R>) -> Element<R> {
        self.fold(identity, |acc, x| async move { acc.combine(&x) })
            .await
    }

    /// Fold the stream from its first item. Returns `None` if the
    /// stream yields nothing.
    async fn combine_all_nonempty(self) -> Option<Element<R>> {
        let mut s = self;
        let first = s.next().await?;
        Some(
            s.fold(first, |acc, x| async move { acc.combine(&x) })
                .await,
        )
    }
}

#[async_trait]
impl<T, R> CombineStreamExt<R> for T
where
    T: Stream<Item = Element<R>> + Sized + Unpin + Send,
    R: CombineRule + Clone + Send + 'static,
    R::Value: Send,
{
    // Default method bodies from the trait are used.
}

#[cfg(test)]
mod tests {
    use futures::stream;

    use super::*;
    use crate::rules::{Concat, Sum};

    #[tokio::test]
    async fn combine_all_sums_the_stream() {
        let s = stream::iter((1..=100i64).map(|v| Element::new(Sum::default(), v)));
        let total = s.combine_all(Element::identity(Sum::default())).await;
        assert_eq!(*total.value(), 5050);
    }

    #[tokio::test]
    async fn combine_all_of_empty_stream_is_identity() {
        let s = stream::iter(Vec::<Element<Sum<i64>>>::new());
        let total = s.combine_all(Element::identity(Sum::default())).await;
        assert_eq!(*total.value(), 0);
    }

    #[tokio::test]
    async fn combine_all_preserves_stream_order() {
        let s = stream::iter(
            ["ab", "cd", "ef"]
                .into_iter()
                .map(|v| Element::new(Concat, v.to_string())),
        );
        let out = s.combine_all(Element::identity(Concat)).await;
        assert_eq!(out.value(), "abcdef");
    }

    #[tokio::test]
    async fn combine_all_nonempty_of_empty_stream_is_none() {
        let s = stream::iter(Vec::<Element<Sum<i64>>>::new());
        assert!(s.combine_all_nonempty().await.is_none());
    }

    #[tokio::test]
    async fn combine_all_nonempty_folds_from_first() {
        let s = stream::iter((1..=4i64).map(|v| Element::new(Sum::default(), v)));
        let total = s.combine_all_nonempty().await.unwrap();
        assert_eq!(*total.value(), 10);
    }
}
