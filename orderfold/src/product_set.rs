//! Deduplicating product sets.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;

use crate::product::Product;

/// A set of distinct products, equal by membership regardless of
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductSet {
    items: HashSet<Product>,
}

impl ProductSet {
    /// A set of the given products, deduplicated.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            items: products.into_iter().collect(),
        }
    }

    /// A set of products with the given codes.
    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(codes.into_iter().map(Product::new))
    }

    /// The distinct products.
    pub fn items(&self) -> &HashSet<Product> {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Randomized sample sets drawn from a small product range.
    pub fn samples(count: usize) -> Vec<ProductSet> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let k = rng.gen_range(1..6);
                Self::new((1..=k).map(|y| Product::new(format!("P{y}"))))
            })
            .collect()
    }
}

impl fmt::Display for ProductSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Set iteration order is unstable; render codes sorted.
        let mut codes: Vec<&str> = self.items.iter().map(Product::code).collect();
        codes.sort_unstable();
        f.write_str(&codes.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_on_construction() {
        let set = ProductSet::from_codes(["A", "B", "A"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn equal_by_membership() {
        let a = ProductSet::from_codes(["A", "B", "C"]);
        let b = ProductSet::from_codes(["C", "A", "B"]);
        assert_eq!(a, b);
    }

    #[test]
    fn displays_sorted_codes() {
        let set = ProductSet::from_codes(["C", "A", "B"]);
        assert_eq!(set.to_string(), "ABC");
    }

    #[test]
    fn samples_produce_the_requested_count() {
        let sets = ProductSet::samples(8);
        assert_eq!(sets.len(), 8);
        assert!(sets.iter().all(|s| !s.is_empty() && s.len() <= 5));
    }
}
