//! Orders grouped by the products their lines mention.

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::Rng;

use crate::order::Order;
use crate::product::Product;

/// A grouping of orders by product: every product maps to the set of
/// orders with at least one line on it.
///
/// The derived equality is full symmetric map equality. The grouping
/// rule compares values with [`pairwise_subset_eq`] instead, which
/// only checks `self`'s entries against `other` — see that method.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdersByProduct {
    items: HashMap<Product, HashSet<Order>>,
}

impl OrdersByProduct {
    /// An empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `orders` by the products on their lines. An order with
    /// lines on several products appears in each product's set.
    pub fn from_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut items: HashMap<Product, HashSet<Order>> = HashMap::new();
        for order in orders {
            for line in order.lines() {
                items
                    .entry(line.product().clone())
                    .or_default()
                    .insert(order.clone());
            }
        }
        Self { items }
    }

    /// The per-product order sets.
    pub fn items(&self) -> &HashMap<Product, HashSet<Order>> {
        &self.items
    }

    /// Merge two groupings into a fresh one: keys are unioned, and the
    /// order sets of shared products are unioned per key. Neither
    /// operand is touched.
    pub fn merged(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        for (product, orders) in &other.items {
            items
                .entry(product.clone())
                .and_modify(|here| here.extend(orders.iter().cloned()))
                .or_insert_with(|| orders.clone());
        }
        Self { items }
    }

    /// Pairwise comparison of `self`'s entries against `other`: every
    /// product of `self` must map to a set-equal group in `other`.
    ///
    /// Asymmetric by construction — products present only in `other`
    /// are not detected, so `a.pairwise_subset_eq(&b)` can hold while
    /// `b.pairwise_subset_eq(&a)` does not. The grouping rule uses this
    /// as its value equality; in every reduction scenario the two
    /// directions agree because merged groupings carry the same keys.
    pub fn pairwise_subset_eq(&self, other: &Self) -> bool {
        self.items.iter().all(|(product, orders)| {
            other
                .items
                .get(product)
                .map_or(false, |theirs| theirs == orders)
        })
    }

    /// Randomized sample groupings over consecutively-coded orders.
    pub fn samples(count: usize) -> Vec<OrdersByProduct> {
        let mut rng = rand::thread_rng();
        let mut next_code = 1;
        (0..count)
            .map(|_| {
                let num = rng.gen_range(1..6);
                let start = next_code;
                next_code += num;
                OrdersByProduct::from_orders(Order::samples(num, start))
            })
            .collect()
    }
}

impl fmt::Display for OrdersByProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Map and set iteration orders are unstable; render both
        // sorted.
        let mut products: Vec<&Product> = self.items.keys().collect();
        products.sort();

        for (i, product) in products.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let mut codes: Vec<&str> = self.items[*product].iter().map(Order::code).collect();
            codes.sort_unstable();
            write!(f, "{product}:[{}]", codes.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(code: &str, text: &str) -> Order {
        Order::parse(code, text).unwrap()
    }

    #[test]
    fn groups_orders_by_line_products() {
        let grouped = OrdersByProduct::from_orders([
            order("O1", "P1,1,1.5"),
            order("O2", "P1,1,1.5\nP2,2,2.5"),
        ]);

        assert_eq!(grouped.items().len(), 2);
        assert_eq!(grouped.items()[&Product::new("P1")].len(), 2);
        assert_eq!(grouped.items()[&Product::new("P2")].len(), 1);
    }

    #[test]
    fn merged_unions_order_sets_per_product() {
        let a = OrdersByProduct::from_orders([order("O1", "P1,1,1.5")]);
        let b = OrdersByProduct::from_orders([order("O3", "P1,1,1.5")]);

        let merged = a.merged(&b);

        // One entry for P1 containing both orders.
        assert_eq!(merged.items().len(), 1);
        let p1 = &merged.items()[&Product::new("P1")];
        assert_eq!(p1.len(), 2);
        assert!(p1.contains(&order("O1", "P1,1,1.5")));
        assert!(p1.contains(&order("O3", "P1,1,1.5")));

        // Operands untouched.
        assert_eq!(a.items()[&Product::new("P1")].len(), 1);
    }

    #[test]
    fn pairwise_subset_eq_is_asymmetric_on_extra_keys() {
        let small = OrdersByProduct::from_orders([order("O1", "P1,1,1.5")]);
        let large = OrdersByProduct::from_orders([order("O1", "P1,1,1.5"), order("O2", "P2,2,2.5")]);

        // Every entry of `small` matches in `large`…
        assert!(small.pairwise_subset_eq(&large));
        // …but the extra P2 entry goes undetected in this direction
        // only.
        assert!(!large.pairwise_subset_eq(&small));

        // The derived equality stays symmetric.
        assert_ne!(small, large);
    }

    #[test]
    fn pairwise_subset_eq_agrees_with_equality_on_merged_groupings() {
        let a = OrdersByProduct::from_orders(Order::samples(4, 1));
        let b = OrdersByProduct::from_orders(Order::samples(4, 10));

        let ab = a.merged(&b);
        let ba = b.merged(&a);

        assert!(ab.pairwise_subset_eq(&ba));
        assert!(ba.pairwise_subset_eq(&ab));
        assert_eq!(ab, ba);
    }

    #[test]
    fn displays_sorted_products_and_codes() {
        let grouped = OrdersByProduct::from_orders([
            order("O2", "P2,2,2.5"),
            order("O1", "P1,1,1.5\nP2,2,2.5"),
        ]);
        assert_eq!(grouped.to_string(), "P1:[O1] P2:[O1 O2]");
    }

    #[test]
    fn samples_produce_the_requested_count() {
        assert_eq!(OrdersByProduct::samples(5).len(), 5);
    }
}
