//! The compound combination rules over the domain model.
//!
//! Each rule turns one reporting operation into a monoid over a domain
//! value, so reductions over order data can be split across workers
//! and merged:
//!
//! - [`OrderValuesSum`] — `SUM`: componentwise quantity/amount totals.
//! - [`ProductDistinct`] — `DISTINCT`: deduplicating product-set
//!   union.
//! - [`OrdersByProductUnion`] — `GROUP BY`: merge groupings per
//!   product key.
//!
//! All three are associative and commutative, and all three allocate
//! fresh containers in `combine`.

use monoid_core::CombineRule;

use crate::order_values::OrderValues;
use crate::orders_by_product::OrdersByProduct;
use crate::product_set::ProductSet;

// combine = componentwise sum, identity = (0, 0)

/// Componentwise summation of order values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderValuesSum;

impl CombineRule for OrderValuesSum {
    type Value = OrderValues;

    fn name(&self) -> &'static str {
        "order values sum"
    }

    fn identity(&self) -> OrderValues {
        OrderValues::new(0.0, 0.0)
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &OrderValues, b: &OrderValues) -> OrderValues {
        OrderValues::new(a.quantity() + b.quantity(), a.amount() + b.amount())
    }

    fn render(&self, value: &OrderValues) -> String {
        value.to_string()
    }
}

// combine = deduplicating union, identity = {}

/// Union of product sets: the distinct products across both operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductDistinct;

impl CombineRule for ProductDistinct {
    type Value = ProductSet;

    fn name(&self) -> &'static str {
        "product distinct"
    }

    fn identity(&self) -> ProductSet {
        ProductSet::default()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &ProductSet, b: &ProductSet) -> ProductSet {
        let mut items = a.items().clone();
        items.extend(b.items().iter().cloned());
        ProductSet::new(items)
    }

    fn render(&self, value: &ProductSet) -> String {
        value.to_string()
    }
}

// combine = merge maps, union order sets per key, identity = {}

/// Union of order groupings: keys merged, order sets unioned per
/// product.
///
/// Value equality is [`OrdersByProduct::pairwise_subset_eq`], the
/// deliberately asymmetric pairwise check — see its documentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrdersByProductUnion;

impl CombineRule for OrdersByProductUnion {
    type Value = OrdersByProduct;

    fn name(&self) -> &'static str {
        "orders by product union"
    }

    fn identity(&self) -> OrdersByProduct {
        OrdersByProduct::new()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &OrdersByProduct, b: &OrdersByProduct) -> OrdersByProduct {
        a.merged(b)
    }

    fn value_eq(&self, a: &OrdersByProduct, b: &OrdersByProduct) -> bool {
        a.pairwise_subset_eq(b)
    }

    fn render(&self, value: &OrdersByProduct) -> String {
        value.to_string()
    }
}
