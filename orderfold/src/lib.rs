#![deny(missing_docs)]
//! # orderfold — order aggregation as combination rules
//!
//! The "real world" companion to [`monoid_core`]: a small immutable
//! domain model of products, orders, and order lines, plus the three
//! aggregation rules that make the classic reporting operations
//! monoidal — and therefore splittable across workers:
//!
//! - [`rules::OrderValuesSum`]: componentwise quantity/amount totals
//!   (`SUM`).
//! - [`rules::ProductDistinct`]: deduplicating product-set union
//!   (`DISTINCT`).
//! - [`rules::OrdersByProductUnion`]: per-product order grouping merged
//!   by key (`GROUP BY`).
//!
//! All domain values are constructed once and never mutated; every
//! rule allocates fresh containers rather than aliasing an operand's.
//! Each type also carries a `samples` constructor producing randomized
//! demo data.
//!
//! ## Quick start
//!
//! ```rust
//! use monoid_core::Element;
//! use orderfold::rules::OrderValuesSum;
//! use orderfold::OrderValues;
//!
//! let a = Element::new(OrderValuesSum, OrderValues::new(1.0, 2.5));
//! let b = Element::new(OrderValuesSum, OrderValues::new(2.0, 5.0));
//!
//! let total = a.combine(&b);
//! assert_eq!(*total.value(), OrderValues::new(3.0, 7.5));
//! ```

/// Products, identified by code.
pub mod product;

/// The numeric pair carried by an order line.
pub mod order_values;

/// One line of an order: a product and its values.
pub mod order_line;

/// Orders: a code plus an ordered sequence of lines, with text
/// parsing.
pub mod order;

/// Deduplicating product sets.
pub mod product_set;

/// Orders grouped by the products their lines mention.
pub mod orders_by_product;

/// The compound combination rules over the domain model.
pub mod rules;

pub use order::{Order, OrderParseError};
pub use order_line::OrderLine;
pub use order_values::OrderValues;
pub use orders_by_product::OrdersByProduct;
pub use product::Product;
pub use product_set::ProductSet;
