//! Walkthrough of every combination rule from `monoid-core` and
//! `orderfold`.
//!
//! - Checks the monoid axioms on sample triples for each rule,
//!   including the two deliberate non-monoids (difference, safe
//!   division) and their associative stand-ins (sum of negatives,
//!   product of reciprocals).
//! - Demonstrates that sequential and fanned-out reductions agree for
//!   associative rules: 10,000 integers under sum, then sampled order
//!   data under the three aggregation rules.

use std::collections::HashSet;

use anyhow::Result;
use monoid_core::laws;
use monoid_core::reduce::{fold_parallel_auto, fold_sequential};
use monoid_core::rules::{Concat, Diff, ListConcat, Product, SafeDiv, SetUnion, SortedConcat, Sum};
use monoid_core::{CombineRule, Element};
use orderfold::rules::{OrderValuesSum, OrdersByProductUnion, ProductDistinct};
use orderfold::{Order, OrderValues, OrdersByProduct, ProductSet};

fn check_rule<R: CombineRule + Clone>(
    identity: Element<R>,
    a: Element<R>,
    b: Element<R>,
    c: Element<R>,
) {
    println!("{}", laws::check(&identity, &a, &b, &c));
}

fn reduce_demo<R>(label: &str, identity: Element<R>, items: Vec<Element<R>>)
where
    R: CombineRule + Clone + Send + Sync,
    R::Value: Send + Sync,
{
    let seq = fold_sequential(identity.clone(), items.iter().cloned());
    let par = fold_parallel_auto(identity, &items);

    println!("{label}");
    println!("  sequential: {seq}");
    println!("  parallel:   {par}");
    println!("  equal:      {}", seq == par);
    println!();
}

fn basic_rules() {
    // Integers under addition and zero.
    let e = |v: i64| Element::new(Sum::default(), v);
    check_rule(Element::identity(Sum::default()), e(1), e(2), e(3));

    // Integers under multiplication and one.
    let e = |v: i64| Element::new(Product::default(), v);
    check_rule(Element::identity(Product::default()), e(1), e(2), e(3));

    // Strings under concatenation and the empty string.
    let e = |v: &str| Element::new(Concat, v.to_string());
    check_rule(Element::identity(Concat), e("abc"), e("de"), e("f"));

    // Lists under concatenation and the empty list.
    let e = |xs: &[&str]| {
        Element::new(
            ListConcat::default(),
            xs.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        )
    };
    check_rule(
        Element::identity(ListConcat::default()),
        e(&["a", "b", "c"]),
        e(&["d", "e"]),
        e(&["f"]),
    );

    // Sorted lists: concatenation into ascending order.
    let e = |xs: &[&str]| {
        Element::new(
            SortedConcat::default(),
            xs.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        )
    };
    check_rule(
        Element::identity(SortedConcat::default()),
        e(&["b", "c", "a"]),
        e(&["d", "f", "e"]),
        e(&["g", "h"]),
    );

    // Sets under union and the empty set.
    let e = |xs: &[&str]| {
        Element::new(
            SetUnion::default(),
            xs.iter().map(|s| s.to_string()).collect::<HashSet<_>>(),
        )
    };
    check_rule(
        Element::identity(SetUnion::default()),
        e(&["a", "b", "c"]),
        e(&["d", "e", "a"]),
        e(&["f"]),
    );
}

fn non_monoids() {
    // Subtraction is not associative: (3 - 2) - 1 = 0 but
    // 3 - (2 - 1) = 2.
    let e = |v: i64| Element::new(Diff::default(), v);
    check_rule(Element::identity(Diff::default()), e(3), e(2), e(1));

    // Adding negated values gives one of subtraction's answers,
    // associatively.
    let e = |v: i64| Element::new(Sum::default(), v);
    check_rule(Element::identity(Sum::default()), e(3), e(-2), e(-1));

    // Division (NaN on zero divisor) is not associative:
    // (4 / 2) / 3 ≈ 0.6667 but 4 / (2 / 3) = 6.
    let e = |v: f64| Element::new(SafeDiv::default(), v);
    check_rule(Element::identity(SafeDiv::default()), e(30.0), e(20.0), e(10.0));

    // Multiplying by reciprocals gives one of division's answers,
    // associatively.
    let e = |v: f64| Element::new(Product::default(), v);
    check_rule(
        Element::identity(Product::default()),
        e(30.0),
        e(1.0 / 20.0),
        e(1.0 / 10.0),
    );
}

fn int_sum_parallel() {
    let items: Vec<Element<Sum<i64>>> = (1..=10_000i64)
        .map(|v| Element::new(Sum::default(), v))
        .collect();
    reduce_demo(
        "sum over 1..=10000",
        Element::identity(Sum::default()),
        items,
    );
}

fn real_world() -> Result<()> {
    // SUM: componentwise order-value totals.
    let e = |q: f64, a: f64| Element::new(OrderValuesSum, OrderValues::new(q, a));
    check_rule(
        Element::identity(OrderValuesSum),
        e(1.0, 2.5),
        e(2.0, 5.0),
        e(3.0, 7.5),
    );
    reduce_demo(
        "order values sum over 100 samples",
        Element::identity(OrderValuesSum),
        OrderValues::samples(100)
            .into_iter()
            .map(|v| Element::new(OrderValuesSum, v))
            .collect(),
    );

    // DISTINCT: deduplicating product-set union.
    let e = |codes: &[&str]| {
        Element::new(ProductDistinct, ProductSet::from_codes(codes.iter().copied()))
    };
    check_rule(
        Element::identity(ProductDistinct),
        e(&["A", "B", "C"]),
        e(&["B", "C"]),
        e(&["D", "E", "F"]),
    );
    reduce_demo(
        "product distinct over 100 samples",
        Element::identity(ProductDistinct),
        ProductSet::samples(100)
            .into_iter()
            .map(|s| Element::new(ProductDistinct, s))
            .collect(),
    );

    // GROUP BY: per-product order grouping merged by key.
    let grouping = |orders: Vec<Order>| {
        Element::new(OrdersByProductUnion, OrdersByProduct::from_orders(orders))
    };
    check_rule(
        Element::identity(OrdersByProductUnion),
        grouping(vec![
            Order::parse("O1", "P1,1,1.5")?,
            Order::parse("O2", "P2,2,2.5")?,
        ]),
        grouping(vec![
            Order::parse("O3", "P1,1,1.5")?,
            Order::parse("O4", "P1,1,1.5\nP2,2,2.5")?,
            Order::parse("O5", "P3,3,3.5")?,
        ]),
        grouping(vec![Order::parse("O6", "P1,1,1.5")?]),
    );
    reduce_demo(
        "orders by product over 100 samples",
        Element::identity(OrdersByProductUnion),
        OrdersByProduct::samples(100)
            .into_iter()
            .map(|g| Element::new(OrdersByProductUnion, g))
            .collect(),
    );

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    basic_rules();
    non_monoids();
    int_sum_parallel();
    real_world()?;

    Ok(())
}
