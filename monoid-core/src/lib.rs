#![deny(missing_docs)]
//! # monoid-core — combination rules, elements, reductions, law checks
//!
//! Core pieces:
//!
//! - [`rule`]: the [`CombineRule`] capability — a binary combination
//!   operation over a value domain, with a distinguished identity value
//!   and a commutativity flag.
//! - [`element`]: [`Element`], an immutable holder binding one value to
//!   one rule. Combining two elements produces a fresh element; the
//!   operands are never touched.
//! - [`rules`]: the stock rules — numeric sum/product/difference, safe
//!   division, string and list concatenation, sorted concatenation, and
//!   set union. Two of them (difference, safe division) deliberately
//!   violate the monoid laws; they exist to demonstrate what breaks.
//! - [`reduce`]: folding a sequence of elements into one — strictly
//!   sequential, or fanned out over worker threads and merged at a
//!   barrier. The two agree exactly when the rule is associative.
//! - [`laws`]: spot-checks of the monoid axioms (closure,
//!   associativity, identity) on concrete triples, reported as plain
//!   outcomes rather than errors.
//! - [`stream_ext`] *(feature = "async")*: fold a `futures::Stream` of
//!   elements by the bound rule, and a tokio-task fan-out fold.
//!
//! ## Concepts
//!
//! A **monoid** is a set `S` with an associative binary operation
//! `· : S × S → S` and an identity element `e` such that
//! `e · a = a · e = a`. Associativity is what makes the grouping of a
//! reduction irrelevant — and therefore what makes it safe to split a
//! fold across workers and merge the partial results. If the operation
//! is also **commutative**, even the order in which partials are merged
//! stops mattering.
//!
//! None of the laws are enforced by the type system. The [`laws`]
//! module checks them on sample values, and a failed law is an ordinary
//! reported outcome: the difference and safe-division rules are shipped
//! precisely because they fail.
//!
//! ## Quick start
//!
//! ```rust
//! use monoid_core::rules::Sum;
//! use monoid_core::Element;
//!
//! let a = Element::new(Sum::default(), 1i64);
//! let b = Element::new(Sum::default(), 2i64);
//! let c = Element::new(Sum::default(), 3i64);
//!
//! // (a · b) · c = a · (b · c) = 6
//! assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
//! assert_eq!(*a.combine(&b).combine(&c).value(), 6);
//! ```
//!
//! ## Features
//!
//! - **`async`** *(enabled by default)*: stream folding and the
//!   tokio-task fan-out reduction. Requires `tokio`, `futures`, and
//!   `async-trait`.
//!
//! To use only the synchronous engine:
//! ```toml
//! monoid-core = { version = "…", default-features = false }
//! ```

/// The combination-rule capability: combine, identity, commutativity,
/// and the value-equality / rendering hooks.
pub mod rule;

/// Immutable elements binding one value to one rule.
pub mod element;

/// Stock combination rules over numbers, strings, lists, and sets.
pub mod rules;

/// Sequential and fan-out/fan-in reduction of element sequences.
pub mod reduce;

/// Spot-checks of the monoid axioms, reported rather than thrown.
pub mod laws;

#[cfg(feature = "async")]
/// Stream adapters folding `Stream<Item = Element<R>>` by `combine`.
pub mod stream_ext;

pub use element::Element;
pub use rule::CombineRule;
