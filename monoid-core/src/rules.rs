//! Stock combination rules.
//!
//! Each rule is a plain (usually zero-sized) value implementing
//! [`CombineRule`]. The numeric rules are generic over their scalar via
//! `num-traits`, so `Sum<i64>` and `Product<f64>` are the same code
//! path as their integer cousins.
//!
//! Two of the rules are deliberately **not** monoids:
//!
//! - [`Diff`]: subtraction, which is not associative
//!   (`(3 - 2) - 1 = 0` but `3 - (2 - 1) = 2`).
//! - [`SafeDiv`]: division that yields `NaN` on a zero divisor, which
//!   is neither associative nor commutative. The `NaN` is a computed
//!   result, not an error, and propagates through later combinations as
//!   ordinary float arithmetic.
//!
//! They exist so the [`laws`](crate::laws) checks have something honest
//! to fail on.

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Sub;

use num_traits::{Float, One, Zero};

use crate::rule::CombineRule;

// combine = a + b, identity = 0

/// Addition over any `Zero` scalar. Associative and commutative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum<T>(PhantomData<T>);

impl<T> Sum<T> {
    /// The sum rule.
    pub fn new() -> Self {
        Sum(PhantomData)
    }
}

impl<T> CombineRule for Sum<T>
where
    T: Zero + Copy + PartialEq + Debug + Display,
{
    type Value = T;

    fn name(&self) -> &'static str {
        "sum"
    }

    fn identity(&self) -> T {
        T::zero()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    fn render(&self, value: &T) -> String {
        value.to_string()
    }
}

// combine = a * b, identity = 1

/// Multiplication over any `One` scalar. Associative and commutative.
///
/// `Product<f64>` is the floating-point product rule; multiplying by
/// reciprocals is the associative stand-in for division.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product<T>(PhantomData<T>);

impl<T> Product<T> {
    /// The product rule.
    pub fn new() -> Self {
        Product(PhantomData)
    }
}

impl<T> CombineRule for Product<T>
where
    T: One + Copy + PartialEq + Debug + Display,
{
    type Value = T;

    fn name(&self) -> &'static str {
        "product"
    }

    fn identity(&self) -> T {
        T::one()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    fn render(&self, value: &T) -> String {
        value.to_string()
    }
}

// combine = a - b: NOT a monoid

/// Subtraction with a claimed identity of `0`. **Not associative**, and
/// `0` is only a right identity — kept as a counter-example.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diff<T>(PhantomData<T>);

impl<T> Diff<T> {
    /// The difference rule.
    pub fn new() -> Self {
        Diff(PhantomData)
    }
}

impl<T> CombineRule for Diff<T>
where
    T: Zero + Sub<Output = T> + Copy + PartialEq + Debug + Display,
{
    type Value = T;

    fn name(&self) -> &'static str {
        "difference"
    }

    fn identity(&self) -> T {
        T::zero()
    }

    fn is_commutative(&self) -> bool {
        false
    }

    fn combine(&self, a: &T, b: &T) -> T {
        *a - *b
    }

    fn render(&self, value: &T) -> String {
        value.to_string()
    }
}

// combine = b == 0 ? NaN : a / b: NOT a monoid

/// Division that yields `NaN` on a zero divisor, with a claimed
/// identity of `1`. **Not associative** and not commutative — kept as a
/// counter-example.
///
/// The `NaN` is an ordinary value, not an error; once produced it
/// propagates through further combinations under the usual float
/// semantics (and compares unequal to everything, including itself).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafeDiv<T>(PhantomData<T>);

impl<T> SafeDiv<T> {
    /// The safe-division rule.
    pub fn new() -> Self {
        SafeDiv(PhantomData)
    }
}

impl<T> CombineRule for SafeDiv<T>
where
    T: Float + Debug + Display,
{
    type Value = T;

    fn name(&self) -> &'static str {
        "safe division"
    }

    fn identity(&self) -> T {
        T::one()
    }

    fn is_commutative(&self) -> bool {
        false
    }

    fn combine(&self, a: &T, b: &T) -> T {
        if b.is_zero() {
            T::nan()
        } else {
            *a / *b
        }
    }

    fn render(&self, value: &T) -> String {
        value.to_string()
    }
}

// combine = a ++ b on strings

/// String concatenation with the empty string as identity. Associative
/// but not commutative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Concat;

impl CombineRule for Concat {
    type Value = String;

    fn name(&self) -> &'static str {
        "string concat"
    }

    fn identity(&self) -> String {
        String::new()
    }

    fn is_commutative(&self) -> bool {
        false
    }

    fn combine(&self, a: &String, b: &String) -> String {
        let mut out = String::with_capacity(a.len() + b.len());
        out.push_str(a);
        out.push_str(b);
        out
    }

    fn render(&self, value: &String) -> String {
        value.clone()
    }
}

// combine = a ++ b on lists, order preserved

/// List concatenation with the empty list as identity. Associative but
/// not commutative; element order is preserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListConcat<T>(PhantomData<T>);

impl<T> ListConcat<T> {
    /// The list-concatenation rule.
    pub fn new() -> Self {
        ListConcat(PhantomData)
    }
}

impl<T> CombineRule for ListConcat<T>
where
    T: Clone + PartialEq + Debug + Display,
{
    type Value = Vec<T>;

    fn name(&self) -> &'static str {
        "list concat"
    }

    fn identity(&self) -> Vec<T> {
        Vec::new()
    }

    fn is_commutative(&self) -> bool {
        false
    }

    fn combine(&self, a: &Vec<T>, b: &Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend(a.iter().cloned());
        out.extend(b.iter().cloned());
        out
    }

    fn render(&self, value: &Vec<T>) -> String {
        value.iter().map(ToString::to_string).collect()
    }
}

// combine = a ++ b, kept sorted ascending

/// Concatenation into ascending order. Because every element is held in
/// the sorted canonical form (see
/// [`normalize`](CombineRule::normalize)), the operation is associative
/// *and* commutative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortedConcat<T>(PhantomData<T>);

impl<T> SortedConcat<T> {
    /// The sorted-concatenation rule.
    pub fn new() -> Self {
        SortedConcat(PhantomData)
    }
}

impl<T> CombineRule for SortedConcat<T>
where
    T: Ord + Clone + PartialEq + Debug + Display,
{
    type Value = Vec<T>;

    fn name(&self) -> &'static str {
        "sorted concat"
    }

    fn identity(&self) -> Vec<T> {
        Vec::new()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &Vec<T>, b: &Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend(a.iter().cloned());
        out.extend(b.iter().cloned());
        out.sort();
        out
    }

    fn normalize(&self, mut value: Vec<T>) -> Vec<T> {
        value.sort();
        value
    }

    fn render(&self, value: &Vec<T>) -> String {
        value.iter().map(ToString::to_string).collect()
    }
}

// combine = a ∪ b

/// Set union with the empty set as identity. Associative, commutative,
/// and idempotent; equality is membership equality regardless of
/// insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetUnion<T>(PhantomData<T>);

impl<T> SetUnion<T> {
    /// The set-union rule.
    pub fn new() -> Self {
        SetUnion(PhantomData)
    }
}

impl<T> CombineRule for SetUnion<T>
where
    T: Eq + Hash + Clone + Debug + Display,
{
    type Value = HashSet<T>;

    fn name(&self) -> &'static str {
        "set union"
    }

    fn identity(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn combine(&self, a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
        // Clone the larger side and extend with the smaller.
        if a.len() >= b.len() {
            let mut out = a.clone();
            out.extend(b.iter().cloned());
            out
        } else {
            let mut out = b.clone();
            out.extend(a.iter().cloned());
            out
        }
    }

    fn render(&self, value: &HashSet<T>) -> String {
        // Iteration order of a HashSet is unstable; sort the rendered
        // elements so the projection is deterministic.
        let mut parts: Vec<String> = value.iter().map(ToString::to_string).collect();
        parts.sort();
        parts.concat()
    }
}
