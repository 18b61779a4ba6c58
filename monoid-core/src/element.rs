//! Immutable **elements**: one value bound to one combination rule.
//!
//! An [`Element`] is the unit a reduction works over. It is created
//! once and never mutated; [`Element::combine`] applies the bound
//! rule's operation to the two inner values and wraps the result in a
//! *new* element of the same rule. Equality and display both delegate
//! to the rule's hooks, so container-valued elements compare and render
//! the way their rule defines, not the way the raw container happens
//! to.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::rule::CombineRule;

/// An immutable value bound to a combination rule.
///
/// Two elements of the same rule type are equal iff the rule's
/// [`value_eq`](CombineRule::value_eq) holds on their inner values —
/// equality never inspects rule metadata. The `Display` form is the
/// rule's [`render`](CombineRule::render) projection.
///
/// # Example
///
/// ```rust
/// use monoid_core::rules::Concat;
/// use monoid_core::Element;
///
/// let a = Element::new(Concat, "abc".to_string());
/// let b = Element::new(Concat, "de".to_string());
///
/// let ab = a.combine(&b);
/// assert_eq!(ab.value(), "abcde");
/// assert_eq!(ab.to_string(), "abcde");
///
/// // The operands are untouched.
/// assert_eq!(a.value(), "abc");
/// ```
#[derive(Clone, Debug)]
pub struct Element<R: CombineRule> {
    rule: R,
    value: R::Value,
}

impl<R: CombineRule> Element<R> {
    /// Bind `value` to `rule`, bringing the value into the rule's
    /// canonical form.
    pub fn new(rule: R, value: R::Value) -> Self {
        let value = rule.normalize(value);
        Self { rule, value }
    }

    /// The element holding the rule's identity value.
    pub fn identity(rule: R) -> Self {
        let value = rule.identity();
        Self::new(rule, value)
    }

    /// The inner value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Consume the element and return the inner value.
    pub fn into_value(self) -> R::Value {
        self.value
    }

    /// The bound rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: CombineRule + Clone> Element<R> {
    /// Apply the bound rule to the two inner values, producing a new
    /// element of the same rule. Neither operand is mutated.
    pub fn combine(&self, other: &Self) -> Self {
        let combined = self.rule.combine(&self.value, &other.value);
        Element::new(self.rule.clone(), combined)
    }
}

impl<R: CombineRule> PartialEq for Element<R> {
    fn eq(&self, other: &Self) -> bool {
        self.rule.value_eq(&self.value, &other.value)
    }
}

impl<R: CombineRule> fmt::Display for Element<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rule.render(&self.value))
    }
}

// Hash is available exactly when the inner value hashes, and is
// derived from it — consistent with the default structural equality.
impl<R: CombineRule> Hash for Element<R>
where
    R::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::rules::{SetUnion, SortedConcat, Sum};

    fn set(xs: &[&str]) -> HashSet<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn combine_leaves_operands_untouched() {
        let a = Element::new(Sum::default(), 2i64);
        let b = Element::new(Sum::default(), 3i64);

        let c = a.combine(&b);

        assert_eq!(*c.value(), 5);
        assert_eq!(*a.value(), 2);
        assert_eq!(*b.value(), 3);
    }

    #[test]
    fn equality_is_by_value() {
        let a = Element::new(Sum::default(), 7i64);
        let b = Element::new(Sum::default(), 7i64);
        let c = Element::new(Sum::default(), 8i64);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn round_trip_recovers_equal_value() {
        let x = set(&["a", "b"]);
        let a = Element::new(SetUnion::default(), x.clone());
        let b = Element::new(SetUnion::default(), x);
        assert_eq!(a, b);
    }

    #[test]
    fn set_elements_equal_regardless_of_insertion_order() {
        let a: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let b: HashSet<String> = ["c", "a", "b"].iter().map(|s| s.to_string()).collect();

        assert_eq!(
            Element::new(SetUnion::default(), a),
            Element::new(SetUnion::default(), b)
        );
    }

    #[test]
    fn sorted_concat_normalizes_on_construction() {
        let a = Element::new(
            SortedConcat::default(),
            vec!["b".to_string(), "c".to_string(), "a".to_string()],
        );
        let b = Element::new(
            SortedConcat::default(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        );

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "abc");
    }

    #[test]
    fn identity_element_holds_the_identity_value() {
        let id = Element::identity(Sum::<i64>::default());
        assert_eq!(*id.value(), 0);
    }

    #[test]
    fn hash_follows_the_inner_value() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash_of = |e: &Element<Sum<i64>>| {
            let mut h = DefaultHasher::new();
            e.hash(&mut h);
            h.finish()
        };

        let a = Element::new(Sum::default(), 42i64);
        let b = Element::new(Sum::default(), 42i64);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
