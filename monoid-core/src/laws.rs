//! Spot-checks of the monoid axioms on concrete values.
//!
//! A check evaluates both sides of a law for one particular triple (or
//! pair) of elements and reports whether they came out equal — it is
//! evidence, not a proof. A failed law is a normal, reportable outcome:
//! the difference and safe-division rules are expected to fail here,
//! and nothing throws.
//!
//! Closure needs no runtime check at all: `combine` is typed to return
//! an element of the same rule, so closure holds by construction. The
//! rendered [`LawReport`] states as much.

use std::fmt;

use crate::element::Element;
use crate::rule::CombineRule;

/// The two sides of one law comparison, rendered, plus the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawOutcome {
    /// Whether the two sides compared equal.
    pub holds: bool,
    /// Rendered left-hand side, `(a · b) · c`.
    pub lhs: String,
    /// Rendered right-hand side, `a · (b · c)`.
    pub rhs: String,
}

/// Outcome of the identity check `e · a = a · e = a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityOutcome {
    /// Whether both `e · a` and `a · e` equal `a`.
    pub holds: bool,
    /// Rendered `e · a`.
    pub left: String,
    /// Rendered `a · e`.
    pub right: String,
    /// Rendered `a` itself.
    pub value: String,
}

/// A full axiom walkthrough for one rule on one sample triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawReport {
    /// Name of the rule under check.
    pub rule: &'static str,
    /// The associativity spot-check.
    pub associativity: LawOutcome,
    /// The identity spot-check.
    pub identity: IdentityOutcome,
}

impl LawReport {
    /// Whether every checked law held on the sample values.
    pub fn is_monoid_on_samples(&self) -> bool {
        self.associativity.holds && self.identity.holds
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.rule)?;
        writeln!(f, "---------------------------------")?;
        writeln!(f, "closure: holds by construction of the typed combine")?;
        writeln!(
            f,
            "associativity: (a · b) · c = {}, a · (b · c) = {} -> {}",
            self.associativity.lhs,
            self.associativity.rhs,
            if self.associativity.holds {
                "associative"
            } else {
                "NOT associative"
            }
        )?;
        writeln!(
            f,
            "identity: e · a = {}, a · e = {}, a = {} -> {}",
            self.identity.left,
            self.identity.right,
            self.identity.value,
            if self.identity.holds {
                "identity"
            } else {
                "NOT an identity"
            }
        )
    }
}

/// Evaluate `(a · b) · c` and `a · (b · c)` and report whether they are
/// value-equal.
pub fn check_associativity<R>(a: &Element<R>, b: &Element<R>, c: &Element<R>) -> LawOutcome
where
    R: CombineRule + Clone,
{
    let lhs = a.combine(b).combine(c);
    let rhs = a.combine(&b.combine(c));

    LawOutcome {
        holds: lhs == rhs,
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    }
}

/// Evaluate `e · a` and `a · e` and report whether both equal `a`.
pub fn check_identity<R>(identity: &Element<R>, a: &Element<R>) -> IdentityOutcome
where
    R: CombineRule + Clone,
{
    let left = identity.combine(a);
    let right = a.combine(identity);

    IdentityOutcome {
        holds: left == *a && right == *a,
        left: left.to_string(),
        right: right.to_string(),
        value: a.to_string(),
    }
}

/// Run the full axiom walkthrough for one rule: closure (by
/// construction), associativity on `(a, b, c)`, identity on `a`.
pub fn check<R>(
    identity: &Element<R>,
    a: &Element<R>,
    b: &Element<R>,
    c: &Element<R>,
) -> LawReport
where
    R: CombineRule + Clone,
{
    LawReport {
        rule: a.rule().name(),
        associativity: check_associativity(a, b, c),
        identity: check_identity(identity, a),
    }
}
