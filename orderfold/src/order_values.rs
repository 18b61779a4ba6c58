//! The numeric pair carried by an order line: quantity and amount.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

/// Quantity and monetary amount of one order line, equal by structural
/// value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderValues {
    quantity: f64,
    amount: f64,
}

// Quantities and amounts are finite by construction (parsed or
// generated), so equality is reflexive on every value in use.
impl Eq for OrderValues {}

impl Hash for OrderValues {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantity.to_bits().hash(state);
        self.amount.to_bits().hash(state);
    }
}

impl OrderValues {
    /// A quantity/amount pair.
    pub fn new(quantity: f64, amount: f64) -> Self {
        Self { quantity, amount }
    }

    /// The line quantity.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// The line amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Randomized sample values: a small whole quantity with a
    /// proportional amount.
    pub fn samples(count: usize) -> Vec<OrderValues> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let q = rng.gen_range(1..5) as f64;
                OrderValues::new(q, q * 1.5)
            })
            .collect()
    }
}

impl fmt::Display for OrderValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${:.2}", self.quantity, self.amount)
    }
}
