//! Orders: a code plus an ordered sequence of lines.

use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::order_line::OrderLine;
use crate::order_values::OrderValues;
use crate::product::Product;

/// Failure parsing order-line text.
///
/// Lines are `product,quantity,amount`, one per `\n`-separated row,
/// e.g. `"P1,1,1.5\nP2,2,2.5"`. Line numbers in the error are
/// 1-based.
#[derive(Debug, Error)]
pub enum OrderParseError {
    /// A row had fewer than three comma-separated fields, or an empty
    /// product code.
    #[error("order line {line}: expected `product,quantity,amount`")]
    MissingField {
        /// 1-based row number of the malformed line.
        line: usize,
    },

    /// A quantity or amount field did not parse as a number.
    #[error("order line {line}: invalid number in `{field}`")]
    InvalidNumber {
        /// 1-based row number of the malformed line.
        line: usize,
        /// The field text that failed to parse.
        field: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// An order: a code and the exact sequence of its lines.
///
/// Equality is full structural value equality — code plus line
/// sequence, order-sensitive — and the hash agrees with it, so orders
/// can live in hash sets. Two orders with identical lines but
/// different codes are distinct values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Order {
    code: String,
    lines: Vec<OrderLine>,
}

impl Order {
    /// An order from already-constructed lines.
    pub fn new(code: impl Into<String>, lines: impl IntoIterator<Item = OrderLine>) -> Self {
        Self {
            code: code.into(),
            lines: lines.into_iter().collect(),
        }
    }

    /// Parse an order from `product,quantity,amount` rows.
    ///
    /// # Errors
    ///
    /// Returns [`OrderParseError`] on the first malformed row.
    pub fn parse(code: impl Into<String>, text: &str) -> Result<Self, OrderParseError> {
        let mut lines = Vec::new();
        for (index, row) in text.lines().enumerate() {
            let line = index + 1;
            let mut fields = row.split(',');

            let product = fields
                .next()
                .filter(|s| !s.is_empty())
                .ok_or(OrderParseError::MissingField { line })?;
            let quantity = parse_field(fields.next(), line)?;
            let amount = parse_field(fields.next(), line)?;

            lines.push(OrderLine::new(
                Product::new(product),
                OrderValues::new(quantity, amount),
            ));
        }
        Ok(Self {
            code: code.into(),
            lines,
        })
    }

    /// The order code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The order's lines, in order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Randomized sample orders, coded `O{start}`, `O{start + 1}`, …,
    /// each with a handful of random lines.
    pub fn samples(count: usize, start: usize) -> Vec<Order> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|n| {
                let code = format!("O{}", n + start);
                let lines = OrderLine::samples(rng.gen_range(1..6));
                Order::new(code, lines)
            })
            .collect()
    }
}

fn parse_field(field: Option<&str>, line: usize) -> Result<f64, OrderParseError> {
    let field = field.ok_or(OrderParseError::MissingField { line })?;
    field.parse().map_err(|source| OrderParseError::InvalidNumber {
        line,
        field: field.to_string(),
        source,
    })
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        for line in &self.lines {
            write!(f, " {line}")?;
        }
        Ok(())
    }
}
