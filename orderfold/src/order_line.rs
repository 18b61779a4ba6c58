//! One line of an order: a product and its quantity/amount values.

use std::fmt;

use rand::Rng;

use crate::order_values::OrderValues;
use crate::product::Product;

/// A single order line, equal by componentwise value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderLine {
    product: Product,
    values: OrderValues,
}

impl OrderLine {
    /// A line for `product` with the given values.
    pub fn new(product: Product, values: OrderValues) -> Self {
        Self { product, values }
    }

    /// The product this line refers to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The line's quantity/amount values.
    pub fn values(&self) -> &OrderValues {
        &self.values
    }

    /// Randomized sample lines over a small product range.
    pub fn samples(count: usize) -> Vec<OrderLine> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let r = rng.gen_range(1..6);
                let product = Product::new(format!("P{r}"));
                let values = OrderValues::new(r as f64, 1.5 * r as f64);
                OrderLine::new(product, values)
            })
            .collect()
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.product, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_by_components() {
        let a = OrderLine::new(Product::new("P1"), OrderValues::new(1.0, 1.5));
        let b = OrderLine::new(Product::new("P1"), OrderValues::new(1.0, 1.5));
        let c = OrderLine::new(Product::new("P2"), OrderValues::new(1.0, 1.5));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn displays_product_then_values() {
        let line = OrderLine::new(Product::new("P1"), OrderValues::new(1.0, 1.5));
        assert_eq!(line.to_string(), "P1 1 $1.50");
    }

    #[test]
    fn samples_produce_the_requested_count() {
        assert_eq!(OrderLine::samples(4).len(), 4);
    }
}
