//! Cart line type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lubemart_catalog::Product;
use lubemart_core::{Price, ProductId};

/// One (product, size) selection with a quantity.
///
/// Carries a display snapshot of the product's name, image, and price taken
/// at the time of add, so the cart renders without a catalog lookup. The
/// merge identity is (`product_id`, `size`): the same product in two sizes is
/// two distinct lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Price,
    /// Always at least 1; zero-quantity updates are rejected upstream.
    pub quantity: u32,
    /// One of the product's declared size labels.
    pub size: String,
}

impl CartLine {
    /// Snapshot a catalog product into a cart line.
    #[must_use]
    pub fn from_product(product: &Product, size: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity,
            size: size.into(),
        }
    }

    /// Whether this line merges with another add for the same selection.
    #[must_use]
    pub fn matches(&self, product_id: ProductId, size: &str) -> bool {
        self.product_id == product_id && self.size == size
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.extended(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lubemart_catalog::query;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_from_product_snapshots_display_fields() {
        let product = query::by_id(ProductId::new(1)).unwrap();
        let line = CartLine::from_product(product, "1L", 2);

        assert_eq!(line.product_id, product.id);
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.size, "1L");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_line_total() {
        let product = query::by_id(ProductId::new(3)).unwrap();
        let line = CartLine::from_product(product, "1L", 3);
        assert_eq!(line.line_total(), product.price.extended(3));
    }
}
