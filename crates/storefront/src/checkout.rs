//! Simulated order placement.
//!
//! There is no payment gateway. Checkout validates the cart, waits out the
//! simulated processing delay, and materializes an [`Order`] from the cart
//! contents. Orchestration (clearing the cart, recording the order on the
//! identity) lives in [`crate::state::Storefront`].

use chrono::Utc;
use rand::seq::IndexedRandom;
use thiserror::Error;

use lubemart_core::{OrderId, OrderStatus};

use crate::models::{CartLine, Order, PaymentMethod, ShippingAddress};

/// Alphabet for order references. Ambiguous glyphs (I, L, O, 0, 1) are
/// excluded so references survive being read over the phone.
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const REFERENCE_LENGTH: usize = 6;

/// Errors that can occur while placing an order.
///
/// Checkout itself is pure; persistence failures during order placement
/// surface as storage errors from the coordinator instead.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Build an order from the cart as it stands right now.
///
/// The lines are snapshotted into the order; later cart mutations do not
/// touch it. New orders always start in [`OrderStatus::Processing`].
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if `lines` is empty.
pub fn build_order(
    lines: &[CartLine],
    shipping_address: ShippingAddress,
    payment_method: PaymentMethod,
) -> Result<Order, CheckoutError> {
    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(Order {
        id: generate_reference(),
        date: Utc::now(),
        items: lines.to_vec(),
        total: lines.iter().map(CartLine::line_total).sum(),
        status: OrderStatus::Processing,
        payment_method,
        shipping_address,
    })
}

/// Generate a human-friendly order reference, e.g. `LM-K7Q2XC`.
///
/// References are random, not sequential, and not checked for collisions:
/// with a 31-character alphabet over six positions the space is large enough
/// for a single-device order history.
#[must_use]
pub fn generate_reference() -> OrderId {
    let mut rng = rand::rng();
    let suffix: String = (0..REFERENCE_LENGTH)
        .filter_map(|_| REFERENCE_CHARSET.choose(&mut rng))
        .map(|&b| char::from(b))
        .collect();
    OrderId::new(format!("LM-{suffix}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lubemart_catalog::query;
    use lubemart_core::ProductId;

    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            street: "14 Piston Lane".to_owned(),
            city: "Pune".to_owned(),
            state: "MH".to_owned(),
            zip_code: "411001".to_owned(),
            country: "India".to_owned(),
        }
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let err = build_order(&[], address(), PaymentMethod::Card).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn test_order_snapshots_lines_and_total() {
        let product = query::by_id(ProductId::new(1)).unwrap();
        let lines = vec![CartLine::from_product(product, "1L", 2)];

        let order = build_order(&lines, address(), PaymentMethod::Upi).unwrap();

        assert_eq!(order.items, lines);
        assert_eq!(order.total, lines[0].line_total());
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.payment_method, PaymentMethod::Upi);
    }

    #[test]
    fn test_reference_shape() {
        let reference = generate_reference();
        let s = reference.as_str();
        assert!(s.starts_with("LM-"));
        assert_eq!(s.len(), 9);
        assert!(s[3..].bytes().all(|b| REFERENCE_CHARSET.contains(&b)));
    }
}
