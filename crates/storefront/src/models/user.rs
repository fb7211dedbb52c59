//! User domain types.

use serde::{Deserialize, Serialize};

use lubemart_core::{Email, UserId};

use super::cart::CartLine;
use super::order::Order;

/// A profile address. Every field is optional; users fill in what they want.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A registered identity in the mock user table.
///
/// The password is stored and compared in plain text. That is acceptable
/// only because this is a demo with no server and no real accounts; a real
/// system must hash and salt at the boundary instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned once at signup, stable thereafter.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Unique key across the user table.
    pub email: Email,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Placed orders, oldest first.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Cart snapshot mirrored from the cart store while authenticated.
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

impl User {
    /// Display name for greetings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this identity carries a non-empty stored cart.
    #[must_use]
    pub fn has_stored_cart(&self) -> bool {
        !self.cart.is_empty()
    }
}

/// Signup form input, validated by the session store before a user is
/// created.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

/// Partial profile update; `None` fields are left unchanged.
///
/// Email uniqueness is only checked at signup, not here.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Email>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

impl ProfileUpdate {
    /// Merge the set fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
        if let Some(address) = self.address {
            user.address = Some(address);
        }
    }
}
