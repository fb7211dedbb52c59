//! User session store.
//!
//! A two-state machine: Guest (no identity) or Authenticated (identity
//! bound). The "database" is a mock user table persisted as one JSON
//! document; credentials are compared in plain text by design (demo only).

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use lubemart_core::{Email, UserId};

use crate::error::{AuthError, ValidationError};
use crate::models::{CartLine, Order, ProfileUpdate, SignupForm, User};
use crate::storage::{Storage, StorageError, keys};
use crate::subscribers::{Subscribers, SubscriptionId};

/// Minimum password length accepted at signup.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Session state and the mock user table.
pub struct SessionStore {
    storage: Storage,
    /// Simulated network latency applied to login and signup.
    latency: Duration,
    current: Option<User>,
    subscribers: Subscribers<Option<User>>,
}

impl SessionStore {
    /// Restore the persisted session, if any.
    #[must_use]
    pub fn load(storage: Storage, latency: Duration) -> Self {
        let current: Option<User> = storage.load(keys::CURRENT_USER);
        if let Some(user) = &current {
            info!(user = %user.id, "restored authenticated session");
        }
        Self {
            storage,
            latency,
            current,
            subscribers: Subscribers::new(),
        }
    }

    /// The authenticated identity, or `None` for a guest.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Log in with email and password.
    ///
    /// A linear scan of the mock table for an exact match. The failure is a
    /// single generic `InvalidCredentials` whether the email is unknown or
    /// the password is wrong, so login never reveals whether an account
    /// exists.
    ///
    /// Resolves only after the configured simulated latency; the caller must
    /// treat the operation as pending until then and reject resubmission.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on no match, or a storage error if the
    /// session cannot be persisted.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        sleep(self.latency).await;

        let found = self
            .users()
            .into_iter()
            .find(|u| u.email.as_str() == email && u.password == password);

        let Some(user) = found else {
            info!("login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        self.set_current(user.clone())?;
        info!(user = %user.id, "login");
        Ok(user)
    }

    /// Register a new user and log them in.
    ///
    /// `initial_cart` is the cart store's current snapshot, adopted onto the
    /// new identity so a pre-signup guest cart is not lost.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed form, `DuplicateEmail` if
    /// the address is already registered, or a storage error if persisting
    /// fails.
    pub async fn signup(
        &mut self,
        form: SignupForm,
        initial_cart: Vec<CartLine>,
    ) -> Result<User, AuthError> {
        sleep(self.latency).await;

        let email = validate_signup(&form)?;

        let mut users = self.users();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User {
            id: UserId::generate(),
            first_name: form.first_name,
            last_name: form.last_name,
            email,
            password: form.password,
            phone: form.phone,
            address: form.address,
            orders: Vec::new(),
            cart: initial_cart,
        };

        users.push(user.clone());
        self.save_users(&users)?;
        self.set_current(user.clone())?;

        info!(user = %user.id, "signup");
        Ok(user)
    }

    /// Clear the session, returning to Guest.
    ///
    /// The cart and wishlist are keyed to the browser, not the identity, and
    /// deliberately survive logout. The user row stays in the mock table.
    ///
    /// # Errors
    ///
    /// Returns an error if the session slot cannot be removed.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(user) = self.current.take() {
            self.storage.remove(keys::CURRENT_USER)?;
            self.subscribers.emit(&None);
            info!(user = %user.id, "logout");
        }
        Ok(())
    }

    /// Merge a partial profile update into the current identity.
    ///
    /// A no-op for guests. Email uniqueness is not re-checked here; signup
    /// is the only gate.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), StorageError> {
        let Some(user) = self.current.as_mut() else {
            debug!("profile update ignored for guest");
            return Ok(());
        };

        update.apply_to(user);
        let user = user.clone();
        self.persist_identity(&user)?;
        self.subscribers.emit(&self.current);
        Ok(())
    }

    /// Mirror the cart store's lines onto the current identity.
    ///
    /// A no-op for guests, and suppressed entirely when the given cart is
    /// value-equal to the identity's stored cart - every cart mutation calls
    /// this, so the suppression avoids a redundant write per keystroke.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn sync_cart(&mut self, cart: &[CartLine]) -> Result<(), StorageError> {
        let Some(user) = self.current.as_mut() else {
            return Ok(());
        };

        if user.cart == cart {
            debug!("cart sync suppressed, no change");
            return Ok(());
        }

        user.cart = cart.to_vec();
        let user = user.clone();
        self.persist_identity(&user)?;
        self.subscribers.emit(&self.current);
        Ok(())
    }

    /// Append a placed order to the current identity's history.
    ///
    /// A no-op for guests (guest checkout leaves no record).
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn record_order(&mut self, order: Order) -> Result<(), StorageError> {
        let Some(user) = self.current.as_mut() else {
            debug!(order = %order.id, "guest order not recorded");
            return Ok(());
        };

        user.orders.push(order);
        let user = user.clone();
        self.persist_identity(&user)?;
        self.subscribers.emit(&self.current);
        Ok(())
    }

    /// Register a listener invoked with the session state after every change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&Option<User>) + Send + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn users(&self) -> Vec<User> {
        self.storage.load(keys::USERS).unwrap_or_default()
    }

    fn save_users(&self, users: &[User]) -> Result<(), StorageError> {
        self.storage.save(keys::USERS, &users)
    }

    /// Persist `user` into both the session slot and its row in the table.
    fn persist_identity(&self, user: &User) -> Result<(), StorageError> {
        self.storage.save(keys::CURRENT_USER, user)?;

        let mut users = self.users();
        if let Some(row) = users.iter_mut().find(|u| u.id == user.id) {
            *row = user.clone();
        }
        self.save_users(&users)
    }

    fn set_current(&mut self, user: User) -> Result<(), StorageError> {
        self.storage.save(keys::CURRENT_USER, &user)?;
        self.current = Some(user);
        self.subscribers.emit(&self.current);
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.current.is_some())
            .finish_non_exhaustive()
    }
}

/// Validate the signup form, returning the parsed email on success.
fn validate_signup(form: &SignupForm) -> Result<Email, ValidationError> {
    if form.first_name.trim().is_empty() {
        return Err(ValidationError::MissingField("firstName"));
    }
    if form.last_name.trim().is_empty() {
        return Err(ValidationError::MissingField("lastName"));
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if form.password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    if form.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(Email::parse(&form.email)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::load(Storage::new(MemoryStorage::new()), Duration::ZERO)
    }

    fn form(email: &str) -> SignupForm {
        SignupForm {
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            email: email.to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
            phone: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let mut session = store();
        let user = session.signup(form("asha@example.com"), Vec::new()).await.unwrap();
        assert!(session.is_authenticated());
        assert!(user.orders.is_empty());

        session.logout().unwrap();
        assert!(!session.is_authenticated());

        let back = session.login("asha@example.com", "secret1").await.unwrap();
        assert_eq!(back.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let mut session = store();
        session.signup(form("asha@example.com"), Vec::new()).await.unwrap();
        session.logout().unwrap();

        let err = session
            .signup(form("asha@example.com"), Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let mut session = store();
        session.signup(form("asha@example.com"), Vec::new()).await.unwrap();
        session.logout().unwrap();

        let wrong_password = session
            .login("asha@example.com", "not-it")
            .await
            .unwrap_err();
        let unknown_email = session
            .login("nobody@example.com", "secret1")
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let mut session = store();

        let mut bad = form("asha@example.com");
        bad.password = "short".to_owned();
        bad.confirm_password = "short".to_owned();
        let err = session.signup(bad, Vec::new()).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::PasswordTooShort { min: 6 })
        ));

        let mut mismatch = form("asha@example.com");
        mismatch.confirm_password = "secret2".to_owned();
        let err = session.signup(mismatch, Vec::new()).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::PasswordMismatch)
        ));

        let bad_email = form("not-an-email");
        let err = session.signup(bad_email, Vec::new()).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::InvalidEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_update_profile_is_noop_for_guest() {
        let mut session = store();
        session
            .update_profile(ProfileUpdate {
                first_name: Some("Ghost".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_update_profile_persists_to_both_slots() {
        let storage = Storage::new(MemoryStorage::new());
        let mut session = SessionStore::load(storage.clone(), Duration::ZERO);
        session.signup(form("asha@example.com"), Vec::new()).await.unwrap();

        session
            .update_profile(ProfileUpdate {
                phone: Some("555-0100".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        let current: User = storage.load(keys::CURRENT_USER).unwrap();
        assert_eq!(current.phone.as_deref(), Some("555-0100"));

        let users: Vec<User> = storage.load(keys::USERS).unwrap();
        assert_eq!(users[0].phone.as_deref(), Some("555-0100"));
    }

    #[tokio::test]
    async fn test_sync_cart_suppressed_when_unchanged() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut session = store();
        session.signup(form("asha@example.com"), Vec::new()).await.unwrap();

        let emitted = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&emitted);
        session.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Identical to the stored (empty) cart: suppressed, no emit.
        session.sync_cart(&[]).unwrap();
        assert_eq!(emitted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_logout_keeps_user_row() {
        let storage = Storage::new(MemoryStorage::new());
        let mut session = SessionStore::load(storage.clone(), Duration::ZERO);
        session.signup(form("asha@example.com"), Vec::new()).await.unwrap();
        session.logout().unwrap();

        assert!(storage.load::<User>(keys::CURRENT_USER).is_none());
        let users: Vec<User> = storage.load(keys::USERS).unwrap();
        assert_eq!(users.len(), 1);
    }
}
