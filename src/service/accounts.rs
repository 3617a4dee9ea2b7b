//! Account service
//!
//! Credential checks and registration over the accounts collection.

use std::sync::Arc;

use crate::data::{Account, PhotoStore};
use crate::error::AppError;

/// Sentinel email used by the test suite; `delete_test_accounts`
/// removes every record carrying it.
pub const TEST_ACCOUNT_EMAIL: &str = "test098@testing345test.com";

/// Account service
pub struct AccountService {
    store: Arc<dyn PhotoStore>,
}

impl AccountService {
    /// Create new account service
    pub fn new(store: Arc<dyn PhotoStore>) -> Self {
        Self { store }
    }

    /// Check the submitted credentials against the stored accounts.
    ///
    /// A linear scan for an exact (email, password) match.
    ///
    /// # Errors
    /// `Unauthorized` when no account matches; `Store` on read failure.
    pub async fn authenticate(&self, email_address: &str, password: &str) -> Result<(), AppError> {
        let document = self.store.load_accounts().await?;

        let matched = document
            .accounts
            .iter()
            .any(|account| account.email_address == email_address && account.password == password);

        if matched {
            tracing::info!(email = %email_address, "Login succeeded");
            Ok(())
        } else {
            Err(AppError::Unauthorized(
                "Those credentials are incorrect".to_string(),
            ))
        }
    }

    /// Register a new account.
    ///
    /// Email uniqueness is enforced here and only here; on conflict the
    /// store is left untouched. The full submitted record is appended,
    /// extra fields included.
    ///
    /// # Errors
    /// `Conflict` when the email is already registered.
    pub async fn register(&self, account: Account) -> Result<(), AppError> {
        let mut document = self.store.load_accounts().await?;

        let taken = document
            .accounts
            .iter()
            .any(|existing| existing.email_address == account.email_address);
        if taken {
            return Err(AppError::Conflict(
                "That email address is already in use".to_string(),
            ));
        }

        tracing::info!(email = %account.email_address, "Registering account");
        document.accounts.push(account);
        self.store.save_accounts(&document).await?;
        Ok(())
    }

    /// Remove every account matching the test sentinel email.
    ///
    /// Idempotent: rewrites the store and succeeds even when nothing
    /// matched.
    pub async fn delete_test_accounts(&self) -> Result<usize, AppError> {
        let mut document = self.store.load_accounts().await?;

        let before = document.accounts.len();
        document
            .accounts
            .retain(|account| account.email_address != TEST_ACCOUNT_EMAIL);
        let removed = before - document.accounts.len();

        self.store.save_accounts(&document).await?;
        tracing::info!(removed, "Deleted test accounts");
        Ok(removed)
    }
}
