//! Password hashing
//!
//! bcrypt is CPU-bound, so both operations run on tokio's blocking pool.

use bcrypt::{hash, verify, DEFAULT_COST};
use tokio::sync::OnceCell;

use crate::backend::error::BackendError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hash a password with bcrypt
pub async fn hash_password(password: String) -> Result<String, BackendError> {
    run_blocking(move || hash(password, DEFAULT_COST)).await
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, BackendError> {
    run_blocking(move || verify(password, &password_hash)).await
}

/// Spend the same bcrypt work as a real check when there is no stored hash
///
/// The comparison hash is computed once per process at `DEFAULT_COST`.
pub async fn verify_dummy_password(password: String) -> Result<(), BackendError> {
    static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

    let dummy = DUMMY_HASH
        .get_or_try_init(|| hash_password("sportshub-dummy-password".to_string()))
        .await?
        .clone();
    verify_password(password, dummy).await?;
    Ok(())
}

async fn run_blocking<T, F>(f: F) -> Result<T, BackendError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            BackendError::handler(
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )
        })?
        .map_err(BackendError::from)
}
