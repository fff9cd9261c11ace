use crate::core::error::{AppError, Result};
use crate::features::auth::verifier::CredentialVerifier;
use crate::shared::constants::ADMIN_PASSWORD_HEADER;
use crate::shared::types::HttpEvent;

/// Admin gate run before any store access.
///
/// Reads `X-Admin-Password` in whatever case the caller sent it and fails with
/// `AppError::Unauthorized` when the verifier rejects it.
pub fn require_admin(verifier: &dyn CredentialVerifier, event: &HttpEvent) -> Result<()> {
    if verifier.verify(event.header(ADMIN_PASSWORD_HEADER)) {
        return Ok(());
    }

    tracing::warn!(
        "Rejected admin request: method={}, header_present={}",
        event.http_method,
        event.header(ADMIN_PASSWORD_HEADER).is_some()
    );
    Err(AppError::Unauthorized)
}
