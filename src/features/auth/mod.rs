//! Admin authorization for the moderation endpoints.
//!
//! A single shared secret sent in `X-Admin-Password`, checked through the
//! [`CredentialVerifier`] capability.

pub mod guards;
pub mod verifier;

pub use guards::require_admin;
pub use verifier::{CredentialVerifier, SharedSecretVerifier};
