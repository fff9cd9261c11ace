//! Credential verification for admin-gated operations.

use crate::core::config::AdminConfig;

/// Decides whether a caller-supplied credential grants admin access.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, supplied: Option<&str>) -> bool;
}

/// Single shared secret compared by plain string equality.
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.password.clone())
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, supplied: Option<&str>) -> bool {
        supplied.is_some_and(|value| value == self.secret)
    }
}
