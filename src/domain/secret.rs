//! Shared-secret credential gate

/// The expected scan passphrase, configured once at startup.
#[derive(Debug, Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns true only if `supplied` is non-empty and exactly equals the
    /// configured secret.
    ///
    /// The emptiness check runs before the comparison so that an
    /// empty-configured secret can never be satisfied by an empty
    /// `scan_password`.
    pub fn verify(&self, supplied: &str) -> bool {
        if supplied.is_empty() {
            return false;
        }
        supplied == self.0
    }
}
