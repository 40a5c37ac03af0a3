use thiserror::Error;

use crate::config::StoreConfig;

/// Signalled when a submitted secret does not match the configured one.
/// The session stays logged out; the caller shows a denial notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("incorrect admin password")]
pub struct AuthDenied;

/// Access check in front of catalog mutations.
///
/// This is a cosmetic gate, not a security boundary: the comparison happens
/// client-side and nothing downstream may treat it as cryptographically
/// meaningful. The trait exists so a server-verified credential flow can
/// replace [`StaticSecret`] without touching callers.
pub trait AuthGate {
    fn verify(&self, secret: &str) -> bool;
}

/// Byte-exact, case-sensitive comparison against a fixed secret.
#[derive(Debug, Clone)]
pub struct StaticSecret {
    secret: String,
}

impl StaticSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AuthGate for StaticSecret {
    fn verify(&self, secret: &str) -> bool {
        self.secret == secret
    }
}

/// Two-state login gate for the admin panel: logged out (initial) or
/// logged in. No expiry, no rate limiting, no hashing.
#[derive(Debug, Clone)]
pub struct AdminSession<G = StaticSecret> {
    gate: G,
    logged_in: bool,
}

impl<G: AuthGate> AdminSession<G> {
    pub fn new(gate: G) -> Self {
        Self {
            gate,
            logged_in: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Attempt to log in with the given secret.
    ///
    /// On a match the session transitions to logged in; otherwise it is left
    /// unchanged and the denial is returned for the caller to display.
    pub fn submit(&mut self, secret: &str) -> Result<(), AuthDenied> {
        if self.gate.verify(secret) {
            self.logged_in = true;
            Ok(())
        } else {
            Err(AuthDenied)
        }
    }

    /// Return to logged out. Always succeeds.
    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}

impl AdminSession<StaticSecret> {
    /// Session gated by the store's configured admin secret.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(StaticSecret::new(config.admin_secret))
    }
}
