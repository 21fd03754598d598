use std::fmt;

use crate::protocol::Protocol;

/// The three keys a relying service holds for one integration.
///
/// - `integration_key` identifies the integration and is bound into both halves
/// - `secret_key` is shared with the verification provider
/// - `app_key` never leaves the relying service
#[derive(Clone, Copy)]
pub struct Keys<'a> {
    pub integration_key: &'a str,
    pub secret_key: &'a str,
    pub app_key: &'a str,
}

/// Which of the three keys a length advisory is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Integration,
    Secret,
    Application,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Integration => write!(f, "integration key"),
            KeyKind::Secret => write!(f, "secret key"),
            KeyKind::Application => write!(f, "application key"),
        }
    }
}

impl<'a> Keys<'a> {
    pub fn new(integration_key: &'a str, secret_key: &'a str, app_key: &'a str) -> Self {
        Self {
            integration_key,
            secret_key,
            app_key,
        }
    }

    /// Keys shorter than the protocol's declared minimums.
    ///
    /// Signing and verification never consult this; it exists so callers can
    /// warn about weak configuration.
    pub fn short_keys(&self, protocol: &Protocol) -> Vec<KeyKind> {
        [
            (KeyKind::Integration, self.integration_key, protocol.integration_key_len),
            (KeyKind::Secret, self.secret_key, protocol.secret_key_len),
            (KeyKind::Application, self.app_key, protocol.app_key_len),
        ]
        .into_iter()
        .filter(|(_, key, min)| key.len() < *min)
        .map(|(kind, _, _)| kind)
        .collect()
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Keys<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("integration_key", &self.integration_key)
            .field("secret_key", &"<redacted>")
            .field("app_key", &"<redacted>")
            .finish()
    }
}
