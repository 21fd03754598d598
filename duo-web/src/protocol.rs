use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

/// Prefix of the primary half of a standard authentication challenge.
pub const DUO_PREFIX: &str = "TX";
/// Prefix of the application half of every compound token.
pub const APP_PREFIX: &str = "APP";
/// Prefix of the primary half of a standard authentication response.
pub const AUTH_PREFIX: &str = "AUTH";
/// Prefix of the primary half of an enrollment challenge.
pub const ENROLL_REQUEST_PREFIX: &str = "ENROLL_REQUEST";
/// Prefix of the primary half of an enrollment response.
pub const ENROLL_PREFIX: &str = "ENROLL";

/// Lifetime of the primary half, in seconds.
pub const DUO_EXPIRATION: i64 = 300;
/// Lifetime of the application half, in seconds.
pub const APP_EXPIRATION: i64 = 3600;

pub const INTEGRATION_KEY_LEN: usize = 20;
pub const SECRET_KEY_LEN: usize = 40;
pub const APP_KEY_LEN: usize = 40;

/// Protocol constants shared by the signer and the verifier.
///
/// `Protocol::default()` reproduces the wire protocol the verification
/// provider expects. Deserializing fills any missing field from the default,
/// so a configuration file only has to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocol {
    pub duo_prefix: String,
    pub app_prefix: String,
    pub auth_prefix: String,
    pub enroll_request_prefix: String,
    pub enroll_prefix: String,

    /// Seconds the primary half stays valid
    pub duo_expiration: i64,

    /// Seconds the application half stays valid
    pub app_expiration: i64,

    pub integration_key_len: usize,
    pub secret_key_len: usize,
    pub app_key_len: usize,
}

impl Protocol {
    /// Create the legacy protocol constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the primary-half lifetime.
    pub fn with_duo_expiration(mut self, seconds: i64) -> Self {
        self.duo_expiration = seconds;
        self
    }

    /// Override the application-half lifetime.
    pub fn with_app_expiration(mut self, seconds: i64) -> Self {
        self.app_expiration = seconds;
        self
    }

    pub fn duo_ttl(&self) -> Duration {
        Duration::seconds(self.duo_expiration)
    }

    pub fn app_ttl(&self) -> Duration {
        Duration::seconds(self.app_expiration)
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self {
            duo_prefix: DUO_PREFIX.to_string(),
            app_prefix: APP_PREFIX.to_string(),
            auth_prefix: AUTH_PREFIX.to_string(),
            enroll_request_prefix: ENROLL_REQUEST_PREFIX.to_string(),
            enroll_prefix: ENROLL_PREFIX.to_string(),
            duo_expiration: DUO_EXPIRATION,
            app_expiration: APP_EXPIRATION,
            integration_key_len: INTEGRATION_KEY_LEN,
            secret_key_len: SECRET_KEY_LEN,
            app_key_len: APP_KEY_LEN,
        }
    }
}
