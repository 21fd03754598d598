use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Duration;

use super::errors::PayloadError;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::digest::digests_match;
use crate::digest::hmac_sha1_hex;

/// Signs and parses single `prefix|base64(content)|hmac` payloads.
///
/// The content is the caller's fields followed by an absolute expiration in
/// Unix seconds, all joined with `|`. The HMAC covers `prefix|base64(content)`.
#[derive(Debug, Clone, Default)]
pub struct PayloadCodec<C = SystemClock> {
    clock: C,
}

impl<C: Clock> PayloadCodec<C> {
    /// Create a codec reading time from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Sign `fields` under `secret`, valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `secret` - HMAC key the verifying side already holds
    /// * `fields` - Ordered values to embed (subject first, bound key second)
    /// * `prefix` - Purpose tag placed in front of the content
    /// * `ttl` - Validity window; negative values produce an already expired payload
    ///
    /// # Returns
    /// Signed payload string
    pub fn sign(&self, secret: &str, fields: &[&str], prefix: &str, ttl: Duration) -> String {
        let expiration = self
            .clock
            .now()
            .timestamp()
            .saturating_add(ttl.num_seconds());

        let mut content = fields.join("|");
        if !fields.is_empty() {
            content.push('|');
        }
        content.push_str(&expiration.to_string());

        let cookie = format!("{}|{}", prefix, STANDARD.encode(content));
        let signature = hmac_sha1_hex(secret, &cookie);

        tracing::debug!(
            prefix = %prefix,
            ttl_seconds = ttl.num_seconds(),
            expiration,
            "Payload signed"
        );

        format!("{}|{}", cookie, signature)
    }

    /// Validate a signed payload and return the subject it carries.
    ///
    /// # Arguments
    /// * `secret` - HMAC key the payload must be signed with
    /// * `payload` - Signed payload string
    /// * `prefix` - Expected purpose tag
    /// * `key` - Expected bound key
    ///
    /// # Returns
    /// The subject (first content field)
    ///
    /// # Errors
    /// Checks run in this order and the first failure is returned:
    /// * `InvalidFormat` - Not exactly three `|`-separated parts
    /// * `InvalidSignature` - HMAC does not match
    /// * `InvalidPrefix` - Prefix differs from `prefix`
    /// * `InvalidContent` - Content is not base64 of exactly three `|`-separated fields
    /// * `InvalidExpiration` - Expiration is not an integer or lies in the past
    /// * `InvalidKey` - Bound key differs from `key`
    /// * `InvalidUsername` - Subject is empty
    pub fn parse(
        &self,
        secret: &str,
        payload: &str,
        prefix: &str,
        key: &str,
    ) -> Result<String, PayloadError> {
        let result = self.validate(secret, payload, prefix, key);

        match &result {
            Ok(_) => tracing::debug!(prefix = %prefix, "Payload accepted"),
            Err(e) => tracing::debug!(prefix = %prefix, reason = %e, "Payload rejected"),
        }

        result
    }

    fn validate(
        &self,
        secret: &str,
        payload: &str,
        prefix: &str,
        key: &str,
    ) -> Result<String, PayloadError> {
        let parts: Vec<&str> = payload.split('|').collect();
        let &[payload_prefix, payload_content, payload_signature] = parts.as_slice() else {
            return Err(PayloadError::InvalidFormat);
        };

        let signature = hmac_sha1_hex(secret, &format!("{}|{}", payload_prefix, payload_content));
        if !digests_match(&signature, payload_signature) {
            return Err(PayloadError::InvalidSignature);
        }

        if payload_prefix != prefix {
            return Err(PayloadError::InvalidPrefix);
        }

        let content = STANDARD
            .decode(payload_content)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(PayloadError::InvalidContent)?;
        let values: Vec<&str> = content.split('|').collect();
        let &[username, payload_key, expiration] = values.as_slice() else {
            return Err(PayloadError::InvalidContent);
        };

        let now = self.clock.now().timestamp();
        expiration
            .parse::<i64>()
            .ok()
            .filter(|expiration| *expiration >= now)
            .ok_or(PayloadError::InvalidExpiration)?;

        if payload_key != key {
            return Err(PayloadError::InvalidKey);
        }

        if username.is_empty() {
            return Err(PayloadError::InvalidUsername);
        }

        Ok(username.to_string())
    }
}
