use crate::clock::Clock;
use crate::keys::Keys;
use crate::payload::PayloadCodec;
use crate::protocol::Protocol;

/// Validates the compound response posted back by the verification provider.
pub struct ResponseVerifier<'a, C> {
    codec: &'a PayloadCodec<C>,
    protocol: &'a Protocol,
}

/// Response verification errors.
///
/// Payload-level reasons are folded into `InvalidAuthSignature` and
/// `InvalidAppSignature` so callers cannot tell a bad hash from a bad field.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("received invalid server response")]
    InvalidResponse,

    #[error("failed to validate authentication signature")]
    InvalidAuthSignature,

    #[error("failed to validate application signature")]
    InvalidAppSignature,

    #[error("usernames do not match")]
    UsernameMismatch,
}

impl<'a, C: Clock> ResponseVerifier<'a, C> {
    pub fn new(codec: &'a PayloadCodec<C>, protocol: &'a Protocol) -> Self {
        Self { codec, protocol }
    }

    /// Verify a response whose primary half must carry `prefix`.
    ///
    /// # Arguments
    /// * `keys` - Integration, secret and application keys
    /// * `prefix` - Expected prefix of the primary half
    /// * `response` - `primary:application` string posted by the provider
    ///
    /// # Returns
    /// The authenticated username
    ///
    /// # Errors
    /// * `InvalidResponse` - Not exactly two `:`-separated halves
    /// * `InvalidAuthSignature` - Primary half failed payload validation
    /// * `InvalidAppSignature` - Application half failed payload validation
    /// * `UsernameMismatch` - Halves name different users
    pub fn verify(
        &self,
        keys: Keys<'_>,
        prefix: &str,
        response: &str,
    ) -> Result<String, ResponseError> {
        let values: Vec<&str> = response.split(':').collect();
        let &[auth_signature, app_signature] = values.as_slice() else {
            tracing::debug!(prefix = %prefix, "Response is not two signed payloads");
            return Err(ResponseError::InvalidResponse);
        };

        let auth_username = self
            .codec
            .parse(keys.secret_key, auth_signature, prefix, keys.integration_key)
            .map_err(|_| ResponseError::InvalidAuthSignature)?;

        let app_username = self
            .codec
            .parse(
                keys.app_key,
                app_signature,
                &self.protocol.app_prefix,
                keys.integration_key,
            )
            .map_err(|_| ResponseError::InvalidAppSignature)?;

        if auth_username != app_username {
            tracing::warn!(prefix = %prefix, "Response halves name different users");
            return Err(ResponseError::UsernameMismatch);
        }

        Ok(auth_username)
    }

    /// Standard authentication response.
    pub fn verify_response(
        &self,
        keys: Keys<'_>,
        response: &str,
    ) -> Result<String, ResponseError> {
        self.verify(keys, &self.protocol.auth_prefix, response)
    }

    /// Enrollment response.
    pub fn verify_enroll_response(
        &self,
        keys: Keys<'_>,
        response: &str,
    ) -> Result<String, ResponseError> {
        self.verify(keys, &self.protocol.enroll_prefix, response)
    }
}
