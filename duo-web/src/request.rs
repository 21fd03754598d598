use crate::clock::Clock;
use crate::keys::Keys;
use crate::payload::PayloadCodec;
use crate::protocol::Protocol;

/// Builds the compound challenge handed to the verification provider.
///
/// The challenge is `primary:application`. The primary half is signed with
/// the secret key for the provider, the application half with the app key for
/// the relying service itself. Both carry `[username, integration_key]`.
pub struct RequestSigner<'a, C> {
    codec: &'a PayloadCodec<C>,
    protocol: &'a Protocol,
}

impl<'a, C: Clock> RequestSigner<'a, C> {
    pub fn new(codec: &'a PayloadCodec<C>, protocol: &'a Protocol) -> Self {
        Self { codec, protocol }
    }

    /// Sign a challenge whose primary half carries `prefix`.
    pub fn sign(&self, keys: Keys<'_>, username: &str, prefix: &str) -> String {
        let payload = [username, keys.integration_key];

        let duo_signature = self
            .codec
            .sign(keys.secret_key, &payload, prefix, self.protocol.duo_ttl());
        let app_signature = self.codec.sign(
            keys.app_key,
            &payload,
            &self.protocol.app_prefix,
            self.protocol.app_ttl(),
        );

        tracing::debug!(
            prefix = %prefix,
            integration_key = %keys.integration_key,
            "Request signed"
        );

        format!("{}:{}", duo_signature, app_signature)
    }

    /// Standard authentication challenge.
    pub fn sign_request(&self, keys: Keys<'_>, username: &str) -> String {
        self.sign(keys, username, &self.protocol.duo_prefix)
    }

    /// Enrollment challenge.
    pub fn sign_enroll_request(&self, keys: Keys<'_>, username: &str) -> String {
        self.sign(keys, username, &self.protocol.enroll_request_prefix)
    }
}
