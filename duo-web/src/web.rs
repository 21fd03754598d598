use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::keys::Keys;
use crate::payload::PayloadCodec;
use crate::protocol::Protocol;
use crate::request::RequestSigner;
use crate::response::ResponseError;
use crate::response::ResponseVerifier;

/// Coordinator combining request signing and response verification.
///
/// Owns the clock and protocol constants so a service can build one instance
/// at startup and share it across handlers.
#[derive(Debug, Clone)]
pub struct DuoWeb<C = SystemClock> {
    codec: PayloadCodec<C>,
    protocol: Protocol,
}

impl DuoWeb<SystemClock> {
    /// Create a coordinator on the system clock with the legacy protocol.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DuoWeb<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DuoWeb<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_protocol(clock, Protocol::default())
    }

    pub fn with_protocol(clock: C, protocol: Protocol) -> Self {
        Self {
            codec: PayloadCodec::new(clock),
            protocol,
        }
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn codec(&self) -> &PayloadCodec<C> {
        &self.codec
    }

    pub fn signer(&self) -> RequestSigner<'_, C> {
        RequestSigner::new(&self.codec, &self.protocol)
    }

    pub fn verifier(&self) -> ResponseVerifier<'_, C> {
        ResponseVerifier::new(&self.codec, &self.protocol)
    }

    /// Sign a standard authentication challenge for `username`.
    pub fn sign_request(&self, keys: Keys<'_>, username: &str) -> String {
        self.signer().sign_request(keys, username)
    }

    /// Sign an enrollment challenge for `username`.
    pub fn sign_enroll_request(&self, keys: Keys<'_>, username: &str) -> String {
        self.signer().sign_enroll_request(keys, username)
    }

    /// Verify a standard authentication response.
    ///
    /// # Errors
    /// * `ResponseError` - Response is malformed, forged, expired or inconsistent
    pub fn verify_response(
        &self,
        keys: Keys<'_>,
        response: &str,
    ) -> Result<String, ResponseError> {
        self.verifier().verify_response(keys, response)
    }

    /// Verify an enrollment response.
    ///
    /// # Errors
    /// * `ResponseError` - Response is malformed, forged, expired or inconsistent
    pub fn verify_enroll_response(
        &self,
        keys: Keys<'_>,
        response: &str,
    ) -> Result<String, ResponseError> {
        self.verifier().verify_enroll_response(keys, response)
    }
}
