//! Duo Web signed-token protocol
//!
//! Signs the challenge a relying service hands to the Duo verification
//! provider and verifies the provider's signed reply:
//! - HMAC-SHA1 keyed hashing (wire-compatible with the provider)
//! - Signed payload codec (`prefix|base64(fields|expiration)|hmac`)
//! - Compound request signing and response verification
//!
//! Nothing is stored between calls; a token is valid until the expiration it
//! carries, for the integration key it was bound to. Time is read through the
//! [`Clock`] trait so expiration can be tested without waiting.
//!
//! # Examples
//!
//! ## One-off calls on the system clock
//! ```
//! let challenge = duo_web::sign_request(
//!     "DIXXXXXXXXXXXXXXXXXX",
//!     "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
//!     "useacustomerprovidedapplicationsecretkey",
//!     "alice",
//! );
//! assert!(challenge.starts_with("TX|"));
//!
//! let result = duo_web::verify_response(
//!     "DIXXXXXXXXXXXXXXXXXX",
//!     "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
//!     "useacustomerprovidedapplicationsecretkey",
//!     "not-a-response",
//! );
//! assert_eq!(result, Err(duo_web::ResponseError::InvalidResponse));
//! ```
//!
//! ## Shared coordinator with a pinned clock
//! ```
//! use duo_web::{DuoWeb, FixedClock, Keys};
//!
//! let clock = FixedClock::at_timestamp(946684799).unwrap();
//! let duo = DuoWeb::with_clock(clock);
//! let keys = Keys::new(
//!     "abcdefghijklmnopqrst",
//!     "abcdefghijklmnopqrstuvwxyz1234567890!@#$",
//!     "abcdefghijklmnopqrstuvwxyz1234567890!@#$",
//! );
//!
//! let challenge = duo.sign_request(keys, "tester");
//! assert!(challenge.starts_with(
//!     "TX|dGVzdGVyfGFiY2RlZmdoaWprbG1ub3BxcnN0fDk0NjY4NTA5OQ==|"
//! ));
//! ```

pub mod clock;
pub mod digest;
pub mod keys;
pub mod payload;
pub mod protocol;
pub mod request;
pub mod response;
pub mod web;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use keys::KeyKind;
pub use keys::Keys;
pub use payload::PayloadCodec;
pub use payload::PayloadError;
pub use protocol::Protocol;
pub use request::RequestSigner;
pub use response::ResponseError;
pub use response::ResponseVerifier;
pub use web::DuoWeb;

/// Sign a standard authentication challenge on the system clock.
pub fn sign_request(
    integration_key: &str,
    secret_key: &str,
    app_key: &str,
    username: &str,
) -> String {
    DuoWeb::new().sign_request(Keys::new(integration_key, secret_key, app_key), username)
}

/// Sign an enrollment challenge on the system clock.
pub fn sign_enroll_request(
    integration_key: &str,
    secret_key: &str,
    app_key: &str,
    username: &str,
) -> String {
    DuoWeb::new().sign_enroll_request(Keys::new(integration_key, secret_key, app_key), username)
}

/// Verify a standard authentication response on the system clock.
///
/// # Errors
/// * `ResponseError` - Response is malformed, forged, expired or inconsistent
pub fn verify_response(
    integration_key: &str,
    secret_key: &str,
    app_key: &str,
    response: &str,
) -> Result<String, ResponseError> {
    DuoWeb::new().verify_response(Keys::new(integration_key, secret_key, app_key), response)
}

/// Verify an enrollment response on the system clock.
///
/// # Errors
/// * `ResponseError` - Response is malformed, forged, expired or inconsistent
pub fn verify_enroll_response(
    integration_key: &str,
    secret_key: &str,
    app_key: &str,
    response: &str,
) -> Result<String, ResponseError> {
    DuoWeb::new().verify_enroll_response(Keys::new(integration_key, secret_key, app_key), response)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const INTEGRATION_KEY: &str = "DIXXXXXXXXXXXXXXXXXX";
    const SECRET_KEY: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef";
    const APP_KEY: &str = "useacustomerprovidedapplicationsecretkey";

    fn respond(challenge: &str, prefix: &str) -> String {
        let (_, app_half) = challenge.split_once(':').expect("Missing separator");
        let auth_half = PayloadCodec::new(SystemClock).sign(
            SECRET_KEY,
            &["alice", INTEGRATION_KEY],
            prefix,
            Duration::seconds(300),
        );
        format!("{}:{}", auth_half, app_half)
    }

    #[test]
    fn test_exported_authentication_round_trip() {
        let challenge = sign_request(INTEGRATION_KEY, SECRET_KEY, APP_KEY, "alice");
        let response = respond(&challenge, "AUTH");

        assert_eq!(
            verify_response(INTEGRATION_KEY, SECRET_KEY, APP_KEY, &response),
            Ok("alice".to_string())
        );
    }

    #[test]
    fn test_exported_enrollment_round_trip() {
        let challenge = sign_enroll_request(INTEGRATION_KEY, SECRET_KEY, APP_KEY, "alice");
        assert!(challenge.starts_with("ENROLL_REQUEST|"));

        let response = respond(&challenge, "ENROLL");
        assert_eq!(
            verify_enroll_response(INTEGRATION_KEY, SECRET_KEY, APP_KEY, &response),
            Ok("alice".to_string())
        );
    }

    #[test]
    fn test_echoed_challenge_is_not_a_response() {
        let challenge = sign_request(INTEGRATION_KEY, SECRET_KEY, APP_KEY, "alice");

        assert_eq!(
            verify_response(INTEGRATION_KEY, SECRET_KEY, APP_KEY, &challenge),
            Err(ResponseError::InvalidAuthSignature)
        );
    }
}
