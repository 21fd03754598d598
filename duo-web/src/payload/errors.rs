use thiserror::Error;

/// Reasons a signed payload is rejected.
///
/// Variants are listed in the order the checks run; a payload with several
/// defects reports the first one.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("invalid payload format")]
    InvalidFormat,

    #[error("signature hash does not match")]
    InvalidSignature,

    #[error("payload prefix does not match")]
    InvalidPrefix,

    #[error("payload content is invalid")]
    InvalidContent,

    #[error("payload expiration is invalid")]
    InvalidExpiration,

    #[error("payload key does not match")]
    InvalidKey,

    #[error("payload username is invalid")]
    InvalidUsername,
}
