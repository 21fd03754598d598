use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;

/// Compute the lowercase hex HMAC-SHA1 of `message` under `secret`.
///
/// SHA-1 is what the verification provider speaks; changing the algorithm
/// breaks every token exchanged with it.
pub fn hmac_sha1_hex(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}

/// Timing-safe equality of two hex digests.
pub fn digests_match(expected: &str, actual: &str) -> bool {
    expected.as_bytes().ct_eq(actual.as_bytes()).into()
}
