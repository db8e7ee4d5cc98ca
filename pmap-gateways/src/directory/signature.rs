//! OAuth 1.0 request signing (HMAC-SHA1).
//!
//! Signing is a pure function of the request, the credentials and the
//! supplied nonce/timestamp, so it stays deterministic and testable.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;

/// Long-lived credentials of the directory API.
///
/// Constructed once from the configuration and passed into the client;
/// never held in ambient global state.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

// RFC 3986 unreserved characters stay unencoded, everything else is escaped.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, STRICT_ENCODE_SET).to_string()
}

/// HTTP method, encoded URL and encoded, lexicographically sorted
/// parameter string, joined with `&` (RFC 5849 §3.4.1).
pub fn signature_base_string(method: &str, url: &str, params: &[(&str, String)]) -> String {
    let mut encoded: Vec<_> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();
    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method,
        percent_encode(url),
        percent_encode(&param_string)
    )
}

/// Base64-encoded HMAC-SHA1 signature over the base string, keyed with
/// the encoded consumer and token secrets.
pub fn sign(
    method: &str,
    url: &str,
    params: &[(&str, String)],
    credentials: &Credentials,
) -> String {
    let base = signature_base_string(method, url, params);
    let key = format!(
        "{}&{}",
        percent_encode(&credentials.consumer_secret),
        percent_encode(&credentials.token_secret)
    );
    // HMAC accepts keys of any length.
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("HMAC key of arbitrary length");
    mac.update(base.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            consumer_key: "ck".into(),
            consumer_secret: "cs".into(),
            token: "tk".into(),
            token_secret: "ts".into(),
        }
    }

    #[test]
    fn encode_unreserved_characters_unchanged() {
        assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn encode_reserved_characters() {
        assert_eq!(percent_encode("a b&c/d"), "a%20b%26c%2Fd");
    }

    #[test]
    fn base_string_sorts_parameters() {
        let params = [
            ("oauth_token", "tk".to_string()),
            ("oauth_consumer_key", "ck".to_string()),
        ];
        let base =
            signature_base_string("GET", "https://api.example.com/v2/business/guu", &params);
        assert_eq!(
            base,
            "GET&https%3A%2F%2Fapi.example.com%2Fv2%2Fbusiness%2Fguu\
             &oauth_consumer_key%3Dck%26oauth_token%3Dtk"
        );
    }

    #[test]
    fn signing_is_deterministic() {
        let params = [
            ("oauth_consumer_key", "ck".to_string()),
            ("oauth_nonce", "fixedfixedfixed1".to_string()),
            ("oauth_timestamp", "1700000000".to_string()),
        ];
        let url = "https://api.example.com/v2/business/guu";
        let first = sign("GET", url, &params, &credentials());
        let second = sign("GET", url, &params, &credentials());
        assert_eq!(first, second);
        // SHA1 digests are 20 bytes, i.e. 28 characters of base64.
        assert_eq!(first.len(), 28);
    }

    #[test]
    fn different_nonces_yield_different_signatures() {
        let url = "https://api.example.com/v2/business/guu";
        let with_nonce = |nonce: &str| {
            let params = [("oauth_nonce", nonce.to_string())];
            sign("GET", url, &params, &credentials())
        };
        assert_ne!(with_nonce("aaaaaaaaaaaaaaaa"), with_nonce("bbbbbbbbbbbbbbbb"));
    }
}
