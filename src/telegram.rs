//! Telegram WebApp initData verification
//!
//! Telegram hands the embedded web app a query-string-like blob of
//! `key=value` pairs plus a `hash` field signing the rest. The hash is
//! HMAC-SHA256 over the remaining pairs sorted by key and joined with
//! newlines, keyed by a secret derived from the bot token:
//!
//! ```text
//! secret_key = HMAC_SHA256(key = "WebAppData", msg = bot_token)
//! hash       = hex(HMAC_SHA256(key = secret_key, msg = data_check_string))
//! ```
//!
//! Verification is pure and never panics on malformed input.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Key Telegram derives the signing secret from.
const WEB_APP_DATA_KEY: &[u8] = b"WebAppData";

/// Why a payload was rejected. Parse-class failures are distinguishable from
/// signature failures here and in logs; the HTTP boundary maps all of them
/// to 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitDataError {
    #[error("init data is empty")]
    Empty,
    #[error("malformed init data: segment {0:?}")]
    Malformed(String),
    #[error("init data carries no hash field")]
    MissingHash,
    #[error("init data signature mismatch")]
    SignatureMismatch,
}

/// Verify a raw initData payload against the bot token.
///
/// On success returns the signed fields with `hash` removed, keyed in sorted
/// order. The comparison against the received hash is constant-time.
pub fn verify_init_data(
    init_data: &str,
    bot_token: &str,
) -> Result<BTreeMap<String, String>, InitDataError> {
    if init_data.is_empty() {
        return Err(InitDataError::Empty);
    }

    let mut fields = BTreeMap::new();
    for segment in init_data.split('&') {
        // Split on the first '=' only; values may themselves contain '='
        // (Telegram base64-encodes some of them).
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| InitDataError::Malformed(segment.to_string()))?;
        if fields.insert(key.to_string(), value.to_string()).is_some() {
            // Duplicate keys make the signed content ambiguous.
            return Err(InitDataError::Malformed(segment.to_string()));
        }
    }

    let received_hash = fields.remove("hash").ok_or(InitDataError::MissingHash)?;
    let received_hash =
        hex::decode(&received_hash).map_err(|_| InitDataError::SignatureMismatch)?;

    let data_check_string = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut derive = HmacSha256::new_from_slice(WEB_APP_DATA_KEY)
        .expect("HMAC accepts keys of any length");
    derive.update(bot_token.as_bytes());
    let secret_key = derive.finalize().into_bytes();

    let mut mac =
        HmacSha256::new_from_slice(&secret_key).expect("HMAC accepts keys of any length");
    mac.update(data_check_string.as_bytes());
    mac.verify_slice(&received_hash)
        .map_err(|_| InitDataError::SignatureMismatch)?;

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_TOKEN: &str = "123456:TEST-TOKEN";

    /// Build a payload signed the way Telegram signs initData.
    fn signed_payload(fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<_> = fields.to_vec();
        sorted.sort_by_key(|(k, _)| *k);
        let data_check_string = sorted
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut derive = HmacSha256::new_from_slice(WEB_APP_DATA_KEY).unwrap();
        derive.update(BOT_TOKEN.as_bytes());
        let secret_key = derive.finalize().into_bytes();

        let mut mac = HmacSha256::new_from_slice(&secret_key).unwrap();
        mac.update(data_check_string.as_bytes());
        let hash = hex::encode(mac.finalize().into_bytes());

        let mut segments: Vec<String> =
            fields.iter().map(|(k, v)| format!("{k}={v}")).collect();
        segments.push(format!("hash={hash}"));
        segments.join("&")
    }

    #[test]
    fn test_valid_payload_returns_fields_without_hash() {
        let payload = signed_payload(&[
            ("auth_date", "1700000000"),
            ("query_id", "AAEkM2"),
            ("user", "%7B%22id%22%3A1%7D"),
        ]);

        let fields = verify_init_data(&payload, BOT_TOKEN).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["auth_date"], "1700000000");
        assert_eq!(fields["query_id"], "AAEkM2");
        assert!(!fields.contains_key("hash"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let payload = signed_payload(&[("payload", "YWJjZGVmZ2g="), ("auth_date", "1")]);
        let fields = verify_init_data(&payload, BOT_TOKEN).unwrap();
        assert_eq!(fields["payload"], "YWJjZGVmZ2g=");
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(verify_init_data("", BOT_TOKEN), Err(InitDataError::Empty));
    }

    #[test]
    fn test_segment_without_equals_is_malformed() {
        let result = verify_init_data("user=abc&garbage&hash=00", BOT_TOKEN);
        assert!(matches!(result, Err(InitDataError::Malformed(_))));
    }

    #[test]
    fn test_duplicate_keys_are_malformed() {
        let result = verify_init_data("user=a&user=b&hash=00", BOT_TOKEN);
        assert!(matches!(result, Err(InitDataError::Malformed(_))));
    }

    #[test]
    fn test_missing_hash() {
        assert_eq!(
            verify_init_data("user=abc&auth_date=1", BOT_TOKEN),
            Err(InitDataError::MissingHash)
        );
    }

    #[test]
    fn test_tampered_value_rejected() {
        let payload = signed_payload(&[("auth_date", "1700000000"), ("user", "alice")]);
        let tampered = payload.replace("user=alice", "user=mallory");
        assert_eq!(
            verify_init_data(&tampered, BOT_TOKEN),
            Err(InitDataError::SignatureMismatch)
        );
    }

    #[test]
    fn test_wrong_bot_token_rejected() {
        let payload = signed_payload(&[("auth_date", "1700000000")]);
        assert_eq!(
            verify_init_data(&payload, "999999:OTHER-TOKEN"),
            Err(InitDataError::SignatureMismatch)
        );
    }

    #[test]
    fn test_non_hex_hash_rejected() {
        assert_eq!(
            verify_init_data("user=abc&hash=not-hex", BOT_TOKEN),
            Err(InitDataError::SignatureMismatch)
        );
    }
}
