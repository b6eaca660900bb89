//! `ipfs://` content identifiers.
//!
//! The identifier runs up to the next `/`, `?` or `#` and must be either a
//! CIDv0 (46 base58btc characters starting with `Qm`) or a multibase string:
//!
//! | Prefix | Encoding    |
//! |--------|-------------|
//! | `b`/`B` | base32 (lower/upper) |
//! | `f`/`F` | base16 (lower/upper) |
//! | `k`/`K` | base36 (lower/upper) |
//! | `z`     | base58btc   |
//! | `m`     | base64      |
//! | `u`     | base64url   |

use super::malformed;
use crate::error::ValidationResult;
use crate::scheme::Scheme;

const CIDV0_LENGTH: usize = 46;

const BASE58BTC: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Validates the text following `ipfs://`.
pub(crate) fn validate(rest: &str) -> ValidationResult {
    let id = rest.split(['/', '?', '#']).next().unwrap_or("");
    if id.is_empty() {
        return Err(malformed(Scheme::Ipfs, "empty content identifier"));
    }

    if id.len() == CIDV0_LENGTH && id.starts_with("Qm") {
        return check_alphabet(id, id, is_base58btc);
    }

    let mut chars = id.chars();
    let prefix = chars.next().unwrap_or_default();
    let body = chars.as_str();
    if body.is_empty() {
        return Err(malformed(Scheme::Ipfs, "empty multibase payload").with_context("cid", id));
    }

    let alphabet: fn(u8) -> bool = match prefix {
        'b' => |b| matches!(b, b'a'..=b'z' | b'2'..=b'7'),
        'B' => |b| matches!(b, b'A'..=b'Z' | b'2'..=b'7'),
        'f' => |b| matches!(b, b'0'..=b'9' | b'a'..=b'f'),
        'F' => |b| matches!(b, b'0'..=b'9' | b'A'..=b'F'),
        'k' => |b| matches!(b, b'0'..=b'9' | b'a'..=b'z'),
        'K' => |b| matches!(b, b'0'..=b'9' | b'A'..=b'Z'),
        'z' => is_base58btc,
        'm' => |b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/'),
        'u' => |b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'),
        _ => {
            return Err(malformed(Scheme::Ipfs, "unknown multibase prefix").with_context("cid", id));
        }
    };

    check_alphabet(id, body, alphabet)
}

fn check_alphabet(id: &str, body: &str, alphabet: fn(u8) -> bool) -> ValidationResult {
    if body.bytes().all(alphabet) {
        Ok(())
    } else {
        Err(malformed(Scheme::Ipfs, "character outside the multibase alphabet").with_context("cid", id))
    }
}

fn is_base58btc(b: u8) -> bool {
    BASE58BTC.as_bytes().contains(&b)
}
