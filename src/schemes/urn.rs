//! `urn:` names.
//!
//! ```text
//! urn = "urn:" NID ":" NSS [ "?" ... ] [ "#" ... ]
//! NID = ALPHA 0*31( ALPHA / DIGIT / "-" )   ; no trailing "-"
//! NSS = 1*( pchar / "/" )
//! ```

use super::malformed;
use crate::constants::MAX_URN_NID_LENGTH;
use crate::error::ValidationResult;
use crate::scheme::Scheme;

pub(crate) fn validate(rest: &str) -> ValidationResult {
    let Some((nid, nss)) = rest.split_once(':') else {
        return Err(malformed(Scheme::Urn, "expected 'NID:NSS'"));
    };

    validate_nid(nid)?;

    // r-, q- and f-components follow the NSS
    let nss = nss.split(['?', '#']).next().unwrap_or("");
    if nss.is_empty() {
        return Err(malformed(Scheme::Urn, "empty namespace-specific string").with_context("nid", nid));
    }
    if let Some(c) = nss.chars().find(|&c| !is_nss_char(c)) {
        return Err(malformed(Scheme::Urn, "invalid character in namespace-specific string")
            .with_context("char", c.to_string()));
    }

    if nid.eq_ignore_ascii_case("uuid") && uuid::Uuid::try_parse(nss).is_err() {
        return Err(malformed(Scheme::Urn, "namespace-specific string is not a UUID")
            .with_context("nss", nss));
    }

    Ok(())
}

fn validate_nid(nid: &str) -> ValidationResult {
    let bytes = nid.as_bytes();
    let valid = bytes.first().is_some_and(u8::is_ascii_alphabetic)
        && bytes.len() <= MAX_URN_NID_LENGTH
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        && !nid.ends_with('-');
    if valid {
        Ok(())
    } else {
        Err(malformed(Scheme::Urn, "invalid namespace identifier").with_context("nid", nid))
    }
}

fn is_nss_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';'
                | '=' | ':' | '@' | '%' | '/'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate("ietf:rfc:2648").is_ok());
        assert!(validate("isbn:0451450523").is_ok());
        assert!(validate("uuid:123e4567-e89b-12d3-a456-426655440000").is_ok());
        assert!(validate("example:a/b?+resolve#frag").is_ok());
    }

    #[test]
    fn bad_nid() {
        assert!(validate(":missingnid").is_err());
        assert!(validate("1bad:thing").is_err());
        assert!(validate("bad-:thing").is_err());
        assert!(validate("b_d:thing").is_err());
        assert!(validate(&format!("{}:thing", "a".repeat(33))).is_err());
        assert!(validate(&format!("{}:thing", "a".repeat(32))).is_ok());
    }

    #[test]
    fn empty_nss() {
        assert!(validate("foo:").is_err());
        assert!(validate("foo").is_err());
        assert!(validate("foo:?q").is_err());
    }

    #[test]
    fn nss_alphabet() {
        assert!(validate("foo:a b").is_err());
        assert!(validate("foo:a\"b").is_err());
    }

    #[test]
    fn uuid_namespace() {
        assert!(validate("UUID:123E4567-E89B-12D3-A456-426655440000").is_ok());
        assert!(validate("uuid:not-a-uuid").is_err());
        assert!(validate("uuid:123e4567-e89b-12d3-a456-42665544000").is_err());
    }
}
