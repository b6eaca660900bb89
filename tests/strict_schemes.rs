//! Structural checks for the light-weight schemes, enabled through
//! `UriOptions`.

use uri_validators::{
    ErrorKind, StrictSchemes, UriOptions, UrlOptions, validate_uri, validate_uri_with,
};

fn strict(input: &str) -> bool {
    validate_uri_with(input, &UriOptions::strict()).is_ok()
}

mod magnet {
    use super::*;

    #[test]
    fn accepts_exact_topics() {
        assert!(strict("magnet:?xt=urn:btih:abcdef1234567890&dn=Example"));
        assert!(strict("magnet:?xt=urn:btih:abcdef1234567890&xt=urn:btih:1234&dn=Example"));
    }

    #[test]
    fn rejects_missing_or_empty_topic() {
        assert!(!strict("magnet:?dn=NoExactTopic"));
        assert!(!strict("magnet:?xt=&dn=EmptyExactTopic"));
        assert!(!strict("magnet:?xt=urn:btih:&dn=NoHash"));
    }

    #[test]
    fn permissive_by_default() {
        assert!(validate_uri("magnet:?dn=NoExactTopic").is_ok());
        assert!(validate_uri("magnet:?xt=&dn=EmptyExactTopic").is_ok());
    }
}

mod data {
    use super::*;

    #[test]
    fn accepts_valid_shapes() {
        assert!(strict("data:text/plain,hello"));
        assert!(strict("data:text/plain;charset=utf-8,hello"));
        assert!(strict("data:text/plain;base64,SGVsbG8="));
        assert!(strict("data:;base64,SGVsbG8="));
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert!(!strict("data:text/plain;base64SGVsbG8="));
        assert!(!strict("data:text/plain;bad=,hello"));
    }

    #[test]
    fn permissive_by_default() {
        assert!(validate_uri("data:text/plain;base64SGVsbG8=").is_ok());
    }
}

mod urn {
    use super::*;

    #[test]
    fn accepts_valid_nid_and_nss() {
        assert!(strict("urn:uuid:123e4567-e89b-12d3-a456-426655440000"));
        assert!(strict("urn:ietf:rfc:2648"));
    }

    #[test]
    fn rejects_bad_nid_or_empty_nss() {
        assert!(!strict("urn::missingnid"));
        assert!(!strict("urn:1bad:thing"));
        assert!(!strict("urn:foo:"));
    }

    #[test]
    fn uuid_namespace_requires_uuid() {
        assert!(!strict("urn:uuid:not-a-uuid"));
    }
}

mod tel {
    use super::*;

    #[test]
    fn accepts_e164_shapes() {
        assert!(strict("tel:+14155552671"));
        assert!(strict("tel:+81312345678"));
    }

    #[test]
    fn rejects_letters_and_punctuation() {
        assert!(!strict("tel:abc123"));
        assert!(!strict("tel:+1(415)555-2671"));
    }
}

mod ipfs {
    use super::*;

    #[test]
    fn accepts_cid_like_identifier() {
        assert!(strict("ipfs://bafybeigdyrzt"));
        assert!(validate_uri("ipfs://bafybeigdyrzt").is_ok());
    }

    #[test]
    fn rejects_illegal_identifier_characters() {
        assert!(!strict("ipfs://%%%%"));
        assert!(validate_uri("ipfs://%%%%").is_ok());
    }
}

#[test]
fn ipns_rejected_in_every_mode() {
    let err = validate_uri_with("ipns://", &UriOptions::strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedScheme);
}

#[test]
fn strict_failures_name_the_scheme() {
    let err = validate_uri_with("tel:abc123", &UriOptions::strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedStructure);
    assert_eq!(err.context_value("scheme"), Some("tel"));
}

#[test]
fn single_flag_leaves_other_schemes_permissive() {
    let options = UriOptions::default().with_strict(StrictSchemes::default().with_urn(true));
    assert!(validate_uri_with("urn:foo:", &options).is_err());
    assert!(validate_uri_with("tel:abc123", &options).is_ok());
    assert!(validate_uri_with("magnet:?dn=NoExactTopic", &options).is_ok());
}

#[test]
fn strict_preset_enforces_percent_escapes() {
    assert!(!strict("http://example.com/%zz"));
    assert!(strict("http://example.com/a%20b"));

    let options = UriOptions::strict().with_url(UrlOptions::default());
    assert!(validate_uri_with("http://example.com/%zz", &options).is_ok());
}

#[test]
fn benign_inputs_pass_strict_mode() {
    assert!(strict("http://example.com/a?x=1#frag"));
    assert!(strict("http://[2001:db8::1]/a?x=1#frag"));
    assert!(strict("mailto:alice@example.com"));
    assert!(strict("file:///folder/file_name.ext"));
}
