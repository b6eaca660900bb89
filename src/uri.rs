//! Scheme router: the entry point for validating an arbitrary URI.

use crate::email::validate_email_with;
use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::options::UriOptions;
use crate::scheme::{Scheme, split_scheme};
use crate::schemes;
use crate::url::validate_url_with;

/// Validates a URI with default (permissive) options.
///
/// The scheme, matched case-insensitively, decides which validator runs:
///
/// | Scheme | Check |
/// |--------|-------|
/// | `http`, `https`, `ftp` | [`validate_url`](crate::validate_url) on the whole input |
/// | `mailto` | [`validate_email`](crate::validate_email) on the text after `mailto:` |
/// | `file` | must start with `file:///` |
/// | `ipfs` | must start with `ipfs://` |
/// | `magnet`, `tel`, `data`, `urn`, `urc` | prefix only |
/// | `ipns` | always rejected as unsupported |
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`] for empty input,
/// [`ErrorKind::UnknownScheme`] when there is no recognized scheme,
/// [`ErrorKind::UnsupportedScheme`] for `ipns:`,
/// [`ErrorKind::BadFileScheme`] for a `file:` URI without `///`, and
/// otherwise the error of the delegated validator, unchanged.
///
/// # Examples
///
/// ```
/// use uri_validators::{validate_uri, ErrorKind};
///
/// assert!(validate_uri("http://foo.com/blah_(wikipedia)#cite-1").is_ok());
/// assert!(validate_uri("mailto:email@here.com").is_ok());
/// assert!(validate_uri("file:///folder/file_name.ext").is_ok());
/// assert!(validate_uri("magnet:?this=is-not-actually-checked").is_ok());
///
/// let err = validate_uri("file://folder/file_name").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BadFileScheme);
///
/// let err = validate_uri("rdar://1234").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownScheme);
/// assert_eq!(err.context_value("scheme"), Some("rdar"));
/// ```
pub fn validate_uri(input: &str) -> ValidationResult {
    validate_uri_with(input, &UriOptions::default())
}

/// Validates a URI that may be absent.
///
/// `None` is rejected with [`ErrorKind::EmptyInput`].
///
/// # Errors
///
/// See [`validate_uri`].
pub fn validate_optional_uri(input: Option<&str>) -> ValidationResult {
    input.map_or_else(|| Err(ValidationError::new(ErrorKind::EmptyInput)), validate_uri)
}

/// Validates a URI.
///
/// # Errors
///
/// See [`validate_uri`]. With [`UriOptions::strict`] set, the light-weight
/// schemes also fail with [`ErrorKind::MalformedStructure`] when their
/// structure is wrong.
///
/// # Examples
///
/// ```
/// use uri_validators::{validate_uri_with, StrictSchemes, UriOptions};
///
/// let options = UriOptions::default().with_strict(StrictSchemes::default().with_tel(true));
/// assert!(validate_uri_with("tel:+14155552671", &options).is_ok());
/// assert!(validate_uri_with("tel:+1(415)555-2671", &options).is_err());
/// // other schemes keep the prefix-only check
/// assert!(validate_uri_with("urn:this-is-not-actually-checked", &options).is_ok());
/// ```
pub fn validate_uri_with(input: &str, options: &UriOptions) -> ValidationResult {
    let result = dispatch(input, options);
    if let Err(e) = &result {
        tracing::debug!(scheme = %Scheme::of(input), kind = e.kind().as_str(), "uri rejected");
    }
    result
}

fn dispatch(input: &str, options: &UriOptions) -> ValidationResult {
    if input.is_empty() {
        return Err(ValidationError::new(ErrorKind::EmptyInput));
    }

    let Some((token, rest)) = split_scheme(input) else {
        return Err(ValidationError::new(ErrorKind::UnknownScheme)
            .with_context("reason", "no ':' after a scheme"));
    };

    let scheme = Scheme::from_token(token);
    tracing::trace!(%scheme, "dispatching uri");

    let strict = &options.strict;
    match scheme {
        Scheme::Http | Scheme::Https | Scheme::Ftp => validate_url_with(input, &options.url),
        Scheme::Mailto => validate_email_with(rest, &options.email),
        Scheme::File => {
            if rest.starts_with("///") {
                Ok(())
            } else {
                Err(ValidationError::new(ErrorKind::BadFileScheme))
            }
        }
        Scheme::Ipfs => match rest.strip_prefix("//") {
            Some(id) if strict.ipfs => schemes::ipfs::validate(id),
            Some(_) => Ok(()),
            None => Err(ValidationError::new(ErrorKind::MalformedStructure)
                .with_context("scheme", scheme.as_str())
                .with_context("reason", "expected 'ipfs://'")),
        },
        Scheme::Magnet if strict.magnet => schemes::magnet::validate(rest),
        Scheme::Data if strict.data => schemes::data::validate(rest),
        Scheme::Urn if strict.urn => schemes::urn::validate(rest),
        Scheme::Tel if strict.tel => schemes::tel::validate(rest),
        Scheme::Magnet | Scheme::Data | Scheme::Urn | Scheme::Tel | Scheme::Urc => Ok(()),
        Scheme::Ipns => Err(ValidationError::new(ErrorKind::UnsupportedScheme)
            .with_context("scheme", scheme.as_str())),
        Scheme::Unknown => {
            Err(ValidationError::new(ErrorKind::UnknownScheme).with_context("scheme", token))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::StrictSchemes;

    fn kind(result: ValidationResult) -> Option<ErrorKind> {
        result.err().map(|e| e.kind())
    }

    #[test]
    fn empty_and_missing_input() {
        assert_eq!(kind(validate_uri("")), Some(ErrorKind::EmptyInput));
        assert_eq!(kind(validate_optional_uri(None)), Some(ErrorKind::EmptyInput));
        assert!(validate_optional_uri(Some("http://example.com")).is_ok());
    }

    #[test]
    fn unknown_schemes() {
        assert_eq!(kind(validate_uri("foobar.dk")), Some(ErrorKind::UnknownScheme));
        assert_eq!(kind(validate_uri("//a")), Some(ErrorKind::UnknownScheme));
        assert_eq!(kind(validate_uri(":// should fail")), Some(ErrorKind::UnknownScheme));
        assert_eq!(kind(validate_uri("h://test")), Some(ErrorKind::UnknownScheme));
        // the router only hands http, https and ftp to the URL validator
        assert_eq!(kind(validate_uri("ssh://example.com")), Some(ErrorKind::UnknownScheme));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(validate_uri("HTTP://example.com").is_ok());
        assert!(validate_uri("MailTo:email@here.com").is_ok());
        assert!(validate_uri("FILE:///etc/hosts").is_ok());
    }

    #[test]
    fn url_errors_pass_through() {
        assert_eq!(kind(validate_uri("http://127.12.0.260")), Some(ErrorKind::BadIPv4));
        assert_eq!(kind(validate_uri("http://foobar.12")), Some(ErrorKind::BadHost));
    }

    #[test]
    fn mailto_delegates_to_email() {
        assert!(validate_uri("mailto:email@here.com").is_ok());
        assert_eq!(kind(validate_uri("mailto:")), Some(ErrorKind::EmptyInput));
        assert_eq!(kind(validate_uri("mailto:abc")), Some(ErrorKind::MalformedStructure));
        assert_eq!(kind(validate_uri("mailto:abc@.com")), Some(ErrorKind::BadDomainLabel));
    }

    #[test]
    fn file_requires_three_slashes() {
        assert!(validate_uri(r"file:///C:\Windows\folder\file.txt").is_ok());
        for uri in ["file:folder///file_name", "file://folder/file_name", "file::///test/file_name"] {
            assert_eq!(kind(validate_uri(uri)), Some(ErrorKind::BadFileScheme), "{uri}");
        }
    }

    #[test]
    fn ipfs_prefix() {
        assert!(validate_uri("ipfs://linux/folder/ipfs.sh").is_ok());
        assert!(validate_uri("ipfs://%%%%").is_ok());
        assert_eq!(kind(validate_uri("ipfs:/test/ipfsname")), Some(ErrorKind::MalformedStructure));

        let options = UriOptions::default().with_strict(StrictSchemes::default().with_ipfs(true));
        assert!(validate_uri_with("ipfs://bafybeigdyrzt", &options).is_ok());
        assert_eq!(
            kind(validate_uri_with("ipfs://%%%%", &options)),
            Some(ErrorKind::MalformedStructure)
        );
    }

    #[test]
    fn ipns_is_unsupported() {
        assert_eq!(kind(validate_uri("ipns://")), Some(ErrorKind::UnsupportedScheme));
        assert_eq!(
            kind(validate_uri_with("ipns://k51qzi5uqu5d", &UriOptions::strict())),
            Some(ErrorKind::UnsupportedScheme)
        );
    }

    #[test]
    fn light_schemes_accept_prefix_by_default() {
        for uri in [
            "magnet:?this=is-not-actually-checked",
            "tel:this-is-not-actually-checked",
            "data:this-is-not-actually-checked",
            "urn:this-is-not-actually-checked",
            "urc:this-is-not-actually-checked",
            "magnet:",
        ] {
            assert!(validate_uri(uri).is_ok(), "{uri}");
        }
    }

    #[test]
    fn strict_flags_are_independent() {
        let options = UriOptions::default().with_strict(StrictSchemes::default().with_magnet(true));
        assert!(validate_uri_with("magnet:?dn=NoExactTopic", &options).is_err());
        assert!(validate_uri_with("data:text/plain;base64SGVsbG8=", &options).is_ok());
    }

    #[test]
    fn urc_has_no_strict_grammar() {
        assert!(validate_uri_with("urc:anything at all", &UriOptions::strict()).is_ok());
    }
}
