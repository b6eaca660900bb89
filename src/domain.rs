//! Domain name validation.
//!
//! ```text
//! domain = label 1*( "." label ) [ "." ]   ; trailing dot only when allowed
//! label  = 1*63( ALPHA / DIGIT / "-" )      ; no leading or trailing "-"
//! tld    = 2*ALPHA / "xn--" 1*( ALPHA / DIGIT / "-" )
//! ```
//!
//! Names containing non-ASCII characters are converted to their ASCII
//! (A-label) form with UTS #46 IDNA processing before the label rules apply.

use std::borrow::Cow;

use crate::constants::{MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH};
use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::options::DomainOptions;

/// Validates a registrable domain name with default options.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`] for empty input,
/// [`ErrorKind::IdnaError`] when a non-ASCII name cannot be IDNA-encoded,
/// [`ErrorKind::TooLong`] when the name exceeds 253 characters, and
/// [`ErrorKind::BadDomainLabel`] for any label or top-level label violation.
///
/// # Examples
///
/// ```
/// use uri_validators::validate_domain;
///
/// assert!(validate_domain("example.com").is_ok());
/// assert!(validate_domain("дом-м.рф").is_ok());
/// assert!(validate_domain("xn--d5b6ci4b4b3a.xn--54b7fta0cc").is_ok());
/// assert!(validate_domain("foobar..com").is_err());
/// assert!(validate_domain("www.foo.bar.").is_err());
/// assert!(validate_domain("foobar.12").is_err());
/// ```
pub fn validate_domain(value: &str) -> ValidationResult {
    validate_domain_with(value, &DomainOptions::default())
}

/// Validates a registrable domain name.
///
/// # Errors
///
/// See [`validate_domain`].
pub fn validate_domain_with(value: &str, options: &DomainOptions) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(ErrorKind::EmptyInput));
    }

    let ascii = to_ascii(value)?;
    let name = match ascii.strip_suffix('.') {
        Some(stripped) if options.allow_trailing_dot => stripped,
        _ => &*ascii,
    };

    if name.len() > MAX_DNS_DOMAIN_LENGTH {
        return Err(ValidationError::new(ErrorKind::TooLong)
            .with_context("domain", value)
            .with_context("max", MAX_DNS_DOMAIN_LENGTH.to_string()));
    }

    let mut labels = 0usize;
    let mut last = "";
    for label in name.split('.') {
        validate_label(label, options).map_err(|e| e.with_context("domain", value))?;
        labels += 1;
        last = label;
    }

    if labels < 2 {
        return Err(bad_label(last, "at least two labels are required").with_context("domain", value));
    }

    if !is_valid_tld(last) {
        return Err(bad_label(last, "top-level label must be alphabetic or an A-label")
            .with_context("domain", value));
    }

    Ok(())
}

/// Converts a name to its ASCII form, running IDNA only for non-ASCII input.
pub(crate) fn to_ascii(value: &str) -> Result<Cow<'_, str>, ValidationError> {
    if value.is_ascii() {
        return Ok(Cow::Borrowed(value));
    }
    idna::domain_to_ascii(value).map(Cow::Owned).map_err(|e| {
        tracing::trace!(domain = value, error = %e, "IDNA conversion failed");
        ValidationError::new(ErrorKind::IdnaError).with_context("domain", value)
    })
}

/// Checks a single ASCII label: length, alphabet and hyphen placement.
pub(crate) fn validate_label(label: &str, options: &DomainOptions) -> ValidationResult {
    if label.is_empty() {
        return Err(bad_label(label, "empty label (consecutive dots or leading/trailing dot)"));
    }

    if label.len() > MAX_DNS_LABEL_LENGTH {
        return Err(bad_label(label, "label exceeds 63 characters"));
    }

    for (i, c) in label.chars().enumerate() {
        let allowed = c.is_ascii_alphanumeric()
            || c == '-'
            || (c == '_' && i == 0 && options.allow_service_labels);
        if !allowed {
            return Err(bad_label(label, "only letters, digits and hyphens are allowed")
                .with_context("char", c.to_string()));
        }
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(bad_label(label, "label cannot start or end with hyphen"));
    }

    Ok(())
}

fn is_valid_tld(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.len() >= 2 && bytes.iter().all(u8::is_ascii_alphabetic) {
        return true;
    }
    bytes.len() > 4
        && bytes[..4].eq_ignore_ascii_case(b"xn--")
        && bytes[4..].iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

fn bad_label(label: &str, reason: &str) -> ValidationError {
    ValidationError::new(ErrorKind::BadDomainLabel)
        .with_context("label", label)
        .with_context("reason", reason)
}
