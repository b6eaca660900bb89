//! Email address validation.
//!
//! ```text
//! address      = local-part "@" ( domain / address-literal )
//! local-part   = dot-atom / quoted-string
//! dot-atom     = 1*atext *( "." 1*atext )
//! atext        = ALPHA / DIGIT / UNICODE-LETTER
//!              / "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "/"
//!              / "=" / "?" / "^" / "_" / "`" / "{" / "|" / "}" / "~"
//! quoted-string = DQUOTE *( qtext / "\" escaped ) DQUOTE
//! address-literal = "[" ( IPv4address / "IPv6:" IPv6address ) "]"
//! ```

use crate::constants::{MAX_DNS_DOMAIN_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH};
use crate::domain::validate_domain_with;
use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::ip::{validate_ipv4, validate_ipv6};
use crate::options::EmailOptions;

/// Validates an email address with default options.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`] for empty input,
/// [`ErrorKind::MalformedStructure`] when the `@` separator is missing or a
/// NUL byte is present, [`ErrorKind::TooLong`] for an oversized local part or
/// domain, [`ErrorKind::BadLocalPart`] for a bad local part, and the domain
/// validator's error for a bad domain.
///
/// # Examples
///
/// ```
/// use uri_validators::{validate_email, ErrorKind};
///
/// assert!(validate_email("email@here.com").is_ok());
/// assert!(validate_email("Łókaść@email.com").is_ok());
/// assert!(validate_email("user@[192.0.2.1]").is_ok());
///
/// let err = validate_email("stephen smith@example.com").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BadLocalPart);
/// ```
pub fn validate_email(value: &str) -> ValidationResult {
    validate_email_with(value, &EmailOptions::default())
}

/// Validates an email address.
///
/// # Errors
///
/// See [`validate_email`].
pub fn validate_email_with(value: &str, options: &EmailOptions) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(ErrorKind::EmptyInput));
    }

    if value.contains('\0') {
        return Err(ValidationError::new(ErrorKind::MalformedStructure)
            .with_context("reason", "NUL byte in address"));
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return Err(ValidationError::new(ErrorKind::MalformedStructure)
            .with_context("address", value)
            .with_context("reason", "missing '@'"));
    };

    if local.is_empty() {
        return Err(ValidationError::new(ErrorKind::BadLocalPart)
            .with_context("address", value)
            .with_context("reason", "empty local part"));
    }
    if domain.is_empty() {
        return Err(ValidationError::new(ErrorKind::BadDomainLabel)
            .with_context("address", value)
            .with_context("reason", "empty domain"));
    }

    let local_len = local.chars().count();
    if local_len > MAX_EMAIL_LOCAL_PART_LENGTH {
        return Err(ValidationError::new(ErrorKind::TooLong)
            .with_context("local_part", local)
            .with_context("max", MAX_EMAIL_LOCAL_PART_LENGTH.to_string()));
    }
    if domain.len() > MAX_DNS_DOMAIN_LENGTH {
        return Err(ValidationError::new(ErrorKind::TooLong)
            .with_context("domain", domain)
            .with_context("max", MAX_DNS_DOMAIN_LENGTH.to_string()));
    }

    validate_local_part(local)?;

    match domain.strip_prefix('[') {
        Some(literal) => validate_address_literal(domain, literal, options),
        None => validate_domain_with(domain, &options.domain),
    }
}

fn validate_local_part(local: &str) -> ValidationResult {
    let ok = match local.strip_prefix('"') {
        Some(rest) => is_quoted_string(rest),
        None => is_dot_atom(local),
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(ErrorKind::BadLocalPart).with_context("local_part", local))
    }
}

fn is_dot_atom(local: &str) -> bool {
    local.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_atext(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '/' | '=' | '?' | '^'
                    | '_' | '`' | '{' | '|' | '}' | '~'
            )
    } else {
        c.is_alphanumeric()
    }
}

/// Checks the remainder of a quoted local part, opening quote already consumed.
fn is_quoted_string(rest: &str) -> bool {
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return chars.as_str().is_empty(),
            '\\' => match chars.next() {
                Some('\r' | '\n') | None => return false,
                Some(_) => {}
            },
            '\r' | '\n' | '@' => return false,
            _ => {}
        }
    }
    false
}

fn validate_address_literal(domain: &str, literal: &str, options: &EmailOptions) -> ValidationResult {
    if !options.allow_ip_literal {
        return Err(ValidationError::new(ErrorKind::MalformedStructure)
            .with_context("domain", domain)
            .with_context("reason", "address literals are not allowed"));
    }

    let Some(inner) = literal.strip_suffix(']') else {
        return Err(ValidationError::new(ErrorKind::MalformedStructure)
            .with_context("domain", domain)
            .with_context("reason", "missing closing bracket"));
    };

    let tagged_v6 = inner
        .get(..5)
        .filter(|tag| tag.eq_ignore_ascii_case("ipv6:"))
        .map(|_| &inner[5..]);

    if let Some(addr) = tagged_v6 {
        return validate_ipv6(addr)
            .map_err(|_| ValidationError::new(ErrorKind::BadIPv6).with_context("domain", domain));
    }

    if inner.contains(':') {
        validate_ipv6(inner)
            .map_err(|_| ValidationError::new(ErrorKind::BadIPv6).with_context("domain", domain))
    } else {
        validate_ipv4(inner)
            .map_err(|_| ValidationError::new(ErrorKind::BadIPv4).with_context("domain", domain))
    }
}
