//! IPv4 and IPv6 address validation.
//!
//! Both validators accept either text or an already-parsed [`std::net`]
//! address. Parsed addresses are trusted and never re-parsed.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::options::IpOptions;

/// Input to [`validate_ipv4`]: raw text or a parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Candidate<'a> {
    /// Dotted-quad text, optionally with a `/prefix` when CIDR is enabled
    Text(&'a str),
    /// An address that has already been parsed
    Addr(Ipv4Addr),
}

/// Input to [`validate_ipv6`]: raw text or a parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv6Candidate<'a> {
    /// Colon-hex text, optionally with a `/prefix` when CIDR is enabled
    Text(&'a str),
    /// An address that has already been parsed
    Addr(Ipv6Addr),
}

impl<'a> From<&'a str> for Ipv4Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for Ipv4Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s)
    }
}

impl From<Ipv4Addr> for Ipv4Candidate<'_> {
    fn from(addr: Ipv4Addr) -> Self {
        Self::Addr(addr)
    }
}

impl From<&Ipv4Addr> for Ipv4Candidate<'_> {
    fn from(addr: &Ipv4Addr) -> Self {
        Self::Addr(*addr)
    }
}

impl<'a> From<&'a str> for Ipv6Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for Ipv6Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s)
    }
}

impl From<Ipv6Addr> for Ipv6Candidate<'_> {
    fn from(addr: Ipv6Addr) -> Self {
        Self::Addr(addr)
    }
}

impl From<&Ipv6Addr> for Ipv6Candidate<'_> {
    fn from(addr: &Ipv6Addr) -> Self {
        Self::Addr(*addr)
    }
}

/// Validates an IPv4 address with default options.
///
/// # Errors
///
/// Returns [`ErrorKind::BadIPv4`] unless the text is exactly four decimal
/// octets in `0..=255` without leading zeros, and [`ErrorKind::EmptyInput`]
/// for empty text.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use uri_validators::validate_ipv4;
///
/// assert!(validate_ipv4("203.0.113.10").is_ok());
/// assert!(validate_ipv4(Ipv4Addr::new(1, 2, 3, 4)).is_ok());
/// assert!(validate_ipv4("127.0.0").is_err());
/// assert!(validate_ipv4("1.1.1.256").is_err());
/// ```
pub fn validate_ipv4<'a>(value: impl Into<Ipv4Candidate<'a>>) -> ValidationResult {
    validate_ipv4_with(value, &IpOptions::default())
}

/// Validates an IPv4 address.
///
/// # Errors
///
/// Returns [`ErrorKind::BadIPv4`] for malformed text, a disallowed or
/// malformed prefix, or an address failing the `private` filter.
pub fn validate_ipv4_with<'a>(
    value: impl Into<Ipv4Candidate<'a>>,
    options: &IpOptions,
) -> ValidationResult {
    let addr = match value.into() {
        Ipv4Candidate::Addr(addr) => addr,
        Ipv4Candidate::Text(text) => {
            if text.is_empty() {
                return Err(ValidationError::new(ErrorKind::EmptyInput));
            }
            let (addr_str, prefix) = split_prefix(text, options, 32, ErrorKind::BadIPv4)?;
            let addr = parse_ipv4_text(addr_str).ok_or_else(|| bad_ipv4(text, "malformed address"))?;
            if let Some(prefix) = prefix {
                if options.strict_cidr && host_bits_set(u128::from(addr.to_bits()), 32, prefix) {
                    return Err(bad_ipv4(text, "host bits set below prefix"));
                }
            }
            addr
        }
    };

    if let Some(want_private) = options.private {
        if is_private_v4(addr) != want_private {
            return Err(bad_ipv4(&addr.to_string(), private_reason(want_private)));
        }
    }
    Ok(())
}

/// Validates an IPv6 address with default options.
///
/// # Errors
///
/// Returns [`ErrorKind::BadIPv6`] for malformed colon-hex text (including
/// `:::` or more than one `::`), and [`ErrorKind::EmptyInput`] for empty text.
///
/// # Examples
///
/// ```
/// use std::net::Ipv6Addr;
/// use uri_validators::validate_ipv6;
///
/// assert!(validate_ipv6("2001:db8::1").is_ok());
/// assert!(validate_ipv6("::192.9.5.5").is_ok());
/// assert!(validate_ipv6(Ipv6Addr::LOCALHOST).is_ok());
/// assert!(validate_ipv6("2001:db8:::1").is_err());
/// ```
pub fn validate_ipv6<'a>(value: impl Into<Ipv6Candidate<'a>>) -> ValidationResult {
    validate_ipv6_with(value, &IpOptions::default())
}

/// Validates an IPv6 address.
///
/// # Errors
///
/// Returns [`ErrorKind::BadIPv6`] for malformed text, a disallowed or
/// malformed prefix, or an address failing the `private` filter.
pub fn validate_ipv6_with<'a>(
    value: impl Into<Ipv6Candidate<'a>>,
    options: &IpOptions,
) -> ValidationResult {
    let addr = match value.into() {
        Ipv6Candidate::Addr(addr) => addr,
        Ipv6Candidate::Text(text) => {
            if text.is_empty() {
                return Err(ValidationError::new(ErrorKind::EmptyInput));
            }
            let (addr_str, prefix) = split_prefix(text, options, 128, ErrorKind::BadIPv6)?;
            let addr = addr_str
                .parse::<Ipv6Addr>()
                .map_err(|_| bad_ipv6(text, "malformed address"))?;
            if let Some(prefix) = prefix {
                if options.strict_cidr && host_bits_set(addr.to_bits(), 128, prefix) {
                    return Err(bad_ipv6(text, "host bits set below prefix"));
                }
            }
            addr
        }
    };

    if let Some(want_private) = options.private {
        if is_private_v6(addr) != want_private {
            return Err(bad_ipv6(&addr.to_string(), private_reason(want_private)));
        }
    }
    Ok(())
}

/// Parses strict dotted-quad text: four decimal octets, no leading zeros.
pub(crate) fn parse_ipv4_text(s: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut count = 0;

    for part in s.split('.') {
        if count == 4 {
            return None;
        }
        if part.is_empty()
            || part.len() > 3
            || !part.bytes().all(|b| b.is_ascii_digit())
            || (part.len() > 1 && part.starts_with('0'))
        {
            return None;
        }
        octets[count] = part.parse().ok()?;
        count += 1;
    }

    (count == 4).then(|| Ipv4Addr::from(octets))
}

/// Splits off a `/prefix` suffix when CIDR notation is enabled.
fn split_prefix<'a>(
    text: &'a str,
    options: &IpOptions,
    max: u8,
    kind: ErrorKind,
) -> Result<(&'a str, Option<u8>), ValidationError> {
    let Some((addr, prefix)) = text.split_once('/') else {
        return Ok((text, None));
    };

    let err = |reason: &str| {
        ValidationError::new(kind)
            .with_context("value", text)
            .with_context("reason", reason)
    };

    if !options.cidr {
        return Err(err("prefix length not allowed"));
    }
    if prefix.is_empty()
        || !prefix.bytes().all(|b| b.is_ascii_digit())
        || (prefix.len() > 1 && prefix.starts_with('0'))
    {
        return Err(err("malformed prefix length"));
    }
    match prefix.parse::<u8>() {
        Ok(p) if p <= max => Ok((addr, Some(p))),
        _ => Err(err("prefix length out of range")),
    }
}

fn host_bits_set(bits: u128, width: u32, prefix: u8) -> bool {
    let host_bits = width - u32::from(prefix);
    if host_bits == 0 {
        return false;
    }
    let mask = if host_bits >= 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    };
    bits & mask != 0
}

fn is_private_v4(addr: Ipv4Addr) -> bool {
    addr.is_private() || addr.is_loopback() || addr.is_link_local() || addr.is_unspecified()
}

fn is_private_v6(addr: Ipv6Addr) -> bool {
    let first = addr.segments()[0];
    addr.is_loopback()
        || addr.is_unspecified()
        || (first & 0xfe00) == 0xfc00
        || (first & 0xffc0) == 0xfe80
}

const fn private_reason(want_private: bool) -> &'static str {
    if want_private {
        "address is not private"
    } else {
        "address is private"
    }
}

fn bad_ipv4(value: &str, reason: &str) -> ValidationError {
    ValidationError::new(ErrorKind::BadIPv4)
        .with_context("value", value)
        .with_context("reason", reason)
}

fn bad_ipv6(value: &str, reason: &str) -> ValidationError {
    ValidationError::new(ErrorKind::BadIPv6)
        .with_context("value", value)
        .with_context("reason", reason)
}
