//! Error types shared by every validator.

use std::collections::BTreeMap;
use std::fmt;

/// Outcome of a validation: `Ok(())` when the input is accepted.
pub type ValidationResult = Result<(), ValidationError>;

/// Reason an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Input is empty or absent
    EmptyInput,
    /// Scheme token missing or not recognized
    UnknownScheme,
    /// Scheme is recognized but has no validator
    UnsupportedScheme,
    /// `file:` URI without the `file:///` prefix
    BadFileScheme,
    /// Host is neither an IP literal nor a valid domain
    BadHost,
    /// Malformed IPv4 address
    #[cfg_attr(feature = "serde", serde(rename = "bad_ipv4"))]
    BadIPv4,
    /// Malformed IPv6 address
    #[cfg_attr(feature = "serde", serde(rename = "bad_ipv6"))]
    BadIPv6,
    /// Internationalized domain could not be IDNA-encoded
    IdnaError,
    /// Input or component exceeds its length limit
    TooLong,
    /// Input matches a pathological pattern
    PathologicalInput,
    /// Email local part is malformed
    BadLocalPart,
    /// A domain label is malformed
    BadDomainLabel,
    /// Structural failure not covered by a more specific kind
    MalformedStructure,
    /// URL userinfo is malformed
    BadUserInfo,
    /// URL port is malformed or not allowed
    BadPort,
    /// URL path contains characters outside its alphabet
    BadPath,
    /// URL query is malformed
    BadQuery,
    /// URL fragment contains characters outside its alphabet
    BadFragment,
}

impl ErrorKind {
    /// Returns a stable snake-case code for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UnknownScheme => "unknown_scheme",
            Self::UnsupportedScheme => "unsupported_scheme",
            Self::BadFileScheme => "bad_file_scheme",
            Self::BadHost => "bad_host",
            Self::BadIPv4 => "bad_ipv4",
            Self::BadIPv6 => "bad_ipv6",
            Self::IdnaError => "idna_error",
            Self::TooLong => "too_long",
            Self::PathologicalInput => "pathological_input",
            Self::BadLocalPart => "bad_local_part",
            Self::BadDomainLabel => "bad_domain_label",
            Self::MalformedStructure => "malformed_structure",
            Self::BadUserInfo => "bad_user_info",
            Self::BadPort => "bad_port",
            Self::BadPath => "bad_path",
            Self::BadQuery => "bad_query",
            Self::BadFragment => "bad_fragment",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyInput => "input is empty",
            Self::UnknownScheme => "missing or unrecognized scheme",
            Self::UnsupportedScheme => "scheme is recognized but not supported",
            Self::BadFileScheme => "file URI must start with 'file:///'",
            Self::BadHost => "host is not a valid IP literal or domain name",
            Self::BadIPv4 => "invalid IPv4 address",
            Self::BadIPv6 => "invalid IPv6 address",
            Self::IdnaError => "domain cannot be IDNA-encoded",
            Self::TooLong => "input exceeds maximum length",
            Self::PathologicalInput => "input matches a pathological pattern",
            Self::BadLocalPart => "invalid email local part",
            Self::BadDomainLabel => "invalid domain label",
            Self::MalformedStructure => "malformed structure",
            Self::BadUserInfo => "invalid userinfo",
            Self::BadPort => "invalid port",
            Self::BadPath => "invalid path",
            Self::BadQuery => "invalid query",
            Self::BadFragment => "invalid fragment",
        };
        f.write_str(msg)
    }
}

/// A rejected input: the reason plus advisory context.
///
/// Context entries (offending scheme, label, token) are meant for diagnostics
/// only; their keys and values are not a stable interface.
///
/// # Examples
///
/// ```
/// use uri_validators::{validate_domain, ErrorKind};
///
/// let err = validate_domain("exa%mple.com").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BadDomainLabel);
/// assert_eq!(err.context_value("label"), Some("exa%mple"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    kind: ErrorKind,
    context: BTreeMap<String, String>,
}

impl ValidationError {
    /// Creates an error without context.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry, replacing any previous value for `key`.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Returns the rejection reason.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns all context entries.
    #[must_use]
    pub const fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    /// Returns the context value for `key`, if present.
    #[must_use]
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for (i, (key, value)) in self.context.iter().enumerate() {
            let sep = if i == 0 { " (" } else { ", " };
            write!(f, "{sep}{key}: '{value}'")?;
        }
        if !self.context.is_empty() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_context() {
        let err = ValidationError::new(ErrorKind::EmptyInput);
        assert_eq!(err.to_string(), "input is empty");
    }

    #[test]
    fn display_with_context_is_sorted() {
        let err = ValidationError::new(ErrorKind::BadHost)
            .with_context("host", "exa mple")
            .with_context("cause", "bad_domain_label");
        assert_eq!(
            err.to_string(),
            "host is not a valid IP literal or domain name (cause: 'bad_domain_label', host: 'exa mple')"
        );
    }

    #[test]
    fn context_lookup() {
        let err = ValidationError::new(ErrorKind::UnknownScheme).with_context("scheme", "rdar");
        assert_eq!(err.context_value("scheme"), Some("rdar"));
        assert_eq!(err.context_value("host"), None);
        assert_eq!(err.context().len(), 1);
    }

    #[test]
    fn from_kind() {
        let err: ValidationError = ErrorKind::BadIPv4.into();
        assert_eq!(err.kind(), ErrorKind::BadIPv4);
        assert!(err.context().is_empty());
    }

    #[test]
    fn kind_codes_are_snake_case() {
        assert_eq!(ErrorKind::BadIPv6.as_str(), "bad_ipv6");
        assert_eq!(ErrorKind::PathologicalInput.as_str(), "pathological_input");
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            ValidationError::new(ErrorKind::TooLong),
            ValidationError::new(ErrorKind::TooLong)
        );
        assert_ne!(
            ValidationError::new(ErrorKind::TooLong),
            ValidationError::new(ErrorKind::TooLong).with_context("max", "2048")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_kind_codes() {
        let err = ValidationError::new(ErrorKind::BadIPv4).with_context("host", "1.2.3.256");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "bad_ipv4");
        assert_eq!(json["context"]["host"], "1.2.3.256");

        let back: ValidationError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
