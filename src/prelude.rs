//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_validators::prelude::*;
//!
//! assert!(validate_uri("http://example.com").is_ok());
//! assert_eq!(Scheme::of("tel:+14155552671"), Scheme::Tel);
//! ```

pub use crate::{
    // Validators
    validate_domain, validate_domain_with, validate_email, validate_email_with, validate_ipv4,
    validate_ipv4_with, validate_ipv6, validate_ipv6_with, validate_optional_uri, validate_uri,
    validate_uri_with, validate_url, validate_url_with,
    // Options
    DomainOptions, EmailOptions, IpOptions, StrictSchemes, UriOptions, UrlOptions,
    // Core types
    Authority, Ipv4Candidate, Ipv6Candidate, Scheme, UriParts,
    // Errors
    ErrorKind, ValidationError, ValidationResult,
};
