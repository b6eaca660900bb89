//! Validators for URIs and the identifiers they carry.
//!
//! This crate decides whether a string is an acceptable URI and, when it is
//! not, reports why. It covers URLs, email addresses, domain names and IP
//! addresses, plus a scheme router that sends an arbitrary URI to the
//! matching validator.
//!
//! # Overview
//!
//! Every validator is a pure function returning [`ValidationResult`]:
//! `Ok(())` for an accepted input, or a [`ValidationError`] carrying an
//! [`ErrorKind`] and some diagnostic context.
//!
//! ```text
//! validate_uri ─┬─ http, https, ftp ──► validate_url ─┬─► validate_ipv4
//!               │                                     ├─► validate_ipv6
//!               │                                     └─► validate_domain
//!               ├─ mailto ──────────► validate_email ──► validate_domain
//!               ├─ file, ipfs ──────► prefix check
//!               ├─ magnet, tel, data, urn, urc ──► prefix check (or strict grammar)
//!               └─ ipns ────────────► unsupported
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use uri_validators::{validate_uri, ErrorKind};
//!
//! assert!(validate_uri("https://example.com/path?q=1#top").is_ok());
//! assert!(validate_uri("mailto:someone@example.com").is_ok());
//!
//! let err = validate_uri("http://foobar.12").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadHost);
//! ```
//!
//! # Strict Schemes
//!
//! By default `magnet:`, `tel:`, `data:`, `urn:` and `urc:` are accepted on
//! their prefix alone. [`UriOptions`] turns on structural checks per scheme:
//!
//! ```rust
//! use uri_validators::{validate_uri, validate_uri_with, UriOptions};
//!
//! assert!(validate_uri("magnet:?dn=NoExactTopic").is_ok());
//! assert!(validate_uri_with("magnet:?dn=NoExactTopic", &UriOptions::strict()).is_err());
//! assert!(validate_uri_with("urn:uuid:123e4567-e89b-12d3-a456-426655440000", &UriOptions::strict()).is_ok());
//! ```
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | URL | 2048 bytes |
//! | Domain name | 253 chars |
//! | Domain label | 63 chars |
//! | Email local part | 64 chars |
//! | URN namespace identifier | 32 chars |
//!
//! # Logging
//!
//! Validators emit [`tracing`] events at `trace` level while dispatching and
//! at `debug` level when the router rejects an input. Nothing is logged
//! unless the application installs a subscriber.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod domain;
mod email;
mod error;
mod ip;
mod options;
mod parts;
mod percent;
pub mod prelude;
mod scheme;
mod schemes;
mod uri;
mod url;

pub use constants::{
    MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH, MAX_NUMERIC_DOT_RUN,
    MAX_URL_LENGTH, MAX_URN_NID_LENGTH, URL_SCHEMES,
};
pub use domain::{validate_domain, validate_domain_with};
pub use email::{validate_email, validate_email_with};
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use ip::{
    Ipv4Candidate, Ipv6Candidate, validate_ipv4, validate_ipv4_with, validate_ipv6,
    validate_ipv6_with,
};
pub use options::{DomainOptions, EmailOptions, IpOptions, StrictSchemes, UriOptions, UrlOptions};
pub use parts::{Authority, UriParts};
pub use scheme::Scheme;
pub use uri::{validate_optional_uri, validate_uri, validate_uri_with};
pub use url::{validate_url, validate_url_with};
