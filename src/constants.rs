//! Constants for URI validation.

/// Maximum URL length in bytes accepted before any structural check.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of dots in a single run of digits and dots.
///
/// Longer runs (`0.00.00.00.…`) are rejected up front as pathological.
pub const MAX_NUMERIC_DOT_RUN: usize = 8;

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// DNS domain maximum length.
pub const MAX_DNS_DOMAIN_LENGTH: usize = 253;

/// Maximum email local-part length (RFC 5321 section 4.5.3.1.1).
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;

/// Maximum URN namespace identifier length (RFC 8141).
pub const MAX_URN_NID_LENGTH: usize = 32;

/// Schemes accepted by the URL validator.
pub const URL_SCHEMES: &[&str] = &[
    "ftp", "ftps", "git", "http", "https", "irc", "rtmp", "rtmps", "rtsp", "sftp", "ssh",
    "telnet",
];
