//! URI scheme classification.

use std::fmt;
use std::str::FromStr;

/// The schemes the router knows how to dispatch.
///
/// # Examples
///
/// ```
/// use uri_validators::Scheme;
///
/// assert_eq!(Scheme::of("HTTPS://example.com"), Scheme::Https);
/// assert_eq!(Scheme::of("mailto:someone@example.com"), Scheme::Mailto);
/// assert_eq!(Scheme::of("rdar://1234"), Scheme::Unknown);
/// assert_eq!(Scheme::of("example.com"), Scheme::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    /// `http:`
    Http,
    /// `https:`
    Https,
    /// `ftp:`
    Ftp,
    /// `mailto:`
    Mailto,
    /// `file:`
    File,
    /// `magnet:`
    Magnet,
    /// `tel:`
    Tel,
    /// `data:`
    Data,
    /// `urn:`
    Urn,
    /// `urc:`
    Urc,
    /// `ipfs:`
    Ipfs,
    /// `ipns:`
    Ipns,
    /// Anything else, including inputs without a `:`
    Unknown,
}

impl Scheme {
    /// All recognized schemes, excluding [`Scheme::Unknown`].
    pub const KNOWN: [Self; 12] = [
        Self::Http,
        Self::Https,
        Self::Ftp,
        Self::Mailto,
        Self::File,
        Self::Magnet,
        Self::Tel,
        Self::Data,
        Self::Urn,
        Self::Urc,
        Self::Ipfs,
        Self::Ipns,
    ];

    /// Classifies a scheme token (the text before the first `:`), ignoring case.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(token))
            .unwrap_or(Self::Unknown)
    }

    /// Classifies a whole input by its scheme token.
    ///
    /// Inputs without a `:` are [`Scheme::Unknown`].
    #[must_use]
    pub fn of(input: &str) -> Self {
        split_scheme(input).map_or(Self::Unknown, |(token, _)| Self::from_token(token))
    }

    /// Returns the lowercase scheme name (`"unknown"` for [`Scheme::Unknown`]).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Ftp => "ftp",
            Self::Mailto => "mailto",
            Self::File => "file",
            Self::Magnet => "magnet",
            Self::Tel => "tel",
            Self::Data => "data",
            Self::Urn => "urn",
            Self::Urc => "urc",
            Self::Ipfs => "ipfs",
            Self::Ipns => "ipns",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for the schemes handed to the URL validator.
    #[must_use]
    pub const fn is_url(self) -> bool {
        matches!(self, Self::Http | Self::Https | Self::Ftp)
    }
}

/// Splits `input` at its first `:` into the scheme token and the remainder.
pub(crate) fn split_scheme(input: &str) -> Option<(&str, &str)> {
    input.split_once(':')
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}
