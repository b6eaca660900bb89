//! Validation options.
//!
//! Every option struct defaults to the baseline policy. Stricter checks are
//! opt-in, one flag per concern, so both behaviors can be exercised side by
//! side. With the `serde` feature the options can be loaded from any serde
//! format; missing fields take their default values.
//!
//! ```
//! use uri_validators::{validate_uri, validate_uri_with, UriOptions};
//!
//! let input = "magnet:?dn=NoExactTopic";
//! assert!(validate_uri(input).is_ok());
//! assert!(validate_uri_with(input, &UriOptions::strict()).is_err());
//! ```

/// Options for the domain validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DomainOptions {
    /// Accept a single trailing dot (fully-qualified RFC 1034 form).
    pub allow_trailing_dot: bool,
    /// Accept labels with a leading underscore (RFC 2782 service records).
    pub allow_service_labels: bool,
}

impl DomainOptions {
    /// Sets [`DomainOptions::allow_trailing_dot`].
    #[must_use]
    pub fn with_trailing_dot(mut self, allow: bool) -> Self {
        self.allow_trailing_dot = allow;
        self
    }

    /// Sets [`DomainOptions::allow_service_labels`].
    #[must_use]
    pub fn with_service_labels(mut self, allow: bool) -> Self {
        self.allow_service_labels = allow;
        self
    }
}

/// Options for the IPv4/IPv6 validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IpOptions {
    /// Accept a `/prefix` suffix on textual input.
    pub cidr: bool,
    /// With `cidr`, require the host bits below the prefix to be zero.
    pub strict_cidr: bool,
    /// `Some(true)` requires a private address, `Some(false)` a public one.
    pub private: Option<bool>,
}

impl IpOptions {
    /// Sets [`IpOptions::cidr`].
    #[must_use]
    pub fn with_cidr(mut self, cidr: bool) -> Self {
        self.cidr = cidr;
        self
    }

    /// Sets [`IpOptions::strict_cidr`].
    #[must_use]
    pub fn with_strict_cidr(mut self, strict: bool) -> Self {
        self.strict_cidr = strict;
        self
    }

    /// Sets [`IpOptions::private`].
    #[must_use]
    pub fn with_private(mut self, private: Option<bool>) -> Self {
        self.private = private;
        self
    }
}

/// Options for the URL validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UrlOptions {
    /// Accept single-label hosts such as `localhost`.
    pub simple_host: bool,
    /// Accept an explicit `:port`.
    pub may_have_port: bool,
    /// Require every query field (split on `&` and on `;`) to contain `=`.
    pub strict_query: bool,
    /// Reject `%` not followed by two hex digits in path, query and fragment.
    pub strict_percent_encoding: bool,
    /// Options applied to domain-name hosts.
    pub domain: DomainOptions,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            simple_host: false,
            may_have_port: true,
            strict_query: true,
            strict_percent_encoding: false,
            domain: DomainOptions::default(),
        }
    }
}

impl UrlOptions {
    /// Sets [`UrlOptions::simple_host`].
    #[must_use]
    pub fn with_simple_host(mut self, allow: bool) -> Self {
        self.simple_host = allow;
        self
    }

    /// Sets [`UrlOptions::may_have_port`].
    #[must_use]
    pub fn with_port(mut self, allow: bool) -> Self {
        self.may_have_port = allow;
        self
    }

    /// Sets [`UrlOptions::strict_query`].
    #[must_use]
    pub fn with_strict_query(mut self, strict: bool) -> Self {
        self.strict_query = strict;
        self
    }

    /// Sets [`UrlOptions::strict_percent_encoding`].
    #[must_use]
    pub fn with_strict_percent_encoding(mut self, strict: bool) -> Self {
        self.strict_percent_encoding = strict;
        self
    }

    /// Sets [`UrlOptions::domain`].
    #[must_use]
    pub fn with_domain(mut self, domain: DomainOptions) -> Self {
        self.domain = domain;
        self
    }
}

/// Options for the email validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmailOptions {
    /// Accept bracketed address literals (`user@[192.0.2.1]`, `user@[IPv6:…]`).
    pub allow_ip_literal: bool,
    /// Options applied to the domain part.
    pub domain: DomainOptions,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            allow_ip_literal: true,
            domain: DomainOptions::default(),
        }
    }
}

impl EmailOptions {
    /// Sets [`EmailOptions::allow_ip_literal`].
    #[must_use]
    pub fn with_ip_literal(mut self, allow: bool) -> Self {
        self.allow_ip_literal = allow;
        self
    }

    /// Sets [`EmailOptions::domain`].
    #[must_use]
    pub fn with_domain(mut self, domain: DomainOptions) -> Self {
        self.domain = domain;
        self
    }
}

/// Per-scheme switches for the structural checks of the light-weight schemes.
///
/// All off by default: those schemes are then accepted on their prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrictSchemes {
    /// `magnet:` needs a non-empty `xt` parameter.
    pub magnet: bool,
    /// `data:` needs well-formed metadata, a `,` and a decodable payload.
    pub data: bool,
    /// `urn:` needs a valid NID and a non-empty NSS.
    pub urn: bool,
    /// `tel:` needs a digits-only subscriber number.
    pub tel: bool,
    /// `ipfs:` needs an identifier in a multibase alphabet.
    pub ipfs: bool,
}

impl StrictSchemes {
    /// Every strict check enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            magnet: true,
            data: true,
            urn: true,
            tel: true,
            ipfs: true,
        }
    }

    /// Sets [`StrictSchemes::magnet`].
    #[must_use]
    pub fn with_magnet(mut self, strict: bool) -> Self {
        self.magnet = strict;
        self
    }

    /// Sets [`StrictSchemes::data`].
    #[must_use]
    pub fn with_data(mut self, strict: bool) -> Self {
        self.data = strict;
        self
    }

    /// Sets [`StrictSchemes::urn`].
    #[must_use]
    pub fn with_urn(mut self, strict: bool) -> Self {
        self.urn = strict;
        self
    }

    /// Sets [`StrictSchemes::tel`].
    #[must_use]
    pub fn with_tel(mut self, strict: bool) -> Self {
        self.tel = strict;
        self
    }

    /// Sets [`StrictSchemes::ipfs`].
    #[must_use]
    pub fn with_ipfs(mut self, strict: bool) -> Self {
        self.ipfs = strict;
        self
    }
}

/// Options for the scheme router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UriOptions {
    /// Structural checks for the light-weight schemes.
    pub strict: StrictSchemes,
    /// Options for `http`, `https` and `ftp` URIs.
    pub url: UrlOptions,
    /// Options for `mailto` URIs.
    pub email: EmailOptions,
}

impl UriOptions {
    /// Every light-weight scheme checked structurally, percent escapes enforced.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: StrictSchemes::all(),
            url: UrlOptions::default().with_strict_percent_encoding(true),
            email: EmailOptions::default(),
        }
    }

    /// Sets [`UriOptions::strict`].
    #[must_use]
    pub fn with_strict(mut self, strict: StrictSchemes) -> Self {
        self.strict = strict;
        self
    }

    /// Sets [`UriOptions::url`].
    #[must_use]
    pub fn with_url(mut self, url: UrlOptions) -> Self {
        self.url = url;
        self
    }

    /// Sets [`UriOptions::email`].
    #[must_use]
    pub fn with_email(mut self, email: EmailOptions) -> Self {
        self.email = email;
        self
    }
}
