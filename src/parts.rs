//! Generic URI splitter.
//!
//! Splits a URI into its RFC 3986 components without judging them. Each
//! grammar decides what to accept; the splitter only fails when there is no
//! scheme at all.
//!
//! ```text
//! URI       = scheme ":" [ "//" authority ] path [ "?" query ] [ "#" fragment ]
//! authority = [ userinfo "@" ] host [ ":" port ]
//! ```

use crate::error::{ErrorKind, ValidationError};

/// The components of a URI, borrowed from the input.
///
/// # Examples
///
/// ```
/// use uri_validators::UriParts;
///
/// let parts = UriParts::split("http://user@example.com:8080/a/b?x=1&y#frag").unwrap();
/// assert_eq!(parts.scheme(), "http");
///
/// let authority = parts.authority().unwrap();
/// assert_eq!(authority.userinfo(), Some("user"));
/// assert_eq!(authority.host(), "example.com");
/// assert_eq!(authority.port(), Some("8080"));
///
/// assert_eq!(parts.path(), "/a/b");
/// assert_eq!(parts.query(), Some("x=1&y"));
/// assert_eq!(parts.query_pairs().collect::<Vec<_>>(), vec![("x", Some("1")), ("y", None)]);
/// assert_eq!(parts.fragment(), Some("frag"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    scheme: &'a str,
    authority: Option<Authority<'a>>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

/// The authority component: `[userinfo "@"] host [":" port]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    raw: &'a str,
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Splits a URI into its components.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyInput`] for empty input and
    /// [`ErrorKind::UnknownScheme`] when there is no syntactically valid
    /// scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`) before a `:`.
    pub fn split(input: &'a str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(ErrorKind::EmptyInput));
        }

        let Some((scheme, rest)) = input.split_once(':') else {
            return Err(ValidationError::new(ErrorKind::UnknownScheme).with_context("input", input));
        };
        if !is_scheme_syntax(scheme) {
            return Err(ValidationError::new(ErrorKind::UnknownScheme).with_context("scheme", scheme));
        }

        // Split off fragment
        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };

        // Split off query
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (authority, path) = match rest.strip_prefix("//") {
            Some(hier) => {
                let end = hier.find('/').unwrap_or(hier.len());
                (Some(Authority::split(&hier[..end])), &hier[end..])
            }
            None => (None, rest),
        };

        Ok(Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    /// Returns the scheme as written (not case-normalized).
    #[must_use]
    pub const fn scheme(&self) -> &'a str {
        self.scheme
    }

    /// Returns the authority, present only for `scheme://` forms.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority<'a>> {
        self.authority.as_ref()
    }

    /// Returns the path, possibly empty.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }

    /// Returns the query without its leading `?`.
    #[must_use]
    pub const fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// Returns the fragment without its leading `#`.
    #[must_use]
    pub const fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Returns the `&`-separated query fields in order.
    ///
    /// Empty fields are skipped; a field without `=` has no value.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + use<'a> {
        query_pairs(self.query.unwrap_or(""))
    }
}

impl<'a> Authority<'a> {
    fn split(raw: &'a str) -> Self {
        let (userinfo, host_port) = match raw.rsplit_once('@') {
            Some((userinfo, host_port)) => (Some(userinfo), host_port),
            None => (None, raw),
        };
        let (host, port) = Self::split_host_port(host_port);
        Self {
            raw,
            userinfo,
            host,
            port,
        }
    }

    fn split_host_port(input: &'a str) -> (&'a str, Option<&'a str>) {
        // IP literal: [v6]:port
        if input.starts_with('[') {
            if let Some(close) = input.find(']') {
                let (host, rest) = input.split_at(close + 1);
                if rest.is_empty() {
                    return (host, None);
                }
                if let Some(port) = rest.strip_prefix(':') {
                    return (host, Some(port));
                }
            }
            return (input, None);
        }

        // A single colon separates the port; more belong to the host.
        match input.split_once(':') {
            Some((host, port)) if !port.contains(':') => (host, Some(port)),
            _ => (input, None),
        }
    }

    /// Returns the authority exactly as written.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the userinfo without its trailing `@`.
    #[must_use]
    pub const fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the host; IP literals keep their brackets.
    #[must_use]
    pub const fn host(&self) -> &'a str {
        self.host
    }

    /// Returns the port text without its leading `:`.
    #[must_use]
    pub const fn port(&self) -> Option<&'a str> {
        self.port
    }
}

/// Iterates `&`-separated `key[=value]` fields, skipping empty ones.
pub(crate) fn query_pairs(query: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    query.split('&').filter(|f| !f.is_empty()).map(|field| match field.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (field, None),
    })
}

fn is_scheme_syntax(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_url() {
        let parts = UriParts::split("https://u:p@example.com:443/path/to?q=1#top").unwrap();
        assert_eq!(parts.scheme(), "https");
        let authority = parts.authority().unwrap();
        assert_eq!(authority.as_str(), "u:p@example.com:443");
        assert_eq!(authority.userinfo(), Some("u:p"));
        assert_eq!(authority.host(), "example.com");
        assert_eq!(authority.port(), Some("443"));
        assert_eq!(parts.path(), "/path/to");
        assert_eq!(parts.query(), Some("q=1"));
        assert_eq!(parts.fragment(), Some("top"));
    }

    #[test]
    fn split_ipv6_literal() {
        let parts = UriParts::split("http://[2001:db8::1]:80/a").unwrap();
        let authority = parts.authority().unwrap();
        assert_eq!(authority.host(), "[2001:db8::1]");
        assert_eq!(authority.port(), Some("80"));

        let parts = UriParts::split("http://[2001:db8::1]").unwrap();
        assert_eq!(parts.authority().unwrap().host(), "[2001:db8::1]");
        assert_eq!(parts.authority().unwrap().port(), None);
    }

    #[test]
    fn split_unclosed_bracket_keeps_host_whole() {
        let parts = UriParts::split("http://[2010:836B:4179::836B:4179").unwrap();
        assert_eq!(parts.authority().unwrap().host(), "[2010:836B:4179::836B:4179");
    }

    #[test]
    fn split_unbracketed_colons_stay_in_host() {
        let parts = UriParts::split("http://2010:836B:4179::836B:4179/").unwrap();
        let authority = parts.authority().unwrap();
        assert_eq!(authority.host(), "2010:836B:4179::836B:4179");
        assert_eq!(authority.port(), None);
    }

    #[test]
    fn split_userinfo_uses_last_at() {
        let parts = UriParts::split("http://a@b@example.com").unwrap();
        let authority = parts.authority().unwrap();
        assert_eq!(authority.userinfo(), Some("a@b"));
        assert_eq!(authority.host(), "example.com");
    }

    #[test]
    fn split_query_before_path() {
        let parts = UriParts::split("http://example.com?x=1").unwrap();
        assert_eq!(parts.authority().unwrap().host(), "example.com");
        assert_eq!(parts.path(), "");
        assert_eq!(parts.query(), Some("x=1"));
    }

    #[test]
    fn split_fragment_may_contain_question_mark() {
        let parts = UriParts::split("https://matrix.to/#/!room:x.org?via=x.org").unwrap();
        assert_eq!(parts.path(), "/");
        assert_eq!(parts.query(), None);
        assert_eq!(parts.fragment(), Some("/!room:x.org?via=x.org"));
    }

    #[test]
    fn split_opaque_uri() {
        let parts = UriParts::split("magnet:?xt=urn:btih:abc&dn=Example").unwrap();
        assert_eq!(parts.scheme(), "magnet");
        assert!(parts.authority().is_none());
        assert_eq!(parts.path(), "");
        let pairs: Vec<_> = parts.query_pairs().collect();
        assert_eq!(pairs, vec![("xt", Some("urn:btih:abc")), ("dn", Some("Example"))]);
    }

    #[test]
    fn split_empty_authority() {
        let parts = UriParts::split("http:///a").unwrap();
        assert_eq!(parts.authority().unwrap().host(), "");
        assert_eq!(parts.path(), "/a");
    }

    #[test]
    fn query_pairs_skip_empty_fields() {
        let pairs: Vec<_> = query_pairs("a=1&&b=&c").collect();
        assert_eq!(pairs, vec![("a", Some("1")), ("b", Some("")), ("c", None)]);
    }

    #[test]
    fn split_requires_scheme() {
        assert_eq!(UriParts::split("").unwrap_err().kind(), ErrorKind::EmptyInput);
        assert_eq!(
            UriParts::split("foobar.dk").unwrap_err().kind(),
            ErrorKind::UnknownScheme
        );
        assert_eq!(
            UriParts::split("://x").unwrap_err().kind(),
            ErrorKind::UnknownScheme
        );
        assert_eq!(
            UriParts::split("1http://x").unwrap_err().kind(),
            ErrorKind::UnknownScheme
        );
    }
}
