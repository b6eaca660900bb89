//! `magnet:` links.
//!
//! ```text
//! magnet = "magnet:?" param *( "&" param )
//! param  = key [ "=" value ]
//! ```
//!
//! At least one `xt` (exact topic) parameter is required, every `xt` must be
//! non-empty, and an `xt` holding a URN must satisfy the URN grammar.

use super::{malformed, urn};
use crate::error::ValidationResult;
use crate::parts::query_pairs;
use crate::scheme::Scheme;

pub(crate) fn validate(rest: &str) -> ValidationResult {
    let Some(query) = rest.strip_prefix('?') else {
        return Err(malformed(Scheme::Magnet, "expected '?' after 'magnet:'"));
    };
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    let mut topics = 0usize;
    for (key, value) in query_pairs(query) {
        if !key.eq_ignore_ascii_case("xt") {
            continue;
        }
        let value = value.unwrap_or("");
        if value.is_empty() {
            return Err(malformed(Scheme::Magnet, "empty 'xt' parameter"));
        }
        if let Some(body) = strip_prefix_ignore_case(value, "urn:") {
            urn::validate(body).map_err(|e| e.with_context("xt", value))?;
        }
        topics += 1;
    }

    if topics == 0 {
        return Err(malformed(Scheme::Magnet, "missing 'xt' parameter"));
    }
    Ok(())
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &value[prefix.len()..])
}
