//! `data:` URIs (RFC 2397).
//!
//! ```text
//! dataurl   = "data:" [ mediatype ] *( ";" parameter ) [ ";base64" ] "," data
//! mediatype = token "/" token
//! parameter = token "=" token
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::malformed;
use crate::error::ValidationResult;
use crate::percent;
use crate::scheme::Scheme;

pub(crate) fn validate(rest: &str) -> ValidationResult {
    let Some((metadata, payload)) = rest.split_once(',') else {
        return Err(malformed(Scheme::Data, "missing ',' between metadata and payload"));
    };

    let mut segments = metadata.split(';');
    let media_type = segments.next().unwrap_or("");
    if !media_type.is_empty() && !is_media_type(media_type) {
        return Err(malformed(Scheme::Data, "media type must be 'type/subtype'")
            .with_context("media_type", media_type));
    }

    let mut base64 = false;
    let mut segments = segments.peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() && segment.eq_ignore_ascii_case("base64") {
            base64 = true;
            break;
        }
        let valid = segment
            .split_once('=')
            .is_some_and(|(key, value)| is_token(key) && is_token(value));
        if !valid {
            return Err(malformed(Scheme::Data, "parameter must be 'key=value'")
                .with_context("parameter", segment));
        }
    }

    if base64 {
        let payload = percent::decode_lossy(payload);
        if let Err(e) = STANDARD.decode(payload.as_bytes()) {
            tracing::trace!(error = %e, "data payload is not valid base64");
            return Err(malformed(Scheme::Data, "payload is not valid base64"));
        }
    }

    Ok(())
}

fn is_media_type(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(kind, subtype)| is_token(kind) && is_token(subtype))
}

/// RFC 2045 token: printable ASCII without spaces or tspecials.
fn is_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/'
                        | b'[' | b']' | b'?' | b'='
                )
        })
}
