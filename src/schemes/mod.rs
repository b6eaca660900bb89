//! Structural grammars for the light-weight schemes.
//!
//! The router accepts `magnet:`, `data:`, `urn:` and `tel:` on their prefix
//! alone, and `ipfs:` on its `ipfs://` prefix. The grammars here run only
//! when the matching [`StrictSchemes`](crate::StrictSchemes) flag is set.
//! Each takes the input with its scheme and `:` already removed.

pub(crate) mod data;
pub(crate) mod ipfs;
pub(crate) mod magnet;
pub(crate) mod tel;
pub(crate) mod urn;

use crate::error::{ErrorKind, ValidationError};
use crate::scheme::Scheme;

fn malformed(scheme: Scheme, reason: &str) -> ValidationError {
    ValidationError::new(ErrorKind::MalformedStructure)
        .with_context("scheme", scheme.as_str())
        .with_context("reason", reason)
}
