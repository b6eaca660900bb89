//! `tel:` numbers in their URI form: `"+"? 1*DIGIT`.

use super::malformed;
use crate::error::ValidationResult;
use crate::scheme::Scheme;

pub(crate) fn validate(rest: &str) -> ValidationResult {
    let digits = rest.strip_prefix('+').unwrap_or(rest);
    if digits.is_empty() {
        return Err(malformed(Scheme::Tel, "empty subscriber number"));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(malformed(Scheme::Tel, "subscriber number must be digits only")
            .with_context("char", c.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e164_shapes() {
        assert!(validate("+14155552671").is_ok());
        assert!(validate("+81312345678").is_ok());
        assert!(validate("911").is_ok());
    }

    #[test]
    fn rejects_letters_and_punctuation() {
        assert!(validate("abc123").is_err());
        assert!(validate("+1(415)555-2671").is_err());
        assert!(validate("++1415").is_err());
        assert!(validate("+").is_err());
        assert!(validate("").is_err());
    }
}
