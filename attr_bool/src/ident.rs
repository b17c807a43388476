//! Attribute-name validation.

use crate::error::AttrBoolError;

/// Returns `true` when `name` is a valid attribute-name root: ASCII
/// letters, digits, and underscores, not starting with a digit.
///
/// ```rust
/// assert!(attr_bool::is_valid_name("wearing_headband"));
/// assert!(!attr_bool::is_valid_name("bad name"));
/// assert!(!attr_bool::is_valid_name("2fast"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn ensure_valid_name(name: &str) -> Result<(), AttrBoolError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(AttrBoolError::InvalidIdentifier {
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("visible", true)]
    #[case::underscore_start("_hidden", true)]
    #[case::digits_inside("layer2", true)]
    #[case::space("bad name", false)]
    #[case::digit_start("2fast", false)]
    #[case::empty("", false)]
    #[case::punctuation("flag!", false)]
    fn validates_name_roots(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(is_valid_name(name), ok);
        assert_eq!(ensure_valid_name(name).is_ok(), ok);
    }
}
