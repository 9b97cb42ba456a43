//! Element traits for text handles.

use crate::boundary::VectorResult;
use crate::vector::VectorTraits;

use super::traits::ElementTraits;

/// Storage rules for text elements.
///
/// The collection owns a duplicated buffer (`Box<str>`): wrapping copies
/// the caller's text, unwrapping copies it again into the output slot.
/// Round-trips preserve content but never buffer identity. Equality is
/// ordinal byte comparison, not deferred to any host string object.
pub struct TextTraits;

impl ElementTraits for TextTraits {
    type Value = String;
    type Storage = Box<str>;

    fn wrap(value: &String) -> VectorResult<Box<str>> {
        Ok(value.as_str().into())
    }

    fn unwrap(stored: &Box<str>, slot: &mut String) -> VectorResult<()> {
        slot.clear();
        slot.push_str(stored);
        Ok(())
    }

    fn equals(stored: &Box<str>, value: &String) -> bool {
        stored.as_bytes() == value.as_bytes()
    }
}

impl VectorTraits for TextTraits {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_content_not_buffer() {
        let original = String::from("fact title");
        let stored = TextTraits::wrap(&original).unwrap();

        let mut slot = String::new();
        TextTraits::unwrap(&stored, &mut slot).unwrap();

        assert_eq!(slot, original);
        assert_ne!(slot.as_ptr(), original.as_ptr());
    }

    #[test]
    fn test_equality_is_ordinal() {
        let stored = TextTraits::wrap(&String::from("Fact")).unwrap();
        assert!(TextTraits::equals(&stored, &String::from("Fact")));
        assert!(!TextTraits::equals(&stored, &String::from("fact")));
        assert!(!TextTraits::equals(&stored, &String::from("Fact ")));
    }

    #[test]
    fn test_empty_text() {
        let stored = TextTraits::wrap(&String::new()).unwrap();
        assert!(TextTraits::equals(&stored, &String::new()));
    }
}
