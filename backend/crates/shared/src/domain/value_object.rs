//! Value object capability: equality by value, not identity.

use std::fmt::Debug;

/// Immutable domain primitive.
///
/// Implementors are built only through a validating constructor that fails
/// fast with a [`DomainError::Validation`](crate::error::domain_error::DomainError)
/// and expose no mutators.
pub trait ValueObject: Clone + Eq + Debug {
    /// Held value
    type Value: ?Sized + Eq;

    fn value(&self) -> &Self::Value;

    /// Structural equality on held values
    fn equals(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Code(String);

    impl ValueObject for Code {
        type Value = str;

        fn value(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_equals_compares_values() {
        let a = Code("x1".to_string());
        let b = Code("x1".to_string());
        let c = Code("x2".to_string());
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
    }
}
