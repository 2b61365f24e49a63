//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// A product record in a price list is the canonical example here: it has no
/// identifier, duplicates are allowed, and it is only ever addressed by its
/// position in the list.
///
/// ## Immutability
///
/// Value objects are not edited in place. To "modify" one, build a new one.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 1.5, currency: "EUR".to_string() };
/// let m2 = Money { amount: 1.5, currency: "EUR".to_string() };
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
