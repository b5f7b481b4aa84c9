//! # System Contracts
//!
//! Shapes from the platform's base system library: the string enumerator and
//! the two general-purpose array collections.

/// Forward enumerator over strings.
///
/// Exhaustion is a missing string; an empty string is an ordinary element.
pub trait StringEnumerator {
    fn reset(&mut self);

    /// Next string, or `None` when exhausted.
    fn next_string(&mut self) -> Option<String>;
}

/// Counted array of signed integers.
pub trait LongArray {
    /// Number of elements in the array.
    fn count(&self) -> usize;

    /// Element at `index`.
    fn element(&self, index: usize) -> i32;
}

/// Counted array of arbitrary platform objects.
pub trait ObjectArray {
    type Element;

    /// Number of elements in the array.
    fn count(&self) -> usize;

    /// Element at `index`.
    fn element(&self, index: usize) -> Self::Element;
}
