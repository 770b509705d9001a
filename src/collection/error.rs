//! Error types for collection operations.
//!
//! Collection operations assume well-formed input. The only failures are a
//! precondition on the shape of the input and a named method that cannot be
//! resolved.

/// Represents errors that can occur in collection operations.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::CollectionError;
///
/// let error = CollectionError::NotASequence { operation: "sort_by" };
/// assert_eq!(format!("{error}"), "sort_by: collection must be a sequence");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The operation needs an ordered sequence but was given a keyed container.
    NotASequence {
        /// The name of the operation that rejected its input.
        operation: &'static str,
    },
    /// No method with the given name exists on the element.
    UnknownMethod {
        /// The requested method name.
        name: String,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotASequence { operation } => {
                write!(formatter, "{operation}: collection must be a sequence")
            }
            Self::UnknownMethod { name } => write!(formatter, "no method named `{name}`"),
        }
    }
}

impl std::error::Error for CollectionError {}
