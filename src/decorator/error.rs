//! Error types for function decorators.

/// Represents errors that can occur when calling a decorated function.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::DecoratorError;
///
/// let error = DecoratorError::NoRuntime { operation: "delay" };
/// assert_eq!(format!("{error}"), "delay: no tokio runtime is running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorError {
    /// The decorator needs a tokio runtime and none is running on this thread.
    NoRuntime {
        /// The name of the decorator that needed the runtime.
        operation: &'static str,
    },
    /// The arguments could not be serialized into a cache key.
    Serialization {
        /// The serializer's error message.
        message: String,
    },
}

impl std::fmt::Display for DecoratorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuntime { operation } => {
                write!(formatter, "{operation}: no tokio runtime is running")
            }
            Self::Serialization { message } => {
                write!(formatter, "failed to serialize arguments: {message}")
            }
        }
    }
}

impl std::error::Error for DecoratorError {}
