//! Result-caching wrappers.
//!
//! - [`Memoize`] keys its cache by the argument tuple itself.
//! - [`SerializedMemoize`] (feature `serde`) keys its cache by the JSON
//!   serialization of the argument tuple, for arguments that are serializable
//!   but not hashable.
//!
//! Both caches grow without bound for the wrapper's lifetime. There is no
//! eviction; wrap the function yourself if you need a bounded cache.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
#[cfg(feature = "serde")]
use std::marker::PhantomData;

use crate::hash::FastHashMap;

/// A function whose results are cached per distinct argument tuple.
///
/// # Thread Safety
///
/// This type is NOT thread-safe.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::memoize;
///
/// let evaluations = Cell::new(0);
/// let area = memoize(|(width, height): (u32, u32)| {
///     evaluations.set(evaluations.get() + 1);
///     width * height
/// });
///
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((4, 3)), 12);
/// assert_eq!(evaluations.get(), 2);
/// ```
pub struct Memoize<F, A, R> {
    function: F,
    cache: RefCell<FastHashMap<A, R>>,
}

/// Wraps `function` so that each distinct argument tuple is computed once.
#[inline]
pub fn memoize<F, A, R>(function: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoize::new(function)
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    /// Creates a new caching wrapper around `function`.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(FastHashMap::default()),
        }
    }

    /// Returns the cached result for `args`, computing and storing it on a miss.
    pub fn call(&self, args: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&args) {
            tracing::trace!("memoize: cache hit");
            return cached.clone();
        }
        tracing::trace!("memoize: cache miss");
        let result = (self.function)(args.clone());
        self.cache.borrow_mut().insert(args, result.clone());
        result
    }

    /// Returns the number of cached argument tuples.
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, A, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cache_size", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A function whose results are cached by the JSON form of its arguments.
///
/// Two argument tuples share a cache entry exactly when they serialize to the
/// same JSON text, so the arguments should round-trip losslessly.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::memoize_serialized;
///
/// let describe = memoize_serialized(|(name, tags): (String, Vec<String>)| {
///     format!("{name}: {}", tags.join(","))
/// });
///
/// let result = describe.call(("post".to_string(), vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(result.unwrap(), "post: a,b");
/// assert_eq!(describe.cache_size(), 1);
/// ```
#[cfg(feature = "serde")]
pub struct SerializedMemoize<F, A, R> {
    function: F,
    cache: RefCell<FastHashMap<String, R>>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that each distinct serialized argument tuple is computed once.
#[cfg(feature = "serde")]
#[inline]
pub fn memoize_serialized<F, A, R>(function: F) -> SerializedMemoize<F, A, R>
where
    F: Fn(A) -> R,
    A: serde::Serialize,
    R: Clone,
{
    SerializedMemoize::new(function)
}

#[cfg(feature = "serde")]
impl<F, A, R> SerializedMemoize<F, A, R>
where
    F: Fn(A) -> R,
    A: serde::Serialize,
    R: Clone,
{
    /// Creates a new caching wrapper around `function`.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(FastHashMap::default()),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for `args`, computing and storing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`DecoratorError::Serialization`](super::DecoratorError::Serialization)
    /// if `args` cannot be serialized. The function is not called in that case.
    pub fn call(&self, args: A) -> Result<R, super::DecoratorError> {
        let key = serde_json::to_string(&args).map_err(|error| {
            super::DecoratorError::Serialization {
                message: error.to_string(),
            }
        })?;
        if let Some(cached) = self.cache.borrow().get(&key) {
            tracing::trace!(key = %key, "memoize_serialized: cache hit");
            return Ok(cached.clone());
        }
        tracing::trace!(key = %key, "memoize_serialized: cache miss");
        let result = (self.function)(args);
        self.cache.borrow_mut().insert(key, result.clone());
        Ok(result)
    }

    /// Returns the number of cached argument serializations.
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(feature = "serde")]
impl<F, A, R> fmt::Debug for SerializedMemoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SerializedMemoize")
            .field("cache_size", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
