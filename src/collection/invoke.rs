//! Calling a method on every element.
//!
//! [`invoke`] takes the method as a closure. [`invoke_named`] resolves it by
//! name through [`Invocable`], which element types opt into.

use super::error::CollectionError;
use super::transform::map;
use super::traverse::Collection;

/// Elements that expose methods by name.
///
/// `A` is the argument type shared by the named methods. Return `None` for an
/// unknown name.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Invocable, invoke_named};
///
/// struct Counter(u32);
///
/// impl Invocable<u32> for Counter {
///     type Output = u32;
///
///     fn invoke_method(&self, name: &str, amount: &u32) -> Option<u32> {
///         match name {
///             "add" => Some(self.0 + amount),
///             "multiply" => Some(self.0 * amount),
///             _ => None,
///         }
///     }
/// }
///
/// let counters = vec![Counter(1), Counter(5)];
/// assert_eq!(invoke_named(&counters, "add", &10), Ok(vec![11, 15]));
/// assert!(invoke_named(&counters, "divide", &10).is_err());
/// ```
pub trait Invocable<A: ?Sized> {
    /// The result type of the named methods.
    type Output;

    /// Calls the method `name` on `self` with `args`.
    fn invoke_method(&self, name: &str, args: &A) -> Option<Self::Output>;
}

/// Named string methods that take no arguments:
/// `to_uppercase`, `to_lowercase`, `trim` and `reverse`.
impl Invocable<()> for str {
    type Output = String;

    fn invoke_method(&self, name: &str, _: &()) -> Option<String> {
        match name {
            "to_uppercase" => Some(self.to_uppercase()),
            "to_lowercase" => Some(self.to_lowercase()),
            "trim" => Some(self.trim().to_owned()),
            "reverse" => Some(self.chars().rev().collect()),
            _ => None,
        }
    }
}

/// Named string methods that take a count: `repeat`.
impl Invocable<usize> for str {
    type Output = String;

    fn invoke_method(&self, name: &str, count: &usize) -> Option<String> {
        match name {
            "repeat" => Some(self.repeat(*count)),
            _ => None,
        }
    }
}

impl<A> Invocable<A> for String
where
    str: Invocable<A>,
{
    type Output = <str as Invocable<A>>::Output;

    #[inline]
    fn invoke_method(&self, name: &str, args: &A) -> Option<Self::Output> {
        self.as_str().invoke_method(name, args)
    }
}

impl<T, A> Invocable<A> for &T
where
    T: Invocable<A> + ?Sized,
    A: ?Sized,
{
    type Output = T::Output;

    #[inline]
    fn invoke_method(&self, name: &str, args: &A) -> Option<Self::Output> {
        (**self).invoke_method(name, args)
    }
}

/// Calls `method(element, args)` on every element and collects the results.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke;
///
/// let words = vec!["alpha", "beta"];
/// let padded = invoke(
///     &words,
///     |word, width: &usize| {
///         let width = *width;
///         format!("{word:>width$}")
///     },
///     &6,
/// );
/// assert_eq!(padded, vec![" alpha", "  beta"]);
/// ```
pub fn invoke<'a, C, F, A, R>(collection: &'a C, mut method: F, args: &A) -> Vec<R>
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item, &A) -> R,
    A: ?Sized,
{
    map(collection, |element, _, _| method(element, args))
}

/// Calls the method named `name` on every element and collects the results.
///
/// # Errors
///
/// Returns [`CollectionError::UnknownMethod`] if any element does not
/// recognize `name`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_named;
///
/// let words = vec!["dog", "cat"];
/// assert_eq!(invoke_named(&words, "to_uppercase", &()), Ok(vec!["DOG".to_string(), "CAT".to_string()]));
/// assert_eq!(invoke_named(&words, "repeat", &2_usize), Ok(vec!["dogdog".to_string(), "catcat".to_string()]));
/// ```
pub fn invoke_named<'a, C, A>(
    collection: &'a C,
    name: &str,
    args: &A,
) -> Result<Vec<<C::Item as Invocable<A>>::Output>, CollectionError>
where
    C: Collection + ?Sized + 'a,
    C::Item: Invocable<A>,
    A: ?Sized,
{
    map(collection, |element, _, _| {
        element
            .invoke_method(name, args)
            .ok_or_else(|| CollectionError::UnknownMethod {
                name: name.to_owned(),
            })
    })
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_strings_delegate_to_str() {
        let owned = String::from("  padded  ");
        assert_eq!(owned.invoke_method("trim", &()), Some("padded".to_string()));
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!("text".invoke_method("explode", &()), None);
    }
}
