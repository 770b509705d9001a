//! Truthiness of predicate results.
//!
//! Predicates handed to [`filter`](super::filter), [`every`](super::every)
//! and friends may return any [`Truthy`] value. `bool` is the usual choice;
//! the other implementations let an element act as its own test when paired
//! with [`identity`](super::identity).

/// A value that can be tested as true or false.
///
/// | Type | Truthy when |
/// |---|---|
/// | `bool` | `true` |
/// | integers | non-zero |
/// | floats | non-zero and not NaN |
/// | `str`, `String` | non-empty |
/// | `Option<T>` | `Some` holding a truthy value |
/// | `&T` | `T` is truthy |
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some(true).is_truthy());
/// assert!(!None::<bool>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` when the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
