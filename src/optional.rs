use crate::{EmptyAccess, IntoIter, Iter};
use std::fmt;

/// A value that is either present or blank.
///
/// Build one with [`wrap`](crate::wrap) (or [`Nullable::wrapped`](crate::Nullable::wrapped))
/// from any nullable source. Every combinator hands back a fresh value and
/// never touches the receiver.
///
/// ```
/// use wrapped::wrap;
///
/// let greeting = wrap(Some("world"))
///     .map(|name| format!("Hello, {name}!"))
///     .unwrap_or_else(|| "Do I know you?".to_owned());
/// assert_eq!(greeting, "Hello, world!");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    repr: Repr<T>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T> {
    Present(T),
    Blank,
}

impl<T> Optional<T> {
    pub(crate) const fn present(value: T) -> Self {
        Self {
            repr: Repr::Present(value),
        }
    }

    pub(crate) const fn blank() -> Self {
        Self { repr: Repr::Blank }
    }

    /// Produce the value, or [`EmptyAccess`] for a blank.
    ///
    /// ```
    /// use wrapped::{wrap, EmptyAccess};
    ///
    /// assert_eq!(wrap(Some(1)).unwrap(), Ok(1));
    /// assert_eq!(wrap(None::<i32>).unwrap(), Err(EmptyAccess));
    /// ```
    pub fn unwrap(self) -> Result<T, EmptyAccess> {
        match self.repr {
            Repr::Present(value) => Ok(value),
            Repr::Blank => {
                log::trace!(target: "wrapped", "unwrap called on a blank value");
                Err(EmptyAccess)
            }
        }
    }

    /// Produce the value, or `default` for a blank.
    pub fn unwrap_or(self, default: T) -> T {
        match self.repr {
            Repr::Present(value) => value,
            Repr::Blank => default,
        }
    }

    /// Produce the value, or the result of `supplier` for a blank.
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.repr {
            Repr::Present(value) => value,
            Repr::Blank => supplier(),
        }
    }

    /// Apply `f` to the value, or produce `default` for a blank.
    ///
    /// ```
    /// use wrapped::wrap;
    ///
    /// assert_eq!(wrap(Some("hello")).map_or(0, str::len), 5);
    /// assert_eq!(wrap(None::<&str>).map_or(0, str::len), 0);
    /// ```
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Present(value) => f(value),
            Repr::Blank => default,
        }
    }

    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Present(value) => f(value),
            Repr::Blank => default(),
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self.repr, Repr::Present(_))
    }

    pub const fn is_blank(&self) -> bool {
        matches!(self.repr, Repr::Blank)
    }

    /// Call `f` with the value, then produce `self`. A blank skips `f`.
    ///
    /// Chains with [`on_blank`](Self::on_blank) in either order:
    ///
    /// ```
    /// use wrapped::wrap;
    ///
    /// let mut seen = Vec::new();
    /// wrap(Some(7))
    ///     .on_present(|n| seen.push(format!("got {n}")))
    ///     .on_blank(|| seen.push("missing".to_owned()));
    /// assert_eq!(seen, ["got 7"]);
    /// ```
    pub fn on_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Repr::Present(value) = &self.repr {
            f(value);
        }
        self
    }

    /// Call `f`, then produce `self`, but only for a blank.
    pub fn on_blank<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if let Repr::Blank = self.repr {
            f();
        }
        self
    }

    /// Run `f` within the wrapper.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Present(value) => Optional::present(f(value)),
            Repr::Blank => Optional::blank(),
        }
    }

    /// Run `f` against the value and produce its result as is.
    ///
    /// ```
    /// use wrapped::wrap;
    ///
    /// let half = |n: i32| wrap((n % 2 == 0).then_some(n / 2));
    /// assert_eq!(wrap(Some(8)).flat_map(half).flat_map(half), wrap(Some(2)));
    /// assert!(wrap(Some(6)).flat_map(half).flat_map(half).is_blank());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.repr {
            Repr::Present(value) => f(value),
            Repr::Blank => Optional::blank(),
        }
    }

    /// Like [`map`](Self::map) with a fallible `f`. Its error comes back
    /// unchanged.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.repr {
            Repr::Present(value) => f(value).map(Optional::present),
            Repr::Blank => Ok(Optional::blank()),
        }
    }

    /// Like [`flat_map`](Self::flat_map) with a fallible `f`.
    pub fn try_flat_map<U, E, F>(self, f: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<Optional<U>, E>,
    {
        match self.repr {
            Repr::Present(value) => f(value),
            Repr::Blank => Ok(Optional::blank()),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    pub fn select<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self.repr {
            Repr::Present(value) => predicate(value),
            Repr::Blank => false,
        };
        if keep {
            self
        } else {
            Self::blank()
        }
    }

    /// Keep the value only if `predicate` does not hold for it.
    pub fn reject<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.select(|value| !predicate(value))
    }

    /// Borrow the value, if any.
    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.repr {
            Repr::Present(value) => Optional::present(value),
            Repr::Blank => Optional::blank(),
        }
    }

    /// Iterate over the value: once for a present, never for a blank.
    ///
    /// ```
    /// use wrapped::wrap;
    ///
    /// let one = wrap(Some(1));
    /// assert_eq!(one.iter().collect::<Vec<_>>(), [&1]);
    /// assert_eq!(one.iter().collect::<Vec<_>>(), [&1]);
    /// assert_eq!(wrap(None::<i32>).iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_option())
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::blank()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Present(value) => f.debug_tuple("Present").field(value).finish(),
            Repr::Blank => f.write_str("Blank"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Optional::present(v),
            None => Optional::blank(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional.repr {
            Repr::Present(v) => Some(v),
            Repr::Blank => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
