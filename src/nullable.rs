use crate::Optional;
use std::ptr::NonNull;

/// Types with their own representation of "no value".
///
/// Implementors route that representation to a blank and everything else to
/// a present. Derive it for your own types with `#[derive(Nullable)]`.
pub trait Nullable: Sized {
    type Value;

    fn wrapped(self) -> Optional<Self::Value>;
}

/// Wrap `value`, forcing the caller to deal with a possible absence.
///
/// ```
/// use std::ptr;
/// use wrapped::wrap;
///
/// assert!(wrap(Some(1)).is_present());
/// assert!(wrap(None::<i32>).is_blank());
/// assert!(wrap(ptr::null::<u8>()).is_blank());
/// ```
pub fn wrap<N: Nullable>(value: N) -> Optional<N::Value> {
    value.wrapped()
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn wrapped(self) -> Optional<T> {
        self.into()
    }
}

impl<'a, T> Nullable for &'a Option<T> {
    type Value = &'a T;

    fn wrapped(self) -> Optional<&'a T> {
        self.as_ref().into()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    fn wrapped(self) -> Optional<NonNull<T>> {
        NonNull::new(self).into()
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    fn wrapped(self) -> Optional<NonNull<T>> {
        NonNull::new(self.cast_mut()).into()
    }
}
