use std::fmt;
use std::mem;

use crate::tombstone::Tombstone;

/// An optional value with the size of `T`.
///
/// The empty state is the first spare representation of `T`, so `T` must
/// have at least one; anything else fails to compile.
///
/// ```
/// use bounded::{Integer, Optional};
/// use std::mem::size_of;
///
/// type Percent = Integer<0, 100, u8>;
///
/// let mut slot = Optional::some(Percent::constant::<42>());
/// assert_eq!(size_of::<Optional<Percent>>(), size_of::<Percent>());
/// assert_eq!(slot.take(), Some(Percent::constant::<42>()));
/// assert!(slot.is_none());
/// ```
#[derive(Copy, Clone)]
pub struct Optional<T> {
    value: T,
}

impl<T: Tombstone> Optional<T> {
    const EMPTY_EXISTS: () = {
        if T::SPARE_REPRESENTATIONS == 0 {
            panic!("the type has no spare representation for the empty state");
        }
    };

    #[inline]
    pub fn none() -> Self {
        let () = Self::EMPTY_EXISTS;
        Optional { value: T::make(0) }
    }

    #[inline]
    pub fn some(value: T) -> Self {
        let () = Self::EMPTY_EXISTS;
        debug_assert!(value.index().is_none(), "a spare representation is not a value");
        Optional { value }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.value.index() == Some(0)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// A reference to the value, if any.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.is_none() { None } else { Some(&self.value) }
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.is_none() { None } else { Some(&mut self.value) }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        if self.is_none() { None } else { Some(self.value) }
    }

    /// Take the value out, leaving the optional empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        mem::replace(self, Self::none()).into_option()
    }

    /// Store `value`, returning the previous value if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        mem::replace(self, Self::some(value)).into_option()
    }

    /// Store `value` and return a reference to it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::some(value);
        &mut self.value
    }
}

/// One spare representation of `T` is taken by the empty state.
impl<T: Tombstone> Tombstone for Optional<T> {
    const SPARE_REPRESENTATIONS: u128 = T::SPARE_REPRESENTATIONS.saturating_sub(1);

    #[inline]
    fn make(index: u128) -> Self {
        assert!(index < Self::SPARE_REPRESENTATIONS,
                "spare representation {} out of bounds for {} spares",
                index, Self::SPARE_REPRESENTATIONS);
        Optional { value: T::make(index + 1) }
    }

    #[inline]
    fn index(&self) -> Option<u128> {
        self.value.index().and_then(|index| index.checked_sub(1))
    }
}

impl<T: Tombstone> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Tombstone> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }
}

impl<T: Tombstone> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Tombstone + PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Tombstone + Eq> Eq for Optional<T> { }

impl<T: Tombstone + fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}
