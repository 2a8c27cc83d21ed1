use std::borrow::Cow;
use std::fmt;
use std::mem;

use crate::error::{UnwrapError, UNWRAP_MESSAGE};
use crate::iter::OptionIter;

type StdOption<T> = core::option::Option<T>;

/// Construct an option holding `value`.
///
/// The option is present regardless of what `value` is, so
/// `some(serde_json::Value::Null)` is still a present option.
#[inline]
pub fn some<T>(value: T) -> Option<T> {
    Option {
        slot: Slot::Present(value),
    }
}

/// Construct an absent option.
#[inline]
pub fn none<T>() -> Option<T> {
    Option { slot: Slot::Absent }
}

/// The two states of an option. Absent sorts before present.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Slot<T> {
    Absent,
    Present(T),
}

/// A value which is either present or absent.
///
/// Instances can only be produced through [`some`], [`none`] or one of the
/// conversions which map onto them, so an option is always in exactly one of
/// its two states.
///
/// Most operations consume the option and produce a new one. The family of
/// operations taking `&mut self` ([`take`], [`replace`], [`clear`], [`set`],
/// [`get_or_insert`] and [`get_or_insert_with`]) modify the option in place.
///
/// [`take`]: Option::take
/// [`replace`]: Option::replace
/// [`clear`]: Option::clear
/// [`set`]: Option::set
/// [`get_or_insert`]: Option::get_or_insert
/// [`get_or_insert_with`]: Option::get_or_insert_with
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Option<T> {
    slot: Slot<T>,
}

impl<T> Option<T> {
    /// Construct an option holding `value`. Same as [`some`].
    #[inline]
    pub fn some(value: T) -> Self {
        some(value)
    }

    /// Construct an absent option. Same as [`none`].
    #[inline]
    pub fn none() -> Self {
        none()
    }

    /// Test if a value is present.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self.slot, Slot::Present(..))
    }

    /// Test if the option is absent.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self.slot, Slot::Absent)
    }

    /// Borrow the held value.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match &self.slot {
            Slot::Present(value) => some(value),
            Slot::Absent => none(),
        }
    }

    /// Mutably borrow the held value.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Present(value) => some(value),
            Slot::Absent => none(),
        }
    }

    /// Return the held value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the option is absent.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.slot {
            Slot::Present(value) => value,
            Slot::Absent => panic!("{message}"),
        }
    }

    /// Return the held value.
    ///
    /// # Panics
    ///
    /// Panics with the message produced by `message` if the option is
    /// absent. `message` is only called in that case.
    #[inline]
    #[track_caller]
    pub fn expect_with<F, M>(self, message: F) -> T
    where
        F: FnOnce() -> M,
        M: fmt::Display,
    {
        match self.slot {
            Slot::Present(value) => value,
            Slot::Absent => panic!("{}", message()),
        }
    }

    /// Return the held value.
    ///
    /// # Panics
    ///
    /// Panics with `Tried to unwrap value of none Option` if the option is
    /// absent.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(UNWRAP_MESSAGE)
    }

    /// Return the held value, or an [`UnwrapError`] carrying `message`.
    #[inline]
    pub fn try_expect<M>(self, message: M) -> Result<T, UnwrapError>
    where
        M: Into<Cow<'static, str>>,
    {
        match self.slot {
            Slot::Present(value) => Ok(value),
            Slot::Absent => Err(UnwrapError::new(message)),
        }
    }

    /// Return the held value, or an [`UnwrapError`] with the default unwrap
    /// message.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.try_expect(UNWRAP_MESSAGE)
    }

    /// Return the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self.slot {
            Slot::Present(value) => value,
            Slot::Absent => default,
        }
    }

    /// Return the held value or the result of calling `default`.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.slot {
            Slot::Present(value) => value,
            Slot::Absent => default(),
        }
    }

    /// Transform the held value with `f`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Slot::Present(value) => some(f(value)),
            Slot::Absent => none(),
        }
    }

    /// Transform the held value with `f`, or produce a present option holding
    /// `default` if absent.
    ///
    /// Unlike [`unwrap_or`], the fallback is wrapped in a present option.
    ///
    /// ```
    /// use optional::{none, some};
    ///
    /// assert_eq!(none::<u32>().map_or(|x| x + 1, 1), some(1));
    /// assert_eq!(some(1).map_or(|x| x + 1, 1), some(2));
    /// ```
    ///
    /// [`unwrap_or`]: Option::unwrap_or
    #[inline]
    pub fn map_or<U, F>(self, f: F, default: U) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Slot::Present(value) => some(f(value)),
            Slot::Absent => some(default),
        }
    }

    /// Transform the held value with `f`, or produce a present option holding
    /// the result of calling `default` if absent.
    #[inline]
    pub fn map_or_else<U, F, D>(self, f: F, default: D) -> Option<U>
    where
        F: FnOnce(T) -> U,
        D: FnOnce() -> U,
    {
        match self.slot {
            Slot::Present(value) => some(f(value)),
            Slot::Absent => some(default()),
        }
    }

    /// Transform the held value into another option.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.slot {
            Slot::Present(value) => f(value),
            Slot::Absent => none(),
        }
    }

    /// Transform the held value into another option, or return `default` as
    /// is if absent.
    #[inline]
    pub fn flat_map_or<U, F>(self, f: F, default: Option<U>) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.slot {
            Slot::Present(value) => f(value),
            Slot::Absent => default,
        }
    }

    /// Transform the held value into another option, or return the option
    /// produced by `default` if absent.
    #[inline]
    pub fn flat_map_or_else<U, F, D>(self, f: F, default: D) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
        D: FnOnce() -> Option<U>,
    {
        match self.slot {
            Slot::Present(value) => f(value),
            Slot::Absent => default(),
        }
    }

    /// Return `other` if this option is present, otherwise an absent option.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self.slot {
            Slot::Present(..) => other,
            Slot::Absent => none(),
        }
    }

    /// Return the result of calling `f` with the held value, or an absent
    /// option.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_map(f)
    }

    /// Return this option if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self.slot {
            Slot::Present(..) => self,
            Slot::Absent => other,
        }
    }

    /// Return this option if present, otherwise the result of calling `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self.slot {
            Slot::Present(..) => self,
            Slot::Absent => f(),
        }
    }

    /// Return whichever of the two options is present if exactly one of them
    /// is, otherwise an absent option.
    #[inline]
    pub fn xor(self, other: Option<T>) -> Option<T> {
        match (self.slot, other.slot) {
            (Slot::Present(value), Slot::Absent) | (Slot::Absent, Slot::Present(value)) => {
                some(value)
            }
            _ => none(),
        }
    }

    /// Keep the held value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self.slot {
            Slot::Present(value) => {
                if predicate(&value) {
                    some(value)
                } else {
                    none()
                }
            }
            Slot::Absent => none(),
        }
    }

    /// Store `value` if the option is absent.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut Self {
        if let Slot::Absent = self.slot {
            tracing::trace!("get_or_insert: inserting");
            self.slot = Slot::Present(value);
        }

        self
    }

    /// Store the result of calling `f` if the option is absent. `f` is only
    /// called in that case.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce() -> T,
    {
        if let Slot::Absent = self.slot {
            tracing::trace!("get_or_insert_with: inserting");
            self.slot = Slot::Present(f());
        }

        self
    }

    /// Drop any held value, leaving the option absent.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        tracing::trace!(present = self.is_some(), "clear");
        self.slot = Slot::Absent;
        self
    }

    /// Move the held value out into a new option, leaving this one absent.
    ///
    /// ```
    /// use optional::{none, some};
    ///
    /// let mut value = some(1);
    /// assert_eq!(value.take(), some(1));
    /// assert_eq!(value, none());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        tracing::trace!(present = self.is_some(), "take");

        Option {
            slot: mem::replace(&mut self.slot, Slot::Absent),
        }
    }

    /// Store `value`, dropping any previously held value.
    #[inline]
    pub fn replace(&mut self, value: T) -> &mut Self {
        tracing::trace!(present = self.is_some(), "replace");
        self.slot = Slot::Present(value);
        self
    }

    /// Store `value` if it is `Some`, otherwise clear the option.
    ///
    /// This is the in-place counterpart to `Option::from`.
    #[inline]
    pub fn set(&mut self, value: StdOption<T>) -> &mut Self {
        tracing::trace!(present = self.is_some(), incoming = value.is_some(), "set");

        self.slot = match value {
            Some(value) => Slot::Present(value),
            None => Slot::Absent,
        };

        self
    }

    /// Call `f` with the held value if present.
    #[inline]
    pub fn if_some<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Slot::Present(value) = &self.slot {
            f(value);
        }

        self
    }

    /// Call `f` with the held value if present, otherwise call `otherwise`.
    #[inline]
    pub fn if_some_else<F, E>(&self, f: F, otherwise: E) -> &Self
    where
        F: FnOnce(&T),
        E: FnOnce(),
    {
        match &self.slot {
            Slot::Present(value) => f(value),
            Slot::Absent => otherwise(),
        }

        self
    }

    /// Call `f` if the option is absent.
    #[inline]
    pub fn if_none<F>(&self, f: F) -> &Self
    where
        F: FnOnce(),
    {
        if let Slot::Absent = self.slot {
            f();
        }

        self
    }

    /// Call `f` if the option is absent, otherwise call `otherwise` with the
    /// held value.
    #[inline]
    pub fn if_none_else<F, E>(&self, f: F, otherwise: E) -> &Self
    where
        F: FnOnce(),
        E: FnOnce(&T),
    {
        match &self.slot {
            Slot::Present(value) => otherwise(value),
            Slot::Absent => f(),
        }

        self
    }

    /// Convert into the plain value-or-nothing representation.
    #[inline]
    pub fn into_nullable(self) -> StdOption<T> {
        match self.slot {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }

    /// Iterate over a reference to the held value.
    #[inline]
    pub fn iter(&self) -> OptionIter<&T> {
        OptionIter::new(self.as_ref().into_nullable())
    }

    /// Iterate over a mutable reference to the held value.
    #[inline]
    pub fn iter_mut(&mut self) -> OptionIter<&mut T> {
        OptionIter::new(self.as_mut().into_nullable())
    }
}

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        none()
    }
}

impl<T> fmt::Debug for Option<T>
where
    T: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => f.debug_tuple("Some").field(value).finish(),
            Slot::Absent => f.write_str("None"),
        }
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    #[inline]
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => some(value),
            None => none(),
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.into_nullable()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = OptionIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OptionIter::new(self.into_nullable())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = OptionIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Option<T> {
    type Item = &'a mut T;
    type IntoIter = OptionIter<&'a mut T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A, V> FromIterator<Option<A>> for Option<V>
where
    V: FromIterator<A>,
{
    /// Collect into a present option if every element is present, stopping
    /// at the first absent element otherwise.
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Option<A>>,
    {
        iter.into_iter()
            .map(Option::into_nullable)
            .collect::<StdOption<V>>()
            .into()
    }
}
