use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EmptyValueAccess;
use crate::iter::{IntoIter, Iter};

type StdOption<T> = std::option::Option<T>;

/// A value that is either [present](Self::Present) or [absent](Self::Absent).
///
/// Values are wrapped with [present](Self::present), or bridged from a standard [`Option`](std::option::Option)
/// with [from_nullable](Self::from_nullable). The wrapped value is taken out with [get](Self::get), which fails
/// with [`EmptyValueAccess`] when absent, or with one of the `get_or_*` variants that supply a fallback.
///
/// With the `serde` feature, serializes as a tag (`Present` or `Absent`) followed by the wrapped value if present.
///
/// Importing this type as the bare name `Option` hides the prelude's `Option` in that module, which breaks derive
/// macros that expand to an unqualified `Option` (clap's `Parser`, for one). In modules that use such derives, import
/// it under another name, e.g. `use opt_core::Option as Opt;`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum Option<T> {
  /// No value.
  Absent,
  /// Exactly one value.
  Present(T),
}

impl<T> Option<T> {
  #[inline]
  pub const fn present(value: T) -> Self { Self::Present(value) }
  #[inline]
  pub const fn absent() -> Self { Self::Absent }

  /// Wraps `value` if it is `Some`, otherwise returns [absent](Self::Absent).
  #[inline]
  pub fn from_nullable(value: StdOption<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  #[inline]
  pub const fn is_empty(&self) -> bool { matches!(self, Self::Absent) }
  #[inline]
  pub const fn is_defined(&self) -> bool { !self.is_empty() }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Option::Present(value),
      Self::Absent => Option::Absent,
    }
  }

  /// Returns the wrapped value, or [`EmptyValueAccess`] if absent.
  #[inline]
  pub fn get(self) -> Result<T, EmptyValueAccess> {
    self.get_or_raise(EmptyValueAccess)
  }
  /// Returns a reference to the wrapped value, or [`EmptyValueAccess`] if absent.
  #[inline]
  pub fn get_ref(&self) -> Result<&T, EmptyValueAccess> {
    self.as_ref().get()
  }

  /// Returns the wrapped value, or `default` if absent.
  #[inline]
  pub fn get_or_else(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }
  /// Returns the wrapped value, or the result of `default` if absent. `default` is only called when absent.
  #[inline]
  pub fn get_or_else_with(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default(),
    }
  }

  /// Returns the wrapped value, or `error` as-is if absent.
  #[inline]
  pub fn get_or_raise<E>(self, error: E) -> Result<T, E> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(error),
    }
  }
  #[inline]
  pub fn get_or_raise_with<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(error()),
    }
  }

  /// Converts into a standard [`Option`](std::option::Option), which is `None` if absent.
  #[inline]
  pub fn into_nullable(self) -> StdOption<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }

  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Present(value) => Option::Present(f(value)),
      Self::Absent => Option::Absent,
    }
  }

  /// Iterates over the wrapped value: once if present, never if absent.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.as_ref().into_nullable())
  }
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> From<StdOption<T>> for Option<T> {
  #[inline]
  fn from(value: StdOption<T>) -> Self { Self::from_nullable(value) }
}
impl<T> From<Option<T>> for StdOption<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { value.into_nullable() }
}

impl<T> IntoIterator for Option<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.into_nullable()) }
}
impl<'a, T> IntoIterator for &'a Option<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Display> Display for Option<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Present(value) => write!(f, "Present{{{}}}", value),
      Self::Absent => f.write_str("Absent"),
    }
  }
}
