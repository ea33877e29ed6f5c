//! Iterators over the zero or one values of an [`Option`](crate::option::Option).
//!
//! Both iterators hold the (possibly missing) item directly; nothing is allocated. A borrowing [`Iter`] can be
//! cloned to restart it.

use std::iter::FusedIterator;

/// Iterator over a reference to the value of a [present](crate::option::Option::Present) option.
///
/// Created by [`Option::iter`](crate::option::Option::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
  item: Option<&'a T>,
}
impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(crate) fn new(item: Option<&'a T>) -> Self { Self { item } }
}

impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self { Self { item: self.item } }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.item.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = usize::from(self.item.is_some());
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.item.take() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}


/// Iterator that moves the value out of a [present](crate::option::Option::Present) option.
///
/// Created by the [`IntoIterator`] implementation of [`Option`](crate::option::Option).
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  item: Option<T>,
}
impl<T> IntoIter<T> {
  #[inline]
  pub(crate) fn new(item: Option<T>) -> Self { Self { item } }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.item.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = usize::from(self.item.is_some());
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.item.take() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
