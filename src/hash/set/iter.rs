use std::iter::FusedIterator;

use super::HashSet;

use crate::hash::map::{IntoKeys, Keys};

impl<T> IntoIterator for HashSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(IntoKeys(self.inner.into_iter()))
    }
}

/// An owned iterator over the items of a [`HashSet`].
pub struct IntoIter<T>(
    pub(crate) IntoKeys<T, ()>,
);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a HashSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(Keys((&self.inner).into_iter()))
    }
}

/// A borrowed iterator over the items of a [`HashSet`].
pub struct Iter<'a, T>(
    pub(crate) Keys<'a, T, ()>,
);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
