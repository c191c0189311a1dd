// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::index::ChunkIndex;
use std::iter::FusedIterator;

/// A non-empty closed interval `[first, last]` of integers.
///
/// # Invariants
///
/// `first` must always be less than or equal to `last`.
///
/// # Examples
///
/// ```rust
/// # use chunkloop_core::math::interval::ClosedInterval;
///
/// let iv = ClosedInterval::new(3, 6);
/// assert_eq!(iv.checked_len(), Some(4));
/// assert_eq!(iv.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T> {
    first: T,
    last: T,
}

impl<T> ClosedInterval<T>
where
    T: ChunkIndex,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `first > last`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-2i32, 2);
    /// assert_eq!(iv.first(), -2);
    /// assert_eq!(iv.last(), 2);
    /// ```
    #[inline]
    pub fn new(first: T, last: T) -> Self {
        assert!(
            first <= last,
            "Invalid interval: first must be less than or equal to last"
        );
        Self { first, last }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `first > last`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(5, 5).is_some());
    /// assert!(ClosedInterval::try_new(6, 5).is_none());
    /// ```
    #[inline]
    pub fn try_new(first: T, last: T) -> Option<Self> {
        if first <= last {
            Some(Self { first, last })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `first <= last`.
    #[inline]
    pub fn new_unchecked(first: T, last: T) -> Self {
        debug_assert!(
            first <= last,
            "Invalid interval: first must be less than or equal to last"
        );
        Self { first, last }
    }

    /// Returns the smallest point of the interval.
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the largest point of the interval.
    #[inline]
    pub fn last(&self) -> T {
        self.last
    }

    /// Returns the number of points in the interval, or `None` if that
    /// number is not representable in `T` (e.g. `[i8::MIN, i8::MAX]`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(7u8, 7).checked_len(), Some(1));
    /// assert_eq!(ClosedInterval::new(0u8, 255).checked_len(), None);
    /// ```
    #[inline]
    pub fn checked_len(&self) -> Option<T> {
        self.last
            .checked_sub_val(self.first)?
            .checked_add_val(T::PLUS_ONE)
    }

    /// Returns the number of points widened to `u128`, or `None` only for
    /// intervals spanning the whole `u128` domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(i8::MIN, i8::MAX).wide_len(), Some(256));
    /// assert_eq!(ClosedInterval::new(0u128, u128::MAX).wide_len(), None);
    /// ```
    #[inline]
    pub fn wide_len(&self) -> Option<u128> {
        distance(self.first, self.last)?.checked_add(1)
    }

    /// Returns `true` if `value` lies within `[first, last]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.first <= value && value <= self.last
    }

    /// Returns an iterator over all points in ascending order.
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.first,
            back: self.last,
            exhausted: false,
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.first, self.last)
    }
}

impl<T> TryFrom<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: ChunkIndex,
{
    type Error = std::ops::RangeInclusive<T>;

    /// Fails with the original range if it is empty.
    #[inline]
    fn try_from(range: std::ops::RangeInclusive<T>) -> Result<Self, Self::Error> {
        Self::try_new(*range.start(), *range.end()).ok_or(range)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T> {
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.first..=iv.last
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: ChunkIndex,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: ChunkIndex,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the integer points contained within a `ClosedInterval`.
///
/// The iterator never computes `last + 1`, so intervals ending at `T::MAX`
/// (or starting at `T::MIN` when iterated from the back) are safe.
#[derive(Debug, Clone)]
pub struct ClosedIntervalIterator<T> {
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: ChunkIndex,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.front;
        if current == self.back {
            self.exhausted = true;
        } else {
            self.front = current + T::PLUS_ONE;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match distance(self.front, self.back)
            .and_then(|d| d.checked_add(1))
            .and_then(|n| usize::try_from(n).ok())
        {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Number of steps from `front` to `back` (`front <= back`), widened to `u128`.
fn distance<T>(front: T, back: T) -> Option<u128>
where
    T: ChunkIndex,
{
    if let Some(d) = back.checked_sub_val(front) {
        return d.to_u128();
    }
    // Only signed types overflow here; two's complement keeps the difference exact.
    let (f, b) = (front.to_i128()?, back.to_i128()?);
    Some((b as u128).wrapping_sub(f as u128))
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: ChunkIndex,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.back;
        if current == self.front {
            self.exhausted = true;
        } else {
            self.back = current - T::PLUS_ONE;
        }
        Some(current)
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: ChunkIndex {}
