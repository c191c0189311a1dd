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

use chunkloop_core::{math::interval::ClosedInterval, num::index::ChunkIndex};

/// One contiguous batch of loop indices handed out by a single outer step.
///
/// A chunk is never empty and never holds more indices than the loop's
/// chunk size.
///
/// # Examples
///
/// ```rust
/// # use chunkloop::{cursor::ChunkCursor, size::ChunkSize};
/// let mut cursor = ChunkCursor::zero_based(10, ChunkSize::new(3).unwrap());
/// let chunk = cursor.advance_chunk().unwrap();
///
/// assert_eq!(chunk.ordinal(), 0);
/// assert_eq!(chunk.first(), 0);
/// assert_eq!(chunk.last(), 2);
/// assert_eq!(chunk.element_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk<T> {
    ordinal: usize,
    span: ClosedInterval<T>,
    element_count: T,
}

impl<T> Chunk<T>
where
    T: ChunkIndex,
{
    #[inline]
    pub(crate) fn new(ordinal: usize, first: T, last: T) -> Self {
        // `last - first` is below the chunk size, so the count fits in `T`.
        Self {
            ordinal,
            span: ClosedInterval::new_unchecked(first, last),
            element_count: last - first + T::PLUS_ONE,
        }
    }

    /// The zero-based position of this chunk within its loop.
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The first index covered by this chunk.
    #[inline]
    pub fn first(&self) -> T {
        self.span.first()
    }

    /// The last index covered by this chunk (inclusive).
    #[inline]
    pub fn last(&self) -> T {
        self.span.last()
    }

    /// The number of indices in this chunk, always in `1..=chunk_size`.
    #[inline]
    pub fn element_count(&self) -> T {
        self.element_count
    }

    /// The indices of this chunk as a closed interval.
    #[inline]
    pub fn span(&self) -> ClosedInterval<T> {
        self.span
    }

    /// Returns `true` if `index` belongs to this chunk.
    #[inline]
    pub fn contains(&self, index: T) -> bool {
        self.span.contains(index)
    }

    /// Iterates the indices of this chunk in increasing order.
    #[inline]
    pub fn iter(&self) -> chunkloop_core::math::interval::ClosedIntervalIterator<T> {
        self.span.iter()
    }
}

impl<T> IntoIterator for Chunk<T>
where
    T: ChunkIndex,
{
    type Item = T;
    type IntoIter = chunkloop_core::math::interval::ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.span.iter()
    }
}

impl<T> IntoIterator for &Chunk<T>
where
    T: ChunkIndex,
{
    type Item = T;
    type IntoIter = chunkloop_core::math::interval::ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.span.iter()
    }
}

impl<T> std::fmt::Display for Chunk<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk #{} {}", self.ordinal, self.span)
    }
}
