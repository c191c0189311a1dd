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

//! # Chunk Cursor
//!
//! A two-level counting loop turned into an explicit iterator object. The
//! outer level hands out contiguous chunks of at most `chunk_size` indices,
//! the inner level walks the shared loop index through the current chunk one
//! element at a time.
//!
//! ## Addressing Modes
//!
//! - `LoopMode::ZeroBased`: the index covers `[0, length)`. The chunk
//!   boundary is exclusive.
//! - `LoopMode::Ranged`: the index covers `[start, end]`. The chunk boundary
//!   is inclusive, and a range ending at `T::MAX` terminates without
//!   overflowing the index.
//!
//! A non-positive `length` or an inverted range (`start > end`) produce no
//! chunks at all.
//!
//! ## Usage
//!
//! The explicit form mirrors an outer `while` around an inner `for`:
//!
//! ```rust
//! use chunkloop::{cursor::ChunkCursor, size::ChunkSize};
//!
//! let mut cursor = ChunkCursor::zero_based(10u32, ChunkSize::new(3).unwrap());
//! let mut visited = Vec::new();
//! let mut outer_steps = 0;
//!
//! while cursor.has_next_chunk() {
//!     outer_steps += 1; // e.g. check for an interrupt here
//!     cursor.advance_chunk();
//!     while let Some(i) = cursor.step() {
//!         visited.push(i);
//!     }
//! }
//!
//! assert_eq!(outer_steps, 4);
//! assert_eq!(visited, (0..10).collect::<Vec<_>>());
//! ```
//!
//! As an `Iterator`, the cursor yields whole chunks:
//!
//! ```rust
//! use chunkloop::{cursor::ChunkCursor, size::ChunkSize};
//!
//! let spans: Vec<_> = ChunkCursor::ranged(5i64, 11, ChunkSize::new(3).unwrap())
//!     .map(|c| (c.first(), c.last()))
//!     .collect();
//! assert_eq!(spans, vec![(5, 7), (8, 10), (11, 11)]);
//! ```

use crate::{chunk::Chunk, size::ChunkSize};
use chunkloop_core::{math::interval::ClosedInterval, num::index::ChunkIndex};
use std::iter::FusedIterator;

/// How the loop's upper bound is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopMode {
    /// Indices `[0, length)`; the bound is exclusive.
    ZeroBased,
    /// Indices `[start, end]`; the bound is inclusive.
    Ranged,
}

impl std::fmt::Display for LoopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopMode::ZeroBased => write!(f, "ZeroBased"),
            LoopMode::Ranged => write!(f, "Ranged"),
        }
    }
}

/// Drives a chunked loop over a linear index range.
///
/// # Invariants
///
/// - The chunk boundary never exceeds the loop's upper bound.
/// - While a chunk is open, the index never passes the chunk boundary.
/// - Every index of the range is produced exactly once, in increasing order,
///   provided each chunk is fully stepped (or skipped via `Iterator::next`).
///
/// If `advance_chunk` is called before the current chunk has been fully
/// stepped, the unvisited indices become the start of the next chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkCursor<T> {
    mode: LoopMode,
    lower: T,
    upper: T,
    chunk_size: ChunkSize<T>,
    // `None` once a ranged loop ending at `T::MAX` has stepped past its end.
    index: Option<T>,
    boundary: T,
    chunk_open: bool,
    chunks_started: usize,
}

impl<T> ChunkCursor<T>
where
    T: ChunkIndex,
{
    /// Creates a cursor over `[0, length)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop::{cursor::ChunkCursor, size::ChunkSize};
    /// let cursor = ChunkCursor::zero_based(0usize, ChunkSize::new(4).unwrap());
    /// assert_eq!(cursor.count(), 0);
    /// ```
    #[inline]
    pub fn zero_based(length: T, chunk_size: ChunkSize<T>) -> Self {
        Self {
            mode: LoopMode::ZeroBased,
            lower: T::ZERO,
            upper: length,
            chunk_size,
            index: Some(T::ZERO),
            boundary: T::ZERO,
            chunk_open: false,
            chunks_started: 0,
        }
    }

    /// Creates a cursor over `[start, end]`, both inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop::{cursor::ChunkCursor, size::ChunkSize};
    /// let cursor = ChunkCursor::ranged(5i32, 5, ChunkSize::new(2).unwrap());
    /// let chunks: Vec<_> = cursor.collect();
    /// assert_eq!(chunks.len(), 1);
    /// assert_eq!(chunks[0].first(), 5);
    /// ```
    #[inline]
    pub fn ranged(start: T, end: T, chunk_size: ChunkSize<T>) -> Self {
        Self {
            mode: LoopMode::Ranged,
            lower: start,
            upper: end,
            chunk_size,
            index: Some(start),
            boundary: start,
            chunk_open: false,
            chunks_started: 0,
        }
    }

    /// Returns the addressing mode of this cursor.
    #[inline]
    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    /// Returns the loop's lower bound (`0` or `start`).
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower
    }

    /// Returns the loop's upper bound (`length`, exclusive, or `end`, inclusive).
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.upper
    }

    /// Returns the chunk size.
    #[inline]
    pub fn chunk_size(&self) -> ChunkSize<T> {
        self.chunk_size
    }

    /// Returns the next index to be visited, or `None` once a ranged loop
    /// ending at `T::MAX` has been exhausted.
    #[inline]
    pub fn current_index(&self) -> Option<T> {
        self.index
    }

    /// Returns the boundary of the most recent chunk. Before the first
    /// `advance_chunk` it equals the lower bound.
    #[inline]
    pub fn chunk_boundary(&self) -> T {
        self.boundary
    }

    /// Returns the number of chunks handed out so far.
    #[inline]
    pub fn chunks_started(&self) -> usize {
        self.chunks_started
    }

    /// The outer loop condition: `true` while unvisited indices remain.
    #[inline]
    pub fn has_next_chunk(&self) -> bool {
        match (self.index, self.mode) {
            (None, _) => false,
            (Some(i), LoopMode::ZeroBased) => i < self.upper,
            (Some(i), LoopMode::Ranged) => i <= self.upper,
        }
    }

    /// The outer step: advances the chunk boundary by the chunk size,
    /// clamped to the upper bound, and returns the chunk now open for
    /// stepping. Returns `None` once the loop is finished.
    pub fn advance_chunk(&mut self) -> Option<Chunk<T>> {
        if !self.has_next_chunk() {
            self.chunk_open = false;
            return None;
        }
        let first = self.index?;
        let size = self.chunk_size.get();

        let last = match self.mode {
            LoopMode::ZeroBased => {
                self.boundary = first.saturating_add_val(size).min(self.upper);
                self.boundary - T::PLUS_ONE
            }
            LoopMode::Ranged => {
                self.boundary = first
                    .saturating_add_val(size - T::PLUS_ONE)
                    .min(self.upper);
                self.boundary
            }
        };

        let chunk = Chunk::new(self.chunks_started, first, last);
        self.chunks_started += 1;
        self.chunk_open = true;
        Some(chunk)
    }

    /// The inner step: returns the current index and advances it by one,
    /// or `None` once the open chunk has been walked to its boundary.
    #[inline]
    pub fn step(&mut self) -> Option<T> {
        if !self.chunk_open {
            return None;
        }
        let Some(current) = self.index else {
            self.chunk_open = false;
            return None;
        };

        match self.mode {
            LoopMode::ZeroBased => {
                if current >= self.boundary {
                    self.chunk_open = false;
                    return None;
                }
                // `current < boundary <= T::MAX`, so this cannot overflow.
                self.index = Some(current + T::PLUS_ONE);
            }
            LoopMode::Ranged => {
                if current > self.boundary {
                    self.chunk_open = false;
                    return None;
                }
                self.index = current.checked_add_val(T::PLUS_ONE);
                if current == self.boundary {
                    self.chunk_open = false;
                }
            }
        }
        Some(current)
    }

    /// Moves the index past the open chunk without visiting its elements.
    #[inline]
    fn close_chunk(&mut self) {
        if !self.chunk_open {
            return;
        }
        self.index = match self.mode {
            LoopMode::ZeroBased => Some(self.boundary),
            LoopMode::Ranged => self.boundary.checked_add_val(T::PLUS_ONE),
        };
        self.chunk_open = false;
    }

    /// Returns the indices not yet visited as a closed interval.
    #[inline]
    pub fn remaining_span(&self) -> Option<ClosedInterval<T>> {
        if !self.has_next_chunk() {
            return None;
        }
        let first = self.index?;
        let last = match self.mode {
            LoopMode::ZeroBased => self.upper - T::PLUS_ONE,
            LoopMode::Ranged => self.upper,
        };
        Some(ClosedInterval::new_unchecked(first, last))
    }

    /// Returns the number of outer steps still to come, or `None` if that
    /// number does not fit in a `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop::{cursor::ChunkCursor, size::ChunkSize};
    /// let cursor = ChunkCursor::zero_based(10u8, ChunkSize::new(3).unwrap());
    /// assert_eq!(cursor.remaining_chunks(), Some(4));
    /// ```
    pub fn remaining_chunks(&self) -> Option<usize> {
        let Some(span) = self.remaining_span() else {
            return Some(0);
        };
        let elements = span.wide_len()?;
        let size = self.chunk_size.get().to_u128()?;
        usize::try_from(elements.div_ceil(size)).ok()
    }
}

impl<T> Iterator for ChunkCursor<T>
where
    T: ChunkIndex,
{
    type Item = Chunk<T>;

    /// Advances to the next chunk and moves the index past it. The caller
    /// iterates the returned chunk to visit its indices.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.advance_chunk()?;
        self.close_chunk();
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining_chunks() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for ChunkCursor<T> where T: ChunkIndex {}

impl<T> std::fmt::Display for ChunkCursor<T>
where
    T: ChunkIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bounds = match self.mode {
            LoopMode::ZeroBased => format!("[{}, {})", self.lower, self.upper),
            LoopMode::Ranged => format!("[{}, {}]", self.lower, self.upper),
        };
        write!(
            f,
            "ChunkCursor({} {}, chunk_size: {})",
            self.mode,
            bounds,
            self.chunk_size.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn size<T: ChunkIndex>(n: T) -> ChunkSize<T> {
        ChunkSize::new(n).unwrap()
    }

    /// Drives the cursor through its explicit outer/inner API.
    fn drive<T: ChunkIndex>(mut cursor: ChunkCursor<T>) -> (usize, Vec<T>) {
        let mut outer = 0;
        let mut visited = Vec::new();
        while cursor.has_next_chunk() {
            outer += 1;
            cursor.advance_chunk().unwrap();
            while let Some(i) = cursor.step() {
                visited.push(i);
            }
        }
        (outer, visited)
    }

    fn spans<T: ChunkIndex>(cursor: ChunkCursor<T>) -> Vec<(T, T)> {
        cursor.map(|c| (c.first(), c.last())).collect()
    }

    #[test]
    fn test_zero_based_ten_by_three() {
        let cursor = ChunkCursor::zero_based(10i32, size(3));
        assert_eq!(spans(cursor.clone()), vec![(0, 2), (3, 5), (6, 8), (9, 9)]);

        let (outer, visited) = drive(cursor);
        assert_eq!(outer, 4);
        assert_eq!(visited, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_length_yields_nothing() {
        let (outer, visited) = drive(ChunkCursor::zero_based(0u64, size(5)));
        assert_eq!(outer, 0);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_negative_length_yields_nothing() {
        let mut cursor = ChunkCursor::zero_based(-4i32, size(2));
        assert!(!cursor.has_next_chunk());
        assert_eq!(cursor.remaining_chunks(), Some(0));
        assert!(cursor.advance_chunk().is_none());
        assert!(cursor.step().is_none());
    }

    #[test]
    fn test_ranged_single_element() {
        let (outer, visited) = drive(ChunkCursor::ranged(5i32, 5, size(2)));
        assert_eq!(outer, 1);
        assert_eq!(visited, vec![5]);
    }

    #[test]
    fn test_ranged_inverted_yields_nothing() {
        let (outer, visited) = drive(ChunkCursor::ranged(6i32, 5, size(2)));
        assert_eq!(outer, 0);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_ranged_negative_bounds() {
        let cursor = ChunkCursor::ranged(-7i16, -1, size(3));
        assert_eq!(spans(cursor), vec![(-7, -5), (-4, -2), (-1, -1)]);
    }

    #[test]
    fn test_chunk_larger_than_range() {
        let cursor = ChunkCursor::zero_based(4u8, size(100));
        assert_eq!(spans(cursor), vec![(0, 3)]);
    }

    #[test]
    fn test_exact_multiple() {
        let cursor = ChunkCursor::zero_based(9usize, size(3));
        assert_eq!(spans(cursor), vec![(0, 2), (3, 5), (6, 8)]);
    }

    #[test]
    fn test_zero_based_up_to_type_max() {
        let (outer, visited) = drive(ChunkCursor::zero_based(u8::MAX, size(100)));
        assert_eq!(outer, 3);
        assert_eq!(visited.len(), 255);
        assert_eq!(visited.last(), Some(&254));
    }

    #[test]
    fn test_ranged_ending_at_type_max() {
        let mut cursor = ChunkCursor::ranged(250u8, u8::MAX, size(4));
        let (outer, visited) = drive(cursor.clone());
        assert_eq!(outer, 2);
        assert_eq!(visited, vec![250, 251, 252, 253, 254, 255]);

        // Iterator form must terminate as well.
        assert_eq!(cursor.by_ref().count(), 2);
        assert_eq!(cursor.current_index(), None);
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_ranged_full_signed_domain() {
        let cursor = ChunkCursor::ranged(i8::MIN, i8::MAX, size(i8::MAX));
        assert_eq!(cursor.remaining_chunks(), Some(3));
        let (outer, visited) = drive(cursor);
        assert_eq!(outer, 3);
        assert_eq!(visited.len(), 256);
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_boundary_is_clamped() {
        let mut cursor = ChunkCursor::zero_based(10i64, size(4));
        assert_eq!(cursor.chunk_boundary(), 0);
        cursor.next();
        assert_eq!(cursor.chunk_boundary(), 4);
        cursor.next();
        assert_eq!(cursor.chunk_boundary(), 8);
        cursor.next();
        assert_eq!(cursor.chunk_boundary(), 10);
        assert!(cursor.next().is_none());
        assert_eq!(cursor.chunk_boundary(), 10);
    }

    #[test]
    fn test_ranged_boundary_is_inclusive() {
        let mut cursor = ChunkCursor::ranged(3u32, 9, size(5));
        assert_eq!(cursor.chunk_boundary(), 3);
        cursor.advance_chunk();
        assert_eq!(cursor.chunk_boundary(), 7);
        while cursor.step().is_some() {}
        cursor.advance_chunk();
        assert_eq!(cursor.chunk_boundary(), 9);
    }

    #[test]
    fn test_step_without_open_chunk_is_none() {
        let mut cursor = ChunkCursor::zero_based(5i32, size(2));
        assert_eq!(cursor.step(), None);
        assert_eq!(cursor.current_index(), Some(0));
    }

    #[test]
    fn test_partial_step_carries_over() {
        let mut cursor = ChunkCursor::zero_based(6i32, size(3));
        cursor.advance_chunk();
        assert_eq!(cursor.step(), Some(0));

        let chunk = cursor.advance_chunk().unwrap();
        assert_eq!((chunk.first(), chunk.last()), (1, 3));
        assert_eq!(chunk.ordinal(), 1);
    }

    #[test]
    fn test_remaining_chunks_and_size_hint() {
        let mut cursor = ChunkCursor::ranged(1i32, 10, size(4));
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.next();
        assert_eq!(cursor.remaining_chunks(), Some(2));
        assert_eq!(
            cursor.remaining_span(),
            Some(ClosedInterval::new(5, 10))
        );
        cursor.next();
        cursor.next();
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert_eq!(cursor.remaining_span(), None);
    }

    #[test]
    fn test_chunk_ordinals_are_sequential() {
        let ordinals: Vec<_> = ChunkCursor::zero_based(20u16, size(6))
            .map(|c| c.ordinal())
            .collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let cursor = ChunkCursor::ranged(-3i64, 17, size(4));
        let a = drive(cursor.clone());
        let b = drive(cursor);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let cursor = ChunkCursor::zero_based(10i32, size(3));
        assert_eq!(
            cursor.to_string(),
            "ChunkCursor(ZeroBased [0, 10), chunk_size: 3)"
        );
        let cursor = ChunkCursor::ranged(1i32, 4, size(2));
        assert_eq!(
            cursor.to_string(),
            "ChunkCursor(Ranged [1, 4], chunk_size: 2)"
        );
    }

    #[test]
    fn test_random_zero_based_visits_every_index_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let length: i64 = rng.random_range(0..400);
            let chunk: i64 = rng.random_range(1..50);
            let cursor = ChunkCursor::zero_based(length, size(chunk));

            let expected_chunks = ((length + chunk - 1) / chunk) as usize;
            assert_eq!(cursor.remaining_chunks(), Some(expected_chunks));

            let (outer, visited) = drive(cursor.clone());
            assert_eq!(outer, expected_chunks);
            assert_eq!(visited, (0..length).collect::<Vec<_>>());

            for c in cursor {
                assert!(c.element_count() >= 1 && c.element_count() <= chunk);
            }
        }
    }

    #[test]
    fn test_random_ranged_visits_every_index_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let start: i32 = rng.random_range(-300..300);
            let end: i32 = start + rng.random_range(0..300);
            let chunk: i32 = rng.random_range(1..64);
            let cursor = ChunkCursor::ranged(start, end, size(chunk));

            let n = end - start + 1;
            let expected_chunks = ((n + chunk - 1) / chunk) as usize;

            let (outer, visited) = drive(cursor.clone());
            assert_eq!(outer, expected_chunks);
            assert_eq!(visited, (start..=end).collect::<Vec<_>>());

            let flattened: Vec<i32> = cursor.flat_map(|c| c.iter()).collect();
            assert_eq!(flattened, visited);
        }
    }
}
