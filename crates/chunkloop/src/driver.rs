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

//! # Chunked Loop Drivers
//!
//! Higher-order functions that run a caller-supplied body once per index,
//! split into chunks.
//!
//! - `for_each_index` / `for_each_index_in`: just the per-element body.
//! - `for_each_chunk` / `for_each_chunk_in`: an `outer` closure once per
//!   chunk before its elements, and an `inner` closure once per element.
//! - `ChunkedLoop`: a configured loop that consults a `LoopMonitor` before
//!   every chunk, propagates body errors, collects `LoopStatistics`, and
//!   supports per-chunk divide-and-recombine via `map_reduce`.
//!
//! ## Usage
//!
//! ```rust
//! use chunkloop::{driver::for_each_chunk, size::ChunkSize};
//!
//! let mut checks = 0;
//! let mut sum = 0u64;
//! for_each_chunk(
//!     10u64,
//!     ChunkSize::new(3).unwrap(),
//!     |_chunk| checks += 1,
//!     |i| sum += i,
//! );
//! assert_eq!(checks, 4);
//! assert_eq!(sum, 45);
//! ```

use crate::{
    chunk::Chunk,
    cursor::ChunkCursor,
    monitor::loop_monitor::{LoopCommand, LoopMonitor},
    outcome::{LoopOutcome, Termination},
    size::ChunkSize,
    stats::{LoopStatistics, LoopStatisticsBuilder},
};
use chunkloop_core::num::index::ChunkIndex;
use log::{debug, trace};
use std::{convert::Infallible, time::Instant};

#[inline]
fn drive_chunks<T, O, I>(mut cursor: ChunkCursor<T>, mut outer: O, mut inner: I)
where
    T: ChunkIndex,
    O: FnMut(&Chunk<T>),
    I: FnMut(T),
{
    while let Some(chunk) = cursor.advance_chunk() {
        outer(&chunk);
        while let Some(index) = cursor.step() {
            inner(index);
        }
    }
}

/// Runs `body` once for every index in `[0, length)`, in increasing order.
///
/// # Examples
///
/// ```rust
/// # use chunkloop::{driver::for_each_index, size::ChunkSize};
/// let mut seen = Vec::new();
/// for_each_index(5i32, ChunkSize::new(2).unwrap(), |i| seen.push(i));
/// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
/// ```
#[inline]
pub fn for_each_index<T, F>(length: T, chunk_size: ChunkSize<T>, body: F)
where
    T: ChunkIndex,
    F: FnMut(T),
{
    drive_chunks(ChunkCursor::zero_based(length, chunk_size), |_| {}, body);
}

/// Runs `body` once for every index in `[start, end]`, in increasing order.
#[inline]
pub fn for_each_index_in<T, F>(start: T, end: T, chunk_size: ChunkSize<T>, body: F)
where
    T: ChunkIndex,
    F: FnMut(T),
{
    drive_chunks(ChunkCursor::ranged(start, end, chunk_size), |_| {}, body);
}

/// Runs `outer` once per chunk of `[0, length)` and `inner` once per index.
#[inline]
pub fn for_each_chunk<T, O, I>(length: T, chunk_size: ChunkSize<T>, outer: O, inner: I)
where
    T: ChunkIndex,
    O: FnMut(&Chunk<T>),
    I: FnMut(T),
{
    drive_chunks(ChunkCursor::zero_based(length, chunk_size), outer, inner);
}

/// Runs `outer` once per chunk of `[start, end]` and `inner` once per index.
///
/// # Examples
///
/// ```rust
/// # use chunkloop::{driver::for_each_chunk_in, size::ChunkSize};
/// let mut firsts = Vec::new();
/// let mut count = 0;
/// for_each_chunk_in(
///     -4i64,
///     4,
///     ChunkSize::new(4).unwrap(),
///     |chunk| firsts.push(chunk.first()),
///     |_| count += 1,
/// );
/// assert_eq!(firsts, vec![-4, 0, 4]);
/// assert_eq!(count, 9);
/// ```
#[inline]
pub fn for_each_chunk_in<T, O, I>(start: T, end: T, chunk_size: ChunkSize<T>, outer: O, inner: I)
where
    T: ChunkIndex,
    O: FnMut(&Chunk<T>),
    I: FnMut(T),
{
    drive_chunks(ChunkCursor::ranged(start, end, chunk_size), outer, inner);
}

/// A chunked loop over a fixed range, ready to be run under a monitor.
///
/// Running does not consume the loop; every run starts from the lower bound
/// and visits the same sequence of indices.
///
/// # Examples
///
/// ```rust
/// use chunkloop::{driver::ChunkedLoop, monitor::interrupt::InterruptMonitor, size::ChunkSize};
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// let stop = AtomicBool::new(false);
/// let work = ChunkedLoop::zero_based(10u32, ChunkSize::new(3).unwrap());
///
/// let mut visited = Vec::new();
/// let outcome = work.run(&mut InterruptMonitor::new(&stop), |i| {
///     visited.push(i);
///     if i == 4 {
///         stop.store(true, Ordering::Relaxed);
///     }
/// });
///
/// // The flag is noticed at the next chunk boundary.
/// assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
/// assert_eq!(outcome.resume_at(), Some(&6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedLoop<T> {
    cursor: ChunkCursor<T>,
}

impl<T> ChunkedLoop<T>
where
    T: ChunkIndex,
{
    /// A loop over `[0, length)`.
    #[inline]
    pub fn zero_based(length: T, chunk_size: ChunkSize<T>) -> Self {
        Self::from_cursor(ChunkCursor::zero_based(length, chunk_size))
    }

    /// A loop over `[start, end]`.
    #[inline]
    pub fn ranged(start: T, end: T, chunk_size: ChunkSize<T>) -> Self {
        Self::from_cursor(ChunkCursor::ranged(start, end, chunk_size))
    }

    /// A loop continuing wherever `cursor` currently stands.
    #[inline]
    pub fn from_cursor(cursor: ChunkCursor<T>) -> Self {
        Self { cursor }
    }

    /// The cursor each run starts from.
    #[inline]
    pub fn cursor(&self) -> &ChunkCursor<T> {
        &self.cursor
    }

    /// Runs `body` once per index, consulting `monitor` before every chunk.
    pub fn run<M, F>(&self, monitor: &mut M, mut body: F) -> LoopOutcome<T>
    where
        M: LoopMonitor<T> + ?Sized,
        F: FnMut(T),
    {
        let result = self.try_run(monitor, |index| {
            body(index);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like `run`, but stops at the first error returned by `body` and
    /// propagates it. The monitor still receives `on_exit_loop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop::{driver::ChunkedLoop, monitor::no_op::NoOpMonitor, size::ChunkSize};
    /// let work = ChunkedLoop::zero_based(100usize, ChunkSize::new(8).unwrap());
    /// let result = work.try_run(&mut NoOpMonitor::new(), |i| {
    ///     if i == 42 { Err(format!("bad element {}", i)) } else { Ok(()) }
    /// });
    /// assert_eq!(result.unwrap_err(), "bad element 42");
    /// ```
    pub fn try_run<M, E, F>(&self, monitor: &mut M, mut body: F) -> Result<LoopOutcome<T>, E>
    where
        M: LoopMonitor<T> + ?Sized,
        F: FnMut(T) -> Result<(), E>,
    {
        let start_time = Instant::now();
        let mut cursor = self.cursor.clone();
        let mut chunks_processed = 0u64;
        let mut elements_visited = 0u64;

        let statistics = |chunks: u64, elements: u64| -> LoopStatistics {
            LoopStatisticsBuilder::new()
                .chunks_processed(chunks)
                .elements_visited(elements)
                .duration(start_time.elapsed())
                .build()
        };

        monitor.on_enter_loop(&cursor);

        let termination = loop {
            let Some(remaining) = cursor.remaining_span() else {
                break Termination::Completed;
            };
            if let LoopCommand::Terminate(reason) = monitor.loop_command() {
                debug!(
                    target: "chunkloop",
                    "{} stopped the loop before index {}: {}",
                    monitor.name(),
                    remaining.first(),
                    reason
                );
                break Termination::Interrupted {
                    reason,
                    resume_at: remaining.first(),
                };
            }
            let Some(chunk) = cursor.advance_chunk() else {
                break Termination::Completed;
            };

            monitor.on_chunk(&chunk);
            while let Some(index) = cursor.step() {
                elements_visited += 1;
                if let Err(err) = body(index) {
                    trace!(target: "chunkloop", "Loop body failed at index {}", index);
                    monitor.on_exit_loop(&statistics(chunks_processed, elements_visited));
                    return Err(err);
                }
            }
            chunks_processed += 1;
        };

        let statistics = statistics(chunks_processed, elements_visited);
        monitor.on_exit_loop(&statistics);
        Ok(LoopOutcome::new(termination, statistics))
    }

    /// Divide-and-recombine: computes one partial result per chunk with
    /// `map` and folds the partials in chunk order with `reduce`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop::{driver::ChunkedLoop, size::ChunkSize};
    /// let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    /// let work = ChunkedLoop::zero_based(data.len(), ChunkSize::new(4).unwrap());
    ///
    /// let total = work.map_reduce(
    ///     0.0,
    ///     |chunk| chunk.iter().map(|i| data[i]).sum::<f64>(),
    ///     |acc, partial| acc + partial,
    /// );
    /// assert_eq!(total, 45.0);
    /// ```
    pub fn map_reduce<A, B, Map, Reduce>(&self, init: B, mut map: Map, mut reduce: Reduce) -> B
    where
        Map: FnMut(&Chunk<T>) -> A,
        Reduce: FnMut(B, A) -> B,
    {
        self.cursor
            .clone()
            .fold(init, |acc, chunk| reduce(acc, map(&chunk)))
    }
}

impl<T> std::fmt::Display for ChunkedLoop<T>
where
    T: ChunkIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChunkedLoop({})", self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{
        chunk_limit::ChunkLimitMonitor, composite::CompositeMonitor,
        interrupt::InterruptMonitor, no_op::NoOpMonitor,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn size<T: ChunkIndex>(n: T) -> ChunkSize<T> {
        ChunkSize::new(n).unwrap()
    }

    #[test]
    fn test_for_each_chunk_ten_by_three() {
        let mut chunks = Vec::new();
        let mut visited = Vec::new();
        for_each_chunk(
            10i32,
            size(3),
            |c| chunks.push((c.first(), c.last() + 1)),
            |i| visited.push(i),
        );
        assert_eq!(chunks, vec![(0, 3), (3, 6), (6, 9), (9, 10)]);
        assert_eq!(visited.len(), 10);
        assert_eq!(visited, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_length_runs_nothing() {
        let mut outer = 0;
        let mut inner = 0;
        for_each_chunk(0u32, size(4), |_| outer += 1, |_| inner += 1);
        assert_eq!((outer, inner), (0, 0));
    }

    #[test]
    fn test_ranged_single_element() {
        let mut outer = 0;
        let mut visited = Vec::new();
        for_each_chunk_in(5i32, 5, size(2), |_| outer += 1, |i| visited.push(i));
        assert_eq!(outer, 1);
        assert_eq!(visited, vec![5]);
    }

    #[test]
    fn test_for_each_index_in_reaches_type_max() {
        let mut visited = Vec::new();
        for_each_index_in(i16::MAX - 4, i16::MAX, size(2), |i| visited.push(i));
        assert_eq!(visited, ((i16::MAX - 4)..=i16::MAX).collect::<Vec<_>>());
    }

    #[test]
    fn test_outer_runs_before_its_elements() {
        let events = std::cell::RefCell::new(Vec::new());
        for_each_chunk(
            4u8,
            size(2),
            |c| events.borrow_mut().push(format!("chunk {}", c.ordinal())),
            |i| events.borrow_mut().push(format!("i {}", i)),
        );
        assert_eq!(
            events.into_inner(),
            vec!["chunk 0", "i 0", "i 1", "chunk 1", "i 2", "i 3"]
        );
    }

    #[test]
    fn test_run_completes_with_statistics() {
        let work = ChunkedLoop::zero_based(10i64, size(3));
        let mut sum = 0;
        let outcome = work.run(&mut NoOpMonitor::new(), |i| sum += i);

        assert_eq!(sum, 45);
        assert!(outcome.is_completed());
        assert_eq!(outcome.statistics().chunks_processed, 4);
        assert_eq!(outcome.statistics().elements_visited, 10);
    }

    #[test]
    fn test_run_is_repeatable() {
        let work = ChunkedLoop::ranged(-5i32, 12, size(4));
        let mut first = Vec::new();
        let mut second = Vec::new();
        work.run(&mut NoOpMonitor::new(), |i| first.push(i));
        work.run(&mut NoOpMonitor::new(), |i| second.push(i));
        assert_eq!(first, second);
        assert_eq!(first, (-5..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_interrupt_and_resume() {
        let stop = AtomicBool::new(false);
        let work = ChunkedLoop::zero_based(10u64, size(3));

        let mut visited = Vec::new();
        let outcome = work.run(&mut InterruptMonitor::new(&stop), |i| {
            visited.push(i);
            if i == 4 {
                stop.store(true, Ordering::Relaxed);
            }
        });

        assert!(outcome.is_interrupted());
        assert_eq!(
            outcome.termination,
            Termination::Interrupted {
                reason: "Interrupt signal received".to_string(),
                resume_at: 6,
            }
        );
        assert_eq!(outcome.statistics().chunks_processed, 2);
        assert_eq!(outcome.statistics().elements_visited, 6);

        let resume_at = *outcome.resume_at().unwrap();
        let rest = ChunkedLoop::ranged(resume_at, 9, size(3));
        let outcome = rest.run(&mut NoOpMonitor::new(), |i| visited.push(i));
        assert!(outcome.is_completed());
        assert_eq!(visited, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_interrupt_before_first_chunk() {
        let stop = AtomicBool::new(true);
        let mut calls = 0;
        let outcome = ChunkedLoop::ranged(3i8, 7, size(2))
            .run(&mut InterruptMonitor::new(&stop), |_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(outcome.resume_at(), Some(&3));
    }

    #[test]
    fn test_monitor_not_consulted_for_empty_loop() {
        let stop = AtomicBool::new(true);
        let outcome =
            ChunkedLoop::zero_based(0i32, size(2)).run(&mut InterruptMonitor::new(&stop), |_| {});
        assert!(outcome.is_completed());
    }

    #[test]
    fn test_chunk_limit_slices_the_loop() {
        let work = ChunkedLoop::zero_based(100u32, size(10));
        let mut visited = Vec::new();
        let outcome = work.run(&mut ChunkLimitMonitor::new(3), |i| visited.push(i));
        assert_eq!(visited, (0..30).collect::<Vec<_>>());
        assert_eq!(outcome.resume_at(), Some(&30));
    }

    #[test]
    fn test_try_run_propagates_first_error() {
        #[derive(Debug, PartialEq)]
        struct BadIndex(i32);

        let work = ChunkedLoop::zero_based(20i32, size(6));
        let mut visited = Vec::new();
        let result = work.try_run(&mut NoOpMonitor::new(), |i| {
            visited.push(i);
            if i >= 8 { Err(BadIndex(i)) } else { Ok(()) }
        });

        assert_eq!(result, Err(BadIndex(8)));
        assert_eq!(visited, (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_try_run_notifies_exit_on_error() {
        struct ExitCounter<'c>(&'c std::cell::Cell<u64>);
        impl<'c> LoopMonitor<u16> for ExitCounter<'c> {
            fn name(&self) -> &str {
                "ExitCounter"
            }
            fn on_enter_loop(&mut self, _cursor: &ChunkCursor<u16>) {}
            fn on_chunk(&mut self, _chunk: &Chunk<u16>) {}
            fn on_exit_loop(&mut self, statistics: &LoopStatistics) {
                self.0.set(statistics.elements_visited);
            }
            fn loop_command(&self) -> LoopCommand {
                LoopCommand::Continue
            }
        }

        let seen = std::cell::Cell::new(0);
        let work = ChunkedLoop::zero_based(10u16, size(4));
        let result: Result<_, &str> = work.try_run(&mut ExitCounter(&seen), |i| {
            if i == 5 { Err("boom") } else { Ok(()) }
        });
        assert!(result.is_err());
        assert_eq!(seen.get(), 6);
    }

    #[test]
    fn test_run_with_dyn_and_composite_monitor() {
        let stop = AtomicBool::new(false);
        let mut composite = CompositeMonitor::<usize>::new();
        composite.add_monitor(InterruptMonitor::new(&stop));
        composite.add_monitor(ChunkLimitMonitor::new(2));

        let monitor: &mut dyn LoopMonitor<usize> = &mut composite;
        let outcome = ChunkedLoop::zero_based(50usize, size(5)).run(monitor, |_| {});
        assert_eq!(outcome.resume_at(), Some(&10));
    }

    #[test]
    fn test_map_reduce_matches_sequential_fold() {
        let data: Vec<i64> = (0..97).map(|x| (x * 37) % 11 - 5).collect();
        let work = ChunkedLoop::zero_based(data.len(), size(10));

        let partials = work.map_reduce(Vec::new(), |c| c.element_count(), |mut acc, n| {
            acc.push(n);
            acc
        });
        assert_eq!(partials, vec![10, 10, 10, 10, 10, 10, 10, 10, 10, 7]);

        let total = work.map_reduce(
            0i64,
            |c| c.iter().map(|i| data[i]).sum::<i64>(),
            |acc, part| acc + part,
        );
        assert_eq!(total, data.iter().sum::<i64>());
    }

    #[test]
    fn test_display() {
        let work = ChunkedLoop::zero_based(8u8, size(2));
        assert_eq!(
            work.to_string(),
            "ChunkedLoop(ChunkCursor(ZeroBased [0, 8), chunk_size: 2))"
        );
    }

    #[test]
    fn test_random_outer_count_and_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..300 {
            let start: i64 = rng.random_range(-1000..1000);
            let len: i64 = rng.random_range(0..500);
            let chunk: i64 = rng.random_range(1..80);

            let mut outer = 0i64;
            let mut visited = Vec::new();
            if len > 0 {
                for_each_chunk_in(start, start + len - 1, size(chunk), |_| outer += 1, |i| {
                    visited.push(i)
                });
            }
            assert_eq!(outer, (len + chunk - 1) / chunk);
            assert_eq!(visited, (start..start + len).collect::<Vec<_>>());

            let mut zero_based = Vec::new();
            for_each_index(len, size(chunk), |i| zero_based.push(i));
            assert_eq!(zero_based, (0..len).collect::<Vec<_>>());
        }
    }
}
