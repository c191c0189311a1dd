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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget on a chunked loop. The clock is read before a
//! chunk only when `(chunks & clock_check_mask) == 0`.
//!
//! ## Usage
//!
//! ```rust
//! use chunkloop::monitor::time_limit::TimeLimitMonitor;
//! use chunkloop::monitor::loop_monitor::{LoopCommand, LoopMonitor};
//! use std::time::Duration;
//!
//! let monitor = TimeLimitMonitor::new(Duration::from_secs(5));
//! assert_eq!(LoopMonitor::<i64>::loop_command(&monitor), LoopCommand::Continue);
//! ```

use crate::{
    chunk::Chunk,
    cursor::ChunkCursor,
    monitor::loop_monitor::{LoopCommand, LoopMonitor},
    stats::LoopStatistics,
};
use chunkloop_core::num::index::ChunkIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    clock_check_mask: u64,
    chunks: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
}

impl TimeLimitMonitor {
    /// Default mask: check the clock before every chunk.
    const DEFAULT_CHUNK_CLOCK_CHECK_MASK: u64 = 0;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_CHUNK_CLOCK_CHECK_MASK)
    }

    /// Checks the clock only every `2^k` chunks, where `clock_check_mask = 2^k - 1`.
    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            chunks: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn time_limit(&self) -> std::time::Duration {
        self.time_limit
    }
}

impl std::fmt::Display for TimeLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimeLimitMonitor(time_limit: {:.3}s, clock_check_mask: {})",
            self.time_limit.as_secs_f64(),
            self.clock_check_mask
        )
    }
}

impl<T> LoopMonitor<T> for TimeLimitMonitor
where
    T: ChunkIndex,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_loop(&mut self, _cursor: &ChunkCursor<T>) {
        self.start_time = std::time::Instant::now();
        self.chunks = 0;
    }

    #[inline(always)]
    fn on_chunk(&mut self, _chunk: &Chunk<T>) {
        self.chunks = self.chunks.wrapping_add(1);
    }

    fn on_exit_loop(&mut self, _statistics: &LoopStatistics) {}

    #[inline(always)]
    fn loop_command(&self) -> LoopCommand {
        if (self.chunks & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return LoopCommand::Terminate("time limit reached".to_string());
        }
        LoopCommand::Continue
    }
}
