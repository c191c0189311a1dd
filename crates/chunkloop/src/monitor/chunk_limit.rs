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

use crate::{
    chunk::Chunk,
    cursor::ChunkCursor,
    monitor::loop_monitor::{LoopCommand, LoopMonitor},
    stats::LoopStatistics,
};
use chunkloop_core::num::index::ChunkIndex;

/// A monitor that terminates the loop once a fixed number of chunks has run.
///
/// Useful for processing a long range in bounded slices: run, record
/// `resume_at`, and continue later from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkLimitMonitor {
    chunks_seen: u64,
    chunk_limit: u64,
}

impl ChunkLimitMonitor {
    /// Creates a new `ChunkLimitMonitor`.
    #[inline]
    pub fn new(chunk_limit: u64) -> Self {
        Self {
            chunks_seen: 0,
            chunk_limit,
        }
    }

    /// Checks if the chunk limit has been reached.
    #[inline]
    fn reached_limit(&self) -> bool {
        self.chunks_seen >= self.chunk_limit
    }
}

impl<T> LoopMonitor<T> for ChunkLimitMonitor
where
    T: ChunkIndex,
{
    fn name(&self) -> &str {
        "ChunkLimitMonitor"
    }

    fn on_enter_loop(&mut self, _cursor: &ChunkCursor<T>) {
        self.chunks_seen = 0;
    }

    fn on_chunk(&mut self, _chunk: &Chunk<T>) {
        self.chunks_seen = self.chunks_seen.saturating_add(1);
    }

    fn on_exit_loop(&mut self, _statistics: &LoopStatistics) {}

    fn loop_command(&self) -> LoopCommand {
        if self.reached_limit() {
            LoopCommand::Terminate("chunk limit reached".to_string())
        } else {
            LoopCommand::Continue
        }
    }
}
