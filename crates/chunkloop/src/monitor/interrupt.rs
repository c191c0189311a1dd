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
use std::sync::atomic::{AtomicBool, Ordering};

/// A loop monitor that checks an atomic boolean flag to determine
/// whether the loop should be interrupted.
///
/// The flag is read once per chunk, which is the point of chunking a long
/// loop: a signal handler or another thread sets the flag and the loop stops
/// at the next chunk boundary.
#[derive(Debug, Clone)]
pub struct InterruptMonitor<'a> {
    stop_flag: &'a AtomicBool,
}

impl<'a> InterruptMonitor<'a> {
    /// Creates a new `InterruptMonitor` that monitors the given atomic boolean flag.
    /// The loop will be terminated if the flag is set to `true`.
    #[inline(always)]
    pub fn new(stop_flag: &'a AtomicBool) -> Self {
        Self { stop_flag }
    }
}

impl<'a, T> LoopMonitor<T> for InterruptMonitor<'a>
where
    T: ChunkIndex,
{
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    fn on_enter_loop(&mut self, _cursor: &ChunkCursor<T>) {}
    fn on_chunk(&mut self, _chunk: &Chunk<T>) {}
    fn on_exit_loop(&mut self, _statistics: &LoopStatistics) {}

    fn loop_command(&self) -> LoopCommand {
        if self.stop_flag.load(Ordering::Relaxed) {
            LoopCommand::Terminate("Interrupt signal received".to_string())
        } else {
            LoopCommand::Continue
        }
    }
}
