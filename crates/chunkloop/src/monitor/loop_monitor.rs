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

use crate::{chunk::Chunk, cursor::ChunkCursor, stats::LoopStatistics};
use chunkloop_core::num::index::ChunkIndex;

/// Instruction returned by a monitor before each chunk.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum LoopCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for LoopCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopCommand::Continue => write!(f, "Continue"),
            LoopCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for observing and controlling a chunked loop.
///
/// Methods take `&mut self`; monitors are assumed single-threaded. Keep the
/// callbacks light, they run on the loop's thread between chunks.
pub trait LoopMonitor<T>
where
    T: ChunkIndex,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first chunk.
    fn on_enter_loop(&mut self, cursor: &ChunkCursor<T>);
    /// Called when a chunk is about to be processed.
    fn on_chunk(&mut self, chunk: &Chunk<T>);
    /// Called once after the loop stopped, whether completed or interrupted.
    fn on_exit_loop(&mut self, statistics: &LoopStatistics);
    /// Consulted before every chunk.
    fn loop_command(&self) -> LoopCommand;
}

impl<T> std::fmt::Debug for dyn LoopMonitor<T> + '_
where
    T: ChunkIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoopMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn LoopMonitor<T> + '_
where
    T: ChunkIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoopMonitor({})", self.name())
    }
}

impl<T, M> LoopMonitor<T> for &mut M
where
    T: ChunkIndex,
    M: LoopMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_loop(&mut self, cursor: &ChunkCursor<T>) {
        (**self).on_enter_loop(cursor)
    }

    fn on_chunk(&mut self, chunk: &Chunk<T>) {
        (**self).on_chunk(chunk)
    }

    fn on_exit_loop(&mut self, statistics: &LoopStatistics) {
        (**self).on_exit_loop(statistics)
    }

    fn loop_command(&self) -> LoopCommand {
        (**self).loop_command()
    }
}
