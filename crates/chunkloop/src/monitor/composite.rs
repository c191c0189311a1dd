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

/// A composite monitor that aggregates multiple monitors and forwards events to all of them.
///
/// The first monitor (in insertion order) requesting termination wins.
///
/// # Examples
///
/// ```rust
/// use chunkloop::monitor::{
///     composite::CompositeMonitor, interrupt::InterruptMonitor, log::LogMonitor,
/// };
/// use std::sync::atomic::AtomicBool;
///
/// let flag = AtomicBool::new(false);
/// let mut monitor = CompositeMonitor::<u64>::new();
/// monitor.add_monitor(InterruptMonitor::new(&flag));
/// monitor.add_monitor(LogMonitor::default());
/// assert_eq!(monitor.len(), 2);
/// ```
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn LoopMonitor<T> + 'a>>,
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: ChunkIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: ChunkIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: ChunkIndex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: ChunkIndex,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: LoopMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn LoopMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn LoopMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: ChunkIndex,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn LoopMonitor<T> + 'a>>,
    {
        CompositeMonitor {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> LoopMonitor<T> for CompositeMonitor<'a, T>
where
    T: ChunkIndex,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_loop(&mut self, cursor: &ChunkCursor<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_loop(cursor);
        }
    }

    fn on_chunk(&mut self, chunk: &Chunk<T>) {
        for monitor in &mut self.monitors {
            monitor.on_chunk(chunk);
        }
    }

    fn on_exit_loop(&mut self, statistics: &LoopStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_loop(statistics);
        }
    }

    fn loop_command(&self) -> LoopCommand {
        for monitor in &self.monitors {
            if let LoopCommand::Terminate(reason) = monitor.loop_command() {
                return LoopCommand::Terminate(reason);
            }
        }
        LoopCommand::Continue
    }
}
