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

//! # Logging Monitor
//!
//! Reports loop progress through the `log` facade. Entry and exit are logged
//! at `Info`; progress lines at a configurable level (default `Debug`), at
//! most once per `log_interval`. The library never installs a logger, so
//! without one these calls are no-ops.

use crate::{
    chunk::Chunk,
    cursor::ChunkCursor,
    monitor::loop_monitor::{LoopCommand, LoopMonitor},
    stats::LoopStatistics,
};
use ::log::{Level, info, log};
use chunkloop_core::num::index::ChunkIndex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    progress_level: Level,
    chunks: u64,
    elements: u64,
}

impl LogMonitor {
    pub fn new(log_interval: Duration) -> Self {
        Self::with_level(log_interval, Level::Debug)
    }

    pub fn with_level(log_interval: Duration, progress_level: Level) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            progress_level,
            chunks: 0,
            elements: 0,
        }
    }

    fn progress_line<T>(&self, chunk: &Chunk<T>, now: Instant) -> String
    where
        T: ChunkIndex,
    {
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        format!(
            "{:<9} | chunk {:<10} | first {:<14} | done {:<10} | visited {:<14}",
            format!("{:.1}s", elapsed),
            chunk.ordinal(),
            chunk.first(),
            self.chunks,
            self.elements
        )
    }

    #[inline(always)]
    fn log_line<T>(&mut self, chunk: &Chunk<T>)
    where
        T: ChunkIndex,
    {
        let now = Instant::now();
        log!(target: "chunkloop", self.progress_level, "{}", self.progress_line(chunk, now));
        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, level: {})",
            self.log_interval.as_secs(),
            self.progress_level
        )
    }
}

impl<T> LoopMonitor<T> for LogMonitor
where
    T: ChunkIndex,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_loop(&mut self, cursor: &ChunkCursor<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.chunks = 0;
        self.elements = 0;
        info!(target: "chunkloop", "Entering {}", cursor);
    }

    fn on_chunk(&mut self, chunk: &Chunk<T>) {
        if self.last_log_time.elapsed() >= self.log_interval {
            self.log_line(chunk);
        }
        self.chunks = self.chunks.saturating_add(1);
        self.elements = self
            .elements
            .saturating_add(chunk.element_count().to_u64().unwrap_or(u64::MAX));
    }

    fn on_exit_loop(&mut self, statistics: &LoopStatistics) {
        info!(
            target: "chunkloop",
            "Loop finished: {} chunks, {} elements in {:.3}s",
            statistics.chunks_processed,
            statistics.elements_visited,
            statistics.duration.as_secs_f64()
        );
    }

    fn loop_command(&self) -> LoopCommand {
        LoopCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::ChunkSize;

    #[test]
    fn test_counts_chunks_and_elements() {
        let mut mon = LogMonitor::new(Duration::ZERO);
        let cursor = ChunkCursor::zero_based(10i32, ChunkSize::new(3).unwrap());
        mon.on_enter_loop(&cursor);
        for chunk in cursor {
            mon.on_chunk(&chunk);
        }
        assert_eq!(mon.chunks, 4);
        assert_eq!(mon.elements, 10);
        assert_eq!(LoopMonitor::<i32>::loop_command(&mon), LoopCommand::Continue);
    }

    #[test]
    fn test_progress_line_reports_completed_chunks() {
        let mut mon = LogMonitor::new(Duration::from_secs(3600));
        let cursor = ChunkCursor::zero_based(10i32, ChunkSize::new(3).unwrap());
        mon.on_enter_loop(&cursor);
        let chunks: Vec<_> = cursor.collect();
        mon.on_chunk(&chunks[0]);
        mon.on_chunk(&chunks[1]);

        let line = mon.progress_line(&chunks[2], mon.start_time);
        assert!(line.starts_with("0.0s"));
        assert!(line.contains("chunk 2 "));
        assert!(line.contains("first 6 "));
        assert!(line.contains("done 2 "));
        assert!(line.contains("visited 6 "));
    }

    #[test]
    fn test_progress_updates_last_log_time() {
        let mut mon = LogMonitor::new(Duration::ZERO);
        let before = mon.last_log_time;
        let chunk = ChunkCursor::zero_based(1u8, ChunkSize::new(1).unwrap())
            .next()
            .unwrap();
        mon.on_chunk(&chunk);
        assert!(mon.last_log_time >= before);
    }

    #[test]
    fn test_display() {
        let mon = LogMonitor::with_level(Duration::from_secs(2), Level::Trace);
        assert_eq!(mon.to_string(), "LogMonitor(log_interval: 2s, level: TRACE)");
        assert_eq!(
            LogMonitor::default().to_string(),
            "LogMonitor(log_interval: 1s, level: DEBUG)"
        );
    }
}
