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

/// Statistics collected while running a chunked loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopStatistics {
    /// Number of chunks whose elements were processed.
    pub chunks_processed: u64,
    /// Number of times the loop body was invoked.
    pub elements_visited: u64,
    /// Wall-clock duration of the loop.
    pub duration: std::time::Duration,
}

impl LoopStatistics {
    /// Average number of elements per processed chunk, `0.0` if no chunk ran.
    #[inline]
    pub fn mean_chunk_len(&self) -> f64 {
        if self.chunks_processed == 0 {
            return 0.0;
        }
        self.elements_visited as f64 / self.chunks_processed as f64
    }
}

impl std::fmt::Display for LoopStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Loop Statistics:")?;
        writeln!(f, "  Chunks Processed: {}", self.chunks_processed)?;
        writeln!(f, "  Elements Visited: {}", self.elements_visited)?;
        writeln!(
            f,
            "  Duration (secs): {:.3}",
            self.duration.as_secs_f64()
        )
    }
}

/// Builder for `LoopStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopStatisticsBuilder {
    chunks_processed: u64,
    elements_visited: u64,
    duration: std::time::Duration,
}

impl Default for LoopStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopStatisticsBuilder {
    /// Creates a new `LoopStatisticsBuilder` with zeroed counters.
    #[inline]
    pub fn new() -> Self {
        Self {
            chunks_processed: 0,
            elements_visited: 0,
            duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of processed chunks.
    #[inline]
    pub fn chunks_processed(mut self, chunks_processed: u64) -> Self {
        self.chunks_processed = chunks_processed;
        self
    }

    /// Sets the number of visited elements.
    #[inline]
    pub fn elements_visited(mut self, elements_visited: u64) -> Self {
        self.elements_visited = elements_visited;
        self
    }

    /// Sets the loop duration.
    #[inline]
    pub fn duration(mut self, duration: std::time::Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Builds the `LoopStatistics` instance.
    #[inline]
    pub fn build(self) -> LoopStatistics {
        LoopStatistics {
            chunks_processed: self.chunks_processed,
            elements_visited: self.elements_visited,
            duration: self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoopStatistics, LoopStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = LoopStatisticsBuilder::new()
            .chunks_processed(4)
            .elements_visited(10)
            .duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.chunks_processed, 4);
        assert_eq!(stats.elements_visited, 10);
        assert_eq!(stats.duration, Duration::from_millis(1234));
        assert_eq!(stats.mean_chunk_len(), 2.5);
    }

    #[test]
    fn test_default_is_zeroed() {
        let stats = LoopStatistics::default();
        assert_eq!(stats, LoopStatisticsBuilder::default().build());
        assert_eq!(stats.mean_chunk_len(), 0.0);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = LoopStatistics {
            chunks_processed: 3,
            elements_visited: 7,
            duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Loop Statistics:"), "missing header");
        assert!(rendered.contains("Chunks Processed: 3"));
        assert!(rendered.contains("Elements Visited: 7"));
        assert!(
            rendered.contains("Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
