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

use crate::stats::LoopStatistics;

/// Why a chunked loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination<T> {
    /// Every index of the range was visited.
    Completed,
    /// A monitor requested termination before the next chunk started.
    Interrupted {
        /// The reason reported by the monitor.
        reason: String,
        /// The first index that was not visited. Restarting an explicit-range
        /// loop at this index visits exactly the remaining elements.
        resume_at: T,
    },
}

impl<T> std::fmt::Display for Termination<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Completed => write!(f, "Completed"),
            Termination::Interrupted { reason, resume_at } => {
                write!(f, "Interrupted at {}: {}", resume_at, reason)
            }
        }
    }
}

/// The result of running a chunked loop to completion or interruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopOutcome<T> {
    pub termination: Termination<T>,
    pub statistics: LoopStatistics,
}

impl<T> LoopOutcome<T> {
    #[inline]
    pub fn new(termination: Termination<T>, statistics: LoopStatistics) -> Self {
        Self {
            termination,
            statistics,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self.termination, Termination::Completed)
    }

    #[inline]
    pub fn is_interrupted(&self) -> bool {
        matches!(self.termination, Termination::Interrupted { .. })
    }

    /// Returns the first unvisited index if the loop was interrupted.
    #[inline]
    pub fn resume_at(&self) -> Option<&T> {
        match &self.termination {
            Termination::Completed => None,
            Termination::Interrupted { resume_at, .. } => Some(resume_at),
        }
    }

    #[inline]
    pub fn termination(&self) -> &Termination<T> {
        &self.termination
    }

    #[inline]
    pub fn statistics(&self) -> &LoopStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for LoopOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} chunks, {} elements)",
            self.termination, self.statistics.chunks_processed, self.statistics.elements_visited
        )
    }
}
