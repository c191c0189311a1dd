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

//! # Loop Monitors
//!
//! Observers and controllers consulted once per chunk. Checking an interrupt
//! flag, a clock or a progress logger once per chunk instead of once per
//! element is the reason to chunk a loop in the first place.
//!
//! ## Submodules
//!
//! - `loop_monitor`: Core trait (`LoopMonitor<T>`) and the `LoopCommand` enum.
//! - `composite`: Aggregate multiple monitors into a single composite.
//! - `interrupt`: Atomically-driven interrupt monitor for cross-thread stops.
//! - `time_limit`: Wall-clock budget with chunk-filtered clock checks.
//! - `chunk_limit`: Stop after a fixed number of chunks.
//! - `log`: Progress reporting through the `log` facade.
//! - `no_op`: A monitor that never interferes.

pub mod chunk_limit;
pub mod composite;
pub mod interrupt;
pub mod log;
pub mod loop_monitor;
pub mod no_op;
pub mod time_limit;
