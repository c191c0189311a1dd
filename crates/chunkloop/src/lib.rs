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

//! # Chunkloop
//!
//! Splits a linear iteration range into fixed-size contiguous chunks so that
//! long numeric loops can run periodic work (an interrupt check, a clock
//! read, a progress line, a partial recombination) once per chunk instead of
//! once per element.
//!
//! ## Modules
//!
//! - `cursor`: `ChunkCursor<T>`, the explicit two-level iterator with
//!   zero-based (`[0, length)`) and explicit-range (`[start, end]`) modes.
//! - `chunk`: `Chunk<T>`, one contiguous batch of indices.
//! - `size`: `ChunkSize<T>`, a validated positive chunk size.
//! - `driver`: Closure-based drivers (`for_each_index`, `for_each_chunk`,
//!   and their ranged variants) and `ChunkedLoop<T>` with monitoring,
//!   error propagation and `map_reduce`.
//! - `monitor`: Per-chunk observers and controllers (interrupt flag, time
//!   limit, chunk limit, logging, composite).
//! - `outcome` / `stats`: How a monitored loop ended and what it did.
//! - `error`: `ChunkError`.
//!
//! ## Example
//!
//! ```rust
//! use chunkloop::{driver::for_each_chunk, size::ChunkSize};
//!
//! let mut checks = 0;
//! let mut odd = 0u64;
//!
//! for_each_chunk(
//!     1_000_000u64,
//!     ChunkSize::default(),
//!     |_chunk| checks += 1, // once per 65 536 elements
//!     |i| odd += i & 1,
//! );
//! assert_eq!(checks, 16);
//! assert_eq!(odd, 500_000);
//! ```

pub mod chunk;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod monitor;
pub mod outcome;
pub mod size;
pub mod stats;
