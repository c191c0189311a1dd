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

//! # Chunkloop Core
//!
//! Integer foundations shared by the chunked loop drivers. Loop indices in
//! `chunkloop` are generic over every primitive integer type, so this crate
//! collects the numeric capabilities they rely on behind a small set of
//! traits and provides the closed interval type used to describe a chunk.
//!
//! ## Modules
//!
//! - `math`: The non-empty closed interval `[first, last]` with an
//!   overflow-safe, double-ended iterator that may run up to `T::MAX`.
//! - `num`: Associated constant traits (`Zero`, `PlusOne`), by-value checked
//!   and saturating arithmetic, and the `ChunkIndex` trait alias that every
//!   loop index type satisfies.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
