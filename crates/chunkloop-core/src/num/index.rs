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

//! # Chunk Index Trait
//!
//! Unified numeric bounds for loop indices. `ChunkIndex` collects the
//! integer capabilities the chunk cursor relies on into a single alias,
//! simplifying generic signatures across the workspace.
//!
//! ## Highlights
//!
//! - Requires `PrimInt` for ordering, conversions (`NumCast`, `ToPrimitive`)
//!   and the usual integer operators.
//! - Includes the `Zero` and `PlusOne` constant traits.
//! - Adds by-value checked and saturating addition/subtraction so boundary
//!   arithmetic near `T::MAX` or `T::MIN` never wraps.
//! - Blanket-implemented for every signed and unsigned primitive integer,
//!   including `i128`/`u128`.

use crate::num::{
    constants::{PlusOne, Zero},
    ops::{checked_arithmetic, saturating_arithmetic},
};
use num_traits::PrimInt;
use std::hash::Hash;

/// A trait alias for integer types that can drive a chunked loop.
///
/// # Examples
///
/// ```rust
/// # use chunkloop_core::num::index::ChunkIndex;
/// fn midpoint<T: ChunkIndex>(a: T, b: T) -> T {
///     a + (b - a) / (T::PLUS_ONE + T::PLUS_ONE)
/// }
///
/// assert_eq!(midpoint(2u8, 10u8), 6);
/// assert_eq!(midpoint(-10i64, 10i64), 0);
/// ```
pub trait ChunkIndex:
    PrimInt
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + Send
    + Sync
    + Hash
{
}

impl<T> ChunkIndex for T where
    T: PrimInt
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::ChunkIndex;

    fn assert_chunk_index<T: ChunkIndex>() {}

    #[test]
    fn test_all_primitive_integers_are_chunk_indices() {
        assert_chunk_index::<i8>();
        assert_chunk_index::<i16>();
        assert_chunk_index::<i32>();
        assert_chunk_index::<i64>();
        assert_chunk_index::<i128>();
        assert_chunk_index::<isize>();
        assert_chunk_index::<u8>();
        assert_chunk_index::<u16>();
        assert_chunk_index::<u32>();
        assert_chunk_index::<u64>();
        assert_chunk_index::<u128>();
        assert_chunk_index::<usize>();
    }

    #[test]
    fn test_generic_boundary_arithmetic() {
        fn clamp_step<T: ChunkIndex>(index: T, step: T, upper: T) -> T {
            index.saturating_add_val(step).min(upper)
        }

        assert_eq!(clamp_step(250u8, 10, 255), 255);
        assert_eq!(clamp_step(3i32, 3, 10), 6);
        assert_eq!(clamp_step(9i32, 3, 10), 10);
    }
}
