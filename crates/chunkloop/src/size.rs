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

//! # Chunk Size
//!
//! A validated, strictly positive chunk size. Every outer step of a chunked
//! loop therefore advances the index by at least one element.

use crate::error::ChunkError;
use chunkloop_core::num::index::ChunkIndex;
use num_traits::NumCast;

/// The chunk size used by `ChunkSize::default`, clamped to `T::MAX` for
/// narrow index types.
pub const DEFAULT_CHUNK_SIZE: usize = 65_536;

/// A strictly positive number of elements processed per outer iteration.
///
/// # Examples
///
/// ```rust
/// # use chunkloop::size::ChunkSize;
/// let size = ChunkSize::new(3i32).unwrap();
/// assert_eq!(size.get(), 3);
///
/// assert!(ChunkSize::new(0i32).is_err());
/// assert!(ChunkSize::new(-1i32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize<T> {
    size: T,
}

impl<T> ChunkSize<T>
where
    T: ChunkIndex,
{
    /// Creates a new chunk size, failing if `size <= 0`.
    #[inline]
    pub fn new(size: T) -> Result<Self, ChunkError> {
        if size <= T::ZERO {
            return Err(ChunkError::NonPositiveChunkSize(size.to_string()));
        }
        Ok(Self { size })
    }

    /// Creates a chunk size from a `usize`, failing if it is zero or does
    /// not fit into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chunkloop::size::ChunkSize;
    /// assert_eq!(ChunkSize::<u8>::try_from_usize(200).unwrap().get(), 200);
    /// assert!(ChunkSize::<u8>::try_from_usize(256).is_err());
    /// ```
    #[inline]
    pub fn try_from_usize(size: usize) -> Result<Self, ChunkError> {
        let converted = <T as NumCast>::from(size).ok_or(ChunkError::UnrepresentableChunkSize {
            requested: size,
            type_name: std::any::type_name::<T>(),
        })?;
        Self::new(converted)
    }

    /// Returns the underlying chunk size.
    #[inline(always)]
    pub fn get(&self) -> T {
        self.size
    }
}

impl<T> Default for ChunkSize<T>
where
    T: ChunkIndex,
{
    /// `DEFAULT_CHUNK_SIZE`, or `T::MAX` if that is smaller.
    fn default() -> Self {
        Self {
            size: <T as NumCast>::from(DEFAULT_CHUNK_SIZE).unwrap_or_else(T::max_value),
        }
    }
}

macro_rules! impl_try_from_for {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for ChunkSize<$t> {
                type Error = ChunkError;

                #[inline]
                fn try_from(size: $t) -> Result<Self, Self::Error> {
                    Self::new(size)
                }
            }
        )*
    };
}

impl_try_from_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> std::fmt::Display for ChunkSize<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChunkSize({})", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive() {
        assert_eq!(ChunkSize::new(1u8).unwrap().get(), 1);
        assert_eq!(ChunkSize::new(i64::MAX).unwrap().get(), i64::MAX);
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert_eq!(
            ChunkSize::new(0u32),
            Err(ChunkError::NonPositiveChunkSize("0".to_string()))
        );
        assert_eq!(
            ChunkSize::new(-5i16),
            Err(ChunkError::NonPositiveChunkSize("-5".to_string()))
        );
        assert!(ChunkSize::new(i128::MIN).is_err());
    }

    #[test]
    fn test_try_from_usize() {
        assert_eq!(ChunkSize::<i8>::try_from_usize(127).unwrap().get(), 127);
        assert!(matches!(
            ChunkSize::<i8>::try_from_usize(128),
            Err(ChunkError::UnrepresentableChunkSize { requested: 128, .. })
        ));
        assert!(matches!(
            ChunkSize::<u64>::try_from_usize(0),
            Err(ChunkError::NonPositiveChunkSize(_))
        ));
    }

    #[test]
    fn test_default_is_clamped() {
        assert_eq!(ChunkSize::<u64>::default().get(), 65_536);
        assert_eq!(ChunkSize::<i32>::default().get(), 65_536);
        assert_eq!(ChunkSize::<u16>::default().get(), u16::MAX);
        assert_eq!(ChunkSize::<i8>::default().get(), i8::MAX);
    }

    #[test]
    fn test_try_from_and_display() {
        let size: ChunkSize<usize> = 4usize.try_into().unwrap();
        assert_eq!(format!("{}", size), "ChunkSize(4)");
        assert!(ChunkSize::<isize>::try_from(0).is_err());
    }

    #[test]
    fn test_try_from_matches_new_for_every_width() {
        assert_eq!(ChunkSize::<u8>::try_from(7), ChunkSize::new(7u8));
        assert_eq!(ChunkSize::<i16>::try_from(-1), ChunkSize::new(-1i16));
        assert_eq!(
            ChunkSize::<u128>::try_from(u128::MAX).map(|s| s.get()),
            Ok(u128::MAX)
        );
        assert_eq!(
            ChunkSize::<i64>::try_from(0),
            Err(ChunkError::NonPositiveChunkSize("0".to_string()))
        );
    }
}
