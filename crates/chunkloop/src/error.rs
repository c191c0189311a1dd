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

/// The error type for constructing chunked loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// The requested chunk size is zero or negative. The rendered value is kept
    /// so the error stays independent of the index type.
    NonPositiveChunkSize(String),
    /// A `usize` chunk size does not fit into the loop's index type.
    UnrepresentableChunkSize {
        /// The requested chunk size.
        requested: usize,
        /// The name of the index type (e.g. "u8").
        type_name: &'static str,
    },
}

impl std::fmt::Display for ChunkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkError::NonPositiveChunkSize(size) => {
                write!(f, "Chunk size must be positive, got {}", size)
            }
            ChunkError::UnrepresentableChunkSize {
                requested,
                type_name,
            } => write!(
                f,
                "Chunk size {} is not representable as type {}",
                requested, type_name
            ),
        }
    }
}

impl std::error::Error for ChunkError {}

#[cfg(test)]
mod tests {
    use super::ChunkError;

    #[test]
    fn test_display_non_positive() {
        let err = ChunkError::NonPositiveChunkSize("-3".to_string());
        assert_eq!(err.to_string(), "Chunk size must be positive, got -3");
    }

    #[test]
    fn test_display_unrepresentable() {
        let err = ChunkError::UnrepresentableChunkSize {
            requested: 1000,
            type_name: "u8",
        };
        assert_eq!(
            err.to_string(),
            "Chunk size 1000 is not representable as type u8"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ChunkError::NonPositiveChunkSize("0".to_string()));
    }
}
