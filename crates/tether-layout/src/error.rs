// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Errors raised when marshaling values through a layout.
///
/// Malformed input is always rejected; nothing is truncated, padded or
/// coerced to fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Input had the wrong number of scalars or bytes for the layout.
    #[error("[LAYOUT_INVALID_ARGUMENT] {layout}: expected {expected} {unit}, got {actual}")]
    InvalidArgument {
        /// Name of the layout being decoded or built.
        layout: &'static str,
        /// What the input was measured in (`"scalars"` or `"bytes"`).
        unit: &'static str,
        /// Required count.
        expected: usize,
        /// Count actually supplied.
        actual: usize,
    },
    /// A field, row or column index was past the end of the layout.
    #[error("[LAYOUT_OUT_OF_RANGE] {layout}: index {index} out of range (len {len})")]
    OutOfRange {
        /// Name of the layout being indexed.
        layout: &'static str,
        /// Index requested.
        index: usize,
        /// Number of valid indices.
        len: usize,
    },
}

impl LayoutError {
    pub(crate) const fn scalar_count(layout: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidArgument {
            layout,
            unit: "scalars",
            expected,
            actual,
        }
    }

    pub(crate) const fn byte_count(layout: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidArgument {
            layout,
            unit: "bytes",
            expected,
            actual,
        }
    }
}
