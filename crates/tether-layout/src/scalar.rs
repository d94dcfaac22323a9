// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar lanes accepted by the interop layouts.
//!
//! Only the two IEEE widths the native engine can be built with are valid
//! slot payloads, so the trait is sealed.

use core::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Numeric precision of a native build variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit IEEE scalars.
    Single,
    /// 64-bit IEEE scalars.
    Double,
}

impl Precision {
    /// Width of one scalar slot in bytes.
    pub const fn scalar_width(self) -> usize {
        match self {
            Self::Single => core::mem::size_of::<f32>(),
            Self::Double => core::mem::size_of::<f64>(),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("f32"),
            Self::Double => f.write_str("f64"),
        }
    }
}

/// A scalar slot payload.
pub trait Scalar:
    Copy + fmt::Debug + PartialEq + bytemuck::Pod + Send + Sync + 'static + sealed::Sealed
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Precision this scalar represents.
    const PRECISION: Precision;
    /// Width of one slot in bytes.
    const WIDTH: usize = Self::PRECISION.scalar_width();
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PRECISION: Precision = Precision::Single;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PRECISION: Precision = Precision::Double;
}
