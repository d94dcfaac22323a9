// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static schemas describing each interop layout, and the codec trait that
//! moves values through them.

use crate::error::LayoutError;
use crate::scalar::{Precision, Scalar};

/// One named field inside a [`LayoutDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as it appears on the Rust type.
    pub name: &'static str,
    /// Byte offset from the start of the value.
    pub offset: usize,
    /// Width of the field in bytes.
    pub width: usize,
    /// `true` for slots that exist only to match native alignment.
    pub padding: bool,
}

impl FieldDescriptor {
    /// First byte past the end of this field.
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Compile-time-fixed binary schema for one primitive at one precision.
///
/// Fields are listed in declaration order, which is also byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    /// Layout name (e.g. `"TransformF32"`).
    pub name: &'static str,
    /// Scalar precision of every slot.
    pub precision: Precision,
    /// Total size of one value in bytes.
    pub stride: usize,
    /// Fields in declaration order.
    pub fields: &'static [FieldDescriptor],
}

impl LayoutDescriptor {
    /// Width of one scalar slot in bytes.
    pub const fn scalar_width(&self) -> usize {
        self.precision.scalar_width()
    }

    /// Total number of scalar slots, padding included.
    pub const fn slots(&self) -> usize {
        self.stride / self.scalar_width()
    }

    /// Returns the field at `index`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::OutOfRange`] when `index` is not below the field count.
    pub fn field(&self, index: usize) -> Result<&FieldDescriptor, LayoutError> {
        self.fields.get(index).ok_or(LayoutError::OutOfRange {
            layout: self.name,
            index,
            len: self.fields.len(),
        })
    }

    /// Looks a field up by name.
    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that carry data (padding excluded).
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|f| !f.padding)
    }
}

/// A `#[repr(C)]` value with a fixed native byte image.
///
/// The byte image is the in-memory representation (native endianness), which
/// is exactly what the engine reads when handed a pointer to the value.
pub trait Layout: bytemuck::Pod {
    /// Slot payload type.
    type Scalar: Scalar;

    /// Binary schema of this type.
    const DESCRIPTOR: &'static LayoutDescriptor;

    /// Number of logical scalars (padding excluded).
    const LOGICAL_LEN: usize;

    /// Builds a value from its logical scalars in declaration order.
    ///
    /// Padding slots are zeroed.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidArgument`] unless `values` holds exactly
    /// [`LOGICAL_LEN`](Self::LOGICAL_LEN) scalars.
    fn from_scalars(values: &[Self::Scalar]) -> Result<Self, LayoutError>;

    /// Logical scalars in declaration order (padding excluded).
    fn to_scalars(&self) -> Vec<Self::Scalar>;

    /// Native byte image of the value.
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Owned copy of the native byte image.
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Writes the byte image into `out`, which must be exactly one stride long.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidArgument`] on any other length; `out` is left
    /// untouched.
    fn encode_into(&self, out: &mut [u8]) -> Result<(), LayoutError> {
        let stride = Self::DESCRIPTOR.stride;
        if out.len() != stride {
            return Err(LayoutError::byte_count(
                Self::DESCRIPTOR.name,
                stride,
                out.len(),
            ));
        }
        out.copy_from_slice(self.as_bytes());
        Ok(())
    }

    /// Reads one value from a byte image of exactly one stride.
    ///
    /// `bytes` need not be aligned.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidArgument`] unless `bytes` is exactly one stride.
    fn decode(bytes: &[u8]) -> Result<Self, LayoutError> {
        let stride = Self::DESCRIPTOR.stride;
        if bytes.len() != stride {
            return Err(LayoutError::byte_count(
                Self::DESCRIPTOR.name,
                stride,
                bytes.len(),
            ));
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Reads a packed array of values. The length must be a whole number of
    /// strides.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidArgument`] on a trailing partial value.
    fn decode_many(bytes: &[u8]) -> Result<Vec<Self>, LayoutError> {
        let stride = Self::DESCRIPTOR.stride;
        if bytes.len() % stride != 0 {
            let whole = bytes.len() / stride;
            return Err(LayoutError::byte_count(
                Self::DESCRIPTOR.name,
                (whole + 1) * stride,
                bytes.len(),
            ));
        }
        Ok(bytes
            .chunks_exact(stride)
            .map(bytemuck::pod_read_unaligned)
            .collect())
    }
}
