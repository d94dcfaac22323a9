// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Concrete `#[repr(C)]` layouts for both precisions.
//!
//! A single macro stamps out the f32 and f64 families so the two precisions
//! share one definition of field order and padding.

use core::mem::{offset_of, size_of};
use core::ops::Add;

use crate::descriptor::{FieldDescriptor, Layout, LayoutDescriptor};
use crate::error::LayoutError;
use crate::scalar::Scalar;

/// Scalar slots reserved per vector, padding included.
pub const VECTOR_SLOTS: usize = 4;

/// Rows in a basis matrix.
const MATRIX_ROWS: usize = 3;

/// Logical (unpadded) vector dimension.
const VECTOR_DIM: usize = 3;

macro_rules! precision_layouts {
    (
        scalar: $s:ty,
        vector: $vector:ident,
        matrix: $matrix:ident,
        transform: $transform:ident,
        quaternion: $quat:ident,
        origin_offset: $origin_const:ident $(,)?
    ) => {
        // ── Vector ──────────────────────────────────────────────────────

        #[doc = concat!("Padded 3D vector of `", stringify!($s), "` (four slots, slot 3 is padding).")]
        ///
        /// Equality compares the three logical components only; the padding
        /// slot is carried through decode/encode untouched but never compared.
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $vector {
            /// X component.
            pub x: $s,
            /// Y component.
            pub y: $s,
            /// Z component.
            pub z: $s,
            pad: $s,
        }

        impl $vector {
            /// The zero vector.
            pub const ZERO: Self = Self::new(<$s>::ZERO, <$s>::ZERO, <$s>::ZERO);

            /// Creates a vector with a zeroed padding slot.
            pub const fn new(x: $s, y: $s, z: $s) -> Self {
                Self {
                    x,
                    y,
                    z,
                    pad: <$s>::ZERO,
                }
            }

            /// Logical components as an array.
            pub const fn to_array(self) -> [$s; VECTOR_DIM] {
                [self.x, self.y, self.z]
            }

            /// Raw value of the padding slot.
            ///
            /// Zero for vectors built in Rust; whatever the native side wrote
            /// for decoded ones.
            pub const fn padding(self) -> $s {
                self.pad
            }

            /// Dot product.
            pub fn dot(&self, other: &Self) -> $s {
                self.x * other.x + self.y * other.y + self.z * other.z
            }
        }

        impl PartialEq for $vector {
            #[allow(clippy::float_cmp)]
            fn eq(&self, other: &Self) -> bool {
                self.x == other.x && self.y == other.y && self.z == other.z
            }
        }

        impl Add for $vector {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
            }
        }

        impl From<[$s; VECTOR_DIM]> for $vector {
            fn from([x, y, z]: [$s; VECTOR_DIM]) -> Self {
                Self::new(x, y, z)
            }
        }

        impl From<$vector> for [$s; VECTOR_DIM] {
            fn from(v: $vector) -> Self {
                v.to_array()
            }
        }

        impl Layout for $vector {
            type Scalar = $s;

            const DESCRIPTOR: &'static LayoutDescriptor = &LayoutDescriptor {
                name: stringify!($vector),
                precision: <$s>::PRECISION,
                stride: size_of::<$vector>(),
                fields: &[
                    FieldDescriptor {
                        name: "x",
                        offset: offset_of!($vector, x),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "y",
                        offset: offset_of!($vector, y),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "z",
                        offset: offset_of!($vector, z),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "pad",
                        offset: offset_of!($vector, pad),
                        width: <$s as Scalar>::WIDTH,
                        padding: true,
                    },
                ],
            };

            const LOGICAL_LEN: usize = VECTOR_DIM;

            fn from_scalars(values: &[$s]) -> Result<Self, LayoutError> {
                match values {
                    [x, y, z] => Ok(Self::new(*x, *y, *z)),
                    _ => Err(LayoutError::scalar_count(
                        stringify!($vector),
                        VECTOR_DIM,
                        values.len(),
                    )),
                }
            }

            fn to_scalars(&self) -> Vec<$s> {
                self.to_array().to_vec()
            }
        }

        // ── Matrix ──────────────────────────────────────────────────────

        #[doc = concat!("Row-major 3×3 basis of `", stringify!($s), "` stored as three padded rows.")]
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $matrix {
            /// Basis rows, each a padded vector.
            pub rows: [$vector; MATRIX_ROWS],
        }

        impl $matrix {
            /// The identity basis.
            pub const IDENTITY: Self = Self::from_rows([
                [<$s>::ONE, <$s>::ZERO, <$s>::ZERO],
                [<$s>::ZERO, <$s>::ONE, <$s>::ZERO],
                [<$s>::ZERO, <$s>::ZERO, <$s>::ONE],
            ]);

            /// Builds a matrix from logical rows.
            pub const fn from_rows(rows: [[$s; VECTOR_DIM]; MATRIX_ROWS]) -> Self {
                let [r0, r1, r2] = rows;
                Self {
                    rows: [
                        $vector::new(r0[0], r0[1], r0[2]),
                        $vector::new(r1[0], r1[1], r1[2]),
                        $vector::new(r2[0], r2[1], r2[2]),
                    ],
                }
            }

            /// Logical rows.
            pub const fn to_rows(&self) -> [[$s; VECTOR_DIM]; MATRIX_ROWS] {
                [
                    self.rows[0].to_array(),
                    self.rows[1].to_array(),
                    self.rows[2].to_array(),
                ]
            }

            /// Row `index`.
            ///
            /// # Errors
            ///
            /// [`LayoutError::OutOfRange`] when `index` is not below 3.
            pub fn row(&self, index: usize) -> Result<$vector, LayoutError> {
                self.rows
                    .get(index)
                    .copied()
                    .ok_or(LayoutError::OutOfRange {
                        layout: stringify!($matrix),
                        index,
                        len: MATRIX_ROWS,
                    })
            }

            /// Element at (`row`, `col`).
            ///
            /// # Errors
            ///
            /// [`LayoutError::OutOfRange`] naming whichever index is not
            /// below 3.
            pub fn get(&self, row: usize, col: usize) -> Result<$s, LayoutError> {
                let r = self.row(row)?;
                r.to_array()
                    .get(col)
                    .copied()
                    .ok_or(LayoutError::OutOfRange {
                        layout: stringify!($matrix),
                        index: col,
                        len: VECTOR_DIM,
                    })
            }

            /// Matrix-vector product (`M * v`).
            pub fn mul_vector(&self, v: &$vector) -> $vector {
                $vector::new(
                    self.rows[0].dot(v),
                    self.rows[1].dot(v),
                    self.rows[2].dot(v),
                )
            }
        }

        impl Layout for $matrix {
            type Scalar = $s;

            const DESCRIPTOR: &'static LayoutDescriptor = &LayoutDescriptor {
                name: stringify!($matrix),
                precision: <$s>::PRECISION,
                stride: size_of::<$matrix>(),
                fields: &[
                    FieldDescriptor {
                        name: "row0",
                        offset: offset_of!($matrix, rows),
                        width: size_of::<$vector>(),
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "row1",
                        offset: offset_of!($matrix, rows) + size_of::<$vector>(),
                        width: size_of::<$vector>(),
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "row2",
                        offset: offset_of!($matrix, rows) + 2 * size_of::<$vector>(),
                        width: size_of::<$vector>(),
                        padding: false,
                    },
                ],
            };

            const LOGICAL_LEN: usize = MATRIX_ROWS * VECTOR_DIM;

            fn from_scalars(values: &[$s]) -> Result<Self, LayoutError> {
                if values.len() != Self::LOGICAL_LEN {
                    return Err(LayoutError::scalar_count(
                        stringify!($matrix),
                        Self::LOGICAL_LEN,
                        values.len(),
                    ));
                }
                let mut out = Self::default();
                for (row, chunk) in out.rows.iter_mut().zip(values.chunks_exact(VECTOR_DIM)) {
                    *row = $vector::from_scalars(chunk)?;
                }
                Ok(out)
            }

            fn to_scalars(&self) -> Vec<$s> {
                self.rows.iter().flat_map(|r| r.to_array()).collect()
            }
        }

        // ── Transform ───────────────────────────────────────────────────

        #[doc = concat!("Rigid transform of `", stringify!($s), "`: basis followed by origin.")]
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $transform {
            /// Rotation/scale basis.
            pub basis: $matrix,
            /// Translation.
            pub origin: $vector,
        }

        impl $transform {
            /// Byte offset of [`Self::origin`], derived from the type definition.
            pub const ORIGIN_OFFSET: usize = offset_of!($transform, origin);

            /// Identity transform.
            pub const IDENTITY: Self = Self::new($matrix::IDENTITY, $vector::ZERO);

            /// Creates a transform from parts.
            pub const fn new(basis: $matrix, origin: $vector) -> Self {
                Self { basis, origin }
            }

            /// Pure translation.
            pub const fn from_translation(origin: $vector) -> Self {
                Self::new($matrix::IDENTITY, origin)
            }

            /// Applies the transform to a point (`basis * p + origin`).
            pub fn transform_point(&self, p: &$vector) -> $vector {
                self.basis.mul_vector(p) + self.origin
            }
        }

        impl Layout for $transform {
            type Scalar = $s;

            const DESCRIPTOR: &'static LayoutDescriptor = &LayoutDescriptor {
                name: stringify!($transform),
                precision: <$s>::PRECISION,
                stride: size_of::<$transform>(),
                fields: &[
                    FieldDescriptor {
                        name: "basis",
                        offset: offset_of!($transform, basis),
                        width: size_of::<$matrix>(),
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "origin",
                        offset: offset_of!($transform, origin),
                        width: size_of::<$vector>(),
                        padding: false,
                    },
                ],
            };

            const LOGICAL_LEN: usize = $matrix::LOGICAL_LEN + VECTOR_DIM;

            fn from_scalars(values: &[$s]) -> Result<Self, LayoutError> {
                if values.len() != Self::LOGICAL_LEN {
                    return Err(LayoutError::scalar_count(
                        stringify!($transform),
                        Self::LOGICAL_LEN,
                        values.len(),
                    ));
                }
                let (basis, origin) = values.split_at($matrix::LOGICAL_LEN);
                Ok(Self::new(
                    $matrix::from_scalars(basis)?,
                    $vector::from_scalars(origin)?,
                ))
            }

            fn to_scalars(&self) -> Vec<$s> {
                let mut out = self.basis.to_scalars();
                out.extend_from_slice(&self.origin.to_array());
                out
            }
        }

        // ── Quaternion ──────────────────────────────────────────────────

        #[doc = concat!("Rotation quaternion of `", stringify!($s), "` (four slots, no padding).")]
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $quat {
            /// X (imaginary i).
            pub x: $s,
            /// Y (imaginary j).
            pub y: $s,
            /// Z (imaginary k).
            pub z: $s,
            /// W (real part).
            pub w: $s,
        }

        impl $quat {
            /// Identity rotation.
            pub const IDENTITY: Self = Self::new(<$s>::ZERO, <$s>::ZERO, <$s>::ZERO, <$s>::ONE);

            /// Creates a quaternion from components.
            pub const fn new(x: $s, y: $s, z: $s, w: $s) -> Self {
                Self { x, y, z, w }
            }

            /// Components as `[x, y, z, w]`.
            pub const fn to_array(self) -> [$s; 4] {
                [self.x, self.y, self.z, self.w]
            }
        }

        impl Layout for $quat {
            type Scalar = $s;

            const DESCRIPTOR: &'static LayoutDescriptor = &LayoutDescriptor {
                name: stringify!($quat),
                precision: <$s>::PRECISION,
                stride: size_of::<$quat>(),
                fields: &[
                    FieldDescriptor {
                        name: "x",
                        offset: offset_of!($quat, x),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "y",
                        offset: offset_of!($quat, y),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "z",
                        offset: offset_of!($quat, z),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                    FieldDescriptor {
                        name: "w",
                        offset: offset_of!($quat, w),
                        width: <$s as Scalar>::WIDTH,
                        padding: false,
                    },
                ],
            };

            const LOGICAL_LEN: usize = 4;

            fn from_scalars(values: &[$s]) -> Result<Self, LayoutError> {
                match values {
                    [x, y, z, w] => Ok(Self::new(*x, *y, *z, *w)),
                    _ => Err(LayoutError::scalar_count(
                        stringify!($quat),
                        Self::LOGICAL_LEN,
                        values.len(),
                    )),
                }
            }

            fn to_scalars(&self) -> Vec<$s> {
                self.to_array().to_vec()
            }
        }

        // ── Static shape checks ─────────────────────────────────────────

        const _: () = assert!(<$s as Scalar>::WIDTH == size_of::<$s>());
        const _: () = assert!(size_of::<$vector>() == VECTOR_SLOTS * size_of::<$s>());
        const _: () = assert!(size_of::<$matrix>() == MATRIX_ROWS * size_of::<$vector>());
        const _: () =
            assert!($transform::ORIGIN_OFFSET == MATRIX_ROWS * VECTOR_SLOTS * size_of::<$s>());
        const _: () =
            assert!(size_of::<$transform>() == $transform::ORIGIN_OFFSET + size_of::<$vector>());
        const _: () = assert!(size_of::<$quat>() == 4 * size_of::<$s>());

        #[doc = concat!("Byte offset of the origin in [`", stringify!($transform), "`].")]
        pub const $origin_const: usize = $transform::ORIGIN_OFFSET;
    };
}

precision_layouts! {
    scalar: f32,
    vector: Vector3F32,
    matrix: Matrix3x3F32,
    transform: TransformF32,
    quaternion: QuaternionF32,
    origin_offset: TRANSFORM_ORIGIN_OFFSET_F32,
}

precision_layouts! {
    scalar: f64,
    vector: Vector3F64,
    matrix: Matrix3x3F64,
    transform: TransformF64,
    quaternion: QuaternionF64,
    origin_offset: TRANSFORM_ORIGIN_OFFSET_F64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn matrix_get_checks_both_indices() {
        let m = Matrix3x3F32::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.get(1, 2), Ok(6.0));
        assert_eq!(
            m.get(3, 0),
            Err(LayoutError::OutOfRange {
                layout: "Matrix3x3F32",
                index: 3,
                len: 3,
            })
        );
        assert_eq!(
            m.get(0, 3),
            Err(LayoutError::OutOfRange {
                layout: "Matrix3x3F32",
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn transform_point_applies_basis_then_origin() {
        let basis = Matrix3x3F64::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let t = TransformF64::new(basis, Vector3F64::new(10.0, 0.0, -1.0));
        let p = t.transform_point(&Vector3F64::new(1.0, 2.0, 3.0));
        assert_eq!(p.to_array(), [8.0, 1.0, 2.0]);
    }

    #[test]
    fn padding_is_ignored_by_equality() {
        let a = Vector3F32::new(1.0, 2.0, 3.0);
        let mut bytes = a.to_bytes();
        bytes[12..16].copy_from_slice(&7.5f32.to_ne_bytes());
        let b = Vector3F32::decode(&bytes).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.padding(), 7.5);
        assert_eq!(b.to_bytes(), bytes);
    }
}
