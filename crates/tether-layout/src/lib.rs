// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Byte-exact interop layouts for geometric values exchanged with a native
//! physics engine.
//!
//! Every type here mirrors the native engine's serialized data blocks field by
//! field, in declaration order, with `#[repr(C)]`:
//!
//! - a vector reserves **four** scalar slots even though it is logically 3D
//!   (slot 3 is padding, matching the native SIMD-width convention);
//! - a 3×3 matrix is three padded vector rows (12 slots);
//! - a transform is a basis matrix followed by an origin vector;
//! - a quaternion is four scalars, no padding.
//!
//! Both precisions are always compiled (`*F32` and `*F64`). The
//! `double_precision` feature only picks which one the [`Real`] aliases point
//! at, so marshaling code can follow the native build variant without naming a
//! precision explicitly.
//!
//! # Offsets
//!
//! Sub-field offsets (e.g. [`TransformF32::ORIGIN_OFFSET`]) are computed with
//! `offset_of!` from the type definitions themselves and checked by `const`
//! assertions against the slot arithmetic, so shape and offset cannot drift
//! apart. [`TRANSFORM_ORIGIN_OFFSET_F32`] is 48 and
//! [`TRANSFORM_ORIGIN_OFFSET_F64`] is 96.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod descriptor;
mod error;
mod layouts;
mod scalar;

pub use descriptor::{FieldDescriptor, Layout, LayoutDescriptor};
pub use error::LayoutError;
pub use layouts::{
    Matrix3x3F32, Matrix3x3F64, QuaternionF32, QuaternionF64, TransformF32, TransformF64,
    Vector3F32, Vector3F64, TRANSFORM_ORIGIN_OFFSET_F32, TRANSFORM_ORIGIN_OFFSET_F64,
    VECTOR_SLOTS,
};
pub use scalar::{Precision, Scalar};

/// Scalar type of the native build variant (`f32` unless `double_precision`).
#[cfg(not(feature = "double_precision"))]
pub type Real = f32;
/// Scalar type of the native build variant (`f64` under `double_precision`).
#[cfg(feature = "double_precision")]
pub type Real = f64;

/// Vector layout in the native build variant's precision.
#[cfg(not(feature = "double_precision"))]
pub type Vector3 = Vector3F32;
/// Vector layout in the native build variant's precision.
#[cfg(feature = "double_precision")]
pub type Vector3 = Vector3F64;

/// Matrix layout in the native build variant's precision.
#[cfg(not(feature = "double_precision"))]
pub type Matrix3x3 = Matrix3x3F32;
/// Matrix layout in the native build variant's precision.
#[cfg(feature = "double_precision")]
pub type Matrix3x3 = Matrix3x3F64;

/// Transform layout in the native build variant's precision.
#[cfg(not(feature = "double_precision"))]
pub type Transform = TransformF32;
/// Transform layout in the native build variant's precision.
#[cfg(feature = "double_precision")]
pub type Transform = TransformF64;

/// Quaternion layout in the native build variant's precision.
#[cfg(not(feature = "double_precision"))]
pub type Quaternion = QuaternionF32;
/// Quaternion layout in the native build variant's precision.
#[cfg(feature = "double_precision")]
pub type Quaternion = QuaternionF64;

/// Byte offset of the origin inside [`Transform`] for the active build variant.
pub const TRANSFORM_ORIGIN_OFFSET: usize = Transform::ORIGIN_OFFSET;
