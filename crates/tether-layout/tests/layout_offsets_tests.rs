// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use tether_layout::{
    Layout, Matrix3x3F32, Matrix3x3F64, Precision, QuaternionF32, QuaternionF64, Scalar,
    TransformF32, TransformF64, Vector3F32, Vector3F64, TRANSFORM_ORIGIN_OFFSET_F32,
    TRANSFORM_ORIGIN_OFFSET_F64, VECTOR_SLOTS,
};

#[test]
fn scalar_fields_are_one_slot_wide() {
    assert_eq!(f32::WIDTH, 4);
    assert_eq!(f64::WIDTH, 8);
    for field in Vector3F32::DESCRIPTOR.fields.iter().chain(QuaternionF32::DESCRIPTOR.fields) {
        assert_eq!(field.width, f32::WIDTH, "{}", field.name);
    }
    for field in Vector3F64::DESCRIPTOR.fields.iter().chain(QuaternionF64::DESCRIPTOR.fields) {
        assert_eq!(field.width, f64::WIDTH, "{}", field.name);
    }
}

#[test]
fn vector_reserves_four_slots_in_both_precisions() {
    assert_eq!(VECTOR_SLOTS, 4);
    assert_eq!(Vector3F32::DESCRIPTOR.slots(), 4);
    assert_eq!(Vector3F32::DESCRIPTOR.stride, 16);
    assert_eq!(Vector3F64::DESCRIPTOR.slots(), 4);
    assert_eq!(Vector3F64::DESCRIPTOR.stride, 32);
}

#[test]
fn matrix_is_three_padded_rows() {
    assert_eq!(Matrix3x3F32::DESCRIPTOR.slots(), 12);
    assert_eq!(Matrix3x3F32::DESCRIPTOR.stride, 48);
    assert_eq!(Matrix3x3F64::DESCRIPTOR.slots(), 12);
    assert_eq!(Matrix3x3F64::DESCRIPTOR.stride, 96);
    let offsets: Vec<usize> = Matrix3x3F64::DESCRIPTOR
        .fields
        .iter()
        .map(|f| f.offset)
        .collect();
    assert_eq!(offsets, vec![0, 32, 64]);
}

#[test]
fn transform_origin_offset_is_48_for_single_precision() {
    assert_eq!(TRANSFORM_ORIGIN_OFFSET_F32, 48);
    assert_eq!(TransformF32::ORIGIN_OFFSET, 48);
    let origin = TransformF32::DESCRIPTOR.field_named("origin").unwrap();
    assert_eq!(origin.offset, 48);
    assert_eq!(origin.width, 16);
    assert_eq!(TransformF32::DESCRIPTOR.stride, 64);
    assert_eq!(TransformF32::DESCRIPTOR.precision, Precision::Single);
}

#[test]
fn transform_origin_offset_is_96_for_double_precision() {
    assert_eq!(TRANSFORM_ORIGIN_OFFSET_F64, 96);
    assert_eq!(TransformF64::ORIGIN_OFFSET, 96);
    let origin = TransformF64::DESCRIPTOR.field_named("origin").unwrap();
    assert_eq!(origin.offset, 96);
    assert_eq!(TransformF64::DESCRIPTOR.stride, 128);
    assert_eq!(TransformF64::DESCRIPTOR.precision, Precision::Double);
}

#[test]
fn origin_bytes_sit_at_the_declared_offset() {
    let t = TransformF32::from_translation(Vector3F32::new(4.0, 5.0, 6.0));
    let bytes = t.to_bytes();
    let off = TRANSFORM_ORIGIN_OFFSET_F32;
    let origin = Vector3F32::decode(&bytes[off..off + 16]).unwrap();
    assert_eq!(origin.to_array(), [4.0, 5.0, 6.0]);
}

#[test]
fn quaternion_has_no_padding() {
    let desc = QuaternionF32::DESCRIPTOR;
    assert_eq!(desc.stride, 16);
    assert!(desc.fields.iter().all(|f| !f.padding));
    assert_eq!(QuaternionF32::IDENTITY.to_array(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn active_lane_matches_feature() {
    #[cfg(not(feature = "double_precision"))]
    assert_eq!(tether_layout::TRANSFORM_ORIGIN_OFFSET, 48);
    #[cfg(feature = "double_precision")]
    assert_eq!(tether_layout::TRANSFORM_ORIGIN_OFFSET, 96);
}
