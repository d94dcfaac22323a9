// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use proptest::prelude::*;
use tether_layout::{
    Layout, LayoutError, Matrix3x3F32, QuaternionF64, TransformF32, TransformF64, Vector3F32,
    Vector3F64,
};

#[test]
fn single_precision_vector_round_trips_exactly() {
    let v = Vector3F32::new(1.0, 2.0, 3.0);
    let bytes = v.to_bytes();
    assert_eq!(bytes.len(), 16);
    let back = Vector3F32::decode(&bytes).unwrap();
    assert_eq!(back.to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(back.padding(), 0.0);
}

#[test]
fn decode_rejects_wrong_byte_length() {
    let err = Vector3F32::decode(&[0u8; 12]).unwrap_err();
    assert_eq!(
        err,
        LayoutError::InvalidArgument {
            layout: "Vector3F32",
            unit: "bytes",
            expected: 16,
            actual: 12,
        }
    );
    assert!(TransformF64::decode(&[0u8; 129]).is_err());
}

#[test]
fn encode_into_rejects_short_buffer() {
    let mut out = [0u8; 40];
    let err = Matrix3x3F32::IDENTITY.encode_into(&mut out).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::InvalidArgument {
            expected: 48,
            actual: 40,
            ..
        }
    ));
    assert_eq!(out, [0u8; 40]);
}

#[test]
fn from_scalars_rejects_wrong_element_count() {
    assert!(matches!(
        Vector3F64::from_scalars(&[1.0, 2.0, 3.0, 4.0]),
        Err(LayoutError::InvalidArgument {
            unit: "scalars",
            expected: 3,
            actual: 4,
            ..
        })
    ));
    assert!(Matrix3x3F32::from_scalars(&[0.0; 8]).is_err());
    assert!(TransformF32::from_scalars(&[0.0; 13]).is_err());
    assert!(QuaternionF64::from_scalars(&[]).is_err());
}

#[test]
fn transform_scalars_are_basis_rows_then_origin() {
    let values: Vec<f32> = (0..12u8).map(f32::from).collect();
    let t = TransformF32::from_scalars(&values).unwrap();
    assert_eq!(t.basis.to_rows(), [[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]]);
    assert_eq!(t.origin.to_array(), [9.0, 10.0, 11.0]);
    assert_eq!(t.to_scalars(), values);
}

#[test]
fn decode_many_requires_whole_strides() {
    let a = Vector3F32::new(1.0, 2.0, 3.0);
    let b = Vector3F32::new(-4.0, 5.5, 0.25);
    let mut bytes = a.to_bytes();
    bytes.extend_from_slice(&b.to_bytes());
    assert_eq!(Vector3F32::decode_many(&bytes).unwrap(), vec![a, b]);
    bytes.pop();
    assert!(Vector3F32::decode_many(&bytes).is_err());
}

#[test]
fn decode_accepts_unaligned_input() {
    let t = TransformF64::from_translation(Vector3F64::new(1.0, -2.0, 3.5));
    let mut buf = vec![0u8; 1];
    buf.extend_from_slice(&t.to_bytes());
    assert_eq!(TransformF64::decode(&buf[1..]).unwrap(), t);
}

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |v| v.is_finite())
}

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn transform_f32_bytes_round_trip(values in prop::collection::vec(finite_f32(), 12)) {
        let t = TransformF32::from_scalars(&values).unwrap();
        let back = TransformF32::decode(&t.to_bytes()).unwrap();
        prop_assert_eq!(back, t);
        prop_assert_eq!(back.to_scalars(), values);
    }

    #[test]
    fn transform_f64_bytes_round_trip(values in prop::collection::vec(finite_f64(), 12)) {
        let t = TransformF64::from_scalars(&values).unwrap();
        let mut buf = vec![0u8; TransformF64::DESCRIPTOR.stride];
        t.encode_into(&mut buf).unwrap();
        prop_assert_eq!(TransformF64::decode(&buf).unwrap().to_scalars(), values);
    }
}
