//! Integration tests for the public Vec4i surface
//!
//! These tests exercise the crate the way a downstream user would:
//! 1. Algebraic identities hold across a spread of sample vectors
//! 2. Documented scenarios produce their exact results
//! 3. Serialization (serde, bytes, flat sequences) preserves values
//! 4. Fallible operations report the right error kind

use int4d_math::{
    ints_from_vectors, vectors_from_ints, AnchoredVec4i, ByteSerializable, MathError, Vec4i,
};

fn samples() -> Vec<Vec4i> {
    vec![
        Vec4i::ZERO,
        Vec4i::ONE,
        Vec4i::new(1, 2, 3, 4),
        Vec4i::new(-7, 0, 13, 99),
        Vec4i::new(100, -200, 300, -400),
        Vec4i::new(i32::MAX, i32::MIN, 0, -1),
        Vec4i::splat(-3),
    ]
}

// ==================== Identities ====================

#[test]
fn test_additive_and_multiplicative_identities() {
    for v in samples() {
        assert_eq!(v + Vec4i::ZERO, v, "v + zero for {}", v);
        assert_eq!(v * Vec4i::ONE, v, "v * one for {}", v);
        assert_eq!(v - v, Vec4i::ZERO, "v - v for {}", v);
    }
}

#[test]
fn test_dot_and_distance_are_symmetric() {
    let vs = samples();
    for &a in &vs {
        for &b in &vs {
            assert_eq!(a.dot(b), b.dot(a));
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

#[test]
fn test_normalize_zero_is_guarded() {
    let mut v = Vec4i::ZERO;
    assert_eq!(v.normalized(), Vec4i::ZERO);
    assert_eq!(v.normalize(), Vec4i::ZERO);
    assert_eq!(Vec4i::new(2, 3, 4, 5).project(Vec4i::ZERO), Vec4i::ZERO);
}

#[test]
fn test_clamp_magnitude_respects_bound() {
    let max = 10;
    for v in [
        Vec4i::new(100, 0, 0, 0),
        Vec4i::new(30, 40, 50, 60),
        Vec4i::new(-25, 25, -25, 25),
        Vec4i::new(7, -11, 3, 19),
    ] {
        let clamped = v.clamp_magnitude(max);
        // Per-component rounding can add at most 0.5 per axis.
        assert!(
            clamped.magnitude() <= max as f64 + 1.0,
            "{} clamped to {} has magnitude {}",
            v,
            clamped,
            clamped.magnitude()
        );
    }
    let within = Vec4i::new(1, 2, 3, 4);
    assert_eq!(within.clamp_magnitude(max), within);
}

#[test]
fn test_sequence_round_trip() {
    let ints = [9, -8, 7, -6];
    let v = Vec4i::try_from(&ints[..]).unwrap();
    assert_eq!(v.to_array(), ints);
    assert_eq!(v.to_vec(), ints.to_vec());
    assert_eq!(Vec4i::from(v.to_array()), v);
}

#[test]
fn test_contains_matches_component_membership() {
    for v in samples() {
        for candidate in [-3, -1, 0, 1, 2, 99, 12345] {
            let expected = v.iter().any(|c| c == candidate);
            assert_eq!(v.contains(candidate), expected);
        }
    }
    let v = Vec4i::new(1, 2, 3, 4);
    assert_eq!(v.contains_and(&[4, 3, 2]), Ok(true));
    assert_eq!(v.contains_and(&[4, 3, 0]), Ok(false));
}

// ==================== Scenarios ====================

#[test]
fn test_scenario_component_addition() {
    assert_eq!(
        Vec4i::new(1, 2, 3, 4) + Vec4i::new(10, 20, 30, 40),
        Vec4i::new(11, 22, 33, 44)
    );
}

#[test]
fn test_scenario_orthogonal_dot() {
    assert_eq!(Vec4i::new(1, 0, 0, 0).dot(Vec4i::new(0, 1, 0, 0)), 0);
}

#[test]
fn test_scenario_lerp_midpoint() {
    assert_eq!(Vec4i::ZERO.lerp(Vec4i::splat(10), 0.5), Vec4i::splat(5));
}

#[test]
fn test_scenario_index_out_of_range() {
    let v = Vec4i::new(1, 2, 3, 4);
    assert_eq!(v.get(5), Err(MathError::IndexOutOfRange { index: 5 }));
    let result = std::panic::catch_unwind(|| v[5]);
    assert!(result.is_err());
}

#[test]
fn test_scenario_contains_or_single_value() {
    assert!(matches!(
        Vec4i::new(1, 2, 3, 4).contains_or(&[1]),
        Err(MathError::InvalidArgument(_))
    ));
}

#[test]
fn test_scenario_origin_reset() {
    let mut a = AnchoredVec4i::new(Vec4i::new(1, 2, 3, 4));
    a.set_all(9, 9, 9, 9);
    assert_eq!(a.origin(), Vec4i::new(1, 2, 3, 4));
    assert_eq!(a.reset(), Vec4i::new(1, 2, 3, 4));
}

// ==================== Serialization ====================

#[test]
fn test_serde_toml_round_trip() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Doc {
        position: Vec4i,
        anchor: AnchoredVec4i,
    }

    let doc = Doc {
        position: Vec4i::new(1, -2, 3, -4),
        anchor: AnchoredVec4i::with_origin(Vec4i::ONE, Vec4i::ZERO),
    };
    let text = toml::to_string(&doc).unwrap();
    assert!(text.contains("[position]"));
    let back: Doc = toml::from_str(&text).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_byte_and_flat_forms_agree() {
    let vs = vec![Vec4i::new(1, 2, 3, 4), Vec4i::new(-1, -2, -3, -4)];
    let flat = ints_from_vectors(&vs);
    assert_eq!(vectors_from_ints(&flat).unwrap(), vs);

    let bytes: Vec<u8> = vs.iter().flat_map(|v| v.to_bytes()).collect();
    let from_flat: Vec<u8> = flat.iter().flat_map(|i| i.to_le_bytes()).collect();
    assert_eq!(bytes, from_flat);
}
