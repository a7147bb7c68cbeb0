//! End-to-end properties of the re-randomization transform

use groth16_rerand_core::codec::{hex_g1, hex_g2};
use groth16_rerand_core::field::{reduce_scalar, scalar_to_bytes};
use groth16_rerand_core::ops::{g1_mul, g2_mul};
use groth16_rerand_core::{
    FixedScalarSource, G1Point, G2Point, OsScalarSource, ProofInput, ProofRandomizer,
    ScalarSource, FR_MODULUS,
};
use num_bigint::BigUint;

fn g1(k: u64) -> G1Point {
    g1_mul(&G1Point::generator(), &scalar_to_bytes(&BigUint::from(k))).unwrap()
}

fn g2(k: u64) -> G2Point {
    g2_mul(&G2Point::generator(), &scalar_to_bytes(&BigUint::from(k)))
}

/// Stand-in proof points with unrelated discrete logs
fn proof_points() -> (G2Point, G1Point, G2Point, G1Point) {
    (g2(0xde17a), g1(0xa11ce), g2(0xb0b), g1(0xc0ffee))
}

#[test]
fn test_identity_blinding_textual() {
    let (delta, a, b, c) = proof_points();
    let input = ProofInput {
        delta: hex_g2(&delta),
        a: hex_g1(&a),
        b: hex_g2(&b),
        c: hex_g1(&c),
        eta: Some("0x0".to_string()),
    };

    let output = ProofRandomizer::new(OsScalarSource).randomize_text(&input).unwrap();
    assert_eq!(output.b, input.delta);
    assert_eq!(output.c, input.c);
    assert_eq!(output.eta, "0x0");
}

#[test]
fn test_deterministic_with_explicit_eta() {
    let (delta, a, b, c) = proof_points();
    let eta = BigUint::parse_bytes(b"1234567890abcdef1234567890abcdef", 16).unwrap();

    let mut randomizer = ProofRandomizer::new(OsScalarSource);
    let first = randomizer
        .randomize(&delta, &a, &b, &c, Some(eta.clone()))
        .unwrap();
    let second = randomizer
        .randomize(&delta, &a, &b, &c, Some(eta.clone()))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.eta, eta);
}

#[test]
fn test_absent_eta_is_fresh_each_call() {
    let (delta, a, b, c) = proof_points();
    let mut randomizer = ProofRandomizer::new(OsScalarSource);

    let first = randomizer.randomize(&delta, &a, &b, &c, None).unwrap();
    let second = randomizer.randomize(&delta, &a, &b, &c, None).unwrap();

    assert_ne!(first.eta, second.eta);
    assert_ne!(first.b, second.b);
    assert_ne!(first.c, second.c);
}

#[test]
fn test_absent_eta_textual_is_fresh_each_call() {
    let (delta, a, b, c) = proof_points();
    let input = ProofInput {
        delta: hex_g2(&delta),
        a: hex_g1(&a),
        b: hex_g2(&b),
        c: hex_g1(&c),
        eta: None,
    };

    let mut randomizer = ProofRandomizer::new(OsScalarSource);
    let first = randomizer.randomize_text(&input).unwrap();
    let second = randomizer.randomize_text(&input).unwrap();
    assert_ne!(first.eta, second.eta);
    assert_ne!(first.b, second.b);
    assert_ne!(first.c, second.c);
}

#[test]
fn test_blinding_composes_additively() {
    let (delta, a, b, c) = proof_points();
    let mut source = OsScalarSource;
    let eta1 = source.next_scalar().unwrap();
    let eta2 = source.next_scalar().unwrap();

    let mut randomizer = ProofRandomizer::new(FixedScalarSource::default());

    // Delta + eta1*B, then (Delta + eta1*B) + eta2*B
    let once = randomizer
        .randomize(&delta, &a, &b, &c, Some(eta1.clone()))
        .unwrap();
    let twice = randomizer
        .randomize(&once.b, &a, &b, &once.c, Some(eta2.clone()))
        .unwrap();

    let r = BigUint::from_bytes_be(&FR_MODULUS);
    let combined = (eta1 + eta2) % &r;
    let direct = randomizer
        .randomize(&delta, &a, &b, &c, Some(combined))
        .unwrap();

    assert_eq!(twice.b, direct.b);
    assert_eq!(twice.c, direct.c);
}

#[test]
fn test_eta_reduction_is_implicit() {
    let (delta, a, b, c) = proof_points();
    let r = BigUint::from_bytes_be(&FR_MODULUS);
    let small = BigUint::from(99u32);
    let wide = (r << 8) + &small;
    assert_eq!(reduce_scalar(&wide), reduce_scalar(&small));

    let mut randomizer = ProofRandomizer::new(OsScalarSource);
    let reduced = randomizer
        .randomize(&delta, &a, &b, &c, Some(small))
        .unwrap();
    let unreduced = randomizer
        .randomize(&delta, &a, &b, &c, Some(wide.clone()))
        .unwrap();

    assert_eq!(reduced.b, unreduced.b);
    assert_eq!(reduced.c, unreduced.c);
    assert_eq!(unreduced.eta, wide);
}

#[test]
fn test_radix_prefixes_accepted_for_coordinates() {
    // G1 generator written in octal, binary and decimal
    let input = ProofInput {
        delta: hex_g2(&g2(2)),
        a: ["01".to_string(), "b10".to_string()],
        b: hex_g2(&g2(1)),
        c: ["1".to_string(), "2".to_string()],
        eta: Some("3".to_string()),
    };

    let output = ProofRandomizer::new(OsScalarSource).randomize_text(&input).unwrap();
    assert_eq!(output.b, hex_g2(&g2(5)));
    assert_eq!(output.c, hex_g1(&g1(4)));
    assert_eq!(output.eta, "0x3");
}
