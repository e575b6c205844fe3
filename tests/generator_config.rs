//! Integration tests for generator construction and configuration
//!
//! These tests verify the public configuration surface: constants, status
//! decoding, and the family-dependent legality of property writes.

use randr::prelude::*;
use randr::rng::{
    ORDERING_PSEUDO_BEST, ORDERING_PSEUDO_DEFAULT, ORDERING_PSEUDO_SEEDED, ORDERING_QUASI_DEFAULT,
};
use randr::status;

#[test]
fn test_constants() {
    assert_eq!(status::STATUS_SUCCESS, 0);
    assert_eq!(status::STATUS_VERSION_MISMATCH, 100);
    assert_eq!(status::STATUS_NOT_INITIALIZED, 101);
    assert_eq!(status::STATUS_ALLOCATION_FAILED, 102);
    assert_eq!(status::STATUS_TYPE_ERROR, 103);
    assert_eq!(status::STATUS_OUT_OF_RANGE, 104);
    assert_eq!(status::STATUS_LENGTH_NOT_MULTIPLE, 105);
    assert_eq!(status::STATUS_DOUBLE_PRECISION_REQUIRED, 106);
    assert_eq!(status::STATUS_LAUNCH_FAILURE, 201);
    assert_eq!(status::STATUS_PREEXISTING_FAILURE, 202);
    assert_eq!(status::STATUS_INITIALIZATION_FAILED, 203);
    assert_eq!(status::STATUS_ARCH_MISMATCH, 204);
    assert_eq!(status::STATUS_INTERNAL_ERROR, 999);

    assert_eq!(RngType::Test.as_raw(), 0);
    assert_eq!(RngType::PseudoDefault.as_raw(), 100);
    assert_eq!(RngType::PseudoXorwow.as_raw(), 101);
    assert_eq!(RngType::PseudoMrg32k3a.as_raw(), 121);
    assert_eq!(RngType::PseudoMtgp32.as_raw(), 141);
    assert_eq!(RngType::PseudoMt19937.as_raw(), 142);
    assert_eq!(RngType::PseudoPhilox4_32_10.as_raw(), 161);
    assert_eq!(RngType::QuasiDefault.as_raw(), 200);
    assert_eq!(RngType::QuasiSobol32.as_raw(), 201);
    assert_eq!(RngType::QuasiScrambledSobol32.as_raw(), 202);
    assert_eq!(RngType::QuasiSobol64.as_raw(), 203);
    assert_eq!(RngType::QuasiScrambledSobol64.as_raw(), 204);

    assert_eq!(ORDERING_PSEUDO_BEST, 100);
    assert_eq!(ORDERING_PSEUDO_DEFAULT, 101);
    assert_eq!(ORDERING_PSEUDO_SEEDED, 102);
    assert_eq!(ORDERING_QUASI_DEFAULT, 201);
}

#[test]
fn test_errors_decode_with_separator() {
    for &code in status::ALL_STATUSES {
        let decoded = status::decode(code);
        let idx = decoded.find(" | ").expect("missing separator");
        assert!(idx > 0);
    }
}

#[test]
fn test_create_and_drop() {
    let device = DeviceTarget::new();
    let rng = Generator::new(&device).unwrap();
    drop(rng);

    let host = HostTarget::new();
    let rng = Generator::new(&host).unwrap();
    drop(rng);
}

#[test]
fn test_properties() {
    let target = DeviceTarget::new();
    let mut rng = Generator::new(&target).unwrap();
    assert_eq!(rng.rng_type(), RngType::PseudoDefault);

    let version = rng.version();
    assert!(version > 0);

    // ordering, seed, offset, dimensions
    assert_eq!(rng.ordering(), 0);
    rng.set_ordering(ORDERING_PSEUDO_DEFAULT).unwrap();

    assert!(rng.set_dimensions(64).is_err());
    assert_eq!(rng.dimensions(), 0);

    assert_eq!(rng.ordering(), ORDERING_PSEUDO_DEFAULT);
    assert_eq!(rng.seed(), 0);
    assert_eq!(rng.offset(), 0);
    rng.set_seed(123.0).unwrap();
    assert_eq!(rng.seed(), 123);
    assert_eq!(rng.offset(), 0);
    rng.set_offset(4096.0).unwrap();
    assert_eq!(rng.seed(), 123);
    assert_eq!(rng.offset(), 4096);
    rng.set_seed(12345.1).unwrap();
    rng.set_offset(8192.3).unwrap();
    assert_eq!(rng.seed(), 12345);
    assert_eq!(rng.offset(), 8192);
    assert_eq!(rng.ordering(), ORDERING_PSEUDO_DEFAULT);

    let mut rng = Generator::with_rng_type(&target, RngType::QuasiDefault).unwrap();
    rng.set_dimensions(64).unwrap();
    assert_eq!(rng.dimensions(), 64);
    assert_eq!(rng.rng_type(), RngType::QuasiDefault);
    assert_eq!(rng.ordering(), 0);
    assert_eq!(rng.seed(), 0);
    assert_eq!(rng.offset(), 0);
}

#[test]
fn test_configuration_error_is_distinguishable() {
    let target = HostTarget::new();
    let mut rng = Generator::new(&target).unwrap();
    let err = rng.set_dimensions(16).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.status(), status::STATUS_TYPE_ERROR);
    assert!(err.diagnostic().contains(" | "));
}

#[test]
fn test_ordering_must_match_family() {
    let target = HostTarget::new();
    let mut rng = Generator::new(&target).unwrap();
    let err = rng.set_ordering(ORDERING_QUASI_DEFAULT).unwrap_err();
    assert_eq!(err.status(), status::STATUS_OUT_OF_RANGE);
    assert_eq!(rng.ordering(), 0);

    let mut rng = Generator::with_rng_type(&target, RngType::QuasiSobol32).unwrap();
    rng.set_ordering(ORDERING_QUASI_DEFAULT).unwrap();
    assert_eq!(rng.ordering(), ORDERING_QUASI_DEFAULT);
}

#[test]
fn test_offset_rejected_for_mersenne_families() {
    let target = HostTarget::new();
    for family in [RngType::PseudoMtgp32, RngType::PseudoMt19937] {
        let mut rng = Generator::with_rng_type(&target, family).unwrap();
        assert!(rng.set_offset(4096.0).is_err());
        assert_eq!(rng.offset(), 0);
        // Seeding still works for these families.
        rng.set_seed(7.0).unwrap();
        assert_eq!(rng.seed(), 7);
    }
}

#[test]
fn test_generator_usable_after_rejected_write() {
    let target = HostTarget::new();
    let mut rng = Generator::new(&target).unwrap();
    rng.set_seed(123.0).unwrap();
    assert!(rng.set_dimensions(8).is_err());

    let mut values = vec![0u32; 256];
    let mut buf = BufferMut::from(values.as_mut_slice());
    rng.generate32(&mut buf, None).unwrap();
    assert!(values.iter().any(|&v| v != 0));
}
