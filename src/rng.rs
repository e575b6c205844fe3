//! Generator algorithm families and ordering constants.
//!
//! `RngType` identifies the algorithm a generator runs. Pseudo-random
//! families are seed-driven; quasi-random families are dimension-driven.
//! Which configuration parameters a family accepts is decided by the
//! capability predicates on this enum, mirroring the checks the native
//! layer performs.

/// Result ordering: best performance for the pseudo family.
pub const ORDERING_PSEUDO_BEST: u32 = 100;
/// Result ordering: default arrangement for the pseudo family.
pub const ORDERING_PSEUDO_DEFAULT: u32 = 101;
/// Result ordering: seeded arrangement for the pseudo family.
pub const ORDERING_PSEUDO_SEEDED: u32 = 102;
/// Result ordering: default arrangement for the quasi family.
pub const ORDERING_QUASI_DEFAULT: u32 = 201;

/// Generator algorithm family.
///
/// Discriminant values are part of the native wire contract and never
/// change.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RngType {
    /// Test generator, no configurable parameters.
    Test = 0,
    /// Default pseudo-random family.
    #[default]
    PseudoDefault = 100,
    /// XORWOW pseudo-random generator.
    PseudoXorwow = 101,
    /// MRG32k3a combined multiple recursive generator.
    PseudoMrg32k3a = 121,
    /// Mersenne Twister for graphics processors.
    PseudoMtgp32 = 141,
    /// Mersenne Twister MT19937.
    PseudoMt19937 = 142,
    /// Philox 4x32-10 counter-based generator.
    PseudoPhilox4_32_10 = 161,
    /// Default quasi-random family.
    QuasiDefault = 200,
    /// 32-bit Sobol sequence.
    QuasiSobol32 = 201,
    /// Scrambled 32-bit Sobol sequence.
    QuasiScrambledSobol32 = 202,
    /// 64-bit Sobol sequence.
    QuasiSobol64 = 203,
    /// Scrambled 64-bit Sobol sequence.
    QuasiScrambledSobol64 = 204,
}

impl RngType {
    /// Raw native value of this family.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Family for a raw native value, if it is one of the known families.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Test,
            100 => Self::PseudoDefault,
            101 => Self::PseudoXorwow,
            121 => Self::PseudoMrg32k3a,
            141 => Self::PseudoMtgp32,
            142 => Self::PseudoMt19937,
            161 => Self::PseudoPhilox4_32_10,
            200 => Self::QuasiDefault,
            201 => Self::QuasiSobol32,
            202 => Self::QuasiScrambledSobol32,
            203 => Self::QuasiSobol64,
            204 => Self::QuasiScrambledSobol64,
            _ => return None,
        })
    }

    /// Is this a seed-driven pseudo-random family?
    pub fn is_pseudo(self) -> bool {
        matches!(
            self,
            Self::PseudoDefault
                | Self::PseudoXorwow
                | Self::PseudoMrg32k3a
                | Self::PseudoMtgp32
                | Self::PseudoMt19937
                | Self::PseudoPhilox4_32_10
        )
    }

    /// Is this a dimension-driven quasi-random family?
    pub fn is_quasi(self) -> bool {
        matches!(
            self,
            Self::QuasiDefault
                | Self::QuasiSobol32
                | Self::QuasiScrambledSobol32
                | Self::QuasiSobol64
                | Self::QuasiScrambledSobol64
        )
    }

    /// Does the family accept a seed? Pseudo families only.
    pub fn supports_seed(self) -> bool {
        self.is_pseudo()
    }

    /// Does the family accept a sequence offset?
    ///
    /// The Mersenne Twister families cannot skip ahead and reject offsets,
    /// as does the test generator.
    pub fn supports_offset(self) -> bool {
        match self {
            Self::Test | Self::PseudoMtgp32 | Self::PseudoMt19937 => false,
            other => other.is_pseudo() || other.is_quasi(),
        }
    }

    /// Does the family accept a dimension count? Quasi families only.
    pub fn supports_dimensions(self) -> bool {
        self.is_quasi()
    }

    /// Native output width in bits: 64 for the 64-bit quasi families,
    /// 32 for everything else.
    pub fn native_width(self) -> u32 {
        match self {
            Self::QuasiSobol64 | Self::QuasiScrambledSobol64 => 64,
            _ => 32,
        }
    }

    /// Is the ordering constant legal for this family?
    pub fn ordering_legal(self, ordering: u32) -> bool {
        if self.is_quasi() {
            ordering == ORDERING_QUASI_DEFAULT
        } else {
            matches!(
                ordering,
                ORDERING_PSEUDO_BEST | ORDERING_PSEUDO_DEFAULT | ORDERING_PSEUDO_SEEDED
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
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
    }

    #[test]
    fn test_from_raw_roundtrip() {
        for raw in [0, 100, 101, 121, 141, 142, 161, 200, 201, 202, 203, 204] {
            let family = RngType::from_raw(raw).unwrap();
            assert_eq!(family.as_raw(), raw);
        }
        assert_eq!(RngType::from_raw(1), None);
        assert_eq!(RngType::from_raw(205), None);
    }

    #[test]
    fn test_capabilities() {
        assert!(RngType::PseudoDefault.supports_seed());
        assert!(RngType::PseudoDefault.supports_offset());
        assert!(!RngType::PseudoDefault.supports_dimensions());

        assert!(!RngType::QuasiSobol64.supports_seed());
        assert!(RngType::QuasiSobol64.supports_offset());
        assert!(RngType::QuasiSobol64.supports_dimensions());

        assert!(!RngType::PseudoMtgp32.supports_offset());
        assert!(!RngType::PseudoMt19937.supports_offset());

        assert!(!RngType::Test.supports_seed());
        assert!(!RngType::Test.supports_offset());
        assert!(!RngType::Test.supports_dimensions());
    }

    #[test]
    fn test_native_width() {
        assert_eq!(RngType::PseudoDefault.native_width(), 32);
        assert_eq!(RngType::QuasiSobol32.native_width(), 32);
        assert_eq!(RngType::QuasiSobol64.native_width(), 64);
        assert_eq!(RngType::QuasiScrambledSobol64.native_width(), 64);
    }

    #[test]
    fn test_ordering_legality() {
        assert!(RngType::PseudoDefault.ordering_legal(ORDERING_PSEUDO_DEFAULT));
        assert!(RngType::PseudoDefault.ordering_legal(ORDERING_PSEUDO_BEST));
        assert!(!RngType::PseudoDefault.ordering_legal(ORDERING_QUASI_DEFAULT));
        assert!(RngType::QuasiDefault.ordering_legal(ORDERING_QUASI_DEFAULT));
        assert!(!RngType::QuasiDefault.ordering_legal(ORDERING_PSEUDO_SEEDED));
    }
}
