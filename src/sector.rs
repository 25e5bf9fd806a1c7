// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::version::NetworkVersion;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// `SectorSize` indicates one of a set of possible sizes in the network.
///
/// The set is closed: a byte count outside of it is not a valid sector size,
/// enforced by `TryFrom<u64>` being the only widening conversion.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Copy, FromPrimitive, Serialize_repr, Deserialize_repr,
)]
#[cfg_attr(test, derive(derive_quickcheck_arbitrary::Arbitrary))]
#[repr(u64)]
pub enum SectorSize {
    _2KiB = 2 << 10,
    _8MiB = 8 << 20,
    _512MiB = 512 << 20,
    _4GiB = 4 << 30,
    _16GiB = 16 << 30,
    _32GiB = 32 << 30,
    _64GiB = 2 * (32 << 30),
}

impl TryFrom<u64> for SectorSize {
    type Error = ();

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        FromPrimitive::from_u64(value).ok_or(())
    }
}

impl fmt::Display for SectorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectorSize::_2KiB => "2 KiB",
            SectorSize::_8MiB => "8 MiB",
            SectorSize::_512MiB => "512 MiB",
            SectorSize::_4GiB => "4 GiB",
            SectorSize::_16GiB => "16 GiB",
            SectorSize::_32GiB => "32 GiB",
            SectorSize::_64GiB => "64 GiB",
        };
        write!(f, "{}", s)
    }
}

/// The registry of seal proof schemes.
///
/// This ordering defines the mapping to an integer identifier in a way which
/// MUST never change. The registry is append-only: identifiers are never
/// removed or reassigned once introduced, so that already-sealed sectors stay
/// verifiable, and 0 is permanently reserved as the unset identifier.
#[derive(
    PartialEq, Eq, Copy, Clone, FromPrimitive, Debug, Hash, Serialize_repr, Deserialize_repr,
)]
#[cfg_attr(test, derive(derive_quickcheck_arbitrary::Arbitrary))]
#[repr(i64)]
pub enum RegisteredSealProof {
    StackedDRG2KiBV1 = 1,
    StackedDRG8MiBV1 = 2,
    StackedDRG512MiBV1 = 3,
    StackedDRG4GiBV1 = 4,
    StackedDRG16GiBV1 = 5,
    StackedDRG32GiBV1 = 6,
    StackedDRG64GiBV1 = 7,
}

impl RegisteredSealProof {
    /// Decodes a raw registry identifier. Returns `None` for 0 and for any
    /// value no scheme has been registered under.
    pub fn from_i64(v: i64) -> Option<Self> {
        FromPrimitive::from_i64(v)
    }

    /// Returns the sector size the proof type is bound to, measured in bytes.
    /// The binding is 1:1 and permanent.
    pub fn sector_size(self) -> SectorSize {
        use RegisteredSealProof::*;
        match self {
            StackedDRG2KiBV1 => SectorSize::_2KiB,
            StackedDRG8MiBV1 => SectorSize::_8MiB,
            StackedDRG512MiBV1 => SectorSize::_512MiB,
            StackedDRG4GiBV1 => SectorSize::_4GiB,
            StackedDRG16GiBV1 => SectorSize::_16GiB,
            StackedDRG32GiBV1 => SectorSize::_32GiB,
            StackedDRG64GiBV1 => SectorSize::_64GiB,
        }
    }

    /// Returns the network version at or after which the proof type may be
    /// used for newly sealed sectors.
    pub fn min_version(self) -> NetworkVersion {
        use RegisteredSealProof::*;
        match self {
            StackedDRG2KiBV1 | StackedDRG8MiBV1 | StackedDRG512MiBV1 | StackedDRG4GiBV1
            | StackedDRG32GiBV1 | StackedDRG64GiBV1 => NetworkVersion::V0,
            StackedDRG16GiBV1 => NetworkVersion::V4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sector_size_ser_deser() {
        let json = serde_json::to_string(&SectorSize::_2KiB).unwrap();
        assert_eq!(json, "2048");

        let deser: SectorSize = serde_json::from_str(&json).unwrap();
        assert_eq!(deser, SectorSize::_2KiB);
    }

    #[test]
    fn sector_size_from_bytes() {
        assert_eq!(SectorSize::try_from(32 << 30), Ok(SectorSize::_32GiB));
        assert_eq!(SectorSize::try_from(1 << 20), Err(()));
        assert_eq!(SectorSize::try_from(0), Err(()));
    }

    #[test]
    fn round_trip_proof_ser() {
        let json = serde_json::to_string(&RegisteredSealProof::StackedDRG512MiBV1).unwrap();
        let proof: RegisteredSealProof = serde_json::from_str(&json).unwrap();
        assert_eq!(proof, RegisteredSealProof::StackedDRG512MiBV1);
    }

    #[test]
    fn zero_identifier_is_unregistered() {
        assert_eq!(RegisteredSealProof::from_i64(0), None);
        assert_eq!(RegisteredSealProof::from_i64(-1), None);
        assert_eq!(RegisteredSealProof::from_i64(8), None);
        assert_eq!(
            RegisteredSealProof::from_i64(1),
            Some(RegisteredSealProof::StackedDRG2KiBV1)
        );
    }

    #[test]
    fn proof_to_size_binding_is_injective() {
        let proofs = [
            RegisteredSealProof::StackedDRG2KiBV1,
            RegisteredSealProof::StackedDRG8MiBV1,
            RegisteredSealProof::StackedDRG512MiBV1,
            RegisteredSealProof::StackedDRG4GiBV1,
            RegisteredSealProof::StackedDRG16GiBV1,
            RegisteredSealProof::StackedDRG32GiBV1,
            RegisteredSealProof::StackedDRG64GiBV1,
        ];
        let sizes: HashSet<_> = proofs.iter().map(|p| p.sector_size()).collect();
        assert_eq!(sizes.len(), proofs.len());
    }
}
