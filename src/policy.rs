// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::sector::{RegisteredSealProof, SectorSize};
use crate::version::NetworkVersion;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Seal proof resolution error.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The sector size has no seal proof registered in the tier active at the
    /// queried network version. Never recovered with a fallback scheme.
    #[error("unsupported sector size for miner: {0}")]
    UnsupportedSectorSize(u64),
    /// The network version is outside the valid domain.
    #[error("unsupported network version: {0}")]
    UnsupportedNetworkVersion(i64),
}

/// A single row of the seal proof registry: the network version at or after
/// which `proof` is usable for sectors of `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeEntry {
    pub min_version: NetworkVersion,
    pub size: SectorSize,
    pub proof: RegisteredSealProof,
}

/// Every registered seal proof with its activation version. Append-only:
/// adding a tier means adding rows, existing rows are never removed or
/// reassigned once sectors have been sealed under them.
const SCHEMES: [SchemeEntry; 7] = [
    SchemeEntry {
        min_version: NetworkVersion::V0,
        size: SectorSize::_2KiB,
        proof: RegisteredSealProof::StackedDRG2KiBV1,
    },
    SchemeEntry {
        min_version: NetworkVersion::V0,
        size: SectorSize::_8MiB,
        proof: RegisteredSealProof::StackedDRG8MiBV1,
    },
    SchemeEntry {
        min_version: NetworkVersion::V0,
        size: SectorSize::_512MiB,
        proof: RegisteredSealProof::StackedDRG512MiBV1,
    },
    SchemeEntry {
        min_version: NetworkVersion::V0,
        size: SectorSize::_4GiB,
        proof: RegisteredSealProof::StackedDRG4GiBV1,
    },
    SchemeEntry {
        min_version: NetworkVersion::V0,
        size: SectorSize::_32GiB,
        proof: RegisteredSealProof::StackedDRG32GiBV1,
    },
    SchemeEntry {
        min_version: NetworkVersion::V0,
        size: SectorSize::_64GiB,
        proof: RegisteredSealProof::StackedDRG64GiBV1,
    },
    SchemeEntry {
        min_version: NetworkVersion::V4,
        size: SectorSize::_16GiB,
        proof: RegisteredSealProof::StackedDRG16GiBV1,
    },
];

/// A snapshot of the sector size to seal proof mapping, valid from
/// `min_version` onward until superseded by a later tier.
#[derive(Debug)]
pub struct VersionTier {
    pub min_version: NetworkVersion,
    schemes: Vec<(SectorSize, RegisteredSealProof)>,
}

impl VersionTier {
    /// Exact lookup. A size absent from the tier is unsupported at every
    /// version the tier covers, never rounded to a neighboring size.
    pub fn seal_proof(&self, size: SectorSize) -> Option<RegisteredSealProof> {
        self.schemes
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, p)| *p)
    }
}

/// Version-tiered view of the seal proof registry, built once at first use
/// and read-only for the life of the process.
#[derive(Debug)]
pub struct PolicyTable {
    // Sorted by min_version descending; the last tier covers version 0.
    tiers: Vec<VersionTier>,
}

static TABLE: Lazy<PolicyTable> = Lazy::new(|| PolicyTable::from_entries(&SCHEMES));

impl PolicyTable {
    /// Collapses registry rows into cumulative tiers, one per distinct
    /// activation version. The tier active at version `v` carries every row
    /// with an activation version at or below `v`, so each tier's mapping is
    /// a superset of every earlier tier's.
    fn from_entries(entries: &[SchemeEntry]) -> Self {
        let mut thresholds: Vec<NetworkVersion> =
            entries.iter().map(|e| e.min_version).collect();
        thresholds.sort();
        thresholds.dedup();

        let mut tiers: Vec<VersionTier> = thresholds
            .into_iter()
            .map(|min_version| VersionTier {
                min_version,
                schemes: entries
                    .iter()
                    .filter(|e| e.min_version <= min_version)
                    .map(|e| (e.size, e.proof))
                    .collect(),
            })
            .collect();
        tiers.sort_by(|a, b| b.min_version.cmp(&a.min_version));
        PolicyTable { tiers }
    }

    pub fn global() -> &'static PolicyTable {
        &TABLE
    }

    /// Returns the tier with the greatest activation version at or below
    /// `version`. Total over all versions: the legacy tier activates at
    /// version 0, so the scan always terminates there.
    pub fn active_tier(&self, version: NetworkVersion) -> &VersionTier {
        self.tiers
            .iter()
            .find(|tier| tier.min_version <= version)
            .expect("legacy tier activates at version 0")
    }

    /// The earliest tier.
    pub fn legacy_tier(&self) -> &VersionTier {
        self.tiers.last().expect("scheme registry is never empty")
    }
}

/// Resolves the seal proof for a sector size against the legacy tier only.
/// Version-agnostic path, used where no network version context is
/// available.
pub fn seal_proof_from_sector_size(size: u64) -> Result<RegisteredSealProof, ResolveError> {
    let ssize =
        SectorSize::try_from(size).map_err(|_| ResolveError::UnsupportedSectorSize(size))?;
    PolicyTable::global()
        .legacy_tier()
        .seal_proof(ssize)
        .ok_or(ResolveError::UnsupportedSectorSize(size))
}

/// Resolves the seal proof a newly sealed sector of `size` bytes must use at
/// network version `version`.
///
/// Identical inputs resolve to the identical scheme on every node, in every
/// process. There is no fallback: a node that cannot resolve a scheme must
/// not seal the sector, since a sector sealed under a scheme the rest of the
/// network disagrees with is unverifiable.
pub fn seal_proof_for_version(
    size: u64,
    version: i64,
) -> Result<RegisteredSealProof, ResolveError> {
    let nv = NetworkVersion::try_from(version)
        .map_err(|_| ResolveError::UnsupportedNetworkVersion(version))?;
    let ssize =
        SectorSize::try_from(size).map_err(|_| ResolveError::UnsupportedSectorSize(size))?;
    PolicyTable::global()
        .active_tier(nv)
        .seal_proof(ssize)
        .ok_or(ResolveError::UnsupportedSectorSize(size))
}
