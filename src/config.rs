// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::sector::{RegisteredSealProof, SectorSize};
use thiserror::Error;
use tracing::warn;

/// Sealing configuration error.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The builder was finished without a seal proof type.
    #[error("seal proof type must be set before a sealing config can be built")]
    MissingSealProofType,
    /// The raw identifier is 0 or not present in the registry.
    #[error("invalid seal proof type identifier: {0}")]
    InvalidSealProofType(i64),
}

/// Immutable sealing configuration handed to the proving subsystem.
///
/// Construction guarantees the seal proof type is a registered scheme; a
/// config with an unset or zero-valued scheme can never be observed. A
/// configuration change produces a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealConfig {
    seal_proof_type: RegisteredSealProof,
}

impl SealConfig {
    pub fn new(seal_proof_type: RegisteredSealProof) -> Self {
        SealConfig { seal_proof_type }
    }

    pub fn builder() -> SealConfigBuilder {
        SealConfigBuilder::default()
    }

    pub fn seal_proof_type(&self) -> RegisteredSealProof {
        self.seal_proof_type
    }

    /// Returns the sector size the config seals, which is measured in bytes.
    pub fn sector_size(&self) -> SectorSize {
        self.seal_proof_type.sector_size()
    }
}

impl TryFrom<i64> for SealConfig {
    type Error = ConfigError;

    /// Decodes a raw registry identifier into a config, rejecting 0 and any
    /// identifier no scheme was registered under.
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match RegisteredSealProof::from_i64(raw) {
            Some(proof) => Ok(SealConfig::new(proof)),
            None => {
                warn!("rejecting sealing config with unregistered seal proof type {raw}");
                Err(ConfigError::InvalidSealProofType(raw))
            }
        }
    }
}

/// Builder for [`SealConfig`]. The seal proof type is mandatory; finishing
/// the builder without one fails rather than defaulting.
#[derive(Debug, Default, Clone)]
pub struct SealConfigBuilder {
    seal_proof_type: Option<RegisteredSealProof>,
}

impl SealConfigBuilder {
    pub fn seal_proof_type(mut self, proof: RegisteredSealProof) -> Self {
        self.seal_proof_type = Some(proof);
        self
    }

    /// A node must never start sealing with a defaulted scheme: a sector
    /// sealed under the wrong scheme is rejected by the rest of the network,
    /// so a missing scheme fails here, before any sealing work.
    pub fn build(self) -> Result<SealConfig, ConfigError> {
        match self.seal_proof_type {
            Some(proof) => Ok(SealConfig::new(proof)),
            None => {
                warn!("rejecting sealing config built without a seal proof type");
                Err(ConfigError::MissingSealProofType)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn builder_requires_seal_proof_type() {
        assert_eq!(
            SealConfig::builder().build(),
            Err(ConfigError::MissingSealProofType)
        );
    }

    #[test]
    fn builder_round_trips_seal_proof_type() {
        let config = SealConfig::builder()
            .seal_proof_type(RegisteredSealProof::StackedDRG32GiBV1)
            .build()
            .unwrap();
        assert_eq!(
            config.seal_proof_type(),
            RegisteredSealProof::StackedDRG32GiBV1
        );
        assert_eq!(config.sector_size(), SectorSize::_32GiB);
    }

    #[test]
    fn zero_identifier_rejected() {
        assert_eq!(
            SealConfig::try_from(0),
            Err(ConfigError::InvalidSealProofType(0))
        );
        assert_eq!(
            SealConfig::try_from(42),
            Err(ConfigError::InvalidSealProofType(42))
        );
    }

    #[test]
    fn registered_identifier_accepted() {
        let config = SealConfig::try_from(1).unwrap();
        assert_eq!(
            config.seal_proof_type(),
            RegisteredSealProof::StackedDRG2KiBV1
        );
    }

    #[quickcheck]
    fn any_registered_scheme_builds(proof: RegisteredSealProof) -> bool {
        let config = SealConfig::builder().seal_proof_type(proof).build();
        config.map(|c| c.seal_proof_type()) == Ok(proof)
    }

    #[quickcheck]
    fn raw_identifier_round_trip(proof: RegisteredSealProof) -> bool {
        let raw = proof as i64;
        SealConfig::try_from(raw).map(|c| c.seal_proof_type()) == Ok(proof)
    }
}
