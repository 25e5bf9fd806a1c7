// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Seal proof scheme resolution for storage network nodes.
//!
//! Given a sector size and the network version in force, the policy in this
//! crate deterministically selects the registered seal proof scheme the
//! sector must be proven under. The mapping is consensus-critical: every
//! node has to resolve the same scheme for the same inputs, or the proofs it
//! produces are rejected by the rest of the network. The [`config`] module
//! additionally guarantees at construction time that no sealing
//! configuration can be observed with an unset or unregistered scheme.

pub mod config;
pub mod policy;
pub mod sector;
pub mod version;

pub use config::{ConfigError, SealConfig, SealConfigBuilder};
pub use policy::{seal_proof_for_version, seal_proof_from_sector_size, PolicyTable, ResolveError};
pub use sector::{RegisteredSealProof, SectorSize};
pub use version::NetworkVersion;
