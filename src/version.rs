// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Specifies the network version.
///
/// A monotonically increasing epoch counter, advanced by network-wide
/// upgrades. The policy code treats it as an opaque ordered value and never
/// mutates it; only its ordering against tier activation versions matters.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NetworkVersion(pub u32);

impl NetworkVersion {
    /// genesis
    pub const V0: Self = Self(0);
    /// breeze
    pub const V1: Self = Self(1);
    /// smoke
    pub const V2: Self = Self(2);
    /// ignition
    pub const V3: Self = Self(3);
    /// actors v2
    pub const V4: Self = Self(4);
    /// tape
    pub const V5: Self = Self(5);
    /// kumquat
    pub const V6: Self = Self(6);
    /// calico
    pub const V7: Self = Self(7);
    /// persian
    pub const V8: Self = Self(8);
    /// orange
    pub const V9: Self = Self(9);
    /// trust
    pub const V10: Self = Self(10);
    /// norwegian
    pub const V11: Self = Self(11);
    /// turbo
    pub const V12: Self = Self(12);
    /// hyperdrive
    pub const V13: Self = Self(13);
    /// chocolate
    pub const V14: Self = Self(14);
    /// oh snap
    pub const V15: Self = Self(15);
    /// skyr
    pub const V16: Self = Self(16);
}

impl From<u32> for NetworkVersion {
    fn from(v: u32) -> Self {
        NetworkVersion(v)
    }
}

impl From<NetworkVersion> for u32 {
    fn from(v: NetworkVersion) -> u32 {
        v.0
    }
}

impl TryFrom<i64> for NetworkVersion {
    type Error = ();

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        u32::try_from(v).map(NetworkVersion).map_err(|_| ())
    }
}

impl Display for NetworkVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

impl FromStr for NetworkVersion {
    type Err = <u32 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: u32 = s.parse()?;
        Ok(v.into())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for NetworkVersion {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        NetworkVersion(u32::arbitrary(g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_epoch() {
        assert!(NetworkVersion::V0 < NetworkVersion::V4);
        assert!(NetworkVersion::V4 <= NetworkVersion(4));
        assert_eq!(NetworkVersion::V16, NetworkVersion(16));
    }

    #[test]
    fn negative_epochs_are_rejected() {
        assert_eq!(NetworkVersion::try_from(-1i64), Err(()));
        assert_eq!(NetworkVersion::try_from(0i64), Ok(NetworkVersion::V0));
        assert_eq!(NetworkVersion::try_from(14i64), Ok(NetworkVersion::V14));
    }

    #[test]
    fn transparent_ser_deser() {
        let json = serde_json::to_string(&NetworkVersion::V4).unwrap();
        assert_eq!(json, "4");
        let deser: NetworkVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(deser, NetworkVersion::V4);
    }

    #[test]
    fn parse_from_string() {
        assert_eq!("7".parse::<NetworkVersion>().unwrap(), NetworkVersion::V7);
        assert!("-1".parse::<NetworkVersion>().is_err());
    }
}
