use std::fmt;
use std::str::FromStr;

use ethers::types::U256;
use ethers::utils::{format_ether, parse_ether};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use shrinkwraprs::Shrinkwrap;

/// An amount of the native currency, held in wei.
///
/// Parses from and displays as decimal ether, so `"0.01"` in a config
/// file means 10^16 wei.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Shrinkwrap,
)]
pub struct Ether(pub U256);

impl Ether {
    pub fn from_wei(wei: impl Into<U256>) -> Self {
        Self(wei.into())
    }
}

impl FromStr for Ether {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wei = parse_ether(s.trim())?;

        Ok(Self(wei))
    }
}

impl fmt::Display for Ether {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_ether(self.0))
    }
}

impl Serialize for Ether {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ether {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EtherVisitor;

        impl<'de> de::Visitor<'de> for EtherVisitor {
            type Value = Ether;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an ether amount like \"0.01\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Ether, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Ether, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Ether, E> {
                self.visit_str(&v.to_string())
            }
        }

        deserializer.deserialize_any(EtherVisitor)
    }
}
