use std::fmt;
use std::str::FromStr;

use ethers::prelude::k256::SecretKey;

#[derive(Clone)]
pub struct PrivateKey {
    pub key: SecretKey,
}

impl FromStr for PrivateKey {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches("0x");

        let bytes = hex::decode(s)?;

        let key = SecretKey::from_slice(&bytes)?;

        Ok(Self { key })
    }
}

// Never print the key itself, logs end up in CI output
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    const KEY: [u8; 32] = hex!(
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
    );

    #[test]
    fn parses_with_and_without_prefix() {
        let plain: PrivateKey =
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .parse()
                .unwrap();
        let prefixed: PrivateKey =
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80\n"
                .parse()
                .unwrap();

        assert_eq!(plain.key.to_bytes().as_slice(), &KEY);
        assert_eq!(prefixed.key.to_bytes().as_slice(), &KEY);
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-a-key".parse::<PrivateKey>().is_err());
        assert!("0x1234".parse::<PrivateKey>().is_err());
    }

    #[test]
    fn debug_does_not_leak() {
        let key: PrivateKey = hex::encode(KEY).parse().unwrap();

        let debug = format!("{key:?}");

        assert!(!debug.contains("ac0974"));
    }
}
