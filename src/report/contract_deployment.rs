use ethers::abi::Token;
use ethers::types::{Address, H256, U256};
use eyre::bail;

/// A contract whose creation transaction has been mined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub transaction_hash: H256,
    pub block_number: Option<u64>,
}

/// Output of `getStats()`.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
#[display(
    fmt = "totalPredictions: {}, totalVotes: {}",
    total_predictions,
    total_votes
)]
pub struct DaoStats {
    pub total_predictions: U256,
    pub total_votes: U256,
}

impl DaoStats {
    pub fn from_tokens(tokens: Vec<Token>) -> eyre::Result<Self> {
        let tokens = match tokens.as_slice() {
            [Token::Tuple(inner)] => inner.clone(),
            _ => tokens,
        };

        match tokens.as_slice() {
            [Token::Uint(total_predictions), Token::Uint(total_votes)] => {
                Ok(Self {
                    total_predictions: *total_predictions,
                    total_votes: *total_votes,
                })
            }
            other => bail!("Unexpected getStats output: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flat_and_tuple_output() {
        let flat = vec![Token::Uint(3.into()), Token::Uint(7.into())];
        let tuple = vec![Token::Tuple(flat.clone())];

        let expected = DaoStats {
            total_predictions: 3.into(),
            total_votes: 7.into(),
        };

        assert_eq!(DaoStats::from_tokens(flat).unwrap(), expected);
        assert_eq!(DaoStats::from_tokens(tuple).unwrap(), expected);
        assert_eq!(
            expected.to_string(),
            "totalPredictions: 3, totalVotes: 7"
        );
    }

    #[test]
    fn rejects_wrong_shape() {
        let tokens = vec![Token::Bool(true)];

        assert!(DaoStats::from_tokens(tokens).is_err());
    }
}
