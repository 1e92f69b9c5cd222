//! Transaction builder
//!
//! Assembles a fully determined transaction record for a contract call. The
//! nonce is the deployer's live on-chain transaction count, fetched fresh
//! for every build with no caching or reservation: concurrent invocations
//! from the same deployer race on the nonce and are unsupported.

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;

use crate::error::{Error, Result};
use crate::network::GasConfig;

/// A transaction ready for signing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub to: Address,
    pub data: Bytes,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub nonce: u64,
}

impl TransactionRequest {
    pub fn new(to: Address, data: Bytes, gas: &GasConfig, nonce: u64) -> Self {
        Self {
            to,
            data,
            gas_price: gas.gas_price,
            gas_limit: gas.gas_limit,
            nonce,
        }
    }
}

/// Fetches the deployer's current transaction count.
pub async fn fetch_nonce<P>(provider: &P, deployer: Address) -> Result<u64>
where
    P: Provider<AnyNetwork>,
{
    provider
        .get_transaction_count(deployer)
        .await
        .map_err(|e| Error::NonceFetch {
            address: deployer,
            reason: e.to_string(),
        })
}

/// Builds a [`TransactionRequest`] with a freshly fetched nonce.
pub async fn build_transaction<P>(
    provider: &P,
    deployer: Address,
    to: Address,
    data: Bytes,
    gas: &GasConfig,
) -> Result<TransactionRequest>
where
    P: Provider<AnyNetwork>,
{
    let nonce = fetch_nonce(provider, deployer).await?;
    Ok(TransactionRequest::new(to, data, gas, nonce))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_request_carries_fixed_gas_parameters() {
        let gas = GasConfig::default();
        let to = address!("1111111111111111111111111111111111111111");
        let request = TransactionRequest::new(to, Bytes::from(vec![0xde, 0xad]), &gas, 7);

        assert_eq!(request.to, to);
        assert_eq!(request.gas_price, 140_000_000_000);
        assert_eq!(request.gas_limit, 500_000);
        assert_eq!(request.nonce, 7);
        assert_eq!(request.data.as_ref(), &[0xde, 0xad]);
    }
}
