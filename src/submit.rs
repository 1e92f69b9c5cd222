//! Signing and submission
//!
//! The signing key is derived from the mnemonic with standard hierarchical
//! derivation at the default path. Transactions are signed as legacy
//! (EIP-155) payloads, matching the fixed gas-price model, and submitted as
//! raw bytes. Node rejections are surfaced verbatim and never retried: each
//! transaction carries operator-auditable financial risk.

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::{AnyNetwork, TxSignerSync};
use alloy::primitives::{Bytes, TxKind, B256, U256};
use alloy::providers::Provider;
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

use crate::error::{Error, Result};
use crate::tx::TransactionRequest;

/// A signed transaction, consumed exactly once by submission
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub raw: Bytes,
    pub hash: B256,
}

/// Derives the signing account from a mnemonic at the default derivation path.
pub fn derive_signer(mnemonic: &str) -> Result<PrivateKeySigner> {
    MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .build()
        .map_err(|e| Error::Signing(e.to_string()))
}

/// Signs a transaction request. Deterministic given the request and key.
pub fn sign_transaction(
    signer: &PrivateKeySigner,
    request: &TransactionRequest,
    chain_id: u64,
) -> Result<SignedTransaction> {
    let mut tx = TxLegacy {
        chain_id: Some(chain_id),
        nonce: request.nonce,
        gas_price: request.gas_price,
        gas_limit: request.gas_limit,
        to: TxKind::Call(request.to),
        value: U256::ZERO,
        input: request.data.clone(),
    };

    let signature = signer
        .sign_transaction_sync(&mut tx)
        .map_err(|e| Error::Signing(e.to_string()))?;

    let envelope = TxEnvelope::Legacy(tx.into_signed(signature));
    Ok(SignedTransaction {
        hash: *envelope.tx_hash(),
        raw: Bytes::from(envelope.encoded_2718()),
    })
}

/// Submits raw signed bytes and returns the transaction hash.
pub async fn submit<P>(provider: &P, signed: &SignedTransaction) -> Result<B256>
where
    P: Provider<AnyNetwork>,
{
    provider
        .send_raw_transaction(signed.raw.as_ref())
        .await
        .map_err(|e| Error::Submission(e.to_string()))?;
    Ok(signed.hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::GasConfig;
    use alloy::primitives::address;

    const TEST_MNEMONIC: &str =
        "test test test test test test test test test test test junk";

    fn request() -> TransactionRequest {
        TransactionRequest::new(
            address!("1111111111111111111111111111111111111111"),
            Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb]),
            &GasConfig::default(),
            0,
        )
    }

    #[test]
    fn test_derive_signer_default_path() {
        // First account of the well-known development mnemonic.
        let signer = derive_signer(TEST_MNEMONIC).unwrap();
        assert_eq!(
            signer.address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_derive_signer_rejects_bad_phrase() {
        let err = derive_signer("definitely not a bip39 phrase").unwrap_err();
        assert!(matches!(err, Error::Signing(_)));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = derive_signer(TEST_MNEMONIC).unwrap();
        let a = sign_transaction(&signer, &request(), 1).unwrap();
        let b = sign_transaction(&signer, &request(), 1).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.raw, b.raw);
        assert!(!a.raw.is_empty());
    }

    #[test]
    fn test_chain_id_affects_signature() {
        let signer = derive_signer(TEST_MNEMONIC).unwrap();
        let mainnet = sign_transaction(&signer, &request(), 1).unwrap();
        let testnet = sign_transaction(&signer, &request(), 11_155_111).unwrap();
        assert_ne!(mainnet.hash, testnet.hash);
    }
}
