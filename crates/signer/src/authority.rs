use alloy::{
    primitives::{Address, Signature, B256},
    signers::{local::PrivateKeySigner, Signer},
};
use async_trait::async_trait;
use lazynft_types::SigningError;

/// A signing capability bound to one key and one network context.
///
/// The two operations are exactly what voucher issuance needs: report the
/// chain id that anchors the signing domain, and produce a signature over a
/// 32-byte digest. Implementations must sign the digest bytes as given; the
/// digest already carries the EIP-712 prefix, so re-hashing or prefixing it
/// again breaks verification.
#[async_trait]
pub trait MintAuthority: Send + Sync {
    /// Query the chain id of the network the voucher contract is deployed
    /// on. May suspend on I/O; a failure surfaces as
    /// [`SigningError::DomainResolution`].
    async fn chain_id(&self) -> Result<u64, SigningError>;

    /// Sign the exact digest bytes with the authority's key.
    async fn sign_digest(&self, digest: &B256) -> Result<Signature, SigningError>;
}

/// A [`MintAuthority`] backed by an in-memory secp256k1 key and a statically
/// known chain id.
#[derive(Debug, Clone)]
pub struct LocalAuthority {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl LocalAuthority {
    /// Create an authority from a local key and the chain id of the
    /// deployment it signs for.
    pub const fn new(signer: PrivateKeySigner, chain_id: u64) -> Self {
        Self { signer, chain_id }
    }

    /// Get the address of the underlying key, i.e. the public identity
    /// verifiers check voucher signatures against.
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl MintAuthority for LocalAuthority {
    async fn chain_id(&self) -> Result<u64, SigningError> {
        Ok(self.chain_id)
    }

    async fn sign_digest(&self, digest: &B256) -> Result<Signature, SigningError> {
        self.signer.sign_hash(digest).await.map_err(Into::into)
    }
}
