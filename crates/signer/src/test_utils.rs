//! Authority doubles for exercising voucher issuance without real
//! infrastructure.

use crate::{LocalAuthority, MintAuthority};
use alloy::primitives::{address, Address, Signature, B256};
use async_trait::async_trait;
use lazynft_types::SigningError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Well-known development key, the first account of common local devnets.
pub const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address corresponding to [`TEST_KEY`].
pub const TEST_ADDRESS: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Chain id used in tests.
pub const TEST_CHAIN_ID: u64 = 31337;

/// A [`LocalAuthority`] over [`TEST_KEY`] on [`TEST_CHAIN_ID`].
pub fn test_authority() -> LocalAuthority {
    let signer = TEST_KEY.parse().expect("test key is valid");
    LocalAuthority::new(signer, TEST_CHAIN_ID)
}

/// Wraps an authority and counts how often each operation is invoked.
#[derive(Debug)]
pub struct CountingAuthority<A> {
    inner: A,
    chain_id_calls: AtomicUsize,
    sign_calls: AtomicUsize,
}

impl<A> CountingAuthority<A> {
    /// Wrap `inner`, starting both counters at zero.
    pub const fn new(inner: A) -> Self {
        Self { inner, chain_id_calls: AtomicUsize::new(0), sign_calls: AtomicUsize::new(0) }
    }

    /// Number of chain id queries so far.
    pub fn chain_id_calls(&self) -> usize {
        self.chain_id_calls.load(Ordering::SeqCst)
    }

    /// Number of signing calls so far.
    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<A: MintAuthority> MintAuthority for CountingAuthority<A> {
    async fn chain_id(&self) -> Result<u64, SigningError> {
        self.chain_id_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.chain_id().await
    }

    async fn sign_digest(&self, digest: &B256) -> Result<Signature, SigningError> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.sign_digest(digest).await
    }
}

/// Wraps an authority whose chain id query fails a fixed number of times
/// before delegating, for exercising resolution retries.
#[derive(Debug)]
pub struct FlakyChainId<A> {
    inner: A,
    failures_left: AtomicUsize,
}

impl<A> FlakyChainId<A> {
    /// Wrap `inner`; the first `failures` chain id queries will fail.
    pub const fn new(inner: A, failures: usize) -> Self {
        Self { inner, failures_left: AtomicUsize::new(failures) }
    }
}

#[async_trait]
impl<A: MintAuthority> MintAuthority for FlakyChainId<A> {
    async fn chain_id(&self) -> Result<u64, SigningError> {
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(SigningError::DomainResolution("network context unavailable".into()));
        }
        self.inner.chain_id().await
    }

    async fn sign_digest(&self, digest: &B256) -> Result<Signature, SigningError> {
        self.inner.sign_digest(digest).await
    }
}

/// Wraps an authority whose key rejects every digest.
#[derive(Debug)]
pub struct RejectingKey<A> {
    inner: A,
}

impl<A> RejectingKey<A> {
    /// Wrap `inner`; chain id queries delegate, signing always fails.
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<A: MintAuthority> MintAuthority for RejectingKey<A> {
    async fn chain_id(&self) -> Result<u64, SigningError> {
        self.inner.chain_id().await
    }

    async fn sign_digest(&self, _digest: &B256) -> Result<Signature, SigningError> {
        Err(SigningError::Signer(alloy::signers::Error::other("key rejected the digest")))
    }
}
