use crate::MintAuthority;
use alloy::{primitives::Address, sol_types::Eip712Domain};
use lazynft_types::{voucher_domain, SignedVoucher, SigningError, UnsignedVoucher};
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

/// Issues signed vouchers for one contract deployment.
///
/// Construction does no network or cryptographic work. The signing domain is
/// resolved from the authority's chain id on the first
/// [`create_voucher`](Self::create_voucher) call and cached for the lifetime
/// of this instance; pointing at a different deployment means constructing a
/// new signer.
#[derive(Debug)]
pub struct VoucherSigner<A> {
    /// The injected signing capability.
    authority: A,
    /// Address of the voucher contract that will honor the vouchers.
    verifying_contract: Address,
    /// Domain slot, filled once on first use.
    domain: OnceCell<Eip712Domain>,
}

impl<A: MintAuthority> VoucherSigner<A> {
    /// Create a signer for the voucher contract at `verifying_contract`,
    /// signing with `authority`.
    pub const fn new(verifying_contract: Address, authority: A) -> Self {
        Self { authority, verifying_contract, domain: OnceCell::const_new() }
    }

    /// Get the contract address that anchors the signing domain.
    pub const fn verifying_contract(&self) -> Address {
        self.verifying_contract
    }

    /// Get the injected signing capability.
    pub const fn authority(&self) -> &A {
        &self.authority
    }

    /// Get the signing domain, resolving it on first use.
    ///
    /// Concurrent first calls share a single chain id query. A failed query
    /// leaves the slot empty, so the next call retries resolution.
    pub async fn domain(&self) -> Result<&Eip712Domain, SigningError> {
        self.domain
            .get_or_try_init(|| async {
                let chain_id = self.authority.chain_id().await?;
                debug!(
                    chain_id,
                    verifying_contract = %self.verifying_contract,
                    "resolved voucher signing domain"
                );
                Ok(voucher_domain(chain_id, self.verifying_contract))
            })
            .await
    }

    /// Build and sign a voucher.
    ///
    /// Resolves (or reuses) the domain, computes the EIP-712 digest of the
    /// voucher under it, and signs that digest. Errors propagate unmodified
    /// and nothing is returned on failure.
    #[instrument(skip_all, fields(token_id = %unsigned.token_id()))]
    pub async fn create_voucher(
        &self,
        unsigned: UnsignedVoucher,
    ) -> Result<SignedVoucher, SigningError> {
        let domain = self.domain().await?;

        let digest = unsigned.signing_hash(domain);
        let signature = self.authority.sign_digest(&digest).await?;

        Ok(SignedVoucher::new(unsigned.into_voucher(), digest, signature))
    }
}
