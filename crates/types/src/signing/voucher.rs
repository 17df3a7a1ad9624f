use crate::{signing::SigningError, Voucher};
use alloy::{
    primitives::{Address, Signature, SignatureError, B256, U256},
    sol_types::{Eip712Domain, SolStruct},
};
use serde::{Deserialize, Serialize};

/// A voucher together with the digest it hashes to and the authority's
/// signature over that digest.
///
/// This is the value handed to a recipient. The digest and signature are
/// derived data: a verifier recomputes the digest from the raw voucher
/// fields and its own copy of the domain, and accepts the voucher only if
/// the signature checks out against the authority's public identity.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SignedVoucher {
    /// The voucher fields.
    voucher: Voucher,
    /// The EIP-712 signing hash of the voucher.
    digest: B256,
    /// The authority's signature over `digest`.
    signature: Signature,
}

impl SignedVoucher {
    /// Creates a new signed voucher.
    pub const fn new(voucher: Voucher, digest: B256, signature: Signature) -> Self {
        Self { voucher, digest, signature }
    }

    /// Get the voucher fields.
    pub const fn voucher(&self) -> &Voucher {
        &self.voucher
    }

    /// Get the 32-byte signing hash the signature covers.
    pub const fn digest(&self) -> B256 {
        self.digest
    }

    /// Get the signature.
    pub const fn signature(&self) -> Signature {
        self.signature
    }

    /// Get the signature as 65 raw bytes (r || s || v), the layout the
    /// voucher contract expects.
    pub fn signature_bytes(&self) -> [u8; 65] {
        self.signature.as_bytes()
    }

    /// Recover the address that signed the digest.
    pub fn recover_signer(&self) -> Result<Address, SignatureError> {
        self.signature.recover_address_from_prehash(&self.digest)
    }

    /// Decompose the SignedVoucher into its parts.
    pub fn into_parts(self) -> (Voucher, B256, Signature) {
        (self.voucher, self.digest, self.signature)
    }
}

/// A voucher under construction, not yet bound to a domain or signed.
///
/// `min_price` defaults to zero. Typical use:
/// `UnsignedVoucher::new(token_id, uri).with_min_price(price)`, then hand it
/// to a `VoucherSigner`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UnsignedVoucher {
    voucher: Voucher,
}

impl From<Voucher> for UnsignedVoucher {
    fn from(voucher: Voucher) -> Self {
        Self { voucher }
    }
}

impl From<UnsignedVoucher> for Voucher {
    fn from(unsigned: UnsignedVoucher) -> Self {
        unsigned.voucher
    }
}

impl UnsignedVoucher {
    /// Create a voucher for an asset identifier and metadata reference, with
    /// a minimum price of zero.
    pub fn new(token_id: impl Into<U256>, uri: impl Into<String>) -> Self {
        Self {
            voucher: Voucher {
                tokenId: token_id.into(),
                minPrice: U256::ZERO,
                uri: uri.into(),
            },
        }
    }

    /// Set the minimum acceptable price, in the smallest currency unit.
    pub fn with_min_price(mut self, min_price: impl Into<U256>) -> Self {
        self.voucher.minPrice = min_price.into();
        self
    }

    /// Build a voucher from untyped string field values, as received over a
    /// JSON or similar boundary.
    ///
    /// Integer fields accept decimal or 0x-prefixed hex. Negative,
    /// fractional, or otherwise non-integer values are rejected with
    /// [`SigningError::InvalidInput`] before any domain or signing work.
    pub fn parse(token_id: &str, uri: impl Into<String>, min_price: &str) -> Result<Self, SigningError> {
        let token_id = parse_uint("tokenId", token_id)?;
        let min_price = parse_uint("minPrice", min_price)?;
        Ok(Self {
            voucher: Voucher { tokenId: token_id, minPrice: min_price, uri: uri.into() },
        })
    }

    /// Get the asset identifier.
    pub const fn token_id(&self) -> U256 {
        self.voucher.token_id()
    }

    /// Get the minimum acceptable price.
    pub const fn min_price(&self) -> U256 {
        self.voucher.min_price()
    }

    /// Get the metadata reference.
    pub fn uri(&self) -> &str {
        self.voucher.uri()
    }

    /// Compute the EIP-712 signing hash of the voucher under the given
    /// domain:
    /// `keccak256(0x1901 || hashStruct(domain) || hashStruct(voucher))`.
    pub fn signing_hash(&self, domain: &Eip712Domain) -> B256 {
        self.voucher.eip712_signing_hash(domain)
    }

    /// Convert into the inner Voucher, cloning if needed.
    pub fn to_voucher(&self) -> Voucher {
        self.voucher.clone()
    }

    /// Convert into the inner Voucher.
    pub fn into_voucher(self) -> Voucher {
        self.voucher
    }
}

fn parse_uint(field: &'static str, value: &str) -> Result<U256, SigningError> {
    value
        .trim()
        .parse::<U256>()
        .map_err(|e| SigningError::InvalidInput { field, reason: e.to_string() })
}
