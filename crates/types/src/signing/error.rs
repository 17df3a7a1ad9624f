/// An error that can occur while building or signing a voucher.
///
/// No variant is retried internally and no partial result is ever returned;
/// any error means the voucher was not issued.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// A voucher field could not be represented as an unsigned 256-bit
    /// integer. Raised before any domain or signing work is attempted.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// The voucher field that failed conversion.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The chain id query against the signing key's network context failed.
    /// The domain cache is left untouched, so a later call retries.
    #[error("domain resolution failed: {0}")]
    DomainResolution(String),
    /// The signing capability failed or rejected the digest.
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
}
