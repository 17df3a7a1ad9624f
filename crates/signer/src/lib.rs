//! Voucher issuing service for LazyNFT lazy minting.
//!
//! A [`VoucherSigner`] turns voucher fields into a [`SignedVoucher`]: it
//! resolves the EIP-712 domain of its contract deployment once, computes the
//! domain-bound digest for each voucher, and has an injected
//! [`MintAuthority`] sign that digest. Nothing touches the chain; the signed
//! voucher is redeemed elsewhere.
//!
//! [`SignedVoucher`]: lazynft_types::SignedVoucher

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod authority;
pub use authority::{LocalAuthority, MintAuthority};

mod signer;
pub use signer::VoucherSigner;

pub mod test_utils;
