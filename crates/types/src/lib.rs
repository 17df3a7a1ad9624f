//! Voucher types and EIP-712 hashing for LazyNFT lazy minting.
//!
//! A voucher authorizes the future minting of a uniquely identified asset
//! record without an on-chain transaction at issuance time. This crate holds
//! the wire-stable pieces of that protocol: the [`Voucher`] struct, the
//! signing domain that scopes voucher signatures to one contract deployment,
//! and the digest computation that an independent verifier recomputes from
//! raw fields.

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

mod bindings;
pub use bindings::Voucher;

mod signing;
pub use signing::{
    voucher_domain, SignedVoucher, SigningError, UnsignedVoucher, VOUCHER_DOMAIN_NAME,
    VOUCHER_DOMAIN_VERSION,
};
