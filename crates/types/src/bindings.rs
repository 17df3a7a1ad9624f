#![allow(missing_docs)]
use alloy::primitives::U256;

mod voucher {
    alloy::sol!(
        /// Authorization to mint one asset record, exchanged off-chain and
        /// redeemed against the voucher contract later.
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        struct Voucher {
            uint256 tokenId;
            uint256 minPrice;
            string uri;
        }
    );
}
pub use voucher::Voucher;

impl Voucher {
    /// Get the asset identifier the voucher authorizes.
    pub const fn token_id(&self) -> U256 {
        self.tokenId
    }

    /// Get the minimum acceptable price, in the smallest currency unit.
    pub const fn min_price(&self) -> U256 {
        self.minPrice
    }

    /// Get the metadata reference for the asset record.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
