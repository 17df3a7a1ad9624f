mod voucher;
pub use voucher::{SignedVoucher, UnsignedVoucher};

mod error;
pub use error::SigningError;

use alloy::primitives::{Address, U256};
use alloy::sol_types::Eip712Domain;

/// EIP-712 domain name under which vouchers are signed.
pub const VOUCHER_DOMAIN_NAME: &str = "LazyNFT-Voucher";

/// EIP-712 domain version under which vouchers are signed.
pub const VOUCHER_DOMAIN_VERSION: &str = "1";

/// Build the EIP-712 domain for a voucher contract deployment.
///
/// The domain binds every voucher signature to one contract address on one
/// chain, so a voucher issued for one deployment cannot be replayed against
/// another.
pub fn voucher_domain(chain_id: u64, verifying_contract: Address) -> Eip712Domain {
    Eip712Domain {
        name: Some(VOUCHER_DOMAIN_NAME.into()),
        version: Some(VOUCHER_DOMAIN_VERSION.into()),
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(verifying_contract),
        salt: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Voucher;
    use alloy::primitives::{address, b256, keccak256};
    use alloy::sol_types::SolStruct;

    const TEST_CONTRACT: Address = address!("0xb5b2bbd3d41a2fba6dd1ddbbfa4a32a2f34c52de");

    /// The canonical type signature string. Changing field order or types
    /// breaks compatibility with every deployed verifier.
    #[test]
    fn voucher_type_string() {
        assert_eq!(
            Voucher::eip712_root_type(),
            "Voucher(uint256 tokenId,uint256 minPrice,string uri)"
        );
        assert_eq!(
            keccak256(Voucher::eip712_root_type().as_bytes()),
            b256!("0x01eebd0c094e8fff6d29736a21b02b2e2c0ecbdbcd2db219724b97a933160d2e")
        );
    }

    /// Verify domain separator computation against an independent EIP-712
    /// implementation.
    #[test]
    fn domain_separator() {
        let domain = voucher_domain(1, Address::ZERO);
        assert_eq!(
            domain.hash_struct(),
            b256!("0x3422753e4090057992f0148772992e6661d2f7eef9bdd777e633967c0fb9e709")
        );

        let domain = voucher_domain(1, TEST_CONTRACT);
        assert_eq!(
            domain.hash_struct(),
            b256!("0x39f4bb2dd3af9846576c156f552d6adb5f946c2d6992aca8ab25a0e98efd2dad")
        );
    }

    /// Verify the all-zero voucher signing hash is stable.
    #[test]
    fn minimal_signing_hash() {
        let voucher =
            Voucher { tokenId: U256::ZERO, minPrice: U256::ZERO, uri: String::new() };
        let domain = voucher_domain(1, Address::ZERO);

        assert_eq!(
            voucher.eip712_hash_struct(),
            b256!("0x7c54a808a312b407c7fae62442e0a528ea87f19f1f8d63c11abc226408d62f71")
        );
        assert_eq!(
            voucher.eip712_signing_hash(&domain),
            b256!("0x91b706c4714d5b9f516e9494674eec67707dfeab761796e626e9cf925749a6a3")
        );
    }

    /// Verify a realistic voucher signing hash is stable.
    #[test]
    fn realistic_signing_hash() {
        let voucher = Voucher {
            tokenId: U256::from(42u64),
            minPrice: U256::from(1000u64),
            uri: "ipfs://test".into(),
        };
        let domain = voucher_domain(1, TEST_CONTRACT);

        assert_eq!(
            voucher.eip712_hash_struct(),
            b256!("0x47f399d042b4f15f5533ba018ecff02a5e3f35ac230d3d361dcdd8d4c8399517")
        );
        assert_eq!(
            voucher.eip712_signing_hash(&domain),
            b256!("0xde56cd40d1be3c2e72c7e2304b6e70b0a8e583bfe4cb74663b4fb1380ae1a41d")
        );
    }

    /// Verify hashing of values far above 2^53, where a float-based
    /// implementation would silently lose precision.
    #[test]
    fn large_values_signing_hash() {
        let voucher = Voucher {
            tokenId: (U256::from(1u64) << 200) + U256::from(7u64),
            minPrice: U256::from(10_000_000_000_000_000_000_000u128),
            uri: "ipfs://QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn".into(),
        };
        let domain = voucher_domain(31337, TEST_CONTRACT);

        assert_eq!(
            voucher.eip712_hash_struct(),
            b256!("0xb03a4395589bfd46697e2e32c7fe3536db82b8928f22ff6e870647b1c736ba3f")
        );
        assert_eq!(
            voucher.eip712_signing_hash(&domain),
            b256!("0x61dba6f95dcf5951429383141ca37c6913b8134f47027cfe8f1b673a4fc8ead8")
        );
    }

    /// Two deployments of the voucher contract must never accept each
    /// other's vouchers.
    #[test]
    fn digest_is_domain_separated() {
        let voucher = Voucher {
            tokenId: U256::from(42u64),
            minPrice: U256::from(1000u64),
            uri: "ipfs://test".into(),
        };

        let digest_a = voucher.eip712_signing_hash(&voucher_domain(1, TEST_CONTRACT));
        let digest_b = voucher.eip712_signing_hash(&voucher_domain(
            1,
            address!("0x1111111111111111111111111111111111111111"),
        ));

        assert_ne!(digest_a, digest_b);
        assert_eq!(
            digest_b,
            b256!("0xdbbc23e3e9c888cabbc2a22bffde20fe75db6cde9a763ae341aeb31de498c527")
        );
    }

    /// Swapping the declared field order yields a different type hash and
    /// therefore a different digest for the same message.
    #[test]
    fn field_order_changes_digest() {
        mod swapped {
            alloy::sol!(
                #[derive(Debug)]
                struct Voucher {
                    uint256 minPrice;
                    uint256 tokenId;
                    string uri;
                }
            );
        }

        let canonical = Voucher {
            tokenId: U256::from(42u64),
            minPrice: U256::from(1000u64),
            uri: "ipfs://test".into(),
        };
        let reordered = swapped::Voucher {
            tokenId: U256::from(42u64),
            minPrice: U256::from(1000u64),
            uri: "ipfs://test".into(),
        };
        let domain = voucher_domain(1, TEST_CONTRACT);

        assert_ne!(
            canonical.eip712_signing_hash(&domain),
            reordered.eip712_signing_hash(&domain)
        );
        assert_eq!(
            reordered.eip712_signing_hash(&domain),
            b256!("0x04546668d73157c1710a751a21c5ad63f316c77f6985a4fa7ad0cfbd2584447e")
        );
    }
}
