//! ERC-1967 proxy helpers.
//!
//! The proxy contract itself ships as a compiled artifact; what lives here is
//! the constructor-argument encoding and the storage slot the proxy standard
//! reserves for the implementation pointer.

use alloy_primitives::{b256, Address, Bytes, B256};
use alloy_sol_types::SolValue;

/// EIP-1967 implementation slot.
///
/// `keccak256("eip1967.proxy.implementation") - 1`, see
/// <https://eips.ethereum.org/EIPS/eip-1967#logic-contract-address>
pub const IMPLEMENTATION_SLOT: B256 =
    b256!("0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// ABI-encode the `ERC1967Proxy(address implementation, bytes data)`
/// constructor arguments, to be appended to the proxy creation code.
pub fn encode_constructor_args(implementation: Address, data: &Bytes) -> Vec<u8> {
    (implementation, data.clone()).abi_encode_params()
}

/// Read the implementation address out of an EIP-1967 slot word.
pub fn implementation_from_slot(word: B256) -> Address {
    Address::from_word(word)
}
