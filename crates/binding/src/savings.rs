//! Savings contract bindings.
//!
//! The instance lives behind an ERC-1967 proxy, so the only surface needed at
//! deploy time is the initializer, encoded into the proxy constructor data.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};

sol! {
    interface ISavings {
        /// Initializer, called once through the proxy constructor
        function initialize(
            address accessManager,
            address token,
            string memory name,
            string memory symbol,
            uint256 divider
        ) external;
    }
}

/// ABI-encode the `initialize` call for the proxy constructor data.
pub fn initialize_calldata(
    access_manager: Address,
    token: Address,
    name: &str,
    symbol: &str,
    divider: U256,
) -> Bytes {
    ISavings::initializeCall {
        accessManager: access_manager,
        token,
        name: name.to_owned(),
        symbol: symbol.to_owned(),
        divider,
    }
    .abi_encode()
    .into()
}
