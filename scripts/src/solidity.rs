//! Definitions of Solidity functions called during deployment & administration

use alloy_sol_types::sol;
use ethers::contract::abigen;

sol! {
    function initialize(address memory relayer, address memory token_address, string memory base_uri) external;
}

abigen!(
    ProxyAdminContract,
    r#"[
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external;
    ]"#,
);

abigen!(
    MembershipNftAdminContract,
    r#"[
        function relayer() external view returns (address)
        function setBaseURI(string memory baseURI) external
        function setRelayer(address relayer) external
    ]"#
);
