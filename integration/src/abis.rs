//! Solidity ABI definitions for the contracts driven by the integration tests

use ethers::prelude::abigen;

abigen!(
    MembershipNftContract,
    r#"[
        function owner() external view returns (address)
        function name() external view returns (string memory)
        function symbol() external view returns (string memory)
        function tokenURI(uint256 tokenId) external view returns (string memory)
        function baseURI() external view returns (string memory)
        function balanceOf(address owner) external view returns (uint256)
        function ownerOf(uint256 tokenId) external view returns (address)
        function transferFrom(address from, address to, uint256 tokenId) external
        function safeTransferFrom(address from, address to, uint256 tokenId) external
        function relayer() external view returns (address)
        function btrstToken() external view returns (address)
        function minimumLockPeriod() external view returns (uint256)
        function safeMint(address to, uint256 externalId) external
        function deposit(uint256 amount, uint256 tokenId, address beneficiary, uint256 externalId) external
        function lock(uint256 amount, uint256 tokenId, address beneficiary, uint256 lockSeconds, uint256 externalId) external
        function withdrawUnlockedDeposit(uint256 amount) external
        function withdrawLockedDeposit(uint256 amount, uint256 index) external
        function setBaseURI(string memory baseURI) external
        function setRelayer(address relayer) external
        function getUnlockedDeposit(address beneficiary) external view returns (uint256)
        function getLockedDeposit(address beneficiary, uint256 index) external view returns (uint256 amount, uint256 unlockedAt)
        function getLockedDepositCount(address beneficiary) external view returns (uint256)
        event Mint(address indexed to, uint256 indexed tokenId, uint256 externalId)
        event Deposit(address indexed beneficiary, uint256 indexed tokenId, uint256 amount, uint256 externalId)
        event Lock(address indexed beneficiary, uint256 indexed tokenId, uint256 amount, uint256 unlockedAt, uint256 externalId)
        event UnlockedWithdrawal(address indexed beneficiary, uint256 amount)
        event LockedWithdrawal(address indexed beneficiary, uint256 amount, uint256 index)
        error OnlyRelayerAllowed()
        error UserAlreadyMintedNFT()
        error NoMembershipNftInWallet(address wallet)
        error NftDoesNotBelongToBeneficiary(uint256 tokenId, address beneficiary)
        error ZeroDeposit()
        error InsufficientBalance()
        error LockPeriodNotReached()
        error InsufficientLockPeriod()
        error TransferNotAllowed()
    ]"#
);

abigen!(
    BtrstContract,
    r#"[
        function totalSupply() external view returns (uint256)
        function balanceOf(address account) external view returns (uint256)
        function transfer(address to, uint256 value) external returns (bool)
        function allowance(address owner, address spender) external view returns (uint256)
        function approve(address spender, uint256 value) external returns (bool)
        function transferFrom(address from, address to, uint256 value) external returns (bool)
    ]"#
);
