use anchor_lang::prelude::*;

/// Event emitted when the airdrop campaign is created
#[event]
pub struct AirdropCreated {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Admin of the campaign
    pub admin: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Pool claimable through merkle proofs
    pub airdrop_amount: u64,
    /// Developer pool reserved for the vest
    pub dev_amount: u64,
    /// Lamport fee attached to each claim
    pub claim_fee: u64,
    /// Unix timestamp after which the sweep unlocks
    pub claim_period_ends: i64,
}

/// Event emitted when the merkle root is committed
#[event]
pub struct RootChanged {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// The merkle root hash
    pub merkle_root: [u8; 32],
}

/// Event emitted when tokens are claimed
#[event]
pub struct Claimed {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens claimed
    pub amount: u64,
    /// Total amount claimed from the vault by all users
    pub total_claimed: u64,
}

/// Event emitted when the remaining vault balance is swept
#[event]
pub struct Swept {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Destination token account
    pub destination: Pubkey,
    /// Amount of tokens swept
    pub amount: u64,
}

/// Event emitted when the one-shot vest is started
#[event]
pub struct VestStarted {
    /// The airdrop state account public key
    pub airdrop: Pubkey,
    /// Beneficiary registered with the lock program
    pub beneficiary: Pubkey,
    /// Developer pool amount delegated to the lock program
    pub amount: u64,
}
