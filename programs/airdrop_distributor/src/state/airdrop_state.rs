use anchor_lang::prelude::*;

/**
 * Main airdrop state account
 *
 * This struct holds the immutable configuration of a one-time distribution
 * campaign plus its two one-way state transitions: committing the merkle
 * root and starting the vest.
 *
 * Derivation: ["airdrop", token_mint, admin]
 *
 * Lifecycle:
 * 1. Created during create_airdrop, configuration never changes afterwards
 * 2. merkle_root set exactly once by set_merkle_root
 * 3. total_claimed incremented by each successful claim
 * 4. vest_started flipped exactly once by start_vest
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Admin of the campaign
    /// - Can commit the merkle root, sweep after the deadline, and start the vest
    pub admin: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA holding the airdrop and developer pools
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Recipient of the lamport claim fees
    pub fee_recipient: Pubkey,

    /// Beneficiary registered with the lock program by start_vest
    pub dev_beneficiary: Pubkey,

    /// The external lock program invoked by start_vest
    pub lock_program: Pubkey,

    /// Pool claimable through merkle proofs
    pub airdrop_amount: u64,

    /// Developer pool reserved for the one-shot vest
    pub dev_amount: u64,

    /// Total amount of tokens claimed by all users
    pub total_claimed: u64,

    /// Lamport fee each claim must attach, exactly
    pub claim_fee: u64,

    /// Unix timestamp at which the claim period nominally ends
    /// - The sweep is only allowed strictly after this time
    pub claim_period_ends: i64,

    /// Whether the one-shot vest has been triggered
    /// - One-way transition, never reset
    pub vest_started: bool,

    /// Merkle root committed over the (claimant, amount) eligibility set
    /// - All zeros means "not yet configured" and disables claims
    /// - Immutable once set to a non-zero value
    pub merkle_root: [u8; 32],
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Whether the merkle root has been committed
    pub fn is_configured(&self) -> bool {
        self.merkle_root != [0; 32]
    }

    /// Whether the claim period is over at `now`
    /// - The deadline itself still counts as inside the period
    pub fn claim_period_over(&self, now: i64) -> bool {
        now > self.claim_period_ends
    }
}
