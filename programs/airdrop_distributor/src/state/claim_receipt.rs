use anchor_lang::prelude::*;

/**
 * Individual claim receipt account
 *
 * One receipt per (airdrop, claimant) pair, forming the append-only ledger
 * of accounts that have already claimed. The flag is set exactly once and
 * never cleared; receipts are never closed, which keeps the ledger
 * monotonic even though claims are not deadline-gated.
 *
 * Derivation: ["receipt", airdrop_key, claimant_key]
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimReceipt {
    /// Whether this claimant has claimed
    pub claimed: bool,

    /// Token amount the successful claim covered
    pub amount: u64,
}

impl ClaimReceipt {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimReceipt>();
}
