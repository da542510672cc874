use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for committing the merkle root
 *
 * This instruction lets the admin commit the root of the eligibility tree.
 * Each leaf is a (claimant, amount) pair; claimants later prove membership
 * with a merkle proof against this root.
 *
 * Access Control: Only the admin can commit the root
 *
 * Business Logic:
 * - The root can be set exactly once for the lifetime of the campaign
 * - A second call fails with AlreadyConfigured regardless of the argument
 * - Claims are disabled until the root is committed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    /// The airdrop state account to update
    /// - Will be modified to set the merkle_root
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// The admin committing the root
    /// - Must match the admin stored in the airdrop state
    #[account(constraint = admin.key() == airdrop.admin @ AirdropError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

/**
 * Commits the merkle root for claim verification
 *
 * @param ctx - The account context containing airdrop and admin accounts
 * @param merkle_root - 32-byte hash representing the root of the merkle tree
 *
 * Merkle Tree Structure:
 * - Each leaf: sha256(claimant_pubkey || amount_le)
 * - Intermediate nodes: sha256(left || right) with lexicographic ordering
 *
 * Validation Rules:
 * - Fails with AlreadyConfigured if a non-zero root is already stored
 * - An all-zero root is rejected, it is the sentinel for "not configured"
 */
pub fn handle_set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;

    // The commitment is one-time: calling twice never overwrites
    require!(!airdrop.is_configured(), AirdropError::AlreadyConfigured);

    // An all-zero root would leave claims permanently disabled
    require!(merkle_root != [0; 32], AirdropError::InvalidRoot);

    // Commit the root for claim verification
    airdrop.merkle_root = merkle_root;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(RootChanged {
        airdrop: airdrop.key(),
        merkle_root,
    });

    Ok(())
}
