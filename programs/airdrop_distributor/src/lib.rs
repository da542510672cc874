use anchor_lang::prelude::*;

declare_id!("6t2Z659WD5HxQugvFq6QdBCQfbPBrzkjb8N4xrBUB8xG");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Distributor Program
 *
 * A Solana program for a one-time token distribution with merkle tree verification.
 * Eligibility for the whole campaign is committed as a single merkle root, each
 * claimant proves membership once, and the residual pool is recoverable by the
 * admin after a fixed deadline.
 *
 * Key Features:
 * - Merkle tree-based claim verification over (claimant, amount) leaves
 * - One-time merkle root commitment (the root can never be replaced once set)
 * - Exactly-once claims tracked by per-claimant receipt PDAs
 * - Fixed lamport service fee per claim, forwarded to a fixed fee recipient
 * - Post-deadline sweep of the remaining vault balance
 * - One-shot vest trigger delegating the developer pool to an external lock program
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: Stores the immutable campaign configuration and state
 * - Token Vault PDA: Holds the airdrop and developer pools
 * - Claim Receipt PDAs: Record which claimants have already claimed
 *
 * Workflow:
 * 1. Admin creates the airdrop and funds the vault
 * 2. Admin commits the merkle root (exactly once)
 * 3. Users claim tokens with valid merkle proofs, paying the service fee
 * 4. Admin triggers the one-shot vest toward the lock program
 * 5. Admin sweeps the remaining vault balance after the claim period ends
 */
#[program]
pub mod airdrop_distributor {
    use super::*;

    /**
     * Creates the airdrop campaign
     *
     * Initializes the airdrop state and token vault, records the immutable
     * configuration (fee recipient, developer beneficiary, lock program,
     * service fee, claim deadline) and deposits the airdrop and developer
     * pools into the vault.
     *
     * @param ctx - Account context containing airdrop, vault, and admin accounts
     * @param airdrop_amount - Token amount claimable through merkle proofs
     * @param dev_amount - Token amount reserved for the one-shot vest
     * @param claim_fee - Lamport fee each claim must attach, exactly
     * @param claim_period_ends - Unix timestamp after which the sweep unlocks
     *
     * Access Control: Admin (funder) only
     */
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        airdrop_amount: u64,
        dev_amount: u64,
        claim_fee: u64,
        claim_period_ends: i64,
    ) -> Result<()> {
        handle_create_airdrop(ctx, airdrop_amount, dev_amount, claim_fee, claim_period_ends)
    }

    /**
     * Commits the merkle root for claim verification
     *
     * Stores the 32-byte root of the eligibility tree. The root can be set
     * exactly once; any later call fails with AlreadyConfigured regardless
     * of the argument. A zero root is rejected because it is the sentinel
     * for "not yet configured".
     *
     * @param ctx - Account context containing airdrop and admin accounts
     * @param merkle_root - 32-byte hash representing the merkle tree root
     *
     * Access Control: Admin only
     */
    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_merkle_root(ctx, merkle_root)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * Verifies the (claimant, amount) leaf against the committed root, marks
     * the claimant's receipt, forwards the attached lamport fee to the fee
     * recipient and transfers the claimed amount from the vault.
     *
     * @param ctx - Account context containing airdrop, receipt, and token accounts
     * @param amount - Token amount this claimant is eligible for
     * @param fee_payment - Attached lamports; must equal the configured fee exactly
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any user with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        amount: u64,
        fee_payment: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, amount, fee_payment, proof)
    }

    /**
     * Sweeps the remaining vault balance after the claim period
     *
     * Transfers whatever is left in the vault to the supplied destination
     * token account. The vault stays open, so a later call moves any balance
     * accrued since.
     *
     * @param ctx - Account context containing airdrop, vault, destination, and admin
     *
     * Access Control: Admin only, after claim_period_ends
     */
    pub fn sweep(ctx: Context<Sweep>) -> Result<()> {
        handle_sweep(ctx)
    }

    /**
     * Triggers the one-shot developer pool vest
     *
     * Marks the vest as started, approves the lock program's delegate for
     * exactly the developer pool amount on the vault, and invokes the lock
     * program's lock entry point for the fixed beneficiary. Irreversible.
     *
     * @param ctx - Account context containing airdrop, vault, lock program, and admin
     *
     * Access Control: Admin only, at most once
     */
    pub fn start_vest<'info>(
        ctx: Context<'_, '_, '_, 'info, StartVest<'info>>,
    ) -> Result<()> {
        handle_start_vest(ctx)
    }
}
