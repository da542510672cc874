use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the airdrop
 * distributor program: PDA seeds, the canonical supply allocation, and the
 * wire-level constants of the external lock collaborator.
 */

#[constant]
/// ===== ALLOCATION CONSTANTS =====

/// Base unit of the distributed token (9 decimals)
pub const ONE_TOKEN: u64 = 1_000_000_000;

/// Total supply of the distributed token
pub const TOTAL_SUPPLY: u64 = 1_000_000_000 * ONE_TOKEN;

/// Pool claimable through merkle proofs
/// - Deposited into the vault at creation
pub const AIRDROP_POOL: u64 = 400_000_000 * ONE_TOKEN;

/// Developer pool reserved for the one-shot vest
/// - Deposited into the vault at creation, delegated to the lock program by start_vest
pub const DEV_POOL: u64 = 200_000_000 * ONE_TOKEN;

/// Pool allocated to liquidity incentives at deployment
/// - Distributed at token deployment, never touched by this program
pub const LIQUIDITY_POOL: u64 = 100_000_000 * ONE_TOKEN;

/// Remainder allocated to the treasury timelock at deployment
/// - Distributed at token deployment, never touched by this program
pub const TREASURY_POOL: u64 = 300_000_000 * ONE_TOKEN;

/// ===== FEE CONSTANTS =====

/// Lamport fee attached to each claim (0.01 SOL)
/// - Claims must attach exactly this amount, overpayment is rejected
pub const CLAIM_FEE_LAMPORTS: u64 = 10_000_000;

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop state PDA derivation
/// - Used in: ["airdrop", token_mint, admin]
/// - One campaign per (token, admin) pair
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - Ensures the vault is controlled by the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim receipt PDA derivation
/// - Used in: ["receipt", airdrop_key, claimant_key]
/// - One receipt per claimant, existence plus flag prevents double-claiming
pub const RECEIPT_SEED: &str = "receipt";

/// ===== LOCK COLLABORATOR CONSTANTS =====

/// Anchor instruction discriminator of the lock program's `lock` entry point
/// - sha256("global:lock")[..8]
/// - Followed by borsh-encoded (beneficiary: Pubkey, amount: u64)
pub const LOCK_IX_DISCRIMINATOR: [u8; 8] = [21, 19, 208, 43, 237, 62, 255, 87];
