use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use crate::utils::{hash_leaf, verify};
use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for claiming tokens
 *
 * This instruction allows eligible users to claim their allocation by
 * providing a valid merkle proof and attaching the exact lamport service
 * fee. The instruction verifies the proof, marks the claimant's receipt,
 * forwards the fee and transfers tokens from the vault to the claimant.
 *
 * Access Control: Any user with a valid merkle proof can claim
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop state account containing the committed root
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Individual claim receipt for this claimant
    /// - Records that this user has claimed, exactly once
    /// - Derived from: ["receipt", airdrop_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimReceipt::LEN,
        seeds = [RECEIPT_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_receipt: Account<'info, ClaimReceipt>,

    /// Token vault holding the distribution pool
    /// - Controlled by the airdrop PDA
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the airdrop's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// Recipient of the lamport claim fee
    /// - Must match the fee recipient stored in the airdrop state
    /// CHECK: Validated against the stored fee_recipient key
    #[account(
        mut,
        constraint = fee_recipient.key() == airdrop.fee_recipient @ AirdropError::InvalidFeeRecipient
    )]
    pub fee_recipient: AccountInfo<'info>,

    /// The claimant attempting to claim tokens
    /// - Must sign the transaction
    /// - Pays the service fee and the receipt rent
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation and the fee transfer
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Token amount this claimant is eligible for (from the merkle tree)
 * @param fee_payment - Attached lamports; must equal the configured fee exactly
 * @param proof - Array of 32-byte hashes forming the merkle proof path
 *
 * Validation Process:
 * 1. Verify the root is committed and the proof reduces to it
 * 2. Check the claimant has not claimed before
 * 3. Check the attached payment equals the claim fee exactly
 * 4. Check the vault can cover the claim
 *
 * The receipt flag and the Claimed notification are written before the fee
 * and token transfers execute, so a re-entering claim always observes the
 * flag already set.
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    amount: u64,
    fee_payment: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let claim_receipt = &mut ctx.accounts.claim_receipt;

    // ===== VALIDATION PHASE =====

    // An unset commitment disables claims; no proof can verify against it
    require!(airdrop.is_configured(), AirdropError::InvalidProof);

    // The default build leaves claims open past the nominal deadline, the
    // sweep emptying the vault is what ends them in practice
    #[cfg(feature = "check-deadline")]
    {
        let current_time = Clock::get()?.unix_timestamp;
        require!(
            !airdrop.claim_period_over(current_time),
            AirdropError::ClaimPeriodOver
        );
    }

    // ===== MERKLE PROOF VERIFICATION =====

    let claimant_account = &ctx.accounts.claimant;

    // Recompute the leaf hash for this (claimant, amount) pair
    let leaf = hash_leaf(&claimant_account.key(), amount);

    // Verify the proof reduces the leaf to the committed root
    require!(
        verify(proof, airdrop.merkle_root, leaf),
        AirdropError::InvalidProof
    );

    // Each account claims at most once
    require!(!claim_receipt.claimed, AirdropError::AlreadyClaimed);

    // The attached payment must match the fee exactly; overpayment is
    // rejected rather than refunded
    require!(fee_payment == airdrop.claim_fee, AirdropError::InsufficientFee);

    // Check the vault can cover this claim before proceeding
    require!(
        ctx.accounts.token_vault.amount >= amount,
        AirdropError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Prepare immutable copies for PDA signing after the mutable borrow ends
    let token_mint_key = airdrop.token_mint;
    let admin_key = airdrop.admin;
    let airdrop_bump = airdrop.bump;
    let airdrop_key = airdrop.key();

    // Mark the receipt before any external transfer executes
    claim_receipt.claimed = true;
    claim_receipt.amount = amount;

    // Track the running distribution total with overflow protection
    let new_total_claimed = airdrop
        .total_claimed
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    airdrop.total_claimed = new_total_claimed;

    // Emit the notification ahead of the outbound transfers
    emit_cpi!(Claimed {
        airdrop: airdrop_key,
        claimant: claimant_account.key(),
        amount,
        total_claimed: new_total_claimed,
    });

    // ===== INTERACTIONS PHASE (Fee and Token Transfers) =====

    // Forward the attached payment in full to the fee recipient
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.claimant.to_account_info(),
                to: ctx.accounts.fee_recipient.to_account_info(),
            },
        ),
        fee_payment,
    )?;

    // Prepare PDA signing seeds for the token transfer
    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer the claimed amount from the vault using PDA authority
    transfer_token(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    Ok(())
}
