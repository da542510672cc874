use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for sweeping the remaining vault balance
 *
 * This instruction lets the admin recover whatever is left in the vault
 * once the claim period has ended. The vault and the airdrop state stay
 * open: a later sweep moves any residue accrued since.
 *
 * Access Control: Only the admin, strictly after claim_period_ends
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Sweep<'info> {
    /// The airdrop state account
    /// - Supplies the deadline and the vault authority seeds
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault containing the remaining tokens
    /// - Controlled by the airdrop PDA
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Destination token account chosen by the admin
    /// - Must be for the correct token mint
    /// - Receives the entire remaining balance
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::token_program = token_program,
    )]
    pub destination_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the airdrop's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The admin of the campaign
    /// - Must match the admin stored in the airdrop state
    #[account(constraint = admin.key() == airdrop.admin @ AirdropError::OnlyAdmin)]
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Sweeps the remaining vault balance to the destination
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Rules:
 * - Fails with PeriodNotEnded while the current time is at or before
 *   claim_period_ends
 * - Transfers the entire remaining balance; no partial sweep
 */
pub fn handle_sweep(ctx: Context<Sweep>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====

    // The deadline itself still counts as inside the claim period
    let current_time = Clock::get()?.unix_timestamp;
    require!(
        airdrop.claim_period_over(current_time),
        AirdropError::PeriodNotEnded
    );

    // Whatever is left, claims and the vest carve-out included
    let remaining_balance = ctx.accounts.token_vault.amount;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for the token transfer
    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        airdrop.token_mint.as_ref(),
        airdrop.admin.as_ref(),
        &[airdrop.bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer the remaining tokens only if there are any
    if remaining_balance > 0 {
        transfer_token(
            ctx.accounts.airdrop.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.destination_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(Swept {
        airdrop: airdrop.key(),
        destination: ctx.accounts.destination_token_account.key(),
        amount: remaining_balance,
    });

    Ok(())
}
