use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating the airdrop campaign
 *
 * This instruction initializes the one-time distribution:
 * - Creates the airdrop state PDA holding the immutable configuration
 * - Creates a token vault PDA to hold the airdrop and developer pools
 * - Transfers both pools from the admin's token account into the vault
 * - Records the fee recipient, developer beneficiary, and lock program
 *
 * Access Control: The admin (funder) signs the creation
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateAirdrop<'info> {
    /// The main airdrop state account (PDA)
    /// - Stores the campaign configuration and state
    /// - Derived from: ["airdrop", token_mint, admin]
    #[account(
        init,
        payer = admin,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            admin.key().as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) holding the pools to be distributed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint of the distributed token
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin's token account funding the vault
    /// - Must hold at least airdrop_amount + dev_amount
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The admin of the campaign
    /// - Commits the root, sweeps after the deadline, starts the vest
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Recipient of the lamport claim fees
    /// CHECK: This account is validated by storing its key in the airdrop state
    pub fee_recipient: AccountInfo<'info>,

    /// Beneficiary registered with the lock program by start_vest
    /// CHECK: This account is validated by storing its key in the airdrop state
    pub dev_beneficiary: AccountInfo<'info>,

    /// The external lock program invoked by start_vest
    /// CHECK: This account is validated by storing its key in the airdrop state
    pub lock_program: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates the airdrop campaign and funds the vault
 *
 * @param ctx - The account context containing all required accounts
 * @param airdrop_amount - Token amount claimable through merkle proofs
 * @param dev_amount - Token amount reserved for the one-shot vest
 * @param claim_fee - Lamport fee each claim must attach, exactly
 * @param claim_period_ends - Unix timestamp after which the sweep unlocks
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    airdrop_amount: u64,
    dev_amount: u64,
    claim_fee: u64,
    claim_period_ends: i64,
) -> Result<()> {
    // Validate pool amounts
    require!(airdrop_amount > 0, AirdropError::InvalidAmount);

    let total_funding = airdrop_amount
        .checked_add(dev_amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    // The deadline must lie in the future, otherwise the pool would be
    // sweepable before anyone could claim
    let current_time = Clock::get()?.unix_timestamp;
    require!(
        claim_period_ends > current_time,
        AirdropError::InvalidClaimPeriod
    );

    // Validate fee recipient is not the empty account
    require!(
        ctx.accounts.fee_recipient.key() != Pubkey::default(),
        AirdropError::InvalidFeeRecipient
    );

    // The lock program must be a deployed program for start_vest to CPI into
    require!(
        ctx.accounts.lock_program.executable,
        AirdropError::InvalidLockProgram
    );

    let airdrop = &mut ctx.accounts.airdrop;

    // Initialize the immutable campaign configuration
    airdrop.bump = ctx.bumps.airdrop;
    airdrop.admin = ctx.accounts.admin.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.fee_recipient = ctx.accounts.fee_recipient.key();
    airdrop.dev_beneficiary = ctx.accounts.dev_beneficiary.key();
    airdrop.lock_program = ctx.accounts.lock_program.key();
    airdrop.airdrop_amount = airdrop_amount;
    airdrop.dev_amount = dev_amount;
    airdrop.claim_fee = claim_fee;
    airdrop.claim_period_ends = claim_period_ends;
    // Note: total_claimed, vest_started, merkle_root use default values (0)

    // Transfer both pools from the admin to the vault
    // Uses transfer_checked for compatibility with both SPL Token and Token 2022
    transfer_token(
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.admin_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_funding,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for admin-signed transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(AirdropCreated {
        airdrop: airdrop.key(),
        admin: ctx.accounts.admin.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        airdrop_amount,
        dev_amount,
        claim_fee,
        claim_period_ends,
    });

    Ok(())
}
