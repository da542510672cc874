use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::approve_token;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for the one-shot developer pool vest
 *
 * This instruction delegates the developer pool to the external lock
 * program and invokes its lock entry point for the fixed beneficiary. The
 * lock program takes custody and applies its own release schedule; this
 * program treats the call as fire-and-forget.
 *
 * The accounts the lock program needs for its lock instruction are passed
 * as remaining accounts and forwarded verbatim.
 *
 * Access Control: Only the admin, at most once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct StartVest<'info> {
    /// The airdrop state account
    /// - Will be modified to set vest_started
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault holding the developer pool
    /// - Controlled by the airdrop PDA
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Delegate authority the lock program moves the pool with
    /// - Approved on the vault for exactly the developer pool amount
    /// CHECK: The lock program validates its own authority account
    pub lock_authority: AccountInfo<'info>,

    /// The external lock program
    /// - Must match the lock program fixed at creation
    /// CHECK: Validated against the stored lock_program key
    #[account(
        executable,
        constraint = lock_program.key() == airdrop.lock_program @ AirdropError::InvalidLockProgram
    )]
    pub lock_program: AccountInfo<'info>,

    /// The admin of the campaign
    /// - Must match the admin stored in the airdrop state
    #[account(constraint = admin.key() == airdrop.admin @ AirdropError::OnlyAdmin)]
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Starts the one-shot developer pool vest
 *
 * @param ctx - The account context, with the lock program's accounts as
 *              remaining accounts
 *
 * Validation Rules:
 * - Fails with VestAlreadyStarted once the flag is set; there is no
 *   reversal path
 *
 * The flag and the VestStarted notification are written before the approve
 * and the lock invocation, so the transition is visible before any
 * external program runs.
 */
pub fn handle_start_vest<'info>(
    ctx: Context<'_, '_, '_, 'info, StartVest<'info>>,
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====

    // One-way transition: the approval and lock call can never repeat
    require!(!airdrop.vest_started, AirdropError::VestAlreadyStarted);

    // ===== EFFECTS PHASE (State Updates) =====

    let dev_amount = airdrop.dev_amount;
    let dev_beneficiary = airdrop.dev_beneficiary;
    let token_mint_key = airdrop.token_mint;
    let admin_key = airdrop.admin;
    let airdrop_bump = airdrop.bump;
    let airdrop_key = airdrop.key();

    airdrop.vest_started = true;

    // Emit the notification ahead of the external calls
    emit_cpi!(VestStarted {
        airdrop: airdrop_key,
        beneficiary: dev_beneficiary,
        amount: dev_amount,
    });

    // ===== INTERACTIONS PHASE (Approve and Lock) =====

    // Prepare PDA signing seeds
    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    // Authorize the lock program to move the developer pool from the vault
    approve_token(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.lock_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        dev_amount,
        signer,
    )?;

    // lock(beneficiary, amount) with the fixed beneficiary and pool size
    let mut data = Vec::with_capacity(8 + 32 + 8);
    data.extend_from_slice(&LOCK_IX_DISCRIMINATOR);
    data.extend_from_slice(dev_beneficiary.as_ref());
    data.extend_from_slice(&dev_amount.to_le_bytes());

    let metas = ctx
        .remaining_accounts
        .iter()
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        })
        .collect();

    let instruction = Instruction {
        program_id: ctx.accounts.lock_program.key(),
        accounts: metas,
        data,
    };

    let mut account_infos = ctx.remaining_accounts.to_vec();
    account_infos.push(ctx.accounts.lock_program.to_account_info());

    invoke_signed(&instruction, &account_infos, signer)?;

    Ok(())
}
