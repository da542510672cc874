use anchor_lang::prelude::*;
use anchor_spl::token_interface::{approve, transfer_checked, Approve, TransferChecked};

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Approves a delegate on a PDA-owned token account for both SPL Token and Token 2022
pub fn approve_token<'a>(
    authority: AccountInfo<'a>,
    account: AccountInfo<'a>,
    delegate: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = Approve {
        to: account,
        delegate,
        authority,
    };

    approve(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
    )
}
