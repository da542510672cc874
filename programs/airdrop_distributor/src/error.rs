use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Only admin can perform this action")]
    OnlyAdmin,

    // Configuration errors
    #[msg("Merkle root has already been configured")]
    AlreadyConfigured,
    #[msg("Invalid merkle root")]
    InvalidRoot,
    #[msg("Invalid fee recipient account")]
    InvalidFeeRecipient,
    #[msg("Claim period end must be in the future")]
    InvalidClaimPeriod,

    // Claim errors
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Account has already claimed")]
    AlreadyClaimed,
    #[msg("Attached payment must equal the claim fee exactly")]
    InsufficientFee,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,
    #[msg("Claim period has ended")]
    ClaimPeriodOver,

    // Sweep errors
    #[msg("Claim period has not ended yet")]
    PeriodNotEnded,

    // Vest errors
    #[msg("Vest has already been started")]
    VestAlreadyStarted,
    #[msg("Invalid lock program account")]
    InvalidLockProgram,

    // System level errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the airdrop's token mint")]
    TokenMintMismatch,
}
