use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount = 1,
    #[msg("Deposit too small - would not mint any shares")]
    DepositTooSmall = 2,
    #[msg("Withdrawal exceeds the owner's redeemable assets")]
    ExceededMaxWithdraw = 3,
    #[msg("Redemption exceeds the owner's share balance")]
    ExceededMaxRedeem = 4,
    #[msg("Redemption too small - would not release any assets")]
    RedeemTooSmall = 5,
    #[msg("Caller holds no spending authorization over the owner's shares")]
    InsufficientAuthorization = 6,
    #[msg("Reentrant call into a guarded operation")]
    ReentrantCall = 7,
    #[msg("Protocol is paused")]
    ProtocolPaused = 8,
    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance = 9,
    #[msg("Invalid mint provided")]
    InvalidMint = 10,
    #[msg("Invalid reserve mint provided")]
    InvalidReserveMint = 11,
    #[msg("Invalid vault token account")]
    InvalidVaultTokenAccount = 12,
    #[msg("Invalid vault authority")]
    InvalidVaultAuthority = 13,
    #[msg("Invalid mint authority")]
    InvalidMintAuthority = 14,
    #[msg("Invalid token owner")]
    InvalidTokenOwner = 15,
    #[msg("Arithmetic overflow")]
    Overflow = 16,
    #[msg("Division by zero error")]
    DivisionByZero = 17,
    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 18,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 19,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 20,
}
