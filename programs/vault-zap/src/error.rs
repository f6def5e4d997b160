use anchor_lang::prelude::*;

#[error_code]
pub enum ZapError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount = 1,
    #[msg("Shares must be greater than zero")]
    InvalidShares = 2,
    #[msg("Protocol is paused")]
    ProtocolPaused = 3,
    #[msg("Reentrant call into a guarded operation")]
    ReentrantCall = 4,
    #[msg("Conversion output below the required minimum")]
    SlippageExceeded = 5,
    #[msg("Swap produced no output")]
    EmptySwapResult = 6,
    #[msg("Staking produced no reserve tokens")]
    EmptyStakeResult = 7,
    #[msg("Unstaking produced no base tokens")]
    EmptyUnstakeResult = 8,
    #[msg("Route exceeds the maximum number of hops")]
    RouteTooLong = 9,
    #[msg("Invalid base mint provided")]
    InvalidBaseMint = 10,
    #[msg("Invalid reserve mint provided")]
    InvalidReserveMint = 11,
    #[msg("Invalid mint provided")]
    InvalidMint = 12,
    #[msg("Invalid token owner")]
    InvalidTokenOwner = 13,
    #[msg("Invalid vault token account")]
    InvalidVaultTokenAccount = 22,
    #[msg("Staking program does not match configuration")]
    InvalidStakingProgram = 14,
    #[msg("Swap program does not match configuration")]
    InvalidSwapProgram = 15,
    #[msg("Base and reserve mint cannot be the same")]
    BaseAndReserveMintCannotBeSame = 16,
    #[msg("Failed to encode collaborator instruction")]
    InstructionEncodingFailed = 17,
    #[msg("Arithmetic overflow")]
    Overflow = 18,
    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 19,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 20,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 21,
}
