use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use vault_shares::program::VaultShares;

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::{self};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = signer,
        space = ZapConfig::LEN,
        seeds = [b"zap_config"],
        bump
    )]
    pub zap_config: Account<'info, ZapConfig>,

    /// CHECK: PDA that owns every pipeline custody account, validated by
    /// seeds. Only this program can sign for it.
    #[account(
        seeds = [b"zap_authority"],
        bump
    )]
    pub zap_authority: UncheckedAccount<'info>,

    /// The asset the staking program accepts.
    pub base_mint: Account<'info, Mint>,

    /// The yield-bearing asset the staking program returns and the share
    /// vault custodies.
    pub reserve_mint: Account<'info, Mint>,

    /// CHECK: external staking program, recorded in config
    #[account(executable)]
    pub staking_program: UncheckedAccount<'info>,

    /// CHECK: external swap program, recorded in config
    #[account(executable)]
    pub swap_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ ZapError::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateRoute<'info> {
    #[account(
        mut,
        seeds = [b"zap_config"],
        bump = zap_config.bump
    )]
    pub zap_config: Account<'info, ZapConfig>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ ZapError::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [b"zap_config"],
        bump = zap_config.bump
    )]
    pub zap_config: Account<'info, ZapConfig>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ ZapError::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct Zap<'info> {
    #[account(
        mut,
        seeds = [b"zap_config"],
        bump = zap_config.bump
    )]
    pub zap_config: Account<'info, ZapConfig>,

    /// CHECK: PDA that owns the pipeline custody accounts, validated by seeds.
    #[account(
        seeds = [b"zap_authority"],
        bump
    )]
    pub zap_authority: UncheckedAccount<'info>,

    /// The asset the caller is entering with. Any fungible mint.
    pub input_mint: Account<'info, Mint>,

    #[account(
        constraint = base_mint.key() == zap_config.base_mint @ ZapError::InvalidBaseMint
    )]
    pub base_mint: Account<'info, Mint>,

    #[account(
        constraint = reserve_mint.key() == zap_config.reserve_mint @ ZapError::InvalidReserveMint
    )]
    pub reserve_mint: Account<'info, Mint>,

    /// Pipeline custody for the input asset. When the input is already the
    /// base asset this resolves to the same account as `base_custody`.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [b"zap_custody", input_mint.key().as_ref()],
        bump,
        token::mint = input_mint,
        token::authority = zap_authority
    )]
    pub input_custody: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [b"zap_custody", base_mint.key().as_ref()],
        bump,
        token::mint = base_mint,
        token::authority = zap_authority
    )]
    pub base_custody: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [b"zap_custody", reserve_mint.key().as_ref()],
        bump,
        token::mint = reserve_mint,
        token::authority = zap_authority
    )]
    pub reserve_custody: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_input_account.mint == input_mint.key() @ ZapError::InvalidMint,
        constraint = user_input_account.owner == signer.key() @ ZapError::InvalidTokenOwner
    )]
    pub user_input_account: Account<'info, TokenAccount>,

    /// The caller's share account; the ledger deposit mints to it directly.
    #[account(
        mut,
        constraint = user_share_account.owner == signer.key() @ ZapError::InvalidTokenOwner
    )]
    pub user_share_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    // ---- share ledger accounts, re-validated by the callee's constraints ----
    #[account(
        mut,
        seeds = [b"vault_config"],
        bump = shares_config.bump,
        seeds::program = shares_program.key()
    )]
    pub shares_config: Account<'info, vault_shares::state::VaultConfig>,

    #[account(
        mut,
        constraint = shares_vault_token_account.key() == shares_config.vault_token_account @ ZapError::InvalidVaultTokenAccount
    )]
    pub shares_vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = share_mint.key() == shares_config.share_mint @ ZapError::InvalidMint
    )]
    pub share_mint: Account<'info, Mint>,

    /// CHECK: the ledger program's share mint authority PDA
    #[account(
        seeds = [b"share_mint_authority"],
        bump,
        seeds::program = shares_program.key()
    )]
    pub share_mint_authority: UncheckedAccount<'info>,

    pub shares_program: Program<'info, VaultShares>,

    /// CHECK: external staking program
    #[account(
        executable,
        constraint = staking_program.key() == zap_config.staking_program @ ZapError::InvalidStakingProgram
    )]
    pub staking_program: UncheckedAccount<'info>,

    /// CHECK: staking pool state account, validated by the staking program
    #[account(mut)]
    pub staking_pool: UncheckedAccount<'info>,

    /// CHECK: external swap program
    #[account(
        executable,
        constraint = swap_program.key() == zap_config.swap_program @ ZapError::InvalidSwapProgram
    )]
    pub swap_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ZapOut<'info> {
    #[account(
        mut,
        seeds = [b"zap_config"],
        bump = zap_config.bump
    )]
    pub zap_config: Account<'info, ZapConfig>,

    /// CHECK: PDA that owns the pipeline custody accounts, validated by seeds.
    #[account(
        seeds = [b"zap_authority"],
        bump
    )]
    pub zap_authority: UncheckedAccount<'info>,

    /// The asset the caller wants to leave with. Any fungible mint.
    pub output_mint: Account<'info, Mint>,

    #[account(
        constraint = base_mint.key() == zap_config.base_mint @ ZapError::InvalidBaseMint
    )]
    pub base_mint: Account<'info, Mint>,

    #[account(
        constraint = reserve_mint.key() == zap_config.reserve_mint @ ZapError::InvalidReserveMint
    )]
    pub reserve_mint: Account<'info, Mint>,

    /// Custody the redeemed reserve tokens land in before unstaking - the
    /// divergence from a plain withdrawal, which pays the caller directly.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [b"zap_custody", reserve_mint.key().as_ref()],
        bump,
        token::mint = reserve_mint,
        token::authority = zap_authority
    )]
    pub reserve_custody: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [b"zap_custody", base_mint.key().as_ref()],
        bump,
        token::mint = base_mint,
        token::authority = zap_authority
    )]
    pub base_custody: Account<'info, TokenAccount>,

    /// The caller's share account the redemption burns from.
    #[account(
        mut,
        constraint = user_share_account.owner == signer.key() @ ZapError::InvalidTokenOwner
    )]
    pub user_share_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_output_account.mint == output_mint.key() @ ZapError::InvalidMint,
        constraint = user_output_account.owner == signer.key() @ ZapError::InvalidTokenOwner
    )]
    pub user_output_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    // ---- share ledger accounts, re-validated by the callee's constraints ----
    #[account(
        mut,
        seeds = [b"vault_config"],
        bump = shares_config.bump,
        seeds::program = shares_program.key()
    )]
    pub shares_config: Account<'info, vault_shares::state::VaultConfig>,

    #[account(
        mut,
        constraint = shares_vault_token_account.key() == shares_config.vault_token_account @ ZapError::InvalidVaultTokenAccount
    )]
    pub shares_vault_token_account: Account<'info, TokenAccount>,

    /// CHECK: the ledger program's vault authority PDA
    #[account(
        seeds = [b"vault_authority"],
        bump,
        seeds::program = shares_program.key()
    )]
    pub shares_vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = share_mint.key() == shares_config.share_mint @ ZapError::InvalidMint
    )]
    pub share_mint: Account<'info, Mint>,

    pub shares_program: Program<'info, VaultShares>,

    /// CHECK: external staking program
    #[account(
        executable,
        constraint = staking_program.key() == zap_config.staking_program @ ZapError::InvalidStakingProgram
    )]
    pub staking_program: UncheckedAccount<'info>,

    /// CHECK: staking pool state account, validated by the staking program
    #[account(mut)]
    pub staking_pool: UncheckedAccount<'info>,

    /// CHECK: external swap program
    #[account(
        executable,
        constraint = swap_program.key() == zap_config.swap_program @ ZapError::InvalidSwapProgram
    )]
    pub swap_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

// Helper function to derive the program data address
pub(crate) fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}
