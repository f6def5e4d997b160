use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::{self};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = signer,
        space = VaultConfig::LEN,
        seeds = [b"vault_config"],
        bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// CHECK: PDA that owns the vault custody account, validated by seeds.
    /// Only this program can sign for it, so only this program can move
    /// reserve tokens out of the vault.
    #[account(
        seeds = [b"vault_authority"],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// CHECK: PDA that controls share issuance, validated by seeds.
    #[account(
        seeds = [b"share_mint_authority"],
        bump
    )]
    pub share_mint_authority: UncheckedAccount<'info>,

    /// The yield-bearing reserve token the vault custodies.
    pub reserve_mint: Account<'info, Mint>,

    /// The share token, created here with issuance under the program PDA.
    #[account(
        init,
        payer = signer,
        seeds = [b"share_mint"],
        bump,
        mint::decimals = reserve_mint.decimals,
        mint::authority = share_mint_authority
    )]
    pub share_mint: Account<'info, Mint>,

    /// Custody account for deposited reserve tokens. Its live balance is the
    /// vault's total asset figure.
    #[account(
        init,
        payer = signer,
        seeds = [b"vault_token_account"],
        bump,
        token::mint = reserve_mint,
        token::authority = vault_authority
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ VaultError::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [b"vault_config"],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ VaultError::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [b"vault_config"],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        constraint = vault_token_account.key() == vault_config.vault_token_account @ VaultError::InvalidVaultTokenAccount,
        constraint = vault_token_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = share_mint.key() == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub share_mint: Account<'info, Mint>,

    /// CHECK: PDA that controls share issuance, validated by seeds.
    #[account(
        seeds = [b"share_mint_authority"],
        bump,
        constraint = share_mint_authority.key() == share_mint.mint_authority.unwrap() @ VaultError::InvalidMintAuthority
    )]
    pub share_mint_authority: UncheckedAccount<'info>,

    pub signer: Signer<'info>,

    #[account(
        mut,
        constraint = depositor_reserve_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint,
        constraint = depositor_reserve_account.owner == signer.key() @ VaultError::InvalidTokenOwner
    )]
    pub depositor_reserve_account: Account<'info, TokenAccount>,

    /// Share account credited with the newly minted shares. Its owner is the
    /// deposit's receiver and need not be the depositor.
    #[account(
        mut,
        constraint = receiver_share_account.mint == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub receiver_share_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [b"vault_config"],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        constraint = vault_token_account.key() == vault_config.vault_token_account @ VaultError::InvalidVaultTokenAccount,
        constraint = vault_token_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA that owns the vault custody account, validated by seeds.
    #[account(
        seeds = [b"vault_authority"],
        bump,
        constraint = vault_authority.key() == vault_token_account.owner @ VaultError::InvalidVaultAuthority
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = share_mint.key() == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub share_mint: Account<'info, Mint>,

    /// The share account paying for the withdrawal. The caller must be its
    /// owner or hold an SPL delegate approval covering the share cost.
    #[account(
        mut,
        constraint = owner_share_account.mint == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub owner_share_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = receiver_reserve_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint
    )]
    pub receiver_reserve_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(
        mut,
        seeds = [b"vault_config"],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        mut,
        constraint = vault_token_account.key() == vault_config.vault_token_account @ VaultError::InvalidVaultTokenAccount,
        constraint = vault_token_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA that owns the vault custody account, validated by seeds.
    #[account(
        seeds = [b"vault_authority"],
        bump,
        constraint = vault_authority.key() == vault_token_account.owner @ VaultError::InvalidVaultAuthority
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = share_mint.key() == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub share_mint: Account<'info, Mint>,

    /// The share account being redeemed from; same ownership rules as a
    /// withdrawal.
    #[account(
        mut,
        constraint = owner_share_account.mint == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub owner_share_account: Account<'info, TokenAccount>,

    /// Reserve account the redeemed assets are released to. For a zap exit
    /// this is the pipeline's custody, not the caller.
    #[account(
        mut,
        constraint = receiver_reserve_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint
    )]
    pub receiver_reserve_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ConversionView<'info> {
    #[account(
        seeds = [b"vault_config"],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        constraint = share_mint.key() == vault_config.share_mint @ VaultError::InvalidMint
    )]
    pub share_mint: Account<'info, Mint>,

    #[account(
        constraint = vault_token_account.key() == vault_config.vault_token_account @ VaultError::InvalidVaultTokenAccount,
        constraint = vault_token_account.mint == vault_config.reserve_mint @ VaultError::InvalidReserveMint
    )]
    pub vault_token_account: Account<'info, TokenAccount>,
}

// Helper function to derive the program data address
pub(crate) fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}
