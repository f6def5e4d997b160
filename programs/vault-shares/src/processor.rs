use crate::account_structs::*;
use crate::error::*;
use crate::events::*;
use crate::guard::{acquire_call_guard, release_call_guard, validate_program_update_authority};
use crate::state::{
    calculate_assets_to_shares, calculate_exchange_rate, calculate_shares_to_assets,
    calculate_withdraw_share_cost,
};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Burn, MintTo, Transfer};

/*
# Proportional Share Accounting

Shares are an SPL mint controlled by a program PDA; the reserve custody is a
token account owned by another program PDA. Both totals that price a
conversion - share supply and reserve balance - are read live from those
accounts on every call and never cached, so reserve tokens transferred
directly into custody (yield pushed by the reserve protocol, or a plain
donation) immediately reprice every outstanding share.

The consequence of live pricing is that `total_shares == 0` does not imply an
empty vault: a donation before the first deposit is simply absorbed by the
1:1 bootstrap depositor. That manipulation surface is accepted; the first
depositor sets the rate and carries the risk.

Rounding always favors the vault. Deposits floor the shares minted,
asset-denominated withdrawals ceiling the shares burned, share-denominated
redemptions floor the assets released. See `state.rs` for the helpers and the
accompanying invariant tests.
*/

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;

    let config = &mut ctx.accounts.vault_config;
    config.reserve_mint = ctx.accounts.reserve_mint.key();
    config.share_mint = ctx.accounts.share_mint.key();
    config.vault_token_account = ctx.accounts.vault_token_account.key();
    config.bump = ctx.bumps.vault_config;
    config.paused = false;
    config.locked = false;

    msg!("Vault initialized");
    msg!("Reserve mint: {}", config.reserve_mint);
    msg!("Share mint: {}", config.share_mint);
    msg!("Vault token account: {}", config.vault_token_account);

    Ok(())
}

pub fn pause(ctx: Context<Pause>, pause: bool) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    let config = &mut ctx.accounts.vault_config;
    config.paused = pause;

    msg!("Protocol paused: {}", pause);

    Ok(())
}

pub fn deposit(ctx: Context<Deposit>, assets: u64) -> Result<u64> {
    require!(assets > 0, VaultError::InvalidAmount);
    require!(
        !ctx.accounts.vault_config.paused,
        VaultError::ProtocolPaused
    );
    acquire_call_guard(&mut ctx.accounts.vault_config)?;

    let total_assets = ctx.accounts.vault_token_account.amount;
    let total_shares = ctx.accounts.share_mint.supply;

    msg!("Current total_assets: {}", total_assets);
    msg!("Current total_shares: {}", total_shares);
    msg!("Deposit amount: {}", assets);

    let shares = calculate_assets_to_shares(assets, total_shares, total_assets)?;
    require!(shares > 0, VaultError::DepositTooSmall);

    let cpi_accounts = Transfer {
        from: ctx.accounts.depositor_reserve_account.to_account_info(),
        to: ctx.accounts.vault_token_account.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        assets,
    )?;

    let seeds: &[&[u8]] = &[b"share_mint_authority", &[ctx.bumps.share_mint_authority]];
    let signer = &[&seeds[..]];
    let cpi_accounts = MintTo {
        mint: ctx.accounts.share_mint.to_account_info(),
        to: ctx.accounts.receiver_share_account.to_account_info(),
        authority: ctx.accounts.share_mint_authority.to_account_info(),
    };
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        ),
        shares,
    )?;

    let result_total_assets = total_assets
        .checked_add(assets)
        .ok_or(VaultError::Overflow)?;
    let result_total_shares = total_shares
        .checked_add(shares)
        .ok_or(VaultError::Overflow)?;

    emit!(DepositEvent {
        depositor: ctx.accounts.signer.key(),
        receiver: ctx.accounts.receiver_share_account.owner,
        assets,
        shares,
        share_mint: ctx.accounts.share_mint.key(),
        vault: ctx.accounts.vault_token_account.key(),
        total_assets: result_total_assets,
        total_shares: result_total_shares,
        totals_last_update_slot: Clock::get()?.slot,
    });

    release_call_guard(&mut ctx.accounts.vault_config);
    Ok(shares)
}

pub fn withdraw(ctx: Context<Withdraw>, assets: u64) -> Result<u64> {
    require!(assets > 0, VaultError::InvalidAmount);
    require!(
        !ctx.accounts.vault_config.paused,
        VaultError::ProtocolPaused
    );
    acquire_call_guard(&mut ctx.accounts.vault_config)?;

    let total_assets = ctx.accounts.vault_token_account.amount;
    let total_shares = ctx.accounts.share_mint.supply;
    let owner = ctx.accounts.owner_share_account.owner;

    let shares = calculate_withdraw_share_cost(assets, total_shares, total_assets)?;

    let owner_share_balance = ctx.accounts.owner_share_account.amount;
    if shares > owner_share_balance {
        let max_assets =
            calculate_shares_to_assets(owner_share_balance, total_shares, total_assets)?;
        msg!(
            "Withdrawal of {} assets by owner {} exceeds redeemable maximum of {}",
            assets,
            owner,
            max_assets
        );
        return err!(VaultError::ExceededMaxWithdraw);
    }

    validate_share_spending_authority(
        &ctx.accounts.owner_share_account,
        ctx.accounts.caller.key(),
        shares,
    )?;

    require!(
        total_assets >= assets,
        VaultError::InsufficientVaultBalance
    );

    let burn_accounts = Burn {
        mint: ctx.accounts.share_mint.to_account_info(),
        from: ctx.accounts.owner_share_account.to_account_info(),
        authority: ctx.accounts.caller.to_account_info(),
    };
    token::burn(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), burn_accounts),
        shares,
    )?;

    let seeds: &[&[u8]] = &[b"vault_authority", &[ctx.bumps.vault_authority]];
    let signer = &[&seeds[..]];
    let transfer_accounts = Transfer {
        from: ctx.accounts.vault_token_account.to_account_info(),
        to: ctx.accounts.receiver_reserve_account.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        ),
        assets,
    )?;

    let result_total_assets = total_assets
        .checked_sub(assets)
        .ok_or(VaultError::Overflow)?;
    let result_total_shares = total_shares
        .checked_sub(shares)
        .ok_or(VaultError::Overflow)?;

    emit!(WithdrawEvent {
        caller: ctx.accounts.caller.key(),
        owner,
        receiver: ctx.accounts.receiver_reserve_account.owner,
        assets,
        shares_burned: shares,
        share_mint: ctx.accounts.share_mint.key(),
        vault: ctx.accounts.vault_token_account.key(),
        total_assets: result_total_assets,
        total_shares: result_total_shares,
        totals_last_update_slot: Clock::get()?.slot,
    });

    release_call_guard(&mut ctx.accounts.vault_config);
    Ok(shares)
}

pub fn redeem(ctx: Context<Redeem>, shares: u64) -> Result<u64> {
    require!(shares > 0, VaultError::InvalidAmount);
    require!(
        !ctx.accounts.vault_config.paused,
        VaultError::ProtocolPaused
    );
    acquire_call_guard(&mut ctx.accounts.vault_config)?;

    let total_assets = ctx.accounts.vault_token_account.amount;
    let total_shares = ctx.accounts.share_mint.supply;
    let owner = ctx.accounts.owner_share_account.owner;

    let owner_share_balance = ctx.accounts.owner_share_account.amount;
    if shares > owner_share_balance {
        msg!(
            "Redemption of {} shares by owner {} exceeds balance of {}",
            shares,
            owner,
            owner_share_balance
        );
        return err!(VaultError::ExceededMaxRedeem);
    }

    validate_share_spending_authority(
        &ctx.accounts.owner_share_account,
        ctx.accounts.caller.key(),
        shares,
    )?;

    let assets = calculate_shares_to_assets(shares, total_shares, total_assets)?;
    require!(assets > 0, VaultError::RedeemTooSmall);
    require!(
        total_assets >= assets,
        VaultError::InsufficientVaultBalance
    );

    let burn_accounts = Burn {
        mint: ctx.accounts.share_mint.to_account_info(),
        from: ctx.accounts.owner_share_account.to_account_info(),
        authority: ctx.accounts.caller.to_account_info(),
    };
    token::burn(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), burn_accounts),
        shares,
    )?;

    let seeds: &[&[u8]] = &[b"vault_authority", &[ctx.bumps.vault_authority]];
    let signer = &[&seeds[..]];
    let transfer_accounts = Transfer {
        from: ctx.accounts.vault_token_account.to_account_info(),
        to: ctx.accounts.receiver_reserve_account.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        ),
        assets,
    )?;

    let result_total_assets = total_assets
        .checked_sub(assets)
        .ok_or(VaultError::Overflow)?;
    let result_total_shares = total_shares
        .checked_sub(shares)
        .ok_or(VaultError::Overflow)?;

    emit!(RedeemEvent {
        caller: ctx.accounts.caller.key(),
        owner,
        receiver: ctx.accounts.receiver_reserve_account.owner,
        shares_burned: shares,
        assets,
        share_mint: ctx.accounts.share_mint.key(),
        vault: ctx.accounts.vault_token_account.key(),
        total_assets: result_total_assets,
        total_shares: result_total_shares,
        totals_last_update_slot: Clock::get()?.slot,
    });

    release_call_guard(&mut ctx.accounts.vault_config);
    Ok(assets)
}

/// A caller spending someone else's shares must be that account's SPL
/// delegate with an approval covering the full share cost. The token program
/// re-checks and decrements the approval when the burn executes.
fn validate_share_spending_authority(
    owner_share_account: &anchor_spl::token::TokenAccount,
    caller: Pubkey,
    shares: u64,
) -> Result<()> {
    if owner_share_account.owner == caller {
        return Ok(());
    }

    let delegated_to_caller = matches!(
        owner_share_account.delegate,
        COption::Some(delegate) if delegate == caller
    );
    require!(
        delegated_to_caller && owner_share_account.delegated_amount >= shares,
        VaultError::InsufficientAuthorization
    );
    Ok(())
}

/// Convert underlying assets to shares at the live rate.
/// Returns value via return_data for efficient CPI access
pub fn assets_to_shares(ctx: Context<ConversionView>, assets: u64) -> Result<u64> {
    let total_assets = ctx.accounts.vault_token_account.amount;
    let total_shares = ctx.accounts.share_mint.supply;

    let shares = calculate_assets_to_shares(assets, total_shares, total_assets)?;

    msg!("assets_to_shares: {} assets = {} shares", assets, shares);

    anchor_lang::solana_program::program::set_return_data(&shares.to_le_bytes());

    Ok(shares)
}

/// Convert shares to underlying assets at the live rate.
/// Returns value via return_data for efficient CPI access
pub fn shares_to_assets(ctx: Context<ConversionView>, shares: u64) -> Result<u64> {
    let total_assets = ctx.accounts.vault_token_account.amount;
    let total_shares = ctx.accounts.share_mint.supply;

    let assets = calculate_shares_to_assets(shares, total_shares, total_assets)?;

    msg!("shares_to_assets: {} shares = {} assets", shares, assets);

    anchor_lang::solana_program::program::set_return_data(&assets.to_le_bytes());

    Ok(assets)
}

/// Get current exchange rate
/// Returns rate scaled by 1e9 (1_000_000_000) for precision
pub fn exchange_rate(ctx: Context<ConversionView>) -> Result<u64> {
    let total_assets = ctx.accounts.vault_token_account.amount;
    let total_shares = ctx.accounts.share_mint.supply;

    let rate = calculate_exchange_rate(total_shares, total_assets)?;

    msg!("exchange_rate: {} (scaled by 1e9)", rate);

    anchor_lang::solana_program::program::set_return_data(&rate.to_le_bytes());

    Ok(rate)
}
