use crate::account_structs::*;
use crate::error::*;
use crate::events::*;
use crate::guard::{acquire_call_guard, release_call_guard, validate_program_update_authority};
use crate::staking::{self, StakingOp};
use crate::state::{build_swap_path, enforce_min_out, MAX_ROUTE_HOPS};
use crate::swap::{self, ConvertArgs, SwapConvert};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

/*
# Zap Pipeline

One call carries a caller from an arbitrary input token into vault shares
(`zap`), or from shares back into an arbitrary output token (`zap_out`).
Entry sequence: pull input into pipeline custody, swap it to the staking
base asset through the configured hub route, stake the proceeds into the
reserve asset, deposit the reserve into the share ledger with the caller as
receiver. Exit runs the mirror order, redeeming into pipeline custody first
so the unstake and swap legs spend pipeline funds, never the caller's.

Every leg's output is measured as a custody token-account balance delta
after the CPI returns. Collaborators price their own conversions; they are
never trusted to report them.

Failure at any leg aborts the instruction, and the runtime unwinds the whole
transaction - there is no partial zap. The per-call guard on the config
additionally rejects re-entry into either pipeline while one is in flight.
*/

pub fn initialize(ctx: Context<Initialize>, route: Vec<Pubkey>) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(route.len() <= MAX_ROUTE_HOPS, ZapError::RouteTooLong);
    require!(
        ctx.accounts.base_mint.key() != ctx.accounts.reserve_mint.key(),
        ZapError::BaseAndReserveMintCannotBeSame
    );

    let config = &mut ctx.accounts.zap_config;
    config.staking_program = ctx.accounts.staking_program.key();
    config.swap_program = ctx.accounts.swap_program.key();
    config.base_mint = ctx.accounts.base_mint.key();
    config.reserve_mint = ctx.accounts.reserve_mint.key();
    config.route = route;
    config.bump = ctx.bumps.zap_config;
    config.paused = false;
    config.locked = false;

    msg!("Zap pipeline initialized");
    msg!("Base mint: {}", config.base_mint);
    msg!("Reserve mint: {}", config.reserve_mint);
    msg!("Staking program: {}", config.staking_program);
    msg!("Swap program: {}", config.swap_program);
    msg!("Route hops: {}", config.route.len());

    Ok(())
}

pub fn update_route(ctx: Context<UpdateRoute>, new_route: Vec<Pubkey>) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(new_route.len() <= MAX_ROUTE_HOPS, ZapError::RouteTooLong);

    let config = &mut ctx.accounts.zap_config;
    config.route = new_route;

    emit!(RouteUpdated {
        admin: ctx.accounts.signer.key(),
        route: config.route.clone(),
    });

    Ok(())
}

pub fn pause(ctx: Context<Pause>, pause: bool) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    let config = &mut ctx.accounts.zap_config;
    config.paused = pause;

    msg!("Pipeline paused: {}", pause);

    Ok(())
}

pub fn zap<'info>(
    ctx: Context<'_, '_, '_, 'info, Zap<'info>>,
    amount_in: u64,
    fee_tier: u32,
    min_base_out: u64,
) -> Result<()> {
    require!(amount_in > 0, ZapError::InvalidAmount);
    require!(!ctx.accounts.zap_config.paused, ZapError::ProtocolPaused);
    acquire_call_guard(&mut ctx.accounts.zap_config)?;

    let input_mint = ctx.accounts.input_mint.key();
    let base_mint = ctx.accounts.zap_config.base_mint;
    let authority_seeds: &[&[u8]] = &[b"zap_authority", &[ctx.bumps.zap_authority]];

    // Pull the input into pipeline custody under the caller's authority.
    let pull_accounts = Transfer {
        from: ctx.accounts.user_input_account.to_account_info(),
        to: ctx.accounts.input_custody.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), pull_accounts),
        amount_in,
    )?;
    msg!("Pulled {} of {}", amount_in, input_mint);

    // Convert to the staking base asset unless the caller already holds it.
    let base_amount = if input_mint == base_mint {
        amount_in
    } else {
        let path = build_swap_path(
            input_mint,
            &ctx.accounts.zap_config.route,
            base_mint,
            fee_tier,
        )?;
        let base_before = ctx.accounts.base_custody.amount;
        swap::convert(
            SwapConvert {
                swap_program: &ctx.accounts.swap_program.to_account_info(),
                authority: &ctx.accounts.zap_authority.to_account_info(),
                source: &ctx.accounts.input_custody.to_account_info(),
                destination: &ctx.accounts.base_custody.to_account_info(),
                token_program: &ctx.accounts.token_program.to_account_info(),
                market_accounts: ctx.remaining_accounts,
            },
            &ConvertArgs {
                amount_in,
                min_amount_out: min_base_out,
                deadline: Clock::get()?.unix_timestamp,
                path,
            },
            authority_seeds,
        )?;
        ctx.accounts.base_custody.reload()?;
        let received = ctx
            .accounts
            .base_custody
            .amount
            .checked_sub(base_before)
            .ok_or(ZapError::Overflow)?;
        require!(received > 0, ZapError::EmptySwapResult);
        msg!("Swapped {} {} into {} {}", amount_in, input_mint, received, base_mint);
        received
    };
    enforce_min_out(base_amount, min_base_out)?;

    // Stake the base asset; the staking program sets the exchange rate.
    let reserve_before = ctx.accounts.reserve_custody.amount;
    staking::stake(
        StakingOp {
            staking_program: &ctx.accounts.staking_program.to_account_info(),
            pool: &ctx.accounts.staking_pool.to_account_info(),
            authority: &ctx.accounts.zap_authority.to_account_info(),
            source: &ctx.accounts.base_custody.to_account_info(),
            destination: &ctx.accounts.reserve_custody.to_account_info(),
            token_program: &ctx.accounts.token_program.to_account_info(),
        },
        base_amount,
        authority_seeds,
    )?;
    ctx.accounts.reserve_custody.reload()?;
    let reserve_amount = ctx
        .accounts
        .reserve_custody
        .amount
        .checked_sub(reserve_before)
        .ok_or(ZapError::Overflow)?;
    require!(reserve_amount > 0, ZapError::EmptyStakeResult);
    msg!("Staked {} base into {} reserve", base_amount, reserve_amount);

    // Deposit the reserve into the share ledger, shares to the caller.
    let deposit_accounts = vault_shares::cpi::accounts::Deposit {
        vault_config: ctx.accounts.shares_config.to_account_info(),
        vault_token_account: ctx.accounts.shares_vault_token_account.to_account_info(),
        share_mint: ctx.accounts.share_mint.to_account_info(),
        share_mint_authority: ctx.accounts.share_mint_authority.to_account_info(),
        signer: ctx.accounts.zap_authority.to_account_info(),
        depositor_reserve_account: ctx.accounts.reserve_custody.to_account_info(),
        receiver_share_account: ctx.accounts.user_share_account.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    let shares_minted = vault_shares::cpi::deposit(
        CpiContext::new_with_signer(
            ctx.accounts.shares_program.to_account_info(),
            deposit_accounts,
            &[authority_seeds],
        ),
        reserve_amount,
    )?
    .get();

    emit!(ZapInEvent {
        user: ctx.accounts.signer.key(),
        input_mint,
        amount_in,
        fee_tier,
        base_amount,
        reserve_amount,
        shares_minted,
        slot: Clock::get()?.slot,
    });

    release_call_guard(&mut ctx.accounts.zap_config);
    Ok(())
}

pub fn zap_out<'info>(
    ctx: Context<'_, '_, '_, 'info, ZapOut<'info>>,
    shares: u64,
    fee_tier: u32,
    min_amount_out: u64,
) -> Result<()> {
    require!(shares > 0, ZapError::InvalidShares);
    require!(!ctx.accounts.zap_config.paused, ZapError::ProtocolPaused);
    acquire_call_guard(&mut ctx.accounts.zap_config)?;

    let output_mint = ctx.accounts.output_mint.key();
    let base_mint = ctx.accounts.zap_config.base_mint;
    let authority_seeds: &[&[u8]] = &[b"zap_authority", &[ctx.bumps.zap_authority]];

    // Redeem the caller's shares into pipeline custody, not to the caller.
    // The caller's signature propagates through the CPI and authorizes the
    // ledger's share burn.
    let redeem_accounts = vault_shares::cpi::accounts::Redeem {
        vault_config: ctx.accounts.shares_config.to_account_info(),
        vault_token_account: ctx.accounts.shares_vault_token_account.to_account_info(),
        vault_authority: ctx.accounts.shares_vault_authority.to_account_info(),
        share_mint: ctx.accounts.share_mint.to_account_info(),
        owner_share_account: ctx.accounts.user_share_account.to_account_info(),
        receiver_reserve_account: ctx.accounts.reserve_custody.to_account_info(),
        caller: ctx.accounts.signer.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    let reserve_amount = vault_shares::cpi::redeem(
        CpiContext::new(
            ctx.accounts.shares_program.to_account_info(),
            redeem_accounts,
        ),
        shares,
    )?
    .get();
    msg!("Redeemed {} shares into {} reserve", shares, reserve_amount);

    // Unstake the reserve back into the base asset.
    let base_before = ctx.accounts.base_custody.amount;
    staking::unstake(
        StakingOp {
            staking_program: &ctx.accounts.staking_program.to_account_info(),
            pool: &ctx.accounts.staking_pool.to_account_info(),
            authority: &ctx.accounts.zap_authority.to_account_info(),
            source: &ctx.accounts.reserve_custody.to_account_info(),
            destination: &ctx.accounts.base_custody.to_account_info(),
            token_program: &ctx.accounts.token_program.to_account_info(),
        },
        reserve_amount,
        authority_seeds,
    )?;
    ctx.accounts.base_custody.reload()?;
    let base_amount = ctx
        .accounts
        .base_custody
        .amount
        .checked_sub(base_before)
        .ok_or(ZapError::Overflow)?;
    require!(base_amount > 0, ZapError::EmptyUnstakeResult);
    msg!("Unstaked {} reserve into {} base", reserve_amount, base_amount);

    // Deliver the output: directly when the caller wants the base asset,
    // otherwise swapped along the reversed route with the caller's account
    // as the swap recipient.
    let amount_out = if output_mint == base_mint {
        let payout_accounts = Transfer {
            from: ctx.accounts.base_custody.to_account_info(),
            to: ctx.accounts.user_output_account.to_account_info(),
            authority: ctx.accounts.zap_authority.to_account_info(),
        };
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                payout_accounts,
                &[authority_seeds],
            ),
            base_amount,
        )?;
        base_amount
    } else {
        let path = build_swap_path(
            base_mint,
            &ctx.accounts.zap_config.route,
            output_mint,
            fee_tier,
        )?;
        let out_before = ctx.accounts.user_output_account.amount;
        swap::convert(
            SwapConvert {
                swap_program: &ctx.accounts.swap_program.to_account_info(),
                authority: &ctx.accounts.zap_authority.to_account_info(),
                source: &ctx.accounts.base_custody.to_account_info(),
                destination: &ctx.accounts.user_output_account.to_account_info(),
                token_program: &ctx.accounts.token_program.to_account_info(),
                market_accounts: ctx.remaining_accounts,
            },
            &ConvertArgs {
                amount_in: base_amount,
                min_amount_out,
                deadline: Clock::get()?.unix_timestamp,
                path,
            },
            authority_seeds,
        )?;
        ctx.accounts.user_output_account.reload()?;
        let received = ctx
            .accounts
            .user_output_account
            .amount
            .checked_sub(out_before)
            .ok_or(ZapError::Overflow)?;
        require!(received > 0, ZapError::EmptySwapResult);
        received
    };
    enforce_min_out(amount_out, min_amount_out)?;
    msg!("Delivered {} of {}", amount_out, output_mint);

    emit!(ZapOutEvent {
        user: ctx.accounts.signer.key(),
        output_mint,
        shares_redeemed: shares,
        fee_tier,
        reserve_amount,
        base_amount,
        amount_out,
        slot: Clock::get()?.slot,
    });

    release_call_guard(&mut ctx.accounts.zap_config);
    Ok(())
}
