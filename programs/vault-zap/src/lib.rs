pub mod account_structs;
/// # vault-zap - Swap-and-Stake Entry/Exit Pipeline
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - Admin initializes the pipeline with the staking and swap program
///      addresses, the base/reserve mint pair, and the hub route every swap
///      is threaded through
///
/// 2. Entry Flow (`zap`):
///    - User brings any fungible token and a pool fee tier
///    - Pipeline pulls the tokens into its custody, swaps them to the
///      staking base asset along the configured route (skipped when the user
///      already holds it), stakes the proceeds into the yield-bearing
///      reserve asset, and deposits that into the share vault
///    - The user leaves holding vault shares
///
/// 3. Exit Flow (`zap_out`):
///    - User names a share amount and a desired output token
///    - Pipeline redeems the shares into its own custody, unstakes the
///      reserve back into the base asset, and either hands the base asset
///      over or swaps it to the requested token with the user as recipient
///
/// 4. Administrative Functions:
///    - Pause/unpause the pipeline
///    - Replace the hub route
///
/// Both flows are a single transaction: any failing leg (swap, stake,
/// ledger call) reverts the whole sequence, so the pipeline never strands
/// user funds in its custody accounts. Conversion outputs are measured as
/// custody balance deltas, never taken from collaborator return data, and
/// each call enforces a caller-supplied minimum output.
pub mod error;
pub mod events;
mod guard;
pub mod processor;
pub mod staking;
pub mod state;
pub mod swap;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("99s1j1VueV4E5hQ5S6XnDZNovVN2e7PNw2eCDPGiibNY");

#[program]
pub mod vault_zap {
    use super::*;

    /// Initializes the pipeline configuration:
    /// - staking_program / swap_program: the external collaborators
    /// - base_mint: what the staking program accepts
    /// - reserve_mint: what it returns and the share vault custodies
    /// - route: ordered intermediate hub mints for swap paths
    pub fn initialize(ctx: Context<Initialize>, route: Vec<Pubkey>) -> Result<()> {
        processor::initialize(ctx, route)
    }

    /// Replaces the hub route used to build swap paths.
    pub fn update_route(ctx: Context<UpdateRoute>, new_route: Vec<Pubkey>) -> Result<()> {
        processor::update_route(ctx, new_route)
    }

    /// Pauses or unpauses both pipelines:
    /// - pause: true to pause, false to unpause
    pub fn pause(ctx: Context<Pause>, pause: bool) -> Result<()> {
        processor::pause(ctx, pause)
    }

    /// Enters the vault from any fungible token:
    /// pull -> swap to base (optional) -> stake -> deposit, atomically.
    /// `min_base_out` floors the swap leg's output.
    pub fn zap<'info>(
        ctx: Context<'_, '_, '_, 'info, Zap<'info>>,
        amount_in: u64,
        fee_tier: u32,
        min_base_out: u64,
    ) -> Result<()> {
        processor::zap(ctx, amount_in, fee_tier, min_base_out)
    }

    /// Exits the vault into any fungible token:
    /// redeem -> unstake -> swap to output (optional), atomically.
    /// `min_amount_out` floors the delivered output.
    pub fn zap_out<'info>(
        ctx: Context<'_, '_, '_, 'info, ZapOut<'info>>,
        shares: u64,
        fee_tier: u32,
        min_amount_out: u64,
    ) -> Result<()> {
        processor::zap_out(ctx, shares, fee_tier, min_amount_out)
    }
}
