pub mod account_structs;
/// # vault-shares - Proportional Share Vault
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - Admin initializes the program against a yield-bearing reserve token
///    - Program creates the share mint and the reserve custody account,
///      both controlled by program PDAs
///
/// 2. Deposit Flow:
///    - User deposits reserve tokens into vault custody
///    - User (or a designated receiver) is minted shares priced off the live
///      reserve balance and share supply; the first deposit is 1:1
///
/// 3. Exit Flows:
///    a. Withdraw (asset-denominated):
///       - User names an asset amount; the share cost is computed at the
///         live rate, rounded against the user
///       - Shares are burned and reserve tokens released to the receiver
///    b. Redeem (share-denominated):
///       - User names a share amount; the asset payout is computed at the
///         live rate, rounded against the user
///    - Either exit may be executed by an SPL delegate of the share account
///      within its approved allowance
///
/// 4. Administrative Functions:
///    - Pause/unpause deposits and exits
///
/// Security is maintained through PDAs (Program Derived Addresses) and strict
/// token authority controls. All token operations are atomic and validated
/// through Solana's transaction model; a per-call guard additionally rejects
/// any re-entry into a mutating operation.
pub mod error;
pub mod events;
mod guard;
pub mod processor;
pub mod state;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("GPW1GQp875qtUNCQVLHfdZxnfJfN3ZeHejN1cWtGxjVm");

#[program]
pub mod vault_shares {
    use super::*;

    /// Initializes the vault against a reserve token:
    /// - creates the share mint (decimals mirror the reserve mint)
    /// - creates the PDA-owned reserve custody account
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        processor::initialize(ctx)
    }

    /// Pauses or unpauses deposits and exits:
    /// - pause: true to pause, false to unpause
    pub fn pause(ctx: Context<Pause>, pause: bool) -> Result<()> {
        processor::pause(ctx, pause)
    }

    /// Deposits `assets` reserve tokens and mints shares to the receiver's
    /// share account. Returns the shares minted.
    pub fn deposit(ctx: Context<Deposit>, assets: u64) -> Result<u64> {
        processor::deposit(ctx, assets)
    }

    /// Withdraws `assets` reserve tokens to the receiver, burning the
    /// rounded-up share cost from the owner's share account. Returns the
    /// shares burned.
    pub fn withdraw(ctx: Context<Withdraw>, assets: u64) -> Result<u64> {
        processor::withdraw(ctx, assets)
    }

    /// Redeems `shares` from the owner's share account, releasing the
    /// rounded-down asset value to the receiver. Returns the assets released.
    pub fn redeem(ctx: Context<Redeem>, shares: u64) -> Result<u64> {
        processor::redeem(ctx, shares)
    }

    pub fn assets_to_shares(ctx: Context<ConversionView>, assets: u64) -> Result<u64> {
        processor::assets_to_shares(ctx, assets)
    }

    pub fn shares_to_assets(ctx: Context<ConversionView>, shares: u64) -> Result<u64> {
        processor::shares_to_assets(ctx, shares)
    }

    pub fn exchange_rate(ctx: Context<ConversionView>) -> Result<u64> {
        processor::exchange_rate(ctx)
    }
}
