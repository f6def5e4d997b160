use crate::error::VaultError;
use anchor_lang::prelude::*;

pub const EXCHANGE_RATE_SCALE: u128 = 1_000_000_000;

#[account]
pub struct VaultConfig {
    pub reserve_mint: Pubkey,
    pub share_mint: Pubkey,
    pub vault_token_account: Pubkey,
    pub bump: u8,
    pub paused: bool,
    pub locked: bool,
}

impl VaultConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // reserve_mint
        32 + // share_mint
        32 + // vault_token_account
        1 +  // bump
        1 +  // paused
        1;   // locked
}

// ========== CONVERSION HELPERS ==========
//
// The exchange rate is always derived from live totals, never stored.
// Rounding direction is asymmetric on purpose: share issuance rounds down,
// share cost on an asset-denominated withdrawal rounds up, and asset payout
// on a share-denominated redemption rounds down. The vault keeps every
// rounding remainder, so a deposit/withdraw pair can never come out ahead.

/// Shares minted for a deposit of `assets`. The first deposit sets the
/// exchange rate at 1:1; afterwards issuance is proportional, rounded down.
pub fn calculate_assets_to_shares(
    assets: u64,
    total_shares: u64,
    reserve_balance: u64,
) -> Result<u64> {
    if total_shares == 0 {
        return Ok(assets);
    }

    let shares = (assets as u128)
        .checked_mul(total_shares as u128)
        .ok_or(VaultError::Overflow)?
        .checked_div(reserve_balance as u128)
        .ok_or(VaultError::DivisionByZero)?;

    u64::try_from(shares).map_err(|_| VaultError::Overflow.into())
}

/// Share cost of withdrawing `assets`, rounded up.
pub fn calculate_withdraw_share_cost(
    assets: u64,
    total_shares: u64,
    reserve_balance: u64,
) -> Result<u64> {
    if total_shares == 0 {
        return Ok(assets);
    }

    let numerator = (assets as u128)
        .checked_mul(total_shares as u128)
        .ok_or(VaultError::Overflow)?;
    if reserve_balance == 0 {
        return err!(VaultError::DivisionByZero);
    }
    let shares = numerator
        .checked_add(reserve_balance as u128 - 1)
        .ok_or(VaultError::Overflow)?
        / (reserve_balance as u128);

    u64::try_from(shares).map_err(|_| VaultError::Overflow.into())
}

/// Assets a holding of `shares` redeems for, rounded down.
pub fn calculate_shares_to_assets(
    shares: u64,
    total_shares: u64,
    reserve_balance: u64,
) -> Result<u64> {
    if total_shares == 0 {
        return Ok(shares);
    }

    let assets = (shares as u128)
        .checked_mul(reserve_balance as u128)
        .ok_or(VaultError::Overflow)?
        .checked_div(total_shares as u128)
        .ok_or(VaultError::DivisionByZero)?;

    u64::try_from(assets).map_err(|_| VaultError::Overflow.into())
}

/// Assets per share scaled by 1e9. 1:1 before the first deposit.
pub fn calculate_exchange_rate(total_shares: u64, reserve_balance: u64) -> Result<u64> {
    if total_shares == 0 {
        return Ok(EXCHANGE_RATE_SCALE as u64);
    }

    let rate = (reserve_balance as u128)
        .checked_mul(EXCHANGE_RATE_SCALE)
        .ok_or(VaultError::Overflow)?
        .checked_div(total_shares as u128)
        .ok_or(VaultError::DivisionByZero)?;

    u64::try_from(rate).map_err(|_| VaultError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_deposit_mints_one_to_one() {
        assert_eq!(calculate_assets_to_shares(10, 0, 0).unwrap(), 10);
        assert_eq!(calculate_assets_to_shares(1, 0, 0).unwrap(), 1);
        // Donated reserve balance with no shares outstanding does not change
        // the bootstrap rate; the first depositor bears that risk.
        assert_eq!(calculate_assets_to_shares(10, 0, 500).unwrap(), 10);
    }

    #[test]
    fn second_depositor_is_priced_off_live_totals() {
        // First depositor put in 10 at 1:1; second deposits 20 against
        // reserve_balance == 10, total_shares == 10.
        let second = calculate_assets_to_shares(20, 10, 10).unwrap();
        assert_eq!(second, 20);
        // Combined supply afterwards is 30.
        assert_eq!(10 + second, 30);
    }

    #[test]
    fn deposit_issuance_rounds_down() {
        // Rate is 45/30 = 1.5 assets per share; 10 assets buy 6.67 shares.
        assert_eq!(calculate_assets_to_shares(10, 30, 45).unwrap(), 6);
        // The truncated remainder stays with the vault.
        assert_eq!(calculate_assets_to_shares(1, 30, 45).unwrap(), 0);
    }

    #[test]
    fn deposit_never_lowers_per_share_value() {
        let cases: [(u64, u64, u64); 5] =
            [(10, 30, 45), (1, 30, 45), (7, 3, 1000), (999, 1000, 1001), (1, 1, 2)];
        for (assets, total_shares, reserve) in cases {
            let minted = calculate_assets_to_shares(assets, total_shares, reserve).unwrap();
            // (reserve + assets) / (shares + minted) >= reserve / shares,
            // compared by cross-multiplication to stay in integers.
            let lhs = (reserve as u128 + assets as u128) * total_shares as u128;
            let rhs = reserve as u128 * (total_shares as u128 + minted as u128);
            assert!(lhs >= rhs, "diluted at {assets}/{total_shares}/{reserve}");
        }
    }

    #[test]
    fn withdraw_share_cost_rounds_up() {
        // Rate 1.5: withdrawing 10 assets costs ceil(10 * 30 / 45) = 7 shares.
        assert_eq!(calculate_withdraw_share_cost(10, 30, 45).unwrap(), 7);
        // Exact multiples do not round.
        assert_eq!(calculate_withdraw_share_cost(9, 30, 45).unwrap(), 6);
        // A single asset still costs a full share.
        assert_eq!(calculate_withdraw_share_cost(1, 30, 45).unwrap(), 1);
    }

    #[test]
    fn deposit_then_withdraw_is_value_neutral() {
        // Bootstrap round trip.
        let minted = calculate_assets_to_shares(10, 0, 0).unwrap();
        assert_eq!(minted, 10);
        assert_eq!(calculate_withdraw_share_cost(10, 10, 10).unwrap(), 10);

        // Non-bootstrap round trip at a 1:1 rate.
        let minted = calculate_assets_to_shares(10, 100, 100).unwrap();
        assert_eq!(minted, 10);
        assert_eq!(calculate_withdraw_share_cost(10, 110, 110).unwrap(), 10);
    }

    #[test]
    fn rounding_pair_never_favors_the_caller() {
        // Depositing A and then withdrawing A must never burn fewer shares
        // than were minted, at any rate.
        let cases: [(u64, u64, u64); 4] = [(10, 30, 45), (3, 7, 11), (1, 2, 3), (17, 5, 9)];
        for (assets, total_shares, reserve) in cases {
            let minted = calculate_assets_to_shares(assets, total_shares, reserve).unwrap();
            let burned = calculate_withdraw_share_cost(
                assets,
                total_shares + minted,
                reserve + assets,
            )
            .unwrap();
            assert!(burned >= minted, "profitable at {assets}/{total_shares}/{reserve}");
        }
    }

    #[test]
    fn redeemable_maximum_matches_reported_error_values() {
        // Holder owns 10 shares at a 1:1 rate and asks to withdraw 15 assets:
        // the implied cost is 15 shares against a maximum redemption of 10.
        let cost = calculate_withdraw_share_cost(15, 10, 10).unwrap();
        assert_eq!(cost, 15);
        let max = calculate_shares_to_assets(10, 10, 10).unwrap();
        assert_eq!(max, 10);
        assert!(cost > 10);
    }

    #[test]
    fn redemption_payout_rounds_down() {
        assert_eq!(calculate_shares_to_assets(7, 30, 45).unwrap(), 10);
        assert_eq!(calculate_shares_to_assets(1, 30, 45).unwrap(), 1);
        assert_eq!(calculate_shares_to_assets(1, 45, 30).unwrap(), 0);
    }

    #[test]
    fn exchange_rate_is_identity_at_bootstrap() {
        assert_eq!(
            calculate_exchange_rate(0, 0).unwrap(),
            EXCHANGE_RATE_SCALE as u64
        );
        // Rate reflects donations even with supply outstanding.
        assert_eq!(
            calculate_exchange_rate(2, 3).unwrap(),
            1_500_000_000
        );
    }

    #[test]
    fn conversions_reject_overflow() {
        assert!(calculate_assets_to_shares(u64::MAX, u64::MAX, 1).is_err());
        assert!(calculate_withdraw_share_cost(u64::MAX, u64::MAX, 1).is_err());
        assert!(calculate_shares_to_assets(u64::MAX, 1, u64::MAX).is_err());
    }

    #[test]
    fn empty_vault_with_outstanding_shares_cannot_price_a_deposit() {
        // Shares exist but the reserve was fully drained out-of-band.
        assert!(calculate_assets_to_shares(10, 10, 0).is_err());
        assert!(calculate_withdraw_share_cost(10, 10, 0).is_err());
    }
}
