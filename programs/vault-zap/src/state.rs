use crate::error::ZapError;
use anchor_lang::prelude::*;

pub const MAX_ROUTE_HOPS: usize = 3; // max intermediate hub mints in a swap route

#[account]
pub struct ZapConfig {
    pub staking_program: Pubkey,
    pub swap_program: Pubkey,
    pub base_mint: Pubkey,
    pub reserve_mint: Pubkey,
    /// Ordered intermediate hub mints every swap routes through. The
    /// canonical deployment holds a single wrapped-native hub.
    pub route: Vec<Pubkey>,
    pub bump: u8,
    pub paused: bool,
    pub locked: bool,
}

impl ZapConfig {
    // The route vector carries the Borsh overhead of 4 bytes for the
    // length prefix.
    pub const LEN: usize =
        8 + 32 + 32 + 32 + 32 + (4 + (32 * MAX_ROUTE_HOPS)) + 1 + 1 + 1;
}

/// One hop of a swap path: the asset entering the hop and the pool fee tier
/// selecting the pool it leaves through. The terminal node carries no fee
/// tier of its own.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathNode {
    pub mint: Pubkey,
    pub fee_tier: u32,
}

// ========== ROUTE POLICY ==========

/// Expands the configured hub route into the concrete hop path for one swap,
/// applying the caller's fee tier to every hop. Degenerate overlaps collapse:
/// a hub equal to the previous node or to the output is dropped, and
/// `input == output` yields an empty path, meaning no swap at all.
pub fn build_swap_path(
    input_mint: Pubkey,
    route: &[Pubkey],
    output_mint: Pubkey,
    fee_tier: u32,
) -> Result<Vec<PathNode>> {
    if input_mint == output_mint {
        return Ok(Vec::new());
    }
    require!(route.len() <= MAX_ROUTE_HOPS, ZapError::RouteTooLong);

    let mut mints: Vec<Pubkey> = Vec::with_capacity(route.len() + 2);
    mints.push(input_mint);
    for hub in route {
        if *hub != mints[mints.len() - 1] && *hub != output_mint {
            mints.push(*hub);
        }
    }
    mints.push(output_mint);

    let terminal = mints.len() - 1;
    Ok(mints
        .into_iter()
        .enumerate()
        .map(|(i, mint)| PathNode {
            mint,
            fee_tier: if i == terminal { 0 } else { fee_tier },
        })
        .collect())
}

/// The conversion-output floor. Callers opt out of protection explicitly by
/// passing zero; there is no silent unprotected default.
pub fn enforce_min_out(received: u64, min_out: u64) -> Result<()> {
    require!(received >= min_out, ZapError::SlippageExceeded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mint(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn path_routes_through_the_hub() {
        let (input, hub, base) = (mint(1), mint(2), mint(3));
        let path = build_swap_path(input, &[hub], base, 500).unwrap();
        assert_eq!(
            path,
            vec![
                PathNode { mint: input, fee_tier: 500 },
                PathNode { mint: hub, fee_tier: 500 },
                PathNode { mint: base, fee_tier: 0 },
            ]
        );
    }

    #[test]
    fn fee_tier_applies_to_every_hop() {
        let path = build_swap_path(mint(1), &[mint(2), mint(3)], mint(4), 3000).unwrap();
        assert_eq!(path.len(), 4);
        assert!(path[..3].iter().all(|node| node.fee_tier == 3000));
        assert_eq!(path[3].fee_tier, 0);
    }

    #[test]
    fn matching_input_and_output_skips_the_swap() {
        let asset = mint(7);
        let path = build_swap_path(asset, &[mint(2)], asset, 500).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn hub_equal_to_input_collapses_to_single_hop() {
        let (hub, base) = (mint(2), mint(3));
        let path = build_swap_path(hub, &[hub], base, 500).unwrap();
        assert_eq!(
            path,
            vec![
                PathNode { mint: hub, fee_tier: 500 },
                PathNode { mint: base, fee_tier: 0 },
            ]
        );
    }

    #[test]
    fn hub_equal_to_output_collapses_to_single_hop() {
        let (input, hub) = (mint(1), mint(2));
        let path = build_swap_path(input, &[hub], hub, 500).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].mint, input);
        assert_eq!(path[1].mint, hub);
    }

    #[test]
    fn empty_route_swaps_directly() {
        let path = build_swap_path(mint(1), &[], mint(2), 100).unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn exit_path_reverses_the_entry_ordering() {
        let (base, hub, output) = (mint(3), mint(2), mint(1));
        let path = build_swap_path(base, &[hub], output, 500).unwrap();
        assert_eq!(path[0].mint, base);
        assert_eq!(path[1].mint, hub);
        assert_eq!(path[2].mint, output);
    }

    #[test]
    fn overlong_route_is_rejected() {
        let route = [mint(2), mint(3), mint(4), mint(5)];
        assert!(build_swap_path(mint(1), &route, mint(6), 500).is_err());
    }

    #[test]
    fn min_out_floor_is_enforced() {
        assert!(enforce_min_out(100, 100).is_ok());
        assert!(enforce_min_out(101, 100).is_ok());
        assert!(enforce_min_out(99, 100).is_err());
        // Zero floor accepts any output; that opt-out is the caller's call.
        assert!(enforce_min_out(1, 0).is_ok());
    }
}
