use anchor_lang::prelude::*;

#[event]
pub struct ZapInEvent {
    pub user: Pubkey,
    pub input_mint: Pubkey,
    pub amount_in: u64,
    pub fee_tier: u32,
    pub base_amount: u64,
    pub reserve_amount: u64,
    pub shares_minted: u64,
    pub slot: u64,
}

#[event]
pub struct ZapOutEvent {
    pub user: Pubkey,
    pub output_mint: Pubkey,
    pub shares_redeemed: u64,
    pub fee_tier: u32,
    pub reserve_amount: u64,
    pub base_amount: u64,
    pub amount_out: u64,
    pub slot: u64,
}

#[event]
pub struct RouteUpdated {
    pub admin: Pubkey,
    pub route: Vec<Pubkey>,
}
