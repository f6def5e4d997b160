use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub depositor: Pubkey,
    pub receiver: Pubkey,
    pub assets: u64,
    pub shares: u64,
    pub share_mint: Pubkey,
    pub vault: Pubkey,
    pub total_assets: u64,
    pub total_shares: u64,
    pub totals_last_update_slot: u64,
}

#[event]
pub struct WithdrawEvent {
    pub caller: Pubkey,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub assets: u64,
    pub shares_burned: u64,
    pub share_mint: Pubkey,
    pub vault: Pubkey,
    pub total_assets: u64,
    pub total_shares: u64,
    pub totals_last_update_slot: u64,
}

#[event]
pub struct RedeemEvent {
    pub caller: Pubkey,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub shares_burned: u64,
    pub assets: u64,
    pub share_mint: Pubkey,
    pub vault: Pubkey,
    pub total_assets: u64,
    pub total_shares: u64,
    pub totals_last_update_slot: u64,
}
