use crate::error::ZapError;
use crate::state::PathNode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

/// Wire arguments of the swap program's `convert` instruction. The path is
/// an ordered (asset, fee tier) hop list; the deadline is the current
/// timestamp. The minimum-out floor is enforced again by this program after
/// measuring the actual output, so a swap program that ignores it cannot
/// under-deliver unnoticed.
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ConvertArgs {
    pub amount_in: u64,
    pub min_amount_out: u64,
    pub deadline: i64,
    pub path: Vec<PathNode>,
}

/// Fixed accounts of a `convert` call. Pool and market accounts specific to
/// the chosen route ride in as pass-through remaining accounts.
pub struct SwapConvert<'a, 'info> {
    pub swap_program: &'a AccountInfo<'info>,
    pub authority: &'a AccountInfo<'info>,
    pub source: &'a AccountInfo<'info>,
    pub destination: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    pub market_accounts: &'a [AccountInfo<'info>],
}

/// CPI into the external swap program under the pipeline authority's seeds.
/// The output amount is never taken from the callee; the caller measures the
/// destination balance delta afterwards.
pub fn convert(
    cpi: SwapConvert,
    args: &ConvertArgs,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let mut data = hash(b"global:convert").to_bytes()[..8].to_vec();
    args.serialize(&mut data)
        .map_err(|_| ZapError::InstructionEncodingFailed)?;

    let mut accounts = vec![
        AccountMeta::new_readonly(cpi.authority.key(), true),
        AccountMeta::new(cpi.source.key(), false),
        AccountMeta::new(cpi.destination.key(), false),
        AccountMeta::new_readonly(cpi.token_program.key(), false),
    ];
    let mut account_infos = vec![
        cpi.authority.clone(),
        cpi.source.clone(),
        cpi.destination.clone(),
        cpi.token_program.clone(),
    ];
    for market_account in cpi.market_accounts {
        accounts.push(AccountMeta {
            pubkey: market_account.key(),
            is_signer: false,
            is_writable: market_account.is_writable,
        });
        account_infos.push(market_account.clone());
    }
    // The invoked program's account is required by the CPI machinery.
    account_infos.push(cpi.swap_program.clone());

    let instruction = Instruction {
        program_id: cpi.swap_program.key(),
        accounts,
        data,
    };
    invoke_signed(&instruction, &account_infos, &[authority_seeds])?;

    Ok(())
}
