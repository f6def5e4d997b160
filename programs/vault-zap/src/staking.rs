use crate::error::ZapError;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

#[derive(AnchorSerialize, AnchorDeserialize)]
struct StakeArgs {
    amount: u64,
}

/// Accounts of a staking program call. `stake` moves base tokens from
/// `source` and credits reserve tokens to `destination`; `unstake` is the
/// mirror. The staking program prices the conversion itself; the caller
/// measures what actually arrived.
pub struct StakingOp<'a, 'info> {
    pub staking_program: &'a AccountInfo<'info>,
    pub pool: &'a AccountInfo<'info>,
    pub authority: &'a AccountInfo<'info>,
    pub source: &'a AccountInfo<'info>,
    pub destination: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
}

pub fn stake(op: StakingOp, amount: u64, authority_seeds: &[&[u8]]) -> Result<()> {
    invoke_staking(op, "global:stake", amount, authority_seeds)
}

pub fn unstake(op: StakingOp, amount: u64, authority_seeds: &[&[u8]]) -> Result<()> {
    invoke_staking(op, "global:unstake", amount, authority_seeds)
}

fn invoke_staking(
    op: StakingOp,
    discriminator_name: &str,
    amount: u64,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let mut data = hash(discriminator_name.as_bytes()).to_bytes()[..8].to_vec();
    StakeArgs { amount }
        .serialize(&mut data)
        .map_err(|_| ZapError::InstructionEncodingFailed)?;

    let accounts = vec![
        AccountMeta::new(op.pool.key(), false),
        AccountMeta::new_readonly(op.authority.key(), true),
        AccountMeta::new(op.source.key(), false),
        AccountMeta::new(op.destination.key(), false),
        AccountMeta::new_readonly(op.token_program.key(), false),
    ];
    let account_infos = [
        op.pool.clone(),
        op.authority.clone(),
        op.source.clone(),
        op.destination.clone(),
        op.token_program.clone(),
        op.staking_program.clone(),
    ];

    let instruction = Instruction {
        program_id: op.staking_program.key(),
        accounts,
        data,
    };
    invoke_signed(&instruction, &account_infos, &[authority_seeds])?;

    Ok(())
}
