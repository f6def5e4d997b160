use crate::error::ZapError;
use crate::state::ZapConfig;
use anchor_lang::prelude::*;

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::UpgradeableLoaderState;

/// Only the program's upgrade authority may run administrative instructions.
/// The ProgramData account is bincode-encoded by the upgradeable loader.
pub fn validate_program_update_authority(
    program_data: &UncheckedAccount,
    signer: &Signer,
) -> Result<()> {
    let data = program_data.try_borrow_data()?;
    let loader_state: UpgradeableLoaderState =
        bincode::deserialize(&data).map_err(|_| ZapError::InvalidProgramData)?;

    match loader_state {
        UpgradeableLoaderState::ProgramData {
            upgrade_authority_address,
            ..
        } => {
            let authority =
                upgrade_authority_address.ok_or(ZapError::NoUpgradeAuthority)?;
            require_keys_eq!(
                authority,
                signer.key(),
                ZapError::InvalidUpgradeAuthority
            );
            Ok(())
        }
        _ => err!(ZapError::InvalidProgramData),
    }
}

/// Per-call mutual exclusion over the pipeline. A nested re-entry fails
/// immediately rather than blocking; transaction rollback clears the flag on
/// any failure path.
pub fn acquire_call_guard(config: &mut ZapConfig) -> Result<()> {
    require!(!config.locked, ZapError::ReentrantCall);
    config.locked = true;
    Ok(())
}

pub fn release_call_guard(config: &mut ZapConfig) {
    config.locked = false;
}
