use crate::error::VaultError;
use crate::state::VaultConfig;
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
        bincode::deserialize(&data).map_err(|_| VaultError::InvalidProgramData)?;

    match loader_state {
        UpgradeableLoaderState::ProgramData {
            upgrade_authority_address,
            ..
        } => {
            let authority =
                upgrade_authority_address.ok_or(VaultError::NoUpgradeAuthority)?;
            require_keys_eq!(
                authority,
                signer.key(),
                VaultError::InvalidUpgradeAuthority
            );
            Ok(())
        }
        _ => err!(VaultError::InvalidProgramData),
    }
}

/// Per-call mutual exclusion over the vault state. A call already holding the
/// guard fails any nested re-entry immediately instead of blocking; the
/// transaction rollback clears the flag on every failure path.
pub fn acquire_call_guard(config: &mut VaultConfig) -> Result<()> {
    require!(!config.locked, VaultError::ReentrantCall);
    config.locked = true;
    Ok(())
}

pub fn release_call_guard(config: &mut VaultConfig) {
    config.locked = false;
}
