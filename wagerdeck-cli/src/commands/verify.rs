use dialoguer::Input;
use wagerdeck_core::{AccessVerifier, HttpProfileSource, Result, VerifyOutcome, WagerError};

use crate::config::CliConfig;
use crate::store;

pub async fn handle_verify_command(code: Option<String>, config: &CliConfig) -> Result<()> {
    let mut state = store::load_state(&config.data_dir)?;

    let Some(address) = state.session.wallet_address().map(str::to_string) else {
        println!("Connect a wallet first: wagerdeck session connect <ADDRESS>");
        return Ok(());
    };

    if state.session.is_authorized() {
        println!("Access already verified for this session");
        return Ok(());
    }

    let code = match code {
        Some(code) => code,
        None => Input::new()
            .with_prompt("Access code")
            .interact_text()
            .map_err(|e| WagerError::internal(format!("Prompt failed: {}", e)))?,
    };

    let verifier = AccessVerifier::new(&config.endpoint)?;
    let profiles = HttpProfileSource::new(&config.endpoint)?;

    match verifier
        .submit_access_code(&code, &address, &profiles)
        .await
    {
        VerifyOutcome::Authorized(profile) => {
            state.session.apply_profile(&profile);
            state.house_balance = profile.balance;
            store::save_state(&config.data_dir, &state)?;

            if state.session.is_authorized() {
                println!("Access verified, betting unlocked");
            } else {
                println!("Code accepted but the profile is still locked, try again shortly");
            }
        }
        VerifyOutcome::Denied(reason) => {
            println!("{}", reason);
        }
        VerifyOutcome::AlreadyPending => {
            println!("A verification is already in flight");
        }
    }

    Ok(())
}
