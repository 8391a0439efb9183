use chrono::Utc;
use clap::Subcommand;
use wagerdeck_core::{HttpProfileSource, ProfileSource, Result};

use crate::config::CliConfig;
use crate::store;

#[derive(Subcommand)]
pub enum RoundCommands {
    /// Show the active round, if any
    Status,
    /// Record the external settlement signal and clear the active round
    Settle,
}

pub async fn handle_round_command(cmd: RoundCommands, config: &CliConfig) -> Result<()> {
    match cmd {
        RoundCommands::Status => {
            let state = store::load_state(&config.data_dir)?;
            match &state.active_round {
                Some(round) => println!(
                    "Round {} in progress since {}",
                    round.id,
                    round.opened_at.format("%Y-%m-%d %H:%M")
                ),
                None => println!("No active round"),
            }
        }

        RoundCommands::Settle => {
            let mut state = store::load_state(&config.data_dir)?;
            let Some(round) = state.active_round.take() else {
                println!("No active round");
                return Ok(());
            };

            // Settlement itself is external; all we do is refresh the balance.
            if let Some(address) = state.session.wallet_address().map(str::to_string) {
                let profiles = HttpProfileSource::new(&config.endpoint)?;
                match profiles.fetch_profile(&address).await {
                    Ok(profile) => {
                        state.house_balance = profile.balance;
                        state.session.apply_profile(&profile);
                    }
                    Err(e) => {
                        tracing::warn!("balance refresh failed: {}", e);
                        println!("Balance refresh failed, showing the last known balance");
                    }
                }
            }

            state.active_round = None;
            store::save_state(&config.data_dir, &state)?;

            let elapsed = Utc::now().signed_duration_since(round.opened_at);
            println!(
                "Round {} settled after {}s",
                round.id,
                elapsed.num_seconds().max(0)
            );
        }
    }

    Ok(())
}
