use clap::Subcommand;
use wagerdeck_core::{
    format_amount, format_payout, potential_payout, validate, BetSnapshot, CandidateBet, Result,
    Round,
};

use crate::config::CliConfig;
use crate::store;

#[derive(Subcommand)]
pub enum BetCommands {
    /// Validate a bet and submit it against a new round
    Place {
        /// Target cell id
        target: String,
        /// Bet amount
        amount: String,
    },
    /// Preview the potential payout without submitting
    Quote {
        /// Target cell id
        target: String,
        /// Bet amount
        amount: String,
    },
}

pub async fn handle_bet_command(cmd: BetCommands, config: &CliConfig) -> Result<()> {
    match cmd {
        BetCommands::Place { target, amount } => {
            let mut state = store::load_state(&config.data_dir)?;
            let catalog = state.catalog()?;

            let candidate = CandidateBet {
                target_id: Some(target),
                amount_text: amount,
            };
            let snapshot = BetSnapshot {
                connected: state.session.connected(),
                access_authorized: state.session.is_authorized(),
                round_active: state.active_round.is_some(),
                house_balance: state.house_balance,
                network: Some(state.network),
                selected_currency: state.selected_currency,
                catalog: &catalog,
            };

            match validate(&candidate, &snapshot) {
                Ok(bet) => {
                    let round = Round::open();
                    tracing::info!(
                        "Submitting bet of {} on {} in round {}",
                        bet.amount,
                        bet.target.id,
                        round.id
                    );

                    println!(
                        "Bet accepted: {} on {} ({})",
                        format_amount(bet.amount),
                        bet.target.label,
                        bet.target.id
                    );
                    println!("Potential payout: {}", format_amount(bet.potential_payout));
                    println!("Round {} opened, wait for settlement", round.id);

                    state.active_round = Some(round);
                    store::save_state(&config.data_dir, &state)?;
                }
                Err(reason) => {
                    println!("Bet rejected: {}", reason);
                }
            }
        }

        BetCommands::Quote { target, amount } => {
            let state = store::load_state(&config.data_dir)?;
            let catalog = state.catalog()?;

            let candidate = CandidateBet {
                target_id: Some(target),
                amount_text: amount,
            };
            println!(
                "Potential payout: {}",
                format_payout(potential_payout(&candidate, &catalog))
            );
        }
    }

    Ok(())
}
