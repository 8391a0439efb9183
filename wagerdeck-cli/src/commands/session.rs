use clap::Subcommand;
use wagerdeck_core::{
    admission_status, format_amount, resolve_currency, AdmissionStatus, Currency, Network, Result,
};

use crate::config::CliConfig;
use crate::store;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Connect a wallet address
    Connect {
        /// Wallet address
        address: String,
        /// Network name (ethereum, base, arbitrum, bsc, polygon)
        #[arg(short, long)]
        network: Option<String>,
    },
    /// Disconnect the current wallet
    Disconnect,
    /// Select the betting currency (applies on the multi-asset network)
    Currency {
        /// Currency symbol (eth, usdc, bnb, pol)
        symbol: String,
    },
    /// Show session and admission status
    Status,
}

pub async fn handle_session_command(cmd: SessionCommands, config: &CliConfig) -> Result<()> {
    match cmd {
        SessionCommands::Connect { address, network } => {
            let mut state = store::load_state(&config.data_dir)?;
            if let Some(name) = network {
                state.network = name.parse::<Network>()?;
            }
            state.session.connect(&address);
            store::save_state(&config.data_dir, &state)?;

            println!("Connected {} on {}", address, state.network);
            println!("Betting stays locked until your access code is verified: run 'wagerdeck verify'");
        }

        SessionCommands::Disconnect => {
            let mut state = store::load_state(&config.data_dir)?;
            state.session.disconnect();
            store::save_state(&config.data_dir, &state)?;

            println!("Disconnected");
        }

        SessionCommands::Currency { symbol } => {
            let mut state = store::load_state(&config.data_dir)?;
            let currency = symbol.parse::<Currency>()?;
            state.selected_currency = Some(currency);
            store::save_state(&config.data_dir, &state)?;

            let info = resolve_currency(Some(state.network), state.selected_currency);
            println!("Selected currency: {}", currency.info().symbol);
            if info.symbol != currency.info().symbol {
                println!(
                    "Note: {} displays {} by default; the selection applies on the multi-asset network",
                    state.network, info.symbol
                );
            }
        }

        SessionCommands::Status => {
            let state = store::load_state(&config.data_dir)?;
            let currency = resolve_currency(Some(state.network), state.selected_currency);

            match state.session.wallet_address() {
                Some(address) => println!("Wallet: {}", address),
                None => println!("Wallet: not connected"),
            }
            println!("Network: {}", state.network);
            println!("Currency: {}", currency.symbol);
            println!(
                "Balance: {} {}",
                format_amount(state.house_balance),
                currency.symbol
            );

            let admission = match admission_status(&state.session) {
                AdmissionStatus::Disconnected => "disconnected",
                AdmissionStatus::Locked => "locked (access code required)",
                AdmissionStatus::Authorized => "authorized",
            };
            println!("Admission: {}", admission);

            match &state.active_round {
                Some(round) => println!(
                    "Round: {} in progress since {}",
                    round.id,
                    round.opened_at.format("%Y-%m-%d %H:%M")
                ),
                None => println!("Round: none"),
            }
        }
    }

    Ok(())
}
