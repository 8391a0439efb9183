//! Wagerdeck SDK - client-side bet admission for a wagering interface
//!
//! This library owns the decision logic of the betting flow: whether a
//! wallet session is admitted to bet at all (connected and access-verified),
//! whether a candidate bet is accepted against the current round and house
//! balance, and the payout projection derived from the selection. Wallet
//! transport, chain plumbing, rendering, and settlement stay with external
//! collaborators; this crate only reads their state as immutable snapshots.

pub mod admission;
pub mod bet;
pub mod currency;
pub mod error;
pub mod session;
pub mod types;
pub mod verify;

pub use admission::{admission_status, is_access_locked, AdmissionStatus};
pub use bet::{
    format_payout, parse_amount, potential_payout, validate, BetSnapshot, CandidateBet, ValidBet,
};
pub use currency::{resolve_currency, Currency, CurrencyInfo, Network};
pub use error::{RejectReason, Result, WagerError};
pub use session::Session;
pub use types::{format_amount, Profile, Round, TargetCatalog, TargetCell};
pub use verify::{
    normalize_code, AccessVerifier, HttpProfileSource, ProfileSource, VerifyOutcome,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_session_places_a_bet() {
        let catalog = TargetCatalog::new(vec![TargetCell {
            id: "x2".into(),
            label: "2x".into(),
            multiplier: 2.0,
        }])
        .unwrap();

        let mut session = Session::disconnected();
        session.connect("0xabc");
        session.mark_authorized();

        let snapshot = BetSnapshot {
            connected: session.connected(),
            access_authorized: session.is_authorized(),
            round_active: false,
            house_balance: 10.0,
            network: Some(Network::Ethereum),
            selected_currency: None,
            catalog: &catalog,
        };
        let candidate = CandidateBet {
            target_id: Some("x2".into()),
            amount_text: "4".into(),
        };

        let bet = validate(&candidate, &snapshot).unwrap();
        assert_eq!(format_amount(bet.potential_payout), "8.0000");
    }
}
