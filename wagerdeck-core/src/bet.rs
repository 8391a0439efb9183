use crate::currency::{resolve_currency, Currency, Network};
use crate::error::RejectReason;
use crate::types::{TargetCatalog, TargetCell};

/// User-entered bet before validation. The amount stays raw text until the
/// validator parses it.
#[derive(Debug, Clone, Default)]
pub struct CandidateBet {
    pub target_id: Option<String>,
    pub amount_text: String,
}

/// Immutable view of the externally owned state, captured once per
/// validation call. The rule chain reads nothing else, so a mutation
/// elsewhere can never interleave mid-validation.
#[derive(Debug, Clone)]
pub struct BetSnapshot<'a> {
    pub connected: bool,
    pub access_authorized: bool,
    pub round_active: bool,
    pub house_balance: f64,
    pub network: Option<Network>,
    pub selected_currency: Option<Currency>,
    pub catalog: &'a TargetCatalog,
}

/// A bet that cleared every admission rule, ready for the placement
/// collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBet {
    pub target: TargetCell,
    pub amount: f64,
    pub potential_payout: f64,
}

struct RuleCtx<'a> {
    snapshot: &'a BetSnapshot<'a>,
    target: Option<&'a TargetCell>,
    amount: Option<f64>,
}

struct Rule {
    name: &'static str,
    check: fn(&RuleCtx<'_>) -> Option<RejectReason>,
}

fn wallet_connected(ctx: &RuleCtx<'_>) -> Option<RejectReason> {
    if ctx.snapshot.connected {
        None
    } else {
        Some(RejectReason::AuthenticationRequired)
    }
}

fn access_authorized(ctx: &RuleCtx<'_>) -> Option<RejectReason> {
    if ctx.snapshot.access_authorized {
        None
    } else {
        Some(RejectReason::AuthorizationRequired)
    }
}

fn no_round_in_flight(ctx: &RuleCtx<'_>) -> Option<RejectReason> {
    if ctx.snapshot.round_active {
        Some(RejectReason::RoundInProgress)
    } else {
        None
    }
}

fn target_selected(ctx: &RuleCtx<'_>) -> Option<RejectReason> {
    if ctx.target.is_none() {
        Some(RejectReason::SelectionMissing)
    } else {
        None
    }
}

fn amount_positive(ctx: &RuleCtx<'_>) -> Option<RejectReason> {
    if ctx.amount.is_none() {
        Some(RejectReason::AmountInvalid)
    } else {
        None
    }
}

fn within_house_balance(ctx: &RuleCtx<'_>) -> Option<RejectReason> {
    let amount = ctx.amount?;
    if amount > ctx.snapshot.house_balance {
        let currency = resolve_currency(ctx.snapshot.network, ctx.snapshot.selected_currency);
        Some(RejectReason::InsufficientFunds {
            balance: ctx.snapshot.house_balance,
            symbol: currency.symbol.to_string(),
        })
    } else {
        None
    }
}

/// The admission rules in evaluation order. The first failing rule decides
/// the one message the user sees, so the order is part of the contract.
const RULES: &[Rule] = &[
    Rule {
        name: "wallet-connected",
        check: wallet_connected,
    },
    Rule {
        name: "access-authorized",
        check: access_authorized,
    },
    Rule {
        name: "no-round-in-flight",
        check: no_round_in_flight,
    },
    Rule {
        name: "target-selected",
        check: target_selected,
    },
    Rule {
        name: "amount-positive",
        check: amount_positive,
    },
    Rule {
        name: "within-house-balance",
        check: within_house_balance,
    },
];

/// Parse raw amount text. Only positive finite values qualify.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Decide whether a candidate bet may be submitted.
///
/// Walks the ordered rule chain over the snapshot, short-circuiting on the
/// first violation. Always returns a classified result.
pub fn validate(
    candidate: &CandidateBet,
    snapshot: &BetSnapshot<'_>,
) -> Result<ValidBet, RejectReason> {
    let ctx = RuleCtx {
        snapshot,
        target: candidate
            .target_id
            .as_deref()
            .and_then(|id| snapshot.catalog.get(id)),
        amount: parse_amount(&candidate.amount_text),
    };

    for rule in RULES {
        if let Some(reason) = (rule.check)(&ctx) {
            tracing::debug!(rule = rule.name, %reason, "bet rejected");
            return Err(reason);
        }
    }

    let (Some(target), Some(amount)) = (ctx.target, ctx.amount) else {
        return Err(RejectReason::SelectionMissing);
    };

    Ok(ValidBet {
        target: target.clone(),
        amount,
        potential_payout: amount * target.multiplier,
    })
}

/// Projected payout for the current selection and amount. Defined only when
/// the target resolves and the amount parses positive; pure and recomputed
/// on every call.
pub fn potential_payout(candidate: &CandidateBet, catalog: &TargetCatalog) -> Option<f64> {
    let target = candidate.target_id.as_deref().and_then(|id| catalog.get(id))?;
    let amount = parse_amount(&candidate.amount_text)?;
    Some(amount * target.multiplier)
}

/// Display form of the payout projection, zero sentinel when undefined.
pub fn format_payout(payout: Option<f64>) -> String {
    crate::types::format_amount(payout.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::format_amount;

    fn catalog() -> TargetCatalog {
        TargetCatalog::new(vec![
            TargetCell {
                id: "x2".into(),
                label: "2x".into(),
                multiplier: 2.0,
            },
            TargetCell {
                id: "x3".into(),
                label: "3x".into(),
                multiplier: 3.0,
            },
        ])
        .unwrap()
    }

    fn snapshot(catalog: &TargetCatalog) -> BetSnapshot<'_> {
        BetSnapshot {
            connected: true,
            access_authorized: true,
            round_active: false,
            house_balance: 10.0,
            network: Some(Network::Ethereum),
            selected_currency: None,
            catalog,
        }
    }

    fn candidate(target: &str, amount: &str) -> CandidateBet {
        CandidateBet {
            target_id: Some(target.into()),
            amount_text: amount.into(),
        }
    }

    #[test]
    fn disconnected_rejects_regardless_of_everything_else() {
        let catalog = catalog();
        let mut snapshot = snapshot(&catalog);
        snapshot.connected = false;
        snapshot.access_authorized = false;
        snapshot.round_active = true;
        snapshot.house_balance = 0.0;

        let err = validate(&candidate("x2", "4"), &snapshot).unwrap_err();
        assert_eq!(err, RejectReason::AuthenticationRequired);
    }

    #[test]
    fn locked_session_rejects_an_otherwise_valid_bet() {
        let catalog = catalog();
        let mut snapshot = snapshot(&catalog);
        snapshot.access_authorized = false;

        let err = validate(&candidate("x2", "4"), &snapshot).unwrap_err();
        assert_eq!(err, RejectReason::AuthorizationRequired);
    }

    #[test]
    fn active_round_blocks_a_perfectly_valid_bet() {
        let catalog = catalog();
        let mut snapshot = snapshot(&catalog);
        snapshot.round_active = true;

        let err = validate(&candidate("x2", "4"), &snapshot).unwrap_err();
        assert_eq!(err, RejectReason::RoundInProgress);
    }

    #[test]
    fn round_in_progress_beats_insufficient_balance() {
        let catalog = catalog();
        let mut snapshot = snapshot(&catalog);
        snapshot.round_active = true;
        snapshot.house_balance = 0.0;

        let err = validate(&candidate("x2", "999"), &snapshot).unwrap_err();
        assert_eq!(err, RejectReason::RoundInProgress);
    }

    #[test]
    fn missing_or_unknown_target_rejects_before_amount() {
        let catalog = catalog();
        let snapshot = snapshot(&catalog);

        let unselected = CandidateBet {
            target_id: None,
            amount_text: "not a number".into(),
        };
        assert_eq!(
            validate(&unselected, &snapshot).unwrap_err(),
            RejectReason::SelectionMissing
        );

        assert_eq!(
            validate(&candidate("x9", "4"), &snapshot).unwrap_err(),
            RejectReason::SelectionMissing
        );
    }

    #[test]
    fn unparsable_or_nonpositive_amounts_reject() {
        let catalog = catalog();
        let snapshot = snapshot(&catalog);

        for text in ["", "abc", "0", "-1", "NaN", "inf", "1.2.3"] {
            assert_eq!(
                validate(&candidate("x2", text), &snapshot).unwrap_err(),
                RejectReason::AmountInvalid,
                "amount {text:?} should be invalid"
            );
        }
    }

    #[test]
    fn amount_over_balance_carries_the_formatted_balance() {
        let catalog = catalog();
        let mut snapshot = snapshot(&catalog);
        snapshot.house_balance = 3.0;

        let err = validate(&candidate("x2", "5"), &snapshot).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("3.0000"), "message was {message:?}");
        assert!(message.contains("ETH"), "message was {message:?}");
    }

    #[test]
    fn insufficiency_symbol_follows_the_currency_override() {
        let catalog = catalog();
        let mut snapshot = snapshot(&catalog);
        snapshot.network = Some(Network::Base);
        snapshot.selected_currency = Some(Currency::Usdc);
        snapshot.house_balance = 1.0;

        let message = validate(&candidate("x2", "2"), &snapshot)
            .unwrap_err()
            .to_string();
        assert!(message.contains("USDC"), "message was {message:?}");
    }

    #[test]
    fn amount_equal_to_balance_is_accepted() {
        let catalog = catalog();
        let snapshot = snapshot(&catalog);

        let bet = validate(&candidate("x2", "10"), &snapshot).unwrap();
        assert_eq!(bet.amount, 10.0);
    }

    #[test]
    fn acceptance_is_monotone_below_an_accepted_amount() {
        let catalog = catalog();
        let snapshot = snapshot(&catalog);

        assert!(validate(&candidate("x2", "8"), &snapshot).is_ok());
        for smaller in ["4", "0.5", "8"] {
            assert!(
                validate(&candidate("x2", smaller), &snapshot).is_ok(),
                "amount {smaller} should be accepted"
            );
        }
        assert_eq!(
            validate(&candidate("x2", "10.0001"), &snapshot).unwrap_err(),
            RejectReason::InsufficientFunds {
                balance: 10.0,
                symbol: "ETH".into()
            }
        );
    }

    #[test]
    fn accepted_bet_carries_target_amount_and_payout() {
        let catalog = catalog();
        let snapshot = snapshot(&catalog);

        let bet = validate(&candidate("x2", "4"), &snapshot).unwrap();
        assert_eq!(bet.target.id, "x2");
        assert_eq!(bet.amount, 4.0);
        assert_eq!(format_amount(bet.potential_payout), "8.0000");
    }

    #[test]
    fn payout_projection_and_zero_sentinel() {
        let catalog = catalog();

        let selected = candidate("x3", "2.5");
        assert_eq!(format_payout(potential_payout(&selected, &catalog)), "7.5000");

        let no_target = CandidateBet {
            target_id: None,
            amount_text: "2.5".into(),
        };
        assert_eq!(format_payout(potential_payout(&no_target, &catalog)), "0.0000");

        let no_amount = candidate("x3", "");
        assert_eq!(format_payout(potential_payout(&no_amount, &catalog)), "0.0000");
    }
}
