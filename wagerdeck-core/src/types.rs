use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, WagerError};

/// A selectable wager option with its payout multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetCell {
    pub id: String,
    pub label: String,
    pub multiplier: f64,
}

/// Ordered, externally supplied catalog of target cells, looked up by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetCatalog {
    cells: Vec<TargetCell>,
}

impl TargetCatalog {
    /// Multipliers must be positive and finite.
    pub fn new(cells: Vec<TargetCell>) -> Result<Self> {
        for cell in &cells {
            if !cell.multiplier.is_finite() || cell.multiplier <= 0.0 {
                return Err(WagerError::config(format!(
                    "Target '{}' has invalid multiplier {}",
                    cell.id, cell.multiplier
                )));
            }
        }
        Ok(Self { cells })
    }

    pub fn get(&self, id: &str) -> Option<&TargetCell> {
        self.cells.iter().find(|cell| cell.id == id)
    }

    pub fn cells(&self) -> &[TargetCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A betting window. At most one is in flight per session; its presence
/// blocks new bets until the external settlement signal clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub opened_at: DateTime<Utc>,
}

impl Round {
    pub fn open() -> Self {
        Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
        }
    }
}

/// Profile snapshot returned by the profile collaborator after a
/// successful verification or settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub address: String,
    pub balance: f64,
    pub access_authorized: bool,
}

/// Display form used for balances and payouts.
pub fn format_amount(value: f64) -> String {
    format!("{value:.4}")
}
