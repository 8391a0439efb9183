use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wagerdeck_core::{
    Currency, Network, Result, Round, Session, TargetCatalog, TargetCell, WagerError,
};

/// Locally cached copy of the externally owned betting state. The real
/// interface reads these from the wallet and round collaborators; the CLI
/// keeps them in a JSON state file between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckState {
    pub session: Session,
    pub network: Network,
    pub selected_currency: Option<Currency>,
    pub house_balance: f64,
    pub active_round: Option<Round>,
    pub targets: Vec<TargetCell>,
}

impl Default for DeckState {
    fn default() -> Self {
        Self {
            session: Session::disconnected(),
            network: Network::Base,
            selected_currency: None,
            house_balance: 0.0,
            active_round: None,
            targets: default_targets(),
        }
    }
}

impl DeckState {
    pub fn catalog(&self) -> Result<TargetCatalog> {
        TargetCatalog::new(self.targets.clone())
    }
}

/// Seed catalog used until a real one is fetched.
fn default_targets() -> Vec<TargetCell> {
    [
        ("x1_2", "1.2x", 1.2),
        ("x1_5", "1.5x", 1.5),
        ("x2", "2x", 2.0),
        ("x3", "3x", 3.0),
        ("x5", "5x", 5.0),
        ("x10", "10x", 10.0),
        ("x25", "25x", 25.0),
        ("x50", "50x", 50.0),
    ]
    .into_iter()
    .map(|(id, label, multiplier)| TargetCell {
        id: id.to_string(),
        label: label.to_string(),
        multiplier,
    })
    .collect()
}

fn state_path(data_dir: &Path) -> PathBuf {
    data_dir.join("state.json")
}

pub fn load_state(data_dir: &Path) -> Result<DeckState> {
    let path = state_path(data_dir);
    if !path.exists() {
        return Ok(DeckState::default());
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| WagerError::storage(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| WagerError::storage(format!("{}: {}", path.display(), e)))
}

pub fn save_state(data_dir: &Path, state: &DeckState) -> Result<()> {
    let path = state_path(data_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| WagerError::storage(format!("{}: {}", parent.display(), e)))?;
    }
    let content = serde_json::to_string_pretty(state)?;
    std::fs::write(&path, content)
        .map_err(|e| WagerError::storage(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn state_round_trips_through_the_file() {
        let dir = tempdir().unwrap();

        let mut state = DeckState::default();
        state.session.connect("0xabc");
        state.house_balance = 12.5;
        state.active_round = Some(Round::open());
        save_state(dir.path(), &state).unwrap();

        let loaded = load_state(dir.path()).unwrap();
        assert_eq!(loaded.session.wallet_address(), Some("0xabc"));
        assert_eq!(loaded.house_balance, 12.5);
        assert_eq!(loaded.active_round, state.active_round);
        assert_eq!(loaded.targets.len(), state.targets.len());
    }

    #[test]
    fn missing_file_yields_the_seeded_default() {
        let dir = tempdir().unwrap();

        let state = load_state(dir.path()).unwrap();
        assert!(!state.session.connected());
        assert!(state.active_round.is_none());
        assert!(!state.targets.is_empty());
        assert!(state.catalog().is_ok());
    }
}
