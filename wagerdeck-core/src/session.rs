use serde::{Deserialize, Serialize};

use crate::types::Profile;

/// Wallet session as seen by the admission gate.
///
/// Lifecycle: created on connect, authorization set at most once by a
/// successful verification round trip, everything cleared on disconnect.
/// `access_authorized` stays `None` until the server has answered; while
/// connected, anything other than `Some(true)` keeps betting locked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    connected: bool,
    wallet_address: Option<String>,
    access_authorized: Option<bool>,
}

impl Session {
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Connect a wallet. Reconnecting starts a fresh session, so the
    /// access gate re-locks.
    pub fn connect(&mut self, address: impl Into<String>) {
        let address = address.into();
        tracing::info!("Wallet {} connected", address);
        self.connected = true;
        self.wallet_address = Some(address);
        self.access_authorized = None;
    }

    pub fn disconnect(&mut self) {
        if let Some(address) = self.wallet_address.take() {
            tracing::info!("Wallet {} disconnected", address);
        }
        self.connected = false;
        self.access_authorized = None;
    }

    /// One-directional within a session: nothing re-locks except
    /// disconnect. Ignored while no wallet is connected.
    pub fn mark_authorized(&mut self) {
        if !self.connected {
            return;
        }
        self.access_authorized = Some(true);
    }

    /// Fold a refreshed profile into the session. A profile can unlock the
    /// gate or record an explicit denial, but never revokes an
    /// authorization already granted this session.
    pub fn apply_profile(&mut self, profile: &Profile) {
        if !self.connected {
            return;
        }
        if profile.access_authorized {
            self.access_authorized = Some(true);
        } else if self.access_authorized.is_none() {
            self.access_authorized = Some(false);
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet_address.as_deref()
    }

    pub fn is_authorized(&self) -> bool {
        self.access_authorized == Some(true)
    }
}
