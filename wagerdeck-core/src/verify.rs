use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RejectReason, Result, WagerError};
use crate::types::Profile;

/// Collaborator that owns profile/balance state. A successful verification
/// is observed indirectly, through a refreshed profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, address: &str) -> Result<Profile>;
}

/// Normalize an access code the way the verification endpoint expects it.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    code: &'a str,
    wallet_address: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Result of one verification attempt. Never an error: every failure mode
/// is classified into a user-facing reason.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    /// Code accepted; the refreshed profile carries the authorization flag.
    Authorized(Profile),
    /// Code or transport refused, with the reason to show the user.
    Denied(RejectReason),
    /// Another submission is still in flight; nothing was sent.
    AlreadyPending,
}

const INVALID_CODE_FALLBACK: &str = "Invalid access code";

/// One-shot access-code verification round trip.
///
/// Holds the single-in-flight guard: a second submission while one is
/// pending is a no-op, which keeps repeated clicks from double-posting.
pub struct AccessVerifier {
    http: reqwest::Client,
    endpoint: Url,
    in_flight: Mutex<()>,
}

impl AccessVerifier {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: join_endpoint(base_url, "access/verify")?,
            in_flight: Mutex::new(()),
        })
    }

    /// Submit an access code for the connected wallet.
    ///
    /// On success the profile collaborator is asked to refresh, and the
    /// returned profile is what flips the session to authorized. Transport
    /// failures are downgraded to [`RejectReason::ConnectivityFailure`];
    /// there is no automatic retry.
    pub async fn submit_access_code(
        &self,
        code: &str,
        wallet_address: &str,
        profiles: &dyn ProfileSource,
    ) -> VerifyOutcome {
        let _in_flight = match self.in_flight.try_lock() {
            Some(guard) => guard,
            None => {
                tracing::debug!("verification already in flight, ignoring submission");
                return VerifyOutcome::AlreadyPending;
            }
        };

        let code = normalize_code(code);
        let request = VerifyRequest {
            code: &code,
            wallet_address,
        };

        let response = match self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("verification request failed: {}", e);
                return VerifyOutcome::Denied(RejectReason::ConnectivityFailure);
            }
        };

        let status = response.status();
        let body = match response.json::<VerifyResponse>().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("verification response unreadable ({}): {}", status, e);
                return VerifyOutcome::Denied(RejectReason::ConnectivityFailure);
            }
        };

        if status.is_server_error() {
            tracing::warn!("verification service failed with {}", status);
            return VerifyOutcome::Denied(RejectReason::ConnectivityFailure);
        }

        if !body.success {
            let reason = body
                .error
                .unwrap_or_else(|| INVALID_CODE_FALLBACK.to_string());
            tracing::info!("Access code rejected for {}: {}", wallet_address, reason);
            return VerifyOutcome::Denied(RejectReason::AccessCodeRejected(reason));
        }

        match profiles.fetch_profile(wallet_address).await {
            Ok(profile) => {
                tracing::info!("Access code accepted for {}", wallet_address);
                VerifyOutcome::Authorized(profile)
            }
            Err(e) => {
                tracing::warn!("profile refresh failed after verification: {}", e);
                VerifyOutcome::Denied(RejectReason::ConnectivityFailure)
            }
        }
    }
}

/// Profile collaborator backed by the same HTTP service.
pub struct HttpProfileSource {
    http: reqwest::Client,
    base: Url,
}

impl HttpProfileSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: join_endpoint(base_url, "")?,
        })
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self, address: &str) -> Result<Profile> {
        let url = self
            .base
            .join(&format!("profile/{}", address))
            .map_err(|e| WagerError::config(format!("Invalid profile URL: {}", e)))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WagerError::http(format!("Profile fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(WagerError::http(format!(
                "Profile fetch failed: {}",
                response.status()
            )));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| WagerError::http(format!("Profile response unreadable: {}", e)))
    }
}

fn join_endpoint(base_url: &str, path: &str) -> Result<Url> {
    let mut base: Url = base_url
        .parse()
        .map_err(|e| WagerError::config(format!("Invalid endpoint URL '{}': {}", base_url, e)))?;
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(path)
        .map_err(|e| WagerError::config(format!("Invalid endpoint URL '{}': {}", base_url, e)))
}
