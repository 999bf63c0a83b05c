use super::endpoints::{
    command_candidates, fallback_lists, primary_list, CommandRequest, ListStrategy, VERIFY_PATH,
};
use super::normalize::{dedupe_by_mac, is_recent_or_blocked, normalize_client};
use super::session::Session;
use async_trait::async_trait;
use killswitch_application::ports::NetworkController;
use killswitch_domain::config::ControllerConfig;
use killswitch_domain::{recent_cutoff, BlockAction, DomainError, NetworkClient};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const API_KEY_HEADER: &str = "X-API-KEY";

pub struct UnifiController {
    http: reqwest::Client,
    base_url: String,
    site: String,
    recent_window_days: u32,
    session: Session,
}

impl UnifiController {
    /// Builds a client for the configured controller. Certificate verification
    /// is off: controllers ship self-signed certificates.
    pub fn new(config: &ControllerConfig) -> Result<Self, DomainError> {
        let base_url = config
            .base_url()
            .ok_or_else(|| DomainError::ConfigError("Controller URL must be provided".to_string()))?
            .to_string();

        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| DomainError::ConfigError("API key must be provided".to_string()))?;

        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(api_key)
            .map_err(|e| DomainError::ConfigError(format!("Invalid API key: {}", e)))?;
        key_value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent("UniFi-KillSwitch/0.3")
            .default_headers(headers)
            .danger_accept_invalid_certs(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        info!(url = %base_url, site = %config.site, "UniFi controller client created");

        Ok(Self {
            http,
            base_url,
            site: config.site.clone(),
            recent_window_days: config.recent_window_days,
            session: Session::new(Duration::from_secs(config.session_timeout_secs)),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn ensure_session(&self) -> Result<(), DomainError> {
        self.session.ensure(|| self.verify_key()).await
    }

    async fn verify_key(&self) -> Result<(), DomainError> {
        debug!("Verifying API key with controller");
        let outcome = self.http.get(self.url(VERIFY_PATH)).send().await;

        match outcome {
            Ok(response) if response.status().is_success() => {
                info!(status = response.status().as_u16(), "API key verified");
                Ok(())
            }
            Ok(response) => {
                warn!(status = response.status().as_u16(), "API key verification rejected");
                Err(Self::auth_failed())
            }
            Err(e) => {
                warn!(error = %e, "API key verification request failed");
                Err(Self::auth_failed())
            }
        }
    }

    fn auth_failed() -> DomainError {
        DomainError::AuthenticationFailed("Invalid API key or session expired".to_string())
    }

    /// GET a list endpoint and extract its station array.
    async fn fetch_list(&self, strategy: &ListStrategy) -> Result<Option<Vec<Value>>, String> {
        let response = self
            .http
            .get(self.url(&strategy.path))
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", strategy.path, e))?;

        if !response.status().is_success() {
            return Err(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                strategy.path
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("invalid JSON from {}: {}", strategy.path, e))?;

        Ok((strategy.extract)(body))
    }

    async fn list_from_primary(&self, now_secs: i64) -> Result<Vec<NetworkClient>, String> {
        let strategy = primary_list(&self.site);
        let records = self
            .fetch_list(&strategy)
            .await?
            .ok_or_else(|| format!("no data array in response from {}", strategy.path))?;

        let cutoff = recent_cutoff(chrono::Utc::now(), self.recent_window_days);
        let clients = normalize_all(
            records
                .into_iter()
                .filter(|raw| is_recent_or_blocked(raw, cutoff))
                .collect(),
            now_secs,
        );

        info!(
            endpoint = %strategy.path,
            count = clients.len(),
            blocked = clients.iter().filter(|c| c.blocked).count(),
            "Fetched active and blocked clients"
        );
        Ok(clients)
    }

    async fn list_from_fallbacks(
        &self,
        now_secs: i64,
    ) -> Result<Vec<NetworkClient>, DomainError> {
        let mut pooled: Vec<Value> = Vec::new();
        let mut any_succeeded = false;
        let mut last_error: Option<String> = None;

        for strategy in fallback_lists(&self.site) {
            match self.fetch_list(&strategy).await {
                Ok(records) => {
                    let records = records.unwrap_or_else(|| {
                        warn!(endpoint = %strategy.path, "Unrecognised response shape");
                        Vec::new()
                    });
                    debug!(endpoint = %strategy.path, count = records.len(), "Fallback endpoint answered");
                    any_succeeded = true;
                    pooled.extend(records);
                }
                Err(reason) => {
                    warn!(endpoint = %strategy.path, error = %reason, "Fallback endpoint failed");
                    last_error = Some(reason);
                }
            }
        }

        if !any_succeeded {
            return Err(DomainError::ClientRetrievalFailed(
                last_error.unwrap_or_else(|| "no list endpoint answered".to_string()),
            ));
        }

        let clients = normalize_all(dedupe_by_mac(pooled), now_secs);
        info!(
            count = clients.len(),
            blocked = clients.iter().filter(|c| c.blocked).count(),
            "Fetched clients from fallback endpoints"
        );
        Ok(clients)
    }

    async fn send_command(&self, request: &CommandRequest) -> Result<(), String> {
        let response = self
            .http
            .post(self.url(&request.path))
            .json(&request.body)
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", request.path, e))?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(format!("HTTP {} from {}", status.as_u16(), request.path)),
        }
    }

    async fn execute_command(&self, action: BlockAction, mac: &str) -> Result<(), DomainError> {
        self.ensure_session().await?;

        let mac = mac.trim().to_lowercase();
        let mut last_error: Option<String> = None;

        for candidate in command_candidates(&self.site, &mac, action) {
            debug!(endpoint = %candidate.path, mac = %mac, action = %action, "Trying command endpoint");
            match self.send_command(&candidate).await {
                Ok(()) => {
                    info!(endpoint = %candidate.path, mac = %mac, action = %action, "Controller accepted command");
                    return Ok(());
                }
                Err(reason) => {
                    warn!(mac = %mac, action = %action, error = %reason, "Command endpoint failed");
                    last_error = Some(reason);
                }
            }
        }

        Err(DomainError::ClientOperationFailed {
            action: action.to_str(),
            mac,
            reason: last_error.unwrap_or_else(|| "no endpoint accepted the request".to_string()),
        })
    }
}

fn normalize_all(records: Vec<Value>, now_secs: i64) -> Vec<NetworkClient> {
    records
        .iter()
        .filter_map(|raw| {
            let client = normalize_client(raw, now_secs);
            if client.is_none() {
                debug!("Dropping controller record without a MAC");
            }
            client
        })
        .collect()
}

#[async_trait]
impl NetworkController for UnifiController {
    #[instrument(skip(self), name = "unifi_list_clients")]
    async fn list_clients(&self) -> Result<Vec<NetworkClient>, DomainError> {
        self.ensure_session().await?;
        let now_secs = chrono::Utc::now().timestamp();

        match self.list_from_primary(now_secs).await {
            Ok(clients) => Ok(clients),
            Err(reason) => {
                warn!(error = %reason, "Primary client list failed, trying fallbacks");
                self.list_from_fallbacks(now_secs).await
            }
        }
    }

    #[instrument(skip(self))]
    async fn block(&self, mac: &str) -> Result<(), DomainError> {
        self.execute_command(BlockAction::Block, mac).await
    }

    #[instrument(skip(self))]
    async fn unblock(&self, mac: &str) -> Result<(), DomainError> {
        self.execute_command(BlockAction::Unblock, mac).await
    }
}
