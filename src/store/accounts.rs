//! Accounts container: connected social accounts.

use std::sync::{Arc, RwLock};

use super::{read, write, InFlight};
use crate::models::{Platform, SocialAccount};
use crate::sources::AccountsSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountsState {
    /// `None` until the first successful fetch
    pub accounts: Option<Vec<SocialAccount>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct AccountsStore {
    state: Arc<RwLock<AccountsState>>,
    source: Arc<dyn AccountsSource>,
    in_flight: InFlight,
}

impl AccountsStore {
    pub fn new(source: Arc<dyn AccountsSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AccountsState::default())),
            source,
            in_flight: InFlight::default(),
        }
    }

    pub fn snapshot(&self) -> AccountsState {
        read(&self.state).clone()
    }

    pub async fn fetch(&self) {
        let _guard = self.in_flight.begin("accounts");
        {
            let mut state = write(&self.state);
            state.is_loading = true;
            state.error = None;
        }

        let result = self.source.load_accounts().await;

        let mut state = write(&self.state);
        match result {
            Ok(accounts) => {
                tracing::info!("Accounts fetched ({} accounts)", accounts.len());
                state.accounts = Some(accounts);
            }
            Err(e) => {
                tracing::warn!("Accounts fetch failed: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Begin connecting an account on `platform`.
    ///
    /// An account returned by the collaborator is added (or replaces the
    /// entry with the same id).
    pub async fn connect(&self, platform: Platform) {
        tracing::info!("Connecting {} account", platform.label());
        match self.source.connect_account(platform).await {
            Ok(Some(account)) => {
                let mut state = write(&self.state);
                let accounts = state.accounts.get_or_insert_with(Vec::new);
                match accounts.iter_mut().find(|a| a.id == account.id) {
                    Some(existing) => *existing = account,
                    None => accounts.push(account),
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Connecting {} failed: {}", platform.label(), e);
                write(&self.state).error = Some(e.to_string());
            }
        }
    }

    /// Disconnect an account; it is removed locally once acknowledged.
    pub async fn disconnect(&self, account_id: &str) {
        match self.source.disconnect_account(account_id).await {
            Ok(()) => {
                let mut state = write(&self.state);
                if let Some(accounts) = state.accounts.as_mut() {
                    accounts.retain(|a| a.id != account_id);
                }
                tracing::info!("Disconnected account {}", account_id);
            }
            Err(e) => {
                tracing::warn!("Disconnecting account {} failed: {}", account_id, e);
                write(&self.state).error = Some(e.to_string());
            }
        }
    }

    /// Re-read one account and replace it in place.
    pub async fn refresh(&self, account_id: &str) {
        match self.source.refresh_account(account_id).await {
            Ok(Some(account)) => {
                let mut state = write(&self.state);
                if let Some(existing) = state
                    .accounts
                    .as_mut()
                    .and_then(|accounts| accounts.iter_mut().find(|a| a.id == account_id))
                {
                    *existing = account;
                }
            }
            Ok(None) => tracing::debug!("Account {} not found on refresh", account_id),
            Err(e) => {
                tracing::warn!("Refreshing account {} failed: {}", account_id, e);
                write(&self.state).error = Some(e.to_string());
            }
        }
    }
}
