use std::time::Duration;

use portal_db::KeyValueStore;
use portal_types::api::MSG_MISSING_FIELDS;
use portal_types::models::UserRecord;
use portal_types::view::ViewState;
use tracing::debug;

use crate::error::AuthError;
use crate::store::CredentialStore;

/// Form state and view switching for the login / register / home screens.
pub struct Controller<S> {
    store: CredentialStore<S>,
    latency: Duration,
    view: ViewState,
    current_user: Option<UserRecord>,
    username: String,
    password: String,
    error: Option<String>,
    notice: Option<String>,
    loading: bool,
}

impl<S: KeyValueStore> Controller<S> {
    /// `latency` is an artificial pause before each submit reaches the store.
    pub fn new(store: CredentialStore<S>, latency: Duration) -> Self {
        Self {
            store,
            latency,
            view: ViewState::Login,
            current_user: None,
            username: String::new(),
            password: String::new(),
            error: None,
            notice: None,
            loading: false,
        }
    }

    /// Picks up a persisted session, if there is one.
    pub fn restore(&mut self) -> Result<(), AuthError> {
        if let Some(user) = self.store.current_user()? {
            debug!(username = %user.username, "Restored session");
            self.current_user = Some(user);
            self.view = ViewState::Home;
        }
        Ok(())
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// One-shot message such as "registration successful". Cleared on read.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn store(&self) -> &CredentialStore<S> {
        &self.store
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn toggle_view(&mut self) {
        if self.view == ViewState::Home {
            return;
        }
        self.view = self.view.toggled();
        self.error = None;
    }

    /// Submits the form for the current view.
    ///
    /// Rejections land in [`Controller::error`]; only storage failures are
    /// returned as `Err`.
    pub async fn submit(&mut self) -> Result<(), AuthError> {
        if self.view == ViewState::Home {
            return Ok(());
        }
        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some(MSG_MISSING_FIELDS.to_string());
            return Ok(());
        }

        self.error = None;
        self.loading = true;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let result = match self.view {
            ViewState::Login => self.submit_login(),
            ViewState::Register => self.submit_register(),
            ViewState::Home => Ok(()),
        };
        self.loading = false;
        result
    }

    fn submit_login(&mut self) -> Result<(), AuthError> {
        let outcome = self.store.login_outcome(&self.username, &self.password)?;
        if outcome.success {
            self.current_user = self.store.current_user()?;
            self.view = ViewState::Home;
        } else {
            self.error = Some(outcome.message);
        }
        Ok(())
    }

    fn submit_register(&mut self) -> Result<(), AuthError> {
        let outcome = self.store.register_outcome(&self.username, &self.password)?;
        if outcome.success {
            self.notice = Some(outcome.message);
            self.view = ViewState::Login;
            self.password.clear();
        } else {
            self.error = Some(outcome.message);
        }
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.logout()?;
        self.current_user = None;
        self.view = ViewState::Login;
        self.username.clear();
        self.password.clear();
        self.error = None;
        Ok(())
    }
}
