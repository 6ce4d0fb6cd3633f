//! The session context passed to every page constructor.
//!
//! Instead of an ambient process-wide lookup, the signed-in state is an
//! explicit object with a defined lifecycle: [`Session::init`] on startup
//! (restoring any persisted session), [`Session::login`] /
//! [`Session::signup`] to establish one, and [`Session::logout`] to tear it
//! down.  Pages and mutations read the current user through it and use it
//! as the authentication gate.

use std::sync::Arc;

use tracing::{info, warn};

use aperture_api::ApiClient;
use aperture_shared::User;
use aperture_store::{Database, SessionRecord};

use crate::error::{ClientError, Result};

/// Signed-in state shared by all pages.
pub struct Session {
    api: Arc<ApiClient>,
    db: Database,
    current: Option<SessionRecord>,
}

impl Session {
    /// Restore the session from the local store and install the bearer
    /// token on the API client if one was persisted.
    pub fn init(api: Arc<ApiClient>, db: Database) -> Result<Self> {
        let current = db.load_session()?;

        if let Some(ref record) = current {
            api.set_bearer(Some(record.token.clone()));
            info!(user = %record.user.nickname, "session restored");
        }

        Ok(Self { api, db, current })
    }

    /// Handle to the API client (bearer token already installed).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Snapshot of the signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(|record| &record.user)
    }

    /// The authentication gate: the signed-in user, or
    /// [`ClientError::AuthRequired`] for the shell to route to login.
    pub fn require_user(&self) -> Result<&User> {
        self.current_user().ok_or(ClientError::AuthRequired)
    }

    /// Authenticate, fetch the account record, and persist both.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let tokens = self.api.login(email, password).await?;
        self.establish(tokens.access_token).await
    }

    /// Create an account, then establish a session for it.
    pub async fn signup(&mut self, email: &str, password: &str, nickname: &str) -> Result<&User> {
        let tokens = self.api.signup(email, password, nickname).await?;
        self.establish(tokens.access_token).await
    }

    async fn establish(&mut self, token: String) -> Result<&User> {
        self.api.set_bearer(Some(token.clone()));

        let user = match self.api.current_user().await {
            Ok(user) => user,
            Err(e) => {
                // Half-established sessions are worse than none.
                self.api.set_bearer(None);
                return Err(e.into());
            }
        };

        let record = SessionRecord { token, user };
        self.db.save_session(&record)?;

        info!(user = %record.user.nickname, "signed in");

        let record = self.current.insert(record);
        Ok(&record.user)
    }

    /// Re-fetch the current user and re-persist the snapshot.
    ///
    /// A failure means the token is no longer good for anything, so the
    /// session is dropped entirely and `None` is returned.
    pub async fn refresh(&mut self) -> Result<Option<&User>> {
        let Some(record) = self.current.as_mut() else {
            return Ok(None);
        };

        match self.api.current_user().await {
            Ok(user) => {
                record.user = user;
                self.db.save_session(record)?;
                Ok(self.current_user())
            }
            Err(e) => {
                warn!(error = %e, "session refresh failed, signing out");
                self.logout()?;
                Ok(None)
            }
        }
    }

    /// Teardown: clear the persisted session and the bearer token.
    pub fn logout(&mut self) -> Result<()> {
        self.db.clear_session()?;
        self.api.set_bearer(None);
        self.current = None;

        info!("signed out");

        Ok(())
    }
}
