//! Session state machine and the async flows that drive it.
//!
//! DESIGN
//! ======
//! `SessionState` starts `Unresolved` and settles into `Anonymous` or
//! `Authenticated` exactly once per trigger (startup check, login, logout).
//! Fields are private: every mutation goes through a transition method, so
//! the pairing rules hold at every observable point:
//!
//! - `Authenticated` if and only if a token and a profile are both present,
//!   and the profile was fetched with that token.
//! - A token is persisted only after a successful credential exchange, and
//!   is evicted from storage as soon as a profile fetch rejects it.
//!
//! The async flows (`run_startup_check`, `run_login`, `run_logout`) are
//! plain functions over the [`TokenStore`] and [`AuthBackend`] seams so
//! they run under native tests; the Leptos layer applies their outcomes to
//! the shared signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiError;
use crate::net::types::{Profile, Role};
use crate::util::token_store::TokenStore;

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Startup token check still in flight; no redirect decisions yet.
    #[default]
    Unresolved,
    /// No valid session.
    Anonymous,
    /// Token and verified profile both present.
    Authenticated,
}

/// Error surfaced to the login caller for user display.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The backend rejected the credentials (or the login could not be
    /// completed); `detail` is the backend's reason when it gave one.
    #[error("{detail}")]
    Credentials { detail: String },
}

/// Fallback message when the backend gives no usable rejection detail.
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed";

/// Process-wide authentication state.
///
/// Owned by a single `RwSignal` provided from `App`; everything else reads
/// it and mutates it only through the methods below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    status: SessionStatus,
    token: Option<String>,
    profile: Option<Profile>,
    last_error: Option<String>,
    login_pending: bool,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }

    /// Last login failure message, for the login form.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Apply the result of the startup token check.
    pub fn apply_startup(&mut self, outcome: StartupOutcome) {
        match outcome {
            StartupOutcome::Anonymous => self.reset_anonymous(),
            StartupOutcome::Authenticated { token, profile } => {
                self.resolve_authenticated(token, profile);
            }
        }
    }

    /// Mark a login attempt as started.
    ///
    /// Returns `false` (and changes nothing) if an attempt is already in
    /// flight: attempts are serialized, never raced.
    pub fn begin_login(&mut self) -> bool {
        if self.login_pending {
            return false;
        }
        self.login_pending = true;
        self.last_error = None;
        true
    }

    /// Complete a login attempt that succeeded end to end.
    pub fn complete_login(&mut self, token: String, profile: Profile) {
        self.login_pending = false;
        self.resolve_authenticated(token, profile);
    }

    /// Complete a login attempt that failed, recording the reason.
    ///
    /// Status is left as it was (`Anonymous` on the login page); the token
    /// and profile pairing is untouched.
    pub fn fail_login(&mut self, error: &SessionError) {
        self.login_pending = false;
        self.last_error = Some(error.to_string());
    }

    /// Drop the session unconditionally. Idempotent.
    pub fn logout(&mut self) {
        self.reset_anonymous();
    }

    fn resolve_authenticated(&mut self, token: String, profile: Profile) {
        self.token = Some(token);
        self.profile = Some(profile);
        self.status = SessionStatus::Authenticated;
        self.last_error = None;
    }

    fn reset_anonymous(&mut self) {
        self.token = None;
        self.profile = None;
        self.status = SessionStatus::Anonymous;
        self.login_pending = false;
    }
}

/// Backend seam for the two authentication calls.
///
/// Implemented by `net::api::HttpBackend` in the browser and by canned
/// doubles in tests.
// Single-threaded WASM: callers never need a Send bound on these futures.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// `POST /auth/login`: exchange credentials for a token.
    async fn exchange_credentials(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<String, ApiError>;

    /// `GET /users/me`: verify `token` and fetch the profile it belongs to.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError>;
}

/// Result of the startup token check.
#[derive(Clone, Debug, PartialEq)]
pub enum StartupOutcome {
    Anonymous,
    Authenticated { token: String, profile: Profile },
}

/// Resolve a fresh process start against persisted storage.
///
/// No stored token resolves straight to `Anonymous`. A stored token is
/// verified with a profile fetch; any failure (expired token or transport)
/// evicts the token and resolves to `Anonymous` — silently, since this
/// runs before any UI that could display an error.
pub async fn run_startup_check<B: AuthBackend, S: TokenStore>(
    backend: &B,
    store: &mut S,
) -> StartupOutcome {
    let Some(token) = store.load() else {
        return StartupOutcome::Anonymous;
    };
    match backend.fetch_profile(&token).await {
        Ok(profile) => StartupOutcome::Authenticated { token, profile },
        Err(_) => {
            store.clear();
            StartupOutcome::Anonymous
        }
    }
}

/// Exchange credentials and establish a session.
///
/// The token is persisted only once the exchange has succeeded; a
/// profile-fetch failure immediately after evicts it again and fails the
/// login (no retry, no transient/auth distinction). A rejected exchange
/// leaves storage untouched and surfaces the backend's `detail`.
pub async fn run_login<B: AuthBackend, S: TokenStore>(
    backend: &B,
    store: &mut S,
    user_id: &str,
    password: &str,
) -> Result<(String, Profile), SessionError> {
    let token = backend
        .exchange_credentials(user_id, password)
        .await
        .map_err(|err| SessionError::Credentials {
            detail: rejection_detail(err),
        })?;
    store.save(&token);

    match backend.fetch_profile(&token).await {
        Ok(profile) => Ok((token, profile)),
        Err(err) => {
            store.clear();
            Err(SessionError::Credentials {
                detail: rejection_detail(err),
            })
        }
    }
}

/// Drop the persisted token. Never fails and needs no network round-trip.
pub fn run_logout<S: TokenStore>(store: &mut S) {
    store.clear();
}

/// Reduce an API failure to a user-displayable login failure reason.
///
/// Transport failures are indistinguishable from rejections at this level,
/// so both collapse to the generic message unless the backend said more.
fn rejection_detail(err: ApiError) -> String {
    match err {
        ApiError::Rejected { detail, .. } if !detail.is_empty() => detail,
        ApiError::Rejected { .. } | ApiError::Transport(_) => GENERIC_LOGIN_FAILURE.to_owned(),
    }
}
