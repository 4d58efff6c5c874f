//! Session guard: validates the persisted session against the backend and
//! watches for server-side revocation on a background thread.

use crate::api::ApiClient;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::session::{Role, Session};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of one `validate()` round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Valid(Session),
    /// Nothing persisted.
    Unauthenticated,
    /// The backend answered 401. The store has been cleared.
    Revoked,
    /// Network failure or unexpected status. Fails open.
    Unknown(Session),
}

pub struct SessionGuard<'a> {
    store: &'a LocalStore,
    api: &'a ApiClient,
}

impl<'a> SessionGuard<'a> {
    pub fn new(store: &'a LocalStore, api: &'a ApiClient) -> Self {
        Self { store, api }
    }

    pub fn validate(&self) -> AppResult<GuardOutcome> {
        validate_with(self.store, self.api)
    }

    /// Validate and turn the outcome into a usable session. `required`
    /// gates the admin console: any other role is signed out first.
    pub fn require(&self, required: Option<Role>) -> AppResult<Session> {
        let session = match self.validate()? {
            GuardOutcome::Valid(s) | GuardOutcome::Unknown(s) => s,
            GuardOutcome::Unauthenticated => {
                return Err(AppError::Unauthenticated(
                    "no active session, run `rattendance login`".into(),
                ));
            }
            GuardOutcome::Revoked => {
                return Err(AppError::Unauthenticated(
                    "your session was revoked, please log in again".into(),
                ));
            }
        };

        if let Some(role) = required
            && session.user.role != role
        {
            self.store.clear()?;
            self.store.journal(
                "logout",
                session.username(),
                &format!("Role '{}' denied access to the {role} console", session.user.role),
            );
            return Err(AppError::Unauthenticated(format!(
                "{role} access required, you have been signed out"
            )));
        }

        Ok(session)
    }
}

/// Shared by the foreground guard and the watch thread, each with its own
/// store connection.
fn validate_with(store: &LocalStore, api: &ApiClient) -> AppResult<GuardOutcome> {
    let Some(session) = store.session()? else {
        // partial leftovers (token without profile) go too
        store.clear()?;
        return Ok(GuardOutcome::Unauthenticated);
    };

    match api.check_session(&session.token, session.username()) {
        Ok(()) => Ok(GuardOutcome::Valid(session)),
        Err(AppError::Unauthenticated(msg)) => {
            store.clear()?;
            store.journal("revoked", session.username(), &msg);
            info!("session of {} revoked", session.username());
            Ok(GuardOutcome::Revoked)
        }
        Err(e) => {
            debug!("session check inconclusive: {e}");
            Ok(GuardOutcome::Unknown(session))
        }
    }
}

/// Reported by the watch thread. Either way the foreground must stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    Revoked,
    /// The store no longer holds a session (logout elsewhere).
    SignedOut,
}

/// Background poll of `check_session`. Stops itself after reporting an
/// event, or when dropped.
pub struct SessionWatch {
    rx: Receiver<WatchEvent>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

const STOP_SLICE: Duration = Duration::from_millis(50);

impl SessionWatch {
    pub fn start(store_path: &str, api: ApiClient, interval: Duration) -> AppResult<Self> {
        // open on the caller's thread so a bad path is reported here
        let store = LocalStore::open(store_path)?;
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();

        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("session-watch".into())
            .spawn(move || {
                let interval = interval.max(STOP_SLICE);
                loop {
                    // sleep in slices so stop() does not wait a full tick
                    let deadline = Instant::now() + interval;
                    while Instant::now() < deadline {
                        if flag.load(Ordering::Relaxed) {
                            return;
                        }
                        thread::sleep(STOP_SLICE.min(deadline.saturating_duration_since(Instant::now())));
                    }

                    let event = match validate_with(&store, &api) {
                        Ok(GuardOutcome::Revoked) => Some(WatchEvent::Revoked),
                        Ok(GuardOutcome::Unauthenticated) => Some(WatchEvent::SignedOut),
                        Ok(_) => None,
                        Err(e) => {
                            debug!("session watch tick failed: {e}");
                            None
                        }
                    };

                    if let Some(ev) = event {
                        let _ = tx.send(ev);
                        return;
                    }
                }
            })?;

        Ok(Self {
            rx,
            stop,
            handle: Some(handle),
        })
    }

    /// Non-blocking check for a pending event.
    pub fn poll(&self) -> Option<WatchEvent> {
        self.rx.try_recv().ok()
    }

    /// Block up to `timeout` for an event.
    pub fn wait(&self, timeout: Duration) -> Option<WatchEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(ev) => Some(ev),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for SessionWatch {
    fn drop(&mut self) {
        self.shutdown();
    }
}
