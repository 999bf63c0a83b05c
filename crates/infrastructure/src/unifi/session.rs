use killswitch_domain::DomainError;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct SessionState {
    authenticated: bool,
    verified_at: Option<Instant>,
}

/// API-key session freshness. The lock is held across verification so
/// concurrent callers verify at most once.
#[derive(Debug)]
pub(crate) struct Session {
    state: Mutex<SessionState>,
    timeout: Duration,
}

impl Session {
    pub(crate) fn new(timeout: Duration) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            timeout,
        }
    }

    pub(crate) async fn ensure<F, Fut>(&self, verify: F) -> Result<(), DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), DomainError>>,
    {
        let mut state = self.state.lock().await;

        let fresh = state.authenticated
            && state
                .verified_at
                .is_some_and(|at| at.elapsed() < self.timeout);
        if fresh {
            return Ok(());
        }

        match verify().await {
            Ok(()) => {
                state.authenticated = true;
                state.verified_at = Some(Instant::now());
                Ok(())
            }
            Err(e) => {
                state.authenticated = false;
                state.verified_at = None;
                Err(e)
            }
        }
    }
}
