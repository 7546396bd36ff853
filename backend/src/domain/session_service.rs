use std::sync::{Arc, RwLock};

use log::info;

use crate::domain::models::worker::{Worker, WorkerSession};

/// Service holding the process-wide worker session.
///
/// There is exactly one session slot: `login` overwrites whatever was
/// there, `logout` clears it. Any string values are accepted; this is an
/// identity marker, not authentication.
#[derive(Clone, Default)]
pub struct SessionService {
    worker: Arc<RwLock<Option<Worker>>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for the given worker, replacing any prior one.
    pub fn login(&self, name: String, id: String, area: String) {
        info!("Worker logging in: id={id}, area={area}");
        let mut slot = self.worker.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Worker { name, id, area });
    }

    /// End the current session. A no-op when nobody is logged in.
    pub fn logout(&self) {
        info!("Worker logging out");
        let mut slot = self.worker.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// The current session; `worker` is `None` before login and after
    /// logout. Protected views treat presence as their precondition.
    pub fn current(&self) -> WorkerSession {
        let slot = self.worker.read().unwrap_or_else(|e| e.into_inner());
        WorkerSession {
            worker: slot.clone(),
        }
    }
}
