use serde::{Deserialize, Serialize};

/// Domain model for a logged-in health worker.
///
/// A session either has all three fields or does not exist at all; the
/// struct encodes that invariant, with absence expressed by
/// [`WorkerSession::worker`] being `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub name: String,
    pub id: String,
    pub area: String,
}

/// Current session, which may be empty when nobody is logged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerSession {
    pub worker: Option<Worker>,
}
