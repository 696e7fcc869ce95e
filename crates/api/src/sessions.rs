//! Per-session assessment storage
//!
//! Every session owns its own [`AssessmentState`]; no state is shared between
//! sessions. Sessions live in memory for the lifetime of the server.

use agent_exposure_assessment::AssessmentState;
use agent_exposure_common::{ExposureError, SessionId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, AssessmentState>>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    /// Open a new session at step 1
    pub fn create(&self) -> Result<(SessionId, AssessmentState), ApiError> {
        let mut sessions = self.sessions.write().map_err(|e| {
            warn!("Failed to acquire write lock on session storage: {}", e);
            ApiError::StorageLock
        })?;

        if sessions.len() >= self.max_sessions {
            return Err(ExposureError::SessionLimit {
                limit: self.max_sessions,
            }
            .into());
        }

        let id = SessionId::new();
        let state = AssessmentState::new();
        sessions.insert(id, state.clone());
        info!(session_id = %id, active = sessions.len(), "Opened assessment session");
        Ok((id, state))
    }

    pub fn read<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&AssessmentState) -> Result<T, ExposureError>,
    ) -> Result<T, ApiError> {
        let sessions = self.sessions.read().map_err(|e| {
            warn!("Failed to acquire read lock on session storage: {}", e);
            ApiError::StorageLock
        })?;

        let state = sessions
            .get(&id)
            .ok_or_else(|| ExposureError::SessionNotFound(id.to_string()))?;
        Ok(f(state)?)
    }

    /// Run a mutating step-machine operation against one session
    pub fn update<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut AssessmentState) -> Result<T, ExposureError>,
    ) -> Result<T, ApiError> {
        let mut sessions = self.sessions.write().map_err(|e| {
            warn!("Failed to acquire write lock on session storage: {}", e);
            ApiError::StorageLock
        })?;

        let state = sessions
            .get_mut(&id)
            .ok_or_else(|| ExposureError::SessionNotFound(id.to_string()))?;
        Ok(f(state)?)
    }

    pub fn remove(&self, id: SessionId) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().map_err(|e| {
            warn!("Failed to acquire write lock on session storage: {}", e);
            ApiError::StorageLock
        })?;

        sessions
            .remove(&id)
            .ok_or_else(|| ExposureError::SessionNotFound(id.to_string()))?;
        debug!(session_id = %id, "Closed assessment session");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|sessions| sessions.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_exposure_common::{Answer, AutonomyLevel, Step};

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new(4);
        let (first, _) = store.create().unwrap();
        let (second, _) = store.create().unwrap();

        store
            .update(first, |state| {
                state.set_answer(Step::Autonomy, Answer::Autonomy(AutonomyLevel::FullyAutonomous))
            })
            .unwrap();

        let untouched = store.read(second, |state| Ok(state.profile().clone())).unwrap();
        assert!(untouched.autonomy.is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_session_limit() {
        let store = SessionStore::new(1);
        store.create().unwrap();
        assert!(matches!(
            store.create(),
            Err(ApiError::Exposure(ExposureError::SessionLimit { limit: 1 }))
        ));
    }

    #[test]
    fn test_remove_unknown_session() {
        let store = SessionStore::new(1);
        assert!(matches!(
            store.remove(SessionId::new()),
            Err(ApiError::Exposure(ExposureError::SessionNotFound(_)))
        ));
        assert!(store.is_empty());
    }
}
