//! UpdateSessionProgressHandler - Records completed cycles and the closing
//! stress rating of a running or interrupted session.

use std::sync::Arc;

use crate::application::TransitionError;
use crate::domain::breathing::BreathingSession;
use crate::domain::foundation::{BreathingSessionId, Record};
use crate::ports::RecordStore;

/// Command to record session progress.
#[derive(Debug, Clone, Default)]
pub struct UpdateSessionProgressCommand {
    pub session_id: BreathingSessionId,
    pub completed_cycles: Option<i64>,
    pub stress_level_after: Option<i64>,
}

/// Handler for session progress updates.
pub struct UpdateSessionProgressHandler {
    sessions: Arc<dyn RecordStore<BreathingSession>>,
}

impl UpdateSessionProgressHandler {
    pub fn new(sessions: Arc<dyn RecordStore<BreathingSession>>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSessionProgressCommand,
    ) -> Result<BreathingSession, TransitionError> {
        let mut session = self
            .sessions
            .find_by_id(cmd.session_id)
            .await?
            .ok_or(TransitionError::NotFound {
                collection: BreathingSession::COLLECTION,
                id: cmd.session_id.to_string(),
            })?;

        session.record_progress(cmd.completed_cycles, cmd.stress_level_after)?;
        session.check().into_result()?;

        let saved = self.sessions.update(session).await?;
        tracing::debug!(
            session_id = %saved.id(),
            completed = saved.completed_cycles(),
            target = saved.target_cycles(),
            "session progress recorded"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecordStore;
    use crate::domain::breathing::BreathingSessionDraft;
    use crate::domain::foundation::{ErrorCode, SessionStatus, Timestamp, UserId};

    async fn seeded() -> (Arc<InMemoryRecordStore<BreathingSession>>, BreathingSession) {
        let store = Arc::new(InMemoryRecordStore::<BreathingSession>::new());
        let session = BreathingSession::from_draft(&BreathingSessionDraft {
            user_id: Some(UserId::new().to_string()),
            pattern_name: Some("Box".to_string()),
            start_time: Some(Timestamp::now()),
            target_cycles: Some(6),
            stress_level_before: Some(8),
            ..Default::default()
        })
        .unwrap();
        let session = store.insert(session).await.unwrap();
        (store, session)
    }

    #[tokio::test]
    async fn records_cycles_and_closing_rating() {
        let (store, session) = seeded().await;
        let handler = UpdateSessionProgressHandler::new(store);

        let saved = handler
            .handle(UpdateSessionProgressCommand {
                session_id: session.id(),
                completed_cycles: Some(6),
                stress_level_after: Some(3),
            })
            .await
            .unwrap();
        assert_eq!(saved.completed_cycles(), 6);
        assert_eq!(saved.stress_delta(), Some(5));
    }

    #[tokio::test]
    async fn cycles_beyond_target_leave_session_unchanged() {
        let (store, session) = seeded().await;
        let handler = UpdateSessionProgressHandler::new(store.clone());

        let err = handler
            .handle(UpdateSessionProgressCommand {
                session_id: session.id(),
                completed_cycles: Some(7),
                stress_level_after: Some(11),
            })
            .await
            .unwrap_err();
        match err {
            TransitionError::Validation(errors) => {
                assert!(errors.has("completedCycles", ErrorCode::OutOfRange));
                assert!(errors.has("stressLevelAfter", ErrorCode::OutOfRange));
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let stored = store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.completed_cycles(), 0);
    }

    #[tokio::test]
    async fn completed_session_rejects_progress() {
        let (store, mut session) = seeded().await;
        session.transition(SessionStatus::Completed).unwrap();
        let session = store.update(session).await.unwrap();

        let handler = UpdateSessionProgressHandler::new(store);
        let err = handler
            .handle(UpdateSessionProgressCommand {
                session_id: session.id(),
                completed_cycles: Some(1),
                ..Default::default()
            })
            .await
            .unwrap_err();
        match err {
            TransitionError::Validation(errors) => assert!(!errors.get("status").is_empty()),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
