//! TransitionSessionHandler - Command handler for session status changes.

use std::sync::Arc;

use crate::application::TransitionError;
use crate::domain::breathing::BreathingSession;
use crate::domain::foundation::validators::enum_member;
use crate::domain::foundation::{
    BreathingSessionId, Record, SessionStatus, Timestamp, ValidationErrors,
};
use crate::ports::RecordStore;

/// Command to move a session to another status.
#[derive(Debug, Clone)]
pub struct TransitionSessionCommand {
    pub session_id: BreathingSessionId,
    /// Raw requested status label, e.g. `COMPLETED`.
    pub status: String,
    /// End time recorded on completion; defaults to now.
    pub ended_at: Option<Timestamp>,
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct TransitionSessionResult {
    pub session: BreathingSession,
    pub previous: SessionStatus,
}

/// Handler for session status changes.
pub struct TransitionSessionHandler {
    sessions: Arc<dyn RecordStore<BreathingSession>>,
}

impl TransitionSessionHandler {
    pub fn new(sessions: Arc<dyn RecordStore<BreathingSession>>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: TransitionSessionCommand,
    ) -> Result<TransitionSessionResult, TransitionError> {
        let requested: SessionStatus = enum_member(&cmd.status)
            .map_err(|violation| ValidationErrors::single("status", violation))?;

        let mut session = self
            .sessions
            .find_by_id(cmd.session_id)
            .await?
            .ok_or(TransitionError::NotFound {
                collection: BreathingSession::COLLECTION,
                id: cmd.session_id.to_string(),
            })?;

        let previous = session.transition(requested).map_err(|err| {
            tracing::warn!(session_id = %cmd.session_id, error = %err, "illegal session transition");
            err
        })?;

        if previous == requested {
            tracing::debug!(session_id = %cmd.session_id, status = %previous, "session already in requested status");
            return Ok(TransitionSessionResult { session, previous });
        }

        if requested == SessionStatus::Completed {
            session.set_end_time(cmd.ended_at.unwrap_or_else(Timestamp::now));
        }
        session.check().into_result()?;

        let saved = self.sessions.update(session).await?;
        tracing::info!(
            session_id = %saved.id(),
            from = %previous,
            to = %saved.status(),
            "breathing session transitioned"
        );
        Ok(TransitionSessionResult {
            session: saved,
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecordStore;
    use crate::domain::breathing::BreathingSessionDraft;
    use crate::domain::foundation::{ErrorCode, UserId};

    struct Fixture {
        store: Arc<InMemoryRecordStore<BreathingSession>>,
        handler: TransitionSessionHandler,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryRecordStore::<BreathingSession>::new());
        Fixture {
            handler: TransitionSessionHandler::new(store.clone()),
            store,
        }
    }

    async fn started(store: &InMemoryRecordStore<BreathingSession>, start: Timestamp) -> BreathingSession {
        let session = BreathingSession::from_draft(&BreathingSessionDraft {
            user_id: Some(UserId::new().to_string()),
            pattern_name: Some("Box".to_string()),
            start_time: Some(start),
            target_cycles: Some(4),
            ..Default::default()
        })
        .unwrap();
        store.insert(session).await.unwrap()
    }

    fn command(session: &BreathingSession, status: &str) -> TransitionSessionCommand {
        TransitionSessionCommand {
            session_id: session.id(),
            status: status.to_string(),
            ended_at: None,
        }
    }

    #[tokio::test]
    async fn completes_and_stamps_end_time() {
        let f = fixture();
        let session = started(&f.store, Timestamp::now()).await;

        let result = f.handler.handle(command(&session, "COMPLETED")).await.unwrap();
        assert_eq!(result.previous, SessionStatus::InProgress);
        assert_eq!(result.session.status(), SessionStatus::Completed);
        assert!(result.session.end_time().is_some());
    }

    #[tokio::test]
    async fn interrupt_then_resume() {
        let f = fixture();
        let session = started(&f.store, Timestamp::now()).await;

        f.handler.handle(command(&session, "INTERRUPTED")).await.unwrap();
        let resumed = f.handler.handle(command(&session, "IN_PROGRESS")).await.unwrap();
        assert_eq!(resumed.previous, SessionStatus::Interrupted);
        assert_eq!(resumed.session.status(), SessionStatus::InProgress);
    }

    #[tokio::test]
    async fn interrupted_cannot_complete_directly() {
        let f = fixture();
        let session = started(&f.store, Timestamp::now()).await;
        f.handler.handle(command(&session, "INTERRUPTED")).await.unwrap();

        let err = f.handler.handle(command(&session, "COMPLETED")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::IllegalTransition);

        let stored = f.store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Interrupted);
    }

    #[tokio::test]
    async fn completed_session_is_frozen() {
        let f = fixture();
        let session = started(&f.store, Timestamp::now()).await;
        f.handler.handle(command(&session, "COMPLETED")).await.unwrap();

        for status in ["IN_PROGRESS", "INTERRUPTED", "COMPLETED"] {
            let err = f.handler.handle(command(&session, status)).await.unwrap_err();
            assert!(matches!(err, TransitionError::IllegalTransition(_)));
        }
    }

    #[tokio::test]
    async fn same_status_request_leaves_record_untouched() {
        let f = fixture();
        let session = started(&f.store, Timestamp::now()).await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let result = f.handler.handle(command(&session, "IN_PROGRESS")).await.unwrap();
        assert_eq!(result.previous, SessionStatus::InProgress);
        assert_eq!(result.session.updated_at(), session.updated_at());

        f.handler.handle(command(&session, "INTERRUPTED")).await.unwrap();
        let interrupted = f.store.find_by_id(session.id()).await.unwrap().unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        f.handler.handle(command(&session, "INTERRUPTED")).await.unwrap();
        let stored = f.store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.updated_at(), interrupted.updated_at());
        assert_eq!(stored.status(), SessionStatus::Interrupted);
    }

    #[tokio::test]
    async fn unknown_status_is_invalid_enum() {
        let f = fixture();
        let session = started(&f.store, Timestamp::now()).await;

        match f.handler.handle(command(&session, "PAUSED")).await.unwrap_err() {
            TransitionError::Validation(errors) => {
                assert!(errors.has("status", ErrorCode::InvalidEnum));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn end_before_start_is_rejected() {
        let f = fixture();
        let start = Timestamp::now();
        let session = started(&f.store, start).await;

        let err = f
            .handler
            .handle(TransitionSessionCommand {
                ended_at: Some(start.plus_secs(-60)),
                ..command(&session, "COMPLETED")
            })
            .await
            .unwrap_err();
        match err {
            TransitionError::Validation(errors) => {
                assert!(errors.has("endTime", ErrorCode::InvalidFormat));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        let stored = f.store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::InProgress);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let f = fixture();
        let err = f
            .handler
            .handle(TransitionSessionCommand {
                session_id: BreathingSessionId::new(),
                status: "COMPLETED".to_string(),
                ended_at: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
