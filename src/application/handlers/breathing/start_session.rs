//! StartSessionHandler - Command handler for starting breathing sessions.

use std::sync::Arc;

use crate::application::ConstraintError;
use crate::domain::breathing::{BreathingSession, BreathingSessionDraft};
use crate::ports::RecordStore;

/// Command to start a breathing session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub draft: BreathingSessionDraft,
}

/// Handler for starting sessions.
///
/// The pattern is referenced by name only; whether it exists is not checked
/// here.
pub struct StartSessionHandler {
    sessions: Arc<dyn RecordStore<BreathingSession>>,
}

impl StartSessionHandler {
    pub fn new(sessions: Arc<dyn RecordStore<BreathingSession>>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<BreathingSession, ConstraintError> {
        let session = BreathingSession::from_draft(&cmd.draft).map_err(|errors| {
            tracing::debug!(violations = errors.len(), "breathing session rejected");
            ConstraintError::from(errors)
        })?;

        let saved = self.sessions.insert(session).await?;
        tracing::info!(
            session_id = %saved.id(),
            user_id = %saved.user_id(),
            pattern = saved.pattern_name(),
            "breathing session started"
        );
        Ok(saved)
    }
}
