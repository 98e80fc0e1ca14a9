//! LogStressHandler - Command handler for recording stress log entries.

use std::sync::Arc;

use crate::application::ConstraintError;
use crate::domain::stress::{StressLog, StressLogDraft};
use crate::ports::RecordStore;

/// Command to record a stress log entry.
#[derive(Debug, Clone)]
pub struct LogStressCommand {
    pub draft: StressLogDraft,
}

/// Handler for stress logging.
pub struct LogStressHandler {
    logs: Arc<dyn RecordStore<StressLog>>,
}

impl LogStressHandler {
    pub fn new(logs: Arc<dyn RecordStore<StressLog>>) -> Self {
        Self { logs }
    }

    pub async fn handle(&self, cmd: LogStressCommand) -> Result<StressLog, ConstraintError> {
        let log = StressLog::from_draft(&cmd.draft).map_err(|errors| {
            tracing::debug!(violations = errors.len(), "stress log rejected");
            ConstraintError::from(errors)
        })?;

        let saved = self.logs.insert(log).await?;
        tracing::info!(
            log_id = %saved.id(),
            user_id = %saved.user_id(),
            level = saved.level(),
            bucket = %saved.bucket(),
            "stress logged"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecordStore;
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::domain::scale::StressLevel;

    fn handler() -> LogStressHandler {
        LogStressHandler::new(Arc::new(InMemoryRecordStore::<StressLog>::new()))
    }

    #[tokio::test]
    async fn logged_entry_is_dated_by_storage() {
        let log = handler()
            .handle(LogStressCommand {
                draft: StressLogDraft {
                    user_id: Some(UserId::new().to_string()),
                    level: Some(9),
                    triggers: vec![" deadline ".to_string()],
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert!(log.date().is_some());
        assert_eq!(log.triggers(), ["deadline".to_string()]);
        assert_eq!(log.bucket(), StressLevel::VeryHigh);
    }

    #[tokio::test]
    async fn every_field_failure_is_returned() {
        let err = handler()
            .handle(LogStressCommand {
                draft: StressLogDraft {
                    level: Some(11),
                    symptoms: vec!["s".repeat(101)],
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        match err {
            ConstraintError::Validation(errors) => {
                assert!(errors.has("userId", ErrorCode::MissingField));
                assert!(errors.has("level", ErrorCode::OutOfRange));
                assert!(errors.has("symptoms.0", ErrorCode::TooLong));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
