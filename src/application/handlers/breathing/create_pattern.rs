//! CreatePatternHandler - Command handler for registering breathing patterns.

use std::sync::Arc;

use crate::application::ConstraintError;
use crate::domain::breathing::{BreathingPattern, BreathingPatternDraft};
use crate::ports::RecordStore;

/// Command to register a new breathing pattern.
#[derive(Debug, Clone)]
pub struct CreatePatternCommand {
    pub draft: BreathingPatternDraft,
}

/// Handler for creating breathing patterns.
pub struct CreatePatternHandler {
    patterns: Arc<dyn RecordStore<BreathingPattern>>,
}

impl CreatePatternHandler {
    pub fn new(patterns: Arc<dyn RecordStore<BreathingPattern>>) -> Self {
        Self { patterns }
    }

    pub async fn handle(&self, cmd: CreatePatternCommand) -> Result<BreathingPattern, ConstraintError> {
        let pattern = BreathingPattern::from_draft(&cmd.draft).map_err(|errors| {
            tracing::debug!(violations = errors.len(), "breathing pattern rejected");
            ConstraintError::from(errors)
        })?;

        let saved = self.patterns.insert(pattern).await?;
        tracing::info!(pattern_id = %saved.id(), name = saved.name(), "breathing pattern created");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecordStore;
    use crate::domain::breathing::PATTERN_NAME_INDEX;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> CreatePatternHandler {
        CreatePatternHandler::new(Arc::new(InMemoryRecordStore::<BreathingPattern>::new()))
    }

    fn command(name: &str) -> CreatePatternCommand {
        CreatePatternCommand {
            draft: BreathingPatternDraft {
                name: Some(name.to_string()),
                inhale: Some(4),
                hold: Some(7),
                exhale: Some(8),
                cycles: Some(4),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn creates_pattern_with_trimmed_name() {
        let pattern = handler().handle(command("  4-7-8  ")).await.unwrap();
        assert_eq!(pattern.name(), "4-7-8");
        assert_eq!(pattern.total_duration_secs(), 76);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let handler = handler();
        handler.handle(command("Box")).await.unwrap();

        let err = handler.handle(command(" Box ")).await.unwrap_err();
        assert_eq!(
            err,
            ConstraintError::DuplicateKey {
                index: PATTERN_NAME_INDEX.to_string(),
                key: "Box".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_storage() {
        let store = Arc::new(InMemoryRecordStore::<BreathingPattern>::new());
        let handler = CreatePatternHandler::new(store.clone());

        let err = handler
            .handle(CreatePatternCommand {
                draft: BreathingPatternDraft {
                    name: Some("   ".to_string()),
                    inhale: Some(0),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        match err {
            ConstraintError::Validation(errors) => {
                assert!(errors.has("name", ErrorCode::MissingField));
                assert!(errors.has("inhale", ErrorCode::OutOfRange));
                assert!(errors.has("exhale", ErrorCode::MissingField));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(store.is_empty().await);
    }
}
