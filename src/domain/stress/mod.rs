//! Stress logging domain module.

mod log;

pub use log::{
    StressLog, StressLogDraft, MAX_NOTES_LENGTH, MAX_STRESS_LEVEL, MAX_SYMPTOMS, MAX_TAG_LENGTH,
    MAX_TRIGGERS, MIN_STRESS_LEVEL,
};
