//! Stress logging handlers.

mod log_stress;

pub use log_stress::{LogStressCommand, LogStressHandler};
