//! Calmtrack - wellness tracking domain core
//!
//! Breathing practice, stress logging, chat and friend requests: entity
//! validation, lifecycle state machines and uniqueness rules, behind a
//! storage port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
