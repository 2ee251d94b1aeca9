//! Core library for the small business legal checkup service.
//!
//! The interesting logic lives in [`assessment`]: an immutable question
//! catalog, intake validation, and a pure scoring engine that turns a set of
//! answers into a green/yellow/red classification with a ranked risk list and
//! action plan. Everything else is the ambient service plumbing shared with
//! the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
