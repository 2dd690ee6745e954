//! Orbit onboarding — account creation and resume workflow for the Orbit
//! peer-to-peer social client.
//!
//! The replication engine ("bot"), secure configuration storage, and the
//! analytics/crash-reporting sinks are external collaborators consumed
//! through the traits in [`bot`], [`store`], and [`sinks`]. This crate owns
//! the workflow sequencing, the durable onboarding status, and the rollback
//! contract when an attempt is interrupted.

pub mod bot;
pub mod error;
pub mod model;
pub mod onboarding;
pub mod sinks;
pub mod store;
pub mod validation;
