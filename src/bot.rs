//! Capability contract for the external replication engine ("bot").
//!
//! The engine owns key generation, feeds, and the peer protocol. This crate
//! never links against a concrete engine; everything consumes this trait so
//! tests can substitute mocks.

use async_trait::async_trait;

use crate::error::BotError;
use crate::model::{About, Configuration, Identity, MessageRef, Secret};

/// Async interface to the replication engine.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Identity of the currently logged-in session, if any.
    async fn identity(&self) -> Option<Identity>;

    /// Create a brand-new secret and identity. Every call must produce fresh
    /// key material; secrets are never reused.
    async fn create_secret(&self) -> Result<Secret, BotError>;

    /// Log into the engine with the given configuration.
    async fn login(&self, configuration: &Configuration) -> Result<(), BotError>;

    /// Log out of the current session. A no-op when nothing is logged in.
    async fn logout(&self) -> Result<(), BotError>;

    /// Publish a profile record to the current session's feed.
    async fn publish(&self, content: &About) -> Result<MessageRef, BotError>;

    /// Fetch the published profile record for an identity, if one exists.
    async fn about(&self, identity: &Identity) -> Result<Option<About>, BotError>;
}
