//! Ephemeral per-attempt context.

use std::sync::Arc;

use secrecy::SecretString;

use crate::bot::Bot;
use crate::model::{About, Configuration, Identity, Network};

/// Everything a start/resume attempt carries in memory.
///
/// Rebuilt fresh from a [`Configuration`] at the beginning of every attempt
/// and discarded at the end; only the configuration it derives from is ever
/// persisted.
#[derive(Clone)]
pub struct Context {
    pub identity: Identity,
    pub network: Network,
    /// Optional feed-signing key for networks that require one.
    pub signing_key: Option<SecretString>,
    /// Handle to the engine session this attempt runs against.
    pub bot: Arc<dyn Bot>,
    /// The published profile record, once known.
    pub about: Option<About>,
}

impl Context {
    /// Rebuild a context from a persisted configuration and a live engine
    /// handle. The configuration carries identity and network by
    /// construction, so this cannot fail.
    pub fn from_configuration(configuration: &Configuration, bot: Arc<dyn Bot>) -> Self {
        Self {
            identity: configuration.identity().clone(),
            network: configuration.network(),
            signing_key: configuration.signing_key().cloned(),
            bot,
            about: None,
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("identity", &self.identity)
            .field("network", &self.network)
            .field("signing_key", &self.signing_key)
            .field("about", &self.about)
            .finish_non_exhaustive()
    }
}
