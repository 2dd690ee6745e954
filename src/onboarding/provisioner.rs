//! Identity provisioning — the first step of a start attempt.

use std::sync::Arc;

use tracing::warn;

use crate::bot::Bot;
use crate::error::StartError;
use crate::model::Secret;
use crate::sinks::CrashReporting;

/// Requests fresh key material from the engine.
///
/// Every call produces a new secret; secrets are never reused across
/// attempts. Stateless apart from its injected collaborators.
pub struct IdentityProvisioner {
    bot: Arc<dyn Bot>,
    crash: Arc<dyn CrashReporting>,
}

impl IdentityProvisioner {
    pub fn new(bot: Arc<dyn Bot>, crash: Arc<dyn CrashReporting>) -> Self {
        Self { bot, crash }
    }

    /// Create a new secret and identity.
    pub async fn provision(&self) -> Result<Secret, StartError> {
        match self.bot.create_secret().await {
            Ok(secret) => Ok(secret),
            Err(e) => {
                warn!(error = %e, "Secret creation failed");
                self.crash.report("create_secret", &e);
                Err(StartError::SecretFailed(e))
            }
        }
    }
}
