//! Session establishment and teardown against the engine.

use std::sync::Arc;

use tracing::warn;

use crate::bot::Bot;
use crate::error::BotError;
use crate::model::Configuration;
use crate::sinks::CrashReporting;

/// Wraps engine login/logout, logging and crash-reporting every failure.
pub struct SessionGateway {
    bot: Arc<dyn Bot>,
    crash: Arc<dyn CrashReporting>,
}

impl SessionGateway {
    pub fn new(bot: Arc<dyn Bot>, crash: Arc<dyn CrashReporting>) -> Self {
        Self { bot, crash }
    }

    /// Log into the engine with `configuration`. Safe to retry.
    pub async fn login(&self, configuration: &Configuration) -> Result<(), BotError> {
        self.bot.login(configuration).await.inspect_err(|e| {
            warn!(identity = %configuration.identity(), error = %e, "Login failed");
            self.crash.report("login", e);
        })
    }

    /// Log out of whatever session is active.
    ///
    /// Tolerates failure and the no-session case; used by `reset`, which must
    /// complete unconditionally.
    pub async fn logout(&self) {
        if let Err(e) = self.bot.logout().await {
            warn!(error = %e, "Logout failed");
            self.crash.report("logout", &e);
        }
    }
}
