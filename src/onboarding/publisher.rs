//! Directory publication and user identification.

use std::sync::Arc;

use tracing::warn;

use crate::bot::Bot;
use crate::error::BotError;
use crate::model::{About, Identity, Network};
use crate::sinks::{Analytics, CrashReporting};

/// Publishes the user's profile record through the session and identifies
/// the user to the analytics and crash-reporting sinks.
pub struct DirectoryPublisher {
    bot: Arc<dyn Bot>,
    analytics: Arc<dyn Analytics>,
    crash: Arc<dyn CrashReporting>,
}

impl DirectoryPublisher {
    pub fn new(
        bot: Arc<dyn Bot>,
        analytics: Arc<dyn Analytics>,
        crash: Arc<dyn CrashReporting>,
    ) -> Self {
        Self {
            bot,
            analytics,
            crash,
        }
    }

    /// Publish the profile record for `identity`. Safe to retry.
    pub async fn publish(&self, identity: &Identity, name: &str) -> Result<About, BotError> {
        let about = About::new(identity.clone(), name);
        match self.bot.publish(&about).await {
            Ok(_reference) => Ok(about),
            Err(e) => {
                warn!(identity = %identity, error = %e, "Profile publication failed");
                self.crash.report("publish", &e);
                Err(e)
            }
        }
    }

    /// Fetch the previously published profile record for `identity`.
    ///
    /// An absent record is surfaced as an error: the common partial-failure
    /// point is a prior attempt that logged in but never published.
    pub async fn fetch(&self, identity: &Identity) -> Result<About, BotError> {
        match self.bot.about(identity).await {
            Ok(Some(about)) => Ok(about),
            Ok(None) => {
                let e = BotError::DirectoryFetch {
                    reason: format!("no published profile record for {identity}"),
                };
                warn!(identity = %identity, "Profile record not found");
                self.crash.report("about", &e);
                Err(e)
            }
            Err(e) => {
                warn!(identity = %identity, error = %e, "Directory fetch failed");
                self.crash.report("about", &e);
                Err(e)
            }
        }
    }

    /// Identify the published user to both sinks. Fire-and-forget.
    pub fn identify(&self, about: &About, network: Network) {
        self.crash.identify(
            about.identity.as_str(),
            &about.name,
            network.key(),
            network.name(),
        );
        self.analytics
            .identify(about.identity.as_str(), &about.name, network.name());
    }
}
