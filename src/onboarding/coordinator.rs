//! Onboarding coordinator — drives provisioning, configuration, session,
//! and publication as one sequential chain, and owns the resume/reset
//! contract around it.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::bot::Bot;
use crate::error::{StartError, StoreError};
use crate::model::{About, Configuration, Identity, Network};
use crate::sinks::{Analytics, CrashReporting};
use crate::store::{ConfigurationStore, OnboardingStatusStore};
use crate::validation;

use super::builder::ConfigurationBuilder;
use super::context::Context;
use super::provisioner::IdentityProvisioner;
use super::publisher::DirectoryPublisher;
use super::session::SessionGateway;
use super::status::OnboardingStatus;

/// Collaborators injected into the coordinator.
///
/// Everything external is an explicit dependency so tests can substitute
/// mocks and hosts can run multiple instances.
#[derive(Clone)]
pub struct OnboardingDeps {
    pub bot: Arc<dyn Bot>,
    pub configs: Arc<dyn ConfigurationStore>,
    pub status: Arc<dyn OnboardingStatusStore>,
    pub analytics: Arc<dyn Analytics>,
    pub crash: Arc<dyn CrashReporting>,
    /// Network selected at launch (see [`Network::from_env`]).
    pub network: Network,
}

/// Outcome of a resume attempt.
///
/// The partial case carries both a usable context and the error that stopped
/// the chain: the caller should retry the last step (typically publication)
/// rather than start over.
#[derive(Debug)]
pub enum ResumeOutcome {
    /// Session re-established and the profile record confirmed.
    Complete(Context),
    /// A context was rebuilt but login or the directory fetch failed.
    Partial { context: Context, error: StartError },
}

impl ResumeOutcome {
    pub fn context(&self) -> &Context {
        match self {
            Self::Complete(context) => context,
            Self::Partial { context, .. } => context,
        }
    }
}

/// The onboarding workflow.
///
/// `start` and `resume` are sequential chains of suspending external calls;
/// no step begins before the previous one resolved, and status is written
/// strictly after the last step succeeds. A single logical attempt runs at a
/// time — callers serialize their own calls.
pub struct Onboarding {
    deps: OnboardingDeps,
    provisioner: IdentityProvisioner,
    builder: ConfigurationBuilder,
    session: SessionGateway,
    publisher: DirectoryPublisher,
}

impl Onboarding {
    pub fn new(deps: OnboardingDeps) -> Self {
        let provisioner = IdentityProvisioner::new(Arc::clone(&deps.bot), Arc::clone(&deps.crash));
        let builder = ConfigurationBuilder::new(deps.network);
        let session = SessionGateway::new(Arc::clone(&deps.bot), Arc::clone(&deps.crash));
        let publisher = DirectoryPublisher::new(
            Arc::clone(&deps.bot),
            Arc::clone(&deps.analytics),
            Arc::clone(&deps.crash),
        );
        Self {
            deps,
            provisioner,
            builder,
            session,
            publisher,
        }
    }

    /// Begin the identity registration process:
    ///
    /// 1. Validate birthdate and name, and require no active session.
    /// 2. Create a secret and identity.
    /// 3. Derive a configuration from the secret.
    /// 4. Log into the engine.
    /// 5. Publish the profile record.
    ///
    /// Only when all of that succeeded is the configuration persisted as
    /// current and [`OnboardingStatus::Started`] written — which is what
    /// allows onboarding to resume if the app is backgrounded or crashes.
    /// If any step fails, call [`Onboarding::reset`] before another attempt.
    ///
    /// Phone verification is retired; `_phone` is accepted for API
    /// compatibility and not validated.
    pub async fn start(
        &self,
        birthdate: NaiveDate,
        _phone: &str,
        name: &str,
    ) -> Result<Context, StartError> {
        let today = Utc::now().date_naive();
        if !validation::old_enough(birthdate, today, validation::MINIMUM_AGE_YEARS) {
            return Err(StartError::InvalidBirthdate);
        }
        if !validation::is_valid_name(name) {
            return Err(StartError::InvalidName);
        }
        if self.deps.bot.identity().await.is_some() {
            return Err(StartError::CannotOnboardWhileLoggedIn);
        }

        self.deps.analytics.track_onboarding_start();

        let secret = self.provisioner.provision().await?;
        debug!(identity = %secret.identity(), "Provisioned new identity");

        let configuration = self.builder.build(secret, name, Utc::now());

        // Nothing persisted yet: a login failure discards the configuration.
        self.session
            .login(&configuration)
            .await
            .map_err(StartError::Bot)?;

        let mut context =
            Context::from_configuration(&configuration, Arc::clone(&self.deps.bot));

        // On publish failure the session stays logged in and no status is
        // written; the caller is expected to `reset`.
        let about = self
            .publisher
            .publish(configuration.identity(), name)
            .await
            .map_err(StartError::Bot)?;

        self.did_start(&configuration, &about).await?;

        info!(identity = %context.identity, "Onboarding complete");
        context.about = Some(about);
        Ok(context)
    }

    /// Finalize a fully successful start: identify the user to the sinks,
    /// persist the configuration as current, and mark the identity started.
    async fn did_start(
        &self,
        configuration: &Configuration,
        about: &About,
    ) -> Result<(), StartError> {
        self.publisher.identify(about, configuration.network());

        self.deps.configs.apply(configuration).await?;
        self.deps
            .status
            .set_status(configuration.identity(), OnboardingStatus::Started)
            .await?;

        self.deps.analytics.track_onboarding_end();
        Ok(())
    }

    /// Undo the session/local side effects of a failed start attempt.
    ///
    /// Logs out of whatever session is active (a no-op when none is) and
    /// tells analytics to forget the user, then completes unconditionally.
    /// Never touches onboarding status: status is only written on a fully
    /// successful start, so a failed attempt has nothing to revert there.
    /// Safe and idempotent even if `start` never ran.
    pub async fn reset(&self) {
        self.session.logout().await;
        self.deps.analytics.forget();
    }

    /// Rebuild onboarding state after a process restart.
    ///
    /// Loads the current configuration, rebuilds a [`Context`] from it,
    /// re-establishes the session, and confirms the published profile
    /// record. Login and fetch failures return
    /// [`ResumeOutcome::Partial`] — the context is still usable and the
    /// caller can retry the failed step instead of starting over. The fetch
    /// failing is the expected partial-failure point: a prior attempt may
    /// have logged in but never published. Never writes onboarding status;
    /// it only re-derives in-memory state from persisted facts.
    pub async fn resume(&self) -> Result<ResumeOutcome, StartError> {
        let configuration = match self.deps.configs.current().await {
            Ok(Some(configuration)) => configuration,
            Ok(None) => return Err(StartError::ConfigurationFailed),
            Err(e) => {
                warn!(error = %e, "Failed to load current configuration");
                return Err(StartError::ConfigurationFailed);
            }
        };

        let mut context =
            Context::from_configuration(&configuration, Arc::clone(&self.deps.bot));

        if let Err(e) = self.session.login(&configuration).await {
            return Ok(ResumeOutcome::Partial {
                context,
                error: StartError::Bot(e),
            });
        }

        let fetched = self.publisher.fetch(&context.identity).await;
        match fetched {
            Ok(about) => {
                self.publisher.identify(&about, context.network);
                context.about = Some(about);
                Ok(ResumeOutcome::Complete(context))
            }
            Err(e) => Ok(ResumeOutcome::Partial {
                context,
                error: StartError::Bot(e),
            }),
        }
    }

    /// Onboarding status for `identity`, read from the durable store.
    pub async fn status(&self, identity: &Identity) -> Result<OnboardingStatus, StoreError> {
        self.deps.status.status(identity).await
    }
}
